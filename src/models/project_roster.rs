use enclose::enclose;
use futures::FutureExt;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::common::eq_update;
use crate::models::ctx::{Ctx, CtxError};
use crate::runtime::msg::{Action, ActionLoad, ActionProjectRoster, Internal, Msg};
use crate::runtime::{Effect, EffectFuture, Effects, Env, EnvFutureExt, UpdateWithCtx};
use crate::types::api::{fetch_api, ProjectAssignmentsRequest};
use crate::types::profile::UserId;
use crate::types::project::{AssignmentsData, ProjectId, ProjectMember};

#[derive(Default, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Selected {
    #[serde(default)]
    pub project_id: Option<ProjectId>,
}

/// Team members of a project, derived from its assignment records.
#[derive(Default, Clone, PartialEq, Eq, Serialize, Debug)]
pub struct ProjectRoster {
    pub selected: Option<Selected>,
    pub members: Vec<ProjectMember>,
    pub loading: bool,
    pub error: Option<CtxError>,
}

impl ProjectRoster {
    fn project_id(&self) -> Option<&ProjectId> {
        self.selected
            .as_ref()
            .and_then(|selected| selected.project_id.as_ref())
    }
}

impl<E: Env + 'static> UpdateWithCtx<E> for ProjectRoster {
    fn update(&mut self, msg: &Msg, ctx: &Ctx) -> Effects {
        match msg {
            Msg::Action(Action::Load(ActionLoad::ProjectRoster(selected))) => {
                let project_changed = self.project_id() != selected.project_id.as_ref();
                let members_effects = if project_changed {
                    eq_update(&mut self.members, vec![])
                } else {
                    Effects::none().unchanged()
                };
                let selected_effects = eq_update(&mut self.selected, Some(selected.to_owned()));
                let load_effects = load_members::<E>(self, ctx);
                members_effects.join(selected_effects).join(load_effects)
            }
            Msg::Action(Action::ProjectRoster(ActionProjectRoster::Refresh))
                if self.selected.is_some() =>
            {
                load_members::<E>(self, ctx)
            }
            Msg::Action(Action::Unload) => eq_update(self, ProjectRoster::default()),
            Msg::Internal(Internal::IdentityChanged(previous_user_id))
                if self.selected.is_some() =>
            {
                let members_effects = if previous_user_id.as_ref() != ctx.user_id() {
                    eq_update(&mut self.members, vec![])
                } else {
                    Effects::none().unchanged()
                };
                members_effects.join(load_members::<E>(self, ctx))
            }
            Msg::Internal(Internal::ProjectMembersResult(user_id, project_id, result))
                if ctx.user_id() == Some(user_id) && self.project_id() == Some(project_id) =>
            {
                let loading_effects = eq_update(&mut self.loading, false);
                let state_effects = match result {
                    Ok(members) => {
                        let members_effects = eq_update(&mut self.members, members.to_owned());
                        let error_effects = eq_update(&mut self.error, None);
                        members_effects.join(error_effects)
                    }
                    Err(error) => {
                        warn!(%project_id, "Failed to fetch project members: {error}");
                        let members_effects = eq_update(&mut self.members, vec![]);
                        let error_effects = eq_update(&mut self.error, Some(error.to_owned()));
                        members_effects.join(error_effects)
                    }
                };
                loading_effects.join(state_effects)
            }
            _ => Effects::none().unchanged(),
        }
    }
}

/// Without a project or an authenticated user the roster is simply empty.
fn load_members<E: Env + 'static>(roster: &mut ProjectRoster, ctx: &Ctx) -> Effects {
    match (roster.project_id().cloned(), ctx.user_id().cloned()) {
        (Some(project_id), Some(user_id)) => {
            let loading_effects = eq_update(&mut roster.loading, true);
            let error_effects = eq_update(&mut roster.error, None);
            Effects::one(fetch_members::<E>(user_id, project_id))
                .unchanged()
                .join(loading_effects)
                .join(error_effects)
        }
        _ => {
            let members_effects = eq_update(&mut roster.members, vec![]);
            let loading_effects = eq_update(&mut roster.loading, false);
            let error_effects = eq_update(&mut roster.error, None);
            members_effects.join(loading_effects).join(error_effects)
        }
    }
}

fn fetch_members<E: Env + 'static>(user_id: UserId, project_id: ProjectId) -> Effect {
    let request = ProjectAssignmentsRequest {
        project_id: project_id.to_owned(),
    };
    EffectFuture::Concurrent(
        fetch_api::<E, _, ()>(&request)
            .map(enclose!((project_id) move |result| {
                let result = result.and_then(|response| {
                    let data = response.data::<AssignmentsData>()?;
                    let members = data
                        .assignments
                        .iter()
                        .filter_map(ProjectMember::from_assignment)
                        .collect::<Vec<_>>();
                    if members.len() < data.assignments.len() {
                        debug!(
                            %project_id,
                            skipped = data.assignments.len() - members.len(),
                            "Assignments without a user"
                        );
                    }
                    Ok(members)
                });
                Msg::Internal(Internal::ProjectMembersResult(user_id, project_id, result))
            }))
            .boxed_env(),
    )
    .into()
}
