use crate::models::common::eq_update;
use crate::runtime::msg::{Action, ActionCtx, Event, Internal, Msg};
use crate::runtime::{Effects, Env, Update};
use crate::types::profile::{Identity, UserId};
use serde::Serialize;
use tracing::debug;

/// Authentication context shared by all models.
#[derive(Default, PartialEq, Eq, Serialize, Clone, Debug)]
pub struct Ctx {
    pub identity: Option<Identity>,
}

impl Ctx {
    pub fn new(identity: Option<Identity>) -> Self {
        Self { identity }
    }
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
    pub fn user_id(&self) -> Option<&UserId> {
        self.identity.as_ref().map(|identity| &identity.id)
    }
}

impl<E: Env + 'static> Update<E> for Ctx {
    fn update(&mut self, msg: &Msg) -> Effects {
        match msg {
            Msg::Action(Action::Ctx(ActionCtx::SetIdentity(identity))) => {
                let previous_user_id = self.user_id().cloned();
                let identity_effects = eq_update(&mut self.identity, identity.to_owned());
                if identity_effects.has_changed {
                    let user_id = self.user_id().cloned();
                    debug!(?previous_user_id, ?user_id, "Identity changed");
                    Effects::msgs(vec![
                        Msg::Internal(Internal::IdentityChanged(previous_user_id)),
                        Msg::Event(Event::IdentityChanged { user_id }),
                    ])
                    .unchanged()
                    .join(identity_effects)
                } else {
                    identity_effects
                }
            }
            _ => Effects::none().unchanged(),
        }
    }
}
