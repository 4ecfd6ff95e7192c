use serde::{Deserialize, Serialize};

use crate::models::ctx::Ctx;
use crate::models::notification_feed::NotificationFeed;
use crate::models::project_roster::ProjectRoster;
use crate::runtime::msg::Msg;
use crate::runtime::{Effect, Effects, Env, Model, Update, UpdateWithCtx};
use crate::types::profile::Identity;

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum AppModelField {
    Ctx,
    NotificationFeed,
    ProjectRoster,
}

/// Everything a UI shell renders. Drive it through a [`Runtime`].
///
/// [`Runtime`]: crate::runtime::Runtime
#[derive(Default, Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AppModel {
    pub ctx: Ctx,
    pub notification_feed: NotificationFeed,
    pub project_roster: ProjectRoster,
}

impl AppModel {
    pub fn new(identity: Option<Identity>) -> Self {
        AppModel {
            ctx: Ctx::new(identity),
            ..AppModel::default()
        }
    }
}

impl<E: Env + 'static> Model<E> for AppModel {
    type Field = AppModelField;

    fn update(&mut self, msg: &Msg) -> (Vec<Effect>, Vec<Self::Field>) {
        let ctx_effects = Update::<E>::update(&mut self.ctx, msg);
        let notification_feed_effects =
            UpdateWithCtx::<E>::update(&mut self.notification_feed, msg, &self.ctx);
        let project_roster_effects =
            UpdateWithCtx::<E>::update(&mut self.project_roster, msg, &self.ctx);
        collect_changes(vec![
            (AppModelField::Ctx, ctx_effects),
            (AppModelField::NotificationFeed, notification_feed_effects),
            (AppModelField::ProjectRoster, project_roster_effects),
        ])
    }
    fn update_field(&mut self, msg: &Msg, field: &Self::Field) -> (Vec<Effect>, Vec<Self::Field>) {
        let effects = match field {
            AppModelField::Ctx => Update::<E>::update(&mut self.ctx, msg),
            AppModelField::NotificationFeed => {
                UpdateWithCtx::<E>::update(&mut self.notification_feed, msg, &self.ctx)
            }
            AppModelField::ProjectRoster => {
                UpdateWithCtx::<E>::update(&mut self.project_roster, msg, &self.ctx)
            }
        };
        collect_changes(vec![(*field, effects)])
    }
}

fn collect_changes(
    updates: Vec<(AppModelField, Effects)>,
) -> (Vec<Effect>, Vec<AppModelField>) {
    updates.into_iter().fold(
        (vec![], vec![]),
        |(mut effects, mut fields), (field, field_effects)| {
            if field_effects.has_changed {
                fields.push(field);
            }
            effects.extend(field_effects);
            (effects, fields)
        },
    )
}
