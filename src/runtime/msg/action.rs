use serde::Deserialize;

use crate::{
    models::{
        notification_feed::{AutoRefresh, Selected as NotificationFeedSelected},
        project_roster::Selected as ProjectRosterSelected,
    },
    types::{notifications::NotificationId, profile::Identity},
};

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum ActionCtx {
    /// Reported by the authentication provider, `None` once signed out.
    SetIdentity(Option<Identity>),
}

fn default_read() -> bool {
    true
}

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum ActionNotificationFeed {
    MarkAsRead {
        id: NotificationId,
        #[serde(default = "default_read")]
        read: bool,
    },
    /// Marks every unread notification of the current page, one request at a time.
    MarkAllAsRead,
    Refresh,
    GoToPage(u32),
    NextPage,
    PrevPage,
    /// `None` disables auto-refresh.
    SetAutoRefresh(Option<AutoRefresh>),
}

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum ActionProjectRoster {
    Refresh,
}

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "model", content = "args")]
pub enum ActionLoad {
    NotificationFeed(NotificationFeedSelected),
    ProjectRoster(ProjectRosterSelected),
}

/// Action messages
///
/// Those messages are meant to be dispatched only by the users of the
/// `projectdesk-core` crate and handled by the `projectdesk-core` crate.
#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum Action {
    Ctx(ActionCtx),
    NotificationFeed(ActionNotificationFeed),
    ProjectRoster(ActionProjectRoster),
    Load(ActionLoad),
    Unload,
}
