use serde::Serialize;

use crate::{
    models::ctx::CtxError,
    types::{notifications::NotificationId, profile::UserId},
};

///
/// Those messages are meant to be dispatched by the `projectdesk-core` crate and
/// handled by the users of the `projectdesk-core` crate.
#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(tag = "event", content = "args")]
pub enum Event {
    IdentityChanged {
        user_id: Option<UserId>,
    },
    NotificationMarkedAsRead {
        id: NotificationId,
        read: bool,
    },
    AllNotificationsMarkedAsRead {
        ids: Vec<NotificationId>,
    },
    /// A mutation failed. `source` is the event the mutation would have emitted.
    Error {
        error: CtxError,
        source: Box<Event>,
    },
}
