use futures::future::Aborted;

use crate::{
    models::ctx::CtxError,
    types::{
        api::{NotificationReadRequest, NotificationsRequest},
        notifications::{NotificationId, NotificationsPage},
        profile::UserId,
        project::{ProjectId, ProjectMember},
    },
};

//
// Those messages are meant to be dispatched and handled only inside projectdesk-core crate
//
#[derive(Debug)]
pub enum Internal {
    /// Dispatched when the authenticated identity changed. Carries the previous user id.
    IdentityChanged(Option<UserId>),
    /// Result for fetching a page of notifications on behalf of a user.
    NotificationsResult(
        UserId,
        NotificationsRequest,
        Result<NotificationsPage, CtxError>,
    ),
    /// Result for marking a single notification.
    NotificationReadResult(NotificationReadRequest, Result<(), CtxError>),
    /// Result for marking all unread notifications.
    /// Carries the ids confirmed by the API and the failure that stopped the sequence.
    NotificationsBulkReadResult(Vec<NotificationId>, Option<(NotificationId, CtxError)>),
    /// The auto-refresh timer elapsed or was aborted.
    NotificationsAutoRefresh(Result<(), Aborted>),
    /// Result for fetching the assignments of a project on behalf of a user.
    ProjectMembersResult(UserId, ProjectId, Result<Vec<ProjectMember>, CtxError>),
}
