use crate::models::ctx::FormatError;
use crate::types::api::{ApiResponse, NotificationsRequest};
use crate::types::notifications::{Notification, Pagination};
use serde::Serialize;

/// One successfully fetched page of notifications.
#[derive(Clone, PartialEq, Eq, Serialize, Debug)]
pub struct NotificationsPage {
    pub notifications: Vec<Notification>,
    pub pagination: Pagination,
}

impl NotificationsPage {
    /// When the response has no pagination it is derived from the request
    /// and the number of notifications received.
    pub fn from_response(
        request: &NotificationsRequest,
        response: &ApiResponse,
    ) -> Result<Self, FormatError> {
        let notifications = response.data::<Vec<Notification>>()?;
        let pagination = response
            .pagination::<Pagination>()?
            .unwrap_or_else(|| Pagination {
                page: request.page,
                limit: request.limit,
                total: notifications.len() as u64,
                has_more: false,
            });
        Ok(NotificationsPage {
            notifications,
            pagination,
        })
    }
}
