use crate::constants::{
    API_URL, ASSIGNMENTS_API_PATH, NOTIFICATIONS_API_PATH, NOTIFICATIONS_PAGE_LIMIT,
    PROJECTS_API_PATH, URI_COMPONENT_ENCODE_SET,
};
use crate::types::notifications::{NotificationCategory, NotificationId};
use crate::types::project::ProjectId;
use crate::types::query_params_encode;
use derivative::Derivative;
use http::Method;
use percent_encoding::utf8_percent_encode;
use serde::{Deserialize, Serialize};
use url::Url;

pub trait FetchRequestParams<T> {
    fn endpoint(&self) -> Url;
    fn method(&self) -> Method;
    fn path(&self) -> String;
    fn query(&self) -> Option<String>;
    fn body(self) -> T;
}

/// A page of the current user's notifications, optionally filtered.
#[derive(Derivative, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[derivative(Default)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsRequest {
    #[derivative(Default(value = "1"))]
    #[serde(default = "default_page")]
    pub page: u32,
    #[derivative(Default(value = "NOTIFICATIONS_PAGE_LIMIT"))]
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub category: Option<NotificationCategory>,
    #[serde(default)]
    pub read: Option<bool>,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    NOTIFICATIONS_PAGE_LIMIT
}

impl NotificationsRequest {
    /// Only the parameters that are set, in a stable order.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut query_params = vec![("page", self.page.to_string()), ("limit", self.limit.to_string())];
        if let Some(category) = &self.category {
            query_params.push(("category", category.to_string()));
        }
        if let Some(read) = self.read {
            query_params.push(("read", read.to_string()));
        }
        query_params
    }
}

impl FetchRequestParams<()> for NotificationsRequest {
    fn endpoint(&self) -> Url {
        API_URL.to_owned()
    }
    fn method(&self) -> Method {
        Method::GET
    }
    fn path(&self) -> String {
        NOTIFICATIONS_API_PATH.to_owned()
    }
    fn query(&self) -> Option<String> {
        Some(query_params_encode(self.query_params()))
    }
    fn body(self) {}
}

#[derive(Clone, PartialEq, Eq, Serialize, Debug)]
pub struct NotificationReadBody {
    pub read: bool,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct NotificationReadRequest {
    pub id: NotificationId,
    pub read: bool,
}

impl FetchRequestParams<NotificationReadBody> for NotificationReadRequest {
    fn endpoint(&self) -> Url {
        API_URL.to_owned()
    }
    fn method(&self) -> Method {
        Method::PATCH
    }
    fn path(&self) -> String {
        format!(
            "{}/{}",
            NOTIFICATIONS_API_PATH,
            utf8_percent_encode(&self.id, URI_COMPONENT_ENCODE_SET)
        )
    }
    fn query(&self) -> Option<String> {
        None
    }
    fn body(self) -> NotificationReadBody {
        NotificationReadBody { read: self.read }
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAssignmentsRequest {
    pub project_id: ProjectId,
}

impl FetchRequestParams<()> for ProjectAssignmentsRequest {
    fn endpoint(&self) -> Url {
        API_URL.to_owned()
    }
    fn method(&self) -> Method {
        Method::GET
    }
    fn path(&self) -> String {
        format!(
            "{}/{}/{}",
            PROJECTS_API_PATH,
            utf8_percent_encode(&self.project_id, URI_COMPONENT_ENCODE_SET),
            ASSIGNMENTS_API_PATH
        )
    }
    fn query(&self) -> Option<String> {
        None
    }
    fn body(self) {}
}
