use crate::types::empty_string_as_none;
use crate::types::profile::UserId;
use serde::{Deserialize, Serialize};

pub type ProjectId = String;

/// The user embedded in an assignment record.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct AssignedUser {
    pub id: UserId,
    #[serde(default, alias = "firstName")]
    pub first_name: String,
    #[serde(default, alias = "lastName")]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub phone: Option<String>,
    #[serde(
        default,
        alias = "avatarUrl",
        deserialize_with = "empty_string_as_none"
    )]
    pub avatar_url: Option<String>,
}

/// Links a user to a project role.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct AssignmentRecord {
    pub id: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub user: Option<AssignedUser>,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct AssignmentsData {
    pub assignments: Vec<AssignmentRecord>,
}
