use crate::types::project::AssignmentRecord;
use crate::types::profile::UserId;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct ProjectMember {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub role: Option<String>,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
}

impl ProjectMember {
    /// Flattens the embedded user of an assignment.
    ///
    /// Returns `None` for assignments without a user. The member role falls
    /// back to the assignment's role.
    pub fn from_assignment(assignment: &AssignmentRecord) -> Option<Self> {
        let user = assignment.user.as_ref()?;
        let full_name = [user.first_name.trim(), user.last_name.trim()]
            .iter()
            .filter(|name| !name.is_empty())
            .join(" ");
        Some(ProjectMember {
            id: user.id.to_owned(),
            first_name: user.first_name.to_owned(),
            last_name: user.last_name.to_owned(),
            full_name,
            email: user.email.to_owned(),
            role: user.role.to_owned().or_else(|| assignment.role.to_owned()),
            department: user.department.to_owned(),
            phone: user.phone.to_owned(),
            avatar_url: user.avatar_url.to_owned(),
        })
    }
}
