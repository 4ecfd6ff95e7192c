use serde::{Deserialize, Serialize};

pub type UserId = String;

/// The authenticated user as reported by the authentication provider.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[cfg_attr(test, derive(Default))]
pub struct Identity {
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}
