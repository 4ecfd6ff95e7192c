use lazy_static::lazy_static;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use std::time::Duration;
use url::Url;

pub const NOTIFICATIONS_API_PATH: &str = "api/notifications";
pub const PROJECTS_API_PATH: &str = "api/projects";
pub const ASSIGNMENTS_API_PATH: &str = "assignments";
pub const NOTIFICATIONS_PAGE_LIMIT: u32 = 20;
pub const NOTIFICATIONS_AUTO_REFRESH_INTERVAL: Duration = Duration::from_secs(30);
pub const URI_COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

lazy_static! {
    pub static ref API_URL: Url =
        Url::parse("https://api.projectdesk.app").expect("API_URL parse failed");
}
