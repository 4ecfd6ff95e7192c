pub mod app;
pub mod common;
pub mod ctx;
pub mod notification_feed;
pub mod project_roster;
