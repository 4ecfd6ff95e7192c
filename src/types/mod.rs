pub mod api;
pub mod notifications;
pub mod profile;
pub mod project;

mod empty_string_as_none;
pub use empty_string_as_none::*;

mod query_params_encode;
pub use query_params_encode::*;
