mod assignment;
pub use assignment::*;

mod project_member;
pub use project_member::*;
