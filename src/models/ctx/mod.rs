mod ctx;
pub use ctx::*;

mod error;
pub use error::*;
