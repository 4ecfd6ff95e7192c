mod access_token;
pub use access_token::*;

mod identity;
pub use identity::*;
