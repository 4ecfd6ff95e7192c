mod eq_update;
pub use eq_update::*;
