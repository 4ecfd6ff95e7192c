mod notification;
pub use notification::*;

mod notifications_page;
pub use notifications_page::*;

mod pagination;
pub use pagination::*;
