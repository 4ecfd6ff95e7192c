use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    #[serde(alias = "hasMore")]
    pub has_more: bool,
}

impl Pagination {
    /// `ceil(total / limit)`, zero when nothing is available.
    pub fn total_pages(&self) -> u32 {
        if self.limit == 0 {
            return 0;
        }
        let pages = (self.total + u64::from(self.limit) - 1) / u64::from(self.limit);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
    /// Whether `page` can be navigated to from the current page.
    pub fn accepts_page(&self, current_page: u32, page: u32) -> bool {
        page >= 1 && page <= self.total_pages() && page != current_page
    }
}
