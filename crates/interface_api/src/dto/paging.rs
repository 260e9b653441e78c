//! Query parameters for paged listings

use serde::Deserialize;

use core_kernel::paging::DEFAULT_PAGE_SIZE;
use core_kernel::PageRequest;

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl From<PageParams> for PageRequest {
    fn from(params: PageParams) -> Self {
        PageRequest::new(params.page.unwrap_or(0), params.size.unwrap_or(DEFAULT_PAGE_SIZE))
    }
}
