//! Page-at-a-time listing
//!
//! List endpoints return a page envelope whose `content` holds the records,
//! alongside enough totals for a client to render pagination.

use serde::{Deserialize, Serialize};

/// Default number of records per page
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest page a caller may ask for
pub const MAX_PAGE_SIZE: u32 = 200;

/// A zero-based page request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Creates a page request, clamping the size to `1..=MAX_PAGE_SIZE`
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size: size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn offset(&self) -> usize {
        self.page as usize * self.size as usize
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub number: u32,
    pub size: u32,
}

impl<T> Page<T> {
    /// Cuts the requested page out of an already ordered list
    pub fn slice(items: Vec<T>, request: PageRequest) -> Self {
        let total = items.len();
        let size = request.size.max(1);
        let total_pages = total.div_ceil(size as usize) as u32;
        let content = items
            .into_iter()
            .skip(request.offset())
            .take(size as usize)
            .collect();

        Self {
            content,
            total_elements: total as u64,
            total_pages,
            number: request.page,
            size,
        }
    }

    /// Transforms every element, keeping the paging totals
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number: self.number,
            size: self.size,
        }
    }

    /// Transforms every element with a fallible function, stopping at the first error
    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Page<U>, E> {
        Ok(Page {
            content: self.content.into_iter().map(f).collect::<Result<_, _>>()?,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number: self.number,
            size: self.size,
        })
    }
}
