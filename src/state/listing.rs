use crate::models::{Blog, Language, Pagination, SortBy};
use crate::types::BlogListQuery;

/// Page, filter and sort selection of a paginated post list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingState {
    /// 1-based.
    pub page: u32,
    pub page_size: u32,
    /// `None` shows every language.
    pub language: Option<Language>,
    pub sort_by: SortBy,
    pub total: u64,
    pub total_pages: u32,
}

impl ListingState {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            language: None,
            sort_by: SortBy::Recent,
            total: 0,
            total_pages: 0,
        }
    }

    /// Changing the filter always starts over from the first page.
    pub fn set_language(&mut self, language: Option<Language>) {
        self.language = language;
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort_by: SortBy) {
        self.sort_by = sort_by;
        self.page = 1;
    }

    pub fn go_to(&mut self, page: u32) {
        self.page = page.clamp(1, self.last_page());
    }

    /// Records the totals of a fetched page.
    pub fn apply(&mut self, pagination: &Pagination) {
        self.total = pagination.total;
        self.total_pages = pagination.total_pages;
        if self.page > self.last_page() {
            self.page = self.last_page();
        }
    }

    fn last_page(&self) -> u32 {
        self.total_pages.max(1)
    }

    pub fn has_pages(&self) -> bool {
        self.total_pages > 1
    }

    pub fn page_numbers(&self) -> Vec<u32> {
        (1..=self.total_pages).collect()
    }

    /// `(first, last, total)` of the rows on the current page, 1-based.
    pub fn showing_range(&self) -> Option<(u64, u64, u64)> {
        if self.total == 0 {
            return None;
        }
        let page = u64::from(self.page);
        let size = u64::from(self.page_size);
        let first = ((page - 1) * size + 1).min(self.total);
        let last = (page * size).min(self.total);
        Some((first, last, self.total))
    }

    pub fn query(&self, published_only: bool) -> BlogListQuery {
        BlogListQuery {
            page: self.page,
            limit: self.page_size,
            published_only,
            language: self.language,
            sort_by: self.sort_by,
        }
    }
}

/// Summary cards on the admin dashboard, computed over the current page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub views: u64,
    pub drafts: usize,
    pub total: usize,
}

impl DashboardStats {
    pub fn from_blogs(blogs: &[Blog]) -> Self {
        Self {
            views: blogs.iter().map(|b| b.views_count).sum(),
            drafts: blogs.iter().filter(|b| !b.is_published).count(),
            total: blogs.len(),
        }
    }
}
