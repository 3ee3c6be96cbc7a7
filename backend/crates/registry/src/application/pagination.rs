//! Pagination
//!
//! Page arithmetic for ordered listings. An empty listing still has one
//! (empty) first page; any other out-of-range page is an error.

use crate::error::{RegistryError, RegistryResult};

/// Page selected by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    /// 1-based page number
    Number(u64),
    Last,
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest::Number(1)
    }
}

impl PageRequest {
    /// Parse a `page` query value: a positive integer or `last`.
    /// A missing value selects the first page.
    pub fn parse(raw: Option<&str>) -> RegistryResult<Self> {
        let Some(raw) = raw else {
            return Ok(Self::default());
        };

        let raw = raw.trim();
        if raw == "last" {
            return Ok(PageRequest::Last);
        }

        let number: i64 = raw.parse().map_err(|_| {
            RegistryError::PageNotFound("That page number is not an integer".to_string())
        })?;
        if number < 1 {
            return Err(RegistryError::PageNotFound(
                "That page number is less than 1".to_string(),
            ));
        }

        Ok(PageRequest::Number(number as u64))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    per_page: u64,
}

impl Paginator {
    pub fn new(per_page: u64) -> Self {
        Self {
            per_page: per_page.max(1),
        }
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    pub fn num_pages(&self, count: u64) -> u64 {
        count.div_ceil(self.per_page).max(1)
    }

    /// Resolve the requested page against `count` matching records.
    pub fn page(&self, request: PageRequest, count: u64) -> RegistryResult<PageInfo> {
        let num_pages = self.num_pages(count);
        let number = match request {
            PageRequest::Number(n) => n,
            PageRequest::Last => num_pages,
        };

        if number < 1 {
            return Err(RegistryError::PageNotFound(
                "That page number is less than 1".to_string(),
            ));
        }
        if number > num_pages {
            return Err(RegistryError::PageNotFound(
                "That page contains no results".to_string(),
            ));
        }

        Ok(PageInfo {
            number,
            num_pages,
            per_page: self.per_page,
            count,
        })
    }
}

/// Resolved page position within a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub number: u64,
    pub num_pages: u64,
    pub per_page: u64,
    /// Records across all pages
    pub count: u64,
}

impl PageInfo {
    pub fn offset(&self) -> u64 {
        (self.number - 1) * self.per_page
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn next_page_number(&self) -> Option<u64> {
        self.has_next().then(|| self.number + 1)
    }

    pub fn previous_page_number(&self) -> Option<u64> {
        self.has_previous().then(|| self.number - 1)
    }

    /// 1-based index of the first record on this page; 0 when empty.
    pub fn start_index(&self) -> u64 {
        if self.count == 0 {
            0
        } else {
            self.offset() + 1
        }
    }

    /// 1-based index of the last record on this page.
    pub fn end_index(&self) -> u64 {
        if self.number == self.num_pages {
            self.count
        } else {
            self.number * self.per_page
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_request() {
        assert_eq!(PageRequest::parse(None).unwrap(), PageRequest::Number(1));
        assert_eq!(PageRequest::parse(Some("3")).unwrap(), PageRequest::Number(3));
        assert_eq!(PageRequest::parse(Some("last")).unwrap(), PageRequest::Last);
        assert!(PageRequest::parse(Some("0")).is_err());
        assert!(PageRequest::parse(Some("-2")).is_err());
        assert!(PageRequest::parse(Some("two")).is_err());
    }

    #[test]
    fn test_empty_listing_has_one_page() {
        let paginator = Paginator::new(20);
        let page = paginator.page(PageRequest::Number(1), 0).unwrap();
        assert_eq!(page.num_pages, 1);
        assert_eq!(page.start_index(), 0);
        assert_eq!(page.end_index(), 0);
        assert!(!page.has_next());
        assert!(!page.has_previous());

        assert!(paginator.page(PageRequest::Number(2), 0).is_err());
    }

    #[test]
    fn test_page_math() {
        let paginator = Paginator::new(20);
        assert_eq!(paginator.num_pages(20), 1);
        assert_eq!(paginator.num_pages(21), 2);
        assert_eq!(paginator.num_pages(45), 3);

        let page = paginator.page(PageRequest::Number(2), 45).unwrap();
        assert_eq!(page.offset(), 20);
        assert_eq!(page.start_index(), 21);
        assert_eq!(page.end_index(), 40);
        assert_eq!(page.next_page_number(), Some(3));
        assert_eq!(page.previous_page_number(), Some(1));

        let last = paginator.page(PageRequest::Last, 45).unwrap();
        assert_eq!(last.number, 3);
        assert_eq!(last.start_index(), 41);
        assert_eq!(last.end_index(), 45);
        assert_eq!(last.next_page_number(), None);
    }

    #[test]
    fn test_page_past_end() {
        let err = Paginator::new(20)
            .page(PageRequest::Number(4), 45)
            .unwrap_err();
        assert!(matches!(err, RegistryError::PageNotFound(_)));
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        assert_eq!(Paginator::new(0).per_page(), 1);
    }
}
