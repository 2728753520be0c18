//! Page-number pagination types.
//!
//! Discovery and list queries paginate with a 1-based page number and a page
//! size. The offset is always `(page - 1) * page_size`; results carry the
//! pre-pagination total so callers can compute whether a next page exists.

/// Raw pagination input as it arrives from the API layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageArgs {
    /// 1-based page number.
    pub page: Option<i32>,
    /// Items per page.
    pub page_size: Option<i32>,
}

impl PageArgs {
    pub fn new(page: Option<i32>, page_size: Option<i32>) -> Self {
        Self { page, page_size }
    }

    /// Validate pagination arguments.
    ///
    /// Page defaults to 1 and must be >= 1; page size defaults to 20 and is
    /// clamped to 1..=100.
    pub fn validate(&self) -> Result<ValidatedPage, &'static str> {
        let page = self.page.unwrap_or(1);
        if page < 1 {
            return Err("page must be >= 1");
        }

        let page_size = self.page_size.unwrap_or(20).clamp(1, 100);

        Ok(ValidatedPage { page, page_size })
    }
}

/// Validated and normalized pagination arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedPage {
    /// 1-based page number (>= 1).
    pub page: i32,
    /// Items per page (1-100).
    pub page_size: i32,
}

impl ValidatedPage {
    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        self.page_size as i64
    }

    /// Zero-based SQL OFFSET value: `(page - 1) * page_size`.
    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1) * self.page_size as i64
    }

    /// Whether more rows exist beyond this page, given the pre-pagination
    /// total.
    pub fn has_next_page(&self, total_count: i64) -> bool {
        self.offset() + self.limit() < total_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_applied() {
        let page = PageArgs::default().validate().unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 20);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn offset_is_page_minus_one_times_size() {
        for (page, size, expected) in [(1, 20, 0), (2, 20, 20), (3, 25, 50), (10, 7, 63)] {
            let validated = PageArgs::new(Some(page), Some(size)).validate().unwrap();
            assert_eq!(validated.offset(), expected);
        }
    }

    #[test]
    fn page_size_clamped() {
        let page = PageArgs::new(Some(1), Some(500)).validate().unwrap();
        assert_eq!(page.page_size, 100);

        let page = PageArgs::new(Some(1), Some(0)).validate().unwrap();
        assert_eq!(page.page_size, 1);
    }

    #[test]
    fn rejects_non_positive_page() {
        assert!(PageArgs::new(Some(0), None).validate().is_err());
        assert!(PageArgs::new(Some(-3), None).validate().is_err());
    }

    #[test]
    fn has_next_page_from_total() {
        let page = PageArgs::new(Some(1), Some(20)).validate().unwrap();
        assert!(page.has_next_page(21));
        assert!(!page.has_next_page(20));

        let page = PageArgs::new(Some(2), Some(20)).validate().unwrap();
        assert!(!page.has_next_page(40));
        assert!(page.has_next_page(41));
    }
}
