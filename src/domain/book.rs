use crate::utils::error::{LabError, Result};
use crate::utils::validation::{expect_integer, validate_min};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    title: String,
    pages: i64,
    opened_page: Option<i64>,
}

impl Book {
    pub fn new(title: impl Into<String>, pages: impl Into<Value>) -> Result<Self> {
        let pages = expect_integer("pages", &pages.into())?;
        validate_min("pages", pages, 1)?;

        Ok(Self {
            title: title.into(),
            pages,
            opened_page: None,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn pages(&self) -> i64 {
        self.pages
    }

    /// Page the book was last opened at, if any.
    pub fn opened_page(&self) -> Option<i64> {
        self.opened_page
    }

    pub fn open_book(&mut self, page_number: impl Into<Value>) -> Result<()> {
        let page = expect_integer("page_number", &page_number.into())?;
        if !(1..=self.pages).contains(&page) {
            return Err(LabError::out_of_range(
                "page_number",
                page,
                format!("Page must be between 1 and {}", self.pages),
            ));
        }

        self.opened_page = Some(page);
        Ok(())
    }

    pub fn info(&self) -> String {
        format!("{} - {} pp.", self.title, self.pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorCategory;

    #[test]
    fn test_pages_validation() {
        assert_eq!(Book::new("Portrait", 120).unwrap().pages(), 120);

        let err = Book::new("Portrait", 0).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Invariant);
        let err = Book::new("Portrait", "120").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::TypeMismatch);
    }

    #[test]
    fn test_open_book() {
        let mut book = Book::new("Oblomov", 640).unwrap();
        assert_eq!(book.opened_page(), None);

        book.open_book(50).unwrap();
        assert_eq!(book.opened_page(), Some(50));
        book.open_book(1).unwrap();
        book.open_book(640).unwrap();
        assert_eq!(book.opened_page(), Some(640));

        for page in [0, 641] {
            let err = book.open_book(page).unwrap_err();
            assert_eq!(err.category(), ErrorCategory::Invariant);
        }
        let err = book.open_book("50").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::TypeMismatch);
        assert_eq!(book.opened_page(), Some(640));
    }

    #[test]
    fn test_info() {
        let book = Book::new("Martin Eden", 450).unwrap();
        assert_eq!(book.info(), "Martin Eden - 450 pp.");
    }
}
