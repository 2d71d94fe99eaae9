//! Catalogue books: a read-only listing shared by paper and audio editions.

use crate::utils::error::{LabError, Result};
use crate::utils::validation::{expect_integer, expect_real, format_real, quoted, validate_min};
use serde_json::Value;
use std::fmt;

/// Name and author of a catalogued book. Neither changes after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct BookListing {
    name: String,
    author: String,
}

impl BookListing {
    pub fn new(name: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
        }
    }

    fn repr_head(&self, class_name: &str) -> String {
        format!(
            "{}(name={}, author={}",
            class_name,
            quoted(&self.name),
            quoted(&self.author)
        )
    }
}

pub trait Listing {
    fn listing(&self) -> &BookListing;

    fn name(&self) -> &str {
        &self.listing().name
    }

    fn author(&self) -> &str {
        &self.listing().author
    }

    fn description(&self) -> String {
        format!("Book {}. Author {}", self.name(), self.author())
    }
}

impl Listing for BookListing {
    fn listing(&self) -> &BookListing {
        self
    }
}

impl fmt::Display for BookListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

#[derive(Clone, PartialEq)]
pub struct PaperBook {
    listing: BookListing,
    pages: i64,
}

impl PaperBook {
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        pages: impl Into<Value>,
    ) -> Result<Self> {
        let mut book = Self {
            listing: BookListing::new(name, author),
            pages: 1,
        };
        book.set_pages(pages)?;
        Ok(book)
    }

    pub fn pages(&self) -> i64 {
        self.pages
    }

    pub fn set_pages(&mut self, pages: impl Into<Value>) -> Result<()> {
        let pages = expect_integer("pages", &pages.into())?;
        validate_min("pages", pages, 1)?;
        self.pages = pages;
        Ok(())
    }
}

impl Listing for PaperBook {
    fn listing(&self) -> &BookListing {
        &self.listing
    }
}

impl fmt::Display for PaperBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

impl fmt::Debug for PaperBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, pages={})",
            self.listing.repr_head("PaperBook"),
            self.pages
        )
    }
}

#[derive(Clone, PartialEq)]
pub struct AudioBook {
    listing: BookListing,
    duration: f64,
}

impl AudioBook {
    /// `duration` must be a real number; whole integers are rejected.
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        duration: impl Into<Value>,
    ) -> Result<Self> {
        let mut book = Self {
            listing: BookListing::new(name, author),
            duration: 1.0,
        };
        book.set_duration(duration)?;
        Ok(book)
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn set_duration(&mut self, duration: impl Into<Value>) -> Result<()> {
        let duration = expect_real("duration", &duration.into())?;
        if duration <= 0.0 {
            return Err(LabError::out_of_range(
                "duration",
                format_real(duration),
                "Duration must be positive",
            ));
        }
        self.duration = duration;
        Ok(())
    }
}

impl Listing for AudioBook {
    fn listing(&self) -> &BookListing {
        &self.listing
    }
}

impl fmt::Display for AudioBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

impl fmt::Debug for AudioBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, duration={})",
            self.listing.repr_head("AudioBook"),
            format_real(self.duration)
        )
    }
}
