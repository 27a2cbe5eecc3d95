use std::fmt;

use serde::Serialize;

/// Availability of a single book copy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Availability {
    /// Book is on the shelf
    #[default]
    Available,
    /// Book is checked out
    CheckedOut,
}

impl Availability {
    /// Short label used in book listings
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Yes",
            Self::CheckedOut => "No",
        }
    }

    /// Get a human-readable description of the state
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Available => "Book is available for checkout",
            Self::CheckedOut => "Book is checked out",
        }
    }
}

/// A book held by the library
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    /// Title as entered
    title: String,
    /// Author as entered
    author: String,
    /// Identifier as entered; not used for matching
    isbn: String,
    /// Current availability
    availability: Availability,
}

impl Book {
    /// Create a new book, initially available
    #[must_use]
    pub fn new(title: impl Into<String>, author: impl Into<String>, isbn: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            availability: Availability::Available,
        }
    }

    /// Get the book's title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the book's author
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Get the identifier entered when the book was added
    #[must_use]
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// Get the current availability
    #[must_use]
    pub fn availability(&self) -> Availability {
        self.availability
    }

    /// Whether the book can be checked out
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }

    /// Whether this book matches a lookup key
    pub(crate) fn matches(&self, title: &str, author: &str) -> bool {
        self.title == title && self.author == author
    }

    /// Mark the book as checked out. Ungated: callers check availability first.
    pub(crate) fn check_out(&mut self) {
        self.availability = Availability::CheckedOut;
    }

    /// Mark the book as available. Ungated: callers check availability first.
    pub(crate) fn check_in(&mut self) {
        self.availability = Availability::Available;
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, ISBN: {}, Available: {}",
            self.title,
            self.author,
            self.isbn,
            self.availability.label()
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn new_book_is_available() {
        let book = Book::new("Dune", "Frank Herbert", "978-0441013593");
        assert!(book.is_available());
        assert_eq!(book.availability(), Availability::Available);
    }

    #[test]
    fn display_matches_listing_format() {
        let mut book = Book::new("Dune", "Frank Herbert", "978-0441013593");
        assert_eq!(
            book.to_string(),
            "Title: Dune, Author: Frank Herbert, ISBN: 978-0441013593, Available: Yes"
        );

        book.check_out();
        assert_eq!(
            book.to_string(),
            "Title: Dune, Author: Frank Herbert, ISBN: 978-0441013593, Available: No"
        );
    }

    #[test]
    fn raw_mutators_are_unconditional() {
        let mut book = Book::new("T", "A", "I");
        book.check_out();
        book.check_out();
        assert!(!book.is_available());
        book.check_in();
        book.check_in();
        assert!(book.is_available());
    }

    #[test]
    fn matching_ignores_isbn() {
        let book = Book::new("T", "A", "I-1");
        assert!(book.matches("T", "A"));
        assert!(!book.matches("T", "B"));
        assert!(!book.matches("t", "A"));
    }
}
