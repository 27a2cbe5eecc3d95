use std::io::Write;

use serde::Serialize;

use crate::{
    config::OutputFormat,
    error::Result,
    library::{BookListing, Library, UserListing},
};

/// Writes listings in the configured format
#[derive(Debug, Clone, Copy, Default)]
pub struct Report {
    /// Text or JSON lines
    format: OutputFormat,
}

impl Report {
    /// Create a report writer for `format`
    #[must_use]
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Write every book, or `No books available!`
    ///
    /// # Errors
    ///
    /// Fails if writing to `out` or JSON encoding fails.
    pub fn books<W: Write>(&self, out: &mut W, listing: BookListing<'_>) -> Result<()> {
        if listing.is_empty() {
            writeln!(out, "No books available!")?;
            return Ok(());
        }
        match self.format {
            OutputFormat::Text => write!(out, "{listing}")?,
            OutputFormat::Json => write_json_lines(out, listing)?,
        }
        Ok(())
    }

    /// Write every user, or `No users available!`
    ///
    /// # Errors
    ///
    /// Fails if writing to `out` or JSON encoding fails.
    pub fn users<W: Write>(&self, out: &mut W, listing: UserListing<'_>) -> Result<()> {
        if listing.is_empty() {
            writeln!(out, "No users available!")?;
            return Ok(());
        }
        match self.format {
            OutputFormat::Text => write!(out, "{listing}")?,
            OutputFormat::Json => write_json_lines(out, listing)?,
        }
        Ok(())
    }

    /// Write the recorded transaction history, oldest first
    ///
    /// # Errors
    ///
    /// Fails if writing to `out` or JSON encoding fails.
    pub fn transactions<W: Write>(&self, out: &mut W, library: &Library) -> Result<()> {
        if library.transactions().len() == 0 {
            writeln!(out, "No transactions recorded!")?;
            return Ok(());
        }
        match self.format {
            OutputFormat::Text => {
                for transaction in library.transactions() {
                    writeln!(out, "{transaction}")?;
                }
            }
            OutputFormat::Json => write_json_lines(out, library.transactions())?,
        }
        Ok(())
    }
}

/// One compact JSON document per line
fn write_json_lines<W, I, T>(out: &mut W, items: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = T>,
    T: Serialize,
{
    for item in items {
        serde_json::to_writer(&mut *out, &item)?;
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[allow(clippy::unwrap_used)]
    fn render(format: OutputFormat, library: &Library) -> String {
        let report = Report::new(format);
        let mut out = Vec::new();
        report.books(&mut out, library.list_all_books()).unwrap();
        report.users(&mut out, library.list_all_users()).unwrap();
        report.transactions(&mut out, library).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_library_reports_messages_in_both_formats() {
        let library = Library::new();
        let expected = "No books available!\nNo users available!\nNo transactions recorded!\n";
        assert_eq!(render(OutputFormat::Text, &library), expected);
        assert_eq!(render(OutputFormat::Json, &library), expected);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn text_format_uses_display_lines() {
        let mut library = Library::new();
        library.add_book("T", "A", "I");
        library.add_user(2, "Bob").unwrap();
        library.check_out_book("T", "A", "I").unwrap();

        assert_eq!(
            render(OutputFormat::Text, &library),
            "Title: T, Author: A, ISBN: I, Available: No\n\
             [Faculty] Name: Bob, UserID: 1\n\
             Check Out: Title: T, Author: A, ISBN: I (Available -> CheckedOut)\n"
        );
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn json_format_emits_one_object_per_line() {
        let mut library = Library::new();
        library.add_book("T", "A", "I");
        library.add_user(1, "Alice").unwrap();

        let rendered = render(OutputFormat::Json, &library);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#"{"title":"T","author":"A","isbn":"I","availability":"Available"}"#,
                r#"{"id":1,"name":"Alice","role":"Student"}"#,
                "No transactions recorded!",
            ]
        );
    }
}
