//! Line-oriented text menu driving the catalog.
//!
//! The menu never owns the library; it borrows the single instance built by
//! the caller. Input and output are generic so sessions can be scripted.

use std::io::{BufRead, Write};

use colored::Colorize;

use crate::{
    config::Config,
    error::Result,
    library::Library,
    report::Report,
};

/// What the user typed at a numeric prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    /// A parsed integer
    Number(i64),
    /// Something that is not an integer
    Invalid,
    /// Input stream closed
    Eof,
}

/// Whether a submenu returned normally or ran out of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Back to the main menu
    Back,
    /// Input closed; leave the program
    Quit,
}

/// Interactive menu over a borrowed `Library`
#[derive(Debug)]
pub struct Menu<'a, R, W> {
    /// The one registry for this process
    library: &'a mut Library,
    /// Source of menu choices and field values
    input: R,
    /// Prompts, confirmations and listings
    output: W,
    /// Listing renderer
    report: Report,
    /// Whether headings are colored
    color: bool,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// Create a menu over `library` reading from `input` and printing to `output`
    #[must_use]
    pub fn new(library: &'a mut Library, input: R, output: W, config: &Config) -> Self {
        Self { library, input, output, report: Report::new(config.format), color: config.color }
    }

    /// Run the main menu until the user exits or input ends
    ///
    /// # Errors
    ///
    /// Only IO and JSON encoding failures escape; catalog errors are printed
    /// and the menu continues.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.heading("\nLibrary Management System")?;
            writeln!(self.output, "1. Manage Books")?;
            writeln!(self.output, "2. Manage Users")?;
            writeln!(self.output, "3. Manage Transactions")?;
            writeln!(self.output, "4. Exit")?;

            let flow = match self.read_choice("Enter your choice: ")? {
                Choice::Eof => Flow::Quit,
                Choice::Invalid => {
                    writeln!(self.output, "Invalid input, try again.")?;
                    Flow::Back
                }
                Choice::Number(1) => self.books_menu()?,
                Choice::Number(2) => self.users_menu()?,
                Choice::Number(3) => self.transactions_menu()?,
                Choice::Number(4) => Flow::Quit,
                Choice::Number(other) => {
                    tracing::debug!(choice = other, "unknown main menu option");
                    writeln!(self.output, "Invalid option. Try again!")?;
                    Flow::Back
                }
            };

            if flow == Flow::Quit {
                writeln!(self.output, "Exiting program...")?;
                self.output.flush()?;
                return Ok(());
            }
        }
    }

    /// Add and list books
    fn books_menu(&mut self) -> Result<Flow> {
        loop {
            self.heading("\nManage Books")?;
            writeln!(self.output, "1. Add Book")?;
            writeln!(self.output, "2. List Books")?;
            writeln!(self.output, "3. Back")?;

            match self.read_choice("Enter your choice: ")? {
                Choice::Eof => return Ok(Flow::Quit),
                Choice::Invalid => writeln!(self.output, "Invalid input, try again.")?,
                Choice::Number(1) => {
                    let Some((title, author, isbn)) = self.read_book_fields()? else {
                        return Ok(Flow::Quit);
                    };
                    self.library.add_book(&title, &author, &isbn);
                    writeln!(self.output, "Book added successfully!")?;
                }
                Choice::Number(2) => {
                    self.report.books(&mut self.output, self.library.list_all_books())?;
                }
                Choice::Number(3) => return Ok(Flow::Back),
                Choice::Number(_) => {}
            }
        }
    }

    /// Add and list users
    fn users_menu(&mut self) -> Result<Flow> {
        loop {
            self.heading("\nManage Users")?;
            writeln!(self.output, "1. Add User")?;
            writeln!(self.output, "2. List Users")?;
            writeln!(self.output, "3. Back")?;

            match self.read_choice("Enter your choice: ")? {
                Choice::Eof => return Ok(Flow::Quit),
                Choice::Invalid => writeln!(self.output, "Invalid input, try again.")?,
                Choice::Number(1) => {
                    if self.add_user()? == Flow::Quit {
                        return Ok(Flow::Quit);
                    }
                }
                Choice::Number(2) => {
                    self.report.users(&mut self.output, self.library.list_all_users())?;
                }
                Choice::Number(3) => return Ok(Flow::Back),
                Choice::Number(_) => {}
            }
        }
    }

    /// Prompt for a selector and a name, then register the user
    fn add_user(&mut self) -> Result<Flow> {
        let selector = match self.read_choice("Enter 1 for Student, 2 for Faculty: ")? {
            Choice::Eof => return Ok(Flow::Quit),
            Choice::Invalid => {
                writeln!(self.output, "Invalid input, try again.")?;
                return Ok(Flow::Back);
            }
            Choice::Number(selector) => selector,
        };
        let Some(name) = self.read_field("Enter Name: ")? else {
            return Ok(Flow::Quit);
        };

        let message = match self.library.add_user(selector, &name) {
            Ok(id) => format!("User added successfully! UserID: {id}"),
            Err(err) if err.is_user_facing() => err.to_string(),
            Err(err) => return Err(err),
        };
        writeln!(self.output, "{message}")?;
        Ok(Flow::Back)
    }

    /// Check books out and in, and show the history
    fn transactions_menu(&mut self) -> Result<Flow> {
        loop {
            self.heading("\nManage Transactions")?;
            writeln!(self.output, "1. Check Out Book")?;
            writeln!(self.output, "2. Check In Book")?;
            writeln!(self.output, "3. Back")?;
            writeln!(self.output, "4. Transaction History")?;

            match self.read_choice("Enter your choice: ")? {
                Choice::Eof => return Ok(Flow::Quit),
                Choice::Invalid => writeln!(self.output, "Invalid input, try again.")?,
                Choice::Number(1) => {
                    let Some((title, author, isbn)) = self.read_book_fields()? else {
                        return Ok(Flow::Quit);
                    };
                    let outcome = self.library.check_out_book(&title, &author, &isbn).map(|_| ());
                    self.report_outcome(outcome, "Book checked out successfully!")?;
                }
                Choice::Number(2) => {
                    let Some((title, author, isbn)) = self.read_book_fields()? else {
                        return Ok(Flow::Quit);
                    };
                    let outcome = self.library.check_in_book(&title, &author, &isbn).map(|_| ());
                    self.report_outcome(outcome, "Book checked in successfully!")?;
                }
                Choice::Number(3) => return Ok(Flow::Back),
                Choice::Number(4) => self.report.transactions(&mut self.output, &*self.library)?,
                Choice::Number(_) => {}
            }
        }
    }

    /// Print the success text or the catalog error; propagate IO failures
    fn report_outcome(&mut self, outcome: Result<()>, success: &str) -> Result<()> {
        match outcome {
            Ok(()) => writeln!(self.output, "{success}")?,
            Err(err) if err.is_user_facing() => writeln!(self.output, "{err}")?,
            Err(err) => return Err(err),
        }
        Ok(())
    }

    /// Title, author and identifier as three separate lines
    fn read_book_fields(&mut self) -> Result<Option<(String, String, String)>> {
        let Some(title) = self.read_field("Enter Title: ")? else {
            return Ok(None);
        };
        let Some(author) = self.read_field("Enter Author: ")? else {
            return Ok(None);
        };
        let Some(isbn) = self.read_field("Enter ISBN: ")? else {
            return Ok(None);
        };
        Ok(Some((title, author, isbn)))
    }

    /// Prompt and read one integer; undecodable bytes count as invalid input
    fn read_choice(&mut self, prompt: &str) -> Result<Choice> {
        let Some(line) = self.read_raw(prompt)? else {
            return Ok(Choice::Eof);
        };
        let Ok(text) = String::from_utf8(line) else {
            tracing::debug!("menu choice was not valid UTF-8");
            return Ok(Choice::Invalid);
        };
        Ok(text.trim().parse().map_or(Choice::Invalid, Choice::Number))
    }

    /// Prompt and read one text field; invalid UTF-8 is replaced, not rejected
    fn read_field(&mut self, prompt: &str) -> Result<Option<String>> {
        Ok(self.read_raw(prompt)?.map(|line| String::from_utf8_lossy(&line).into_owned()))
    }

    /// Prompt and read one line of bytes without its terminator; `None` at end of input
    fn read_raw(&mut self, prompt: &str) -> Result<Option<Vec<u8>>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        while matches!(line.last(), Some(b'\n' | b'\r')) {
            line.pop();
        }
        Ok(Some(line))
    }

    /// Section heading, colored when enabled
    fn heading(&mut self, text: &str) -> Result<()> {
        if self.color {
            writeln!(self.output, "{}", text.green().bold())?;
        } else {
            writeln!(self.output, "{text}")?;
        }
        Ok(())
    }
}
