use std::{collections::VecDeque, fmt};

use crate::{
    book::Book,
    error::{LibraryError, Result},
    factory::UserFactory,
    observers::CatalogObserver,
    transaction::{Transaction, TransactionKind},
    user::{User, UserId},
};

/// Default number of transactions kept in the history
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// The catalog registry: owns every book and user for the life of the process.
///
/// Build one in `main` and pass it by reference to whatever needs it.
pub struct Library {
    /// Books in insertion order
    books: Vec<Book>,
    /// Users in insertion order
    users: Vec<User>,
    /// Assigns user ids
    factory: UserFactory,
    /// Completed transactions, oldest first
    history: VecDeque<Transaction>,
    /// Maximum number of history entries to keep
    history_limit: usize,
    /// Registered transition observers
    observers: Vec<Box<dyn CatalogObserver>>,
}

impl fmt::Debug for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Library")
            .field("books", &self.books)
            .field("users", &self.users)
            .field("factory", &self.factory)
            .field("history", &self.history)
            .field("history_limit", &self.history_limit)
            .field("observers_count", &self.observers.len())
            .finish()
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl Library {
    /// Create an empty library with the default history limit
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty library keeping at most `history_limit` transactions
    #[must_use]
    pub fn with_history_limit(history_limit: usize) -> Self {
        Self {
            books: Vec::new(),
            users: Vec::new(),
            factory: UserFactory::new(),
            history: VecDeque::new(),
            history_limit,
            observers: Vec::new(),
        }
    }

    /// Register an observer to be notified of checkouts and check-ins
    pub fn register_observer(&mut self, observer: Box<dyn CatalogObserver>) {
        self.observers.push(observer);
    }

    /// Add a new, available book at the end of the catalog
    pub fn add_book(&mut self, title: &str, author: &str, isbn: &str) {
        tracing::debug!(title, author, isbn, "adding book");
        self.books.push(Book::new(title, author, isbn));
    }

    /// All books in insertion order
    #[must_use]
    pub fn list_all_books(&self) -> BookListing<'_> {
        BookListing { books: &self.books }
    }

    /// Register a user of the role named by `selector` and return the assigned id
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::InvalidArgument` when the selector is not 1 or 2,
    /// or `LibraryError::IdsExhausted` when no id is left. No user is stored
    /// and no id is consumed in either case.
    pub fn add_user(&mut self, selector: i64, name: &str) -> Result<UserId> {
        let user = self.factory.create_user(selector, name).inspect_err(|err| {
            tracing::warn!(selector, name, error = %err, "rejected new user");
        })?;
        let id = user.id();
        tracing::debug!(%id, role = user.role().label(), name, "adding user");
        self.users.push(user);
        Ok(id)
    }

    /// All users in insertion order
    #[must_use]
    pub fn list_all_users(&self) -> UserListing<'_> {
        UserListing { users: &self.users }
    }

    /// Check out the first book matching `title` and `author`.
    ///
    /// `isbn` is recorded in the history but is not part of the match.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::NotFound` when no book matches, or
    /// `LibraryError::AlreadyCheckedOut` when the matched book is already out.
    pub fn check_out_book(&mut self, title: &str, author: &str, isbn: &str) -> Result<&Book> {
        self.transition(TransactionKind::CheckOut, title, author, isbn)
    }

    /// Check in the first book matching `title` and `author`.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::NotFound` when no book matches, or
    /// `LibraryError::AlreadyAvailable` when the matched book is on the shelf.
    pub fn check_in_book(&mut self, title: &str, author: &str, isbn: &str) -> Result<&Book> {
        self.transition(TransactionKind::CheckIn, title, author, isbn)
    }

    /// Apply a gated availability transition to the first matching book
    fn transition(
        &mut self,
        kind: TransactionKind,
        title: &str,
        author: &str,
        isbn: &str,
    ) -> Result<&Book> {
        let book = self.books.iter_mut().find(|book| book.matches(title, author)).ok_or_else(|| {
            tracing::warn!(title, author, kind = ?kind, "no book matches");
            LibraryError::NotFound { title: title.to_string(), author: author.to_string() }
        })?;

        if book.availability() != kind.source_state() {
            tracing::warn!(title, author, kind = ?kind, "book already in target state");
            return Err(match kind {
                TransactionKind::CheckOut => {
                    LibraryError::AlreadyCheckedOut { title: title.to_string() }
                }
                TransactionKind::CheckIn => {
                    LibraryError::AlreadyAvailable { title: title.to_string() }
                }
            });
        }

        match kind {
            TransactionKind::CheckOut => book.check_out(),
            TransactionKind::CheckIn => book.check_in(),
        }

        let transaction = Transaction::record(kind, book, isbn);
        for observer in &self.observers {
            observer.on_transition(book, &transaction);
        }

        self.history.push_back(transaction);
        while self.history.len() > self.history_limit {
            self.history.pop_front();
        }

        Ok(&*book)
    }

    /// First book matching `title` and `author`, if any
    #[must_use]
    pub fn find_book(&self, title: &str, author: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.matches(title, author))
    }

    /// Get all books in insertion order
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Get all users in insertion order
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Completed transactions, oldest first
    pub fn transactions(&self) -> impl ExactSizeIterator<Item = &Transaction> {
        self.history.iter()
    }

    /// The id the next successful `add_user` call will assign
    #[must_use]
    pub fn next_user_id(&self) -> UserId {
        self.factory.peek_next_id()
    }
}

/// Borrowed view over the catalog's books
#[derive(Debug, Clone, Copy)]
pub struct BookListing<'a> {
    /// Books in insertion order
    books: &'a [Book],
}

impl<'a> BookListing<'a> {
    /// Whether there is nothing to list
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Number of listed entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> std::slice::Iter<'a, Book> {
        self.books.iter()
    }
}

impl<'a> IntoIterator for BookListing<'a> {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}

impl fmt::Display for BookListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.books.is_empty() {
            return writeln!(f, "No books available!");
        }
        for book in self.books {
            writeln!(f, "{book}")?;
        }
        Ok(())
    }
}

/// Borrowed view over the registered users
#[derive(Debug, Clone, Copy)]
pub struct UserListing<'a> {
    /// Users in insertion order
    users: &'a [User],
}

impl<'a> UserListing<'a> {
    /// Whether there is nothing to list
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Number of listed entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> std::slice::Iter<'a, User> {
        self.users.iter()
    }
}

impl<'a> IntoIterator for UserListing<'a> {
    type Item = &'a User;
    type IntoIter = std::slice::Iter<'a, User>;

    fn into_iter(self) -> Self::IntoIter {
        self.users.iter()
    }
}

impl fmt::Display for UserListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.users.is_empty() {
            return writeln!(f, "No users available!");
        }
        for user in self.users {
            writeln!(f, "{user}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
