//! In-memory library catalog: books, users and checkout transactions.
//!
//! A single [`Library`] registry owns every [`Book`] and [`User`]. Checkout and
//! check-in are the only ways to change a book's availability, and both are
//! gated on the book's current state. The [`menu`] module wraps the registry in
//! a line-oriented text interface.

pub mod book;
pub mod config;
pub mod error;
pub mod factory;
pub mod library;
pub mod menu;
pub mod observers;
pub mod report;
pub mod transaction;
pub mod user;

pub use book::{Availability, Book};
pub use config::{Cli, Config, LogLevel, OutputFormat};
pub use error::{LibraryError, Result};
pub use factory::UserFactory;
pub use library::{BookListing, Library, UserListing};
pub use menu::Menu;
pub use observers::{CatalogObserver, TransactionLogger};
pub use report::Report;
pub use transaction::{TimeStamp, Transaction, TransactionKind};
pub use user::{Role, User, UserId};
