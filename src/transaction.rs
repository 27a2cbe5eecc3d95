use std::{
    fmt,
    time::{SystemTime, UNIX_EPOCH},
};

use serde::Serialize;

use crate::book::{Availability, Book};

/// Events that move a book between availability states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TransactionKind {
    /// Available -> `CheckedOut`
    CheckOut,
    /// `CheckedOut` -> Available
    CheckIn,
}

impl TransactionKind {
    /// State the book must be in for the transaction to apply
    #[must_use]
    pub fn source_state(self) -> Availability {
        match self {
            Self::CheckOut => Availability::Available,
            Self::CheckIn => Availability::CheckedOut,
        }
    }

    /// State the book ends up in
    #[must_use]
    pub fn target_state(self) -> Availability {
        match self {
            Self::CheckOut => Availability::CheckedOut,
            Self::CheckIn => Availability::Available,
        }
    }

    /// Label shown in the transaction history
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::CheckOut => "Check Out",
            Self::CheckIn => "Check In",
        }
    }
}

/// A serializable wall-clock timestamp
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct TimeStamp {
    /// Seconds since Unix epoch
    pub seconds: u64,
    /// Nanoseconds part
    pub nanos: u32,
}

impl TimeStamp {
    /// Current system time; clocks set before the epoch read as zero
    #[must_use]
    pub fn now() -> Self {
        let duration = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
        Self { seconds: duration.as_secs(), nanos: duration.subsec_nanos() }
    }
}

/// One completed checkout or check-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    /// What happened
    pub kind: TransactionKind,
    /// Title of the affected book
    pub title: String,
    /// Author of the affected book
    pub author: String,
    /// Identifier the caller supplied, which may differ from the matched book's
    pub requested_isbn: String,
    /// When the transition was applied
    pub timestamp: TimeStamp,
}

impl Transaction {
    /// Capture the post-transition view of `book`
    pub(crate) fn record(kind: TransactionKind, book: &Book, requested_isbn: &str) -> Self {
        Self {
            kind,
            title: book.title().to_string(),
            author: book.author().to_string(),
            requested_isbn: requested_isbn.to_string(),
            timestamp: TimeStamp::now(),
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Title: {}, Author: {}, ISBN: {} ({:?} -> {:?})",
            self.kind.label(),
            self.title,
            self.author,
            self.requested_isbn,
            self.kind.source_state(),
            self.kind.target_state()
        )
    }
}
