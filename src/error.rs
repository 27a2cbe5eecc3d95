use thiserror::Error;

/// Errors produced by catalog operations and the menu driver
#[derive(Debug, Error)]
pub enum LibraryError {
    /// The user-type selector is neither 1 (Student) nor 2 (Faculty)
    #[error("Invalid user type!")]
    InvalidArgument(i64),

    /// Every user id has been handed out
    #[error("No user ids left!")]
    IdsExhausted,

    /// No book matches the given title and author
    #[error("Book not found!")]
    NotFound {
        /// Title that was searched for
        title: String,
        /// Author that was searched for
        author: String,
    },

    /// Checkout requested for a book that is already out
    #[error("Book is already checked out!")]
    AlreadyCheckedOut {
        /// Title of the matched book
        title: String,
    },

    /// Check-in requested for a book that is already on the shelf
    #[error("Book is already available!")]
    AlreadyAvailable {
        /// Title of the matched book
        title: String,
    },

    /// Reading menu input or writing output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendering a JSON listing failed
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LibraryError {
    /// Whether the error is a recoverable, user-facing outcome rather than an IO failure
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_)
                | Self::IdsExhausted
                | Self::NotFound { .. }
                | Self::AlreadyCheckedOut { .. }
                | Self::AlreadyAvailable { .. }
        )
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, LibraryError>;
