use crate::{book::Book, transaction::Transaction};

/// Trait for availability change observation
pub trait CatalogObserver {
    /// Called after a checkout or check-in has been applied
    fn on_transition(&self, book: &Book, transaction: &Transaction);
}

/// Logs all transitions that occur in the catalog
#[derive(Debug)]
pub struct TransactionLogger;

impl CatalogObserver for TransactionLogger {
    fn on_transition(&self, book: &Book, transaction: &Transaction) {
        tracing::info!(
            kind = ?transaction.kind,
            title = book.title(),
            author = book.author(),
            isbn = book.isbn(),
            state = book.availability().description(),
            "book transition applied"
        );
    }
}
