use std::{cell::RefCell, rc::Rc};

use pretty_assertions::assert_eq;

use crate::{
    book::{Availability, Book},
    error::LibraryError,
    library::Library,
    observers::CatalogObserver,
    transaction::{Transaction, TransactionKind},
    user::{Role, UserId},
};

/// Helper function to set up a library with a few books
fn setup_test_library() -> Library {
    let mut library = Library::new();
    library.add_book("Dune", "Frank Herbert", "978-0441013593");
    library.add_book("Emma", "Jane Austen", "978-0141439587");
    library
}

/// Records every transition it sees
#[derive(Debug, Default)]
struct RecordingObserver {
    /// Shared with the test body
    seen: Rc<RefCell<Vec<(String, TransactionKind)>>>,
}

impl CatalogObserver for RecordingObserver {
    fn on_transition(&self, book: &Book, transaction: &Transaction) {
        self.seen.borrow_mut().push((book.title().to_string(), transaction.kind));
    }
}

#[test]
fn test_empty_listings() {
    let library = Library::new();
    assert!(library.list_all_books().is_empty());
    assert!(library.list_all_users().is_empty());
    assert_eq!(library.list_all_books().to_string(), "No books available!\n");
    assert_eq!(library.list_all_users().to_string(), "No users available!\n");
}

#[test]
fn test_add_book_appends_available_entry() {
    let mut library = setup_test_library();
    let before = library.list_all_books().len();

    library.add_book("Ulysses", "James Joyce", "978-0199535675");

    let listing = library.list_all_books();
    assert_eq!(listing.len(), before + 1);
    let added: Vec<_> = listing.iter().filter(|book| book.title() == "Ulysses").collect();
    assert_eq!(added.len(), 1);
    assert!(added.iter().all(|book| book.is_available()));
}

#[test]
fn test_book_listing_preserves_insertion_order() {
    let library = setup_test_library();
    assert_eq!(
        library.list_all_books().to_string(),
        "Title: Dune, Author: Frank Herbert, ISBN: 978-0441013593, Available: Yes\n\
         Title: Emma, Author: Jane Austen, ISBN: 978-0141439587, Available: Yes\n"
    );
}

#[test]
#[allow(clippy::unwrap_used)]
fn test_user_ids_are_sequential_regardless_of_role() {
    let mut library = Library::new();
    let alice = library.add_user(1, "Alice").unwrap();
    let bob = library.add_user(2, "Bob").unwrap();
    assert_eq!(alice, UserId(1));
    assert_eq!(bob, UserId(2));

    assert_eq!(
        library.list_all_users().to_string(),
        "[Student] Name: Alice, UserID: 1\n[Faculty] Name: Bob, UserID: 2\n"
    );
    let roles: Vec<_> = library.users().iter().map(|user| user.role()).collect();
    assert_eq!(roles, vec![Role::Student, Role::Faculty]);
}

#[test]
#[allow(clippy::unwrap_used)]
fn test_ids_strictly_increase() {
    let mut library = Library::new();
    let mut last = None;
    for (i, selector) in [1, 2, 2, 1, 1].into_iter().enumerate() {
        let id = library.add_user(selector, &format!("user-{i}")).unwrap();
        if let Some(previous) = last {
            assert!(id > previous);
        }
        last = Some(id);
    }
}

#[test]
#[allow(clippy::unwrap_used)]
fn test_invalid_selector_leaves_users_unchanged() {
    let mut library = Library::new();
    library.add_user(1, "Alice").unwrap();

    for selector in [0, 3, -2, 42] {
        let result = library.add_user(selector, "Mallory");
        assert!(matches!(result, Err(LibraryError::InvalidArgument(s)) if s == selector));
    }

    assert_eq!(library.users().len(), 1);
    assert_eq!(library.next_user_id(), UserId(2));
    assert_eq!(library.add_user(2, "Bob").unwrap(), UserId(2));
}

#[test]
#[allow(clippy::unwrap_used)]
fn test_checkout_checkin_round_trip() {
    let mut library = Library::new();
    library.add_book("T", "A", "I");

    let book = library.check_out_book("T", "A", "I").unwrap();
    assert_eq!(book.availability(), Availability::CheckedOut);

    let book = library.check_in_book("T", "A", "I").unwrap();
    assert_eq!(book.availability(), Availability::Available);
}

#[test]
#[allow(clippy::unwrap_used)]
fn test_double_checkout_is_rejected() {
    let mut library = setup_test_library();
    library.check_out_book("Dune", "Frank Herbert", "978-0441013593").unwrap();

    let result = library.check_out_book("Dune", "Frank Herbert", "978-0441013593");
    assert!(matches!(result, Err(LibraryError::AlreadyCheckedOut { .. })));
    assert_eq!(result.map(|_| ()).unwrap_err().to_string(), "Book is already checked out!");

    // State should still be checked out
    assert!(!library.find_book("Dune", "Frank Herbert").unwrap().is_available());
    assert_eq!(library.transactions().len(), 1);
}

#[test]
fn test_checkin_of_available_book_is_rejected() {
    let mut library = setup_test_library();
    let result = library.check_in_book("Emma", "Jane Austen", "978-0141439587");
    assert!(matches!(result, Err(LibraryError::AlreadyAvailable { .. })));
    assert_eq!(library.transactions().len(), 0);
}

#[test]
fn test_unknown_book_is_not_found() {
    let mut library = setup_test_library();

    let result = library.check_out_book("Dune", "Someone Else", "978-0441013593");
    assert!(
        matches!(result, Err(LibraryError::NotFound { ref title, ref author }) if title == "Dune" && author == "Someone Else")
    );

    let result = library.check_in_book("Missing", "Nobody", "");
    assert!(matches!(result, Err(LibraryError::NotFound { .. })));
}

#[test]
#[allow(clippy::unwrap_used)]
fn test_first_match_wins_for_duplicate_title_and_author() {
    let mut library = Library::new();
    library.add_book("Dune", "Frank Herbert", "B1");
    library.add_book("Dune", "Frank Herbert", "B2");

    // The identifier is not part of the match, even when it names B2
    let book = library.check_out_book("Dune", "Frank Herbert", "B2").unwrap();
    assert_eq!(book.isbn(), "B1");

    let states: Vec<_> = library.books().iter().map(|b| (b.isbn(), b.is_available())).collect();
    assert_eq!(states, vec![("B1", false), ("B2", true)]);

    // B1 keeps shadowing B2
    let result = library.check_out_book("Dune", "Frank Herbert", "B2");
    assert!(matches!(result, Err(LibraryError::AlreadyCheckedOut { .. })));
    assert!(library.books().get(1).unwrap().is_available());
}

#[test]
#[allow(clippy::unwrap_used, clippy::get_first)]
fn test_history_tracking() {
    let mut library = setup_test_library();

    // Initially empty history
    assert_eq!(library.transactions().len(), 0);

    library.check_out_book("Dune", "Frank Herbert", "typed-isbn").unwrap();
    library.check_in_book("Dune", "Frank Herbert", "978-0441013593").unwrap();

    let history: Vec<_> = library.transactions().collect();
    assert_eq!(history.len(), 2);

    let first = history.get(0).unwrap();
    assert_eq!(first.kind, TransactionKind::CheckOut);
    assert_eq!(first.title, "Dune");
    assert_eq!(first.requested_isbn, "typed-isbn");
    assert_eq!(history.get(1).unwrap().kind, TransactionKind::CheckIn);
}

#[test]
#[allow(clippy::unwrap_used)]
fn test_history_is_bounded() {
    let mut library = Library::with_history_limit(3);
    library.add_book("T", "A", "I");

    for _ in 0..4 {
        library.check_out_book("T", "A", "I").unwrap();
        library.check_in_book("T", "A", "I").unwrap();
    }

    let kinds: Vec<_> = library.transactions().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TransactionKind::CheckIn, TransactionKind::CheckOut, TransactionKind::CheckIn]
    );
}

#[test]
#[allow(clippy::unwrap_used)]
fn test_observers_see_only_applied_transitions() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut library = setup_test_library();
    library.register_observer(Box::new(RecordingObserver { seen: Rc::clone(&seen) }));

    library.check_out_book("Emma", "Jane Austen", "").unwrap();
    drop(library.check_out_book("Emma", "Jane Austen", ""));
    drop(library.check_in_book("Nope", "Nobody", ""));
    library.check_in_book("Emma", "Jane Austen", "").unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![
            ("Emma".to_string(), TransactionKind::CheckOut),
            ("Emma".to_string(), TransactionKind::CheckIn),
        ]
    );
}
