//! End-to-end borrow/return scenarios over an in-memory store.

use biblio::{InMemoryStore, Library, LibraryError, LibraryStore, Member};

fn library() -> Library<InMemoryStore> {
    Library::open(InMemoryStore::new()).unwrap()
}

#[test]
fn request_then_process_grants_the_loan() {
    let mut library = library();
    library.add_book("A", "x").unwrap();
    library.add_book("B", "y").unwrap();
    let member_id = library.register_member("Ana").unwrap();
    assert_eq!(member_id, 1001);

    library.request_loan(member_id, 2).unwrap();
    let receipt = library.process_next_loan().unwrap();

    assert_eq!(receipt.member_id, 1001);
    assert_eq!(receipt.member_name, "Ana");
    assert_eq!(receipt.book_id, 2);
    assert_eq!(receipt.title, "B");

    assert!(!library.book(2).unwrap().available);
    assert!(library.book(1).unwrap().available);
    assert_eq!(library.member(member_id).unwrap().borrowed_titles, vec!["B"]);
    assert_eq!(library.graph().edge_weight(member_id, 2), Some(1));
    assert_eq!(library.graph().interaction_count(), 1);
}

#[test]
fn processing_an_empty_queue_changes_no_state() {
    let mut library = library();
    library.add_book("A", "x").unwrap();
    library.register_member("Ana").unwrap();

    let err = library.process_next_loan().unwrap_err();
    assert_eq!(err, LibraryError::NoPendingRequests);
    assert!(library.book(1).unwrap().available);
    assert_eq!(library.graph().interaction_count(), 0);
    assert!(library.return_history().is_empty());
}

#[test]
fn requests_are_processed_in_fifo_order() {
    let mut library = library();
    library.add_book("A", "x").unwrap();
    library.add_book("B", "y").unwrap();
    let ana = library.register_member("Ana").unwrap();
    let luis = library.register_member("Luis").unwrap();

    library.request_loan(ana, 2).unwrap();
    library.request_loan(luis, 1).unwrap();
    assert_eq!(library.pending_requests(), 2);

    assert_eq!(library.process_next_loan().unwrap().member_id, ana);
    assert_eq!(library.process_next_loan().unwrap().member_id, luis);
    assert_eq!(library.pending_requests(), 0);
}

#[test]
fn missing_book_discards_the_request() {
    let mut library = library();
    let member_id = library.register_member("Ana").unwrap();
    library.request_loan(member_id, 99).unwrap();

    let err = library.process_next_loan().unwrap_err();
    assert_eq!(err, LibraryError::BookNotFound(99));
    // discarded, not re-queued: the member must resubmit
    assert_eq!(library.pending_requests(), 0);
    assert!(library
        .member(member_id)
        .unwrap()
        .borrowed_titles
        .is_empty());
}

#[test]
fn unavailable_book_discards_the_request() {
    let mut library = library();
    library.add_book("A", "x").unwrap();
    let ana = library.register_member("Ana").unwrap();
    let luis = library.register_member("Luis").unwrap();

    library.request_loan(ana, 1).unwrap();
    library.process_next_loan().unwrap();

    library.request_loan(luis, 1).unwrap();
    let err = library.process_next_loan().unwrap_err();
    assert_eq!(err, LibraryError::BookUnavailable(1));
    assert_eq!(library.pending_requests(), 0);
    assert!(library.member(luis).unwrap().borrowed_titles.is_empty());
    // the holder's record is untouched
    assert_eq!(library.member(ana).unwrap().borrowed_titles, vec!["A"]);
}

#[test]
fn unknown_member_claims_the_book_without_a_holder() {
    let mut library = library();
    library.add_book("A", "x").unwrap();
    library.request_loan(4242, 1).unwrap();

    let err = library.process_next_loan().unwrap_err();
    assert_eq!(err, LibraryError::MemberNotFound(4242));
    // documented partial-failure state: unavailable, held by nobody
    assert!(!library.book(1).unwrap().available);
    assert!(!library.graph().contains_member(4242));
    assert_eq!(library.graph().interaction_count(), 0);
}

#[test]
fn return_restores_availability_and_logs_the_title() {
    let mut library = library();
    library.add_book("A", "x").unwrap();
    library.add_book("B", "y").unwrap();
    let member_id = library.register_member("Ana").unwrap();

    library.request_loan(member_id, 1).unwrap();
    library.process_next_loan().unwrap();
    library.request_loan(member_id, 2).unwrap();
    library.process_next_loan().unwrap();

    library.return_book(member_id, "A").unwrap();
    library.return_book(member_id, "B").unwrap();

    assert!(library.book(1).unwrap().available);
    assert!(library.book(2).unwrap().available);
    assert!(library
        .member(member_id)
        .unwrap()
        .borrowed_titles
        .is_empty());
    // LIFO: most recent return first
    assert_eq!(library.return_history(), vec!["B", "A"]);
    // returning leaves the borrow edges in place
    assert_eq!(library.graph().edge_weight(member_id, 1), Some(1));
}

#[test]
fn returning_a_title_the_member_does_not_hold_changes_nothing() {
    let mut library = library();
    library.add_book("A", "x").unwrap();
    let member_id = library.register_member("Ana").unwrap();

    let err = library.return_book(member_id, "A").unwrap_err();
    assert_eq!(
        err,
        LibraryError::TitleNotHeld {
            member_id,
            title: "A".into()
        }
    );
    assert!(library.book(1).unwrap().available);
    assert!(library.return_history().is_empty());
}

#[test]
fn returning_for_an_unknown_member_fails() {
    let mut library = library();
    library.add_book("A", "x").unwrap();

    let err = library.return_book(4242, "A").unwrap_err();
    assert_eq!(err, LibraryError::MemberNotFound(4242));
}

#[test]
fn stale_borrowed_title_is_removed_but_not_rolled_back() {
    // a snapshot from an older catalog can leave a member holding a title
    // that no longer resolves to any book
    let store = InMemoryStore::new();
    store
        .save_members(&[Member {
            id: 1001,
            name: "Ana".into(),
            borrowed_titles: vec!["Ghost".into()],
        }])
        .unwrap();

    let mut library = Library::open(store).unwrap();
    let err = library.return_book(1001, "Ghost").unwrap_err();
    assert_eq!(err, LibraryError::TitleNotFound("Ghost".into()));

    // the removal stands and nothing reached the return log
    assert!(library.member(1001).unwrap().borrowed_titles.is_empty());
    assert!(library.return_history().is_empty());
}

#[test]
fn repeat_loan_resets_the_edge_weight() {
    let mut library = library();
    library.add_book("A", "x").unwrap();
    let member_id = library.register_member("Ana").unwrap();

    library.request_loan(member_id, 1).unwrap();
    library.process_next_loan().unwrap();
    library.return_book(member_id, "A").unwrap();
    library.request_loan(member_id, 1).unwrap();
    library.process_next_loan().unwrap();

    // overwrite-not-accumulate: still weight 1 after two loans
    assert_eq!(library.graph().edge_weight(member_id, 1), Some(1));
    assert_eq!(library.graph().interaction_count(), 1);
}
