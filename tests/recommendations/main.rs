//! Popularity and collaborative-filtering behavior driven through the full
//! borrow/return workflow.

use biblio::{InMemoryStore, Library};

fn library() -> Library<InMemoryStore> {
    Library::open(InMemoryStore::new()).unwrap()
}

/// Borrow and immediately return, so the next member can take the same book
/// while the borrow edge stays recorded.
fn borrow_and_return(library: &mut Library<InMemoryStore>, member_id: u64, book_id: u64) {
    library.request_loan(member_id, book_id).unwrap();
    let receipt = library.process_next_loan().unwrap();
    library.return_book(member_id, &receipt.title).unwrap();
}

#[test]
fn shared_book_yields_candidates_from_both_similar_members() {
    let mut library = library();
    for id in 1..=7 {
        library.add_book(format!("Book {}", id), "Author").unwrap();
    }
    let ana = library.register_member("Ana").unwrap();
    let luis = library.register_member("Luis").unwrap();
    let marta = library.register_member("Marta").unwrap();

    // Ana and Luis both borrow book 7, plus books of their own
    borrow_and_return(&mut library, ana, 7);
    borrow_and_return(&mut library, ana, 1);
    borrow_and_return(&mut library, ana, 2);
    borrow_and_return(&mut library, luis, 7);
    borrow_and_return(&mut library, luis, 2);
    borrow_and_return(&mut library, luis, 3);

    // Marta borrows only book 7, sharing it with both
    borrow_and_return(&mut library, marta, 7);

    let recs = library.recommendations_for(marta, 10);
    let candidates: Vec<u64> = recs.iter().map(|&(book_id, _)| book_id).collect();

    // every other book Ana or Luis holds, never book 7 itself
    assert!(!candidates.contains(&7));
    assert_eq!(candidates.len(), 3);
    for book_id in [1, 2, 3] {
        assert!(candidates.contains(&book_id));
    }
    // book 2 is reachable from both similar members, so it scores highest
    assert_eq!(recs[0], (2, 2));
}

#[test]
fn recommendations_never_include_own_books() {
    let mut library = library();
    for id in 1..=4 {
        library.add_book(format!("Book {}", id), "Author").unwrap();
    }
    let ana = library.register_member("Ana").unwrap();
    let luis = library.register_member("Luis").unwrap();

    borrow_and_return(&mut library, ana, 1);
    borrow_and_return(&mut library, ana, 2);
    borrow_and_return(&mut library, luis, 1);
    borrow_and_return(&mut library, luis, 3);
    borrow_and_return(&mut library, luis, 4);

    let recs = library.recommendations_for(ana, 10);
    for (book_id, _) in &recs {
        assert!(!library.graph().borrowed_by(ana).contains(book_id));
    }
    let candidates: Vec<u64> = recs.iter().map(|&(book_id, _)| book_id).collect();
    assert_eq!(candidates, vec![3, 4]);
}

#[test]
fn member_with_no_borrows_gets_no_recommendations() {
    let mut library = library();
    library.add_book("Book 1", "Author").unwrap();
    let ana = library.register_member("Ana").unwrap();
    let luis = library.register_member("Luis").unwrap();
    borrow_and_return(&mut library, ana, 1);

    assert!(library.recommendations_for(luis, 5).is_empty());
}

#[test]
fn popularity_ranks_by_total_loans() {
    let mut library = library();
    for id in 1..=3 {
        library.add_book(format!("Book {}", id), "Author").unwrap();
    }
    let ana = library.register_member("Ana").unwrap();
    let luis = library.register_member("Luis").unwrap();
    let marta = library.register_member("Marta").unwrap();

    borrow_and_return(&mut library, ana, 2);
    borrow_and_return(&mut library, luis, 2);
    borrow_and_return(&mut library, marta, 2);
    borrow_and_return(&mut library, ana, 1);
    borrow_and_return(&mut library, luis, 3);

    let ranked = library.popular_books(10);
    assert_eq!(ranked[0], (2, 3));
    // 1 and 3 tie; first-encountered order is deterministic
    assert_eq!(ranked[1], (1, 1));
    assert_eq!(ranked[2], (3, 1));

    // n caps the result length, sorted non-increasing
    let top_one = library.popular_books(1);
    assert_eq!(top_one, vec![(2, 3)]);
}

#[test]
fn statistics_reflect_the_workflow() {
    let mut library = library();
    for id in 1..=2 {
        library.add_book(format!("Book {}", id), "Author").unwrap();
    }
    let ana = library.register_member("Ana").unwrap();
    let luis = library.register_member("Luis").unwrap();

    borrow_and_return(&mut library, ana, 1);
    borrow_and_return(&mut library, ana, 2);
    borrow_and_return(&mut library, luis, 1);

    let stats = library.statistics();
    assert_eq!(stats.members, 2);
    assert_eq!(stats.books, 2);
    assert_eq!(stats.interactions, 3);
    assert_eq!(stats.top_books[0], (1, 2));
}
