use rand::Rng;
use tracing::{info, warn};

use crate::catalog::{Book, BookTree};
use crate::error::LibraryError;
use crate::graph::{GraphStats, InteractionGraph};
use crate::loans::{LoanQueue, LoanReceipt, LoanRequest, ReturnLog};
use crate::member::{Member, MemberRoster};
use crate::sample;
use crate::store::LibraryStore;

/// The circulation context: catalog, roster, request queue, return log, and
/// interaction graph, owned together and threaded through every operation.
///
/// Single-writer by construction — operations take `&mut self` and run to
/// completion. Every mutating operation is followed by a full snapshot of
/// all five collections to the store; a snapshot failure surfaces as
/// `Persistence` without rolling back the in-memory mutation, so at most
/// one generation of changes is ever at risk.
pub struct Library<S: LibraryStore> {
    catalog: BookTree,
    members: MemberRoster,
    queue: LoanQueue,
    history: ReturnLog,
    graph: InteractionGraph,
    store: S,
}

impl<S: LibraryStore> Library<S> {
    /// Open a library on whatever the store last saved; empty collections
    /// on first run.
    pub fn open(store: S) -> Result<Self, LibraryError> {
        let catalog = BookTree::from_books(store.load_books()?);
        let members = MemberRoster::from_members(store.load_members()?);
        let queue = LoanQueue::from_requests(store.load_requests()?);
        let history = ReturnLog::from_titles(store.load_history()?);
        let graph = store.load_graph()?;
        Ok(Library {
            catalog,
            members,
            queue,
            history,
            graph,
            store,
        })
    }

    fn persist(&self) -> Result<(), LibraryError> {
        self.store.save_books(&self.catalog.snapshot())?;
        self.store.save_members(&self.members.snapshot())?;
        self.store.save_requests(&self.queue.snapshot())?;
        self.store.save_history(&self.history.snapshot())?;
        self.store.save_graph(&self.graph)?;
        Ok(())
    }

    // --- catalog ---

    /// Add a book; the id is the current catalog size plus one.
    pub fn add_book(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> Result<u64, LibraryError> {
        let id = self.catalog.len() as u64 + 1;
        let book = Book::new(id, title, author);
        info!(id, title = %book.title, "book added");
        self.catalog.insert(book);
        self.persist()?;
        Ok(id)
    }

    /// Seed the catalog with `count` randomly generated books.
    pub fn generate_books(
        &mut self,
        count: usize,
        rng: &mut impl Rng,
    ) -> Result<Vec<u64>, LibraryError> {
        let mut ids = Vec::with_capacity(count);
        for _ in 0..count {
            let (title, author) = sample::random_book(rng);
            let id = self.catalog.len() as u64 + 1;
            self.catalog.insert(Book::new(id, title, author));
            ids.push(id);
        }
        info!(count, "books generated");
        self.persist()?;
        Ok(ids)
    }

    pub fn book(&self, id: u64) -> Option<&Book> {
        self.catalog.find(id)
    }

    /// Case-insensitive title lookup; lowest id wins on duplicate titles.
    pub fn book_by_title(&self, title: &str) -> Option<&Book> {
        self.catalog.find_by_title(title)
    }

    /// All books, ascending by id.
    pub fn books(&self) -> Vec<&Book> {
        self.catalog.in_order()
    }

    // --- members ---

    pub fn register_member(&mut self, name: impl Into<String>) -> Result<u64, LibraryError> {
        let id = self.members.register(name);
        info!(id, "member registered");
        self.persist()?;
        Ok(id)
    }

    pub fn member(&self, id: u64) -> Option<&Member> {
        self.members.get(id)
    }

    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }

    // --- loans ---

    /// Enqueue a loan request. Deliberately unvalidated: stale member or
    /// book ids are only discovered at processing time.
    pub fn request_loan(&mut self, member_id: u64, book_id: u64) -> Result<(), LibraryError> {
        self.queue.push(LoanRequest { member_id, book_id });
        info!(member_id, book_id, "loan requested");
        self.persist()
    }

    pub fn pending_requests(&self) -> usize {
        self.queue.len()
    }

    /// Process the oldest pending request.
    ///
    /// An empty queue is `NoPendingRequests` and changes nothing. Any other
    /// outcome consumed the request, so state changed and a snapshot runs
    /// even when the loan itself is refused; refused requests are discarded,
    /// never re-queued.
    pub fn process_next_loan(&mut self) -> Result<LoanReceipt, LibraryError> {
        let request = self.queue.pop().ok_or(LibraryError::NoPendingRequests)?;
        let outcome = self.apply_loan(request);
        match &outcome {
            Ok(receipt) => info!(
                member_id = receipt.member_id,
                book_id = receipt.book_id,
                title = %receipt.title,
                "loan granted"
            ),
            Err(err) => warn!(
                member_id = request.member_id,
                book_id = request.book_id,
                %err,
                "loan request discarded"
            ),
        }
        self.persist()?;
        outcome
    }

    fn apply_loan(&mut self, request: LoanRequest) -> Result<LoanReceipt, LibraryError> {
        let book = self
            .catalog
            .find_mut(request.book_id)
            .ok_or(LibraryError::BookNotFound(request.book_id))?;
        if !book.available {
            return Err(LibraryError::BookUnavailable(request.book_id));
        }

        book.available = false;
        let title = book.title.clone();

        let Some(member) = self.members.get_mut(request.member_id) else {
            // Reachable partial-failure state: the book is now unavailable
            // although no member holds it. The caller must tolerate this.
            return Err(LibraryError::MemberNotFound(request.member_id));
        };
        member.borrowed_titles.push(title.clone());
        let member_name = member.name.clone();
        self.graph.record(request.member_id, request.book_id);

        Ok(LoanReceipt {
            member_id: request.member_id,
            member_name,
            book_id: request.book_id,
            title,
        })
    }

    /// Return a book by title.
    ///
    /// The member's borrowed-title entry is removed first; if the catalog
    /// then has no exact-title match the removal stands anyway and
    /// `TitleNotFound` is reported (the log records nothing in that case).
    pub fn return_book(&mut self, member_id: u64, title: &str) -> Result<(), LibraryError> {
        let member = self
            .members
            .get_mut(member_id)
            .ok_or(LibraryError::MemberNotFound(member_id))?;
        let held = member
            .borrowed_titles
            .iter()
            .position(|borrowed| borrowed == title)
            .ok_or_else(|| LibraryError::TitleNotHeld {
                member_id,
                title: title.to_string(),
            })?;
        member.borrowed_titles.remove(held);

        let outcome = match self.catalog.find_exact_title_mut(title) {
            Some(book) => {
                book.available = true;
                self.history.push(title);
                info!(member_id, title, "book returned");
                Ok(())
            }
            None => {
                warn!(member_id, title, "returned title missing from catalog");
                Err(LibraryError::TitleNotFound(title.to_string()))
            }
        };
        self.persist()?;
        outcome
    }

    /// Returned titles, most recent first.
    pub fn return_history(&self) -> Vec<&str> {
        self.history.iter_recent_first().collect()
    }

    // --- recommendations ---

    pub fn popular_books(&self, n: usize) -> Vec<(u64, u32)> {
        self.graph.popular_books(n)
    }

    pub fn recommendations_for(&self, member_id: u64, n: usize) -> Vec<(u64, u32)> {
        self.graph.recommendations_for(member_id, n)
    }

    pub fn statistics(&self) -> GraphStats {
        self.graph.stats()
    }

    pub fn graph(&self) -> &InteractionGraph {
        &self.graph
    }
}
