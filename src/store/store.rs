use crate::catalog::Book;
use crate::graph::InteractionGraph;
use crate::loans::LoanRequest;
use crate::member::Member;

use super::StoreError;

/// Per-collection snapshot persistence.
///
/// Every save replaces the whole collection (full snapshot, never
/// incremental); loading a collection that was never saved yields the empty
/// collection. Each collection must be written atomically: a failed save
/// leaves the previous valid snapshot intact. Books arrive ascending by id,
/// requests and history in their workflow order; both orders must survive a
/// round trip. Map-shaped data (the graph) is order-insensitive.
pub trait LibraryStore {
    fn save_books(&self, books: &[Book]) -> Result<(), StoreError>;
    fn load_books(&self) -> Result<Vec<Book>, StoreError>;

    fn save_members(&self, members: &[Member]) -> Result<(), StoreError>;
    fn load_members(&self) -> Result<Vec<Member>, StoreError>;

    fn save_requests(&self, requests: &[LoanRequest]) -> Result<(), StoreError>;
    fn load_requests(&self) -> Result<Vec<LoanRequest>, StoreError>;

    fn save_history(&self, titles: &[String]) -> Result<(), StoreError>;
    fn load_history(&self) -> Result<Vec<String>, StoreError>;

    fn save_graph(&self, graph: &InteractionGraph) -> Result<(), StoreError>;
    fn load_graph(&self) -> Result<InteractionGraph, StoreError>;
}
