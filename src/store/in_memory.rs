use std::sync::{Arc, RwLock};

use crate::catalog::Book;
use crate::graph::InteractionGraph;
use crate::loans::LoanRequest;
use crate::member::Member;

use super::store::LibraryStore;
use super::StoreError;

#[derive(Default)]
struct Collections {
    books: Vec<Book>,
    members: Vec<Member>,
    requests: Vec<LoanRequest>,
    history: Vec<String>,
    graph: InteractionGraph,
}

/// In-memory store for tests and prototyping.
///
/// Clone-friendly: clones share the same underlying collections, so a test
/// can hold one handle while the library under test owns another.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<Collections>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        InMemoryStore::default()
    }
}

impl LibraryStore for InMemoryStore {
    fn save_books(&self, books: &[Book]) -> Result<(), StoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::LockPoisoned("books write"))?;
        inner.books = books.to_vec();
        Ok(())
    }

    fn load_books(&self) -> Result<Vec<Book>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::LockPoisoned("books read"))?;
        Ok(inner.books.clone())
    }

    fn save_members(&self, members: &[Member]) -> Result<(), StoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::LockPoisoned("members write"))?;
        inner.members = members.to_vec();
        Ok(())
    }

    fn load_members(&self) -> Result<Vec<Member>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::LockPoisoned("members read"))?;
        Ok(inner.members.clone())
    }

    fn save_requests(&self, requests: &[LoanRequest]) -> Result<(), StoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::LockPoisoned("requests write"))?;
        inner.requests = requests.to_vec();
        Ok(())
    }

    fn load_requests(&self) -> Result<Vec<LoanRequest>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::LockPoisoned("requests read"))?;
        Ok(inner.requests.clone())
    }

    fn save_history(&self, titles: &[String]) -> Result<(), StoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::LockPoisoned("history write"))?;
        inner.history = titles.to_vec();
        Ok(())
    }

    fn load_history(&self) -> Result<Vec<String>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::LockPoisoned("history read"))?;
        Ok(inner.history.clone())
    }

    fn save_graph(&self, graph: &InteractionGraph) -> Result<(), StoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::LockPoisoned("graph write"))?;
        inner.graph = graph.clone();
        Ok(())
    }

    fn load_graph(&self) -> Result<InteractionGraph, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::LockPoisoned("graph read"))?;
        Ok(inner.graph.clone())
    }
}
