use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::catalog::Book;
use crate::graph::InteractionGraph;
use crate::loans::LoanRequest;
use crate::member::Member;

use super::store::LibraryStore;
use super::StoreError;

const BOOKS_FILE: &str = "books.json";
const MEMBERS_FILE: &str = "members.json";
const REQUESTS_FILE: &str = "loan_queue.json";
const HISTORY_FILE: &str = "return_log.json";
const GRAPH_FILE: &str = "graph.json";

/// One human-inspectable JSON file per collection inside a data directory.
///
/// Saves write to a sibling `.tmp` file and rename it into place, so an
/// interrupted write never corrupts the previous snapshot of that
/// collection. Missing files load as empty collections.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open (creating the directory if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|err| StoreError::Io {
            path: dir.display().to_string(),
            message: err.to_string(),
        })?;
        Ok(JsonFileStore { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn write_json<T: Serialize + ?Sized>(&self, file: &str, value: &T) -> Result<(), StoreError> {
        let path = self.dir.join(file);
        let bytes = serde_json::to_vec_pretty(value).map_err(|err| StoreError::Format {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;

        let tmp = self.dir.join(format!("{}.tmp", file));
        fs::write(&tmp, bytes).map_err(|err| StoreError::Io {
            path: tmp.display().to_string(),
            message: err.to_string(),
        })?;
        fs::rename(&tmp, &path).map_err(|err| StoreError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;

        debug!(file, "snapshot written");
        Ok(())
    }

    fn read_json<T: DeserializeOwned + Default>(&self, file: &str) -> Result<T, StoreError> {
        let path = self.dir.join(file);
        if !path.exists() {
            return Ok(T::default());
        }
        let bytes = fs::read(&path).map_err(|err| StoreError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        serde_json::from_slice(&bytes).map_err(|err| StoreError::Format {
            path: path.display().to_string(),
            message: err.to_string(),
        })
    }
}

impl LibraryStore for JsonFileStore {
    fn save_books(&self, books: &[Book]) -> Result<(), StoreError> {
        self.write_json(BOOKS_FILE, books)
    }

    fn load_books(&self) -> Result<Vec<Book>, StoreError> {
        self.read_json(BOOKS_FILE)
    }

    fn save_members(&self, members: &[Member]) -> Result<(), StoreError> {
        self.write_json(MEMBERS_FILE, members)
    }

    fn load_members(&self) -> Result<Vec<Member>, StoreError> {
        self.read_json(MEMBERS_FILE)
    }

    fn save_requests(&self, requests: &[LoanRequest]) -> Result<(), StoreError> {
        self.write_json(REQUESTS_FILE, requests)
    }

    fn load_requests(&self) -> Result<Vec<LoanRequest>, StoreError> {
        self.read_json(REQUESTS_FILE)
    }

    fn save_history(&self, titles: &[String]) -> Result<(), StoreError> {
        self.write_json(HISTORY_FILE, titles)
    }

    fn load_history(&self) -> Result<Vec<String>, StoreError> {
        self.read_json(HISTORY_FILE)
    }

    fn save_graph(&self, graph: &InteractionGraph) -> Result<(), StoreError> {
        self.write_json(GRAPH_FILE, graph)
    }

    fn load_graph(&self) -> Result<InteractionGraph, StoreError> {
        self.read_json(GRAPH_FILE)
    }
}
