use serde::{Deserialize, Serialize};

/// A catalog entry. Ids are assigned sequentially on insertion and entries
/// are never deleted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub available: bool,
}

impl Book {
    /// New book, available for loan.
    pub fn new(id: u64, title: impl Into<String>, author: impl Into<String>) -> Self {
        Book {
            id,
            title: title.into(),
            author: author.into(),
            available: true,
        }
    }
}
