/// Append-only log of returned titles. Entries are never removed; reads are
/// most-recent-first and non-destructive.
#[derive(Default)]
pub struct ReturnLog {
    titles: Vec<String>,
}

impl ReturnLog {
    pub fn new() -> Self {
        ReturnLog::default()
    }

    pub fn from_titles(titles: Vec<String>) -> Self {
        ReturnLog { titles }
    }

    pub fn push(&mut self, title: impl Into<String>) {
        self.titles.push(title.into());
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Most-recently-returned first. Restartable: every call walks the log
    /// fresh.
    pub fn iter_recent_first(&self) -> impl Iterator<Item = &str> {
        self.titles.iter().rev().map(String::as_str)
    }

    /// Oldest-first snapshot; order is part of the persistence contract.
    pub fn snapshot(&self) -> Vec<String> {
        self.titles.clone()
    }
}
