mod error;
mod in_memory;
mod json_file;
mod store;

pub use error::StoreError;
pub use in_memory::InMemoryStore;
pub use json_file::JsonFileStore;
pub use store::LibraryStore;
