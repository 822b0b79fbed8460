mod catalog;
mod error;
mod graph;
mod library;
mod loans;
mod member;
pub mod sample;
mod store;

pub use catalog::{Book, BookTree};
pub use error::LibraryError;
pub use graph::{GraphStats, InteractionGraph};
pub use library::Library;
pub use loans::{LoanQueue, LoanReceipt, LoanRequest, ReturnLog};
pub use member::{Member, MemberRoster, MEMBER_ID_BASE};
pub use store::{InMemoryStore, JsonFileStore, LibraryStore, StoreError};
