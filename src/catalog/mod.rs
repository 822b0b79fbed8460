mod book;
mod tree;

pub use book::Book;
pub use tree::BookTree;
