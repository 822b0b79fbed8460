use std::fmt;

use crate::store::StoreError;

/// Recoverable failures surfaced by library operations.
///
/// None of these terminate the session. State is left untouched except where
/// the loan workflow documents a partial effect (see `Library`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    BookNotFound(u64),
    TitleNotFound(String),
    MemberNotFound(u64),
    BookUnavailable(u64),
    NoPendingRequests,
    TitleNotHeld { member_id: u64, title: String },
    Persistence(StoreError),
}

impl fmt::Display for LibraryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::BookNotFound(id) => write!(f, "no book with id {}", id),
            LibraryError::TitleNotFound(title) => {
                write!(f, "no book titled {:?} in the catalog", title)
            }
            LibraryError::MemberNotFound(id) => write!(f, "no member with id {}", id),
            LibraryError::BookUnavailable(id) => {
                write!(f, "book {} is currently on loan", id)
            }
            LibraryError::NoPendingRequests => write!(f, "no pending loan requests"),
            LibraryError::TitleNotHeld { member_id, title } => write!(
                f,
                "member {} does not hold a book titled {:?}",
                member_id, title
            ),
            LibraryError::Persistence(err) => write!(f, "persistence failure: {}", err),
        }
    }
}

impl std::error::Error for LibraryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LibraryError::Persistence(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for LibraryError {
    fn from(err: StoreError) -> Self {
        LibraryError::Persistence(err)
    }
}
