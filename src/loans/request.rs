use serde::{Deserialize, Serialize};

/// A pending loan request. Nothing is validated at enqueue time; a stale or
/// invalid request is only discovered when it is processed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub member_id: u64,
    pub book_id: u64,
}

/// Outcome of a successfully processed loan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoanReceipt {
    pub member_id: u64,
    pub member_name: String,
    pub book_id: u64,
    pub title: String,
}
