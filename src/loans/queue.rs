use std::collections::VecDeque;

use super::LoanRequest;

/// FIFO queue of loan requests. Each entry is consumed exactly once by
/// `pop`; discarded requests are never re-queued.
#[derive(Default)]
pub struct LoanQueue {
    requests: VecDeque<LoanRequest>,
}

impl LoanQueue {
    pub fn new() -> Self {
        LoanQueue::default()
    }

    pub fn from_requests(requests: Vec<LoanRequest>) -> Self {
        LoanQueue {
            requests: requests.into(),
        }
    }

    pub fn push(&mut self, request: LoanRequest) {
        self.requests.push_back(request);
    }

    pub fn pop(&mut self) -> Option<LoanRequest> {
        self.requests.pop_front()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LoanRequest> {
        self.requests.iter()
    }

    /// Front-to-back snapshot; order is part of the persistence contract.
    pub fn snapshot(&self) -> Vec<LoanRequest> {
        self.requests.iter().copied().collect()
    }
}
