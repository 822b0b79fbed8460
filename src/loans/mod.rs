mod log;
mod queue;
mod request;

pub use log::ReturnLog;
pub use queue::LoanQueue;
pub use request::{LoanReceipt, LoanRequest};
