//! Domain logic for the apiflow dashboard backend.
//!
//! Everything here is pure or near-pure: error taxonomy, the injectable
//! outcome source, simulated latency, and the rules each facade applies on
//! top of the in-memory store.

pub mod catalog;
pub mod error;
pub mod latency;
pub mod outcome;
pub mod recipe;
pub mod search;
pub mod test_history;
pub mod types;
pub mod workflow;
