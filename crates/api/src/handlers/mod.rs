//! Request handlers.
//!
//! Each submodule provides thin async handlers for one resource. Handlers
//! extract input, delegate to the matching service in [`crate::services`],
//! and wrap the result in a [`DataResponse`](crate::response::DataResponse).

pub mod apis;
pub mod dashboard;
pub mod recipes;
pub mod test_history;
pub mod workflows;
