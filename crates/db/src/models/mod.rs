pub mod api;
pub mod recipe;
pub mod test_history;
pub mod workflow;
