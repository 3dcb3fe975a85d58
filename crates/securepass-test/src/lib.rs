#![doc = include_str!("../README.md")]

mod api;
mod history;

pub use api::start_client_mock;
pub use history::MemoryHistoryStore;
