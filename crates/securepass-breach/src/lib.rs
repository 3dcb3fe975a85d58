#![doc = include_str!("../README.md")]

mod breach_client;
mod email;
mod exposure;
mod history;
mod models;

pub use breach_client::{BreachClient, BreachClientExt, EmailBreachError, PasswordExposureError};
pub use email::{CredentialSource, EmailBreachProvider, EmailBreachResult};
pub use history::{HistoryError, SearchHistoryEntry, SearchHistoryStore, SearchKind};
pub use models::BreachRecord;
