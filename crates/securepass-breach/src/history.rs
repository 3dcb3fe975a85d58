//! Search history contract.
//!
//! The core never persists anything itself. Consumers that want a history list implement
//! [`SearchHistoryStore`] on top of whatever storage they have and record each lookup outcome
//! after the fact. Password queries are expected to be masked by the caller before saving.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An error resulting from operations on a search history store.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// An internal unspecified error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Which pipeline produced a history entry.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub enum SearchKind {
    /// A breach-by-email lookup.
    Email,
    /// A password exposure check.
    Password,
}

/// One recorded lookup.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchHistoryEntry {
    /// Which pipeline was queried.
    pub kind: SearchKind,
    /// The queried text. For password checks this should be a masked placeholder, never the
    /// password itself.
    pub query: String,
    /// Whether the lookup found any breaches or exposures.
    pub found: bool,
    /// Number of breaches (email) or observed exposures (password).
    pub count: u64,
    /// When the lookup was performed.
    pub searched_at: DateTime<Utc>,
}

/// Storage seam for the search history list.
#[async_trait::async_trait]
pub trait SearchHistoryStore: Send + Sync {
    /// Record one lookup outcome.
    async fn save(&self, entry: SearchHistoryEntry) -> Result<(), HistoryError>;
    /// All recorded lookups, most recent first.
    async fn history(&self) -> Result<Vec<SearchHistoryEntry>, HistoryError>;
    /// Forget all recorded lookups.
    async fn clear(&self) -> Result<(), HistoryError>;
}
