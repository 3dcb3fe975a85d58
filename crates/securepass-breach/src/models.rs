use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single data breach as it pertains to a queried email address, normalized from whichever
/// provider shape produced it.
///
/// No field is optional. Data a provider omits is mapped to an explicit empty, zero or sentinel
/// value so consumers never have to branch on presence.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BreachRecord {
    /// Short breach identifier.
    pub name: String,
    /// Display name of the breach.
    pub title: String,
    /// Site or domain associated with the breach. Empty when the provider reports none.
    pub domain: String,
    /// When the underlying breach occurred.
    pub breach_date: NaiveDate,
    /// When the record was registered with the source provider.
    pub added_date: DateTime<Utc>,
    /// Number of affected accounts as reported by the provider. 0 when unknown.
    pub pwn_count: u64,
    /// Human-readable summary. Empty when the provider reports none.
    pub description: String,
    /// Categories of leaked data. Never empty.
    pub data_classes: Vec<String>,
    /// The provider's confidence flag.
    pub verified: bool,
}

/// Sentinel category used when a provider omits the leaked-data classes of a breach.
pub(crate) fn default_data_classes() -> Vec<String> {
    vec!["Email addresses".to_string()]
}

/// Parse a provider-reported ISO 8601 date, falling back to the current date when the value is
/// absent or malformed. The fallback is applied per field, never failing the whole record.
pub(crate) fn parse_date_or_today(raw: Option<&str>) -> NaiveDate {
    match raw {
        None => Utc::now().date_naive(),
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            debug!("Unparseable breach date '{}', defaulting to today", raw);
            Utc::now().date_naive()
        }),
    }
}

/// Parse a provider-reported ISO 8601 datetime, falling back to now when the value is absent or
/// malformed.
pub(crate) fn parse_datetime_or_now(raw: Option<&str>) -> DateTime<Utc> {
    match raw {
        None => Utc::now(),
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            debug!("Unparseable added date '{}', defaulting to now", raw);
            Utc::now()
        }),
    }
}
