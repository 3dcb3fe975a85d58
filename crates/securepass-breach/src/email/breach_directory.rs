//! BreachDirectory API client for breach-by-email lookups, as exposed through RapidAPI.

use chrono::Utc;
use securepass_core::ApiError;
use serde::Deserialize;
use tracing::debug;

use super::provider::EmailBreachProvider;
use crate::{
    BreachRecord,
    models::{default_data_classes, parse_date_or_today},
};

/// Breach-by-email source speaking the BreachDirectory shape.
pub(crate) struct BreachDirectoryProvider {
    pub(crate) base_url: String,
}

/// Response envelope returned by the BreachDirectory API.
#[derive(Debug, Deserialize)]
pub(super) struct BreachDirectoryResponse {
    /// Whether the provider knows anything about the queried term. `false` is the not-found
    /// sentinel of this shape.
    #[serde(default)]
    pub found: bool,
    pub result: Option<Vec<BreachDirectoryEntry>>,
}

/// One result entry in a [`BreachDirectoryResponse`].
///
/// All fields are optional on the wire; [`normalize_entry`] applies the canonical defaults.
#[derive(Debug, Default, Deserialize)]
pub(super) struct BreachDirectoryEntry {
    pub source: Option<String>,
    pub domain: Option<String>,
    pub breach_date: Option<String>,
    pub entries: Option<u64>,
    pub fields: Option<String>,
}

/// Convert one BreachDirectory entry into the canonical record shape.
///
/// Defaults are applied per field; an entry is never rejected wholesale. The shape carries a
/// single source name (used for both name and title), a comma-delimited list of leaked fields
/// and no description, registration date or verification signal.
pub(super) fn normalize_entry(entry: BreachDirectoryEntry) -> BreachRecord {
    let name = entry.source.unwrap_or_default();

    let mut data_classes: Vec<String> = entry
        .fields
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(|field| field.trim().to_string())
        .filter(|field| !field.is_empty())
        .collect();
    if data_classes.is_empty() {
        data_classes = default_data_classes();
    }

    BreachRecord {
        title: name.clone(),
        name,
        domain: entry.domain.unwrap_or_default(),
        breach_date: parse_date_or_today(entry.breach_date.as_deref()),
        added_date: Utc::now(),
        pwn_count: entry.entries.unwrap_or(0),
        description: String::new(),
        data_classes,
        // A match returned by this provider is treated as authoritative
        verified: true,
    }
}

impl BreachDirectoryProvider {
    /// The RapidAPI gateway requires the upstream host as a header next to the credential.
    fn rapidapi_host(&self) -> Option<String> {
        reqwest::Url::parse(&self.base_url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
    }
}

#[async_trait::async_trait]
impl EmailBreachProvider for BreachDirectoryProvider {
    async fn lookup(
        &self,
        http_client: &reqwest::Client,
        email: &str,
        credential: Option<&str>,
    ) -> Result<Vec<BreachRecord>, ApiError> {
        let mut request = http_client
            .get(format!("{}/", self.base_url))
            .query(&[("func", "auto"), ("term", email)]);

        match self.rapidapi_host() {
            Some(host) => request = request.header("X-RapidAPI-Host", host),
            None => debug!("No host in breach api url '{}'", self.base_url),
        }
        if let Some(credential) = credential {
            request = request.header("X-RapidAPI-Key", credential);
        }

        let response = request.send().await.map_err(|e| e.without_url())?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Provider {
                status,
                content: response.text().await.unwrap_or_default(),
            });
        }

        let body: BreachDirectoryResponse = response.json().await.map_err(|e| e.without_url())?;

        // This provider reports "nothing known about this term" in-band instead of via a status
        if !body.found {
            return Ok(Vec::new());
        }

        Ok(body
            .result
            .unwrap_or_default()
            .into_iter()
            .map(normalize_entry)
            .collect())
    }
}
