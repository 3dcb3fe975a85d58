//! Have I Been Pwned (HIBP) v3 API client for breach-by-email lookups.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::StatusCode;
use securepass_core::ApiError;
use serde::Deserialize;

use super::provider::EmailBreachProvider;
use crate::{
    BreachRecord,
    models::{default_data_classes, parse_date_or_today, parse_datetime_or_now},
};

/// Everything outside the RFC 3986 unreserved set gets percent-encoded, so the account lands in
/// the request path the same way regardless of which characters the address contains.
const ACCOUNT_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Breach-by-email source speaking the HIBP v3 `breachedaccount` shape.
pub(crate) struct HibpProvider {
    pub(crate) base_url: String,
}

/// One breach as returned by the HIBP v3 API.
///
/// All fields are optional on the wire; [`normalize_breach`] applies the canonical defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct HibpBreachModel {
    pub name: Option<String>,
    pub title: Option<String>,
    pub domain: Option<String>,
    pub breach_date: Option<String>,
    pub added_date: Option<String>,
    pub pwn_count: Option<u64>,
    pub description: Option<String>,
    pub data_classes: Option<Vec<String>>,
    pub is_verified: Option<bool>,
}

/// Convert one HIBP breach into the canonical record shape.
///
/// Defaults are applied per field; a breach is never rejected wholesale.
pub(super) fn normalize_breach(model: HibpBreachModel) -> BreachRecord {
    let name = model.name.unwrap_or_default();

    let mut data_classes = model.data_classes.unwrap_or_default();
    if data_classes.is_empty() {
        data_classes = default_data_classes();
    }

    BreachRecord {
        title: model.title.unwrap_or_else(|| name.clone()),
        name,
        domain: model.domain.unwrap_or_default(),
        breach_date: parse_date_or_today(model.breach_date.as_deref()),
        added_date: parse_datetime_or_now(model.added_date.as_deref()),
        pwn_count: model.pwn_count.unwrap_or(0),
        description: model.description.unwrap_or_default(),
        data_classes,
        verified: model.is_verified.unwrap_or(false),
    }
}

#[async_trait::async_trait]
impl EmailBreachProvider for HibpProvider {
    async fn lookup(
        &self,
        http_client: &reqwest::Client,
        email: &str,
        credential: Option<&str>,
    ) -> Result<Vec<BreachRecord>, ApiError> {
        let url = format!(
            "{}/breachedaccount/{}",
            self.base_url,
            utf8_percent_encode(email, ACCOUNT_SEGMENT)
        );

        let mut request = http_client
            .get(&url)
            .query(&[("truncateResponse", "false")]);
        if let Some(credential) = credential {
            request = request.header("hibp-api-key", credential);
        }

        let response = request.send().await.map_err(|e| e.without_url())?;

        // HIBP reports "no breaches known for this account" as a 404
        match response.status() {
            StatusCode::NOT_FOUND => Ok(Vec::new()),
            status if !status.is_success() => Err(ApiError::Provider {
                status,
                content: response.text().await.unwrap_or_default(),
            }),
            _ => {
                let breaches: Vec<HibpBreachModel> =
                    response.json().await.map_err(|e| e.without_url())?;
                Ok(breaches.into_iter().map(normalize_breach).collect())
            }
        }
    }
}
