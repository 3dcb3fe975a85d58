use schemars::JsonSchema;
use securepass_core::{ApiError, ClientSettings, EmailProvider};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    breach_directory::BreachDirectoryProvider, hibp::HibpProvider, provider::EmailBreachProvider,
};
use crate::BreachRecord;

/// Which credential a lookup was sent with.
///
/// Returned alongside the breaches so callers can tell when a lookup ran against the shared
/// fallback credential (typically restricted quota), or without any credential at all, and warn
/// about degraded access.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub enum CredentialSource {
    /// The caller supplied a credential for this call.
    Caller,
    /// No per-call credential was supplied; the fallback credential from the client settings was
    /// used.
    Fallback,
    /// No credential was available anywhere; the request was sent unauthenticated.
    None,
}

/// Result of a breach-by-email lookup.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmailBreachResult {
    /// The breaches the provider knows for the queried address. Empty when none are known.
    pub breaches: Vec<BreachRecord>,
    /// Which credential the lookup was sent with.
    pub credential: CredentialSource,
}

/// A per-call credential always wins; the settings-level fallback is only consulted when the
/// caller supplies none.
fn resolve_credential<'a>(
    credential: Option<&'a str>,
    settings: &'a ClientSettings,
) -> (Option<&'a str>, CredentialSource) {
    match (credential, settings.fallback_credential.as_deref()) {
        (Some(credential), _) => (Some(credential), CredentialSource::Caller),
        (None, Some(fallback)) => (Some(fallback), CredentialSource::Fallback),
        (None, None) => (None, CredentialSource::None),
    }
}

fn provider_for(settings: &ClientSettings) -> Box<dyn EmailBreachProvider> {
    match settings.provider {
        EmailProvider::HaveIBeenPwned => Box::new(HibpProvider {
            base_url: settings.breach_api_url.clone(),
        }),
        EmailProvider::BreachDirectory => Box::new(BreachDirectoryProvider {
            base_url: settings.breach_api_url.clone(),
        }),
    }
}

pub(crate) async fn check_email(
    http_client: &reqwest::Client,
    settings: &ClientSettings,
    email: &str,
    credential: Option<&str>,
) -> Result<EmailBreachResult, ApiError> {
    let (credential, source) = resolve_credential(credential, settings);
    if source == CredentialSource::None {
        debug!("No credential available, sending unauthenticated lookup");
    }

    let breaches = provider_for(settings)
        .lookup(http_client, email, credential)
        .await?;

    Ok(EmailBreachResult {
        breaches,
        credential: source,
    })
}
