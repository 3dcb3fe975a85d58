use securepass_core::ApiError;

use crate::BreachRecord;

/// A breach-by-email source.
///
/// One implementation exists per upstream response shape. An implementation performs exactly one
/// request per lookup, reports the provider's not-found sentinel as an empty list, and converts
/// provider records into [`BreachRecord`]s with per-field defaults.
#[async_trait::async_trait]
pub trait EmailBreachProvider: Send + Sync {
    /// Look up the breaches the provider knows for `email`.
    ///
    /// The email is passed raw; percent-encoding it for the wire is the implementation's job.
    async fn lookup(
        &self,
        http_client: &reqwest::Client,
        email: &str,
        credential: Option<&str>,
    ) -> Result<Vec<BreachRecord>, ApiError>;
}
