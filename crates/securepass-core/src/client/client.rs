use std::sync::Arc;

use reqwest::header::{self, HeaderValue};

use super::internal::InternalClient;
use crate::client::client_settings::ClientSettings;

/// The main struct to interact with the SecurePass SDK.
#[derive(Debug, Clone)]
pub struct Client {
    // Important: The [`Client`] struct requires its `Clone` implementation to return an owned
    // reference to the same instance. For this to happen, any mutable state needs to be behind
    // an Arc, ideally as part of the existing [`InternalClient`] struct.
    #[doc(hidden)]
    pub internal: Arc<InternalClient>,
}

impl Client {
    /// Create a new SecurePass client.
    pub fn new(settings_input: Option<ClientSettings>) -> Self {
        let settings = settings_input.unwrap_or_default();

        let headers = build_default_headers(&settings);

        let http_client = new_http_client_builder()
            .default_headers(headers)
            .build()
            .expect("HTTP Client build should not fail");

        Self {
            internal: Arc::new(InternalClient {
                settings,
                http_client,
            }),
        }
    }
}

fn new_http_client_builder() -> reqwest::ClientBuilder {
    use rustls::ClientConfig;
    use rustls_platform_verifier::ConfigVerifierExt;

    #[allow(unused_mut)]
    let mut client_builder = reqwest::Client::builder().use_preconfigured_tls(
        ClientConfig::with_platform_verifier().expect("Failed to create platform verifier"),
    );

    // Enforce HTTPS for all requests in non-debug builds
    #[cfg(not(debug_assertions))]
    {
        client_builder = client_builder.https_only(true);
    }

    client_builder
}

/// Build default headers for the SecurePass HttpClient
fn build_default_headers(settings: &ClientSettings) -> header::HeaderMap {
    let mut headers = header::HeaderMap::new();

    headers.append(
        reqwest::header::USER_AGENT,
        HeaderValue::from_str(&settings.user_agent)
            .expect("User agent should be a valid header value"),
    );

    headers
}
