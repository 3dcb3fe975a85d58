//! Errors that can occur when using this SDK

use reqwest::StatusCode;
use thiserror::Error;

/// An error returned by a breach data provider.
///
/// A lookup that fails is always an error; an empty result is never represented this way.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The provider returned an HTTP error response (other than a not-found sentinel).
    #[error("API error {status}: {content}")]
    Provider {
        /// HTTP status code of the response.
        status: StatusCode,
        /// Raw response body content.
        content: String,
    },

    /// Could not reach the provider (DNS failure, timeout, TLS error, connection refused, etc.)
    #[error("not connected: {0}")]
    Network(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            return ApiError::Provider {
                status,
                // Can't get the response body from a reqwest::Error, so just leave it empty.
                // Call sites that still hold the response construct this variant themselves.
                content: String::new(),
            };
        }

        // Everything else (connection errors, timeouts, errors sending the request, errors
        // reading the body) indicates a failure to communicate with the provider.
        ApiError::Network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_and_network_messages_are_distinct() {
        let provider = ApiError::Provider {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            content: "boom".to_string(),
        };
        let network = ApiError::Network("dns failure".to_string());

        assert_eq!(provider.to_string(), "API error 500 Internal Server Error: boom");
        assert_eq!(network.to_string(), "not connected: dns failure");
    }
}
