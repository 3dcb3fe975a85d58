use securepass_core::{ApiError, Client};
use thiserror::Error;

use crate::{EmailBreachResult, email, exposure};

/// Error type for breach-by-email lookups
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum EmailBreachError {
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Error type for password exposure checks
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum PasswordExposureError {
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Client for breach lookup operations.
pub struct BreachClient {
    pub(crate) client: Client,
}

impl BreachClient {
    /// Check which known breaches an email address appears in.
    ///
    /// Issues exactly one request to the configured breach-by-email provider. An address with
    /// no known breaches resolves to an empty list, never an error. When `credential` is `None`
    /// the fallback credential from the client settings is used if one is configured; the
    /// returned [`EmailBreachResult`] states which credential the lookup ran with.
    pub async fn check_email(
        &self,
        email: &str,
        credential: Option<&str>,
    ) -> Result<EmailBreachResult, EmailBreachError> {
        let internal = &self.client.internal;
        Ok(email::check::check_email(
            internal.get_http_client(),
            internal.get_settings(),
            email,
            credential,
        )
        .await?)
    }

    /// Check how many times a password has been observed in known breach corpora.
    ///
    /// Uses the k-anonymity range query: only the first 5 characters of the password's SHA-1
    /// digest are sent; the password itself never leaves the client. Returns 0 when the
    /// password is not found, which is distinct from the request failing.
    pub async fn check_password(&self, password: &str) -> Result<u32, PasswordExposureError> {
        let internal = &self.client.internal;
        Ok(exposure::check_password_exposure(
            internal.get_http_client(),
            password,
            &internal.get_settings().range_api_url,
        )
        .await?)
    }
}

#[expect(missing_docs)]
pub trait BreachClientExt {
    fn breaches(&self) -> BreachClient;
}

impl BreachClientExt for Client {
    fn breaches(&self) -> BreachClient {
        BreachClient {
            client: self.clone(),
        }
    }
}
