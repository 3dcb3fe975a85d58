use crate::client::client_settings::ClientSettings;

/// The internal state of a [`Client`](crate::Client).
#[derive(Debug)]
pub struct InternalClient {
    pub(crate) settings: ClientSettings,

    /// Reqwest client useable for external integrations like breach lookups.
    pub(crate) http_client: reqwest::Client,
}

impl InternalClient {
    #[allow(missing_docs)]
    pub fn get_http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    #[allow(missing_docs)]
    pub fn get_settings(&self) -> &ClientSettings {
        &self.settings
    }
}
