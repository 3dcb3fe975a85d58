use securepass_core::{Client, ClientSettings};

/// Helper for testing the SecurePass SDK using wiremock.
///
/// Returns a client whose breach and range base urls both point at the mock server.
///
/// Warning: when using `Mock::expect` ensure `server` is not dropped before the test completes,
pub async fn start_client_mock(mocks: Vec<wiremock::Mock>) -> (wiremock::MockServer, Client) {
    let server = wiremock::MockServer::start().await;

    for mock in mocks {
        server.register(mock).await;
    }

    let client = Client::new(Some(ClientSettings {
        breach_api_url: server.uri(),
        range_api_url: server.uri(),
        ..Default::default()
    }));

    (server, client)
}
