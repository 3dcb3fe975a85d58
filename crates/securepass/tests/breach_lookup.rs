//! End-to-end breach lookup flows against a mocked provider.

use chrono::Utc;
use securepass_breach::{
    BreachClientExt as _, CredentialSource, SearchHistoryEntry, SearchHistoryStore, SearchKind,
};
use securepass_test::{MemoryHistoryStore, start_client_mock};
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{method, path},
};

#[tokio::test]
async fn test_email_lookup_complete_flow() {
    let mock = Mock::given(method("GET"))
        .and(path("/breachedaccount/clear%40example.com"))
        .respond_with(ResponseTemplate::new(404));

    let (_server, client) = start_client_mock(vec![mock]).await;

    let result = client
        .breaches()
        .check_email("clear@example.com", None)
        .await
        .unwrap();

    // A not-found sentinel is a clean result, not an error
    assert!(result.breaches.is_empty());
    assert_eq!(result.credential, CredentialSource::None);

    // Record the outcome the way a consumer would
    let store = MemoryHistoryStore::default();
    store
        .save(SearchHistoryEntry {
            kind: SearchKind::Email,
            query: "clear@example.com".to_string(),
            found: !result.breaches.is_empty(),
            count: result.breaches.len() as u64,
            searched_at: Utc::now(),
        })
        .await
        .unwrap();

    let history = store.history().await.unwrap();
    assert_eq!(history.len(), 1);
    assert!(!history[0].found);
}

#[tokio::test]
async fn test_email_lookup_normalizes_sparse_records() {
    let mock = Mock::given(method("GET"))
        .and(path("/breachedaccount/user%40example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "Name": "Adobe",
                "Title": "Adobe",
                "Domain": "adobe.com",
                "BreachDate": "2013-10-04",
                "AddedDate": "2013-12-04T00:00:00Z",
                "PwnCount": 152_445_165_u64,
                "Description": "Accounts were breached.",
                "DataClasses": ["Email addresses", "Passwords"],
                "IsVerified": true
            },
            {}
        ])));

    let (_server, client) = start_client_mock(vec![mock]).await;

    let result = client
        .breaches()
        .check_email("user@example.com", None)
        .await
        .unwrap();

    assert_eq!(result.breaches.len(), 2);
    for record in &result.breaches {
        // Canonical records never leave fields unset
        assert!(!record.data_classes.is_empty());
    }
    assert_eq!(result.breaches[0].name, "Adobe");
    assert_eq!(result.breaches[1].pwn_count, 0);
    assert_eq!(result.breaches[1].data_classes, vec!["Email addresses"]);
}

#[tokio::test]
async fn test_password_check_is_idempotent() {
    // SHA-1 of "password" starts with 5BAA6
    let mock = Mock::given(method("GET"))
        .and(path("/range/5BAA6"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("1E4C9B93F3F0682250B6CF8331B7EE68FD8:9545824\r\n"),
        )
        .expect(2);

    let (_server, client) = start_client_mock(vec![mock]).await;

    let first = client.breaches().check_password("password").await.unwrap();
    let second = client.breaches().check_password("password").await.unwrap();

    assert_eq!(first, 9545824);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_failed_lookup_is_an_error_not_an_empty_result() {
    let mock = Mock::given(method("GET")).respond_with(ResponseTemplate::new(500));

    let (_server, client) = start_client_mock(vec![mock]).await;

    let error = client
        .breaches()
        .check_email("user@example.com", None)
        .await
        .unwrap_err();

    // Provider failures read differently from transport failures
    assert!(error.to_string().starts_with("API error 500"));
}
