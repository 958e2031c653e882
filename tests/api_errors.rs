//! Error mapping tests: non-success statuses become typed errors.

use lockstep_sdk::{Credential, LockstepClient, LockstepError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> LockstepClient {
    LockstepClient::new(Credential::ApiKey("test-key".to_string()), &server.uri()).unwrap()
}

#[tokio::test]
async fn test_problem_details_become_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/Companies/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "type": "https://tools.ietf.org/html/rfc7231#section-6.5.4",
            "title": "Not Found",
            "status": 404,
            "detail": "Company 'missing' was not found"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let err = client
        .companies()
        .retrieve_company("missing", None)
        .await
        .unwrap_err();

    match err {
        LockstepError::ApiError {
            ref message,
            status_code,
        } => {
            assert_eq!(message, "Company 'missing' was not found");
            assert_eq!(status_code, Some(404));
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
    assert_eq!(err.status_code(), Some(404));
}

#[tokio::test]
async fn test_plain_text_error_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/Payments/p-1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database unavailable"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let err = client.payments().delete_payment("p-1").await.unwrap_err();

    assert!(matches!(
        err,
        LockstepError::ApiError { ref message, status_code: Some(500) } if message == "database unavailable"
    ));
}

#[tokio::test]
async fn test_empty_error_body_uses_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/UserRoles/r-1"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let err = client
        .user_roles()
        .retrieve_user_role("r-1", None)
        .await
        .unwrap_err();

    match err {
        LockstepError::ApiError { message, status_code } => {
            assert!(message.contains("401"));
            assert_eq!(status_code, Some(401));
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limited_with_retry_after() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/Contacts/query"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "30"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let err = client
        .contacts()
        .query_contacts(&Default::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        LockstepError::RateLimited {
            retry_after_secs: Some(30)
        }
    ));
    assert_eq!(err.status_code(), Some(429));
}

#[tokio::test]
async fn test_connection_refused_is_http_error() {
    // Reserve a free port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client =
        LockstepClient::new(Credential::ApiKey("test-key".to_string()), &uri).unwrap();
    let err = client
        .applications()
        .retrieve_application("app-1", None)
        .await
        .unwrap_err();

    assert!(matches!(err, LockstepError::HttpError(_)));
    assert_eq!(err.status_code(), None);
}
