//! Mock Lockstep API server.
//!
//! Provides an axum-based HTTP server that simulates the Lockstep API.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use super::fixtures::{DefaultScenario, Fixtures};
use super::handlers::{self, problem};
use super::state::{MockState, SharedState};
use crate::{CompanyModel, ContactModel, PaymentModel};

/// A mock Lockstep API server for testing.
///
/// The server runs in the background and can be used to test the Lockstep
/// client against a realistic, stateful API implementation.
pub struct MockServer {
    /// The URL where the server is listening.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: SharedState,
}

impl MockServer {
    /// Start a new mock server with default fixtures.
    ///
    /// The server listens on a random available port and returns immediately.
    /// Use `url()` to get the server's base URL.
    pub async fn start() -> Self {
        Self::with_state(Self::default_state()).await
    }

    /// Start a mock server with empty state.
    ///
    /// Useful when you want to control exactly what data is available.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = Self::create_router(shared_state.clone());

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(error = %e, "mock server stopped");
            }
        });

        tracing::debug!(%addr, "mock server listening");

        Self {
            url: format!("http://{}", addr),
            handle,
            state: shared_state,
        }
    }

    /// Get the base URL of the mock server.
    ///
    /// Use this URL when creating a `LockstepClient` for testing.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get access to the server's shared state.
    ///
    /// This allows modifying the mock data during a test.
    pub fn state(&self) -> SharedState {
        self.state.clone()
    }

    /// Shutdown the server.
    ///
    /// This aborts the server task. It's safe to call multiple times.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    /// Create the default state with common test fixtures.
    fn default_state() -> MockState {
        Self::state_from_scenario(Fixtures::default_scenario())
    }

    /// Create state from a scenario.
    fn state_from_scenario(scenario: DefaultScenario) -> MockState {
        let mut state = MockState::new();

        for company in scenario.companies {
            state.insert(company);
        }

        for contact in scenario.contacts {
            state.insert(contact);
        }

        for payment in scenario.payments {
            state.insert(payment);
        }

        state
    }

    /// Create the axum router with all routes.
    pub(crate) fn create_router(state: SharedState) -> Router {
        Router::new()
            // Company routes
            .route(
                "/api/v1/Companies",
                post(handlers::create::<CompanyModel>).delete(handlers::delete_companies),
            )
            .route("/api/v1/Companies/query", get(handlers::query::<CompanyModel>))
            .route(
                "/api/v1/Companies/:id",
                get(handlers::retrieve_company)
                    .patch(handlers::update::<CompanyModel>)
                    .delete(handlers::delete::<CompanyModel>),
            )
            // Contact routes
            .route("/api/v1/Contacts", post(handlers::create::<ContactModel>))
            .route("/api/v1/Contacts/query", get(handlers::query::<ContactModel>))
            .route(
                "/api/v1/Contacts/:id",
                get(handlers::retrieve::<ContactModel>)
                    .patch(handlers::update::<ContactModel>)
                    .delete(handlers::delete::<ContactModel>),
            )
            // Payment routes
            .route("/api/v1/Payments", post(handlers::create::<PaymentModel>))
            .route("/api/v1/Payments/query", get(handlers::query::<PaymentModel>))
            .route(
                "/api/v1/Payments/:id",
                get(handlers::retrieve::<PaymentModel>)
                    .patch(handlers::update::<PaymentModel>)
                    .delete(handlers::delete::<PaymentModel>),
            )
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                require_api_key,
            ))
            // Health check
            .route("/health", get(health_check))
            .with_state(state)
    }
}

/// Reject requests without the configured `Api-Key` header.
async fn require_api_key(
    State(state): State<SharedState>,
    request: Request,
    next: Next,
) -> Response {
    let required = state.read().await.required_api_key.clone();

    if let Some(expected) = required {
        let provided = request
            .headers()
            .get("Api-Key")
            .and_then(|v| v.to_str().ok());
        if provided != Some(expected.as_str()) {
            return problem(
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                "A valid Api-Key header is required",
            );
        }
    }

    next.run(request).await
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Credential, LockstepClient, LockstepError};
    use axum::body::Body;
    use tower::ServiceExt;

    fn client_for(server: &MockServer) -> LockstepClient {
        LockstepClient::new(Credential::ApiKey("test-key".to_string()), server.url()).unwrap()
    }

    #[tokio::test]
    async fn test_server_starts_and_responds() {
        let server = MockServer::start().await;

        // Server should be accessible
        let client = reqwest::Client::new();
        let response = client
            .get(format!("{}/health", server.url()))
            .send()
            .await
            .expect("Failed to send request");

        assert!(response.status().is_success());
        assert_eq!(response.text().await.unwrap(), "ok");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_router_query_without_network() {
        let router = MockServer::create_router(MockServer::default_state().shared());

        let response = router
            .oneshot(
                axum::http::Request::builder()
                    .uri("/api/v1/Companies/query?filter=CompanyType%20eq%20'Vendor'")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_retrieve_company_with_lockstep_client() {
        let server = MockServer::start().await;
        let client = client_for(&server);

        let company: CompanyModel = client
            .companies()
            .retrieve_company("c-acme", None)
            .await
            .expect("Failed to retrieve company")
            .json()
            .unwrap();

        assert_eq!(company.display_name(), "Acme");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_empty_server() {
        let server = MockServer::start_empty().await;
        let client = client_for(&server);

        let result = client.companies().retrieve_company("nonexistent", None).await;

        assert!(matches!(
            result,
            Err(LockstepError::ApiError {
                status_code: Some(404),
                ..
            })
        ));

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_required_api_key() {
        let state = MockState::new()
            .with_company(Fixtures::minimal_company("c-1", "Acme", "Customer"))
            .with_required_api_key("secret");
        let server = MockServer::with_state(state).await;

        let wrong = client_for(&server);
        let result = wrong.companies().retrieve_company("c-1", None).await;
        assert_eq!(result.unwrap_err().status_code(), Some(401));

        let right =
            LockstepClient::new(Credential::ApiKey("secret".to_string()), server.url()).unwrap();
        assert!(right.companies().retrieve_company("c-1", None).await.is_ok());

        // Health stays open
        let health = reqwest::get(format!("{}/health", server.url())).await.unwrap();
        assert!(health.status().is_success());

        server.shutdown().await;
    }
}
