//! Mock Lockstep API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the Lockstep
//! API for integration and end-to-end testing. Unlike wiremock which mocks at
//! the HTTP level per-test, this server maintains state across requests,
//! enabling realistic workflow testing.
//!
//! Companies, Contacts and Payments support retrieve, query, create, update
//! and delete. Queries understand a single `Field eq value` filter and a
//! single sort field.
//!
//! # Example
//!
//! ```ignore
//! use lockstep_sdk::mock_server::MockServer;
//! use lockstep_sdk::{CompanyModel, Credential, LockstepClient};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = LockstepClient::new(
//!         Credential::ApiKey("test-key".to_string()),
//!         server.url(),
//!     )
//!     .unwrap();
//!
//!     // Server comes with default fixtures
//!     let response = client.companies().retrieve_company("c-acme", None).await.unwrap();
//!     let company: CompanyModel = response.json().unwrap();
//!     assert_eq!(company.display_name(), "Acme");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures};
pub use server::MockServer;
pub use state::{MockRecord, MockState, SharedState};
