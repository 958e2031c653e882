//! Lockstep Platform API client library.
//!
//! A Rust library for the Lockstep Platform REST API. A single
//! [`LockstepClient`] holds the connection and credentials; one resource
//! client per REST resource maps each operation onto a verb, a path and its
//! parameters, and hands back the raw [`ApiResponse`] for the caller to decode.
//!
//! # Quick Start
//!
//! ```no_run
//! use lockstep_sdk::{CompanyModel, FetchResult, LockstepClient, QueryOptions};
//!
//! #[tokio::main]
//! async fn main() -> lockstep_sdk::Result<()> {
//!     // Create client from environment variables
//!     let client = LockstepClient::from_env()?;
//!
//!     // Fetch a company with its contacts
//!     let response = client
//!         .companies()
//!         .retrieve_company("c5a2b8d1-0000-0000-0000-000000000000", Some("Contacts"))
//!         .await?;
//!     let company: CompanyModel = response.json()?;
//!     println!("Company: {}", company.display_name());
//!
//!     // Query customers, 50 per page
//!     let options = QueryOptions::new()
//!         .filter("CompanyType eq 'Customer'")
//!         .order("CompanyName asc")
//!         .page(0, 50);
//!     let page: FetchResult<CompanyModel> =
//!         client.companies().query_companies(&options).await?.json()?;
//!     println!("Found {} of {:?} customers", page.len(), page.total_count);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`Transport`] - sends one request; [`LockstepClient`] is the HTTP
//!   implementation
//! - Resource clients ([`CompaniesClient`], [`PaymentsClient`], ...) - build
//!   the request for each operation
//! - Models ([`CompanyModel`], [`PaymentModel`], ...) - typed views of
//!   response bodies, decoded with [`ApiResponse::json`]
//!
//! Request bodies may be written with snake_case keys; they are converted to
//! the camelCase the API expects before sending (see [`casing`]).
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `LOCKSTEP_API_KEY` or `LOCKSTEP_BEARER_TOKEN` (one required) - credential
//! - `LOCKSTEP_API_URL` (optional) - explicit base URL
//! - `LOCKSTEP_ENV` (optional) - `sbx` (default) or `prd`
//! - `LOCKSTEP_APP_NAME` (optional) - sent as the `ApplicationName` header

pub mod casing;
pub mod cli;
mod client;
mod error;
#[cfg(feature = "test-server")]
pub mod mock_server;
mod models;
mod output;
mod pagination;
mod params;
mod resources;
#[cfg(test)]
mod test_support;
mod transport;

// Re-export core types
pub use client::{Credential, Environment, LockstepClient};
pub use error::{LockstepError, Result};
pub use output::PrettyPrint;
pub use pagination::{FetchResult, QueryOptions, SummaryQueryOptions};
pub use params::QueryParams;
pub use transport::{ApiResponse, FileUpload, RequestBody, Transport};

// Re-export resource clients
pub use resources::{
    ApplicationsClient, CompaniesClient, ContactsClient, InvoiceHistoryClient, LogoViewBox,
    PaymentsClient, ProvisioningClient, UserAccountsClient, UserRolesClient,
};

// Re-export models
pub use models::{
    // Shared types
    ActionResultModel,
    AttachmentModel,
    BulkDeleteRequestModel,
    CustomFieldValueModel,
    DeleteResult,
    NoteModel,
    // Company types
    CompanyDetailsModel,
    CompanyModel,
    CustomerSummaryModel,
    MagicLinkSummaryModel,
    VendorSummaryModel,
    ViewBoxSettingsModel,
    // Contact types
    ContactModel,
    // Invoice types
    InvoiceHistoryModel,
    InvoiceModel,
    // Payment types
    PaymentAppliedModel,
    PaymentDetailHeaderModel,
    PaymentDetailModel,
    PaymentModel,
    PaymentSummaryModel,
    // User types
    InviteDataModel,
    InviteModel,
    InviteSubmitModel,
    SupportAccessModel,
    SupportAccessRequest,
    TransferOwnerModel,
    TransferOwnerSubmitModel,
    UserAccountModel,
    UserDataResponseModel,
    UserRoleModel,
    // Application and provisioning types
    ApplicationModel,
    ConnectorInfoModel,
    ErpInfoModel,
    ProvisioningFinalizeRequestModel,
    ProvisioningModel,
    ProvisioningResponseModel,
};
