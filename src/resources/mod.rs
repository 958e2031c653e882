//! One client per REST resource.
//!
//! Each client borrows a [`Transport`](crate::Transport) and maps its operations onto a verb,
//! a path under `/api/v1` and the query parameters or body that operation
//! takes. Responses are handed back untouched as [`ApiResponse`](crate::ApiResponse).

mod applications;
mod companies;
mod contacts;
mod invoice_history;
mod payments;
mod provisioning;
mod user_accounts;
mod user_roles;

pub use applications::ApplicationsClient;
pub use companies::{CompaniesClient, LogoViewBox};
pub use contacts::ContactsClient;
pub use invoice_history::InvoiceHistoryClient;
pub use payments::PaymentsClient;
pub use provisioning::ProvisioningClient;
pub use user_accounts::UserAccountsClient;
pub use user_roles::UserRolesClient;

use crate::client::LockstepClient;

impl LockstepClient {
    /// Companies, including customer and vendor summary views.
    pub fn companies(&self) -> CompaniesClient<'_> {
        CompaniesClient::new(self)
    }

    pub fn contacts(&self) -> ContactsClient<'_> {
        ContactsClient::new(self)
    }

    pub fn payments(&self) -> PaymentsClient<'_> {
        PaymentsClient::new(self)
    }

    pub fn user_accounts(&self) -> UserAccountsClient<'_> {
        UserAccountsClient::new(self)
    }

    pub fn user_roles(&self) -> UserRolesClient<'_> {
        UserRolesClient::new(self)
    }

    pub fn applications(&self) -> ApplicationsClient<'_> {
        ApplicationsClient::new(self)
    }

    pub fn invoice_history(&self) -> InvoiceHistoryClient<'_> {
        InvoiceHistoryClient::new(self)
    }

    pub fn provisioning(&self) -> ProvisioningClient<'_> {
        ProvisioningClient::new(self)
    }
}

