//! Self-service provisioning of new user accounts.

use reqwest::Method;

use crate::casing::to_wire_body;
use crate::error::Result;
use crate::models::{ProvisioningFinalizeRequestModel, ProvisioningModel};
use crate::params::QueryParams;
use crate::transport::{ApiResponse, Transport};

const BASE: &str = "/api/v1/Provisioning";

#[derive(Clone, Copy)]
pub struct ProvisioningClient<'a> {
    connection: &'a dyn Transport,
}

impl<'a> ProvisioningClient<'a> {
    pub fn new(connection: &'a dyn Transport) -> Self {
        Self { connection }
    }

    /// Create a user account and group, optionally enrolling an ERP
    /// connector. Decodes as [`ProvisioningResponseModel`](crate::ProvisioningResponseModel).
    #[tracing::instrument(skip(self, request))]
    pub async fn provision_user_account(&self, request: &ProvisioningModel) -> Result<ApiResponse> {
        let body = to_wire_body(request)?;
        self.connection
            .request(Method::POST, BASE, Some(body), QueryParams::new())
            .await
    }

    /// Complete provisioning for a user created through an external sign-up.
    #[tracing::instrument(skip(self, request))]
    pub async fn finalize_user_account_provisioning(
        &self,
        request: &ProvisioningFinalizeRequestModel,
    ) -> Result<ApiResponse> {
        let path = format!("{BASE}/finalize");
        let body = to_wire_body(request)?;
        self.connection
            .request(Method::POST, &path, Some(body), QueryParams::new())
            .await
    }
}
