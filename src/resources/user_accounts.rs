//! User accounts within the caller's group.

use reqwest::Method;
use serde::Serialize;

use crate::casing::to_wire_body;
use crate::error::Result;
use crate::models::{InviteSubmitModel, SupportAccessRequest, TransferOwnerSubmitModel};
use crate::pagination::QueryOptions;
use crate::params::QueryParams;
use crate::transport::{ApiResponse, Transport};

const BASE: &str = "/api/v1/UserAccounts";

/// Operations on the UserAccounts resource.
#[derive(Clone, Copy)]
pub struct UserAccountsClient<'a> {
    connection: &'a dyn Transport,
}

impl<'a> UserAccountsClient<'a> {
    pub fn new(connection: &'a dyn Transport) -> Self {
        Self { connection }
    }

    /// Retrieve a User. `include` accepts `Notes`, `Attachments`,
    /// `CustomFields` and `AccountingRole`. Decodes as
    /// [`UserAccountModel`](crate::UserAccountModel).
    #[tracing::instrument(skip(self))]
    pub async fn retrieve_user(&self, id: &str, include: Option<&str>) -> Result<ApiResponse> {
        let path = format!("{BASE}/{id}");
        let params = QueryParams::new().push_opt("include", include);
        self.connection.request(Method::GET, &path, None, params).await
    }

    /// Apply field changes to a User.
    #[tracing::instrument(skip(self, changes))]
    pub async fn update_user<B: Serialize + ?Sized>(
        &self,
        id: &str,
        changes: &B,
    ) -> Result<ApiResponse> {
        let path = format!("{BASE}/{id}");
        let body = to_wire_body(changes)?;
        self.connection
            .request(Method::PATCH, &path, Some(body), QueryParams::new())
            .await
    }

    /// Disable a User. The account is kept but can no longer sign in.
    #[tracing::instrument(skip(self))]
    pub async fn disable_user(&self, id: &str) -> Result<ApiResponse> {
        let path = format!("{BASE}/{id}");
        self.connection
            .request(Method::DELETE, &path, None, QueryParams::new())
            .await
    }

    /// Invite users by email. Decodes as `Vec<InviteModel>`, one entry per
    /// address.
    #[tracing::instrument(skip(self, invites), fields(count = invites.len()))]
    pub async fn invite_user(&self, invites: &[InviteSubmitModel]) -> Result<ApiResponse> {
        let path = format!("{BASE}/invite");
        let body = to_wire_body(invites)?;
        self.connection
            .request(Method::POST, &path, Some(body), QueryParams::new())
            .await
    }

    /// Look up the invite behind an invitation code. Decodes as
    /// [`InviteDataModel`](crate::InviteDataModel).
    #[tracing::instrument(skip(self, code))]
    pub async fn retrieve_invite_data(&self, code: &str) -> Result<ApiResponse> {
        let path = format!("{BASE}/invite");
        let params = QueryParams::new().push("code", code);
        self.connection.request(Method::GET, &path, None, params).await
    }

    /// Transfer group ownership to another user. Decodes as
    /// [`TransferOwnerModel`](crate::TransferOwnerModel).
    #[tracing::instrument(skip(self))]
    pub async fn transfer_owner(&self, request: &TransferOwnerSubmitModel) -> Result<ApiResponse> {
        let path = format!("{BASE}/transfer-owner");
        let body = to_wire_body(request)?;
        self.connection
            .request(Method::POST, &path, Some(body), QueryParams::new())
            .await
    }

    /// Query Users. Decodes as `FetchResult<UserAccountModel>`.
    #[tracing::instrument(skip(self))]
    pub async fn query_users(&self, options: &QueryOptions) -> Result<ApiResponse> {
        let path = format!("{BASE}/query");
        let params = QueryParams::from_serialize(options)?;
        self.connection.request(Method::GET, &path, None, params).await
    }

    /// Switch the caller's active group.
    #[tracing::instrument(skip(self))]
    pub async fn change_user_group(&self, group_key: &str) -> Result<ApiResponse> {
        let path = format!("{BASE}/change-group");
        let params = QueryParams::new().push("groupKey", group_key);
        self.connection.request(Method::POST, &path, None, params).await
    }

    /// Retrieve data about the calling user. Decodes as
    /// [`UserDataResponseModel`](crate::UserDataResponseModel).
    #[tracing::instrument(skip(self))]
    pub async fn get_user_data(&self, include: Option<&str>) -> Result<ApiResponse> {
        let path = format!("{BASE}/user-data");
        let params = QueryParams::new().push_opt("include", include);
        self.connection.request(Method::GET, &path, None, params).await
    }

    /// Grant or revoke support access for the caller's group. A request with
    /// no expiration date revokes access. Decodes as
    /// [`SupportAccessModel`](crate::SupportAccessModel).
    #[tracing::instrument(skip(self))]
    pub async fn set_support_access(&self, request: &SupportAccessRequest) -> Result<ApiResponse> {
        let path = format!("{BASE}/support-access");
        let body = to_wire_body(request)?;
        self.connection
            .request(Method::POST, &path, Some(body), QueryParams::new())
            .await
    }
}
