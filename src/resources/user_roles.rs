//! User roles defined for the caller's group.

use reqwest::Method;

use crate::error::Result;
use crate::pagination::QueryOptions;
use crate::params::QueryParams;
use crate::transport::{ApiResponse, Transport};

const BASE: &str = "/api/v1/UserRoles";

/// Read-only operations on the UserRoles resource.
#[derive(Clone, Copy)]
pub struct UserRolesClient<'a> {
    connection: &'a dyn Transport,
}

impl<'a> UserRolesClient<'a> {
    pub fn new(connection: &'a dyn Transport) -> Self {
        Self { connection }
    }

    /// Retrieve a User Role. Decodes as [`UserRoleModel`](crate::UserRoleModel).
    #[tracing::instrument(skip(self))]
    pub async fn retrieve_user_role(&self, id: &str, include: Option<&str>) -> Result<ApiResponse> {
        let path = format!("{BASE}/{id}");
        let params = QueryParams::new().push_opt("include", include);
        self.connection.request(Method::GET, &path, None, params).await
    }

    /// Query User Roles. Decodes as `FetchResult<UserRoleModel>`.
    #[tracing::instrument(skip(self))]
    pub async fn query_user_roles(&self, options: &QueryOptions) -> Result<ApiResponse> {
        let path = format!("{BASE}/query");
        let params = QueryParams::from_serialize(options)?;
        self.connection.request(Method::GET, &path, None, params).await
    }
}
