//! Contacts: people who work for a Company.

use reqwest::Method;
use serde::Serialize;

use crate::casing::to_wire_body;
use crate::error::Result;
use crate::models::ContactModel;
use crate::pagination::QueryOptions;
use crate::params::QueryParams;
use crate::transport::{ApiResponse, Transport};

const BASE: &str = "/api/v1/Contacts";

/// Operations on the Contacts resource.
#[derive(Clone, Copy)]
pub struct ContactsClient<'a> {
    connection: &'a dyn Transport,
}

impl<'a> ContactsClient<'a> {
    pub fn new(connection: &'a dyn Transport) -> Self {
        Self { connection }
    }

    /// Retrieve a Contact. `include` accepts `Attachments`, `CustomFields`
    /// and `Notes`. Decodes as [`ContactModel`].
    #[tracing::instrument(skip(self))]
    pub async fn retrieve_contact(&self, id: &str, include: Option<&str>) -> Result<ApiResponse> {
        let path = format!("{BASE}/{id}");
        let params = QueryParams::new().push_opt("include", include);
        self.connection.request(Method::GET, &path, None, params).await
    }

    /// Apply field changes to a Contact.
    #[tracing::instrument(skip(self, changes))]
    pub async fn update_contact<B: Serialize + ?Sized>(
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

    /// Disable a Contact. Contacts are never hard deleted; the server marks
    /// the record inactive.
    #[tracing::instrument(skip(self))]
    pub async fn disable_contact(&self, id: &str) -> Result<ApiResponse> {
        let path = format!("{BASE}/{id}");
        self.connection
            .request(Method::DELETE, &path, None, QueryParams::new())
            .await
    }

    /// Create one or more Contacts. Decodes as `Vec<ContactModel>`.
    #[tracing::instrument(skip(self, contacts), fields(count = contacts.len()))]
    pub async fn create_contacts(&self, contacts: &[ContactModel]) -> Result<ApiResponse> {
        let body = to_wire_body(contacts)?;
        self.connection
            .request(Method::POST, BASE, Some(body), QueryParams::new())
            .await
    }

    /// Query Contacts. Decodes as `FetchResult<ContactModel>`.
    #[tracing::instrument(skip(self))]
    pub async fn query_contacts(&self, options: &QueryOptions) -> Result<ApiResponse> {
        let path = format!("{BASE}/query");
        let params = QueryParams::from_serialize(options)?;
        self.connection.request(Method::GET, &path, None, params).await
    }
}
