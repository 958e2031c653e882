//! Applications published in the Lockstep marketplace.

use reqwest::Method;
use serde::Serialize;

use crate::casing::to_wire_body;
use crate::error::Result;
use crate::models::ApplicationModel;
use crate::pagination::QueryOptions;
use crate::params::QueryParams;
use crate::transport::{ApiResponse, Transport};

const BASE: &str = "/api/v1/Applications";

/// Operations on the Applications resource.
///
/// An Application is a feature or integration that can be enrolled into a
/// group, such as an ERP connector.
#[derive(Clone, Copy)]
pub struct ApplicationsClient<'a> {
    connection: &'a dyn Transport,
}

impl<'a> ApplicationsClient<'a> {
    pub fn new(connection: &'a dyn Transport) -> Self {
        Self { connection }
    }

    /// Retrieve an Application. `include` accepts `Notes`, `Attachments` and
    /// `CustomFields`. Decodes as [`ApplicationModel`].
    #[tracing::instrument(skip(self))]
    pub async fn retrieve_application(
        &self,
        id: &str,
        include: Option<&str>,
    ) -> Result<ApiResponse> {
        let path = format!("{BASE}/{id}");
        let params = QueryParams::new().push_opt("include", include);
        self.connection.request(Method::GET, &path, None, params).await
    }

    #[tracing::instrument(skip(self, changes))]
    pub async fn update_application<B: Serialize + ?Sized>(
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

    #[tracing::instrument(skip(self))]
    pub async fn delete_application(&self, id: &str) -> Result<ApiResponse> {
        let path = format!("{BASE}/{id}");
        self.connection
            .request(Method::DELETE, &path, None, QueryParams::new())
            .await
    }

    /// Create one or more Applications. Decodes as `Vec<ApplicationModel>`.
    #[tracing::instrument(skip(self, applications), fields(count = applications.len()))]
    pub async fn create_applications(
        &self,
        applications: &[ApplicationModel],
    ) -> Result<ApiResponse> {
        let body = to_wire_body(applications)?;
        self.connection
            .request(Method::POST, BASE, Some(body), QueryParams::new())
            .await
    }

    /// Query Applications. Decodes as `FetchResult<ApplicationModel>`.
    #[tracing::instrument(skip(self))]
    pub async fn query_applications(&self, options: &QueryOptions) -> Result<ApiResponse> {
        let path = format!("{BASE}/query");
        let params = QueryParams::from_serialize(options)?;
        self.connection.request(Method::GET, &path, None, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingTransport;
    use crate::transport::RequestBody;
    use serde_json::json;

    #[tokio::test]
    async fn test_crud_paths() {
        let transport = RecordingTransport::new();
        let client = ApplicationsClient::new(&transport);
        client
            .retrieve_application("app-1", Some("Notes"))
            .await
            .unwrap();
        let request = transport.only_request();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/api/v1/Applications/app-1");

        let transport = RecordingTransport::new();
        ApplicationsClient::new(&transport)
            .delete_application("app-1")
            .await
            .unwrap();
        let request = transport.only_request();
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(request.path, "/api/v1/Applications/app-1");
    }

    #[tokio::test]
    async fn test_update_application() {
        let transport = RecordingTransport::new();
        ApplicationsClient::new(&transport)
            .update_application("app-1", &json!({"wiki_url": "https://wiki.test/app"}))
            .await
            .unwrap();

        let request = transport.only_request();
        assert_eq!(request.method, Method::PATCH);
        assert_eq!(
            request.body.as_ref().and_then(RequestBody::as_json),
            Some(&json!({"wikiUrl": "https://wiki.test/app"}))
        );
    }

    #[tokio::test]
    async fn test_create_and_query_applications() {
        let transport = RecordingTransport::new();
        let app = ApplicationModel {
            name: Some("QuickBooks Online".to_string()),
            app_type: Some("ERP".to_string()),
            ..Default::default()
        };
        ApplicationsClient::new(&transport)
            .create_applications(&[app])
            .await
            .unwrap();
        let request = transport.only_request();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "/api/v1/Applications");
        assert_eq!(
            request.body.as_ref().and_then(RequestBody::as_json),
            Some(&json!([{"name": "QuickBooks Online", "appType": "ERP"}]))
        );

        let transport = RecordingTransport::new();
        ApplicationsClient::new(&transport)
            .query_applications(&QueryOptions::new().filter("AppType eq 'ERP'"))
            .await
            .unwrap();
        let request = transport.only_request();
        assert_eq!(request.path, "/api/v1/Applications/query");
        assert_eq!(request.params.get("filter"), Some("AppType eq 'ERP'"));
    }
}
