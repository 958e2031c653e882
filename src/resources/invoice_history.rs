//! Historical snapshots of Invoices.

use reqwest::Method;

use crate::error::Result;
use crate::pagination::QueryOptions;
use crate::params::QueryParams;
use crate::transport::{ApiResponse, Transport};

const BASE: &str = "/api/v1/InvoiceHistory";

/// Read-only operations on the InvoiceHistory resource.
///
/// Every change to an Invoice is stored as a history record; the newest one
/// matches the current Invoice.
#[derive(Clone, Copy)]
pub struct InvoiceHistoryClient<'a> {
    connection: &'a dyn Transport,
}

impl<'a> InvoiceHistoryClient<'a> {
    pub fn new(connection: &'a dyn Transport) -> Self {
        Self { connection }
    }

    /// Retrieve the history records of one Invoice. Decodes as
    /// `FetchResult<InvoiceHistoryModel>`.
    #[tracing::instrument(skip(self))]
    pub async fn retrieve_invoice_history(&self, id: &str) -> Result<ApiResponse> {
        let path = format!("{BASE}/{id}");
        self.connection
            .request(Method::GET, &path, None, QueryParams::new())
            .await
    }

    /// Query history records across Invoices.
    #[tracing::instrument(skip(self))]
    pub async fn query_invoice_history(&self, options: &QueryOptions) -> Result<ApiResponse> {
        let path = format!("{BASE}/query");
        let params = QueryParams::from_serialize(options)?;
        self.connection.request(Method::GET, &path, None, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InvoiceHistoryModel;
    use crate::test_support::RecordingTransport;
    use crate::FetchResult;

    #[tokio::test]
    async fn test_retrieve_invoice_history() {
        let transport = RecordingTransport::responding_with(
            r#"{"records":[{"invoiceHistoryId":"h-1","invoiceId":"inv-9","totalAmount":100.0}]}"#,
        );
        let response = InvoiceHistoryClient::new(&transport)
            .retrieve_invoice_history("inv-9")
            .await
            .unwrap();

        let request = transport.only_request();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/api/v1/InvoiceHistory/inv-9");
        assert!(request.params.is_empty());

        let page: FetchResult<InvoiceHistoryModel> = response.json().unwrap();
        assert_eq!(page.records[0].invoice_id.as_deref(), Some("inv-9"));
    }

    #[tokio::test]
    async fn test_query_invoice_history() {
        let transport = RecordingTransport::new();
        InvoiceHistoryClient::new(&transport)
            .query_invoice_history(&QueryOptions::new().filter("InvoiceId eq 'inv-9'"))
            .await
            .unwrap();

        let request = transport.only_request();
        assert_eq!(request.path, "/api/v1/InvoiceHistory/query");
        assert_eq!(request.params.get("filter"), Some("InvoiceId eq 'inv-9'"));
    }
}
