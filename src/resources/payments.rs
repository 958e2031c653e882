//! Payments: amounts received or sent against one or more Invoices.

use reqwest::Method;
use serde::Serialize;

use crate::casing::to_wire_body;
use crate::error::Result;
use crate::models::PaymentModel;
use crate::pagination::QueryOptions;
use crate::params::QueryParams;
use crate::transport::{ApiResponse, Transport};

const BASE: &str = "/api/v1/Payments";

/// Operations on the Payments resource.
///
/// A Payment is a financial transaction where one Company sends money to
/// another. It may be applied to one or more Invoices; any remainder is
/// tracked as the unapplied amount.
#[derive(Clone, Copy)]
pub struct PaymentsClient<'a> {
    connection: &'a dyn Transport,
}

impl<'a> PaymentsClient<'a> {
    pub fn new(connection: &'a dyn Transport) -> Self {
        Self { connection }
    }

    /// Retrieve a Payment. `include` accepts `Applications`, `Notes`,
    /// `Attachments` and `CustomFields`. Decodes as [`PaymentModel`].
    #[tracing::instrument(skip(self))]
    pub async fn retrieve_payment(&self, id: &str, include: Option<&str>) -> Result<ApiResponse> {
        let path = format!("{BASE}/{id}");
        let params = QueryParams::new().push_opt("include", include);
        self.connection.request(Method::GET, &path, None, params).await
    }

    /// Apply field changes to a Payment.
    #[tracing::instrument(skip(self, changes))]
    pub async fn update_payment<B: Serialize + ?Sized>(
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

    /// Delete a Payment.
    #[tracing::instrument(skip(self))]
    pub async fn delete_payment(&self, id: &str) -> Result<ApiResponse> {
        let path = format!("{BASE}/{id}");
        self.connection
            .request(Method::DELETE, &path, None, QueryParams::new())
            .await
    }

    /// Create one or more Payments. Decodes as `Vec<PaymentModel>`.
    #[tracing::instrument(skip(self, payments), fields(count = payments.len()))]
    pub async fn create_payments(&self, payments: &[PaymentModel]) -> Result<ApiResponse> {
        let body = to_wire_body(payments)?;
        self.connection
            .request(Method::POST, BASE, Some(body), QueryParams::new())
            .await
    }

    /// Query Payments. Decodes as `FetchResult<PaymentModel>`.
    #[tracing::instrument(skip(self))]
    pub async fn query_payments(&self, options: &QueryOptions) -> Result<ApiResponse> {
        let path = format!("{BASE}/query");
        let params = QueryParams::from_serialize(options)?;
        self.connection.request(Method::GET, &path, None, params).await
    }

    /// Retrieve a Payment rendered as a PDF. The body holds the raw document.
    #[tracing::instrument(skip(self))]
    pub async fn retrieve_payment_pdf(&self, id: &str) -> Result<ApiResponse> {
        let path = format!("{BASE}/{id}/pdf");
        self.connection
            .request(Method::GET, &path, None, QueryParams::new())
            .await
    }

    /// Check whether a PDF can be produced for a Payment without downloading
    /// it. The response has no body; inspect its status.
    #[tracing::instrument(skip(self))]
    pub async fn check_payment_pdf(&self, id: &str) -> Result<ApiResponse> {
        let path = format!("{BASE}/{id}/pdf");
        self.connection
            .request(Method::HEAD, &path, None, QueryParams::new())
            .await
    }

    /// Query the Payment Summary view. Decodes as
    /// `FetchResult<PaymentSummaryModel>`.
    #[tracing::instrument(skip(self))]
    pub async fn query_payment_summary_view(&self, options: &QueryOptions) -> Result<ApiResponse> {
        let path = format!("{BASE}/views/summary");
        let params = QueryParams::from_serialize(options)?;
        self.connection.request(Method::GET, &path, None, params).await
    }

    /// Retrieve aggregate counts and amounts across the account's Payments.
    /// Decodes as [`PaymentDetailHeaderModel`](crate::PaymentDetailHeaderModel).
    #[tracing::instrument(skip(self))]
    pub async fn retrieve_payment_detail_header(&self) -> Result<ApiResponse> {
        let path = format!("{BASE}/views/detail-header");
        self.connection
            .request(Method::GET, &path, None, QueryParams::new())
            .await
    }

    /// Query the Payment Detail view. Decodes as
    /// `FetchResult<PaymentDetailModel>`.
    #[tracing::instrument(skip(self))]
    pub async fn query_payment_detail_view(&self, options: &QueryOptions) -> Result<ApiResponse> {
        let path = format!("{BASE}/views/detail");
        let params = QueryParams::from_serialize(options)?;
        self.connection.request(Method::GET, &path, None, params).await
    }
}
