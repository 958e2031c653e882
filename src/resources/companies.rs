//! Companies: customers, vendors and the account holder's own entities.

use std::path::Path;

use reqwest::Method;
use serde::Serialize;

use crate::casing::to_wire_body;
use crate::error::Result;
use crate::models::{BulkDeleteRequestModel, CompanyModel, ViewBoxSettingsModel};
use crate::pagination::{QueryOptions, SummaryQueryOptions};
use crate::params::QueryParams;
use crate::transport::{ApiResponse, FileUpload, RequestBody, Transport};

const BASE: &str = "/api/v1/Companies";

/// View box meta data sent alongside a logo upload.
///
/// The API accepts either all four values or none of them, so the whole box
/// is optional rather than each coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LogoViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

/// Operations on the Companies resource.
///
/// A Company represents a customer, a vendor, or a company within the
/// organization of the account holder.
#[derive(Clone, Copy)]
pub struct CompaniesClient<'a> {
    connection: &'a dyn Transport,
}

impl<'a> CompaniesClient<'a> {
    /// Wrap a transport.
    pub fn new(connection: &'a dyn Transport) -> Self {
        Self { connection }
    }

    /// Retrieve a Company by its platform id, optionally including nested
    /// collections (`Attachments`, `Contacts`, `CustomFields`, `Invoices`,
    /// `Notes`, `Classification`).
    ///
    /// Decodes as [`CompanyModel`].
    #[tracing::instrument(skip(self))]
    pub async fn retrieve_company(&self, id: &str, include: Option<&str>) -> Result<ApiResponse> {
        let path = format!("{BASE}/{id}");
        let params = QueryParams::new().push_opt("include", include);
        self.connection.request(Method::GET, &path, None, params).await
    }

    /// Apply a set of field changes to a Company. Fields not named in
    /// `changes` are left untouched. Keys may be snake_case or camelCase.
    #[tracing::instrument(skip(self, changes))]
    pub async fn update_company<B: Serialize + ?Sized>(
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

    /// Delete a Company.
    #[tracing::instrument(skip(self))]
    pub async fn delete_company(&self, id: &str) -> Result<ApiResponse> {
        let path = format!("{BASE}/{id}");
        self.connection
            .request(Method::DELETE, &path, None, QueryParams::new())
            .await
    }

    /// Create one or more Companies. Decodes as `Vec<CompanyModel>`.
    #[tracing::instrument(skip(self, companies), fields(count = companies.len()))]
    pub async fn create_companies(&self, companies: &[CompanyModel]) -> Result<ApiResponse> {
        let body = to_wire_body(companies)?;
        self.connection
            .request(Method::POST, BASE, Some(body), QueryParams::new())
            .await
    }

    /// Delete several Companies by platform id. Decodes as
    /// [`DeleteResult`](crate::DeleteResult).
    #[tracing::instrument(skip(self, request), fields(count = request.id_list.len()))]
    pub async fn delete_companies(&self, request: &BulkDeleteRequestModel) -> Result<ApiResponse> {
        let body = to_wire_body(request)?;
        self.connection
            .request(Method::DELETE, BASE, Some(body), QueryParams::new())
            .await
    }

    /// Query Companies. Decodes as `FetchResult<CompanyModel>`.
    #[tracing::instrument(skip(self))]
    pub async fn query_companies(&self, options: &QueryOptions) -> Result<ApiResponse> {
        let path = format!("{BASE}/query");
        let params = QueryParams::from_serialize(options)?;
        self.connection.request(Method::GET, &path, None, params).await
    }

    /// Query the Customer Summary view, calculated as of `report_date`.
    /// Decodes as `FetchResult<CustomerSummaryModel>`.
    #[tracing::instrument(skip(self))]
    pub async fn query_customer_summary(
        &self,
        options: &SummaryQueryOptions,
    ) -> Result<ApiResponse> {
        let path = format!("{BASE}/views/customer-summary");
        let params = QueryParams::from_serialize(options)?;
        self.connection.request(Method::GET, &path, None, params).await
    }

    /// Query the Vendor Summary view, calculated as of `report_date`.
    /// Decodes as `FetchResult<VendorSummaryModel>`.
    #[tracing::instrument(skip(self))]
    pub async fn query_vendor_summary(&self, options: &SummaryQueryOptions) -> Result<ApiResponse> {
        let path = format!("{BASE}/views/vendor-summary");
        let params = QueryParams::from_serialize(options)?;
        self.connection.request(Method::GET, &path, None, params).await
    }

    /// Query the Magic Link Summary view.
    #[tracing::instrument(skip(self))]
    pub async fn query_magic_link_summary(&self, options: &QueryOptions) -> Result<ApiResponse> {
        let path = format!("{BASE}/views/magic-link-summary");
        let params = QueryParams::from_serialize(options)?;
        self.connection.request(Method::GET, &path, None, params).await
    }

    /// Retrieve the Company Detail view. Decodes as
    /// [`CompanyDetailsModel`](crate::CompanyDetailsModel).
    #[tracing::instrument(skip(self))]
    pub async fn retrieve_company_detail(&self, id: &str) -> Result<ApiResponse> {
        let path = format!("{BASE}/views/details/{id}");
        self.connection
            .request(Method::GET, &path, None, QueryParams::new())
            .await
    }

    /// Upload the logo at `filename` for a Company.
    ///
    /// The logo is stored on the platform and is publicly accessible.
    /// `.jpg`, `.jpeg`, `.png` and `.webp` files up to 2MB are accepted.
    ///
    /// # Errors
    ///
    /// Fails before any request is made if the file cannot be read.
    #[tracing::instrument(skip(self))]
    pub async fn set_company_logo(
        &self,
        id: &str,
        view_box: Option<LogoViewBox>,
        filename: &Path,
    ) -> Result<ApiResponse> {
        let path = format!("{BASE}/{id}/logo");
        let params = match view_box {
            Some(view_box) => QueryParams::from_serialize(&view_box)?,
            None => QueryParams::new(),
        };
        let upload = FileUpload::from_path(filename).await?;
        self.connection
            .request(Method::POST, &path, Some(RequestBody::File(upload)), params)
            .await
    }

    /// Update the view box meta data of a Company's logo.
    #[tracing::instrument(skip(self))]
    pub async fn update_logo_view_box_settings(
        &self,
        id: &str,
        settings: &ViewBoxSettingsModel,
    ) -> Result<ApiResponse> {
        let path = format!("{BASE}/{id}/logo-settings");
        let body = to_wire_body(settings)?;
        self.connection
            .request(Method::PATCH, &path, Some(body), QueryParams::new())
            .await
    }
}
