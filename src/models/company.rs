//! Company records and the company summary views.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{AttachmentModel, CustomFieldValueModel, NoteModel};
use super::contact::ContactModel;
use super::invoice::InvoiceModel;

/// A customer, a vendor, or a company within the account holder's own
/// organization.
///
/// Companies can have parents and children, forming an organizational
/// hierarchy. Nested collections are only populated when named in the
/// `include` parameter (`Attachments`, `Contacts`, `CustomFields`,
/// `Invoices`, `Notes`, `Classification`).
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyModel {
    /// Platform-assigned id; NOT the ERP key.
    pub company_id: Option<String>,
    pub company_name: Option<String>,
    /// Primary key of this record in its originating financial system.
    pub erp_key: Option<String>,
    /// `Customer`, `Vendor`, `Group` or `Companies`.
    pub company_type: Option<String>,
    pub company_status: Option<String>,
    pub parent_company_id: Option<String>,
    pub enterprise_id: Option<String>,
    pub group_key: Option<String>,
    pub is_active: Option<bool>,
    pub default_currency_code: Option<String>,
    pub company_logo_url: Option<String>,
    pub primary_contact_id: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub city: Option<String>,
    pub state_region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub time_zone: Option<String>,
    pub phone_number: Option<String>,
    pub fax_number: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub created_user_id: Option<String>,
    pub modified: Option<DateTime<Utc>>,
    pub modified_user_id: Option<String>,
    pub tax_id: Option<String>,
    pub duns_number: Option<String>,
    pub ap_email_address: Option<String>,
    pub ar_email_address: Option<String>,
    pub domain_name: Option<String>,
    pub company_classification_code_def_id: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub app_enrollment_id: Option<String>,
    pub external_reference: Option<String>,
    pub notes: Option<Vec<NoteModel>>,
    pub attachments: Option<Vec<AttachmentModel>>,
    pub contacts: Option<Vec<ContactModel>>,
    pub invoices: Option<Vec<InvoiceModel>>,
    pub custom_field_values: Option<Vec<CustomFieldValueModel>>,
}

impl CompanyModel {
    /// A new company with just a name and type, ready to create.
    pub fn named(company_name: impl Into<String>, company_type: impl Into<String>) -> Self {
        Self {
            company_name: Some(company_name.into()),
            company_type: Some(company_type.into()),
            ..Default::default()
        }
    }

    /// Display name, falling back to the id.
    pub fn display_name(&self) -> &str {
        self.company_name
            .as_deref()
            .or(self.company_id.as_deref())
            .unwrap_or("")
    }
}

/// Customer Summary view: a company with accounts-receivable totals.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummaryModel {
    pub group_key: Option<String>,
    pub company_id: Option<String>,
    pub company_name: Option<String>,
    pub primary_contact: Option<String>,
    pub app_enrollment_id: Option<String>,
    pub outstanding_invoices: Option<i32>,
    pub total_invoices_open: Option<i32>,
    pub total_invoices_past_due: Option<i32>,
    pub closed_invoices: Option<i32>,
    pub amount_collected: Option<f64>,
    pub outstanding_amount: Option<f64>,
    pub amount_past_due: Option<f64>,
    pub unapplied_payments: Option<f64>,
    pub percent_of_total_ar: Option<f64>,
    pub dso: Option<f64>,
    pub newest_activity: Option<NaiveDate>,
    pub modified: Option<DateTime<Utc>>,
}

/// Vendor Summary view: a company with accounts-payable totals.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorSummaryModel {
    pub group_key: Option<String>,
    pub vendor_id: Option<String>,
    pub vendor_name: Option<String>,
    pub primary_contact_name: Option<String>,
    pub primary_contact_id: Option<String>,
    pub app_enrollment_id: Option<String>,
    pub amount_paid_last30: Option<f64>,
    pub advance_pay_last30: Option<f64>,
    pub advance_pay_outstanding: Option<f64>,
    pub amount_billed_last30: Option<f64>,
    pub amount_billed_outstanding: Option<f64>,
    pub bill_count_last30: Option<i32>,
    pub paid_bill_count_last30: Option<i32>,
    pub open_bill_count: Option<i32>,
    pub paid_bill_count: Option<i32>,
    pub total_bill_count: Option<i32>,
    pub dpo: Option<f64>,
    pub modified: Option<DateTime<Utc>>,
}

/// Magic Link Summary view: magic link activity per company.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MagicLinkSummaryModel {
    pub group_key: Option<String>,
    pub company_id: Option<String>,
    pub company_name: Option<String>,
    pub total_links: Option<i32>,
    pub active_links: Option<i32>,
    pub visits: Option<i32>,
    pub last_visited: Option<DateTime<Utc>>,
}

/// Company Detail view: a company with its primary contact and balances.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDetailsModel {
    pub group_key: Option<String>,
    pub company_id: Option<String>,
    pub company_name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub city: Option<String>,
    pub state_region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub phone_number: Option<String>,
    pub fax_number: Option<String>,
    pub email: Option<String>,
    pub primary_contact_id: Option<String>,
    pub primary_contact: Option<String>,
    pub outstanding_amount: Option<f64>,
    pub amount_past_due: Option<f64>,
    pub unapplied_payments: Option<f64>,
    pub percent_of_total_ar: Option<f64>,
}

/// View box meta data for a company's logo.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewBoxSettingsModel {
    pub min_x: Option<f64>,
    pub min_y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_deserialize_with_includes() {
        let json = r#"{
            "companyId": "abc-123",
            "companyName": "Acme",
            "companyType": "Customer",
            "erpKey": "CUST-0001",
            "groupKey": "g-1",
            "isActive": true,
            "created": "2022-04-01T12:00:00Z",
            "contacts": [{"contactId": "k-1", "contactName": "Pat Doe"}],
            "notes": [{"noteId": "n-1", "noteText": "VIP"}]
        }"#;

        let company: CompanyModel = serde_json::from_str(json).unwrap();

        assert_eq!(company.company_id.as_deref(), Some("abc-123"));
        assert_eq!(company.erp_key.as_deref(), Some("CUST-0001"));
        assert_eq!(company.is_active, Some(true));
        assert_eq!(company.contacts.as_ref().map(Vec::len), Some(1));
        assert_eq!(company.notes.as_ref().map(Vec::len), Some(1));
        assert!(company.invoices.is_none());
    }

    #[test]
    fn test_company_serialize_omits_absent_fields() {
        let company = CompanyModel::named("Acme", "Customer");
        let value = serde_json::to_value(&company).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"companyName": "Acme", "companyType": "Customer"})
        );
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let company = CompanyModel {
            company_id: Some("abc-123".to_string()),
            ..Default::default()
        };
        assert_eq!(company.display_name(), "abc-123");
    }

    #[test]
    fn test_view_box_wire_names() {
        let settings = ViewBoxSettingsModel {
            min_x: Some(0.0),
            min_y: Some(0.0),
            width: Some(120.5),
            height: Some(40.0),
        };
        let value = serde_json::to_value(&settings).unwrap();
        assert_eq!(value["minX"], 0.0);
        assert_eq!(value["width"], 120.5);
    }

    #[test]
    fn test_customer_summary_deserialize() {
        let json = r#"{
            "companyId": "c-1",
            "companyName": "Acme",
            "outstandingInvoices": 4,
            "amountPastDue": 1250.75,
            "newestActivity": "2023-02-01"
        }"#;
        let summary: CustomerSummaryModel = serde_json::from_str(json).unwrap();
        assert_eq!(summary.outstanding_invoices, Some(4));
        assert_eq!(summary.amount_past_due, Some(1250.75));
        assert_eq!(
            summary.newest_activity,
            NaiveDate::from_ymd_opt(2023, 2, 1)
        );
    }
}
