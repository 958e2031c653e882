//! Invoice records and invoice history.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{AttachmentModel, CustomFieldValueModel, NoteModel};
use super::company::CompanyModel;
use super::contact::ContactModel;

/// A bill sent from one company to another.
///
/// The creator is identified by `company_id` and the recipient by
/// `customer_id`. Once payments have been made, `total_amount` and
/// `outstanding_balance_amount` may differ.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceModel {
    pub group_key: Option<String>,
    pub invoice_id: Option<String>,
    pub company_id: Option<String>,
    pub customer_id: Option<String>,
    pub erp_key: Option<String>,
    pub purchase_order_code: Option<String>,
    pub reference_code: Option<String>,
    pub salesperson_code: Option<String>,
    pub salesperson_name: Option<String>,
    pub invoice_type_code: Option<String>,
    pub invoice_status_code: Option<String>,
    pub terms_code: Option<String>,
    pub special_terms: Option<String>,
    /// ISO 4217 currency code.
    pub currency_code: Option<String>,
    pub total_amount: Option<f64>,
    pub sales_tax_amount: Option<f64>,
    pub discount_amount: Option<f64>,
    pub outstanding_balance_amount: Option<f64>,
    pub invoice_date: Option<NaiveDate>,
    pub discount_date: Option<NaiveDate>,
    pub posted_date: Option<NaiveDate>,
    pub invoice_closed_date: Option<NaiveDate>,
    pub payment_due_date: Option<NaiveDate>,
    pub imported_date: Option<DateTime<Utc>>,
    pub primary_origin_address_id: Option<String>,
    pub primary_bill_to_address_id: Option<String>,
    pub primary_ship_to_address_id: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub created_user_id: Option<String>,
    pub modified: Option<DateTime<Utc>>,
    pub modified_user_id: Option<String>,
    pub app_enrollment_id: Option<String>,
    pub is_voided: Option<bool>,
    pub in_dispute: Option<bool>,
    pub exclude_from_aging: Option<bool>,
    pub notes: Option<Vec<NoteModel>>,
    pub attachments: Option<Vec<AttachmentModel>>,
    /// Included with `Company`.
    pub company: Option<Box<CompanyModel>>,
    /// Included with `Customer`.
    pub customer: Option<Box<CompanyModel>>,
    /// Included with `Customer`.
    pub customer_primary_contact: Option<Box<ContactModel>>,
    pub custom_field_values: Option<Vec<CustomFieldValueModel>>,
}

impl InvoiceModel {
    /// Whether any balance remains to be paid.
    pub fn is_outstanding(&self) -> bool {
        self.outstanding_balance_amount.is_some_and(|b| b > 0.0)
    }
}

/// A snapshot of an invoice at the time it changed.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceHistoryModel {
    pub group_key: Option<String>,
    pub invoice_history_id: Option<String>,
    pub invoice_id: Option<String>,
    pub company_id: Option<String>,
    pub customer_id: Option<String>,
    pub erp_key: Option<String>,
    pub purchase_order_code: Option<String>,
    pub reference_code: Option<String>,
    pub salesperson_code: Option<String>,
    pub salesperson_name: Option<String>,
    pub invoice_type_code: Option<String>,
    pub invoice_status_code: Option<String>,
    pub terms_code: Option<String>,
    pub special_terms: Option<String>,
    pub currency_code: Option<String>,
    pub total_amount: Option<f64>,
    pub sales_tax_amount: Option<f64>,
    pub discount_amount: Option<f64>,
    pub outstanding_balance_amount: Option<f64>,
    pub invoice_date: Option<NaiveDate>,
    pub discount_date: Option<NaiveDate>,
    pub posted_date: Option<NaiveDate>,
    pub invoice_closed_date: Option<NaiveDate>,
    pub payment_due_date: Option<NaiveDate>,
    pub imported_date: Option<DateTime<Utc>>,
    pub created: Option<DateTime<Utc>>,
    pub created_user_id: Option<String>,
    pub modified: Option<DateTime<Utc>>,
    pub modified_user_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_deserialize() {
        let json = r#"{
            "invoiceId": "i-1",
            "companyId": "c-1",
            "customerId": "c-2",
            "erpKey": "INV-0042",
            "currencyCode": "USD",
            "totalAmount": 1000.0,
            "outstandingBalanceAmount": 250.0,
            "invoiceDate": "2023-01-15",
            "paymentDueDate": "2023-02-14",
            "customer": {"companyId": "c-2", "companyName": "Globex"}
        }"#;

        let invoice: InvoiceModel = serde_json::from_str(json).unwrap();
        assert_eq!(invoice.erp_key.as_deref(), Some("INV-0042"));
        assert_eq!(invoice.invoice_date, NaiveDate::from_ymd_opt(2023, 1, 15));
        assert!(invoice.is_outstanding());
        assert_eq!(
            invoice.customer.as_ref().and_then(|c| c.company_name.as_deref()),
            Some("Globex")
        );
    }

    #[test]
    fn test_paid_invoice_is_not_outstanding() {
        let invoice = InvoiceModel {
            outstanding_balance_amount: Some(0.0),
            ..Default::default()
        };
        assert!(!invoice.is_outstanding());
        assert!(!InvoiceModel::default().is_outstanding());
    }

    #[test]
    fn test_invoice_history_deserialize() {
        let json = r#"{"invoiceHistoryId": "h-1", "invoiceId": "i-1", "invoiceStatusCode": "Paid"}"#;
        let history: InvoiceHistoryModel = serde_json::from_str(json).unwrap();
        assert_eq!(history.invoice_history_id.as_deref(), Some("h-1"));
        assert_eq!(history.invoice_status_code.as_deref(), Some("Paid"));
    }
}
