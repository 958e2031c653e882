//! Payment records and payment views.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{AttachmentModel, CustomFieldValueModel, NoteModel};

/// Money sent from one company to another.
///
/// A payment may cover several invoices or be made in advance as a deposit.
/// The recipient is identified by `company_id`. A nonzero
/// `unapplied_amount` is a deposit not yet applied to an Invoice.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentModel {
    pub group_key: Option<String>,
    /// Platform-assigned id; NOT the ERP key.
    pub payment_id: Option<String>,
    pub company_id: Option<String>,
    pub erp_key: Option<String>,
    pub payment_type: Option<String>,
    pub tender_type: Option<String>,
    pub is_open: Option<bool>,
    pub memo_text: Option<String>,
    pub payment_date: Option<NaiveDate>,
    pub post_date: Option<NaiveDate>,
    pub payment_amount: Option<f64>,
    pub unapplied_amount: Option<f64>,
    pub currency_code: Option<String>,
    pub reference_code: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub created_user_id: Option<String>,
    pub modified: Option<DateTime<Utc>>,
    pub modified_user_id: Option<String>,
    pub app_enrollment_id: Option<String>,
    pub is_voided: Option<bool>,
    pub in_dispute: Option<bool>,
    /// Included with `Applications`.
    pub applications: Option<Vec<PaymentAppliedModel>>,
    pub notes: Option<Vec<NoteModel>>,
    pub attachments: Option<Vec<AttachmentModel>>,
    pub custom_field_values: Option<Vec<CustomFieldValueModel>>,
}

impl PaymentModel {
    /// Whether part of this payment has not been applied to an invoice.
    pub fn has_unapplied_amount(&self) -> bool {
        self.unapplied_amount.is_some_and(|a| a != 0.0)
    }
}

/// The portion of a payment applied to one invoice.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAppliedModel {
    pub group_key: Option<String>,
    pub payment_applied_id: Option<String>,
    pub invoice_id: Option<String>,
    pub payment_id: Option<String>,
    pub erp_key: Option<String>,
    pub entry_number: Option<i32>,
    pub apply_to_invoice_date: Option<NaiveDate>,
    pub payment_applied_amount: Option<f64>,
    pub created: Option<DateTime<Utc>>,
    pub created_user_id: Option<String>,
    pub modified: Option<DateTime<Utc>>,
    pub modified_user_id: Option<String>,
    pub app_enrollment_id: Option<String>,
}

/// Payment Summary view.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSummaryModel {
    pub group_key: Option<String>,
    pub payment_id: Option<String>,
    pub memo_text: Option<String>,
    pub reference_code: Option<String>,
    pub customer_name: Option<String>,
    pub customer_id: Option<String>,
    pub tender_type: Option<String>,
    pub payment_date: Option<NaiveDate>,
    pub payment_amount: Option<f64>,
    pub unapplied_amount: Option<f64>,
    pub payment_type: Option<String>,
    pub is_open: Option<bool>,
    pub invoice_count: Option<i32>,
    pub total_payments_applied: Option<f64>,
    pub invoice_list: Option<Vec<String>>,
    pub invoice_id_list: Option<Vec<String>>,
}

/// Payment Detail view.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetailModel {
    pub group_key: Option<String>,
    pub payment_id: Option<String>,
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub memo_text: Option<String>,
    pub reference_code: Option<String>,
    pub primary_contact: Option<String>,
    pub email: Option<String>,
    pub payment_date: Option<NaiveDate>,
    pub post_date: Option<NaiveDate>,
    pub payment_amount: Option<f64>,
    pub unapplied_amount: Option<f64>,
    pub payment_type: Option<String>,
    pub tender_type: Option<String>,
    pub is_open: Option<bool>,
}

/// Aggregated payment totals for the account.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetailHeaderModel {
    pub group_key: Option<String>,
    pub customer_count: Option<i32>,
    pub amount_collected: Option<f64>,
    pub unapplied_amount: Option<f64>,
    pub paid_payments: Option<i32>,
    pub open_payments: Option<i32>,
}
