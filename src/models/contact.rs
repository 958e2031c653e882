//! Contact records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{AttachmentModel, CustomFieldValueModel, NoteModel};

/// A person or role within a Company.
///
/// Contacts track who is responsible for a project, who handles invoices, or
/// which role at a customer or vendor to speak with.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactModel {
    /// Platform-assigned id; NOT the ERP key.
    pub contact_id: Option<String>,
    /// The Company this contact belongs to.
    pub company_id: Option<String>,
    pub group_key: Option<String>,
    pub erp_key: Option<String>,
    pub contact_name: Option<String>,
    pub contact_code: Option<String>,
    pub title: Option<String>,
    pub role_code: Option<String>,
    pub email_address: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub city: Option<String>,
    pub state_region: Option<String>,
    pub postal_code: Option<String>,
    pub country_code: Option<String>,
    pub is_active: Option<bool>,
    pub webpage_url: Option<String>,
    pub picture_url: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub created_user_id: Option<String>,
    pub modified: Option<DateTime<Utc>>,
    pub modified_user_id: Option<String>,
    pub app_enrollment_id: Option<String>,
    pub notes: Option<Vec<NoteModel>>,
    pub attachments: Option<Vec<AttachmentModel>>,
    pub custom_field_values: Option<Vec<CustomFieldValueModel>>,
}
