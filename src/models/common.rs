//! Records shared across resources: notes, attachments, custom fields and
//! action results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// A customizable text note attached to another record.
///
/// A Note is linked to its parent through `table_key` (the table name, e.g.
/// `Invoice`) and `object_key` (the parent's id).
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteModel {
    /// Platform-assigned id of this note.
    pub note_id: Option<String>,
    /// Account this note belongs to.
    pub group_key: Option<String>,
    /// Table of the record this note is attached to.
    pub table_key: Option<String>,
    /// Id of the record this note is attached to.
    pub object_key: Option<String>,
    /// Full text of the note.
    pub note_text: Option<String>,
    /// Type of the note.
    pub note_type: Option<String>,
    /// Archived (hidden) notes should not be displayed.
    pub is_archived: Option<bool>,
    pub created: Option<DateTime<Utc>>,
    pub created_user_id: Option<String>,
    pub modified: Option<DateTime<Utc>>,
    pub modified_user_id: Option<String>,
    /// Name of the user who created the note.
    pub created_user_name: Option<String>,
    /// Enrollment of the application that imported this record.
    pub app_enrollment_id: Option<String>,
    /// Person this note is intended for.
    pub recipient_name: Option<String>,
}

/// A file attached to another record.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentModel {
    pub attachment_id: Option<String>,
    pub group_key: Option<String>,
    pub table_key: Option<String>,
    pub object_key: Option<String>,
    pub file_name: Option<String>,
    pub file_ext: Option<String>,
    pub attachment_type_id: Option<String>,
    pub is_archived: Option<bool>,
    pub origin_attachment_id: Option<String>,
    pub view_internal: Option<bool>,
    pub view_external: Option<bool>,
    pub erp_key: Option<String>,
    pub app_enrollment_id: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub created_user_id: Option<String>,
}

/// The value of a custom field on a record.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldValueModel {
    pub group_key: Option<String>,
    pub custom_field_definition_id: Option<String>,
    pub record_key: Option<String>,
    pub string_value: Option<String>,
    pub numeric_value: Option<f64>,
    pub created: Option<DateTime<Utc>>,
    pub created_user_id: Option<String>,
    pub modified: Option<DateTime<Utc>>,
    pub modified_user_id: Option<String>,
    pub app_enrollment_id: Option<String>,
}

/// Body of a bulk delete request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteRequestModel {
    /// Platform ids of the records to delete; NOT ERP keys.
    pub id_list: Vec<String>,
}

impl BulkDeleteRequestModel {
    /// Delete the given ids.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id_list: ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// Result of a single-record action such as a delete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResultModel {
    /// Messages describing the outcome.
    #[serde(default)]
    pub messages: Vec<String>,
}

/// Result of a bulk delete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    #[serde(default)]
    pub messages: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_wire_names() {
        let note = NoteModel {
            note_text: Some("Call back Tuesday".to_string()),
            is_archived: Some(false),
            table_key: Some("Invoice".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&note).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "noteText": "Call back Tuesday",
                "isArchived": false,
                "tableKey": "Invoice"
            })
        );
    }

    #[test]
    fn test_note_deserialize() {
        let json = r#"{
            "noteId": "n-1",
            "groupKey": "g-1",
            "noteText": "hello",
            "created": "2023-01-19T22:38:02Z",
            "createdUserName": "Pat"
        }"#;

        let note: NoteModel = serde_json::from_str(json).unwrap();
        assert_eq!(note.note_id.as_deref(), Some("n-1"));
        assert_eq!(note.created_user_name.as_deref(), Some("Pat"));
        assert!(note.created.is_some());
        assert!(note.recipient_name.is_none());
    }

    #[test]
    fn test_bulk_delete_body() {
        let body = BulkDeleteRequestModel::new(["a", "b"]);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"idList": ["a", "b"]})
        );
    }
}
