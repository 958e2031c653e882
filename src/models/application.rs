//! Applications and connector data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{AttachmentModel, CustomFieldValueModel, NoteModel};

/// A feature published on the Lockstep Platform Marketplace.
///
/// Applications are universal across accounts. A customer adding one obtains
/// an app enrollment holding their configuration.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationModel {
    pub app_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    /// `Accounting Connector`, `Email Connector`, etc.
    pub app_type: Option<String>,
    pub owner_id: Option<String>,
    pub project_url: Option<String>,
    pub icon_url: Option<String>,
    pub price_terms: Option<String>,
    pub created_user_id: Option<String>,
    pub modified_user_id: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
    pub wiki_url: Option<String>,
    pub group_key: Option<String>,
    pub notes: Option<Vec<NoteModel>>,
    pub attachments: Option<Vec<AttachmentModel>>,
    pub custom_field_values: Option<Vec<CustomFieldValueModel>>,
}

/// Data required to set up an app enrollment for a connector.
///
/// Only the fields relevant to the given connector should be sent.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorInfoModel {
    /// Code returned from the first step of an OAuth2 authorization-code flow.
    pub auth_code: Option<String>,
    /// Realm id of the account granting access.
    pub realm_id: Option<String>,
    /// Redirect uri used for the first step of the OAuth2 flow.
    pub redirect_uri: Option<String>,
    /// Address an email connection is created for.
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connector_info_only_sends_set_fields() {
        let info = ConnectorInfoModel {
            auth_code: Some("code-1".to_string()),
            realm_id: Some("realm-9".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&info).unwrap(),
            serde_json::json!({"authCode": "code-1", "realmId": "realm-9"})
        );
    }

    #[test]
    fn test_application_deserialize() {
        let json = r#"{"appId": "a-1", "name": "QuickBooks Online", "appType": "Accounting Connector", "isActive": true}"#;
        let app: ApplicationModel = serde_json::from_str(json).unwrap();
        assert_eq!(app.name.as_deref(), Some("QuickBooks Online"));
        assert_eq!(app.is_active, Some(true));
    }
}
