//! User accounts, roles, invitations and support access.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{AttachmentModel, CustomFieldValueModel, NoteModel};

/// A person who can authenticate against the Lockstep Platform.
///
/// Users are identified by an Azure identity and must have a validated email
/// address.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccountModel {
    pub user_id: Option<String>,
    pub group_key: Option<String>,
    pub user_name: Option<String>,
    pub email: Option<String>,
    /// `Active`, `Onboarding`, `Invited` or `Disabled`.
    pub status: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub created_user_id: Option<String>,
    pub modified: Option<DateTime<Utc>>,
    pub modified_user_id: Option<String>,
    pub phone_number: Option<String>,
    pub fax_number: Option<String>,
    pub title: Option<String>,
    pub accounting_role_code_def_id: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub city: Option<String>,
    pub state_region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub b2c_user_id: Option<String>,
    pub user_role: Option<String>,
    pub invite_sent: Option<DateTime<Utc>>,
    pub default_currency_code: Option<String>,
    pub time_zone: Option<String>,
    pub notes: Option<Vec<NoteModel>>,
    pub attachments: Option<Vec<AttachmentModel>>,
    pub custom_field_values: Option<Vec<CustomFieldValueModel>>,
}

/// A role that can be assigned to users.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRoleModel {
    pub user_role_id: Option<String>,
    pub group_key: Option<String>,
    pub user_role_name: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub created_user_id: Option<String>,
    pub modified: Option<DateTime<Utc>>,
    pub modified_user_id: Option<String>,
}

/// A request to invite someone to the caller's group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteSubmitModel {
    pub email: String,
}

/// Outcome of a single invitation.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteModel {
    pub email: Option<String>,
    pub success: Option<bool>,
    pub invited_user: Option<UserAccountModel>,
    pub error_message: Option<String>,
}

/// Information about a pending invitation, looked up by invite code.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteDataModel {
    pub email: Option<String>,
    pub user_status: Option<String>,
}

/// A request to transfer group ownership.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferOwnerSubmitModel {
    /// The user who will become the new owner.
    pub target_user_id: String,
}

/// Result of an ownership transfer.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferOwnerModel {
    pub previous_owner: Option<UserAccountModel>,
    pub new_owner: Option<UserAccountModel>,
}

/// A request to grant Lockstep support access to the caller's account.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportAccessRequest {
    /// When access expires. Leaving it unset revokes access.
    pub expiration_date: Option<DateTime<Utc>>,
}

/// The support access currently granted.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportAccessModel {
    /// Verification code; regenerated on every call.
    pub code: Option<String>,
    pub expiration_date: Option<DateTime<Utc>>,
    pub created: Option<DateTime<Utc>>,
    pub created_user_id: Option<String>,
    pub modified: Option<DateTime<Utc>>,
    pub modified_user_id: Option<String>,
}

/// Extended data for the calling user.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDataResponseModel {
    /// UTM parameters, present when `UTM` was included.
    pub utm: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_account_deserialize() {
        let json = r#"{
            "userId": "u-1",
            "groupKey": "g-1",
            "userName": "Pat Doe",
            "email": "pat@example.com",
            "status": "Active",
            "b2cUserId": "b2c-1"
        }"#;

        let user: UserAccountModel = serde_json::from_str(json).unwrap();
        assert_eq!(user.user_name.as_deref(), Some("Pat Doe"));
        assert_eq!(user.b2c_user_id.as_deref(), Some("b2c-1"));
    }

    #[test]
    fn test_transfer_owner_wire_name() {
        let body = TransferOwnerSubmitModel {
            target_user_id: "u-2".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"targetUserId": "u-2"})
        );
    }

    #[test]
    fn test_empty_support_access_request() {
        let body = SupportAccessRequest::default();
        assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({}));
    }
}
