//! User account provisioning.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::application::ConnectorInfoModel;
use super::company::CompanyModel;

/// The accounting system a newly provisioned account connects to.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErpInfoModel {
    pub app_id: Option<String>,
    pub data: Option<ConnectorInfoModel>,
}

/// A user and related metadata collected during onboarding.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisioningModel {
    pub full_name: Option<String>,
    pub time_zone: Option<String>,
    pub default_currency: Option<String>,
    pub erp: Option<ErpInfoModel>,
    pub company: Option<CompanyModel>,
}

/// Final onboarding data for a user in `Onboarding` status.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisioningFinalizeRequestModel {
    pub full_name: Option<String>,
    pub time_zone: Option<String>,
    pub default_currency: Option<String>,
    pub company: Option<CompanyModel>,
    pub erp_system: Option<String>,
}

/// Result of provisioning a user account.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisioningResponseModel {
    pub user_name: Option<String>,
    pub account_name: Option<String>,
    pub user_id: Option<String>,
    pub group_key: Option<String>,
    pub app_enrollment_id: Option<String>,
    pub sync_request_id: Option<String>,
    pub error_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provisioning_nested_wire_names() {
        let body = ProvisioningModel {
            full_name: Some("Pat Doe".to_string()),
            erp: Some(ErpInfoModel {
                app_id: Some("a-1".to_string()),
                data: Some(ConnectorInfoModel {
                    realm_id: Some("r-1".to_string()),
                    ..Default::default()
                }),
            }),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "fullName": "Pat Doe",
                "erp": {"appId": "a-1", "data": {"realmId": "r-1"}}
            })
        );
    }
}
