//! Tests for CLI output formatting.
//!
//! - JSON output with --json flag
//! - Pretty-print output as default

use lockstep_sdk::{
    ApplicationModel, CompanyModel, FetchResult, PaymentModel, PrettyPrint, UserAccountModel,
};

// ============================================================================
// JSON Output Tests
// ============================================================================

#[test]
fn test_json_output_uses_wire_names() {
    // JSON output must use the API's camelCase names and omit unset fields
    let company = make_test_company();
    let json_output = serde_json::to_string_pretty(&company).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&json_output).unwrap();
    assert!(parsed.is_object());
    assert_eq!(parsed["companyName"], "Acme");
    assert!(parsed.get("company_name").is_none());
    assert!(parsed.get("faxNumber").is_none());
}

#[test]
fn test_json_output_for_page_keeps_envelope() {
    let page = FetchResult::new(vec![make_test_company(), make_test_company()], 0, 250, Some(2));
    let json_output = serde_json::to_string_pretty(&page).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&json_output).unwrap();
    assert_eq!(parsed["records"].as_array().unwrap().len(), 2);
    assert_eq!(parsed["totalCount"], 2);
    assert_eq!(parsed["pageNumber"], 0);
}

// ============================================================================
// Pretty-Print Tests
// ============================================================================

#[test]
fn test_default_output_is_not_json() {
    // Default output (no --json) must NOT be JSON
    let pretty_output = make_test_company().pretty_print();

    let parse_result: Result<serde_json::Value, _> = serde_json::from_str(&pretty_output);
    assert!(
        parse_result.is_err(),
        "Default output should NOT be valid JSON"
    );
}

#[test]
fn test_company_pretty_print_shows_key_fields() {
    let output = make_test_company().pretty_print();

    assert!(output.contains("Company: Acme"), "Should show name");
    assert!(output.contains("c-123"), "Should show id");
    assert!(output.contains("Customer"), "Should show type");
    assert!(output.contains("Modified"), "Should have Modified label");
    assert!(output.contains("2023-01-05 08:30:00 UTC"));
}

#[test]
fn test_payment_pretty_print_shows_amounts() {
    let payment: PaymentModel = serde_json::from_value(serde_json::json!({
        "paymentId": "p-1",
        "paymentDate": "2023-02-01",
        "paymentAmount": 250.0,
        "unappliedAmount": 0.0,
        "currencyCode": "EUR",
        "isOpen": false,
        "applications": [{"invoiceId": "inv-1"}, {"invoiceId": "inv-2"}]
    }))
    .unwrap();

    let output = payment.pretty_print();
    assert!(output.contains("250.00 EUR"));
    assert!(output.contains("2023-02-01"));
    assert!(output.contains("2 invoices"));
    assert!(output.contains("Open:           no"));
}

#[test]
fn test_user_and_application_pretty_print() {
    let user = UserAccountModel {
        user_name: Some("Sam Smith".to_string()),
        email: Some("sam@acme.test".to_string()),
        status: Some("Active".to_string()),
        ..Default::default()
    };
    let output = user.pretty_print();
    assert!(output.starts_with("User: Sam Smith"));
    assert!(output.contains("sam@acme.test"));

    let app = ApplicationModel {
        name: Some("QuickBooks Online".to_string()),
        app_type: Some("Accounting Connector".to_string()),
        is_active: Some(true),
        ..Default::default()
    };
    let output = app.pretty_print();
    assert!(output.starts_with("Application: QuickBooks Online"));
    assert!(output.contains("Active:         yes"));
}

#[test]
fn test_list_pretty_print_is_table() {
    // Query output is tabular
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct TestRow {
        id: String,
        name: String,
    }

    let rows = vec![
        TestRow {
            id: "c-1".to_string(),
            name: "Acme".to_string(),
        },
        TestRow {
            id: "c-2".to_string(),
            name: "Globex".to_string(),
        },
    ];

    let table_output = Table::new(rows).to_string();

    assert!(table_output.contains("id"), "Should have column headers");
    assert!(table_output.contains("name"), "Should have column headers");
    assert!(table_output.contains("Globex"));
}

// ============================================================================
// Test Helpers
// ============================================================================

fn make_test_company() -> CompanyModel {
    serde_json::from_value(serde_json::json!({
        "companyId": "c-123",
        "companyName": "Acme",
        "companyType": "Customer",
        "isActive": true,
        "modified": "2023-01-05T08:30:00Z"
    }))
    .unwrap()
}
