//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::{CompanyModel, ContactModel, PaymentAppliedModel, PaymentModel};

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    // =========================================================================
    // Company Fixtures
    // =========================================================================

    /// Create a company with an id, name and type only.
    pub fn minimal_company(id: &str, name: &str, company_type: &str) -> CompanyModel {
        CompanyModel {
            company_id: Some(id.to_string()),
            ..CompanyModel::named(name, company_type)
        }
    }

    /// Create an active customer with address and currency details.
    pub fn customer(id: &str, name: &str, city: &str) -> CompanyModel {
        CompanyModel {
            erp_key: Some(format!("CUST-{}", id.to_uppercase())),
            is_active: Some(true),
            default_currency_code: Some("USD".to_string()),
            city: Some(city.to_string()),
            country: Some("US".to_string()),
            ar_email_address: Some(format!("ar@{}.test", name.to_lowercase().replace(' ', ""))),
            created: Utc.with_ymd_and_hms(2022, 1, 10, 9, 0, 0).single(),
            ..Self::minimal_company(id, name, "Customer")
        }
    }

    /// Create an active vendor.
    pub fn vendor(id: &str, name: &str) -> CompanyModel {
        CompanyModel {
            is_active: Some(true),
            default_currency_code: Some("USD".to_string()),
            ..Self::minimal_company(id, name, "Vendor")
        }
    }

    // =========================================================================
    // Contact Fixtures
    // =========================================================================

    /// Create an active contact belonging to a company.
    pub fn contact(id: &str, company_id: &str, name: &str, email: &str) -> ContactModel {
        ContactModel {
            contact_id: Some(id.to_string()),
            company_id: Some(company_id.to_string()),
            contact_name: Some(name.to_string()),
            email_address: Some(email.to_string()),
            is_active: Some(true),
            ..Default::default()
        }
    }

    // =========================================================================
    // Payment Fixtures
    // =========================================================================

    /// Create an open payment with the whole amount unapplied.
    pub fn unapplied_payment(id: &str, company_id: &str, amount: f64) -> PaymentModel {
        PaymentModel {
            payment_id: Some(id.to_string()),
            company_id: Some(company_id.to_string()),
            payment_type: Some("Payment".to_string()),
            tender_type: Some("Check".to_string()),
            is_open: Some(true),
            payment_date: NaiveDate::from_ymd_opt(2023, 3, 15),
            payment_amount: Some(amount),
            unapplied_amount: Some(amount),
            currency_code: Some("USD".to_string()),
            ..Default::default()
        }
    }

    /// Create a closed payment fully applied to one invoice.
    pub fn applied_payment(id: &str, company_id: &str, invoice_id: &str, amount: f64) -> PaymentModel {
        PaymentModel {
            is_open: Some(false),
            unapplied_amount: Some(0.0),
            applications: Some(vec![PaymentAppliedModel {
                payment_id: Some(id.to_string()),
                invoice_id: Some(invoice_id.to_string()),
                payment_applied_amount: Some(amount),
                ..Default::default()
            }]),
            ..Self::unapplied_payment(id, company_id, amount)
        }
    }

    // =========================================================================
    // Scenario Builders
    // =========================================================================

    /// Create a default set of test data for common scenarios.
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario::new()
    }
}

/// A complete test scenario with related records.
pub struct DefaultScenario {
    pub companies: Vec<CompanyModel>,
    pub contacts: Vec<ContactModel>,
    pub payments: Vec<PaymentModel>,
}

impl DefaultScenario {
    fn new() -> Self {
        let companies = vec![
            Fixtures::customer("c-acme", "Acme", "Seattle"),
            Fixtures::customer("c-initech", "Initech", "Austin"),
            Fixtures::vendor("c-globex", "Globex"),
        ];

        let contacts = vec![
            Fixtures::contact("ct-jane", "c-acme", "Jane Doe", "jane@acme.test"),
            Fixtures::contact("ct-omar", "c-acme", "Omar Haddad", "omar@acme.test"),
            Fixtures::contact("ct-pat", "c-initech", "Pat Lee", "pat@initech.test"),
        ];

        let payments = vec![
            Fixtures::applied_payment("p-1001", "c-acme", "inv-501", 1250.0),
            Fixtures::unapplied_payment("p-1002", "c-acme", 300.0),
            Fixtures::applied_payment("p-1003", "c-initech", "inv-502", 87.25),
        ];

        Self {
            companies,
            contacts,
            payments,
        }
    }
}
