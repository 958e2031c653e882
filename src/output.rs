//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use chrono::{DateTime, Utc};

use crate::{
    ApplicationModel, CompanyModel, ContactModel, PaymentModel, UserAccountModel, UserRoleModel,
};

/// Trait for human-readable key-value output.
///
/// Implemented by models to provide formatted output suitable for terminal
/// display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

/// Accumulates `Label:   value` lines under a header, skipping unset values.
struct Sheet {
    lines: Vec<String>,
}

impl Sheet {
    fn new(header: String) -> Self {
        let divider = "─".repeat(header.chars().count().max(30));
        Self {
            lines: vec![header, divider],
        }
    }

    fn field(mut self, label: &str, value: Option<impl std::fmt::Display>) -> Self {
        if let Some(value) = value {
            self.lines.push(format!("{:<16}{}", format!("{label}:"), value));
        }
        self
    }

    fn timestamp(self, label: &str, value: Option<DateTime<Utc>>) -> Self {
        self.field(label, value.map(|t| t.format("%Y-%m-%d %H:%M:%S UTC")))
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }
}

fn yes_no(flag: Option<bool>) -> Option<&'static str> {
    flag.map(|f| if f { "yes" } else { "no" })
}

impl PrettyPrint for CompanyModel {
    fn pretty_print(&self) -> String {
        let location = [self.city.as_deref(), self.state_region.as_deref(), self.country.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ");

        let mut sheet = Sheet::new(format!("Company: {}", self.display_name()))
            .field("Id", self.company_id.as_deref())
            .field("Type", self.company_type.as_deref())
            .field("Status", self.company_status.as_deref())
            .field("ERP Key", self.erp_key.as_deref())
            .field("Active", yes_no(self.is_active))
            .field("Currency", self.default_currency_code.as_deref())
            .field("Location", (!location.is_empty()).then_some(location))
            .field("Phone", self.phone_number.as_deref())
            .field("AR Email", self.ar_email_address.as_deref())
            .timestamp("Modified", self.modified);

        if let Some(ref contacts) = self.contacts {
            sheet = sheet.field("Contacts", Some(contacts.len()));
        }
        if let Some(ref invoices) = self.invoices {
            sheet = sheet.field("Invoices", Some(invoices.len()));
        }

        sheet.finish()
    }
}

impl PrettyPrint for ContactModel {
    fn pretty_print(&self) -> String {
        let name = self
            .contact_name
            .as_deref()
            .or(self.contact_id.as_deref())
            .unwrap_or("");

        Sheet::new(format!("Contact: {name}"))
            .field("Id", self.contact_id.as_deref())
            .field("Company", self.company_id.as_deref())
            .field("Title", self.title.as_deref())
            .field("Role", self.role_code.as_deref())
            .field("Email", self.email_address.as_deref())
            .field("Phone", self.phone.as_deref())
            .field("Active", yes_no(self.is_active))
            .timestamp("Modified", self.modified)
            .finish()
    }
}

impl PrettyPrint for PaymentModel {
    fn pretty_print(&self) -> String {
        let id = self.payment_id.as_deref().unwrap_or("");
        let currency = self.currency_code.as_deref().unwrap_or("");
        let money = |amount: Option<f64>| amount.map(|a| format!("{a:.2} {currency}"));

        let mut sheet = Sheet::new(format!("Payment: {id}"))
            .field("Company", self.company_id.as_deref())
            .field("Type", self.payment_type.as_deref())
            .field("Tender", self.tender_type.as_deref())
            .field("Reference", self.reference_code.as_deref())
            .field("Date", self.payment_date)
            .field("Amount", money(self.payment_amount))
            .field("Unapplied", money(self.unapplied_amount))
            .field("Open", yes_no(self.is_open));

        if self.is_voided == Some(true) {
            sheet = sheet.field("Voided", Some("yes"));
        }
        if let Some(ref applications) = self.applications {
            sheet = sheet.field("Applied To", Some(format!("{} invoices", applications.len())));
        }

        sheet.finish()
    }
}

impl PrettyPrint for UserAccountModel {
    fn pretty_print(&self) -> String {
        let name = self
            .user_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("");

        Sheet::new(format!("User: {name}"))
            .field("Id", self.user_id.as_deref())
            .field("Email", self.email.as_deref())
            .field("Status", self.status.as_deref())
            .field("Role", self.user_role.as_deref())
            .field("Title", self.title.as_deref())
            .field("Time Zone", self.time_zone.as_deref())
            .timestamp("Invite Sent", self.invite_sent)
            .timestamp("Created", self.created)
            .finish()
    }
}

impl PrettyPrint for UserRoleModel {
    fn pretty_print(&self) -> String {
        Sheet::new(format!(
            "User Role: {}",
            self.user_role_name.as_deref().unwrap_or("")
        ))
        .field("Id", self.user_role_id.as_deref())
        .timestamp("Created", self.created)
        .finish()
    }
}

impl PrettyPrint for ApplicationModel {
    fn pretty_print(&self) -> String {
        Sheet::new(format!("Application: {}", self.name.as_deref().unwrap_or("")))
            .field("Id", self.app_id.as_deref())
            .field("Type", self.app_type.as_deref())
            .field("Active", yes_no(self.is_active))
            .field("Project URL", self.project_url.as_deref())
            .field("Wiki", self.wiki_url.as_deref())
            .field("Description", self.description.as_deref())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_pretty_print_format() {
        let company: CompanyModel = serde_json::from_value(serde_json::json!({
            "companyId": "c-1",
            "companyName": "Acme",
            "companyType": "Customer",
            "city": "Seattle",
            "country": "US",
            "contacts": [{"contactId": "ct-1"}]
        }))
        .unwrap();

        let output = company.pretty_print();
        assert!(output.starts_with("Company: Acme"));
        assert!(output.contains("Type:           Customer"));
        assert!(output.contains("Location:       Seattle, US"));
        assert!(output.contains("Contacts:       1"));
        assert!(!output.contains("Phone:"));
    }

    #[test]
    fn test_payment_pretty_print_amounts() {
        let payment = PaymentModel {
            payment_id: Some("p-1".to_string()),
            payment_amount: Some(100.0),
            unapplied_amount: Some(25.5),
            currency_code: Some("USD".to_string()),
            ..Default::default()
        };

        let output = payment.pretty_print();
        assert!(output.contains("Amount:         100.00 USD"));
        assert!(output.contains("Unapplied:      25.50 USD"));
    }

    #[test]
    fn test_header_falls_back_to_id() {
        let contact = ContactModel {
            contact_id: Some("ct-9".to_string()),
            ..Default::default()
        };
        assert!(contact.pretty_print().starts_with("Contact: ct-9"));
    }
}
