//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Lockstep API server.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::{CompanyModel, ContactModel, PaymentModel};

/// State shared between the server's handlers.
pub type SharedState = Arc<RwLock<MockState>>;

/// A record type the mock server stores in its own table.
pub trait MockRecord: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Singular name used in error messages.
    const NAME: &'static str;
    /// Prefix of generated ids.
    const ID_PREFIX: &'static str;

    fn id(&self) -> Option<&str>;
    fn set_id(&mut self, id: String);
    fn table(state: &MockState) -> &BTreeMap<String, Self>;
    fn table_mut(state: &mut MockState) -> &mut BTreeMap<String, Self>;

    /// Called on DELETE. Returns true when the record was disabled in place
    /// and should be kept.
    fn disable(&mut self) -> bool {
        false
    }
}

impl MockRecord for CompanyModel {
    const NAME: &'static str = "Company";
    const ID_PREFIX: &'static str = "company";

    fn id(&self) -> Option<&str> {
        self.company_id.as_deref()
    }
    fn set_id(&mut self, id: String) {
        self.company_id = Some(id);
    }
    fn table(state: &MockState) -> &BTreeMap<String, Self> {
        &state.companies
    }
    fn table_mut(state: &mut MockState) -> &mut BTreeMap<String, Self> {
        &mut state.companies
    }
}

impl MockRecord for ContactModel {
    const NAME: &'static str = "Contact";
    const ID_PREFIX: &'static str = "contact";

    fn id(&self) -> Option<&str> {
        self.contact_id.as_deref()
    }
    fn set_id(&mut self, id: String) {
        self.contact_id = Some(id);
    }
    fn table(state: &MockState) -> &BTreeMap<String, Self> {
        &state.contacts
    }
    fn table_mut(state: &mut MockState) -> &mut BTreeMap<String, Self> {
        &mut state.contacts
    }

    // Contacts are disabled, never removed.
    fn disable(&mut self) -> bool {
        self.is_active = Some(false);
        true
    }
}

impl MockRecord for PaymentModel {
    const NAME: &'static str = "Payment";
    const ID_PREFIX: &'static str = "payment";

    fn id(&self) -> Option<&str> {
        self.payment_id.as_deref()
    }
    fn set_id(&mut self, id: String) {
        self.payment_id = Some(id);
    }
    fn table(state: &MockState) -> &BTreeMap<String, Self> {
        &state.payments
    }
    fn table_mut(state: &mut MockState) -> &mut BTreeMap<String, Self> {
        &mut state.payments
    }
}

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Companies indexed by company id.
    pub companies: BTreeMap<String, CompanyModel>,

    /// Contacts indexed by contact id.
    pub contacts: BTreeMap<String, ContactModel>,

    /// Payments indexed by payment id.
    pub payments: BTreeMap<String, PaymentModel>,

    /// Optional API key. If set, requests must send it in the `Api-Key` header.
    pub required_api_key: Option<String>,

    next_id: u64,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> SharedState {
        Arc::new(RwLock::new(self))
    }

    /// Add a company to the state.
    pub fn with_company(self, company: CompanyModel) -> Self {
        self.with_record(company)
    }

    /// Add a contact to the state.
    pub fn with_contact(self, contact: ContactModel) -> Self {
        self.with_record(contact)
    }

    /// Add a payment to the state.
    pub fn with_payment(self, payment: PaymentModel) -> Self {
        self.with_record(payment)
    }

    /// Set the required API key.
    pub fn with_required_api_key(mut self, key: &str) -> Self {
        self.required_api_key = Some(key.to_string());
        self
    }

    fn with_record<T: MockRecord>(mut self, record: T) -> Self {
        self.insert(record);
        self
    }

    /// Store a record, assigning an id when it has none. Returns the stored copy.
    pub fn insert<T: MockRecord>(&mut self, mut record: T) -> T {
        let id = match record.id() {
            Some(id) => id.to_string(),
            None => {
                let id = self.generate_id(T::ID_PREFIX);
                record.set_id(id.clone());
                id
            }
        };
        T::table_mut(self).insert(id, record.clone());
        record
    }

    fn generate_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{:04}", self.next_id)
    }

    /// Get a record by id.
    pub fn get<T: MockRecord>(&self, id: &str) -> Option<&T> {
        T::table(self).get(id)
    }

    /// Records matching a Searchlight filter, in the requested order.
    ///
    /// Supports a single `Field eq value` comparison and a single
    /// `Field asc|desc` sort, which is all the end-to-end tests use.
    pub fn query<T: MockRecord>(
        &self,
        filter: Option<&str>,
        order: Option<&str>,
    ) -> Result<Vec<T>, String> {
        let filter = filter.map(Comparison::parse).transpose()?;
        let order = order.map(SortOrder::parse).transpose()?;

        let mut matched: Vec<(Value, T)> = Vec::new();
        for record in T::table(self).values() {
            let value = serde_json::to_value(record).map_err(|e| e.to_string())?;
            if filter.as_ref().map_or(true, |f| f.matches(&value)) {
                matched.push((value, record.clone()));
            }
        }

        if let Some(order) = order {
            matched.sort_by(|(a, _), (b, _)| order.compare(a, b));
        }

        Ok(matched.into_iter().map(|(_, record)| record).collect())
    }

    /// Apply camelCase field changes to a record. Returns None if the id is
    /// unknown. The id itself cannot be changed.
    pub fn patch<T: MockRecord>(
        &mut self,
        id: &str,
        changes: &serde_json::Map<String, Value>,
    ) -> Option<Result<T, serde_json::Error>> {
        let existing = T::table(self).get(id)?;
        let merged = merge(existing, changes).map(|mut record: T| {
            record.set_id(id.to_string());
            record
        });
        if let Ok(ref record) = merged {
            T::table_mut(self).insert(id.to_string(), record.clone());
        }
        Some(merged)
    }

    /// Delete (or disable) a record. Returns false if the id is unknown.
    pub fn delete<T: MockRecord>(&mut self, id: &str) -> bool {
        let table = T::table_mut(self);
        let Some(record) = table.get_mut(id) else {
            return false;
        };
        if !record.disable() {
            table.remove(id);
        }
        true
    }

    /// Contacts belonging to a company.
    pub fn contacts_of(&self, company_id: &str) -> Vec<ContactModel> {
        self.contacts
            .values()
            .filter(|c| c.company_id.as_deref() == Some(company_id))
            .cloned()
            .collect()
    }
}

/// Shallow merge of `changes` over the serialized record.
fn merge<T: MockRecord>(
    record: &T,
    changes: &serde_json::Map<String, Value>,
) -> Result<T, serde_json::Error> {
    let mut value = serde_json::to_value(record)?;
    if let Value::Object(ref mut fields) = value {
        for (key, change) in changes {
            fields.insert(key.clone(), change.clone());
        }
    }
    serde_json::from_value(value)
}

/// Field names arrive PascalCase in Searchlight and are stored camelCase.
fn field_key(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

struct Comparison {
    field: String,
    expected: Value,
}

impl Comparison {
    fn parse(filter: &str) -> Result<Self, String> {
        let (field, literal) = filter
            .split_once(" eq ")
            .ok_or_else(|| format!("unsupported filter: {filter}"))?;
        let literal = literal.trim();
        let expected = match literal.strip_prefix('\'').and_then(|l| l.strip_suffix('\'')) {
            Some(text) => Value::String(text.to_string()),
            None => serde_json::from_str(literal)
                .map_err(|_| format!("unsupported filter value: {literal}"))?,
        };
        Ok(Self {
            field: field_key(field.trim()),
            expected,
        })
    }

    fn matches(&self, record: &Value) -> bool {
        match (record.get(&self.field), &self.expected) {
            (Some(Value::String(actual)), Value::String(expected)) => {
                actual.eq_ignore_ascii_case(expected)
            }
            (Some(actual), expected) => actual == expected,
            (None, Value::Null) => true,
            (None, _) => false,
        }
    }
}

struct SortOrder {
    field: String,
    descending: bool,
}

impl SortOrder {
    fn parse(order: &str) -> Result<Self, String> {
        let mut parts = order.split_whitespace();
        let field = parts
            .next()
            .ok_or_else(|| "empty order".to_string())?;
        let descending = match parts.next().map(str::to_ascii_lowercase).as_deref() {
            None | Some("asc") => false,
            Some("desc") => true,
            Some(other) => return Err(format!("unsupported sort direction: {other}")),
        };
        Ok(Self {
            field: field_key(field),
            descending,
        })
    }

    fn compare(&self, a: &Value, b: &Value) -> std::cmp::Ordering {
        let key = |v: &Value| match v.get(&self.field) {
            Some(Value::String(s)) => s.to_lowercase(),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        let ordering = key(a).cmp(&key(b));
        if self.descending {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(id: &str, name: &str, company_type: &str) -> CompanyModel {
        let mut company = CompanyModel::named(name, company_type);
        company.company_id = Some(id.to_string());
        company
    }

    #[test]
    fn test_insert_assigns_ids() {
        let mut state = MockState::new();
        let first = state.insert(CompanyModel::named("Acme", "Customer"));
        let second = state.insert(CompanyModel::named("Globex", "Vendor"));

        assert_eq!(first.company_id.as_deref(), Some("company-0001"));
        assert_eq!(second.company_id.as_deref(), Some("company-0002"));
        assert_eq!(state.companies.len(), 2);
    }

    #[test]
    fn test_query_filter_and_order() {
        let state = MockState::new()
            .with_company(company("c-1", "Zeta", "Customer"))
            .with_company(company("c-2", "Alpha", "Customer"))
            .with_company(company("c-3", "Globex", "Vendor"));

        let customers: Vec<CompanyModel> = state
            .query(Some("CompanyType eq 'Customer'"), Some("CompanyName asc"))
            .unwrap();
        let names: Vec<&str> = customers.iter().map(|c| c.display_name()).collect();
        assert_eq!(names, vec!["Alpha", "Zeta"]);

        let all: Vec<CompanyModel> = state.query(None, Some("CompanyName desc")).unwrap();
        assert_eq!(all[0].display_name(), "Zeta");
    }

    #[test]
    fn test_query_rejects_unsupported_filter() {
        let state = MockState::new();
        let result: Result<Vec<CompanyModel>, _> = state.query(Some("CompanyName ne 'x'"), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_patch_merges_and_keeps_id() {
        let mut state = MockState::new().with_company(company("c-1", "Acme", "Customer"));
        let changes = serde_json::json!({"companyName": "Acme Corp", "companyId": "other"});

        let updated: CompanyModel = state
            .patch("c-1", changes.as_object().unwrap())
            .unwrap()
            .unwrap();

        assert_eq!(updated.company_name.as_deref(), Some("Acme Corp"));
        assert_eq!(updated.company_type.as_deref(), Some("Customer"));
        assert_eq!(updated.company_id.as_deref(), Some("c-1"));
        assert!(state.patch::<CompanyModel>("missing", changes.as_object().unwrap()).is_none());
    }

    #[test]
    fn test_delete_contact_disables() {
        let mut state = MockState::new().with_contact(ContactModel {
            contact_id: Some("ct-1".to_string()),
            is_active: Some(true),
            ..Default::default()
        });

        assert!(state.delete::<ContactModel>("ct-1"));
        assert_eq!(
            state.get::<ContactModel>("ct-1").and_then(|c| c.is_active),
            Some(false)
        );
        assert!(!state.delete::<ContactModel>("missing"));
    }

    #[test]
    fn test_delete_company_removes() {
        let mut state = MockState::new().with_company(company("c-1", "Acme", "Customer"));
        assert!(state.delete::<CompanyModel>("c-1"));
        assert!(state.get::<CompanyModel>("c-1").is_none());
    }
}
