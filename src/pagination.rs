//! Query options and the paged result envelope returned by query endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Filtering, sorting, nested fetch and pagination rules for a query endpoint.
///
/// Filter and order use the Searchlight query language and are passed through
/// untouched. Unset fields are not sent, leaving the server's defaults in
/// effect (page size 250, page 0).
///
/// # Example
///
/// ```
/// use lockstep_sdk::QueryOptions;
///
/// let options = QueryOptions::new()
///     .filter("CompanyName eq 'Acme'")
///     .order("CompanyName asc")
///     .page(1, 50);
/// assert_eq!(options.page_size, Some(50));
/// ```
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryOptions {
    /// Searchlight filter expression.
    pub filter: Option<String>,
    /// Comma-separated nested collections to fetch.
    pub include: Option<String>,
    /// Searchlight sort order.
    pub order: Option<String>,
    /// Page size (server default 250, maximum 500).
    pub page_size: Option<i32>,
    /// Page number, 0-based.
    pub page_number: Option<i32>,
}

impl QueryOptions {
    /// Empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter expression.
    #[must_use]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Set the collections to include.
    #[must_use]
    pub fn include(mut self, include: impl Into<String>) -> Self {
        self.include = Some(include.into());
        self
    }

    /// Set the sort order.
    #[must_use]
    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    /// Request a specific page.
    #[must_use]
    pub fn page(mut self, page_number: i32, page_size: i32) -> Self {
        self.page_number = Some(page_number);
        self.page_size = Some(page_size);
        self
    }
}

/// Query options for summary views that are calculated as of a date.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryQueryOptions {
    /// Standard query options.
    #[serde(flatten)]
    pub query: QueryOptions,
    /// Date the summary fields are calculated on. The server uses the current
    /// UTC date when unset.
    pub report_date: Option<DateTime<Utc>>,
}

impl From<QueryOptions> for SummaryQueryOptions {
    fn from(query: QueryOptions) -> Self {
        Self {
            query,
            report_date: None,
        }
    }
}

/// A page of records returned by a query endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct FetchResult<T> {
    /// The records on this page.
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
    /// Total number of records matching the query, if reported.
    #[serde(default)]
    pub total_count: Option<u64>,
    /// Page size the server applied.
    #[serde(default)]
    pub page_size: Option<u32>,
    /// Page number the server returned, 0-based.
    #[serde(default)]
    pub page_number: Option<u32>,
}

impl<T> FetchResult<T> {
    /// Create a page from records and paging info.
    #[must_use]
    pub fn new(records: Vec<T>, page_number: u32, page_size: u32, total_count: Option<u64>) -> Self {
        Self {
            records,
            total_count,
            page_size: Some(page_size),
            page_number: Some(page_number),
        }
    }

    /// Whether a following page should hold more records.
    ///
    /// Uses the reported total when available; otherwise a full page is taken
    /// to mean there may be more. A missing page size falls back to the
    /// number of records returned.
    pub fn has_more(&self) -> bool {
        let page_size = match self.page_size {
            Some(size) if size > 0 => u64::from(size),
            None if !self.records.is_empty() => self.records.len() as u64,
            _ => return false,
        };
        let page_number = u64::from(self.page_number.unwrap_or(0));
        match (self.total_count, self.page_size) {
            (Some(total), _) => (page_number + 1) * page_size < total,
            (None, Some(_)) => self.records.len() as u64 >= page_size,
            (None, None) => false,
        }
    }

    /// Map the records to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> FetchResult<U> {
        FetchResult {
            records: self.records.into_iter().map(f).collect(),
            total_count: self.total_count,
            page_size: self.page_size,
            page_number: self.page_number,
        }
    }

    /// Returns true if this page has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns an iterator over the records in this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }
}

impl<T> IntoIterator for FetchResult<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a FetchResult<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
