//! Query parameter bags.

use serde::Serialize;
use serde_json::Value;

use crate::error::{LockstepError, Result};

/// Ordered query parameters for a single request.
///
/// Absent values are never recorded, so an unset `pageSize` is left to the
/// server's default rather than sent as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// An empty parameter bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build parameters from a serializable options struct.
    ///
    /// Field names are taken as-is from the serialized form, null fields are
    /// dropped and scalars are rendered as their plain string form.
    ///
    /// # Errors
    ///
    /// Returns an error if `options` does not serialize to a JSON object.
    pub fn from_serialize<T: Serialize + ?Sized>(options: &T) -> Result<Self> {
        let map = match serde_json::to_value(options)? {
            Value::Object(map) => map,
            Value::Null => return Ok(Self::new()),
            other => {
                return Err(LockstepError::InvalidArgument(format!(
                    "query options must serialize to an object, got {other}"
                )))
            }
        };

        let mut params = Self::new();
        for (key, value) in map {
            let rendered = match value {
                Value::Null => continue,
                Value::String(s) => s,
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                nested => nested.to_string(),
            };
            params.pairs.push((key, rendered));
        }
        Ok(params)
    }

    /// Add a parameter.
    #[must_use]
    pub fn push(mut self, key: &str, value: impl ToString) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Add a parameter only when `value` is present.
    #[must_use]
    pub fn push_opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.push(key, v),
            None => self,
        }
    }

    /// Look up the first value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All pairs in insertion order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Returns true if no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of parameters set.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }
}
