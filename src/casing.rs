//! Key casing conversion between Rust-side snake_case and the API's camelCase.
//!
//! Typed models get their wire names from `#[serde(rename_all = "camelCase")]`.
//! These helpers cover the free-form cases: PATCH change sets and any other
//! body built from a map, which are converted once here before they reach
//! the transport.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::transport::RequestBody;

/// Convert a snake_case key to camelCase.
///
/// Keys without underscores (including keys that are already camelCase) are
/// returned unchanged. Leading underscores are preserved.
///
/// ```
/// use lockstep_sdk::casing::to_camel_case;
///
/// assert_eq!(to_camel_case("group_key"), "groupKey");
/// assert_eq!(to_camel_case("groupKey"), "groupKey");
/// ```
pub fn to_camel_case(key: &str) -> String {
    let trimmed = key.trim_start_matches('_');
    let mut out = String::with_capacity(key.len());
    out.push_str(&key[..key.len() - trimmed.len()]);

    let mut upper_next = false;
    for c in trimmed.chars() {
        if c == '_' {
            upper_next = true;
            continue;
        }
        if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }

    // Trailing underscore has nothing to capitalize.
    if upper_next {
        out.push('_');
    }
    out
}

/// Convert a camelCase key to snake_case.
///
/// Every capital letter starts a new segment, so acronym runs split per
/// letter (`ERPKey` becomes `e_r_p_key`). This keeps snake -> camel -> snake
/// lossless for keys whose segments begin with a letter, including
/// one-letter segments such as `a_b_c`.
pub fn to_snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev: Option<char> = None;

    for c in key.chars() {
        if c.is_uppercase() {
            if prev.is_some_and(|p| p != '_') {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}

/// Rename every object key in `value` to camelCase, recursing into nested
/// objects and arrays.
pub fn camelize_keys(value: Value) -> Value {
    rename_keys(value, &to_camel_case)
}

/// Rename every object key in `value` to snake_case, recursing into nested
/// objects and arrays.
pub fn snakify_keys(value: Value) -> Value {
    rename_keys(value, &to_snake_case)
}

fn rename_keys(value: Value, rename: &dyn Fn(&str) -> String) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (rename(&k), rename_keys(v, rename)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => {
            Value::Array(items.into_iter().map(|v| rename_keys(v, rename)).collect())
        }
        other => other,
    }
}

/// Serialize `body` and convert its keys to the wire casing.
///
/// # Errors
///
/// Returns an error if `body` cannot be represented as JSON.
pub fn to_wire_body<B: Serialize + ?Sized>(body: &B) -> Result<RequestBody> {
    let value = serde_json::to_value(body)?;
    Ok(RequestBody::Json(camelize_keys(value)))
}
