// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! The error-class registry.
//!
//! A keyed table mapping stable error-class identifiers to a message
//! template and an SQL-standard state code. The table ships embedded in
//! the binary as JSON and is parsed once, on first use.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::Deserialize;

/// A single entry in the registry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ErrorClass {
    /// The message template. `{0}`, `{1}`, ... are replaced by the
    /// ordered message parameters.
    pub message: String,
    /// The five-character SQL state code, if one is assigned.
    pub sql_state: Option<String>,
}

static ERROR_CLASSES: Lazy<BTreeMap<String, ErrorClass>> = Lazy::new(|| {
    serde_json::from_str(include_str!("classes.json"))
        .expect("embedded error-class registry is valid JSON")
});

/// Looks up the registry entry for `class`.
pub fn lookup(class: &str) -> Option<&'static ErrorClass> {
    ERROR_CLASSES.get(class)
}

/// Returns the SQL state code assigned to `class`, if any.
pub fn sql_state(class: &str) -> Option<&'static str> {
    lookup(class).and_then(|entry| entry.sql_state.as_deref())
}

/// Renders the message for `class` by substituting `params` into its
/// template positionally.
pub fn format_message(class: &str, params: &[String]) -> Option<String> {
    let mut message = lookup(class)?.message.clone();
    for (i, param) in params.iter().enumerate() {
        message = message.replace(&format!("{{{}}}", i), param);
    }
    Some(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_parses() {
        // Force the registry and make sure the classes the adapter relies
        // on are present.
        for class in [
            "TEMP_VIEW_NOT_SUPPORTED",
            "UNSUPPORTED_SHOW_CREATE_TABLE_AS_SERDE",
            "ITEM_NOT_FOUND",
            "INTERNAL_ERROR",
        ] {
            assert!(lookup(class).is_some(), "missing error class {}", class);
        }
    }

    #[test]
    fn test_sql_states_are_five_characters() {
        for (class, entry) in ERROR_CLASSES.iter() {
            if let Some(state) = &entry.sql_state {
                assert_eq!(state.len(), 5, "bad SQL state for {}", class);
            }
        }
    }

    #[test]
    fn test_format_message() {
        let message = format_message(
            "UNSUPPORTED_SHOW_CREATE_TABLE_AS_SERDE",
            &["v2 tables".to_string()],
        );
        assert_eq!(
            message.as_deref(),
            Some("SHOW CREATE TABLE AS SERDE is not supported for v2 tables.")
        );
        assert_eq!(format_message("NO_SUCH_CLASS", &[]), None);
    }
}
