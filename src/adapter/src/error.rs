// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Structured execution errors.

use std::error::Error;
use std::fmt;

use scribe_sql::catalog::CatalogError;
use scribe_sql::plan::PlanError;

pub mod classes;

/// An error produced while executing a command.
///
/// The carrier holds a human-readable message, an optional wrapped cause
/// preserved for diagnostics, and an optional error class: a stable,
/// machine-readable identifier whose message template and SQL state code
/// live in the error-class registry ([`classes`]). The carrier consults
/// the registry but never embeds it.
#[derive(Debug)]
pub struct ExecutionError {
    message: String,
    cause: Option<Box<dyn Error + Send + Sync>>,
    error_class: Option<String>,
    message_parameters: Vec<String>,
}

impl ExecutionError {
    /// Creates an error from a raw message and an optional cause.
    ///
    /// Errors built this way carry no error class, so [`error_class`] and
    /// [`sql_state`] report absence.
    ///
    /// [`error_class`]: ExecutionError::error_class
    /// [`sql_state`]: ExecutionError::sql_state
    pub fn new<S>(message: S, cause: Option<Box<dyn Error + Send + Sync>>) -> ExecutionError
    where
        S: Into<String>,
    {
        ExecutionError {
            message: message.into(),
            cause,
            error_class: None,
            message_parameters: Vec::new(),
        }
    }

    /// Creates an error from an error class and its ordered message
    /// parameters. The message is derived by substituting the parameters
    /// into the registry's template for the class.
    ///
    /// Panics if `error_class` is not present in the registry.
    pub fn with_class<S>(error_class: S, message_parameters: Vec<String>) -> ExecutionError
    where
        S: Into<String>,
    {
        let error_class = error_class.into();
        let message = classes::format_message(&error_class, &message_parameters)
            .unwrap_or_else(|| panic!("unknown error class: {}", error_class));
        ExecutionError {
            message,
            cause: None,
            error_class: Some(error_class),
            message_parameters,
        }
    }

    /// Attaches a wrapped cause, preserved for diagnostics.
    pub fn with_cause(mut self, cause: Box<dyn Error + Send + Sync>) -> ExecutionError {
        self.cause = Some(cause);
        self
    }

    /// Returns the error class, if one was set.
    pub fn error_class(&self) -> Option<&str> {
        self.error_class.as_deref()
    }

    /// Returns the SQL state code the registry associates with this
    /// error's class. Absent when no error class was set, or when the
    /// registry assigns the class no state.
    pub fn sql_state(&self) -> Option<&'static str> {
        self.error_class.as_deref().and_then(classes::sql_state)
    }

    /// Returns the ordered message parameters.
    pub fn message_parameters(&self) -> &[String] {
        &self.message_parameters
    }
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for ExecutionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|e| e as &(dyn Error + 'static))
    }
}

impl From<CatalogError> for ExecutionError {
    fn from(e: CatalogError) -> ExecutionError {
        let carrier = match &e {
            CatalogError::TemporaryItem { name, global } => {
                let kind = if *global {
                    "global temporary view"
                } else {
                    "temporary view"
                };
                ExecutionError::with_class(
                    "TEMP_VIEW_NOT_SUPPORTED",
                    vec!["SHOW CREATE TABLE".into(), name.clone(), kind.into()],
                )
            }
            CatalogError::UnknownItem(name) => {
                ExecutionError::with_class("ITEM_NOT_FOUND", vec![name.clone()])
            }
            _ => ExecutionError::with_class("INTERNAL_ERROR", vec![e.to_string()]),
        };
        carrier.with_cause(Box::new(e))
    }
}

impl From<PlanError> for ExecutionError {
    fn from(e: PlanError) -> ExecutionError {
        match e {
            PlanError::Catalog(e) => e.into(),
            PlanError::ShowCreateAsSerdeUnsupported { target } => {
                let carrier = ExecutionError::with_class(
                    "UNSUPPORTED_SHOW_CREATE_TABLE_AS_SERDE",
                    vec![target.clone()],
                );
                carrier.with_cause(Box::new(PlanError::ShowCreateAsSerdeUnsupported { target }))
            }
            PlanError::Parser(e) => {
                // A parse failure during replay means the renderer emitted
                // a statement it cannot read back, which is not a user
                // mistake.
                ExecutionError::with_class("INTERNAL_ERROR", vec![e.to_string()])
                    .with_cause(Box::new(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_message_carries_no_class() {
        let e = ExecutionError::new("something broke", None);
        assert_eq!(e.to_string(), "something broke");
        assert_eq!(e.error_class(), None);
        assert_eq!(e.sql_state(), None);
        assert!(e.message_parameters().is_empty());
        assert!(e.source().is_none());
    }

    #[test]
    fn test_class_derives_message_and_state() {
        let e = ExecutionError::with_class(
            "TEMP_VIEW_NOT_SUPPORTED",
            vec!["SHOW CREATE TABLE".into(), "v".into(), "temporary view".into()],
        );
        assert_eq!(
            e.to_string(),
            "SHOW CREATE TABLE expects a table or permanent view, but v is a temporary view."
        );
        assert_eq!(e.error_class(), Some("TEMP_VIEW_NOT_SUPPORTED"));
        assert_eq!(e.sql_state(), Some("42809"));
        assert_eq!(e.message_parameters().len(), 3);
    }

    #[test]
    fn test_cause_is_preserved() {
        let cause = CatalogError::UnknownItem("default.t".into());
        let e = ExecutionError::from(cause.clone());
        assert_eq!(e.error_class(), Some("ITEM_NOT_FOUND"));
        assert_eq!(e.sql_state(), Some("42P01"));
        let source = e.source().unwrap();
        assert_eq!(source.to_string(), cause.to_string());
    }

    #[test]
    #[should_panic(expected = "unknown error class")]
    fn test_unknown_class_panics() {
        let _ = ExecutionError::with_class("NO_SUCH_CLASS", vec![]);
    }
}
