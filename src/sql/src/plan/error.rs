// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::error::Error;
use std::fmt;

use crate::catalog::CatalogError;
use crate::parser::ParserError;

/// An error while producing a plan.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanError {
    /// An error during catalog resolution.
    Catalog(CatalogError),
    /// Legacy SerDe rendering was requested for an object that does not
    /// support it.
    ShowCreateAsSerdeUnsupported {
        /// A description of the unsupported target.
        target: String,
    },
    /// An error while parsing replayed DDL.
    Parser(ParserError),
}

impl PlanError {
    /// Reports additional details about the error, if any are available.
    pub fn detail(&self) -> Option<String> {
        None
    }

    /// Reports a hint for the user about how the error could be fixed.
    pub fn hint(&self) -> Option<String> {
        match self {
            PlanError::ShowCreateAsSerdeUnsupported { .. } => {
                Some("Use SHOW CREATE TABLE without the AS SERDE clause instead.".into())
            }
            _ => None,
        }
    }
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlanError::Catalog(e) => e.fmt(f),
            PlanError::ShowCreateAsSerdeUnsupported { target } => {
                write!(f, "SHOW CREATE TABLE AS SERDE is not supported for {}", target)
            }
            PlanError::Parser(e) => e.fmt(f),
        }
    }
}

impl Error for PlanError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PlanError::Catalog(e) => Some(e),
            PlanError::Parser(e) => Some(e),
            PlanError::ShowCreateAsSerdeUnsupported { .. } => None,
        }
    }
}

impl From<CatalogError> for PlanError {
    fn from(e: CatalogError) -> PlanError {
        PlanError::Catalog(e)
    }
}

impl From<ParserError> for PlanError {
    fn from(e: ParserError) -> PlanError {
        PlanError::Parser(e)
    }
}
