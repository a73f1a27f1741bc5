// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Command planning: turning resolved metadata into executable plans.

use scribe_repr::{RelationDesc, Row};

pub mod error;
pub mod show;

pub use error::PlanError;
pub use show::{describe_show_create_table, plan_show_create_table, ShowCreateFormat};

/// A description of a statement's output, produced before the statement
/// executes.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementDesc {
    /// The shape of the rows the statement produces, if any.
    pub relation_desc: Option<RelationDesc>,
}

impl StatementDesc {
    /// Creates a statement description.
    pub fn new(relation_desc: Option<RelationDesc>) -> StatementDesc {
        StatementDesc { relation_desc }
    }
}

/// A plan that immediately sends a fixed set of rows to the client.
#[derive(Debug, Clone, PartialEq)]
pub struct SendRowsPlan {
    /// The rows to send.
    pub rows: Vec<Row>,
}
