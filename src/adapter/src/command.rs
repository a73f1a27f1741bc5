// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Execution of catalog commands.

use tracing::debug;

use scribe_repr::Row;
use scribe_sql::ast::{Statement, UnresolvedItemName};
use scribe_sql::catalog::SessionCatalog;
use scribe_sql::plan::{self, ShowCreateFormat};
use scribe_vellum::collections::CollectionExt;

use crate::error::ExecutionError;

/// Executes `SHOW CREATE TABLE` against `catalog`.
///
/// On success returns the single result row, whose only column holds the
/// re-issuable DDL statement. On failure no row is produced and the error
/// carries a stable error class.
pub fn execute_show_create_table(
    catalog: &dyn SessionCatalog,
    name: &UnresolvedItemName,
    format: ShowCreateFormat,
) -> Result<Row, ExecutionError> {
    debug!(name = %name, ?format, "executing SHOW CREATE TABLE");
    let plan = plan::plan_show_create_table(catalog, name, format)?;
    Ok(plan.rows.into_element())
}

/// Replays a parsed DDL statement against `catalog`.
///
/// This is the re-create half of round-trip verification: the statement is
/// expected to have come out of the renderer.
pub fn execute_statement(
    catalog: &mut dyn SessionCatalog,
    statement: Statement,
) -> Result<(), ExecutionError> {
    match statement {
        Statement::CreateTable(stmt) => {
            debug!(name = %stmt.name, "replaying CREATE TABLE");
            catalog.create_table(stmt)?;
        }
        Statement::CreateView(stmt) => {
            debug!(name = %stmt.name, "replaying CREATE VIEW");
            catalog.create_view(stmt)?;
        }
    }
    Ok(())
}
