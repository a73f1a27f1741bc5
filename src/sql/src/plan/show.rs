// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Planning for the `SHOW CREATE` family of commands.
//!
//! `SHOW CREATE TABLE` accepts a table or a permanent view and returns the
//! statement that re-creates it. Temporary and global-temporary views are
//! rejected during catalog resolution.

use scribe_repr::{Datum, RelationDesc, Row, ScalarType};

use crate::ast::UnresolvedItemName;
use crate::catalog::{CatalogItem, SessionCatalog};
use crate::plan::{PlanError, SendRowsPlan, StatementDesc};
use crate::show_create;

/// The requested output format of `SHOW CREATE TABLE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowCreateFormat {
    /// The native format: a data source `CREATE TABLE`, or `CREATE VIEW`.
    Plain,
    /// The legacy Hive SerDe format, requested with `AS SERDE`.
    Serde,
}

/// Describes the output of `SHOW CREATE TABLE`: a single row with a single
/// string column holding the statement.
pub fn describe_show_create_table() -> StatementDesc {
    StatementDesc::new(Some(
        RelationDesc::empty().with_column("createtab_stmt", ScalarType::String.nullable(false)),
    ))
}

/// Plans `SHOW CREATE TABLE`.
pub fn plan_show_create_table(
    catalog: &dyn SessionCatalog,
    name: &UnresolvedItemName,
    format: ShowCreateFormat,
) -> Result<SendRowsPlan, PlanError> {
    let config = catalog.config();
    let item = catalog.resolve_item(name)?;
    if let ShowCreateFormat::Serde = format {
        let target = if !config.supports_legacy_serde {
            "v2 tables".to_string()
        } else {
            // Hive-format metadata never reaches these catalogs, so every
            // v1 table takes the data source path.
            match &item {
                CatalogItem::Table(table) => format!("data source table {}", table.name),
                CatalogItem::View(view) => format!("view {}", view.name),
            }
        };
        return Err(PlanError::ShowCreateAsSerdeUnsupported { target });
    }
    let ddl = match &item {
        CatalogItem::Table(table) => show_create::render_create_table(table, &config.render),
        CatalogItem::View(view) => show_create::render_create_view(view),
    };
    Ok(SendRowsPlan {
        rows: vec![Row::pack_slice(&[Datum::String(&ddl)])],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_show_create_table() {
        let desc = describe_show_create_table();
        let relation_desc = desc.relation_desc.unwrap();
        assert_eq!(relation_desc.arity(), 1);
        let (name, typ) = relation_desc.iter().next().unwrap();
        assert_eq!(name.as_str(), "createtab_stmt");
        assert_eq!(*typ, ScalarType::String.nullable(false));
    }
}
