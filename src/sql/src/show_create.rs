// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Reconstruction of `CREATE` statements from catalog metadata.
//!
//! The functions here are pure: given the same metadata and style they
//! produce byte-identical output, with clauses in a fixed order and no
//! trailing whitespace on any line. The output must re-parse into the same
//! metadata it was rendered from, which the parser in [`crate::parser`]
//! guarantees for both render styles.

use std::collections::BTreeMap;

use itertools::Itertools;

use crate::ast::display::{self, AstDisplay};
use crate::catalog::{RenderStyle, TableSpec, ViewSpec};

/// Renders the `CREATE TABLE` statement that re-creates `table`.
pub fn render_create_table(table: &TableSpec, style: &RenderStyle) -> String {
    let mut lines = Vec::new();
    let name = table.name.to_ast_string();
    if table.columns.is_empty() {
        lines.push(format!("CREATE TABLE {} ()", name));
    } else {
        lines.push(format!("CREATE TABLE {} (", name));
        for (i, column) in table.columns.iter().enumerate() {
            let terminator = if i + 1 == table.columns.len() { ")" } else { "," };
            lines.push(format!("{}{}", column.to_ast_string(), terminator));
        }
    }

    lines.push(format!("USING {}", table.provider));

    if !table.options.is_empty() {
        let keyword = if style.options_keyword_space {
            "OPTIONS ("
        } else {
            "OPTIONS("
        };
        render_kv_block(&mut lines, keyword, &table.options, style.quote_option_keys);
    }

    if !table.partition_by.is_empty() {
        lines.push(format!(
            "PARTITIONED BY ({})",
            table.partition_by.iter().map(|p| p.to_ast_string()).join(", ")
        ));
    }

    if let Some(bucket_by) = &table.bucket_by {
        lines.push(bucket_by.to_ast_string());
    }

    if let Some(comment) = &table.comment {
        lines.push(format!("COMMENT '{}'", escape(comment)));
    }

    if let Some(location) = &table.location {
        lines.push(format!("LOCATION '{}'", escape(location)));
    }

    if !table.properties.is_empty() {
        render_kv_block(&mut lines, "TBLPROPERTIES (", &table.properties, true);
    }

    lines.join("\n")
}

/// Renders the `CREATE VIEW` statement that re-creates `view`.
///
/// The defining query is emitted verbatim after `AS`.
pub fn render_create_view(view: &ViewSpec) -> String {
    let mut lines = Vec::new();
    let name = view.name.to_ast_string();
    if view.columns.is_empty() {
        lines.push(format!("CREATE VIEW {}", name));
    } else {
        lines.push(format!("CREATE VIEW {} (", name));
        for (i, column) in view.columns.iter().enumerate() {
            let terminator = if i + 1 == view.columns.len() { ")" } else { "," };
            lines.push(format!("{}{}", column.to_ast_string(), terminator));
        }
    }

    if let Some(comment) = &view.comment {
        lines.push(format!("COMMENT '{}'", escape(comment)));
    }

    if !view.properties.is_empty() {
        render_kv_block(&mut lines, "TBLPROPERTIES (", &view.properties, true);
    }

    lines.push(format!("AS {}", view.query));
    lines.join("\n")
}

/// Renders a parenthesized key–value block, one pair per line. All values
/// are single-quoted strings; numeric values were stringified when the
/// metadata was constructed.
fn render_kv_block(
    lines: &mut Vec<String>,
    keyword: &str,
    entries: &BTreeMap<String, String>,
    quote_keys: bool,
) {
    lines.push(keyword.to_string());
    for (i, (key, value)) in entries.iter().enumerate() {
        let key = if quote_keys || !bare_key(key) {
            format!("'{}'", escape(key))
        } else {
            key.clone()
        };
        let terminator = if i + 1 == entries.len() { ")" } else { "," };
        lines.push(format!("{} = '{}'{}", key, escape(value), terminator));
    }
}

/// Reports whether an option key may render bare: a dotted path of plain
/// words, as data source option keys conventionally are.
fn bare_key(key: &str) -> bool {
    !key.is_empty()
        && key.split('.').all(|segment| {
            let mut chars = segment.chars();
            chars
                .next()
                .map_or(false, |c| c.is_ascii_alphabetic() || c == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
}

fn escape(s: &str) -> String {
    display::escape_single_quote_string(s).to_ast_string()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use scribe_repr::ScalarType;

    use super::*;
    use crate::ast::{
        BucketSpec, ColumnDef, FullItemName, Ident, PartitionExpr, TransformArg, ViewColumn,
    };

    fn table(name: &str) -> TableSpec {
        TableSpec {
            name: FullItemName {
                namespace: Some(Ident::new("default")),
                item: Ident::new(name),
            },
            columns: vec![
                ColumnDef {
                    name: Ident::new("a"),
                    typ: ScalarType::Int64.nullable(false),
                    comment: None,
                },
                ColumnDef {
                    name: Ident::new("b"),
                    typ: ScalarType::Int64.nullable(true),
                    comment: None,
                },
            ],
            provider: "SimpleInsertSource".into(),
            options: BTreeMap::new(),
            partition_by: vec![],
            bucket_by: None,
            location: None,
            comment: None,
            properties: BTreeMap::new(),
        }
    }

    #[test]
    fn test_render_minimal_table() {
        let ddl = render_create_table(&table("t1"), &RenderStyle::V1);
        assert_eq!(
            ddl,
            "CREATE TABLE `default`.`t1` (\n\
             `a` BIGINT NOT NULL,\n\
             `b` BIGINT)\n\
             USING SimpleInsertSource"
        );
        // The column lines are load bearing: the second line carries the
        // NOT NULL suffix directly after the type and the third closes the
        // list in place of its comma.
        let lines: Vec<_> = ddl.lines().collect();
        assert_eq!(lines[1], "`a` BIGINT NOT NULL,");
        assert_eq!(lines[2], "`b` BIGINT)");
        assert_eq!(lines[3], "USING SimpleInsertSource");
    }

    #[test]
    fn test_render_bucketed_table() {
        let mut spec = table("t2");
        spec.bucket_by = Some(BucketSpec {
            cluster_by: vec![Ident::new("a")],
            sort_by: vec![Ident::new("b")],
            bucket_count: 2,
        });
        let ddl = render_create_table(&spec, &RenderStyle::V1);
        assert!(ddl.contains("CLUSTERED BY (a) SORTED BY (b) INTO 2 BUCKETS"));
        assert!(!ddl.contains("PARTITIONED BY"));
    }

    #[test]
    fn test_render_full_table_v1() {
        let mut spec = table("t3");
        spec.options = BTreeMap::from([("from".to_string(), "0".to_string())]);
        spec.partition_by = vec![
            PartitionExpr::Column(Ident::new("b")),
            PartitionExpr::Transform {
                name: "bucket".into(),
                args: vec![TransformArg::Int(16), TransformArg::Column(Ident::new("a"))],
            },
        ];
        spec.comment = Some("demo table".into());
        spec.location = Some("file:/tmp/t3".into());
        spec.properties = BTreeMap::from([
            ("prop1".to_string(), "1".to_string()),
            ("prop2".to_string(), "2".to_string()),
        ]);
        let ddl = render_create_table(&spec, &RenderStyle::V1);
        assert_eq!(
            ddl,
            "CREATE TABLE `default`.`t3` (\n\
             `a` BIGINT NOT NULL,\n\
             `b` BIGINT)\n\
             USING SimpleInsertSource\n\
             OPTIONS (\n\
             'from' = '0')\n\
             PARTITIONED BY (b, bucket(16, a))\n\
             COMMENT 'demo table'\n\
             LOCATION 'file:/tmp/t3'\n\
             TBLPROPERTIES (\n\
             'prop1' = '1',\n\
             'prop2' = '2')"
        );
    }

    #[test]
    fn test_render_options_v2_style() {
        let mut spec = table("t4");
        spec.name.namespace = None;
        spec.options = BTreeMap::from([
            ("path.style".to_string(), "flat".to_string()),
            ("weird key".to_string(), "v".to_string()),
        ]);
        let ddl = render_create_table(&spec, &RenderStyle::V2);
        assert_eq!(
            ddl,
            "CREATE TABLE `t4` (\n\
             `a` BIGINT NOT NULL,\n\
             `b` BIGINT)\n\
             USING SimpleInsertSource\n\
             OPTIONS(\n\
             path.style = 'flat',\n\
             'weird key' = 'v')"
        );
    }

    #[test]
    fn test_render_view() {
        let view = ViewSpec {
            name: FullItemName {
                namespace: Some(Ident::new("default")),
                item: Ident::new("v1"),
            },
            columns: vec![
                ViewColumn {
                    name: Ident::new("c1"),
                    comment: None,
                },
                ViewColumn {
                    name: Ident::new("c2"),
                    comment: Some("output".into()),
                },
            ],
            comment: Some("a view".into()),
            properties: BTreeMap::from([("owner".to_string(), "tests".to_string())]),
            query: "SELECT 1 AS c1, 2 AS c2".into(),
        };
        assert_eq!(
            render_create_view(&view),
            "CREATE VIEW `default`.`v1` (\n\
             `c1`,\n\
             `c2` COMMENT 'output')\n\
             COMMENT 'a view'\n\
             TBLPROPERTIES (\n\
             'owner' = 'tests')\n\
             AS SELECT 1 AS c1, 2 AS c2"
        );
    }

    #[test]
    fn test_render_view_without_columns() {
        let view = ViewSpec {
            name: FullItemName {
                namespace: None,
                item: Ident::new("v2"),
            },
            columns: vec![],
            comment: None,
            properties: BTreeMap::new(),
            query: "SELECT 1".into(),
        };
        assert_eq!(render_create_view(&view), "CREATE VIEW `v2`\nAS SELECT 1");
    }

    #[test]
    fn test_no_trailing_whitespace() {
        let mut spec = table("t5");
        spec.comment = Some("c".into());
        spec.options = BTreeMap::from([("k".to_string(), "v".to_string())]);
        let ddl = render_create_table(&spec, &RenderStyle::V1);
        for line in ddl.lines() {
            assert_eq!(line, line.trim_end());
        }
    }
}
