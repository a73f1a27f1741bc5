// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Data-driven DDL round-trip tests.
//!
//! Each test case parses a statement and renders it back; for valid input
//! the expected output is the canonical form of the statement, which for
//! canonical input is the input itself.

use datadriven::walk;
use scribe_sql::ast::{FullItemName, Statement, UnresolvedItemName};
use scribe_sql::catalog::{RenderStyle, TableSpec, ViewSpec};
use scribe_sql::parser;
use scribe_sql::show_create;

fn full_name(name: UnresolvedItemName) -> FullItemName {
    let mut idents = name.0;
    match idents.len() {
        1 => FullItemName {
            namespace: None,
            item: idents.pop().unwrap(),
        },
        2 => {
            let item = idents.pop().unwrap();
            FullItemName {
                namespace: idents.pop(),
                item,
            }
        }
        _ => panic!("test names have at most two segments"),
    }
}

fn roundtrip(sql: &str, style: &RenderStyle) -> String {
    let sql = sql.strip_suffix('\n').unwrap_or(sql);
    match parser::parse_statement(sql) {
        Ok(Statement::CreateTable(stmt)) => {
            let spec = TableSpec {
                name: full_name(stmt.name),
                columns: stmt.columns,
                provider: stmt.provider,
                options: stmt.options,
                partition_by: stmt.partition_by,
                bucket_by: stmt.bucket_by,
                location: stmt.location,
                comment: stmt.comment,
                properties: stmt.properties,
            };
            format!("{}\n", show_create::render_create_table(&spec, style))
        }
        Ok(Statement::CreateView(stmt)) => {
            let spec = ViewSpec {
                name: full_name(stmt.name),
                columns: stmt.columns,
                comment: stmt.comment,
                properties: stmt.properties,
                query: stmt.query,
            };
            format!("{}\n", show_create::render_create_view(&spec))
        }
        Err(e) => format!("error: {}\n", e.message),
    }
}

#[test]
fn datadriven() {
    walk("tests/testdata", |f| {
        f.run(|tc| -> String {
            match tc.directive.as_str() {
                "roundtrip" => {
                    let style = if tc
                        .args
                        .get("style")
                        .map_or(false, |v| v.iter().any(|s| s == "v2"))
                    {
                        RenderStyle::V2
                    } else {
                        RenderStyle::V1
                    };
                    roundtrip(&tc.input, &style)
                }
                dir => panic!("unhandled directive {}", dir),
            }
        })
    });
}
