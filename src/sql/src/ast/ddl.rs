// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! AST types for the `CREATE` statements the renderer can emit (commonly
//! referred to as Data Definition Language, or DDL).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use scribe_repr::{ColumnType, RecordField, ScalarType};

use crate::ast::display::{self, impl_display, AstDisplay, AstFormatter};
use crate::ast::ident::{Ident, UnresolvedItemName};

/// A statement reconstructed from catalog metadata or parsed back from DDL
/// text.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A `CREATE TABLE` statement.
    CreateTable(CreateTableStatement),
    /// A `CREATE VIEW` statement.
    CreateView(CreateViewStatement),
}

/// A `CREATE TABLE` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTableStatement {
    /// The name of the table: bare, or qualified by a namespace.
    pub name: UnresolvedItemName,
    /// The ordered column definitions.
    pub columns: Vec<ColumnDef>,
    /// The data source provider named in the `USING` clause.
    pub provider: String,
    /// Data source options, keyed by option name.
    pub options: BTreeMap<String, String>,
    /// The partitioning of the table, in declaration order.
    pub partition_by: Vec<PartitionExpr>,
    /// The clustering of the table, if it is bucketed.
    pub bucket_by: Option<BucketSpec>,
    /// An optional free-form table comment.
    pub comment: Option<String>,
    /// An optional storage location.
    pub location: Option<String>,
    /// Table properties, keyed by property name.
    pub properties: BTreeMap<String, String>,
}

/// A `CREATE VIEW` statement.
///
/// The defining query is carried verbatim: it is never re-derived or
/// reformatted.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateViewStatement {
    /// The name of the view: bare, or qualified by a namespace.
    pub name: UnresolvedItemName,
    /// The declared output columns, possibly empty.
    pub columns: Vec<ViewColumn>,
    /// An optional free-form view comment.
    pub comment: Option<String>,
    /// View properties, keyed by property name.
    pub properties: BTreeMap<String, String>,
    /// The text of the defining query.
    pub query: String,
}

/// A column definition within a `CREATE TABLE` statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// The name of the column.
    pub name: Ident,
    /// The type of the column, including its nullability.
    pub typ: ColumnType,
    /// An optional free-form comment.
    pub comment: Option<String>,
}

impl AstDisplay for ColumnDef {
    fn fmt<W: fmt::Write>(&self, f: &mut AstFormatter<W>) {
        f.write_node(&self.name);
        f.write_str(" ");
        f.write_node(&self.typ);
        if let Some(comment) = &self.comment {
            f.write_str(" COMMENT '");
            f.write_node(&display::escape_single_quote_string(comment));
            f.write_str("'");
        }
    }
}
impl_display!(ColumnDef);

impl AstDisplay for ColumnType {
    fn fmt<W: fmt::Write>(&self, f: &mut AstFormatter<W>) {
        f.write_node(&self.scalar_type);
        if !self.nullable {
            f.write_str(" NOT NULL");
        }
    }
}

impl AstDisplay for ScalarType {
    fn fmt<W: fmt::Write>(&self, f: &mut AstFormatter<W>) {
        match self {
            ScalarType::Boolean => f.write_str("BOOLEAN"),
            ScalarType::Int32 => f.write_str("INT"),
            ScalarType::Int64 => f.write_str("BIGINT"),
            ScalarType::Float32 => f.write_str("FLOAT"),
            ScalarType::Float64 => f.write_str("DOUBLE"),
            ScalarType::Decimal { precision, scale } => {
                f.write_str("DECIMAL(");
                f.write_str(precision);
                f.write_str(",");
                f.write_str(scale);
                f.write_str(")");
            }
            ScalarType::String => f.write_str("STRING"),
            ScalarType::Date => f.write_str("DATE"),
            ScalarType::Timestamp => f.write_str("TIMESTAMP"),
            ScalarType::Bytes => f.write_str("BINARY"),
            ScalarType::Array(element_type) => {
                f.write_str("ARRAY<");
                f.write_node(&**element_type);
                f.write_str(">");
            }
            ScalarType::Map {
                key_type,
                value_type,
            } => {
                f.write_str("MAP<");
                f.write_node(&**key_type);
                f.write_str(", ");
                f.write_node(&**value_type);
                f.write_str(">");
            }
            ScalarType::Record(fields) => {
                f.write_str("STRUCT<");
                f.write_node(&display::comma_separated(fields));
                f.write_str(">");
            }
        }
    }
}

impl AstDisplay for RecordField {
    fn fmt<W: fmt::Write>(&self, f: &mut AstFormatter<W>) {
        f.write_node(&Ident::new(self.name.as_str()));
        f.write_str(": ");
        f.write_node(&self.typ);
        if let Some(comment) = &self.comment {
            f.write_str(" COMMENT '");
            f.write_node(&display::escape_single_quote_string(comment));
            f.write_str("'");
        }
    }
}

/// One entry of a `PARTITIONED BY` clause: a plain column reference, or a
/// named transform expression such as `bucket(16, id)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PartitionExpr {
    /// A reference to a top-level column.
    Column(Ident),
    /// A named transform over literal and column arguments.
    Transform {
        /// The name of the transform function.
        name: String,
        /// The arguments, in call order.
        args: Vec<TransformArg>,
    },
}

impl AstDisplay for PartitionExpr {
    fn fmt<W: fmt::Write>(&self, f: &mut AstFormatter<W>) {
        match self {
            PartitionExpr::Column(ident) => f.write_node(&ident.maybe_quoted()),
            PartitionExpr::Transform { name, args } => {
                f.write_str(name);
                f.write_str("(");
                f.write_node(&display::comma_separated(args));
                f.write_str(")");
            }
        }
    }
}
impl_display!(PartitionExpr);

/// An argument to a partition transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TransformArg {
    /// An integer literal.
    Int(i64),
    /// A string literal.
    String(String),
    /// A column reference.
    Column(Ident),
}

impl AstDisplay for TransformArg {
    fn fmt<W: fmt::Write>(&self, f: &mut AstFormatter<W>) {
        match self {
            TransformArg::Int(n) => f.write_str(n),
            TransformArg::String(s) => {
                f.write_str("'");
                f.write_node(&display::escape_single_quote_string(s));
                f.write_str("'");
            }
            TransformArg::Column(ident) => f.write_node(&ident.maybe_quoted()),
        }
    }
}

/// A clustering specification: `CLUSTERED BY (...) [SORTED BY (...)] INTO
/// <n> BUCKETS`, rendered as a single clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketSpec {
    /// The columns rows are clustered by.
    pub cluster_by: Vec<Ident>,
    /// The columns each bucket is sorted by, possibly empty.
    pub sort_by: Vec<Ident>,
    /// The number of buckets.
    pub bucket_count: u32,
}

impl AstDisplay for BucketSpec {
    fn fmt<W: fmt::Write>(&self, f: &mut AstFormatter<W>) {
        let cluster_by: Vec<_> = self.cluster_by.iter().map(Ident::maybe_quoted).collect();
        f.write_str("CLUSTERED BY (");
        f.write_node(&display::comma_separated(&cluster_by));
        f.write_str(")");
        if !self.sort_by.is_empty() {
            let sort_by: Vec<_> = self.sort_by.iter().map(Ident::maybe_quoted).collect();
            f.write_str(" SORTED BY (");
            f.write_node(&display::comma_separated(&sort_by));
            f.write_str(")");
        }
        f.write_str(" INTO ");
        f.write_str(self.bucket_count);
        f.write_str(" BUCKETS");
    }
}
impl_display!(BucketSpec);

/// A declared output column of a `CREATE VIEW` statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewColumn {
    /// The name of the column.
    pub name: Ident,
    /// An optional free-form comment.
    pub comment: Option<String>,
}

impl AstDisplay for ViewColumn {
    fn fmt<W: fmt::Write>(&self, f: &mut AstFormatter<W>) {
        f.write_node(&self.name);
        if let Some(comment) = &self.comment {
            f.write_str(" COMMENT '");
            f.write_node(&display::escape_single_quote_string(comment));
            f.write_str("'");
        }
    }
}
impl_display!(ViewColumn);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_def() {
        let column = ColumnDef {
            name: Ident::new("a"),
            typ: ScalarType::Int64.nullable(false),
            comment: None,
        };
        assert_eq!(column.to_string(), "`a` BIGINT NOT NULL");

        let column = ColumnDef {
            name: Ident::new("b"),
            typ: ScalarType::Decimal {
                precision: 10,
                scale: 2,
            }
            .nullable(true),
            comment: Some("money's worth".into()),
        };
        assert_eq!(
            column.to_string(),
            "`b` DECIMAL(10,2) COMMENT 'money''s worth'"
        );
    }

    #[test]
    fn test_nested_types() {
        let typ = ScalarType::Record(vec![
            RecordField {
                name: "<another>".into(),
                typ: ScalarType::String,
                comment: None,
            },
            RecordField {
                name: "counts".into(),
                typ: ScalarType::Array(Box::new(ScalarType::Int32)),
                comment: Some("per day".into()),
            },
        ]);
        assert_eq!(
            typ.to_ast_string(),
            "STRUCT<`<another>`: STRING, `counts`: ARRAY<INT> COMMENT 'per day'>"
        );
        let typ = ScalarType::Map {
            key_type: Box::new(ScalarType::String),
            value_type: Box::new(ScalarType::Float64),
        };
        assert_eq!(typ.to_ast_string(), "MAP<STRING, DOUBLE>");
    }

    #[test]
    fn test_partition_expr() {
        assert_eq!(PartitionExpr::Column(Ident::new("p")).to_string(), "p");
        assert_eq!(
            PartitionExpr::Column(Ident::new("extra col")).to_string(),
            "`extra col`"
        );
        let transform = PartitionExpr::Transform {
            name: "bucket".into(),
            args: vec![TransformArg::Int(16), TransformArg::Column(Ident::new("id"))],
        };
        assert_eq!(transform.to_string(), "bucket(16, id)");
        let transform = PartitionExpr::Transform {
            name: "truncate".into(),
            args: vec![
                TransformArg::String("pre'fix".into()),
                TransformArg::Column(Ident::new("name")),
            ],
        };
        assert_eq!(transform.to_string(), "truncate('pre''fix', name)");
    }

    #[test]
    fn test_bucket_spec() {
        let spec = BucketSpec {
            cluster_by: vec![Ident::new("a")],
            sort_by: vec![Ident::new("b")],
            bucket_count: 2,
        };
        assert_eq!(spec.to_string(), "CLUSTERED BY (a) SORTED BY (b) INTO 2 BUCKETS");

        let spec = BucketSpec {
            cluster_by: vec![Ident::new("a"), Ident::new("b")],
            sort_by: vec![],
            bucket_count: 16,
        };
        assert_eq!(spec.to_string(), "CLUSTERED BY (a, b) INTO 16 BUCKETS");
    }
}
