// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

#![warn(missing_docs)]

//! Catalog abstraction layer.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use scribe_vellum::str::StrExt;

use crate::ast::{
    BucketSpec, ColumnDef, CreateTableStatement, CreateViewStatement, FullItemName, PartitionExpr,
    UnresolvedItemName, ViewColumn,
};

/// The metadata of a table, as resolved by a catalog.
///
/// Constructed by resolving a persisted catalog entry; immutable once
/// constructed; discarded after rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSpec {
    /// The qualified name of the table. The resolving catalog decides
    /// whether the namespace segment is present.
    pub name: FullItemName,
    /// The ordered column definitions.
    pub columns: Vec<ColumnDef>,
    /// The data source provider.
    pub provider: String,
    /// Data source options, keyed by option name.
    pub options: BTreeMap<String, String>,
    /// The partitioning of the table, in declaration order.
    pub partition_by: Vec<PartitionExpr>,
    /// The clustering of the table, if it is bucketed.
    pub bucket_by: Option<BucketSpec>,
    /// The storage location. v1 catalogs resolve this to an absolute
    /// `file:` URI; v2 catalogs preserve it byte for byte.
    pub location: Option<String>,
    /// An optional free-form comment.
    pub comment: Option<String>,
    /// Table properties, keyed by property name. Values are stored as
    /// strings regardless of their original representation.
    pub properties: BTreeMap<String, String>,
}

/// The metadata of a view, as resolved by a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSpec {
    /// The qualified name of the view.
    pub name: FullItemName,
    /// The declared output columns, possibly empty.
    pub columns: Vec<ViewColumn>,
    /// An optional free-form comment.
    pub comment: Option<String>,
    /// View properties, keyed by property name.
    pub properties: BTreeMap<String, String>,
    /// The verbatim text of the defining query.
    pub query: String,
}

/// An item resolved from a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CatalogItem {
    /// A table.
    Table(TableSpec),
    /// A permanent view.
    View(ViewSpec),
}

impl CatalogItem {
    /// Returns the type of this item.
    pub fn item_type(&self) -> CatalogItemType {
        match self {
            CatalogItem::Table(_) => CatalogItemType::Table,
            CatalogItem::View(_) => CatalogItemType::View,
        }
    }

    /// Returns the qualified name of this item.
    pub fn name(&self) -> &FullItemName {
        match self {
            CatalogItem::Table(table) => &table.name,
            CatalogItem::View(view) => &view.name,
        }
    }
}

/// The type of a [`CatalogItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogItemType {
    /// A table.
    Table,
    /// A permanent view.
    View,
}

impl fmt::Display for CatalogItemType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CatalogItemType::Table => f.write_str("table"),
            CatalogItemType::View => f.write_str("view"),
        }
    }
}

/// An error returned by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The named item does not exist.
    UnknownItem(String),
    /// The name refers to a temporary or global-temporary view, which
    /// catalog resolution does not expose.
    TemporaryItem {
        /// The offending name.
        name: String,
        /// Whether the view is global-temporary.
        global: bool,
    },
    /// An item with the given name already exists.
    ItemAlreadyExists(String),
    /// The name has a shape the catalog cannot resolve.
    InvalidItemName(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CatalogError::UnknownItem(name) => {
                write!(f, "table or view {} cannot be found", name.quoted())
            }
            CatalogError::TemporaryItem {
                name,
                global: false,
            } => write!(f, "{} is a temporary view", name.quoted()),
            CatalogError::TemporaryItem { name, global: true } => {
                write!(f, "{} is a global temporary view", name.quoted())
            }
            CatalogError::ItemAlreadyExists(name) => {
                write!(f, "table or view {} already exists", name.quoted())
            }
            CatalogError::InvalidItemName(name) => {
                write!(f, "invalid item name {}", name.quoted())
            }
        }
    }
}

impl Error for CatalogError {}

/// Formatting quirks that differ between catalog versions.
///
/// The divergences here are inherited behavior, not a deliberate contract:
/// exact spacing and option-key quoting vary per catalog version, so they
/// are carried as configuration rather than inferred as a single rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    /// Whether a space separates the `OPTIONS` keyword from its opening
    /// parenthesis.
    pub options_keyword_space: bool,
    /// Whether option keys render single-quoted. Keys that are not plain
    /// words are quoted regardless.
    pub quote_option_keys: bool,
}

impl RenderStyle {
    /// The style rendered from v1 catalogs.
    pub const V1: RenderStyle = RenderStyle {
        options_keyword_space: true,
        quote_option_keys: true,
    };

    /// The style rendered from v2 catalogs.
    pub const V2: RenderStyle = RenderStyle {
        options_keyword_space: false,
        quote_option_keys: false,
    };
}

/// Session-level configuration of a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// The namespace a single-segment name resolves into.
    pub default_namespace: String,
    /// Whether resolved names carry the namespace segment even when it is
    /// the session default.
    pub qualify_default_namespace: bool,
    /// Whether locations resolve to absolute `file:` URIs during
    /// resolution.
    pub resolve_locations: bool,
    /// Whether the catalog can render legacy SerDe metadata for tables
    /// that carry it.
    pub supports_legacy_serde: bool,
    /// The formatting quirks of DDL rendered from this catalog.
    pub render: RenderStyle,
}

impl CatalogConfig {
    /// Returns the configuration of a v1 catalog with the given default
    /// namespace.
    pub fn v1<S>(default_namespace: S) -> CatalogConfig
    where
        S: Into<String>,
    {
        CatalogConfig {
            default_namespace: default_namespace.into(),
            qualify_default_namespace: true,
            resolve_locations: true,
            supports_legacy_serde: true,
            render: RenderStyle::V1,
        }
    }

    /// Returns the configuration of a v2 catalog with the given default
    /// namespace.
    pub fn v2<S>(default_namespace: S) -> CatalogConfig
    where
        S: Into<String>,
    {
        CatalogConfig {
            default_namespace: default_namespace.into(),
            qualify_default_namespace: false,
            resolve_locations: false,
            supports_legacy_serde: false,
            render: RenderStyle::V2,
        }
    }
}

/// A catalog keeps track of the tables and views available to a session.
///
/// This crate is agnostic to any particular catalog implementation; this
/// trait describes the required interface.
///
/// Resolution may perform blocking I/O and must be safe for concurrent
/// invocation by independent callers. Mutation takes `&mut self`: a caller
/// that interleaves drops and re-creates with readers of the same name is
/// responsible for its own serialization.
pub trait SessionCatalog: fmt::Debug + Send + Sync {
    /// Returns the session configuration of this catalog.
    fn config(&self) -> &CatalogConfig;

    /// Resolves the named item.
    ///
    /// Fails with [`CatalogError::UnknownItem`] if the name does not
    /// resolve and with [`CatalogError::TemporaryItem`] if it names a
    /// temporary or global-temporary view.
    fn resolve_item(&self, name: &UnresolvedItemName) -> Result<CatalogItem, CatalogError>;

    /// Creates a table from the given statement.
    fn create_table(&mut self, stmt: CreateTableStatement) -> Result<(), CatalogError>;

    /// Creates a view from the given statement.
    fn create_view(&mut self, stmt: CreateViewStatement) -> Result<(), CatalogError>;

    /// Registers a temporary view under a bare name, or a global-temporary
    /// view when `global` is set.
    fn create_temporary_view(
        &mut self,
        name: &str,
        query: &str,
        global: bool,
    ) -> Result<(), CatalogError>;

    /// Drops the named item.
    fn drop_item(&mut self, name: &UnresolvedItemName) -> Result<(), CatalogError>;
}

#[cfg(test)]
mod tests {
    use scribe_repr::ScalarType;

    use super::*;
    use crate::ast::{ColumnDef, Ident};

    #[test]
    fn test_table_spec_serde_round_trip() {
        let spec = TableSpec {
            name: FullItemName {
                namespace: Some(Ident::new("default")),
                item: Ident::new("t"),
            },
            columns: vec![ColumnDef {
                name: Ident::new("a"),
                typ: ScalarType::Decimal {
                    precision: 10,
                    scale: 2,
                }
                .nullable(false),
                comment: Some("first".into()),
            }],
            provider: "parquet".into(),
            options: BTreeMap::from([("path".to_string(), "/tmp/t".to_string())]),
            partition_by: vec![PartitionExpr::Column(Ident::new("a"))],
            bucket_by: None,
            location: Some("/tmp/t".into()),
            comment: None,
            properties: BTreeMap::new(),
        };
        let json = serde_json::to_string(&spec).unwrap();
        assert_eq!(serde_json::from_str::<TableSpec>(&json).unwrap(), spec);
    }

    #[test]
    fn test_catalog_error_display() {
        assert_eq!(
            CatalogError::UnknownItem("default.t".into()).to_string(),
            "table or view \"default.t\" cannot be found"
        );
        assert_eq!(
            CatalogError::TemporaryItem {
                name: "tv".into(),
                global: false,
            }
            .to_string(),
            "\"tv\" is a temporary view"
        );
        assert_eq!(
            CatalogError::TemporaryItem {
                name: "global_temp.gtv".into(),
                global: true,
            }
            .to_string(),
            "\"global_temp.gtv\" is a global temporary view"
        );
    }

    #[test]
    fn test_version_configs() {
        let v1 = CatalogConfig::v1("default");
        assert!(v1.qualify_default_namespace);
        assert!(v1.resolve_locations);
        assert!(v1.supports_legacy_serde);
        assert_eq!(v1.render, RenderStyle::V1);

        let v2 = CatalogConfig::v2("default");
        assert!(!v2.qualify_default_namespace);
        assert!(!v2.resolve_locations);
        assert!(!v2.supports_legacy_serde);
        assert_eq!(v2.render, RenderStyle::V2);
    }
}
