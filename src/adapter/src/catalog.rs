// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! In-memory catalog implementations.
//!
//! Both catalog versions share one storage shape; what differs between
//! them is session policy applied at resolution time: how names are
//! qualified, whether locations resolve to URIs, and which render style
//! their DDL carries. The policy lives in [`CatalogConfig`]; the shared
//! mechanics live in [`CatalogState`].

use std::collections::BTreeMap;

use anyhow::Context;
use serde::Serialize;
use tracing::debug;

use scribe_sql::ast::{
    CreateTableStatement, CreateViewStatement, FullItemName, Ident, UnresolvedItemName,
};
use scribe_sql::catalog::{
    CatalogConfig, CatalogError, CatalogItem, SessionCatalog, TableSpec, ViewSpec,
};

/// The reserved namespace under which global-temporary views are addressed.
pub const GLOBAL_TEMP_NAMESPACE: &str = "global_temp";

/// Item storage: namespaces of named items, plus the session's temporary
/// view registries.
#[derive(Debug, Default, Serialize)]
struct ItemStore {
    items: BTreeMap<String, BTreeMap<String, CatalogItem>>,
    temp_views: BTreeMap<String, String>,
    global_temp_views: BTreeMap<String, String>,
}

impl ItemStore {
    fn insert(
        &mut self,
        namespace: String,
        name: String,
        item: CatalogItem,
    ) -> Result<(), CatalogError> {
        let display = format!("{}.{}", namespace, name);
        let entries = self.items.entry(namespace).or_default();
        if entries.contains_key(&name) {
            return Err(CatalogError::ItemAlreadyExists(display));
        }
        entries.insert(name, item);
        Ok(())
    }

    fn get(&self, namespace: &str, name: &str) -> Option<&CatalogItem> {
        self.items.get(namespace).and_then(|entries| entries.get(name))
    }

    fn remove(&mut self, namespace: &str, name: &str) -> Option<CatalogItem> {
        self.items
            .get_mut(namespace)
            .and_then(|entries| entries.remove(name))
    }
}

/// The mechanics shared by both catalog versions.
#[derive(Debug)]
struct CatalogState {
    config: CatalogConfig,
    store: ItemStore,
}

impl CatalogState {
    fn new(config: CatalogConfig) -> CatalogState {
        CatalogState {
            config,
            store: ItemStore::default(),
        }
    }

    /// Splits a one- or two-segment name into namespace and item name,
    /// rejecting names that address the temporary view registries.
    fn name_parts(&self, name: &UnresolvedItemName) -> Result<(String, String), CatalogError> {
        match name.0.as_slice() {
            [item] => {
                let item = item.as_str();
                if self.store.temp_views.contains_key(item) {
                    return Err(CatalogError::TemporaryItem {
                        name: item.into(),
                        global: false,
                    });
                }
                Ok((self.config.default_namespace.clone(), item.into()))
            }
            [namespace, item] => {
                if namespace.as_str() == GLOBAL_TEMP_NAMESPACE {
                    let item = item.as_str();
                    if self.store.global_temp_views.contains_key(item) {
                        return Err(CatalogError::TemporaryItem {
                            name: format!("{}.{}", GLOBAL_TEMP_NAMESPACE, item),
                            global: true,
                        });
                    }
                    return Err(CatalogError::UnknownItem(format!(
                        "{}.{}",
                        GLOBAL_TEMP_NAMESPACE, item
                    )));
                }
                Ok((namespace.as_str().into(), item.as_str().into()))
            }
            _ => Err(CatalogError::InvalidItemName(name.to_string())),
        }
    }

    fn resolve_item(&self, name: &UnresolvedItemName) -> Result<CatalogItem, CatalogError> {
        let (namespace, item_name) = self.name_parts(name)?;
        let item = self
            .store
            .get(&namespace, &item_name)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownItem(format!("{}.{}", namespace, item_name)))?;
        Ok(self.apply_session_policy(item))
    }

    /// Applies the session's name-qualification and location-resolution
    /// policy to a stored item.
    fn apply_session_policy(&self, mut item: CatalogItem) -> CatalogItem {
        match &mut item {
            CatalogItem::Table(table) => {
                self.adjust_name(&mut table.name);
                if self.config.resolve_locations {
                    if let Some(location) = &mut table.location {
                        *location = resolve_location(location);
                    }
                }
            }
            CatalogItem::View(view) => self.adjust_name(&mut view.name),
        }
        item
    }

    fn adjust_name(&self, name: &mut FullItemName) {
        if !self.config.qualify_default_namespace
            && name
                .namespace
                .as_ref()
                .map_or(false, |ns| ns.as_str() == self.config.default_namespace)
        {
            name.namespace = None;
        }
    }

    fn create_table(&mut self, stmt: CreateTableStatement) -> Result<(), CatalogError> {
        let (namespace, item_name) = self.name_parts(&stmt.name)?;
        let spec = TableSpec {
            name: FullItemName {
                namespace: Some(Ident::new(namespace.clone())),
                item: Ident::new(item_name.clone()),
            },
            columns: stmt.columns,
            provider: stmt.provider,
            options: stmt.options,
            partition_by: stmt.partition_by,
            bucket_by: stmt.bucket_by,
            location: stmt.location,
            comment: stmt.comment,
            properties: stmt.properties,
        };
        debug!(table = %spec.name, "creating table");
        self.store.insert(namespace, item_name, CatalogItem::Table(spec))
    }

    fn create_view(&mut self, stmt: CreateViewStatement) -> Result<(), CatalogError> {
        let (namespace, item_name) = self.name_parts(&stmt.name)?;
        let spec = ViewSpec {
            name: FullItemName {
                namespace: Some(Ident::new(namespace.clone())),
                item: Ident::new(item_name.clone()),
            },
            columns: stmt.columns,
            comment: stmt.comment,
            properties: stmt.properties,
            query: stmt.query,
        };
        debug!(view = %spec.name, "creating view");
        self.store.insert(namespace, item_name, CatalogItem::View(spec))
    }

    fn create_temporary_view(
        &mut self,
        name: &str,
        query: &str,
        global: bool,
    ) -> Result<(), CatalogError> {
        let registry = if global {
            &mut self.store.global_temp_views
        } else {
            &mut self.store.temp_views
        };
        if registry.contains_key(name) {
            return Err(CatalogError::ItemAlreadyExists(name.into()));
        }
        registry.insert(name.into(), query.into());
        Ok(())
    }

    fn drop_item(&mut self, name: &UnresolvedItemName) -> Result<(), CatalogError> {
        let (namespace, item_name) = self.name_parts(name)?;
        debug!(item = %name, "dropping item");
        self.store
            .remove(&namespace, &item_name)
            .map(|_| ())
            .ok_or_else(|| CatalogError::UnknownItem(format!("{}.{}", namespace, item_name)))
    }

    fn dump(&self) -> Result<String, anyhow::Error> {
        serde_json::to_string_pretty(&self.store).context("serializing catalog state")
    }
}

// v1 catalogs hand back absolute URIs; a bare path gains the file scheme
// and anything already carrying a scheme is left alone.
fn resolve_location(location: &str) -> String {
    if location.starts_with('/') {
        format!("file:{}", location)
    } else {
        location.into()
    }
}

/// An in-memory catalog with v1 session semantics: resolved names always
/// carry their namespace segment, locations resolve to absolute `file:`
/// URIs, and DDL renders in the v1 style.
#[derive(Debug)]
pub struct MemoryCatalog {
    state: CatalogState,
}

impl MemoryCatalog {
    /// Creates an empty catalog with the conventional `default` namespace.
    pub fn new() -> MemoryCatalog {
        MemoryCatalog {
            state: CatalogState::new(CatalogConfig::v1("default")),
        }
    }

    /// Dumps the catalog state as JSON, for diagnostics.
    pub fn dump(&self) -> Result<String, anyhow::Error> {
        self.state.dump()
    }
}

impl Default for MemoryCatalog {
    fn default() -> MemoryCatalog {
        MemoryCatalog::new()
    }
}

impl SessionCatalog for MemoryCatalog {
    fn config(&self) -> &CatalogConfig {
        &self.state.config
    }

    fn resolve_item(&self, name: &UnresolvedItemName) -> Result<CatalogItem, CatalogError> {
        self.state.resolve_item(name)
    }

    fn create_table(&mut self, stmt: CreateTableStatement) -> Result<(), CatalogError> {
        self.state.create_table(stmt)
    }

    fn create_view(&mut self, stmt: CreateViewStatement) -> Result<(), CatalogError> {
        self.state.create_view(stmt)
    }

    fn create_temporary_view(
        &mut self,
        name: &str,
        query: &str,
        global: bool,
    ) -> Result<(), CatalogError> {
        self.state.create_temporary_view(name, query, global)
    }

    fn drop_item(&mut self, name: &UnresolvedItemName) -> Result<(), CatalogError> {
        self.state.drop_item(name)
    }
}

/// An in-memory catalog with v2 session semantics, standing in for a
/// pluggable external catalog: resolved names omit the namespace segment
/// when it is the session default, locations are preserved byte for byte,
/// legacy SerDe rendering is never supported, and DDL renders in the v2
/// style.
#[derive(Debug)]
pub struct PluggableCatalog {
    state: CatalogState,
}

impl PluggableCatalog {
    /// Creates an empty catalog with the conventional `default` namespace.
    pub fn new() -> PluggableCatalog {
        PluggableCatalog {
            state: CatalogState::new(CatalogConfig::v2("default")),
        }
    }

    /// Dumps the catalog state as JSON, for diagnostics.
    pub fn dump(&self) -> Result<String, anyhow::Error> {
        self.state.dump()
    }
}

impl Default for PluggableCatalog {
    fn default() -> PluggableCatalog {
        PluggableCatalog::new()
    }
}

impl SessionCatalog for PluggableCatalog {
    fn config(&self) -> &CatalogConfig {
        &self.state.config
    }

    fn resolve_item(&self, name: &UnresolvedItemName) -> Result<CatalogItem, CatalogError> {
        self.state.resolve_item(name)
    }

    fn create_table(&mut self, stmt: CreateTableStatement) -> Result<(), CatalogError> {
        self.state.create_table(stmt)
    }

    fn create_view(&mut self, stmt: CreateViewStatement) -> Result<(), CatalogError> {
        self.state.create_view(stmt)
    }

    fn create_temporary_view(
        &mut self,
        name: &str,
        query: &str,
        global: bool,
    ) -> Result<(), CatalogError> {
        self.state.create_temporary_view(name, query, global)
    }

    fn drop_item(&mut self, name: &UnresolvedItemName) -> Result<(), CatalogError> {
        self.state.drop_item(name)
    }
}
