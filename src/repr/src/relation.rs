// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scalar::ScalarType;

/// The type of a column: a scalar type paired with its nullability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnType {
    /// The underlying scalar type.
    pub scalar_type: ScalarType,
    /// Whether the column may contain absent values.
    pub nullable: bool,
}

/// The name of a column, case preserving.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ColumnName(String);

impl ColumnName {
    /// Returns this column name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ColumnName {
    fn from(s: String) -> ColumnName {
        ColumnName(s)
    }
}

impl From<&str> for ColumnName {
    fn from(s: &str) -> ColumnName {
        ColumnName(s.into())
    }
}

/// A description of the shape of a relation: an ordered list of named,
/// typed columns.
///
/// Used to describe the output of a command before it executes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RelationDesc {
    columns: Vec<(ColumnName, ColumnType)>,
}

impl RelationDesc {
    /// Constructs a relation description with no columns.
    pub fn empty() -> Self {
        RelationDesc::default()
    }

    /// Appends a column to the description.
    pub fn with_column<N>(mut self, name: N, typ: ColumnType) -> Self
    where
        N: Into<ColumnName>,
    {
        self.columns.push((name.into(), typ));
        self
    }

    /// Returns the number of columns in the description.
    pub fn arity(&self) -> usize {
        self.columns.len()
    }

    /// Returns an iterator over the columns in the description.
    pub fn iter(&self) -> impl Iterator<Item = (&ColumnName, &ColumnType)> {
        self.columns.iter().map(|(name, typ)| (name, typ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_desc() {
        let desc = RelationDesc::empty()
            .with_column("name", ScalarType::String.nullable(false))
            .with_column("count", ScalarType::Int64.nullable(true));
        assert_eq!(desc.arity(), 2);
        let names: Vec<_> = desc.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, &["name", "count"]);
    }
}
