// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::relation::{ColumnName, ColumnType};

/// The type of a [`Datum`](crate::Datum) or of a column in a catalog object.
///
/// Scalar types compose recursively: arrays, maps, and records may contain
/// any other scalar type, including further containers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalarType {
    /// The type of [`Datum::True`](crate::Datum::True) and
    /// [`Datum::False`](crate::Datum::False).
    Boolean,
    /// The type of 32-bit signed integers.
    Int32,
    /// The type of 64-bit signed integers.
    Int64,
    /// The type of 32-bit floating-point numbers.
    Float32,
    /// The type of 64-bit floating-point numbers.
    Float64,
    /// The type of exact decimal numbers with a fixed precision and scale.
    Decimal {
        /// The total number of digits.
        precision: u8,
        /// The number of digits after the decimal point.
        scale: u8,
    },
    /// The type of UTF-8 character sequences.
    String,
    /// The type of dates without a time component.
    Date,
    /// The type of date–time pairs.
    Timestamp,
    /// The type of uninterpreted byte sequences.
    Bytes,
    /// The type of sequences whose elements share a single type.
    Array(Box<ScalarType>),
    /// The type of mappings from keys of one type to values of another.
    Map {
        /// The type of the map's keys.
        key_type: Box<ScalarType>,
        /// The type of the map's values.
        value_type: Box<ScalarType>,
    },
    /// The type of tuples with named, individually typed fields.
    Record(Vec<RecordField>),
}

/// A single named field of a [`ScalarType::Record`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordField {
    /// The name of the field. Case preserving; quoted independently of the
    /// enclosing column when rendered.
    pub name: ColumnName,
    /// The type of the field.
    pub typ: ScalarType,
    /// An optional free-form comment attached to the field.
    pub comment: Option<String>,
}

impl ScalarType {
    /// Derives a [`ColumnType`] from this scalar type with the given
    /// nullability.
    pub fn nullable(self, nullable: bool) -> ColumnType {
        ColumnType {
            scalar_type: self,
            nullable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nullable() {
        let typ = ScalarType::Int64.nullable(false);
        assert_eq!(typ.scalar_type, ScalarType::Int64);
        assert!(!typ.nullable);
    }

    #[test]
    fn test_serde_round_trip() {
        let typ = ScalarType::Record(vec![RecordField {
            name: ColumnName::from("inner field"),
            typ: ScalarType::Array(Box::new(ScalarType::Decimal {
                precision: 10,
                scale: 2,
            })),
            comment: Some("nested".into()),
        }]);
        let json = serde_json::to_string(&typ).unwrap();
        assert_eq!(serde_json::from_str::<ScalarType>(&json).unwrap(), typ);
    }
}
