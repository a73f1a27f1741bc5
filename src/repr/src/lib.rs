// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Fundamental data representation.
//!
//! This crate contains the types that describe the shape of catalog data
//! (scalar types, column types, relation descriptions) and the minimal
//! datum/row model in which command results are returned.

#![warn(missing_docs, missing_debug_implementations)]

mod relation;
mod row;
mod scalar;

pub use relation::{ColumnName, ColumnType, RelationDesc};
pub use row::{Datum, Row};
pub use scalar::{RecordField, ScalarType};
