// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Abstract syntax tree nodes and their formatting machinery.

pub mod ddl;
pub mod display;
pub mod ident;

pub use ddl::{
    BucketSpec, ColumnDef, CreateTableStatement, CreateViewStatement, PartitionExpr, Statement,
    TransformArg, ViewColumn,
};
pub use ident::{FullItemName, Ident, UnresolvedItemName};
