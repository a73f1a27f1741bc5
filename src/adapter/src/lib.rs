// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Command execution against session catalogs.
//!
//! This crate owns the pieces that sit above the SQL layer: the in-memory
//! catalog implementations (one per catalog version), the command entry
//! points that resolve, render, and return rows, and the structured
//! execution error that every failure is converted into before it reaches
//! a client.

#![warn(missing_docs, missing_debug_implementations)]

pub mod catalog;
pub mod command;
pub mod error;

pub use catalog::{MemoryCatalog, PluggableCatalog, GLOBAL_TEMP_NAMESPACE};
pub use command::{execute_show_create_table, execute_statement};
pub use error::ExecutionError;
