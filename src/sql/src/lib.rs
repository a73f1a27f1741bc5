// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! SQL–metadata translation.
//!
//! This crate hosts the pieces that sit between a catalog and DDL text: the
//! metadata model of tables and views, the renderer that reconstructs
//! `CREATE` statements from that metadata, a parser for exactly the
//! statements the renderer emits, and the catalog abstraction that planning
//! consumes. The crate is agnostic to any particular catalog implementation.

#![warn(missing_debug_implementations)]

pub mod ast;
pub mod catalog;
pub mod keywords;
pub mod lexer;
pub mod parser;
pub mod plan;
pub mod show_create;
