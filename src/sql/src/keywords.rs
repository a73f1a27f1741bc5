// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Keywords recognized by the DDL dialect.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;

/// The set of words the DDL dialect reserves.
///
/// Identifiers that collide with one of these render quoted even in
/// positions that otherwise permit a bare word.
pub static RESERVED_KEYWORDS: Lazy<BTreeSet<&'static str>> = Lazy::new(|| {
    BTreeSet::from([
        "ARRAY",
        "AS",
        "BIGINT",
        "BINARY",
        "BOOLEAN",
        "BUCKETS",
        "BY",
        "CLUSTERED",
        "COMMENT",
        "CREATE",
        "DATE",
        "DECIMAL",
        "DOUBLE",
        "FLOAT",
        "INT",
        "INTEGER",
        "INTO",
        "LOCATION",
        "MAP",
        "NOT",
        "NULL",
        "OPTIONS",
        "PARTITIONED",
        "REAL",
        "SORTED",
        "STRING",
        "STRUCT",
        "TABLE",
        "TBLPROPERTIES",
        "TIMESTAMP",
        "USING",
        "VIEW",
    ])
});

/// Reports whether `word` is a reserved keyword, ignoring case.
pub fn is_reserved(word: &str) -> bool {
    RESERVED_KEYWORDS.contains(word.to_ascii_uppercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_reserved() {
        assert!(is_reserved("table"));
        assert!(is_reserved("Comment"));
        assert!(!is_reserved("bucket"));
        assert!(!is_reserved("provider"));
    }
}
