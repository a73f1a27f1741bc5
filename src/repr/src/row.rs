// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt;

/// A single value, borrowed from the [`Row`] that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Datum<'a> {
    /// The `false` boolean value.
    False,
    /// The `true` boolean value.
    True,
    /// A 64-bit signed integer.
    Int64(i64),
    /// A sequence of UTF-8 characters.
    String(&'a str),
    /// An unknown value.
    Null,
}

impl<'a> Datum<'a> {
    /// Unwraps the string value within this datum.
    ///
    /// Panics if the datum is not [`Datum::String`].
    pub fn unwrap_str(&self) -> &'a str {
        match self {
            Datum::String(s) => s,
            _ => panic!("Datum::unwrap_str called on {:?}", self),
        }
    }
}

impl fmt::Display for Datum<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Datum::False => f.write_str("false"),
            Datum::True => f.write_str("true"),
            Datum::Int64(n) => write!(f, "{}", n),
            Datum::String(s) => f.write_str(s),
            Datum::Null => f.write_str("null"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum OwnedDatum {
    False,
    True,
    Int64(i64),
    String(String),
    Null,
}

impl OwnedDatum {
    fn borrow(&self) -> Datum<'_> {
        match self {
            OwnedDatum::False => Datum::False,
            OwnedDatum::True => Datum::True,
            OwnedDatum::Int64(n) => Datum::Int64(*n),
            OwnedDatum::String(s) => Datum::String(s),
            OwnedDatum::Null => Datum::Null,
        }
    }
}

impl From<Datum<'_>> for OwnedDatum {
    fn from(datum: Datum) -> OwnedDatum {
        match datum {
            Datum::False => OwnedDatum::False,
            Datum::True => OwnedDatum::True,
            Datum::Int64(n) => OwnedDatum::Int64(n),
            Datum::String(s) => OwnedDatum::String(s.into()),
            Datum::Null => OwnedDatum::Null,
        }
    }
}

/// An owned sequence of datums.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    datums: Vec<OwnedDatum>,
}

impl Row {
    /// Constructs a row from a slice of datums, copying the datums into
    /// owned storage.
    pub fn pack_slice(datums: &[Datum]) -> Row {
        Row {
            datums: datums.iter().copied().map(OwnedDatum::from).collect(),
        }
    }

    /// Returns an iterator over the datums in the row.
    pub fn iter(&self) -> impl Iterator<Item = Datum<'_>> {
        self.datums.iter().map(OwnedDatum::borrow)
    }

    /// Unpacks the first datum in the row.
    ///
    /// Panics if the row is empty.
    pub fn unpack_first(&self) -> Datum<'_> {
        self.datums
            .first()
            .expect("unpack_first called on empty row")
            .borrow()
    }
}
