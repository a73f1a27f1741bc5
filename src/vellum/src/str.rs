// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! String utilities.

use std::fmt::{self, Write};

/// Extension methods for [`str`].
pub trait StrExt {
    /// Wraps the string slice in a type whose display implementation renders
    /// the string surrounded by double quotes with any inner double quote
    /// characters escaped.
    fn quoted(&self) -> Quoted<'_>;
}

impl StrExt for str {
    fn quoted(&self) -> Quoted<'_> {
        Quoted(self)
    }
}

impl StrExt for String {
    fn quoted(&self) -> Quoted<'_> {
        Quoted(self)
    }
}

/// Displays a string slice surrounded by double quotes with any inner double
/// quote characters escaped.
///
/// Constructed by [`StrExt::quoted`].
#[derive(Debug)]
pub struct Quoted<'a>(&'a str);

impl<'a> fmt::Display for Quoted<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char('"')?;
        for c in self.0.chars() {
            if c == '"' || c == '\\' {
                f.write_char('\\')?;
            }
            f.write_char(c)?;
        }
        f.write_char('"')
    }
}

/// Creates a type whose [`fmt::Display`] implementation outputs each item in
/// `iter` separated by `separator`.
pub fn separated<'a, I>(separator: &'a str, iter: I) -> Separated<'a, I::Item>
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    Separated {
        separator,
        items: iter.into_iter().collect(),
    }
}

/// The type returned by [`separated`].
#[derive(Debug)]
pub struct Separated<'a, T> {
    separator: &'a str,
    items: Vec<T>,
}

impl<'a, T> fmt::Display for Separated<'a, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i != 0 {
                write!(f, "{}", self.separator)?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted() {
        assert_eq!("monday".quoted().to_string(), r#""monday""#);
        assert_eq!(r#"mon"day"#.quoted().to_string(), r#""mon\"day""#);
        assert_eq!(r"mon\day".quoted().to_string(), r#""mon\\day""#);
    }

    #[test]
    fn test_separated() {
        assert_eq!(separated(", ", [1, 2, 3]).to_string(), "1, 2, 3");
        assert_eq!(separated(", ", Vec::<i64>::new()).to_string(), "");
    }
}
