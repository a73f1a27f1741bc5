// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Identifiers and item names.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ast::display::{impl_display, AstDisplay, AstFormatter};
use crate::keywords;

/// An identifier: the name of a catalog object, column, or field.
///
/// Case preserving. Renders surrounded by backticks, with any embedded
/// backtick doubled, so that every identifier survives re-parsing unchanged.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Ident(String);

impl Ident {
    /// Creates an identifier from `s`.
    pub fn new<S>(s: S) -> Ident
    where
        S: Into<String>,
    {
        Ident(s.into())
    }

    /// Returns this identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns a node that renders this identifier bare when quoting is
    /// unnecessary: when the identifier is a plain word that is not a
    /// reserved keyword.
    pub fn maybe_quoted(&self) -> MaybeQuotedIdent<'_> {
        MaybeQuotedIdent(self)
    }
}

impl From<&str> for Ident {
    fn from(s: &str) -> Ident {
        Ident(s.into())
    }
}

impl From<String> for Ident {
    fn from(s: String) -> Ident {
        Ident(s)
    }
}

impl AstDisplay for Ident {
    fn fmt<W: fmt::Write>(&self, f: &mut AstFormatter<W>) {
        f.write_str("`");
        f.write_str(self.0.replace('`', "``"));
        f.write_str("`");
    }
}
impl_display!(Ident);

/// Renders an identifier bare when it does not require quoting.
///
/// Constructed by [`Ident::maybe_quoted`].
#[derive(Debug)]
pub struct MaybeQuotedIdent<'a>(&'a Ident);

impl<'a> AstDisplay for MaybeQuotedIdent<'a> {
    fn fmt<W: fmt::Write>(&self, f: &mut AstFormatter<W>) {
        let s = self.0.as_str();
        let mut chars = s.chars();
        let bare = chars
            .next()
            .map_or(false, |c| c.is_ascii_alphabetic() || c == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            && !keywords::is_reserved(s);
        if bare {
            f.write_str(s);
        } else {
            f.write_node(self.0);
        }
    }
}

/// The name of an item not yet resolved against a catalog: one or more
/// `.`-separated segments.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnresolvedItemName(pub Vec<Ident>);

impl UnresolvedItemName {
    /// Creates a single-segment name.
    pub fn bare<S>(name: S) -> UnresolvedItemName
    where
        S: Into<String>,
    {
        UnresolvedItemName(vec![Ident::new(name)])
    }

    /// Creates a namespace-qualified name.
    pub fn qualified<N, S>(namespace: N, name: S) -> UnresolvedItemName
    where
        N: Into<String>,
        S: Into<String>,
    {
        UnresolvedItemName(vec![Ident::new(namespace), Ident::new(name)])
    }
}

impl AstDisplay for UnresolvedItemName {
    fn fmt<W: fmt::Write>(&self, f: &mut AstFormatter<W>) {
        for (i, ident) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(".");
            }
            f.write_node(ident);
        }
    }
}
impl_display!(UnresolvedItemName);

/// A fully qualified item name, as resolved by a catalog.
///
/// Whether the namespace segment is present is the resolving catalog's
/// decision; the renderer quotes whatever it is handed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullItemName {
    /// The namespace containing the item, if the catalog qualifies it.
    pub namespace: Option<Ident>,
    /// The name of the item itself.
    pub item: Ident,
}

impl AstDisplay for FullItemName {
    fn fmt<W: fmt::Write>(&self, f: &mut AstFormatter<W>) {
        if let Some(namespace) = &self.namespace {
            f.write_node(namespace);
            f.write_str(".");
        }
        f.write_node(&self.item);
    }
}
impl_display!(FullItemName);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ident_quoting() {
        assert_eq!(Ident::new("a").to_ast_string(), "`a`");
        assert_eq!(Ident::new("extra col").to_ast_string(), "`extra col`");
        assert_eq!(Ident::new("<another>").to_ast_string(), "`<another>`");
        assert_eq!(Ident::new("tick`tock").to_ast_string(), "`tick``tock`");
    }

    #[test]
    fn test_maybe_quoted() {
        assert_eq!(Ident::new("a").maybe_quoted().to_ast_string(), "a");
        assert_eq!(Ident::new("_private").maybe_quoted().to_ast_string(), "_private");
        assert_eq!(
            Ident::new("extra col").maybe_quoted().to_ast_string(),
            "`extra col`"
        );
        assert_eq!(Ident::new("1a").maybe_quoted().to_ast_string(), "`1a`");
        // Reserved words stay quoted so the parser's clause dispatch is
        // never ambiguous.
        assert_eq!(
            Ident::new("comment").maybe_quoted().to_ast_string(),
            "`comment`"
        );
    }

    #[test]
    fn test_item_names() {
        let name = UnresolvedItemName::qualified("default", "tbl");
        assert_eq!(name.to_string(), "`default`.`tbl`");
        let full = FullItemName {
            namespace: None,
            item: Ident::new("tbl"),
        };
        assert_eq!(full.to_string(), "`tbl`");
    }
}
