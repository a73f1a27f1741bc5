// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Property tests for identifier quoting and string escaping.

use proptest::prelude::*;

use scribe_sql::ast::display::{self, AstDisplay};
use scribe_sql::ast::Ident;
use scribe_sql::lexer::{self, Token};

proptest! {
    // Any printable name, however hostile, survives backtick quoting.
    #[test]
    fn quoted_idents_roundtrip(name in "[ -~]{1,20}") {
        let sql = Ident::new(name.clone()).to_ast_string();
        let tokens = lexer::lex(&sql).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        match &tokens[0].0 {
            Token::QuotedIdent(lexed) => prop_assert_eq!(lexed, &name),
            other => prop_assert!(false, "unexpected token {:?}", other),
        }
    }

    #[test]
    fn escaped_strings_roundtrip(s in "[ -~]{0,20}") {
        let sql = format!("'{}'", display::escape_single_quote_string(&s).to_ast_string());
        let tokens = lexer::lex(&sql).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        match &tokens[0].0 {
            Token::String(lexed) => prop_assert_eq!(lexed, &s),
            other => prop_assert!(false, "unexpected token {:?}", other),
        }
    }
}
