// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! DDL parser.
//!
//! This parser accepts exactly the statements the renderer in
//! [`crate::show_create`] can produce, in both render styles. It is not a
//! general SQL parser: the defining query of a view is captured verbatim
//! from the raw input rather than parsed.

use std::collections::BTreeMap;

use scribe_repr::{ColumnName, RecordField, ScalarType};

use crate::ast::{
    BucketSpec, ColumnDef, CreateTableStatement, CreateViewStatement, Ident, PartitionExpr,
    Statement, TransformArg, UnresolvedItemName, ViewColumn,
};
use crate::lexer::{self, Token};

/// An error while parsing a DDL statement.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParserError {
    /// The byte offset into the input at which the error occurred.
    pub pos: usize,
    /// A description of the failure.
    pub message: String,
}

impl ParserError {
    pub(crate) fn new<S>(pos: usize, message: S) -> ParserError
    where
        S: Into<String>,
    {
        ParserError {
            pos,
            message: message.into(),
        }
    }
}

/// Parses a DDL statement produced by the renderer.
pub fn parse_statement(sql: &str) -> Result<Statement, ParserError> {
    let tokens = lexer::lex(sql)?;
    let mut parser = Parser::new(sql, tokens);
    let statement = parser.parse_statement()?;
    parser.expect_end()?;
    Ok(statement)
}

struct Parser<'a> {
    sql: &'a str,
    tokens: Vec<(Token, usize)>,
    index: usize,
}

impl<'a> Parser<'a> {
    fn new(sql: &'a str, tokens: Vec<(Token, usize)>) -> Parser<'a> {
        Parser {
            sql,
            tokens,
            index: 0,
        }
    }

    fn peek_token(&self) -> Option<&Token> {
        self.tokens.get(self.index).map(|(token, _)| token)
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    /// Returns the byte position of the next token, or the end of the
    /// input when no tokens remain.
    fn pos(&self) -> usize {
        self.tokens
            .get(self.index)
            .map(|(_, pos)| *pos)
            .unwrap_or(self.sql.len())
    }

    fn error<S>(&self, message: S) -> ParserError
    where
        S: Into<String>,
    {
        ParserError::new(self.pos(), message)
    }

    fn parse_keyword(&mut self, keyword: &str) -> bool {
        match self.peek_token() {
            Some(Token::Ident(word)) if word.eq_ignore_ascii_case(keyword) => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    fn expect_keyword(&mut self, keyword: &str) -> Result<(), ParserError> {
        if self.parse_keyword(keyword) {
            Ok(())
        } else {
            Err(self.error(format!("expected {}", keyword)))
        }
    }

    fn consume_token(&mut self, expected: &Token) -> bool {
        match self.peek_token() {
            Some(token) if token == expected => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    fn expect_token(&mut self, expected: &Token) -> Result<(), ParserError> {
        match self.peek_token() {
            Some(token) if token == expected => {
                self.advance();
                Ok(())
            }
            Some(token) => {
                let found = token.name().to_string();
                Err(self.error(format!("expected {}, found {}", expected.name(), found)))
            }
            None => Err(self.error(format!(
                "expected {}, found end of input",
                expected.name()
            ))),
        }
    }

    fn expect_end(&mut self) -> Result<(), ParserError> {
        match self.peek_token() {
            None => Ok(()),
            Some(token) => {
                let found = token.name().to_string();
                Err(self.error(format!("unexpected {} after statement", found)))
            }
        }
    }

    fn parse_ident(&mut self) -> Result<Ident, ParserError> {
        match self.peek_token() {
            Some(Token::Ident(word)) => {
                let ident = Ident::new(word.clone());
                self.advance();
                Ok(ident)
            }
            Some(Token::QuotedIdent(word)) => {
                let ident = Ident::new(word.clone());
                self.advance();
                Ok(ident)
            }
            _ => Err(self.error("expected identifier")),
        }
    }

    fn parse_item_name(&mut self) -> Result<UnresolvedItemName, ParserError> {
        let mut idents = vec![self.parse_ident()?];
        while self.consume_token(&Token::Dot) {
            idents.push(self.parse_ident()?);
        }
        Ok(UnresolvedItemName(idents))
    }

    fn parse_literal_string(&mut self) -> Result<String, ParserError> {
        match self.peek_token() {
            Some(Token::String(s)) => {
                let s = s.clone();
                self.advance();
                Ok(s)
            }
            _ => Err(self.error("expected string literal")),
        }
    }

    fn parse_literal_uint(&mut self) -> Result<u32, ParserError> {
        match self.peek_token() {
            Some(Token::Number(n)) => {
                let parsed = n
                    .parse()
                    .map_err(|_| self.error(format!("invalid integer literal: {}", n)))?;
                self.advance();
                Ok(parsed)
            }
            _ => Err(self.error("expected integer literal")),
        }
    }

    fn parse_statement(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword("CREATE")?;
        if self.parse_keyword("TABLE") {
            Ok(Statement::CreateTable(self.parse_create_table()?))
        } else if self.parse_keyword("VIEW") {
            Ok(Statement::CreateView(self.parse_create_view()?))
        } else {
            Err(self.error("expected TABLE or VIEW after CREATE"))
        }
    }

    fn parse_create_table(&mut self) -> Result<CreateTableStatement, ParserError> {
        let name = self.parse_item_name()?;
        self.expect_token(&Token::LParen)?;
        let mut columns = vec![];
        if !self.consume_token(&Token::RParen) {
            loop {
                columns.push(self.parse_column_def()?);
                if self.consume_token(&Token::Comma) {
                    continue;
                }
                self.expect_token(&Token::RParen)?;
                break;
            }
        }
        self.expect_keyword("USING")?;
        let provider = self.parse_provider()?;

        let mut options = BTreeMap::new();
        let mut partition_by = vec![];
        let mut bucket_by = None;
        let mut comment = None;
        let mut location = None;
        let mut properties = BTreeMap::new();
        loop {
            if self.parse_keyword("OPTIONS") {
                options = self.parse_kv_block()?;
            } else if self.parse_keyword("PARTITIONED") {
                self.expect_keyword("BY")?;
                partition_by = self.parse_partition_exprs()?;
            } else if self.parse_keyword("CLUSTERED") {
                bucket_by = Some(self.parse_bucket_spec()?);
            } else if self.parse_keyword("COMMENT") {
                comment = Some(self.parse_literal_string()?);
            } else if self.parse_keyword("LOCATION") {
                location = Some(self.parse_literal_string()?);
            } else if self.parse_keyword("TBLPROPERTIES") {
                properties = self.parse_kv_block()?;
            } else {
                break;
            }
        }

        Ok(CreateTableStatement {
            name,
            columns,
            provider,
            options,
            partition_by,
            bucket_by,
            comment,
            location,
            properties,
        })
    }

    fn parse_create_view(&mut self) -> Result<CreateViewStatement, ParserError> {
        let name = self.parse_item_name()?;
        let mut columns = vec![];
        if self.consume_token(&Token::LParen) {
            loop {
                let name = self.parse_ident()?;
                let comment = if self.parse_keyword("COMMENT") {
                    Some(self.parse_literal_string()?)
                } else {
                    None
                };
                columns.push(ViewColumn { name, comment });
                if self.consume_token(&Token::Comma) {
                    continue;
                }
                self.expect_token(&Token::RParen)?;
                break;
            }
        }
        let mut comment = None;
        let mut properties = BTreeMap::new();
        loop {
            if self.parse_keyword("COMMENT") {
                comment = Some(self.parse_literal_string()?);
            } else if self.parse_keyword("TBLPROPERTIES") {
                properties = self.parse_kv_block()?;
            } else {
                break;
            }
        }
        self.expect_keyword("AS")?;
        // The defining query is everything after AS, verbatim. The tokens
        // were only lexed to find where it starts.
        let query = match self.tokens.get(self.index) {
            Some((_, pos)) => self.sql[*pos..].to_string(),
            None => return Err(self.error("expected query after AS")),
        };
        self.index = self.tokens.len();
        Ok(CreateViewStatement {
            name,
            columns,
            comment,
            properties,
            query,
        })
    }

    fn parse_column_def(&mut self) -> Result<ColumnDef, ParserError> {
        let name = self.parse_ident()?;
        let scalar_type = self.parse_data_type()?;
        let mut nullable = true;
        if self.parse_keyword("NOT") {
            self.expect_keyword("NULL")?;
            nullable = false;
        }
        let comment = if self.parse_keyword("COMMENT") {
            Some(self.parse_literal_string()?)
        } else {
            None
        };
        Ok(ColumnDef {
            name,
            typ: scalar_type.nullable(nullable),
            comment,
        })
    }

    fn parse_data_type(&mut self) -> Result<ScalarType, ParserError> {
        let pos = self.pos();
        let name = match self.peek_token() {
            Some(Token::Ident(word)) => word.to_ascii_uppercase(),
            _ => return Err(self.error("expected data type")),
        };
        self.advance();
        match name.as_str() {
            "BOOLEAN" => Ok(ScalarType::Boolean),
            "INT" | "INTEGER" => Ok(ScalarType::Int32),
            "BIGINT" => Ok(ScalarType::Int64),
            "FLOAT" | "REAL" => Ok(ScalarType::Float32),
            "DOUBLE" => Ok(ScalarType::Float64),
            "STRING" => Ok(ScalarType::String),
            "DATE" => Ok(ScalarType::Date),
            "TIMESTAMP" => Ok(ScalarType::Timestamp),
            "BINARY" => Ok(ScalarType::Bytes),
            "DECIMAL" => {
                self.expect_token(&Token::LParen)?;
                let precision = self.parse_literal_u8()?;
                self.expect_token(&Token::Comma)?;
                let scale = self.parse_literal_u8()?;
                self.expect_token(&Token::RParen)?;
                Ok(ScalarType::Decimal { precision, scale })
            }
            "ARRAY" => {
                self.expect_token(&Token::Lt)?;
                let element_type = self.parse_data_type()?;
                self.expect_token(&Token::Gt)?;
                Ok(ScalarType::Array(Box::new(element_type)))
            }
            "MAP" => {
                self.expect_token(&Token::Lt)?;
                let key_type = self.parse_data_type()?;
                self.expect_token(&Token::Comma)?;
                let value_type = self.parse_data_type()?;
                self.expect_token(&Token::Gt)?;
                Ok(ScalarType::Map {
                    key_type: Box::new(key_type),
                    value_type: Box::new(value_type),
                })
            }
            "STRUCT" => {
                self.expect_token(&Token::Lt)?;
                let mut fields = vec![];
                if !self.consume_token(&Token::Gt) {
                    loop {
                        fields.push(self.parse_record_field()?);
                        if self.consume_token(&Token::Comma) {
                            continue;
                        }
                        self.expect_token(&Token::Gt)?;
                        break;
                    }
                }
                Ok(ScalarType::Record(fields))
            }
            _ => Err(ParserError::new(pos, format!("unknown data type {}", name))),
        }
    }

    fn parse_literal_u8(&mut self) -> Result<u8, ParserError> {
        let n = self.parse_literal_uint()?;
        u8::try_from(n).map_err(|_| self.error(format!("value out of range: {}", n)))
    }

    fn parse_record_field(&mut self) -> Result<RecordField, ParserError> {
        let name = self.parse_ident()?;
        self.expect_token(&Token::Colon)?;
        let typ = self.parse_data_type()?;
        let comment = if self.parse_keyword("COMMENT") {
            Some(self.parse_literal_string()?)
        } else {
            None
        };
        Ok(RecordField {
            name: ColumnName::from(name.as_str()),
            typ,
            comment,
        })
    }

    // Providers are bare words, optionally dotted class paths like
    // org.apache.spark.sql.test.SimpleInsertSource.
    fn parse_provider(&mut self) -> Result<String, ParserError> {
        let mut provider = match self.peek_token() {
            Some(Token::Ident(word)) => word.clone(),
            _ => return Err(self.error("expected provider name")),
        };
        self.advance();
        while self.consume_token(&Token::Dot) {
            match self.peek_token() {
                Some(Token::Ident(word)) => {
                    provider.push('.');
                    provider.push_str(word);
                    self.advance();
                }
                _ => return Err(self.error("expected provider name segment")),
            }
        }
        Ok(provider)
    }

    fn parse_partition_exprs(&mut self) -> Result<Vec<PartitionExpr>, ParserError> {
        self.expect_token(&Token::LParen)?;
        let mut exprs = vec![];
        loop {
            exprs.push(self.parse_partition_expr()?);
            if self.consume_token(&Token::Comma) {
                continue;
            }
            self.expect_token(&Token::RParen)?;
            break;
        }
        Ok(exprs)
    }

    fn parse_partition_expr(&mut self) -> Result<PartitionExpr, ParserError> {
        match self.peek_token() {
            Some(Token::QuotedIdent(word)) => {
                let ident = Ident::new(word.clone());
                self.advance();
                Ok(PartitionExpr::Column(ident))
            }
            Some(Token::Ident(word)) => {
                let word = word.clone();
                self.advance();
                if self.consume_token(&Token::LParen) {
                    let mut args = vec![];
                    loop {
                        args.push(self.parse_transform_arg()?);
                        if self.consume_token(&Token::Comma) {
                            continue;
                        }
                        self.expect_token(&Token::RParen)?;
                        break;
                    }
                    Ok(PartitionExpr::Transform { name: word, args })
                } else {
                    Ok(PartitionExpr::Column(Ident::new(word)))
                }
            }
            _ => Err(self.error("expected partition column or transform")),
        }
    }

    fn parse_transform_arg(&mut self) -> Result<TransformArg, ParserError> {
        match self.peek_token() {
            Some(Token::Number(n)) => {
                let parsed = n
                    .parse()
                    .map_err(|_| self.error(format!("invalid integer literal: {}", n)))?;
                self.advance();
                Ok(TransformArg::Int(parsed))
            }
            Some(Token::String(s)) => {
                let s = s.clone();
                self.advance();
                Ok(TransformArg::String(s))
            }
            Some(Token::Ident(_)) | Some(Token::QuotedIdent(_)) => {
                Ok(TransformArg::Column(self.parse_ident()?))
            }
            _ => Err(self.error("expected transform argument")),
        }
    }

    fn parse_bucket_spec(&mut self) -> Result<BucketSpec, ParserError> {
        self.expect_keyword("BY")?;
        let cluster_by = self.parse_paren_ident_list()?;
        let sort_by = if self.parse_keyword("SORTED") {
            self.expect_keyword("BY")?;
            self.parse_paren_ident_list()?
        } else {
            vec![]
        };
        self.expect_keyword("INTO")?;
        let bucket_count = self.parse_literal_uint()?;
        self.expect_keyword("BUCKETS")?;
        Ok(BucketSpec {
            cluster_by,
            sort_by,
            bucket_count,
        })
    }

    fn parse_paren_ident_list(&mut self) -> Result<Vec<Ident>, ParserError> {
        self.expect_token(&Token::LParen)?;
        let mut idents = vec![];
        loop {
            idents.push(self.parse_ident()?);
            if self.consume_token(&Token::Comma) {
                continue;
            }
            self.expect_token(&Token::RParen)?;
            break;
        }
        Ok(idents)
    }

    // Option keys render bare only when they are dotted paths of plain
    // words; anything else arrives single-quoted.
    fn parse_kv_block(&mut self) -> Result<BTreeMap<String, String>, ParserError> {
        self.expect_token(&Token::LParen)?;
        let mut entries = BTreeMap::new();
        loop {
            let key = match self.peek_token() {
                Some(Token::String(s)) => {
                    let s = s.clone();
                    self.advance();
                    s
                }
                Some(Token::Ident(word)) => {
                    let mut key = word.clone();
                    self.advance();
                    while self.consume_token(&Token::Dot) {
                        match self.peek_token() {
                            Some(Token::Ident(word)) => {
                                key.push('.');
                                key.push_str(word);
                                self.advance();
                            }
                            _ => return Err(self.error("expected key segment")),
                        }
                    }
                    key
                }
                _ => return Err(self.error("expected option key")),
            };
            self.expect_token(&Token::Eq)?;
            let value = self.parse_literal_string()?;
            entries.insert(key, value);
            if self.consume_token(&Token::Comma) {
                continue;
            }
            self.expect_token(&Token::RParen)?;
            break;
        }
        Ok(entries)
    }
}
