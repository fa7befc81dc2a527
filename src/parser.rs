//! Recursive-descent reader producing a [`Value`] from canonical text.
//!
//! Parsing is all-or-nothing: the first problem aborts with
//! [`Error::Parse`](crate::Error::Parse) at its byte offset and no partial
//! value is returned.

use crate::lexer::{Lexer, Token, TokenKind};
#[allow(unused_imports)]
use crate::{debug, trace};
use crate::{Error, Map, ParseOptions, Result, Value};

pub(crate) fn parse(text: &str, options: &ParseOptions) -> Result<Value> {
    trace!("parsing {} bytes", text.len());
    let result = match options.max_len {
        Some(max_len) if text.len() > max_len => Err(Error::parse(
            max_len,
            format!("input of {} bytes exceeds limit of {}", text.len(), max_len),
        )),
        _ => Parser::new(text, options).parse_document(),
    };
    result.map_err(|err| {
        debug!("parse failed: {}", err);
        err
    })
}

struct Parser<'a, 'o> {
    lexer: Lexer<'a>,
    options: &'o ParseOptions,
    depth: usize,
}

impl<'a, 'o> Parser<'a, 'o> {
    fn new(input: &'a str, options: &'o ParseOptions) -> Self {
        Parser {
            lexer: Lexer::new(input),
            options,
            depth: 0,
        }
    }

    fn parse_document(&mut self) -> Result<Value> {
        let first = self.lexer.next_token()?;
        let value = self.parse_value(first)?;

        let rest = self.lexer.next_token()?;
        if rest.kind != TokenKind::Eof {
            return Err(Error::parse(rest.offset, "trailing characters after value"));
        }
        Ok(value)
    }

    fn parse_value(&mut self, token: Token) -> Result<Value> {
        match token.kind {
            TokenKind::Null => Ok(Value::Null),
            TokenKind::True => Ok(Value::Bool(true)),
            TokenKind::False => Ok(Value::Bool(false)),
            TokenKind::Int(i) => Ok(Value::Int(i)),
            TokenKind::Uint(u) => Ok(Value::Uint(u)),
            TokenKind::Float(f) => Ok(Value::Float(f)),
            TokenKind::String(s) => Ok(Value::String(s)),
            TokenKind::LBracket => self.nested(token.offset, Self::parse_array),
            TokenKind::LBrace => self.nested(token.offset, Self::parse_object),
            TokenKind::Eof => Err(Error::parse(token.offset, "unexpected end of input")),
            _ => Err(Error::parse(token.offset, "expected value")),
        }
    }

    fn nested(&mut self, offset: usize, body: fn(&mut Self) -> Result<Value>) -> Result<Value> {
        if self.depth >= self.options.max_depth {
            return Err(Error::parse(
                offset,
                format!("nesting deeper than {}", self.options.max_depth),
            ));
        }
        self.depth += 1;
        let value = body(self);
        self.depth -= 1;
        value
    }

    // '[' already consumed
    fn parse_array(&mut self) -> Result<Value> {
        let mut elements = Vec::new();

        let token = self.lexer.next_token()?;
        if token.kind == TokenKind::RBracket {
            return Ok(Value::Array(elements));
        }
        elements.push(self.parse_value(token)?);

        loop {
            let token = self.lexer.next_token()?;
            match token.kind {
                TokenKind::Comma => {
                    let next = self.lexer.next_token()?;
                    elements.push(self.parse_value(next)?);
                }
                TokenKind::RBracket => return Ok(Value::Array(elements)),
                _ => return Err(Error::parse(token.offset, "expected ',' or ']'")),
            }
        }
    }

    // '{' already consumed
    fn parse_object(&mut self) -> Result<Value> {
        let mut members = Map::new();

        let token = self.lexer.next_token()?;
        if token.kind == TokenKind::RBrace {
            return Ok(Value::Object(members));
        }
        self.parse_member(token, &mut members)?;

        loop {
            let token = self.lexer.next_token()?;
            match token.kind {
                TokenKind::Comma => {
                    let next = self.lexer.next_token()?;
                    self.parse_member(next, &mut members)?;
                }
                TokenKind::RBrace => return Ok(Value::Object(members)),
                _ => return Err(Error::parse(token.offset, "expected ',' or '}'")),
            }
        }
    }

    fn parse_member(&mut self, key: Token, members: &mut Map) -> Result<()> {
        let TokenKind::String(key) = key.kind else {
            return Err(Error::parse(key.offset, "expected string key"));
        };

        let colon = self.lexer.next_token()?;
        if colon.kind != TokenKind::Colon {
            return Err(Error::parse(colon.offset, "expected ':'"));
        }

        let token = self.lexer.next_token()?;
        let value = self.parse_value(token)?;
        // a repeated key keeps the last value
        members.insert(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;

    fn parse_default(text: &str) -> Result<Value> {
        parse(text, &ParseOptions::default())
    }

    #[test]
    fn test_scalars() {
        assert_eq!(parse_default("null").unwrap(), Value::Null);
        assert_eq!(parse_default(" true ").unwrap(), Value::Bool(true));
        assert!(parse_default("-7").unwrap().is_number_int());
        assert!(parse_default("9223372036854775808").unwrap().is_number_uint());
        assert!(parse_default("7.0").unwrap().is_number_float());
        assert_eq!(parse_default("\"x\"").unwrap(), Value::from("x"));
    }

    #[test]
    fn test_nested() {
        let v = parse_default(r#"{"a": [1, {"b": null}], "c": {}}"#).unwrap();
        assert_eq!(v, value!({"a": [1, {"b": null}], "c": {}}));
    }

    #[test]
    fn test_missing_value_offset() {
        let err = parse_default(r#"{"a":}"#).unwrap_err();
        assert_eq!(err.offset(), Some(5));
    }

    #[test]
    fn test_malformed_inputs() {
        for (input, offset) in [
            ("", 0),
            ("[1,]", 3),
            ("[1 2]", 3),
            (r#"{"a":1,}"#, 7),
            (r#"{a:1}"#, 1),
            (r#"{"a" 1}"#, 5),
            ("[1] x", 4),
            ("[", 1),
            ("nul", 0),
        ] {
            let err = parse_default(input).unwrap_err();
            assert_eq!(err.offset(), Some(offset), "input {:?}", input);
        }
    }

    #[test]
    fn test_repeated_key_keeps_last() {
        let v = parse_default(r#"{"k":1,"k":2}"#).unwrap();
        assert_eq!(v, value!({"k": 2}));
    }

    #[test]
    fn test_depth_limit() {
        let options = ParseOptions::new().with_max_depth(3);
        assert!(parse("[[[]]]", &options).is_ok());
        let err = parse("[[[[]]]]", &options).unwrap_err();
        assert_eq!(err.offset(), Some(3));

        let deep = "[".repeat(1000) + &"]".repeat(1000);
        assert!(parse_default(&deep).is_err());
    }

    #[test]
    fn test_length_limit() {
        let options = ParseOptions::new().with_max_len(3);
        assert!(parse("[1]", &options).is_ok());
        assert!(parse("[10]", &options).is_err());
    }
}
