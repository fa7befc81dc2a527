//! Tokenizer for canonical text.
//!
//! Works on the bytes of a `&str`, so every offset it reports is a byte
//! offset into the original input and every slice it takes is on a char
//! boundary.

use crate::{Error, Result};

/// Kind of token, carrying the decoded payload for scalars.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Colon,
    Comma,
    True,
    False,
    Null,
    Int(i64),
    Uint(u64),
    Float(f64),
    String(String),
    Eof,
}

/// A token and the byte offset where it starts.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

pub(crate) struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer { input, pos: 0 }
    }

    fn bytes(&self) -> &'a [u8] {
        self.input.as_bytes()
    }

    fn peek_byte(&self) -> Option<u8> {
        self.bytes().get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek_byte() {
            match b {
                b' ' | b'\t' | b'\n' | b'\r' => self.pos += 1,
                _ => break,
            }
        }
    }

    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();
        let start = self.pos;
        let Some(b) = self.peek_byte() else {
            return Ok(Token {
                kind: TokenKind::Eof,
                offset: start,
            });
        };

        let kind = match b {
            b'{' => self.punct(TokenKind::LBrace),
            b'}' => self.punct(TokenKind::RBrace),
            b'[' => self.punct(TokenKind::LBracket),
            b']' => self.punct(TokenKind::RBracket),
            b':' => self.punct(TokenKind::Colon),
            b',' => self.punct(TokenKind::Comma),
            b'"' => TokenKind::String(self.lex_string()?),
            b'-' | b'0'..=b'9' => self.lex_number()?,
            b't' => self.lex_literal("true", TokenKind::True)?,
            b'f' => self.lex_literal("false", TokenKind::False)?,
            b'n' => self.lex_literal("null", TokenKind::Null)?,
            _ => {
                return Err(Error::parse(
                    start,
                    format!("unexpected character {:?}", self.char_at(start)),
                ))
            }
        };

        Ok(Token {
            kind,
            offset: start,
        })
    }

    fn char_at(&self, offset: usize) -> char {
        self.input[offset..].chars().next().unwrap_or('\0')
    }

    fn punct(&mut self, kind: TokenKind) -> TokenKind {
        self.pos += 1;
        kind
    }

    fn lex_literal(&mut self, word: &'static str, kind: TokenKind) -> Result<TokenKind> {
        if self.input[self.pos..].starts_with(word) {
            self.pos += word.len();
            Ok(kind)
        } else {
            Err(Error::parse(self.pos, format!("expected `{}`", word)))
        }
    }

    fn eat_digits(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.peek_byte(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// `-? (0 | [1-9][0-9]*) (\.[0-9]+)? ([eE][+-]?[0-9]+)?`
    fn lex_number(&mut self) -> Result<TokenKind> {
        let start = self.pos;
        let negative = self.peek_byte() == Some(b'-');
        if negative {
            self.pos += 1;
        }

        match self.peek_byte() {
            Some(b'0') => {
                self.pos += 1;
                if matches!(self.peek_byte(), Some(b'0'..=b'9')) {
                    return Err(Error::parse(self.pos, "leading zeros are not allowed"));
                }
            }
            Some(b'1'..=b'9') => {
                self.eat_digits();
            }
            _ => return Err(Error::parse(self.pos, "expected digit")),
        }

        let mut integral = true;
        if self.peek_byte() == Some(b'.') {
            integral = false;
            self.pos += 1;
            if self.eat_digits() == 0 {
                return Err(Error::parse(self.pos, "expected digit after decimal point"));
            }
        }
        if matches!(self.peek_byte(), Some(b'e' | b'E')) {
            integral = false;
            self.pos += 1;
            if matches!(self.peek_byte(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if self.eat_digits() == 0 {
                return Err(Error::parse(self.pos, "expected digit in exponent"));
            }
        }

        let text = &self.input[start..self.pos];
        if integral {
            if let Ok(i) = text.parse::<i64>() {
                return Ok(TokenKind::Int(i));
            }
            if !negative {
                if let Ok(u) = text.parse::<u64>() {
                    return Ok(TokenKind::Uint(u));
                }
            }
        }

        match text.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(TokenKind::Float(f)),
            _ => Err(Error::parse(start, "number out of range")),
        }
    }

    fn lex_string(&mut self) -> Result<String> {
        // skip opening quote
        self.pos += 1;
        let mut out = String::new();
        let mut run_start = self.pos;

        loop {
            let Some(b) = self.peek_byte() else {
                return Err(Error::parse(self.pos, "unterminated string"));
            };
            match b {
                b'"' => {
                    out.push_str(&self.input[run_start..self.pos]);
                    self.pos += 1;
                    return Ok(out);
                }
                b'\\' => {
                    out.push_str(&self.input[run_start..self.pos]);
                    out.push(self.lex_escape()?);
                    run_start = self.pos;
                }
                0x00..=0x1f => {
                    return Err(Error::parse(self.pos, "control character in string"));
                }
                _ => self.pos += 1,
            }
        }
    }

    fn lex_escape(&mut self) -> Result<char> {
        let escape_start = self.pos;
        // skip backslash
        self.pos += 1;
        let Some(b) = self.peek_byte() else {
            return Err(Error::parse(self.pos, "unterminated escape"));
        };
        self.pos += 1;

        let c = match b {
            b'"' => '"',
            b'\\' => '\\',
            b'/' => '/',
            b'b' => '\u{0008}',
            b'f' => '\u{000C}',
            b'n' => '\n',
            b'r' => '\r',
            b't' => '\t',
            b'0' => {
                // short control escape `\00XX`
                if self.peek_byte() != Some(b'0') {
                    return Err(Error::parse(escape_start, "invalid escape"));
                }
                self.pos += 1;
                let code = self.lex_hex(2)?;
                char::from_u32(code).ok_or_else(|| Error::parse(escape_start, "invalid escape"))?
            }
            b'u' => self.lex_unicode(escape_start)?,
            _ => return Err(Error::parse(escape_start, "invalid escape")),
        };
        Ok(c)
    }

    fn lex_unicode(&mut self, escape_start: usize) -> Result<char> {
        let high = self.lex_hex(4)?;
        let code = match high {
            0xD800..=0xDBFF => {
                if !self.input[self.pos..].starts_with("\\u") {
                    return Err(Error::parse(escape_start, "unpaired surrogate"));
                }
                self.pos += 2;
                let low = self.lex_hex(4)?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(Error::parse(escape_start, "unpaired surrogate"));
                }
                0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)
            }
            0xDC00..=0xDFFF => {
                return Err(Error::parse(escape_start, "unpaired surrogate"));
            }
            _ => high,
        };
        char::from_u32(code).ok_or_else(|| Error::parse(escape_start, "invalid code point"))
    }

    fn lex_hex(&mut self, digits: usize) -> Result<u32> {
        let mut code = 0u32;
        for _ in 0..digits {
            let digit = self
                .peek_byte()
                .and_then(|b| (b as char).to_digit(16))
                .ok_or_else(|| Error::parse(self.pos, "expected hex digit"))?;
            code = (code << 4) | digit;
            self.pos += 1;
        }
        Ok(code)
    }
}
