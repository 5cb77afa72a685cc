//! Recursive-descent tree builder over raw markup bytes

use indexmap::IndexMap;

use crate::error::{Error, ErrorKind, Result};
use crate::lexer::Cursor;
use crate::markup::node::Node;

/// Markup parser producing a generic [`Node`] tree
#[derive(Debug)]
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    /// Create a new markup parser
    pub const fn new(input: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    /// Parse one top-level element, the document root
    pub fn parse(&mut self) -> Result<Node> {
        loop {
            self.cursor.skip_whitespace();
            if !self.skip_misc()? {
                break;
            }
        }

        if self.cursor.current() != Some(b'<') {
            return Err(self.error_here(ErrorKind::MissingRoot));
        }

        let root = self.parse_element()?;

        loop {
            self.cursor.skip_whitespace();
            if !self.skip_misc()? {
                break;
            }
        }

        if !self.cursor.is_eof() {
            return Err(self.error_here(ErrorKind::TrailingContent));
        }

        Ok(root)
    }

    fn parse_element(&mut self) -> Result<Node> {
        self.expect_byte(b'<')?;

        if self.cursor.current() == Some(b'/') {
            return Err(self.error_here(ErrorKind::UnexpectedClosingTag));
        }

        let name = self.parse_name()?;
        let attributes = self.parse_attributes()?;

        if self.cursor.current() == Some(b'/') {
            self.cursor.advance();
            self.expect_byte(b'>')?;
            return Ok(Node {
                name,
                attributes,
                children: Vec::new(),
            });
        }

        self.expect_byte(b'>')?;

        let mut children = Vec::new();
        loop {
            if self.cursor.current() == Some(b'<') && self.cursor.peek(1) == Some(b'/') {
                self.cursor.advance_by(2);
                let close_name = self.parse_name()?;
                if close_name != name {
                    return Err(self.error_here(ErrorKind::MismatchedClosingTag {
                        expected: name,
                        found: close_name,
                    }));
                }
                self.cursor.skip_whitespace();
                self.expect_byte(b'>')?;
                break;
            }

            if self.skip_misc()? {
                continue;
            }

            if self.cursor.current() == Some(b'<') {
                children.push(self.parse_element()?);
                continue;
            }

            if self.cursor.is_eof() {
                return Err(self.error_here(ErrorKind::UnterminatedElement));
            }

            self.skip_text();
        }

        Ok(Node {
            name,
            attributes,
            children,
        })
    }

    fn parse_attributes(&mut self) -> Result<IndexMap<String, String>> {
        let mut attrs = IndexMap::new();

        loop {
            self.cursor.skip_whitespace();
            match self.cursor.current() {
                Some(b'/') | Some(b'>') => break,
                Some(_) => {}
                None => return Err(self.error_here(ErrorKind::UnterminatedElement)),
            }

            let name = self.parse_name()?;
            self.cursor.skip_whitespace();
            self.expect_byte(b'=')?;
            self.cursor.skip_whitespace();
            let value = self.parse_attribute_value()?;

            if attrs.contains_key(&name) {
                return Err(self.error_here(ErrorKind::DuplicateAttribute { name }));
            }
            attrs.insert(name, value);
        }

        Ok(attrs)
    }

    fn parse_attribute_value(&mut self) -> Result<String> {
        let quote = match self.cursor.current() {
            Some(b'"') => b'"',
            Some(b'\'') => b'\'',
            _ => return Err(self.error_here(ErrorKind::ExpectedQuotedValue)),
        };
        self.cursor.advance();

        let start = self.cursor.pos();
        while let Some(b) = self.cursor.current() {
            if b == quote {
                let raw = self.cursor.slice_from(start);
                self.cursor.advance();
                let text = bytes_to_string(raw)?;
                return decode_entities(&text);
            }
            self.cursor.advance();
        }

        Err(self.error_here(ErrorKind::UnterminatedAttributeValue))
    }

    /// Text content is not part of the tree; consume up to the next tag.
    fn skip_text(&mut self) {
        while let Some(b) = self.cursor.current() {
            if b == b'<' {
                break;
            }
            self.cursor.advance();
        }
    }

    fn parse_name(&mut self) -> Result<String> {
        let start = self.cursor.pos();

        let Some(first) = self.cursor.current() else {
            return Err(self.error_here(ErrorKind::InvalidName));
        };
        if !is_name_start(first) {
            return Err(self.error_here(ErrorKind::InvalidName));
        }

        self.cursor.advance();
        while let Some(b) = self.cursor.current() {
            if is_name_char(b) {
                self.cursor.advance();
            } else {
                break;
            }
        }

        bytes_to_string(self.cursor.slice_from(start))
    }

    /// Skip a prolog, comment, or doctype/CDATA marker if the cursor sits on
    /// one. Returns whether anything was consumed.
    fn skip_misc(&mut self) -> Result<bool> {
        if self.cursor.current() != Some(b'<') {
            return Ok(false);
        }

        match self.cursor.peek(1) {
            Some(b'?') => {
                self.cursor.advance_by(2);
                self.skip_until(b"?>")?;
                Ok(true)
            }
            Some(b'!') => {
                if self.cursor.peek_bytes(4) == Some(b"<!--") {
                    self.cursor.advance_by(4);
                    self.skip_until(b"-->")?;
                } else if self.cursor.peek_bytes(9) == Some(b"<![CDATA[") {
                    self.cursor.advance_by(9);
                    self.skip_until(b"]]>")?;
                } else {
                    self.cursor.advance_by(2);
                    self.skip_until(b">")?;
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn skip_until(&mut self, pattern: &[u8]) -> Result<()> {
        while self.cursor.current().is_some() {
            if self.cursor.peek_bytes(pattern.len()) == Some(pattern) {
                self.cursor.advance_by(pattern.len());
                return Ok(());
            }
            self.cursor.advance();
        }
        Err(self.error_here(ErrorKind::UnterminatedMarkup))
    }

    fn expect_byte(&mut self, expected: u8) -> Result<()> {
        if self.cursor.consume(expected) {
            Ok(())
        } else {
            Err(self.error_here(ErrorKind::UnexpectedToken))
        }
    }

    fn error_here(&self, kind: ErrorKind) -> Error {
        Error::at(kind, self.cursor.position())
    }
}

fn bytes_to_string(bytes: &[u8]) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(|s| s.to_string())
        .map_err(|_| Error::new(ErrorKind::InvalidUtf8, crate::error::Span::empty()))
}

fn is_name_start(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'_' | b':')
}

fn is_name_char(b: u8) -> bool {
    is_name_start(b) || matches!(b, b'0'..=b'9' | b'-' | b'.')
}

fn decode_entities(input: &str) -> Result<String> {
    if !input.contains('&') {
        return Ok(input.to_string());
    }

    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '&' {
            result.push(ch);
            continue;
        }

        let mut entity = String::new();
        let mut terminated = false;
        for next in chars.by_ref() {
            if next == ';' {
                terminated = true;
                break;
            }
            entity.push(next);
        }
        if !terminated {
            return Err(Error::new(
                ErrorKind::InvalidEntity,
                crate::error::Span::empty(),
            ));
        }

        let decoded = match entity.as_str() {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            _ => decode_numeric_entity(&entity),
        };

        match decoded {
            Some(ch) => result.push(ch),
            None => {
                return Err(Error::new(
                    ErrorKind::InvalidEntity,
                    crate::error::Span::empty(),
                ));
            }
        }
    }

    Ok(result)
}

fn decode_numeric_entity(entity: &str) -> Option<char> {
    if let Some(hex) = entity.strip_prefix("#x") {
        u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
    } else if let Some(dec) = entity.strip_prefix('#') {
        dec.parse::<u32>().ok().and_then(char::from_u32)
    } else {
        None
    }
}
