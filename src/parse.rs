//! Parser state machine (spec §4.6, component C6).
//!
//! The reference implementation dispatches on labels-as-states
//! (`arr_begin`, `obj_key_end`, …); the idiomatic translation is a
//! recursive-descent walk driven by `match` on the lookahead byte
//! (spec §9 "Goto-driven state machine" — here folded into ordinary
//! call/return rather than an explicit state enum, since Rust's call
//! stack already gives us the "current container" context for free).

use crate::chars::{digi_is_digit, is_space_or_comment};
use crate::config::{read_flag, DEFAULT_MAX_DEPTH, PADDING_SIZE};
use crate::error::{Error, ErrorCode};
use crate::number::{self, NumberValue};
use crate::strbuf;
use crate::value::doc::{Doc, Node};
use crate::value::tag::{subtype, Tag, TypeCode};

/// Parses a complete JSON document from `bytes` (spec §6 `read`).
/// The input is copied into a freshly padded buffer; unescaped
/// strings are written back into that copy in place.
pub fn read(bytes: &[u8], flags: u32) -> Result<Doc, Error> {
    read_with_depth(bytes, flags, DEFAULT_MAX_DEPTH)
}

pub fn read_with_depth(bytes: &[u8], flags: u32, max_depth: usize) -> Result<Doc, Error> {
    let mut buf = Vec::with_capacity(bytes.len() + PADDING_SIZE);
    buf.extend_from_slice(bytes);
    buf.extend_from_slice(&[0u8; PADDING_SIZE]);
    parse_buf(buf, flags, max_depth)
}

fn parse_buf(mut buf: Vec<u8>, flags: u32, max_depth: usize) -> Result<Doc, Error> {
    let content_len = buf.len() - PADDING_SIZE;
    reject_utf16_utf32_bom(&buf[..content_len])?;
    let mut p = Parser { buf: &mut buf, pos: 0, content_len, flags, max_depth, nodes: Vec::new() };
    p.skip_ws_and_comments()?;
    if p.pos >= p.content_len {
        return Err(Error::new(ErrorCode::EmptyContent, "input is empty", 0));
    }
    p.parse_value(0)?;
    if flags & read_flag::STOP_WHEN_DONE == 0 {
        p.skip_ws_and_comments()?;
        if p.pos < p.content_len {
            return Err(Error::new(ErrorCode::UnexpectedContent, "trailing content after root value", p.pos));
        }
    }
    let nodes = p.nodes;
    Ok(Doc::new(nodes, buf.into_boxed_slice()))
}

/// Rejects a leading UTF-16/UTF-32 byte-order mark (spec §6 "Wire
/// format"). JSON text is UTF-8 only; without this check a BOM falls
/// through to the generic "unexpected byte" structural error.
fn reject_utf16_utf32_bom(content: &[u8]) -> Result<(), Error> {
    const UTF32_LE: &[u8] = &[0xFF, 0xFE, 0x00, 0x00];
    const UTF32_BE: &[u8] = &[0x00, 0x00, 0xFE, 0xFF];
    const UTF16_LE: &[u8] = &[0xFF, 0xFE];
    const UTF16_BE: &[u8] = &[0xFE, 0xFF];

    if content.starts_with(UTF32_LE)
        || content.starts_with(UTF32_BE)
        || content.starts_with(UTF16_LE)
        || content.starts_with(UTF16_BE)
    {
        return Err(Error::new(ErrorCode::InvalidEncoding, "input has a UTF-16/UTF-32 byte-order mark; only UTF-8 is accepted", 0));
    }
    Ok(())
}

struct Parser<'b> {
    buf: &'b mut Vec<u8>,
    pos: usize,
    content_len: usize,
    flags: u32,
    max_depth: usize,
    nodes: Vec<Node>,
}

impl<'b> Parser<'b> {
    fn peek(&self) -> Option<u8> {
        if self.pos < self.content_len {
            Some(self.buf[self.pos])
        } else {
            None
        }
    }

    fn skip_ws_and_comments(&mut self) -> Result<(), Error> {
        let allow_comments = self.flags & read_flag::ALLOW_COMMENTS != 0;
        loop {
            while self.pos < self.content_len && is_space_or_comment(self.buf[self.pos]) {
                if self.buf[self.pos] == b'/' {
                    break;
                }
                self.pos += 1;
            }
            if self.pos >= self.content_len || self.buf[self.pos] != b'/' {
                return Ok(());
            }
            if !allow_comments {
                return Err(Error::new(ErrorCode::InvalidComment, "comments are not enabled", self.pos));
            }
            match self.buf.get(self.pos + 1) {
                Some(b'/') => {
                    self.pos += 2;
                    while self.pos < self.content_len && self.buf[self.pos] != b'\n' {
                        self.pos += 1;
                    }
                }
                Some(b'*') => {
                    let start = self.pos;
                    self.pos += 2;
                    loop {
                        if self.pos + 1 >= self.content_len {
                            return Err(Error::new(ErrorCode::InvalidComment, "unterminated block comment", start));
                        }
                        if self.buf[self.pos] == b'*' && self.buf[self.pos + 1] == b'/' {
                            self.pos += 2;
                            break;
                        }
                        self.pos += 1;
                    }
                }
                _ => return Err(Error::new(ErrorCode::InvalidComment, "stray '/' outside a comment", self.pos)),
            }
        }
    }

    fn literal(&mut self, lit: &[u8]) -> bool {
        if self.buf[self.pos..].starts_with(lit) {
            self.pos += lit.len();
            true
        } else {
            false
        }
    }

    fn parse_value(&mut self, depth: usize) -> Result<(), Error> {
        if self.max_depth != 0 && depth > self.max_depth {
            return Err(Error::new(ErrorCode::ExceedDepth, "nesting exceeds configured depth limit", self.pos));
        }
        let b = self.peek().ok_or_else(|| Error::at(ErrorCode::UnexpectedEnd, self.pos))?;
        match b {
            b'{' => self.parse_object(depth),
            b'[' => self.parse_array(depth),
            b'"' => self.parse_string(),
            b't' => {
                if self.literal(b"true") {
                    self.nodes.push(Node { tag: Tag::new(TypeCode::Bool, subtype::BOOL_TRUE, 0), payload: 0 });
                    Ok(())
                } else {
                    Err(Error::new(ErrorCode::InvalidLiteral, "invalid literal, expected `true`", self.pos))
                }
            }
            b'f' => {
                if self.literal(b"false") {
                    self.nodes.push(Node { tag: Tag::new(TypeCode::Bool, subtype::BOOL_FALSE, 0), payload: 0 });
                    Ok(())
                } else {
                    Err(Error::new(ErrorCode::InvalidLiteral, "invalid literal, expected `false`", self.pos))
                }
            }
            b'n' => {
                if self.literal(b"null") {
                    self.nodes.push(Node { tag: Tag::new(TypeCode::Null, subtype::NONE, 0), payload: 0 });
                    Ok(())
                } else if self.flags & read_flag::ALLOW_INF_AND_NAN != 0 && matches_ci(&self.buf[self.pos..], b"nan")
                {
                    self.parse_number()
                } else {
                    Err(Error::new(ErrorCode::InvalidLiteral, "invalid literal, expected `null`", self.pos))
                }
            }
            b'N' if self.flags & read_flag::ALLOW_INF_AND_NAN != 0 => self.parse_number(),
            b'I' | b'i' if self.flags & read_flag::ALLOW_INF_AND_NAN != 0 => self.parse_number(),
            #[allow(clippy::if_same_then_else)]
            b'-' => {
                if self.flags & read_flag::ALLOW_INF_AND_NAN != 0
                    && matches!(self.buf.get(self.pos + 1), Some(b'I') | Some(b'i') | Some(b'N') | Some(b'n'))
                {
                    self.parse_number()
                } else if digi_is_digit(*self.buf.get(self.pos + 1).unwrap_or(&0)) {
                    self.parse_number()
                } else {
                    Err(Error::new(ErrorCode::InvalidNumber, "no digit after minus sign", self.pos))
                }
            }
            b'0'..=b'9' => self.parse_number(),
            _ => Err(Error::new(ErrorCode::JsonStructure, "unexpected byte, expected a value", self.pos)),
        }
    }

    fn parse_string(&mut self) -> Result<(), Error> {
        let quote = self.pos;
        self.pos += 1;
        let scanned = strbuf::scan(self.buf, self.pos, self.flags)?;
        self.nodes.push(Node {
            tag: Tag::new(TypeCode::Str, subtype::NONE, scanned.len as u64),
            payload: scanned.start as u64,
        });
        self.pos = scanned.end;
        let _ = quote;
        Ok(())
    }

    fn parse_number(&mut self) -> Result<(), Error> {
        let start = self.pos;
        if self.flags & read_flag::NUMBER_AS_RAW != 0 {
            let probe = number::read_number(self.buf, self.pos, self.flags)?;
            self.nodes.push(Node {
                tag: Tag::new(TypeCode::Raw, subtype::NONE, (probe.end - start) as u64),
                payload: start as u64,
            });
            self.pos = probe.end;
            return Ok(());
        }
        let result = number::read_number(self.buf, self.pos, self.flags)?;
        let raw_eligible = self.flags & read_flag::BIGNUM_AS_RAW != 0
            && (result.int_overflowed || matches!(result.value, NumberValue::Real(v) if v.is_infinite()));
        if raw_eligible {
            self.nodes.push(Node {
                tag: Tag::new(TypeCode::Raw, subtype::NONE, (result.end - start) as u64),
                payload: start as u64,
            });
        } else {
            let (sub, payload) = match result.value {
                NumberValue::Uint(v) => (subtype::NUM_UINT, v),
                NumberValue::Sint(v) => (subtype::NUM_SINT, v as u64),
                NumberValue::Real(v) => (subtype::NUM_REAL, v.to_bits()),
            };
            self.nodes.push(Node { tag: Tag::new(TypeCode::Num, sub, 0), payload });
        }
        self.pos = result.end;
        Ok(())
    }

    fn parse_array(&mut self, depth: usize) -> Result<(), Error> {
        let idx = self.nodes.len();
        self.nodes.push(Node { tag: Tag::new(TypeCode::Arr, subtype::NONE, 0), payload: 0 });
        self.pos += 1;
        self.skip_ws_and_comments()?;
        let mut count = 0u64;
        if self.peek() == Some(b']') {
            self.pos += 1;
        } else {
            loop {
                self.skip_ws_and_comments()?;
                self.parse_value(depth + 1)?;
                count += 1;
                self.skip_ws_and_comments()?;
                match self.peek() {
                    Some(b',') => {
                        self.pos += 1;
                        self.skip_ws_and_comments()?;
                        if self.peek() == Some(b']') {
                            if self.flags & read_flag::ALLOW_TRAILING_COMMAS == 0 {
                                return Err(Error::new(ErrorCode::JsonStructure, "trailing comma not allowed", self.pos));
                            }
                            self.pos += 1;
                            break;
                        }
                    }
                    Some(b']') => {
                        self.pos += 1;
                        break;
                    }
                    _ => {
                        return Err(Error::new(ErrorCode::JsonStructure, "expected `,` or `]`", self.pos));
                    }
                }
            }
        }
        let span = (self.nodes.len() - idx) as u64;
        self.nodes[idx].tag = Tag::new(TypeCode::Arr, subtype::NONE, count);
        self.nodes[idx].payload = span;
        Ok(())
    }

    fn parse_object(&mut self, depth: usize) -> Result<(), Error> {
        let idx = self.nodes.len();
        self.nodes.push(Node { tag: Tag::new(TypeCode::Obj, subtype::NONE, 0), payload: 0 });
        self.pos += 1;
        self.skip_ws_and_comments()?;
        let mut pairs = 0u64;
        if self.peek() == Some(b'}') {
            self.pos += 1;
        } else {
            loop {
                self.skip_ws_and_comments()?;
                if self.peek() != Some(b'"') {
                    return Err(Error::new(ErrorCode::JsonStructure, "expected a string key", self.pos));
                }
                self.parse_string()?;
                self.skip_ws_and_comments()?;
                if self.peek() != Some(b':') {
                    return Err(Error::new(ErrorCode::JsonStructure, "expected `:` after object key", self.pos));
                }
                self.pos += 1;
                self.skip_ws_and_comments()?;
                self.parse_value(depth + 1)?;
                pairs += 1;
                self.skip_ws_and_comments()?;
                match self.peek() {
                    Some(b',') => {
                        self.pos += 1;
                        self.skip_ws_and_comments()?;
                        if self.peek() == Some(b'}') {
                            if self.flags & read_flag::ALLOW_TRAILING_COMMAS == 0 {
                                return Err(Error::new(ErrorCode::JsonStructure, "trailing comma not allowed", self.pos));
                            }
                            self.pos += 1;
                            break;
                        }
                    }
                    Some(b'}') => {
                        self.pos += 1;
                        break;
                    }
                    _ => {
                        return Err(Error::new(ErrorCode::JsonStructure, "expected `,` or `}`", self.pos));
                    }
                }
            }
        }
        let span = (self.nodes.len() - idx) as u64;
        self.nodes[idx].tag = Tag::new(TypeCode::Obj, subtype::NONE, pairs);
        self.nodes[idx].payload = span;
        Ok(())
    }
}

fn matches_ci(input: &[u8], lit: &[u8]) -> bool {
    input.len() >= lit.len() && input[..lit.len()].eq_ignore_ascii_case(lit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::doc::Number;

    #[test]
    fn utf16_and_utf32_boms_are_rejected() {
        let cases: &[&[u8]] = &[
            &[0xFE, 0xFF, b'1'],
            &[0xFF, 0xFE, b'1'],
            &[0x00, 0x00, 0xFE, 0xFF, b'1'],
            &[0xFF, 0xFE, 0x00, 0x00, b'1'],
        ];
        for input in cases {
            let err = read(input, 0).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidEncoding);
        }
    }

    #[test]
    fn empty_object() {
        let doc = read(b"{}", 0).unwrap();
        let root = doc.root();
        assert_eq!(root.get_type(), TypeCode::Obj);
        assert_eq!(root.get_len(), 0);
    }

    #[test]
    fn trailing_comma_requires_flag() {
        assert!(read(b"[1,]", 0).is_err());
        let doc = read(b"[1,]", read_flag::ALLOW_TRAILING_COMMAS).unwrap();
        assert_eq!(doc.root().get_len(), 1);
    }

    #[test]
    fn trailing_whitespace_ok_trailing_content_errors() {
        assert!(read(b"[1] ", 0).is_ok());
        let err = read(b"[1] x", 0).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnexpectedContent);
    }

    #[test]
    fn stop_when_done_reports_consumed_prefix() {
        let doc = read(b"[1,2,3]garbage", read_flag::STOP_WHEN_DONE).unwrap();
        assert_eq!(doc.root().get_len(), 3);
    }

    #[test]
    fn comments_and_trailing_comma_scenario() {
        let flags = read_flag::ALLOW_COMMENTS | read_flag::ALLOW_TRAILING_COMMAS;
        let doc = read(b"  /* hi */ [ 1 , 2 , ]", flags).unwrap();
        let root = doc.root();
        assert_eq!(root.get_len(), 2);
        assert!(read(b"  /* hi */ [ 1 , 2 , ]", 0).is_err());
    }

    #[test]
    fn end_to_end_mixed_document() {
        let doc = read(br#"{"a":1,"b":[true,null,-0.5]}"#, 0).unwrap();
        let root = doc.root();
        assert_eq!(root.get_len(), 2);
        assert_eq!(root.obj_get("a").unwrap().as_number(), Some(Number::Uint(1)));
        let b = root.obj_get("b").unwrap();
        assert_eq!(b.get_len(), 3);
        assert_eq!(b.arr_get_last().unwrap().as_number(), Some(Number::Real(-0.5)));
    }

    #[test]
    fn infinity_requires_flag() {
        assert!(read(b"1e309", 0).is_err());
        let doc = read(b"1e309", read_flag::ALLOW_INF_AND_NAN).unwrap();
        assert_eq!(doc.root().as_number(), Some(Number::Real(f64::INFINITY)));
    }
}
