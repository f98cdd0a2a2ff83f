//! Serializer (spec §4.7, component C7): walks a value tree and
//! writes minified or pretty-printed JSON.
//!
//! The reference implementation threads an explicit stack of
//! `{remaining_count, is_object}` frames through one flat loop; here
//! the call stack plays that role (one stack frame per open
//! container), the same recursion-for-explicit-stack translation
//! [`crate::parse`] uses on the read side.

use crate::config::{write_flag, PRETTY_INDENT};
use crate::error::{Error, ErrorCode};
use crate::number;
use crate::strbuf;
use crate::value::doc::{Doc, Number, ValueRef};
use crate::value::mut_doc::{MutDoc, MutValueRef};
use crate::value::tag::TypeCode;

/// Serializes an immutable document (spec §6 `write`).
pub fn write(doc: &Doc, flags: u32) -> Result<Vec<u8>, Error> {
    let mut out = Vec::with_capacity(128);
    write_value(doc.root(), flags, 0, &mut out)?;
    Ok(out)
}

/// Serializes a mutable document built programmatically.
pub fn write_mut(doc: &MutDoc, flags: u32) -> Result<Vec<u8>, Error> {
    let mut out = Vec::with_capacity(128);
    let root = doc.root().ok_or_else(|| Error::resource(ErrorCode::InvalidValueType, "document has no root value"))?;
    write_mut_value(root, flags, 0, &mut out)?;
    Ok(out)
}

fn indent(out: &mut Vec<u8>, depth: usize) {
    out.push(b'\n');
    for _ in 0..depth * PRETTY_INDENT {
        out.push(b' ');
    }
}

fn write_value(v: ValueRef, flags: u32, depth: usize, out: &mut Vec<u8>) -> Result<(), Error> {
    let pretty = flags & write_flag::PRETTY != 0;
    match v.get_type() {
        TypeCode::None => Err(Error::resource(ErrorCode::InvalidValueType, "value has no type")),
        TypeCode::Null => {
            out.extend_from_slice(b"null");
            Ok(())
        }
        TypeCode::Bool => {
            out.extend_from_slice(if v.as_bool().unwrap() { b"true" } else { b"false" });
            Ok(())
        }
        TypeCode::Num => {
            match v.as_number().unwrap() {
                Number::Uint(n) => number::write_u64(out, n),
                Number::Sint(n) => number::write_i64(out, n),
                Number::Real(n) => number::write_f64(out, n, flags)?,
            }
            Ok(())
        }
        TypeCode::Raw => {
            out.extend_from_slice(v.as_bytes().unwrap());
            Ok(())
        }
        TypeCode::Str => {
            strbuf::write_quoted(out, v.as_bytes().unwrap(), flags);
            Ok(())
        }
        TypeCode::Arr => {
            out.push(b'[');
            let len = v.get_len();
            for (i, child) in v.arr_iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                if pretty {
                    indent(out, depth + 1);
                }
                write_value(child, flags, depth + 1, out)?;
            }
            if pretty && len > 0 {
                indent(out, depth);
            }
            out.push(b']');
            Ok(())
        }
        TypeCode::Obj => {
            out.push(b'{');
            let len = v.get_len();
            for (i, (key, val)) in v.obj_iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                if pretty {
                    indent(out, depth + 1);
                }
                strbuf::write_quoted(out, key.as_bytes(), flags);
                out.push(b':');
                if pretty {
                    out.push(b' ');
                }
                write_value(val, flags, depth + 1, out)?;
            }
            if pretty && len > 0 {
                indent(out, depth);
            }
            out.push(b'}');
            Ok(())
        }
    }
}

fn write_mut_value(v: MutValueRef, flags: u32, depth: usize, out: &mut Vec<u8>) -> Result<(), Error> {
    let pretty = flags & write_flag::PRETTY != 0;
    match v.get_type() {
        TypeCode::None => Err(Error::resource(ErrorCode::InvalidValueType, "value has no type")),
        TypeCode::Null => {
            out.extend_from_slice(b"null");
            Ok(())
        }
        TypeCode::Bool => {
            out.extend_from_slice(if v.as_bool().unwrap() { b"true" } else { b"false" });
            Ok(())
        }
        TypeCode::Num => {
            match v.as_number().unwrap() {
                Number::Uint(n) => number::write_u64(out, n),
                Number::Sint(n) => number::write_i64(out, n),
                Number::Real(n) => number::write_f64(out, n, flags)?,
            }
            Ok(())
        }
        TypeCode::Raw => {
            out.extend_from_slice(v.as_str().unwrap().as_bytes());
            Ok(())
        }
        TypeCode::Str => {
            strbuf::write_quoted(out, v.as_str().unwrap().as_bytes(), flags);
            Ok(())
        }
        TypeCode::Arr => {
            out.push(b'[');
            let len = v.get_len();
            for (i, child) in v.arr_iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                if pretty {
                    indent(out, depth + 1);
                }
                write_mut_value(child, flags, depth + 1, out)?;
            }
            if pretty && len > 0 {
                indent(out, depth);
            }
            out.push(b']');
            Ok(())
        }
        TypeCode::Obj => {
            out.push(b'{');
            let len = v.get_len();
            for (i, (key, val)) in v.obj_iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                if pretty {
                    indent(out, depth + 1);
                }
                strbuf::write_quoted(out, key.as_bytes(), flags);
                out.push(b':');
                if pretty {
                    out.push(b' ');
                }
                write_mut_value(val, flags, depth + 1, out)?;
            }
            if pretty && len > 0 {
                indent(out, depth);
            }
            out.push(b'}');
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn round_trip(src: &str, flags_read: u32, flags_write: u32) -> String {
        let doc = parse::read(src.as_bytes(), flags_read).unwrap();
        String::from_utf8(write(&doc, flags_write).unwrap()).unwrap()
    }

    #[test]
    fn minified_scenario_one() {
        assert_eq!(round_trip(r#"{"a":1,"b":[true,null,-0.5]}"#, 0, 0), r#"{"a":1,"b":[true,null,-0.5]}"#);
    }

    #[test]
    fn real_round_trip_scenarios() {
        assert_eq!(round_trip("12345e-2", 0, 0), "123.45");
        assert_eq!(round_trip("1e308", 0, 0), "1e308");
    }

    #[test]
    fn infinity_round_trip() {
        let flags = crate::config::read_flag::ALLOW_INF_AND_NAN;
        assert_eq!(round_trip("1e309", flags, crate::config::write_flag::ALLOW_INF_AND_NAN), "Infinity");
    }

    #[test]
    fn escape_unicode_scenario() {
        assert_eq!(round_trip("\"Alizée\"", 0, write_flag::ESCAPE_UNICODE), "\"Aliz\\u00E9e\"");
    }

    #[test]
    fn pretty_printing() {
        let doc = parse::read(br#"{"a":[1,2]}"#, 0).unwrap();
        let out = String::from_utf8(write(&doc, write_flag::PRETTY).unwrap()).unwrap();
        assert_eq!(out, "{\n  \"a\": [\n    1,\n    2\n  ]\n}");
    }

    #[test]
    fn mutable_document_round_trip() {
        let mut doc = MutDoc::new();
        let obj = doc.obj_new();
        let v = doc.uint(42);
        doc.obj_add(obj, "x", v);
        doc.set_root(obj);
        assert_eq!(String::from_utf8(write_mut(&doc, 0).unwrap()).unwrap(), r#"{"x":42}"#);
    }
}
