//! Integration tests for the top-level crate API: the `read`/`write`/
//! `read_number`/`read_file`/`write_file` entry points and their
//! re-exported types.

use json::config::{read_flag, write_flag};
use json::{Doc, ErrorCode, Number, TypeCode};

#[test]
fn read_parses_a_complete_document() {
    let doc = json::read(br#"{"a":1,"b":[2,3]}"#, 0).unwrap();
    let root = doc.root();
    assert_eq!(root.get_type(), TypeCode::Obj);
    assert_eq!(root.get_len(), 2);
}

#[test]
fn read_rejects_trailing_content_by_default() {
    let err = json::read(b"1 2", 0).unwrap_err();
    assert_eq!(err.code, ErrorCode::UnexpectedContent);
}

#[test]
fn read_number_parses_a_standalone_literal() {
    let result = json::read_number(b"3.5", 0).unwrap();
    assert_eq!(result.value, json::number::NumberValue::Real(3.5));
}

#[test]
fn write_round_trips_through_read() {
    let doc = json::read(br#"{"x":1,"y":[true,false,null]}"#, 0).unwrap();
    let bytes = json::write(&doc, 0).unwrap();
    let reparsed = json::read(&bytes, 0).unwrap();
    assert!(doc.root().equals(reparsed.root()));
}

#[test]
fn pretty_write_flag_indents_output() {
    let doc = json::read(b"[1,2]", 0).unwrap();
    let pretty = json::write(&doc, write_flag::PRETTY).unwrap();
    assert!(String::from_utf8(pretty).unwrap().contains('\n'));
}

#[test]
fn comments_require_the_read_flag() {
    let input = b"// leading comment\n1";
    assert!(json::read(input, 0).is_err());
    let doc = json::read(input, read_flag::ALLOW_COMMENTS).unwrap();
    assert_eq!(doc.root().as_number(), Some(Number::Uint(1)));
}

fn only_ints(doc: &Doc) -> Vec<u64> {
    doc.root().arr_iter().map(|v| match v.as_number().unwrap() {
        Number::Uint(n) => n,
        other => panic!("expected uint, got {other:?}"),
    }).collect()
}

#[test]
fn array_values_are_navigable_in_order() {
    let doc = json::read(b"[1,2,3]", 0).unwrap();
    assert_eq!(only_ints(&doc), vec![1, 2, 3]);
}
