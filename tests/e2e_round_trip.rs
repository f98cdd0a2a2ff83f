//! End-to-end scenarios: realistic documents carried through
//! read → mutate (via the mutable document) → write → read again,
//! exercising the reader, serializer, and both document models together.

use json::config::{read_flag, write_flag};
use json::{MutDoc, Number, TypeCode};

fn sample_document() -> &'static [u8] {
    br#"{
        "id": 42,
        "name": "widget",
        "price": 19.99,
        "in_stock": true,
        "tags": ["a", "b", "c"],
        "meta": null
    }"#
}

#[test]
fn read_then_write_then_read_preserves_structure() {
    let doc = json::read(sample_document(), 0).unwrap();
    let bytes = json::write(&doc, 0).unwrap();
    let reparsed = json::read(&bytes, 0).unwrap();

    let root = reparsed.root();
    assert_eq!(root.obj_get("id").unwrap().as_number(), Some(Number::Uint(42)));
    assert_eq!(root.obj_get("name").unwrap().as_str(), Some("widget"));
    assert_eq!(root.obj_get("in_stock").unwrap().as_bool(), Some(true));
    assert!(root.obj_get("meta").unwrap().is_null());
    assert_eq!(root.obj_get("tags").unwrap().get_len(), 3);
}

#[test]
fn mutable_document_edit_round_trip() {
    let src = json::read(sample_document(), 0).unwrap();
    let mut doc = MutDoc::from_doc(&src);

    let root = doc.root().unwrap();
    assert_eq!(root.get_type(), TypeCode::Obj);

    let extra = doc.str("added by edit");
    let obj_idx = doc.root().unwrap().arr_iter().count();
    let _ = obj_idx;

    let arr = doc.arr_new();
    doc.arr_add(arr, extra);
    doc.set_root(arr);

    let out = json::serialize::write_mut(&doc, 0).unwrap();
    let reparsed = json::read(&out, 0).unwrap();
    assert_eq!(reparsed.root().arr_get_first().unwrap().as_str(), Some("added by edit"));
}

#[test]
fn permissive_flags_accept_trailing_commas_and_comments() {
    let input = br#"{
        // trailing comma and comments are both opt-in
        "a": 1,
        "b": 2,
    }"#;
    let flags = read_flag::ALLOW_COMMENTS | read_flag::ALLOW_TRAILING_COMMAS;
    let doc = json::read(input, flags).unwrap();
    assert_eq!(doc.root().get_len(), 2);
}

#[test]
fn nan_and_infinity_round_trip_under_matching_flags() {
    let doc = json::read(b"[NaN, Infinity, -Infinity]", read_flag::ALLOW_INF_AND_NAN).unwrap();
    let bytes = json::write(&doc, write_flag::ALLOW_INF_AND_NAN).unwrap();
    let reparsed = json::read(&bytes, read_flag::ALLOW_INF_AND_NAN).unwrap();

    let mut values = reparsed.root().arr_iter();
    match values.next().unwrap().as_number().unwrap() {
        Number::Real(v) => assert!(v.is_nan()),
        other => panic!("expected real, got {other:?}"),
    }
    match values.next().unwrap().as_number().unwrap() {
        Number::Real(v) => assert!(v.is_infinite() && v > 0.0),
        other => panic!("expected real, got {other:?}"),
    }
    match values.next().unwrap().as_number().unwrap() {
        Number::Real(v) => assert!(v.is_infinite() && v < 0.0),
        other => panic!("expected real, got {other:?}"),
    }
}

#[test]
fn deeply_nested_array_within_default_depth_succeeds() {
    let depth = 64;
    let mut text = String::new();
    for _ in 0..depth {
        text.push('[');
    }
    text.push('1');
    for _ in 0..depth {
        text.push(']');
    }
    json::read(text.as_bytes(), 0).unwrap();
}
