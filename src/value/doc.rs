//! Immutable document: one contiguous depth-first array of values
//! (spec §3 "Immutable document", component C8).
//!
//! Children of a container are not linked by pointers; "next sibling"
//! is computed by skipping over the subtree via the container's own
//! span, so traversal is index arithmetic over one arena-like `Vec`
//! (spec §9's own suggested translation of the reference's contiguous
//! tape into an arena indexed by offsets).

use crate::value::tag::{subtype, Tag, TypeCode};

/// One slot in the document's flat array.
///
/// For scalars, `payload` holds the type-specific value (integer bits,
/// float bits, or a byte offset into [`Doc::buf`] for strings). For
/// containers, `payload` holds the number of slots the subtree spans
/// (including this node itself), so `idx + payload` is always the
/// index of the next sibling — the "subtree-skip" rule spec §3
/// describes.
#[derive(Debug, Clone, Copy)]
pub struct Node {
    pub tag: Tag,
    pub payload: u64,
}

/// A parsed, read-only JSON value tree (spec §3).
#[derive(Debug)]
pub struct Doc {
    pub(crate) nodes: Vec<Node>,
    pub(crate) buf: Box<[u8]>,
}

/// A value within a [`Doc`], identified by its slot index.
#[derive(Clone, Copy)]
pub struct ValueRef<'d> {
    pub(crate) doc: &'d Doc,
    pub(crate) idx: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Uint(u64),
    Sint(i64),
    Real(f64),
}

impl Number {
    /// Canonical numeric value for cross-subtype comparison (spec
    /// §4.8/§9 Open Question: `uint 3 == real 3.0`).
    fn as_f64(self) -> f64 {
        match self {
            Number::Uint(v) => v as f64,
            Number::Sint(v) => v as f64,
            Number::Real(v) => v,
        }
    }

    fn eq_canonical(self, other: Number) -> bool {
        match (self, other) {
            (Number::Uint(a), Number::Uint(b)) => a == b,
            (Number::Sint(a), Number::Sint(b)) => a == b,
            (Number::Real(a), Number::Real(b)) => a.to_bits() == b.to_bits() || a == b,
            (Number::Uint(a), Number::Sint(b)) | (Number::Sint(b), Number::Uint(a)) => {
                b >= 0 && a == b as u64
            }
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl Doc {
    pub(crate) fn new(nodes: Vec<Node>, buf: Box<[u8]>) -> Doc {
        Doc { nodes, buf }
    }

    pub fn root(&self) -> ValueRef<'_> {
        ValueRef { doc: self, idx: 0 }
    }

    fn subtree_span(&self, idx: usize) -> usize {
        let node = &self.nodes[idx];
        match node.tag.type_code() {
            TypeCode::Arr | TypeCode::Obj => node.payload as usize,
            _ => 1,
        }
    }

    fn string_bytes(&self, node: &Node) -> &[u8] {
        let start = node.payload as usize;
        let len = node.tag.len();
        &self.buf[start..start + len]
    }
}

impl<'d> ValueRef<'d> {
    fn node(self) -> &'d Node {
        &self.doc.nodes[self.idx]
    }

    pub fn get_type(self) -> TypeCode {
        self.node().tag.type_code()
    }

    pub fn get_subtype(self) -> u8 {
        self.node().tag.subtype()
    }

    pub fn get_len(self) -> usize {
        self.node().tag.len()
    }

    pub fn is_null(self) -> bool {
        self.get_type() == TypeCode::Null
    }

    pub fn as_bool(self) -> Option<bool> {
        if self.get_type() == TypeCode::Bool {
            Some(self.get_subtype() == subtype::BOOL_TRUE)
        } else {
            None
        }
    }

    pub fn as_number(self) -> Option<Number> {
        let node = self.node();
        if node.tag.type_code() != TypeCode::Num {
            return None;
        }
        Some(match node.tag.subtype() {
            subtype::NUM_UINT => Number::Uint(node.payload),
            subtype::NUM_SINT => Number::Sint(node.payload as i64),
            subtype::NUM_REAL => Number::Real(f64::from_bits(node.payload)),
            _ => unreachable!("number subtype"),
        })
    }

    pub fn as_str(self) -> Option<&'d str> {
        let node = self.node();
        if node.tag.type_code() != TypeCode::Str && node.tag.type_code() != TypeCode::Raw {
            return None;
        }
        std::str::from_utf8(self.doc.string_bytes(node)).ok()
    }

    /// Raw bytes backing a `Str`/`Raw` value, regardless of UTF-8
    /// validity (spec §4.3: `allow_invalid_unicode` strings may still
    /// contain malformed byte sequences after reading).
    pub fn as_bytes(self) -> Option<&'d [u8]> {
        let node = self.node();
        if node.tag.type_code() != TypeCode::Str && node.tag.type_code() != TypeCode::Raw {
            return None;
        }
        Some(self.doc.string_bytes(node))
    }

    /// First child slot index, or `None` for an empty/non-container.
    fn first_child(self) -> Option<usize> {
        let node = self.node();
        if !matches!(node.tag.type_code(), TypeCode::Arr | TypeCode::Obj) {
            return None;
        }
        if node.tag.len() == 0 {
            None
        } else {
            Some(self.idx + 1)
        }
    }

    /// Iterates direct array elements (empty iterator on a non-array).
    pub fn arr_iter(self) -> ArrIter<'d> {
        let remaining = if self.get_type() == TypeCode::Arr { self.get_len() } else { 0 };
        ArrIter { doc: self.doc, next: self.first_child(), remaining }
    }

    pub fn arr_get(self, i: usize) -> Option<ValueRef<'d>> {
        self.arr_iter().nth(i)
    }

    pub fn arr_get_first(self) -> Option<ValueRef<'d>> {
        self.arr_iter().next()
    }

    pub fn arr_get_last(self) -> Option<ValueRef<'d>> {
        self.arr_iter().last()
    }

    /// Iterates `(key, value)` pairs (empty iterator on a non-object).
    pub fn obj_iter(self) -> ObjIter<'d> {
        let remaining = if self.get_type() == TypeCode::Obj { self.get_len() } else { 0 };
        ObjIter { doc: self.doc, next: self.first_child(), remaining }
    }

    /// Linear search by key (spec §4.8: keys are not hashed).
    pub fn obj_get(self, key: &str) -> Option<ValueRef<'d>> {
        self.obj_iter().find(|&(k, _)| k == key).map(|(_, v)| v)
    }

    /// Structural equality (spec §4.8): byte-wise strings, matching
    /// type/subtype, canonical numeric value across number subtypes.
    pub fn equals(self, other: ValueRef<'_>) -> bool {
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => return a.eq_canonical(b),
            (Some(_), None) | (None, Some(_)) => return false,
            (None, None) => {}
        }
        let (ta, tb) = (self.get_type(), other.get_type());
        if ta != tb {
            return false;
        }
        match ta {
            TypeCode::Null | TypeCode::None => true,
            TypeCode::Bool => self.as_bool() == other.as_bool(),
            TypeCode::Str | TypeCode::Raw => self.as_str() == other.as_str(),
            TypeCode::Arr => {
                self.get_len() == other.get_len()
                    && self.arr_iter().zip(other.arr_iter()).all(|(a, b)| a.equals(b))
            }
            TypeCode::Obj => {
                self.get_len() == other.get_len()
                    && self.obj_iter().all(|(k, v)| other.obj_get(k).is_some_and(|ov| v.equals(ov)))
            }
            TypeCode::Num => unreachable!("numbers handled above"),
        }
    }
}

pub struct ArrIter<'d> {
    doc: &'d Doc,
    next: Option<usize>,
    remaining: usize,
}

impl<'d> Iterator for ArrIter<'d> {
    type Item = ValueRef<'d>;

    fn next(&mut self) -> Option<ValueRef<'d>> {
        let idx = self.next?;
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.next = Some(idx + self.doc.subtree_span(idx));
        Some(ValueRef { doc: self.doc, idx })
    }
}

pub struct ObjIter<'d> {
    doc: &'d Doc,
    next: Option<usize>,
    remaining: usize,
}

impl<'d> Iterator for ObjIter<'d> {
    type Item = (&'d str, ValueRef<'d>);

    fn next(&mut self) -> Option<(&'d str, ValueRef<'d>)> {
        let key_idx = self.next?;
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let key = ValueRef { doc: self.doc, idx: key_idx }.as_str().expect("object key is always a string");
        let val_idx = key_idx + self.doc.subtree_span(key_idx);
        let val = ValueRef { doc: self.doc, idx: val_idx };
        self.next = Some(val_idx + self.doc.subtree_span(val_idx));
        Some((key, val))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn navigates_object_and_array() {
        let doc = parse::read(br#"{"a":1,"b":[true,null,-0.5]}"#, 0).unwrap();
        let root = doc.root();
        assert_eq!(root.get_type(), TypeCode::Obj);
        assert_eq!(root.get_len(), 2);
        assert_eq!(root.obj_get("a").unwrap().as_number(), Some(Number::Uint(1)));
        let b = root.obj_get("b").unwrap();
        assert_eq!(b.get_type(), TypeCode::Arr);
        assert_eq!(b.get_len(), 3);
        assert_eq!(b.arr_get_last().unwrap().as_number(), Some(Number::Real(-0.5)));
    }

    #[test]
    fn canonical_numeric_equality() {
        let doc = parse::read(b"[3, 3.0]", 0).unwrap();
        let arr = doc.root();
        let (a, b) = (arr.arr_get(0).unwrap(), arr.arr_get(1).unwrap());
        assert!(a.equals(b));
    }
}
