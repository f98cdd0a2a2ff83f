//! Mutable document: every value individually addressable, containers
//! are circular singly-linked lists with a tail pointer (spec §3
//! "Mutable document", component C8).
//!
//! Values live in one append-only `Vec` inside the document and are
//! addressed by index rather than pointer (spec §9's suggested
//! translation for a language without unrestricted pointer aliasing);
//! an index never changes once issued, even as the `Vec` reallocates,
//! so it plays the role of the reference implementation's stable
//! arena offset.

use crate::alloc::Arena;
use crate::value::doc::{Doc, Number, ValueRef};
use crate::value::tag::{subtype, Tag, TypeCode};

#[derive(Debug, Clone, Copy)]
pub struct MutNode {
    pub tag: Tag,
    /// Scalar payload (int/float bits, or a `(start, len)`-encoded
    /// string pointer into the document's string arena), reusing the
    /// same encoding as [`super::doc::Node`].
    pub payload: u64,
    pub str_start: usize,
    /// Circular-list successor. For a container's head node this is
    /// itself initially; `tail` in the container's own bookkeeping
    /// (see [`MutDoc::tails`]) is what gives O(1) append.
    pub next: usize,
}

/// A value-tree document built programmatically or copied from a
/// [`Doc`] (spec §3 `doc_mut_copy`).
pub struct MutDoc {
    nodes: Vec<MutNode>,
    /// Per-container tail index, keyed by the container's own node
    /// index (`tail.next == head`, the circular property spec §3/§9
    /// describes).
    tails: Vec<(usize, usize)>,
    strings: Arena,
    root: Option<usize>,
}

/// A value within a [`MutDoc`].
#[derive(Clone, Copy)]
pub struct MutValueRef<'d> {
    doc: &'d MutDoc,
    idx: usize,
}

impl MutDoc {
    pub fn new() -> MutDoc {
        MutDoc { nodes: Vec::new(), tails: Vec::new(), strings: Arena::new(), root: None }
    }

    fn push(&mut self, tag: Tag, payload: u64) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(MutNode { tag, payload, str_start: 0, next: idx });
        idx
    }

    fn tail_of(&self, container: usize) -> Option<usize> {
        self.tails.iter().find(|&&(c, _)| c == container).map(|&(_, t)| t)
    }

    fn set_tail(&mut self, container: usize, tail: usize) {
        if let Some(slot) = self.tails.iter_mut().find(|(c, _)| *c == container) {
            slot.1 = tail;
        } else {
            self.tails.push((container, tail));
        }
    }

    /// Splices `child` onto the circular list as the new last element
    /// of `container` (O(1), spec §3). Does not touch the container's
    /// reported length: arrays count one link per element, objects
    /// count two (key + value) per member, so the element-count bump
    /// is the caller's responsibility (see [`MutDoc::arr_add`]/
    /// [`MutDoc::obj_add`]).
    fn link_child(&mut self, container: usize, child: usize) {
        match self.tail_of(container) {
            None => {
                self.nodes[child].next = child;
            }
            Some(tail) => {
                let head = self.nodes[tail].next;
                self.nodes[tail].next = child;
                self.nodes[child].next = head;
            }
        }
        self.set_tail(container, child);
    }

    fn bump_len(&mut self, container: usize, delta: u64) {
        let n = self.nodes[container].tag.len() as u64 + delta;
        let (ty, sub) = (self.nodes[container].tag.type_code(), self.nodes[container].tag.subtype());
        self.nodes[container].tag = Tag::new(ty, sub, n);
    }

    pub fn null(&mut self) -> usize {
        self.push(Tag::new(TypeCode::Null, subtype::NONE, 0), 0)
    }

    pub fn bool(&mut self, v: bool) -> usize {
        let sub = if v { subtype::BOOL_TRUE } else { subtype::BOOL_FALSE };
        self.push(Tag::new(TypeCode::Bool, sub, 0), 0)
    }

    pub fn uint(&mut self, v: u64) -> usize {
        self.push(Tag::new(TypeCode::Num, subtype::NUM_UINT, 0), v)
    }

    pub fn sint(&mut self, v: i64) -> usize {
        self.push(Tag::new(TypeCode::Num, subtype::NUM_SINT, 0), v as u64)
    }

    pub fn real(&mut self, v: f64) -> usize {
        self.push(Tag::new(TypeCode::Num, subtype::NUM_REAL, 0), v.to_bits())
    }

    pub fn str(&mut self, s: &str) -> usize {
        let ptr = self.strings.alloc_bytes(s.as_bytes());
        let idx = self.push(Tag::new(TypeCode::Str, subtype::NONE, s.len() as u64), 0);
        // Store the arena pointer's byte offset from the arena start is
        // not tracked by `Arena`; instead keep the copied bytes behind
        // a raw pointer valid for the document's lifetime.
        self.nodes[idx].str_start = ptr.as_ptr() as usize;
        idx
    }

    pub fn arr_new(&mut self) -> usize {
        self.push(Tag::new(TypeCode::Arr, subtype::NONE, 0), 0)
    }

    pub fn obj_new(&mut self) -> usize {
        self.push(Tag::new(TypeCode::Obj, subtype::NONE, 0), 0)
    }

    pub fn arr_add(&mut self, arr: usize, val: usize) {
        self.link_child(arr, val);
        self.bump_len(arr, 1);
    }

    pub fn obj_add(&mut self, obj: usize, key: &str, val: usize) {
        let k = self.str(key);
        self.link_child(obj, k);
        self.link_child(obj, val);
        self.bump_len(obj, 1);
    }

    pub fn set_root(&mut self, idx: usize) {
        self.root = Some(idx);
    }

    pub fn root(&self) -> Option<MutValueRef<'_>> {
        self.root.map(|idx| MutValueRef { doc: self, idx })
    }

    /// Deep copy from an immutable contiguous document into this
    /// mutable linked one (spec §4.8 `val_mut_copy`).
    pub fn from_doc(src: &Doc) -> MutDoc {
        let mut dst = MutDoc::new();
        let root = dst.copy_value(src.root());
        dst.set_root(root);
        dst
    }

    fn copy_value(&mut self, v: ValueRef<'_>) -> usize {
        match v.get_type() {
            TypeCode::Null | TypeCode::None => self.null(),
            TypeCode::Bool => self.bool(v.as_bool().unwrap()),
            TypeCode::Num => match v.as_number().unwrap() {
                Number::Uint(n) => self.uint(n),
                Number::Sint(n) => self.sint(n),
                Number::Real(n) => self.real(n),
            },
            TypeCode::Str | TypeCode::Raw => self.str(v.as_str().unwrap()),
            TypeCode::Arr => {
                let arr = self.arr_new();
                for child in v.arr_iter() {
                    let c = self.copy_value(child);
                    self.arr_add(arr, c);
                }
                arr
            }
            TypeCode::Obj => {
                let obj = self.obj_new();
                for (k, val) in v.obj_iter() {
                    let c = self.copy_value(val);
                    self.obj_add(obj, k, c);
                }
                obj
            }
        }
    }
}

impl Default for MutDoc {
    fn default() -> Self {
        MutDoc::new()
    }
}

impl<'d> MutValueRef<'d> {
    fn node(self) -> &'d MutNode {
        &self.doc.nodes[self.idx]
    }

    pub fn get_type(self) -> TypeCode {
        self.node().tag.type_code()
    }

    pub fn get_len(self) -> usize {
        self.node().tag.len()
    }

    pub fn as_bool(self) -> Option<bool> {
        (self.get_type() == TypeCode::Bool).then(|| self.node().tag.subtype() == subtype::BOOL_TRUE)
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
        if node.tag.type_code() != TypeCode::Str {
            return None;
        }
        // SAFETY: `str_start` was produced by `Arena::alloc_bytes` on
        // this same document's string arena, which never frees or
        // moves a chunk while the document is alive.
        let bytes = unsafe { std::slice::from_raw_parts(node.str_start as *const u8, node.tag.len()) };
        std::str::from_utf8(bytes).ok()
    }

    pub fn arr_iter(self) -> MutIter<'d> {
        MutIter::new(self.doc, self.idx, self.get_len())
    }

    pub fn obj_iter(self) -> MutObjIter<'d> {
        MutObjIter { inner: MutIter::new(self.doc, self.idx, self.get_len() * 2) }
    }
}

pub struct MutIter<'d> {
    doc: &'d MutDoc,
    next: Option<usize>,
    remaining: usize,
}

impl<'d> MutIter<'d> {
    fn new(doc: &'d MutDoc, container: usize, count: usize) -> MutIter<'d> {
        let next = doc.tail_of(container).map(|tail| doc.nodes[tail].next);
        MutIter { doc, next: if count == 0 { None } else { next }, remaining: count }
    }
}

impl<'d> Iterator for MutIter<'d> {
    type Item = MutValueRef<'d>;

    fn next(&mut self) -> Option<MutValueRef<'d>> {
        let idx = self.next?;
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.next = if self.remaining == 0 { None } else { Some(self.doc.nodes[idx].next) };
        Some(MutValueRef { doc: self.doc, idx })
    }
}

pub struct MutObjIter<'d> {
    inner: MutIter<'d>,
}

impl<'d> Iterator for MutObjIter<'d> {
    type Item = (&'d str, MutValueRef<'d>);

    fn next(&mut self) -> Option<(&'d str, MutValueRef<'d>)> {
        let key = self.inner.next()?;
        let val = self.inner.next().expect("object has matched key/value slots");
        Some((key.as_str().expect("object key is always a string"), val))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn builds_array_and_object() {
        let mut doc = MutDoc::new();
        let arr = doc.arr_new();
        let one = doc.uint(1);
        let two = doc.uint(2);
        doc.arr_add(arr, one);
        doc.arr_add(arr, two);
        doc.set_root(arr);

        let root = doc.root().unwrap();
        assert_eq!(root.get_len(), 2);
        let vals: Vec<_> = root.arr_iter().map(|v| v.as_number().unwrap()).collect();
        assert_eq!(vals, [Number::Uint(1), Number::Uint(2)]);
    }

    #[test]
    fn copies_from_immutable_doc() {
        let src = parse::read(br#"{"a":1,"b":[true,null]}"#, 0).unwrap();
        let dst = MutDoc::from_doc(&src);
        let root = dst.root().unwrap();
        assert_eq!(root.get_type(), TypeCode::Obj);
        let (k, v) = root.obj_iter().next().unwrap();
        assert_eq!(k, "a");
        assert_eq!(v.as_number(), Some(Number::Uint(1)));
    }
}
