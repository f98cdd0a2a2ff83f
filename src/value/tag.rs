//! Bit-packed value tag (spec §3 "Tagged value", component C8).
//!
//! A [`Tag`] is one machine word: the low 3 bits hold a [`TypeCode`],
//! the next 5 bits hold a subtype, and the remaining 56 bits hold a
//! length (string byte length, array element count, or object pair
//! count). The type-specific payload itself (integer, float bits, or
//! a byte offset) lives alongside the tag in [`super::doc::Node`] /
//! [`super::mut_doc::MutNode`] rather than inside the tag word — Rust
//! has no need to steal payload bits the way a C union would.

const TYPE_BITS: u32 = 3;
const SUBTYPE_BITS: u32 = 5;
const TYPE_MASK: u64 = (1 << TYPE_BITS) - 1;
const SUBTYPE_SHIFT: u32 = TYPE_BITS;
const SUBTYPE_MASK: u64 = ((1 << SUBTYPE_BITS) - 1) << SUBTYPE_SHIFT;
const LEN_SHIFT: u32 = TYPE_BITS + SUBTYPE_BITS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TypeCode {
    None = 0,
    Raw = 1,
    Null = 2,
    Bool = 3,
    Num = 4,
    Str = 5,
    Arr = 6,
    Obj = 7,
}

impl TypeCode {
    fn from_bits(b: u64) -> TypeCode {
        match b {
            0 => TypeCode::None,
            1 => TypeCode::Raw,
            2 => TypeCode::Null,
            3 => TypeCode::Bool,
            4 => TypeCode::Num,
            5 => TypeCode::Str,
            6 => TypeCode::Arr,
            7 => TypeCode::Obj,
            _ => unreachable!("3-bit type field"),
        }
    }
}

/// Number/bool subtype (spec §3). Meaningless (always 0) on other types.
pub mod subtype {
    pub const NUM_UINT: u8 = 0;
    pub const NUM_SINT: u8 = 1;
    pub const NUM_REAL: u8 = 2;
    pub const BOOL_FALSE: u8 = 0;
    pub const BOOL_TRUE: u8 = 1;
    pub const NONE: u8 = 0;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag(u64);

impl Tag {
    pub fn new(ty: TypeCode, subtype: u8, len: u64) -> Tag {
        debug_assert!((subtype as u64) < (1 << SUBTYPE_BITS));
        Tag((ty as u64) | ((subtype as u64) << SUBTYPE_SHIFT) | (len << LEN_SHIFT))
    }

    #[inline]
    pub fn type_code(self) -> TypeCode {
        TypeCode::from_bits(self.0 & TYPE_MASK)
    }

    #[inline]
    pub fn subtype(self) -> u8 {
        ((self.0 & SUBTYPE_MASK) >> SUBTYPE_SHIFT) as u8
    }

    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(self) -> usize {
        (self.0 >> LEN_SHIFT) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_fields() {
        let t = Tag::new(TypeCode::Obj, subtype::NONE, 12345);
        assert_eq!(t.type_code(), TypeCode::Obj);
        assert_eq!(t.len(), 12345);
    }

    #[test]
    fn subtype_distinguishes_number_kind() {
        let u = Tag::new(TypeCode::Num, subtype::NUM_UINT, 0);
        let r = Tag::new(TypeCode::Num, subtype::NUM_REAL, 0);
        assert_ne!(u.subtype(), r.subtype());
    }
}
