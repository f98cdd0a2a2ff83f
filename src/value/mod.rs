//! JSON value model (spec §3/§4.8, component C8): a bit-packed tag,
//! an immutable contiguous document produced by the reader, and a
//! mutable linked document for programmatic construction and editing.

pub mod doc;
pub mod mut_doc;
pub mod tag;

pub use doc::{Doc, Number, ValueRef};
pub use mut_doc::{MutDoc, MutValueRef};
pub use tag::TypeCode;
