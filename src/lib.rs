//! A JSON reader/writer built around an immutable, contiguous value
//! document and a mutable linked document for programmatic editing.

pub mod alloc;
pub mod chars;
pub mod config;
pub mod error;
pub mod file;
pub mod number;
pub mod parse;
pub mod serialize;
pub mod strbuf;
pub mod value;

pub use config::{read_flag, write_flag};
pub use error::{Error, ErrorCode};
pub use value::{Doc, MutDoc, MutValueRef, Number, TypeCode, ValueRef};

/// Parses a complete JSON document from `bytes` (spec §6 `read`).
pub fn read(bytes: &[u8], flags: u32) -> Result<Doc, Error> {
    parse::read(bytes, flags)
}

/// Parses a JSON number in isolation (spec §6 `read_number`).
pub fn read_number(bytes: &[u8], flags: u32) -> Result<number::NumberResult, Error> {
    number::read_number(bytes, 0, flags)
}

/// Serializes a document to a JSON byte string (spec §6 `write`).
pub fn write(doc: &Doc, flags: u32) -> Result<Vec<u8>, Error> {
    serialize::write(doc, flags)
}

/// Reads a JSON document from a file (spec §6 `read_file`).
pub fn read_file(path: impl AsRef<std::path::Path>, flags: u32) -> Result<Doc, Error> {
    file::read_file(path, flags)
}

/// Writes a document to a file as JSON (spec §6 `write_file`).
pub fn write_file(path: impl AsRef<std::path::Path>, doc: &Doc, flags: u32) -> Result<(), Error> {
    file::write_file(path, doc, flags)
}
