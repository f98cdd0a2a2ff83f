//! Whole-file read/write convenience wrappers (spec §6 `read_file` /
//! `write_file`).
//!
//! The reference implementation's `read_file` maps the file into the
//! document's own string pool so the parse allocates no separate input
//! copy; a safe `std::fs`-based port can't borrow from a memory-mapped
//! file without unsafe aliasing, so this reads the whole file into an
//! owned buffer first and hands it to [`crate::parse::read`], which
//! still only copies it once more on the way into the document (see
//! `DESIGN.md` for this simplification).

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{Error, ErrorCode};
use crate::parse;
use crate::serialize;
use crate::value::Doc;

/// Reads and parses an entire file as JSON.
pub fn read_file(path: impl AsRef<Path>, flags: u32) -> Result<Doc, Error> {
    let bytes = fs::read(path.as_ref()).map_err(|_| Error::resource(ErrorCode::FileOpen, "failed to open or read file"))?;
    parse::read(&bytes, flags)
}

/// Serializes `doc` and writes it to a file, truncating any existing
/// content.
pub fn write_file(path: impl AsRef<Path>, doc: &Doc, flags: u32) -> Result<(), Error> {
    let bytes = serialize::write(doc, flags)?;
    let mut f = fs::File::create(path.as_ref()).map_err(|_| Error::resource(ErrorCode::FileOpen, "failed to create file"))?;
    f.write_all(&bytes).map_err(|_| Error::resource(ErrorCode::FileWrite, "failed to write file"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");

        let doc = parse::read(br#"{"a":1,"b":[true,null]}"#, 0).unwrap();
        write_file(&path, &doc, 0).unwrap();

        let read_back = read_file(&path, 0).unwrap();
        assert!(read_back.root().equals(doc.root()));
    }

    #[test]
    fn missing_file_reports_file_open_error() {
        let err = read_file("/nonexistent/path/does-not-exist.json", 0).unwrap_err();
        assert_eq!(err.code, ErrorCode::FileOpen);
    }
}
