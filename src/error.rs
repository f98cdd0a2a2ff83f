//! Unified error record for read and write operations.
//!
//! Corresponds to the `{code, message, offset}` error record of the
//! reference implementation's `yyjson_read_err` / `yyjson_write_err`.
//! Failures are values, never panics or process aborts (spec §7): every
//! fallible entry point in [`crate::parse`] and [`crate::serialize`]
//! returns `Result<_, Error>`.

use core::fmt;

/// Category of failure, shared by the reader and the writer.
///
/// Reader-only and writer-only variants coexist in one enum because both
/// sides report through the same [`Error`] record (spec §6 "Error
/// record").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// A required argument was missing or contradictory (e.g. a null
    /// buffer with nonzero length).
    InvalidParameter,
    /// Allocation failed. Always recoverable (spec §7).
    MemoryAllocation,
    /// Input was empty or contained only whitespace/comments.
    EmptyContent,
    /// Trailing bytes remained after a complete root value and
    /// `stop_when_done` was not set.
    UnexpectedContent,
    /// Input ended before a value, string, or container was complete.
    UnexpectedEnd,
    /// A structural/grammar rule was violated (bad container nesting,
    /// missing `,`/`:`, disallowed trailing comma, etc).
    JsonStructure,
    /// A `//` or `/* */` comment was malformed, or comments were found
    /// without `allow_comments`.
    InvalidComment,
    /// The numeric syntax was malformed, or overflowed to infinity
    /// without `allow_inf_and_nan`.
    InvalidNumber,
    /// A string contained an invalid escape, unpaired surrogate, raw
    /// control byte, or invalid UTF-8 without `allow_invalid_unicode`.
    InvalidString,
    /// `true`/`false`/`null`/`Infinity`/`NaN` literal text did not match.
    InvalidLiteral,
    /// The declared or computed depth exceeded the configured limit.
    ExceedDepth,
    /// Input began with a UTF-16/UTF-32 byte-order mark; only UTF-8 is
    /// accepted.
    InvalidEncoding,
    /// The value tree contained a tag the writer did not recognize.
    InvalidValueType,
    /// A double was NaN or infinite and `allow_inf_and_nan` was not set.
    NanOrInfinity,
    /// `read_file`/`write_file` failed to open the path.
    FileOpen,
    /// `read_file` failed partway through reading.
    FileRead,
    /// `write_file` failed partway through writing.
    FileWrite,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidParameter => "invalid parameter",
            ErrorCode::MemoryAllocation => "memory allocation failed",
            ErrorCode::EmptyContent => "input is empty",
            ErrorCode::UnexpectedContent => "unexpected content after document",
            ErrorCode::UnexpectedEnd => "unexpected end of input",
            ErrorCode::JsonStructure => "invalid JSON structure",
            ErrorCode::InvalidComment => "invalid comment",
            ErrorCode::InvalidNumber => "invalid number",
            ErrorCode::InvalidString => "invalid string",
            ErrorCode::InvalidLiteral => "invalid literal",
            ErrorCode::ExceedDepth => "nesting exceeds depth limit",
            ErrorCode::InvalidEncoding => "input has a UTF-16/UTF-32 byte-order mark; only UTF-8 is accepted",
            ErrorCode::InvalidValueType => "invalid value type",
            ErrorCode::NanOrInfinity => "number is NaN or Infinity",
            ErrorCode::FileOpen => "failed to open file",
            ErrorCode::FileRead => "failed to read file",
            ErrorCode::FileWrite => "failed to write file",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `{code, message, byte-offset}` failure record (spec §6/§7).
///
/// `offset` is a byte offset from the start of the input for user errors
/// (parse/serialize-time), and `0` for resource errors (allocation, file
/// I/O), which are unconditionally recoverable and carry no input
/// position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub code: ErrorCode,
    pub message: &'static str,
    pub offset: usize,
}

impl Error {
    pub(crate) fn new(code: ErrorCode, message: &'static str, offset: usize) -> Self {
        Error { code, message, offset }
    }

    pub(crate) fn at(code: ErrorCode, offset: usize) -> Self {
        Error { code, message: code.as_str(), offset }
    }

    pub(crate) fn resource(code: ErrorCode, message: &'static str) -> Self {
        Error { code, message, offset: 0 }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.offset != 0 {
            write!(f, "{} at byte offset {}: {}", self.code, self.offset, self.message)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for Error {}
