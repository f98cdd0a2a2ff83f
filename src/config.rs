//! Compile-time and default configuration constants.
//!
//! Mirrors the teacher's `config.rs`: plain `pub const` values rather than
//! a `bitflags`-crate dependency, since the flag sets are small, fixed,
//! and never combined with user-extensible bits.

/// Default maximum container nesting depth (spec §4.6 "Depth"). `0` means
/// unlimited; callers needing a bound pass a custom limit to
/// [`crate::parse::Options`].
pub const DEFAULT_MAX_DEPTH: usize = 4096;

/// Padding required past the end of an in-situ input buffer (spec §4.6,
/// §6). The parser relies on 4 trailing zero bytes so 4-byte literal
/// matches (`true`, `null`, …) and the string scanner never read past the
/// caller-supplied buffer.
pub const PADDING_SIZE: usize = 4;

/// Reader option flags (spec §4.6). A `u32` bitmask, mirroring the
/// reference implementation's `yyjson_read_flag`.
pub mod read_flag {
    /// Copy the input before parsing (the default). Unset to parse
    /// in-situ via [`crate::parse::read_insitu`].
    pub const NONE: u32 = 0;
    /// Tolerate one trailing comma before `]`/`}`.
    pub const ALLOW_TRAILING_COMMAS: u32 = 1 << 0;
    /// Tolerate `//line` and `/* block */` comments between tokens.
    pub const ALLOW_COMMENTS: u32 = 1 << 1;
    /// Accept `Infinity`/`Inf`/`NaN` literals (any case, optional sign),
    /// and let numeric overflow land on an infinity rather than erroring.
    pub const ALLOW_INF_AND_NAN: u32 = 1 << 2;
    /// Accept malformed UTF-8 inside strings; invalid bytes decode (and
    /// re-encode on write) as U+FFFD.
    pub const ALLOW_INVALID_UNICODE: u32 = 1 << 3;
    /// Keep every number as an unparsed raw slice.
    pub const NUMBER_AS_RAW: u32 = 1 << 4;
    /// Keep only numbers that would overflow `i64`/`u64` or parse to an
    /// infinity as raw slices; everything else converts normally.
    pub const BIGNUM_AS_RAW: u32 = 1 << 5;
    /// Do not check for trailing content after a complete root value.
    pub const STOP_WHEN_DONE: u32 = 1 << 6;
    /// Use the faster, up-to-2-ulp real conversion instead of the
    /// shortest-round-trip exact path.
    pub const FAST_FP: u32 = 1 << 7;
}

/// Writer option flags (spec §6 "write flags").
pub mod write_flag {
    pub const NONE: u32 = 0;
    /// Indent containers with newlines (2 spaces per level).
    pub const PRETTY: u32 = 1 << 0;
    /// Escape `/` as `\/`.
    pub const ESCAPE_SLASHES: u32 = 1 << 1;
    /// Escape all non-ASCII characters as `\uXXXX` (surrogate pairs for
    /// non-BMP code points) instead of emitting raw UTF-8.
    pub const ESCAPE_UNICODE: u32 = 1 << 2;
    /// Permit writing `Infinity`/`-Infinity`/`NaN`; otherwise doubles that
    /// are NaN or infinite fail to serialize.
    pub const ALLOW_INF_AND_NAN: u32 = 1 << 3;
    /// Permit writing a string containing invalid UTF-8 by substituting
    /// U+FFFD for malformed byte sequences.
    pub const ALLOW_INVALID_UNICODE: u32 = 1 << 4;
}

/// Indentation width used in pretty-printed output.
pub const PRETTY_INDENT: usize = 2;
