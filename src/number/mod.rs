//! JSON number reading and writing (spec §4.4/§4.5, components C4/C5).

mod bigint;
mod tables;

pub mod read;
pub mod write;

pub use read::{read_number, NumberResult, NumberValue};
pub use write::{format_f64, write_f64, write_i64, write_u64};
