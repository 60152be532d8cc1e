//! Signed 64-bit integers held as 8 big-endian two's-complement bytes.
//!
//! [`Int64`] either owns its bytes or views a slice of caller storage, and
//! converts to and from `f64`, hex strings and octet dumps. Conversion to
//! `f64` is exact up to 2^53 and saturates to an infinity beyond that.

pub mod int64;
pub mod shared;

pub use int64::errors::Int64Error;
pub use int64::source::Source;
pub use int64::storage::{Storage, StorageMut};
pub use int64::{Int64, MAX_SAFE, MIN_SAFE, WIDTH};
