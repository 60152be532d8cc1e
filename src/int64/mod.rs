pub mod errors;
pub mod hex;
pub mod octets;
pub mod radix;
pub mod source;
pub mod storage;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use errors::{Int64Error, OutOfRange, UnsupportedInput, ViewOutOfBounds};
use source::Source;
use storage::{Storage, StorageMut};

use crate::dbg_line;

/// Number of bytes in the encoding.
pub const WIDTH: usize = 8;
/// Largest magnitude an `f64` holds with integer precision (2^53).
pub const MAX_SAFE: f64 = 9_007_199_254_740_992.0;
pub const MIN_SAFE: f64 = -MAX_SAFE;

/// Signed 64-bit integer stored as 8 big-endian two's-complement bytes.
///
/// `S` decides who owns the bytes. The default `[u8; 8]` owns them; a
/// borrowed slice turns the value into a view over `[offset, offset + 8)` of
/// caller storage. Views over `&[Cell<u8>]` alias: writes through the value
/// are visible to the owner immediately, and writes by the owner are visible
/// to the value.
#[derive(Clone, Copy)]
pub struct Int64<S = [u8; WIDTH]> {
    storage: S,
    offset: usize,
}

impl Default for Int64 {
    fn default() -> Self {
        Self::from_octets([0; WIDTH])
    }
}

impl Int64 {
    pub fn new<'a>(source: impl Into<Source<'a>>) -> Result<Self, Int64Error> {
        let mut value = Self::default();
        value.set(source)?;
        Ok(value)
    }

    pub fn from_hex(src: &str) -> Result<Self, Int64Error> {
        Self::new(Source::Hex(src))
    }

    pub fn from_number(value: f64) -> Result<Self, Int64Error> {
        Self::new(Source::Number(value))
    }

    /// Raw halves are the final bit pattern; no sign handling is applied.
    pub fn from_halves(hi: u32, lo: u32) -> Self {
        Self::from_octets(octets::from_halves(hi, lo))
    }

    pub fn from_octets(octets: [u8; WIDTH]) -> Self {
        Self {
            storage: octets,
            offset: 0,
        }
    }

    pub fn to_bytes(self) -> [u8; WIDTH] {
        self.storage
    }
}

impl<S: Storage> Int64<S> {
    /// Wraps caller storage without copying. The region must hold at least
    /// `offset + 8` bytes.
    pub fn view(storage: S, offset: usize) -> Result<Self, Int64Error> {
        let len = storage.len();
        if offset.checked_add(WIDTH).map_or(true, |end| end > len) {
            log::debug!("view of {WIDTH} bytes at offset {offset} exceeds region of {len} bytes");
            return Err(ViewOutOfBounds {
                dbg_line: dbg_line!(),
                offset,
                len,
            }
            .into());
        }
        Ok(Self { storage, offset })
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn into_inner(self) -> S {
        self.storage
    }

    pub fn octets(&self) -> [u8; WIDTH] {
        self.storage.read_octets(self.offset)
    }

    /// Copies the current bytes into a value that owns them.
    pub fn detach(&self) -> Int64 {
        Int64::from_octets(self.octets())
    }

    pub fn is_negative(&self) -> bool {
        octets::is_negative(&self.octets())
    }

    /// Signed value as an `f64`, saturating to an infinity of the matching
    /// sign once the magnitude reaches [`MAX_SAFE`].
    pub fn value_of(&self) -> f64 {
        self.to_number(false)
    }

    /// Like [`value_of`](Self::value_of), but with `allow_imprecise` the
    /// nearest `f64` is returned instead of an infinity.
    pub fn to_number(&self, allow_imprecise: bool) -> f64 {
        octets::to_number(&self.octets(), allow_imprecise)
    }

    pub fn to_i64(&self) -> i64 {
        i64::from_be_bytes(self.octets())
    }

    pub fn to_string_radix(&self, radix: u32) -> Result<String, Int64Error> {
        radix::format(self.value_of(), radix)
    }

    /// Exact hex dump of the 8 bytes, most significant first.
    pub fn to_octet_string(&self, separator: &str) -> String {
        self.octets()
            .iter()
            .map(|octet| format!("{octet:02x}"))
            .collect::<Vec<_>>()
            .join(separator)
    }

    pub fn inspect(&self) -> String {
        format!("[Int64 value:{self} octets:{}]", self.to_octet_string(" "))
    }

    /// Writes the 8 bytes into `target` at `offset`.
    pub fn copy_to(&self, target: &mut [u8], offset: usize) -> Result<(), Int64Error> {
        Int64::view(target, offset)?.write(self.octets());
        Ok(())
    }
}

impl<S: StorageMut> Int64<S> {
    /// Overwrites all 8 bytes from `source`. On error the stored bytes are
    /// left untouched.
    pub fn set<'a>(&mut self, source: impl Into<Source<'a>>) -> Result<(), Int64Error> {
        match source.into() {
            Source::Hex(src) => self.set_hex(src),
            Source::Number(value) => self.set_number(value),
            Source::Halves { hi, lo } => {
                self.set_halves(hi, lo);
                Ok(())
            }
        }
    }

    pub fn set_hex(&mut self, src: &str) -> Result<(), Int64Error> {
        let (hi, lo) = hex::parse_halves(src)?;
        self.set_halves(hi, lo);
        Ok(())
    }

    /// Fractions are truncated toward zero. Fails when the magnitude needs
    /// more than 64 bits.
    pub fn set_number(&mut self, value: f64) -> Result<(), Int64Error> {
        if value.is_nan() {
            let src = value.to_string();
            log::debug!("rejecting non-numeric value {src}");
            return Err(UnsupportedInput {
                dbg_line: dbg_line!(),
                position: (0, src.len()).into(),
                src,
            }
            .into());
        }

        let Some((hi, lo)) = octets::split_magnitude(value) else {
            log::debug!("rejecting out of range value {value}");
            return Err(OutOfRange {
                dbg_line: dbg_line!(),
                value,
            }
            .into());
        };

        let mut encoded = octets::from_halves(hi, lo);
        if value < 0.0 {
            octets::negate(&mut encoded);
        }
        self.write(encoded);
        Ok(())
    }

    pub fn set_halves(&mut self, hi: u32, lo: u32) {
        self.write(octets::from_halves(hi, lo));
    }

    pub fn set_i64(&mut self, value: i64) {
        self.write(value.to_be_bytes());
    }

    fn write(&mut self, octets: [u8; WIDTH]) {
        log::trace!("writing {octets:02x?} at offset {}", self.offset);
        self.storage.write_octets(self.offset, &octets);
    }
}

impl From<i64> for Int64 {
    fn from(value: i64) -> Self {
        Self::from_octets(value.to_be_bytes())
    }
}

impl<S: Storage> From<&Int64<S>> for i64 {
    fn from(value: &Int64<S>) -> Self {
        value.to_i64()
    }
}

impl TryFrom<f64> for Int64 {
    type Error = Int64Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_number(value)
    }
}

impl FromStr for Int64 {
    type Err = Int64Error;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::from_hex(src)
    }
}

impl<S: Storage> fmt::Display for Int64<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.to_string_radix(10).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl<S: Storage> fmt::Debug for Int64<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspect())
    }
}

impl<S: Storage, T: Storage> PartialEq<Int64<T>> for Int64<S> {
    fn eq(&self, other: &Int64<T>) -> bool {
        self.octets() == other.octets()
    }
}

impl<S: Storage> Eq for Int64<S> {}

impl<S: Storage, T: Storage> PartialOrd<Int64<T>> for Int64<S> {
    fn partial_cmp(&self, other: &Int64<T>) -> Option<Ordering> {
        Some(self.to_i64().cmp(&other.to_i64()))
    }
}

impl<S: Storage> Ord for Int64<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_i64().cmp(&other.to_i64())
    }
}

impl<S: Storage> Hash for Int64<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.octets().hash(state);
    }
}
