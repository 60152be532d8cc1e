use super::errors::{HexTooLong, Int64Error, InvalidHex, InvalidHexDigit};
use crate::dbg_line;

pub const HEX_PREFIX: &str = "0x";
const MAX_DIGITS: usize = 16;
const HALF_DIGITS: usize = 8;

/// Parses an optionally `0x`-prefixed hex string into its high and low
/// 32-bit halves. The rightmost eight digits are the low half, anything
/// before them the high half.
pub fn parse_halves(src: &str) -> Result<(u32, u32), Int64Error> {
    let prefix_len = if src.starts_with(HEX_PREFIX) {
        HEX_PREFIX.len()
    } else {
        0
    };
    let digits = &src[prefix_len..];

    if digits.is_empty() {
        log::debug!("rejecting hex string without digits: {src:?}");
        return Err(InvalidHex {
            dbg_line: dbg_line!(),
            src: src.to_string(),
            position: (0, src.len()).into(),
        }
        .into());
    }

    if let Some((index, actual)) = digits.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        log::debug!("rejecting hex string with invalid digit {actual:?}: {src:?}");
        return Err(InvalidHexDigit {
            dbg_line: dbg_line!(),
            actual,
            src: src.to_string(),
            position: (prefix_len + index, actual.len_utf8()).into(),
        }
        .into());
    }

    // Only ASCII digits remain, so byte lengths equal digit counts.
    if digits.len() > MAX_DIGITS {
        let excess = digits.len() - MAX_DIGITS;
        log::debug!("rejecting hex string with {} digits: {src:?}", digits.len());
        return Err(HexTooLong {
            dbg_line: dbg_line!(),
            digits: digits.len(),
            src: src.to_string(),
            position: (prefix_len, excess).into(),
        }
        .into());
    }

    let split = digits.len().saturating_sub(HALF_DIGITS);
    let (hi, lo) = digits.split_at(split);
    Ok((half(hi), half(lo)))
}

fn half(digits: &str) -> u32 {
    digits
        .chars()
        .filter_map(|c| c.to_digit(16))
        .fold(0, |acc, digit| (acc << 4) | digit)
}
