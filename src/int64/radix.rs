use std::ops::RangeInclusive;

use super::errors::{Int64Error, InvalidRadix};
use crate::dbg_line;

pub const RADIX_RANGE: RangeInclusive<u32> = 2..=36;

/// Renders an integral `f64` in `radix`, spelling infinities out the way
/// numeric extraction reports saturated values.
pub fn format(value: f64, radix: u32) -> Result<String, Int64Error> {
    if !RADIX_RANGE.contains(&radix) {
        return Err(InvalidRadix {
            dbg_line: dbg_line!(),
            radix,
        }
        .into());
    }

    if value.is_infinite() {
        let text = if value < 0.0 { "-Infinity" } else { "Infinity" };
        return Ok(text.to_string());
    }

    let mut magnitude = value.abs().trunc() as u64;
    if magnitude == 0 {
        return Ok("0".to_string());
    }

    let radix = radix as u64;
    let mut digits = Vec::new();
    while magnitude > 0 {
        // Digit is below 36 so from_digit cannot fail.
        digits.extend(char::from_digit((magnitude % radix) as u32, radix as u32));
        magnitude /= radix;
    }
    if value < 0.0 {
        digits.push('-');
    }

    Ok(digits.into_iter().rev().collect())
}
