use super::{MAX_SAFE, WIDTH};

pub const TWO_POW_32: f64 = 4_294_967_296.0;

/// Lays out two 32-bit halves big-endian: `hi` in bytes 0..4, `lo` in 4..8.
pub fn from_halves(hi: u32, lo: u32) -> [u8; WIDTH] {
    let mut octets = [0; WIDTH];
    octets[..4].copy_from_slice(&hi.to_be_bytes());
    octets[4..].copy_from_slice(&lo.to_be_bytes());
    octets
}

/// Two's-complement negation in place: complement every byte and add one,
/// carrying from the least significant byte upwards.
pub fn negate(octets: &mut [u8; WIDTH]) {
    let mut carry = 1u16;
    for octet in octets.iter_mut().rev() {
        let complemented = (*octet ^ 0xff) as u16 + carry;
        *octet = (complemented & 0xff) as u8;
        carry = complemented >> 8;
    }
}

pub fn is_negative(octets: &[u8; WIDTH]) -> bool {
    octets[0] & 0x80 != 0
}

/// Splits the truncated magnitude of `value` into its high and low 32-bit
/// halves. Returns `None` when the high half does not fit in 32 bits.
pub fn split_magnitude(value: f64) -> Option<(u32, u32)> {
    let magnitude = value.abs().trunc();
    let hi = (magnitude / TWO_POW_32).floor();
    if hi >= TWO_POW_32 {
        return None;
    }
    let lo = magnitude % TWO_POW_32;
    Some((hi as u32, lo as u32))
}

/// Absolute value of the encoded integer as an `f64`, decoding negative
/// values on the fly without touching `octets`.
pub fn magnitude(octets: &[u8; WIDTH]) -> f64 {
    let negative = is_negative(octets);
    let mut sum = 0.0;
    let mut scale = 1.0;
    let mut carry = 1u16;
    for &octet in octets.iter().rev() {
        let mut digit = octet as u16;
        if negative {
            digit = (digit ^ 0xff) + carry;
            carry = digit >> 8;
            digit &= 0xff;
        }
        sum += digit as f64 * scale;
        scale *= 256.0;
    }
    sum
}

/// Signed `f64` for `octets`. Magnitudes of `MAX_SAFE` and up saturate to an
/// infinity of the same sign unless `allow_imprecise` is set, in which case
/// the encoded integer is rounded to the nearest `f64`.
pub fn to_number(octets: &[u8; WIDTH], allow_imprecise: bool) -> f64 {
    if allow_imprecise {
        return i64::from_be_bytes(*octets) as f64;
    }
    let negative = is_negative(octets);
    let magnitude = magnitude(octets);
    if magnitude >= MAX_SAFE {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn halves_layout() {
        assert_eq!(
            from_halves(0x01020304, 0x05060708),
            [1, 2, 3, 4, 5, 6, 7, 8]
        );
    }

    #[test]
    fn negate_is_self_inverse() {
        for value in [0i64, 1, -1, 42, 255, 256, -65536, i64::MAX, i64::MIN + 1] {
            let mut octets = value.to_be_bytes();
            negate(&mut octets);
            assert_eq!(octets, value.wrapping_neg().to_be_bytes());
            negate(&mut octets);
            assert_eq!(octets, value.to_be_bytes());
        }
    }

    #[test]
    fn negate_min_wraps() {
        let mut octets = i64::MIN.to_be_bytes();
        negate(&mut octets);
        assert_eq!(octets, i64::MIN.to_be_bytes());
    }

    #[test]
    fn split() {
        assert_eq!(split_magnitude(0.0), Some((0, 0)));
        assert_eq!(split_magnitude(-1.0), Some((0, 1)));
        assert_eq!(split_magnitude(TWO_POW_32 + 5.0), Some((1, 5)));
        assert_eq!(split_magnitude(12.75), Some((0, 12)));
        assert_eq!(
            split_magnitude(18_446_744_073_709_549_568.0),
            Some((u32::MAX, 0xfffff800))
        );
        assert_eq!(split_magnitude(18_446_744_073_709_551_616.0), None);
        assert_eq!(split_magnitude(f64::INFINITY), None);
    }

    #[test]
    fn decode_magnitude() {
        assert_eq!(magnitude(&42i64.to_be_bytes()), 42.0);
        assert_eq!(magnitude(&(-42i64).to_be_bytes()), 42.0);
        assert_eq!(magnitude(&i64::MIN.to_be_bytes()), 9_223_372_036_854_775_808.0);
    }

    #[test]
    fn saturates_at_max_safe() {
        let edge = from_halves(0x00200000, 0);
        assert_eq!(to_number(&edge, false), f64::INFINITY);
        assert_eq!(to_number(&edge, true), MAX_SAFE);

        let below = (MAX_SAFE as i64 - 1).to_be_bytes();
        assert_eq!(to_number(&below, false), MAX_SAFE - 1.0);

        let negative = (-(MAX_SAFE as i64)).to_be_bytes();
        assert_eq!(to_number(&negative, false), f64::NEG_INFINITY);
        assert_eq!(to_number(&negative, true), -MAX_SAFE);
    }

    #[test]
    fn imprecise_rounds_to_nearest() {
        for value in [
            898_744_900_318_932_671i64,
            -898_744_900_318_932_671,
            (1 << 53) + 1,
            (1 << 54) + 3,
            i64::MAX,
            i64::MIN,
        ] {
            assert_eq!(to_number(&value.to_be_bytes(), true), value as f64);
        }
        assert_eq!(
            to_number(&898_744_900_318_932_671i64.to_be_bytes(), true),
            898_744_900_318_932_700.0
        );
    }
}
