use super::errors::{Int64Error, UnsupportedInput};
use super::hex::HEX_PREFIX;
use crate::dbg_line;

/// Input shapes an [`Int64`](super::Int64) can be built from or set to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Source<'a> {
    /// Hex digits, optionally `0x`-prefixed, taken as the final bit pattern.
    Hex(&'a str),
    /// Native number, sign applied through two's complement.
    Number(f64),
    /// Raw 32-bit halves, taken as the final bit pattern.
    Halves { hi: u32, lo: u32 },
}

impl<'a> Source<'a> {
    /// Classifies free-form text: `0x`-prefixed input is hex, decimal
    /// notation is a number. Anything else is unsupported.
    pub fn detect(arg: &'a str) -> Result<Self, Int64Error> {
        if arg.starts_with(HEX_PREFIX) {
            return Ok(Source::Hex(arg));
        }

        let decimal = !arg.is_empty()
            && arg
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E'));
        match arg.parse::<f64>() {
            Ok(value) if decimal => Ok(Source::Number(value)),
            _ => {
                log::debug!("unsupported input: {arg:?}");
                Err(UnsupportedInput {
                    dbg_line: dbg_line!(),
                    src: arg.to_string(),
                    position: (0, arg.len()).into(),
                }
                .into())
            }
        }
    }
}

/// Strings always convert to [`Source::Hex`], so `"42"` is 0x42. Use
/// [`Source::detect`] to read decimal text as a number.
impl<'a> From<&'a str> for Source<'a> {
    fn from(value: &'a str) -> Self {
        Source::Hex(value)
    }
}

impl From<f64> for Source<'_> {
    fn from(value: f64) -> Self {
        Source::Number(value)
    }
}

impl From<(u32, u32)> for Source<'_> {
    fn from((hi, lo): (u32, u32)) -> Self {
        Source::Halves { hi, lo }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Source;
    use crate::Int64Error;

    #[test]
    fn detect() {
        assert_eq!(Source::detect("0xff").unwrap(), Source::Hex("0xff"));
        assert_eq!(Source::detect("42").unwrap(), Source::Number(42.0));
        assert_eq!(Source::detect("-1").unwrap(), Source::Number(-1.0));
        assert_eq!(Source::detect("1e3").unwrap(), Source::Number(1000.0));
    }

    #[test]
    fn detect_unsupported() {
        for arg in ["", "ff", "NaN", "inf", "true", "1-"] {
            assert!(
                matches!(Source::detect(arg), Err(Int64Error::UnsupportedInput(_))),
                "{arg:?} should be unsupported"
            );
        }
    }

    #[test]
    fn conversions() {
        assert_eq!(Source::from("2a"), Source::Hex("2a"));
        assert_eq!(Source::from(-3.0), Source::Number(-3.0));
        assert_eq!(Source::from((1, 2)), Source::Halves { hi: 1, lo: 2 });
    }

    #[test]
    fn strings_are_hex_unless_detected() {
        assert_eq!(crate::Int64::new("42").unwrap().to_i64(), 0x42);
        assert_eq!(
            crate::Int64::new(Source::detect("42").unwrap()).unwrap().to_i64(),
            42
        );
    }
}
