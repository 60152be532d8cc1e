use miette::{Diagnostic, ErrReport, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum Int64Error {
    #[error(transparent)]
    OutOfRange(#[from] OutOfRange),
    #[error(transparent)]
    UnsupportedInput(#[from] UnsupportedInput),
    #[error(transparent)]
    InvalidHex(#[from] InvalidHex),
    #[error(transparent)]
    InvalidHexDigit(#[from] InvalidHexDigit),
    #[error(transparent)]
    HexTooLong(#[from] HexTooLong),
    #[error(transparent)]
    ViewOutOfBounds(#[from] ViewOutOfBounds),
    #[error(transparent)]
    InvalidRadix(#[from] InvalidRadix),
}

impl Int64Error {
    pub fn into_err_report(self) -> ErrReport {
        self.into()
    }
}

impl Into<ErrReport> for Int64Error {
    fn into(self) -> ErrReport {
        match self {
            Int64Error::OutOfRange(e) => ErrReport::from(e),
            Int64Error::UnsupportedInput(e) => ErrReport::from(e),
            Int64Error::InvalidHex(e) => ErrReport::from(e),
            Int64Error::InvalidHexDigit(e) => ErrReport::from(e),
            Int64Error::HexTooLong(e) => ErrReport::from(e),
            Int64Error::ViewOutOfBounds(e) => ErrReport::from(e),
            Int64Error::InvalidRadix(e) => ErrReport::from(e),
        }
    }
}

#[derive(Error, Debug, Diagnostic, Clone)]
#[error("out-of-range")]
#[diagnostic(
    code(int64::out_of_range),
    help("[{}] {} does not fit in 64 bits", self.dbg_line, self.value),
)]
pub struct OutOfRange {
    pub dbg_line: String,
    pub value: f64,
}

#[derive(Error, Debug, Diagnostic, Clone)]
#[error("unsupported-input")]
#[diagnostic(
    code(int64::unsupported_input),
    help(
        "[{}] Expected a number or a 0x-prefixed hex string, got {:?}",
        self.dbg_line, self.src
    ),
)]
pub struct UnsupportedInput {
    pub dbg_line: String,
    #[source_code]
    pub src: String,
    #[label("Unsupported input")]
    pub position: SourceSpan,
}

#[derive(Error, Debug, Diagnostic, Clone)]
#[error("invalid-hex")]
#[diagnostic(
    code(int64::invalid_hex),
    help("[{}] Expected at least one hex digit", self.dbg_line),
)]
pub struct InvalidHex {
    pub dbg_line: String,
    #[source_code]
    pub src: String,
    #[label("No hex digits")]
    pub position: SourceSpan,
}

#[derive(Error, Debug, Diagnostic, Clone)]
#[error("invalid-hex-digit")]
#[diagnostic(
    code(int64::invalid_hex_digit),
    help("[{}] {:?} is not a hex digit", self.dbg_line, self.actual),
)]
pub struct InvalidHexDigit {
    pub dbg_line: String,
    pub actual: char,
    #[source_code]
    pub src: String,
    #[label("Invalid hex digit: {:?}", self.actual)]
    pub position: SourceSpan,
}

#[derive(Error, Debug, Diagnostic, Clone)]
#[error("hex-too-long")]
#[diagnostic(
    code(int64::hex_too_long),
    help(
        "[{}] Expected at most 16 hex digits, got {}",
        self.dbg_line, self.digits
    ),
)]
pub struct HexTooLong {
    pub dbg_line: String,
    pub digits: usize,
    #[source_code]
    pub src: String,
    #[label("Digits past the 64th bit")]
    pub position: SourceSpan,
}

#[derive(Error, Debug, Diagnostic, Clone)]
#[error("view-out-of-bounds")]
#[diagnostic(
    code(int64::view_out_of_bounds),
    help(
        "[{}] 8 bytes at offset {} do not fit in a region of {} bytes",
        self.dbg_line, self.offset, self.len
    ),
)]
pub struct ViewOutOfBounds {
    pub dbg_line: String,
    pub offset: usize,
    pub len: usize,
}

#[derive(Error, Debug, Diagnostic, Clone)]
#[error("invalid-radix")]
#[diagnostic(
    code(int64::invalid_radix),
    help("[{}] Radix must be between 2 and 36, got {}", self.dbg_line, self.radix),
)]
pub struct InvalidRadix {
    pub dbg_line: String,
    pub radix: u32,
}
