use std::num::ParseIntError;

use crate::function_code::FunctionCode;

/// Errors raised while building PDUs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PduError {
    /// The element count is outside the range allowed for the function.
    #[error("invalid quantity {quantity} for {function_code}, allowed {min}..={max}")]
    InvalidQuantity {
        function_code: FunctionCode,
        quantity: usize,
        min: u16,
        max: u16,
    },

    /// A single coil write with a raw word other than 0x0000 or 0xFF00.
    #[error("illegal coil value {0:#06x}, expected 0x0000 or 0xFF00")]
    IllegalValue(u16),

    #[error("register value {value} does not fit the {} 16-bit field", signedness(.signed))]
    RegisterOutOfRange { value: i32, signed: bool },

    #[error("{flags} signedness flags given for {values} register values")]
    SignednessMismatch { values: usize, flags: usize },

    #[error("{0} has no response of this shape")]
    UnsupportedFunction(FunctionCode),

    #[error("expected at least {expected} bytes of request data, got {actual}")]
    MissingData { expected: usize, actual: usize },

    #[error("invalid binary string {input:?}")]
    InvalidBinaryString {
        input: String,
        #[source]
        source: ParseIntError,
    },
}

pub type PduResult<T> = Result<T, PduError>;

fn signedness(signed: &bool) -> &'static str {
    if *signed {
        "signed"
    } else {
        "unsigned"
    }
}
