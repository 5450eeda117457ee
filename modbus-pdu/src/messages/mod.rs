mod exception_pdu;
mod pdu;
mod read_bits_response;
mod read_registers_response;
mod read_request;
mod write_multiple_coils_request;
mod write_multiple_registers_request;
mod write_response;
mod write_single_coil_request;
mod write_single_register_request;

pub use exception_pdu::*;
pub use pdu::*;
pub use read_bits_response::*;
pub use read_registers_response::*;
pub use read_request::*;
pub use write_multiple_coils_request::*;
pub use write_multiple_registers_request::*;
pub use write_response::*;
pub use write_single_coil_request::*;
pub use write_single_register_request::*;

use crate::{
    error::{PduError, PduResult},
    function_code::FunctionCode,
};

/// Checks `quantity` against the function's limit and narrows it to the wire width.
fn check_quantity(function_code: FunctionCode, quantity: usize) -> PduResult<u16> {
    let (min, max) = function_code
        .quantity_limit()
        .ok_or(PduError::UnsupportedFunction(function_code))?;
    if quantity < min as usize || quantity > max as usize {
        return Err(PduError::InvalidQuantity {
            function_code,
            quantity,
            min,
            max,
        });
    }
    Ok(quantity as u16)
}
