use tracing::debug;

use crate::{
    encoding::Decodable,
    function_code::FunctionCode,
    messages::WriteResponse,
};

/// Checks a write acknowledgement against the request that caused it.
///
/// `data` is the response payload without the function code, exactly
/// `address(2) · field(2)`. The field is read as `i16` when `signed` is set.
/// For single writes it must equal `value`, for multiple writes `quantity`.
/// Returns `false` for anything else, including read function codes and
/// payloads of the wrong length.
pub fn validate_response(
    data: &[u8],
    function_code: FunctionCode,
    address: u16,
    value: Option<i32>,
    quantity: Option<u16>,
    signed: bool,
) -> bool {
    let expected = match function_code {
        FunctionCode::WriteSingleCoil | FunctionCode::WriteSingleRegister => value,
        FunctionCode::WriteMultipleCoils | FunctionCode::WriteMultipleRegisters => quantity.map(i32::from),
        _ => {
            debug!("No write acknowledgement defined for {}", function_code);
            return false;
        }
    };

    let response = match WriteResponse::decode_from_bytes(data) {
        Ok(response) => response,
        Err(err) => {
            debug!("Malformed {} acknowledgement ({} bytes): {:?}", function_code, data.len(), err);
            return false;
        }
    };

    let field = if signed {
        i32::from(response.field as i16)
    } else {
        i32::from(response.field)
    };

    if response.address != address || Some(field) != expected {
        debug!(
            "{} acknowledgement mismatch: address {} (expected {}), field {} (expected {:?})",
            function_code, response.address, address, field, expected
        );
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_register() {
        let data = [0x00, 0x01, 0x00, 0x03];
        assert!(validate_response(&data, FunctionCode::WriteSingleRegister, 1, Some(3), None, true));
        assert!(!validate_response(&data, FunctionCode::WriteSingleRegister, 2, Some(3), None, true));
        assert!(!validate_response(&data, FunctionCode::WriteSingleRegister, 1, Some(4), None, true));
        assert!(!validate_response(&data, FunctionCode::WriteSingleRegister, 1, None, Some(3), true));
    }

    #[test]
    fn signedness() {
        let data = [0x00, 0x01, 0xFF, 0xFF];
        assert!(validate_response(&data, FunctionCode::WriteSingleRegister, 1, Some(-1), None, true));
        assert!(!validate_response(&data, FunctionCode::WriteSingleRegister, 1, Some(-1), None, false));
        assert!(validate_response(&data, FunctionCode::WriteSingleRegister, 1, Some(65535), None, false));
    }

    #[test]
    fn single_coil() {
        let data = [0x00, 0xAC, 0xFF, 0x00];
        assert!(validate_response(&data, FunctionCode::WriteSingleCoil, 0xAC, Some(0xFF00), None, false));
        assert!(!validate_response(&data, FunctionCode::WriteSingleCoil, 0xAC, Some(0), None, false));
    }

    #[test]
    fn multiple() {
        let data = [0x00, 0x13, 0x00, 0x0A];
        assert!(validate_response(&data, FunctionCode::WriteMultipleCoils, 0x13, None, Some(10), true));
        assert!(validate_response(&data, FunctionCode::WriteMultipleRegisters, 0x13, Some(99), Some(10), true));
        assert!(!validate_response(&data, FunctionCode::WriteMultipleRegisters, 0x13, Some(10), None, true));
        assert!(!validate_response(&data, FunctionCode::WriteMultipleCoils, 0x13, None, Some(9), true));
    }

    #[test]
    fn never_panics_on_bad_input() {
        assert!(!validate_response(&[], FunctionCode::WriteSingleRegister, 0, Some(0), None, true));
        assert!(!validate_response(&[0, 1, 0], FunctionCode::WriteSingleRegister, 1, Some(0), None, true));
        assert!(!validate_response(&[0, 1, 0, 0, 0], FunctionCode::WriteSingleRegister, 1, Some(0), None, true));
        assert!(!validate_response(&[0, 1, 0, 1], FunctionCode::ReadHoldingRegisters, 1, Some(1), Some(1), true));
        assert!(!validate_response(&[0, 1, 0, 1], FunctionCode::from(0x86), 1, Some(1), Some(1), true));
    }
}
