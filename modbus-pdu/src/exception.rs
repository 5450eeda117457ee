use tracing::debug;

use crate::{encoding::Encoder, function_code::FunctionCode, messages::ExceptionResponse, modbus_exception::ModbusException};

/// Builds `[function_code | 0x80, exception]`.
///
/// ```
/// use modbus_pdu::{exception_response, FunctionCode, ModbusException};
///
/// assert_eq!(exception_response(FunctionCode::from(3), ModbusException::from(2)), [0x83, 0x02]);
/// ```
pub fn exception_response(function_code: FunctionCode, exception: ModbusException) -> Vec<u8> {
    let mut encoder = Encoder::new();
    ExceptionResponse {
        function_code,
        exception,
    }
    .write_to(&mut encoder);
    debug!("Encoded exception {} for {}", exception, function_code);
    encoder.finish()
}
