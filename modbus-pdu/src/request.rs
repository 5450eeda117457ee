//! Request PDUs for the standard read and write functions.
//!
//! Every builder returns the complete PDU, function code first. Nothing is
//! written to the output when a parameter is out of range.

use std::borrow::Cow;

use crate::{encoding::Encoder, error::PduResult, function_code::FunctionCode, messages::*};

fn read(function_code: FunctionCode, address: u16, quantity: u16) -> PduResult<Vec<u8>> {
    Encoder::encode_pdu(
        function_code,
        &ReadRequest {
            function_code,
            address,
            quantity,
        },
    )
}

/// Read 1 to 2000 coils starting at `address`.
pub fn read_coils(address: u16, quantity: u16) -> PduResult<Vec<u8>> {
    read(FunctionCode::ReadCoils, address, quantity)
}

/// Read 1 to 2000 discrete inputs starting at `address`.
pub fn read_discrete_inputs(address: u16, quantity: u16) -> PduResult<Vec<u8>> {
    read(FunctionCode::ReadDiscreteInputs, address, quantity)
}

/// Read 1 to 125 holding registers starting at `address`.
pub fn read_holding_registers(address: u16, quantity: u16) -> PduResult<Vec<u8>> {
    read(FunctionCode::ReadHoldingRegisters, address, quantity)
}

/// Read 1 to 125 input registers starting at `address`.
pub fn read_input_registers(address: u16, quantity: u16) -> PduResult<Vec<u8>> {
    read(FunctionCode::ReadInputRegisters, address, quantity)
}

/// Switch a single coil.
///
/// `value` is either a `bool` or a raw wire word, which must be `0x0000`,
/// `0xFF00` or `1` (same as `true`).
///
/// ```
/// use modbus_pdu::request::write_single_coil;
///
/// assert_eq!(write_single_coil(0x00AC, true).unwrap(), [0x05, 0x00, 0xAC, 0xFF, 0x00]);
/// assert_eq!(write_single_coil(0x00AC, true), write_single_coil(0x00AC, 0xFF00u16));
/// assert!(write_single_coil(0x00AC, 5u16).is_err());
/// ```
pub fn write_single_coil(address: u16, value: impl Into<CoilValue>) -> PduResult<Vec<u8>> {
    Encoder::encode_pdu(
        FunctionCode::WriteSingleCoil,
        &WriteSingleCoilRequest {
            address,
            value: value.into(),
        },
    )
}

/// Write one register, encoded as `i16` when `signed` and as `u16` otherwise.
pub fn write_single_register(address: u16, value: i32, signed: bool) -> PduResult<Vec<u8>> {
    Encoder::encode_pdu(
        FunctionCode::WriteSingleRegister,
        &WriteSingleRegisterRequest { address, value, signed },
    )
}

/// Write 1 to 1968 coils. The coil data uses the packing described in [`crate::bits`].
pub fn write_multiple_coils(address: u16, values: &[bool]) -> PduResult<Vec<u8>> {
    Encoder::encode_pdu(
        FunctionCode::WriteMultipleCoils,
        &WriteMultipleCoilsRequest {
            address,
            values: Cow::Borrowed(values),
        },
    )
}

/// Write 1 to 123 registers, all encoded with the same signedness.
pub fn write_multiple_registers(address: u16, values: &[i32], signed: bool) -> PduResult<Vec<u8>> {
    Encoder::encode_pdu(
        FunctionCode::WriteMultipleRegisters,
        &WriteMultipleRegistersRequest {
            address,
            values: Cow::Borrowed(values),
            signed,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PduError;

    fn invalid(function_code: FunctionCode, quantity: usize, max: u16) -> PduError {
        PduError::InvalidQuantity {
            function_code,
            quantity,
            min: 1,
            max,
        }
    }

    #[test]
    fn read_requests() {
        assert_eq!(read_coils(0x0013, 0x0013).unwrap(), vec![0x01, 0x00, 0x13, 0x00, 0x13]);
        assert_eq!(read_discrete_inputs(0x00C4, 22).unwrap(), vec![0x02, 0x00, 0xC4, 0x00, 0x16]);
        assert_eq!(read_holding_registers(0x006B, 3).unwrap(), vec![0x03, 0x00, 0x6B, 0x00, 0x03]);
        assert_eq!(read_input_registers(0x0008, 1).unwrap(), vec![0x04, 0x00, 0x08, 0x00, 0x01]);
    }

    #[test]
    fn read_quantity_boundaries() {
        assert!(read_coils(0, 1).is_ok());
        assert_eq!(read_coils(0, 2000).unwrap()[3..], [0x07, 0xD0]);
        assert_eq!(read_coils(0, 0), Err(invalid(FunctionCode::ReadCoils, 0, 2000)));
        assert_eq!(read_coils(0, 2001), Err(invalid(FunctionCode::ReadCoils, 2001, 2000)));

        assert!(read_discrete_inputs(0, 2000).is_ok());
        assert_eq!(
            read_discrete_inputs(0, 2001),
            Err(invalid(FunctionCode::ReadDiscreteInputs, 2001, 2000))
        );

        assert!(read_holding_registers(0, 125).is_ok());
        assert_eq!(
            read_holding_registers(0, 126),
            Err(invalid(FunctionCode::ReadHoldingRegisters, 126, 125))
        );
        assert_eq!(
            read_holding_registers(0, 0),
            Err(invalid(FunctionCode::ReadHoldingRegisters, 0, 125))
        );

        assert!(read_input_registers(0, 125).is_ok());
        assert_eq!(
            read_input_registers(0, 126),
            Err(invalid(FunctionCode::ReadInputRegisters, 126, 125))
        );
    }

    #[test]
    fn single_coil() {
        assert_eq!(write_single_coil(0x00AC, true).unwrap(), vec![0x05, 0x00, 0xAC, 0xFF, 0x00]);
        assert_eq!(write_single_coil(1, true), write_single_coil(1, 0xFF00u16));
        assert_eq!(write_single_coil(1, false), write_single_coil(1, 0x0000u16));
        assert_eq!(write_single_coil(1, false).unwrap(), vec![0x05, 0x00, 0x01, 0x00, 0x00]);
        assert_eq!(write_single_coil(1, 5u16), Err(PduError::IllegalValue(5)));
        assert_eq!(write_single_coil(0, 1u16), write_single_coil(0, true));
        assert_eq!(write_single_coil(0, 1u16).unwrap(), vec![0x05, 0x00, 0x00, 0xFF, 0x00]);
        assert_eq!(write_single_coil(1, 0xFFFFu16), Err(PduError::IllegalValue(0xFFFF)));
    }

    #[test]
    fn single_register() {
        assert_eq!(write_single_register(0x0001, 0x0003, true).unwrap(), vec![0x06, 0x00, 0x01, 0x00, 0x03]);
        assert_eq!(write_single_register(2, -1, true).unwrap(), vec![0x06, 0x00, 0x02, 0xFF, 0xFF]);
        assert_eq!(write_single_register(2, 65535, false).unwrap(), vec![0x06, 0x00, 0x02, 0xFF, 0xFF]);
        assert_eq!(
            write_single_register(2, 65535, true),
            Err(PduError::RegisterOutOfRange { value: 65535, signed: true })
        );
        assert_eq!(
            write_single_register(2, -1, false),
            Err(PduError::RegisterOutOfRange { value: -1, signed: false })
        );
    }

    #[test]
    fn multiple_coils() {
        let values = [true, false, true, true, false, false, true, true, true, false];
        assert_eq!(
            write_multiple_coils(0x0013, &values).unwrap(),
            vec![0x0F, 0x00, 0x13, 0x00, 0x0A, 0x02, 0b1011_0011, 0b10]
        );

        let pdu = write_multiple_coils(0, &[true; 1968]).unwrap();
        assert_eq!(pdu[3..6], [0x07, 0xB0, 246]);
        assert_eq!(pdu.len(), 6 + 246);

        assert_eq!(
            write_multiple_coils(0, &[true; 1969]),
            Err(invalid(FunctionCode::WriteMultipleCoils, 1969, 1968))
        );
        assert_eq!(
            write_multiple_coils(0, &[]),
            Err(invalid(FunctionCode::WriteMultipleCoils, 0, 1968))
        );
    }

    #[test]
    fn multiple_registers() {
        assert_eq!(
            write_multiple_registers(0x0001, &[0x000A, 0x0102], false).unwrap(),
            vec![0x10, 0x00, 0x01, 0x00, 0x02, 0x04, 0x00, 0x0A, 0x01, 0x02]
        );
        assert_eq!(
            write_multiple_registers(0, &[-2], true).unwrap(),
            vec![0x10, 0x00, 0x00, 0x00, 0x01, 0x02, 0xFF, 0xFE]
        );

        assert!(write_multiple_registers(0, &[0; 123], true).is_ok());
        assert_eq!(
            write_multiple_registers(0, &[0; 124], true),
            Err(invalid(FunctionCode::WriteMultipleRegisters, 124, 123))
        );
        assert_eq!(
            write_multiple_registers(0, &[], true),
            Err(invalid(FunctionCode::WriteMultipleRegisters, 0, 123))
        );
        assert_eq!(
            write_multiple_registers(0, &[1, 70000], false),
            Err(PduError::RegisterOutOfRange { value: 70000, signed: false })
        );
    }
}
