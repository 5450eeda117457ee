//! Response PDUs as a server sends them.

use std::borrow::Cow;

use crate::{
    encoding::Encoder,
    error::{PduError, PduResult},
    function_code::FunctionCode,
    messages::*,
};

/// Input for [`build_response`], one variant per response layout.
#[derive(Debug, Clone)]
pub enum ResponseData<'a> {
    /// Coil or discrete input values.
    Bits(&'a [bool]),
    /// Register values with their signedness.
    Registers { values: &'a [i32], signs: RegisterSigns },
    /// Echo of a single write: the request's address and value bytes.
    WriteSingle { address: u16, request_data: &'a [u8] },
    /// Acknowledgement of a multiple write.
    WriteMultiple { address: u16, quantity: u16 },
}

/// Builds the response for `function_code` from the matching [`ResponseData`].
///
/// Fails with [`PduError::UnsupportedFunction`] when the function code does
/// not use the given layout.
pub fn build_response(function_code: FunctionCode, data: ResponseData<'_>) -> PduResult<Vec<u8>> {
    match data {
        ResponseData::Bits(values) => read_bits_response(function_code, values),
        ResponseData::Registers { values, signs } => read_registers_response(function_code, values, signs),
        ResponseData::WriteSingle { address, request_data } => write_single_response(function_code, address, request_data),
        ResponseData::WriteMultiple { address, quantity } => write_multiple_response(function_code, address, quantity),
    }
}

/// `code · byte count · packed bits` for ReadCoils and ReadDiscreteInputs.
pub fn read_bits_response(function_code: FunctionCode, values: &[bool]) -> PduResult<Vec<u8>> {
    Encoder::encode_pdu(
        function_code,
        &ReadBitsResponse {
            function_code,
            values: Cow::Borrowed(values),
        },
    )
}

/// `code · byte count · registers` for ReadHoldingRegisters and ReadInputRegisters.
///
/// `signs` is either one flag for all values or one flag per value.
pub fn read_registers_response(function_code: FunctionCode, values: &[i32], signs: impl Into<RegisterSigns>) -> PduResult<Vec<u8>> {
    Encoder::encode_pdu(
        function_code,
        &ReadRegistersResponse {
            function_code,
            values: Cow::Borrowed(values),
            signs: signs.into(),
        },
    )
}

/// `code · address · request_data[0..2]` for WriteSingleCoil and WriteSingleRegister.
pub fn write_single_response(function_code: FunctionCode, address: u16, request_data: &[u8]) -> PduResult<Vec<u8>> {
    match function_code {
        FunctionCode::WriteSingleCoil | FunctionCode::WriteSingleRegister => {}
        other => return Err(PduError::UnsupportedFunction(other)),
    }
    let [high, low, ..] = request_data else {
        return Err(PduError::MissingData {
            expected: 2,
            actual: request_data.len(),
        });
    };
    Encoder::encode_pdu(
        function_code,
        &WriteResponse {
            address,
            field: u16::from_be_bytes([*high, *low]),
        },
    )
}

/// `code · address · quantity` for WriteMultipleCoils and WriteMultipleRegisters.
pub fn write_multiple_response(function_code: FunctionCode, address: u16, quantity: u16) -> PduResult<Vec<u8>> {
    match function_code {
        FunctionCode::WriteMultipleCoils | FunctionCode::WriteMultipleRegisters => {}
        other => return Err(PduError::UnsupportedFunction(other)),
    }
    Encoder::encode_pdu(function_code, &WriteResponse { address, field: quantity })
}
