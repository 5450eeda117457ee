use crate::{
    encoding::*,
    error::PduResult,
    function_code::{FunctionCode, ERROR_BIAS},
    modbus_exception::ModbusException,
};

/// `[function_code | 0x80, exception]`. `function_code` holds the code of the
/// failed request, without the error bit.
#[derive(PartialEq, Debug)]
pub struct ExceptionResponse {
    pub function_code: FunctionCode,
    pub exception: ModbusException,
}

impl ExceptionResponse {
    pub(crate) fn write_to(&self, encoder: &mut Encoder) {
        encoder.write_u8(self.function_code.as_exception().into());
        encoder.write_u8(self.exception.into());
    }
}

impl Encodable for ExceptionResponse {
    fn encode(&self, encoder: &mut Encoder) -> PduResult<()> {
        self.write_to(encoder);
        Ok(())
    }
}

impl Decodable<Self> for ExceptionResponse {
    fn decode(decoder: &mut Decoder) -> DecodeResult<Self> {
        let code = decoder.read_u8()?;
        if !FunctionCode::from(code).is_exception() {
            return Err(DecodeError::InvalidData("Error bit not set"));
        }
        let exception = decoder.read_u8()?.into();
        if decoder.remaining() > 0 {
            return Err(DecodeError::InvalidData("Trailing bytes after exception code"));
        }
        Ok(Self {
            function_code: (code & !ERROR_BIAS).into(),
            exception,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode() {
        assert_eq!(
            ExceptionResponse::decode_from_bytes(&[0x83, 0x02]),
            Ok(ExceptionResponse {
                function_code: FunctionCode::ReadHoldingRegisters,
                exception: ModbusException::IllegalDataAddress,
            })
        );
        assert_eq!(
            ExceptionResponse::decode_from_bytes(&[0x03, 0x02]),
            Err(DecodeError::InvalidData("Error bit not set"))
        );
        assert_eq!(ExceptionResponse::decode_from_bytes(&[0x81]), Err(DecodeError::MissingData));
        assert!(ExceptionResponse::decode_from_bytes(&[0x81, 0x01, 0x00]).is_err());
    }

    #[test]
    fn encode() {
        let response = ExceptionResponse {
            function_code: FunctionCode::WriteSingleCoil,
            exception: ModbusException::ServerDeviceFailure,
        };
        assert_eq!(response.encode_to_bytes(), Ok(vec![0x85, 0x04]));
    }
}
