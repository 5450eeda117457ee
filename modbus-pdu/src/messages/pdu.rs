use crate::{consts::MAX_PDU_LENGTH, encoding::*, error::PduResult, function_code::FunctionCode};

/// A PDU split into its function code and raw payload.
#[derive(PartialEq, Debug)]
pub struct Pdu {
    pub function_code: FunctionCode,
    pub body: Vec<u8>,
}

impl Encodable for Pdu {
    fn encode(&self, encoder: &mut Encoder) -> PduResult<()> {
        encoder.write_u8(self.function_code.into());
        encoder.write_bytes(&self.body);
        Ok(())
    }
}

impl Decodable<Self> for Pdu {
    fn decode(decoder: &mut Decoder) -> DecodeResult<Self> {
        if decoder.remaining() > MAX_PDU_LENGTH {
            return Err(DecodeError::InvalidData("PDU too large"));
        }
        let function_code = decoder.read_u8()?.into();
        Ok(Self {
            function_code,
            body: decoder.read_remaining(),
        })
    }
}
