use crate::{encoding::*, error::PduResult};

/// Acknowledgement body shared by the four write functions.
///
/// `field` is the echoed value for single writes and the quantity for
/// multiple writes.
#[derive(PartialEq, Debug)]
pub struct WriteResponse {
    pub address: u16,
    pub field: u16,
}

impl Encodable for WriteResponse {
    fn encode(&self, encoder: &mut Encoder) -> PduResult<()> {
        encoder.write_u16(self.address);
        encoder.write_u16(self.field);
        Ok(())
    }
}

impl Decodable<Self> for WriteResponse {
    fn decode(decoder: &mut Decoder) -> DecodeResult<Self> {
        let address = decoder.read_u16()?;
        let field = decoder.read_u16()?;
        if decoder.remaining() != 0 {
            return Err(DecodeError::InvalidData("Trailing bytes after write acknowledgement"));
        }
        Ok(Self { address, field })
    }
}
