use std::borrow::Cow;

use crate::{bits, encoding::*, error::PduResult, function_code::FunctionCode};

use super::check_quantity;

#[derive(PartialEq, Debug)]
pub struct WriteMultipleCoilsRequest<'a> {
    pub address: u16,
    pub values: Cow<'a, [bool]>,
}

impl<'a> Encodable for WriteMultipleCoilsRequest<'a> {
    fn encode(&self, encoder: &mut Encoder) -> PduResult<()> {
        let quantity = check_quantity(FunctionCode::WriteMultipleCoils, self.values.len())?;
        // At most 0x07B0 coils, so the byte count fits.
        let byte_length = bits::packed_len(self.values.len()) as u8;
        encoder.write_u16(self.address);
        encoder.write_u16(quantity);
        encoder.write_u8(byte_length);
        encoder.write_packed_bits(&self.values);
        Ok(())
    }
}
