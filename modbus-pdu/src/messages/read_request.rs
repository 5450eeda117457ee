use crate::{encoding::*, error::PduResult, function_code::FunctionCode};

use super::check_quantity;

/// Body shared by the four read requests: starting address and quantity.
#[derive(PartialEq, Debug)]
pub struct ReadRequest {
    pub function_code: FunctionCode,
    pub address: u16,
    pub quantity: u16,
}

impl Encodable for ReadRequest {
    fn encode(&self, encoder: &mut Encoder) -> PduResult<()> {
        let quantity = check_quantity(self.function_code, self.quantity.into())?;
        encoder.write_u16(self.address);
        encoder.write_u16(quantity);
        Ok(())
    }
}
