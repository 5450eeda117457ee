use std::borrow::Cow;

use crate::{encoding::*, error::PduResult, function_code::FunctionCode};

use super::check_quantity;

#[derive(PartialEq, Debug)]
pub struct WriteMultipleRegistersRequest<'a> {
    pub address: u16,
    pub values: Cow<'a, [i32]>,
    pub signed: bool,
}

impl<'a> Encodable for WriteMultipleRegistersRequest<'a> {
    fn encode(&self, encoder: &mut Encoder) -> PduResult<()> {
        let quantity = check_quantity(FunctionCode::WriteMultipleRegisters, self.values.len())?;
        encoder.write_u16(self.address);
        encoder.write_u16(quantity);
        encoder.write_u8((quantity * 2) as u8);
        for value in self.values.iter() {
            encoder.write_register(*value, self.signed)?;
        }
        Ok(())
    }
}
