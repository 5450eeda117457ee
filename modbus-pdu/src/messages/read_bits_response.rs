use std::borrow::Cow;

use crate::{
    bits,
    encoding::*,
    error::{PduError, PduResult},
    function_code::FunctionCode,
};

use super::check_quantity;

/// Reply to a coil or discrete input read.
#[derive(PartialEq, Debug)]
pub struct ReadBitsResponse<'a> {
    pub function_code: FunctionCode,
    pub values: Cow<'a, [bool]>,
}

impl<'a> Encodable for ReadBitsResponse<'a> {
    fn encode(&self, encoder: &mut Encoder) -> PduResult<()> {
        match self.function_code {
            FunctionCode::ReadCoils | FunctionCode::ReadDiscreteInputs => {}
            other => return Err(PduError::UnsupportedFunction(other)),
        }
        // Same 1..=2000 window as the read request, which also keeps the byte count within a u8.
        check_quantity(self.function_code, self.values.len())?;
        encoder.write_u8(bits::packed_len(self.values.len()) as u8);
        encoder.write_packed_bits(&self.values);
        Ok(())
    }
}
