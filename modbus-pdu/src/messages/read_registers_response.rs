use std::borrow::Cow;

use crate::{
    encoding::*,
    error::{PduError, PduResult},
    function_code::FunctionCode,
};

use super::check_quantity;

/// How register values are interpreted on the wire.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum RegisterSigns {
    /// One flag for every value.
    Uniform(bool),
    /// One flag per value, in order.
    PerElement(Vec<bool>),
}

impl RegisterSigns {
    pub fn is_signed(&self, index: usize) -> Option<bool> {
        match self {
            RegisterSigns::Uniform(signed) => Some(*signed),
            RegisterSigns::PerElement(flags) => flags.get(index).copied(),
        }
    }
}

impl From<bool> for RegisterSigns {
    fn from(signed: bool) -> Self {
        Self::Uniform(signed)
    }
}

impl From<Vec<bool>> for RegisterSigns {
    fn from(flags: Vec<bool>) -> Self {
        Self::PerElement(flags)
    }
}

/// Reply to a holding or input register read.
#[derive(PartialEq, Debug)]
pub struct ReadRegistersResponse<'a> {
    pub function_code: FunctionCode,
    pub values: Cow<'a, [i32]>,
    pub signs: RegisterSigns,
}

impl<'a> Encodable for ReadRegistersResponse<'a> {
    fn encode(&self, encoder: &mut Encoder) -> PduResult<()> {
        match self.function_code {
            FunctionCode::ReadHoldingRegisters | FunctionCode::ReadInputRegisters => {}
            other => return Err(PduError::UnsupportedFunction(other)),
        }
        let quantity = check_quantity(self.function_code, self.values.len())?;
        if let RegisterSigns::PerElement(flags) = &self.signs {
            if flags.len() != self.values.len() {
                return Err(PduError::SignednessMismatch {
                    values: self.values.len(),
                    flags: flags.len(),
                });
            }
        }
        encoder.write_u8((quantity * 2) as u8);
        for (index, value) in self.values.iter().enumerate() {
            let signed = self.signs.is_signed(index).unwrap_or_default();
            encoder.write_register(*value, signed)?;
        }
        Ok(())
    }
}
