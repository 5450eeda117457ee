use crate::{
    consts::{COIL_OFF, COIL_ON},
    encoding::*,
    error::{PduError, PduResult},
};

/// Value accepted by a single coil write.
///
/// Booleans always encode. Raw words must be one of the two canonical wire
/// values, or `1`, which encodes as on.
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum CoilValue {
    Bool(bool),
    Raw(u16),
}

impl CoilValue {
    /// The canonical wire word for this value.
    pub fn to_wire(self) -> PduResult<u16> {
        match self {
            CoilValue::Bool(true) => Ok(COIL_ON),
            CoilValue::Bool(false) => Ok(COIL_OFF),
            CoilValue::Raw(value @ (COIL_ON | COIL_OFF)) => Ok(value),
            // 1 is read as a truthy flag.
            CoilValue::Raw(1) => Ok(COIL_ON),
            CoilValue::Raw(value) => Err(PduError::IllegalValue(value)),
        }
    }
}

impl From<bool> for CoilValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u16> for CoilValue {
    fn from(value: u16) -> Self {
        Self::Raw(value)
    }
}

#[derive(PartialEq, Debug)]
pub struct WriteSingleCoilRequest {
    pub address: u16,
    pub value: CoilValue,
}

impl Encodable for WriteSingleCoilRequest {
    fn encode(&self, encoder: &mut Encoder) -> PduResult<()> {
        let value = self.value.to_wire()?;
        encoder.write_u16(self.address);
        encoder.write_u16(value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values() {
        assert_eq!(CoilValue::from(true).to_wire(), Ok(0xFF00));
        assert_eq!(CoilValue::from(false).to_wire(), Ok(0x0000));
        assert_eq!(CoilValue::from(0xFF00).to_wire(), Ok(0xFF00));
        assert_eq!(CoilValue::from(0x0000).to_wire(), Ok(0x0000));
        assert_eq!(CoilValue::from(1).to_wire(), Ok(0xFF00));
        assert_eq!(CoilValue::from(2).to_wire(), Err(PduError::IllegalValue(2)));
        assert_eq!(CoilValue::from(0x00FF).to_wire(), Err(PduError::IllegalValue(0x00FF)));
    }
}
