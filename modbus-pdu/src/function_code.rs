use std::fmt::Display;

use crate::consts::*;

/// Added to (or-ed into) a function code to mark an exception response.
pub const ERROR_BIAS: u8 = 0x80;

/// Function codes understood by the codec.
///
/// Conversion from `u8` is total: bytes with the high bit set become
/// [`FunctionCode::Exception`], anything else unrecognised becomes
/// [`FunctionCode::Unknown`].
#[repr(u8)]
#[derive(Debug, Clone, Copy)]
pub enum FunctionCode {
    ReadCoils = 1,
    ReadDiscreteInputs = 2,
    ReadHoldingRegisters = 3,
    ReadInputRegisters = 4,
    WriteSingleCoil = 5,
    WriteSingleRegister = 6,
    WriteMultipleCoils = 15,
    WriteMultipleRegisters = 16,
    Exception(u8),
    Unknown(u8),
}

impl FunctionCode {
    /// The exception variant of this code, i.e. the code with [`ERROR_BIAS`] set.
    pub fn as_exception(self) -> Self {
        FunctionCode::Exception(u8::from(self) | ERROR_BIAS)
    }

    pub fn is_exception(self) -> bool {
        matches!(self, FunctionCode::Exception(_))
    }

    /// Allowed element count for functions that carry a quantity field.
    pub fn quantity_limit(self) -> Option<(u16, u16)> {
        match self {
            Self::ReadCoils => Some((1, READ_COILS_MAX_LEN)),
            Self::ReadDiscreteInputs => Some((1, READ_DISCRETE_INPUTS_MAX_LEN)),
            Self::ReadHoldingRegisters => Some((1, READ_HOLDING_REGISTERS_MAX_LEN)),
            Self::ReadInputRegisters => Some((1, READ_INPUT_REGISTERS_MAX_LEN)),
            Self::WriteMultipleCoils => Some((1, WRITE_MULTIPLE_COILS_MAX_LEN)),
            Self::WriteMultipleRegisters => Some((1, WRITE_MULTIPLE_HOLDING_REGISTERS_MAX_LEN)),
            _ => None,
        }
    }
}

impl From<u8> for FunctionCode {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::ReadCoils,
            2 => Self::ReadDiscreteInputs,
            3 => Self::ReadHoldingRegisters,
            4 => Self::ReadInputRegisters,
            5 => Self::WriteSingleCoil,
            6 => Self::WriteSingleRegister,
            15 => Self::WriteMultipleCoils,
            16 => Self::WriteMultipleRegisters,
            _ if value & ERROR_BIAS != 0 => Self::Exception(value),
            _ => Self::Unknown(value),
        }
    }
}

impl From<FunctionCode> for u8 {
    fn from(value: FunctionCode) -> Self {
        match value {
            FunctionCode::ReadCoils => 1,
            FunctionCode::ReadDiscreteInputs => 2,
            FunctionCode::ReadHoldingRegisters => 3,
            FunctionCode::ReadInputRegisters => 4,
            FunctionCode::WriteSingleCoil => 5,
            FunctionCode::WriteSingleRegister => 6,
            FunctionCode::WriteMultipleCoils => 15,
            FunctionCode::WriteMultipleRegisters => 16,
            FunctionCode::Exception(value) | FunctionCode::Unknown(value) => value,
        }
    }
}

impl PartialEq for FunctionCode {
    fn eq(&self, other: &Self) -> bool {
        u8::from(*self) == u8::from(*other)
    }
}

impl Eq for FunctionCode {}

impl Display for FunctionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FunctionCode::Exception(value) => {
                write!(f, "Exception({})", FunctionCode::from(value & !ERROR_BIAS))
            }
            FunctionCode::Unknown(value) => write!(f, "Unknown({value:#04x})"),
            other => write!(f, "{other:?}"),
        }
    }
}
