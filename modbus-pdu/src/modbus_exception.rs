use std::fmt::Display;

/**
 * Exception codes carried in the second byte of an exception response.
 * See the [MODBUS Application Protocol Specification](https://www.modbus.org/docs/Modbus_Application_Protocol_V1_1b3.pdf) section 7.
 */
#[repr(u8)]
#[derive(Debug, Clone, Copy)]
pub enum ModbusException {
    /// The function code is not supported by the server.
    IllegalFunction = 1,
    /// The requested address range is not available on the server.
    IllegalDataAddress = 2,
    /// A value in the request data field is not allowed.
    IllegalDataValue = 3,
    ServerDeviceFailure = 4,
    Acknowledge = 5,
    ServerDeviceBusy = 6,
    MemoryParityError = 8,
    GatewayPathUnavailable = 10,
    GatewayTargetDeviceFailedToRespond = 11,
    /// A code outside the standard table.
    Unknown(u8),
}

impl From<u8> for ModbusException {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::IllegalFunction,
            2 => Self::IllegalDataAddress,
            3 => Self::IllegalDataValue,
            4 => Self::ServerDeviceFailure,
            5 => Self::Acknowledge,
            6 => Self::ServerDeviceBusy,
            8 => Self::MemoryParityError,
            10 => Self::GatewayPathUnavailable,
            11 => Self::GatewayTargetDeviceFailedToRespond,
            _ => Self::Unknown(value),
        }
    }
}

impl From<ModbusException> for u8 {
    fn from(value: ModbusException) -> Self {
        match value {
            ModbusException::IllegalFunction => 1,
            ModbusException::IllegalDataAddress => 2,
            ModbusException::IllegalDataValue => 3,
            ModbusException::ServerDeviceFailure => 4,
            ModbusException::Acknowledge => 5,
            ModbusException::ServerDeviceBusy => 6,
            ModbusException::MemoryParityError => 8,
            ModbusException::GatewayPathUnavailable => 10,
            ModbusException::GatewayTargetDeviceFailedToRespond => 11,
            ModbusException::Unknown(value) => value,
        }
    }
}

impl PartialEq for ModbusException {
    fn eq(&self, other: &Self) -> bool {
        u8::from(*self) == u8::from(*other)
    }
}

impl Eq for ModbusException {}

impl Display for ModbusException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModbusException::Unknown(code) => write!(f, "Unknown({code:#04x})"),
            other => write!(f, "{other:?}"),
        }
    }
}
