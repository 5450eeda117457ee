use std::{error::Error, fmt::Display};

use modbus_pdu::FunctionCode;

/// Data table selected by the first digit of a Modbus address.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum AddressKind {
    Coil,
    DiscreteInput,
    InputRegister,
    HoldingRegister,
}

impl AddressKind {
    pub fn prefix(self) -> char {
        match self {
            AddressKind::Coil => '0',
            AddressKind::DiscreteInput => '1',
            AddressKind::InputRegister => '3',
            AddressKind::HoldingRegister => '4',
        }
    }

    /// Coils and discrete inputs hold bits, the rest hold registers.
    pub fn is_bit(self) -> bool {
        matches!(self, AddressKind::Coil | AddressKind::DiscreteInput)
    }

    pub fn read_function(self) -> FunctionCode {
        match self {
            AddressKind::Coil => FunctionCode::ReadCoils,
            AddressKind::DiscreteInput => FunctionCode::ReadDiscreteInputs,
            AddressKind::InputRegister => FunctionCode::ReadInputRegisters,
            AddressKind::HoldingRegister => FunctionCode::ReadHoldingRegisters,
        }
    }

    /// `None` for the read-only tables.
    pub fn write_function(self, single: bool) -> Option<FunctionCode> {
        match (self, single) {
            (AddressKind::Coil, true) => Some(FunctionCode::WriteSingleCoil),
            (AddressKind::Coil, false) => Some(FunctionCode::WriteMultipleCoils),
            (AddressKind::HoldingRegister, true) => Some(FunctionCode::WriteSingleRegister),
            (AddressKind::HoldingRegister, false) => Some(FunctionCode::WriteMultipleRegisters),
            _ => None,
        }
    }
}

#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Address {
    pub kind: AddressKind,
    pub index: u16,
}

#[derive(PartialEq, Clone, Debug)]
pub struct ParseAddressError(&'static str);

impl Display for ParseAddressError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

impl Error for ParseAddressError {}

impl Address {
    /// Parses a 6-digit style address such as `400001`, adding `offset` to the index.
    pub fn parse(value: &str, offset: i32) -> Result<Self, ParseAddressError> {
        let mut chars = value.chars();

        let kind = match chars.next() {
            Some('0') => AddressKind::Coil,
            Some('1') => AddressKind::DiscreteInput,
            Some('3') => AddressKind::InputRegister,
            Some('4') => AddressKind::HoldingRegister,
            Some(_) => return Err(ParseAddressError("Address must start with 0, 1, 3 or 4")),
            None => return Err(ParseAddressError("Empty address")),
        };

        let digits = chars.as_str();
        if digits.is_empty() {
            return Err(ParseAddressError("Address must be at least 2 digits long"));
        }
        if digits.len() > 5 {
            return Err(ParseAddressError("Address must be at most 6 digits"));
        }

        let index: i32 = digits.parse().map_err(|_| ParseAddressError("Address is not a number"))?;
        let index = index
            .checked_add(offset)
            .and_then(|index| u16::try_from(index).ok())
            .ok_or(ParseAddressError("Address out of range"))?;

        Ok(Self { kind, index })
    }

    /// The address `offset` entries further on, printed the way it was typed.
    pub fn label(&self, offset: usize, address_offset: i32) -> String {
        let index = self.index as i64 + offset as i64 - address_offset as i64;
        format!("{}{index:05}", self.kind.prefix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert!(Address::parse("", 0).is_err());
        assert!(Address::parse("4", 0).is_err());
        assert!(Address::parse("2000", 0).is_err());
        assert!(Address::parse("4123456", 0).is_err());
        assert!(Address::parse("40x01", 0).is_err());
        assert_eq!(
            Address::parse("400001", -1),
            Ok(Address {
                kind: AddressKind::HoldingRegister,
                index: 0
            })
        );
        assert_eq!(
            Address::parse("012", 0),
            Ok(Address {
                kind: AddressKind::Coil,
                index: 12
            })
        );
        assert_eq!(
            Address::parse("365536", -1),
            Ok(Address {
                kind: AddressKind::InputRegister,
                index: 65535
            })
        );
        assert!(Address::parse("365537", -1).is_err());
        assert!(Address::parse("10", -1).is_err());
        assert_eq!(Address::parse("499999", i32::MAX), Err(ParseAddressError("Address out of range")));
        assert_eq!(Address::parse("000001", i32::MIN), Err(ParseAddressError("Address out of range")));
    }

    #[test]
    fn functions() {
        assert_eq!(AddressKind::DiscreteInput.read_function(), FunctionCode::ReadDiscreteInputs);
        assert_eq!(AddressKind::Coil.write_function(false), Some(FunctionCode::WriteMultipleCoils));
        assert_eq!(AddressKind::HoldingRegister.write_function(true), Some(FunctionCode::WriteSingleRegister));
        assert_eq!(AddressKind::InputRegister.write_function(true), None);
        assert!(AddressKind::Coil.is_bit());
        assert!(!AddressKind::HoldingRegister.is_bit());
    }

    #[test]
    fn label() {
        let address = Address::parse("400010", -1).unwrap();
        assert_eq!(address.label(0, -1), "400010");
        assert_eq!(address.label(2, -1), "400012");
    }
}
