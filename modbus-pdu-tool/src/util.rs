use std::error::Error;

use crate::args::{ValueType, WordOrder};

/// Parses hex such as `03 00 6B 00 03`, `0x03006B0003` or `03,00,6b`.
pub fn parse_hex(input: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let digits: String = input
        .split(|c: char| c.is_whitespace() || c == ',' || c == ':')
        .map(|part| part.trim_start_matches("0x").trim_start_matches("0X"))
        .collect();
    hex::decode(digits)
}

pub fn format_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02X}")).collect::<Vec<String>>().join(" ")
}

pub fn parse_bool(value: &str) -> Result<bool, Box<dyn Error>> {
    match value.to_lowercase().as_str() {
        "true" | "on" | "1" => Ok(true),
        "false" | "off" | "0" => Ok(false),
        _ => Err(format!("Invalid coil value '{value}'").into()),
    }
}

/// Converts typed values to register words.
///
/// Returns the values and whether they are to be encoded as signed.
pub fn parse_registers(values: &[String], datatype: ValueType, order: WordOrder) -> Result<(Vec<i32>, bool), Box<dyn Error>> {
    let mut registers: Vec<i32> = Vec::with_capacity(values.len());

    for value in values {
        match datatype {
            ValueType::I16 => registers.push(value.parse::<i16>()?.into()),
            ValueType::U16 => registers.push(value.parse::<u16>()?.into()),
            ValueType::Hex => registers.push(parse_word(value, 16)?.into()),
            ValueType::Bin => registers.push(parse_word(value, 2)?.into()),
            ValueType::F32 => {
                let [b0, b1, b2, b3] = value.parse::<f32>()?.to_be_bytes();
                let high = u16::from_be_bytes([b0, b1]);
                let low = u16::from_be_bytes([b2, b3]);
                match order {
                    WordOrder::HL => registers.extend([i32::from(high), i32::from(low)]),
                    WordOrder::LH => registers.extend([i32::from(low), i32::from(high)]),
                }
            }
        }
    }

    Ok((registers, datatype == ValueType::I16))
}

/// Parses a 16-bit word, accepting a `0x` prefix for hex and `0b` for binary.
pub fn parse_word(value: &str, radix: u32) -> Result<u16, std::num::ParseIntError> {
    let prefix = if radix == 2 { "0b" } else { "0x" };
    u16::from_str_radix(value.strip_prefix(prefix).unwrap_or(value), radix)
}
