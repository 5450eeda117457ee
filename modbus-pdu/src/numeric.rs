//! Bit-level conversions between numbers and binary digit strings.

use std::fmt::Binary;

use crate::error::{PduError, PduResult};

/// The IEEE-754 bit pattern of `value` as exactly 32 binary digits.
///
/// ```
/// use modbus_pdu::numeric::float_to_binary_string;
///
/// assert_eq!(float_to_binary_string(1.5), "00111111110000000000000000000000");
/// ```
pub fn float_to_binary_string(value: f32) -> String {
    format!("{:032b}", value.to_bits())
}

/// Parses binary digits as a `u32` and reinterprets the bits as an `f32`.
///
/// Inverse of [`float_to_binary_string`], bit for bit.
pub fn binary_string_to_float(digits: &str) -> PduResult<f32> {
    let bits = u32::from_str_radix(digits, 2).map_err(|source| PduError::InvalidBinaryString {
        input: digits.to_string(),
        source,
    })?;
    Ok(f32::from_bits(bits))
}

/// Binary digits of `value`, no padding and no sign handling.
pub fn int_to_binary_string<T: Binary>(value: T) -> String {
    format!("{value:b}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_round_trip() {
        for value in [
            0.0f32,
            -0.0,
            1.5,
            -273.15,
            f32::MIN_POSITIVE,
            f32::from_bits(1),
            f32::MAX,
            f32::MIN,
            f32::INFINITY,
            f32::NEG_INFINITY,
        ] {
            let digits = float_to_binary_string(value);
            assert_eq!(digits.len(), 32);
            assert_eq!(binary_string_to_float(&digits).unwrap().to_bits(), value.to_bits());
        }
    }

    #[test]
    fn known_patterns() {
        assert_eq!(float_to_binary_string(0.0), "0".repeat(32));
        assert_eq!(float_to_binary_string(-0.0), format!("1{}", "0".repeat(31)));
        assert_eq!(binary_string_to_float("0").unwrap(), 0.0);
        assert_eq!(binary_string_to_float("111111100000000000000000000000").unwrap(), 1.0);
    }

    #[test]
    fn invalid_digits() {
        assert!(matches!(
            binary_string_to_float("10201"),
            Err(PduError::InvalidBinaryString { .. })
        ));
        assert!(binary_string_to_float("").is_err());
        assert!(binary_string_to_float(&"1".repeat(33)).is_err());
    }

    #[test]
    fn integers() {
        assert_eq!(int_to_binary_string(0u8), "0");
        assert_eq!(int_to_binary_string(5u16), "101");
        assert_eq!(int_to_binary_string(0xFF00u32), "1111111100000000");
    }
}
