use bytes::Buf;
use std::io::Cursor;
use tracing::{debug, trace};

use crate::{
    bits,
    error::{PduError, PduResult},
    function_code::FunctionCode,
};

pub trait Encodable {
    fn encode(&self, encoder: &mut Encoder) -> PduResult<()>;

    #[allow(unused)]
    fn encode_to_bytes(&self) -> PduResult<Vec<u8>> {
        Encoder::encode(self)
    }
}

pub struct Encoder {
    buffer: Vec<u8>,
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder {
    pub fn new() -> Self {
        Self {
            buffer: Vec::with_capacity(16),
        }
    }

    #[allow(unused)]
    pub fn position(&self) -> usize {
        self.buffer.len()
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buffer.push(value);
    }

    pub fn write_u16(&mut self, value: u16) {
        self.buffer.extend(value.to_be_bytes());
    }

    /// Writes a register as `i16` or `u16` depending on `signed`.
    pub fn write_register(&mut self, value: i32, signed: bool) -> PduResult<()> {
        let bytes = if signed {
            i16::try_from(value).map(i16::to_be_bytes)
        } else {
            u16::try_from(value).map(u16::to_be_bytes)
        };
        let bytes = bytes.map_err(|_| PduError::RegisterOutOfRange { value, signed })?;
        self.buffer.extend(bytes);
        Ok(())
    }

    pub fn write_packed_bits(&mut self, values: &[bool]) {
        self.buffer.extend(bits::pack_bits(values));
    }

    pub fn write_bytes(&mut self, value: &[u8]) {
        self.buffer.extend(value);
    }

    pub fn write_type<T>(&mut self, value: &T) -> PduResult<()>
    where
        T: Encodable + ?Sized,
    {
        value.encode(self)
    }

    pub fn finish(self) -> Vec<u8> {
        self.buffer
    }

    pub fn encode<T>(value: &T) -> PduResult<Vec<u8>>
    where
        T: Encodable + ?Sized,
    {
        let mut encoder = Self::new();
        encoder.write_type(value)?;
        Ok(encoder.finish())
    }

    /// Encodes a complete PDU: the function code byte followed by `body`.
    pub fn encode_pdu<T>(function_code: FunctionCode, body: &T) -> PduResult<Vec<u8>>
    where
        T: Encodable + ?Sized,
    {
        let mut encoder = Self::new();
        encoder.write_u8(function_code.into());
        encoder.write_type(body)?;
        let pdu = encoder.finish();
        debug!("Encoded {} PDU: {} bytes", function_code, pdu.len());
        trace!("PDU bytes: {:02X?}", pdu);
        Ok(pdu)
    }
}

#[derive(PartialEq, Debug)]
pub enum DecodeError {
    MissingData,
    InvalidData(&'static str),
}

pub type DecodeResult<T> = Result<T, DecodeError>;

pub trait Decodable<T> {
    fn decode(decoder: &mut Decoder) -> DecodeResult<T>;

    fn decode_from_bytes(buffer: &[u8]) -> DecodeResult<T>
    where
        T: Decodable<T>,
    {
        Decoder::decode(buffer)
    }
}

pub struct Decoder<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> Decoder<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(buffer),
        }
    }

    #[allow(unused)]
    pub fn position(&self) -> usize {
        self.cursor.position() as usize
    }

    pub fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    pub fn read_u8(&mut self) -> DecodeResult<u8> {
        if self.cursor.remaining() < 1 {
            return Err(DecodeError::MissingData);
        }
        Ok(self.cursor.get_u8())
    }

    pub fn read_u16(&mut self) -> DecodeResult<u16> {
        if self.cursor.remaining() < 2 {
            return Err(DecodeError::MissingData);
        }
        Ok(self.cursor.get_u16())
    }

    /// Reads a register as `i16` or `u16` depending on `signed`, widened to `i32`.
    pub fn read_register(&mut self, signed: bool) -> DecodeResult<i32> {
        if self.cursor.remaining() < 2 {
            return Err(DecodeError::MissingData);
        }
        Ok(if signed {
            self.cursor.get_i16().into()
        } else {
            self.cursor.get_u16().into()
        })
    }

    pub fn read_packed_bits(&mut self, length: usize) -> DecodeResult<Vec<bool>> {
        let byte_length = bits::packed_len(length);
        if self.cursor.remaining() < byte_length {
            return Err(DecodeError::MissingData);
        }
        let packed = self.cursor.copy_to_bytes(byte_length);
        Ok(bits::unpack_bits(&packed, length))
    }

    /// Takes everything left in the buffer.
    pub fn read_remaining(&mut self) -> Vec<u8> {
        let remaining = self.cursor.remaining();
        self.cursor.copy_to_bytes(remaining).to_vec()
    }

    pub fn read_type<T>(&mut self) -> DecodeResult<T>
    where
        T: Decodable<T>,
    {
        T::decode(self)
    }

    pub fn decode<T>(buffer: &'a [u8]) -> DecodeResult<T>
    where
        T: Decodable<T>,
    {
        let mut decoder = Self::new(buffer);
        let value: T = decoder.read_type()?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode() {
        let mut encoder = Encoder::new();
        encoder.write_u8(0xAA);
        encoder.write_u16(0xBBCC);
        encoder.write_bytes(&[1, 2, 3]);
        encoder.write_register(-2, true).unwrap();
        encoder.write_register(65535, false).unwrap();
        encoder.write_packed_bits(&[true, false, true]);

        assert_eq!(encoder.position(), 11);

        let bytes = encoder.finish();
        assert_eq!(bytes, vec![0xAA, 0xBB, 0xCC, 1, 2, 3, 0xFF, 0xFE, 0xFF, 0xFF, 0b101]);

        let mut decoder = Decoder::new(&bytes);

        assert_eq!(decoder.read_u8(), Ok(0xAA));
        assert_eq!(decoder.read_u16(), Ok(0xBBCC));
        assert_eq!(decoder.position(), 3);
        decoder.read_u8().unwrap();
        decoder.read_u16().unwrap();
        assert_eq!(decoder.read_register(true), Ok(-2));
        assert_eq!(decoder.read_register(false), Ok(65535));
        assert_eq!(decoder.read_packed_bits(3), Ok(vec![true, false, true]));

        assert_eq!(decoder.remaining(), 0);
        assert_eq!(decoder.read_u16(), Err(DecodeError::MissingData));
    }

    #[test]
    fn register_width() {
        let mut encoder = Encoder::new();
        assert_eq!(
            encoder.write_register(40000, true),
            Err(PduError::RegisterOutOfRange { value: 40000, signed: true })
        );
        assert_eq!(
            encoder.write_register(-1, false),
            Err(PduError::RegisterOutOfRange { value: -1, signed: false })
        );
        assert_eq!(encoder.write_register(-32768, true), Ok(()));
        assert_eq!(encoder.finish(), vec![0x80, 0x00]);
    }

    #[test]
    fn read_remaining() {
        let mut decoder = Decoder::new(&[1, 2, 3]);
        decoder.read_u8().unwrap();
        assert_eq!(decoder.read_remaining(), vec![2, 3]);
        assert!(decoder.read_remaining().is_empty());
        assert_eq!(decoder.read_packed_bits(1), Err(DecodeError::MissingData));
    }
}
