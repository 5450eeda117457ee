//! Modbus PDU codec.
//!
//! Builds request, response and exception PDUs for the standard coil and
//! register functions, and checks write acknowledgements. Everything here is
//! a pure function over byte buffers; transport, framing and retries are left
//! to the caller.

pub mod bits;
pub mod consts;
mod encoding;
mod error;
mod exception;
mod function_code;
mod messages;
mod modbus_exception;
pub mod numeric;
pub mod request;
pub mod response;
mod validate;

pub use encoding::{DecodeError, DecodeResult, Decodable, Decoder, Encodable, Encoder};
pub use error::{PduError, PduResult};
pub use exception::exception_response;
pub use function_code::{FunctionCode, ERROR_BIAS};
pub use messages::{CoilValue, ExceptionResponse, Pdu, RegisterSigns};
pub use modbus_exception::ModbusException;
pub use response::ResponseData;
pub use validate::validate_response;
