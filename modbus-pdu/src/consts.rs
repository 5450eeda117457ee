//! Protocol limits and canonical wire values.

pub const READ_COILS_MAX_LEN: u16 = 2000;
pub const READ_DISCRETE_INPUTS_MAX_LEN: u16 = 2000;
pub const READ_HOLDING_REGISTERS_MAX_LEN: u16 = 125;
pub const READ_INPUT_REGISTERS_MAX_LEN: u16 = 125;
pub const WRITE_MULTIPLE_COILS_MAX_LEN: u16 = 0x07B0;
pub const WRITE_MULTIPLE_HOLDING_REGISTERS_MAX_LEN: u16 = 123;

/// Wire word for a coil switched on.
pub const COIL_ON: u16 = 0xFF00;
/// Wire word for a coil switched off.
pub const COIL_OFF: u16 = 0x0000;

/// Function code plus the largest payload a serial line frame can carry.
pub const MAX_PDU_LENGTH: usize = 253;
