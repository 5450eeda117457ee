//! Coil bit packing.
//!
//! Bits are folded into each byte most-significant first: every group of up
//! to eight values is reduced with `byte = (byte << 1) | bit`. A full group
//! puts its first value in bit 7. A shorter trailing group of `k` values is
//! not shifted up, so its values land in the low `k` bits.
//!
//! This is the reverse of the LSB-first order the Modbus application protocol
//! describes for coil data. Peers built against this codec rely on the
//! ordering, so it is kept as is; talking to other Modbus stacks will see
//! coils within a byte reversed.

/// Number of bytes needed to hold `count` packed bits.
pub fn packed_len(count: usize) -> usize {
    count.div_ceil(8)
}

/// Packs `values` into bytes, see the module docs for the bit order.
pub fn pack_bits(values: &[bool]) -> Vec<u8> {
    values
        .chunks(8)
        .map(|group| group.iter().fold(0u8, |byte, &bit| (byte << 1) | u8::from(bit)))
        .collect()
}

/// Inverse of [`pack_bits`] for the same `count`.
///
/// Stops early if `bytes` holds fewer than [`packed_len`]`(count)` bytes.
pub fn unpack_bits(bytes: &[u8], count: usize) -> Vec<bool> {
    let mut values = Vec::with_capacity(count);
    for &byte in bytes.iter().take(packed_len(count)) {
        let group = (count - values.len()).min(8);
        for i in (0..group).rev() {
            values.push(byte & (1 << i) != 0);
        }
    }
    values
}
