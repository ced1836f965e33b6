//! Conversion of raw output registers into counts and physical units.

use byteorder::{ByteOrder, LittleEndian};

/// Size of one X/Y/Z output block.
pub const TRIPLE_SIZE: usize = 6;

/// Size of the OUT_TEMP_L/H pair.
pub const TEMP_SIZE: usize = 2;

/// Splits an output block into signed counts, low byte first per axis.
pub fn decode_raw_triple(buf: &[u8; TRIPLE_SIZE]) -> mint::Vector3<i16> {
    let x = LittleEndian::read_i16(&buf[0..2]);
    let y = LittleEndian::read_i16(&buf[2..4]);
    let z = LittleEndian::read_i16(&buf[4..6]);

    mint::Vector3::from([x, y, z])
}

pub fn scale_triple(raw: mint::Vector3<i16>, scaling: f32) -> mint::Vector3<f32> {
    mint::Vector3::from([
        raw.x as f32 * scaling,
        raw.y as f32 * scaling,
        raw.z as f32 * scaling,
    ])
}

/// Decodes an output block and applies `scaling` (units per LSB).
pub fn decode_triple(buf: &[u8; TRIPLE_SIZE], scaling: f32) -> mint::Vector3<f32> {
    scale_triple(decode_raw_triple(buf), scaling)
}

/// Temperature is a 12-bit two's complement value: the low register holds
/// bits 7..0 and the upper nibble of the high register holds bits 11..8.
pub fn decode_temperature_raw(buf: &[u8; TEMP_SIZE]) -> i16 {
    let raw = (u16::from(buf[1] >> 4) << 8) | u16::from(buf[0]);

    // sign-extend from bit 11
    ((raw << 4) as i16) >> 4
}
