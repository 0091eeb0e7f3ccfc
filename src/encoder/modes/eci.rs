/// ECI designator encoder (Mode 0111)
/// Assignment values take 1, 2 or 3 bytes depending on magnitude
use crate::encoder::bitstream::BitBuffer;
use crate::error::InvalidArgument;

/// Writes ECI assignment values
pub struct EciEncoder;

impl EciEncoder {
    /// Largest assignment value plus one
    pub const LIMIT: u32 = 1_000_000;

    /// Write `assign_val` in its 1, 2 or 3 byte form
    pub fn encode(assign_val: u32, out: &mut BitBuffer) -> Result<(), InvalidArgument> {
        if assign_val < (1 << 7) {
            out.append_bits(assign_val, 8);
        } else if assign_val < (1 << 14) {
            out.append_bits(0b10, 2);
            out.append_bits(assign_val, 14);
        } else if assign_val < Self::LIMIT {
            out.append_bits(0b110, 3);
            out.append_bits(assign_val, 21);
        } else {
            return Err(InvalidArgument::EciOutOfRange(assign_val));
        }
        Ok(())
    }
}
