use castagnoli_frame_layout::constants::POLYNOMIAL;

const MSB: u32 = 0x8000_0000;

/// Runs eight rounds of MSB-first polynomial division over `reg`.
///
/// Each round shifts the register left by one bit and, if the bit shifted
/// out was set, XORs in [`POLYNOMIAL`]. This is the single step both the
/// table builder and the bit-serial engine are made of.
#[inline]
pub const fn divide_byte(mut reg: u32) -> u32 {
    let mut round = 0;
    while round < 8 {
        if reg & MSB != 0 {
            reg = (reg << 1) ^ POLYNOMIAL;
        } else {
            reg <<= 1;
        }
        round += 1;
    }
    reg
}
