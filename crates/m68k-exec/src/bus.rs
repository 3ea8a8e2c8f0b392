//! Memory interface consumed by the 68000 core.
//!
//! The 68000 uses a 16-bit data bus. The `M68kBus` trait models this with
//! byte and word accessors only; long accesses are composed by the CPU from
//! two word cycles. The bus owns its address decoding, masking and mirroring
//! policy.

/// Physical address width of the 68000 (24 address lines).
pub const ADDRESS_MASK: u32 = 0x00FF_FFFF;

/// Bus trait for 68000-family CPUs.
pub trait M68kBus {
    /// Read a byte from the bus.
    fn read_byte(&mut self, addr: u32) -> u8;

    /// Read a word from the bus.
    fn read_word(&mut self, addr: u32) -> u16;

    /// Write a byte to the bus.
    fn write_byte(&mut self, addr: u32, value: u8);

    /// Write a word to the bus.
    fn write_word(&mut self, addr: u32, value: u16);
}
