//! Operand sizes and the size-boundary arithmetic every unit shares.
//!
//! Flag correctness depends on testing the exact size boundary, so all
//! truncation, sign and carry tests live here and nowhere else. Values are
//! passed as `u64` accumulators so a carry out of a long operation is still
//! observable at bit 32.

/// Operand size of a 68000 operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Size {
    Byte,
    Word,
    Long,
}

impl Size {
    /// Decode the standard two-bit size field (00=byte, 01=word, 10=long).
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits & 3 {
            0 => Some(Self::Byte),
            1 => Some(Self::Word),
            2 => Some(Self::Long),
            _ => None,
        }
    }

    /// Width in bytes (1/2/4).
    #[must_use]
    pub const fn bytes(self) -> u32 {
        match self {
            Self::Byte => 1,
            Self::Word => 2,
            Self::Long => 4,
        }
    }

    /// Width in bits (8/16/32).
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.bytes() * 8
    }

    /// Mask covering the operand width.
    #[must_use]
    pub const fn mask(self) -> u32 {
        match self {
            Self::Byte => 0x0000_00FF,
            Self::Word => 0x0000_FFFF,
            Self::Long => 0xFFFF_FFFF,
        }
    }

    /// Sign bit at the size boundary.
    #[must_use]
    pub const fn msb_mask(self) -> u32 {
        match self {
            Self::Byte => 0x0000_0080,
            Self::Word => 0x0000_8000,
            Self::Long => 0x8000_0000,
        }
    }

    /// Truncate an accumulator to the operand width.
    #[must_use]
    pub const fn clip(self, value: u64) -> u32 {
        (value & self.mask() as u64) as u32
    }

    /// Zero the low bits covered by this size, keeping the rest.
    ///
    /// Used to merge a narrow result into a wider register.
    #[must_use]
    pub const fn clear(self, value: u32) -> u32 {
        value & !self.mask()
    }

    /// Most significant bit at the size boundary.
    #[must_use]
    pub const fn msb(self, value: u64) -> bool {
        value & self.msb_mask() as u64 != 0
    }

    /// The bit immediately above the size boundary (carry or borrow out).
    #[must_use]
    pub const fn carry(self, value: u64) -> bool {
        value & (1u64 << self.bits()) != 0
    }

    /// Reinterpret the low bits as a signed value of this size and widen.
    #[must_use]
    pub const fn sign_extend(self, value: u64) -> i32 {
        match self {
            Self::Byte => value as u8 as i8 as i32,
            Self::Word => value as u16 as i16 as i32,
            Self::Long => value as u32 as i32,
        }
    }

    /// True if the value is zero within the operand width.
    #[must_use]
    pub const fn is_zero(self, value: u64) -> bool {
        self.clip(value) == 0
    }
}
