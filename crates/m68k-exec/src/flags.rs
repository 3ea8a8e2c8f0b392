//! Motorola 68000 condition code flags.
//!
//! The condition code register is the low byte of SR:
//! - C (bit 0): Carry
//! - V (bit 1): Overflow
//! - Z (bit 2): Zero
//! - N (bit 3): Negative
//! - X (bit 4): Extend (copy of C for multi-precision arithmetic)
//! - Bits 5-7: Reserved (always 0)
//!
//! The flags are held as five independent booleans. Every ALU and shifter
//! operation assigns each flag it owns explicitly.

/// Carry flag.
pub const C: u8 = 0x01;
/// Overflow flag.
pub const V: u8 = 0x02;
/// Zero flag.
pub const Z: u8 = 0x04;
/// Negative flag.
pub const N: u8 = 0x08;
/// Extend flag.
pub const X: u8 = 0x10;

/// Mask for the implemented condition code bits.
pub const CCR_MASK: u8 = 0x1F;

/// The five condition code flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flags {
    pub n: bool,
    pub z: bool,
    pub v: bool,
    pub c: bool,
    pub x: bool,
}

impl Flags {
    /// Build flags from a condition code byte. Reserved bits are ignored.
    #[must_use]
    pub const fn from_ccr(ccr: u8) -> Self {
        Self {
            n: ccr & N != 0,
            z: ccr & Z != 0,
            v: ccr & V != 0,
            c: ccr & C != 0,
            x: ccr & X != 0,
        }
    }

    /// Pack the flags into a condition code byte.
    #[must_use]
    pub const fn ccr(&self) -> u8 {
        let mut ccr = 0;
        if self.c {
            ccr |= C;
        }
        if self.v {
            ccr |= V;
        }
        if self.z {
            ccr |= Z;
        }
        if self.n {
            ccr |= N;
        }
        if self.x {
            ccr |= X;
        }
        ccr
    }

    /// Replace all five flags from a condition code byte.
    pub fn set_ccr(&mut self, ccr: u8) {
        *self = Self::from_ccr(ccr);
    }

    /// Evaluate a condition code (0-15).
    #[must_use]
    pub const fn condition(&self, cc: u8) -> bool {
        match cc & 0x0F {
            0x0 => true,                    // T
            0x1 => false,                   // F
            0x2 => !self.c && !self.z,      // HI
            0x3 => self.c || self.z,        // LS
            0x4 => !self.c,                 // CC/HS
            0x5 => self.c,                  // CS/LO
            0x6 => !self.z,                 // NE
            0x7 => self.z,                  // EQ
            0x8 => !self.v,                 // VC
            0x9 => self.v,                  // VS
            0xA => !self.n,                 // PL
            0xB => self.n,                  // MI
            0xC => self.n == self.v,        // GE
            0xD => self.n != self.v,        // LT
            0xE => !self.z && self.n == self.v, // GT
            _ => self.z || self.n != self.v,    // LE
        }
    }
}
