//! Motorola 68000 register file as seen by the instruction core.
//!
//! - D0-D7: 8 data registers (32-bit)
//! - A0-A7: 8 address registers (32-bit, A7 is the active stack pointer)
//! - PC: address of the word currently held in the prefetch register
//! - IRC: the prefetch register (next unconsumed instruction-stream word)
//! - Flags: the condition code bits

use crate::flags::Flags;

/// Index of the stack pointer among the address registers.
pub const SP: usize = 7;

/// 68000 register file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Registers {
    /// Data registers D0-D7.
    pub d: [u32; 8],
    /// Address registers A0-A7.
    pub a: [u32; 8],
    /// Program counter.
    pub pc: u32,
    /// Prefetch register.
    pub irc: u16,
    /// Condition code flags.
    pub flags: Flags,
}

impl Registers {
    /// Create a zeroed register file.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            d: [0; 8],
            a: [0; 8],
            pc: 0,
            irc: 0,
            flags: Flags {
                n: false,
                z: false,
                v: false,
                c: false,
                x: false,
            },
        }
    }

    /// Get data register by index (0-7).
    #[must_use]
    pub fn d(&self, n: usize) -> u32 {
        debug_assert!(n < 8);
        self.d[n]
    }

    /// Set data register by index (0-7).
    pub fn set_d(&mut self, n: usize, value: u32) {
        debug_assert!(n < 8);
        self.d[n] = value;
    }

    /// Get address register by index (0-7).
    #[must_use]
    pub fn a(&self, n: usize) -> u32 {
        debug_assert!(n < 8);
        self.a[n]
    }

    /// Set address register by index (0-7).
    pub fn set_a(&mut self, n: usize, value: u32) {
        debug_assert!(n < 8);
        self.a[n] = value;
    }

    /// Get any general register by its 4-bit index as found in index
    /// extension words: 0-7 select D0-D7, 8-15 select A0-A7.
    #[must_use]
    pub fn r(&self, n: usize) -> u32 {
        debug_assert!(n < 16);
        if n < 8 { self.d[n] } else { self.a[n - 8] }
    }

    /// Get the active stack pointer.
    #[must_use]
    pub const fn sp(&self) -> u32 {
        self.a[SP]
    }
}
