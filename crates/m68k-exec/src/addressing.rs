//! The twelve 68000 addressing modes.
//!
//! Encoded in an opcode as a 3-bit mode field and a 3-bit register field.
//! Mode 7 reuses the register field to select the register-less modes.

use crate::size::Size;

/// Addressing mode, carrying its register number where it has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddrMode {
    /// Dn
    DataReg(u8),
    /// An
    AddrReg(u8),
    /// (An)
    AddrInd(u8),
    /// (An)+
    AddrIndPostInc(u8),
    /// -(An)
    AddrIndPreDec(u8),
    /// (d16,An)
    AddrIndDisp(u8),
    /// (d8,An,Xn)
    AddrIndIndex(u8),
    /// (xxx).W
    AbsShort,
    /// (xxx).L
    AbsLong,
    /// (d16,PC)
    PcDisp,
    /// (d8,PC,Xn)
    PcIndex,
    /// #imm
    Immediate,
}

impl AddrMode {
    /// Decode from the mode and register fields of an opcode.
    ///
    /// Returns `None` for the unassigned mode 7 encodings (reg 5-7).
    #[must_use]
    pub const fn decode(mode: u8, reg: u8) -> Option<Self> {
        let reg = reg & 7;
        Some(match mode & 7 {
            0 => Self::DataReg(reg),
            1 => Self::AddrReg(reg),
            2 => Self::AddrInd(reg),
            3 => Self::AddrIndPostInc(reg),
            4 => Self::AddrIndPreDec(reg),
            5 => Self::AddrIndDisp(reg),
            6 => Self::AddrIndIndex(reg),
            _ => match reg {
                0 => Self::AbsShort,
                1 => Self::AbsLong,
                2 => Self::PcDisp,
                3 => Self::PcIndex,
                4 => Self::Immediate,
                _ => return None,
            },
        })
    }

    /// True for the modes that name a memory location.
    #[must_use]
    pub const fn is_memory(self) -> bool {
        !matches!(self, Self::DataReg(_) | Self::AddrReg(_) | Self::Immediate)
    }

    /// Number of extension words this mode consumes for an operand of `size`.
    #[must_use]
    pub const fn ext_words(self, size: Size) -> u32 {
        match self {
            Self::DataReg(_)
            | Self::AddrReg(_)
            | Self::AddrInd(_)
            | Self::AddrIndPostInc(_)
            | Self::AddrIndPreDec(_) => 0,
            Self::AddrIndDisp(_)
            | Self::AddrIndIndex(_)
            | Self::AbsShort
            | Self::PcDisp
            | Self::PcIndex => 1,
            Self::AbsLong => 2,
            Self::Immediate => match size {
                Size::Long => 2,
                Size::Byte | Size::Word => 1,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_covers_all_twelve_modes() {
        let mut modes = Vec::new();
        for mode in 0..8 {
            for reg in 0..8 {
                if let Some(m) = AddrMode::decode(mode, reg) {
                    if !modes.contains(&m) {
                        modes.push(m);
                    }
                }
            }
        }
        // 7 register modes x 8 registers + 5 register-less modes
        assert_eq!(modes.len(), 7 * 8 + 5);
        assert_eq!(AddrMode::decode(7, 5), None);
        assert_eq!(AddrMode::decode(7, 7), None);
        assert_eq!(AddrMode::decode(3, 7), Some(AddrMode::AddrIndPostInc(7)));
    }

    #[test]
    fn extension_word_counts() {
        assert_eq!(AddrMode::AbsLong.ext_words(Size::Byte), 2);
        assert_eq!(AddrMode::Immediate.ext_words(Size::Byte), 1);
        assert_eq!(AddrMode::Immediate.ext_words(Size::Long), 2);
        assert_eq!(AddrMode::AddrIndPreDec(0).ext_words(Size::Long), 0);
        assert_eq!(AddrMode::PcIndex.ext_words(Size::Word), 1);
    }

    #[test]
    fn memory_modes() {
        assert!(!AddrMode::DataReg(0).is_memory());
        assert!(!AddrMode::Immediate.is_memory());
        assert!(AddrMode::PcDisp.is_memory());
    }
}
