//! Effective address calculation for the 68000.
//!
//! EA calculation consumes extension words from IRC in instruction-stream
//! order and commits any address register side effect before returning.
//! Register-direct and immediate modes have no effective address and are
//! handled by the operand helpers below.

use crate::addressing::AddrMode;
use crate::bus::M68kBus;
use crate::cpu::Cpu68000;
use crate::error::AddressError;
use crate::memory;
use crate::registers::SP;
use crate::size::Size;

impl Cpu68000 {
    /// Calculate the effective address of a memory operand.
    ///
    /// Panics if `mode` is `DataReg`, `AddrReg` or `Immediate`: the decode
    /// layer must route those through [`read_operand`](Self::read_operand).
    pub fn compute_ea<B: M68kBus>(&mut self, bus: &mut B, mode: AddrMode, size: Size) -> u32 {
        match mode {
            AddrMode::DataReg(_) | AddrMode::AddrReg(_) | AddrMode::Immediate => {
                unreachable!("{mode:?} has no effective address")
            }
            AddrMode::AddrInd(r) => self.regs.a(r as usize),
            AddrMode::AddrIndPostInc(r) => {
                let r = r as usize;
                let an = self.regs.a(r);
                let addr = an;
                // An odd word/long address is about to fault: the register
                // update is not committed.
                if size == Size::Byte || addr & 1 == 0 {
                    self.regs.set_a(r, an.wrapping_add(step(r, size)));
                }
                addr
            }
            AddrMode::AddrIndPreDec(r) => {
                let r = r as usize;
                let addr = self.regs.a(r).wrapping_sub(step(r, size));
                if size == Size::Byte || addr & 1 == 0 {
                    self.regs.set_a(r, addr);
                }
                addr
            }
            AddrMode::AddrIndDisp(r) => {
                let disp = self.consume_irc(bus) as i16;
                self.regs.a(r as usize).wrapping_add_signed(i32::from(disp))
            }
            AddrMode::AddrIndIndex(r) => {
                let ext = self.consume_irc(bus);
                self.index_ea(self.regs.a(r as usize), ext)
            }
            AddrMode::AbsShort => self.consume_irc(bus) as i16 as i32 as u32,
            AddrMode::AbsLong => {
                let hi = self.consume_irc(bus);
                let lo = self.consume_irc(bus);
                (u32::from(hi) << 16) | u32::from(lo)
            }
            AddrMode::PcDisp => {
                // Base is the address of the extension word itself
                let base = self.regs.pc;
                let disp = self.consume_irc(bus) as i16;
                base.wrapping_add_signed(i32::from(disp))
            }
            AddrMode::PcIndex => {
                let base = self.regs.pc;
                let ext = self.consume_irc(bus);
                self.index_ea(base, ext)
            }
        }
    }

    /// Indexed EA: base + d8 + Xn.
    ///
    /// Extension word: D/A RRR W/L 000 dddddddd. Bits 12-15 select the index
    /// register, bit 11 selects a long index over a sign-extended word.
    fn index_ea(&self, base: u32, ext: u16) -> u32 {
        let disp = i32::from(ext as u8 as i8);
        let xn = self.regs.r(usize::from(ext >> 12));
        let xn = if ext & 0x0800 != 0 {
            xn as i32
        } else {
            i32::from(xn as i16)
        };
        base.wrapping_add_signed(disp).wrapping_add_signed(xn)
    }

    /// Read a source operand in any addressing mode.
    pub fn read_operand<B: M68kBus>(
        &mut self,
        bus: &mut B,
        mode: AddrMode,
        size: Size,
    ) -> Result<u32, AddressError> {
        match mode {
            AddrMode::DataReg(r) => Ok(self.read_data_reg(r, size)),
            AddrMode::AddrReg(r) => Ok(size.clip(u64::from(self.regs.a(r as usize)))),
            AddrMode::Immediate => Ok(self.fetch_immediate(bus, size)),
            _ => {
                let addr = self.compute_ea(bus, mode, size);
                memory::read(bus, size, addr)
            }
        }
    }

    /// Write a destination operand in any alterable addressing mode.
    ///
    /// Address registers are always written in full; narrow values are
    /// sign-extended first.
    pub fn write_operand<B: M68kBus>(
        &mut self,
        bus: &mut B,
        mode: AddrMode,
        size: Size,
        value: u32,
    ) -> Result<(), AddressError> {
        match mode {
            AddrMode::DataReg(r) => {
                self.write_data_reg(r, value, size);
                Ok(())
            }
            AddrMode::AddrReg(r) => {
                self.regs
                    .set_a(r as usize, size.sign_extend(u64::from(value)) as u32);
                Ok(())
            }
            AddrMode::Immediate => unreachable!("immediate operand is not writable"),
            _ => {
                let addr = self.compute_ea(bus, mode, size);
                memory::write(bus, size, addr, value)
            }
        }
    }
}

/// Auto-increment/decrement step. Byte accesses through A7 move it by two
/// to keep the stack word aligned.
const fn step(r: usize, size: Size) -> u32 {
    if r == SP && matches!(size, Size::Byte) { 2 } else { size.bytes() }
}
