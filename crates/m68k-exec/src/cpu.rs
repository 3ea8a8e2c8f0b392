//! The 68000 instruction core and its prefetch pipeline.
//!
//! ## Prefetch register: IRC
//!
//! IRC holds the next unconsumed instruction-stream word, fetched from PC.
//! Extension words (displacements, absolute addresses, index selectors and
//! immediates) are read out of IRC, and every consumption advances the
//! queue: PC moves to the next word and IRC is refilled from the bus.
//! Consumption is strictly sequential and high word first for 32-bit
//! values.

use emu_core::{Observable, Value};

use crate::alu::{self, ArithOp};
use crate::bus::M68kBus;
use crate::flags::Flags;
use crate::registers::Registers;
use crate::shifts::{self, ShiftOp};
use crate::size::Size;

/// Motorola 68000 instruction core.
///
/// Owns the register file, the prefetch register and the status flags.
/// The bus is passed into every call that touches memory so it can be
/// shared with other components.
#[derive(Debug, Clone, Default)]
pub struct Cpu68000 {
    pub regs: Registers,
}

impl Cpu68000 {
    /// Create a core with a zeroed register file.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            regs: Registers::new(),
        }
    }

    /// Point the instruction stream at `pc` and prefetch the word there.
    pub fn set_pc<B: M68kBus>(&mut self, bus: &mut B, pc: u32) {
        self.regs.pc = pc;
        self.regs.irc = bus.read_word(pc);
    }

    /// Current condition code flags.
    #[must_use]
    pub const fn flags(&self) -> Flags {
        self.regs.flags
    }

    // === Extension-word pipeline ===

    /// Advance the prefetch queue by one word.
    ///
    /// PC moves to the next instruction-stream word and IRC is refilled
    /// from it.
    pub fn read_extension_word<B: M68kBus>(&mut self, bus: &mut B) {
        self.regs.pc = self.regs.pc.wrapping_add(2);
        self.regs.irc = bus.read_word(self.regs.pc);
    }

    /// Consume IRC as an extension word, returning its value.
    pub(crate) fn consume_irc<B: M68kBus>(&mut self, bus: &mut B) -> u16 {
        let value = self.regs.irc;
        self.read_extension_word(bus);
        value
    }

    /// Fetch an immediate operand from the instruction stream.
    ///
    /// Byte immediates occupy the low half of a full extension word. Long
    /// immediates take two words, high word first.
    pub fn fetch_immediate<B: M68kBus>(&mut self, bus: &mut B, size: Size) -> u32 {
        match size {
            Size::Byte => u32::from(self.consume_irc(bus) & 0x00FF),
            Size::Word => u32::from(self.consume_irc(bus)),
            Size::Long => {
                let hi = self.consume_irc(bus);
                let lo = self.consume_irc(bus);
                (u32::from(hi) << 16) | u32::from(lo)
            }
        }
    }

    // === Register access ===

    /// Read the low `size` bits of a data register.
    #[must_use]
    pub fn read_data_reg(&self, n: u8, size: Size) -> u32 {
        size.clip(u64::from(self.regs.d(n as usize)))
    }

    /// Write the low `size` bits of a data register, keeping the upper bits.
    pub fn write_data_reg(&mut self, n: u8, value: u32, size: Size) {
        let n = n as usize;
        let merged = size.clear(self.regs.d(n)) | size.clip(u64::from(value));
        self.regs.set_d(n, merged);
    }

    // === Execution units ===

    /// Run ADD/ADDX/SUB/SUBX/CMP on `a` (source) and `b` (destination),
    /// updating the flags. Returns the size-truncated result.
    pub fn compute_arith(&mut self, op: ArithOp, size: Size, a: u32, b: u32) -> u32 {
        alu::arith(&mut self.regs.flags, op, size, a, b)
    }

    /// Shift or rotate `data` by `count` single-bit steps, updating the
    /// flags. Returns the size-truncated result.
    pub fn compute_shift(&mut self, op: ShiftOp, size: Size, count: u32, data: u32) -> u32 {
        shifts::shift(&mut self.regs.flags, op, size, count, data)
    }
}

impl Observable for Cpu68000 {
    fn query(&self, path: &str) -> Option<Value> {
        let flags = &self.regs.flags;
        match path {
            "pc" => Some(self.regs.pc.into()),
            "irc" => Some(self.regs.irc.into()),
            "ccr" => Some(flags.ccr().into()),
            "flags.n" => Some(flags.n.into()),
            "flags.z" => Some(flags.z.into()),
            "flags.v" => Some(flags.v.into()),
            "flags.c" => Some(flags.c.into()),
            "flags.x" => Some(flags.x.into()),
            _ => {
                let (bank, index) = path.split_at_checked(1)?;
                let n: usize = index.parse().ok().filter(|&n| n < 8)?;
                match bank {
                    "d" => Some(self.regs.d(n).into()),
                    "a" => Some(self.regs.a(n).into()),
                    _ => None,
                }
            }
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &[
            "pc", "irc", "ccr", "flags.n", "flags.z", "flags.v", "flags.c", "flags.x", "d0",
            "d1", "d2", "d3", "d4", "d5", "d6", "d7", "a0", "a1", "a2", "a3", "a4", "a5", "a6",
            "a7",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::tests::TraceBus;

    fn stream(words: &[u16]) -> (Cpu68000, TraceBus) {
        let mut bus = TraceBus::new();
        for (i, &w) in words.iter().enumerate() {
            bus.poke_word(0x1000 + 2 * i as u32, w);
        }
        let mut cpu = Cpu68000::new();
        cpu.set_pc(&mut bus, 0x1000);
        bus.cycles.clear();
        (cpu, bus)
    }

    #[test]
    fn byte_immediate_uses_low_half_and_one_word() {
        let (mut cpu, mut bus) = stream(&[0x12AB, 0x3456]);
        assert_eq!(cpu.fetch_immediate(&mut bus, Size::Byte), 0xAB);
        assert_eq!(cpu.regs.pc, 0x1002);
        assert_eq!(cpu.regs.irc, 0x3456);
    }

    #[test]
    fn word_immediate_consumes_one_word() {
        let (mut cpu, mut bus) = stream(&[0xBEEF, 0x0001]);
        assert_eq!(cpu.fetch_immediate(&mut bus, Size::Word), 0xBEEF);
        assert_eq!(cpu.regs.irc, 0x0001);
    }

    #[test]
    fn long_immediate_is_high_word_first() {
        let (mut cpu, mut bus) = stream(&[0xDEAD, 0xBEEF, 0x4E71]);
        assert_eq!(cpu.fetch_immediate(&mut bus, Size::Long), 0xDEAD_BEEF);
        assert_eq!(cpu.regs.pc, 0x1004);
        assert_eq!(cpu.regs.irc, 0x4E71);
        assert_eq!(bus.cycles, vec![('r', 0x1002), ('r', 0x1004)]);
    }

    #[test]
    fn data_register_writes_merge_by_size() {
        let mut cpu = Cpu68000::new();
        cpu.regs.d[2] = 0x1122_3344;
        cpu.write_data_reg(2, 0xFFFF_FFAA, Size::Byte);
        assert_eq!(cpu.regs.d[2], 0x1122_33AA);
        cpu.write_data_reg(2, 0x5555, Size::Word);
        assert_eq!(cpu.regs.d[2], 0x1122_5555);
        cpu.write_data_reg(2, 0x0BAD_F00D, Size::Long);
        assert_eq!(cpu.regs.d[2], 0x0BAD_F00D);
        assert_eq!(cpu.read_data_reg(2, Size::Word), 0xF00D);
    }

    #[test]
    fn observable_paths_resolve() {
        let mut cpu = Cpu68000::new();
        cpu.regs.d[7] = 0x77;
        cpu.regs.a[0] = 0xA0;
        cpu.regs.flags.z = true;
        assert_eq!(cpu.query("d7"), Some(Value::U32(0x77)));
        assert_eq!(cpu.query("a0"), Some(Value::U32(0xA0)));
        assert_eq!(cpu.query("flags.z"), Some(Value::Bool(true)));
        assert_eq!(cpu.query("ccr"), Some(Value::U8(0x04)));
        assert_eq!(cpu.query("d8"), None);
        assert_eq!(cpu.query("x1"), None);
        assert_eq!(cpu.snapshot().len(), cpu.query_paths().len());
    }
}
