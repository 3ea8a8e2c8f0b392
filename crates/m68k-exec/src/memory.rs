//! Sized reads and writes through the 16-bit bus.
//!
//! Byte and word accesses map to one bus cycle. Long accesses are two word
//! cycles, high word first at `addr`, low word at `addr + 2`. Write addresses
//! are masked to the 24-bit physical bus; read addresses are passed through
//! and left to the bus.

use crate::bus::{ADDRESS_MASK, M68kBus};
use crate::error::{Access, AddressError};
use crate::size::Size;

/// Check a word/long access for an odd address.
///
/// Compiles to `Ok(())` without the `address-error` feature.
#[inline]
pub fn check_alignment(size: Size, addr: u32, access: Access) -> Result<(), AddressError> {
    if cfg!(feature = "address-error") && size != Size::Byte && addr & 1 != 0 {
        tracing::debug!(addr, ?size, ?access, "address error");
        return Err(AddressError { addr, size, access });
    }
    Ok(())
}

/// Read a sized value from the bus.
pub fn read<B: M68kBus>(bus: &mut B, size: Size, addr: u32) -> Result<u32, AddressError> {
    check_alignment(size, addr, Access::Read)?;
    Ok(match size {
        Size::Byte => u32::from(bus.read_byte(addr)),
        Size::Word => u32::from(bus.read_word(addr)),
        Size::Long => {
            let hi = bus.read_word(addr);
            let lo = bus.read_word(addr.wrapping_add(2));
            (u32::from(hi) << 16) | u32::from(lo)
        }
    })
}

/// Write a sized value to the bus. Bits above the operand size are ignored.
pub fn write<B: M68kBus>(
    bus: &mut B,
    size: Size,
    addr: u32,
    value: u32,
) -> Result<(), AddressError> {
    check_alignment(size, addr, Access::Write)?;
    match size {
        Size::Byte => bus.write_byte(addr & ADDRESS_MASK, value as u8),
        Size::Word => bus.write_word(addr & ADDRESS_MASK, value as u16),
        Size::Long => {
            bus.write_word(addr & ADDRESS_MASK, (value >> 16) as u16);
            bus.write_word(addr.wrapping_add(2) & ADDRESS_MASK, value as u16);
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Flat 64K RAM recording every bus cycle.
    pub(crate) struct TraceBus {
        pub(crate) ram: Vec<u8>,
        pub(crate) cycles: Vec<(char, u32)>,
    }

    impl TraceBus {
        pub(crate) fn new() -> Self {
            Self {
                ram: vec![0; 0x1_0000],
                cycles: Vec::new(),
            }
        }

        pub(crate) fn poke_word(&mut self, addr: u32, value: u16) {
            let a = (addr & 0xFFFF) as usize;
            self.ram[a] = (value >> 8) as u8;
            self.ram[a + 1] = value as u8;
        }
    }

    impl M68kBus for TraceBus {
        fn read_byte(&mut self, addr: u32) -> u8 {
            self.cycles.push(('b', addr));
            self.ram[(addr & 0xFFFF) as usize]
        }

        fn read_word(&mut self, addr: u32) -> u16 {
            self.cycles.push(('r', addr));
            let a = (addr & 0xFFFE) as usize;
            u16::from(self.ram[a]) << 8 | u16::from(self.ram[a + 1])
        }

        fn write_byte(&mut self, addr: u32, value: u8) {
            self.cycles.push(('B', addr));
            self.ram[(addr & 0xFFFF) as usize] = value;
        }

        fn write_word(&mut self, addr: u32, value: u16) {
            self.cycles.push(('w', addr));
            let a = (addr & 0xFFFE) as usize;
            self.ram[a] = (value >> 8) as u8;
            self.ram[a + 1] = value as u8;
        }
    }

    #[test]
    fn long_read_is_high_word_first() {
        let mut bus = TraceBus::new();
        bus.poke_word(0x100, 0x1234);
        bus.poke_word(0x102, 0x5678);
        assert_eq!(read(&mut bus, Size::Long, 0x100), Ok(0x1234_5678));
        assert_eq!(bus.cycles, vec![('r', 0x100), ('r', 0x102)]);
    }

    #[test]
    fn long_write_is_high_word_first_and_masked() {
        let mut bus = TraceBus::new();
        write(&mut bus, Size::Long, 0xFF00_0200, 0xCAFE_BABE).expect("aligned");
        assert_eq!(bus.cycles, vec![('w', 0x0000_0200), ('w', 0x0000_0202)]);
        assert_eq!(read(&mut bus, Size::Long, 0x200), Ok(0xCAFE_BABE));
    }

    #[test]
    fn narrow_writes_truncate() {
        let mut bus = TraceBus::new();
        write(&mut bus, Size::Byte, 0x301, 0xABCD).expect("byte");
        write(&mut bus, Size::Word, 0x302, 0x1_2345).expect("aligned");
        assert_eq!(read(&mut bus, Size::Byte, 0x301), Ok(0xCD));
        assert_eq!(read(&mut bus, Size::Word, 0x302), Ok(0x2345));
    }

    #[test]
    fn odd_byte_access_is_always_allowed() {
        let mut bus = TraceBus::new();
        assert!(read(&mut bus, Size::Byte, 0x401).is_ok());
        assert!(write(&mut bus, Size::Byte, 0x401, 0).is_ok());
    }

    #[cfg(feature = "address-error")]
    #[test]
    fn odd_word_access_faults_without_touching_the_bus() {
        let mut bus = TraceBus::new();
        let err = read(&mut bus, Size::Long, 0x501).expect_err("odd long read");
        assert_eq!(
            err,
            AddressError {
                addr: 0x501,
                size: Size::Long,
                access: Access::Read
            }
        );
        let err = write(&mut bus, Size::Word, 0x503, 0).expect_err("odd word write");
        assert_eq!(err.access, Access::Write);
        assert!(bus.cycles.is_empty());
    }

    #[cfg(not(feature = "address-error"))]
    #[test]
    fn odd_word_access_reaches_the_bus_unchecked() {
        let mut bus = TraceBus::new();
        assert!(read(&mut bus, Size::Word, 0x501).is_ok());
        assert_eq!(bus.cycles, vec![('r', 0x501)]);
    }
}
