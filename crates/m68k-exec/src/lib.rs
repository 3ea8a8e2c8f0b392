//! Motorola 68000 instruction semantics.
//!
//! This crate is the part of a 68000 core that instruction handlers call
//! once an opcode has been decoded: effective-address resolution with its
//! register side effects, the extension-word prefetch pipeline, sized bus
//! access with address-error detection, and the arithmetic and shift/rotate
//! units with bit-exact condition codes.
//!
//! Opcode dispatch, exception processing and timing live in the processor
//! layer above this crate.

pub mod addressing;
pub mod alu;
pub mod bus;
pub mod cpu;
mod ea;
pub mod error;
pub mod flags;
pub mod memory;
pub mod registers;
pub mod shifts;
pub mod size;

pub use addressing::AddrMode;
pub use alu::ArithOp;
pub use bus::{ADDRESS_MASK, M68kBus};
pub use cpu::Cpu68000;
pub use error::{Access, AddressError};
pub use flags::{C, Flags, N, V, X, Z};
pub use registers::Registers;
pub use shifts::ShiftOp;
pub use size::Size;
