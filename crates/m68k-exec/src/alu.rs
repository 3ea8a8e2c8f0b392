//! Arithmetic unit: ADD, ADDX, SUB, SUBX, CMP.
//!
//! Operands are zero-extended into a 64-bit accumulator so the carry or
//! borrow out of the operand size is visible at bit `size.bits()`.

use crate::flags::Flags;
use crate::size::Size;

/// Which arithmetic operation to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    /// ADD with X as a third operand.
    Addx,
    Sub,
    /// SUB with X as an additional borrow.
    Subx,
    /// SUB flags without X; the result is discarded by the caller.
    Cmp,
}

/// Compute `b op a` at `size` and update the flags.
///
/// `a` is the source operand and `b` the destination, so SUB yields
/// `b - a`. Returns the size-truncated result.
pub fn arith(flags: &mut Flags, op: ArithOp, size: Size, a: u32, b: u32) -> u32 {
    let a = u64::from(size.clip(u64::from(a)));
    let b = u64::from(size.clip(u64::from(b)));
    let x = u64::from(flags.x);

    let result = match op {
        ArithOp::Add | ArithOp::Addx => {
            let result = if op == ArithOp::Addx { a + b + x } else { a + b };
            flags.c = size.carry(result);
            flags.x = flags.c;
            flags.v = size.msb((a ^ result) & (b ^ result));
            result
        }
        ArithOp::Sub | ArithOp::Subx | ArithOp::Cmp => {
            let result = if op == ArithOp::Subx {
                b.wrapping_sub(a).wrapping_sub(x)
            } else {
                b.wrapping_sub(a)
            };
            flags.c = size.carry(result);
            if op != ArithOp::Cmp {
                flags.x = flags.c;
            }
            flags.v = size.msb((a ^ b) & (b ^ result));
            result
        }
    };

    // Extended ops only ever clear Z so a multi-precision chain reports
    // zero only if every limb was zero.
    if matches!(op, ArithOp::Addx | ArithOp::Subx) {
        if !size.is_zero(result) {
            flags.z = false;
        }
    } else {
        flags.z = size.is_zero(result);
    }
    flags.n = size.msb(result);
    size.clip(result)
}
