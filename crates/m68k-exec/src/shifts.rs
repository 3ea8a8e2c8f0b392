//! Shift and rotate unit: ASL, ASR, LSL, LSR, ROL, ROR, ROXL, ROXR.
//!
//! Every operation runs as `count` single-bit steps. The V flag of the
//! arithmetic shifts depends on the sign bit at every step, not only on the
//! final value, so there is no closed-form shortcut.
//!
//! Count 0 clears C (ROXL/ROXR copy X into C instead) and leaves X alone.

use crate::flags::Flags;
use crate::size::Size;

/// Which shift or rotate to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftOp {
    Asl,
    Asr,
    Lsl,
    Lsr,
    Rol,
    Ror,
    Roxl,
    Roxr,
}

impl ShiftOp {
    /// Decode the two-bit type field (00=AS, 01=LS, 10=ROX, 11=RO) and the
    /// direction bit of a shift opcode.
    #[must_use]
    pub const fn from_bits(kind: u8, left: bool) -> Option<Self> {
        Some(match (kind, left) {
            (0, true) => Self::Asl,
            (0, false) => Self::Asr,
            (1, true) => Self::Lsl,
            (1, false) => Self::Lsr,
            (2, true) => Self::Roxl,
            (2, false) => Self::Roxr,
            (3, true) => Self::Rol,
            (3, false) => Self::Ror,
            _ => return None,
        })
    }
}

/// Shift or rotate `data` at `size` by `count` steps and update the flags.
///
/// Returns the size-truncated result.
pub fn shift(flags: &mut Flags, op: ShiftOp, size: Size, count: u32, data: u32) -> u32 {
    let msb = u64::from(size.msb_mask());
    let mut data = u64::from(size.clip(u64::from(data)));
    let mut carry = false;

    match op {
        ShiftOp::Asl | ShiftOp::Asr => {
            let mut changed = 0u64;
            for _ in 0..count {
                let shifted = if op == ShiftOp::Asl {
                    carry = size.msb(data);
                    data << 1
                } else {
                    carry = data & 1 != 0;
                    u64::from(size.clip((size.sign_extend(data) >> 1) as u32 as u64))
                };
                changed |= data ^ shifted;
                data = shifted;
            }
            if count > 0 {
                flags.x = carry;
            }
            flags.c = carry;
            flags.v = size.msb(changed);
        }
        ShiftOp::Lsl | ShiftOp::Lsr => {
            for _ in 0..count {
                if op == ShiftOp::Lsl {
                    carry = size.msb(data);
                    data <<= 1;
                } else {
                    carry = data & 1 != 0;
                    data >>= 1;
                }
            }
            if count > 0 {
                flags.x = carry;
            }
            flags.c = carry;
            flags.v = false;
        }
        ShiftOp::Rol | ShiftOp::Ror => {
            for _ in 0..count {
                if op == ShiftOp::Rol {
                    carry = size.msb(data);
                    data = u64::from(size.clip(data << 1)) | u64::from(carry);
                } else {
                    carry = data & 1 != 0;
                    data = (data >> 1) | if carry { msb } else { 0 };
                }
            }
            flags.c = carry;
            flags.v = false;
        }
        ShiftOp::Roxl | ShiftOp::Roxr => {
            let mut extend = flags.x;
            for _ in 0..count {
                if op == ShiftOp::Roxl {
                    carry = size.msb(data);
                    data = u64::from(size.clip(data << 1)) | u64::from(extend);
                } else {
                    carry = data & 1 != 0;
                    data = (data >> 1) | if extend { msb } else { 0 };
                }
                extend = carry;
            }
            flags.x = extend;
            flags.c = extend;
            flags.v = false;
        }
    }

    flags.n = size.msb(data);
    flags.z = size.is_zero(data);
    size.clip(data)
}
