//! Faults raised by the core to the processor's exception layer.

use thiserror::Error;

use crate::size::Size;

/// Direction of the bus access that faulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

/// Word or long access to an odd address.
///
/// The access is suppressed; the caller decides trap semantics (on real
/// hardware this is exception vector 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("address error: {access:?} {size:?} at ${addr:08X}")]
pub struct AddressError {
    pub addr: u32,
    pub size: Size,
    pub access: Access,
}
