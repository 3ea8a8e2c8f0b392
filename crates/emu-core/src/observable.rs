//! Observability trait for inspecting component state.
//!
//! Every emulator component exposes its internal state for education and
//! debugging. Queries never affect emulation state.

use std::fmt;

/// A dynamically-typed value returned by a state query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// A single flag or line.
    Bool(bool),
    /// 8-bit register (e.g. a condition code byte).
    U8(u8),
    /// 16-bit register (e.g. a prefetch word).
    U16(u16),
    /// 32-bit register.
    U32(u32),
}

impl Value {
    /// Widen any numeric value to `u32`. Booleans map to 0/1.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        match self {
            Value::Bool(v) => v as u32,
            Value::U8(v) => v as u32,
            Value::U16(v) => v as u32,
            Value::U32(v) => v,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{}", u8::from(*v)),
            Value::U8(v) => write!(f, "${v:02X}"),
            Value::U16(v) => write!(f, "${v:04X}"),
            Value::U32(v) => write!(f, "${v:08X}"),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::U8(v)
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::U16(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::U32(v)
    }
}

/// A component whose state can be inspected.
pub trait Observable {
    /// Query a specific property by path.
    ///
    /// Paths are hierarchical, separated by dots:
    /// - `pc` - Program counter
    /// - `d0` - Data register 0
    /// - `flags.z` - Zero flag
    ///
    /// Returns `None` if the path is not recognised.
    fn query(&self, path: &str) -> Option<Value>;

    /// List all available query paths.
    fn query_paths(&self) -> &'static [&'static str];

    /// Query every path in [`query_paths`](Self::query_paths), in order.
    fn snapshot(&self) -> Vec<(&'static str, Value)> {
        self.query_paths()
            .iter()
            .filter_map(|&path| self.query(path).map(|v| (path, v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Latch {
        open: bool,
        data: u8,
    }

    impl Observable for Latch {
        fn query(&self, path: &str) -> Option<Value> {
            match path {
                "open" => Some(self.open.into()),
                "data" => Some(self.data.into()),
                _ => None,
            }
        }

        fn query_paths(&self) -> &'static [&'static str] {
            &["open", "data", "missing"]
        }
    }

    #[test]
    fn snapshot_skips_unknown_paths() {
        let latch = Latch { open: true, data: 0x42 };
        let snap = latch.snapshot();
        assert_eq!(snap, vec![("open", Value::Bool(true)), ("data", Value::U8(0x42))]);
    }

    #[test]
    fn display_uses_hex_widths() {
        assert_eq!(Value::U8(0x0F).to_string(), "$0F");
        assert_eq!(Value::U16(0xBEEF).to_string(), "$BEEF");
        assert_eq!(Value::U32(0x10).to_string(), "$00000010");
        assert_eq!(Value::Bool(false).to_string(), "0");
    }

    #[test]
    fn as_u32_widens() {
        assert_eq!(Value::Bool(true).as_u32(), 1);
        assert_eq!(Value::U16(0x8000).as_u32(), 0x8000);
    }
}
