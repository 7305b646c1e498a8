//! Monitored zone identity.
//!
//! Each zone owns one PIR sensor and one indicator LED; the sounder is
//! shared.  The `Display` text is what appears in the alarm line, so it is
//! load-bearing — keep it lowercase and human-readable.

use serde::{Deserialize, Serialize};

/// One of the two monitored areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Zone {
    Bedroom = 0,
    LivingRoom = 1,
}

impl Zone {
    /// Total number of zones — used to size per-zone arrays.
    pub const COUNT: usize = 2;

    /// All zones, in index order.
    pub const ALL: [Zone; Zone::COUNT] = [Zone::Bedroom, Zone::LivingRoom];

    /// Convert a `u8` index back to a `Zone`.  Panics on out-of-range in
    /// debug builds; returns `Bedroom` in release (safe fallback).
    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Self::Bedroom,
            1 => Self::LivingRoom,
            _ => {
                debug_assert!(false, "invalid zone index: {idx}");
                Self::Bedroom
            }
        }
    }

    /// Name as spoken in alarm messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bedroom => "bedroom",
            Self::LivingRoom => "living room",
        }
    }
}

impl core::fmt::Display for Zone {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
