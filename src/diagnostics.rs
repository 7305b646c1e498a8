//! Runtime diagnostics: recent-alarm history.
//!
//! Keeps the last few confirmed alarms in a fixed-size ring so a service
//! technician with a serial console can ask "what fired, and when" without
//! scrolling the whole log.  Volatile by design — nothing here survives a
//! reset, and debounce-rejected transients are never recorded.

use serde::{Deserialize, Serialize};

use crate::zone::Zone;

/// Number of alarm records retained before the oldest is overwritten.
const HISTORY_SLOTS: usize = 16;

/// One confirmed alarm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmRecord {
    /// Zone whose sensor confirmed motion.
    pub zone: Zone,
    /// Monotonic uptime at confirmation (milliseconds since boot).
    pub uptime_ms: u64,
}

/// Fixed-capacity ring of recent confirmed alarms.
#[derive(Debug, Default)]
pub struct AlarmHistory {
    entries: heapless::Vec<AlarmRecord, HISTORY_SLOTS>,
    write_index: usize,
}

impl AlarmHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a confirmed alarm, overwriting the oldest slot when full.
    pub fn record(&mut self, zone: Zone, uptime_ms: u64) {
        let entry = AlarmRecord { zone, uptime_ms };
        if self.entries.push(entry).is_err() {
            self.entries[self.write_index] = entry;
        }
        self.write_index = (self.write_index + 1) % HISTORY_SLOTS;
    }

    /// Stored records, in slot order (not chronological once wrapped).
    pub fn entries(&self) -> &[AlarmRecord] {
        &self.entries
    }

    /// Number of stored records (saturates at the ring capacity).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recently recorded alarm, if any.
    pub fn last(&self) -> Option<&AlarmRecord> {
        if self.entries.is_empty() {
            return None;
        }
        let idx = (self.write_index + HISTORY_SLOTS - 1) % HISTORY_SLOTS;
        self.entries.get(idx.min(self.entries.len() - 1))
    }

    /// Drop all records.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.write_index = 0;
    }
}
