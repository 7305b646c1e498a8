//! Mock hardware adapter for integration tests.
//!
//! Records every actuator call and delay request so tests can assert on
//! the full command history without touching real GPIO registers or
//! sleeping for real.

use nightwatch::app::events::AppEvent;
use nightwatch::app::ports::{ActuatorPort, DelayPort, EventSink, SensorPort};
use nightwatch::zone::Zone;

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCall {
    ToggleIndicator(Zone),
    ToggleSounder,
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub calls: Vec<ActuatorCall>,
    motion: [bool; Zone::COUNT],
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            motion: [false; Zone::COUNT],
        }
    }

    /// Set the simulated level of a zone's PIR.
    pub fn set_motion(&mut self, zone: Zone, active: bool) {
        self.motion[zone as usize] = active;
    }

    pub fn indicator_toggles(&self, zone: Zone) -> usize {
        self.calls
            .iter()
            .filter(|c| **c == ActuatorCall::ToggleIndicator(zone))
            .count()
    }

    pub fn sounder_toggles(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| **c == ActuatorCall::ToggleSounder)
            .count()
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorPort for MockHardware {
    fn motion_active(&mut self, zone: Zone) -> bool {
        self.motion[zone as usize]
    }
}

impl ActuatorPort for MockHardware {
    fn toggle_indicator(&mut self, zone: Zone) {
        self.calls.push(ActuatorCall::ToggleIndicator(zone));
    }

    fn toggle_sounder(&mut self) {
        self.calls.push(ActuatorCall::ToggleSounder);
    }
}

// ── MockDelay ─────────────────────────────────────────────────

/// Returns instantly but records every requested delay, so tests can
/// verify debounce and pulse spacing without real elapsed time.
pub struct MockDelay {
    pub requested_ms: Vec<u32>,
}

#[allow(dead_code)]
impl MockDelay {
    pub fn new() -> Self {
        Self {
            requested_ms: Vec::new(),
        }
    }

    pub fn total_ms(&self) -> u64 {
        self.requested_ms.iter().map(|&ms| u64::from(ms)).sum()
    }
}

impl Default for MockDelay {
    fn default() -> Self {
        Self::new()
    }
}

impl DelayPort for MockDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.requested_ms.push(ms);
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn triggered_zones(&self) -> Vec<Zone> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::AlarmTriggered { zone } => Some(*zone),
                AppEvent::Started => None,
            })
            .collect()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}
