//! Application service — the hexagonal core.
//!
//! [`AlarmService`] owns the alarm history and implements the two pieces of
//! behavioural logic in the system: the debounced motion-alert handler and
//! the heartbeat.  All I/O flows through port traits injected at call
//! sites, making the entire service testable with mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │      AlarmService       │
//! ActuatorPort ◀──│  debounce · pulse · HB  │◀── DelayPort
//!                 └────────────────────────┘
//! ```

use log::info;

use crate::config::SystemConfig;
use crate::diagnostics::AlarmHistory;
use crate::zone::Zone;

use super::events::AppEvent;
use super::ports::{ActuatorPort, DelayPort, EventSink, SensorPort};

// ───────────────────────────────────────────────────────────────
// AlarmService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AlarmService {
    config: SystemConfig,
    history: AlarmHistory,
    heartbeat_count: u64,
}

impl AlarmService {
    /// Construct the service from configuration.
    pub fn new(config: SystemConfig) -> Self {
        Self {
            config,
            history: AlarmHistory::new(),
            heartbeat_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce that monitoring is live.  Call once, after the ISRs are
    /// armed and before the first heartbeat.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started);
        info!("AlarmService monitoring {} zones", Zone::COUNT);
    }

    // ── Motion alert handler ──────────────────────────────────

    /// Handle a rising-edge motion event for `zone`.
    ///
    /// Waits out the debounce window, re-reads the sensor, and either
    /// silently rejects the transient or runs the full pulse sequence:
    /// `pulse_count` paired toggles of the zone indicator and the shared
    /// sounder, `pulse_interval_ms` apart, always in phase.
    ///
    /// Runs to completion on the caller's context; a new edge arriving
    /// meanwhile waits in the event queue (no reentrancy).
    ///
    /// Returns `true` if the trigger was confirmed.
    pub fn handle_motion(
        &mut self,
        zone: Zone,
        now_ms: u64,
        hw: &mut (impl SensorPort + ActuatorPort),
        delay: &mut impl DelayPort,
        sink: &mut impl EventSink,
    ) -> bool {
        delay.delay_ms(self.config.debounce_ms);

        if !hw.motion_active(zone) {
            // Transient below the hold duration. No message, no side effects.
            return false;
        }

        sink.emit(&AppEvent::AlarmTriggered { zone });
        self.history.record(zone, now_ms);

        for _ in 0..self.config.pulse_count {
            hw.toggle_indicator(zone);
            hw.toggle_sounder();
            delay.delay_ms(self.config.pulse_interval_ms);
        }

        true
    }

    // ── Heartbeat ─────────────────────────────────────────────

    /// One liveness tick: flip both zone indicators.
    ///
    /// Runs regardless of alarm state and never touches the sounder.  An
    /// alert sequence may interleave with this from the queue's point of
    /// view; both writers are plain level flips, so no exclusion is needed.
    pub fn heartbeat_tick(&mut self, hw: &mut impl ActuatorPort) {
        for zone in Zone::ALL {
            hw.toggle_indicator(zone);
        }
        self.heartbeat_count += 1;
    }

    // ── Queries ───────────────────────────────────────────────

    /// Recent confirmed alarms.
    pub fn history(&self) -> &AlarmHistory {
        &self.history
    }

    /// Total heartbeat ticks since startup.
    pub fn heartbeat_count(&self) -> u64 {
        self.heartbeat_count
    }

    /// The live configuration.
    pub fn config(&self) -> &SystemConfig {
        &self.config
    }
}
