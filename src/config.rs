//! System configuration parameters
//!
//! All tunable timing for the NightWatch alarm. The defaults reproduce the
//! reference board behaviour: 100 ms debounce, ten 100 ms pulses, 1 Hz
//! heartbeat.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Alert handling ---
    /// Wait after a rising edge before re-reading the sensor (milliseconds).
    /// A sensor that has dropped back low within this window is treated as a
    /// transient and produces no alarm.
    pub debounce_ms: u32,
    /// Number of indicator/sounder toggles in one alarm pulse sequence.
    pub pulse_count: u8,
    /// Pause after each toggle in the pulse sequence (milliseconds).
    pub pulse_interval_ms: u32,

    // --- Heartbeat ---
    /// Interval between liveness toggles of both indicators (milliseconds).
    pub heartbeat_interval_ms: u32,

    // --- Main loop ---
    /// Event-queue poll interval (milliseconds). Bounds the latency between
    /// a PIR edge interrupt and the start of the alert handler.
    pub control_loop_interval_ms: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Alert handling
            debounce_ms: 100,
            pulse_count: 10,
            pulse_interval_ms: 100,

            // Heartbeat
            heartbeat_interval_ms: 1000,

            // Main loop
            control_loop_interval_ms: 10,
        }
    }
}
