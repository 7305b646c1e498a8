//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AlarmService (domain)
//! ```
//!
//! Driven adapters (PIR inputs, indicator/sounder outputs, event sinks,
//! delays) implement these traits.  The
//! [`AlarmService`](super::service::AlarmService) consumes them via
//! generics, so the domain core never touches hardware directly and tests
//! can substitute recording mocks and an instant clock.
//!
//! Pin reads and writes are modelled as infallible: at this level a GPIO
//! register access cannot meaningfully fail, and there is no recovery story
//! if it did.  Fallibility lives in one place only — peripheral
//! initialisation ([`HwInitError`](crate::drivers::hw_init::HwInitError)).

use crate::zone::Zone;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to confirm a sensor level.
pub trait SensorPort {
    /// Current level of the zone's motion sensor. `true` = motion present.
    fn motion_active(&mut self, zone: Zone) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to flip output levels.
///
/// Toggles are intentionally the only write primitive — both the alert
/// pulse sequence and the heartbeat are defined in terms of level flips,
/// and a flip needs no knowledge of the current phase.
pub trait ActuatorPort {
    /// Invert the zone's indicator LED level.
    fn toggle_indicator(&mut self, zone: Zone);

    /// Invert the shared sounder level.
    fn toggle_sounder(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log today;
/// anything else tomorrow).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Delay port (driven adapter: domain → time)
// ───────────────────────────────────────────────────────────────

/// Blocking delay used for the debounce window and pulse spacing.
///
/// Injected rather than called directly so host tests can observe the
/// requested delays and return instantly instead of sleeping for real.
pub trait DelayPort {
    fn delay_ms(&mut self, ms: u32);
}
