//! Outbound application events.
//!
//! The [`AlarmService`](super::service::AlarmService) emits these through
//! the [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them — today that is the serial log.

use crate::zone::Zone;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Monitoring has started; ISRs are armed and the heartbeat is running.
    Started,

    /// A debounce-confirmed motion trigger.  Emitted exactly once per
    /// confirmed trigger, before the pulse sequence begins.  Rejected
    /// transients emit nothing.
    AlarmTriggered { zone: Zone },
}
