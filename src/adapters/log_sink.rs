//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events to the ESP-IDF
//! logger (which goes to UART / USB-CDC in production).  The alarm line
//! format is fixed vocabulary — monitoring tooling greps for it.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => {
                info!("READY | monitoring bedroom and living room");
            }
            AppEvent::AlarmTriggered { zone } => {
                info!("ALARM! Motion detected in {}!", zone);
            }
        }
    }
}
