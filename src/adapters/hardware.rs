//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the PIR input pins and both output drivers, exposing them through
//! [`SensorPort`] and [`ActuatorPort`].  Together with `hw_init`, this is
//! the only module in the system that touches actual hardware.  On
//! non-espidf targets the underlying pin access is a cfg-gated simulation
//! stub.

use crate::app::ports::{ActuatorPort, SensorPort};
use crate::drivers::hw_init;
use crate::drivers::indicator::Indicator;
use crate::drivers::sounder::Sounder;
use crate::pins;
use crate::zone::Zone;

/// Concrete adapter that combines all hardware behind the port traits.
pub struct HardwareAdapter {
    pir_gpios: [i32; Zone::COUNT],
    indicators: [Indicator; Zone::COUNT],
    sounder: Sounder,
}

impl HardwareAdapter {
    pub fn new(indicators: [Indicator; Zone::COUNT], sounder: Sounder) -> Self {
        Self {
            pir_gpios: [pins::BEDROOM_PIR_GPIO, pins::LIVING_ROOM_PIR_GPIO],
            indicators,
            sounder,
        }
    }

    /// Commanded level of a zone indicator (for status reporting).
    pub fn indicator_level(&self, zone: Zone) -> bool {
        self.indicators[zone as usize].level()
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn motion_active(&mut self, zone: Zone) -> bool {
        hw_init::gpio_read(self.pir_gpios[zone as usize])
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn toggle_indicator(&mut self, zone: Zone) {
        self.indicators[zone as usize].toggle();
    }

    fn toggle_sounder(&mut self) {
        self.sounder.toggle();
    }
}
