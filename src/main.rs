//! NightWatch Firmware — Main Entry Point
//!
//! Hexagonal architecture with interrupt-driven alerting:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                     │
//! │                                                              │
//! │  HardwareAdapter     LogEventSink    Esp32TimeAdapter        │
//! │  (Sensor+Actuator)   (EventSink)     SystemDelay (DelayPort) │
//! │                                                              │
//! │  ─────────────── Port Trait Boundary ──────────────────      │
//! │                                                              │
//! │  ┌──────────────────────────────────────────────────────┐    │
//! │  │            AlarmService (pure logic)                 │    │
//! │  │  debounce confirm · pulse sequence · heartbeat       │    │
//! │  └──────────────────────────────────────────────────────┘    │
//! │                                                              │
//! │  PIR ISRs ──▶ event queue ──▶ main loop (this file)          │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use nightwatch::adapters::hardware::HardwareAdapter;
use nightwatch::adapters::log_sink::LogEventSink;
use nightwatch::adapters::time::{Esp32TimeAdapter, SystemDelay};
use nightwatch::app::ports::DelayPort;
use nightwatch::app::service::AlarmService;
use nightwatch::config::SystemConfig;
use nightwatch::drivers::hw_init;
use nightwatch::drivers::indicator::Indicator;
use nightwatch::drivers::sounder::Sounder;
use nightwatch::events;
use nightwatch::pins;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("NightWatch v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Initialise hardware peripherals ────────────────────
    hw_init::init_peripherals()?;
    hw_init::init_isr_service()?;

    // ── 3. Construct adapters ─────────────────────────────────
    let mut hw = HardwareAdapter::new(
        [
            Indicator::new(pins::BEDROOM_LED_GPIO),
            Indicator::new(pins::LIVING_ROOM_LED_GPIO),
        ],
        Sounder::new(pins::SOUNDER_GPIO),
    );

    let mut sink = LogEventSink::new();
    let mut delay = SystemDelay::new();
    let time = Esp32TimeAdapter::new();

    // ── 4. Construct app service ──────────────────────────────
    let config = SystemConfig::default();
    let mut app = AlarmService::new(config.clone());
    app.start(&mut sink);

    info!("System ready. Entering event loop.");

    // ── 5. Event loop ─────────────────────────────────────────
    //
    // The loop sleeps in short control ticks so a queued motion event is
    // picked up within `control_loop_interval_ms`.  Heartbeat time only
    // accumulates across these ticks: while an alert sequence is running
    // the heartbeat is paused, and it resumes when the handler returns.
    let mut heartbeat_elapsed_ms: u32 = 0;

    loop {
        delay.delay_ms(config.control_loop_interval_ms);

        heartbeat_elapsed_ms += config.control_loop_interval_ms;
        if heartbeat_elapsed_ms >= config.heartbeat_interval_ms {
            heartbeat_elapsed_ms -= config.heartbeat_interval_ms;
            app.heartbeat_tick(&mut hw);
        }

        // Process all pending motion events; each handler runs to
        // completion (debounce + pulse sequence) before the next starts.
        events::drain_events(|event| {
            let confirmed = app.handle_motion(
                event.zone(),
                time.uptime_ms(),
                &mut hw,
                &mut delay,
                &mut sink,
            );
            if confirmed {
                info!(
                    "alarm #{} handled for zone '{}'",
                    app.history().len(),
                    event.zone()
                );
            }
        });
    }
}
