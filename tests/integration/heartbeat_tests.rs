//! Integration tests for the heartbeat liveness toggles.

use crate::mock_hw::{MockDelay, MockHardware, RecordingSink};

use nightwatch::app::service::AlarmService;
use nightwatch::config::SystemConfig;
use nightwatch::zone::Zone;

// ── Quiet period: 5 heartbeat intervals, no triggers ──────────

#[test]
fn idle_heartbeat_toggles_each_indicator_once_per_interval() {
    let mut app = AlarmService::new(SystemConfig::default());
    let mut hw = MockHardware::new();

    for _ in 0..5 {
        app.heartbeat_tick(&mut hw);
    }

    assert_eq!(hw.indicator_toggles(Zone::Bedroom), 5);
    assert_eq!(hw.indicator_toggles(Zone::LivingRoom), 5);
    assert_eq!(hw.sounder_toggles(), 0, "heartbeat never drives the sounder");
    assert_eq!(app.heartbeat_count(), 5);
}

// ── Heartbeat interleaved with an alert ───────────────────────

#[test]
fn heartbeat_and_alert_toggles_accumulate_independently() {
    let mut app = AlarmService::new(SystemConfig::default());
    let mut hw = MockHardware::new();
    let mut delay = MockDelay::new();
    let mut sink = RecordingSink::new();
    hw.set_motion(Zone::Bedroom, true);

    app.heartbeat_tick(&mut hw);
    app.handle_motion(Zone::Bedroom, 1_000, &mut hw, &mut delay, &mut sink);
    app.heartbeat_tick(&mut hw);

    // 2 heartbeat flips + 10 alert flips for the bedroom indicator; the
    // living-room indicator sees only the heartbeat.
    assert_eq!(hw.indicator_toggles(Zone::Bedroom), 12);
    assert_eq!(hw.indicator_toggles(Zone::LivingRoom), 2);
    assert_eq!(hw.sounder_toggles(), 10);
}
