//! GPIO pin assignments for the NightWatch main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// PIR motion sensors (HC-SR501, digital output, external pull-down)
// ---------------------------------------------------------------------------

/// Digital input: bedroom zone PIR. HIGH while motion is detected.
/// Rising-edge interrupt source.
pub const BEDROOM_PIR_GPIO: i32 = 4;
/// Digital input: living-room zone PIR. HIGH while motion is detected.
/// Rising-edge interrupt source.
pub const LIVING_ROOM_PIR_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// Zone indicator LEDs (active HIGH through a series resistor)
// ---------------------------------------------------------------------------

/// Digital output: bedroom zone indicator LED.
pub const BEDROOM_LED_GPIO: i32 = 6;
/// Digital output: living-room zone indicator LED.
pub const LIVING_ROOM_LED_GPIO: i32 = 7;

// ---------------------------------------------------------------------------
// Sounder (piezo buzzer through an NPN driver, active HIGH)
// ---------------------------------------------------------------------------

/// Digital output: shared alarm sounder, driven during pulse sequences only.
pub const SOUNDER_GPIO: i32 = 8;
