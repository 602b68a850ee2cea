//! Application-wide constants and compile-time configuration.
//!
//! All motion geometry, timing parameters, and USB identity constants
//! live here so they can be tuned in one place.

// Motion

/// Cursor displacement per report, in HID units (one axis at a time).
pub const MOUSE_STEP: i8 = 5;

/// Total length of one side of the square, in HID units.
///
/// Must be an exact multiple of [`MOUSE_STEP`] so each side has a whole
/// number of steps and the path closes without drift.
pub const SEGMENT_LENGTH: u32 = 125;

/// Interval between mouse reports (ms). 20 ms = 50 reports per second.
pub const REPORT_INTERVAL_MS: u64 = 20;

/// HID Report ID used for mouse input reports.
///
/// Keep in sync with the Report ID item in
/// `hid::mouse::MOUSE_REPORT_DESCRIPTOR`.
pub const MOUSE_REPORT_ID: u8 = 1;

// USB

/// USB VID/PID - use the "pid.codes" open-source test VID.
/// Replace with your own allocated VID/PID for production.
pub const USB_VID: u16 = 0x1209;
pub const USB_PID: u16 = 0x0002;

/// USB device strings.
pub const USB_MANUFACTURER: &str = "squaremouse";
pub const USB_PRODUCT: &str = "Square Path HID Mouse";
pub const USB_SERIAL_NUMBER: &str = "000001";

/// USB HID polling interval (ms) advertised in the endpoint descriptor.
pub const USB_HID_POLL_MS: u8 = 10;

/// Maximum bus power drawn from the host (mA).
pub const USB_MAX_POWER_MA: u16 = 100;
