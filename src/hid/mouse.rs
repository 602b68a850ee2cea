//! USB HID mouse report with Report ID.
//!
//! Layout on the wire (6 bytes, Report ID first):
//! ```text
//! Byte 0: Report ID (1)
//! Byte 1: Button bitfield
//!         Bit 0 = Left, Bit 1 = Right, Bit 2 = Middle, Bits 3-4 = Back/Forward
//! Byte 2: X displacement (signed, -127..127)
//! Byte 3: Y displacement (signed, -127..127)
//! Byte 4: Scroll wheel  (signed, -127..127)
//! Byte 5: Horizontal pan (signed, -127..127)
//! ```

/// Mouse report payload size in bytes (excluding the Report ID).
pub const MOUSE_REPORT_SIZE: usize = 5;

/// Five-axis USB HID mouse report.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MouseReport {
    /// Button bitfield (bit 0 = left, bit 1 = right, bit 2 = middle).
    pub buttons: u8,
    /// Relative X movement (signed).
    pub x: i8,
    /// Relative Y movement (signed).
    pub y: i8,
    /// Scroll wheel delta (signed).
    pub wheel: i8,
    /// Horizontal pan delta (signed).
    pub pan: i8,
}

impl MouseReport {
    /// Create an idle (no movement, no buttons) report.
    #[cfg(test)]
    pub const fn empty() -> Self {
        Self {
            buttons: 0,
            x: 0,
            y: 0,
            wheel: 0,
            pan: 0,
        }
    }

    /// Pure-movement report: no buttons, no wheel, no pan.
    pub const fn moving(x: i8, y: i8) -> Self {
        Self {
            buttons: 0,
            x,
            y,
            wheel: 0,
            pan: 0,
        }
    }

    /// Serialise the payload (without Report ID) into a byte slice.
    /// Returns the number of bytes written (always 5), or 0 if the
    /// buffer is too small.
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        if buf.len() < MOUSE_REPORT_SIZE {
            return 0;
        }
        buf[0] = self.buttons;
        buf[1] = self.x as u8;
        buf[2] = self.y as u8;
        buf[3] = self.wheel as u8;
        buf[4] = self.pan as u8;
        MOUSE_REPORT_SIZE
    }

    /// Serialise with a leading Report ID byte, as the interrupt IN
    /// endpoint expects when the report descriptor declares Report IDs.
    /// Returns the number of bytes written (always 6), or 0 if the
    /// buffer is too small.
    pub fn serialize_with_id(&self, report_id: u8, buf: &mut [u8]) -> usize {
        if buf.len() < MOUSE_REPORT_SIZE + 1 {
            return 0;
        }
        buf[0] = report_id;
        let written = self.serialize(&mut buf[1..]);
        if written == 0 {
            return 0;
        }
        written + 1
    }

    /// Returns `true` when no buttons are pressed and there is no movement.
    #[cfg(test)]
    pub fn is_idle(&self) -> bool {
        self.buttons == 0 && self.x == 0 && self.y == 0 && self.wheel == 0 && self.pan == 0
    }
}

// USB HID report descriptor for a five-button mouse with wheel and pan

/// USB HID Report Descriptor for a 5-button mouse with scroll wheel and
/// horizontal pan, reported under Report ID 1.
pub const MOUSE_REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x02, // Usage (Mouse)
    0xA1, 0x01, // Collection (Application)
    0x85, 0x01, //   Report ID (1) - keep in sync with config::MOUSE_REPORT_ID
    0x09, 0x01, //   Usage (Pointer)
    0xA1, 0x00, //   Collection (Physical)
    //
    //   - Buttons (5 bits + 3 padding) -
    0x05, 0x09, //     Usage Page (Buttons)
    0x19, 0x01, //     Usage Minimum (Button 1)
    0x29, 0x05, //     Usage Maximum (Button 5)
    0x15, 0x00, //     Logical Minimum (0)
    0x25, 0x01, //     Logical Maximum (1)
    0x95, 0x05, //     Report Count (5)
    0x75, 0x01, //     Report Size (1)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x95, 0x01, //     Report Count (1)
    0x75, 0x03, //     Report Size (3)
    0x81, 0x01, //     Input (Constant) - padding
    //
    //   - X, Y displacement -
    0x05, 0x01, //     Usage Page (Generic Desktop)
    0x09, 0x30, //     Usage (X)
    0x09, 0x31, //     Usage (Y)
    0x15, 0x81, //     Logical Minimum (-127)
    0x25, 0x7F, //     Logical Maximum (127)
    0x75, 0x08, //     Report Size (8)
    0x95, 0x02, //     Report Count (2)
    0x81, 0x06, //     Input (Data, Variable, Relative)
    //
    //   - Scroll wheel -
    0x09, 0x38, //     Usage (Wheel)
    0x15, 0x81, //     Logical Minimum (-127)
    0x25, 0x7F, //     Logical Maximum (127)
    0x75, 0x08, //     Report Size (8)
    0x95, 0x01, //     Report Count (1)
    0x81, 0x06, //     Input (Data, Variable, Relative)
    //
    //   - Horizontal pan (AC Pan) -
    0x05, 0x0C, //     Usage Page (Consumer)
    0x0A, 0x38, 0x02, // Usage (AC Pan)
    0x15, 0x81, //     Logical Minimum (-127)
    0x25, 0x7F, //     Logical Maximum (127)
    0x75, 0x08, //     Report Size (8)
    0x95, 0x01, //     Report Count (1)
    0x81, 0x06, //     Input (Data, Variable, Relative)
    //
    0xC0, //   End Collection (Physical)
    0xC0, // End Collection (Application)
];
