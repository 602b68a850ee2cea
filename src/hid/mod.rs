//! HID report types and descriptor tables.
//!
//! Only one report type exists in this firmware: the relative mouse
//! report. The descriptor and serialisation logic are pure and run on
//! the host for testing; the embedded binary hands the serialised bytes
//! to the Embassy USB HID endpoint.

pub mod mouse;
