//! USB Device subsystem - presents a HID mouse to the host.
//!
//! The nRF52840's built-in USB 2.0 Full-Speed controller is driven by
//! `embassy-usb`. We expose a single HID interface carrying relative
//! mouse reports under Report ID 1.
//!
//! The report task pulls displacements from the square-path motion
//! generator on a fixed 20 ms cadence and writes them to the interrupt
//! IN endpoint, but only while the host has the device configured and
//! the bus is not suspended.

pub mod hid_device;
