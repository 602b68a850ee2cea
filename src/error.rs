//! Unified error type for squaremouse.
//!
//! The error surface is deliberately tiny: motion generation is pure
//! arithmetic and cannot fail, so only the USB transmit path produces
//! errors. Implements `defmt::Format` for efficient on-target logging.

use defmt::Format;

/// Top-level error type used across the firmware.
#[derive(Debug, Clone, Copy, Format)]
pub enum Error {
    /// The USB endpoint rejected the report (disabled or buffer full).
    Usb,

    /// Buffer too small for the requested serialisation.
    BufferOverflow,
}
