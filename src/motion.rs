//! Square-path motion generator.
//!
//! Produces the relative (dx, dy) displacement for each mouse report.
//! The cursor walks the four sides of a square in a fixed cyclic order:
//! right, down, left, up. Each side is [`config::SEGMENT_LENGTH`] HID
//! units long, walked in [`config::MOUSE_STEP`]-unit steps, so with the
//! default constants one full square takes 100 reports and returns the
//! cursor exactly to where it started.

use crate::config;

/// Direction of travel for the current side of the square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// +X (east on screen).
    Right,
    /// +Y (south on screen - HID Y grows downward).
    Down,
    /// -X.
    Left,
    /// -Y.
    Up,
}

impl Direction {
    /// Displacement of one step along this direction.
    ///
    /// Exactly one axis is non-zero; its magnitude is `step`.
    pub const fn delta(self, step: i8) -> (i8, i8) {
        match self {
            Direction::Right => (step, 0),
            Direction::Down => (0, step),
            Direction::Left => (-step, 0),
            Direction::Up => (0, -step),
        }
    }

    /// Next direction in the cycle, wrapping from `Up` back to `Right`.
    pub const fn next(self) -> Self {
        match self {
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
            Direction::Up => Direction::Right,
        }
    }
}

/// Trajectory state - the only persistent state in the firmware.
///
/// Owned by the report loop and advanced exactly once per emitted
/// report. No global state, so tests can run many trajectories
/// side by side.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SquareTrajectory {
    direction: Direction,
    distance: u32,
}

impl SquareTrajectory {
    /// Fresh trajectory: first side goes right, nothing walked yet.
    pub const fn new() -> Self {
        Self {
            direction: Direction::Right,
            distance: 0,
        }
    }

    /// Produce the next (dx, dy) displacement and advance the state.
    ///
    /// The returned delta always uses the direction that was current on
    /// entry; when the accumulated distance reaches the segment length
    /// the distance resets and the direction advances, which only
    /// affects the *next* call. This split keeps every side at exactly
    /// `SEGMENT_LENGTH / MOUSE_STEP` steps.
    pub fn next_delta(&mut self) -> (i8, i8) {
        let delta = self.direction.delta(config::MOUSE_STEP);

        self.distance += config::MOUSE_STEP as u32;
        if self.distance >= config::SEGMENT_LENGTH {
            self.distance = 0;
            self.direction = self.direction.next();
        }

        delta
    }

    /// Direction of the side the next call will walk along.
    #[cfg(test)]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Distance walked along the current side so far.
    #[cfg(test)]
    pub fn distance(&self) -> u32 {
        self.distance
    }
}

/// One report-loop tick: emit the next delta only while the host has
/// the device configured.
///
/// While disconnected the trajectory is not touched at all, so no steps
/// of the square are lost; reconnecting resumes exactly where the path
/// left off.
pub fn next_report_delta(
    trajectory: &mut SquareTrajectory,
    host_ready: bool,
) -> Option<(i8, i8)> {
    if host_ready {
        Some(trajectory.next_delta())
    } else {
        None
    }
}
