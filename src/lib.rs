//! Host-testable library interface for squaremouse.
//!
//! This crate re-exports the pure logic modules that can be tested
//! on the host (no embedded hardware required): the square-path motion
//! generator, the HID mouse report, and the configuration constants.
//!
//! Usage: `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].
//! This lib.rs provides a separate entry point for host-based testing.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod hid;
pub mod motion;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests - square-path motion generator
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::config::{MOUSE_STEP, SEGMENT_LENGTH};
    use super::motion::{next_report_delta, Direction, SquareTrajectory};

    /// Reports per side with the default constants (125 / 5 = 25).
    const STEPS_PER_SIDE: usize = (SEGMENT_LENGTH / MOUSE_STEP as u32) as usize;

    // ════════════════════════════════════════════════════════════════════════
    // Direction Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn direction_delta_moves_one_axis_only() {
        assert_eq!(Direction::Right.delta(5), (5, 0));
        assert_eq!(Direction::Down.delta(5), (0, 5));
        assert_eq!(Direction::Left.delta(5), (-5, 0));
        assert_eq!(Direction::Up.delta(5), (0, -5));
    }

    #[test]
    fn direction_cycle_wraps_after_up() {
        assert_eq!(Direction::Right.next(), Direction::Down);
        assert_eq!(Direction::Down.next(), Direction::Left);
        assert_eq!(Direction::Left.next(), Direction::Up);
        assert_eq!(Direction::Up.next(), Direction::Right);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Trajectory Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn segment_length_is_a_whole_number_of_steps() {
        // A fractional last step would make the square drift.
        assert_eq!(SEGMENT_LENGTH % MOUSE_STEP as u32, 0);
    }

    #[test]
    fn fresh_trajectory_starts_rightward_at_origin() {
        let trajectory = SquareTrajectory::new();
        assert_eq!(trajectory.direction(), Direction::Right);
        assert_eq!(trajectory.distance(), 0);
    }

    #[test]
    fn first_call_moves_right_and_accrues_one_step() {
        let mut trajectory = SquareTrajectory::new();
        assert_eq!(trajectory.next_delta(), (MOUSE_STEP, 0));
        assert_eq!(trajectory.direction(), Direction::Right);
        assert_eq!(trajectory.distance(), MOUSE_STEP as u32);
    }

    #[test]
    fn every_delta_is_one_step_on_exactly_one_axis() {
        let mut trajectory = SquareTrajectory::new();
        for _ in 0..4 * STEPS_PER_SIDE {
            let (dx, dy) = trajectory.next_delta();
            assert_eq!(dx.unsigned_abs() + dy.unsigned_abs(), MOUSE_STEP as u8);
            assert!((dx == 0) != (dy == 0), "exactly one axis must move");
        }
    }

    #[test]
    fn each_side_takes_exactly_twenty_five_steps() {
        let mut trajectory = SquareTrajectory::new();
        for expected in [
            (MOUSE_STEP, 0),
            (0, MOUSE_STEP),
            (-MOUSE_STEP, 0),
            (0, -MOUSE_STEP),
        ] {
            for _ in 0..STEPS_PER_SIDE {
                assert_eq!(trajectory.next_delta(), expected);
            }
        }
    }

    #[test]
    fn direction_advances_only_at_the_segment_boundary() {
        let mut trajectory = SquareTrajectory::new();
        for _ in 0..STEPS_PER_SIDE - 1 {
            trajectory.next_delta();
            assert_eq!(trajectory.direction(), Direction::Right);
        }

        // The 25th step still moves right; the advance affects the next call.
        assert_eq!(trajectory.next_delta(), (MOUSE_STEP, 0));
        assert_eq!(trajectory.direction(), Direction::Down);
        assert_eq!(trajectory.distance(), 0);
        assert_eq!(trajectory.next_delta(), (0, MOUSE_STEP));
    }

    #[test]
    fn phase_order_is_cyclic_with_no_skips() {
        let mut trajectory = SquareTrajectory::new();
        let mut seen = vec![trajectory.direction()];
        for _ in 0..8 * STEPS_PER_SIDE {
            trajectory.next_delta();
            if *seen.last().unwrap() != trajectory.direction() {
                seen.push(trajectory.direction());
            }
        }
        assert_eq!(
            seen,
            [
                Direction::Right,
                Direction::Down,
                Direction::Left,
                Direction::Up,
                Direction::Right,
                Direction::Down,
                Direction::Left,
                Direction::Up,
                Direction::Right,
            ]
        );
    }

    #[test]
    fn full_cycle_returns_to_origin() {
        let mut trajectory = SquareTrajectory::new();
        let mut sum_x: i32 = 0;
        let mut sum_y: i32 = 0;
        for _ in 0..4 * STEPS_PER_SIDE {
            let (dx, dy) = trajectory.next_delta();
            sum_x += i32::from(dx);
            sum_y += i32::from(dy);
        }
        assert_eq!(sum_x, 0);
        assert_eq!(sum_y, 0);
        // And the state is back to the initial phase.
        assert_eq!(trajectory, SquareTrajectory::new());
    }

    // ════════════════════════════════════════════════════════════════════════
    // Report Loop Gate Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn gate_emits_while_host_ready() {
        let mut trajectory = SquareTrajectory::new();
        assert_eq!(
            next_report_delta(&mut trajectory, true),
            Some((MOUSE_STEP, 0))
        );
    }

    #[test]
    fn gate_skips_and_freezes_state_while_disconnected() {
        let mut trajectory = SquareTrajectory::new();
        for _ in 0..3 {
            next_report_delta(&mut trajectory, true);
        }
        let frozen = trajectory.clone();

        for _ in 0..50 {
            assert_eq!(next_report_delta(&mut trajectory, false), None);
        }
        assert_eq!(trajectory, frozen);
    }

    #[test]
    fn path_resumes_where_it_left_off_after_reconnect() {
        let mut gated = SquareTrajectory::new();
        let mut reference = SquareTrajectory::new();

        for _ in 0..STEPS_PER_SIDE + 3 {
            next_report_delta(&mut gated, true);
            reference.next_delta();
        }
        for _ in 0..17 {
            next_report_delta(&mut gated, false);
        }

        // After the outage the emitted sequence continues in lock step.
        for _ in 0..2 * STEPS_PER_SIDE {
            assert_eq!(
                next_report_delta(&mut gated, true),
                Some(reference.next_delta())
            );
        }
    }
}
