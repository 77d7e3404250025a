//! Time-driven animation phases.
//!
//! Animations never touch view state: each frame asks where a rotor or a
//! pulse is at `elapsed` since the frontend started.

use std::time::Duration;

const ROTOR_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];
const COOLER_FRAMES: [char; 4] = ['|', '/', '─', '\\'];

/// Fraction of the current cycle, 0.0..1.0
pub fn phase(elapsed: Duration, period: Duration) -> f32 {
    let period_ms = period.as_millis().max(1);
    (elapsed.as_millis() % period_ms) as f32 / period_ms as f32
}

fn frame_index(elapsed: Duration, period: Duration, frames: usize) -> usize {
    ((phase(elapsed, period) * frames as f32) as usize).min(frames - 1)
}

/// Fan rotor glyph for this frame
pub fn rotor_glyph(elapsed: Duration, period: Duration) -> char {
    ROTOR_FRAMES[frame_index(elapsed, period, ROTOR_FRAMES.len())]
}

/// CPU cooler glyph for this frame
pub fn cooler_glyph(elapsed: Duration, period: Duration) -> char {
    COOLER_FRAMES[frame_index(elapsed, period, COOLER_FRAMES.len())]
}

/// Step (0..steps) of a rotation with `steps` positions
pub fn rotation_step(elapsed: Duration, period: Duration, steps: usize) -> usize {
    frame_index(elapsed, period, steps)
}

/// Triangle wave 0.0 -> 1.0 -> 0.0 over `period`
pub fn pulse(elapsed: Duration, period: Duration) -> f32 {
    let p = phase(elapsed, period);
    1.0 - (2.0 * p - 1.0).abs()
}

/// Bounce height (0 or 1 rows) over a one second cycle
pub fn bounce_offset(elapsed: Duration) -> u16 {
    if phase(elapsed, Duration::from_millis(1000)) < 0.5 {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_wraps() {
        let period = Duration::from_millis(1000);
        assert_eq!(phase(Duration::from_millis(250), period), 0.25);
        assert_eq!(phase(Duration::from_millis(1250), period), 0.25);
    }

    #[test]
    fn test_rotor_advances_faster_with_shorter_period() {
        let at = Duration::from_millis(400);
        assert_eq!(rotor_glyph(at, Duration::from_millis(3000)), '◐');
        assert_eq!(rotor_glyph(at, Duration::from_millis(500)), '◒');
    }

    #[test]
    fn test_pulse_shape() {
        let period = Duration::from_millis(1000);
        assert_eq!(pulse(Duration::ZERO, period), 0.0);
        assert_eq!(pulse(Duration::from_millis(500), period), 1.0);
    }

    #[test]
    fn test_rotation_step_range() {
        let period = Duration::from_millis(800);
        for ms in (0..2000).step_by(37) {
            assert!(rotation_step(Duration::from_millis(ms), period, 8) < 8);
        }
    }
}
