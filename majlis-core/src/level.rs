//! Experience / level presentation math.
//!
//! Levels are a stored column, not derived from xp, so the two can drift;
//! these helpers only shape what the profile screen displays.

/// Progress fraction toward the next level, in `0.0..1.0`.
#[must_use]
pub fn xp_progress(xp: i64) -> f32 {
    let within = xp.rem_euclid(100);
    // within is 0..=99, exact in f32
    #[allow(clippy::cast_precision_loss)]
    {
        within as f32 / 100.0
    }
}

/// Displayed xp target for a level.
#[must_use]
pub const fn xp_target(level: i64) -> i64 {
    level * 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_wraps_every_hundred_points() {
        assert!((xp_progress(0) - 0.0).abs() < f32::EPSILON);
        assert!((xp_progress(50) - 0.5).abs() < f32::EPSILON);
        assert!((xp_progress(250) - 0.5).abs() < f32::EPSILON);
        assert!((xp_progress(199) - 0.99).abs() < f32::EPSILON);
    }

    #[test]
    fn target_scales_with_stored_level() {
        assert_eq!(xp_target(1), 100);
        assert_eq!(xp_target(7), 700);
    }
}
