//! Periodic peek timer.
//!
//! Counts down while the NPC runs and fires a one-shot animation trigger
//! on expiry. While the NPC is idle the timer is re-randomized *every
//! tick* (see DESIGN.md), so a fresh countdown always starts when
//! running resumes.

use rand::Rng;

use skulk_core::config::FleeConfig;
use skulk_core::constants::MOVING_SPEED_THRESHOLD;

/// Draw a new peek interval from the configured bounds.
///
/// Bounds are authored without validation: a reversed range is swapped
/// and a degenerate one collapses to its single value. Never panics.
pub fn sample_interval<R: Rng>(config: &FleeConfig, rng: &mut R) -> f64 {
    let (lo, hi) = if config.min_peek_interval <= config.max_peek_interval {
        (config.min_peek_interval, config.max_peek_interval)
    } else {
        (config.max_peek_interval, config.min_peek_interval)
    };
    if lo >= hi {
        lo
    } else {
        rng.gen_range(lo..hi)
    }
}

/// Advance the timer by one tick. Returns true when the peek fires.
///
/// On fire (and on every idle tick) `remaining_secs` is reset to a new
/// random interval.
pub fn tick<R: Rng>(
    remaining_secs: &mut f64,
    speed: f64,
    config: &FleeConfig,
    rng: &mut R,
    dt: f64,
) -> bool {
    if speed > MOVING_SPEED_THRESHOLD {
        *remaining_secs -= dt;
        if *remaining_secs <= 0.0 {
            *remaining_secs = sample_interval(config, rng);
            return true;
        }
        false
    } else {
        *remaining_secs = sample_interval(config, rng);
        false
    }
}
