//! Settings module - read-only game configuration
//!
//! Defaults match the standard 7x14 board. [`Settings::from_env`] lets a
//! front end override any value without recompiling:
//!
//! - `SEVENS_GRID_WIDTH`: board columns (default: 7)
//! - `SEVENS_GRID_HEIGHT`: board rows (default: 14)
//! - `SEVENS_MATCH_TARGET`: sum a run must reach to be removed (default: 7)
//! - `SEVENS_POINTS_PER_NUMBER`: score per matched number (default: 10)
//! - `SEVENS_SEED`: RNG seed for the random CPU and block queue (default: 1)
//!
//! Missing or unparsable values fall back to the default, as do board sides
//! outside `1..=MAX_GRID_SIDE`.

use crate::types::{GRID_HEIGHT, GRID_WIDTH, MATCH_TARGET, MAX_GRID_SIDE, POINTS_PER_NUMBER};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub grid_width: i32,
    pub grid_height: i32,
    pub match_target: u32,
    pub points_per_number: u32,
    pub seed: u32,
}

impl Settings {
    pub fn new(grid_width: i32, grid_height: i32) -> Self {
        Self {
            grid_width,
            grid_height,
            ..Self::default()
        }
    }

    pub fn from_env() -> Self {
        use std::env;

        fn parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
            env::var(key).ok().and_then(|s| s.trim().parse().ok())
        }

        let defaults = Self::default();
        let grid_width = parsed::<i32>("SEVENS_GRID_WIDTH")
            .filter(|w| (1..=MAX_GRID_SIDE).contains(w))
            .unwrap_or(defaults.grid_width);
        let grid_height = parsed::<i32>("SEVENS_GRID_HEIGHT")
            .filter(|h| (1..=MAX_GRID_SIDE).contains(h))
            .unwrap_or(defaults.grid_height);
        let match_target = parsed::<u32>("SEVENS_MATCH_TARGET")
            .filter(|t| *t > 0)
            .unwrap_or(defaults.match_target);
        let points_per_number =
            parsed("SEVENS_POINTS_PER_NUMBER").unwrap_or(defaults.points_per_number);
        let seed = parsed("SEVENS_SEED").unwrap_or(defaults.seed);

        Self {
            grid_width,
            grid_height,
            match_target,
            points_per_number,
            seed,
        }
    }

    pub fn dimensions(&self) -> (i32, i32) {
        (self.grid_width, self.grid_height)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            match_target: MATCH_TARGET,
            points_per_number: POINTS_PER_NUMBER,
            seed: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_seven_by_fourteen() {
        let s = Settings::default();
        assert_eq!(s.dimensions(), (7, 14));
        assert_eq!(s.match_target, 7);
        assert_eq!(s.points_per_number, 10);
    }

    #[test]
    fn new_keeps_scoring_defaults() {
        let s = Settings::new(4, 5);
        assert_eq!(s.dimensions(), (4, 5));
        assert_eq!(s.match_target, MATCH_TARGET);
    }
}
