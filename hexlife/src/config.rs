use image::Rgb;

use crate::{error::ConfigError, geometry};

pub const ROWS: usize = 20;
pub const COLS: usize = 20;
pub const CELL_RADIUS: f64 = 20.;
pub const GENERATIONS: usize = 30;
pub const RESURRECT_AFTER: usize = 6;
pub const RANDOM_LIFE_AFTER: usize = 4;
pub const FRAME_DURATION: f64 = 3.;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub dead: Rgb<u8>,
    pub alive: Rgb<u8>,
    pub outline: Rgb<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            dead: Rgb([255, 255, 255]),
            alive: Rgb([0, 0, 0]),
            outline: Rgb([0, 0, 0]),
        }
    }
}

/// How the periodic single-cell reanimation picks its target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reanimation {
    /// Pick any cell; nothing happens if it is already alive.
    #[default]
    SkipIfAlive,
    /// Pick among the dead cells only; nothing happens if there are none.
    PickDead,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    pub cell_radius: f64,
    pub generations: usize,
    pub resurrect_after: usize,
    pub random_life_after: usize,
    /// Seconds each generation stays on screen in the assembled animation.
    pub frame_duration: f64,
    pub palette: Palette,
    pub reanimation: Reanimation,
    /// Never fire the mass resurrection on generation 1.
    pub spare_first_generation: bool,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: ROWS,
            cols: COLS,
            cell_radius: CELL_RADIUS,
            generations: GENERATIONS,
            resurrect_after: RESURRECT_AFTER,
            random_life_after: RANDOM_LIFE_AFTER,
            frame_duration: FRAME_DURATION,
            palette: Palette::default(),
            reanimation: Reanimation::default(),
            spare_first_generation: false,
            seed: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if !(self.cell_radius.is_finite() && self.cell_radius > 0.) {
            return Err(ConfigError::Radius(self.cell_radius));
        }
        let too_large = ConfigError::TooLarge {
            rows: self.rows,
            cols: self.cols,
            radius: self.cell_radius,
        };
        if self.rows.checked_mul(self.cols).is_none() {
            return Err(too_large);
        }
        if geometry::checked_canvas_size(self.rows, self.cols, self.cell_radius).is_none() {
            return Err(too_large);
        }
        if self.generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        if self.resurrect_after == 0 {
            return Err(ConfigError::ZeroPeriod {
                name: "resurrection",
            });
        }
        if self.random_life_after == 0 {
            return Err(ConfigError::ZeroPeriod {
                name: "random life",
            });
        }
        if !(self.frame_duration.is_finite() && self.frame_duration > 0.) {
            return Err(ConfigError::FrameDuration(self.frame_duration));
        }
        Ok(())
    }
}
