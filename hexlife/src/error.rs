use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// A configuration value that would make the run meaningless.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },
    #[error("cell radius must be a positive number, got {0}")]
    Radius(f64),
    #[error("generation count must be positive")]
    NoGenerations,
    #[error("{name} period must be positive")]
    ZeroPeriod { name: &'static str },
    #[error("a {rows}x{cols} grid of radius {radius} does not fit in memory")]
    TooLarge { rows: usize, cols: usize, radius: f64 },
    #[error("frame duration must be a positive number of seconds, got {0}")]
    FrameDuration(f64),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}
