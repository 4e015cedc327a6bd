use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Conf(#[from] ConfError),

    #[error("generated world is inconsistent: {0}")]
    Invariant(String),

    #[error("cell ({row}, {column}) lies outside a {size}x{size} world")]
    OutOfBounds {
        row: usize,
        column: usize,
        size: usize,
    },
}

#[derive(Debug, Error)]
pub enum ConfError {
    #[error("world size {0} is not a positive power of two")]
    Size(usize),

    #[error("world size {size} is smaller than the octave divisor {divisor}")]
    TooSmall { size: usize, divisor: usize },

    #[error("octave divisor must be a positive power of two, got {0}")]
    Divisor(usize),

    #[error("a world needs at least one season")]
    NoSeasons,

    #[error("persistence {0} is outside (0, 1]")]
    Persistence(f64),

    #[error("elevation scale {0} must be positive")]
    ElevationScale(f64),

    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
