use std::path::Path;

use serde_derive::Deserialize;

use crate::error::ConfError;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct WorldGenConf {
    pub size: usize,
    pub seasons: usize,
    pub seed: u64,
    pub noise: NoiseConf,
    pub hydrology: HydrologyConf,
}

impl Default for WorldGenConf {
    fn default() -> Self {
        Self {
            size: 128,
            seasons: 4,
            seed: 0,
            noise: NoiseConf::default(),
            hydrology: HydrologyConf::default(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct NoiseConf {
    /// The lowest octave period is `size / high_range_divisor`.
    pub high_range_divisor: usize,
    pub persistence: f64,
    pub elevation_scale: f64,
}

impl Default for NoiseConf {
    fn default() -> Self {
        Self {
            high_range_divisor: 8,
            persistence: 0.95,
            elevation_scale: 10.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct HydrologyConf {
    pub source_rainfall: f64,
    pub lake_rainfall: f64,
    pub river_rain_boost: f64,
    pub river_factor: f64,
    pub lake_factor: f64,
}

impl Default for HydrologyConf {
    fn default() -> Self {
        Self {
            source_rainfall: 20.0,
            lake_rainfall: 1000.0,
            river_rain_boost: 20.0,
            river_factor: 1.0,
            lake_factor: 5.0,
        }
    }
}

impl WorldGenConf {
    pub fn with_size(size: usize, seed: u64) -> Self {
        Self {
            size,
            seed,
            ..Default::default()
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfError> {
        let conf: Self = toml::from_str(text)?;
        conf.validate()?;
        Ok(conf)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfError> {
        if self.size == 0 || !self.size.is_power_of_two() {
            return Err(ConfError::Size(self.size));
        }
        let divisor = self.noise.high_range_divisor;
        if divisor == 0 || !divisor.is_power_of_two() {
            return Err(ConfError::Divisor(divisor));
        }
        if self.size < divisor {
            return Err(ConfError::TooSmall {
                size: self.size,
                divisor,
            });
        }
        if self.seasons == 0 {
            return Err(ConfError::NoSeasons);
        }
        let persistence = self.noise.persistence;
        if !(persistence > 0.0 && persistence <= 1.0) {
            return Err(ConfError::Persistence(persistence));
        }
        if !(self.noise.elevation_scale > 0.0) {
            return Err(ConfError::ElevationScale(self.noise.elevation_scale));
        }
        Ok(())
    }

    pub fn octaves(&self) -> usize {
        self.size / (self.size / self.noise.high_range_divisor)
    }

    /// Seasons in which the northern hemisphere has its summer and its winter.
    pub fn summer(&self) -> usize {
        self.seasons / 4
    }

    pub fn winter(&self) -> usize {
        3 * self.seasons / 4
    }
}
