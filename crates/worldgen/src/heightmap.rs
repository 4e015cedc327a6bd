use log::debug;
use torus::*;

use crate::terrain::{TerrainSubtype, TerrainType};

/// Elevation limits separating the five height classes. Ordered from low to high.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    pub deep_ocean: f64,
    pub water: f64,
    pub hill: f64,
    pub mountain: f64,
}

impl Thresholds {
    /// Limits used to stretch the raw noise relief.
    fn exaggeration(lowest: f64, highest: f64) -> Self {
        let t = highest + lowest / 2.0;
        let water = if highest > lowest.abs() {
            if t > 0.0 {
                t / 2.0
            } else {
                t
            }
        } else {
            0.0
        };

        let deep_ocean = if water > 0.0 {
            water / 1.5
        } else {
            let deep = lowest + (water / 2.0).abs();
            if deep > water {
                lowest - 0.01
            } else {
                deep
            }
        };

        let (hill, mountain) = upland_limits(highest, water);
        Self {
            deep_ocean,
            water,
            hill,
            mountain,
        }
    }

    /// Limits used to classify the exaggerated relief. Sea level is fixed at zero.
    fn classification(lowest: f64, highest: f64) -> Self {
        let water = 0.0;
        let deep_ocean = (lowest / 2.0).min(water);
        let (hill, mountain) = upland_limits(highest, water);
        Self {
            deep_ocean,
            water,
            hill,
            mountain,
        }
    }

    pub fn classify(&self, elevation: f64) -> TerrainType {
        if elevation <= self.water {
            if elevation <= self.deep_ocean {
                TerrainType::Ocean
            } else {
                TerrainType::Water
            }
        } else if elevation >= self.mountain {
            TerrainType::Mountain
        } else if elevation >= self.hill {
            TerrainType::Hill
        } else {
            TerrainType::Plains
        }
    }

    pub fn is_ordered(&self) -> bool {
        self.deep_ocean <= self.water && self.water <= self.hill && self.hill <= self.mountain
    }
}

fn upland_limits(highest: f64, water: f64) -> (f64, f64) {
    let mountain = highest - highest / 8.0;
    let mut hill = highest - highest / 4.0;
    if hill < water {
        hill = water + 1.0;
    }
    if hill > mountain {
        hill = mountain - 0.05;
    }
    (hill, mountain)
}

/// Extremes of the final relief together with the limits that classified it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Relief {
    pub lowest: f64,
    pub highest: f64,
    pub thresholds: Thresholds,
}

pub(crate) struct HeightMapBuilder {
    elevation: CellData<f64>,
}

impl HeightMapBuilder {
    pub(crate) fn new(noise: &CellData<f64>, scale: f64) -> Self {
        Self {
            elevation: noise.transform(|_, &x| x * scale),
        }
    }

    /// Pushes seas down and uplands up, halving the positive lowlands.
    pub(crate) fn exaggerate(&mut self) -> (f64, f64) {
        let mut lowest = self.elevation.min();
        let mut highest = self.elevation.max();
        let limits = Thresholds::exaggeration(lowest, highest);
        debug!("exaggeration limits {:?} over [{:.3}, {:.3}]", limits, lowest, highest);

        self.elevation.update_each(|_, h| {
            if *h <= limits.water {
                if *h <= limits.deep_ocean {
                    if limits.water > 0.0 {
                        *h += (-limits.deep_ocean - 2.5).min(limits.hill * -1.5);
                    } else {
                        *h -= 2.5;
                    }
                } else if limits.water > 0.0 {
                    *h += -limits.water - 1.5;
                } else {
                    *h -= 1.5;
                }
                lowest = lowest.min(*h);
            } else if *h >= limits.mountain {
                *h += 2.5;
                highest = highest.max(*h);
            } else if *h >= limits.hill {
                *h += 1.5;
                highest = highest.max(*h);
            } else if *h > 0.0 {
                *h /= 2.0;
            }
        });

        (lowest, highest)
    }

    pub(crate) fn build(mut self) -> (CellData<f64>, Relief) {
        let (lowest, highest) = self.exaggerate();
        let thresholds = Thresholds::classification(lowest, highest);
        debug!("classification limits {:?} over [{:.3}, {:.3}]", thresholds, lowest, highest);
        (
            self.elevation,
            Relief {
                lowest,
                highest,
                thresholds,
            },
        )
    }
}

pub(crate) fn height_class(
    thresholds: &Thresholds,
    elevation: f64,
) -> (TerrainType, TerrainSubtype) {
    let terrain_type = thresholds.classify(elevation);
    let subtype = match terrain_type {
        TerrainType::Ocean | TerrainType::Water => TerrainSubtype::Sea,
        TerrainType::Mountain => TerrainSubtype::Mountain,
        TerrainType::Hill => TerrainSubtype::Hill,
        _ => TerrainSubtype::Plains,
    };
    (terrain_type, subtype)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built(values: &[f64]) -> (CellData<f64>, Relief) {
        let map = TorusMap::new(2);
        let noise = CellData::for_each(&map, |id| values[id.index()]);
        HeightMapBuilder::new(&noise, 10.0).build()
    }

    #[test]
    fn positive_world_gets_a_sea() {
        let (elevation, relief) = built(&[0.1, 0.4, 0.6, 0.9]);
        // Raw relief spans [1, 9]: water below 4.75, deep water below 19/6.
        let expected = [-9.125, -2.25, 3.0, 11.5];
        for (got, want) in elevation.data.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "{got} != {want}");
        }
        assert!((relief.highest - 11.5).abs() < 1e-9);
        assert_eq!(relief.lowest, elevation.data[0]);
        assert!(relief.thresholds.is_ordered());

        let classes: Vec<_> = elevation
            .data
            .iter()
            .map(|&h| relief.thresholds.classify(h))
            .collect();
        assert_eq!(
            classes,
            vec![
                TerrainType::Ocean,
                TerrainType::Water,
                TerrainType::Plains,
                TerrainType::Mountain
            ]
        );
    }

    #[test]
    fn classification_limits_stay_ordered() {
        for &(lowest, highest) in &[(-9.0, 1.0), (-1.0, 9.0), (0.5, 8.0), (-0.2, 0.1), (3.0, 3.0)] {
            let limits = Thresholds::classification(lowest, highest + 2.5);
            assert!(limits.is_ordered(), "{lowest}..{highest}: {limits:?}");
            // A relief entirely above zero has no cell at or below either limit.
            if lowest <= 0.0 {
                let limits = Thresholds::exaggeration(lowest, highest);
                assert!(limits.deep_ocean <= limits.water, "{lowest}..{highest}: {limits:?}");
            }
        }
    }

    #[test]
    fn every_elevation_has_one_class() {
        let limits = Thresholds {
            deep_ocean: -2.0,
            water: 0.0,
            hill: 6.0,
            mountain: 8.0,
        };
        assert_eq!(limits.classify(-2.0), TerrainType::Ocean);
        assert_eq!(limits.classify(-1.0), TerrainType::Water);
        assert_eq!(limits.classify(0.0), TerrainType::Water);
        assert_eq!(limits.classify(3.0), TerrainType::Plains);
        assert_eq!(limits.classify(6.0), TerrainType::Hill);
        assert_eq!(limits.classify(9.0), TerrainType::Mountain);
    }
}
