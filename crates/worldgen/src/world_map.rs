use torus::*;

use crate::error::{Error, Result};
use crate::heightmap::Relief;
use crate::hydrology::RiverPath;
use crate::terrain::{Terrain, TerrainSubtype, TerrainType};
use crate::view::{CellReport, TileCatalog};
use crate::zones::{Seasons, Zones};

/// A finished world. Read-only: every stage has already run.
pub struct World {
    map: TorusMap,
    seasons: Seasons,
    zones: Zones,
    relief: Relief,
    cells: CellData<Terrain>,
    rivers: Vec<RiverPath>,
}

impl World {
    pub(crate) fn new(
        map: TorusMap,
        seasons: Seasons,
        zones: Zones,
        relief: Relief,
        cells: CellData<Terrain>,
        rivers: Vec<RiverPath>,
    ) -> Self {
        Self {
            map,
            seasons,
            zones,
            relief,
            cells,
            rivers,
        }
    }

    pub fn size(&self) -> usize {
        self.map.size()
    }

    pub fn map(&self) -> &TorusMap {
        &self.map
    }

    pub fn seasons(&self) -> &Seasons {
        &self.seasons
    }

    pub fn zones(&self) -> &Zones {
        &self.zones
    }

    pub fn relief(&self) -> &Relief {
        &self.relief
    }

    pub fn rivers(&self) -> &[RiverPath] {
        &self.rivers
    }

    pub fn terrain(&self, id: CellId) -> &Terrain {
        &self.cells[id]
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&Terrain> {
        self.map.cell(row, column).map(|id| &self.cells[id])
    }

    pub fn cells(&self) -> impl Iterator<Item = (CellId, &Terrain)> + '_ {
        self.cells.iter()
    }

    fn locate(&self, row: usize, column: usize) -> Result<CellId> {
        self.map.cell(row, column).ok_or(Error::OutOfBounds {
            row,
            column,
            size: self.map.size(),
        })
    }

    pub fn query(&self, row: usize, column: usize) -> Result<CellReport<'_>> {
        let id = self.locate(row, column)?;
        Ok(CellReport::new(row, column, &self.cells[id]))
    }

    /// The catalog entry for a cell's render tag. Cells without a tag, or with a
    /// tag the catalog lacks, have no tile.
    pub fn tile<'c, C: TileCatalog>(
        &self,
        catalog: &'c C,
        row: usize,
        column: usize,
    ) -> Result<Option<&'c C::Tile>> {
        let id = self.locate(row, column)?;
        Ok(self.cells[id]
            .render_tag
            .as_deref()
            .and_then(|tag| catalog.tile(tag)))
    }

    pub fn count_types(&self) -> Vec<(TerrainType, usize)> {
        let mut counts: Vec<(TerrainType, usize)> = vec![];
        for (_, cell) in self.cells.iter() {
            match counts.iter_mut().find(|(t, _)| *t == cell.terrain_type) {
                Some((_, n)) => *n += 1,
                None => counts.push((cell.terrain_type, 1)),
            }
        }
        counts
    }

    pub fn count_subtype(&self, subtype: TerrainSubtype) -> usize {
        self.cells.data.iter().filter(|c| c.subtype == subtype).count()
    }

    pub(crate) fn validate(&self) -> Result<()> {
        let expected = self.map.num_cells();
        if self.cells.len() != expected {
            return Err(Error::Invariant(format!(
                "{} cells in a {}x{} world",
                self.cells.len(),
                self.map.size(),
                self.map.size()
            )));
        }

        let seasons = self.seasons.count;
        for (id, cell) in self.cells.iter() {
            let complete = cell.temperature.len() == seasons
                && cell.pressure.len() == seasons
                && cell.rainfall.len() == seasons
                && cell.wind.len() == seasons;
            let finite = cell.elevation.is_finite()
                && cell.temperature.iter().all(|x| x.is_finite())
                && cell.pressure.iter().all(|x| x.is_finite())
                && cell.rainfall.iter().all(|x| x.is_finite())
                && cell.wind.iter().all(|w| w.speed.is_finite() && w.speed >= 0.0);
            if !complete || !finite {
                return Err(Error::Invariant(format!(
                    "cell {:?} has incomplete or non-finite seasonal data",
                    self.map.coords(id)
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heightmap::Thresholds;

    fn tiny_world() -> World {
        let map = TorusMap::new(2);
        let seasons = Seasons::new(4);
        let cells = CellData::for_each(&map, |id| {
            let (t, s) = if id.index() == 0 {
                (TerrainType::Ocean, TerrainSubtype::Sea)
            } else {
                (TerrainType::Plains, TerrainSubtype::Plains)
            };
            Terrain::new(id.index() as f64, t, s, seasons.count)
        });
        let relief = Relief {
            lowest: 0.0,
            highest: 3.0,
            thresholds: Thresholds {
                deep_ocean: 0.0,
                water: 0.0,
                hill: 2.25,
                mountain: 2.625,
            },
        };
        World::new(map, seasons, Zones::new(1), relief, cells, vec![])
    }

    #[test]
    fn queries_outside_the_grid_fail() {
        let world = tiny_world();
        assert!(world.query(1, 1).is_ok());
        assert!(matches!(
            world.query(2, 0),
            Err(Error::OutOfBounds { row: 2, column: 0, size: 2 })
        ));
        assert!(world.get(0, 5).is_none());
    }

    #[test]
    fn validation_catches_non_finite_values() {
        let mut world = tiny_world();
        assert!(world.validate().is_ok());
        let id = world.map.cell(1, 0).unwrap();
        world.cells[id].rainfall[2] = f64::NAN;
        assert!(matches!(world.validate(), Err(Error::Invariant(_))));
    }

    #[test]
    fn validation_catches_short_season_arrays() {
        let mut world = tiny_world();
        let id = world.map.cell(0, 1).unwrap();
        world.cells[id].wind.pop();
        assert!(matches!(world.validate(), Err(Error::Invariant(_))));
    }

    #[test]
    fn counts_by_type() {
        let world = tiny_world();
        let counts = world.count_types();
        assert_eq!(counts, vec![(TerrainType::Ocean, 1), (TerrainType::Plains, 3)]);
        assert_eq!(world.count_subtype(TerrainSubtype::Plains), 3);
    }
}
