use std::collections::HashMap;
use std::fmt;

use crate::terrain::Terrain;

/// Lookup from render tags to whatever a frontend draws with.
pub trait TileCatalog {
    type Tile;

    fn tile(&self, tag: &str) -> Option<&Self::Tile>;
}

impl<T> TileCatalog for HashMap<String, T> {
    type Tile = T;

    fn tile(&self, tag: &str) -> Option<&T> {
        self.get(tag)
    }
}

/// Human-readable dump of one cell.
pub struct CellReport<'a> {
    pub row: usize,
    pub column: usize,
    pub terrain: &'a Terrain,
}

impl<'a> CellReport<'a> {
    pub(crate) fn new(row: usize, column: usize, terrain: &'a Terrain) -> Self {
        Self {
            row,
            column,
            terrain,
        }
    }
}

impl fmt::Display for CellReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.terrain;
        writeln!(f, "cell ({}, {})", self.row, self.column)?;
        writeln!(f, "  type:      {}", t.terrain_type.name())?;
        writeln!(f, "  subtype:   {}", t.subtype)?;
        writeln!(f, "  tile:      {}", t.render_tag.as_deref().unwrap_or("-"))?;
        writeln!(f, "  elevation: {:.3}", t.elevation)?;
        writeln!(f, "  land:      {}", t.nearby_land)?;
        if t.river.has_river {
            writeln!(
                f,
                "  river:     {} (enters {}, leaves {})",
                t.river.name.as_deref().unwrap_or("unnamed"),
                t.river.entrance,
                t.river.exit
            )?;
        }
        for season in 0..t.temperature.len() {
            let wind = t.wind[season];
            writeln!(
                f,
                "  season {}: {:6.1} C, rain {:7.1}, pressure {:7.2}, wind {} at {:.2}",
                season,
                t.temperature[season],
                t.rainfall[season],
                t.pressure[season],
                wind.heading,
                wind.speed
            )?;
        }
        Ok(())
    }
}
