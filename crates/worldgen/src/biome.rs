use log::info;
use torus::*;

use crate::terrain::{Heading, Terrain, TerrainSubtype};
use crate::Generation;

use TerrainSubtype::*;

/// Climate summary of one cell as seen by the biome rules.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CellClimate {
    pub(crate) rain: f64,
    pub(crate) summer: f64,
    pub(crate) winter: f64,
    /// Temperature of the local warm season: summer in the north, winter in the south.
    pub(crate) warm: f64,
    pub(crate) cool: f64,
    pub(crate) upland: bool,
    pub(crate) polar: bool,
}

impl CellClimate {
    fn of(gen: &Generation, id: CellId) -> Self {
        let row = gen.row(id);
        let cell = &gen.cells[id];
        let seasons = &gen.seasons;
        let highest = gen.relief.highest;
        Self {
            rain: cell.mean_rainfall(),
            summer: cell.temperature[seasons.summer],
            winter: cell.temperature[seasons.winter],
            warm: cell.temperature[seasons.warm(&gen.zones, row)],
            cool: cell.temperature[seasons.cold(&gen.zones, row)],
            upland: cell.elevation >= highest / 4.0 && cell.elevation < highest,
            polar: gen.zones.in_polar_band(row),
        }
    }

    fn thaws(&self) -> bool {
        self.summer >= 5.0 || self.winter >= 5.0
    }

    fn frozen(&self) -> bool {
        self.summer <= 0.0 && self.winter <= 0.0
    }
}

pub(crate) fn reclassify(subtype: TerrainSubtype, c: &CellClimate) -> TerrainSubtype {
    let mut s = subtype;

    // Forests grow where it is wet and mild.
    s = match s {
        Hill if c.rain >= 50.0 => forest_for(s, c),
        Plains if c.rain >= 100.0 => forest_for(s, c),
        SnowHill if c.rain >= 50.0 && c.thaws() => SnowForest,
        Tundra if c.rain >= 100.0 && c.thaws() => SnowForest,
        _ => s,
    };

    if c.rain <= 30.0 && c.thaws() {
        s = match s {
            Hill => DryHill,
            Plains => Desert,
            Forest if c.upland => DryHill,
            Forest => Desert,
            _ => s,
        };
    }

    if c.thaws() && matches!(s, Desert | DryHill) {
        if c.rain > 50.0 {
            s = Forest;
        } else if c.rain > 30.0 {
            s = if s == Desert { Plains } else { Hill };
        }
    }

    if c.summer > 0.0 || c.winter > 0.0 {
        s = if c.warm < 10.0 {
            match s {
                Hill => SnowHill,
                Plains => Tundra,
                Desert => SnowDesert,
                Forest if c.warm >= 5.0 => SnowForest,
                Forest => Tundra,
                _ => s,
            }
        } else {
            match s {
                SnowHill => Hill,
                Tundra => Plains,
                SnowDesert => Desert,
                SnowForest if c.warm >= 15.0 => Forest,
                _ => s,
            }
        };
    } else {
        s = match s {
            Mountain => SnowMountain,
            Hill => SnowHill,
            Plains | Forest => SnowDesert,
            Sea | Lake => Ice,
            _ => s,
        };
    }

    if c.polar && c.warm >= 5.0 {
        s = match s {
            Forest => SnowForest,
            Plains => Tundra,
            _ => s,
        };
    }

    if matches!(s, Tundra | SnowForest) && (c.rain < 30.0 || c.frozen()) {
        s = SnowDesert;
    }

    if s == SnowForest && c.warm < 5.0 {
        s = if c.upland { SnowHill } else { Tundra };
    }
    s
}

fn forest_for(s: TerrainSubtype, c: &CellClimate) -> TerrainSubtype {
    if c.warm >= 15.0 && c.cool > 5.0 {
        Forest
    } else if c.warm >= 5.0 {
        SnowForest
    } else {
        s
    }
}

fn direction_rank(direction: Compass) -> u8 {
    match direction {
        Compass::North => 0,
        Compass::South => 1,
        Compass::West => 2,
        Compass::East => 3,
        Compass::NorthEast => 4,
        Compass::NorthWest => 5,
        Compass::SouthEast => 6,
        Compass::SouthWest => 7,
    }
}

/// Image key for a cell. River cells get their two river sides baked in,
/// lower-ranked side first.
pub(crate) fn render_tag(cell: &Terrain) -> Option<String> {
    let name = cell.subtype.name();
    match cell.subtype {
        Lake => return None,
        Ice => return Some(name.to_string()),
        Sea => return Some(cell.terrain_type.name().to_string()),
        _ => {}
    }

    let river = &cell.river;
    if !river.has_river {
        return Some(name.to_string());
    }
    let tag = match (river.entrance, river.exit) {
        (Heading::Still, _) | (_, Heading::Still) => format!("{}end", name),
        (Heading::None, _) => name.to_string(),
        (Heading::Toward(a), Heading::Toward(b)) if a != b => {
            let (first, second) = if direction_rank(a) < direction_rank(b) {
                (a, b)
            } else {
                (b, a)
            };
            format!("{}{}{}", first.abbreviation(), name, second.abbreviation())
        }
        _ => format!("{}end", name),
    };
    Some(tag)
}

pub(crate) fn compute_biomes(gen: &mut Generation) {
    for _ in gen.seasons.iter() {
        for id in gen.map.cells() {
            let climate = CellClimate::of(gen, id);
            let cell = &mut gen.cells[id];
            cell.subtype = reclassify(cell.subtype, &climate);
            cell.render_tag = render_tag(cell);
        }
    }

    let changed = gen
        .cells
        .data
        .iter()
        .filter(|c| c.subtype.name() != c.terrain_type.name() && c.subtype != Sea)
        .count();
    info!("biomes assigned, {} cells differ from their height class", changed);
}
