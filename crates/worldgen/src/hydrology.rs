use log::{debug, info, trace};
use rand::seq::SliceRandom;
use rand::Rng;
use torus::*;

use crate::precipitation::advect;
use crate::terrain::{Heading, TerrainSubtype, TerrainType};
use crate::Generation;

const ADJECTIVES: &[&str] = &[
    "windy",
    "grey",
    "gloomy",
    "ringing",
    "whistling",
    "rolling",
    "endless",
    "cursed",
    "wild",
    "eternal",
    "wandering",
];

const NOUNS: &[&str] = &["waters", "rapids", "torrent", "river"];

/// Directions in the order the random draw indexes them. The first draw
/// never reaches the last entry.
const DRAW_ORDER: [Compass; 8] = [
    Compass::SouthWest,
    Compass::South,
    Compass::SouthEast,
    Compass::West,
    Compass::East,
    Compass::NorthWest,
    Compass::North,
    Compass::NorthEast,
];

/// A river from its source to the cell where it ended, source first.
#[derive(Clone, Debug, PartialEq)]
pub struct RiverPath {
    pub name: String,
    pub cells: Vec<CellId>,
}

impl RiverPath {
    pub fn source(&self) -> Option<CellId> {
        self.cells.first().copied()
    }

    pub fn mouth(&self) -> Option<CellId> {
        self.cells.last().copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

fn river_name(rng: &mut impl Rng) -> String {
    let adjective = ADJECTIVES.choose(rng).copied().unwrap_or_default();
    let noun = NOUNS.choose(rng).copied().unwrap_or_default();
    format!("The {} {}", adjective, noun)
}

/// Rain and temperature feedback around a river or lake cell.
pub(crate) fn adjust_rainfall(gen: &mut Generation, id: CellId, factor: f64) {
    for season in gen.seasons.iter() {
        let cell = &mut gen.cells[id];
        cell.rainfall[season] += 2.0 * factor;
        let t = &mut cell.temperature[season];
        if *t < 15.0 {
            *t += 5.0;
        } else if *t > 25.0 {
            *t -= 5.0;
        } else {
            *t += 1.0;
        }

        for (_, neighbor) in gen.map.neighbors(id) {
            let cell = &mut gen.cells[neighbor];
            cell.rainfall[season] += factor;
            let t = &mut cell.temperature[season];
            if *t < 10.0 {
                *t += 1.0;
            } else if *t > 30.0 {
                *t -= 1.0;
            }
        }
    }
}

/// The neighbour a river on `from` may flow into towards `direction`, if any.
fn flows_to(
    gen: &Generation,
    basins: &mut DisjointSet,
    from: CellId,
    direction: Compass,
) -> Option<(Compass, CellId)> {
    let here = &gen.cells[from];
    if here.subtype.blocks_river() {
        return None;
    }
    let to = gen.map.neighbor(from, direction);
    let there = &gen.cells[to];
    if there.river.has_river || there.elevation > here.elevation {
        return None;
    }
    if basins.same_set(from.index(), to.index()) {
        return None;
    }
    Some((direction, to))
}

fn first_valid(
    gen: &Generation,
    basins: &mut DisjointSet,
    from: CellId,
) -> Option<(Compass, CellId)> {
    DRAW_ORDER
        .iter()
        .find_map(|&direction| flows_to(gen, basins, from, direction))
}

/// Picks the next step of a river: one free draw, then a shrinking window of
/// draws, then the first valid direction in draw order.
fn choose_step(
    gen: &mut Generation,
    basins: &mut DisjointSet,
    from: CellId,
) -> Option<(Compass, CellId)> {
    let draw = gen.rng.gen_range(0..7);
    if let Some(step) = flows_to(gen, basins, from, DRAW_ORDER[draw]) {
        return Some(step);
    }
    first_valid(gen, basins, from)?;

    let (mut min, mut max) = (0i32, 7i32);
    while min <= max {
        let draw = if min == max {
            min
        } else {
            gen.rng.gen_range(min..max)
        };
        if let Some(step) = flows_to(gen, basins, from, DRAW_ORDER[draw as usize]) {
            return Some(step);
        }
        if draw >= max / 2 {
            max -= 1;
        } else {
            min += 1;
        }
    }
    first_valid(gen, basins, from)
}

fn grow_river(gen: &mut Generation, basins: &mut DisjointSet, source: CellId) -> RiverPath {
    let name = river_name(&mut gen.rng);
    gen.cells[source].river.name = Some(name.clone());

    let boost = gen.conf.hydrology.river_rain_boost;
    let factor = gen.conf.hydrology.river_factor;
    let mut cells = vec![source];
    let mut current = source;

    loop {
        let cell = &gen.cells[current];
        if cell.subtype.blocks_river() || cell.river.exit == Heading::Still {
            break;
        }

        for season in gen.seasons.iter() {
            gen.cells[current].rainfall[season] += boost;
        }
        for season in gen.seasons.iter() {
            advect(gen, current, season);
        }

        match choose_step(gen, basins, current) {
            Some((direction, next)) => {
                trace!("{} flows {} into {:?}", name, direction, gen.map.coords(next));
                basins.union(current.index(), next.index());
                gen.cells[current].river.exit = Heading::Toward(direction);

                let river = &mut gen.cells[next].river;
                river.entrance = Heading::Toward(direction.opposite());
                river.has_river = true;
                river.name = Some(name.clone());

                cells.push(next);
                current = next;
                adjust_rainfall(gen, next, factor);
            }
            None => {
                let cell = &mut gen.cells[current];
                cell.render_tag = Some(format!("{}end", cell.subtype.name()));
                cell.river.has_river = true;
                cell.river.name = Some(name.clone());
                cell.river.exit = Heading::Still;
            }
        }
    }

    debug!("{} runs {} cells", name, cells.len());
    RiverPath { name, cells }
}

fn is_river_source(gen: &Generation, id: CellId) -> bool {
    let cell = &gen.cells[id];
    if cell.river.has_river || cell.subtype.blocks_river() {
        return false;
    }
    let open = gen
        .map
        .neighbors(id)
        .any(|(_, n)| !gen.cells[n].river.has_river);
    open
        && cell.subtype.is_mountain_family()
        && cell.mean_rainfall() > gen.conf.hydrology.source_rainfall
}

fn form_lakes(gen: &mut Generation) -> usize {
    let threshold = gen.conf.hydrology.lake_rainfall;
    let factor = gen.conf.hydrology.lake_factor;
    let mut lakes = 0;

    loop {
        let mut formed = 0;
        for id in gen.map.cells() {
            let cell = &mut gen.cells[id];
            if cell.river.has_river
                || cell.subtype == TerrainSubtype::Lake
                || cell.mean_rainfall() <= threshold
            {
                continue;
            }
            cell.subtype = TerrainSubtype::Lake;
            cell.terrain_type = TerrainType::Water;

            adjust_rainfall(gen, id, factor);
            let neighbors: Vec<_> = gen.map.neighbors(id).map(|(_, n)| n).collect();
            for neighbor in neighbors {
                adjust_rainfall(gen, neighbor, factor);
            }
            formed += 1;
        }
        lakes += formed;
        if formed == 0 {
            break;
        }
    }
    lakes
}

pub(crate) fn compute_hydrology(gen: &mut Generation) -> Vec<RiverPath> {
    let mut basins = DisjointSet::new(gen.map.num_cells());
    let mut rivers = vec![];

    for id in gen.map.cells() {
        if !is_river_source(gen, id) {
            continue;
        }
        let river = &mut gen.cells[id].river;
        river.has_river = true;
        river.entrance = Heading::Still;
        rivers.push(grow_river(gen, &mut basins, id));
    }

    let lakes = form_lakes(gen);
    info!("hydrology: {} rivers, {} lakes", rivers.len(), lakes);
    rivers
}
