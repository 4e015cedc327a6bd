use log::{debug, info};
use rand::Rng;
use torus::*;

use crate::terrain::{Heading, Wind};
use crate::Generation;

/// Pressure before the random multiplier: seas and dry bands are high, the equator low.
fn base_pressure(gen: &Generation, id: CellId, season: usize) -> f64 {
    let zones = &gen.zones;
    let relief = &gen.relief;
    let row = gen.row(id);
    let high = relief.highest;
    let low = -relief.lowest.abs();

    let mut p = gen.cells[id].elevation;
    p += if p <= relief.thresholds.water { high } else { low };

    if zones.in_desert_band(row) {
        p += high;
    }
    if zones.in_polar_band(row) {
        p += high;
    }
    if zones.in_equator_band(row) {
        p += low;
    }

    if season == gen.seasons.summer {
        p += relief.lowest / 4.0;
    } else if season == gen.seasons.winter {
        p += relief.highest / 4.0;
    }
    p
}

pub(crate) fn compute_pressure(gen: &mut Generation) {
    for season in gen.seasons.iter() {
        for id in gen.map.cells() {
            let p = base_pressure(gen, id, season);
            let multiplier = gen.rng.gen_range(1..4);
            gen.cells[id].pressure[season] = p * multiplier as f64;
        }
    }
    info!("pressure computed");
}

/// Wind blows towards the lowest neighbouring pressure. Ties go to the later
/// neighbour in scan order.
pub(crate) fn wind_at(map: &TorusMap, pressure: impl Fn(CellId) -> f64, id: CellId) -> Wind {
    let own = pressure(id);
    let mut lowest = own;
    let mut heading = Heading::Still;
    for (direction, neighbor) in map.neighbors(id) {
        let p = pressure(neighbor);
        if p <= lowest {
            lowest = p;
            heading = Heading::Toward(direction);
        }
    }
    Wind {
        heading,
        speed: (own - lowest).abs(),
    }
}

pub(crate) fn compute_wind(gen: &mut Generation) {
    for season in gen.seasons.iter() {
        let winds = CellData::for_each(&gen.map, |id| {
            wind_at(&gen.map, |cell| gen.cells[cell].pressure[season], id)
        });
        let calm = winds.data.iter().filter(|w| w.speed == 0.0).count();
        for (id, &wind) in winds.iter() {
            gen.cells[id].wind[season] = wind;
        }
        debug!("season {} wind: {} calm cells", season, calm);
    }
    info!("wind computed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::TerrainSubtype;
    use crate::test_support::*;

    #[test]
    fn wind_follows_lowest_neighbour() {
        let map = TorusMap::new(4);
        let sink = map.cell(2, 1).unwrap();
        let pressure = |id: CellId| if id == sink { -3.0 } else { 5.0 };

        let wind = wind_at(&map, pressure, map.cell(1, 1).unwrap());
        assert_eq!(wind.heading, Heading::Toward(Compass::South));
        assert_eq!(wind.speed, 8.0);

        let wind = wind_at(&map, pressure, sink);
        assert_eq!(wind.heading, Heading::Still);
        assert_eq!(wind.speed, 0.0);
    }

    #[test]
    fn flat_pressure_still_adopts_last_neighbour() {
        let map = TorusMap::new(4);
        let wind = wind_at(&map, |_| 1.0, map.cell(0, 0).unwrap());
        assert_eq!(wind.heading, Heading::Toward(Compass::SouthEast));
        assert_eq!(wind.speed, 0.0);
    }

    #[test]
    fn pressure_multiplier_is_one_to_three() {
        let conf = small_conf(8);
        let mut gen = generation(&conf, |_, _| (TerrainSubtype::Plains, 1.0));
        compute_pressure(&mut gen);

        // Elevation 1, land -1, polar band at rows 0 and 7 +1, equator band at row 3 -1.
        for id in gen.map.cells() {
            let row = gen.row(id);
            let base = match row {
                0 | 7 => 1.0,
                3 => -1.0,
                _ => 0.0,
            };
            for season in gen.seasons.iter() {
                let shifted = match season {
                    1 => base + 0.25,
                    3 => base + 0.25,
                    _ => base,
                };
                let p = gen.cells[id].pressure[season];
                let ok = [1.0, 2.0, 3.0].iter().any(|m| (p - shifted * m).abs() < 1e-9);
                assert!(ok, "row {row} season {season}: {p} from {shifted}");
            }
        }
    }
}
