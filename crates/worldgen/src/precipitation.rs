use log::info;
use torus::*;

use crate::terrain::{Heading, TerrainSubtype};
use crate::Generation;

/// Carries a cell's wind speed as rain to the cell downwind. Mountains
/// stop the wind, so the rain falls on the windward cell instead.
pub(crate) fn advect(gen: &mut Generation, id: CellId, season: usize) {
    let wind = gen.cells[id].wind[season];
    if wind.speed <= 0.0 {
        return;
    }
    let direction = match wind.heading {
        Heading::Toward(direction) => direction,
        _ => return,
    };

    let target = gen.map.neighbor(id, direction);
    let sink = if gen.cells[target].subtype == TerrainSubtype::Mountain {
        id
    } else {
        target
    };
    gen.cells[sink].rainfall[season] += wind.speed;
}

fn adjustment(gen: &Generation, id: CellId, season: usize) -> f64 {
    let zones = &gen.zones;
    let row = gen.row(id);
    let cell = &gen.cells[id];

    let mut rain = 0.0;
    if cell.subtype.is_water_body() {
        rain += 100.0;
    }
    if cell.subtype == TerrainSubtype::Mountain {
        rain += 10.0;
    }

    if cell.nearby_land <= 20 {
        rain += 50.0;
    } else if cell.nearby_land <= 40 {
        rain += 25.0;
    }

    if zones.in_equator_band(row) {
        rain += 25.0;
    }
    if zones.in_desert_band(row) {
        rain -= 20.0;
    }
    if zones.in_polar_band(row) {
        rain -= 20.0;
    }

    rain += if gen.seasons.is_extreme(season) { -20.0 } else { 20.0 };
    rain
}

pub(crate) fn compute_rainfall(gen: &mut Generation) {
    for cell in gen.cells.data.iter_mut() {
        for (rain, pressure) in cell.rainfall.iter_mut().zip(&cell.pressure) {
            *rain = -pressure;
        }
    }

    for season in gen.seasons.iter() {
        for id in gen.map.cells() {
            advect(gen, id, season);
            let delta = adjustment(gen, id, season);
            gen.cells[id].rainfall[season] += delta;
        }
    }

    let wettest = gen
        .cells
        .data
        .iter()
        .map(|c| c.mean_rainfall())
        .fold(f64::MIN, f64::max);
    info!("rainfall computed, wettest cell averages {:.1}", wettest);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::Wind;
    use crate::test_support::*;

    #[test]
    fn rain_falls_downwind_unless_a_mountain_blocks() {
        let conf = small_conf(8);
        let mut gen = generation(&conf, |row, column| match (row, column) {
            (2, 4) => (TerrainSubtype::Mountain, 5.0),
            _ => (TerrainSubtype::Plains, 1.0),
        });
        let source = gen.map.cell(2, 2).unwrap();
        let open = gen.map.cell(1, 2).unwrap();
        let windward = gen.map.cell(2, 3).unwrap();

        gen.cells[source].wind[0] = Wind {
            heading: Heading::Toward(Compass::North),
            speed: 4.0,
        };
        advect(&mut gen, source, 0);
        assert_eq!(gen.cells[open].rainfall[0], 4.0);
        assert_eq!(gen.cells[source].rainfall[0], 0.0);

        gen.cells[windward].wind[0] = Wind {
            heading: Heading::Toward(Compass::East),
            speed: 2.5,
        };
        advect(&mut gen, windward, 0);
        assert_eq!(gen.cells[windward].rainfall[0], 2.5);
    }

    #[test]
    fn still_air_carries_nothing() {
        let conf = small_conf(8);
        let mut gen = generation(&conf, |_, _| (TerrainSubtype::Plains, 1.0));
        let id = gen.map.cell(4, 4).unwrap();
        gen.cells[id].wind[0] = Wind {
            heading: Heading::Toward(Compass::West),
            speed: 0.0,
        };
        advect(&mut gen, id, 0);
        assert!(gen.cells.data.iter().all(|c| c.rainfall[0] == 0.0));
    }

    #[test]
    fn seas_and_mild_seasons_are_wetter() {
        let conf = small_conf(8);
        let mut gen = generation(&conf, |row, _| {
            if row == 5 {
                (TerrainSubtype::Sea, -1.0)
            } else {
                (TerrainSubtype::Plains, 1.0)
            }
        });
        let sea = gen.map.cell(5, 0).unwrap();
        let land = gen.map.cell(4, 0).unwrap();

        // Few land cells +50, sea +100, mild season +20, extreme season -20.
        assert_eq!(adjustment(&gen, sea, 0), 170.0);
        assert_eq!(adjustment(&gen, sea, 1), 130.0);
        assert_eq!(adjustment(&gen, land, 2), 70.0);

        // Rows 0 and 7 are polar, row 3 is equatorial.
        let polar = gen.map.cell(0, 0).unwrap();
        assert_eq!(adjustment(&gen, polar, 0), 50.0);
        let equator = gen.map.cell(3, 0).unwrap();
        assert_eq!(adjustment(&gen, equator, 0), 95.0);

        compute_rainfall(&mut gen);
        assert!(gen.cells[sea].mean_rainfall() > gen.cells[land].mean_rainfall());
    }
}
