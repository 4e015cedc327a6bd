use log::{debug, info};
use torus::*;

use crate::terrain::TerrainSubtype;
use crate::Generation;

const BASE_TEMPERATURE: f64 = 14.0;

/// Nine-cell land score of every cell: the cell itself plus its neighbours.
fn nearby_land(gen: &Generation) -> CellData<u32> {
    CellData::for_each(&gen.map, |id| {
        let own = gen.cells[id].subtype.land_value();
        own + gen
            .map
            .neighbors(id)
            .map(|(_, n)| gen.cells[n].subtype.land_value())
            .sum::<u32>()
    })
}

/// Raw temperature of a cell before neighbourhood smoothing.
fn raw_temperature(gen: &Generation, id: CellId, land: u32, season: usize) -> f64 {
    let zones = &gen.zones;
    let relief = &gen.relief;
    let row = gen.row(id);
    let cell = &gen.cells[id];
    let is_water_body = cell.subtype.is_water_body();

    let mut t = BASE_TEMPERATURE;
    t += if is_water_body { 5.0 } else { -5.0 };

    if zones.in_polar_cap(row) {
        t -= 20.0;
    } else if zones.in_equator_core(row) {
        t += 20.0;
    }

    t += match land {
        l if l > 75 => -10.0,
        l if l > 55 => -5.0,
        l if l > 25 => 0.0,
        _ => 5.0,
    };

    // Seasonal swing by land tier: warm season, cold season, cold season at the equator.
    let (warm_shift, cold_shift, equator_cold_shift) = match land {
        l if l >= 40 => (20.0, 20.0, 10.0),
        l if l >= 20 => (10.0, 10.0, 5.0),
        _ => (5.0, 5.0, 0.0),
    };
    if season == gen.seasons.warm(zones, row) {
        t += warm_shift;
    } else if season == gen.seasons.cold(zones, row) {
        t -= if zones.in_equator_core(row) {
            equator_cold_shift
        } else {
            cold_shift
        };
    }

    if cell.elevation >= relief.highest {
        t -= 10.0;
    } else if cell.elevation >= relief.highest / 4.0 {
        t -= 5.0;
    } else if cell.elevation <= relief.lowest / 4.0 {
        t += 5.0;
    }

    if is_water_body && t > 30.0 {
        t -= 5.0;
    }
    t
}

pub(crate) fn compute_temperature(gen: &mut Generation) {
    let land = nearby_land(gen);

    for season in gen.seasons.iter() {
        let mut field =
            CellData::for_each(&gen.map, |id| raw_temperature(gen, id, land[id], season));

        field.update_with_neighbors(&gen.map, |t, neighborhood| {
            let sum = *t + neighborhood.iter().copied().sum::<f64>();
            *t = sum / (neighborhood.len() + 1) as f64;
        });

        for (id, &t) in field.iter() {
            gen.cells[id].temperature[season] = t;
        }
        debug!(
            "season {} temperature in [{:.1}, {:.1}]",
            season,
            field.min(),
            field.max()
        );
    }

    for (id, &l) in land.iter() {
        gen.cells[id].nearby_land = l;
    }
    info!("temperature computed for {} seasons", gen.seasons.count);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    #[test]
    fn uniform_sea_has_uniform_seasons() {
        let conf = small_conf(8);
        let mut gen = generation(&conf, |_, _| (TerrainSubtype::Sea, -1.0));
        compute_temperature(&mut gen);

        // Base 14, water +5, few land +5, elevation at the maximum -10.
        // Warm season +5, cold season -5, tenth is zero so no bands apply.
        let north = gen.map.cell(1, 4).unwrap();
        assert_eq!(gen.cells[north].temperature, vec![14.0, 19.0, 14.0, 9.0]);
        let south = gen.map.cell(6, 3).unwrap();
        assert_eq!(gen.cells[south].temperature, vec![14.0, 9.0, 14.0, 19.0]);

        // Row 0 wraps onto row 7, whose seasons are swapped.
        let edge = gen.map.cell(0, 0).unwrap();
        let summer = gen.cells[edge].temperature[1];
        assert!((summer - (6.0 * 19.0 + 3.0 * 9.0) / 9.0).abs() < 1e-9, "{summer}");
        assert_eq!(gen.cells[north].nearby_land, 0);
    }

    #[test]
    fn smoothing_reads_unsmoothed_values() {
        let conf = small_conf(8);
        let mut gen = generation(&conf, |row, column| {
            if (row, column) == (2, 2) {
                (TerrainSubtype::Mountain, 4.0)
            } else {
                (TerrainSubtype::Plains, 0.5)
            }
        });
        compute_temperature(&mut gen);

        let mountain = gen.map.cell(2, 2).unwrap();
        assert_eq!(gen.cells[mountain].nearby_land, 10);
        let far = gen.map.cell(6, 6).unwrap();
        assert_eq!(gen.cells[far].nearby_land, 9);

        // Plains: 14 - 5 + 5 = 14 in spring; the mountain top loses 10 more.
        assert_eq!(gen.cells[far].temperature[0], 14.0);
        for (_, n) in gen.map.neighbors(mountain) {
            let t = gen.cells[n].temperature[0];
            assert!((t - (14.0 - 10.0 / 9.0)).abs() < 1e-9, "neighbour at {t}");
        }
        let t = gen.cells[mountain].temperature[0];
        assert!((t - (14.0 - 10.0 / 9.0)).abs() < 1e-9);
    }
}
