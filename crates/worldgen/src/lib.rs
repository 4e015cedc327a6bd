use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use torus::*;

pub mod conf;
mod error;
pub mod terrain;
pub mod view;
pub mod zones;

mod atmosphere;
mod biome;
mod heightmap;
mod hydrology;
mod noise;
mod precipitation;
mod thermology;
mod world_map;

pub use conf::{HydrologyConf, NoiseConf, WorldGenConf};
pub use error::{ConfError, Error, Result};
pub use heightmap::{Relief, Thresholds};
pub use hydrology::RiverPath;
pub use terrain::{Heading, RiverState, Terrain, TerrainSubtype, TerrainType, Wind};
pub use view::{CellReport, TileCatalog};
pub use world_map::World;
pub use zones::{Seasons, Zones};

use heightmap::HeightMapBuilder;
use noise::NoiseSynthesizer;

pub struct WorldGenerator {
    conf: WorldGenConf,
}

impl WorldGenerator {
    pub fn new(conf: WorldGenConf) -> Result<Self> {
        conf.validate()?;
        Ok(Self { conf })
    }

    pub fn conf(&self) -> &WorldGenConf {
        &self.conf
    }

    pub fn generate(&self) -> Result<World> {
        self.generate_with_seed(self.conf.seed)
    }

    pub fn generate_with_seed(&self, seed: u64) -> Result<World> {
        let rng = SmallRng::seed_from_u64(seed);
        let mut gen = Generation::new(&self.conf, rng);
        info!(
            "relief of {0}x{0} world, seed {1}: [{2:.2}, {3:.2}]",
            gen.map.size(),
            seed,
            gen.relief.lowest,
            gen.relief.highest
        );

        thermology::compute_temperature(&mut gen);
        atmosphere::compute_pressure(&mut gen);
        atmosphere::compute_wind(&mut gen);
        precipitation::compute_rainfall(&mut gen);
        let rivers = hydrology::compute_hydrology(&mut gen);
        biome::compute_biomes(&mut gen);

        let world = World::new(gen.map, gen.seasons, gen.zones, gen.relief, gen.cells, rivers);
        world.validate()?;
        Ok(world)
    }
}

/// Mutable state of a single generation run, threaded through every stage.
pub(crate) struct Generation<'a> {
    pub(crate) map: TorusMap,
    pub(crate) conf: &'a WorldGenConf,
    pub(crate) seasons: Seasons,
    pub(crate) zones: Zones,
    pub(crate) relief: Relief,
    pub(crate) cells: CellData<Terrain>,
    pub(crate) rng: SmallRng,
}

impl<'a> Generation<'a> {
    fn new(conf: &'a WorldGenConf, mut rng: SmallRng) -> Self {
        let map = TorusMap::new(conf.size);
        let seasons = Seasons::new(conf.seasons);

        let noise = NoiseSynthesizer::new(&map, &mut rng)
            .blend(conf.octaves(), conf.noise.persistence);
        let (elevation, relief) = HeightMapBuilder::new(&noise, conf.noise.elevation_scale).build();

        let cells = elevation.transform(|_, &h| {
            let (terrain_type, subtype) = heightmap::height_class(&relief.thresholds, h);
            Terrain::new(h, terrain_type, subtype, seasons.count)
        });

        Self {
            map,
            conf,
            seasons,
            zones: Zones::new(map.max_index()),
            relief,
            cells,
            rng,
        }
    }

    pub(crate) fn row(&self, id: CellId) -> usize {
        self.map.row(id)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_conf_is_rejected_up_front() {
        let result = WorldGenerator::new(WorldGenConf::with_size(10, 0));
        assert!(matches!(result, Err(Error::Conf(ConfError::Size(10)))));
    }

    #[test]
    fn heightmap_stage_classifies_every_cell() {
        let conf = WorldGenConf::with_size(16, 3);
        let gen = Generation::new(&conf, SmallRng::seed_from_u64(conf.seed));
        assert_eq!(gen.cells.len(), 256);
        assert!(gen.relief.thresholds.is_ordered());
        for (_, cell) in gen.cells.iter() {
            assert_eq!(gen.relief.thresholds.classify(cell.elevation), cell.terrain_type);
            assert_eq!(cell.render_tag.as_deref(), Some(cell.terrain_type.name()));
        }
    }

    #[test]
    fn octave_count_can_exceed_the_word_size() {
        let mut conf = WorldGenConf::with_size(128, 4);
        conf.noise.high_range_divisor = 128;
        let generator = WorldGenerator::new(conf).unwrap();
        assert_eq!(generator.conf().octaves(), 128);

        let gen = Generation::new(generator.conf(), SmallRng::seed_from_u64(4));
        assert_eq!(gen.cells.len(), 128 * 128);
        assert!(gen.cells.iter().all(|(_, c)| c.elevation.is_finite()));
    }
}
