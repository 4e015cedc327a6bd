use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use worldgen::{TerrainSubtype, World, WorldGenConf, WorldGenerator};

pub mod painter;

use painter::GlyphCatalog;

#[derive(Parser, Debug)]
#[command(author, version, about = "Toroidal world generator", long_about = None)]
struct Args {
    /// TOML configuration; defaults apply when omitted.
    conf: Option<PathBuf>,
    /// Cell to inspect, as `row,column`.
    #[arg(long, value_parser = parse_cell)]
    query: Option<(usize, usize)>,
    /// Overrides the configured seed.
    #[arg(long)]
    seed: Option<u64>,
}

fn parse_cell(text: &str) -> Result<(usize, usize), String> {
    let (row, column) = text
        .split_once(',')
        .ok_or_else(|| format!("expected row,column, got {text:?}"))?;
    let row = row.trim().parse().map_err(|e| format!("bad row: {e}"))?;
    let column = column.trim().parse().map_err(|e| format!("bad column: {e}"))?;
    Ok((row, column))
}

fn log_census(world: &World) {
    for (terrain_type, count) in world.count_types() {
        info!("{:>9}: {}", terrain_type.name(), count);
    }
    for &subtype in TerrainSubtype::ALL {
        let count = world.count_subtype(subtype);
        if count > 0 {
            info!("  {:>14}: {}", subtype.name(), count);
        }
    }
    for river in world.rivers() {
        if let (Some(source), Some(mouth)) = (river.source(), river.mouth()) {
            let map = world.map();
            info!(
                "{} runs {} cells from {:?} to {:?}",
                river.name,
                river.len(),
                map.coords(source),
                map.coords(mouth)
            );
        }
    }
}

fn run(args: Args) -> worldgen::Result<()> {
    let mut conf = match &args.conf {
        Some(path) => WorldGenConf::from_file(path)?,
        None => WorldGenConf::default(),
    };
    if let Some(seed) = args.seed {
        conf.seed = seed;
    }

    let generator = WorldGenerator::new(conf)?;
    info!("generating a {0}x{0} world from seed {1}", generator.conf().size, generator.conf().seed);
    let world = generator.generate()?;
    log_census(&world);

    print!("{}", painter::paint(&world, &GlyphCatalog::new()));
    if let Some((row, column)) = args.query {
        print!("{}", world.query(row, column)?);
    }
    Ok(())
}

pub fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
