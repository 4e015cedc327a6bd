use std::collections::HashMap;

use torus::Compass;
use worldgen::{TerrainSubtype, TileCatalog, World};

const RIVER: char = '=';
const RIVER_END: char = 'o';
const UNKNOWN: char = '?';

fn glyph(subtype: TerrainSubtype) -> char {
    use TerrainSubtype::*;
    match subtype {
        Sea => '~',
        Lake => '_',
        Ice => '#',
        Plains => '.',
        Forest => 'f',
        VerdantForest => 'v',
        SnowForest => 'F',
        Desert => 'd',
        SnowDesert => 'D',
        Tundra => 't',
        Hill => 'h',
        DryHill => 'y',
        SnowHill => 'H',
        Mountain => '^',
        SnowMountain => 'A',
        _ => '*',
    }
}

/// One character per render tag, river variants included.
pub struct GlyphCatalog {
    glyphs: HashMap<String, char>,
}

impl GlyphCatalog {
    pub fn new() -> Self {
        let mut glyphs = HashMap::new();
        glyphs.insert("ocean".to_string(), '~');
        glyphs.insert("water".to_string(), '-');
        for &subtype in TerrainSubtype::ALL {
            let name = subtype.name();
            glyphs.insert(name.to_string(), glyph(subtype));
            glyphs.insert(format!("{}end", name), RIVER_END);
            for a in Compass::ALL {
                for b in Compass::ALL {
                    if a != b {
                        let tag = format!("{}{}{}", a.abbreviation(), name, b.abbreviation());
                        glyphs.insert(tag, RIVER);
                    }
                }
            }
        }
        Self { glyphs }
    }
}

impl Default for GlyphCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TileCatalog for GlyphCatalog {
    type Tile = char;

    fn tile(&self, tag: &str) -> Option<&char> {
        self.glyphs.get(tag)
    }
}

/// Renders the world row by row. Cells without a tile (lakes) fall back to
/// their subtype glyph; tags the catalog lacks print as `?`.
pub fn paint(world: &World, catalog: &impl TileCatalog<Tile = char>) -> String {
    let size = world.size();
    let mut out = String::with_capacity(size * (size + 1));
    for row in 0..size {
        for column in 0..size {
            let glyph = match world.get(row, column) {
                Some(cell) => match cell.render_tag.as_deref() {
                    Some(tag) => catalog.tile(tag).copied().unwrap_or(UNKNOWN),
                    None => glyph(cell.subtype),
                },
                None => UNKNOWN,
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}
