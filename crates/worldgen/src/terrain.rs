use torus::Compass;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TerrainType {
    Ocean,
    Water,
    Plains,
    Hill,
    Mountain,
    Light,
    Darkness,
}

impl TerrainType {
    pub const fn name(self) -> &'static str {
        match self {
            TerrainType::Ocean => "ocean",
            TerrainType::Water => "water",
            TerrainType::Plains => "plains",
            TerrainType::Hill => "hill",
            TerrainType::Mountain => "mountain",
            TerrainType::Light => "light",
            TerrainType::Darkness => "darkness",
        }
    }

    pub const fn is_water(self) -> bool {
        matches!(self, TerrainType::Ocean | TerrainType::Water)
    }
}

macro_rules! subtypes {
    ($($variant:ident => $name:literal,)*) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum TerrainSubtype {
            $($variant,)*
        }

        impl TerrainSubtype {
            pub const ALL: &'static [TerrainSubtype] = &[$(TerrainSubtype::$variant,)*];

            pub const fn name(self) -> &'static str {
                match self {
                    $(TerrainSubtype::$variant => $name,)*
                }
            }
        }
    };
}

subtypes! {
    Sea => "sea",
    Lake => "lake",
    Plains => "plains",
    Forest => "forest",
    Desert => "desert",
    Tundra => "tundra",
    VerdantForest => "verdantforest",
    SnowForest => "snowforest",
    SnowDesert => "snowdesert",
    Ice => "ice",
    Hill => "hill",
    DryHill => "dryhill",
    SnowHill => "snowhill",
    Mountain => "mountain",
    EarthMountain => "earthmountain",
    SnowMountain => "snowmountain",
    Light => "light",
    AirPlains => "airplains",
    BrightLight => "brightlight",
    GlowForest => "glowforest",
    GlowPlains => "glowplains",
    WaterPlains => "waterplains",
    Darkness => "darkness",
    DeepDarkness => "deepdarkness",
    FireHill => "firehill",
    FirePlains => "fireplains",
    Toxic => "toxic",
    Wasteland => "wasteland",
}

impl TerrainSubtype {
    pub const fn is_water_body(self) -> bool {
        matches!(self, TerrainSubtype::Sea | TerrainSubtype::Lake)
    }

    /// Rivers neither start on nor flow out of these cells.
    pub const fn blocks_river(self) -> bool {
        matches!(
            self,
            TerrainSubtype::Sea | TerrainSubtype::Lake | TerrainSubtype::Ice
        )
    }

    pub const fn is_mountain_family(self) -> bool {
        matches!(
            self,
            TerrainSubtype::Mountain | TerrainSubtype::SnowMountain | TerrainSubtype::EarthMountain
        )
    }

    /// Contribution of a cell to the nearby-land score of its neighbourhood.
    pub const fn land_value(self) -> u32 {
        match self {
            TerrainSubtype::Sea | TerrainSubtype::Lake => 0,
            TerrainSubtype::Mountain => 2,
            _ => 1,
        }
    }
}

impl std::fmt::Display for TerrainSubtype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Where wind blows or where a river enters or leaves a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Heading {
    #[default]
    None,
    Still,
    Toward(Compass),
}

impl Heading {
    pub fn compass(self) -> Option<Compass> {
        match self {
            Heading::Toward(direction) => Some(direction),
            _ => None,
        }
    }
}

impl std::fmt::Display for Heading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Heading::None => f.write_str("none"),
            Heading::Still => f.write_str("still"),
            Heading::Toward(direction) => write!(f, "{direction}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Wind {
    pub heading: Heading,
    pub speed: f64,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct RiverState {
    pub has_river: bool,
    pub name: Option<String>,
    pub entrance: Heading,
    pub exit: Heading,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Terrain {
    pub elevation: f64,
    pub terrain_type: TerrainType,
    pub subtype: TerrainSubtype,
    pub temperature: Vec<f64>,
    pub pressure: Vec<f64>,
    pub rainfall: Vec<f64>,
    pub wind: Vec<Wind>,
    pub nearby_land: u32,
    pub river: RiverState,
    pub render_tag: Option<String>,
}

impl Terrain {
    pub(crate) fn new(
        elevation: f64,
        terrain_type: TerrainType,
        subtype: TerrainSubtype,
        seasons: usize,
    ) -> Self {
        Self {
            elevation,
            terrain_type,
            subtype,
            temperature: vec![0.0; seasons],
            pressure: vec![0.0; seasons],
            rainfall: vec![0.0; seasons],
            wind: vec![Wind::default(); seasons],
            nearby_land: 0,
            river: RiverState::default(),
            render_tag: Some(terrain_type.name().to_string()),
        }
    }

    pub fn mean_rainfall(&self) -> f64 {
        self.rainfall.iter().sum::<f64>() / self.rainfall.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtype_catalog_is_complete() {
        assert_eq!(TerrainSubtype::ALL.len(), 28);
        let mut names: Vec<_> = TerrainSubtype::ALL.iter().map(|s| s.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 28);
        assert!(names.iter().all(|n| n.chars().all(|c| c.is_ascii_lowercase())));
    }

    #[test]
    fn land_scores() {
        assert_eq!(TerrainSubtype::Lake.land_value(), 0);
        assert_eq!(TerrainSubtype::Mountain.land_value(), 2);
        assert_eq!(TerrainSubtype::SnowMountain.land_value(), 1);
        assert_eq!(TerrainSubtype::Ice.land_value(), 1);
    }

    #[test]
    fn new_cells_carry_height_class_tag() {
        let cell = Terrain::new(-3.0, TerrainType::Ocean, TerrainSubtype::Sea, 4);
        assert_eq!(cell.render_tag.as_deref(), Some("ocean"));
        assert_eq!(cell.rainfall.len(), 4);
        assert_eq!(cell.river, RiverState::default());
    }
}
