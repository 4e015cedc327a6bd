/// Latitude bands derived from the largest row index.
///
/// Temperature asks for the strict `*_cap`/`*_core` variants, every other
/// stage uses the inclusive bands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Zones {
    pub half: usize,
    pub tenth: usize,
    pub equator_top: usize,
    pub equator_bottom: usize,
    pub polar_north: usize,
    pub polar_south: usize,
    pub desert_north: usize,
    pub desert_south: usize,
}

impl Zones {
    pub fn new(max_index: usize) -> Self {
        let half = max_index / 2;
        let tenth = max_index / 10;
        let equator_top = half - tenth;
        let equator_bottom = half + tenth;
        Self {
            half,
            tenth,
            equator_top,
            equator_bottom,
            polar_north: tenth,
            polar_south: max_index - tenth,
            desert_north: equator_top - tenth,
            desert_south: equator_bottom + tenth,
        }
    }

    pub fn is_northern(&self, row: usize) -> bool {
        row <= self.half
    }

    pub fn in_polar_cap(&self, row: usize) -> bool {
        row < self.polar_north || row > self.polar_south
    }

    pub fn in_equator_core(&self, row: usize) -> bool {
        row > self.equator_top && row < self.equator_bottom
    }

    pub fn in_polar_band(&self, row: usize) -> bool {
        row <= self.polar_north || row >= self.polar_south
    }

    pub fn in_equator_band(&self, row: usize) -> bool {
        (self.equator_top..=self.equator_bottom).contains(&row)
    }

    pub fn in_desert_band(&self, row: usize) -> bool {
        (self.desert_north..self.equator_top).contains(&row)
            || (row > self.equator_bottom && row <= self.desert_south)
    }
}

/// Which season indices play summer and winter in the north. The south swaps them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Seasons {
    pub count: usize,
    pub summer: usize,
    pub winter: usize,
}

impl Seasons {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            summer: count / 4,
            winter: 3 * count / 4,
        }
    }

    pub fn iter(&self) -> std::ops::Range<usize> {
        0..self.count
    }

    pub fn is_extreme(&self, season: usize) -> bool {
        season == self.summer || season == self.winter
    }

    pub fn warm(&self, zones: &Zones, row: usize) -> usize {
        if zones.is_northern(row) {
            self.summer
        } else {
            self.winter
        }
    }

    pub fn cold(&self, zones: &Zones, row: usize) -> usize {
        if zones.is_northern(row) {
            self.winter
        } else {
            self.summer
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_of_a_large_world() {
        let zones = Zones::new(127);
        assert_eq!((zones.half, zones.tenth), (63, 12));
        assert_eq!((zones.equator_top, zones.equator_bottom), (51, 75));
        assert_eq!((zones.polar_north, zones.polar_south), (12, 115));
        assert_eq!((zones.desert_north, zones.desert_south), (39, 87));

        assert!(zones.in_polar_band(12) && !zones.in_polar_cap(12));
        assert!(zones.in_polar_cap(11) && zones.in_polar_cap(116));
        assert!(zones.in_equator_band(51) && !zones.in_equator_core(51));
        assert!(zones.in_equator_core(52));
        assert!(zones.in_desert_band(39) && zones.in_desert_band(50));
        assert!(!zones.in_desert_band(51) && !zones.in_desert_band(75));
        assert!(zones.in_desert_band(76) && zones.in_desert_band(87));
        assert!(!zones.in_desert_band(88));
    }

    #[test]
    fn small_world_has_no_caps() {
        // With a tenth of zero the caps and the equator core are empty.
        let zones = Zones::new(7);
        assert_eq!(zones.tenth, 0);
        assert!((0..8).all(|row| !zones.in_polar_cap(row) && !zones.in_equator_core(row)));
        assert!(zones.in_polar_band(0) && zones.in_polar_band(7));
        assert!(zones.in_equator_band(3));
        assert!((0..8).all(|row| !zones.in_desert_band(row)));
    }

    #[test]
    fn hemispheres_swap_seasons() {
        let zones = Zones::new(7);
        let seasons = Seasons::new(4);
        assert_eq!((seasons.summer, seasons.winter), (1, 3));
        assert_eq!(seasons.warm(&zones, 3), 1);
        assert_eq!(seasons.warm(&zones, 4), 3);
        assert_eq!(seasons.cold(&zones, 4), 1);
        assert!(seasons.is_extreme(3) && !seasons.is_extreme(2));
    }
}
