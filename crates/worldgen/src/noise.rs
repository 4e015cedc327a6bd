use rand::Rng;
use torus::*;

/// Value noise built from a single layer of white noise sampled at
/// power-of-two periods.
pub(crate) struct NoiseSynthesizer {
    map: TorusMap,
    white: CellData<f64>,
}

impl NoiseSynthesizer {
    pub(crate) fn new(map: &TorusMap, rng: &mut impl Rng) -> Self {
        let white = CellData::for_each(map, |_| rng.gen::<f64>());
        Self { map: *map, white }
    }

    fn sample(&self, row: usize, column: usize) -> f64 {
        self.white.data[row * self.map.size() + column]
    }

    /// Bilinear interpolation between white noise samples taken every `2^octave` cells.
    /// Periods at or beyond the grid size all collapse onto the first sample.
    pub(crate) fn smooth(&self, octave: usize) -> CellData<f64> {
        let size = self.map.size();
        let period = u32::try_from(octave)
            .ok()
            .and_then(|shift| 1usize.checked_shl(shift))
            .map_or(size, |period| period.min(size));

        CellData::for_each(&self.map, |id| {
            let (row, column) = self.map.coords(id);

            let row0 = (row / period) * period;
            let row1 = (row0 + period) % size;
            let row_blend = (row - row0) as f64 / period as f64;

            let column0 = (column / period) * period;
            let column1 = (column0 + period) % size;
            let column_blend = (column - column0) as f64 / period as f64;

            let top = lerp(self.sample(row0, column0), self.sample(row1, column0), row_blend);
            let bottom = lerp(self.sample(row0, column1), self.sample(row1, column1), row_blend);
            lerp(top, bottom, column_blend)
        })
    }

    pub(crate) fn blend(&self, octaves: usize, persistence: f64) -> CellData<f64> {
        let layers: Vec<_> = (0..octaves).map(|octave| self.smooth(octave)).collect();

        let mut acc = CellData::uniform(&self.map, 0.0);
        let mut amplitude = 1.0;
        let mut total = 0.0;
        for layer in layers.iter().rev() {
            amplitude *= persistence;
            total += amplitude;
            acc.update_each(|id, x| *x += layer[id] * amplitude);
        }

        acc.update_each(|_, x| *x /= total);
        acc
    }
}

fn lerp(x0: f64, x1: f64, alpha: f64) -> f64 {
    x0 * (1.0 - alpha) + alpha * x1
}
