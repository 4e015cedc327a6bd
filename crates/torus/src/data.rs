use crate::*;

#[derive(Clone, Debug, PartialEq)]
pub struct CellData<T> {
    pub data: Vec<T>,
}

impl<T> CellData<T> {
    pub fn for_each(map: &TorusMap, mut f: impl FnMut(CellId) -> T) -> Self {
        Self {
            data: map.cells().map(|id| f(id)).collect(),
        }
    }

    pub fn update_each(&mut self, mut f: impl FnMut(CellId, &mut T)) {
        for (idx, value) in self.data.iter_mut().enumerate() {
            f(CellId(idx), value)
        }
    }

    pub fn transform<U>(&self, mut f: impl FnMut(CellId, &T) -> U) -> CellData<U> {
        CellData {
            data: self
                .data
                .iter()
                .enumerate()
                .map(|(idx, t)| f(CellId(idx), t))
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (CellId, &T)> + '_ {
        self.data.iter().enumerate().map(|(idx, t)| (CellId(idx), t))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T: Clone> CellData<T> {
    pub fn uniform(map: &TorusMap, value: T) -> Self {
        Self {
            data: vec![value; map.num_cells()],
        }
    }

    /// Rewrites every cell from a snapshot of the grid, so no cell ever sees
    /// a neighbour value written during the same pass.
    pub fn update_with_neighbors(&mut self, map: &TorusMap, mut f: impl FnMut(&mut T, &[&T])) {
        let mut buf = Vec::with_capacity(8);
        let read_data = self.data.clone();
        for id in map.cells() {
            buf.clear();
            for (_, neighbor) in map.neighbors(id) {
                buf.push(&read_data[neighbor.0]);
            }
            f(&mut self.data[id.0], buf.as_slice())
        }
    }
}

impl CellData<f64> {
    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(f64::MIN, f64::max)
    }

    pub fn min(&self) -> f64 {
        self.data.iter().copied().fold(f64::MAX, f64::min)
    }
}

impl<T> std::ops::Index<CellId> for CellData<T> {
    type Output = T;
    fn index(&self, index: CellId) -> &Self::Output {
        &self.data[index.0]
    }
}

impl<T> std::ops::IndexMut<CellId> for CellData<T> {
    fn index_mut(&mut self, index: CellId) -> &mut Self::Output {
        &mut self.data[index.0]
    }
}
