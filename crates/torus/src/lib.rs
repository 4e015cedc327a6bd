pub mod data;
pub mod disjoint_set;

pub use data::CellData;
pub use disjoint_set::DisjointSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId(usize);

impl CellId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Compass {
    NorthWest,
    North,
    NorthEast,
    West,
    East,
    SouthWest,
    South,
    SouthEast,
}

impl Compass {
    /// Neighbour scan order: upper row left to right, the two sides, lower row.
    pub const ALL: [Compass; 8] = [
        Compass::NorthWest,
        Compass::North,
        Compass::NorthEast,
        Compass::West,
        Compass::East,
        Compass::SouthWest,
        Compass::South,
        Compass::SouthEast,
    ];

    pub const fn opposite(self) -> Compass {
        match self {
            Compass::NorthWest => Compass::SouthEast,
            Compass::North => Compass::South,
            Compass::NorthEast => Compass::SouthWest,
            Compass::West => Compass::East,
            Compass::East => Compass::West,
            Compass::SouthWest => Compass::NorthEast,
            Compass::South => Compass::North,
            Compass::SouthEast => Compass::NorthWest,
        }
    }

    /// (row, column) step. Rows grow southwards.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Compass::NorthWest => (-1, -1),
            Compass::North => (-1, 0),
            Compass::NorthEast => (-1, 1),
            Compass::West => (0, -1),
            Compass::East => (0, 1),
            Compass::SouthWest => (1, -1),
            Compass::South => (1, 0),
            Compass::SouthEast => (1, 1),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Compass::NorthWest => "northwest",
            Compass::North => "north",
            Compass::NorthEast => "northeast",
            Compass::West => "west",
            Compass::East => "east",
            Compass::SouthWest => "southwest",
            Compass::South => "south",
            Compass::SouthEast => "southeast",
        }
    }

    pub const fn abbreviation(self) -> &'static str {
        match self {
            Compass::NorthWest => "NW",
            Compass::North => "N",
            Compass::NorthEast => "NE",
            Compass::West => "W",
            Compass::East => "E",
            Compass::SouthWest => "SW",
            Compass::South => "S",
            Compass::SouthEast => "SE",
        }
    }
}

impl std::fmt::Display for Compass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A square grid whose opposite edges are glued together.
///
/// Cells are laid out row-major, so `CellId` order is the canonical
/// iteration order of every whole-grid pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TorusMap {
    size: usize,
}

impl TorusMap {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn max_index(&self) -> usize {
        self.size.saturating_sub(1)
    }

    pub fn num_cells(&self) -> usize {
        self.size * self.size
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<CellId> {
        if row < self.size && column < self.size {
            Some(CellId(row * self.size + column))
        } else {
            None
        }
    }

    pub fn coords(&self, id: CellId) -> (usize, usize) {
        (id.0 / self.size, id.0 % self.size)
    }

    pub fn row(&self, id: CellId) -> usize {
        id.0 / self.size
    }

    pub fn column(&self, id: CellId) -> usize {
        id.0 % self.size
    }

    pub fn cells(&self) -> impl Iterator<Item = CellId> {
        (0..self.num_cells()).map(CellId)
    }

    pub fn neighbor(&self, id: CellId, direction: Compass) -> CellId {
        let (row, column) = self.coords(id);
        let (dr, dc) = direction.offset();
        let row = wrap(row, dr, self.size);
        let column = wrap(column, dc, self.size);
        CellId(row * self.size + column)
    }

    pub fn neighbors(&self, id: CellId) -> impl Iterator<Item = (Compass, CellId)> + '_ {
        Compass::ALL
            .iter()
            .map(move |&direction| (direction, self.neighbor(id, direction)))
    }
}

fn wrap(index: usize, delta: isize, size: usize) -> usize {
    let size = size as isize;
    (index as isize + delta).rem_euclid(size) as usize
}
