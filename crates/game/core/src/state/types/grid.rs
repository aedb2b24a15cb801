//! Dense 2D storage indexed by [`Position`].
//!
//! Cells are stored column-major (`[x][y]`), matching how the map layers are
//! addressed. Every access goes through a bounds check; there is no unchecked
//! indexing in the public API.

use super::Position;
use crate::env::MapDimensions;
use crate::state::MapError;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<T> {
    dimensions: MapDimensions,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Creates a grid with every cell set to `value`.
    pub fn filled(dimensions: MapDimensions, value: T) -> Self {
        Self {
            dimensions,
            cells: vec![value; dimensions.area()],
        }
    }
}

impl<T> Grid<T> {
    /// Creates a grid by evaluating `f` once per cell, column by column.
    pub fn from_fn(dimensions: MapDimensions, mut f: impl FnMut(Position) -> T) -> Self {
        let mut cells = Vec::with_capacity(dimensions.area());
        for x in 0..dimensions.width {
            for y in 0..dimensions.height {
                cells.push(f(Position::new(x as i32, y as i32)));
            }
        }
        Self { dimensions, cells }
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    fn index(&self, position: Position) -> Option<usize> {
        if !self.dimensions.contains(position) {
            return None;
        }
        Some(position.x as usize * self.dimensions.height as usize + position.y as usize)
    }

    fn position_of(&self, index: usize) -> Position {
        let height = self.dimensions.height as usize;
        Position::new((index / height) as i32, (index % height) as i32)
    }

    pub fn get(&self, position: Position) -> Option<&T> {
        self.index(position).map(|index| &self.cells[index])
    }

    pub fn get_mut(&mut self, position: Position) -> Option<&mut T> {
        let index = self.index(position)?;
        Some(&mut self.cells[index])
    }

    /// Replaces the value at `position`, returning the previous one.
    pub fn set(&mut self, position: Position, value: T) -> Result<T, MapError> {
        let cell = self
            .get_mut(position)
            .ok_or(MapError::OutOfBounds { position })?;
        Ok(std::mem::replace(cell, value))
    }

    /// Iterates every cell together with its position, column by column.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, value)| (self.position_of(index), value))
    }

    /// Builds a new grid of the same dimensions by mapping every cell.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            dimensions: self.dimensions,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Raw cells in column-major order.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }
}

impl Grid<bool> {
    pub fn count_true(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Cell-wise `self |= other`.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ; map layers share one fixed size.
    pub fn union_with(&mut self, other: &Grid<bool>) {
        assert_eq!(
            self.dimensions, other.dimensions,
            "grid dimension mismatch in union"
        );
        for (cell, &set) in self.cells.iter_mut().zip(other.cells.iter()) {
            *cell |= set;
        }
    }

    /// True when every `true` cell of `self` is also `true` in `other`.
    pub fn is_subset_of(&self, other: &Grid<bool>) -> bool {
        self.dimensions == other.dimensions
            && self
                .cells
                .iter()
                .zip(other.cells.iter())
                .all(|(&mine, &theirs)| !mine || theirs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_major_round_trip_through_iter() {
        let grid = Grid::from_fn(MapDimensions::new(3, 2), |p| p.x * 10 + p.y);
        assert_eq!(grid.cells(), &[0, 1, 10, 11, 20, 21]);

        for (position, &value) in grid.iter() {
            assert_eq!(value, position.x * 10 + position.y);
        }
    }

    #[test]
    fn out_of_bounds_access_is_checked() {
        let mut grid = Grid::filled(MapDimensions::new(2, 2), 0u8);
        assert_eq!(grid.get(Position::new(2, 0)), None);
        assert_eq!(grid.get(Position::new(0, -1)), None);
        assert_eq!(
            grid.set(Position::new(5, 5), 1),
            Err(MapError::OutOfBounds {
                position: Position::new(5, 5)
            })
        );
        assert_eq!(grid.set(Position::new(1, 1), 7), Ok(0));
        assert_eq!(grid.get(Position::new(1, 1)), Some(&7));
    }

    #[test]
    fn union_accumulates() {
        let dims = MapDimensions::new(2, 1);
        let mut acc = Grid::filled(dims, false);
        let mut first = Grid::filled(dims, false);
        first.set(Position::new(0, 0), true).unwrap();
        let mut second = Grid::filled(dims, false);
        second.set(Position::new(1, 0), true).unwrap();

        acc.union_with(&first);
        acc.union_with(&second);
        assert_eq!(acc.count_true(), 2);
        assert!(first.is_subset_of(&acc));
        assert!(!acc.is_subset_of(&first));
    }

    #[test]
    #[should_panic(expected = "grid dimension mismatch")]
    fn union_rejects_mismatched_sizes() {
        let mut a = Grid::filled(MapDimensions::new(2, 2), false);
        let b = Grid::filled(MapDimensions::new(3, 2), false);
        a.union_with(&b);
    }

    #[test]
    fn map_preserves_dimensions() {
        let grid = Grid::filled(MapDimensions::new(4, 3), 2);
        let doubled = grid.map(|v| v * 2);
        assert_eq!(doubled.dimensions(), grid.dimensions());
        assert!(doubled.cells().iter().all(|&v| v == 4));
    }
}
