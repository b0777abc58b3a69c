//! Grid module - bounds checking and food placement
//!
//! The grid itself holds no cells; it only knows its dimensions. Occupancy
//! lives in [`crate::Snake`], which keeps a set of its segments for O(1) lookups.
//! Coordinates: (x, y) where x ranges 0..width (left to right), y ranges
//! 0..height (top to bottom).

use std::collections::HashSet;

use crate::config::{ConfigError, GameConfig, MIN_GRID_EDGE};
use crate::rng::SimpleRng;
use crate::types::{Cell, GRID_HEIGHT, GRID_WIDTH};

/// Rejection-sampling attempts per grid cell before falling back to an
/// exhaustive scan of the free cells.
const REJECTION_ATTEMPTS_PER_CELL: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    width: u8,
    height: u8,
}

impl Grid {
    pub fn try_new(width: u8, height: u8) -> Result<Self, ConfigError> {
        if width < MIN_GRID_EDGE || height < MIN_GRID_EDGE {
            return Err(ConfigError::GridTooSmall {
                width,
                height,
                min: MIN_GRID_EDGE,
            });
        }
        Ok(Self { width, height })
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        Self::try_new(config.width, config.height)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn cell_count(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// True iff `0 <= x < width` and `0 <= y < height`.
    #[inline(always)]
    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width as i16 && cell.y >= 0 && cell.y < self.height as i16
    }

    /// Where a fresh snake starts.
    pub fn center(&self) -> Cell {
        Cell::new((self.width / 2) as i16, (self.height / 2) as i16)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height as i16).flat_map(move |y| (0..self.width as i16).map(move |x| Cell::new(x, y)))
    }

    /// Uniformly pick a cell not in `excluding`.
    ///
    /// Samples with rejection first; if that keeps hitting occupied cells the
    /// grid is nearly full, so the free cells are enumerated and one of them is
    /// picked directly. Returns `None` only when no free cell exists.
    pub fn random_free_cell(&self, excluding: &HashSet<Cell>, rng: &mut SimpleRng) -> Option<Cell> {
        let attempts = self.cell_count() * REJECTION_ATTEMPTS_PER_CELL;
        for _ in 0..attempts {
            let cell = Cell::new(
                rng.next_range(self.width as u32) as i16,
                rng.next_range(self.height as u32) as i16,
            );
            if !excluding.contains(&cell) {
                return Some(cell);
            }
        }

        let free = self.cells().filter(|c| !excluding.contains(c)).count() as u32;
        if free == 0 {
            return None;
        }
        let pick = rng.next_range(free) as usize;
        self.cells().filter(|c| !excluding.contains(c)).nth(pick)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let grid = Grid::default();
        assert!(grid.is_in_bounds(Cell::new(0, 0)));
        assert!(grid.is_in_bounds(Cell::new(19, 19)));
        assert!(!grid.is_in_bounds(Cell::new(-1, 5)));
        assert!(!grid.is_in_bounds(Cell::new(5, -1)));
        assert!(!grid.is_in_bounds(Cell::new(20, 0)));
        assert!(!grid.is_in_bounds(Cell::new(0, 20)));
    }

    #[test]
    fn test_center_of_default_grid() {
        assert_eq!(Grid::default().center(), Cell::new(10, 10));
    }

    #[test]
    fn test_try_new_rejects_tiny_grid() {
        assert!(Grid::try_new(1, 1).is_err());
        assert!(Grid::try_new(2, 2).is_ok());
    }

    #[test]
    fn test_cells_row_major() {
        let grid = Grid::try_new(3, 2).unwrap();
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[2], Cell::new(2, 0));
        assert_eq!(cells[3], Cell::new(0, 1));
    }

    #[test]
    fn test_random_free_cell_avoids_excluded() {
        let grid = Grid::default();
        let mut rng = SimpleRng::new(3);
        let excluding: HashSet<Cell> = (0..20).map(|x| Cell::new(x, 10)).collect();
        for _ in 0..500 {
            let cell = grid.random_free_cell(&excluding, &mut rng).unwrap();
            assert!(grid.is_in_bounds(cell));
            assert!(!excluding.contains(&cell));
        }
    }

    #[test]
    fn test_random_free_cell_finds_last_hole() {
        let grid = Grid::try_new(4, 4).unwrap();
        let hole = Cell::new(2, 3);
        let excluding: HashSet<Cell> = grid.cells().filter(|&c| c != hole).collect();
        let mut rng = SimpleRng::new(11);
        assert_eq!(grid.random_free_cell(&excluding, &mut rng), Some(hole));
    }

    #[test]
    fn test_random_free_cell_full_grid() {
        let grid = Grid::try_new(3, 3).unwrap();
        let excluding: HashSet<Cell> = grid.cells().collect();
        let mut rng = SimpleRng::new(5);
        assert_eq!(grid.random_free_cell(&excluding, &mut rng), None);
    }
}
