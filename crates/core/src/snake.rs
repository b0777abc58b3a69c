//! Snake body storage.
//!
//! Head-first deque plus an occupancy set. Only the resolver mutates a live
//! snake; everything else reads it.

use std::collections::{HashSet, VecDeque};

use crate::types::Cell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
    occupied: HashSet<Cell>,
}

impl Snake {
    /// A one-segment snake.
    pub fn new(head: Cell) -> Self {
        let mut body = VecDeque::with_capacity(16);
        body.push_back(head);
        let mut occupied = HashSet::with_capacity(16);
        occupied.insert(head);
        Self { body, occupied }
    }

    /// Build a snake from head-first segments.
    ///
    /// Returns `None` for an empty body or overlapping segments. Segments do
    /// not have to be adjacent; callers placing a snake by hand are trusted.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Option<Self> {
        let mut body = VecDeque::new();
        let mut occupied = HashSet::new();
        for cell in cells {
            if !occupied.insert(cell) {
                return None;
            }
            body.push_back(cell);
        }
        if body.is_empty() {
            return None;
        }
        Some(Self { body, occupied })
    }

    pub fn head(&self) -> Cell {
        // Never empty: constructors reject empty bodies and the resolver
        // always pushes a head before popping a tail.
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.occupied.contains(&cell)
    }

    /// Head-first iteration.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn occupied(&self) -> &HashSet<Cell> {
        &self.occupied
    }

    pub(crate) fn push_head(&mut self, cell: Cell) {
        self.body.push_front(cell);
        self.occupied.insert(cell);
    }

    pub(crate) fn pop_tail(&mut self) -> Option<Cell> {
        if self.body.len() <= 1 {
            return None;
        }
        let tail = self.body.pop_back()?;
        self.occupied.remove(&tail);
        Some(tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snake() {
        let snake = Snake::new(Cell::new(10, 10));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(10, 10));
        assert_eq!(snake.tail(), Cell::new(10, 10));
        assert!(snake.contains(Cell::new(10, 10)));
    }

    #[test]
    fn test_from_cells_rejects_overlap_and_empty() {
        assert!(Snake::from_cells([Cell::new(1, 1), Cell::new(1, 1)]).is_none());
        assert!(Snake::from_cells(std::iter::empty()).is_none());
    }

    #[test]
    fn test_push_and_pop_keep_set_in_sync() {
        let mut snake = Snake::from_cells([Cell::new(2, 0), Cell::new(1, 0)]).unwrap();
        snake.push_head(Cell::new(3, 0));
        assert_eq!(snake.pop_tail(), Some(Cell::new(1, 0)));
        assert!(!snake.contains(Cell::new(1, 0)));
        assert_eq!(
            snake.iter().collect::<Vec<_>>(),
            vec![Cell::new(3, 0), Cell::new(2, 0)]
        );
        assert_eq!(snake.occupied().len(), snake.len());
    }

    #[test]
    fn test_pop_never_empties_the_body() {
        let mut snake = Snake::new(Cell::new(0, 0));
        assert_eq!(snake.pop_tail(), None);
        assert_eq!(snake.len(), 1);
    }
}
