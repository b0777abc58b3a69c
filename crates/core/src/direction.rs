//! Direction buffer: the committed heading plus one pending request.

use crate::types::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionBuffer {
    committed: Direction,
    pending: Direction,
}

impl DirectionBuffer {
    pub fn new(initial: Direction) -> Self {
        Self {
            committed: initial,
            pending: initial,
        }
    }

    /// Direction applied on the last tick.
    pub fn committed(&self) -> Direction {
        self.committed
    }

    /// Direction the next tick will apply.
    pub fn pending(&self) -> Direction {
        self.pending
    }

    /// Ask for a new heading.
    ///
    /// A request for the exact opposite of the committed direction is dropped
    /// without error and returns `false`. Checking against the committed
    /// direction (not the pending one) means two quick turns inside one tick
    /// can never fold the snake back onto its neck.
    pub fn request(&mut self, candidate: Direction) -> bool {
        if candidate.is_opposite(self.committed) {
            return false;
        }
        self.pending = candidate;
        true
    }

    /// Move the pending request into the committed slot at the start of a tick.
    pub fn commit(&mut self) -> Direction {
        self.committed = self.pending;
        self.committed
    }
}

impl Default for DirectionBuffer {
    fn default() -> Self {
        Self::new(Direction::Right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversal_is_ignored() {
        let mut buf = DirectionBuffer::new(Direction::Right);
        assert!(!buf.request(Direction::Left));
        assert_eq!(buf.pending(), Direction::Right);
    }

    #[test]
    fn test_request_is_idempotent() {
        let mut once = DirectionBuffer::new(Direction::Right);
        once.request(Direction::Up);

        let mut twice = DirectionBuffer::new(Direction::Right);
        twice.request(Direction::Up);
        twice.request(Direction::Up);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_last_write_wins_between_ticks() {
        let mut buf = DirectionBuffer::new(Direction::Right);
        assert!(buf.request(Direction::Up));
        assert!(buf.request(Direction::Down));
        assert_eq!(buf.commit(), Direction::Down);
    }

    #[test]
    fn test_quick_double_turn_cannot_reverse() {
        // Heading right: up then left within one tick must not produce left,
        // because left is the reverse of what was actually committed.
        let mut buf = DirectionBuffer::new(Direction::Right);
        assert!(buf.request(Direction::Up));
        assert!(!buf.request(Direction::Left));
        assert_eq!(buf.commit(), Direction::Up);
        assert!(buf.request(Direction::Left));
    }
}
