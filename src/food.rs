use rand::Rng;
use tracing::debug;

use crate::grid::{Board, Cell};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Food {
    position: Cell,
}

impl Food {
    /// Food at a fixed cell, with no check against the snake.
    pub fn at(position: Cell) -> Self {
        Food { position }
    }

    /// Places fresh food on a cell not covered by `occupied`.
    pub fn spawn<'a, R, I>(board: &Board, occupied: I, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = &'a Cell> + Clone,
    {
        let mut food = Food { position: board.random_cell(rng) };
        food.relocate(board, occupied, rng);
        food
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Rejection-samples uniformly random cells until one falls outside
    /// `occupied`.
    ///
    /// The loop is unbounded: once the snake covers every cell of the board
    /// no free cell exists and this never returns.
    pub fn relocate<'a, R, I>(&mut self, board: &Board, occupied: I, rng: &mut R)
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = &'a Cell> + Clone,
    {
        let mut attempts = 0u32;
        loop {
            let candidate = board.random_cell(rng);
            attempts += 1;
            if !occupied.clone().into_iter().any(|cell| *cell == candidate) {
                self.position = candidate;
                break;
            }
        }
        debug!(x = self.position.x, y = self.position.y, attempts, "food relocated");
    }
}
