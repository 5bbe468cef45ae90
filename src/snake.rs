use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::{Board, Cell, Direction};

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    pending_direction: Option<Direction>,
    length: usize,
    last: Option<Cell>,
}

impl Snake {
    /// A one-cell snake in the middle of the board, heading right.
    pub fn new(board: &Board) -> Self {
        Snake::from_body(vec![board.center()], Direction::Right)
    }

    /// Builds a snake from explicit cells, head first.
    ///
    /// # Panics
    ///
    /// Panics if `body` is empty.
    pub fn from_body(body: Vec<Cell>, direction: Direction) -> Self {
        assert!(!body.is_empty(), "a snake needs at least one cell");
        let length = body.len();
        Snake { body: body.into(), direction, pending_direction: None, length, last: None }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    /// Desired body size. Only drives growth, collisions always use `body`.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Tail cell dropped on the latest move, if the snake did not grow.
    pub fn last(&self) -> Option<Cell> {
        self.last
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Stages a direction for the next commit, replacing any earlier one.
    pub fn stage(&mut self, direction: Direction) {
        self.pending_direction = Some(direction);
    }

    /// Applies the staged direction, if any. Returns whether one was staged.
    pub fn commit_direction(&mut self) -> bool {
        match self.pending_direction.take() {
            Some(direction) => {
                self.direction = direction;
                true
            }
            None => false,
        }
    }

    /// Pushes a new head one step ahead. The tail is left in place.
    pub fn advance(&mut self, board: &Board) -> Cell {
        let new_head = board.step(self.head(), self.direction);
        self.body.push_front(new_head);
        new_head
    }

    /// Drops the tail cell and remembers it so it can be erased.
    pub fn trim_tail(&mut self) -> Option<Cell> {
        // Never drop the head itself
        self.last = if self.body.len() > 1 { self.body.pop_back() } else { None };
        self.last
    }

    pub fn grow(&mut self) {
        self.length += 1;
        self.last = None;
    }

    /// Whether the head sits on one of the other segments.
    pub fn bites_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|cell| *cell == head)
    }

    pub fn reset<R: Rng + ?Sized>(&mut self, board: &Board, rng: &mut R) {
        let direction = *Direction::ALL.choose(rng).unwrap_or(&Direction::Right);
        *self = Snake::from_body(vec![board.center()], direction);
    }
}
