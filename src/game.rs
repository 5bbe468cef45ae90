use rand::Rng;
use tracing::{debug, info, trace};

use crate::clock::Pacer;
use crate::config::Config;
use crate::error::GameError;
use crate::food::Food;
use crate::grid::Board;
use crate::input::{resolve, InputEvent, InputSource};
use crate::render::{render_frame, Palette, Surface};
use crate::snake::Snake;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Running,
    /// The snake bit itself on the latest tick and was put back at the center.
    Reset,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    Reset,
    Quit,
}

pub struct Game<R: Rng> {
    board: Board,
    palette: Palette,
    snake: Snake,
    food: Food,
    rng: R,
    phase: Phase,
    needs_full_redraw: bool,
}

impl<R: Rng> Game<R> {
    pub fn new(config: &Config, mut rng: R) -> Self {
        let board = config.board();
        let snake = Snake::new(&board);
        let food = Food::spawn(&board, snake.body(), &mut rng);
        info!(
            columns = board.columns(),
            rows = board.rows(),
            "new session"
        );
        Game::with_state(board, config.palette, snake, food, rng)
    }

    /// A game starting from a hand-made position.
    pub fn with_state(board: Board, palette: Palette, snake: Snake, food: Food, rng: R) -> Self {
        Game { board, palette, snake, food, rng, phase: Phase::Running, needs_full_redraw: true }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Advances the game by one tick, consuming every event that arrived
    /// since the previous one. A quit event stops right away, before the snake
    /// moves.
    pub fn tick<I>(&mut self, events: I) -> TickOutcome
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            match event {
                InputEvent::Quit => return TickOutcome::Quit,
                InputEvent::Key(key) => {
                    // Resolved against the committed direction; the last press wins
                    let candidate = resolve(key, self.snake.direction());
                    self.snake.stage(candidate);
                }
            }
        }

        if self.snake.commit_direction() {
            trace!(direction = ?self.snake.direction(), "direction committed");
        }

        let head = self.snake.advance(&self.board);

        if head == self.food.position() {
            self.snake.grow();
            self.food.relocate(&self.board, self.snake.body(), &mut self.rng);
            debug!(length = self.snake.length(), "food eaten");
        } else {
            self.snake.trim_tail();
        }

        if self.snake.bites_itself() {
            info!(length = self.snake.body().len(), "snake bit itself, resetting");
            self.snake.reset(&self.board, &mut self.rng);
            self.phase = Phase::Reset;
            self.needs_full_redraw = true;
            return TickOutcome::Reset;
        }

        trace!(x = head.x, y = head.y, "tick");
        self.phase = Phase::Running;
        TickOutcome::Running
    }

    /// Draws the current state. The first frame and the frame after a reset
    /// repaint the whole surface, every other frame only touches what changed.
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<(), GameError> {
        render_frame(surface, &self.palette, &self.snake, &self.food, self.needs_full_redraw)?;
        self.needs_full_redraw = false;
        Ok(())
    }

    /// Runs until a quit event arrives.
    pub fn run<I, S, P>(&mut self, input: &mut I, surface: &mut S, pacer: &mut P) -> Result<(), GameError>
    where
        I: InputSource + ?Sized,
        S: Surface + ?Sized,
        P: Pacer + ?Sized,
    {
        self.render(surface)?;
        loop {
            pacer.wait();
            let events = input.poll_events()?;
            if self.tick(events) == TickOutcome::Quit {
                info!(length = self.snake.body().len(), "quit requested");
                return Ok(());
            }
            self.render(surface)?;
        }
    }
}
