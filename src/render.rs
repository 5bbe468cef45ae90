//! Projection of the game state onto a draw surface.
//!
//! The surface itself (a terminal, a pixel buffer, a recorder in tests) lives
//! outside the core; this module only decides what goes where.

use serde::Deserialize;

use crate::config::{BACKGROUND_COLOR, BORDER_COLOR, FOOD_COLOR, SNAKE_COLOR};
use crate::error::GameError;
use crate::food::Food;
use crate::grid::Cell;
use crate::snake::Snake;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    pub background: Rgb,
    pub border: Rgb,
    pub food: Rgb,
    pub snake: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: BACKGROUND_COLOR,
            border: BORDER_COLOR,
            food: FOOD_COLOR,
            snake: SNAKE_COLOR,
        }
    }
}

/// Something that can paint grid cells.
pub trait Surface {
    /// Paints the whole board in `color`.
    fn clear(&mut self, color: Rgb) -> Result<(), GameError>;

    /// A grid-sized square filled with `fill` and outlined with `border`.
    fn draw_square(&mut self, cell: Cell, fill: Rgb, border: Rgb) -> Result<(), GameError>;

    fn erase(&mut self, cell: Cell, color: Rgb) -> Result<(), GameError>;

    /// Makes everything drawn since the last call visible.
    fn present(&mut self) -> Result<(), GameError>;
}

pub enum Drawable<'a> {
    Food(&'a Food),
    Snake(&'a Snake),
}

impl Drawable<'_> {
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, palette: &Palette) -> Result<(), GameError> {
        match self {
            Drawable::Food(food) => surface.draw_square(food.position(), palette.food, palette.border),
            Drawable::Snake(snake) => {
                for cell in snake.body().iter().skip(1) {
                    surface.draw_square(*cell, palette.snake, palette.border)?;
                }
                surface.draw_square(snake.head(), palette.snake, palette.border)?;

                // Wipe the cell the tail just left, unless the head moved into it
                if let Some(last) = snake.last().filter(|last| *last != snake.head()) {
                    surface.erase(last, palette.background)?;
                }
                Ok(())
            }
        }
    }
}

/// Draws one frame. `full_redraw` wipes the surface first, which is needed for
/// the very first frame and after the snake was reset.
pub fn render_frame<S: Surface + ?Sized>(
    surface: &mut S,
    palette: &Palette,
    snake: &Snake,
    food: &Food,
    full_redraw: bool,
) -> Result<(), GameError> {
    if full_redraw {
        surface.clear(palette.background)?;
    }
    Drawable::Snake(snake).draw(surface, palette)?;
    Drawable::Food(food).draw(surface, palette)?;
    surface.present()
}
