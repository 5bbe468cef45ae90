use crate::error::GameError;
use crate::grid::Direction::{self, *};

/// Keys the game distinguishes, already decoupled from the terminal backend.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Other,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    Quit,
}

/// Supplies the events that arrived since the previous tick.
pub trait InputSource {
    fn poll_events(&mut self) -> Result<Vec<InputEvent>, GameError>;
}

/// Maps a key press onto the direction to stage.
///
/// Only the eight sideways turns are listed. Anything else, including a press
/// towards the opposite of `current`, keeps `current`, so a 180 degree turn
/// can never come out of here.
pub fn resolve(key: Key, current: Direction) -> Direction {
    match (key, current) {
        (Key::Up, Left) | (Key::Up, Right) => Up,
        (Key::Down, Left) | (Key::Down, Right) => Down,
        (Key::Left, Up) | (Key::Left, Down) => Left,
        (Key::Right, Up) | (Key::Right, Down) => Right,
        _ => current,
    }
}
