//! Single-screen snake on a wrap-around grid.
//!
//! The game rules live in [`game`], [`snake`], [`food`] and [`input`]; drawing,
//! input polling and pacing are reached through the [`render::Surface`],
//! [`input::InputSource`] and [`clock::Pacer`] traits. [`term`] implements the
//! first two on top of crossterm.

pub mod clock;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod render;
pub mod snake;
pub mod term;

pub use config::Config;
pub use error::GameError;
pub use game::{Game, Phase, TickOutcome};
