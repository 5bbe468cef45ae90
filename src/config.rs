use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::info;

use crate::error::GameError;
use crate::grid::Board;
use crate::render::{Palette, Rgb};

pub const BOARD_WIDTH: u32 = 640;
pub const BOARD_HEIGHT: u32 = 480;
pub const GRID_SIZE: u32 = 20;
/// Ticks per second.
pub const TICK_RATE: u32 = 10;
/// Most columns or rows a board may have.
pub const MAX_CELLS_PER_AXIS: u32 = 1000;

pub const BACKGROUND_COLOR: Rgb = Rgb(0, 0, 0);
pub const BORDER_COLOR: Rgb = Rgb(93, 216, 228);
pub const FOOD_COLOR: Rgb = Rgb(255, 0, 0);
pub const SNAKE_COLOR: Rgb = Rgb(0, 255, 0);

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Start-up settings. Read once, never changed while the game runs.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub board_width: u32,
    pub board_height: u32,
    pub grid_size: u32,
    pub tick_rate: u32,
    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            grid_size: GRID_SIZE,
            tick_rate: TICK_RATE,
            palette: Palette::default(),
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.grid_size == 0 {
            return Err("Grid size must be positive".to_string());
        }
        if self.board_width == 0 || self.board_width % self.grid_size != 0 {
            return Err("Board width must be a positive multiple of the grid size".to_string());
        }
        if self.board_height == 0 || self.board_height % self.grid_size != 0 {
            return Err("Board height must be a positive multiple of the grid size".to_string());
        }
        if self.board_width / self.grid_size > MAX_CELLS_PER_AXIS
            || self.board_height / self.grid_size > MAX_CELLS_PER_AXIS
        {
            return Err(format!("Board may have at most {} columns and rows", MAX_CELLS_PER_AXIS));
        }
        if self.board_width > i32::MAX as u32 / 2 || self.board_height > i32::MAX as u32 / 2 {
            return Err("Board is too large".to_string());
        }
        if (self.board_width / self.grid_size) * (self.board_height / self.grid_size) < 2 {
            return Err("Board must have at least two cells".to_string());
        }
        if !(1..=1000).contains(&self.tick_rate) {
            return Err("Tick rate must be between 1 and 1000".to_string());
        }
        Ok(())
    }
}

impl Config {
    pub fn from_yaml(content: &str) -> Result<Self, GameError> {
        let config: Config = serde_yaml_ng::from_str(content)?;
        config.validate().map_err(GameError::InvalidConfig)?;
        Ok(config)
    }

    /// Loads `path`, falling back to the defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, GameError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                info!(path = %path.display(), "loading config");
                Config::from_yaml(&content)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "config file not found, using defaults");
                Ok(Config::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn board(&self) -> Board {
        Board::new(self.board_width, self.board_height, self.grid_size)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.board(), Board::new(640, 480, 20));
        assert_eq!(config.tick_period(), Duration::from_millis(100));
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config = Config::from_yaml("tick_rate: 20\npalette:\n  food: [255, 255, 0]\n").unwrap();
        assert_eq!(config.tick_rate, 20);
        assert_eq!(config.board_width, BOARD_WIDTH);
        assert_eq!(config.palette.food, Rgb(255, 255, 0));
        assert_eq!(config.palette.snake, SNAKE_COLOR);
    }

    #[test]
    fn rejects_misaligned_board() {
        let err = Config::from_yaml("board_width: 650\n").unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_huge_board() {
        let config = Config { board_width: 800_000, ..Config::default() };
        assert!(config.validate().is_err());

        let config = Config { board_height: 20 * (MAX_CELLS_PER_AXIS + 1), ..Config::default() };
        assert!(config.validate().is_err());

        let config = Config { board_width: 20 * MAX_CELLS_PER_AXIS, ..Config::default() };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_misspelled_keys() {
        assert!(matches!(Config::from_yaml("tickrate: 20\n"), Err(GameError::ConfigParse(_))));
        assert!(matches!(
            Config::from_yaml("palette:\n  snek: [0, 0, 0]\n"),
            Err(GameError::ConfigParse(_))
        ));
    }

    #[test]
    fn rejects_single_cell_board() {
        let config = Config { board_width: 20, board_height: 20, ..Config::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_tick_rate() {
        let config = Config { tick_rate: 0, ..Config::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(Config::from_yaml("board_width: wide"), Err(GameError::ConfigParse(_))));
    }

    #[test]
    fn missing_file_means_defaults() {
        let config = Config::load(Path::new("/definitely/not/here/snake.yaml")).unwrap();
        assert_eq!(config, Config::default());
    }
}
