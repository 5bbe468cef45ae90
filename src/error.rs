use std::io;

use thiserror::Error;

/// Failures of the collaborators around the game. The game rules themselves
/// cannot fail.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("terminal backend failed: {0}")]
    Terminal(String),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_yaml_ng::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("terminal is {have_cols}x{have_rows}, the board needs at least {need_cols}x{need_rows}")]
    TerminalTooSmall { have_cols: u16, have_rows: u16, need_cols: u16, need_rows: u16 },
}

impl GameError {
    /// Wraps an error coming out of the terminal backend.
    pub fn terminal(err: impl std::fmt::Display) -> Self {
        GameError::Terminal(err.to_string())
    }
}
