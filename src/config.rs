use std::path::Path;

use crate::error::ConfigError;
use crate::game::{Cell, Player};

/// Glyphs used when drawing the board.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub empty: char,
    pub player_x: char,
    pub player_o: char,
}

impl DisplayConfig {
    pub fn cell_glyph(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => self.empty,
            Cell::X => self.player_x,
            Cell::O => self.player_o,
        }
    }

    pub fn player_glyph(&self, player: Player) -> char {
        self.cell_glyph(player.to_cell())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            empty: '.',
            player_x: 'X',
            player_o: 'O',
        }
    }
}

/// Move prompt behavior.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Matched case-insensitively against the trimmed input line.
    pub quit_keyword: String,
    /// Wait for Enter after rejecting a move.
    pub pause_after_invalid: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            quit_keyword: "QUIT".to_string(),
            pause_after_invalid: true,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub first_player: Player,
    pub show_intro: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            first_player: Player::X,
            show_intro: true,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub display: DisplayConfig,
    pub input: InputConfig,
    pub game: GameConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let glyphs = [
            ("display.empty", self.display.empty),
            ("display.player_x", self.display.player_x),
            ("display.player_o", self.display.player_o),
        ];
        for (name, glyph) in glyphs {
            if glyph.is_whitespace() || glyph.is_control() {
                return Err(ConfigError::Validation(format!(
                    "{} must be a visible character",
                    name
                )));
            }
        }
        let d = &self.display;
        if d.empty == d.player_x || d.empty == d.player_o || d.player_x == d.player_o {
            return Err(ConfigError::Validation(
                "display glyphs must be distinct".into(),
            ));
        }

        let keyword = self.input.quit_keyword.trim();
        if keyword.is_empty() {
            return Err(ConfigError::Validation(
                "input.quit_keyword must not be empty".into(),
            ));
        }
        if keyword.parse::<i64>().is_ok() {
            return Err(ConfigError::Validation(
                "input.quit_keyword must not be a number".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
