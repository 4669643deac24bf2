use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Board width in cells
pub const GRID_WIDTH: usize = 48;
/// Board height in cells
pub const GRID_HEIGHT: usize = 27;
/// Edge length of one tile in logical pixels
pub const TILE_SIZE: u32 = 8;

/// Reasons a configuration cannot host a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid must be at least 2 cells wide, got {0}")]
    TooNarrow(usize),
    #[error("grid must be at least 3 cells tall to leave room between the walls, got {0}")]
    TooShort(usize),
    #[error("tile size must be non-zero")]
    ZeroTileSize,
    #[error("wait base must be at least 1 tick")]
    ZeroWaitBase,
    #[error("speed-up interval must be at least 1 point")]
    ZeroSpeedUpInterval,
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Edge length of a drawn tile, in logical pixels
    pub tile_size: u32,
    /// Ticks between moves at score zero
    pub wait_base: u32,
    /// Points needed to shave one tick off the wait
    pub speed_up_every: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            tile_size: TILE_SIZE,
            wait_base: 10,
            speed_up_every: 10,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom board, keeping default timing.
    /// Only used to build small boards for tests; players always get the default board.
    pub fn with_grid(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width < 2 {
            return Err(ConfigError::TooNarrow(self.grid_width));
        }
        if self.grid_height < 3 {
            return Err(ConfigError::TooShort(self.grid_height));
        }
        if self.tile_size == 0 {
            return Err(ConfigError::ZeroTileSize);
        }
        if self.wait_base == 0 {
            return Err(ConfigError::ZeroWaitBase);
        }
        if self.speed_up_every == 0 {
            return Err(ConfigError::ZeroSpeedUpInterval);
        }
        Ok(())
    }

    /// Number of cells on the board
    pub fn cell_count(&self) -> usize {
        self.grid_width * self.grid_height
    }

    /// Logical screen size in pixels (width, height)
    pub fn logical_size(&self) -> (u32, u32) {
        (
            self.grid_width as u32 * self.tile_size,
            self.grid_height as u32 * self.tile_size,
        )
    }

    /// Ticks to wait between moves at the given score: speeds up every
    /// `speed_up_every` points and never drops below one tick.
    pub fn wait(&self, score: u32) -> u32 {
        self.wait_base
            .saturating_sub(score / self.speed_up_every.max(1))
            .max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 48);
        assert_eq!(config.grid_height, 27);
        assert_eq!(config.logical_size(), (384, 216));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_grid() {
        let config = GameConfig::with_grid(5, 5);
        assert_eq!(config.cell_count(), 25);
        assert_eq!(config.wait_base, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_configs() {
        assert_eq!(
            GameConfig::with_grid(1, 5).validate(),
            Err(ConfigError::TooNarrow(1))
        );
        assert_eq!(
            GameConfig::with_grid(5, 2).validate(),
            Err(ConfigError::TooShort(2))
        );

        let config = GameConfig {
            wait_base: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroWaitBase));
    }

    #[test]
    fn test_wait_schedule() {
        let config = GameConfig::default();
        assert_eq!(config.wait(0), 10);
        assert_eq!(config.wait(9), 10);
        assert_eq!(config.wait(10), 9);
        assert_eq!(config.wait(85), 2);
        assert_eq!(config.wait(90), 1);
        assert_eq!(config.wait(1_000), 1);
    }

    #[test]
    fn test_wait_is_non_increasing() {
        let config = GameConfig::default();
        let mut previous = config.wait(0);
        for score in 1..500 {
            let current = config.wait(score);
            assert!(current >= 1);
            assert!(current <= previous);
            previous = current;
        }
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::with_grid(12, 9);
        let json = serde_json::to_string(&config).unwrap();
        let restored: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }
}
