use serde::{Deserialize, Serialize};

use crate::error::{Axis, ConfigError};

/// Everything the generator needs besides a random source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    pub width: i32,
    pub height: i32,
    pub min_room_width: i32,
    pub min_room_height: i32,
    pub max_room_width: i32,
    pub max_room_height: i32,
    /// Number of placement tries. Failed tries are not retried.
    pub room_attempts: u32,
    /// Keep a one-cell gap between rooms.
    pub separate_rooms: bool,
    /// Maze walks shorter than this are erased.
    pub min_corridor_length: usize,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            width: 41,
            height: 41,
            min_room_width: 3,
            min_room_height: 3,
            max_room_width: 7,
            max_room_height: 7,
            room_attempts: 50,
            separate_rooms: true,
            min_corridor_length: 4,
        }
    }
}

impl DungeonConfig {
    /// Parses a (possibly partial) JSON config; missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// A maximum room size that does not fit in the grid is accepted: every placement
    /// attempt is then skipped and the grid is left entirely to the maze carver.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        if self.width.checked_mul(self.height).is_none() {
            return Err(ConfigError::GridTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        for (axis, min, max) in [
            (Axis::Width, self.min_room_width, self.max_room_width),
            (Axis::Height, self.min_room_height, self.max_room_height),
        ] {
            if min < 1 {
                return Err(ConfigError::RoomTooSmall { axis, value: min });
            }
            if min > max {
                return Err(ConfigError::InvertedRoomRange { axis, min, max });
            }
        }
        Ok(())
    }
}
