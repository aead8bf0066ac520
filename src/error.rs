/// Rejected generation settings, reported before any generation work starts.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: i32, height: i32 },

    #[error("grid of {width}x{height} cells is too large")]
    GridTooLarge { width: i32, height: i32 },

    #[error("minimum room {axis} must be at least 1, got {value}")]
    RoomTooSmall { axis: Axis, value: i32 },

    #[error("minimum room {axis} {min} exceeds maximum {max}")]
    InvertedRoomRange { axis: Axis, min: i32, max: i32 },

    #[error("could not parse dungeon config")]
    Parse(#[from] serde_json::Error),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Width => "width",
            Self::Height => "height",
        })
    }
}
