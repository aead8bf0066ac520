#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

//! Room-and-maze dungeon layouts on a fixed 2D grid.
//!
//! Generation runs in five sequential phases over one [`Grid`]: rooms are placed by
//! rejection sampling, the remaining space is filled with randomized corridor walks,
//! candidate doorways between regions are collected, a random subset of them is opened
//! (at most one per pair of regions), and dead ends are eroded back from the recorded
//! corridor endpoints. The resulting connectivity is not guaranteed to be total.

pub mod config;
pub mod connect;
pub mod dungeon;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod maze;
pub mod rooms;
pub mod trim;

pub use config::DungeonConfig;
pub use dungeon::{generate, generate_seeded, Dungeon, GenerationStats};
pub use error::ConfigError;
pub use geometry::{Direction, Pos, Room};
pub use grid::{Grid, RegionId, Tile, TileKind};
