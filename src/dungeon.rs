use std::fmt::Display;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::Serialize;

use crate::config::DungeonConfig;
use crate::connect::{connect_regions, find_connectors};
use crate::error::ConfigError;
use crate::geometry::Room;
use crate::grid::{Grid, RegionId, Tile};
use crate::maze::carve_mazes;
use crate::rooms::place_rooms;
use crate::trim::trim_dead_ends;

/// Counters collected while generating, mostly for logging and the CLI summary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GenerationStats {
    pub rooms: usize,
    pub corridor_regions: usize,
    /// Tiles carved by kept walks, before doors and trimming.
    pub corridor_tiles: usize,
    pub discarded_walks: usize,
    /// Total region ids handed out: rooms first, then kept corridor walks.
    pub regions: RegionId,
    pub connectors: usize,
    pub doors: usize,
    pub trimmed: usize,
    pub tiles: usize,
}

#[derive(Clone, Debug)]
pub struct Dungeon {
    grid: Grid,
    rooms: Vec<Room>,
    stats: GenerationStats,
}

impl Dungeon {
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub const fn stats(&self) -> &GenerationStats {
        &self.stats
    }

    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.grid.tiles()
    }
}

impl Display for Dungeon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.grid, f)
    }
}

/// Runs the whole pipeline: rooms, mazes, connectors, doors, dead-end trimming.
///
/// `rng` is consumed in that phase order, so a given seed always produces the same
/// layout for the same config. Only config validation can fail.
pub fn generate(config: &DungeonConfig, rng: &mut impl Rng) -> Result<Dungeon, ConfigError> {
    config.validate()?;

    let mut grid = Grid::new(config.width, config.height);
    let mut next_region: RegionId = 0;

    log::debug!("adding rooms");
    let rooms = place_rooms(&mut grid, config, &mut next_region, rng);

    log::debug!("adding mazes");
    let carved = carve_mazes(&mut grid, config.min_corridor_length, &mut next_region, rng);

    log::debug!("connecting regions");
    let connectors = find_connectors(&grid);
    let connector_count = connectors.len();
    let opened = connect_regions(&mut grid, connectors, rng);

    log::debug!("removing dead ends");
    let trimmed = trim_dead_ends(&mut grid, carved.endpoints);

    let stats = GenerationStats {
        rooms: rooms.len(),
        corridor_regions: carved.kept_walks,
        corridor_tiles: carved.carved_tiles,
        discarded_walks: carved.discarded_walks,
        regions: next_region,
        connectors: connector_count,
        doors: opened.len(),
        trimmed,
        tiles: grid.tile_count(),
    };
    log::info!(
        "generated {}x{} dungeon: {} tiles in {} regions, {} doors",
        config.width,
        config.height,
        stats.tiles,
        stats.regions,
        stats.doors,
    );

    Ok(Dungeon { grid, rooms, stats })
}

/// [`generate`] with a fresh `Xoshiro256PlusPlus` seeded from `seed`.
pub fn generate_seeded(config: &DungeonConfig, seed: u64) -> Result<Dungeon, ConfigError> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    generate(config, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::TileKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn invalid_config_fails_before_generating() {
        let config = DungeonConfig {
            width: -3,
            ..DungeonConfig::default()
        };
        assert!(matches!(
            generate_seeded(&config, 0),
            Err(ConfigError::EmptyGrid { .. })
        ));
    }

    #[test]
    fn huge_grid_is_rejected_instead_of_overflowing() {
        let config = DungeonConfig {
            width: 50_000,
            height: 50_000,
            ..DungeonConfig::default()
        };
        assert!(matches!(
            generate_seeded(&config, 0),
            Err(ConfigError::GridTooLarge { .. })
        ));
    }

    #[test]
    fn stats_agree_with_grid() {
        let dungeon = generate_seeded(&DungeonConfig::default(), 1234).unwrap();
        let stats = dungeon.stats();
        assert_eq!(stats.tiles, dungeon.grid().tile_count());
        assert_eq!(stats.rooms, dungeon.rooms().len());
        assert_eq!(stats.regions as usize, stats.rooms + stats.corridor_regions);
        assert!(stats.doors <= stats.connectors);
        let doors = dungeon.tiles().filter(|t| t.kind == TileKind::Door).count();
        assert!(doors <= stats.doors);
    }

    #[test]
    fn rooms_survive_untouched() {
        let dungeon = generate_seeded(&DungeonConfig::default(), 77).unwrap();
        for (region, room) in dungeon.rooms().iter().enumerate() {
            for pos in room.cells() {
                let tile = dungeon.grid().get(pos).unwrap();
                assert_eq!(tile.kind, TileKind::Room);
                assert_eq!(tile.region as usize, region);
            }
        }
    }
}
