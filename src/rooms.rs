use rand::Rng;

use crate::config::DungeonConfig;
use crate::geometry::Room;
use crate::grid::{Grid, RegionId, Tile, TileKind};

/// Tries `config.room_attempts` random rooms and stamps every one that fits, each with
/// a fresh region id taken from `next_region`.
///
/// Positions are drawn so that a room of the maximum size would fit. When no such
/// position exists, or a size range is empty because `config` was never validated,
/// the attempts are all skipped without touching `rng`.
pub fn place_rooms(
    grid: &mut Grid,
    config: &DungeonConfig,
    next_region: &mut RegionId,
    rng: &mut impl Rng,
) -> Vec<Room> {
    let x_span = grid.width() - config.max_room_width;
    let y_span = grid.height() - config.max_room_height;
    if config.min_room_width > config.max_room_width
        || config.min_room_height > config.max_room_height
    {
        log::debug!("empty room size range; skipping {} attempts", config.room_attempts);
        return Vec::new();
    }
    if x_span <= 0 || y_span <= 0 {
        log::debug!(
            "no room of {}x{} fits in {}x{}; skipping {} attempts",
            config.max_room_width,
            config.max_room_height,
            grid.width(),
            grid.height(),
            config.room_attempts,
        );
        return Vec::new();
    }

    let mut rooms = Vec::new();
    for attempt in 0..config.room_attempts {
        let x = rng.gen_range(0..x_span);
        let y = rng.gen_range(0..y_span);
        let w = rng.gen_range(config.min_room_width..=config.max_room_width);
        let h = rng.gen_range(config.min_room_height..=config.max_room_height);
        let room = Room { x, y, w, h };

        if overlaps(grid, room, config.separate_rooms) {
            log::trace!("room attempt {attempt} at {room:?} overlaps, skipped");
            continue;
        }

        stamp_room(grid, room, *next_region);
        *next_region += 1;
        rooms.push(room);
    }

    log::debug!(
        "placed {} of {} rooms",
        rooms.len(),
        config.room_attempts
    );
    rooms
}

/// Whether `room` collides with anything already on the grid. With `separate`, a cell
/// that is empty but touches an occupied neighbor also counts as a collision.
pub fn overlaps(grid: &Grid, room: Room, separate: bool) -> bool {
    room.cells().any(|pos| {
        grid.is_occupied(pos) || (separate && grid.occupied_neighbor_count(pos) != 0)
    })
}

pub fn stamp_room(grid: &mut Grid, room: Room, region: RegionId) {
    for pos in room.cells() {
        grid.set(pos, Some(Tile::new(pos, region, TileKind::Room)));
    }
}
