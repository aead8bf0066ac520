use rand::seq::SliceRandom;
use rand::Rng;

use crate::geometry::{Direction, Pos};
use crate::grid::{Grid, RegionId, Tile, TileKind};

/// What [`carve_mazes`] left behind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CarveOutcome {
    /// Both ends of every kept walk, in the order the walks were made.
    pub endpoints: Vec<Pos>,
    pub kept_walks: usize,
    pub discarded_walks: usize,
    pub carved_tiles: usize,
}

/// Fills empty space with corridor walks.
///
/// Cells are visited in row-major order. A walk starts from any empty cell with no
/// occupied neighbors, so it never begins against a room or an earlier corridor.
/// Walks of at least `min_length` cells keep their region id and record both ends as
/// endpoints; shorter ones are erased so later start cells can reuse the space.
pub fn carve_mazes(
    grid: &mut Grid,
    min_length: usize,
    next_region: &mut RegionId,
    rng: &mut impl Rng,
) -> CarveOutcome {
    let mut outcome = CarveOutcome::default();

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let start = Pos::new(x, y);
            if grid.is_occupied(start) || grid.occupied_neighbor_count(start) != 0 {
                continue;
            }

            let path = walk(grid, start, *next_region, rng);
            if path.len() >= min_length {
                if let (Some(&first), Some(&last)) = (path.first(), path.last()) {
                    outcome.endpoints.push(first);
                    outcome.endpoints.push(last);
                }
                outcome.kept_walks += 1;
                outcome.carved_tiles += path.len();
                *next_region += 1;
            } else {
                for pos in path {
                    grid.set(pos, None);
                }
                outcome.discarded_walks += 1;
            }
        }
    }

    log::debug!(
        "carved {} corridor walks ({} tiles), discarded {} shorter than {}",
        outcome.kept_walks,
        outcome.carved_tiles,
        outcome.discarded_walks,
        min_length,
    );
    outcome
}

/// Carves a single randomized walk from `start` and returns its cells ordered from the
/// terminal cell back to `start`.
///
/// At each cell the four directions are tried in a random order, and the walk steps
/// into the first neighbor that is empty and whose only occupied neighbor is the
/// current cell. The walk ends where no direction qualifies. Since a step is never
/// revisited once taken, the walk is a simple path.
pub fn walk(grid: &mut Grid, start: Pos, region: RegionId, rng: &mut impl Rng) -> Vec<Pos> {
    let mut path = Vec::new();
    let mut pos = start;
    loop {
        grid.set(pos, Some(Tile::new(pos, region, TileKind::Corridor)));
        path.push(pos);

        let mut dirs = Direction::ALL;
        dirs.shuffle(rng);
        let next = dirs.iter().map(|&dir| pos.step(dir)).find(|&n| {
            grid.in_bounds(n) && !grid.is_occupied(n) && grid.occupied_neighbor_count(n) == 1
        });
        match next {
            Some(n) => pos = n,
            None => break,
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use super::*;
    use crate::geometry::Room;
    use crate::rooms::stamp_room;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn walk_enters_each_cell_through_one_neighbor() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(11);
        for _ in 0..20 {
            let mut grid = Grid::new(15, 12);
            stamp_room(&mut grid, Room { x: 8, y: 3, w: 4, h: 4 }, 0);
            let mut occupied: HashSet<Pos> = grid.tiles().map(|t| t.pos).collect();

            let path = walk(&mut grid, Pos::new(1, 1), 1, &mut rng);
            assert_eq!(path.last(), Some(&Pos::new(1, 1)));

            // Replay from the start cell: each cell had at most one occupied neighbor
            // when it was carved.
            for &pos in path.iter().rev() {
                let before = Direction::ALL
                    .iter()
                    .filter(|&&d| occupied.contains(&pos.step(d)))
                    .count();
                assert!(before <= 1, "{pos:?} had {before} occupied neighbors");
                assert!(occupied.insert(pos));
            }
            // Consecutive cells are 4-adjacent.
            for pair in path.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                assert_eq!((a.x - b.x).abs() + (a.y - b.y).abs(), 1);
            }
        }
    }

    #[test]
    fn walk_in_a_single_cell_pocket_stays_put() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
        let mut grid = Grid::new(1, 1);
        assert_eq!(walk(&mut grid, Pos::new(0, 0), 3, &mut rng), vec![Pos::new(0, 0)]);
        assert_eq!(grid.get(Pos::new(0, 0)).map(|t| t.region), Some(3));
    }

    #[test]
    fn empty_grid_is_carved_into_kept_walks_only() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(99);
        let min_length = 5;
        let mut grid = Grid::new(21, 17);
        let mut next_region = 0;
        let outcome = carve_mazes(&mut grid, min_length, &mut next_region, &mut rng);

        assert!(outcome.kept_walks > 0);
        assert_eq!(next_region as usize, outcome.kept_walks);
        assert_eq!(outcome.endpoints.len(), 2 * outcome.kept_walks);
        assert_eq!(grid.tile_count(), outcome.carved_tiles);

        let mut per_region: HashMap<RegionId, usize> = HashMap::new();
        for tile in grid.tiles() {
            assert_eq!(tile.kind, TileKind::Corridor);
            *per_region.entry(tile.region).or_default() += 1;
        }
        assert_eq!(per_region.len(), outcome.kept_walks);
        assert!(per_region.values().all(|&n| n >= min_length));
        for pos in &outcome.endpoints {
            assert!(grid.is_occupied(*pos));
        }
    }

    #[test]
    fn walk_starts_follow_rows_top_to_bottom() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(17);
        let mut grid = Grid::new(13, 9);
        let mut next_region = 0;
        let outcome = carve_mazes(&mut grid, 1, &mut next_region, &mut rng);

        // Walks are returned terminal-first, so every second endpoint is a start cell.
        let starts: Vec<Pos> = outcome.endpoints.iter().skip(1).step_by(2).copied().collect();
        assert_eq!(starts.first(), Some(&Pos::new(0, 0)));
        assert!(starts.windows(2).all(|w| (w[0].y, w[0].x) < (w[1].y, w[1].x)));
    }

    #[test]
    fn impossible_minimum_erases_everything() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(4);
        let mut grid = Grid::new(10, 10);
        let mut next_region = 1;
        let outcome = carve_mazes(&mut grid, 1000, &mut next_region, &mut rng);
        assert_eq!(grid.tile_count(), 0);
        assert_eq!(outcome.kept_walks, 0);
        assert!(outcome.discarded_walks > 0);
        assert!(outcome.endpoints.is_empty());
        assert_eq!(next_region, 1);
    }

    #[test]
    fn walks_never_start_against_a_room() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(8);
        let room = Room { x: 3, y: 3, w: 4, h: 4 };
        let mut grid = Grid::new(12, 12);
        stamp_room(&mut grid, room, 0);
        let mut next_region = 1;
        carve_mazes(&mut grid, 1, &mut next_region, &mut rng);

        // A corridor never touches the room: it would have needed two occupied
        // neighbors (its predecessor and the room) to be carved there, or to have
        // started next to it.
        for pos in room.cells() {
            for n in grid.adjacent_occupied(pos) {
                assert_eq!(grid.get(n).map(|t| t.kind), Some(TileKind::Room));
            }
        }
    }
}
