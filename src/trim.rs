use std::collections::VecDeque;

use crate::geometry::Pos;
use crate::grid::Grid;

/// Erodes dead ends, starting only from `endpoints`. Returns the number of tiles removed.
///
/// Positions are processed first-in first-out. An occupied position with exactly one
/// occupied neighbor is cleared and that neighbor is queued, since it may have just
/// become a dead end itself. Empty positions, isolated tiles and junctions are left
/// alone. Dead ends that are not reachable this way are not discovered.
pub fn trim_dead_ends(grid: &mut Grid, endpoints: Vec<Pos>) -> usize {
    let mut queue = VecDeque::from(endpoints);
    let mut removed = 0;

    while let Some(pos) = queue.pop_front() {
        if !grid.is_occupied(pos) {
            continue;
        }
        if let [only] = grid.adjacent_occupied(pos)[..] {
            grid.set(pos, None);
            removed += 1;
            queue.push_back(only);
        }
    }

    log::debug!("trimmed {removed} dead-end tiles");
    removed
}
