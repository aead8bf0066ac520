use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::geometry::{Direction, Pos};
use crate::grid::{Grid, RegionId, Tile, TileKind};

/// A candidate doorway: an empty cell with tiles of two different regions on opposite
/// sides of it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Connector {
    pub pos: Pos,
    /// Region of the tile the scan started from.
    pub from: RegionId,
    /// Region of the tile two steps away, across `pos`.
    pub to: RegionId,
}

impl Connector {
    pub fn link(self) -> RegionLink {
        RegionLink::new(self.from, self.to)
    }
}

/// Unordered region pair, smaller id first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionLink(RegionId, RegionId);

impl RegionLink {
    pub fn new(a: RegionId, b: RegionId) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }
}

/// Lists every candidate doorway, scanning tiles in row-major order and each tile's
/// directions in up/right/down/left order.
///
/// A doorway seen from both sides is listed twice, with `from` and `to` swapped.
pub fn find_connectors(grid: &Grid) -> Vec<Connector> {
    let mut connectors = Vec::new();
    for tile in grid.tiles() {
        for dir in Direction::ALL {
            let gap = tile.pos.step(dir);
            if !grid.in_bounds(gap) || grid.is_occupied(gap) {
                continue;
            }
            match grid.get(tile.pos + dir.offset() * 2) {
                Some(other) if other.region != tile.region => connectors.push(Connector {
                    pos: gap,
                    from: tile.region,
                    to: other.region,
                }),
                _ => {}
            }
        }
    }
    log::debug!("found {} connector candidates", connectors.len());
    connectors
}

/// Opens doorways in a random order, at most one per pair of regions, and returns the
/// connectors that were opened in the order they were opened.
///
/// There is no transitive merging: regions A and C each linked to B are still treated
/// as unlinked to each other, and a region with no surviving candidate stays isolated.
pub fn connect_regions(
    grid: &mut Grid,
    mut connectors: Vec<Connector>,
    rng: &mut impl Rng,
) -> Vec<Connector> {
    connectors.shuffle(rng);

    let mut linked: HashSet<RegionLink> = HashSet::new();
    let mut opened = Vec::new();
    for connector in connectors {
        if !linked.insert(connector.link()) {
            continue;
        }
        grid.set(
            connector.pos,
            Some(Tile::new(connector.pos, connector.to, TileKind::Door)),
        );
        opened.push(connector);
    }

    log::debug!("opened {} doors between {} region pairs", opened.len(), linked.len());
    opened
}
