#![allow(clippy::cast_sign_loss)]

use std::fmt::Display;

use serde::Serialize;

use crate::geometry::{Direction, Pos};

/// Connected-component label handed out to each room and each kept maze walk.
pub type RegionId = u32;

/// What produced a tile. Informational only: generation never branches on it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TileKind {
    Room,
    Corridor,
    Door,
}

impl TileKind {
    pub const fn to_char(self) -> char {
        match self {
            Self::Room => '#',
            Self::Corridor => '.',
            Self::Door => '+',
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Tile {
    #[serde(flatten)]
    pub pos: Pos,
    pub region: RegionId,
    pub kind: TileKind,
}

impl Tile {
    pub const fn new(pos: Pos, region: RegionId, kind: TileKind) -> Self {
        Self { pos, region, kind }
    }
}

/// Fixed-size grid of optional tiles. Every read and write is bounds-checked here, so
/// out-of-range positions read as empty and writes to them are dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Option<Tile>>,
}

impl Grid {
    /// Creates an empty grid. Non-positive dimensions, or an area that overflows
    /// `i32`, yield a grid with no cells.
    pub fn new(width: i32, height: i32) -> Self {
        let (width, height) = match width.max(0).checked_mul(height.max(0)) {
            Some(_) => (width.max(0), height.max(0)),
            None => (0, 0),
        };
        Self {
            width,
            height,
            cells: vec![None; (width * height) as usize],
        }
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    pub const fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| (pos.y * self.width + pos.x) as usize)
    }

    pub fn get(&self, pos: Pos) -> Option<Tile> {
        self.index(pos).and_then(|idx| self.cells[idx])
    }

    pub fn set(&mut self, pos: Pos, tile: Option<Tile>) {
        if let Some(idx) = self.index(pos) {
            self.cells[idx] = tile;
        }
    }

    pub fn is_occupied(&self, pos: Pos) -> bool {
        self.get(pos).is_some()
    }

    /// In-bounds neighbors holding a tile, in up/right/down/left order.
    pub fn adjacent_occupied(&self, pos: Pos) -> Vec<Pos> {
        Direction::ALL
            .iter()
            .map(|&dir| pos.step(dir))
            .filter(|&n| self.is_occupied(n))
            .collect()
    }

    /// Same as `adjacent_occupied(pos).len()` without allocating.
    pub fn occupied_neighbor_count(&self, pos: Pos) -> usize {
        Direction::ALL
            .iter()
            .filter(|&&dir| self.is_occupied(pos.step(dir)))
            .count()
    }

    /// Occupied tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().filter_map(|cell| *cell)
    }

    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for _ in 0..self.width + 2 {
            write!(f, "-")?;
        }
        writeln!(f)?;
        for y in 0..self.height {
            write!(f, "|")?;
            for x in 0..self.width {
                let c = self.get(Pos::new(x, y)).map_or(' ', |t| t.kind.to_char());
                write!(f, "{c}")?;
            }
            writeln!(f, "|")?;
        }
        for _ in 0..self.width + 2 {
            write!(f, "-")?;
        }
        Ok(())
    }
}
