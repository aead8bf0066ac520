use std::ops::{Add, Mul};

use serde::Serialize;

/// An integer grid position. `y` grows downward, matching the text rendering.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(self, dir: Direction) -> Self {
        self + dir.offset()
    }
}

impl Add for Pos {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}
impl Mul<i32> for Pos {
    type Output = Self;

    fn mul(self, other: i32) -> Self {
        Self::new(self.x * other, self.y * other)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All four directions in the fixed neighbor order used by adjacency queries.
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    pub const fn offset(self) -> Pos {
        match self {
            Self::Up => Pos::new(0, -1),
            Self::Right => Pos::new(1, 0),
            Self::Down => Pos::new(0, 1),
            Self::Left => Pos::new(-1, 0),
        }
    }
}

/// An axis-aligned room footprint. `right()` and `bottom()` are exclusive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Room {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Room {
    pub const fn top(self) -> i32 {
        self.y
    }
    pub const fn bottom(self) -> i32 {
        self.y + self.h
    }
    pub const fn left(self) -> i32 {
        self.x
    }
    pub const fn right(self) -> i32 {
        self.x + self.w
    }

    /// Every cell of the footprint, row by row.
    pub fn cells(self) -> impl Iterator<Item = Pos> {
        (self.top()..self.bottom())
            .flat_map(move |y| (self.left()..self.right()).map(move |x| Pos::new(x, y)))
    }

    /// Whether the two footprints share at least one cell.
    pub const fn intersects(self, other: Self) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Whether the two footprints are disjoint but share an edge, so that some cell of
    /// one is 4-adjacent to some cell of the other. Corner contact does not count.
    pub const fn borders(self, other: Self) -> bool {
        let overlap_x = self.left() < other.right() && other.left() < self.right();
        let overlap_y = self.top() < other.bottom() && other.top() < self.bottom();
        let touch_x = self.right() == other.left() || other.right() == self.left();
        let touch_y = self.bottom() == other.top() || other.bottom() == self.top();
        (overlap_y && touch_x) || (overlap_x && touch_y)
    }
}
