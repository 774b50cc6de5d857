//! Grid coordinates: [`Position`] and [`Direction`].

use std::fmt;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A cell coordinate. Rows grow downward, columns grow rightward.
///
/// Positions order row-major (row first, then column), which is also the
/// scan order used to locate the start and goal markers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The adjacent position one step in `dir`. May be out of any grid's bounds.
    #[inline]
    pub const fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.delta();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Whether `other` is one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Position) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four orthogonal moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Exploration order for neighbour enumeration. The depth-first search
    /// pushes neighbours in this order, so the last one (right) is explored
    /// first; changing it changes every traversal.
    pub const ORDER: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(row, col)` offset of a single step.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_follows_delta() {
        let p = Position::new(3, 3);
        assert_eq!(p.step(Direction::Up), Position::new(2, 3));
        assert_eq!(p.step(Direction::Down), Position::new(4, 3));
        assert_eq!(p.step(Direction::Left), Position::new(3, 2));
        assert_eq!(p.step(Direction::Right), Position::new(3, 4));
    }

    #[test]
    fn adjacency_is_orthogonal_only() {
        let p = Position::new(1, 1);
        assert!(p.is_adjacent(Position::new(0, 1)));
        assert!(p.is_adjacent(Position::new(1, 2)));
        assert!(!p.is_adjacent(Position::new(2, 2)));
        assert!(!p.is_adjacent(p));
    }

    #[test]
    fn ordering_is_row_major() {
        let mut ps = vec![
            Position::new(1, 0),
            Position::new(0, 5),
            Position::new(0, 1),
        ];
        ps.sort();
        assert_eq!(
            ps,
            vec![Position::new(0, 1), Position::new(0, 5), Position::new(1, 0)]
        );
    }
}
