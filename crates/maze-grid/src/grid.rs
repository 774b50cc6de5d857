//! The [`Maze`] grid: an immutable 2D array of [`CellKind`]s.

use crate::cell::CellKind;
use crate::error::ConfigurationError;
#[cfg(feature = "serde")]
use crate::error::LayoutError;
use crate::pos::{Direction, Position};

/// A rectangular maze of classified cells, stored row-major.
///
/// A `Maze` is never mutated once built; restoring "the original maze" is a
/// plain clone of the value kept aside before solving.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMaze"))]
pub struct Maze {
    cells: Vec<CellKind>,
    rows: usize,
    cols: usize,
}

/// Unchecked serialized form of a [`Maze`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMaze {
    cells: Vec<CellKind>,
    rows: usize,
    cols: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMaze> for Maze {
    type Error = LayoutError;

    fn try_from(raw: RawMaze) -> Result<Self, Self::Error> {
        let RawMaze { cells, rows, cols } = raw;
        if rows == 0 || cols == 0 {
            return Err(LayoutError::Empty);
        }
        if rows.checked_mul(cols) != Some(cells.len()) {
            return Err(LayoutError::CellCount {
                rows,
                cols,
                found: cells.len(),
            });
        }
        Ok(Self::from_cells(cells, rows, cols))
    }
}

impl Maze {
    /// Build from row-major cells. Callers guarantee `cells.len() == rows * cols`.
    pub(crate) fn from_cells(cells: Vec<CellKind>, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { cells, rows, cols }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        p.row >= 0 && p.col >= 0 && (p.row as usize) < self.rows && (p.col as usize) < self.cols
    }

    #[inline]
    fn index(&self, p: Position) -> Option<usize> {
        if self.contains(p) {
            Some(p.row as usize * self.cols + p.col as usize)
        } else {
            None
        }
    }

    /// Classification of the cell at `p`. Positions outside the grid read
    /// as [`CellKind::Wall`].
    pub fn classify(&self, p: Position) -> CellKind {
        self.index(p).map_or(CellKind::Wall, |i| self.cells[i])
    }

    /// Append the passable orthogonal neighbours of `p` to `buf`, in
    /// [`Direction::ORDER`]. The caller clears `buf` beforehand.
    pub fn neighbors_into(&self, p: Position, buf: &mut Vec<Position>) {
        for dir in Direction::ORDER {
            let n = p.step(dir);
            if self.classify(n).is_passable() {
                buf.push(n);
            }
        }
    }

    /// The passable orthogonal neighbours of `p`, in [`Direction::ORDER`].
    pub fn neighbors(&self, p: Position) -> Vec<Position> {
        let mut buf = Vec::with_capacity(4);
        self.neighbors_into(p, &mut buf);
        buf
    }

    /// First position of `kind` in row-major order.
    pub fn find(&self, kind: CellKind) -> Option<Position> {
        self.iter().find(|&(_, k)| k == kind).map(|(p, _)| p)
    }

    /// The start cell (first in row-major order if several exist).
    pub fn find_start(&self) -> Result<Position, ConfigurationError> {
        self.find(CellKind::Start)
            .ok_or(ConfigurationError::MissingStart)
    }

    /// The goal cell (first in row-major order if several exist).
    pub fn find_goal(&self) -> Result<Position, ConfigurationError> {
        self.find(CellKind::Goal).ok_or(ConfigurationError::MissingGoal)
    }

    /// Row-major iterator over `(Position, CellKind)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Position, CellKind)> + '_ {
        let cols = self.cols;
        self.cells.iter().enumerate().map(move |(i, &kind)| {
            (Position::new((i / cols) as i32, (i % cols) as i32), kind)
        })
    }

    /// Number of non-wall cells.
    pub fn passable_count(&self) -> usize {
        self.cells.iter().filter(|k| k.is_passable()).count()
    }

    /// Integer-coded rows, the inverse of [`Maze::from_codes`].
    pub fn to_codes(&self) -> Vec<Vec<i32>> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|k| k.code()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Maze {
        Maze::from_codes(&[
            vec![0, 0, 0, 0],
            vec![0, 2, 1, 0],
            vec![0, 0, 3, 0],
            vec![0, 0, 0, 0],
        ])
        .unwrap()
    }

    #[test]
    fn classify_in_and_out_of_bounds() {
        let m = sample();
        assert_eq!(m.classify(Position::new(1, 1)), CellKind::Start);
        assert_eq!(m.classify(Position::new(2, 2)), CellKind::Goal);
        assert_eq!(m.classify(Position::new(0, 0)), CellKind::Wall);
        assert_eq!(m.classify(Position::new(-1, 2)), CellKind::Wall);
        assert_eq!(m.classify(Position::new(2, 9)), CellKind::Wall);
    }

    #[test]
    fn neighbors_skip_walls_in_direction_order() {
        let m = Maze::from_codes(&[vec![1, 1, 1], vec![1, 2, 1], vec![1, 1, 3]]).unwrap();
        assert_eq!(
            m.neighbors(Position::new(1, 1)),
            vec![
                Position::new(0, 1),
                Position::new(2, 1),
                Position::new(1, 0),
                Position::new(1, 2),
            ]
        );
        assert_eq!(
            sample().neighbors(Position::new(1, 2)),
            vec![Position::new(2, 2), Position::new(1, 1)]
        );
    }

    #[test]
    fn neighbors_at_edge_stay_in_bounds() {
        let m = Maze::from_codes(&[vec![2, 1], vec![1, 3]]).unwrap();
        assert_eq!(
            m.neighbors(Position::new(0, 0)),
            vec![Position::new(1, 0), Position::new(0, 1)]
        );
    }

    #[test]
    fn find_markers() {
        let m = sample();
        assert_eq!(m.find_start(), Ok(Position::new(1, 1)));
        assert_eq!(m.find_goal(), Ok(Position::new(2, 2)));
    }

    #[test]
    fn missing_markers_are_configuration_errors() {
        let m = Maze::from_codes(&[vec![1, 1], vec![1, 3]]).unwrap();
        assert_eq!(m.find_start(), Err(ConfigurationError::MissingStart));
        let m = Maze::from_codes(&[vec![2, 1], vec![1, 1]]).unwrap();
        assert_eq!(m.find_goal(), Err(ConfigurationError::MissingGoal));
    }

    #[test]
    fn duplicate_markers_use_first_in_scan_order() {
        let m = Maze::from_codes(&[vec![1, 1, 2], vec![2, 3, 3]]).unwrap();
        assert_eq!(m.find_start(), Ok(Position::new(0, 2)));
        assert_eq!(m.find_goal(), Ok(Position::new(1, 1)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_checks_dimensions() {
        let json = serde_json::to_string(&sample()).unwrap();
        let back: Maze = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());

        let short = r#"{"cells":["Wall","Open"],"rows":2,"cols":2}"#;
        let err = serde_json::from_str::<Maze>(short).unwrap_err();
        assert!(err.to_string().contains("maze of 2x2 has 2 cells"));

        let empty = r#"{"cells":[],"rows":0,"cols":3}"#;
        assert!(serde_json::from_str::<Maze>(empty).is_err());
    }

    #[test]
    fn codes_round_trip_and_counts() {
        let m = sample();
        assert_eq!(m.to_codes()[1], vec![0, 2, 1, 0]);
        assert_eq!(m.passable_count(), 3);
    }
}
