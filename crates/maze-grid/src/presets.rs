//! Hand-authored mazes.

use crate::grid::Maze;

const SMALL: [[i32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 2, 1, 1, 0, 1, 1, 0],
    [0, 0, 0, 1, 0, 1, 0, 0],
    [0, 1, 1, 1, 1, 1, 1, 0],
    [0, 1, 0, 0, 0, 0, 1, 0],
    [0, 1, 1, 1, 1, 1, 1, 0],
    [0, 0, 0, 0, 0, 0, 3, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const MEDIUM: [[i32; 12]; 12] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 2, 1, 1, 1, 0, 1, 1, 1, 1, 1, 0],
    [0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0],
    [0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 0],
    [0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0],
    [0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 0],
    [0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0],
    [0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
];

/// The 8×8 preset.
pub fn small() -> Maze {
    from_table(&SMALL)
}

/// The 12×12 preset.
pub fn medium() -> Maze {
    from_table(&MEDIUM)
}

fn from_table<const N: usize>(rows: &[[i32; N]]) -> Maze {
    let cells = rows
        .iter()
        .flatten()
        .map(|&code| crate::CellKind::from_code(code).unwrap_or_default())
        .collect();
    Maze::from_cells(cells, rows.len(), N)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn presets_have_markers() {
        let s = small();
        assert_eq!((s.rows(), s.cols()), (8, 8));
        assert_eq!(s.find_start(), Ok(Position::new(1, 1)));
        assert_eq!(s.find_goal(), Ok(Position::new(6, 6)));

        let m = medium();
        assert_eq!((m.rows(), m.cols()), (12, 12));
        assert_eq!(m.find_start(), Ok(Position::new(1, 1)));
        assert_eq!(m.find_goal(), Ok(Position::new(10, 10)));
    }

    #[test]
    fn presets_agree_with_code_parser() {
        assert_eq!(Maze::from_codes(&SMALL), Ok(small()));
        assert_eq!(Maze::from_codes(&MEDIUM), Ok(medium()));
    }
}
