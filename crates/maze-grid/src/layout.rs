//! Building mazes from integer-coded rows and from text layouts.
//!
//! Text layouts use one line per row: `#` wall, `.` or space open, `S` start
//! and `G` goal. The digits `0`-`3` are accepted as well, so a file holding
//! the integer encoding without separators parses too. Blank lines before and
//! after the maze are ignored; every remaining line must have the same width.

use std::fmt;
use std::str::FromStr;

use crate::cell::CellKind;
use crate::error::LayoutError;
use crate::grid::Maze;

impl Maze {
    /// Build a maze from integer-coded rows (0=wall, 1=open, 2=start, 3=goal).
    pub fn from_codes<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, LayoutError> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if width == 0 {
            return Err(LayoutError::Empty);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, codes) in rows.iter().enumerate() {
            let codes = codes.as_ref();
            if codes.len() != width {
                return Err(LayoutError::RaggedRow {
                    row,
                    expected: width,
                    found: codes.len(),
                });
            }
            for (col, &code) in codes.iter().enumerate() {
                let kind =
                    CellKind::from_code(code).ok_or(LayoutError::InvalidCode { row, col, code })?;
                cells.push(kind);
            }
        }
        Ok(Self::from_cells(cells, rows.len(), width))
    }
}

impl FromStr for Maze {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Spaces are open cells, so only line breaks may be trimmed.
        let s = s.trim_matches(|c| c == '\n' || c == '\r');
        let mut cells = Vec::new();
        let mut width = 0;
        let mut rows = 0;

        for (row, line) in s.lines().enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let mut found = 0;
            for (col, ch) in line.chars().enumerate() {
                let kind = CellKind::from_char(ch).ok_or(LayoutError::InvalidChar { row, col, ch })?;
                cells.push(kind);
                found += 1;
            }
            if row == 0 {
                width = found;
            } else if found != width {
                return Err(LayoutError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            rows += 1;
        }

        if width == 0 {
            return Err(LayoutError::Empty);
        }
        Ok(Self::from_cells(cells, rows, width))
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (p, kind) in self.iter() {
            if p.col == 0 && p.row > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", kind.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pos::Position;

    const ROOM: &str = "\
#####
#S..#
#.#G#
#####";

    #[test]
    fn parse_text_layout() {
        let m: Maze = ROOM.parse().unwrap();
        assert_eq!((m.rows(), m.cols()), (4, 5));
        assert_eq!(m.classify(Position::new(1, 1)), CellKind::Start);
        assert_eq!(m.classify(Position::new(2, 3)), CellKind::Goal);
        assert_eq!(m.classify(Position::new(2, 2)), CellKind::Wall);
    }

    #[test]
    fn parse_accepts_digits_and_spaces() {
        let m: Maze = "0000\n02 0\n0130\n0000\n".parse().unwrap();
        assert_eq!(m.classify(Position::new(1, 2)), CellKind::Open);
        assert_eq!(m.classify(Position::new(2, 2)), CellKind::Goal);
    }

    #[test]
    fn parse_ignores_surrounding_blank_lines_and_crlf() {
        let m: Maze = "\r\n\n#S\r\n#G\r\n\n".parse().unwrap();
        assert_eq!((m.rows(), m.cols()), (2, 2));
    }

    #[test]
    fn display_matches_layout() {
        let m: Maze = ROOM.parse().unwrap();
        assert_eq!(m.to_string(), ROOM);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert_eq!(
            "##\n###".parse::<Maze>(),
            Err(LayoutError::RaggedRow {
                row: 1,
                expected: 2,
                found: 3
            })
        );
        assert!(matches!(
            Maze::from_codes(&[vec![0, 0], vec![0]]),
            Err(LayoutError::RaggedRow { row: 1, .. })
        ));
    }

    #[test]
    fn bad_cells_are_rejected() {
        assert_eq!(
            "#S\n#x".parse::<Maze>(),
            Err(LayoutError::InvalidChar {
                row: 1,
                col: 1,
                ch: 'x'
            })
        );
        assert_eq!(
            Maze::from_codes(&[vec![0, 7]]),
            Err(LayoutError::InvalidCode {
                row: 0,
                col: 1,
                code: 7
            })
        );
    }

    #[test]
    fn empty_layouts_are_rejected() {
        assert_eq!("\n\n".parse::<Maze>(), Err(LayoutError::Empty));
        let no_rows: [Vec<i32>; 0] = [];
        assert_eq!(Maze::from_codes(&no_rows), Err(LayoutError::Empty));
    }
}
