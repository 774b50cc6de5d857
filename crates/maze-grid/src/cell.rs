//! The [`CellKind`] classification of a maze cell.

/// What occupies a maze cell.
///
/// The integer codes (`0..=3`) are the maze-source encoding: hand-authored
/// layouts and generated mazes are exchanged as rows of these codes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Wall,
    Open,
    Start,
    Goal,
}

impl CellKind {
    /// Decode an integer cell code.
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Wall),
            1 => Some(Self::Open),
            2 => Some(Self::Start),
            3 => Some(Self::Goal),
            _ => None,
        }
    }

    /// The integer code of this kind.
    pub const fn code(self) -> i32 {
        match self {
            Self::Wall => 0,
            Self::Open => 1,
            Self::Start => 2,
            Self::Goal => 3,
        }
    }

    /// Whether a search may enter this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }

    /// Decode a text-layout character.
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' | '0' => Some(Self::Wall),
            '.' | ' ' | '1' => Some(Self::Open),
            'S' | '2' => Some(Self::Start),
            'G' | '3' => Some(Self::Goal),
            _ => None,
        }
    }

    /// The canonical text-layout character.
    pub const fn to_char(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Open => '.',
            Self::Start => 'S',
            Self::Goal => 'G',
        }
    }
}

impl TryFrom<i32> for CellKind {
    type Error = i32;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_source_encoding() {
        assert_eq!(CellKind::from_code(0), Some(CellKind::Wall));
        assert_eq!(CellKind::from_code(3), Some(CellKind::Goal));
        assert_eq!(CellKind::from_code(4), None);
        assert_eq!(CellKind::Start.code(), 2);
    }

    #[test]
    fn layout_chars() {
        assert_eq!(CellKind::from_char('#'), Some(CellKind::Wall));
        assert_eq!(CellKind::from_char(' '), Some(CellKind::Open));
        assert_eq!(CellKind::from_char('2'), Some(CellKind::Start));
        assert_eq!(CellKind::from_char('x'), None);
        assert_eq!(CellKind::Goal.to_char(), 'G');
    }

    #[test]
    fn only_walls_block() {
        assert!(!CellKind::Wall.is_passable());
        assert!(CellKind::Open.is_passable());
        assert!(CellKind::Start.is_passable());
        assert!(CellKind::Goal.is_passable());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_variant_names() {
        let json = serde_json::to_string(&CellKind::Goal).unwrap();
        assert_eq!(json, "\"Goal\"");
    }
}
