//! The character [`Screen`] models draw into, and frame diffing.

// ---------------------------------------------------------------------------
// Rgb / Style / Cell
// ---------------------------------------------------------------------------

/// A 24-bit colour.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Colours and weight of a screen cell. `None` keeps the terminal default.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
    pub bold: bool,
}

impl Style {
    #[inline]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = Some(fg);
        self
    }

    #[inline]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = Some(bg);
        self
    }

    #[inline]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// One character cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Cell {
    #[inline]
    pub const fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(' ', Style::default())
    }
}

// ---------------------------------------------------------------------------
// Screen
// ---------------------------------------------------------------------------

/// A fixed-size grid of [`Cell`]s addressed by terminal column (`x`) and row (`y`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    cells: Vec<Cell>,
    width: u16,
    height: u16,
}

impl Screen {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            cells: vec![Cell::default(); width as usize * height as usize],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    /// The cell at `(x, y)`; the default cell when out of bounds.
    pub fn at(&self, x: u16, y: u16) -> Cell {
        self.index(x, y).map(|i| self.cells[i]).unwrap_or_default()
    }

    /// Set the cell at `(x, y)`. No-op when out of bounds.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Write `text` starting at `(x, y)`, clipped at the right edge.
    pub fn print(&mut self, x: u16, y: u16, text: &str, style: Style) {
        for (dx, ch) in text.chars().enumerate() {
            let Ok(dx) = u16::try_from(dx) else { break };
            let Some(cx) = x.checked_add(dx) else { break };
            self.set(cx, y, Cell::new(ch, style));
        }
    }

    /// Write `text` horizontally centred on row `y`.
    pub fn print_centered(&mut self, y: u16, text: &str, style: Style) {
        let len = text.chars().count().min(self.width as usize) as u16;
        self.print((self.width - len) / 2, y, text, style);
    }
}

// ---------------------------------------------------------------------------
// Frame
// ---------------------------------------------------------------------------

/// A cell that changed since the previous frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameCell {
    pub x: u16,
    pub y: u16,
    pub cell: Cell,
}

/// The changes needed to turn the previous screen into the current one.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub cells: Vec<FrameCell>,
}

/// Diff two screens of equal size. Cells missing from `prev` count as changed.
pub fn compute_frame(prev: &Screen, curr: &Screen) -> Frame {
    let mut cells = Vec::new();
    for y in 0..curr.height {
        for x in 0..curr.width {
            let cell = curr.at(x, y);
            if prev.index(x, y).is_none() || prev.at(x, y) != cell {
                cells.push(FrameCell { x, y, cell });
            }
        }
    }
    Frame { cells }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb(255, 0, 0);

    #[test]
    fn set_and_read_back() {
        let mut s = Screen::new(4, 2);
        s.set(3, 1, Cell::new('x', Style::default().with_fg(RED)));
        assert_eq!(s.at(3, 1).ch, 'x');
        assert_eq!(s.at(3, 1).style.fg, Some(RED));
        // out of bounds is ignored / default
        s.set(4, 0, Cell::new('y', Style::default()));
        assert_eq!(s.at(4, 0), Cell::default());
    }

    #[test]
    fn print_clips_at_edge() {
        let mut s = Screen::new(5, 1);
        s.print(3, 0, "abc", Style::default());
        assert_eq!(s.at(3, 0).ch, 'a');
        assert_eq!(s.at(4, 0).ch, 'b');
    }

    #[test]
    fn print_centered_text() {
        let mut s = Screen::new(9, 1);
        s.print_centered(0, "abc", Style::default());
        assert_eq!(s.at(3, 0).ch, 'a');
        assert_eq!(s.at(5, 0).ch, 'c');

        let mut narrow = Screen::new(2, 1);
        narrow.print_centered(0, "wide", Style::default());
        assert_eq!(narrow.at(0, 0).ch, 'w');
    }

    #[test]
    fn frame_holds_only_changes() {
        let prev = Screen::new(3, 2);
        let mut curr = prev.clone();
        curr.set(1, 0, Cell::new('A', Style::default().bold()));
        let frame = compute_frame(&prev, &curr);
        assert_eq!(frame.cells.len(), 1);
        assert_eq!((frame.cells[0].x, frame.cells[0].y), (1, 0));
        assert_eq!(frame.cells[0].cell.ch, 'A');
    }

    #[test]
    fn frame_against_smaller_screen_repaints_new_area() {
        let prev = Screen::new(1, 1);
        let curr = Screen::new(2, 2);
        assert_eq!(compute_frame(&prev, &curr).cells.len(), 3);
    }
}
