//! The solver [`Model`]: input commands in, maze picture out.

use std::time::{Duration, Instant};

use maze_grid::{CellKind, Maze, Position};
use maze_search::{RunController, RunState};
use maze_term::{Cell, Effect, Key, Model, Msg, Screen, Style};

use crate::colors;

/// Rows above the maze (title and a spacer).
const MAZE_TOP: u16 = 2;
/// Terminal columns per maze cell, so cells look roughly square.
const CELL_WIDTH: u16 = 2;

const HELP: &str = "SPACE solve  R reset  UP/DOWN speed  ESC quit";

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// The logical inputs the solver understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Reset,
    SpeedUp,
    SlowDown,
    Quit,
}

impl Command {
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Space => Some(Self::Start),
            Key::Char('r' | 'R') => Some(Self::Reset),
            Key::ArrowUp => Some(Self::SpeedUp),
            Key::ArrowDown => Some(Self::SlowDown),
            Key::Escape | Key::Char('q' | 'Q') => Some(Self::Quit),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// CellLook
// ---------------------------------------------------------------------------

/// How a maze cell should be shown right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellLook {
    Wall,
    Open,
    Start,
    Goal,
    Visited,
    Current,
    Solution,
}

impl CellLook {
    /// Markers win over search state; the search head wins over the path,
    /// and the path over plain visited cells.
    pub fn of(ctrl: &RunController, p: Position) -> Self {
        match ctrl.maze().classify(p) {
            CellKind::Wall => Self::Wall,
            CellKind::Start => Self::Start,
            CellKind::Goal => Self::Goal,
            CellKind::Open if ctrl.current() == Some(p) => Self::Current,
            CellKind::Open if ctrl.is_on_solution(p) => Self::Solution,
            CellKind::Open if ctrl.is_visited(p) => Self::Visited,
            CellKind::Open => Self::Open,
        }
    }

    pub fn color(self) -> maze_term::Rgb {
        match self {
            Self::Wall => colors::WALL,
            Self::Open => colors::OPEN,
            Self::Start => colors::START,
            Self::Goal => colors::GOAL,
            Self::Visited => colors::VISITED,
            Self::Current => colors::CURRENT,
            Self::Solution => colors::SOLUTION,
        }
    }

    /// Character used when printing without colour.
    pub fn glyph(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Open => '.',
            Self::Start => 'S',
            Self::Goal => 'G',
            Self::Visited => '+',
            Self::Current => '@',
            Self::Solution => '*',
        }
    }
}

/// Terminal size needed to show `maze` with title, status and help lines,
/// or `None` when it does not fit a `u16` screen.
pub fn screen_size(maze: &Maze) -> Option<(u16, u16)> {
    let maze_width = u16::try_from(maze.cols()).ok()?.checked_mul(CELL_WIDTH)?;
    let width = maze_width.max(HELP.len() as u16);
    let height = u16::try_from(maze.rows())
        .ok()?
        .checked_add(MAZE_TOP + 3)?;
    Some((width, height))
}

/// Screen coordinates of the left half of maze cell `p`.
fn cell_origin(p: Position) -> Option<(u16, u16)> {
    let x = u16::try_from(p.col).ok()?.checked_mul(CELL_WIDTH)?;
    let y = u16::try_from(p.row).ok()?.checked_add(MAZE_TOP)?;
    Some((x, y))
}

// ---------------------------------------------------------------------------
// SolverModel
// ---------------------------------------------------------------------------

/// Couples a [`RunController`] to the terminal loop.
pub struct SolverModel {
    ctrl: RunController,
    /// When the last search step ran; `None` makes the next step due at once.
    last_step: Option<Instant>,
    /// One-line message shown under the maze, e.g. a configuration error.
    notice: Option<String>,
}

impl SolverModel {
    pub fn new(ctrl: RunController) -> Self {
        Self {
            ctrl,
            last_step: None,
            notice: None,
        }
    }

    pub fn controller(&self) -> &RunController {
        &self.ctrl
    }

    fn apply(&mut self, cmd: Command) -> Option<Effect> {
        match cmd {
            Command::Start => {
                let was_running = self.ctrl.state() == RunState::Running;
                match self.ctrl.start_solving() {
                    Ok(()) => {
                        self.notice = None;
                        if !was_running && self.ctrl.state() == RunState::Running {
                            self.last_step = None;
                        }
                    }
                    Err(e) => self.notice = Some(format!("Cannot solve: {e}")),
                }
            }
            Command::Reset => {
                self.ctrl.reset();
                self.notice = None;
            }
            Command::SpeedUp => self.ctrl.speed_up(),
            Command::SlowDown => self.ctrl.slow_down(),
            Command::Quit => return Some(Effect::End),
        }
        None
    }

    fn on_tick(&mut self, now: Instant) {
        if self.ctrl.state() != RunState::Running {
            return;
        }
        let elapsed = self
            .last_step
            .map_or(Duration::MAX, |t| now.saturating_duration_since(t));
        if self.ctrl.tick(elapsed).is_some() {
            self.last_step = Some(now);
        }
    }

    fn title(&self) -> (&'static str, maze_term::Rgb) {
        match self.ctrl.state() {
            RunState::Idle => ("Press SPACE to solve", colors::TEXT),
            RunState::Running => ("Solving...", colors::CURRENT),
            RunState::Solved => ("Maze solved!", colors::SOLUTION),
            RunState::Exhausted => ("No solution", colors::GOAL),
        }
    }

    fn status_line(&self) -> String {
        let mut line = format!(
            "Step {}ms  Visited {}",
            self.ctrl.interval().as_millis(),
            self.ctrl.visited_count()
        );
        if self.ctrl.state() == RunState::Solved {
            line.push_str(&format!("  Path {}", self.ctrl.solution().len()));
        }
        line
    }
}

impl Model for SolverModel {
    fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::Init | Msg::Resize { .. } => None,
            Msg::Quit => Some(Effect::End),
            Msg::KeyDown { key, .. } => Command::from_key(key).and_then(|cmd| self.apply(cmd)),
            Msg::Tick { now } => {
                self.on_tick(now);
                None
            }
        }
    }

    fn draw(&self, screen: &mut Screen) {
        let bg = Style::default().with_bg(colors::BACKGROUND);
        screen.fill(Cell::new(' ', bg));

        let (title, fg) = self.title();
        screen.print_centered(0, title, bg.with_fg(fg).bold());

        let maze = self.ctrl.maze();
        for (p, _) in maze.iter() {
            let Some((x, y)) = cell_origin(p) else { continue };
            let style = Style::default().with_bg(CellLook::of(&self.ctrl, p).color());
            for dx in 0..CELL_WIDTH {
                screen.set(x.saturating_add(dx), y, Cell::new(' ', style));
            }
        }

        let below = u16::try_from(maze.rows())
            .unwrap_or(u16::MAX)
            .saturating_add(MAZE_TOP);
        screen.print(0, below, &self.status_line(), bg.with_fg(colors::TEXT));
        if let Some(notice) = &self.notice {
            screen.print(0, below.saturating_add(1), notice, bg.with_fg(colors::CURRENT).bold());
        }
        screen.print(0, below.saturating_add(2), HELP, bg.with_fg(colors::TEXT_DIM));
    }
}
