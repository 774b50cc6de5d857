//! The [`RunController`]: start / reset / timed stepping around a [`Stepper`].

use std::time::Duration;

use maze_grid::{ConfigurationError, Maze, Position};

use crate::path::reconstruct;
use crate::stepper::{StepResult, Stepper};

// ---------------------------------------------------------------------------
// SpeedConfig
// ---------------------------------------------------------------------------

/// Bounds and increment of the delay between two search steps.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SpeedConfig {
    pub initial: Duration,
    pub min: Duration,
    pub max: Duration,
    /// Amount added or removed by one speed-up / slow-down command.
    pub step: Duration,
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            initial: Duration::from_millis(100),
            min: Duration::from_millis(50),
            max: Duration::from_millis(500),
            step: Duration::from_millis(25),
        }
    }
}

impl SpeedConfig {
    /// Check the bounds and return the initial interval clamped into them.
    pub fn validate(&self) -> Result<Duration, ConfigurationError> {
        if self.min > self.max || self.step.is_zero() {
            return Err(ConfigurationError::InvalidSpeed {
                min_ms: self.min.as_millis() as u64,
                max_ms: self.max.as_millis() as u64,
                step_ms: self.step.as_millis() as u64,
            });
        }
        Ok(self.initial.clamp(self.min, self.max))
    }
}

// ---------------------------------------------------------------------------
// RunState
// ---------------------------------------------------------------------------

/// Where a solve run stands.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Solved,
    /// The search ended without reaching the goal.
    Exhausted,
}

// ---------------------------------------------------------------------------
// RunController
// ---------------------------------------------------------------------------

/// Drives one maze through solve runs at a caller-supplied cadence.
///
/// The controller never reads a clock. The driver tells it how long ago the
/// last step happened and the controller decides whether another step is
/// due.
#[derive(Debug, Clone)]
pub struct RunController {
    original: Maze,
    maze: Maze,
    stepper: Stepper,
    solution: Vec<Position>,
    state: RunState,
    speed: SpeedConfig,
    interval: Duration,
}

impl RunController {
    /// Create an idle controller with the default speed settings.
    pub fn new(maze: Maze) -> Self {
        let speed = SpeedConfig::default();
        Self {
            original: maze.clone(),
            maze,
            stepper: Stepper::new(),
            solution: Vec::new(),
            state: RunState::Idle,
            interval: speed.initial,
            speed,
        }
    }

    /// Replace the speed settings (builder).
    pub fn with_speed(mut self, speed: SpeedConfig) -> Result<Self, ConfigurationError> {
        self.interval = speed.validate()?;
        self.speed = speed;
        Ok(self)
    }

    /// Begin solving from the maze's start cell.
    ///
    /// Does nothing while a run is in progress or after the maze has been
    /// solved; an exhausted run is restarted from scratch. Fails, leaving the
    /// controller idle, when the maze lacks a start or goal cell.
    pub fn start_solving(&mut self) -> Result<(), ConfigurationError> {
        if matches!(self.state, RunState::Running | RunState::Solved) {
            return Ok(());
        }

        self.clear_run();
        let start = self.maze.find_start().inspect_err(|e| log::warn!("cannot solve: {e}"))?;
        self.maze.find_goal().inspect_err(|e| log::warn!("cannot solve: {e}"))?;

        self.stepper.initialize(start);
        self.state = RunState::Running;
        log::info!("solving {}x{} maze from {start}", self.maze.rows(), self.maze.cols());
        Ok(())
    }

    /// Restore the original maze and discard all search progress.
    pub fn reset(&mut self) {
        self.maze = self.original.clone();
        self.clear_run();
        log::info!("run reset");
    }

    fn clear_run(&mut self) {
        self.stepper.reset();
        self.solution.clear();
        self.state = RunState::Idle;
    }

    /// Advance the run if a step is due.
    ///
    /// Performs exactly one search step when running and `since_last_step`
    /// has reached the current interval, returning its result so the driver
    /// can restart its step clock. Returns `None` when no step was taken.
    pub fn tick(&mut self, since_last_step: Duration) -> Option<StepResult> {
        if self.state != RunState::Running || since_last_step < self.interval {
            return None;
        }
        Some(self.advance())
    }

    /// Step until the run is no longer running, ignoring the interval.
    pub fn finish(&mut self) -> RunState {
        while self.state == RunState::Running {
            self.advance();
        }
        self.state
    }

    fn advance(&mut self) -> StepResult {
        let result = self.stepper.step(&self.maze);
        match result {
            StepResult::Continue => {}
            StepResult::Found(goal) => {
                self.solution = reconstruct(goal, self.stepper.parents());
                self.state = RunState::Solved;
                log::info!(
                    "solved: path of {} cells, {} visited",
                    self.solution.len(),
                    self.stepper.visited_count()
                );
            }
            StepResult::Exhausted => {
                self.state = RunState::Exhausted;
                log::info!(
                    "no path to the goal, {} cells visited",
                    self.stepper.visited_count()
                );
            }
        }
        result
    }

    /// Change the step interval by `delta_ms`, clamped to the configured range.
    pub fn adjust_speed(&mut self, delta_ms: i64) {
        let delta = Duration::from_millis(delta_ms.unsigned_abs());
        let interval = if delta_ms < 0 {
            self.interval.saturating_sub(delta)
        } else {
            self.interval.saturating_add(delta)
        };
        self.set_interval(interval);
    }

    /// Shorten the interval by one speed step.
    pub fn speed_up(&mut self) {
        self.set_interval(self.interval.saturating_sub(self.speed.step));
    }

    /// Lengthen the interval by one speed step.
    pub fn slow_down(&mut self) {
        self.set_interval(self.interval.saturating_add(self.speed.step));
    }

    fn set_interval(&mut self, interval: Duration) {
        self.interval = interval.clamp(self.speed.min, self.speed.max);
        log::debug!("step interval now {}ms", self.interval.as_millis());
    }

    // --- read-only queries for renderers ---

    #[inline]
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[inline]
    pub fn stepper(&self) -> &Stepper {
        &self.stepper
    }

    #[inline]
    pub fn current(&self) -> Option<Position> {
        self.stepper.current()
    }

    #[inline]
    pub fn is_visited(&self, p: Position) -> bool {
        self.stepper.is_visited(p)
    }

    #[inline]
    pub fn visited_count(&self) -> usize {
        self.stepper.visited_count()
    }

    /// The start → goal path; empty unless solved.
    #[inline]
    pub fn solution(&self) -> &[Position] {
        &self.solution
    }

    pub fn is_on_solution(&self, p: Position) -> bool {
        self.solution.contains(&p)
    }
}
