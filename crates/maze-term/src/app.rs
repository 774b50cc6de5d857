//! The update loop: [`Model`], [`Driver`], [`Effect`], [`App`].

use std::error::Error;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use crate::messages::Msg;
use crate::screen::{Frame, Screen, compute_frame};

/// A side effect requested by [`Model::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Stop the loop.
    End,
}

/// Application state: reacts to messages and draws itself.
pub trait Model {
    /// Process a message, optionally returning an effect.
    fn update(&mut self, msg: Msg) -> Option<Effect>;

    /// Render the current state into `screen`, which starts out blank.
    fn draw(&self, screen: &mut Screen);
}

/// Terminal back end.
pub trait Driver {
    fn init(&mut self) -> Result<(), Box<dyn Error>>;

    /// Wait at most `timeout` for input and send the resulting messages
    /// through `tx`.
    fn poll_msgs(&mut self, timeout: Duration, tx: &Sender<Msg>) -> Result<(), Box<dyn Error>>;

    /// Write the changed cells to the output.
    fn flush(&mut self, frame: &Frame) -> Result<(), Box<dyn Error>>;

    /// Restore the terminal. Called once, also after errors.
    fn close(&mut self);
}

/// Configuration for creating an [`App`].
pub struct AppConfig<M: Model, D: Driver> {
    pub model: M,
    pub driver: D,
    pub width: u16,
    pub height: u16,
    /// Period of the [`Msg::Tick`] clock.
    pub frame_time: Duration,
}

/// Default frame period, about 60 frames per second.
pub const DEFAULT_FRAME_TIME: Duration = Duration::from_millis(16);

/// Runs a [`Model`] against a [`Driver`].
pub struct App<M: Model, D: Driver> {
    model: M,
    driver: D,
    width: u16,
    height: u16,
    frame_time: Duration,
}

impl<M: Model, D: Driver> App<M, D> {
    pub fn new(config: AppConfig<M, D>) -> Self {
        Self {
            model: config.model,
            driver: config.driver,
            width: config.width,
            height: config.height,
            frame_time: config.frame_time,
        }
    }

    /// Run the loop until the model returns [`Effect::End`].
    ///
    /// 1. Initialises the driver and queues [`Msg::Init`].
    /// 2. Repeats: update on queued messages → draw → diff → flush, then
    ///    poll input for one frame period and queue a [`Msg::Tick`].
    /// 3. Closes the driver, whether the loop ended normally or failed.
    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        self.driver.init()?;
        let (tx, rx) = mpsc::channel();
        tx.send(Msg::Init).ok();

        let result = self.run_loop(&tx, &rx);
        self.driver.close();
        result
    }

    /// Borrow the model, e.g. to inspect it after [`run`](Self::run).
    pub fn model(&self) -> &M {
        &self.model
    }

    fn run_loop(&mut self, tx: &Sender<Msg>, rx: &Receiver<Msg>) -> Result<(), Box<dyn Error>> {
        let mut prev = Screen::new(self.width, self.height);
        let mut curr = Screen::new(self.width, self.height);

        loop {
            if self.process_pending(rx, &mut prev, &mut curr)? {
                log::debug!("update loop ended by model");
                return Ok(());
            }
            self.driver.poll_msgs(self.frame_time, tx)?;
            tx.send(Msg::Tick { now: Instant::now() }).ok();
        }
    }

    /// Drain queued messages, update the model, draw, diff and flush.
    /// Returns `true` once the model asked to stop.
    fn process_pending(
        &mut self,
        rx: &Receiver<Msg>,
        prev: &mut Screen,
        curr: &mut Screen,
    ) -> Result<bool, Box<dyn Error>> {
        let mut needs_draw = false;

        while let Ok(msg) = rx.try_recv() {
            if let Msg::Resize { .. } = msg {
                // The driver cleared the terminal; repaint everything.
                *prev = Screen::new(0, 0);
            }
            if self.model.update(msg) == Some(Effect::End) {
                return Ok(true);
            }
            needs_draw = true;
        }

        if needs_draw {
            curr.fill(Default::default());
            self.model.draw(curr);
            let frame = compute_frame(prev, curr);
            if !frame.cells.is_empty() {
                self.driver.flush(&frame)?;
            }
            std::mem::swap(prev, curr);
            if curr.width() != prev.width() || curr.height() != prev.height() {
                *curr = Screen::new(self.width, self.height);
            }
        }

        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Key;
    use crate::screen::{Cell, Style};
    use std::collections::VecDeque;

    /// Replays scripted input, one batch per poll, and records flushed frames.
    struct ScriptDriver {
        batches: VecDeque<Vec<Msg>>,
        frames: Vec<Frame>,
        closed: bool,
    }

    impl Driver for ScriptDriver {
        fn init(&mut self) -> Result<(), Box<dyn Error>> {
            Ok(())
        }

        fn poll_msgs(&mut self, _: Duration, tx: &Sender<Msg>) -> Result<(), Box<dyn Error>> {
            let batch = self.batches.pop_front().unwrap_or_else(|| vec![Msg::Quit]);
            for m in batch {
                tx.send(m).ok();
            }
            Ok(())
        }

        fn flush(&mut self, frame: &Frame) -> Result<(), Box<dyn Error>> {
            self.frames.push(frame.clone());
            Ok(())
        }

        fn close(&mut self) {
            self.closed = true;
        }
    }

    /// Draws the number of key presses in the top-left cell.
    #[derive(Default)]
    struct Counter {
        keys: u32,
        ticks: u32,
        saw_init: bool,
    }

    impl Model for Counter {
        fn update(&mut self, msg: Msg) -> Option<Effect> {
            match msg {
                Msg::Init => self.saw_init = true,
                Msg::KeyDown { .. } => self.keys += 1,
                Msg::Tick { .. } => self.ticks += 1,
                Msg::Quit => return Some(Effect::End),
                Msg::Resize { .. } => {}
            }
            None
        }

        fn draw(&self, screen: &mut Screen) {
            let ch = char::from_digit(self.keys % 10, 10).unwrap_or('?');
            screen.set(0, 0, Cell::new(ch, Style::default()));
        }
    }

    fn app(batches: Vec<Vec<Msg>>) -> App<Counter, ScriptDriver> {
        App::new(AppConfig {
            model: Counter::default(),
            driver: ScriptDriver {
                batches: batches.into(),
                frames: Vec::new(),
                closed: false,
            },
            width: 3,
            height: 1,
            frame_time: Duration::ZERO,
        })
    }

    #[test]
    fn loop_runs_until_end_and_closes() {
        let mut a = app(vec![vec![Msg::key(Key::Space)], vec![], vec![Msg::key(Key::Enter)]]);
        a.run().unwrap();
        assert!(a.driver.closed);
        assert!(a.model().saw_init);
        assert_eq!(a.model().keys, 2);
        assert_eq!(a.model().ticks, 3);
    }

    #[test]
    fn unchanged_screens_are_not_flushed() {
        let mut a = app(vec![vec![], vec![Msg::key(Key::Space)], vec![]]);
        a.run().unwrap();
        // Init draws '0', the key press draws '1'; idle ticks change nothing.
        let chars: Vec<char> = a
            .driver
            .frames
            .iter()
            .map(|f| {
                assert_eq!(f.cells.len(), 1);
                f.cells[0].cell.ch
            })
            .collect();
        assert_eq!(chars, vec!['0', '1']);
    }

    #[test]
    fn resize_repaints_everything() {
        let mut a = app(vec![vec![Msg::Resize { width: 3, height: 1 }]]);
        a.run().unwrap();
        let last = a.driver.frames.last().unwrap();
        assert_eq!(last.cells.len(), 3);
    }
}
