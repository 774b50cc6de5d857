//! Crossterm terminal driver.

use std::error::Error;
use std::io::{self, Write};
use std::sync::mpsc::Sender;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    queue,
    style::{self, Attribute, Color as CtColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use crate::app::Driver;
use crate::messages::{Key, Msg};
use crate::screen::{Frame, Rgb};

fn to_ct_color(c: Option<Rgb>) -> CtColor {
    match c {
        Some(Rgb(r, g, b)) => CtColor::Rgb { r, g, b },
        None => CtColor::Reset,
    }
}

fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Up => Some(Key::ArrowUp),
        KeyCode::Down => Some(Key::ArrowDown),
        KeyCode::Left => Some(Key::ArrowLeft),
        KeyCode::Right => Some(Key::ArrowRight),
        _ => None,
    }
}

/// Translate a crossterm event; `None` for events the loop ignores.
fn to_msg(ev: Event) -> Option<Msg> {
    match ev {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => {
            let ctrl = modifiers.contains(KeyModifiers::CONTROL);
            if ctrl && code == KeyCode::Char('c') {
                return Some(Msg::Quit);
            }
            to_key(code).map(|key| Msg::KeyDown { key, ctrl })
        }
        Event::Resize(width, height) => Some(Msg::Resize { width, height }),
        _ => None,
    }
}

/// Renders into the alternate screen of the controlling terminal.
#[derive(Debug, Default)]
pub struct CrosstermDriver {
    active: bool,
}

impl CrosstermDriver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Driver for CrosstermDriver {
    fn init(&mut self) -> Result<(), Box<dyn Error>> {
        terminal::enable_raw_mode()?;
        self.active = true;
        let mut stdout = io::stdout();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        stdout.flush()?;
        Ok(())
    }

    fn poll_msgs(&mut self, timeout: Duration, tx: &Sender<Msg>) -> Result<(), Box<dyn Error>> {
        if !event::poll(timeout)? {
            return Ok(());
        }

        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            if let Event::Resize(..) = ev {
                let mut stdout = io::stdout();
                queue!(stdout, terminal::Clear(ClearType::All))?;
            }
            if let Some(msg) = to_msg(ev) {
                tx.send(msg).ok();
            }
        }
        Ok(())
    }

    fn flush(&mut self, frame: &Frame) -> Result<(), Box<dyn Error>> {
        let mut stdout = io::stdout().lock();

        for fc in &frame.cells {
            let style = fc.cell.style;
            queue!(
                stdout,
                cursor::MoveTo(fc.x, fc.y),
                SetForegroundColor(to_ct_color(style.fg)),
                SetBackgroundColor(to_ct_color(style.bg))
            )?;
            if style.bold {
                queue!(stdout, style::SetAttribute(Attribute::Bold))?;
            }
            write!(stdout, "{}", fc.cell.ch)?;
            if style.bold {
                queue!(stdout, style::SetAttribute(Attribute::Reset))?;
            }
        }
        queue!(stdout, style::ResetColor)?;

        stdout.flush()?;
        Ok(())
    }

    fn close(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let mut stdout = io::stdout();
        let _ = queue!(stdout, style::ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = stdout.flush();
        let _ = terminal::disable_raw_mode();
    }
}
