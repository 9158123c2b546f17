//! Interactive terminal front-end
//!
//! Raw-mode crossterm screen: the pending expression above the current
//! value, with the keypad legend underneath. Every keypress goes through
//! the same binding the scripted runs use.

use std::io::{self, Write};

use console::style;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue, style::Print};
use tally_calculator::binding::{DisplaySink, Keypad, KeypadAction, UiBinding};
use tally_calculator::core::{DisplayText, NumberFormat};
use tracing::{debug, trace};

use crate::error::CliResult;

/// Width of one keypad column, brackets included
const CELL_WIDTH: usize = 6;

/// What a terminal key does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Press a keypad button
    Press(KeypadAction),
    /// Leave the calculator
    Quit,
    /// Not bound
    Ignored,
}

/// Maps a terminal key event; `q` and Ctrl-C quit
#[must_use]
pub fn map_key(event: KeyEvent) -> KeyInput {
    if event.kind == KeyEventKind::Release {
        return KeyInput::Ignored;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c' | 'q') => KeyInput::Quit,
            _ => KeyInput::Ignored,
        };
    }
    let name = match event.code {
        KeyCode::Char('q') => return KeyInput::Quit,
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        _ => return KeyInput::Ignored,
    };
    KeypadAction::from_key(&name).map_or(KeyInput::Ignored, KeyInput::Press)
}

/// Lays out the whole screen, one string per row
#[must_use]
pub fn render_screen(display: &DisplayText, keypad: &Keypad, use_color: bool) -> Vec<String> {
    let (rows, cols) = keypad.dimensions();
    let width = cols * CELL_WIDTH;

    let mut lines = Vec::with_capacity(rows + 7);
    lines.push(style("tally").bold().force_styling(use_color).to_string());
    lines.push(String::new());
    let secondary = format!("{:>width$}", display.secondary);
    lines.push(style(secondary).dim().force_styling(use_color).to_string());
    let main = format!("{:>width$}", display.main);
    lines.push(style(main).bold().force_styling(use_color).to_string());
    lines.push("-".repeat(width));

    for row in 0..rows {
        let line: String = keypad
            .row(row)
            .map(|button| {
                let inner = CELL_WIDTH * button.span - 2;
                format!("[{:^inner$}]", button.action.label())
            })
            .collect();
        lines.push(line);
    }

    lines.push(String::new());
    lines.push("Enter =  Backspace DEL  Esc AC  q quit".to_string());
    lines
}

/// Sink drawing the full screen on every update.
///
/// A write failure is kept and reported through [`TerminalSink::take_error`];
/// later frames are skipped until it is taken.
#[derive(Debug)]
pub struct TerminalSink<W: Write> {
    out: W,
    keypad: Keypad,
    use_color: bool,
    error: Option<io::Error>,
}

impl<W: Write> TerminalSink<W> {
    /// Creates a sink over `out`
    pub fn new(out: W, use_color: bool) -> Self {
        Self {
            out,
            keypad: Keypad::new(),
            use_color,
            error: None,
        }
    }

    /// Returns the first write failure since the last call
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Consumes the sink, returning the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, display: &DisplayText) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))?;
        for (row, line) in render_screen(display, &self.keypad, self.use_color)
            .iter()
            .enumerate()
        {
            queue!(self.out, MoveTo(0, row as u16), Print(line))?;
        }
        self.out.flush()
    }
}

impl<W: Write> DisplaySink for TerminalSink<W> {
    fn write_display(&mut self, display: &DisplayText) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.draw(display) {
            self.error = Some(e);
        }
    }
}

/// Raw mode and the alternate screen, undone on drop
struct ScreenGuard;

impl ScreenGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        Ok(guard)
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn check<W: Write>(binding: &mut UiBinding<TerminalSink<W>>) -> CliResult<()> {
    match binding.sink_mut().take_error() {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

/// Runs the interactive calculator until the user quits
pub fn run_interactive(format: NumberFormat, use_color: bool) -> CliResult<()> {
    let _guard = ScreenGuard::enter()?;
    let mut binding = UiBinding::with_format(TerminalSink::new(io::stdout(), use_color), format);
    check(&mut binding)?;
    debug!("interactive session started");

    loop {
        match event::read()? {
            Event::Key(key) => match map_key(key) {
                KeyInput::Quit => break,
                KeyInput::Press(action) => {
                    binding.press(action);
                }
                KeyInput::Ignored => trace!(?key, "key ignored"),
            },
            Event::Resize(..) => binding.refresh(),
            _ => {}
        }
        check(&mut binding)?;
    }

    debug!("interactive session ended");
    Ok(())
}
