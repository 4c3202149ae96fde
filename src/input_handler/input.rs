//! Text command parsing and line reading.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static COMPACT_MOVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^(?i)([lmr])([lmr])$").expect("COMPACT_MOVE_RE regex should be valid")
});
static SEPARATED_MOVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([^ \t-]+)[ \t]*(?:->|-|[ \t]to[ \t]|[ \t])[ \t]*([^ \t-]+)$")
        .expect("SEPARATED_MOVE_RE regex should be valid")
});
static SELECT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([^ \t]+)$").expect("SELECT_RE regex should be valid"));

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("input closed")]
    UserExit,
}

/// Input while a game is in progress. Peg names are kept as typed, the
/// controller decides whether they name a peg.
#[derive(Debug, PartialEq, Eq)]
pub enum MoveInput {
    /// A single peg: the source if none is pending, otherwise the destination.
    Select { peg: String },
    /// Source and destination in one line, e.g. "LR" or "left right".
    Move { from: String, to: String },
    Reset,
    Exit,
}

/// Input at the disk count prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum MenuInput {
    StartGame { disk_count: String },
    Exit,
}

fn is_exit(input: &str) -> bool {
    matches!(input, "q" | "quit" | "exit")
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();

        match trimmed.to_lowercase().as_str() {
            "reset" | "restart" => return Ok(MoveInput::Reset),
            lowered if is_exit(lowered) => return Ok(MoveInput::Exit),
            _ => {}
        }

        let pair = COMPACT_MOVE_RE
            .captures(trimmed)
            .or_else(|| SEPARATED_MOVE_RE.captures(trimmed));
        if let Some(caps) = pair {
            return Ok(MoveInput::Move {
                from: caps[1].to_string(),
                to: caps[2].to_string(),
            });
        }

        if let Some(caps) = SELECT_RE.captures(trimmed) {
            return Ok(MoveInput::Select {
                peg: caps[1].to_string(),
            });
        }

        Err(InputError::InvalidInput {
            input: input.to_string(),
        })
    }
}

impl FromStr for MenuInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(InputError::InvalidInput {
                input: input.to_string(),
            });
        }

        if is_exit(trimmed.to_lowercase().as_str()) {
            return Ok(MenuInput::Exit);
        }

        Ok(MenuInput::StartGame {
            disk_count: trimmed.to_string(),
        })
    }
}

/// Reads one line from `reader`. End of input counts as the user leaving.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<String, InputError> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => Err(InputError::UserExit),
        Ok(_n) => Ok(input.trim().to_string()),
        Err(error) => Err(InputError::IOError {
            error: error.to_string(),
        }),
    }
}

/// Collects a line from key events, echoing each character. Used by the
/// terminal UI, which runs in raw mode. Esc and Ctrl-C leave the game.
pub fn read_keyboard_line() -> Result<String, InputError> {
    let mut input = String::new();

    loop {
        if !event::poll(std::time::Duration::from_millis(100)).map_err(|e| InputError::IOError {
            error: format!("Failed to poll event: {}", e),
        })? {
            continue;
        }

        let key = match event::read().map_err(|e| InputError::IOError {
            error: format!("Failed to read event: {}", e),
        })? {
            Event::Key(key) => key,
            _ => continue,
        };

        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = key;
        if kind == KeyEventKind::Release {
            continue;
        }

        match code {
            KeyCode::Enter => {
                if !input.is_empty() {
                    break;
                }
            }
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                return Err(InputError::UserExit);
            }
            KeyCode::Char(c) => {
                input.push(c);
                print!("{}", c);
                flush_stdout()?;
            }
            KeyCode::Backspace => {
                if input.pop().is_some() {
                    print!("\x08 \x08"); // Erase character: backspace, space, backspace
                    flush_stdout()?;
                }
            }
            KeyCode::Esc => return Err(InputError::UserExit),
            _ => {}
        }
    }

    Ok(input.trim().to_string())
}

fn flush_stdout() -> Result<(), InputError> {
    std::io::stdout().flush().map_err(|e| InputError::IOError {
        error: format!("Failed to flush stdout: {}", e),
    })
}
