use std::fmt::Write;
use std::io::{self, Write as _};

use termion::{clear, cursor};

use crate::game::renderer::GameView;

/// Builds a full frame of plain text and prints it in one go.
pub struct GameDisplay {
    buffer: String,
    clear_screen: bool,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(1024),
            clear_screen: true,
        }
    }

    /// Frames are appended to the output instead of redrawing the screen.
    pub fn without_clearing() -> Self {
        Self {
            clear_screen: false,
            ..Self::new()
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        if self.clear_screen {
            self.buffer
                .push_str(&format!("{}{}", cursor::Goto(1, 1), clear::All));
        }
    }

    pub fn render_game_state(&mut self, view: &GameView<'_>) {
        self.clear();

        self.buffer.push_str("Tower of Hanoi\n\n");

        if let Some(snapshot) = &view.snapshot {
            self.buffer.push_str(&snapshot.to_ascii());
            self.buffer.push('\n');
            let _ = writeln!(
                self.buffer,
                "Moves: {} | Minimum: {}",
                view.move_count,
                view.optimal_move_count.unwrap_or_default()
            );
            if let Some(source) = view.pending_source {
                let _ = writeln!(self.buffer, "Source: {}", source);
            }
            self.buffer.push('\n');
        }

        if let Some(message) = view.message {
            let _ = writeln!(self.buffer, "{}", message);
        }

        let _ = write!(self.buffer, "{} ", view.prompt);
    }

    /// Prints the current frame to stdout.
    pub fn present(&self) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(self.buffer.as_bytes())?;
        stdout.flush()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}
