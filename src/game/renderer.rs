use std::io;

use crate::board::peg::Peg;
use crate::board::Snapshot;
use crate::game::controller::{Phase, PuzzleController};
use crate::game::display::GameDisplay;
use crate::tui::TuiApp;

/// Everything a renderer needs to draw one frame.
pub struct GameView<'a> {
    pub phase: Phase,
    pub snapshot: Option<Snapshot>,
    pub move_count: u32,
    pub optimal_move_count: Option<u32>,
    pub pending_source: Option<Peg>,
    pub message: Option<&'a str>,
    pub prompt: &'a str,
}

impl<'a> GameView<'a> {
    pub fn new(controller: &PuzzleController, message: Option<&'a str>, prompt: &'a str) -> Self {
        Self {
            phase: controller.phase(),
            snapshot: controller.snapshot(),
            move_count: controller.user_move_count(),
            optimal_move_count: controller.optimal_move_count(),
            pending_source: controller.pending_source(),
            message,
            prompt,
        }
    }
}

pub trait GameRenderer {
    fn render(&mut self, view: &GameView<'_>) -> io::Result<()>;
}

/// Redraws the terminal as plain text after every input.
pub struct SimpleRenderer {
    display: GameDisplay,
}

impl SimpleRenderer {
    pub fn new() -> Self {
        Self {
            display: GameDisplay::new(),
        }
    }

    /// Keeps earlier frames on screen, for terminals that can't clear.
    pub fn scrolling() -> Self {
        Self {
            display: GameDisplay::without_clearing(),
        }
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRenderer for SimpleRenderer {
    fn render(&mut self, view: &GameView<'_>) -> io::Result<()> {
        self.display.render_game_state(view);
        self.display.present()
    }
}

/// Draws each frame with the terminal UI.
pub struct TuiRenderer {
    app: TuiApp,
}

impl TuiRenderer {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            app: TuiApp::new()?,
        })
    }
}

impl GameRenderer for TuiRenderer {
    fn render(&mut self, view: &GameView<'_>) -> io::Result<()> {
        self.app.draw(view)
    }
}
