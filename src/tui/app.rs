//! Main TUI application state and rendering

use std::io;

use crossterm::{
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};

use crate::game::controller::Phase;
use crate::game::renderer::GameView;
use crate::tui::{pegs_widget::PegsWidget, Theme};

/// Main TUI application
pub struct TuiApp<B: Backend = CrosstermBackend<io::Stdout>> {
    terminal: Terminal<B>,
    theme: Theme,
    owns_screen: bool,
}

impl TuiApp {
    /// Takes over the terminal: raw mode for key-by-key input, and the
    /// alternate screen so the shell is restored on exit.
    pub fn new() -> io::Result<Self> {
        // Any warning about the color file has to reach stderr before the
        // alternate screen hides it
        let theme = Theme::default();

        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            theme,
            owns_screen: true,
        })
    }
}

impl<B: Backend> TuiApp<B> {
    /// Draws onto any backend without touching the real terminal.
    pub fn with_backend(backend: B, theme: Theme) -> io::Result<Self> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
            theme,
            owns_screen: false,
        })
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Draw one frame and leave the cursor after the prompt
    pub fn draw(&mut self, view: &GameView<'_>) -> io::Result<()> {
        // Typed keys are echoed straight to the terminal, outside ratatui's
        // buffers, so force a full redraw
        self.terminal.clear()?;

        let theme = &self.theme;
        self.terminal.draw(|f| {
            Self::render_frame(f, view, theme);
        })?;
        Ok(())
    }

    /// Render a single frame
    fn render_frame(frame: &mut Frame, view: &GameView<'_>, theme: &Theme) {
        let size = frame.area();

        // Create main layout: board area + input panel at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(3)])
            .split(size);

        // Split board area: pegs on left, info panel on right
        let board_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(main_chunks[0]);

        let pegs_widget = PegsWidget::new(view.snapshot.as_ref(), view.pending_source, theme);
        frame.render_widget(pegs_widget, board_chunks[0]);

        Self::render_info_panel(frame, board_chunks[1], view, theme);
        Self::render_input_panel(frame, main_chunks[1], view, theme);
    }

    /// Render the info panel with move counts and the last message
    fn render_info_panel(frame: &mut Frame, area: Rect, view: &GameView<'_>, theme: &Theme) {
        let mut info_text = String::new();

        match view.phase {
            Phase::Playing => {
                info_text.push_str(&format!("Moves: {}\n", view.move_count));
                if let Some(optimal) = view.optimal_move_count {
                    info_text.push_str(&format!("Minimum: {}\n", optimal));
                }
                let source = view
                    .pending_source
                    .map_or("-".to_string(), |peg| peg.to_string());
                info_text.push_str(&format!("Source: {}\n\n", source));
            }
            Phase::SelectingDiskCount | Phase::Won => {
                info_text.push_str("New game\n\n");
            }
        }

        if let Some(message) = view.message {
            info_text.push_str(message);
            info_text.push_str("\n\n");
        }

        info_text.push_str("Commands:\n  L, M, R  select peg\n  LR       move L to R\n  reset    new game\n  Esc      quit\n");

        let paragraph = Paragraph::new(info_text)
            .block(Block::default().borders(Borders::ALL).title("Game Info"))
            .wrap(Wrap { trim: false })
            .style(theme.text_style());

        frame.render_widget(paragraph, area);
    }

    /// Render the input panel at the bottom, with the cursor after the prompt
    fn render_input_panel(frame: &mut Frame, area: Rect, view: &GameView<'_>, theme: &Theme) {
        let paragraph = Paragraph::new(view.prompt)
            .block(Block::default().borders(Borders::ALL).title("Input"))
            .style(theme.text_style());

        frame.render_widget(paragraph, area);

        let cursor_x = (area.x + 2 + view.prompt.chars().count() as u16)
            .min(area.x + area.width.saturating_sub(2));
        frame.set_cursor_position((cursor_x, area.y + 1));
    }
}

impl<B: Backend> Drop for TuiApp<B> {
    fn drop(&mut self) {
        if self.owns_screen {
            // Nothing useful to do with a failure while tearing down
            let _ = terminal::disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
        }
    }
}
