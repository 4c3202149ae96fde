//! Terminal User Interface (TUI) for drawing the pegs with colored disks

pub mod app;
pub mod pegs_widget;
pub mod theme;

pub use app::TuiApp;
pub use theme::Theme;
