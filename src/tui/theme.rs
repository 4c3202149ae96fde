//! Color theme for the TUI
//!
//! Colors can be configured via a `hanoi_colors.toml` file in the current working directory.
//! Keys that are missing or can't be parsed keep their default color.
//!
//! Example `hanoi_colors.toml`:
//! ```toml
//! disk_1 = 255, 0, 0      # Smallest disk
//! disk_2 = 255, 165, 0
//! peg = 160, 160, 160
//! base = 90, 60, 30
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use ratatui::style::{Color, Modifier, Style};

use crate::board::peg_stack::Disk;
use crate::game::controller::DISK_COUNT_RANGE;

pub const CONFIG_FILE: &str = "hanoi_colors.toml";

/// Red, orange, yellow, green, blue, indigo, violet. Towers taller than this
/// wrap around to red again.
const RAINBOW: [Color; 7] = [
    Color::Rgb(220, 20, 60),
    Color::Rgb(255, 140, 0),
    Color::Rgb(255, 215, 0),
    Color::Rgb(34, 139, 34),
    Color::Rgb(30, 144, 255),
    Color::Rgb(75, 0, 130),
    Color::Rgb(238, 130, 238),
];

/// Color theme for the Hanoi TUI
pub struct Theme {
    pub disks: Vec<Color>,
    pub disk_label: Color,
    pub peg: Color,
    pub base: Color,
    pub highlight: Color,
    pub border: Color,
    pub text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_file(Path::new(CONFIG_FILE))
    }
}

impl Theme {
    /// The theme used when no config file is present.
    pub fn builtin() -> Self {
        Self {
            disks: RAINBOW.to_vec(),
            disk_label: Color::Black,
            peg: Color::Gray,
            base: Color::Rgb(139, 90, 43),
            highlight: Color::Yellow,
            border: Color::Gray,
            text: Color::White,
        }
    }

    /// The builtin theme with the overrides in `config_path`, if it exists.
    /// A file that can't be read is logged and skipped.
    pub fn from_file(config_path: &Path) -> Self {
        let theme = Self::builtin();
        if !config_path.exists() {
            return theme;
        }

        match fs::read_to_string(config_path) {
            Ok(contents) => theme.with_overrides(&contents),
            Err(error) => {
                log::warn!("could not read {}: {}", config_path.display(), error);
                theme
            }
        }
    }

    /// Applies `disk_N`, `peg` and `base` entries of the form `key = r, g, b`.
    /// `disk_N` entries beyond the largest playable disk are ignored.
    pub fn with_overrides(mut self, contents: &str) -> Self {
        let colors = parse_colors(contents);

        for (key, color) in &colors {
            if let Some(index) = key
                .strip_prefix("disk_")
                .and_then(|n| n.parse::<usize>().ok())
                .filter(|n| (1..=usize::from(*DISK_COUNT_RANGE.end())).contains(n))
            {
                if self.disks.len() < index {
                    let len = self.disks.len();
                    let fill: Vec<Color> = (len..index).map(|i| RAINBOW[i % RAINBOW.len()]).collect();
                    self.disks.extend(fill);
                }
                self.disks[index - 1] = *color;
            }
        }

        if let Some(&peg) = colors.get("peg") {
            self.peg = peg;
        }
        if let Some(&base) = colors.get("base") {
            self.base = base;
        }

        self
    }

    pub fn disk_color(&self, disk: Disk) -> Color {
        let index = usize::from(disk.max(1)) - 1;
        self.disks[index % self.disks.len()]
    }

    pub fn disk_style(&self, disk: Disk) -> Style {
        Style::default()
            .bg(self.disk_color(disk))
            .fg(self.disk_label)
            .add_modifier(Modifier::BOLD)
    }

    pub fn peg_style(&self) -> Style {
        Style::default().fg(self.peg)
    }

    pub fn base_style(&self) -> Style {
        Style::default().fg(self.base)
    }

    /// Get style for the selected source peg's label
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for text
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Get style for borders
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }
}

/// Parses simple `key = r, g, b` lines, skipping comments and anything malformed.
fn parse_colors(contents: &str) -> HashMap<String, Color> {
    let mut colors = HashMap::new();

    for line in contents.lines() {
        // Drop trailing comments, then skip empty lines
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            // RGB values: "r, g, b" or "[r, g, b]"
            let rgb_str = value.trim().trim_start_matches('[').trim_end_matches(']');
            let rgb_parts: Vec<&str> = rgb_str.split(',').map(|s| s.trim()).collect();
            if rgb_parts.len() == 3 {
                if let (Ok(r), Ok(g), Ok(b)) = (
                    rgb_parts[0].parse::<u8>(),
                    rgb_parts[1].parse::<u8>(),
                    rgb_parts[2].parse::<u8>(),
                ) {
                    colors.insert(key.trim().to_string(), Color::Rgb(r, g, b));
                }
            }
        }
    }

    colors
}
