//! Peg and disk widget for TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, Widget},
};

use crate::board::peg::Peg;
use crate::board::Snapshot;
use crate::tui::Theme;

/// Widget that renders the three pegs with their disks, largest at the bottom
pub struct PegsWidget<'a> {
    snapshot: Option<&'a Snapshot>,
    pending_source: Option<Peg>,
    theme: &'a Theme,
}

impl<'a> PegsWidget<'a> {
    pub fn new(snapshot: Option<&'a Snapshot>, pending_source: Option<Peg>, theme: &'a Theme) -> Self {
        Self {
            snapshot,
            pending_source,
            theme,
        }
    }

    /// Half the drawn width of `disk`, scaled so the largest disk fills the column.
    fn half_width(disk: u8, disk_count: usize, column_width: u16) -> u16 {
        let max_half = u32::from(column_width.saturating_sub(1) / 2);
        let half = u32::from(disk) * max_half / disk_count.max(1) as u32;
        half.max(1) as u16
    }
}

impl Widget for PegsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Tower of Hanoi")
            .border_style(self.theme.border_style());

        let inner = block.inner(area);
        block.render(area, buf);

        let snapshot = match self.snapshot {
            Some(snapshot) => snapshot,
            None => {
                if inner.height > 0 {
                    buf.set_string(
                        inner.x,
                        inner.y,
                        "Choose the number of disks to begin",
                        self.theme.text_style(),
                    );
                }
                return;
            }
        };

        // Need a label row, a base row and at least one disk row, and room
        // for a disk of width 3 in every column
        let column_width = inner.width / 3;
        if inner.height < 3 || column_width < 3 {
            return; // Not enough space to render
        }

        let label_y = inner.y + inner.height - 1;
        let base_y = label_y - 1;
        let disk_count = snapshot.disk_count();

        for (column, (peg, disks)) in snapshot.iter().enumerate() {
            let column_x = inner.x + column as u16 * column_width;
            let center = column_x + column_width / 2;

            // Peg
            for y in inner.y..base_y {
                if let Some(cell) = buf.cell_mut((center, y)) {
                    cell.set_char('│').set_style(self.theme.peg_style());
                }
            }

            // Disks, bottom up
            for (level, &disk) in disks.iter().enumerate() {
                let y = match base_y.checked_sub(1 + level as u16) {
                    Some(y) if y >= inner.y => y,
                    _ => break,
                };
                let half = Self::half_width(disk, disk_count, column_width);
                for x in center - half..=center + half {
                    let ch = if x == center {
                        char::from_digit(u32::from(disk), 10).unwrap_or('#')
                    } else {
                        ' '
                    };
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_char(ch).set_style(self.theme.disk_style(disk));
                    }
                }
            }

            // Base
            for x in column_x..column_x + column_width - 1 {
                if let Some(cell) = buf.cell_mut((x, base_y)) {
                    cell.set_char('═').set_style(self.theme.base_style());
                }
            }

            // Label, highlighted while the peg is the pending source
            let label_style = if self.pending_source == Some(peg) {
                self.theme.highlight_style()
            } else {
                self.theme.text_style()
            };
            let label = format!("{} ({})", peg.name(), peg.code());
            let label_x = center.saturating_sub(label.len() as u16 / 2).max(column_x);
            buf.set_stringn(
                label_x,
                label_y,
                &label,
                usize::from(column_width),
                label_style,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn render(snapshot: Option<&Snapshot>, pending_source: Option<Peg>) -> Buffer {
        let theme = Theme::builtin();
        let area = Rect::new(0, 0, 30, 8);
        let mut buf = Buffer::empty(area);
        PegsWidget::new(snapshot, pending_source, &theme).render(area, &mut buf);
        buf
    }

    fn symbol(buf: &Buffer, x: u16, y: u16) -> String {
        buf.cell((x, y)).unwrap().symbol().to_string()
    }

    #[test]
    fn test_largest_disk_is_drawn_on_the_bottom_row() {
        let snapshot = Board::starting_position(3).snapshot();
        let buf = render(Some(&snapshot), None);

        // Left peg is centered on column 5, disks sit on rows 4, 3, 2
        assert_eq!(symbol(&buf, 5, 4), "3");
        assert_eq!(symbol(&buf, 5, 3), "2");
        assert_eq!(symbol(&buf, 5, 2), "1");
        assert_eq!(symbol(&buf, 5, 1), "│");
        assert_eq!(symbol(&buf, 5, 5), "═");
    }

    #[test]
    fn test_disks_use_their_theme_color() {
        let theme = Theme::builtin();
        let snapshot = Board::starting_position(3).snapshot();
        let buf = render(Some(&snapshot), None);

        assert_eq!(buf.cell((5, 4)).unwrap().bg, theme.disk_color(3));
        // the widest disk spans the whole column
        assert_eq!(buf.cell((1, 4)).unwrap().bg, theme.disk_color(3));
        assert_eq!(buf.cell((6, 2)).unwrap().bg, theme.disk_color(1));
        assert_ne!(buf.cell((7, 2)).unwrap().bg, theme.disk_color(1));
    }

    #[test]
    fn test_empty_pegs_show_only_the_pole() {
        let snapshot = Board::starting_position(3).snapshot();
        let buf = render(Some(&snapshot), None);

        // Middle and Right are centered on columns 14 and 23
        for y in 1..5 {
            assert_eq!(symbol(&buf, 14, y), "│");
            assert_eq!(symbol(&buf, 23, y), "│");
        }
    }

    #[test]
    fn test_pending_source_label_is_highlighted() {
        let theme = Theme::builtin();
        let snapshot = Board::starting_position(3).snapshot();
        let buf = render(Some(&snapshot), Some(Peg::Middle));

        let middle_label = (10..19)
            .find(|&x| symbol(&buf, x, 6) == "M")
            .expect("middle label should be drawn");
        assert_eq!(buf.cell((middle_label, 6)).unwrap().fg, theme.highlight);

        let left_label = (1..10)
            .find(|&x| symbol(&buf, x, 6) == "L")
            .expect("left label should be drawn");
        assert_eq!(buf.cell((left_label, 6)).unwrap().fg, theme.text);
    }

    #[test]
    fn test_without_game_shows_hint() {
        let buf = render(None, None);
        let row: String = (1..29).map(|x| symbol(&buf, x, 1)).collect();
        assert!(row.starts_with("Choose the number of disks"));
    }
}
