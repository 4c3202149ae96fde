use super::peg::Peg;
use super::Snapshot;

impl Snapshot {
    /// Draws the pegs side by side, tallest level first, with a base line and
    /// the peg names underneath. A disk of size `n` is `2n + 1` characters wide.
    pub fn to_ascii(&self) -> String {
        let height = self.disk_count();
        let width = 2 * height + 3;
        let mut out = String::new();

        for level in (0..=height).rev() {
            let cells: Vec<String> = self
                .iter()
                .map(|(_, disks)| {
                    let cell = match disks.get(level) {
                        Some(&disk) => "#".repeat(2 * usize::from(disk) + 1),
                        None => "|".to_string(),
                    };
                    format!("{:^width$}", cell, width = width)
                })
                .collect();
            out.push_str(cells.join(" ").trim_end());
            out.push('\n');
        }

        let base = vec!["=".repeat(width); Peg::ALL.len()];
        out.push_str(&base.join(" "));
        out.push('\n');

        let labels: Vec<String> = Peg::ALL
            .iter()
            .map(|peg| format!("{:^width$}", peg.name(), width = width))
            .collect();
        out.push_str(labels.join(" ").trim_end());
        out.push('\n');

        out
    }
}
