use crate::constants::{REPORT_HEADER, REPORT_TITLE, TOTAL_ROW_NAME};
use crate::error::{OptimizeError, Result};
use crate::units::{diff_rate, format_bytes};
use std::fs;
use std::path::Path;

const TABLE_HEADER: &str = "|File Name|Before|After|Diff (size)|Diff (rate)|";
const TABLE_ALIGNMENT: &str = "|:---|---:|---:|---:|---:|";

/// Size of one file before and after optimization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub name: String,
    pub before: i64,
    pub after: i64,
}

impl ReportRow {
    pub fn new(name: impl Into<String>, before: i64, after: i64) -> Self {
        Self {
            name: name.into(),
            before,
            after,
        }
    }

    pub fn to_markdown(&self) -> String {
        format!(
            "|{}|{}|{}|{}|{}|",
            self.name,
            format_bytes(self.before),
            format_bytes(self.after),
            format_bytes(self.after - self.before),
            diff_rate(self.before, self.after)
        )
    }
}

/// Running totals over every processed file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTotals {
    pub before: i64,
    pub after: i64,
}

impl RunTotals {
    pub fn add(&mut self, before: i64, after: i64) {
        self.before += before;
        self.after += after;
    }

    /// Net size change, negative when the images got smaller
    pub fn delta(&self) -> i64 {
        self.after - self.before
    }
}

/// The pull request message: a summary line and a collapsible details table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub rows: Vec<ReportRow>,
    pub totals: RunTotals,
}

impl Report {
    pub fn push(&mut self, row: ReportRow) {
        self.totals.add(row.before, row.after);
        self.rows.push(row);
    }

    pub fn summary_line(&self) -> String {
        format!(
            "Your image files have been optimized (File size: **{}** (**{}**))!",
            format_bytes(self.totals.delta()),
            diff_rate(self.totals.before, self.totals.after)
        )
    }

    pub fn render(&self) -> String {
        let total = ReportRow::new(TOTAL_ROW_NAME, self.totals.before, self.totals.after);

        let mut lines = vec![
            REPORT_TITLE.to_string(),
            String::new(),
            REPORT_HEADER.to_string(),
            self.summary_line(),
            String::new(),
            "<details>".to_string(),
            String::new(),
            "<summary>details</summary>".to_string(),
            String::new(),
            TABLE_HEADER.to_string(),
            TABLE_ALIGNMENT.to_string(),
        ];
        lines.extend(self.rows.iter().map(ReportRow::to_markdown));
        lines.push(total.to_markdown());
        lines.push(String::new());
        lines.push("</details>".to_string());

        lines.join("\n")
    }

    /// Writes the rendered message, replacing any previous file at `path`.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render()).map_err(|source| OptimizeError::ReportWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_report() -> Report {
        let mut report = Report::default();
        report.push(ReportRow::new("img/photo.jpg", 200_000, 150_000));
        report.push(ReportRow::new("img/icon.png", 100_000, 100_000));
        report
    }

    #[test]
    fn test_row_markdown() {
        let row = ReportRow::new("a.jpg", 200_000, 150_000);
        assert_eq!(
            row.to_markdown(),
            "|a.jpg|200.00 kB|150.00 kB|-50.00 kB|-25.00%|"
        );
    }

    #[test]
    fn test_row_markdown_empty_file() {
        let row = ReportRow::new("empty.svg", 0, 0);
        assert_eq!(row.to_markdown(), "|empty.svg|0 Byte|0 Byte|0 Byte|N/A|");
    }

    #[test]
    fn test_totals() {
        let report = sample_report();
        assert_eq!(report.totals, RunTotals { before: 300_000, after: 250_000 });
        assert_eq!(report.totals.delta(), -50_000);
    }

    #[test]
    fn test_render() {
        let expected = "\
[imgcmp] Optimize images

## Successfully optimized
Your image files have been optimized (File size: **-50.00 kB** (**-16.67%**))!

<details>

<summary>details</summary>

|File Name|Before|After|Diff (size)|Diff (rate)|
|:---|---:|---:|---:|---:|
|img/photo.jpg|200.00 kB|150.00 kB|-50.00 kB|-25.00%|
|img/icon.png|100.00 kB|100.00 kB|0 Byte|0.00%|
|Total|300.00 kB|250.00 kB|-50.00 kB|-16.67%|

</details>";
        assert_eq!(sample_report().render(), expected);
    }

    #[test]
    fn test_write_to_truncates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pull_request_message.md");
        fs::write(&path, "x".repeat(10_000)).unwrap();

        let report = sample_report();
        report.write_to(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), report.render());
    }

    #[test]
    fn test_write_to_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("report.md");

        let result = sample_report().write_to(&path);
        assert!(matches!(result, Err(OptimizeError::ReportWrite { .. })));
    }
}
