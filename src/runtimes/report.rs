//! Plain-text runtime summary

use std::io::{self, Write};

use super::schema::RuntimeTable;

/// Width of the design name column
const NAME_WIDTH: usize = 30;
/// Width of the total runtime column
const TOTAL_WIDTH: usize = 8;
/// Length of the rule under the heading
const RULE_WIDTH: usize = 60;

/// Per-design totals, ordered by design name
pub fn design_totals(table: &RuntimeTable) -> Vec<(&str, f64)> {
    table
        .iter()
        .map(|(design, runtimes)| (design.as_str(), runtimes.total()))
        .collect()
}

/// Format one summary row
pub fn format_row(design: &str, total: f64) -> String {
    format!(
        "{:<name_w$} {:>total_w$.2} seconds",
        design,
        total,
        name_w = NAME_WIDTH,
        total_w = TOTAL_WIDTH
    )
}

/// Render the whole summary, heading included
pub fn render_summary(table: &RuntimeTable) -> String {
    let mut out = String::from("\nHLS Runtime Summary:\n");
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');

    for (design, total) in design_totals(table) {
        out.push_str(&format_row(design, total));
        out.push('\n');
    }

    out
}

/// Write the summary to `out`
pub fn write_summary<W: Write>(table: &RuntimeTable, out: &mut W) -> io::Result<()> {
    out.write_all(render_summary(table).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtimes::schema::{Step, StepRuntimes};

    fn table(entries: Vec<(&str, Vec<(Step, f64)>)>) -> RuntimeTable {
        entries
            .into_iter()
            .map(|(design, steps)| (design.to_string(), steps.into_iter().collect::<StepRuntimes>()))
            .collect()
    }

    #[test]
    fn test_format_row() {
        let row = format_row("designA", 13.5);
        assert_eq!(row, format!("designA{} {:>8} seconds", " ".repeat(23), "13.50"));
        assert!(row.ends_with("   13.50 seconds"));
    }

    #[test]
    fn test_long_names_are_not_truncated() {
        let name = "a_very_long_design_name_exceeding_thirty";
        assert!(format_row(name, 1.0).starts_with(name));
    }

    #[test]
    fn test_summary_sorted_by_name() {
        let table = table(vec![
            ("B", vec![(Step::Analyze, 2.0)]),
            ("A", vec![(Step::Analyze, 1.0), (Step::Extract, 4.0)]),
        ]);
        let summary = render_summary(&table);
        let lines: Vec<&str> = summary.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "HLS Runtime Summary:");
        assert_eq!(lines[2], "-".repeat(60));
        assert_eq!(lines[3], format_row("A", 5.0));
        assert_eq!(lines[4], format_row("B", 2.0));
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_totals_sum_present_steps() {
        let table = table(vec![("designA", vec![(Step::Analyze, 3.5), (Step::Compile, 10.0)])]);
        assert_eq!(design_totals(&table), vec![("designA", 13.5)]);
        assert!(render_summary(&table).contains("13.50 seconds"));
    }

    #[test]
    fn test_write_summary() {
        let table = table(vec![("fir", vec![(Step::Schedule, 0.125)])]);
        let mut buf = Vec::new();
        write_summary(&table, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), render_summary(&table));
    }
}
