//! CSV export of per-step runtimes

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

use super::schema::{RuntimeTable, Step, StepRuntimes};

/// Header row: design, total, then one column per step in flow order
pub fn csv_header() -> Vec<&'static str> {
    let mut header = vec!["design", "total_runtime"];
    header.extend(Step::ALL.iter().map(|s| s.as_str()));
    header
}

/// One CSV row; missing steps are left as empty cells
pub fn csv_record(design: &str, runtimes: &StepRuntimes) -> Vec<String> {
    let mut record = Vec::with_capacity(Step::ALL.len() + 2);
    record.push(design.to_string());
    record.push(format_seconds(round_hundredths(runtimes.total())));

    for step in Step::ALL {
        record.push(runtimes.get(step).map(format_seconds).unwrap_or_default());
    }

    record
}

/// Write the table as CSV, one row per design in name order
pub fn write_csv<W: Write>(table: &RuntimeTable, writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(csv_header())
        .context("Failed to write CSV header")?;

    for (design, runtimes) in table {
        wtr.write_record(csv_record(design, runtimes))
            .with_context(|| format!("Failed to write CSV row for '{}'", design))?;
    }

    wtr.flush().context("Failed to flush CSV writer")?;
    Ok(())
}

/// Export the table to a CSV file
///
/// Errors are logged rather than returned; the return value tells whether
/// the file was written.
pub fn export_csv(table: &RuntimeTable, path: &Path) -> bool {
    match try_export_csv(table, path) {
        Ok(()) => {
            debug!("Wrote {} rows to {}", table.len(), path.display());
            true
        }
        Err(e) => {
            warn!("Error writing CSV file {}: {:#}", path.display(), e);
            false
        }
    }
}

fn try_export_csv(table: &RuntimeTable, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    write_csv(table, file)
}

/// Round to two decimals the way the summary prints them
fn round_hundredths(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Shortest round-trip form, always with a fractional part ("10.0", "3.5")
fn format_seconds(value: f64) -> String {
    format!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::capture_logs;
    use tempfile::tempdir;

    fn design_a() -> StepRuntimes {
        [(Step::Analyze, 3.5), (Step::Compile, 10.0)].into_iter().collect()
    }

    fn to_string(table: &RuntimeTable) -> String {
        let mut buf = Vec::new();
        write_csv(table, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_header() {
        let header = csv_header();
        assert_eq!(header.len(), 15);
        assert_eq!(&header[..3], &["design", "total_runtime", "analyze"]);
        assert_eq!(header.last(), Some(&"extract"));
    }

    #[test]
    fn test_partial_design_row() {
        let mut table = RuntimeTable::new();
        table.insert("designA".to_string(), design_a());

        let csv = to_string(&table);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "design,total_runtime,analyze,compile,libraries,assembly,loops,memories,cluster,architect,allocate,schedule,dpfsm,instance,extract"
        );
        assert_eq!(lines[1], "designA,13.5,3.5,10.0,,,,,,,,,,,");
    }

    #[test]
    fn test_zero_runtime_is_not_empty() {
        let runtimes: StepRuntimes = [(Step::Loops, 0.0)].into_iter().collect();
        let record = csv_record("d", &runtimes);
        assert_eq!(record[1], "0.0");
        assert_eq!(record[2], "");
        assert_eq!(record[6], "0.0");
    }

    #[test]
    fn test_total_is_rounded() {
        let runtimes: StepRuntimes = [(Step::Analyze, 1.004), (Step::Compile, 2.003)]
            .into_iter()
            .collect();
        assert_eq!(csv_record("d", &runtimes)[1], "3.01");
    }

    #[test]
    fn test_total_matches_summary_rounding() {
        use crate::runtimes::report::format_row;

        for (secs, expected) in [(2.675, "2.67"), (0.125, "0.12"), (0.625, "0.62")] {
            let runtimes: StepRuntimes = [(Step::Analyze, secs)].into_iter().collect();
            assert_eq!(csv_record("d", &runtimes)[1], expected);
            assert!(format_row("d", secs).ends_with(&format!(" {} seconds", expected)));
        }
    }

    #[test]
    fn test_rows_sorted_by_design() {
        let mut table = RuntimeTable::new();
        table.insert("zeta".to_string(), design_a());
        table.insert("alpha".to_string(), design_a());

        let csv = to_string(&table);
        let designs: Vec<&str> = csv
            .lines()
            .skip(1)
            .map(|l| l.split(',').next().unwrap())
            .collect();
        assert_eq!(designs, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_export_reread_totals_match_cells() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("runtimes.csv");

        let full: StepRuntimes = Step::ALL
            .into_iter()
            .enumerate()
            .map(|(i, s)| (s, (i + 1) as f64 * 0.5))
            .collect();
        let mut table = RuntimeTable::new();
        table.insert("full".to_string(), full);
        table.insert("partial".to_string(), design_a());

        assert!(export_csv(&table, &path));

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.len(), 15);

        let mut rows = 0;
        for record in reader.records() {
            let record = record.unwrap();
            let total: f64 = record[1].parse().unwrap();
            let cells: Vec<&str> = record.iter().skip(2).collect();
            let sum: f64 = cells
                .iter()
                .filter(|c| !c.is_empty())
                .map(|c| c.parse::<f64>().unwrap())
                .sum();
            assert!((total - sum).abs() < 1e-9);

            if &record[0] == "partial" {
                assert_eq!(cells.iter().filter(|c| c.is_empty()).count(), 11);
            } else {
                assert!(cells.iter().all(|c| !c.is_empty()));
            }
            rows += 1;
        }
        assert_eq!(rows, 2);
    }

    #[test]
    fn test_export_to_unwritable_path_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("runtimes.csv");
        let mut table = RuntimeTable::new();
        table.insert("designA".to_string(), design_a());

        let (exported, logs) = capture_logs(|| export_csv(&table, &path));
        assert!(!exported);
        assert!(!path.exists());
        assert!(logs.contains("WARN"));
        assert!(logs.contains(&format!("Error writing CSV file {}", path.display())));
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(10.0), "10.0");
        assert_eq!(format_seconds(3.5), "3.5");
        assert_eq!(format_seconds(15.95), "15.95");
    }
}
