//! End-to-end runtime report: discover, parse, check, summarize, export

use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::runtimes::{
    check_completeness, export_csv, parse_log, write_summary, DesignLog, LogLocator, RuntimeTable,
    LOG_FILE_NAME,
};

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// No log files were found under the HLS directory
    NoLogs,
    /// Logs were found but none yielded a step runtime
    NoData,
    /// A summary was printed
    Reported {
        /// Number of designs in the summary
        designs: usize,
        /// Whether a CSV file was written
        exported: bool,
    },
}

/// Inputs for a single report run
#[derive(Debug, Clone)]
pub struct Pipeline {
    hls_dir: PathBuf,
    csv: Option<PathBuf>,
}

impl Pipeline {
    pub fn new(hls_dir: impl Into<PathBuf>, csv: Option<PathBuf>) -> Self {
        Self {
            hls_dir: hls_dir.into(),
            csv,
        }
    }

    pub fn from_config(config: &super::Config) -> Self {
        Self::new(config.hls_dir.clone(), config.csv.clone())
    }

    /// Run the report, writing progress and the summary to `out`
    ///
    /// Missing or broken logs never fail the run; only errors writing to
    /// `out` are returned.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<RunOutcome> {
        writeln!(
            out,
            "Searching for {} files in: {}",
            LOG_FILE_NAME,
            self.hls_dir.display()
        )?;

        let logs: Vec<DesignLog> = LogLocator::new(&self.hls_dir).collect();
        if logs.is_empty() {
            writeln!(out, "No {} files found!", LOG_FILE_NAME)?;
            return Ok(RunOutcome::NoLogs);
        }
        writeln!(out, "Found {} {} files", logs.len(), LOG_FILE_NAME)?;

        let table = collect_runtimes(&logs, out)?;
        if table.is_empty() {
            writeln!(out, "No valid runtime data found!")?;
            return Ok(RunOutcome::NoData);
        }

        write_summary(&table, out)?;

        let exported = match &self.csv {
            Some(path) => self.export(&table, path, out)?,
            None => false,
        };

        info!("Reported {} designs", table.len());
        Ok(RunOutcome::Reported {
            designs: table.len(),
            exported,
        })
    }

    fn export<W: Write>(&self, table: &RuntimeTable, path: &Path, out: &mut W) -> Result<bool> {
        let exported = export_csv(table, path);
        if exported {
            writeln!(out, "\nCSV report exported to: {}", path.display())?;
        }
        Ok(exported)
    }
}

/// Parse every log into a table keyed by design name
///
/// Designs whose logs yield no step runtimes are left out entirely.
fn collect_runtimes<W: Write>(logs: &[DesignLog], out: &mut W) -> Result<RuntimeTable> {
    let mut table = RuntimeTable::new();
    let mut sources: Vec<(&str, &Path)> = Vec::new();

    for log in logs {
        writeln!(out, "Parsing: {} ({})", log.design, log.path.display())?;

        let Some(runtimes) = parse_log(&log.path) else {
            continue;
        };
        check_completeness(&log.design, &runtimes);
        if runtimes.is_empty() {
            debug!("No step runtimes in {}, skipping", log.path.display());
            continue;
        }

        if let Some((_, previous)) = sources.iter().rfind(|(design, _)| *design == log.design) {
            warn!(
                "Design '{}' found in both {} and {}; keeping the latter",
                log.design,
                previous.display(),
                log.path.display()
            );
        }
        sources.push((log.design.as_str(), log.path.as_path()));
        table.insert(log.design.clone(), runtimes);
    }

    Ok(table)
}
