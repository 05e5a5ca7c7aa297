//! Runtime extraction from Catapult HLS logs
//!
//! Finds `catapult.log` files below an HLS output directory, reads the
//! elapsed time of each synthesis step and turns the result into a text
//! summary or a CSV table.

pub mod checker;
pub mod export;
pub mod locator;
pub mod parser;
pub mod report;
pub mod schema;

pub use checker::{check_completeness, missing_steps};
pub use export::{export_csv, write_csv};
pub use locator::{find_catapult_logs, LogLocator};
pub use parser::{parse_log, try_parse_log};
pub use report::{render_summary, write_summary};
pub use schema::{DesignLog, RuntimeTable, Step, StepRuntimes, LOG_FILE_NAME};
