pub mod config;
pub mod pipeline;

pub use config::Config;
pub use pipeline::{Pipeline, RunOutcome};
