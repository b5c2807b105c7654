//! Statistics derived from the inning log.

pub mod high_run;

pub use high_run::{high_run, high_run_for, HighRuns};
