use chrono::{DateTime, Local};
use serde::Serialize;

/// Point-in-time view of the keep-awake process.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessSnapshot {
    pub running: bool,
    pub start_time: DateTime<Local>,
    /// Command-line arguments after the program name, space separated.
    pub invocation_args: String,
}

impl ProcessSnapshot {
    pub fn running(start_time: DateTime<Local>, invocation_args: impl Into<String>) -> Self {
        Self {
            running: true,
            start_time,
            invocation_args: invocation_args.into(),
        }
    }
}

/// Looks up a background process by name.
///
/// Implementations absorb their own failures: anything that goes wrong while
/// querying is reported as `None`, the same as "not running".
pub trait ProcessQuery {
    fn snapshot(&self, process_name: &str) -> Option<ProcessSnapshot>;
}

/// Fixed answer, handy wherever the process table should not be touched.
#[derive(Debug, Clone, Default)]
pub struct StaticProcessQuery {
    pub snapshot: Option<ProcessSnapshot>,
}

impl ProcessQuery for StaticProcessQuery {
    fn snapshot(&self, _process_name: &str) -> Option<ProcessSnapshot> {
        self.snapshot.clone()
    }
}
