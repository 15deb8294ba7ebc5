pub mod probe;
pub mod snapshot;
pub mod status;

pub use probe::SystemProcessQuery;
pub use snapshot::{ProcessQuery, ProcessSnapshot, StaticProcessQuery};
pub use status::{derive_status, SessionStatus, POLL_WINDOW_SECS};

use chrono::{DateTime, Local};

/// Name of the keep-awake process on macOS.
pub const DEFAULT_PROCESS_NAME: &str = "caffeinate";

/// Queries `process_name` once and derives its status at `now`.
pub fn inspect<Q>(query: &Q, process_name: &str, now: DateTime<Local>) -> SessionStatus
where
    Q: ProcessQuery + ?Sized,
{
    derive_status(query.snapshot(process_name).as_ref(), now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    #[test]
    fn inspect_without_a_process_is_inactive() {
        let now = Local.with_ymd_and_hms(2024, 6, 15, 9, 0, 0).unwrap();
        let status = inspect(&StaticProcessQuery::default(), DEFAULT_PROCESS_NAME, now);
        assert_eq!(status, SessionStatus::inactive());
    }

    #[test]
    fn inspect_derives_status_from_the_snapshot() {
        let now = Local.with_ymd_and_hms(2024, 6, 15, 9, 0, 0).unwrap();
        let query = StaticProcessQuery {
            snapshot: Some(ProcessSnapshot::running(now - TimeDelta::seconds(60), "-t 120")),
        };
        let status = inspect(&query, DEFAULT_PROCESS_NAME, now);
        assert_eq!(status.remaining_seconds, Some(60));
    }
}
