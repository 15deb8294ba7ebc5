use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Local};
use sysinfo::{Process, ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind};

use crate::{log_debug, log_warn};

use super::snapshot::{ProcessQuery, ProcessSnapshot};

const ENABLE_LOGS: bool = true;

/// Reads the live process table through `sysinfo`.
pub struct SystemProcessQuery {
    /// Our own PID so we never report ourselves
    own_pid: u32,
}

impl SystemProcessQuery {
    pub fn new() -> Self {
        Self {
            own_pid: std::process::id(),
        }
    }

    fn find(&self, process_name: &str) -> Result<Option<ProcessSnapshot>> {
        let mut system = System::new();
        system.refresh_processes_specifics(
            ProcessesToUpdate::All,
            ProcessRefreshKind::new().with_cmd(UpdateKind::Always),
        );

        // lowest PID first, matching `pgrep | head -1`
        let mut matches: Vec<(u32, &Process)> = system
            .processes()
            .iter()
            .map(|(pid, process)| (pid.as_u32(), process))
            .filter(|(pid, process)| *pid != self.own_pid && process.name() == process_name)
            .collect();
        matches.sort_by_key(|(pid, _)| *pid);

        log_debug!(
            "[probe] {} '{}' process(es) among {}",
            matches.len(),
            process_name,
            system.processes().len()
        );

        match matches.first() {
            Some((pid, process)) => snapshot_of(*pid, process).map(Some),
            None => Ok(None),
        }
    }
}

impl Default for SystemProcessQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessQuery for SystemProcessQuery {
    fn snapshot(&self, process_name: &str) -> Option<ProcessSnapshot> {
        or_inactive(process_name, self.find(process_name))
    }
}

fn snapshot_of(pid: u32, process: &Process) -> Result<ProcessSnapshot> {
    let start_time =
        start_time_from_epoch(process.start_time()).with_context(|| format!("pid {pid}"))?;

    let invocation_args = process
        .cmd()
        .iter()
        .skip(1)
        .map(|arg| arg.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ");

    Ok(ProcessSnapshot::running(start_time, invocation_args))
}

/// Converts a Unix start time in seconds to local time.
fn start_time_from_epoch(secs: u64) -> Result<DateTime<Local>> {
    i64::try_from(secs)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|start| start.with_timezone(&Local))
        .ok_or_else(|| anyhow!("unusable start time {secs}"))
}

/// Collapses a failed lookup to "no process", logging why.
fn or_inactive(
    process_name: &str,
    found: Result<Option<ProcessSnapshot>>,
) -> Option<ProcessSnapshot> {
    match found {
        Ok(snapshot) => snapshot,
        Err(err) => {
            log_warn!("[probe] failed to inspect '{}': {:#}", process_name, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_start_time_converts_to_local() {
        let start = start_time_from_epoch(1_718_452_800).unwrap();
        assert_eq!(start.timestamp(), 1_718_452_800);
    }

    #[test]
    fn out_of_range_start_time_is_an_error() {
        assert!(start_time_from_epoch(u64::MAX).is_err());
        // fits in i64 but lies past chrono's last representable year
        assert!(start_time_from_epoch(i64::MAX as u64).is_err());
        assert!(start_time_from_epoch(1 << 50).is_err());
    }

    #[test]
    fn unusable_start_time_collapses_to_no_process() {
        let found = start_time_from_epoch(u64::MAX)
            .map(|start| Some(ProcessSnapshot::running(start, "-t 60")));
        assert!(or_inactive("caffeinate", found).is_none());
    }

    #[test]
    fn successful_lookup_passes_through() {
        let start = start_time_from_epoch(1_718_452_800).unwrap();
        let kept = or_inactive("caffeinate", Ok(Some(ProcessSnapshot::running(start, "-i"))));
        assert_eq!(kept.map(|snapshot| snapshot.invocation_args), Some("-i".to_string()));
        assert!(or_inactive("caffeinate", Ok(None)).is_none());
    }
}
