use chrono::{DateTime, Local, TimeDelta};
use serde::Serialize;

use crate::log_warn;
use crate::timefmt::{format_clock, format_remaining, TimeFormat};

use super::snapshot::ProcessSnapshot;

const ENABLE_LOGS: bool = true;

/// Timed sessions with this much time left or less ask to be polled again.
pub const POLL_WINDOW_SECS: u64 = 3600;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    pub active: bool,
    pub indefinite: bool,
    pub display_allows_display_sleep: bool,
    /// `None` unless the session is timed.
    pub remaining_seconds: Option<u64>,
    pub should_poll_again: bool,
    /// Start time plus the `-t` timeout.
    pub ends_at: Option<DateTime<Local>>,
}

impl SessionStatus {
    pub fn inactive() -> Self {
        Self {
            active: false,
            indefinite: false,
            display_allows_display_sleep: true,
            remaining_seconds: None,
            should_poll_again: false,
            ends_at: None,
        }
    }

    fn indefinite(display_allows_display_sleep: bool) -> Self {
        Self {
            active: true,
            indefinite: true,
            display_allows_display_sleep,
            remaining_seconds: None,
            should_poll_again: false,
            ends_at: None,
        }
    }

    pub fn display_annotation(&self) -> &'static str {
        if self.display_allows_display_sleep {
            " - Display can sleep"
        } else {
            " - Display stays awake"
        }
    }

    /// `"12m 5s left - Display can sleep"` for timed sessions.
    pub fn remaining_text(&self) -> Option<String> {
        self.remaining_seconds
            .map(|seconds| format!("{}{}", format_remaining(seconds), self.display_annotation()))
    }

    /// Headline and detail line describing the session.
    pub fn describe(&self, format: TimeFormat) -> (String, String) {
        if !self.active {
            return (
                "Caffeinate deactivated".to_string(),
                "Run a command to start caffeinate".to_string(),
            );
        }
        match (self.ends_at, self.remaining_text()) {
            (Some(ends_at), Some(remaining)) => (
                format!(
                    "Caffeinate active until {}",
                    format_clock(ends_at.time(), format, false)
                ),
                remaining,
            ),
            _ => (
                "Caffeinate active indefinitely".to_string(),
                format!("Session running indefinitely{}", self.display_annotation()),
            ),
        }
    }
}

/// Options this tool understands from a `caffeinate` command line.
#[derive(Debug, Default, PartialEq, Eq)]
struct CaffeinateArgs<'a> {
    /// Raw value of `-t`; `Some("")` when the flag has no value.
    timeout: Option<&'a str>,
    keeps_display_awake: bool,
}

impl<'a> CaffeinateArgs<'a> {
    /// getopt-style scan: flags may be clustered (`-di`), option values may be
    /// attached (`-t3600`) or separate (`-t 3600`), and the first operand or
    /// `--` ends option parsing.
    fn parse(args: &'a str) -> Self {
        let mut parsed = Self::default();
        let mut tokens = args.split_whitespace();
        while let Some(token) = tokens.next() {
            let Some(flags) = token.strip_prefix('-') else {
                break;
            };
            if flags.is_empty() || flags == "-" {
                break;
            }
            for (index, flag) in flags.char_indices() {
                match flag {
                    't' | 'w' => {
                        let attached = &flags[index + 1..];
                        let value = if attached.is_empty() {
                            tokens.next().unwrap_or("")
                        } else {
                            attached
                        };
                        if flag == 't' {
                            parsed.timeout = Some(value);
                        }
                        break;
                    }
                    'd' => parsed.keeps_display_awake = true,
                    _ => {}
                }
            }
        }
        parsed
    }
}

/// Derives the session status from one snapshot and the current time.
///
/// A missing or stopped process is inactive. A `-t` value that is not a whole
/// number of seconds, or whose end time cannot be represented, leaves the
/// session indefinite.
pub fn derive_status(snapshot: Option<&ProcessSnapshot>, now: DateTime<Local>) -> SessionStatus {
    let Some(snapshot) = snapshot.filter(|snapshot| snapshot.running) else {
        return SessionStatus::inactive();
    };

    let args = CaffeinateArgs::parse(&snapshot.invocation_args);
    let display_allows_display_sleep = !args.keeps_display_awake;

    let Some(raw_timeout) = args.timeout else {
        return SessionStatus::indefinite(display_allows_display_sleep);
    };
    let Some((total_seconds, ends_at)) = timed_end(raw_timeout, snapshot.start_time) else {
        log_warn!(
            "[session] ignoring unusable -t value {:?}; treating session as indefinite",
            raw_timeout
        );
        return SessionStatus::indefinite(display_allows_display_sleep);
    };

    let elapsed_seconds = (now - snapshot.start_time).num_seconds().max(0) as u64;
    let remaining_seconds = total_seconds.saturating_sub(elapsed_seconds);

    SessionStatus {
        active: true,
        indefinite: false,
        display_allows_display_sleep,
        remaining_seconds: Some(remaining_seconds),
        should_poll_again: remaining_seconds <= POLL_WINDOW_SECS,
        ends_at: Some(ends_at),
    }
}

/// Timeout in seconds and the moment it runs out. `None` when the value is
/// not a whole number of seconds or the end lies outside chrono's range.
fn timed_end(raw_timeout: &str, start_time: DateTime<Local>) -> Option<(u64, DateTime<Local>)> {
    let total_seconds = raw_timeout.parse::<u64>().ok()?;
    let ends_at = i64::try_from(total_seconds)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .and_then(|timeout| start_time.checked_add_signed(timeout))?;
    Some((total_seconds, ends_at))
}
