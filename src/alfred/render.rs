use chrono::{DateTime, Local, TimeDelta};

use crate::parser::{ClockTime, Instruction};
use crate::session::SessionStatus;
use crate::timefmt::{format_clock, format_duration, TimeFormat};

use super::response::{Item, ScriptFilter};

/// How soon Alfred should refresh a result whose text depends on the clock.
const RERUN_SECS: f64 = 1.0;

/// The string the runner script receives for an instruction.
pub fn action_arg(instruction: &Instruction) -> String {
    match instruction {
        Instruction::DurationMinutes { minutes } => minutes.to_string(),
        Instruction::AbsoluteTarget { target } => {
            format!("TIME:{:02}:{:02}", target.hour(), target.minute())
        }
        Instruction::Indefinite => "indefinite".into(),
        Instruction::StatusQuery { .. } => "status".into(),
        Instruction::Deactivate => "deactivate".into(),
        Instruction::Invalid => "0".into(),
    }
}

/// Builds the filter response for one parsed instruction.
///
/// `status` is only called for instructions that depend on the running
/// session (status queries and deactivation).
pub fn filter_response<F>(
    instruction: &Instruction,
    status: F,
    now: DateTime<Local>,
    format: TimeFormat,
) -> ScriptFilter
where
    F: FnOnce() -> SessionStatus,
{
    match *instruction {
        Instruction::Invalid | Instruction::DurationMinutes { minutes: 0 } => invalid_response(),
        Instruction::DurationMinutes { minutes } => duration_response(minutes, now, format),
        Instruction::AbsoluteTarget { target } => target_response(target, format),
        Instruction::Indefinite => ScriptFilter::single(
            Item::new(
                "Active indefinitely",
                "Keep your Mac awake until manually disabled",
                action_arg(instruction),
            )
            .with_display_sleep_modifier(),
        ),
        Instruction::Deactivate => deactivate_response(&status()),
        Instruction::StatusQuery { explicit: false } => summary_response(&status(), format),
        Instruction::StatusQuery { explicit: true } => details_response(&status(), format),
    }
}

/// Single on/off item for the toggle keyword.
pub fn toggle_response(status: &SessionStatus) -> ScriptFilter {
    let item = if status.active {
        Item::new("Turn Off", "Allow computer to sleep", "off")
    } else {
        Item::new("Turn On", "Prevent sleep indefinitely", "on").with_display_sleep_modifier()
    };
    ScriptFilter::single(item)
}

fn invalid_response() -> ScriptFilter {
    ScriptFilter::single(Item::new(
        "Invalid input",
        "Please provide a valid time format",
        action_arg(&Instruction::Invalid),
    ))
}

fn duration_response(minutes: u64, now: DateTime<Local>, format: TimeFormat) -> ScriptFilter {
    let ends_at = i64::try_from(minutes)
        .ok()
        .and_then(TimeDelta::try_minutes)
        .and_then(|span| now.checked_add_signed(span));
    let Some(ends_at) = ends_at else {
        return invalid_response();
    };

    let item = Item::new(
        format!("Active for {}", format_duration(minutes)),
        format!(
            "Keep awake until around {}",
            format_clock(ends_at.time(), format, true)
        ),
        action_arg(&Instruction::minutes(minutes)),
    )
    .with_display_sleep_modifier();
    ScriptFilter::single(item).rerun_after(RERUN_SECS)
}

fn target_response(target: ClockTime, format: TimeFormat) -> ScriptFilter {
    let item = Item::new(
        format!("Active until {}", format_clock(target.to_naive(), format, false)),
        "Keep awake until specified time",
        action_arg(&Instruction::until(target)),
    )
    .with_display_sleep_modifier();
    ScriptFilter::single(item)
}

fn deactivate_response(status: &SessionStatus) -> ScriptFilter {
    let arg = action_arg(&Instruction::Deactivate);
    let item = if status.active {
        Item::new("Deactivate caffeinate", "Stop keeping your Mac awake", arg)
    } else {
        Item::new("Caffeinate already deactivated", "No active session to stop", arg).inert()
    };
    ScriptFilter::single(item)
}

fn summary_response(status: &SessionStatus, format: TimeFormat) -> ScriptFilter {
    let arg = action_arg(&Instruction::StatusQuery { explicit: false });
    let item = if status.active {
        let (title, _) = status.describe(format);
        Item::new(title, "Define a new time or press 's' for details", arg)
    } else {
        Item::new(
            "Caffeine Dose",
            "Caffeinate deactivated • Set a time to keep your Mac awake",
            arg,
        )
    };
    ScriptFilter::single(item.inert())
}

fn details_response(status: &SessionStatus, format: TimeFormat) -> ScriptFilter {
    let (title, subtitle) = status.describe(format);
    let response = ScriptFilter::single(Item::new(
        title,
        subtitle,
        action_arg(&Instruction::StatusQuery { explicit: true }),
    ));
    if status.should_poll_again {
        response.rerun_after(RERUN_SECS)
    } else {
        response
    }
}
