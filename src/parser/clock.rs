use std::str::FromStr;

use super::instruction::{ClockTime, Instruction, MINUTES_PER_DAY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

/// Splits a trailing `a`, `p`, `am` or `pm` (any case) off `token`.
pub fn split_meridiem(token: &str) -> Option<(&str, Meridiem)> {
    let lower = token.to_ascii_lowercase();
    let (cut, meridiem) = if lower.ends_with("am") {
        (2, Meridiem::Am)
    } else if lower.ends_with("pm") {
        (2, Meridiem::Pm)
    } else if lower.ends_with('a') {
        (1, Meridiem::Am)
    } else if lower.ends_with('p') {
        (1, Meridiem::Pm)
    } else {
        return None;
    };
    // the marker is ASCII, so the cut lands on a char boundary
    Some((&token[..token.len() - cut], meridiem))
}

/// 12-hour to 24-hour conversion. Hours the marker cannot apply to pass
/// through unchanged.
pub fn convert_to_24h(hour: u32, meridiem: Meridiem) -> u32 {
    match meridiem {
        Meridiem::Pm if hour < 12 => hour + 12,
        Meridiem::Am if hour == 12 => 0,
        _ => hour,
    }
}

/// Minutes from `now` until `hour:minute` next comes around, reading `hour`
/// as either half of the day when it is ambiguous.
///
/// The result is always in `1..=1440`; a target equal to `now` lands on
/// tomorrow.
pub fn nearest_future(hour: u32, minute: u32, now: ClockTime) -> u32 {
    let current = now.minutes_of_day() as i64;
    let am_hour = if hour == 12 { 0 } else { hour };
    let pm_hour = if hour < 12 { hour + 12 } else { hour };
    let am_diff = (am_hour * 60 + minute) as i64 - current;
    let pm_diff = (pm_hour * 60 + minute) as i64 - current;

    let minutes = if am_diff < 0 && pm_diff > 0 {
        pm_diff
    } else if am_diff > 0 {
        am_diff
    } else {
        am_diff + MINUTES_PER_DAY as i64
    };
    minutes as u32
}

/// Parses ASCII digits only; signs, blanks and overflow are rejected.
pub fn parse_digits<T: FromStr>(raw: &str) -> Option<T> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Resolves a token containing `:`. Once a token reaches here it is either a
/// clock target or invalid.
pub fn parse_clock_token(token: &str, now: ClockTime) -> Instruction {
    if let Some(hour_part) = token.strip_suffix(':') {
        if !hour_part.contains(':') {
            return on_the_hour(hour_part, now);
        }
    }

    let mut parts = token.split(':');
    let (Some(hour_part), Some(minute_part), None) = (parts.next(), parts.next(), parts.next())
    else {
        return Instruction::Invalid;
    };

    let (minute_part, meridiem) = match split_meridiem(minute_part) {
        Some((digits, meridiem)) => (digits, Some(meridiem)),
        None => (minute_part, None),
    };

    let (Some(hour), Some(minute)) = (
        parse_digits::<u32>(hour_part),
        parse_digits::<u32>(minute_part),
    ) else {
        return Instruction::Invalid;
    };
    if hour > 23 || minute > 59 {
        return Instruction::Invalid;
    }

    match meridiem {
        Some(meridiem) => Instruction::until_hm(convert_to_24h(hour, meridiem), minute),
        None => {
            let ahead = nearest_future(hour, minute, now);
            Instruction::until(now.plus_minutes(ahead))
        }
    }
}

/// `"H:"` means the next `H:00`.
fn on_the_hour(hour_part: &str, now: ClockTime) -> Instruction {
    match parse_digits::<u32>(hour_part) {
        Some(hour) if hour <= 23 => {
            let ahead = nearest_future(hour, 0, now);
            let reached = now.plus_minutes(ahead);
            Instruction::until_hm(reached.hour(), 0)
        }
        _ => Instruction::Invalid,
    }
}
