use crate::log_debug;

use super::clock::{convert_to_24h, nearest_future, parse_clock_token, parse_digits, split_meridiem};
use super::instruction::{ClockTime, Instruction};

const ENABLE_LOGS: bool = true;

/// A single-token rule. `None` passes the token on to the next rule;
/// `Some` ends the search, even when the answer is [`Instruction::Invalid`].
type Rule = fn(&str, ClockTime) -> Option<Instruction>;

/// Single-token rules in priority order. First match wins.
const RULES: &[(&str, Rule)] = &[
    ("status", status_keyword),
    ("indefinite", indefinite_keyword),
    ("deactivate", deactivate_keyword),
    ("minutes", plain_minutes),
    ("hours", hour_suffix),
    ("clock", clock_token),
    ("meridiem", meridiem_hour),
    ("bare-hour", bare_hour),
];

/// Normalizes raw launcher input. Never fails: unrecognized input comes back
/// as [`Instruction::Invalid`].
///
/// `now` is the caller's wall-clock reading and is the only outside state
/// the result depends on.
pub fn parse(raw: &str, now: ClockTime) -> Instruction {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    match tokens.as_slice() {
        [] => Instruction::StatusQuery { explicit: false },
        [token] => parse_token(token, now),
        [hours, minutes] => hours_and_minutes(hours, minutes),
        _ => Instruction::Invalid,
    }
}

fn parse_token(token: &str, now: ClockTime) -> Instruction {
    for (name, rule) in RULES {
        if let Some(instruction) = rule(token, now) {
            log_debug!("[parser] {:?} matched rule '{}': {:?}", token, name, instruction);
            return instruction;
        }
    }
    log_debug!("[parser] {:?} matched no rule", token);
    Instruction::Invalid
}

/// `"H M"`: both parts must be plain non-negative integers.
fn hours_and_minutes(hours: &str, minutes: &str) -> Instruction {
    let (Some(hours), Some(minutes)) = (parse_digits::<u64>(hours), parse_digits::<u64>(minutes))
    else {
        return Instruction::Invalid;
    };
    hours
        .checked_mul(60)
        .and_then(|total| total.checked_add(minutes))
        .map_or(Instruction::Invalid, Instruction::minutes)
}

fn status_keyword(token: &str, _now: ClockTime) -> Option<Instruction> {
    (token == "s").then_some(Instruction::StatusQuery { explicit: true })
}

fn indefinite_keyword(token: &str, _now: ClockTime) -> Option<Instruction> {
    (token == "i").then_some(Instruction::Indefinite)
}

fn deactivate_keyword(token: &str, _now: ClockTime) -> Option<Instruction> {
    (token == "d").then_some(Instruction::Deactivate)
}

/// Plain digits are minutes, so `"24"` or `"90"` never reach the hour rules.
fn plain_minutes(token: &str, _now: ClockTime) -> Option<Instruction> {
    parse_digits::<u64>(token).map(Instruction::minutes)
}

/// `"2h"`. A zero hour count is claimed but rejected.
fn hour_suffix(token: &str, _now: ClockTime) -> Option<Instruction> {
    let hours = parse_digits::<u64>(token.strip_suffix('h')?)?;
    if hours == 0 {
        return Some(Instruction::Invalid);
    }
    Some(
        hours
            .checked_mul(60)
            .map_or(Instruction::Invalid, Instruction::minutes),
    )
}

fn clock_token(token: &str, now: ClockTime) -> Option<Instruction> {
    token.contains(':').then(|| parse_clock_token(token, now))
}

/// `"8pm"`, `"11a"`: a 1-2 digit hour in `1..=12` with a marker.
fn meridiem_hour(token: &str, _now: ClockTime) -> Option<Instruction> {
    let (digits, meridiem) = split_meridiem(token)?;
    let hour = match digits.len() {
        1 | 2 => parse_digits::<u32>(digits),
        _ => None,
    };
    Some(match hour {
        Some(hour @ 1..=12) => Instruction::until_hm(convert_to_24h(hour, meridiem), 0),
        _ => Instruction::Invalid,
    })
}

/// A leading 1-2 digit hour followed by anything that is not a digit
/// (`"7."`, `"9ish"`). Resolves to minutes until that hour next strikes.
fn bare_hour(token: &str, now: ClockTime) -> Option<Instruction> {
    let digit_len = token.bytes().take_while(u8::is_ascii_digit).count();
    if !(1..=2).contains(&digit_len) {
        return None;
    }
    let hour = parse_digits::<u32>(&token[..digit_len])?;
    (hour <= 23).then(|| Instruction::minutes(nearest_future(hour, 0, now) as u64))
}
