use chrono::{NaiveTime, Timelike};
use serde::Serialize;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// An hour/minute pair on the 24-hour clock.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    /// Reads hour and minute off any chrono time value, dropping seconds.
    pub fn of<T: Timelike>(time: &T) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }

    /// Builds a time from a minute count, wrapping past midnight.
    pub fn from_minutes_of_day(total: u32) -> Self {
        let total = total % MINUTES_PER_DAY;
        Self {
            hour: (total / 60) as u8,
            minute: (total % 60) as u8,
        }
    }

    pub fn hour(&self) -> u32 {
        self.hour as u32
    }

    pub fn minute(&self) -> u32 {
        self.minute as u32
    }

    pub fn minutes_of_day(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }

    /// The clock reading `minutes` after this one.
    pub fn plus_minutes(&self, minutes: u32) -> Self {
        Self::from_minutes_of_day(self.minutes_of_day() + minutes % MINUTES_PER_DAY)
    }

    pub fn to_naive(&self) -> NaiveTime {
        // hour/minute are range-checked by every constructor
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0).unwrap_or(NaiveTime::MIN)
    }
}

/// What the user asked for, normalized from one line of launcher input.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Instruction {
    /// Keep awake for this many minutes from now.
    DurationMinutes { minutes: u64 },
    /// Keep awake until the next occurrence of this wall-clock time.
    AbsoluteTarget { target: ClockTime },
    Indefinite,
    /// `explicit` is false when the status was implied by empty input.
    StatusQuery { explicit: bool },
    Deactivate,
    Invalid,
}

impl Instruction {
    pub fn minutes(minutes: u64) -> Self {
        Instruction::DurationMinutes { minutes }
    }

    pub fn until(target: ClockTime) -> Self {
        Instruction::AbsoluteTarget { target }
    }

    /// Hour/minute convenience for targets known to be in range.
    pub fn until_hm(hour: u32, minute: u32) -> Self {
        match ClockTime::new(hour, minute) {
            Some(target) => Instruction::until(target),
            None => Instruction::Invalid,
        }
    }
}
