use chrono::NaiveTime;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TimeFormat {
    /// `h:mm AM`
    TwelveHour,
    /// `HH:mm`
    TwentyFourHour,
}

impl Default for TimeFormat {
    fn default() -> Self {
        TimeFormat::TwelveHour
    }
}

impl TimeFormat {
    fn pattern(self, with_seconds: bool) -> &'static str {
        match (self, with_seconds) {
            (TimeFormat::TwelveHour, false) => "%-I:%M %p",
            (TimeFormat::TwelveHour, true) => "%-I:%M:%S %p",
            (TimeFormat::TwentyFourHour, false) => "%H:%M",
            (TimeFormat::TwentyFourHour, true) => "%H:%M:%S",
        }
    }
}

/// Renders a time of day, e.g. `7:05 PM` or `19:05:00`.
pub fn format_clock(time: NaiveTime, format: TimeFormat, with_seconds: bool) -> String {
    time.format(format.pattern(with_seconds))
        .to_string()
        .trim_start()
        .to_string()
}

/// `"45s left"`, `"12m 5s left"`, `"2h 10m left"`.
pub fn format_remaining(seconds: u64) -> String {
    if seconds < 60 {
        return format!("{seconds}s left");
    }
    if seconds < 3600 {
        let (m, s) = (seconds / 60, seconds % 60);
        return match s {
            0 => format!("{m}m left"),
            _ => format!("{m}m {s}s left"),
        };
    }
    let (h, m) = (seconds / 3600, (seconds % 3600) / 60);
    match m {
        0 => format!("{h}h left"),
        _ => format!("{h}h {m}m left"),
    }
}

/// Spelled-out duration, e.g. `"1 hour 5 minutes"`.
pub fn format_duration(total_minutes: u64) -> String {
    let (hours, minutes) = (total_minutes / 60, total_minutes % 60);
    let h_text = plural(hours, "hour");
    let m_text = plural(minutes, "minute");
    match (hours, minutes) {
        (0, _) => m_text,
        (_, 0) => h_text,
        _ => format!("{h_text} {m_text}"),
    }
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn twelve_hour_has_no_leading_padding() {
        assert_eq!(format_clock(hms(7, 5, 0), TimeFormat::TwelveHour, false), "7:05 AM");
        assert_eq!(format_clock(hms(19, 5, 9), TimeFormat::TwelveHour, true), "7:05:09 PM");
        assert_eq!(format_clock(hms(0, 0, 0), TimeFormat::TwelveHour, false), "12:00 AM");
        assert_eq!(format_clock(hms(12, 30, 0), TimeFormat::TwelveHour, false), "12:30 PM");
    }

    #[test]
    fn twenty_four_hour_is_zero_padded() {
        assert_eq!(format_clock(hms(7, 5, 0), TimeFormat::TwentyFourHour, false), "07:05");
        assert_eq!(format_clock(hms(19, 5, 9), TimeFormat::TwentyFourHour, true), "19:05:09");
    }

    #[test]
    fn remaining_under_a_minute() {
        assert_eq!(format_remaining(0), "0s left");
        assert_eq!(format_remaining(59), "59s left");
    }

    #[test]
    fn remaining_under_an_hour_drops_zero_seconds() {
        assert_eq!(format_remaining(60), "1m left");
        assert_eq!(format_remaining(300), "5m left");
        assert_eq!(format_remaining(725), "12m 5s left");
        assert_eq!(format_remaining(3599), "59m 59s left");
    }

    #[test]
    fn remaining_hours_drop_zero_minutes_and_seconds() {
        assert_eq!(format_remaining(3600), "1h left");
        assert_eq!(format_remaining(7200), "2h left");
        assert_eq!(format_remaining(7859), "2h 10m left");
    }

    #[test]
    fn durations_are_spelled_out() {
        assert_eq!(format_duration(0), "0 minutes");
        assert_eq!(format_duration(1), "1 minute");
        assert_eq!(format_duration(45), "45 minutes");
        assert_eq!(format_duration(60), "1 hour");
        assert_eq!(format_duration(120), "2 hours");
        assert_eq!(format_duration(61), "1 hour 1 minute");
        assert_eq!(format_duration(150), "2 hours 30 minutes");
    }
}
