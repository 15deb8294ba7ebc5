use serde::Serialize;

use crate::session::DEFAULT_PROCESS_NAME;
use crate::timefmt::TimeFormat;

/// `"1"` selects 24-hour times; anything else keeps 12-hour times.
pub const TIME_FORMAT_VAR: &str = "alfred_time_format";
/// Overrides the name of the keep-awake process to inspect.
pub const PROCESS_NAME_VAR: &str = "CAFFEINE_DOSE_PROCESS";

/// Configuration resolved once per invocation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub time_format: TimeFormat,
    pub process_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            time_format: TimeFormat::default(),
            process_name: DEFAULT_PROCESS_NAME.into(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let time_format = match lookup(TIME_FORMAT_VAR).as_deref().map(str::trim) {
            Some("1") => TimeFormat::TwentyFourHour,
            _ => TimeFormat::TwelveHour,
        };
        let process_name = lookup(PROCESS_NAME_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_PROCESS_NAME.into());

        Self {
            time_format,
            process_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_with(vars: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_twelve_hour_caffeinate() {
        assert_eq!(settings_with(&[]), Settings::default());
        assert_eq!(Settings::default().process_name, "caffeinate");
    }

    #[test]
    fn one_selects_twenty_four_hour() {
        let settings = settings_with(&[(TIME_FORMAT_VAR, "1")]);
        assert_eq!(settings.time_format, TimeFormat::TwentyFourHour);
        let settings = settings_with(&[(TIME_FORMAT_VAR, "0")]);
        assert_eq!(settings.time_format, TimeFormat::TwelveHour);
        let settings = settings_with(&[(TIME_FORMAT_VAR, "yes")]);
        assert_eq!(settings.time_format, TimeFormat::TwelveHour);
    }

    #[test]
    fn blank_process_override_is_ignored() {
        assert_eq!(settings_with(&[(PROCESS_NAME_VAR, "  ")]).process_name, "caffeinate");
        assert_eq!(settings_with(&[(PROCESS_NAME_VAR, "amphetamine")]).process_name, "amphetamine");
    }
}
