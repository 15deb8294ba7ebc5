use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::Serialize;

pub const ICON_PATH: &str = "icon.png";

/// Workflow variable the runner reads to decide whether to pass `-d`.
pub const DISPLAY_SLEEP_VAR: &str = "display_sleep_allow";

/// Top-level Alfred script filter payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScriptFilter {
    pub items: Vec<Item>,
    /// Seconds after which Alfred re-runs the filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rerun: Option<f64>,
}

impl ScriptFilter {
    pub fn single(item: Item) -> Self {
        Self {
            items: vec![item],
            rerun: None,
        }
    }

    pub fn rerun_after(mut self, seconds: f64) -> Self {
        self.rerun = Some(seconds);
        self
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize script filter response")
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Item {
    pub title: String,
    pub subtitle: String,
    pub arg: String,
    pub icon: Icon,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mods: Option<Mods>,
}

impl Item {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>, arg: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            arg: arg.into(),
            icon: Icon {
                path: ICON_PATH.into(),
            },
            valid: true,
            mods: None,
        }
    }

    /// Shown but not actionable.
    pub fn inert(mut self) -> Self {
        self.valid = false;
        self
    }

    /// ⌘-modifier that starts the same session but lets the display sleep.
    pub fn with_display_sleep_modifier(mut self) -> Self {
        let variables = BTreeMap::from([(DISPLAY_SLEEP_VAR.to_string(), "true".to_string())]);
        self.mods = Some(Mods {
            cmd: Modifier {
                subtitle: "⌘ Allow display sleep".into(),
                arg: self.arg.clone(),
                variables,
            },
        });
        self
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Icon {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Mods {
    pub cmd: Modifier,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Modifier {
    pub subtitle: String,
    pub arg: String,
    pub variables: BTreeMap<String, String>,
}
