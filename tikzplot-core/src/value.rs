//! Setting values
//!
//! A value is a toggle state, a slider position, a text entry or the list of
//! plotted functions. Each descriptor accepts exactly one variant: the one
//! of its default.

use crate::{format_number, FunctionSpec};
use serde::{Deserialize, Serialize};

/// Current value of one setting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Functions(Vec<FunctionSpec>),
}

impl SettingValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            SettingValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SettingValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_functions(&self) -> Option<&[FunctionSpec]> {
        match self {
            SettingValue::Functions(f) => Some(f),
            _ => None,
        }
    }

    /// Toggle guard semantics: only `Bool(true)` enables
    pub fn is_enabled(&self) -> bool {
        self.as_bool().unwrap_or(false)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            SettingValue::Bool(_) => "Bool",
            SettingValue::Number(_) => "Number",
            SettingValue::Text(_) => "Text",
            SettingValue::Functions(_) => "Functions",
        }
    }

    pub fn same_variant(&self, other: &SettingValue) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl std::fmt::Display for SettingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingValue::Bool(b) => write!(f, "{}", b),
            SettingValue::Number(n) => f.write_str(&format_number(*n)),
            SettingValue::Text(s) => f.write_str(s),
            SettingValue::Functions(list) => write!(f, "[{} functions]", list.len()),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(b: bool) -> Self {
        SettingValue::Bool(b)
    }
}

impl From<f64> for SettingValue {
    fn from(n: f64) -> Self {
        SettingValue::Number(n)
    }
}

impl From<i32> for SettingValue {
    fn from(n: i32) -> Self {
        SettingValue::Number(f64::from(n))
    }
}

impl From<&str> for SettingValue {
    fn from(s: &str) -> Self {
        SettingValue::Text(s.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(s: String) -> Self {
        SettingValue::Text(s)
    }
}

impl From<Vec<FunctionSpec>> for SettingValue {
    fn from(list: Vec<FunctionSpec>) -> Self {
        SettingValue::Functions(list)
    }
}
