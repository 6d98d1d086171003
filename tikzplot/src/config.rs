//! Plot configuration files

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tikzplot_core::{FunctionSpec, PlotError, PlotResult, SettingValue};

/// Setting values and functions to apply to a session
///
/// ```json
/// { "settings": { "title": "T", "showSmallGrid": true },
///   "functions": [ { "expression": "x^2", "showLegend": true } ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub settings: BTreeMap<String, SettingValue>,
    pub functions: Vec<FunctionSpec>,
}

impl PlotConfig {
    pub fn from_json(text: &str) -> PlotResult<Self> {
        serde_json::from_str(text).map_err(|e| PlotError::invalid_config(e.to_string()))
    }

    pub fn to_json(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| PlotError::internal(e.to_string()))
    }
}
