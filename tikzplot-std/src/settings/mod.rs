//! Standard setting descriptors

mod axis;
mod basic;
mod document;
mod functions;
mod grid;

pub use axis::*;
pub use basic::*;
pub use document::*;
pub use functions::*;
pub use grid::*;

use tikzplot_core::{ErrorKind, PlotError, PlotResult, SettingValue};

fn mismatch(expected: &str, value: &SettingValue) -> PlotError {
    PlotError::new(
        ErrorKind::TypeMismatch,
        format!("expected {}, got {}", expected, value.type_name()),
    )
}

pub(crate) fn toggle_value(value: &SettingValue) -> PlotResult<bool> {
    value.as_bool().ok_or_else(|| mismatch("Bool", value))
}

pub(crate) fn text_value(value: &SettingValue) -> PlotResult<&str> {
    value.as_text().ok_or_else(|| mismatch("Text", value))
}

pub(crate) fn number_value(value: &SettingValue) -> PlotResult<f64> {
    value.as_number().ok_or_else(|| mismatch("Number", value))
}
