//! User-defined plotted functions

use serde::{Deserialize, Serialize};

/// Colors offered by the function form
pub const COLORS: [&str; 7] = ["black", "red", "blue", "teal", "orange", "green", "purple"];

/// Line thicknesses offered by the function form
pub const THICKNESSES: [&str; 4] = ["very thin", "thin", "thick", "very thick"];

pub const DEFAULT_DOMAIN: &str = "-10:10";

/// One plotted function and its annotations
///
/// Created and edited by the form UI, read by the generator. `tangent_point`
/// is only consulted when `tangent` is set and must lie within `domain`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FunctionSpec {
    /// Expression in the single free variable `x`
    pub expression: String,
    /// `"min:max"`
    pub domain: String,
    pub show_legend: bool,
    pub fill: bool,
    pub tangent: bool,
    pub dashed: bool,
    pub extrema: bool,
    pub color: String,
    pub thickness: String,
    pub tangent_point: String,
}

impl Default for FunctionSpec {
    fn default() -> Self {
        Self {
            expression: String::new(),
            domain: DEFAULT_DOMAIN.to_string(),
            show_legend: false,
            fill: false,
            tangent: false,
            dashed: false,
            extrema: false,
            color: "black".to_string(),
            thickness: "thin".to_string(),
            tangent_point: String::new(),
        }
    }
}

impl FunctionSpec {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            ..Self::default()
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_thickness(mut self, thickness: impl Into<String>) -> Self {
        self.thickness = thickness.into();
        self
    }

    pub fn with_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_dashed(mut self, dashed: bool) -> Self {
        self.dashed = dashed;
        self
    }

    pub fn with_extrema(mut self, extrema: bool) -> Self {
        self.extrema = extrema;
        self
    }

    /// Enable the tangent annotation at `point`
    pub fn with_tangent_at(mut self, point: impl Into<String>) -> Self {
        self.tangent = true;
        self.tangent_point = point.into();
        self
    }

    /// Tangent requested and a point supplied
    pub fn wants_tangent(&self) -> bool {
        self.tangent && !self.tangent_point.trim().is_empty()
    }
}
