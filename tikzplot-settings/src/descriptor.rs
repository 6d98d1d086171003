//! Setting descriptors

use serde::Serialize;
use tikzplot_core::{PlotError, PlotResult, SettingValue};

/// Section a setting is grouped under in the form UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Basic,
    Axis,
    Function,
    Shapes,
    Grid,
    Style,
    Other,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Basic => "basic",
            Category::Axis => "axis",
            Category::Function => "function",
            Category::Shapes => "shapes",
            Category::Grid => "grid",
            Category::Style => "style",
            Category::Other => "other",
        }
    }

    pub fn from_name(name: &str) -> Option<Category> {
        let category = match name {
            "basic" => Category::Basic,
            "axis" => Category::Axis,
            "function" => Category::Function,
            "shapes" => Category::Shapes,
            "grid" => Category::Grid,
            "style" => Category::Style,
            "other" => Category::Other,
            _ => return None,
        };
        Some(category)
    }
}

/// Widget kind the UI renders for a setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingKind {
    Toggle,
    Text,
    Slider,
    Dropdown,
    Color,
}

/// Numeric range of a slider
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SliderBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderBounds {
    /// Whether `value` sits on the grid `min + k * step`
    pub fn allows(&self, value: f64) -> bool {
        if self.step <= 0.0 {
            return true;
        }
        let steps = (value - self.min) / self.step;
        (steps - steps.round()).abs() < 1e-9
    }
}

/// Where a fragment goes in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Emitted before the walk, only when enabled
    Leading,
    /// Emitted in registry order
    Inline,
    /// Emitted after the walk, only when enabled
    Trailing,
}

/// Text contributed by one setting, plus failures isolated while building it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
    pub text: String,
    pub issues: Vec<PlotError>,
}

impl Fragment {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            issues: Vec::new(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_issues(text: impl Into<String>, issues: Vec<PlotError>) -> Self {
        Self {
            text: text.into(),
            issues,
        }
    }
}

/// Pure rendering rule: current value to markup
pub type RenderFn = fn(&SettingValue) -> PlotResult<Fragment>;

/// Static metadata and rendering rule for one configurable option
#[derive(Debug, Clone)]
pub struct SettingDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub kind: SettingKind,
    pub default: SettingValue,
    pub bounds: Option<SliderBounds>,
    pub options: &'static [&'static str],
    pub placement: Placement,
    /// Toggle that must be on for this fragment to be emitted
    pub shown_if: Option<&'static str>,
    render: RenderFn,
}

impl SettingDescriptor {
    pub fn new(id: &'static str, kind: SettingKind, default: SettingValue, render: RenderFn) -> Self {
        Self {
            id,
            name: id,
            description: "",
            category: Category::Other,
            kind,
            default,
            bounds: None,
            options: &[],
            placement: Placement::Inline,
            shown_if: None,
            render,
        }
    }

    pub fn toggle(id: &'static str, default: bool, render: RenderFn) -> Self {
        Self::new(id, SettingKind::Toggle, SettingValue::Bool(default), render)
    }

    pub fn text(id: &'static str, default: &str, render: RenderFn) -> Self {
        Self::new(id, SettingKind::Text, SettingValue::Text(default.to_string()), render)
    }

    pub fn slider(id: &'static str, default: f64, bounds: SliderBounds, render: RenderFn) -> Self {
        let mut descriptor = Self::new(id, SettingKind::Slider, SettingValue::Number(default), render);
        descriptor.bounds = Some(bounds);
        descriptor
    }

    pub fn dropdown(
        id: &'static str,
        default: &str,
        options: &'static [&'static str],
        render: RenderFn,
    ) -> Self {
        let mut descriptor =
            Self::new(id, SettingKind::Dropdown, SettingValue::Text(default.to_string()), render);
        descriptor.options = options;
        descriptor
    }

    pub fn color(id: &'static str, default: &str, render: RenderFn) -> Self {
        Self::new(id, SettingKind::Color, SettingValue::Text(default.to_string()), render)
    }

    /// Text-kind setting holding the plotted function list
    pub fn function_list(id: &'static str, render: RenderFn) -> Self {
        Self::new(id, SettingKind::Text, SettingValue::Functions(Vec::new()), render)
    }

    pub fn named(mut self, name: &'static str, description: &'static str) -> Self {
        self.name = name;
        self.description = description;
        self
    }

    pub fn in_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn leading(mut self) -> Self {
        self.placement = Placement::Leading;
        self
    }

    pub fn trailing(mut self) -> Self {
        self.placement = Placement::Trailing;
        self
    }

    pub fn shown_if(mut self, toggle_id: &'static str) -> Self {
        self.shown_if = Some(toggle_id);
        self
    }

    pub fn is_bookend(&self) -> bool {
        self.placement != Placement::Inline
    }

    /// Check a candidate value against variant, bounds and options
    pub fn validate(&self, value: &SettingValue) -> PlotResult<()> {
        if !value.same_variant(&self.default) {
            return Err(PlotError::type_mismatch(
                self.id,
                self.default.type_name(),
                value.type_name(),
            ));
        }

        if let (Some(bounds), Some(n)) = (self.bounds, value.as_number()) {
            if !n.is_finite() {
                return Err(PlotError::type_mismatch(self.id, "a finite number", &n.to_string()));
            }
            if n < bounds.min || n > bounds.max {
                return Err(PlotError::out_of_range(self.id, n, bounds.min, bounds.max));
            }
            if !bounds.allows(n) {
                return Err(PlotError::off_step(self.id, n, bounds.min, bounds.step));
            }
        }

        if !self.options.is_empty() {
            if let Some(text) = value.as_text() {
                if !self.options.contains(&text) {
                    return Err(PlotError::type_mismatch(
                        self.id,
                        &format!("one of {}", self.options.join(", ")),
                        &format!("'{}'", text),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Render the fragment for `value`
    ///
    /// A value of the wrong variant is rejected instead of being coerced.
    pub fn render(&self, value: &SettingValue) -> PlotResult<Fragment> {
        if !value.same_variant(&self.default) {
            return Err(PlotError::type_mismatch(
                self.id,
                self.default.type_name(),
                value.type_name(),
            ));
        }
        (self.render)(value).map_err(|e| e.in_setting(self.id))
    }

    pub fn info(&self) -> SettingInfo {
        SettingInfo {
            id: self.id,
            name: self.name,
            description: self.description,
            category: self.category,
            kind: self.kind,
            default: self.default.clone(),
            bounds: self.bounds,
            options: self.options,
            placement: self.placement,
            shown_if: self.shown_if,
        }
    }
}

/// Serializable listing entry for a descriptor
#[derive(Debug, Clone, Serialize)]
pub struct SettingInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub kind: SettingKind,
    pub default: SettingValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<SliderBounds>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub options: &'static [&'static str],
    pub placement: Placement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shown_if: Option<&'static str>,
}
