//! Axis labels, limits and style

use super::{text_value, toggle_value};
use tikzplot_settings::prelude::*;

pub fn show_axis_label() -> SettingDescriptor {
    SettingDescriptor::toggle("show_axis_label", true, |value| {
        let text = if toggle_value(value)? { "\n" } else { "" };
        Ok(Fragment::text(text))
    })
    .named("Show axis labels", "Whether to show the axis labels")
    .in_category(Category::Axis)
}

pub fn axis_label_x() -> SettingDescriptor {
    SettingDescriptor::text("axis_label_x", "x", |value| {
        Ok(Fragment::text(format!("\n  xlabel={{{}}},", text_value(value)?)))
    })
    .named("X-Axis Label", "Name displayed for the x-axis")
    .in_category(Category::Axis)
    .shown_if("show_axis_label")
}

pub fn axis_label_y() -> SettingDescriptor {
    SettingDescriptor::text("axis_label_y", "y", |value| {
        Ok(Fragment::text(format!("\n  ylabel={{{}}},", text_value(value)?)))
    })
    .named("Y-Axis Label", "Name displayed for the y-axis")
    .in_category(Category::Axis)
    .shown_if("show_axis_label")
}

/// Axis visibility toggle, reserved: contributes no text
pub fn show_axis() -> SettingDescriptor {
    SettingDescriptor::toggle("showAxis", true, |value| {
        toggle_value(value)?;
        Ok(Fragment::empty())
    })
    .named("Show Axes", "Display coordinate axes")
    .in_category(Category::Axis)
}

// Limits are free text and emitted verbatim
fn limit(key: &str, value: &SettingValue) -> PlotResult<Fragment> {
    Ok(Fragment::text(format!("\n  {}={},", key, text_value(value)?)))
}

pub fn xmin() -> SettingDescriptor {
    SettingDescriptor::text("xmin", "-0.5", |value| limit("xmin", value))
        .named("X-Axis Min", "Minimum value for the x-axis")
        .in_category(Category::Axis)
}

pub fn xmax() -> SettingDescriptor {
    SettingDescriptor::text("xmax", "10", |value| limit("xmax", value))
        .named("X-Axis Max", "Maximum value for the x-axis")
        .in_category(Category::Axis)
}

pub fn ymin() -> SettingDescriptor {
    SettingDescriptor::text("ymin", "-0.5", |value| limit("ymin", value))
        .named("Y-Axis Min", "Minimum value for the y-axis")
        .in_category(Category::Axis)
}

pub fn ymax() -> SettingDescriptor {
    SettingDescriptor::text("ymax", "5", |value| limit("ymax", value))
        .named("Y-Axis Max", "Maximum value for the y-axis")
        .in_category(Category::Axis)
}

/// Closes the axis option list
pub fn axis_allaround() -> SettingDescriptor {
    SettingDescriptor::toggle("axis_allaround", true, |value| {
        let text = if toggle_value(value)? {
            "\n]"
        } else {
            " \n  axis lines = middle,\n]"
        };
        Ok(Fragment::text(text))
    })
    .named("Axis all around", "Whether the axis frames the whole graph")
    .in_category(Category::Axis)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(d: SettingDescriptor, value: impl Into<SettingValue>) -> String {
        d.render(&value.into()).unwrap().text
    }

    #[test]
    fn test_label_fragments() {
        assert_eq!(render(axis_label_x(), "t"), "\n  xlabel={t},");
        assert_eq!(render(axis_label_y(), "f(t)"), "\n  ylabel={f(t)},");
        assert_eq!(render(show_axis_label(), true), "\n");
        assert_eq!(render(show_axis_label(), false), "");
    }

    #[test]
    fn test_labels_are_guarded() {
        assert_eq!(axis_label_x().shown_if, Some("show_axis_label"));
        assert_eq!(axis_label_y().shown_if, Some("show_axis_label"));
        assert_eq!(xmin().shown_if, None);
    }

    #[test]
    fn test_limit_fragments() {
        assert_eq!(render(xmin(), "-0.5"), "\n  xmin=-0.5,");
        assert_eq!(render(xmax(), "10"), "\n  xmax=10,");
        assert_eq!(render(ymin(), "-2"), "\n  ymin=-2,");
        assert_eq!(render(ymax(), "5"), "\n  ymax=5,");
    }

    #[test]
    fn test_axis_allaround() {
        assert_eq!(render(axis_allaround(), true), "\n]");
        assert_eq!(render(axis_allaround(), false), " \n  axis lines = middle,\n]");
    }

    #[test]
    fn test_show_axis_is_silent() {
        assert_eq!(render(show_axis(), false), "");
    }
}
