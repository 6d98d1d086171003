//! Grid lines

use super::{number_value, toggle_value};
use tikzplot_settings::prelude::*;

pub fn show_large_grid() -> SettingDescriptor {
    SettingDescriptor::toggle("showLargeGrid", false, |value| {
        let text = if toggle_value(value)? { "\n   grid=major," } else { "\n" };
        Ok(Fragment::text(text))
    })
    .named("Show large grid", "Display the major coordinate grid")
    .in_category(Category::Grid)
}

pub fn show_small_grid() -> SettingDescriptor {
    SettingDescriptor::toggle("showSmallGrid", false, |value| {
        let text = if toggle_value(value)? { "\n grid=both," } else { "" };
        Ok(Fragment::text(text))
    })
    .named("Show small grid", "Display the minor coordinate grid")
    .in_category(Category::Grid)
}

/// Minor ticks between major ticks, only with the small grid on
pub fn grid_size() -> SettingDescriptor {
    let bounds = SliderBounds {
        min: 1.0,
        max: 10.0,
        step: 1.0,
    };
    SettingDescriptor::slider("gridSize", 5.0, bounds, |value| {
        let ticks = format_number(number_value(value)?);
        Ok(Fragment::text(format!("\n  minor tick num={},", ticks)))
    })
    .named("Grid Size", "Number of minor ticks between major ticks")
    .in_category(Category::Grid)
    .shown_if("showSmallGrid")
}
