//! Title and picture size

use super::{number_value, text_value};
use tikzplot_settings::prelude::*;

const SIZE_BOUNDS: SliderBounds = SliderBounds {
    min: 1.0,
    max: 20.0,
    step: 1.0,
};

pub fn title() -> SettingDescriptor {
    SettingDescriptor::text("title", "My graph: \\(\\sum\\)", |value| {
        Ok(Fragment::text(format!("\n  title={{{}}},", text_value(value)?)))
    })
    .named("Title", "Name displayed above the graph")
    .in_category(Category::Basic)
}

fn render_width(value: &SettingValue) -> PlotResult<Fragment> {
    let cm = format_number(number_value(value)?);
    Ok(Fragment::text(format!("\n  width={{{}cm}},", cm)))
}

fn render_height(value: &SettingValue) -> PlotResult<Fragment> {
    let cm = format_number(number_value(value)?);
    Ok(Fragment::text(format!("\n  height={{{}cm}},", cm)))
}

pub fn size_x_cm() -> SettingDescriptor {
    SettingDescriptor::slider("size_x_cm", 10.0, SIZE_BOUNDS, render_width)
        .named("Display size width", "Width of the final image in cm")
        .in_category(Category::Basic)
}

pub fn size_y_cm() -> SettingDescriptor {
    SettingDescriptor::slider("size_y_cm", 10.0, SIZE_BOUNDS, render_height)
        .named("Display size height", "Height of the final image in cm")
        .in_category(Category::Basic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_fragment() {
        let text = title().render(&SettingValue::from("T")).unwrap().text;
        assert_eq!(text, "\n  title={T},");
    }

    #[test]
    fn test_default_title_keeps_latex() {
        let d = title();
        let text = d.render(&d.default).unwrap().text;
        assert_eq!(text, "\n  title={My graph: \\(\\sum\\)},");
    }

    #[test]
    fn test_size_fragments() {
        assert_eq!(size_x_cm().render(&SettingValue::from(10.0)).unwrap().text, "\n  width={10cm},");
        assert_eq!(size_y_cm().render(&SettingValue::from(7.5)).unwrap().text, "\n  height={7.5cm},");
    }

    #[test]
    fn test_size_bounds() {
        let d = size_x_cm();
        assert!(d.validate(&SettingValue::from(20)).is_ok());
        assert!(d.validate(&SettingValue::from(0)).is_err());
        assert!(d.validate(&SettingValue::from(21)).is_err());
    }
}
