//! tikzplot Standard Catalog

pub mod settings;

use tikzplot_settings::SettingRegistry;

/// Load the standard settings into a registry, in emission order
pub fn load_standard_catalog(registry: SettingRegistry) -> SettingRegistry {
    registry
        .with_setting(settings::dimension())
        .with_setting(settings::document_setup())
        .with_setting(settings::title())
        .with_setting(settings::size_x_cm())
        .with_setting(settings::size_y_cm())
        .with_setting(settings::show_axis_label())
        .with_setting(settings::axis_label_x())
        .with_setting(settings::axis_label_y())
        .with_setting(settings::document_close())
        .with_setting(settings::show_axis())
        .with_setting(settings::show_large_grid())
        .with_setting(settings::show_small_grid())
        .with_setting(settings::grid_size())
        .with_setting(settings::xmin())
        .with_setting(settings::xmax())
        .with_setting(settings::ymin())
        .with_setting(settings::ymax())
        .with_setting(settings::axis_allaround())
        .with_setting(settings::functions())
}

/// Create registry with the standard catalog
pub fn standard_registry() -> SettingRegistry {
    load_standard_catalog(SettingRegistry::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tikzplot_settings::{Category, Placement};

    #[test]
    fn test_catalog_order() {
        let ids: Vec<_> = standard_registry().ids().collect();
        assert_eq!(
            ids,
            vec![
                "dimension",
                "documentSetup",
                "title",
                "size_x_cm",
                "size_y_cm",
                "show_axis_label",
                "axis_label_x",
                "axis_label_y",
                "documentClose",
                "showAxis",
                "showLargeGrid",
                "showSmallGrid",
                "gridSize",
                "xmin",
                "xmax",
                "ymin",
                "ymax",
                "axis_allaround",
                "functions",
            ]
        );
    }

    #[test]
    fn test_exactly_one_bookend_each() {
        let registry = standard_registry();
        let leading = registry.iter().filter(|d| d.placement == Placement::Leading).count();
        let trailing = registry.iter().filter(|d| d.placement == Placement::Trailing).count();
        assert_eq!((leading, trailing), (1, 1));
        assert_eq!(registry.leading().unwrap().id, "documentSetup");
        assert_eq!(registry.trailing().unwrap().id, "documentClose");
    }

    #[test]
    fn test_guards_reference_registered_toggles() {
        let registry = standard_registry();
        for d in registry.iter() {
            if let Some(guard) = d.shown_if {
                let toggle = registry.get(guard).expect("guard must be registered");
                assert!(toggle.default.as_bool().is_some(), "{} guards on non-toggle {}", d.id, guard);
            }
        }
    }

    #[test]
    fn test_categories() {
        let registry = standard_registry();
        let grid: Vec<_> = registry.catalog(Some(Category::Grid)).into_iter().map(|i| i.id).collect();
        assert_eq!(grid, vec!["showLargeGrid", "showSmallGrid", "gridSize"]);
        assert_eq!(registry.catalog(Some(Category::Function)).len(), 1);
    }

    #[test]
    fn test_every_default_renders() {
        for d in standard_registry().iter() {
            assert!(d.render(&d.default).is_ok(), "default of {} failed to render", d.id);
        }
    }
}
