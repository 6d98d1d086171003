//! tikzplot Settings
//!
//! Descriptors for the configurable options of a plot, the ordered registry
//! that fixes their emission order, and the store of current values.

mod descriptor;
mod registry;
mod store;

pub use descriptor::{
    Category, Fragment, Placement, RenderFn, SettingDescriptor, SettingInfo, SettingKind,
    SliderBounds,
};
pub use registry::SettingRegistry;
pub use store::SettingsStore;

/// Id of the setting holding the plotted function list
pub const FUNCTIONS_ID: &str = "functions";

pub mod prelude {
    pub use crate::{
        Category, Fragment, SettingDescriptor, SettingKind, SettingRegistry, SettingsStore,
        SliderBounds, FUNCTIONS_ID,
    };
    pub use tikzplot_core::prelude::*;
}
