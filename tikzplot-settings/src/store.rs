//! Current setting values

use crate::descriptor::SettingDescriptor;
use crate::registry::SettingRegistry;
use crate::FUNCTIONS_ID;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tikzplot_core::{FunctionSpec, PlotResult, SettingValue};
use tracing::debug;

/// Values of every registered setting, starting from the defaults
///
/// Every write is validated against the descriptor. A rejected write leaves
/// the store unchanged.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    registry: Arc<SettingRegistry>,
    values: HashMap<&'static str, SettingValue>,
}

impl SettingsStore {
    pub fn new(registry: Arc<SettingRegistry>) -> Self {
        let values = registry.iter().map(|d| (d.id, d.default.clone())).collect();
        Self { registry, values }
    }

    pub fn registry(&self) -> &Arc<SettingRegistry> {
        &self.registry
    }

    pub fn get_value(&self, id: &str) -> PlotResult<&SettingValue> {
        let descriptor = self.registry.require(id)?;
        Ok(self.value_of(descriptor))
    }

    /// Value of a registered descriptor, its default if never set
    pub fn value_of<'a>(&'a self, descriptor: &'a SettingDescriptor) -> &'a SettingValue {
        self.values.get(descriptor.id).unwrap_or(&descriptor.default)
    }

    pub fn set_value(&mut self, id: &str, value: impl Into<SettingValue>) -> PlotResult<()> {
        let value = value.into();
        let descriptor = self.registry.require(id)?;
        descriptor.validate(&value)?;
        debug!(setting = descriptor.id, %value, "setting updated");
        self.values.insert(descriptor.id, value);
        Ok(())
    }

    pub fn set_functions(&mut self, functions: Vec<FunctionSpec>) -> PlotResult<()> {
        self.set_value(FUNCTIONS_ID, functions)
    }

    /// Plotted functions, empty when the catalog has no function list
    pub fn functions(&self) -> &[FunctionSpec] {
        self.values
            .get(FUNCTIONS_ID)
            .and_then(SettingValue::as_functions)
            .unwrap_or(&[])
    }

    /// True only when `id` is a toggle currently set to true
    pub fn is_enabled(&self, id: &str) -> bool {
        self.values.get(id).map_or(false, SettingValue::is_enabled)
    }

    /// Whether the guard toggle of `descriptor`, if any, is on
    pub fn is_visible(&self, descriptor: &SettingDescriptor) -> bool {
        descriptor.shown_if.map_or(true, |guard| self.is_enabled(guard))
    }

    pub fn reset(&mut self, id: &str) -> PlotResult<()> {
        let descriptor = self.registry.require(id)?;
        self.values.insert(descriptor.id, descriptor.default.clone());
        Ok(())
    }

    pub fn reset_all(&mut self) {
        for descriptor in self.registry.iter() {
            self.values.insert(descriptor.id, descriptor.default.clone());
        }
    }

    /// Current values keyed by id, sorted for stable output
    pub fn snapshot(&self) -> BTreeMap<String, SettingValue> {
        self.values
            .iter()
            .map(|(id, value)| (id.to_string(), value.clone()))
            .collect()
    }
}
