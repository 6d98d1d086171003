//! Document generator
//!
//! Walks the registry in order over the current store values.

use crate::render::tidy;
use serde::Serialize;
use tikzplot_core::{PlotError, SettingValue};
use tikzplot_settings::{SettingDescriptor, SettingsStore};
use tracing::{debug, trace, warn};

/// Result of one generation pass
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResult {
    /// Raw TikZ source
    pub source: String,
    /// Failures isolated during generation
    pub errors: Vec<PlotError>,
}

impl GenerateResult {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Normalized source
    pub fn tidy(&self) -> String {
        tidy(&self.source)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Generator;

impl Generator {
    pub fn new() -> Self {
        Self
    }

    /// Generate the document for the store's current values
    ///
    /// The leading bookend is emitted first and the trailing bookend last,
    /// each only when enabled. Inline settings follow registry order and are
    /// skipped while their guard toggle is off.
    pub fn generate(&self, store: &SettingsStore) -> GenerateResult {
        let registry = store.registry();
        let mut out = GenerateResult {
            source: String::new(),
            errors: Vec::new(),
        };

        if let Some(leading) = registry.leading() {
            if store.is_enabled(leading.id) {
                self.emit(leading, &SettingValue::Bool(true), &mut out);
            }
        }

        for descriptor in registry.iter().filter(|d| !d.is_bookend()) {
            if !store.is_visible(descriptor) {
                trace!(setting = descriptor.id, "guard off, skipped");
                continue;
            }
            self.emit(descriptor, store.value_of(descriptor), &mut out);
        }

        if let Some(trailing) = registry.trailing() {
            if store.is_enabled(trailing.id) {
                self.emit(trailing, &SettingValue::Bool(true), &mut out);
            }
        }

        debug!(bytes = out.source.len(), errors = out.errors.len(), "document generated");
        out
    }

    fn emit(&self, descriptor: &SettingDescriptor, value: &SettingValue, out: &mut GenerateResult) {
        match descriptor.render(value) {
            Ok(fragment) => {
                out.source.push_str(&fragment.text);
                out.errors
                    .extend(fragment.issues.into_iter().map(|e| e.in_setting(descriptor.id)));
            }
            Err(err) => {
                warn!(setting = descriptor.id, error = %err, "fragment omitted");
                out.errors.push(err);
            }
        }
    }
}
