//! tikzplot - pgfplots source from plot settings
//!
//! A [`PlotSession`] holds the current value of every registered setting and
//! turns them into a TikZ document on demand:
//!
//! ```no_run
//! use tikzplot::{FunctionSpec, PlotSession};
//!
//! let mut session = PlotSession::with_standard_catalog();
//! session.set_value("title", "Parabola").unwrap();
//! session
//!     .set_functions(vec![FunctionSpec::new("x^2").with_legend(true)])
//!     .unwrap();
//! println!("{}", session.generate_tidy());
//! ```

mod config;
mod generate;
mod render;

pub use config::PlotConfig;
pub use generate::{GenerateResult, Generator};
pub use render::tidy;

pub use tikzplot_core::{ErrorKind, FunctionSpec, PlotError, PlotResult, SettingValue};
pub use tikzplot_settings::{Category, SettingInfo, SettingRegistry};

use std::sync::Arc;
use tikzplot_settings::SettingsStore;
use tracing::debug;

/// One plot being configured
#[derive(Debug, Clone)]
pub struct PlotSession {
    store: SettingsStore,
    generator: Generator,
}

impl PlotSession {
    pub fn new(registry: SettingRegistry) -> Self {
        Self::with_registry(Arc::new(registry))
    }

    /// Session over a registry shared with other sessions
    pub fn with_registry(registry: Arc<SettingRegistry>) -> Self {
        Self {
            store: SettingsStore::new(registry),
            generator: Generator::new(),
        }
    }

    pub fn with_standard_catalog() -> Self {
        Self::new(tikzplot_std::standard_registry())
    }

    pub fn registry(&self) -> &Arc<SettingRegistry> {
        self.store.registry()
    }

    pub fn set_value(&mut self, id: &str, value: impl Into<SettingValue>) -> PlotResult<()> {
        self.store.set_value(id, value)
    }

    pub fn get_value(&self, id: &str) -> PlotResult<&SettingValue> {
        self.store.get_value(id)
    }

    pub fn set_functions(&mut self, functions: Vec<FunctionSpec>) -> PlotResult<()> {
        self.store.set_functions(functions)
    }

    pub fn functions(&self) -> &[FunctionSpec] {
        self.store.functions()
    }

    pub fn reset(&mut self, id: &str) -> PlotResult<()> {
        self.store.reset(id)
    }

    pub fn reset_all(&mut self) {
        self.store.reset_all()
    }

    /// Apply every entry of a configuration
    ///
    /// Rejected entries are returned and do not stop the others. A
    /// non-empty `functions` list replaces the current one.
    pub fn apply_config(&mut self, config: &PlotConfig) -> Vec<PlotError> {
        let mut errors = Vec::new();

        for (id, value) in &config.settings {
            if let Err(err) = self.store.set_value(id, value.clone()) {
                errors.push(err);
            }
        }

        if !config.functions.is_empty() {
            if let Err(err) = self.store.set_functions(config.functions.clone()) {
                errors.push(err);
            }
        }

        debug!(
            settings = config.settings.len(),
            functions = config.functions.len(),
            rejected = errors.len(),
            "config applied"
        );
        errors
    }

    /// Raw TikZ source for the current values
    pub fn generate(&self) -> String {
        self.generate_report().source
    }

    /// Raw source together with every isolated failure
    pub fn generate_report(&self) -> GenerateResult {
        self.generator.generate(&self.store)
    }

    /// Normalized TikZ source for the current values
    pub fn generate_tidy(&self) -> String {
        tidy(&self.generate())
    }

    pub fn catalog(&self, category: Option<Category>) -> Vec<SettingInfo> {
        self.registry().catalog(category)
    }

    pub fn help(&self, id: &str) -> PlotResult<SettingInfo> {
        self.registry().help(id)
    }
}

impl Default for PlotSession {
    fn default() -> Self {
        Self::with_standard_catalog()
    }
}
