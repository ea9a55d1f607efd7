//! Backend configuration.

use hinge_registry::RegistryConfig;

/// Configuration for a [`TpeBackend`](crate::TpeBackend).
#[derive(Clone, Debug, PartialEq)]
pub struct TpeConfig {
    /// Name reported through engine info.
    pub engine_name: String,

    /// Step length in seconds used when a step input carries none.
    pub default_time_step: f64,

    /// Configuration of the entity registry.
    pub registry: RegistryConfig,
}

impl Default for TpeConfig {
    fn default() -> Self {
        Self {
            engine_name: "tpe".to_string(),
            default_time_step: 0.001,
            registry: RegistryConfig::default(),
        }
    }
}

impl TpeConfig {
    /// Creates a configuration whose registry rejects dangling parents.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            registry: RegistryConfig::strict(),
            ..Self::default()
        }
    }

    /// Builder method to set the engine name.
    #[must_use]
    pub fn with_engine_name(mut self, name: impl Into<String>) -> Self {
        self.engine_name = name.into();
        self
    }

    /// Builder method to set the default step length.
    #[must_use]
    pub fn with_default_time_step(mut self, seconds: f64) -> Self {
        self.default_time_step = seconds;
        self
    }

    /// Builder method to set the registry configuration.
    #[must_use]
    pub fn with_registry(mut self, registry: RegistryConfig) -> Self {
        self.registry = registry;
        self
    }
}
