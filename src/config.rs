//! Calculator configuration.

use crate::calculator::Inputs;

/// Public page the share links point to.
pub const DEFAULT_BASE_URL: &str = "https://paelles.vercel.app/";

/// Settings shared by the CLI and the interactive UI.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorConfig {
    /// Base URL used when building share links.
    pub base_url: String,
    /// Inputs used when nothing else is provided.
    pub defaults: Inputs,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            defaults: Inputs::default(),
        }
    }
}

impl CalculatorConfig {
    /// Override the share base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
