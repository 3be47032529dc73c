//! `.roicanvas.toml` settings.

pub mod loader;

use serde::{Deserialize, Serialize};

use crate::canvas::DEFAULT_DESIGNED_BY;
use crate::output::OutputFormat;

pub use loader::{directory_ancestors, load_config, load_config_from, parse_and_validate_config};

pub const CONFIG_FILE_NAME: &str = ".roicanvas.toml";

pub const DEFAULT_BUDGET: f64 = 1_000_000.0;

/// Template written by `roicanvas init`.
pub const DEFAULT_CONFIG: &str = r#"# ROI Canvas Configuration

[portfolio]
# Budget used by `select` when --budget is not given
default_budget = 1000000

[canvas]
designed_by = "AI ROI Canvas Agent"

[output]
# terminal, json or markdown
default_format = "terminal"
"#;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoiCanvasConfig {
    #[serde(default)]
    pub portfolio: PortfolioSettings,

    #[serde(default)]
    pub canvas: CanvasSettings,

    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSettings {
    /// Budget ceiling for greedy selection
    #[serde(default = "default_budget")]
    pub default_budget: f64,
}

impl Default for PortfolioSettings {
    fn default() -> Self {
        Self {
            default_budget: DEFAULT_BUDGET,
        }
    }
}

impl PortfolioSettings {
    pub fn validate(&self) -> Result<(), String> {
        if !self.default_budget.is_finite() || self.default_budget < 0.0 {
            return Err(format!(
                "default_budget must be a non-negative number, got {}",
                self.default_budget
            ));
        }
        Ok(())
    }
}

fn default_budget() -> f64 {
    DEFAULT_BUDGET
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasSettings {
    #[serde(default = "default_designed_by")]
    pub designed_by: String,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            designed_by: default_designed_by(),
        }
    }
}

fn default_designed_by() -> String {
    DEFAULT_DESIGNED_BY.to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub default_format: OutputFormat,
}
