use crate::core::CalculatorInput;
use crate::errors::AdcalcError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".adcalc.toml";

/// Per-field defaults applied when the corresponding flag is omitted.
/// An explicit flag always wins over these.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputDefaults {
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub product_price: f64,
    #[serde(default)]
    pub ad_cost: f64,
    #[serde(default)]
    pub reach: f64,
    #[serde(default)]
    pub click_conversion: f64,
    #[serde(default)]
    pub cart_conversion: f64,
    #[serde(default)]
    pub order_conversion: f64,
}

impl InputDefaults {
    pub fn to_input(&self) -> CalculatorInput {
        CalculatorInput {
            product_name: self.product_name.clone(),
            product_price: self.product_price,
            ad_cost: self.ad_cost,
            reach: self.reach,
            click_conversion: self.click_conversion,
            cart_conversion: self.cart_conversion,
            order_conversion: self.order_conversion,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when --format is omitted: "terminal", "json" or "markdown".
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
        }
    }
}

fn default_format() -> String {
    "terminal".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdcalcConfig {
    #[serde(default)]
    pub defaults: InputDefaults,
    #[serde(default)]
    pub output: OutputConfig,
}

impl AdcalcConfig {
    /// Load configuration from an explicit path, or from `.adcalc.toml` in
    /// the current directory when present. A missing implicit file is not an
    /// error; a missing explicit one is.
    pub fn load(explicit: Option<&Path>) -> Result<Self, AdcalcError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = PathBuf::from(CONFIG_FILE_NAME);
                if path.is_file() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self, AdcalcError> {
        let content = fs::read_to_string(path).map_err(|source| AdcalcError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| AdcalcError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Starter config written by `adcalc init`.
pub fn starter_config() -> &'static str {
    r#"# adcalc configuration

[defaults]
product_name = ""
product_price = 0.0
ad_cost = 0.0
reach = 0.0
click_conversion = 0.0
cart_conversion = 0.0
order_conversion = 0.0

[output]
default_format = "terminal"
"#
}
