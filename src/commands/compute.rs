use crate::config::AdcalcConfig;
use crate::core::{compute, parsing::coerce_number, CalculationReport, CalculatorInput};
use crate::formatting::FormattingConfig;
use crate::io::output::{create_file_writer, create_writer, OutputFormat};
use anyhow::Result;
use std::path::PathBuf;

/// Everything one `compute` invocation needs. Field flags stay raw text here;
/// numeric coercion is applied during input resolution.
pub struct ComputeConfig {
    pub product_name: Option<String>,
    pub price: Option<String>,
    pub ad_cost: Option<String>,
    pub reach: Option<String>,
    pub click_conversion: Option<String>,
    pub cart_conversion: Option<String>,
    pub order_conversion: Option<String>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub formatting: FormattingConfig,
    pub verbosity: u8,
}

pub fn handle_compute(config: ComputeConfig) -> Result<()> {
    let file_config = AdcalcConfig::load(config.config.as_deref())?;

    let input = resolve_input(&config, &file_config);
    log::debug!("resolved input: {input:?}");

    let results = compute(&input);
    let report = CalculationReport::new(input, results);

    let format = config
        .format
        .unwrap_or_else(|| resolve_default_format(&file_config.output.default_format));

    let mut writer = match &config.output {
        Some(path) => create_file_writer(format, path, config.verbosity)?,
        None => create_writer(format, config.formatting, config.verbosity),
    };
    writer.write_report(&report)
}

/// Merge flag text over config-file defaults. An explicit flag always wins,
/// even when its text coerces to 0.
fn resolve_input(config: &ComputeConfig, file_config: &AdcalcConfig) -> CalculatorInput {
    let defaults = file_config.defaults.to_input();
    CalculatorInput {
        product_name: config
            .product_name
            .clone()
            .unwrap_or(defaults.product_name),
        product_price: resolve_field(config.price.as_deref(), defaults.product_price),
        ad_cost: resolve_field(config.ad_cost.as_deref(), defaults.ad_cost),
        reach: resolve_field(config.reach.as_deref(), defaults.reach),
        click_conversion: resolve_field(
            config.click_conversion.as_deref(),
            defaults.click_conversion,
        ),
        cart_conversion: resolve_field(
            config.cart_conversion.as_deref(),
            defaults.cart_conversion,
        ),
        order_conversion: resolve_field(
            config.order_conversion.as_deref(),
            defaults.order_conversion,
        ),
    }
}

fn resolve_field(flag: Option<&str>, default: f64) -> f64 {
    match flag {
        Some(text) => coerce_number(text),
        None => default,
    }
}

fn resolve_default_format(name: &str) -> OutputFormat {
    match name {
        "json" => OutputFormat::Json,
        "markdown" => OutputFormat::Markdown,
        "terminal" => OutputFormat::Terminal,
        other => {
            log::warn!("unknown default_format {other:?} in config, using terminal");
            OutputFormat::Terminal
        }
    }
}
