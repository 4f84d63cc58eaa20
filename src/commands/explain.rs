use crate::formatting::FormattingConfig;
use crate::metrics::Metric;
use anyhow::Result;
use colored::*;

/// Print the on-demand explanation for one metric: its title, what it means,
/// and the formula behind it.
pub fn explain_metric(metric: Metric, formatting: FormattingConfig) -> Result<()> {
    colored::control::set_override(formatting.color.should_use_color());

    println!("{}", metric.title().bold());
    println!();
    println!("{}", metric.description());
    println!();
    println!("Formula: {}", metric.formula());

    Ok(())
}
