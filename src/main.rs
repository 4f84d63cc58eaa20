use adcalc::cli::{Cli, Commands};
use adcalc::formatting::FormattingConfig;
use anyhow::Result;
use clap::Parser;

// Main orchestrator function
fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        command @ Commands::Compute { .. } => handle_compute_command(command),
        Commands::Explain { metric } => {
            adcalc::commands::explain::explain_metric(metric.into(), FormattingConfig::from_env())
        }
        Commands::Init { force } => adcalc::commands::init::init_config(force),
    }
}

fn handle_compute_command(command: Commands) -> Result<()> {
    if let Commands::Compute {
        product_name,
        price,
        ad_cost,
        reach,
        click_conversion,
        cart_conversion,
        order_conversion,
        format,
        output,
        config,
        plain,
        verbosity,
    } = command
    {
        let formatting = create_formatting_config(plain);
        let compute_config = adcalc::commands::compute::ComputeConfig {
            product_name,
            price,
            ad_cost,
            reach,
            click_conversion,
            cart_conversion,
            order_conversion,
            format: format.map(Into::into),
            output,
            config,
            formatting,
            verbosity,
        };
        adcalc::commands::compute::handle_compute(compute_config)
    } else {
        Err(anyhow::anyhow!("Invalid command"))
    }
}

// Pure function to create formatting configuration
fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}
