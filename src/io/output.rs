use crate::core::CalculationReport;
use crate::formatting::{format_count, format_ratio, FormattingConfig};
use crate::metrics::Metric;
use colored::*;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &CalculationReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &CalculationReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, report: &CalculationReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Advertising Efficiency Report")?;
        writeln!(self.writer)?;
        if !report.input.product_name.is_empty() {
            writeln!(self.writer, "Product: {}", report.input.product_name)?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_funnel(&mut self, report: &CalculationReport) -> anyhow::Result<()> {
        let results = &report.results;
        writeln!(self.writer, "## Funnel")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Stage | Value |")?;
        writeln!(self.writer, "|-------|-------|")?;
        writeln!(self.writer, "| Clicks | {} |", format_count(results.clicks))?;
        writeln!(self.writer, "| Carts | {} |", format_count(results.carts))?;
        writeln!(self.writer, "| Orders | {} |", format_count(results.orders))?;
        writeln!(
            self.writer,
            "| Revenue | {} ₽ |",
            format_count(results.revenue)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_ratios(&mut self, report: &CalculationReport) -> anyhow::Result<()> {
        let results = &report.results;
        writeln!(self.writer, "## Efficiency")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value | Formula |")?;
        writeln!(self.writer, "|--------|-------|---------|")?;
        for (metric, value) in [
            (Metric::Romi, results.romi),
            (Metric::Drr, results.drr),
            (Metric::Cpr, results.cpr),
        ] {
            writeln!(
                self.writer,
                "| {} | {}{} | {} |",
                metric.label(),
                format_ratio(value),
                metric.suffix(),
                metric.formula()
            )?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &CalculationReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_funnel(report)?;
        self.write_ratios(report)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatting: FormattingConfig,
    verbosity: u8,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig, verbosity: u8) -> Self {
        colored::control::set_override(formatting.color.should_use_color());
        Self {
            writer,
            formatting,
            verbosity,
        }
    }

    fn styled(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.formatting.color.should_use_color() {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn ratio_value(&self, metric: Metric, value: f64) -> String {
        let formatted = format!("{}{}", format_ratio(value), metric.suffix());
        // ROMI is the only signed ratio worth a verdict color.
        if metric == Metric::Romi && self.formatting.color.should_use_color() {
            if value > 0.0 {
                return formatted.green().to_string();
            }
            if value < 0.0 {
                return formatted.red().to_string();
            }
        }
        formatted
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &CalculationReport) -> anyhow::Result<()> {
        let header = self.styled("Advertising efficiency", |t| t.blue().bold());
        writeln!(self.writer, "{header}")?;
        if !report.input.product_name.is_empty() {
            writeln!(self.writer, "Product: {}", report.input.product_name)?;
        }
        writeln!(self.writer)?;

        let results = &report.results;
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Metric", "Value"]);
        table.add_row(vec!["Clicks".to_string(), format_count(results.clicks)]);
        table.add_row(vec!["Carts".to_string(), format_count(results.carts)]);
        table.add_row(vec!["Orders".to_string(), format_count(results.orders)]);
        table.add_row(vec![
            "Revenue".to_string(),
            format!("{} ₽", format_count(results.revenue)),
        ]);
        for (metric, value) in [
            (Metric::Romi, results.romi),
            (Metric::Drr, results.drr),
            (Metric::Cpr, results.cpr),
        ] {
            table.add_row(vec![metric.label().to_string(), self.ratio_value(metric, value)]);
        }
        writeln!(self.writer, "{table}")?;

        if self.verbosity > 0 {
            writeln!(self.writer)?;
            for metric in Metric::ALL {
                let label = self.styled(metric.title(), |t| t.bold());
                writeln!(self.writer, "{label}: {}", metric.formula())?;
            }
        }
        Ok(())
    }
}

pub fn create_writer(
    format: OutputFormat,
    formatting: FormattingConfig,
    verbosity: u8,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(std::io::stdout())),
        OutputFormat::Terminal => {
            Box::new(TerminalWriter::new(std::io::stdout(), formatting, verbosity))
        }
    }
}

/// File-bound writer for --output. Colors are always off for files.
pub fn create_file_writer(
    format: OutputFormat,
    path: &Path,
    verbosity: u8,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let file = File::create(path)?;
    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(file)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(file)),
        OutputFormat::Terminal => {
            Box::new(TerminalWriter::new(file, FormattingConfig::plain(), verbosity))
        }
    })
}
