pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::core::holidays::AllowanceTable;
#[cfg(feature = "cli")]
use crate::domain::model::OutputFormat;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "avail-report")]
#[command(about = "Workforce availability and project feasibility reports")]
pub struct CliConfig {
    /// Directory all input and output paths resolve against
    #[arg(long, default_value = ".")]
    pub base_path: String,

    /// Input document file name
    #[arg(long, default_value = "data.json")]
    pub input: String,

    /// Output document file name
    #[arg(long, default_value = "output.json")]
    pub output: String,

    /// Optional TOML configuration file (overrides the flags above)
    #[arg(long)]
    pub config: Option<String>,

    /// Also write a CSV rendering next to the JSON output
    #[arg(long)]
    pub csv: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn base_path(&self) -> &str {
        &self.base_path
    }

    fn input_file(&self) -> &str {
        &self.input
    }

    fn output_file(&self) -> &str {
        &self.output
    }

    fn output_formats(&self) -> Vec<OutputFormat> {
        let mut formats = vec![OutputFormat::Json];
        if self.csv {
            formats.push(OutputFormat::Csv);
        }
        formats
    }

    fn allowances(&self) -> AllowanceTable {
        AllowanceTable::default()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("base_path", &self.base_path)?;
        validation::validate_non_empty_string("input", &self.input)?;
        validation::validate_non_empty_string("output", &self.output)?;
        Ok(())
    }
}
