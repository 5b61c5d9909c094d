use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "travel-quote")]
#[command(about = "Build printable travel price quotations")]
pub struct CliConfig {
    /// Path to a TOML configuration file (company details, defaults, endpoints)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory the quotation is exported to (overrides the config file)
    #[arg(short, long)]
    pub output_path: Option<String>,

    /// Skip the country and airport lookups
    #[arg(long)]
    pub offline: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Apply a script of form events and export the quotation
    Render {
        /// JSON file holding an array of form events
        #[arg(short, long)]
        events: Option<String>,

        /// Show the per-person price as the headline
        #[arg(long)]
        per_person: bool,

        /// Also print the quotation to stdout
        #[arg(long)]
        print: bool,

        /// Date used for an empty quote date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        today: Option<String>,
    },
    /// List the destination choices
    Countries,
    /// List the airport choices
    Airports,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        if let Some(path) = &self.output_path {
            validate_path("output_path", path)?;
        }
        if let Command::Render {
            events: Some(path), ..
        } = &self.command
        {
            validate_path("events", path)?;
        }
        Ok(())
    }
}
