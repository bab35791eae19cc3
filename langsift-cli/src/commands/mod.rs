//! CLI command implementations

use anyhow::Result;
use clap::{Parser, Subcommand};
use langsift_core::{LinguaIdentifier, OutputFormat, Workflow};

pub mod generate_config;
pub mod identify;
pub mod validate;

/// Batch language identification for files and directories
#[derive(Debug, Parser)]
#[command(name = "langsift", version, about, long_about = None)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match &self.command {
            Commands::Identify(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Identify the language of every line or file under a path
    Identify(identify::IdentifyArgs),

    /// List accepted values
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List output formats
    Formats,

    /// List segmentation workflows
    Workflows,

    /// List language codes the detector can report
    Languages,
}

impl ListCommands {
    /// Lines printed for this listing
    pub fn entries(&self) -> Vec<String> {
        match self {
            ListCommands::Formats => OutputFormat::ALL
                .iter()
                .map(|format| format.to_string())
                .collect(),
            ListCommands::Workflows => Workflow::ALL
                .iter()
                .map(|workflow| workflow.to_string())
                .collect(),
            ListCommands::Languages => LinguaIdentifier::supported_languages(),
        }
    }

    /// Print the listing to stdout
    pub fn execute(&self) {
        for entry in self.entries() {
            println!("{entry}");
        }
    }
}
