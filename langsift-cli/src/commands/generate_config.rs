//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use langsift_core::ModelConfig;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = Self::generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to adjust model bounds and output");
        println!("2. Validate your configuration:");
        println!("   langsift validate --config {}", self.output.display());
        println!("3. Use it for identification:");
        println!(
            "   langsift identify -i corpus/ -f json -w line-by-line --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    pub fn generate_template() -> String {
        let model = ModelConfig::default();
        format!(
            r#"# langsift configuration

[model]
# Texts shorter than this many bytes are reported as "und"
min_bytes = {min_bytes}

# Texts longer than this many bytes are truncated before classification
max_bytes = {max_bytes}

# Minimum probability for a prediction to be flagged reliable
reliability_threshold = {threshold:?}

# Faster, less accurate detection using fewer n-gram models
low_accuracy = {low_accuracy}

# Load every language model at startup instead of on first use
preload_models = {preload}

[output]
# Indent the JSON array
pretty_json = true

# JSON file used when --output is not given
# json_path = "results.json"
"#,
            min_bytes = model.min_bytes,
            max_bytes = model.max_bytes,
            threshold = model.reliability_threshold,
            low_accuracy = model.low_accuracy,
            preload = model.preload_models,
        )
    }
}
