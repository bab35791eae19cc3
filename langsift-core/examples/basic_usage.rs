//! Basic usage of the identification pipeline

use langsift_core::{
    identify_path, Aggregator, InputPath, LanguageIdentifier, LinguaIdentifier, ModelConfig,
    OutputFormat, PipelineConfig, RenderOptions, Workflow,
};
use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = std::env::temp_dir().join("langsift-basic-usage");
    fs::create_dir_all(&dir)?;
    fs::write(
        dir.join("mixed.txt"),
        "This text is written in English.\nDieser Text ist auf Deutsch geschrieben.\n",
    )?;
    fs::write(dir.join("chinese.txt"), "这是中文的。\n看得懂吗？\n")?;

    // Method 1: Convenience function with the default detector
    println!("=== Method 1: Convenience Function ===");
    let results = identify_path(&dir, Workflow::LineByLine, 1)?;
    for record in &results {
        println!(
            "  {}:{} {} ({:.3})",
            record.source.display(),
            record.line_number.unwrap_or_default(),
            record.language,
            record.probability
        );
    }

    // Method 2: Top-N per whole file, rendered as TSV
    println!("\n=== Method 2: Top 3 Per File ===");
    let identifier = LinguaIdentifier::new(ModelConfig::default())?;
    let config = PipelineConfig::builder(Workflow::WholeText).top_n(3).build()?;
    let results = Aggregator::new(&identifier, config).run(&InputPath::new(&dir)?)?;
    langsift_core::render(
        &results,
        OutputFormat::Stdout,
        std::io::stdout(),
        &RenderOptions::default(),
    )?;

    // Method 3: Calling the model directly
    println!("\n=== Method 3: Direct Model Call ===");
    let best = identifier.best("Ceci est un texte écrit en français.")?;
    println!("  {} reliable={}", best.language, best.is_reliable);

    fs::remove_dir_all(&dir)?;
    Ok(())
}
