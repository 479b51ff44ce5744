use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use slidedeck_gen::diff::compare_with_dir;
use slidedeck_gen::{generate_deck, Document, GeneratorConfig, PassthroughAssets, Workspace};

/// Regenerates a deck in memory and reports how it differs from the
/// artifacts already written to a directory. Nothing is written.
fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!(
            "Usage: cargo run --example diff_output -- <PRESENTATION_JSON> <PREVIOUS_OUTPUT_DIR> [TEMPLATE_JSON]"
        );
        return Ok(());
    }

    let json = fs::read_to_string(&args[1]).with_context(|| format!("Failed to read {}", args[1]))?;
    let Document::Presentation(presentation) = serde_json::from_str::<Document>(&json)? else {
        bail!("{} is not a presentation", args[1]);
    };

    let mut workspace = Workspace::new();
    if let (Some(template_path), Some(import)) = (args.get(3), &presentation.import) {
        let json = fs::read_to_string(template_path)
            .with_context(|| format!("Failed to read {}", template_path))?;
        workspace.insert(import.path.clone(), serde_json::from_str::<Document>(&json)?);
    }

    let config = GeneratorConfig::from_env();
    let assets = PassthroughAssets::new(config.asset_url_prefix.clone());
    let deck = generate_deck(&presentation, &workspace, &assets, &config)?;

    let report = compare_with_dir(&PathBuf::from(&args[2]), &deck)?;
    println!("{}", report.markdown_report);
    if report.has_differences() {
        log::info!("Regeneration changes the deck.");
    } else {
        log::info!("Regeneration is a no-op.");
    }
    Ok(())
}
