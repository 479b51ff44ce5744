use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use dotenvy::dotenv;
use slidedeck_gen::{
    DeckGeneratorBuilder, Document, FsAssetCopier, GeneratorConfig, Workspace,
};

fn read_document(path: &Path) -> anyhow::Result<Document> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("Failed to parse {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the defaults apply.
    let _ = dotenv();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!(
            "Usage: cargo run --example generate_deck -- <PRESENTATION_JSON> <OUTPUT_DIR> [TEMPLATE_JSON...]"
        );
        return Ok(());
    }
    let presentation_path = PathBuf::from(&args[1]);
    let output_dir = PathBuf::from(&args[2]);

    let Document::Presentation(presentation) = read_document(&presentation_path)? else {
        bail!("{} is not a presentation", presentation_path.display());
    };

    // The template named by the import is registered under the import path;
    // any other document under the path it was loaded from.
    let mut workspace = Workspace::new();
    for template_path in &args[3..] {
        let document = read_document(Path::new(template_path))?;
        log::info!("Loaded '{}' from {}", document.name(), template_path);
        let key = match &presentation.import {
            Some(import) if import.template == document.name() => import.path.clone(),
            _ => template_path.clone(),
        };
        workspace.insert(key, document);
    }

    let config = GeneratorConfig::from_env();
    let source_dir = presentation_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    let assets = FsAssetCopier::new(source_dir, output_dir.join("assets"))
        .with_url_prefix(config.asset_url_prefix.clone());

    let generator = DeckGeneratorBuilder::new()
        .set_config(config)
        .set_lookup(workspace)
        .set_assets(assets)
        .build()?;

    let deck = generator
        .generate(&presentation)
        .with_context(|| format!("Failed to generate '{}'", presentation.name))?;
    for issue in &deck.issues {
        log::warn!("{}", issue);
    }
    deck.write_to(&output_dir)?;
    log::info!(
        "Wrote '{}' ({} slides) to {}",
        presentation.name,
        presentation.slides.len(),
        output_dir.display()
    );
    Ok(())
}
