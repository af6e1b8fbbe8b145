//! Lists every screenshot the guide references and whether it's on disk.

use crate::assets::{format_size, AssetEmbedder};
use crate::cli::InputArgs;
use crate::guide::SCREENSHOTS;
use crate::render::load_configuration;
use anyhow::Result;
use console::style;

pub fn run(args: &InputArgs) -> Result<()> {
    let config = load_configuration(args)?;
    let embedder = AssetEmbedder::new(&config.guide.assets_dir);

    println!("Screenshots in {}:", embedder.dir().display());
    let mut missing = 0;
    for screenshot in &SCREENSHOTS {
        match std::fs::metadata(embedder.path_of(screenshot)) {
            Ok(metadata) if metadata.is_file() => println!(
                "  {} {} ({})",
                style("found  ").green(),
                screenshot.filename,
                format_size(metadata.len())
            ),
            _ => {
                missing += 1;
                println!("  {} {}", style("missing").yellow(), screenshot.filename);
            }
        }
    }

    println!();
    if missing == 0 {
        println!("All {} screenshots present.", SCREENSHOTS.len());
    } else {
        println!(
            "{missing} of {} screenshots missing; they will render as placeholders.",
            SCREENSHOTS.len()
        );
    }
    Ok(())
}
