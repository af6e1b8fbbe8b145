//! The render command: style → compose → emit.

use crate::assets::{format_size, AssetEmbedder};
use crate::cli::{InputArgs, RenderArgs};
use crate::config::Configuration;
use crate::guide::{AssetReport, Composer, SCREENSHOTS};
use crate::sinks::{Render, RenderStats};
use crate::styles;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

/// What a successful run produced.
#[derive(Debug)]
pub struct Outcome {
    pub outfile: PathBuf,
    pub report: AssetReport,
    pub stats: RenderStats,
}

/// Load the configuration named by the arguments and apply their overrides.
pub fn load_configuration(input: &InputArgs) -> Result<Configuration> {
    let mut config = Configuration::discover(input.config.as_deref())?;
    if let Some(assets) = &input.assets {
        config.guide.assets_dir = assets.clone();
    }
    Ok(config)
}

/// Run the whole pipeline for a fixed configuration and date.
pub fn generate(
    config: &Configuration,
    date: NaiveDate,
    progress: &ProgressBar,
) -> Result<Outcome> {
    log::info!("Generating stylesheet");
    let stylesheet = styles::generate_stylesheet(&config.palette);

    log::info!(
        "Reading screenshots from {}",
        config.guide.assets_dir.display()
    );
    let embedder = AssetEmbedder::new(&config.guide.assets_dir);
    let document = Composer::new(&embedder, &config.guide, date, progress).compose();

    let outfile = config.output.outfile();
    log::info!(
        "Rendering {} output to {}",
        config.output.format.extension(),
        outfile.display()
    );
    let stats = config
        .output
        .format
        .sink()
        .render(&document, &stylesheet, &outfile)
        .with_context(|| format!("Failed to render {}", outfile.display()))?;

    Ok(Outcome {
        outfile,
        report: document.report,
        stats,
    })
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let mut config = load_configuration(&args.input)?;
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if let Some(output) = &args.output {
        config.output.outfile = Some(output.clone());
    }

    let outfile = config.output.outfile();
    let outfile = if outfile.is_absolute() {
        outfile
    } else {
        std::env::current_dir()
            .with_context(|| "Failed to determine the working directory")?
            .join(outfile)
    };
    config.output.outfile = Some(outfile.clone());

    let date = args
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    println!("Generating user guide: {}", outfile.display());

    let progress = ProgressBar::new(SCREENSHOTS.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .with_context(|| "Failed to parse progress style")?
            .progress_chars("#>-"),
    );
    progress.set_message("Embedding screenshots...");

    let outcome = generate(&config, date, &progress)?;
    progress.finish_and_clear();

    println!(
        "{} Guide saved to: {}",
        style("Done!").green(),
        outcome.outfile.display()
    );
    println!(
        "  Screenshots: {} embedded ({}), {} missing",
        outcome.report.embedded.len(),
        format_size(outcome.report.bytes),
        outcome.report.missing.len()
    );
    if !outcome.report.missing.is_empty() {
        println!(
            "  {} {}",
            style("Missing:").yellow(),
            outcome.report.missing.join(", ")
        );
    }
    println!("  Size:        {}", format_size(outcome.stats.bytes));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::MISSING_ASSET_CLASS;
    use crate::sinks::Format;
    use pretty_assertions::assert_eq;
    use std::path::Path;
    use tempfile::tempdir;

    fn configuration(assets: &Path, outfile: PathBuf, format: Format) -> Configuration {
        let mut config = Configuration::default();
        config.guide.assets_dir = assets.to_path_buf();
        config.output.format = format;
        config.output.outfile = Some(outfile);
        config
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
    }

    fn placeholder_count(html: &str) -> usize {
        html.matches(&format!("class=\"{MISSING_ASSET_CLASS}\""))
            .count()
    }

    #[test]
    fn all_screenshots_present_leaves_no_placeholders() {
        let dir = tempdir().expect("can create temp dir");
        let assets = dir.path().join("shots");
        std::fs::create_dir(&assets).expect("can create assets dir");
        for (i, screenshot) in SCREENSHOTS.iter().enumerate() {
            std::fs::write(assets.join(screenshot.filename), vec![i as u8; 64])
                .expect("can write screenshot");
        }

        let config = configuration(&assets, dir.path().join("guide.html"), Format::Html);
        let outcome = generate(&config, date(), &ProgressBar::hidden()).expect("renders");

        let html = std::fs::read_to_string(&outcome.outfile).expect("output exists");
        assert!(!html.is_empty());
        assert_eq!(placeholder_count(&html), 0);
        assert_eq!(
            html.matches("data:image/png;base64,").count(),
            SCREENSHOTS.len()
        );
        assert_eq!(outcome.report.embedded.len(), SCREENSHOTS.len());
        assert!(outcome.report.missing.is_empty());
        assert_eq!(outcome.report.bytes, 64 * SCREENSHOTS.len() as u64);
        assert_eq!(outcome.stats.bytes, html.len() as u64);
    }

    #[test]
    fn empty_assets_dir_yields_one_placeholder_per_screenshot() {
        let dir = tempdir().expect("can create temp dir");
        let config = configuration(dir.path(), dir.path().join("guide.html"), Format::Html);
        let outcome = generate(&config, date(), &ProgressBar::hidden()).expect("renders");

        let html = std::fs::read_to_string(&outcome.outfile).expect("output exists");
        assert_eq!(placeholder_count(&html), SCREENSHOTS.len());
        assert_eq!(placeholder_count(&html), 9);
        assert!(!html.contains("base64,"));
        assert_eq!(outcome.report.missing.len(), SCREENSHOTS.len());
    }

    #[test]
    fn runs_with_a_fixed_date_are_identical() {
        let dir = tempdir().expect("can create temp dir");
        let first = configuration(dir.path(), dir.path().join("first.html"), Format::Html);
        let second = configuration(dir.path(), dir.path().join("second.html"), Format::Html);

        generate(&first, date(), &ProgressBar::hidden()).expect("first run renders");
        generate(&second, date(), &ProgressBar::hidden()).expect("second run renders");

        let first = std::fs::read(dir.path().join("first.html")).expect("first output");
        let second = std::fs::read(dir.path().join("second.html")).expect("second output");
        assert_eq!(first, second);
    }

    #[test]
    fn rerun_overwrites_previous_output() {
        let dir = tempdir().expect("can create temp dir");
        let outfile = dir.path().join("guide.html");
        std::fs::write(&outfile, "stale").expect("can write stale output");

        let config = configuration(dir.path(), outfile.clone(), Format::Html);
        generate(&config, date(), &ProgressBar::hidden()).expect("renders");

        let html = std::fs::read_to_string(&outfile).expect("output exists");
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn creates_missing_output_directories() {
        let dir = tempdir().expect("can create temp dir");
        let outfile = dir.path().join("nested/out/guide.html");
        let config = configuration(dir.path(), outfile.clone(), Format::Html);
        generate(&config, date(), &ProgressBar::hidden()).expect("renders");
        assert!(outfile.is_file());
    }

    #[test]
    fn renders_an_epub_archive() {
        let dir = tempdir().expect("can create temp dir");
        let config = configuration(dir.path(), dir.path().join("guide.epub"), Format::Epub);
        let outcome = generate(&config, date(), &ProgressBar::hidden()).expect("renders");

        let bytes = std::fs::read(&outcome.outfile).expect("output exists");
        assert!(bytes.starts_with(b"PK"), "EPUB is a ZIP archive");
        assert_eq!(outcome.stats.bytes, bytes.len() as u64);
    }

    #[test]
    fn unwritable_output_is_fatal() {
        let dir = tempdir().expect("can create temp dir");
        let outfile = dir.path().join("taken");
        std::fs::create_dir(&outfile).expect("can create directory in the way");

        let config = configuration(dir.path(), outfile.clone(), Format::Html);
        let result = generate(&config, date(), &ProgressBar::hidden());
        assert!(result.is_err());
        assert!(outfile.is_dir());
    }

    /// Count page objects, skipping the `/Pages` tree nodes.
    #[cfg(feature = "chrome")]
    fn page_count(pdf: &[u8]) -> usize {
        let mut count = 0;
        let mut rest = pdf;
        while let Some(at) = rest.windows(5).position(|w| w == b"/Type") {
            rest = &rest[at + 5..];
            let tail = rest
                .iter()
                .position(|b| !b.is_ascii_whitespace())
                .map_or(&[][..], |skip| &rest[skip..]);
            if tail.starts_with(b"/Page") && !tail.starts_with(b"/Pages") {
                count += 1;
            }
        }
        count
    }

    #[cfg(feature = "chrome")]
    #[test]
    fn default_format_renders_a_paginated_pdf() {
        if headless_chrome::browser::default_executable().is_err() {
            eprintln!("no Chrome executable found, skipping");
            return;
        }

        let dir = tempdir().expect("can create temp dir");
        let mut config = Configuration::default();
        config.guide.assets_dir = dir.path().to_path_buf();
        config.output.outfile = Some(dir.path().join(config.output.outfile()));
        let outcome = generate(&config, date(), &ProgressBar::hidden()).expect("renders");

        assert_eq!(
            outcome.outfile.file_name().and_then(|n| n.to_str()),
            Some("Odd_Fellow_Coffee_User_Guide.pdf")
        );
        let pdf = std::fs::read(&outcome.outfile).expect("output exists");
        assert!(pdf.starts_with(b"%PDF-"));
        assert!(page_count(&pdf) > 1, "guide spans several pages");
        assert_eq!(outcome.report.missing.len(), SCREENSHOTS.len());
    }

    #[cfg(not(feature = "chrome"))]
    #[test]
    fn pdf_without_chrome_is_fatal() {
        let dir = tempdir().expect("can create temp dir");
        let config = configuration(dir.path(), dir.path().join("guide.pdf"), Format::Pdf);
        let result = generate(&config, date(), &ProgressBar::hidden());
        assert!(result.is_err());
        assert!(!dir.path().join("guide.pdf").exists());
    }
}
