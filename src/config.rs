//! `guide-book.toml` configuration.
//!
//! The file is optional: without it the guide renders with the built-in
//! metadata, palette and output settings. Relative paths in the file are taken
//! relative to the file's own directory.

use crate::palette::Palette;
use crate::sinks::Format;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "guide-book.toml";

/// Guide metadata and input locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideConfig {
    /// Shown on the cover, in the footer and as the document title
    pub title: String,
    pub subtitle: String,
    /// Site address printed on the cover and in the footer
    pub site: String,
    /// Language code (BCP 47 format, e.g., "en", "en-GB")
    pub language: String,
    /// Directory screenshots are read from
    pub assets_dir: PathBuf,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            title: "Odd Fellow Coffee Roasters".to_string(),
            subtitle: "Website User Guide & Admin Manual".to_string(),
            site: "oddfellowcoffee.com".to_string(),
            language: "en".to_string(),
            assets_dir: PathBuf::from("guide-screenshots"),
        }
    }
}

/// Where and how the guide is written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: Format,
    /// Output path; defaults to `Odd_Fellow_Coffee_User_Guide.<ext>`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outfile: Option<PathBuf>,
}

impl OutputConfig {
    pub fn outfile(&self) -> PathBuf {
        self.outfile.clone().unwrap_or_else(|| {
            PathBuf::from(format!(
                "Odd_Fellow_Coffee_User_Guide.{}",
                self.format.extension()
            ))
        })
    }
}

/// Complete configuration for a guide-book run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub guide: GuideConfig,
    pub palette: Palette,
    pub output: OutputConfig,
}

impl Configuration {
    /// Load and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to load {} contents", path.display()))?;
        let mut config: Configuration = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        Ok(config)
    }

    /// Load `explicit` if given, otherwise `guide-book.toml` in the working
    /// directory if present, otherwise the defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) if !path.is_file() => Err(anyhow!(
                "Configuration file '{}' doesn't exist!",
                path.display()
            )),
            Some(path) => Configuration::load(path),
            None => {
                let default_path = Path::new(CONFIG_FILE);
                if default_path.is_file() {
                    log::info!("Using configuration from {CONFIG_FILE}");
                    Configuration::load(default_path)
                } else {
                    log::info!("No {CONFIG_FILE} found, using built-in defaults");
                    Ok(Configuration::default())
                }
            }
        }
    }

    fn resolve_paths(&mut self, base: &Path) {
        if base.as_os_str().is_empty() {
            return;
        }
        if self.guide.assets_dir.is_relative() {
            self.guide.assets_dir = base.join(&self.guide.assets_dir);
        }
        if let Some(outfile) = &self.output.outfile {
            if outfile.is_relative() {
                self.output.outfile = Some(base.join(outfile));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn can_roundtrip_configuration() {
        let config = Configuration::default();
        let toml_str = toml::to_string(&config).expect("can serialize");
        let deserialized: Configuration = toml::from_str(&toml_str).expect("can deserialize");
        assert_eq!(config.guide.title, deserialized.guide.title);
        assert_eq!(config.palette, deserialized.palette);
        assert_eq!(config.output.format, deserialized.output.format);
    }

    #[test]
    fn empty_file_means_defaults() {
        let config: Configuration = toml::from_str("").expect("can parse empty config");
        assert_eq!(config.guide.assets_dir, PathBuf::from("guide-screenshots"));
        assert_eq!(config.output.format, Format::default());
        assert_eq!(
            config.output.outfile(),
            PathBuf::from(format!(
                "Odd_Fellow_Coffee_User_Guide.{}",
                Format::default().extension()
            ))
        );
    }

    #[cfg(feature = "chrome")]
    #[test]
    fn default_output_is_a_pdf() {
        let output = OutputConfig::default();
        assert_eq!(output.format, Format::Pdf);
        assert_eq!(
            output.outfile(),
            PathBuf::from("Odd_Fellow_Coffee_User_Guide.pdf")
        );
    }

    #[test]
    fn default_outfile_follows_format() {
        let output = OutputConfig {
            format: Format::Epub,
            outfile: None,
        };
        assert_eq!(
            output.outfile(),
            PathBuf::from("Odd_Fellow_Coffee_User_Guide.epub")
        );
    }

    #[test]
    fn relative_paths_resolve_against_config_directory() {
        let dir = tempdir().expect("can create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(
            &path,
            r##"
[guide]
assets_dir = "shots"

[palette]
brand = "#000000"

[output]
format = "epub"
outfile = "out/guide.epub"
"##,
        )
        .expect("can write config");

        let config = Configuration::load(&path).expect("can load config");
        assert_eq!(config.guide.assets_dir, dir.path().join("shots"));
        assert_eq!(config.output.outfile(), dir.path().join("out/guide.epub"));
        assert_eq!(config.output.format, Format::Epub);
        assert_eq!(config.palette.brand.as_str(), "#000000");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempdir().expect("can create temp dir");
        let result = Configuration::discover(Some(dir.path().join("nope.toml").as_path()));
        assert!(result.is_err());
    }

    #[test]
    fn bad_colour_fails_to_load() {
        let dir = tempdir().expect("can create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[palette]\nnavy = \"blue\"\n").expect("can write config");
        assert!(Configuration::load(&path).is_err());
    }
}
