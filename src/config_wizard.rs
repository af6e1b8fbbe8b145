//! Writes a starter `guide-book.toml` holding the default settings, ready to
//! be edited.

use crate::cli::ConfigArgs;
use crate::config::{Configuration, CONFIG_FILE};
use anyhow::{Context, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use std::path::Path;

pub fn run(args: &ConfigArgs) -> Result<()> {
    let path = Path::new(CONFIG_FILE);

    if path.exists() && !args.force {
        let theme = ColorfulTheme::default();
        let overwrite = Confirm::with_theme(&theme)
            .with_prompt(format!("{CONFIG_FILE} already exists. Overwrite it?"))
            .default(false)
            .interact()
            .with_context(|| "Failed to obtain confirmation")?;
        if !overwrite {
            println!("Leaving {CONFIG_FILE} untouched.");
            return Ok(());
        }
    }

    write_default(path)?;
    println!("Configuration written to {CONFIG_FILE}");
    Ok(())
}

fn write_default(path: &Path) -> Result<()> {
    let contents = toml::to_string_pretty(&Configuration::default())
        .with_context(|| "Failed to serialize the default configuration")?;
    std::fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod test {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn written_defaults_load_back() {
        let dir = tempdir().expect("can create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        write_default(&path).expect("can write default config");

        let config = Configuration::load(&path).expect("can load written config");
        let defaults = Configuration::default();
        assert_eq!(config.guide.title, defaults.guide.title);
        assert_eq!(config.palette, defaults.palette);
        assert_eq!(
            config.guide.assets_dir,
            dir.path().join("guide-screenshots")
        );
    }
}
