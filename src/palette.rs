//! Colour palette used to parameterise the guide stylesheet.
//!
//! Every colour role the stylesheet needs is a named field, so a missing role is
//! a compile error rather than a lookup failure at render time. Colours are
//! validated when deserialised from `guide-book.toml`.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A CSS hex colour, `#rgb` or `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour(String);

impl Colour {
    pub fn parse(value: &str) -> Result<Self> {
        let hex = value
            .strip_prefix('#')
            .ok_or_else(|| anyhow!("Colour '{value}' must start with '#'"))?;
        if !matches!(hex.len(), 3 | 6) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow!(
                "Colour '{value}' must be written as #rgb or #rrggbb"
            ));
        }
        Ok(Colour(value.to_ascii_lowercase()))
    }

    fn from_static(value: &'static str) -> Self {
        Colour(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Colour {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Colour::parse(&value)
    }
}

impl From<Colour> for String {
    fn from(colour: Colour) -> Self {
        colour.0
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Named colour roles. The defaults are the Odd Fellow brand colours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Brand red, used for the cover title, rules under h1 and critical callouts
    pub brand: Colour,
    /// Heading and table header colour
    pub navy: Colour,
    pub gray_light: Colour,
    pub gray_border: Colour,
    pub blue_light: Colour,
    pub blue_border: Colour,
    pub green_light: Colour,
    pub green_border: Colour,
    pub green_text: Colour,
    pub gold_light: Colour,
    pub gold_border: Colour,
    pub gold_text: Colour,
    /// Background of step indicators
    pub cream: Colour,
    pub red_light: Colour,
    pub red_border: Colour,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            brand: Colour::from_static("#b91c1c"),
            navy: Colour::from_static("#1a365d"),
            gray_light: Colour::from_static("#f5f5f5"),
            gray_border: Colour::from_static("#ccc"),
            blue_light: Colour::from_static("#e8f4f8"),
            blue_border: Colour::from_static("#b0d4e3"),
            green_light: Colour::from_static("#f0f9f4"),
            green_border: Colour::from_static("#a0d8b3"),
            green_text: Colour::from_static("#276749"),
            gold_light: Colour::from_static("#fff8e6"),
            gold_border: Colour::from_static("#d69e2e"),
            gold_text: Colour::from_static("#744210"),
            cream: Colour::from_static("#fffbf0"),
            red_light: Colour::from_static("#fef2f2"),
            red_border: Colour::from_static("#fca5a5"),
        }
    }
}

impl Palette {
    /// All roles as `(name, colour)` pairs, in declaration order.
    pub fn roles(&self) -> [(&'static str, &Colour); 15] {
        [
            ("brand", &self.brand),
            ("navy", &self.navy),
            ("gray_light", &self.gray_light),
            ("gray_border", &self.gray_border),
            ("blue_light", &self.blue_light),
            ("blue_border", &self.blue_border),
            ("green_light", &self.green_light),
            ("green_border", &self.green_border),
            ("green_text", &self.green_text),
            ("gold_light", &self.gold_light),
            ("gold_border", &self.gold_border),
            ("gold_text", &self.gold_text),
            ("cream", &self.cream),
            ("red_light", &self.red_light),
            ("red_border", &self.red_border),
        ]
    }
}
