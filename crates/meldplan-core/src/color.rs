//! Display color classification by rarity or source

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display color of a gear name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GearColor {
    White,
    Red,
    Green,
    Blue,
    Purple,
}

impl GearColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            GearColor::White => "white",
            GearColor::Red => "red",
            GearColor::Green => "green",
            GearColor::Blue => "blue",
            GearColor::Purple => "purple",
        }
    }
}

impl fmt::Display for GearColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How gear names are colored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Everything white
    None,
    /// Special sources first, rarity otherwise
    Source,
    /// By rarity
    #[default]
    Rarity,
}

/// Rarity colors. Rarities 5 and 6 have no color.
const RARITY_COLORS: &[(u8, GearColor)] = &[
    (1, GearColor::White),
    (2, GearColor::Green),
    (3, GearColor::Blue),
    (4, GearColor::Purple),
    (7, GearColor::Red),
];

/// Sources keyed by their two-character prefix
const SOURCE_COLORS: &[(&str, GearColor)] = &[
    ("点数", GearColor::Red),
    ("天书", GearColor::Purple),
    ("绝境", GearColor::Purple),
];

/// One step of the color cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorRule {
    Fixed(GearColor),
    SourcePrefix,
    Rarity,
}

impl ColorRule {
    fn apply(self, rarity: u8, source: &str) -> Option<GearColor> {
        match self {
            ColorRule::Fixed(color) => Some(color),
            ColorRule::SourcePrefix => source_color(source),
            ColorRule::Rarity => rarity_color(rarity),
        }
    }
}

impl ColorScheme {
    /// Rules evaluated top to bottom; the first hit wins
    fn rules(self) -> &'static [ColorRule] {
        match self {
            ColorScheme::None => &[ColorRule::Fixed(GearColor::White)],
            ColorScheme::Source => &[ColorRule::SourcePrefix, ColorRule::Rarity],
            ColorScheme::Rarity => &[ColorRule::Rarity],
        }
    }
}

/// Color for a rarity, `None` for rarities outside the table
pub fn rarity_color(rarity: u8) -> Option<GearColor> {
    RARITY_COLORS
        .iter()
        .find(|(r, _)| *r == rarity)
        .map(|(_, color)| *color)
}

/// Color for a source string, matched on its first two characters
pub fn source_color(source: &str) -> Option<GearColor> {
    let prefix = match source.char_indices().nth(2) {
        Some((end, _)) => &source[..end],
        None => source,
    };
    SOURCE_COLORS
        .iter()
        .find(|(key, _)| *key == prefix)
        .map(|(_, color)| *color)
}

/// Classify a gear's display color under `scheme`
pub fn classify(rarity: u8, source: &str, scheme: ColorScheme) -> Option<GearColor> {
    scheme
        .rules()
        .iter()
        .find_map(|rule| rule.apply(rarity, source))
}
