//! User settings consulted by gear views

use crate::ColorScheme;
use serde::{Deserialize, Serialize};

/// Display settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Setting {
    /// How gear names are colored
    pub gear_color_scheme: ColorScheme,
}

impl Setting {
    pub fn new(gear_color_scheme: ColorScheme) -> Self {
        Self { gear_color_scheme }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setting_ron() {
        let setting: Setting = ron::from_str("(gear_color_scheme: source)").unwrap();
        assert_eq!(setting.gear_color_scheme, ColorScheme::Source);

        let setting: Setting = ron::from_str("()").unwrap();
        assert_eq!(setting.gear_color_scheme, ColorScheme::Rarity);
    }
}
