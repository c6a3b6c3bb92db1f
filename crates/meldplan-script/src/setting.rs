//! User settings files

use crate::error::Result;
use meldplan_core::Setting;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parse settings from a RON string
pub fn parse_setting(content: &str) -> Result<Setting> {
    Ok(ron::from_str(content)?)
}

/// Load settings from a RON file
pub fn load_setting(path: impl AsRef<Path>) -> Result<Setting> {
    let path = path.as_ref();
    let setting = parse_setting(&fs::read_to_string(path)?)?;
    debug!(path = %path.display(), ?setting, "loaded settings");
    Ok(setting)
}

#[cfg(test)]
mod tests {
    use super::*;
    use meldplan_core::ColorScheme;

    #[test]
    fn test_parse_setting() {
        let setting = parse_setting("(gear_color_scheme: none)").unwrap();
        assert_eq!(setting.gear_color_scheme, ColorScheme::None);
    }

    #[test]
    fn test_parse_setting_rejects_unknown_scheme() {
        assert!(parse_setting("(gear_color_scheme: rainbow)").is_err());
    }

    #[test]
    fn test_load_setting_missing_file() {
        assert!(matches!(
            load_setting("/nonexistent/setting.ron"),
            Err(crate::Error::Io(_))
        ));
    }
}
