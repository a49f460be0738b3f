//! Theme selection and terminal capability detection.

use std::env;

use tracing::debug;

use crate::ui::theme::{Theme, ThemeDefinition, catalog};

/// Environment variable naming the theme to use; wins over the config file.
pub const THEME_ENV: &str = "MENUDOCK_THEME";
/// Environment variable forcing the color capability (`truecolor` | `ansi256`).
pub const COLOR_MODE_ENV: &str = "MENUDOCK_COLOR_MODE";

/// Built theme plus the catalog entry it came from.
pub struct LoadedTheme {
    pub definition: &'static ThemeDefinition,
    pub theme: Box<dyn Theme>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorCapability {
    Truecolor,
    Ansi256,
}

impl ColorCapability {
    /// `MENUDOCK_COLOR_MODE` wins; otherwise `COLORTERM` or `TERM` must
    /// advertise 24-bit color.
    fn detect() -> Self {
        if let Some(forced) = env::var(COLOR_MODE_ENV).ok().and_then(|value| parse_color_mode(&value)) {
            return forced;
        }
        let advertised = ["COLORTERM", "TERM"]
            .iter()
            .filter_map(|name| env::var(name).ok())
            .map(|value| value.to_ascii_lowercase())
            .any(|value| value.contains("truecolor") || value.contains("24bit"));
        if advertised { Self::Truecolor } else { Self::Ansi256 }
    }
}

/// Picks the palette: 256-color terminals always get the ANSI fallback;
/// otherwise `MENUDOCK_THEME`, then `preferred_theme`, then the default.
pub fn load(preferred_theme: Option<&str>) -> LoadedTheme {
    let definition = match ColorCapability::detect() {
        ColorCapability::Ansi256 => {
            debug!("no truecolor support advertised; using the ANSI palette");
            catalog::default_ansi()
        }
        ColorCapability::Truecolor => env::var(THEME_ENV)
            .ok()
            .and_then(|name| catalog::resolve(name.trim()))
            .or_else(|| preferred_theme.and_then(|name| catalog::resolve(name.trim())))
            .unwrap_or_else(catalog::default_truecolor),
    };
    debug!(theme = definition.label, ansi = definition.is_ansi_fallback, "theme selected");
    LoadedTheme {
        definition,
        theme: definition.build(),
    }
}

fn parse_color_mode(value: &str) -> Option<ColorCapability> {
    match value.trim().to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" => Some(ColorCapability::Truecolor),
        "ansi256" | "256" | "8bit" => Some(ColorCapability::Ansi256),
        _ => None,
    }
}
