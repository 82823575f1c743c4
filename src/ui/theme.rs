use std::fs;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::effects::particles::Palette;

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub bg: String,
    pub fg: String,
    pub text_correct: String,
    pub text_incorrect: String,
    pub text_incorrect_bg: String,
    pub text_pending: String,
    pub text_cursor_bg: String,
    pub text_cursor_fg: String,
    pub accent: String,
    pub accent_alt: String,
    pub border: String,
    pub border_focused: String,
    pub header_bg: String,
    pub header_fg: String,
    pub prompt: String,
    pub output: String,
    pub error: String,
    pub warning: String,
    pub success: String,
    pub particle_cyan: String,
    pub particle_indigo: String,
    pub particle_violet: String,
}

impl Theme {
    pub fn load(name: &str) -> Option<Self> {
        // Try user themes dir
        if let Some(config_dir) = dirs::config_dir() {
            let user_theme_path = config_dir
                .join("termfolio")
                .join("themes")
                .join(format!("{name}.toml"));
            if let Ok(content) = fs::read_to_string(&user_theme_path) {
                match toml::from_str::<Theme>(&content) {
                    Ok(theme) => return Some(theme),
                    Err(e) => debug!(path = %user_theme_path.display(), error = %e, "ignoring user theme"),
                }
            }
        }

        // Try bundled themes
        let filename = format!("{name}.toml");
        let file = ThemeAssets::get(&filename)?;
        let content = std::str::from_utf8(file.data.as_ref()).ok()?;
        toml::from_str::<Theme>(content).ok()
    }

    pub fn available_themes() -> Vec<String> {
        let mut names: Vec<String> = ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect();
        names.sort();
        names
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load("neon").unwrap_or_else(|| Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: "#05060a".to_string(),
            fg: "#e5e7eb".to_string(),
            text_correct: "#4ade80".to_string(),
            text_incorrect: "#f87171".to_string(),
            text_incorrect_bg: "#3b1114".to_string(),
            text_pending: "#6b7280".to_string(),
            text_cursor_bg: "#00f5ff".to_string(),
            text_cursor_fg: "#05060a".to_string(),
            accent: "#00f5ff".to_string(),
            accent_alt: "#8b5cf6".to_string(),
            border: "#1f2937".to_string(),
            border_focused: "#00f5ff".to_string(),
            header_bg: "#111827".to_string(),
            header_fg: "#00f5ff".to_string(),
            prompt: "#00f5ff".to_string(),
            output: "#4ade80".to_string(),
            error: "#f87171".to_string(),
            warning: "#facc15".to_string(),
            success: "#4ade80".to_string(),
            particle_cyan: "#00f5ff".to_string(),
            particle_indigo: "#6366f1".to_string(),
            particle_violet: "#8b5cf6".to_string(),
        }
    }
}

impl ThemeColors {
    pub fn parse_color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        let channel = |at: usize| {
            hex.get(at..at + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        };
        if hex.len() == 6 {
            if let (Some(r), Some(g), Some(b)) = (channel(0), channel(2), channel(4)) {
                return Color::Rgb(r, g, b);
            }
        }
        Color::White
    }

    pub fn bg(&self) -> Color { Self::parse_color(&self.bg) }
    pub fn fg(&self) -> Color { Self::parse_color(&self.fg) }
    pub fn text_correct(&self) -> Color { Self::parse_color(&self.text_correct) }
    pub fn text_incorrect(&self) -> Color { Self::parse_color(&self.text_incorrect) }
    pub fn text_incorrect_bg(&self) -> Color { Self::parse_color(&self.text_incorrect_bg) }
    pub fn text_pending(&self) -> Color { Self::parse_color(&self.text_pending) }
    pub fn text_cursor_bg(&self) -> Color { Self::parse_color(&self.text_cursor_bg) }
    pub fn text_cursor_fg(&self) -> Color { Self::parse_color(&self.text_cursor_fg) }
    pub fn accent(&self) -> Color { Self::parse_color(&self.accent) }
    pub fn accent_alt(&self) -> Color { Self::parse_color(&self.accent_alt) }
    pub fn border(&self) -> Color { Self::parse_color(&self.border) }
    pub fn border_focused(&self) -> Color { Self::parse_color(&self.border_focused) }
    pub fn header_bg(&self) -> Color { Self::parse_color(&self.header_bg) }
    pub fn header_fg(&self) -> Color { Self::parse_color(&self.header_fg) }
    pub fn prompt(&self) -> Color { Self::parse_color(&self.prompt) }
    pub fn output(&self) -> Color { Self::parse_color(&self.output) }
    pub fn error(&self) -> Color { Self::parse_color(&self.error) }
    pub fn warning(&self) -> Color { Self::parse_color(&self.warning) }
    pub fn success(&self) -> Color { Self::parse_color(&self.success) }

    pub fn particle(&self, palette: Palette) -> Color {
        match palette {
            Palette::Cyan => Self::parse_color(&self.particle_cyan),
            Palette::Indigo => Self::parse_color(&self.particle_indigo),
            Palette::Violet => Self::parse_color(&self.particle_violet),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(ThemeColors::parse_color("#00f5ff"), Color::Rgb(0, 245, 255));
        assert_eq!(ThemeColors::parse_color("nonsense"), Color::White);
    }

    #[test]
    fn test_parse_color_rejects_multibyte_text() {
        assert_eq!(ThemeColors::parse_color("#a\u{e9}bcd"), Color::White);
        assert_eq!(ThemeColors::parse_color("\u{e9}\u{e9}\u{e9}"), Color::White);
        assert_eq!(ThemeColors::parse_color("#+1+2+3"), Color::White);
    }

    #[test]
    fn test_bundled_themes_parse() {
        let names = Theme::available_themes();
        assert!(names.contains(&"neon".to_string()));
        for name in names {
            let content = ThemeAssets::get(&format!("{name}.toml")).unwrap();
            let text = std::str::from_utf8(content.data.as_ref()).unwrap();
            let theme: Theme = toml::from_str(text).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn test_unknown_theme_is_none() {
        assert!(Theme::load("does-not-exist").is_none());
    }
}
