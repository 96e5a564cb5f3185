use std::fs;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

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
    pub title: String,
    pub muted: String,
    pub border: String,
    pub row_bg: String,
    pub row_fg: String,
    pub row_highlight_bg: String,
    pub button_bg: String,
    pub button_fg: String,
    pub header_bg: String,
    pub header_fg: String,
    pub backdrop: String,
    pub modal_bg: String,
    pub modal_fg: String,
    pub modal_title: String,
    pub error: String,
    pub success: String,
}

impl Theme {
    pub fn load(name: &str) -> Option<Self> {
        // Try user themes dir
        if let Some(config_dir) = dirs::config_dir() {
            let user_theme_path = config_dir
                .join("holonet")
                .join("themes")
                .join(format!("{name}.toml"));
            if let Ok(content) = fs::read_to_string(&user_theme_path) {
                match toml::from_str::<Theme>(&content) {
                    Ok(theme) => return Some(theme),
                    Err(err) => log::warn!("ignoring theme {}: {err}", user_theme_path.display()),
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
        ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load("rebel-purple").unwrap_or_else(|| Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: "#663399".to_string(),
            fg: "#ffffff".to_string(),
            title: "#ffffff".to_string(),
            muted: "#cccccc".to_string(),
            border: "#cccccc".to_string(),
            row_bg: "#ffffff".to_string(),
            row_fg: "#333333".to_string(),
            row_highlight_bg: "#e6d9f2".to_string(),
            button_bg: "#663399".to_string(),
            button_fg: "#ffffff".to_string(),
            header_bg: "#4b2470".to_string(),
            header_fg: "#ffffff".to_string(),
            backdrop: "#1f0f2e".to_string(),
            modal_bg: "#ffffff".to_string(),
            modal_fg: "#333333".to_string(),
            modal_title: "#663399".to_string(),
            error: "#f38ba8".to_string(),
            success: "#a6e3a1".to_string(),
        }
    }
}

impl ThemeColors {
    pub fn parse_color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Color::Rgb(r, g, b);
            }
        }
        Color::White
    }

    pub fn bg(&self) -> Color { Self::parse_color(&self.bg) }
    pub fn fg(&self) -> Color { Self::parse_color(&self.fg) }
    pub fn title(&self) -> Color { Self::parse_color(&self.title) }
    pub fn muted(&self) -> Color { Self::parse_color(&self.muted) }
    pub fn border(&self) -> Color { Self::parse_color(&self.border) }
    pub fn row_bg(&self) -> Color { Self::parse_color(&self.row_bg) }
    pub fn row_fg(&self) -> Color { Self::parse_color(&self.row_fg) }
    pub fn row_highlight_bg(&self) -> Color { Self::parse_color(&self.row_highlight_bg) }
    pub fn button_bg(&self) -> Color { Self::parse_color(&self.button_bg) }
    pub fn button_fg(&self) -> Color { Self::parse_color(&self.button_fg) }
    pub fn header_bg(&self) -> Color { Self::parse_color(&self.header_bg) }
    pub fn header_fg(&self) -> Color { Self::parse_color(&self.header_fg) }
    pub fn backdrop(&self) -> Color { Self::parse_color(&self.backdrop) }
    pub fn modal_bg(&self) -> Color { Self::parse_color(&self.modal_bg) }
    pub fn modal_fg(&self) -> Color { Self::parse_color(&self.modal_fg) }
    pub fn modal_title(&self) -> Color { Self::parse_color(&self.modal_title) }
    pub fn error(&self) -> Color { Self::parse_color(&self.error) }
    pub fn success(&self) -> Color { Self::parse_color(&self.success) }
}
