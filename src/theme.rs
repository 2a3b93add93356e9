use egui::Color32;
use serde::{Deserialize, Serialize};

pub const MIKU: Color32 = Color32::from_rgb(0x39, 0xC5, 0xBB);
pub const MIKU_LIGHT: Color32 = Color32::from_rgb(0x0F, 0xF1, 0xCE);
pub const CYAN: Color32 = Color32::from_rgb(0x00, 0xBC, 0xD4);
pub const BACKGROUND_DARK: Color32 = Color32::from_rgb(0x18, 0x1A, 0x1B);
pub const BACKGROUND_LIGHT: Color32 = Color32::from_rgb(0xF8, 0xFA, 0xFC);
pub const HOT_PINK: Color32 = Color32::from_rgb(0xFF, 0x69, 0xB4);
pub const WHATSAPP: Color32 = Color32::from_rgb(0x25, 0xD3, 0x66);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemePreference {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemePreference {
    /// Dark goes to light, everything else (including system) goes to dark.
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::System | ThemePreference::Light => ThemePreference::Dark,
        }
    }

    /// Icon of the toggle button: a sun while dark, a moon otherwise.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            ThemePreference::Dark => "☀",
            ThemePreference::System | ThemePreference::Light => "🌙",
        }
    }

    pub fn apply(self, ctx: &egui::Context) {
        ctx.set_theme(egui::ThemePreference::from(self));
    }
}

impl From<ThemePreference> for egui::ThemePreference {
    fn from(value: ThemePreference) -> Self {
        match value {
            ThemePreference::System => egui::ThemePreference::System,
            ThemePreference::Light => egui::ThemePreference::Light,
            ThemePreference::Dark => egui::ThemePreference::Dark,
        }
    }
}

/// Colors derived from the resolved (light or dark) theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub accent: Color32,
    pub background: Color32,
    pub particles: [Color32; 3],
    pub links: Color32,
}

impl Palette {
    pub fn for_dark_mode(dark: bool) -> Self {
        if dark {
            Self {
                accent: MIKU_LIGHT,
                background: BACKGROUND_DARK,
                particles: [Color32::WHITE; 3],
                links: Color32::WHITE,
            }
        } else {
            Self {
                accent: MIKU,
                background: BACKGROUND_LIGHT,
                particles: [MIKU, MIKU_LIGHT, CYAN],
                links: CYAN,
            }
        }
    }

    pub fn from_ctx(ctx: &egui::Context) -> Self {
        Self::for_dark_mode(ctx.style().visuals.dark_mode)
    }
}
