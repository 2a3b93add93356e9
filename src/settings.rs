use serde::{Deserialize, Serialize};

use crate::carousel::DEFAULT_STEP_FRACTION;
use crate::theme::ThemePreference;

const KEY_PREFIX: &str = "folio_preferences";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SettingsScroll {
    /// Height of the fixed navigation bar; navigation lands sections right below it
    pub nav_height: f32,

    /// Fraction of the viewport cut from top and bottom to form the center band
    pub center_band_margin: f32,

    /// Share of the visible carousel width moved per arrow press
    pub carousel_step_fraction: f32,

    /// Seconds
    pub page_scroll_duration: f32,

    /// Seconds
    pub carousel_scroll_duration: f32,

    /// Seconds
    pub reveal_duration: f32,
}

impl Default for SettingsScroll {
    fn default() -> Self {
        Self {
            nav_height: 60.0,
            center_band_margin: 0.4,
            carousel_step_fraction: DEFAULT_STEP_FRACTION,
            page_scroll_duration: 0.5,
            carousel_scroll_duration: 0.4,
            reveal_duration: 0.5,
        }
    }
}

/// Choices of the visitor kept between sessions.
///
/// Only the theme is kept; the page always opens in Spanish.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: ThemePreference,
}

impl Preferences {
    pub fn load(ctx: &egui::Context) -> Self {
        ctx.data_mut(|data| {
            data.get_persisted::<Self>(egui::Id::new(KEY_PREFIX))
                .unwrap_or_default()
        })
    }

    pub fn save(self, ctx: &egui::Context) {
        ctx.data_mut(|data| {
            data.insert_persisted(egui::Id::new(KEY_PREFIX), self);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_page_layout() {
        let s = SettingsScroll::default();
        assert_eq!(s.nav_height, 60.0);
        assert_eq!(s.center_band_margin, 0.4);
        assert_eq!(s.carousel_step_fraction, 0.8);
    }

    #[test]
    fn preferences_contract() {
        let prefs = Preferences {
            theme: ThemePreference::Dark,
        };
        let json = serde_json::to_string(&prefs).unwrap();
        assert_eq!(json, r#"{"theme":"Dark"}"#);
        let back: Preferences = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prefs);
    }

    #[test]
    fn preferences_roundtrip_through_egui_memory() {
        let ctx = egui::Context::default();
        Preferences {
            theme: ThemePreference::Light,
        }
        .save(&ctx);
        assert_eq!(Preferences::load(&ctx).theme, ThemePreference::Light);
    }
}
