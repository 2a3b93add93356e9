use crate::keybindings::KEYBINDINGS;
use crate::ui_consts::{DEBUG_MONO_FONT_SIZE, UI_MARGIN};
use egui::{FontId, Pos2, Rect};
use folio::{Language, SectionId, SectionRegions};

pub struct DebugInfo<'a> {
    pub fps: f32,
    pub active: SectionId,
    pub language: Language,
    pub scroll_offset: f32,
    pub viewport_height: f32,
    pub regions: &'a SectionRegions,
    pub events: &'a [String],
}

pub fn compose(info: &DebugInfo<'_>) -> String {
    let mut lines = vec![
        format!("FPS: {:.1}", info.fps),
        format!("Active: {}", info.active),
        format!("Lang: {}", info.language),
        format!("Scroll: {:.1}", info.scroll_offset),
        format!("Viewport: {:.1}", info.viewport_height),
    ];
    for (id, region) in info.regions.iter() {
        lines.push(format!(
            "{:<10} top {:>8.1} h {:>7.1}",
            id.key(),
            region.top,
            region.height
        ));
    }
    if info.events.is_empty() {
        for (key, desc) in KEYBINDINGS {
            lines.push(format!("{key:<12} {desc}"));
        }
    } else {
        lines.extend(info.events.iter().rev().take(8).cloned());
    }
    lines.join("\n")
}

/// Monospace text in the top-right corner, below `top_inset`.
pub fn render(ctx: &egui::Context, info: &DebugInfo<'_>, top_inset: f32) {
    let text = compose(info);
    let screen: Rect = ctx.screen_rect();
    let text_color = ctx.style().visuals.strong_text_color();
    let font_id = FontId::monospace(DEBUG_MONO_FONT_SIZE);
    let galley = ctx.fonts(|f| f.layout_no_wrap(text, font_id, text_color));
    let pos = Pos2::new(
        screen.right() - UI_MARGIN - galley.size().x,
        screen.top() + top_inset + UI_MARGIN,
    );
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("site_debug_overlay"),
    ));
    painter.rect_filled(
        Rect::from_min_size(pos, galley.size()).expand(4.0),
        4.0,
        ctx.style().visuals.extreme_bg_color.gamma_multiply(0.8),
    );
    painter.galley(pos, galley, text_color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio::Region;

    #[test]
    fn lists_regions_and_keybindings_without_events() {
        let regions: SectionRegions = [(SectionId::Skills, Region::new(120.0, 300.0))]
            .into_iter()
            .collect();
        let text = compose(&DebugInfo {
            fps: 60.0,
            active: SectionId::Skills,
            language: Language::En,
            scroll_offset: 10.0,
            viewport_height: 800.0,
            regions: &regions,
            events: &[],
        });
        assert!(text.contains("Active: skills"));
        assert!(text.contains("Lang: en"));
        assert!(text.contains("toggle theme"));
    }

    #[test]
    fn shows_latest_events_first() {
        let events = vec!["first".to_string(), "second".to_string()];
        let text = compose(&DebugInfo {
            fps: 0.0,
            active: SectionId::About,
            language: Language::Es,
            scroll_offset: 0.0,
            viewport_height: 0.0,
            regions: &SectionRegions::new(),
            events: &events,
        });
        let second = text.find("second").unwrap();
        let first = text.find("first").unwrap();
        assert!(second < first);
        assert!(!text.contains("toggle theme"));
    }
}
