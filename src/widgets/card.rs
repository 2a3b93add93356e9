use egui::{Color32, CornerRadius, Frame, Margin, Response, RichText, Stroke, Ui};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeStyle {
    /// Accent filled, for skills
    #[default]
    Primary,
    /// Muted, for technology lists
    Secondary,
}

/// Rounded panel used for every content card.
pub fn card_frame(ui: &Ui) -> Frame {
    let visuals = ui.visuals();
    Frame::new()
        .fill(visuals.extreme_bg_color.gamma_multiply(0.85))
        .stroke(visuals.widgets.noninteractive.bg_stroke)
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::same(16))
}

/// Small pill with a short text.
pub fn badge(ui: &mut Ui, text: &str, style: BadgeStyle, accent: Color32) -> Response {
    let (fill, color) = match style {
        BadgeStyle::Primary => (accent, Color32::BLACK),
        BadgeStyle::Secondary => (
            ui.visuals().faint_bg_color,
            ui.visuals().strong_text_color(),
        ),
    };
    Frame::new()
        .fill(fill)
        .stroke(Stroke::NONE)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::symmetric(8, 2))
        .show(ui, |ui| ui.label(RichText::new(text).small().color(color)))
        .response
}
