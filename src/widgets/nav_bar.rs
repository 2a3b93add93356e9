use egui::{Align, Color32, CornerRadius, Id, Layout, Rect, RichText, Sense, Stroke, Ui, Vec2};

use crate::section::SectionId;

pub const INDICATOR_WIDTH: f32 = 60.0;
pub const INDICATOR_GAP: f32 = 8.0;
const INDICATOR_THICKNESS: f32 = 2.0;
const INDICATOR_ANIMATION_SECS: f32 = 0.25;

/// Indicator offset from the left of the bar when button rects are unknown.
pub fn indicator_fallback_x(index: usize) -> f32 {
    index as f32 * (INDICATOR_WIDTH + INDICATOR_GAP)
}

pub struct NavBarOutput {
    pub response: egui::Response,
    pub clicked: Option<SectionId>,
}

/// Horizontal list of section buttons with a sliding underline under the
/// active one.
pub struct NavBar<'a> {
    id: Id,
    active: SectionId,
    labels: [&'a str; 6],
    accent: Color32,
}

impl<'a> NavBar<'a> {
    /// `label` is called once per section, in navigation order.
    pub fn new(active: SectionId, label: impl Fn(SectionId) -> &'a str) -> Self {
        Self {
            id: Id::new("folio_nav_bar"),
            active,
            labels: SectionId::ALL.map(label),
            accent: crate::theme::MIKU,
        }
    }

    pub fn with_accent(mut self, accent: Color32) -> Self {
        self.accent = accent;
        self
    }

    pub fn show(self, ui: &mut Ui) -> NavBarOutput {
        let mut clicked = None;
        let mut active_rect: Option<Rect> = None;

        let inner = ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
            ui.spacing_mut().item_spacing.x = INDICATOR_GAP;
            let left = ui.cursor().left();
            for (section, label) in SectionId::ALL.iter().zip(self.labels) {
                let is_active = *section == self.active;
                let text = if is_active {
                    RichText::new(label).color(self.accent).strong()
                } else {
                    RichText::new(label).color(ui.visuals().weak_text_color())
                };
                let fill = if is_active {
                    self.accent.gamma_multiply(0.2)
                } else {
                    Color32::TRANSPARENT
                };
                let button = egui::Button::new(text)
                    .fill(fill)
                    .stroke(Stroke::NONE)
                    .corner_radius(CornerRadius::same(14))
                    .min_size(Vec2::new(0.0, 28.0))
                    .sense(Sense::click());
                let resp = ui.add(button);
                if resp.clicked() {
                    clicked = Some(*section);
                }
                if is_active {
                    active_rect = Some(resp.rect);
                }
            }
            left
        });

        let bar = inner.response.rect;
        let target_x = active_rect.map_or_else(
            || inner.inner + indicator_fallback_x(self.active.index()),
            |r| r.center().x - INDICATOR_WIDTH / 2.0,
        );
        let x = ui
            .ctx()
            .animate_value_with_time(self.id.with("indicator"), target_x, INDICATOR_ANIMATION_SECS);
        let indicator = Rect::from_min_size(
            egui::pos2(x, bar.bottom() - INDICATOR_THICKNESS),
            Vec2::new(INDICATOR_WIDTH, INDICATOR_THICKNESS),
        );
        ui.painter()
            .rect_filled(indicator, CornerRadius::same(1), self.accent);

        NavBarOutput {
            response: inner.response,
            clicked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_steps_by_width_plus_gap() {
        assert_eq!(indicator_fallback_x(0), 0.0);
        assert_eq!(indicator_fallback_x(3), 204.0);
    }
}
