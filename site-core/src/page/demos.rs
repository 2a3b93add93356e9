use egui::{RichText, Ui};
use folio::{
    badge, card_frame, BadgeStyle, CarouselGeometry, CarouselScroller, CarouselView, Demo,
    ScrollDirection,
};

use super::Page;
use crate::ui_consts::{
    CARD_SPACING, DEMO_CARD_HEIGHT, DEMO_CARD_MIN_WIDTH, DEMO_MODAL_WIDTH, HEADING_TEXT_SIZE,
};

#[derive(Debug, Default)]
pub struct DemosState {
    pub scroller: CarouselScroller,
    /// Geometry seen on the last frame, used by keyboard scrolling
    pub geometry: CarouselGeometry,
    /// Card shown in the details modal
    pub open: Option<usize>,
}

impl DemosState {
    pub fn new(scroller: CarouselScroller) -> Self {
        Self {
            scroller,
            ..Self::default()
        }
    }

    /// Scrolls from the last known geometry; returns `(from, to)`.
    pub fn scroll(&mut self, direction: ScrollDirection, now: f64) -> (f32, f32) {
        let from = self.geometry.offset;
        let to = self.scroller.scroll(self.geometry, direction, now);
        (from, to)
    }
}

#[derive(Debug, Default)]
pub struct DemosOutput {
    pub scrolled: Option<(ScrollDirection, f32, f32)>,
    pub opened: Option<usize>,
}

pub fn render_demos(ui: &mut Ui, state: &mut DemosState, page: Page<'_>, now: f64) -> DemosOutput {
    let labels = &page.content.labels;
    ui.label(
        RichText::new(page.text(&labels.demos_heading))
            .size(HEADING_TEXT_SIZE)
            .strong()
            .color(page.palette.accent),
    );
    ui.add_space(CARD_SPACING);

    let view = CarouselView::new("site_demos_carousel", &mut state.scroller, now)
        .with_labels(page.text(&labels.previous), page.text(&labels.next));
    let out = view.show(ui, |ui| {
        let mut opened = None;
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = CARD_SPACING;
            for (index, demo) in page.content.demos.iter().enumerate() {
                if demo_card(ui, demo, page) {
                    opened = Some(index);
                }
            }
        });
        opened
    });
    state.geometry = out.geometry;

    if let Some(index) = out.inner {
        state.open = Some(index);
    }
    DemosOutput {
        scrolled: out.scrolled,
        opened: out.inner,
    }
}

/// Returns true when the details button was clicked.
fn demo_card(ui: &mut Ui, demo: &Demo, page: Page<'_>) -> bool {
    let labels = &page.content.labels;
    let mut details = false;
    card_frame(ui).show(ui, |ui| {
        ui.set_width(DEMO_CARD_MIN_WIDTH);
        ui.set_min_height(DEMO_CARD_HEIGHT);
        ui.vertical(|ui| {
            ui.label(RichText::new(page.text(&demo.title)).strong().size(16.0));
            ui.label(page.text(&demo.description));
            ui.add_space(4.0);
            technologies(ui, demo, page);
            ui.add_space(4.0);
            for feature in demo.features.get(page.lang).iter().take(3) {
                ui.label(RichText::new(format!("• {feature}")).small());
            }
            ui.add_space(CARD_SPACING);
            ui.horizontal(|ui| {
                ui.hyperlink_to(page.text(&labels.view_demo), &demo.url);
                details = ui.button(page.text(&labels.details)).clicked();
            });
        });
    });
    details
}

fn technologies(ui: &mut Ui, demo: &Demo, page: Page<'_>) {
    ui.horizontal_wrapped(|ui| {
        for tech in &demo.technologies {
            badge(ui, tech, BadgeStyle::Secondary, page.palette.accent);
        }
    });
}

/// Shows the details of the open card. Returns the index of the card when
/// the modal was closed this frame.
pub fn demo_modal(ctx: &egui::Context, state: &mut DemosState, page: Page<'_>) -> Option<usize> {
    let index = state.open?;
    let Some(demo) = page.content.demos.get(index) else {
        state.open = None;
        return None;
    };
    let labels = &page.content.labels;

    let mut close_clicked = false;
    let modal = egui::Modal::new(egui::Id::new("site_demo_modal")).show(ctx, |ui| {
        ui.set_width(DEMO_MODAL_WIDTH);
        ui.label(
            RichText::new(page.text(&demo.title))
                .size(HEADING_TEXT_SIZE)
                .strong()
                .color(page.palette.accent),
        );
        ui.separator();
        ui.label(page.text(&demo.description));
        ui.add_space(CARD_SPACING);
        technologies(ui, demo, page);
        ui.add_space(CARD_SPACING);
        ui.label(RichText::new(page.text(&labels.features)).strong());
        for feature in demo.features.get(page.lang) {
            ui.label(format!("• {feature}"));
        }
        ui.add_space(CARD_SPACING);
        ui.horizontal(|ui| {
            ui.hyperlink_to(page.text(&labels.view_demo), &demo.url);
            close_clicked = ui.button(page.text(&labels.close)).clicked();
        });
    });

    if close_clicked || modal.should_close() {
        state.open = None;
        return Some(index);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_scroll_uses_last_geometry() {
        let mut state = DemosState {
            geometry: CarouselGeometry {
                offset: 0.0,
                client_width: 300.0,
                scroll_width: 1000.0,
            },
            ..DemosState::default()
        };
        assert_eq!(state.scroll(ScrollDirection::Right, 0.0), (0.0, 240.0));
        assert!(state.scroller.is_animating());
    }

    #[test]
    fn scroll_without_layout_stays_at_zero() {
        let mut state = DemosState::default();
        assert_eq!(state.scroll(ScrollDirection::Right, 0.0), (0.0, 0.0));
    }
}
