use egui::{CornerRadius, Id, Rect, Ui, Vec2};

use crate::carousel::{CarouselGeometry, CarouselScroller, ScrollDirection};

const ARROW_SIZE: Vec2 = Vec2::new(32.0, 32.0);

/// What happened to the carousel this frame.
pub struct CarouselOutput<R> {
    pub inner: R,
    pub geometry: CarouselGeometry,
    /// Arrow pressed this frame: direction, start offset and target offset
    pub scrolled: Option<(ScrollDirection, f32, f32)>,
}

/// Horizontal scroll area with left and right arrows driving a
/// [`CarouselScroller`].
pub struct CarouselView<'a> {
    id: Id,
    scroller: &'a mut CarouselScroller,
    now: f64,
    previous_label: &'a str,
    next_label: &'a str,
}

impl<'a> CarouselView<'a> {
    pub fn new(
        id_salt: impl std::hash::Hash,
        scroller: &'a mut CarouselScroller,
        now: f64,
    ) -> Self {
        Self {
            id: Id::new(id_salt),
            scroller,
            now,
            previous_label: "",
            next_label: "",
        }
    }

    /// Hover texts of the arrows.
    pub fn with_labels(mut self, previous: &'a str, next: &'a str) -> Self {
        self.previous_label = previous;
        self.next_label = next;
        self
    }

    pub fn show<R>(
        self,
        ui: &mut Ui,
        add_contents: impl FnOnce(&mut Ui) -> R,
    ) -> CarouselOutput<R> {
        let forced = self.scroller.offset_at(self.now);

        let mut area = egui::ScrollArea::horizontal()
            .id_salt(self.id)
            .auto_shrink([false, true]);
        if let Some(offset) = forced {
            area = area.horizontal_scroll_offset(offset);
        }
        let out = area.show(ui, add_contents);

        let viewport = out.inner_rect;
        let geometry = CarouselGeometry {
            offset: out.state.offset.x,
            client_width: viewport.width(),
            scroll_width: out.content_size.x.max(viewport.width()),
        };

        let mut scrolled = None;
        let arrows = [
            (ScrollDirection::Left, "◀", self.previous_label, viewport.left_center()),
            (ScrollDirection::Right, "▶", self.next_label, viewport.right_center()),
        ];
        for (direction, icon, label, anchor) in arrows {
            let rect = Rect::from_center_size(anchor, ARROW_SIZE);
            let mut button = ui.put(
                rect,
                egui::Button::new(icon).corner_radius(CornerRadius::same(16)),
            );
            if !label.is_empty() {
                button = button.on_hover_text(label);
            }
            if button.clicked() {
                let to = self.scroller.scroll(geometry, direction, self.now);
                scrolled = Some((direction, geometry.offset, to));
            }
        }

        if self.scroller.is_animating() {
            ui.ctx().request_repaint();
        }

        CarouselOutput {
            inner: out.inner,
            geometry,
            scrolled,
        }
    }
}
