use folio::{ScrollAnimation, SmoothScroll};

/// Vertical position of the page and the navigation animation driving it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageScroll {
    animation: Option<ScrollAnimation>,
    /// Offset measured after the last layout
    pub offset: f32,
    pub max_offset: f32,
}

impl PageScroll {
    /// Records the scroll area geometry of the frame that was just laid out.
    pub fn measured(&mut self, offset: f32, content_height: f32, viewport_height: f32) {
        self.offset = offset;
        self.max_offset = (content_height - viewport_height).max(0.0);
    }

    /// Animates from the current offset to `target` clamped into the
    /// scrollable range, replacing any running animation. Returns the clamped
    /// target.
    pub fn start(&mut self, target: f32, duration: f32, now: f64) -> f32 {
        let target = target.clamp(0.0, self.max_offset);
        self.animation = Some(ScrollAnimation::start(
            SmoothScroll::new(self.offset, target, duration),
            now,
        ));
        target
    }

    /// Drops the animation when the user scrolls or drags the page.
    /// Returns true if an animation was cancelled.
    pub fn interrupt(&mut self, wheel_delta_y: f32, dragging: bool) -> bool {
        if self.animation.is_some() && (wheel_delta_y != 0.0 || dragging) {
            self.animation = None;
            return true;
        }
        false
    }

    /// Offset to force on the scroll area this frame, if animating.
    pub fn tick(&mut self, now: f64) -> Option<f32> {
        let anim = self.animation?;
        let (offset, done) = anim.tick(now);
        if done {
            self.animation = None;
        }
        Some(offset)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> PageScroll {
        let mut page = PageScroll::default();
        page.measured(400.0, 3000.0, 800.0);
        page
    }

    #[test]
    fn target_is_clamped_to_the_scroll_range() {
        let mut page = page();
        assert_eq!(page.max_offset, 2200.0);
        assert_eq!(page.start(3240.0, 0.6, 0.0), 2200.0);
        assert_eq!(page.tick(0.6), Some(2200.0));
        assert_eq!(page.start(-60.0, 0.6, 0.0), 0.0);
    }

    #[test]
    fn short_page_cannot_scroll() {
        let mut page = PageScroll::default();
        page.measured(0.0, 500.0, 800.0);
        assert_eq!(page.start(300.0, 0.6, 0.0), 0.0);
    }

    #[test]
    fn animation_lands_on_the_target_and_stops() {
        let mut page = page();
        page.start(1000.0, 0.5, 10.0);
        assert_eq!(page.tick(10.0), Some(400.0));
        let mid = page.tick(10.25).unwrap();
        assert!(mid > 400.0 && mid < 1000.0);
        assert_eq!(page.tick(10.5), Some(1000.0));
        assert!(!page.is_animating());
        assert_eq!(page.tick(10.6), None);
    }

    #[test]
    fn wheel_scroll_cancels_the_animation() {
        let mut page = page();
        page.start(1000.0, 0.5, 0.0);
        assert!(!page.interrupt(0.0, false));
        assert!(page.is_animating());
        assert!(page.interrupt(-24.0, false));
        assert_eq!(page.tick(0.1), None);
    }

    #[test]
    fn dragging_cancels_the_animation() {
        let mut page = page();
        page.start(1000.0, 0.5, 0.0);
        assert!(page.interrupt(0.0, true));
        assert!(!page.is_animating());
    }

    #[test]
    fn idle_page_ignores_user_input() {
        let mut page = page();
        assert!(!page.interrupt(10.0, true));
    }
}
