use serde::{Deserialize, Serialize};

use crate::smooth_scroll::{ScrollAnimation, SmoothScroll};

/// Share of the visible width moved by one arrow press.
pub const DEFAULT_STEP_FRACTION: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollDirection {
    Left,
    Right,
}

/// Horizontal geometry of a scroll container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CarouselGeometry {
    /// Current offset from the left edge of the content
    pub offset: f32,
    /// Visible width
    pub client_width: f32,
    /// Full content width
    pub scroll_width: f32,
}

impl CarouselGeometry {
    pub fn max_offset(&self) -> f32 {
        (self.scroll_width - self.client_width).max(0.0)
    }
}

/// Offset after one step in `direction`, clamped to `[0, scroll_width - client_width]`.
pub fn scroll_target(
    geometry: &CarouselGeometry,
    direction: ScrollDirection,
    fraction: f32,
) -> f32 {
    let amount = geometry.client_width * fraction;
    match direction {
        ScrollDirection::Right => (geometry.offset + amount).min(geometry.max_offset()),
        ScrollDirection::Left => (geometry.offset - amount).max(0.0),
    }
}

/// Moves a horizontal card list in fixed steps with a smooth animation.
#[derive(Debug, Clone)]
pub struct CarouselScroller {
    step_fraction: f32,
    duration: f32,
    animation: Option<ScrollAnimation>,
}

impl Default for CarouselScroller {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_FRACTION, 0.4)
    }
}

impl CarouselScroller {
    pub fn new(step_fraction: f32, duration: f32) -> Self {
        Self {
            step_fraction,
            duration,
            animation: None,
        }
    }

    /// Starts an animation from the live offset towards the next step and
    /// returns its target. A running animation is replaced.
    pub fn scroll(
        &mut self,
        geometry: CarouselGeometry,
        direction: ScrollDirection,
        now: f64,
    ) -> f32 {
        let to = scroll_target(&geometry, direction, self.step_fraction);
        self.animation = Some(ScrollAnimation::start(
            SmoothScroll::new(geometry.offset, to, self.duration),
            now,
        ));
        to
    }

    /// Offset to force on the container this frame, if animating.
    pub fn offset_at(&mut self, now: f64) -> Option<f32> {
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

    fn geom(offset: f32) -> CarouselGeometry {
        CarouselGeometry {
            offset,
            client_width: 300.0,
            scroll_width: 1000.0,
        }
    }

    #[test]
    fn right_from_start_moves_eighty_percent() {
        assert_eq!(
            scroll_target(&geom(0.0), ScrollDirection::Right, DEFAULT_STEP_FRACTION),
            240.0
        );
    }

    #[test]
    fn left_back_to_start() {
        assert_eq!(
            scroll_target(&geom(240.0), ScrollDirection::Left, DEFAULT_STEP_FRACTION),
            0.0
        );
    }

    #[test]
    fn left_at_start_stays_put() {
        assert_eq!(
            scroll_target(&geom(0.0), ScrollDirection::Left, DEFAULT_STEP_FRACTION),
            0.0
        );
    }

    #[test]
    fn repeated_right_never_exceeds_max() {
        let mut g = geom(0.0);
        for _ in 0..10 {
            g.offset = scroll_target(&g, ScrollDirection::Right, DEFAULT_STEP_FRACTION);
            assert!(g.offset <= 700.0);
        }
        assert_eq!(g.offset, 700.0);
    }

    #[test]
    fn content_narrower_than_viewport_never_scrolls() {
        let g = CarouselGeometry {
            offset: 0.0,
            client_width: 800.0,
            scroll_width: 500.0,
        };
        assert_eq!(scroll_target(&g, ScrollDirection::Right, DEFAULT_STEP_FRACTION), 0.0);
    }

    #[test]
    fn scroller_animates_to_target_then_stops() {
        let mut s = CarouselScroller::new(DEFAULT_STEP_FRACTION, 0.4);
        assert_eq!(s.scroll(geom(0.0), ScrollDirection::Right, 10.0), 240.0);
        assert!(s.is_animating());
        assert_eq!(s.offset_at(10.0), Some(0.0));
        assert_eq!(s.offset_at(11.0), Some(240.0));
        assert!(!s.is_animating());
        assert_eq!(s.offset_at(12.0), None);
    }

    #[test]
    fn press_while_animating_steps_from_live_offset() {
        let mut s = CarouselScroller::default();
        s.scroll(geom(0.0), ScrollDirection::Right, 0.0);
        assert_eq!(s.scroll(geom(100.0), ScrollDirection::Right, 0.1), 340.0);
        assert!(s.is_animating());
    }
}
