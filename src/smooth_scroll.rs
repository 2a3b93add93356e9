/// Animated transition of a scroll offset from one value to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    pub from: f32,
    pub to: f32,
    /// Seconds
    pub duration: f32,
}

fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

impl SmoothScroll {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
        }
    }

    /// Offset after `elapsed` seconds.
    pub fn sample(&self, elapsed: f32) -> f32 {
        if self.is_finished(elapsed) {
            return self.to;
        }
        let t = (elapsed / self.duration).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * ease_in_out_cubic(t)
    }

    pub fn is_finished(&self, elapsed: f32) -> bool {
        self.duration <= 0.0 || elapsed >= self.duration
    }
}

/// A [`SmoothScroll`] bound to its start time.
#[derive(Debug, Clone, Copy)]
pub struct ScrollAnimation {
    scroll: SmoothScroll,
    started_at: f64,
}

impl ScrollAnimation {
    /// `now` is the UI clock in seconds (`egui::InputState::time`).
    pub fn start(scroll: SmoothScroll, now: f64) -> Self {
        Self {
            scroll,
            started_at: now,
        }
    }

    pub fn target(&self) -> f32 {
        self.scroll.to
    }

    /// Returns the offset for `now` and whether the animation is done.
    pub fn tick(&self, now: f64) -> (f32, bool) {
        let elapsed = (now - self.started_at).max(0.0) as f32;
        (
            self.scroll.sample(elapsed),
            self.scroll.is_finished(elapsed),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_and_ends_on_the_endpoints() {
        let s = SmoothScroll::new(100.0, 500.0, 0.5);
        assert_eq!(s.sample(0.0), 100.0);
        assert_eq!(s.sample(0.5), 500.0);
        assert_eq!(s.sample(3.0), 500.0);
    }

    #[test]
    fn midpoint_is_halfway() {
        let s = SmoothScroll::new(0.0, 200.0, 1.0);
        assert!((s.sample(0.5) - 100.0).abs() < 1e-3);
    }

    #[test]
    fn progress_is_monotonic() {
        let s = SmoothScroll::new(240.0, 0.0, 0.4);
        let mut last = s.sample(0.0);
        for i in 1..=50 {
            let v = s.sample(i as f32 * 0.01);
            assert!(v <= last);
            last = v;
        }
        assert_eq!(last, 0.0);
    }

    #[test]
    fn zero_duration_jumps() {
        let s = SmoothScroll::new(0.0, 42.0, 0.0);
        assert!(s.is_finished(0.0));
        assert_eq!(s.sample(0.0), 42.0);
    }

    #[test]
    fn animation_ticks_from_start_time() {
        let anim = ScrollAnimation::start(SmoothScroll::new(0.0, 10.0, 1.0), 5.0);
        assert_eq!(anim.tick(5.0), (0.0, false));
        assert_eq!(anim.tick(6.5), (10.0, true));
        assert_eq!(anim.target(), 10.0);
    }
}
