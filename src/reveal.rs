use std::collections::BTreeMap;

use crate::section::{Region, SectionId};

/// Tracks the entry animation of every section.
///
/// A section is revealed once, the first time any part of it is inside the
/// viewport. Navigating to a section replays its animation.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    /// Section to animation start time (UI clock, seconds)
    started: BTreeMap<SectionId, f64>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the animation when the section becomes visible for the first
    /// time. Returns true on that first reveal.
    pub fn observe(
        &mut self,
        id: SectionId,
        region: &Region,
        viewport_height: f32,
        now: f64,
    ) -> bool {
        let visible = region.top < viewport_height && region.bottom() > 0.0;
        if !visible || self.started.contains_key(&id) {
            return false;
        }
        self.started.insert(id, now);
        true
    }

    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.started.contains_key(&id)
    }

    pub fn replay(&mut self, id: SectionId, now: f64) {
        self.started.insert(id, now);
    }

    /// Animation progress in `[0, 1]`; 0 while not revealed.
    pub fn progress(&self, id: SectionId, now: f64, duration: f32) -> f32 {
        let Some(start) = self.started.get(&id) else {
            return 0.0;
        };
        if duration <= 0.0 {
            return 1.0;
        }
        (((now - start) as f32) / duration).clamp(0.0, 1.0)
    }

    /// Whether any animation is still running, so the caller keeps repainting.
    pub fn is_animating(&self, now: f64, duration: f32) -> bool {
        self.started
            .values()
            .any(|start| ((now - start) as f32) < duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_when_visible() {
        let mut r = RevealTracker::new();
        assert!(!r.observe(SectionId::Skills, &Region::new(900.0, 200.0), 800.0, 0.0));
        assert!(!r.is_revealed(SectionId::Skills));
        assert!(r.observe(SectionId::Skills, &Region::new(700.0, 200.0), 800.0, 1.0));
        assert!(!r.observe(SectionId::Skills, &Region::new(600.0, 200.0), 800.0, 2.0));
        assert!(r.is_revealed(SectionId::Skills));
    }

    #[test]
    fn section_above_viewport_is_not_visible() {
        let mut r = RevealTracker::new();
        assert!(!r.observe(SectionId::About, &Region::new(-300.0, 300.0), 800.0, 0.0));
    }

    #[test]
    fn progress_runs_from_reveal_time() {
        let mut r = RevealTracker::new();
        assert_eq!(r.progress(SectionId::Hobbies, 5.0, 0.5), 0.0);
        r.observe(SectionId::Hobbies, &Region::new(10.0, 10.0), 800.0, 5.0);
        assert_eq!(r.progress(SectionId::Hobbies, 5.25, 0.5), 0.5);
        assert_eq!(r.progress(SectionId::Hobbies, 9.0, 0.5), 1.0);
        assert!(!r.is_animating(9.0, 0.5));
    }

    #[test]
    fn replay_restarts_the_animation() {
        let mut r = RevealTracker::new();
        r.observe(SectionId::Contact, &Region::new(0.0, 100.0), 800.0, 0.0);
        r.replay(SectionId::Contact, 10.0);
        assert_eq!(r.progress(SectionId::Contact, 10.0, 0.5), 0.0);
        assert!(r.is_animating(10.1, 0.5));
    }
}
