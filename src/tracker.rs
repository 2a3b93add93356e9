use serde::{Deserialize, Serialize};

use crate::observer::IntersectionEntry;
use crate::section::{Region, SectionId, SectionRegions};

/// What made the active section change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationSource {
    ScrollSpy,
    Navigation,
}

/// Absolute distance between the top edge of a region and the viewport middle.
pub fn distance_to_center(region: &Region, viewport_height: f32) -> f32 {
    (region.top - viewport_height / 2.0).abs()
}

/// Picks the candidate whose top edge is closest to the viewport middle.
///
/// The incumbent wins unless a candidate is strictly closer; an incumbent
/// without a region counts as infinitely far away. Returns `None` only when
/// there is neither an incumbent nor any candidate.
pub fn nearest_to_center<I>(
    candidates: I,
    viewport_height: f32,
    incumbent: Option<(SectionId, Option<Region>)>,
) -> Option<SectionId>
where
    I: IntoIterator<Item = (SectionId, Region)>,
{
    let mut best = incumbent.map(|(id, region)| {
        let d = region.map_or(f32::INFINITY, |r| distance_to_center(&r, viewport_height));
        (id, d)
    });
    for (id, region) in candidates {
        let d = distance_to_center(&region, viewport_height);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((id, d)),
        }
    }
    best.map(|(id, _)| id)
}

/// Keeps the single active section used for navigation highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActiveSectionTracker {
    active: SectionId,
}

impl ActiveSectionTracker {
    pub fn new(initial: SectionId) -> Self {
        Self { active: initial }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Applies intersection entries in delivery order.
    ///
    /// Only intersecting entries are considered, and each one is compared with
    /// the live distance of the current active section. Returns the new active
    /// section when it changed.
    pub fn handle_entries(
        &mut self,
        entries: &[IntersectionEntry],
        regions: &SectionRegions,
        viewport_height: f32,
    ) -> Option<SectionId> {
        let before = self.active;
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            let incumbent = (self.active, regions.get(self.active));
            if let Some(next) = nearest_to_center(
                [(entry.id, entry.region)],
                viewport_height,
                Some(incumbent),
            ) {
                self.active = next;
            }
        }
        if self.active == before {
            return None;
        }
        tracing::debug!(from = %before, to = %self.active, "active section changed");
        Some(self.active)
    }

    /// Makes `id` active regardless of distances and returns the scroll offset
    /// that puts its top edge right below the navigation bar.
    ///
    /// Returns `None` when the section has no laid out region yet; it is still
    /// made active.
    pub fn navigate_to(
        &mut self,
        id: SectionId,
        regions: &SectionRegions,
        scroll_offset: f32,
        nav_height: f32,
    ) -> Option<f32> {
        self.active = id;
        let Some(region) = regions.get(id) else {
            tracing::warn!(section = %id, "navigation to a section that is not laid out yet");
            return None;
        };
        Some(region.top + scroll_offset - nav_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f32 = 800.0;

    fn entry(id: SectionId, top: f32, is_intersecting: bool) -> IntersectionEntry {
        IntersectionEntry {
            id,
            is_intersecting,
            ratio: if is_intersecting { 0.5 } else { 0.0 },
            region: Region::new(top, 300.0),
        }
    }

    #[test]
    fn distance_is_measured_from_top_edge() {
        assert_eq!(distance_to_center(&Region::new(100.0, 900.0), VIEWPORT), 300.0);
        assert_eq!(distance_to_center(&Region::new(700.0, 10.0), VIEWPORT), 300.0);
    }

    #[test]
    fn nearest_picks_minimum_distance() {
        let picked = nearest_to_center(
            [
                (SectionId::Education, Region::new(100.0, 10.0)),
                (SectionId::Experience, Region::new(390.0, 10.0)),
                (SectionId::Skills, Region::new(600.0, 10.0)),
            ],
            VIEWPORT,
            None,
        );
        assert_eq!(picked, Some(SectionId::Experience));
    }

    #[test]
    fn ties_favor_the_incumbent() {
        let picked = nearest_to_center(
            [(SectionId::Skills, Region::new(500.0, 10.0))],
            VIEWPORT,
            Some((SectionId::Experience, Some(Region::new(300.0, 10.0)))),
        );
        assert_eq!(picked, Some(SectionId::Experience));
    }

    #[test]
    fn unmounted_incumbent_loses_to_any_candidate() {
        let picked = nearest_to_center(
            [(SectionId::Contact, Region::new(-5000.0, 10.0))],
            VIEWPORT,
            Some((SectionId::About, None)),
        );
        assert_eq!(picked, Some(SectionId::Contact));
    }

    #[test]
    fn closer_intersecting_section_becomes_active() {
        let mut tracker = ActiveSectionTracker::default();
        let regions: SectionRegions = [
            (SectionId::About, Region::new(-600.0, 500.0)),
            (SectionId::Education, Region::new(350.0, 300.0)),
        ]
        .into_iter()
        .collect();
        let changed =
            tracker.handle_entries(&[entry(SectionId::Education, 350.0, true)], &regions, VIEWPORT);
        assert_eq!(changed, Some(SectionId::Education));
        assert_eq!(tracker.active(), SectionId::Education);
    }

    #[test]
    fn non_intersecting_entries_are_ignored() {
        let mut tracker = ActiveSectionTracker::default();
        let regions: SectionRegions = [(SectionId::About, Region::new(-2000.0, 100.0))]
            .into_iter()
            .collect();
        let changed =
            tracker.handle_entries(&[entry(SectionId::Skills, 400.0, false)], &regions, VIEWPORT);
        assert_eq!(changed, None);
        assert_eq!(tracker.active(), SectionId::About);
    }

    #[test]
    fn empty_batch_keeps_active_section() {
        let mut tracker = ActiveSectionTracker::new(SectionId::Hobbies);
        assert_eq!(tracker.handle_entries(&[], &SectionRegions::new(), VIEWPORT), None);
        assert_eq!(tracker.active(), SectionId::Hobbies);
    }

    #[test]
    fn navigation_overrides_distances() {
        let mut tracker = ActiveSectionTracker::new(SectionId::Experience);
        let regions: SectionRegions = [
            (SectionId::Experience, Region::new(400.0, 100.0)),
            (SectionId::Contact, Region::new(2400.0, 300.0)),
        ]
        .into_iter()
        .collect();
        let target = tracker.navigate_to(SectionId::Contact, &regions, 1000.0, 60.0);
        assert_eq!(tracker.active(), SectionId::Contact);
        assert_eq!(target, Some(3340.0));
    }

    #[test]
    fn navigation_to_unmounted_section_only_activates() {
        let mut tracker = ActiveSectionTracker::default();
        let target = tracker.navigate_to(SectionId::Skills, &SectionRegions::new(), 0.0, 60.0);
        assert_eq!(target, None);
        assert_eq!(tracker.active(), SectionId::Skills);
    }
}
