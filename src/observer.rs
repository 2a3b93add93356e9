use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::section::{Region, SectionId, SectionRegions};

/// Ratio thresholds at which an entry is reported even if the intersecting
/// flag did not change.
pub const THRESHOLDS: [f32; 11] = [0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0];

/// Middle part of the viewport used as intersection root.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CenterBand {
    /// Fraction of the viewport height cut from the top and from the bottom.
    pub margin_fraction: f32,
}

impl Default for CenterBand {
    fn default() -> Self {
        Self {
            margin_fraction: 0.4,
        }
    }
}

impl CenterBand {
    pub fn new(margin_fraction: f32) -> Self {
        Self {
            margin_fraction: margin_fraction.clamp(0.0, 0.5),
        }
    }

    /// Band bounds `(top, bottom)` in viewport coordinates.
    pub fn band(&self, viewport_height: f32) -> (f32, f32) {
        let margin = viewport_height * self.margin_fraction.clamp(0.0, 0.5);
        (margin, viewport_height - margin)
    }

    pub fn intersects(&self, region: &Region, viewport_height: f32) -> bool {
        let (top, bottom) = self.band(viewport_height);
        region.top < bottom && region.bottom() > top
    }

    /// Share of the region covered by the band.
    pub fn ratio(&self, region: &Region, viewport_height: f32) -> f32 {
        if region.height <= 0.0 {
            return 0.0;
        }
        let (top, bottom) = self.band(viewport_height);
        (region.overlap(top, bottom) / region.height).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub id: SectionId,
    pub is_intersecting: bool,
    pub ratio: f32,
    pub region: Region,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Observed {
    is_intersecting: bool,
    bucket: usize,
}

fn threshold_bucket(ratio: f32) -> usize {
    THRESHOLDS.iter().rposition(|t| ratio >= *t).unwrap_or(0)
}

/// Reports changes of section intersection with the [`CenterBand`].
///
/// Feed it the regions laid out in the current frame; it returns only the
/// entries whose state changed since the previous call, plus an initial entry
/// the first time a section is seen.
#[derive(Debug, Clone, Default)]
pub struct IntersectionObserver {
    band: CenterBand,
    observed: BTreeMap<SectionId, Observed>,
}

impl IntersectionObserver {
    pub fn new(band: CenterBand) -> Self {
        Self {
            band,
            observed: BTreeMap::new(),
        }
    }

    pub fn observe(
        &mut self,
        regions: &SectionRegions,
        viewport_height: f32,
    ) -> Vec<IntersectionEntry> {
        let mut entries = Vec::new();
        for (id, region) in regions.iter() {
            let is_intersecting = self.band.intersects(&region, viewport_height);
            let ratio = self.band.ratio(&region, viewport_height);
            let next = Observed {
                is_intersecting,
                bucket: threshold_bucket(ratio),
            };
            if self.observed.get(&id) != Some(&next) {
                self.observed.insert(id, next);
                entries.push(IntersectionEntry {
                    id,
                    is_intersecting,
                    ratio,
                    region,
                });
            }
        }
        entries
    }

    /// Forget everything seen so far; the next `observe` reports every section again.
    pub fn disconnect(&mut self) {
        self.observed.clear();
    }
}
