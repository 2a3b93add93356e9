use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Named regions of the page, in document order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    About,
    Education,
    Experience,
    Skills,
    Hobbies,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::About,
        SectionId::Education,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Hobbies,
        SectionId::Contact,
    ];

    /// Position of the section in the navigation bar.
    pub fn index(self) -> usize {
        match self {
            SectionId::About => 0,
            SectionId::Education => 1,
            SectionId::Experience => 2,
            SectionId::Skills => 3,
            SectionId::Hobbies => 4,
            SectionId::Contact => 5,
        }
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    pub fn key(self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Education => "education",
            SectionId::Experience => "experience",
            SectionId::Skills => "skills",
            SectionId::Hobbies => "hobbies",
            SectionId::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Vertical extent of a section, relative to the top edge of the viewport.
///
/// Negative `top` means the section starts above the visible area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub top: f32,
    pub height: f32,
}

impl Region {
    pub fn new(top: f32, height: f32) -> Self {
        Self {
            top,
            height: height.max(0.0),
        }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Height of the overlap with `[from, to]`.
    pub fn overlap(&self, from: f32, to: f32) -> f32 {
        (self.bottom().min(to) - self.top.max(from)).max(0.0)
    }
}

/// Section id to laid out region. Rebuilt every frame while the page is drawn;
/// a section that was not drawn yet simply has no entry.
#[derive(Debug, Clone, Default)]
pub struct SectionRegions {
    regions: BTreeMap<SectionId, Region>,
}

impl SectionRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: SectionId, region: Region) {
        self.regions.insert(id, region);
    }

    pub fn get(&self, id: SectionId) -> Option<Region> {
        self.regions.get(&id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionId, Region)> + '_ {
        self.regions.iter().map(|(id, r)| (*id, *r))
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl FromIterator<(SectionId, Region)> for SectionRegions {
    fn from_iter<T: IntoIterator<Item = (SectionId, Region)>>(iter: T) -> Self {
        Self {
            regions: iter.into_iter().collect(),
        }
    }
}
