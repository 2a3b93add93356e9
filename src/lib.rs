mod carousel;
mod content;
mod i18n;
mod neon;
mod observer;
mod particles;
mod reveal;
mod section;
mod settings;
mod smooth_scroll;
mod theme;
mod tracker;
mod widgets;

pub use self::carousel::{
    scroll_target, CarouselGeometry, CarouselScroller, ScrollDirection, DEFAULT_STEP_FRACTION,
};
pub use self::content::{
    ContactKind, ContactLink, Content, ContentError, Demo, EducationItem, ExperienceItem, Hobby,
    Labels, Link,
};
pub use self::i18n::{Language, Localized};
pub use self::neon::{neon_pulse, NeonLine, NEON_LINES, NEON_PERIOD};
pub use self::observer::{CenterBand, IntersectionEntry, IntersectionObserver, THRESHOLDS};
pub use self::particles::{Particle, ParticleField, ParticleLink, SettingsBackground};
pub use self::reveal::RevealTracker;
pub use self::section::{Region, SectionId, SectionRegions};
pub use self::settings::{Preferences, SettingsScroll};
pub use self::smooth_scroll::{ScrollAnimation, SmoothScroll};
pub use self::theme::{Palette, ThemePreference};
pub use self::tracker::{
    distance_to_center, nearest_to_center, ActivationSource, ActiveSectionTracker,
};
pub use self::widgets::{
    badge, card_frame, indicator_fallback_x, BadgeStyle, CarouselOutput, CarouselView, NavBar,
    NavBarOutput, INDICATOR_GAP, INDICATOR_WIDTH,
};

pub mod colors {
    pub use crate::theme::{
        BACKGROUND_DARK, BACKGROUND_LIGHT, CYAN, HOT_PINK, MIKU, MIKU_LIGHT, WHATSAPP,
    };
}

#[cfg(feature = "events")]
pub mod events;
