// Shared margins
pub const UI_MARGIN: f32 = 10.0;

// Page column
pub const PAGE_MAX_WIDTH: f32 = 880.0;
pub const SECTION_SPACING: f32 = 48.0;
pub const CARD_SPACING: f32 = 12.0;

// Floating buttons (top-right, below the nav bar)
pub const OVERLAY_BTN_SIZE: f32 = 32.0;
pub const OVERLAY_BTN_SPACING: f32 = 6.0;
pub const OVERLAY_ICON_SIZE: f32 = 16.0;

// Demo cards
pub const DEMO_CARD_MIN_WIDTH: f32 = 320.0;
pub const DEMO_CARD_HEIGHT: f32 = 300.0;
pub const DEMO_MODAL_WIDTH: f32 = 520.0;

// Text sizes
pub const INFO_TEXT_SIZE: f32 = 11.0; // bottom info overlay
pub const DEBUG_MONO_FONT_SIZE: f32 = 13.0; // debug overlay monospace
pub const TITLE_TEXT_SIZE: f32 = 34.0; // name on the presentation block
pub const HEADING_TEXT_SIZE: f32 = 22.0; // section headings

#[cfg(feature = "events")]
pub const EVENTS_LIMIT: usize = 50;
