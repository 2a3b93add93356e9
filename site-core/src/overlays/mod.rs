pub mod debug_overlay;
pub mod info_overlay;
