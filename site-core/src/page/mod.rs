mod demos;
mod sections;

pub use demos::{demo_modal, render_demos, DemosState};
pub use sections::render_section;

use folio::{Content, Language, Palette};

/// Read-only inputs every page block needs.
#[derive(Clone, Copy)]
pub struct Page<'a> {
    pub content: &'a Content,
    pub lang: Language,
    pub palette: Palette,
}

impl<'a> Page<'a> {
    pub fn text(&self, localized: &'a folio::Localized<String>) -> &'a str {
        localized.get(self.lang)
    }
}
