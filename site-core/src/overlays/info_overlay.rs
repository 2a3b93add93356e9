use crate::ui_consts::{INFO_TEXT_SIZE, UI_MARGIN};
use egui::{self, Align, Layout, RichText};

/// Version string: Git describe, then short hash, else the crate version.
pub fn version_text() -> &'static str {
    option_env!("SITE_GIT_DESCRIBE")
        .or(option_env!("SITE_GIT_HASH"))
        .unwrap_or(env!("CARGO_PKG_VERSION"))
}

pub fn render_info_overlay(ctx: &egui::Context, owner: &str) {
    let screen = ctx.screen_rect();
    let repo_url = option_env!("SITE_REPOSITORY_URL")
        .or(option_env!("CARGO_PKG_REPOSITORY"))
        .unwrap_or("https://github.com/matiasguerreron/folio");

    let text_h = ctx.fonts(|f| f.row_height(&egui::FontId::proportional(INFO_TEXT_SIZE)));
    let pos = egui::pos2(screen.left() + UI_MARGIN, screen.bottom() - UI_MARGIN - text_h);

    egui::Area::new(egui::Id::new("site_info_overlay"))
        .order(egui::Order::Middle)
        .fixed_pos(pos)
        .movable(false)
        .show(ctx, |ui| {
            ui.with_layout(Layout::left_to_right(Align::TOP), |ui| {
                ui.label(RichText::new(owner).size(INFO_TEXT_SIZE).weak());
                ui.label(RichText::new(version_text()).size(INFO_TEXT_SIZE).weak());
                let link = RichText::new("code")
                    .underline()
                    .size(INFO_TEXT_SIZE)
                    .color(ui.visuals().hyperlink_color);
                ui.hyperlink_to(link, repo_url);
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_never_empty() {
        assert!(!version_text().is_empty());
    }
}
