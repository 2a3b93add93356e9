use egui::{RichText, Ui};
use folio::{badge, card_frame, BadgeStyle, SectionId};

use super::Page;
use crate::ui_consts::{CARD_SPACING, HEADING_TEXT_SIZE, TITLE_TEXT_SIZE};

pub fn render_section(ui: &mut Ui, id: SectionId, page: Page<'_>) {
    if id != SectionId::About {
        heading(ui, page.content.heading(id, page.lang), page);
    }
    match id {
        SectionId::About => about(ui, page),
        SectionId::Education => education(ui, page),
        SectionId::Experience => experience(ui, page),
        SectionId::Skills => skills(ui, page),
        SectionId::Hobbies => hobbies(ui, page),
        SectionId::Contact => contact(ui, page),
    }
}

fn heading(ui: &mut Ui, text: &str, page: Page<'_>) {
    ui.label(
        RichText::new(text)
            .size(HEADING_TEXT_SIZE)
            .strong()
            .color(page.palette.accent),
    );
    ui.add_space(CARD_SPACING);
}

fn about(ui: &mut Ui, page: Page<'_>) {
    let c = page.content;
    ui.label(RichText::new(&c.name).size(TITLE_TEXT_SIZE).strong());
    ui.label(
        RichText::new(page.text(&c.role))
            .size(HEADING_TEXT_SIZE)
            .color(page.palette.accent),
    );
    ui.add_space(CARD_SPACING);
    card_frame(ui).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(page.text(&c.bio));
    });
}

fn education(ui: &mut Ui, page: Page<'_>) {
    for item in &page.content.education {
        let item = item.get(page.lang);
        card_frame(ui).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(&item.title).strong());
            ui.label(RichText::new(&item.description).weak());
        });
        ui.add_space(CARD_SPACING);
    }
}

fn experience(ui: &mut Ui, page: Page<'_>) {
    for item in &page.content.experience {
        let item = item.get(page.lang);
        card_frame(ui).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(&item.title).strong());
            ui.label(RichText::new(&item.company).color(page.palette.accent));
            ui.label(RichText::new(&item.description).weak());
            ui.add_space(4.0);
            ui.label(&item.content);
            ui.add_space(4.0);
            ui.horizontal_wrapped(|ui| {
                for tech in &item.technologies {
                    badge(ui, tech, BadgeStyle::Secondary, page.palette.accent);
                }
            });
        });
        ui.add_space(CARD_SPACING);
    }
}

fn skills(ui: &mut Ui, page: Page<'_>) {
    card_frame(ui).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal_wrapped(|ui| {
            for skill in page.content.skills.get(page.lang) {
                badge(ui, skill, BadgeStyle::Primary, page.palette.accent);
            }
        });
    });
}

fn hobbies(ui: &mut Ui, page: Page<'_>) {
    let hobby = &page.content.hobby;
    card_frame(ui).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(page.text(&hobby.title)).strong());
        ui.label(page.text(&hobby.description));
        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            for b in &hobby.badges {
                badge(ui, b, BadgeStyle::Secondary, page.palette.accent);
            }
        });
        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            for link in &hobby.links {
                ui.hyperlink_to(page.text(&link.label), &link.url);
            }
        });
    });
}

fn contact(ui: &mut Ui, page: Page<'_>) {
    let contact = &page.content.contact;
    card_frame(ui).show(ui, |ui| {
        ui.set_width(ui.available_width());
        for link in &contact.links {
            ui.horizontal(|ui| {
                ui.label(link.kind.icon());
                ui.hyperlink_to(page.text(&link.label), &link.url);
            });
        }
        ui.add_space(CARD_SPACING);
        ui.horizontal_wrapped(|ui| {
            let email = egui::Button::new(
                RichText::new(page.text(&contact.send_email.label)).color(egui::Color32::BLACK),
            )
            .fill(page.palette.accent);
            if ui.add(email).clicked() {
                ui.ctx()
                    .open_url(egui::OpenUrl::new_tab(&contact.send_email.url));
            }
            let whatsapp = egui::Button::new(
                RichText::new(page.text(&contact.whatsapp.label)).color(egui::Color32::WHITE),
            )
            .fill(folio::colors::WHATSAPP);
            if ui.add(whatsapp).clicked() {
                ui.ctx().open_url(egui::OpenUrl::new_tab(&contact.whatsapp.url));
            }
        });
    });
}
