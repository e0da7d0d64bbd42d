use content::contact::{CHANNELS, HEADING, MAILTO, SOCIALS};
use eframe::egui;
use portfolio_core::{reveal::presets, ContactField, ContactFlow};
use shared::domain::Icon;

use crate::ui::{motion, sections, theme};

/// Renders the contact section. Returns `true` when the visitor pressed the
/// submit button this frame.
pub fn show(
    ui: &mut egui::Ui,
    elapsed: Option<f64>,
    flow: &mut ContactFlow,
    hint: Option<&str>,
) -> bool {
    sections::heading(ui, &HEADING, elapsed);

    let info = motion::frame_for(presets::CONTACT_COLUMNS, presets::CONTACT_INFO_ENTRANCE, 0, elapsed);
    let form = motion::frame_for(presets::CONTACT_COLUMNS, presets::CONTACT_FORM_ENTRANCE, 1, elapsed);

    let mut submitted = false;
    if sections::column_count(ui.available_width(), 2) == 2 {
        ui.columns(2, |cols| {
            motion::with_entrance(&mut cols[0], info, info_column);
            submitted = motion::with_entrance(&mut cols[1], form, |ui| form_column(ui, flow, hint));
        });
    } else {
        motion::with_entrance(ui, info, info_column);
        ui.add_space(24.0);
        submitted = motion::with_entrance(ui, form, |ui| form_column(ui, flow, hint));
    }
    submitted
}

fn info_column(ui: &mut egui::Ui) {
    ui.label(egui::RichText::new("Get in Touch").size(24.0).strong());
    ui.add_space(12.0);

    for channel in CHANNELS {
        ui.horizontal(|ui| {
            theme::chip_frame(theme::PRIMARY_SOFT).show(ui, |ui| {
                ui.label(egui::RichText::new(theme::icon_glyph(channel.icon())).size(18.0));
            });
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(channel.label).size(12.0).color(theme::TEXT_MUTED));
                match channel.href {
                    Some(href) => {
                        if ui.link(egui::RichText::new(channel.value).strong()).clicked() {
                            sections::open_link(ui, href);
                        }
                    }
                    None => {
                        ui.label(egui::RichText::new(channel.value).strong());
                    }
                }
            });
        });
        ui.add_space(8.0);
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        for social in SOCIALS {
            let button = egui::Button::new(theme::icon_glyph(social.icon)).min_size(egui::vec2(40.0, 40.0));
            if ui.add(button).on_hover_text(social.label).clicked() {
                sections::open_link(ui, social.href);
            }
        }
    });

    ui.add_space(20.0);
    let email = egui::Button::new(
        egui::RichText::new(format!("{}  Send me an email", theme::icon_glyph(Icon::Mail)))
            .color(theme::PRIMARY),
    )
    .fill(theme::PRIMARY_SOFT)
    .stroke(egui::Stroke::new(1.0, theme::PRIMARY));
    if ui.add(email).clicked() {
        sections::open_link(ui, MAILTO);
    }
}

fn form_column(ui: &mut egui::Ui, flow: &mut ContactFlow, hint: Option<&str>) -> bool {
    let submitting = flow.is_submitting();
    let mut submitted = false;

    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.columns(2, |cols| {
            text_field(&mut cols[0], flow, ContactField::Name);
            text_field(&mut cols[1], flow, ContactField::Email);
        });
        text_field(ui, flow, ContactField::Subject);

        ui.label(ContactField::Message.label());
        ui.add_sized(
            [ui.available_width(), 140.0],
            egui::TextEdit::multiline(flow.form_mut().field_mut(ContactField::Message))
                .id_salt("contact-message")
                .hint_text(ContactField::Message.placeholder()),
        );

        if let Some(hint) = hint {
            ui.label(egui::RichText::new(hint).color(theme::DANGER_STROKE));
        }

        ui.add_space(8.0);
        let label = if submitting { "Sending... ●" } else { "Send Message" };
        let (fill, color) = if submitting {
            (theme::SURFACE_RAISED, theme::TEXT_MUTED)
        } else {
            (theme::PRIMARY, theme::BACKGROUND)
        };
        let button = egui::Button::new(egui::RichText::new(label).strong().color(color))
            .fill(fill)
            .min_size(egui::vec2(ui.available_width(), 40.0));
        if ui.add_enabled(!submitting, button).clicked() {
            submitted = true;
        }
    });

    submitted
}

fn text_field(ui: &mut egui::Ui, flow: &mut ContactFlow, field: ContactField) {
    ui.label(field.label());
    ui.add_sized(
        [ui.available_width(), 32.0],
        egui::TextEdit::singleline(flow.form_mut().field_mut(field))
            .id_salt(("contact-field", field.label()))
            .hint_text(field.placeholder()),
    );
}
