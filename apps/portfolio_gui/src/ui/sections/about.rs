use content::about::{EXPERTISE, HEADING, STATS};
use eframe::egui;
use portfolio_core::reveal::presets;

use crate::ui::{motion, sections, theme};

pub fn show(ui: &mut egui::Ui, elapsed: Option<f64>) {
    sections::heading(ui, &HEADING, elapsed);

    let columns = sections::column_count(ui.available_width(), 4);
    sections::grid(ui, EXPERTISE, columns, |ui, index, item| {
        let frame = motion::frame_for(presets::EXPERTISE_CARDS, presets::CARD_ENTRANCE, index, elapsed);
        motion::with_entrance(ui, frame, |ui| {
            theme::card_frame().show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new(theme::icon_glyph(item.icon)).size(26.0).color(theme::PRIMARY));
                ui.label(egui::RichText::new(item.title).strong().size(17.0));
                ui.label(egui::RichText::new(item.description).color(theme::TEXT_MUTED));
            });
        });
    });

    ui.add_space(32.0);
    let frame = motion::frame_for(presets::STATS, presets::CARD_ENTRANCE, 0, elapsed);
    motion::with_entrance(ui, frame, |ui| {
        let columns = sections::column_count(ui.available_width(), 4);
        sections::grid(ui, STATS, columns, |ui, _, stat| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(stat.value).size(34.0).strong().color(theme::PRIMARY));
                ui.label(egui::RichText::new(stat.label).color(theme::TEXT_MUTED));
            });
        });
    });
}
