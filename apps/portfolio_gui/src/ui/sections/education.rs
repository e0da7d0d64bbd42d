use content::education::{DEGREES, HEADING};
use eframe::egui;
use portfolio_core::reveal::presets;
use shared::domain::{Degree, Icon};

use crate::ui::{motion, sections, theme};

pub fn show(ui: &mut egui::Ui, elapsed: Option<f64>) {
    sections::heading(ui, &HEADING, elapsed);

    let alternate = sections::column_count(ui.available_width(), 2) == 2;
    for (index, degree) in DEGREES.iter().enumerate() {
        let entrance = presets::degree_entrance(index);
        let frame = motion::frame_for(presets::DEGREES, entrance, index, elapsed);
        if alternate {
            ui.columns(2, |cols| {
                let side = if index % 2 == 0 { 0 } else { 1 };
                motion::with_entrance(&mut cols[side], frame, |ui| degree_card(ui, degree));
            });
        } else {
            motion::with_entrance(ui, frame, |ui| degree_card(ui, degree));
        }
        ui.add_space(12.0);
    }
}

fn degree_card(ui: &mut egui::Ui, degree: &Degree) {
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(theme::icon_glyph(Icon::GraduationCap)).size(22.0));
            ui.label(egui::RichText::new(degree.years).color(theme::PRIMARY).strong());
        });
        ui.label(egui::RichText::new(degree.degree).strong().size(18.0));
        ui.label(egui::RichText::new(degree.institution).color(theme::ACCENT));
        ui.label(egui::RichText::new(degree.focus).color(theme::TEXT_MUTED));
        ui.add_space(4.0);
        sections::chips(ui, degree.achievements, theme::SURFACE_RAISED, theme::TEXT_MUTED);
    });
}
