use content::experience::{HEADING, JOBS};
use eframe::egui;
use portfolio_core::reveal::presets;
use shared::domain::{Icon, Job};

use crate::ui::{motion, sections, theme};

pub fn show(ui: &mut egui::Ui, elapsed: Option<f64>) {
    sections::heading(ui, &HEADING, elapsed);

    for (index, job) in JOBS.iter().enumerate() {
        let frame = motion::frame_for(presets::JOBS, presets::JOB_ENTRANCE, index, elapsed);
        motion::with_entrance(ui, frame, |ui| job_card(ui, job));
        ui.add_space(16.0);
    }
}

fn job_card(ui: &mut egui::Ui, job: &Job) {
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new(theme::icon_glyph(Icon::Briefcase)).color(theme::PRIMARY));
            ui.label(egui::RichText::new(job.title).strong().size(18.0));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(job.period).color(theme::PRIMARY));
            });
        });
        ui.label(
            egui::RichText::new(format!("{} · {}", job.company, job.location))
                .color(theme::TEXT_MUTED),
        );
        ui.add_space(4.0);
        ui.label(job.description);
        for achievement in job.achievements {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new("▸").color(theme::PRIMARY));
                ui.label(egui::RichText::new(*achievement).color(theme::TEXT_MUTED));
            });
        }
        ui.add_space(4.0);
        sections::chips(ui, job.technologies, theme::PRIMARY_SOFT, theme::PRIMARY);
    });
}
