use content::footer::FOOTER;
use eframe::egui;
use portfolio_core::reveal::presets;
use shared::domain::Icon;

use crate::ui::{motion, theme};

pub fn show(ui: &mut egui::Ui, elapsed: Option<f64>, year: i32) {
    ui.vertical_centered(|ui| {
        let brand = motion::frame_for(presets::FOOTER_ITEMS, presets::FOOTER_ENTRANCE, 0, elapsed);
        motion::with_entrance(ui, brand, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(FOOTER.brand).size(22.0).strong().color(theme::PRIMARY));
                ui.label(egui::RichText::new(FOOTER.tagline).color(theme::TEXT_MUTED));
            });
        });

        let credit = motion::frame_for(presets::FOOTER_ITEMS, presets::FOOTER_ENTRANCE, 1, elapsed);
        motion::with_entrance(ui, credit, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(format!("© {year} · Built with ♥ {}", FOOTER.signoff))
                        .color(theme::TEXT_MUTED),
                );
            });
        });

        let terminal = motion::frame_for(presets::FOOTER_ITEMS, presets::FOOTER_ENTRANCE, 2, elapsed);
        motion::with_entrance(ui, terminal, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(format!("{} {}", theme::icon_glyph(Icon::Terminal), FOOTER.terminal_line))
                        .monospace()
                        .color(theme::PRIMARY),
                );
            });
        });
    });
}
