use content::skills::{CATEGORIES, CERTIFICATIONS, HEADING};
use eframe::egui;
use portfolio_core::reveal::presets;
use shared::domain::{Icon, Skill, SkillCategory};

use crate::ui::{motion, sections, theme};

pub fn show(ui: &mut egui::Ui, elapsed: Option<f64>) {
    sections::heading(ui, &HEADING, elapsed);

    let columns = sections::column_count(ui.available_width(), 3);
    sections::grid(ui, CATEGORIES, columns, |ui, index, category| {
        let frame = motion::frame_for(presets::SKILL_CATEGORIES, presets::CARD_ENTRANCE, index, elapsed);
        motion::with_entrance(ui, frame, |ui| category_card(ui, index, category, elapsed));
    });

    ui.add_space(40.0);
    let block = motion::frame_for(presets::CERTIFICATION_BLOCK, presets::CARD_ENTRANCE, 0, elapsed);
    motion::with_entrance(ui, block, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(format!("{} Certifications", theme::icon_glyph(Icon::Award)))
                    .size(24.0)
                    .strong(),
            );
        });
        ui.add_space(16.0);

        let columns = sections::column_count(ui.available_width(), 4);
        sections::grid(ui, CERTIFICATIONS, columns, |ui, index, cert| {
            let frame = motion::frame_for(
                presets::CERTIFICATIONS,
                presets::CERTIFICATION_ENTRANCE,
                index,
                elapsed,
            );
            motion::with_entrance(ui, frame, |ui| {
                theme::card_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new(cert.name).strong());
                        ui.label(egui::RichText::new(cert.issuer).color(theme::TEXT_MUTED));
                        ui.label(egui::RichText::new(cert.year).color(theme::PRIMARY));
                    });
                });
            });
        });
    });
}

fn category_card(ui: &mut egui::Ui, index: usize, category: &SkillCategory, elapsed: Option<f64>) {
    let bars = presets::skill_bars(index);
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(category.name).strong().size(18.0).color(theme::PRIMARY));
        ui.add_space(6.0);
        for (skill_index, skill) in category.skills.iter().enumerate() {
            skill_bar(ui, skill, bars.progress(skill_index, elapsed));
        }
    });
}

/// Name, percentage, and a bar that fills to the skill level as `progress`
/// goes from 0 to 1.
fn skill_bar(ui: &mut egui::Ui, skill: &Skill, progress: f32) {
    ui.horizontal(|ui| {
        ui.label(skill.name);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(format!("{}%", skill.level)).color(theme::TEXT_MUTED));
        });
    });

    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 6.0),
        egui::Sense::hover(),
    );
    let painter = ui.painter();
    painter.rect_filled(rect, egui::CornerRadius::same(3), theme::SURFACE_RAISED);
    let filled_width = rect.width() * skill.fill_fraction() * progress;
    if filled_width > 0.0 {
        let filled = egui::Rect::from_min_size(rect.min, egui::vec2(filled_width, rect.height()));
        painter.rect_filled(filled, egui::CornerRadius::same(3), theme::PRIMARY);
    }
    ui.add_space(4.0);
}
