//! One module per page section, plus the layout pieces they share.

pub mod about;
pub mod contact;
pub mod education;
pub mod experience;
pub mod footer;
pub mod projects;
pub mod skills;

use eframe::egui;
use portfolio_core::reveal::presets;
use shared::domain::SectionHeading;

use crate::ui::{motion, theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Experience,
    Education,
    Skills,
    Projects,
    Contact,
    Footer,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::About,
        SectionId::Experience,
        SectionId::Education,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
        SectionId::Footer,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Label in the navigation bar; the footer has none.
    pub fn nav_label(self) -> Option<&'static str> {
        match self {
            SectionId::About => Some("About"),
            SectionId::Experience => Some("Experience"),
            SectionId::Education => Some("Education"),
            SectionId::Skills => Some("Skills"),
            SectionId::Projects => Some("Projects"),
            SectionId::Contact => Some("Contact"),
            SectionId::Footer => None,
        }
    }

    /// Alternating sections sit on a slightly lighter band.
    pub fn band_fill(self) -> egui::Color32 {
        match self {
            SectionId::Experience | SectionId::Skills | SectionId::Contact => theme::MUTED_BAND,
            _ => theme::BACKGROUND,
        }
    }
}

/// Columns for a card grid at `width`, capped at `max`.
pub fn column_count(width: f32, max: usize) -> usize {
    let fit = if width >= 960.0 {
        max
    } else if width >= 640.0 {
        2
    } else {
        1
    };
    fit.clamp(1, max.max(1))
}

/// Full-width band with the content centered and width-limited.
pub fn band(
    ui: &mut egui::Ui,
    fill: egui::Color32,
    vertical_padding: i8,
    add: impl FnOnce(&mut egui::Ui),
) -> egui::Response {
    egui::Frame::NONE
        .fill(fill)
        .inner_margin(egui::Margin::symmetric(0, vertical_padding))
        .show(ui, |ui| {
            let full = ui.available_width();
            ui.set_width(full);
            let width = (full - 48.0).clamp(0.0, theme::CONTENT_MAX_WIDTH);
            ui.horizontal(|ui| {
                ui.add_space(((full - width) / 2.0).max(0.0));
                ui.vertical(|ui| {
                    ui.set_width(width);
                    add(ui);
                });
            });
        })
        .response
}

pub fn heading(ui: &mut egui::Ui, heading: &SectionHeading, elapsed: Option<f64>) {
    let frame = motion::frame_for(presets::HEADING, presets::HEADING_ENTRANCE, 0, elapsed);
    motion::with_entrance(ui, frame, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(heading.eyebrow.to_uppercase())
                    .color(theme::PRIMARY)
                    .strong()
                    .size(13.0),
            );

            let mut title = egui::text::LayoutJob::default();
            title.append(
                heading.title,
                0.0,
                egui::TextFormat {
                    font_id: egui::FontId::proportional(38.0),
                    color: theme::TEXT,
                    ..Default::default()
                },
            );
            title.append(
                heading.accent,
                10.0,
                egui::TextFormat {
                    font_id: egui::FontId::proportional(38.0),
                    color: theme::PRIMARY,
                    ..Default::default()
                },
            );
            ui.label(title);

            if !heading.blurb.is_empty() {
                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new(heading.blurb)
                        .color(theme::TEXT_MUTED)
                        .size(16.0),
                );
            }
        });
    });
    ui.add_space(40.0);
}

/// Lays `items` out row by row in `columns` equal columns.
pub fn grid<T>(
    ui: &mut egui::Ui,
    items: &[T],
    columns: usize,
    mut cell: impl FnMut(&mut egui::Ui, usize, &T),
) {
    let columns = columns.max(1);
    for (row, chunk) in items.chunks(columns).enumerate() {
        ui.columns(columns, |cols| {
            for (offset, item) in chunk.iter().enumerate() {
                cell(&mut cols[offset], row * columns + offset, item);
            }
        });
        ui.add_space(8.0);
    }
}

pub fn chips(ui: &mut egui::Ui, labels: &[&str], fill: egui::Color32, color: egui::Color32) {
    ui.horizontal_wrapped(|ui| {
        for label in labels {
            theme::chip_frame(fill).show(ui, |ui| {
                ui.label(egui::RichText::new(*label).size(12.0).color(color));
            });
        }
    });
}

/// Opens `href` in the platform handler. Placeholder links (`#`) do nothing.
pub fn open_link(ui: &egui::Ui, href: &str) {
    if href.is_empty() || href == "#" {
        return;
    }
    tracing::debug!(href, "opening link");
    ui.ctx().open_url(egui::OpenUrl::new_tab(href));
}

#[cfg(test)]
#[path = "../../tests/sections_tests.rs"]
mod tests;
