use content::projects::HEADING;
use eframe::egui;
use portfolio_core::{reveal::presets, ProjectGallery};
use shared::domain::{CategoryFilter, Icon, Project};

use crate::ui::{images::ProjectImages, motion, sections, theme};

const IMAGE_HEIGHT: f32 = 190.0;
const HOVER_ZOOM: f32 = 1.1;

pub fn show(
    ui: &mut egui::Ui,
    elapsed: Option<f64>,
    gallery: &mut ProjectGallery<'static>,
    images: &mut ProjectImages,
) {
    sections::heading(ui, &HEADING, elapsed);

    let bar = motion::frame_for(presets::FILTER_BAR, presets::FILTER_BAR_ENTRANCE, 0, elapsed);
    motion::with_entrance(ui, bar, |ui| filter_bar(ui, gallery));
    ui.add_space(24.0);

    let visible = gallery.visible();
    let columns = sections::column_count(ui.available_width(), 3);
    sections::grid(ui, &visible, columns, |ui, index, project| {
        let frame = motion::frame_for(presets::PROJECT_CARDS, presets::CARD_ENTRANCE, index, elapsed);
        motion::with_entrance(ui, frame, |ui| project_card(ui, *project, gallery, images));
    });
}

fn filter_bar(ui: &mut egui::Ui, gallery: &mut ProjectGallery<'static>) {
    ui.horizontal_wrapped(|ui| {
        for filter in CategoryFilter::OPTIONS {
            let selected = gallery.active() == filter;
            let (fill, color) = if selected {
                (theme::PRIMARY, theme::BACKGROUND)
            } else {
                (theme::SURFACE_RAISED, theme::TEXT_MUTED)
            };
            let button = egui::Button::new(egui::RichText::new(filter.label()).color(color))
                .fill(fill)
                .corner_radius(egui::CornerRadius::same(255));
            if ui.add(button).clicked() {
                gallery.select(filter);
            }
        }
    });
}

fn project_card(
    ui: &mut egui::Ui,
    project: &'static Project,
    gallery: &mut ProjectGallery<'static>,
    images: &mut ProjectImages,
) {
    let hovered = gallery.is_hovered(project.title);

    let response = theme::card_frame()
        .inner_margin(egui::Margin::ZERO)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            artwork(ui, project, hovered, images);

            egui::Frame::NONE
                .inner_margin(egui::Margin::same(16))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(project.category.label())
                            .size(12.0)
                            .color(theme::PRIMARY),
                    );
                    let title_color = if hovered { theme::PRIMARY } else { theme::TEXT };
                    ui.label(
                        egui::RichText::new(project.title)
                            .strong()
                            .size(18.0)
                            .color(title_color),
                    );
                    let blurb = if hovered {
                        project.long_description
                    } else {
                        project.description
                    };
                    ui.label(egui::RichText::new(blurb).color(theme::TEXT_MUTED));
                    ui.add_space(4.0);
                    sections::chips(ui, project.card_tags(), theme::SURFACE_RAISED, theme::TEXT_MUTED);
                });
        })
        .response;

    if response.contains_pointer() {
        gallery.hover(project.title);
    } else {
        gallery.unhover(project.title);
    }
}

fn artwork(ui: &mut egui::Ui, project: &'static Project, hovered: bool, images: &mut ProjectImages) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, IMAGE_HEIGHT), egui::Sense::hover());

    let zoom = ui.ctx().animate_value_with_time(
        egui::Id::new(("project-zoom", project.title)),
        if hovered { HOVER_ZOOM } else { 1.0 },
        0.5,
    );

    match images.texture(ui.ctx(), project.image) {
        Some(texture) => {
            let uv = cover_uv(texture.size_vec2(), rect.size(), zoom);
            egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
                .uv(uv)
                .corner_radius(egui::CornerRadius {
                    nw: theme::CARD_RADIUS,
                    ne: theme::CARD_RADIUS,
                    sw: 0,
                    se: 0,
                })
                .paint_at(ui, rect);
        }
        None => {
            ui.painter()
                .rect_filled(rect, egui::CornerRadius::same(theme::CARD_RADIUS), theme::SURFACE_RAISED);
        }
    }

    if !hovered {
        return;
    }

    ui.painter()
        .rect_filled(rect, egui::CornerRadius::ZERO, egui::Color32::from_black_alpha(110));

    let size = egui::vec2(44.0, 36.0);
    let center = rect.center();
    let links = [
        (Icon::Github, "Source code", project.repo_url, -30.0),
        (Icon::Terminal, "Live demo", project.demo_url, 30.0),
    ];
    for (icon, hint, href, dx) in links {
        let button_rect = egui::Rect::from_center_size(center + egui::vec2(dx, 0.0), size);
        let button = egui::Button::new(egui::RichText::new(theme::icon_glyph(icon)).strong())
            .fill(theme::PRIMARY_SOFT);
        if ui.put(button_rect, button).on_hover_text(hint).clicked() {
            sections::open_link(ui, href);
        }
    }
}

/// Texture coordinates that fill `target` without distortion, cropping the
/// overflowing axis around the center, then zooming in by `zoom`.
pub fn cover_uv(texture: egui::Vec2, target: egui::Vec2, zoom: f32) -> egui::Rect {
    let mut half = egui::vec2(0.5, 0.5);
    if texture.x > 0.0 && texture.y > 0.0 && target.x > 0.0 && target.y > 0.0 {
        let texture_aspect = texture.x / texture.y;
        let target_aspect = target.x / target.y;
        if texture_aspect > target_aspect {
            half.x *= target_aspect / texture_aspect;
        } else {
            half.y *= texture_aspect / target_aspect;
        }
    }
    let half = half / zoom.max(1.0);
    egui::Rect::from_center_size(egui::pos2(0.5, 0.5), half * 2.0)
}

#[cfg(test)]
#[path = "../../tests/projects_tests.rs"]
mod tests;
