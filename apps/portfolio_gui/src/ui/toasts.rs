//! Transient notifications stacked in the bottom-right corner.

use eframe::egui;
use portfolio_core::{Notification, NotificationKind};

use crate::ui::theme;

pub const TOAST_LIFETIME_SECS: f64 = 5.0;
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
struct Toast {
    notification: Notification,
    shown_at: f64,
}

#[derive(Debug, Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, notification: Notification, now: f64) {
        tracing::debug!(title = %notification.title, "showing notification");
        self.items.push(Toast {
            notification,
            shown_at: now,
        });
        if self.items.len() > MAX_VISIBLE {
            let excess = self.items.len() - MAX_VISIBLE;
            self.items.drain(..excess);
        }
    }

    pub fn expire(&mut self, now: f64) {
        self.items
            .retain(|toast| now - toast.shown_at < TOAST_LIFETIME_SECS);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[cfg(test)]
    pub fn titles(&self) -> Vec<&str> {
        self.items
            .iter()
            .map(|toast| toast.notification.title.as_str())
            .collect()
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        if self.items.is_empty() {
            return;
        }

        let mut dismissed = None;
        egui::Area::new(egui::Id::new("portfolio-toasts"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                ui.set_max_width(360.0);
                for (index, toast) in self.items.iter().enumerate() {
                    let (fill, stroke) = match toast.notification.kind {
                        NotificationKind::Error => (theme::DANGER, theme::DANGER_STROKE),
                        NotificationKind::Success => (theme::SUCCESS, theme::SUCCESS_STROKE),
                        NotificationKind::Advisory => (theme::SURFACE_RAISED, theme::PRIMARY),
                    };
                    egui::Frame::NONE
                        .fill(fill)
                        .stroke(egui::Stroke::new(1.0, stroke))
                        .corner_radius(8.0)
                        .inner_margin(egui::Margin::symmetric(12, 10))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.vertical(|ui| {
                                    ui.label(
                                        egui::RichText::new(&toast.notification.title)
                                            .strong()
                                            .color(egui::Color32::WHITE),
                                    );
                                    ui.label(
                                        egui::RichText::new(&toast.notification.description)
                                            .color(egui::Color32::WHITE),
                                    );
                                });
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Min),
                                    |ui| {
                                        if ui.small_button("Dismiss").clicked() {
                                            dismissed = Some(index);
                                        }
                                    },
                                );
                            });
                        });
                }
            });

        if let Some(index) = dismissed {
            self.items.remove(index);
        }
    }
}

#[cfg(test)]
#[path = "../tests/toasts_tests.rs"]
mod tests;
