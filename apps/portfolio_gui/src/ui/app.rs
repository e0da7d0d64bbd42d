use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use portfolio_core::{ContactFlow, ProjectGallery, RevealLatch, SiteSettings, SubmitDecision};
use shared::error::SubmissionError;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{category_label, UiError, UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::{
    delivery,
    images::ProjectImages,
    motion,
    sections::{self, SectionId},
    theme,
    toasts::Toasts,
};

/// Sections keep animating for this long after they reveal.
const REVEAL_ANIMATION_SECS: f64 = 3.0;
const NAV_HEIGHT: f32 = 56.0;
const FOOTER_PADDING: i8 = 48;

pub struct PortfolioApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    settings: SiteSettings,
    reveals: [RevealLatch; SectionId::ALL.len()],
    gallery: ProjectGallery<'static>,
    images: ProjectImages,
    contact: ContactFlow,
    toasts: Toasts,
    status: String,
    status_banner: Option<UiError>,
    form_hint: Option<String>,
    pending_scroll: Option<SectionId>,
    year: i32,
}

impl PortfolioApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        settings: SiteSettings,
        year: i32,
    ) -> Self {
        let status_banner = if settings.assets_dir.is_dir() {
            None
        } else {
            let message = format!(
                "missing asset directory {}; project artwork will be blank",
                settings.assets_dir.display()
            );
            tracing::warn!("{message}");
            Some(UiError::from_message(UiErrorContext::AssetLoading, message))
        };

        Self {
            cmd_tx,
            ui_rx,
            images: ProjectImages::new(settings.assets_dir.clone()),
            settings,
            reveals: Default::default(),
            gallery: ProjectGallery::new(content::projects::PROJECTS),
            contact: ContactFlow::new(),
            toasts: Toasts::default(),
            status: String::new(),
            status_banner,
            form_hint: None,
            pending_scroll: None,
            year,
        }
    }

    fn process_ui_events(&mut self, now: f64) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::Error(err) => {
                    tracing::warn!(context = ?err.context(), "{}", err.message());
                    self.status = format!("{}: {}", category_label(err.category()), err.message());
                    self.status_banner = Some(err);
                }
                UiEvent::ContactResolved(outcome) => {
                    if let Some(notification) = self.contact.resolve(outcome, now) {
                        self.toasts.push(notification, now);
                    }
                }
            }
        }
    }

    fn submit_contact(&mut self, now: f64) {
        self.form_hint = None;
        match self.contact.submit(self.settings.contact_endpoint()) {
            SubmitDecision::Incomplete(missing) => {
                let labels: Vec<&str> = missing.iter().map(|field| field.label()).collect();
                self.form_hint = Some(format!("Please fill in: {}", labels.join(", ")));
            }
            SubmitDecision::Advisory(notification) => {
                self.toasts.push(notification, now);
            }
            SubmitDecision::Ignored => {}
            SubmitDecision::Dispatch(dispatch) => {
                let queued = dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::SubmitContact { dispatch },
                    &mut self.status,
                );
                if !queued {
                    // The worker never saw it, so settle the flow here.
                    let err = SubmissionError::transport(self.status.clone());
                    self.status_banner = Some(UiError::from_submission(&err));
                    if let Some(notification) = self.contact.resolve(Err(err), now) {
                        self.toasts.push(notification, now);
                    }
                }
            }
        }
    }

    fn show_nav(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("portfolio_nav")
            .resizable(false)
            .exact_height(NAV_HEIGHT)
            .frame(
                egui::Frame::new()
                    .fill(theme::SURFACE)
                    .stroke(egui::Stroke::new(1.0, theme::BORDER))
                    .inner_margin(egui::Margin::symmetric(24, 0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(content::footer::FOOTER.brand)
                            .size(20.0)
                            .strong()
                            .color(theme::PRIMARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        for id in SectionId::ALL.into_iter().rev() {
                            let Some(label) = id.nav_label() else {
                                continue;
                            };
                            let link = egui::Button::new(
                                egui::RichText::new(label).color(theme::TEXT_MUTED),
                            )
                            .frame(false);
                            if ui.add(link).clicked() {
                                self.pending_scroll = Some(id);
                            }
                        }
                        if !self.status.is_empty() {
                            ui.add_space(16.0);
                            ui.label(
                                egui::RichText::new(&self.status)
                                    .size(12.0)
                                    .color(theme::TEXT_MUTED),
                            );
                        }
                    });
                });
            });
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        let Some(banner) = self.status_banner.clone() else {
            return;
        };

        egui::Frame::NONE
            .fill(theme::DANGER)
            .stroke(egui::Stroke::new(1.0, theme::DANGER_STROKE))
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .outer_margin(egui::Margin::symmetric(16, 8))
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{}: {}",
                            category_label(banner.category()),
                            banner.message()
                        ))
                        .color(egui::Color32::WHITE),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Dismiss").clicked() {
                            self.status_banner = None;
                        }
                    });
                });
            });
    }

    /// Draws every section as a full-width band. Returns whether the contact
    /// form was submitted this frame.
    fn show_sections(&mut self, ui: &mut egui::Ui, now: f64) -> bool {
        let mut submitted = false;

        for id in SectionId::ALL {
            let elapsed = self.reveals[id.index()].elapsed(now);
            let padding = match id {
                SectionId::Footer => FOOTER_PADDING,
                _ => theme::SECTION_PADDING as i8,
            };

            let response = sections::band(ui, id.band_fill(), padding, |ui| match id {
                SectionId::About => sections::about::show(ui, elapsed),
                SectionId::Experience => sections::experience::show(ui, elapsed),
                SectionId::Education => sections::education::show(ui, elapsed),
                SectionId::Skills => sections::skills::show(ui, elapsed),
                SectionId::Projects => {
                    sections::projects::show(ui, elapsed, &mut self.gallery, &mut self.images)
                }
                SectionId::Contact => {
                    submitted = sections::contact::show(
                        ui,
                        elapsed,
                        &mut self.contact,
                        self.form_hint.as_deref(),
                    );
                }
                SectionId::Footer => sections::footer::show(ui, elapsed, self.year),
            });

            if motion::observe(&mut self.reveals[id.index()], ui, response.rect, now) {
                tracing::debug!(section = ?id, "section revealed");
            }
            if self.pending_scroll == Some(id) {
                response.scroll_to_me(Some(egui::Align::TOP));
                self.pending_scroll = None;
            }
        }

        submitted
    }

    fn animating(&self, now: f64) -> bool {
        let revealing = self.reveals.iter().any(|latch| {
            latch
                .elapsed(now)
                .is_some_and(|elapsed| elapsed < REVEAL_ANIMATION_SECS)
        });
        revealing || self.contact.delivery_active() || !self.toasts.is_empty()
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|input| input.time);

        self.process_ui_events(now);
        if let Some(notification) = self.contact.advance_delivery(now) {
            self.toasts.push(notification, now);
        }

        self.show_nav(ctx);

        let mut submitted = false;
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(theme::BACKGROUND))
            .show(ctx, |ui| {
                self.show_status_banner(ui);
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        submitted = self.show_sections(ui, now);
                    });

                if let Some(progress) = self.contact.delivery_progress(now) {
                    delivery::paint(ui.ctx(), ui.max_rect(), progress);
                }
            });

        if submitted {
            self.submit_contact(now);
        }

        self.toasts.expire(now);
        self.toasts.show(ctx);

        if self.animating(now) {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

#[cfg(test)]
#[path = "../tests/app_tests.rs"]
mod tests;
