//! Glue between the reveal latches and egui layout.

use eframe::egui;
use portfolio_core::{Entrance, EntranceFrame, RevealLatch, Stagger, ViewportSpan};

pub fn span_of(rect: egui::Rect) -> ViewportSpan {
    ViewportSpan::new(rect.top(), rect.bottom())
}

/// Feeds the latch with where `section` landed relative to the visible
/// scroll area this frame.
pub fn observe(latch: &mut RevealLatch, ui: &egui::Ui, section: egui::Rect, now: f64) -> bool {
    latch.observe(span_of(section), span_of(ui.clip_rect()), now)
}

/// Frame of item `index` in a staggered group whose section revealed
/// `elapsed` seconds ago.
pub fn frame_for(
    stagger: Stagger,
    entrance: Entrance,
    index: usize,
    elapsed: Option<f64>,
) -> EntranceFrame {
    entrance.at(stagger.progress(index, elapsed))
}

/// Lays out `add` shifted, faded and narrowed per `frame`, while the parent
/// reserves the space of the settled pose so neighbours never move.
pub fn with_entrance<R>(
    ui: &mut egui::Ui,
    frame: EntranceFrame,
    add: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let offset = egui::vec2(frame.offset_x, frame.offset_y);
    let available = ui.available_rect_before_wrap();
    let mut max_rect = available.translate(offset);
    if frame.scale < 1.0 {
        let inset = available.width() * (1.0 - frame.scale) / 2.0;
        max_rect = max_rect.shrink2(egui::vec2(inset, 0.0));
    }

    let mut child = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(max_rect)
            .layout(*ui.layout()),
    );
    child.multiply_opacity(frame.opacity);
    let result = add(&mut child);

    let mut settled = child.min_rect().translate(-offset);
    if frame.scale < 1.0 {
        settled = settled.expand2(egui::vec2(available.width() * (1.0 - frame.scale) / 2.0, 0.0));
    }
    ui.advance_cursor_after_rect(settled);
    result
}
