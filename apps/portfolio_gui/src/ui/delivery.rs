//! Overlay played after a successful submission: an envelope flies across the
//! window and fades out as it leaves.

use eframe::egui;
use portfolio_core::reveal::ease_out_cubic;

use crate::ui::theme;

pub fn paint(ctx: &egui::Context, screen: egui::Rect, progress: f32) {
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("delivery-overlay"),
    ));

    let t = ease_out_cubic(progress);
    let start = egui::pos2(screen.left() + 80.0, screen.bottom() - 120.0);
    let end = egui::pos2(screen.right() + 80.0, screen.top() + 80.0);
    let lift = (t * std::f32::consts::PI).sin() * screen.height() * 0.15;
    let center = start.lerp(end, t) - egui::vec2(0.0, lift);

    let fade = if progress > 0.8 {
        ((1.0 - progress) / 0.2).clamp(0.0, 1.0)
    } else {
        1.0
    };

    painter.rect_filled(
        screen,
        0.0,
        egui::Color32::from_black_alpha((60.0 * fade) as u8),
    );

    let body = egui::Rect::from_center_size(center, egui::vec2(72.0, 48.0));
    painter.rect(
        body,
        6.0,
        theme::SURFACE_RAISED.gamma_multiply(fade),
        egui::Stroke::new(2.0, theme::PRIMARY.gamma_multiply(fade)),
        egui::StrokeKind::Inside,
    );
    painter.line_segment(
        [body.left_top(), body.center()],
        egui::Stroke::new(2.0, theme::PRIMARY.gamma_multiply(fade)),
    );
    painter.line_segment(
        [body.right_top(), body.center()],
        egui::Stroke::new(2.0, theme::PRIMARY.gamma_multiply(fade)),
    );

    painter.text(
        egui::pos2(screen.center().x, screen.bottom() - 48.0),
        egui::Align2::CENTER_CENTER,
        "Delivering your message...",
        egui::FontId::proportional(16.0),
        theme::TEXT.gamma_multiply(fade),
    );
}
