use eframe::egui;
use shared::domain::Icon;

pub const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(9, 11, 19);
pub const SURFACE: egui::Color32 = egui::Color32::from_rgb(17, 21, 33);
pub const SURFACE_RAISED: egui::Color32 = egui::Color32::from_rgb(24, 29, 45);
pub const MUTED_BAND: egui::Color32 = egui::Color32::from_rgb(13, 16, 26);
pub const BORDER: egui::Color32 = egui::Color32::from_rgb(39, 46, 66);
pub const PRIMARY: egui::Color32 = egui::Color32::from_rgb(45, 212, 191);
pub const PRIMARY_SOFT: egui::Color32 = egui::Color32::from_rgb(20, 58, 60);
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(129, 140, 248);
pub const TEXT: egui::Color32 = egui::Color32::from_rgb(226, 232, 240);
pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(148, 163, 184);
pub const DANGER: egui::Color32 = egui::Color32::from_rgb(111, 53, 53);
pub const DANGER_STROKE: egui::Color32 = egui::Color32::from_rgb(175, 96, 96);
pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(22, 101, 52);
pub const SUCCESS_STROKE: egui::Color32 = egui::Color32::from_rgb(74, 222, 128);

pub const CONTENT_MAX_WIDTH: f32 = 1120.0;
pub const SECTION_PADDING: f32 = 96.0;
pub const CARD_RADIUS: u8 = 12;

pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = SURFACE;
    visuals.extreme_bg_color = SURFACE_RAISED;
    visuals.override_text_color = Some(TEXT);
    visuals.hyperlink_color = PRIMARY;
    visuals.selection.bg_fill = PRIMARY_SOFT;
    visuals.selection.stroke = egui::Stroke::new(1.0, PRIMARY);

    let radius = egui::CornerRadius::same(8);
    visuals.widgets.inactive.corner_radius = radius;
    visuals.widgets.hovered.corner_radius = radius;
    visuals.widgets.active.corner_radius = radius;
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER);
    visuals.widgets.inactive.bg_fill = SURFACE_RAISED;
    visuals.widgets.inactive.weak_bg_fill = SURFACE_RAISED;
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, PRIMARY);

    ctx.set_visuals(visuals);
    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(10.0, 10.0);
        style.spacing.button_padding = egui::vec2(14.0, 8.0);
    });
}

pub fn card_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(SURFACE)
        .stroke(egui::Stroke::new(1.0, BORDER))
        .corner_radius(egui::CornerRadius::same(CARD_RADIUS))
        .inner_margin(egui::Margin::same(20))
}

pub fn chip_frame(fill: egui::Color32) -> egui::Frame {
    egui::Frame::NONE
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(255))
        .inner_margin(egui::Margin::symmetric(10, 4))
}

pub fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Brain => "🔬",
        Icon::Zap => "⚡",
        Icon::Code => "💻",
        Icon::Database => "🗄",
        Icon::Briefcase => "💼",
        Icon::GraduationCap => "🎓",
        Icon::Award => "🏆",
        Icon::Mail => "✉",
        Icon::MapPin => "📍",
        Icon::Phone => "📞",
        Icon::Github => "GH",
        Icon::Linkedin => "in",
        Icon::X => "X",
        Icon::Terminal => ">_",
    }
}
