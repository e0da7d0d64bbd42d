//! UI layer: app shell, page sections, motion glue, and theme.

pub mod app;
pub mod delivery;
pub mod images;
pub mod motion;
pub mod sections;
pub mod theme;
pub mod toasts;

pub use app::PortfolioApp;
