//! Bridge between the egui frame loop and the async backend worker.

pub mod commands;
pub mod runtime;
