mod app;
mod commands;
mod logging;
mod render;

pub use app::run_app;
