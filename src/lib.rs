pub mod api;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod headless;
pub mod logging;
pub mod ui;
