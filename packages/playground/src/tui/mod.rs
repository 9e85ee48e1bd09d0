//! Terminal user interface

pub mod events;
pub mod tabs;
pub mod ui;

pub use events::run_tui;
