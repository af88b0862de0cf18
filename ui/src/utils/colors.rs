//! Shared color constants for the UI.

use egui::Color32;

/// Red used for the fetch error message.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);
