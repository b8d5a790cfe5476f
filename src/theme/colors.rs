//! Colors - LibreChat Desktop Theme
//!
//! Dark slate palette with the emerald greeting accent, matching the product
//! styling.

use gpui::{rgb, Rgba};

/// Shell color palette - all colors are accessed via associated functions
pub struct ChatColors;

impl ChatColors {
    // Background colors
    /// Window background - near-black slate
    pub fn background() -> Rgba { rgb(0x020617) }
    /// Header background
    pub fn header_bg() -> Rgba { rgb(0x0f172a) }
    /// Greeting card background
    pub fn card_bg() -> Rgba { rgb(0x0f172a) }
    /// Log panel background
    pub fn log_panel_bg() -> Rgba { rgb(0x0b1120) }

    // Text colors
    /// Primary text - slate-100
    pub fn text_primary() -> Rgba { rgb(0xf1f5f9) }
    /// Secondary text - slate-300
    pub fn text_secondary() -> Rgba { rgb(0xcbd5e1) }
    /// Muted text - slate-400
    pub fn text_muted() -> Rgba { rgb(0x94a3b8) }
    /// Faint text - slate-500
    pub fn text_faint() -> Rgba { rgb(0x64748b) }
    /// Greeting accent - emerald-400
    pub fn greeting() -> Rgba { rgb(0x34d399) }

    // Status colors
    /// Success - green
    pub fn success() -> Rgba { rgb(0x22c55e) }
    /// Warning - amber
    pub fn warning() -> Rgba { rgb(0xf59e0b) }
    /// Error - red
    pub fn danger() -> Rgba { rgb(0xef4444) }

    // Border colors
    /// Card and panel borders - slate-800
    pub fn border() -> Rgba { rgb(0x1e293b) }
    /// Inline code background
    pub fn code_bg() -> Rgba { rgb(0x1e293b) }
}
