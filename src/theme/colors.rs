//! Colors - Ledgerdesk Theme Colors

use gpui::{rgb, Hsla, Rgba};

/// Ledgerdesk color palette - All colors are accessed via associated functions
pub struct DeskColors;

impl DeskColors {
    // Primary colors
    /// Header background - Deep navy
    pub fn header_bg() -> Rgba { rgb(0x1e3a5f) }
    /// Primary accent - Teal (for main actions)
    pub fn accent() -> Rgba { rgb(0x0d9488) }
    /// Secondary accent - Blue
    pub fn accent_blue() -> Rgba { rgb(0x3b82f6) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    /// Content area background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Sidebar background
    pub fn sidebar_bg() -> Rgba { rgb(0xffffff) }
    /// Selected list row background
    pub fn selection_bg() -> Rgba { rgb(0xe0f2fe) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }
    /// Header text
    pub fn text_header() -> Rgba { rgb(0xffffff) }

    // Status colors
    /// Success - Green
    pub fn success() -> Rgba { rgb(0x22c55e) }
    /// Warning - Amber
    pub fn warning() -> Rgba { rgb(0xf59e0b) }
    /// Error/Danger - Red
    pub fn danger() -> Rgba { rgb(0xef4444) }
    /// Info - Blue
    pub fn info() -> Rgba { rgb(0x3b82f6) }

    // Amount colors
    /// Credit amount - Green
    pub fn amount_credit() -> Rgba { rgb(0x16a34a) }
    /// Debit amount - default ink
    pub fn amount_debit() -> Rgba { rgb(0x1f2937) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }
    /// Focused border
    pub fn border_focus() -> Rgba { rgb(0x3b82f6) }
    /// Error border
    pub fn border_error() -> Rgba { rgb(0xef4444) }

    // Button colors
    /// Primary button background
    pub fn button_primary_bg() -> Rgba { rgb(0x0d9488) }
    /// Primary button text
    pub fn button_primary_text() -> Rgba { rgb(0xffffff) }
    /// Danger button background
    pub fn button_danger_bg() -> Rgba { rgb(0xdc2626) }
    /// Danger button text
    pub fn button_danger_text() -> Rgba { rgb(0xffffff) }
    /// Ghost button text
    pub fn button_ghost_text() -> Rgba { rgb(0x6b7280) }

    // Table colors
    /// Table header background
    pub fn table_header_bg() -> Rgba { rgb(0xf9fafb) }
    /// Table row hover
    pub fn table_row_hover() -> Rgba { rgb(0xf3f4f6) }
    /// Table row alternate
    pub fn table_row_alt() -> Rgba { rgb(0xf9fafb) }

    // Input colors
    /// Input background
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    /// Input border
    pub fn input_border() -> Rgba { rgb(0xd1d5db) }
    /// Input placeholder
    pub fn input_placeholder() -> Rgba { rgb(0x9ca3af) }

    // Banner colors
    /// Success banner background
    pub fn banner_success_bg() -> Rgba { rgb(0xdcfce7) }
    /// Error banner background
    pub fn banner_error_bg() -> Rgba { rgb(0xfee2e2) }
    /// Info banner background
    pub fn banner_info_bg() -> Rgba { rgb(0xdbeafe) }
}

/// Convert Rgba to Hsla for certain GPUI operations
impl DeskColors {
    pub fn header_bg_hsla() -> Hsla {
        Hsla::from(Self::header_bg())
    }

    pub fn accent_hsla() -> Hsla {
        Hsla::from(Self::accent())
    }
}
