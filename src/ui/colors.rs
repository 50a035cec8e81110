//! Centralized color constants for the UI.

use eframe::egui::Color32;

/// General UI colors for labels and values.
pub mod ui {
    use super::Color32;

    /// Muted gray for stat labels.
    pub const LABEL: Color32 = Color32::from_rgb(120, 120, 130);
    /// Brighter color for stat values.
    pub const VALUE: Color32 = Color32::from_rgb(220, 220, 240);
    /// Error banner text.
    pub const ERROR: Color32 = Color32::from_rgb(255, 100, 100);
    /// Success/positive indicator.
    pub const SUCCESS: Color32 = Color32::from_rgb(100, 200, 100);
}

/// Colors for the pie chart canvas.
pub mod chart {
    use super::Color32;

    /// Canvas background.
    pub const BACKGROUND: Color32 = Color32::from_rgb(20, 20, 35);
    /// Segment label text drawn on the wedges.
    pub const SEGMENT_LABEL: Color32 = Color32::WHITE;
    /// Outline of the hovered segment.
    pub const HIGHLIGHT: Color32 = Color32::WHITE;

    /// Fixed palette cycled across segments.
    const PALETTE: [Color32; 10] = [
        Color32::from_rgb(120, 106, 160),
        Color32::from_rgb(133, 180, 208),
        Color32::from_rgb(148, 130, 113),
        Color32::from_rgb(137, 161, 219),
        Color32::from_rgb(189, 214, 240),
        Color32::from_rgb(181, 107, 118),
        Color32::from_rgb(121, 161, 110),
        Color32::from_rgb(216, 178, 106),
        Color32::from_rgb(170, 120, 190),
        Color32::from_rgb(110, 190, 180),
    ];

    /// Fill color for segment `index`.
    pub fn segment(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Tooltip overlay background - requires alpha, use function.
    pub fn tooltip_background() -> Color32 {
        Color32::from_rgba_unmultiplied(0, 0, 0, 180)
    }
}
