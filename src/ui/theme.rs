//! Theme constants for the Halma GUI

use egui::Color32;

// Board squares - warm checkerboard browns
pub const SQUARE_DARK: Color32 = Color32::from_rgb(153, 91, 34);
pub const SQUARE_LIGHT: Color32 = Color32::from_rgb(223, 169, 109);

// Piece colors
pub const BLACK_PIECE: Color32 = Color32::from_rgb(25, 25, 30);
pub const WHITE_PIECE: Color32 = Color32::from_rgb(250, 250, 252);
pub const PIECE_OUTLINE: Color32 = Color32::from_rgb(128, 128, 128);

// Markers
pub const SELECTION_RING: Color32 = Color32::from_rgb(93, 187, 99);
pub const MOVE_HINT: Color32 = Color32::from_rgb(60, 120, 216);

// Camp overlay tint, drawn over the corner squares
pub fn camp_tint() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 18)
}

pub fn hover_highlight() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 40)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_BUSY: Color32 = Color32::from_rgb(255, 180, 50);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Sizes
pub const PIECE_RADIUS_RATIO: f32 = 0.38;
pub const OUTLINE_WIDTH: f32 = 2.0;
pub const HINT_RADIUS_RATIO: f32 = 0.14;
pub const SELECTION_STROKE: f32 = 3.0;
