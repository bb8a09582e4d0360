//! Colors and sizes for the Gomoku GUI

use egui::Color32;

// Wooden board
pub const BOARD_BG: Color32 = Color32::from_rgb(214, 176, 120);
pub const GRID_LINE: Color32 = Color32::from_rgb(66, 44, 24);
pub const STAR_POINT: Color32 = Color32::from_rgb(56, 38, 22);
pub const COORD_TEXT: Color32 = Color32::from_rgb(92, 64, 38);

pub const BLACK_STONE: Color32 = Color32::from_rgb(22, 22, 26);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(78, 78, 88);
pub const WHITE_STONE: Color32 = Color32::from_rgb(246, 246, 248);
pub const WHITE_STONE_RIM: Color32 = Color32::from_rgb(186, 186, 192);

pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(220, 64, 52);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(60, 210, 90);
pub const FORBIDDEN_MARK: Color32 = Color32::from_rgb(200, 40, 40);

/// Translucent preview of a stone of the given color.
pub fn ghost(stone_color: Color32, alpha: u8) -> Color32 {
    let [r, g, b, _] = stone_color.to_array();
    Color32::from_rgba_unmultiplied(r, g, b, alpha)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(235, 48, 48, 110)
}

// Side panel
pub const PANEL_BG: Color32 = Color32::from_rgb(28, 30, 34);
pub const CARD_BG: Color32 = Color32::from_rgb(38, 41, 47);
pub const GAME_OVER_BG: Color32 = Color32::from_rgb(40, 78, 56);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(86, 58, 30);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(236, 238, 242);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(158, 164, 176);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(116, 122, 134);
pub const STATUS_OK: Color32 = Color32::from_rgb(86, 196, 126);
pub const STATUS_WARNING: Color32 = Color32::from_rgb(246, 176, 60);

pub const BOARD_MARGIN: f32 = 36.0;
pub const STONE_RADIUS_RATIO: f32 = 0.44;
pub const STAR_POINT_RADIUS: f32 = 3.5;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.5;
pub const FORBIDDEN_MARK_RATIO: f32 = 0.22;

/// Star points of a 15x15 board, (row, col)
pub const STAR_POINTS: [(u8, u8); 5] = [(3, 3), (3, 11), (7, 7), (11, 3), (11, 11)];
