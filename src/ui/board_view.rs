//! Board rendering and click handling for the Gomoku GUI

use crate::{Board, Pos, Stone, BOARD_SIZE};
use egui::{Color32, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Everything the board view draws in one frame
pub struct BoardFrame<'a> {
    pub board: &'a Board,
    pub current_turn: Stone,
    pub last_move: Option<Pos>,
    pub suggested_move: Option<Pos>,
    pub winning_line: Option<&'a [Pos]>,
    /// Cells the side to move may not play
    pub forbidden: &'a [Pos],
    pub game_over: bool,
}

/// Lays out the 15x15 grid inside the available space and maps clicks to cells
pub struct BoardView {
    cell_size: f32,
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 32.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Draw `frame` and return the clicked cell, legal or not.
    ///
    /// `is_legal` only picks the hover preview color; rejections are reported
    /// by whoever handles the click.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        frame: &BoardFrame<'_>,
        is_legal: impl Fn(Pos) -> bool,
    ) -> Option<Pos> {
        let side = ui.available_size().min_elem() - 16.0;
        self.cell_size = (side - 2.0 * BOARD_MARGIN) / (BOARD_SIZE - 1) as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_labels(&painter);

        for pos in frame.board.black.iter_ones() {
            self.draw_stone(&painter, pos, Stone::Black);
        }
        for pos in frame.board.white.iter_ones() {
            self.draw_stone(&painter, pos, Stone::White);
        }
        for &pos in frame.forbidden {
            self.draw_forbidden_mark(&painter, pos);
        }

        if let Some(pos) = frame.last_move {
            painter.circle_filled(self.board_to_screen(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }
        if let Some(line) = frame.winning_line {
            self.draw_winning_line(&painter, line);
        }
        if let Some(pos) = frame.suggested_move {
            self.draw_ghost(&painter, pos, frame.current_turn, 110);
            painter.text(
                self.board_to_screen(pos),
                egui::Align2::CENTER_CENTER,
                "?",
                FontId::proportional(14.0),
                TEXT_PRIMARY,
            );
        }

        if frame.game_over {
            return None;
        }

        let hovered = self.screen_to_board(response.hover_pos()?)?;
        if frame.board.is_empty(hovered) {
            if is_legal(hovered) {
                self.draw_ghost(&painter, hovered, frame.current_turn, 80);
            } else {
                let radius = self.cell_size * STONE_RADIUS_RATIO;
                painter.circle_filled(self.board_to_screen(hovered), radius, hover_invalid());
            }
        }

        response.clicked().then_some(hovered)
    }

    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let first = 0;
        let last = (BOARD_SIZE - 1) as u8;

        for i in 0..BOARD_SIZE as u8 {
            let vertical = [Pos::new(first, i), Pos::new(last, i)].map(|p| self.board_to_screen(p));
            let horizontal = [Pos::new(i, first), Pos::new(i, last)].map(|p| self.board_to_screen(p));
            painter.line_segment(vertical, stroke);
            painter.line_segment(horizontal, stroke);
        }

        for (row, col) in STAR_POINTS {
            painter.circle_filled(self.board_to_screen(Pos::new(row, col)), STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Column letters A-O along the top, row numbers 15-1 down the left
    fn draw_labels(&self, painter: &Painter) {
        let font = FontId::proportional(12.0);
        let inset = BOARD_MARGIN * 0.45;

        for i in 0..BOARD_SIZE as u8 {
            let letter = (b'A' + i) as char;
            let column = self.board_to_screen(Pos::new(0, i));
            painter.text(
                Pos2::new(column.x, self.board_rect.min.y + inset),
                egui::Align2::CENTER_CENTER,
                letter,
                font.clone(),
                COORD_TEXT,
            );

            let number = BOARD_SIZE - i as usize;
            let row = self.board_to_screen(Pos::new(i, 0));
            painter.text(
                Pos2::new(self.board_rect.min.x + inset, row.y),
                egui::Align2::CENTER_CENTER,
                number,
                font.clone(),
                COORD_TEXT,
            );
        }
    }

    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        let (fill, shadow_alpha) = match stone {
            Stone::Black => (BLACK_STONE, 70),
            Stone::White => (WHITE_STONE, 45),
            Stone::Empty => return,
        };

        painter.circle_filled(
            center + Vec2::splat(radius * 0.12),
            radius,
            Color32::from_black_alpha(shadow_alpha),
        );
        painter.circle_filled(center, radius, fill);

        if stone == Stone::Black {
            painter.circle_filled(center - Vec2::splat(radius * 0.32), radius * 0.18, BLACK_STONE_HIGHLIGHT);
        } else {
            painter.circle_stroke(center, radius * 0.86, Stroke::new(radius * 0.08, WHITE_STONE_RIM));
        }
    }

    /// Small cross on a cell that is forbidden for Black
    fn draw_forbidden_mark(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let arm = self.cell_size * FORBIDDEN_MARK_RATIO;
        let stroke = Stroke::new(2.0, FORBIDDEN_MARK);
        painter.line_segment([center + Vec2::new(-arm, -arm), center + Vec2::new(arm, arm)], stroke);
        painter.line_segment([center + Vec2::new(-arm, arm), center + Vec2::new(arm, -arm)], stroke);
    }

    /// Connect and ring every stone of a winning line, whatever its length
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);
        let (Some(&first), Some(&last)) = (line.first(), line.last()) else {
            return;
        };
        painter.line_segment([self.board_to_screen(first), self.board_to_screen(last)], stroke);

        let ring = self.cell_size * STONE_RADIUS_RATIO + 3.0;
        for &pos in line {
            painter.circle_stroke(self.board_to_screen(pos), ring, stroke);
        }
    }

    fn draw_ghost(&self, painter: &Painter, pos: Pos, turn: Stone, alpha: u8) {
        let color = match turn {
            Stone::Black => BLACK_STONE,
            Stone::White => WHITE_STONE,
            Stone::Empty => return,
        };
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        painter.circle_filled(self.board_to_screen(pos), radius, ghost(color, alpha));
    }

    /// Nearest intersection to a screen point, if it lies on the board
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let offset = screen_pos - self.board_rect.min - Vec2::splat(BOARD_MARGIN);
        let col = (offset.x / self.cell_size).round() as i32;
        let row = (offset.y / self.cell_size).round() as i32;
        Pos::is_valid(row, col).then(|| Pos::new(row as u8, col as u8))
    }

    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.board_rect.min
            + Vec2::splat(BOARD_MARGIN)
            + Vec2::new(pos.col as f32, pos.row as f32) * self.cell_size
    }
}
