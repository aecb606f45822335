//! Board rendering for the Halma GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Color, Pos, BOARD_SIZE};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 80.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        selected: Option<Pos>,
        valid_moves: &[Pos],
        game_over: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();
        let board_size = available_size.x.min(available_size.y) - 16.0;
        self.cell_size = board_size / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        self.draw_squares(&painter);
        self.draw_camps(&painter);
        self.draw_pieces(&painter, board);

        if let Some(pos) = selected {
            self.draw_selection_ring(&painter, pos);
        }
        for pos in valid_moves {
            self.draw_move_hint(&painter, *pos);
        }

        // Handle hover and click
        let mut clicked_pos = None;
        if !game_over {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(cell) = self.screen_to_board(pointer_pos) {
                    self.draw_hover(&painter, cell);
                    if response.clicked() {
                        clicked_pos = Some(cell);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the checkerboard squares
    fn draw_squares(&self, painter: &Painter) {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let color = if (row + col) % 2 == 0 {
                    SQUARE_LIGHT
                } else {
                    SQUARE_DARK
                };
                painter.rect_filled(self.cell_rect(row, col), CornerRadius::ZERO, color);
            }
        }
    }

    /// Tint the two starting camps so the goal corners read at a glance
    fn draw_camps(&self, painter: &Painter) {
        for color in [Color::Black, Color::White] {
            for &(row, col) in color.home_zone() {
                painter.rect_filled(
                    self.cell_rect(row as usize, col as usize),
                    CornerRadius::ZERO,
                    camp_tint(),
                );
            }
        }
    }

    /// Draw all pieces
    fn draw_pieces(&self, painter: &Painter, board: &Board) {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Pos::new(row as u8, col as u8);
                if let Some(piece) = board.get(pos) {
                    self.draw_piece(painter, pos, piece.color);
                }
            }
        }
    }

    /// Draw a single piece: outline ring plus filled circle
    fn draw_piece(&self, painter: &Painter, pos: Pos, color: Color) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * PIECE_RADIUS_RATIO;

        let fill = match color {
            Color::Black => BLACK_PIECE,
            Color::White => WHITE_PIECE,
        };

        // Shadow
        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        );
        painter.circle_filled(center, radius + OUTLINE_WIDTH, PIECE_OUTLINE);
        painter.circle_filled(center, radius, fill);
    }

    /// Ring around the selected piece
    fn draw_selection_ring(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * PIECE_RADIUS_RATIO + 4.0;
        painter.circle_stroke(center, radius, Stroke::new(SELECTION_STROKE, SELECTION_RING));
    }

    /// Dot on a legal destination of the selected piece
    fn draw_move_hint(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, self.cell_size * HINT_RADIUS_RATIO, MOVE_HINT);
    }

    /// Soft highlight under the pointer
    fn draw_hover(&self, painter: &Painter, pos: Pos) {
        painter.rect_filled(
            self.cell_rect(pos.row as usize, pos.col as usize),
            CornerRadius::ZERO,
            hover_highlight(),
        );
    }

    /// Rectangle covering one cell
    fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(col as f32 * self.cell_size, row as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to a board cell by cell-size division
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Center of a cell in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}
