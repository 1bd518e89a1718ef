//! Board rendering and pixel/cell geometry for the tic-tac-toe GUI

use egui::epaint::Mesh;
use egui::{Align2, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Shape, Stroke, Vec2};

use crate::board::{Mark, Pos, GRID_SIZE};
use crate::session::{GameEnd, GameSession};

use super::theme::*;

/// Pointer activity on the board canvas for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardInput {
    /// Cell currently under the pointer, if any
    pub hover: Option<Pos>,
    /// Primary click landed on the canvas this frame
    pub clicked: bool,
}

/// Board view handles rendering and input for the game canvas
pub struct BoardView {
    /// Canvas drawing area, cached for coordinate calculations
    canvas_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            canvas_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the full canvas and report pointer activity.
    ///
    /// Pure with respect to game state: everything drawn is a function of
    /// the session passed in.
    pub fn show(&mut self, ui: &mut egui::Ui, session: &GameSession) -> BoardInput {
        let (response, painter) = ui.allocate_painter(
            Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT),
            Sense::click(),
        );
        self.canvas_rect = response.rect;

        self.draw_background(&painter);

        for row in 0..GRID_SIZE as u8 {
            for col in 0..GRID_SIZE as u8 {
                self.draw_cell(&painter, Pos::new(col, row), session);
            }
        }

        self.draw_grid(&painter);

        if let Some(line) = &session.winning_line {
            self.draw_winning_line(&painter, line);
        }

        self.draw_status(&painter, session);

        BoardInput {
            hover: response.hover_pos().and_then(|p| self.pixel_to_cell(p)),
            clicked: response.clicked(),
        }
    }

    /// Vertical gradient across the whole canvas, top color to bottom color
    fn draw_background(&self, painter: &Painter) {
        let rect = self.canvas_rect;
        let mut mesh = Mesh::default();
        mesh.colored_vertex(rect.left_top(), BG_TOP);
        mesh.colored_vertex(rect.right_top(), BG_TOP);
        mesh.colored_vertex(rect.right_bottom(), BG_BOTTOM);
        mesh.colored_vertex(rect.left_bottom(), BG_BOTTOM);
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(0, 2, 3);
        painter.add(Shape::mesh(mesh));
    }

    /// Shadow, background, and mark for one cell
    fn draw_cell(&self, painter: &Painter, pos: Pos, session: &GameSession) {
        let rect = self.cell_rect(pos).shrink(CELL_INSET);

        // Drop shadow
        painter.rect_filled(
            rect.translate(Vec2::splat(SHADOW_OFFSET)),
            CornerRadius::same(2),
            CELL_SHADOW,
        );

        // Cell background; highlight only an empty cell while the game is live
        let hovered = session.hover == Some(pos)
            && session.board.is_empty(pos)
            && session.game_over.is_none();
        let fill = if hovered { CELL_HOVER } else { CELL_BG };
        painter.rect_filled(rect, CornerRadius::same(2), fill);

        // Mark, scaled by its animation progress
        let cell = session.board.cell(pos);
        let center = self.cell_rect(pos).center();
        match cell.mark {
            Mark::X => self.draw_x(painter, center, cell.anim.progress),
            Mark::O => self.draw_o(painter, center, cell.anim.progress),
            Mark::Empty => {}
        }
    }

    /// Two crossing diagonal segments, half-length scaled by progress
    fn draw_x(&self, painter: &Painter, center: Pos2, progress: f32) {
        let half = X_HALF_LEN * progress;
        if half <= 0.0 {
            return;
        }
        let stroke = Stroke::new(MARK_STROKE_WIDTH, X_COLOR);
        painter.line_segment(
            [center + Vec2::new(-half, -half), center + Vec2::new(half, half)],
            stroke,
        );
        painter.line_segment(
            [center + Vec2::new(half, -half), center + Vec2::new(-half, half)],
            stroke,
        );
    }

    /// Circle outline, radius scaled by progress
    fn draw_o(&self, painter: &Painter, center: Pos2, progress: f32) {
        let radius = O_RADIUS * progress;
        if radius <= 0.0 {
            return;
        }
        painter.circle_stroke(center, radius, Stroke::new(MARK_STROKE_WIDTH, O_COLOR));
    }

    /// Separator lines between the 3x3 cells
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let origin = self.canvas_rect.min;
        let grid_px = CELL_SIZE * GRID_SIZE as f32;

        for i in 1..GRID_SIZE {
            let offset = i as f32 * CELL_SIZE;

            // Vertical line
            let start = origin + Vec2::new(offset, 0.0);
            let end = origin + Vec2::new(offset, grid_px);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = origin + Vec2::new(0.0, offset);
            let end = origin + Vec2::new(grid_px, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Highlight the winning triple through the cell centers
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 3]) {
        let stroke = Stroke::new(MARK_STROKE_WIDTH + 2.0, WIN_HIGHLIGHT);
        let start = self.cell_rect(line[0]).center();
        let end = self.cell_rect(line[2]).center();
        painter.line_segment([start, end], stroke);
    }

    /// Status line centered in the strip below the grid
    fn draw_status(&self, painter: &Painter, session: &GameSession) {
        let text = match session.game_over {
            Some(_) => "Game over, click to restart".to_string(),
            None => format!("Player {}'s turn", session.current_turn),
        };

        let center = Pos2::new(
            self.canvas_rect.center().x,
            self.canvas_rect.max.y - STATUS_BAR_HEIGHT / 2.0,
        );
        painter.text(
            center,
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(STATUS_FONT_SIZE),
            STATUS_TEXT,
        );
    }

    /// Screen rect of a cell, before inset
    fn cell_rect(&self, pos: Pos) -> Rect {
        let origin = self.canvas_rect.min
            + Vec2::new(pos.col as f32 * CELL_SIZE, pos.row as f32 * CELL_SIZE);
        Rect::from_min_size(origin, Vec2::splat(CELL_SIZE))
    }

    /// Convert screen coordinates to a board cell
    pub fn pixel_to_cell(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.canvas_rect.min;
        cell_at(relative)
    }

    /// Banner text for a finished game
    pub fn end_message(end: GameEnd) -> String {
        match end {
            GameEnd::Win(mark) => format!("{mark} wins!"),
            GameEnd::Draw => "Draw!".to_string(),
        }
    }
}

/// Map canvas-local pixel coordinates to a cell index.
///
/// Integer division by the fixed cell size; valid only when both indices
/// land in [0, 3). The status strip below the grid maps to None.
pub fn cell_at(offset: Vec2) -> Option<Pos> {
    let col = (offset.x / CELL_SIZE).floor() as i32;
    let row = (offset.y / CELL_SIZE).floor() as i32;

    if Pos::is_valid(col, row) {
        Some(Pos::new(col as u8, row as u8))
    } else {
        None
    }
}
