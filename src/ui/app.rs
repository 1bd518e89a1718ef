//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{Align2, CentralPanel, Context, CornerRadius, Frame, Margin, RichText, Vec2};

use crate::board::anim::TICK_INTERVAL;
use crate::session::{GameSession, TickClock};

use super::board_view::BoardView;
use super::theme::*;

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    session: GameSession,
    clock: TickClock,
    board_view: BoardView,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self {
            session: GameSession::new(),
            clock: TickClock::new(),
            board_view: BoardView::default(),
        }
    }
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the board canvas and route its input into the session
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::NONE)
            .show(ctx, |ui| {
                let input = self.board_view.show(ui, &self.session);

                self.session.pointer_moved(input.hover);
                if input.clicked {
                    self.session.click(input.hover);
                }
            });
    }

    /// Non-blocking end-of-game banner over the grid.
    ///
    /// The session's game-over state keeps further moves rejected while the
    /// banner is up; the banner itself is just another restart target.
    fn render_game_over_banner(&mut self, ctx: &Context) {
        let Some(end) = self.session.game_over else {
            return;
        };

        egui::Area::new(egui::Id::new("game_over_banner"))
            .anchor(Align2::CENTER_CENTER, Vec2::new(0.0, -STATUS_BAR_HEIGHT / 2.0))
            .show(ctx, |ui| {
                Frame::new()
                    .fill(BANNER_BG)
                    .corner_radius(CornerRadius::same(8))
                    .inner_margin(Margin::same(16))
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            let banner = ui.add(
                                egui::Label::new(
                                    RichText::new(BoardView::end_message(end))
                                        .size(28.0)
                                        .strong()
                                        .color(BANNER_TEXT),
                                )
                                .sense(egui::Sense::click()),
                            );
                            ui.add_space(4.0);
                            ui.label(
                                RichText::new("Click anywhere for a new game")
                                    .size(12.0)
                                    .color(BANNER_TEXT),
                            );

                            if banner.clicked() {
                                self.session.click(None);
                            }
                        });
                    });
            });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Drain whole animation ticks since the last frame
        let mut dirty = false;
        for _ in 0..self.clock.ticks() {
            dirty |= self.session.tick();
        }

        self.render_board(ctx);
        self.render_game_over_banner(ctx);

        // Keep the tick running only while something can still change
        if dirty || self.session.is_dirty() || self.session.animating() {
            ctx.request_repaint_after(TICK_INTERVAL);
        }
    }
}
