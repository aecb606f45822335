//! Main application for the Halma GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::board::Color;

use super::board_view::BoardView;
use super::game_state::{GameMode, GameState};
use super::theme::*;

/// Main Halma application
pub struct HalmaApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for HalmaApp {
    fn default() -> Self {
        Self {
            state: GameState::new(GameMode::default()),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }
}

impl HalmaApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (play Black)").clicked() {
                        self.state = GameState::new(GameMode::PvE {
                            human_color: Color::Black,
                        });
                        ui.close_menu();
                    }
                    if ui.button("New Game (play White)").clicked() {
                        self.state = GameState::new(GameMode::PvE {
                            human_color: Color::White,
                        });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.state = GameState::new(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Reset").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human_color } => format!("PvE - You: {human_color:?}"),
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(230.0)
            .max_width(270.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_timer_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(winner) = self.state.game_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, winner);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("HALMA").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("corner to corner").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let is_black = self.state.game.turn() == Color::Black;
            let (symbol, color_name, accent) = if is_black {
                ("●", "BLACK", egui::Color32::from_rgb(70, 70, 75))
            } else {
                ("○", "WHITE", egui::Color32::from_rgb(220, 220, 225))
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    symbol,
                    egui::FontId::proportional(28.0),
                    if is_black { TEXT_PRIMARY } else { egui::Color32::from_rgb(30, 30, 35) },
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(color_name).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.is_ai_thinking() {
                        ("AI thinking...", STATUS_BUSY)
                    } else if self.state.game_over.is_some() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else {
                        ("Your turn", STATUS_OK)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render timer card
    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                ui.label(RichText::new(format!("{secs:.2}s")).size(28.0).strong().color(STATUS_BUSY));
            } else {
                let elapsed = self.state.clock.elapsed();
                ui.label(
                    RichText::new(format!("{:.1}s", elapsed.as_secs_f32()))
                        .size(24.0)
                        .color(TEXT_PRIMARY),
                );
            }

            if let Some(ai_time) = self.state.last_ai_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Render AI debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                if let Some(result) = &self.state.last_ai_result {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new("Minimax").size(11.0).strong().color(STATUS_OK));
                            ui.label(
                                RichText::new(format!("Score: {:+.3}", result.score))
                                    .size(10.0)
                                    .color(TEXT_SECONDARY),
                            );
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                            ui.vertical(|ui| {
                                ui.label(
                                    RichText::new(format!("{}ms", result.time_ms))
                                        .size(10.0)
                                        .color(TEXT_SECONDARY),
                                );
                                ui.label(
                                    RichText::new(format!("{} nodes", result.nodes))
                                        .size(10.0)
                                        .color(TEXT_MUTED),
                                );
                            });
                        });
                    });
                } else {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                }
            });
    }

    /// Render game over card
    fn render_game_over_card(&self, ui: &mut egui::Ui, winner: Color) {
        let (name, symbol, accent) = if winner == Color::Black {
            ("BLACK", "●", egui::Color32::from_rgb(70, 70, 75))
        } else {
            ("WHITE", "○", egui::Color32::from_rgb(220, 220, 225))
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        ui.add_space(ui.available_width() / 2.0 - 56.0);
                        ui.label(RichText::new(symbol).size(32.0).color(accent));
                        ui.add_space(8.0);
                        ui.vertical(|ui| {
                            ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));
                            ui.label(RichText::new("WINS!").size(14.0).color(WIN_HIGHLIGHT));
                        });
                    });
                    ui.add_space(4.0);
                    ui.label(RichText::new("camp fully occupied").size(11.0).color(TEXT_SECONDARY));
                });
            });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let selected = self.state.game.selected().map(|p| p.pos);
            let valid_moves: Vec<_> = self.state.game.valid_moves().to_vec();

            let clicked = self.board_view.show(
                ui,
                self.state.game.board(),
                selected,
                &valid_moves,
                self.state.game_over.is_some(),
            );

            if let Some(pos) = clicked {
                self.state.handle_click(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for HalmaApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Check AI result
        self.state.check_ai_result();

        // Start AI thinking if needed
        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && self.state.game_over.is_none()
        {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
