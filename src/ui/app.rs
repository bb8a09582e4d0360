//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardFrame, BoardView};
use super::game_state::{GameMode, GameOutcome, GameState};
use super::theme::*;
use crate::{RuleSet, Stone, BOARD_SIZE};

/// Main Gomoku application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
    show_forbidden: bool,
}

impl Default for GomokuApp {
    fn default() -> Self {
        Self {
            state: GameState::new(GameMode::default(), RuleSet::Free),
            board_view: BoardView::default(),
            show_debug: true,
            show_forbidden: true,
        }
    }
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn new_game(&mut self, mode: GameMode, rule_set: RuleSet) {
        self.state = GameState::new(mode, rule_set);
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    for rule_set in [RuleSet::Free, RuleSet::Forbidden] {
                        let vs_computer = format!("New Game vs Computer ({})", rule_set.name());
                        if ui.button(vs_computer).clicked() {
                            self.new_game(GameMode::default(), rule_set);
                            ui.close_menu();
                        }
                    }
                    if ui.button("New Game vs Computer (play White)").clicked() {
                        let mode = GameMode::PvE { human_color: Stone::White };
                        self.new_game(mode, self.state.rule_set);
                        ui.close_menu();
                    }
                    ui.separator();
                    for rule_set in [RuleSet::Free, RuleSet::Forbidden] {
                        if ui.button(format!("New Game PvP ({})", rule_set.name())).clicked() {
                            self.new_game(GameMode::PvP, rule_set);
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                    ui.checkbox(&mut self.show_forbidden, "Forbidden Cells (F)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human_color } => format!("PvE - You: {}", human_color.name()),
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(format!("{mode_text} | {} rules", self.state.rule_set.name()));
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);
                self.render_turn_card(ui);
                ui.add_space(10.0);
                self.render_rules_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = self.state.outcome.clone() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &outcome);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

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
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let is_black = self.state.current_turn == Stone::Black;
            let (fill, text_color) = if is_black {
                (BLACK_STONE, TEXT_PRIMARY)
            } else {
                (WHITE_STONE, BLACK_STONE)
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, fill);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    if is_black { "B" } else { "W" },
                    egui::FontId::proportional(20.0),
                    text_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    let name = self.state.current_turn.name().to_uppercase();
                    ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                        (format!("Computer thinking... {:.1}s", elapsed.as_secs_f32()), STATUS_WARNING)
                    } else if self.state.is_game_over() {
                        ("Game Over".to_string(), WIN_HIGHLIGHT)
                    } else if self.state.is_human_turn() {
                        ("Your turn".to_string(), STATUS_OK)
                    } else {
                        ("Computer to move".to_string(), STATUS_WARNING)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    fn render_rules_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("RULES").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            let rule_set = self.state.rule_set;
            ui.label(RichText::new(rule_set.name()).size(14.0).strong().color(TEXT_PRIMARY));
            let detail = match rule_set {
                RuleSet::Free => "Five or more in a row wins.",
                RuleSet::Forbidden => {
                    "Black wins only with exactly five. Overline, double four and double three are forbidden for Black."
                }
            };
            ui.label(RichText::new(detail).size(11.0).color(TEXT_SECONDARY));
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Undo (U)").clicked() {
                    self.state.undo();
                }
                if ui.button("New (N)").clicked() {
                    self.state.reset();
                }
                if self.state.mode == GameMode::PvP && ui.button("Hint (H)").clicked() {
                    self.state.request_suggestion();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("COMPUTER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.state.last_ai_result else {
                ui.label(RichText::new("Waiting for computer...").size(10.0).color(TEXT_MUTED));
                return;
            };

            ui.label(RichText::new(format!("Score: {:.1}", result.score)).size(11.0).strong().color(STATUS_OK));
            ui.label(
                RichText::new(format!("Attack {} / Defense {}", result.attack, result.defense))
                    .size(10.0)
                    .color(TEXT_SECONDARY),
            );
            ui.label(
                RichText::new(format!(
                    "{} candidates, {} tied, {}ms",
                    result.candidates, result.tied, result.time_ms
                ))
                .size(10.0)
                .color(TEXT_MUTED),
            );

            if let Some(pos) = result.best_move {
                let col = (b'A' + pos.col) as char;
                let row = BOARD_SIZE - pos.row as usize;
                ui.add_space(4.0);
                ui.label(RichText::new(format!("→ {col}{row}")).size(12.0).strong().color(WIN_HIGHLIGHT));
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: &GameOutcome) {
        let headline = match outcome {
            GameOutcome::Win { winner, line } => {
                format!("{} WINS with {} in a row", winner.name().to_uppercase(), line.len())
            }
            GameOutcome::Draw => "DRAW - the board is full".to_string(),
        };

        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(STATUS_OK));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(16.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(12.0);
                    if ui.button("New Game").clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let state = &self.state;
            let forbidden = if self.show_forbidden && state.is_human_turn() {
                state.forbidden_cells()
            } else {
                Vec::new()
            };
            let frame = BoardFrame {
                board: &state.board,
                current_turn: state.current_turn,
                last_move: state.last_move,
                suggested_move: state.suggested_move,
                winning_line: state.outcome.as_ref().and_then(GameOutcome::winning_line),
                forbidden: &forbidden,
                game_over: state.is_game_over(),
            };
            let clicked = self
                .board_view
                .show(ui, &frame, |pos| state.check_placement(pos).is_ok());

            if let Some(pos) = clicked {
                // a rejected click leaves its reason in `state.message`
                let _ = self.state.try_place_stone(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::F) {
                self.show_forbidden = !self.show_forbidden;
            }
            if i.key_pressed(egui::Key::H) && self.state.mode == GameMode::PvP {
                self.state.request_suggestion();
            }
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();
        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && !self.state.is_game_over() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep polling while the computer thinks
        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
