//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Color32, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;
use crate::{Difficulty, GameConfig, Pos, Stone, BOARD_SIZE};

/// How the last game ended, from the human's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ending {
    Won,
    Lost,
    Draw,
}

/// Main Gomoku application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self {
            state: GameState::new(&config),
            board_view: BoardView::default(),
        }
    }

    fn ending(&self) -> Option<Ending> {
        let game = &self.state.game;
        if !game.is_finished() {
            return None;
        }
        Some(match game.winner() {
            Some(stone) if stone == game.player_color() => Ending::Won,
            Some(_) => Ending::Lost,
            None => Ending::Draw,
        })
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Play as Black").clicked() {
                        self.state.play_as(Stone::Black);
                        ui.close_menu();
                    }
                    if ui.button("Play as White").clicked() {
                        self.state.play_as(Stone::White);
                        ui.close_menu();
                    }
                });

                ui.menu_button("Difficulty", |ui| {
                    let mut selected = self.state.game.difficulty();
                    for difficulty in Difficulty::ALL {
                        ui.radio_value(&mut selected, difficulty, difficulty.name());
                    }
                    if selected != self.state.game.difficulty() {
                        self.state.set_difficulty(selected);
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let game = &self.state.game;
                    ui.label(format!("You: {}  |  AI: {}", game.player_color(), game.difficulty()));
                });
            });
        });
    }

    /// Render the side panel with game info and statistics
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.add_space(12.0);

                    self.render_title_card(ui);
                    ui.add_space(12.0);

                    self.render_turn_card(ui);
                    ui.add_space(10.0);

                    self.render_difficulty_card(ui);
                    ui.add_space(10.0);

                    self.render_stats_card(ui);
                    ui.add_space(10.0);

                    self.render_actions_card(ui);
                    ui.add_space(10.0);

                    self.render_ai_card(ui);

                    if let Some(ending) = self.ending() {
                        ui.add_space(10.0);
                        self.render_game_over_card(ui, ending);
                    }

                    if let Some(msg) = self.state.message.clone() {
                        ui.add_space(10.0);
                        Self::render_message_card(ui, &msg);
                    }
                });
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn card_heading(ui: &mut egui::Ui, text: &str) {
        ui.label(RichText::new(text).size(10.0).color(TEXT_MUTED));
        ui.add_space(6.0);
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(Color32::from_rgb(180, 180, 185)));
            ui.add_space(4.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Five in a row on 15x15").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Whose turn it is, and what the human should be doing
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        let game = &self.state.game;
        Self::card_frame().show(ui, |ui| {
            let is_black = game.current_player() == Stone::Black;
            let (stone_char, accent, glyph) = if is_black {
                ("●", Color32::from_rgb(70, 70, 75), TEXT_PRIMARY)
            } else {
                ("○", Color32::from_rgb(220, 220, 225), Color32::from_rgb(30, 30, 35))
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    glyph,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    let label = game.current_player().name().to_uppercase();
                    ui.label(RichText::new(label).size(18.0).strong().color(TEXT_PRIMARY));

                    let (status, color) = if game.is_finished() {
                        ("Game over".to_string(), TEXT_SECONDARY)
                    } else if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                        (format!("AI thinking... {:.1}s", elapsed.as_secs_f32()), STATUS_WAIT)
                    } else if self.state.is_human_turn() {
                        ("Your turn".to_string(), STATUS_OK)
                    } else {
                        ("AI to move".to_string(), STATUS_WAIT)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });

            ui.add_space(6.0);
            ui.label(RichText::new(format!("Move #{}", game.move_count())).size(11.0).color(TEXT_SECONDARY));
        });
    }

    fn render_difficulty_card(&mut self, ui: &mut egui::Ui) {
        let current = self.state.game.difficulty();
        Self::card_frame().show(ui, |ui| {
            Self::card_heading(ui, "DIFFICULTY");

            ui.horizontal_wrapped(|ui| {
                for (difficulty, accent) in Difficulty::ALL.into_iter().zip(DIFFICULTY_ACCENTS) {
                    let text = RichText::new(difficulty.name()).size(12.0);
                    let text = if difficulty == current {
                        text.strong().color(accent)
                    } else {
                        text.color(TEXT_SECONDARY)
                    };
                    if ui.selectable_label(difficulty == current, text).clicked() {
                        self.state.set_difficulty(difficulty);
                    }
                }
            });

            ui.add_space(6.0);
            ui.label(RichText::new(self.state.game.difficulty().description()).size(11.0).color(TEXT_SECONDARY));
        });
    }

    fn render_stats_card(&self, ui: &mut egui::Ui) {
        let stats = self.state.game.stats();
        Self::card_frame().show(ui, |ui| {
            Self::card_heading(ui, "STATISTICS");

            egui::Grid::new("stats_grid").num_columns(2).spacing([24.0, 4.0]).show(ui, |ui| {
                let rows = [
                    ("Games", stats.total_games, TEXT_PRIMARY),
                    ("Wins", stats.wins, STATUS_OK),
                    ("Losses", stats.losses(), STATUS_LOSS),
                    ("Draws", stats.draws, TEXT_SECONDARY),
                ];
                for (name, value, color) in rows {
                    ui.label(RichText::new(name).size(11.0).color(TEXT_SECONDARY));
                    ui.label(RichText::new(value.to_string()).size(13.0).strong().color(color));
                    ui.end_row();
                }
            });

            ui.add_space(8.0);
            let rate = stats.win_rate();
            ui.add(
                egui::ProgressBar::new(rate as f32 / 100.0)
                    .desired_height(14.0)
                    .fill(STATUS_OK)
                    .text(RichText::new(format!("Win rate {rate}%")).size(10.0)),
            );
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            Self::card_heading(ui, "ACTIONS");

            ui.horizontal(|ui| {
                if ui.button(RichText::new("New Game").size(12.0)).clicked() {
                    self.state.reset();
                }
                let other = self.state.game.player_color().opponent();
                if ui.button(RichText::new(format!("Play as {other}")).size(12.0)).clicked() {
                    self.state.play_as(other);
                }
            });
        });
    }

    /// Last move the AI made and why
    fn render_ai_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                Self::card_heading(ui, "LAST AI MOVE");

                let Some(result) = &self.state.last_ai_result else {
                    ui.label(RichText::new("No AI move yet").size(10.0).color(TEXT_MUTED));
                    return;
                };

                ui.horizontal(|ui| {
                    ui.label(RichText::new(format!("→ {}", coordinate(result.best_move))).size(14.0).strong().color(WIN_HIGHLIGHT));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if let Some(time) = self.state.last_ai_time {
                            ui.label(RichText::new(format!("{:.2}s", time.as_secs_f32())).size(10.0).color(TEXT_SECONDARY));
                        }
                    });
                });
                ui.label(
                    RichText::new(format!("{:?} | score {} | {} cells", result.reason, result.score, result.candidates))
                        .size(10.0)
                        .color(TEXT_MUTED),
                );
            });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, ending: Ending) {
        let (headline, fill, accent) = match ending {
            Ending::Won => ("YOU WIN!", Color32::from_rgb(45, 80, 55), STATUS_OK),
            Ending::Lost => ("YOU LOSE", Color32::from_rgb(90, 40, 40), STATUS_LOSS),
            Ending::Draw => ("DRAW", Color32::from_rgb(60, 60, 70), TEXT_PRIMARY),
        };

        Frame::new()
            .fill(fill)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(6.0);
                    ui.label(RichText::new(headline).size(24.0).strong().color(accent));
                    ui.add_space(4.0);
                    let moves = self.state.game.move_count();
                    ui.label(RichText::new(format!("after {moves} moves")).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);

                    if ui.button(RichText::new("New Game").size(14.0).strong()).clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_AREA_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                let game = &self.state.game;
                let clicked = self.board_view.show(
                    ui,
                    game.board(),
                    game.current_player(),
                    game.last_move(),
                    game.winning_line(),
                    self.state.accepting_input(),
                );

                if let Some(pos) = clicked {
                    if let Err(msg) = self.state.try_place_stone(pos) {
                        self.state.message = Some(msg);
                    }
                }
            });
    }

    fn handle_input(&mut self, ctx: &Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.state.reset();
        }
    }
}

/// Board coordinate as shown on the labels, e.g. `H8` for the center
fn coordinate(pos: Pos) -> String {
    let col = (b'A' + pos.col) as char;
    let row = BOARD_SIZE - pos.row as usize;
    format!("{col}{row}")
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();
        self.state.start_ai_thinking();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
