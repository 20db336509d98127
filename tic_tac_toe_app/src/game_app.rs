use crate::game::{GameController, MoveResult, Player};
use crate::storage::KeyValueStore;

use eframe::egui;
use tracing::debug;

const CELL_SIZE: f32 = 100.0;
const X_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 99, 71);
const O_COLOR: egui::Color32 = egui::Color32::from_rgb(34, 139, 34);
const LINE_FILL: egui::Color32 = egui::Color32::from_rgb(255, 215, 0);

/// Input collected during a frame, applied once drawing is finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Play(usize),
    Undo,
    Reset,
}

pub struct GameApp {
    controller: GameController<Box<dyn KeyValueStore>>,
}

impl GameApp {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self {
            controller: GameController::new(store),
        }
    }

    pub fn controller(&self) -> &GameController<Box<dyn KeyValueStore>> {
        &self.controller
    }

    pub fn handle(&mut self, action: UiAction) {
        debug!("UI action: {:?}", action);
        match action {
            UiAction::Play(cell) => {
                if let MoveResult::Rejected(reason) = self.controller.apply_move(cell) {
                    debug!("Ignored click on cell {}: {:?}", cell, reason);
                }
            }
            UiAction::Undo => {
                self.controller.undo();
            }
            UiAction::Reset => self.controller.reset(),
        }
    }

    fn keyboard_actions(ctx: &egui::Context) -> Vec<UiAction> {
        const CELL_KEYS: [egui::Key; 9] = [
            egui::Key::Num1,
            egui::Key::Num2,
            egui::Key::Num3,
            egui::Key::Num4,
            egui::Key::Num5,
            egui::Key::Num6,
            egui::Key::Num7,
            egui::Key::Num8,
            egui::Key::Num9,
        ];

        ctx.input(|input| {
            let mut actions: Vec<UiAction> = CELL_KEYS
                .iter()
                .enumerate()
                .filter(|(_, key)| input.key_pressed(**key))
                .map(|(cell, _)| UiAction::Play(cell))
                .collect();

            if input.key_pressed(egui::Key::U)
                || (input.modifiers.command && input.key_pressed(egui::Key::Z))
            {
                actions.push(UiAction::Undo);
            }
            if input.key_pressed(egui::Key::R) {
                actions.push(UiAction::Reset);
            }
            actions
        })
    }

    fn handle_game_ui(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        ui.vertical_centered(|ui| {
            ui.group(|ui| {
                ui.set_width(400.0);

                ui.add_space(10.0);
                self.display_game_status(ui);
                ui.add_space(10.0);

                self.render_board(ui, actions);

                ui.add_space(15.0);
                self.render_controls(ui, actions);
                ui.add_space(10.0);
            });
        });
    }

    fn render_board(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        let board = self.controller.board();
        let winning_line = self.controller.winning_line();
        let decided = self.controller.is_decided();

        for row in 0..3 {
            ui.horizontal(|ui| {
                ui.add_space(40.0);
                for col in 0..3 {
                    let cell = row * 3 + col;
                    let mark = board.get(cell);
                    let can_move = !decided && mark.is_none();

                    let text = match mark {
                        Some(Player::X) => egui::RichText::new("X").size(50.0).color(X_COLOR),
                        Some(Player::O) => egui::RichText::new("O").size(50.0).color(O_COLOR),
                        None => egui::RichText::new(" ").size(50.0),
                    };
                    let mut button =
                        egui::Button::new(text).min_size(egui::vec2(CELL_SIZE, CELL_SIZE));
                    if winning_line.is_some_and(|line| line.contains(&cell)) {
                        button = button.fill(LINE_FILL);
                    }

                    if ui.add_enabled(can_move, button).clicked() {
                        actions.push(UiAction::Play(cell));
                    }
                }
            });
        }
    }

    fn render_controls(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        ui.horizontal(|ui| {
            ui.add_space(110.0);

            if ui
                .add_enabled(
                    self.controller.can_undo(),
                    egui::Button::new("↩ Undo").min_size(egui::vec2(80.0, 30.0)),
                )
                .clicked()
            {
                actions.push(UiAction::Undo);
            }

            let reset_label = if self.controller.is_decided() {
                egui::RichText::new("🔄 Play Again").color(egui::Color32::from_rgb(240, 148, 0))
            } else {
                egui::RichText::new("🔄 Reset")
            };
            if ui
                .add(egui::Button::new(reset_label).min_size(egui::vec2(100.0, 30.0)))
                .clicked()
            {
                actions.push(UiAction::Reset);
            }
        });
    }

    fn display_game_status(&self, ui: &mut egui::Ui) {
        let scores = self.controller.scores();
        let score_text = format!("X {} : {} O   (draws {})", scores.x, scores.o, scores.draws);

        ui.label(
            egui::RichText::new(score_text)
                .size(24.0)
                .color(egui::Color32::from_rgb(0, 191, 255)),
        );

        ui.add_space(10.0);

        let (status, color) = if self.controller.is_decided() {
            (
                format!("🏆 {}", self.controller.status_text()),
                egui::Color32::from_rgb(255, 0, 0),
            )
        } else {
            (
                format!("🕐 {}", self.controller.status_text()),
                egui::Color32::from_rgb(0, 255, 0),
            )
        };

        ui.label(egui::RichText::new(status).size(30.0).color(color));
    }
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Self::keyboard_actions(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.handle_game_ui(ui, &mut actions);
        });

        for action in actions {
            self.handle(action);
        }
    }
}
