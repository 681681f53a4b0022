use common::game::{Direction, GameCommand, SnakeId};
use eframe::egui;
use tokio::sync::mpsc;

use crate::state::SharedState;

use super::game_ui::GameUi;

pub struct SnakeDuelApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<GameCommand>,
    game_ui: GameUi,
}

impl SnakeDuelApp {
    pub fn new(shared_state: SharedState, command_tx: mpsc::UnboundedSender<GameCommand>) -> Self {
        Self {
            shared_state,
            command_tx,
            game_ui: GameUi::new(),
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        ctx.input(|i| {
            let player_one = if i.key_pressed(egui::Key::ArrowUp) {
                Some(Direction::Up)
            } else if i.key_pressed(egui::Key::ArrowDown) {
                Some(Direction::Down)
            } else if i.key_pressed(egui::Key::ArrowLeft) {
                Some(Direction::Left)
            } else if i.key_pressed(egui::Key::ArrowRight) {
                Some(Direction::Right)
            } else {
                None
            };

            if let Some(direction) = player_one {
                let _ = self.command_tx.send(GameCommand::Turn {
                    snake: SnakeId::One,
                    direction,
                });
            }

            let player_two = if i.key_pressed(egui::Key::W) {
                Some(Direction::Up)
            } else if i.key_pressed(egui::Key::S) {
                Some(Direction::Down)
            } else if i.key_pressed(egui::Key::A) {
                Some(Direction::Left)
            } else if i.key_pressed(egui::Key::D) {
                Some(Direction::Right)
            } else {
                None
            };

            if let Some(direction) = player_two {
                let _ = self.command_tx.send(GameCommand::Turn {
                    snake: SnakeId::Two,
                    direction,
                });
            }
        });
    }
}

impl eframe::App for SnakeDuelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        let snapshot = self.shared_state.snapshot();
        let events = self.shared_state.events();

        egui::SidePanel::right("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.game_ui.render_status(ui, &snapshot, &events);
            });

        egui::CentralPanel::default().show(ctx, |ui| match &snapshot {
            Some(snapshot) => {
                self.game_ui.render_game(ui, snapshot, &self.command_tx);
            }
            None => {
                ui.heading("Starting...");
                ui.spinner();
            }
        });

        ctx.request_repaint();
    }
}
