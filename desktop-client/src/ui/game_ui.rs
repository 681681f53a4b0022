use common::game::{GameCommand, GameSnapshot, GameStatus, SnakeId};
use eframe::egui;
use tokio::sync::mpsc;

pub const PIXELS_PER_CELL: f32 = 24.0;

const EMPTY_COLOR: egui::Color32 = egui::Color32::from_rgb(0xED, 0xF2, 0xF7);
const FOOD_COLOR: egui::Color32 = egui::Color32::from_rgb(0xE5, 0x3E, 0x3E);
const POWERUP_COLOR: egui::Color32 = egui::Color32::from_rgb(0x31, 0x82, 0xCE);
const SNAKE_ONE_COLOR: egui::Color32 = egui::Color32::from_rgb(0x38, 0xA1, 0x69);
const SNAKE_TWO_COLOR: egui::Color32 = egui::Color32::from_rgb(0xDD, 0x6B, 0x20);

pub struct GameUi;

impl GameUi {
    pub fn new() -> Self {
        Self
    }

    pub fn render_game(
        &mut self,
        ui: &mut egui::Ui,
        snapshot: &GameSnapshot,
        command_tx: &mpsc::UnboundedSender<GameCommand>,
    ) {
        ui.heading("Snake Duel");
        ui.separator();

        let canvas_width = snapshot.grid.width as f32 * PIXELS_PER_CELL;
        let canvas_height = snapshot.grid.height as f32 * PIXELS_PER_CELL;

        let (response, painter) = ui.allocate_painter(
            egui::Vec2::new(canvas_width, canvas_height),
            egui::Sense::hover(),
        );
        let rect = response.rect;

        painter.rect_filled(rect, 0.0, EMPTY_COLOR);

        // Paint order encodes the cell priority: food over power-up over snake.
        for view in &snapshot.snakes {
            let color = match view.id {
                SnakeId::One => SNAKE_ONE_COLOR,
                SnakeId::Two => SNAKE_TWO_COLOR,
            };
            for segment in &view.segments {
                painter.rect_filled(cell_rect(rect.min, segment.x, segment.y), 0.0, color);
            }
        }

        if let Some(powerup) = snapshot.powerup {
            painter.rect_filled(cell_rect(rect.min, powerup.x, powerup.y), 0.0, POWERUP_COLOR);
        }

        painter.rect_filled(
            cell_rect(rect.min, snapshot.food.x, snapshot.food.y),
            0.0,
            FOOD_COLOR,
        );

        if let GameStatus::Over { winner } = snapshot.status {
            ui.separator();
            ui.heading("Game Over!");
            match winner {
                Some(winner) => {
                    ui.label(format!("{} wins!", winner));
                }
                None => {
                    ui.label("Draw: both snakes died.");
                }
            }
            if ui.button("Play Again").clicked() {
                let _ = command_tx.send(GameCommand::Reset);
            }
        }
    }

    pub fn render_status(
        &mut self,
        ui: &mut egui::Ui,
        snapshot: &Option<GameSnapshot>,
        events: &[String],
    ) {
        ui.heading("Players");
        if let Some(snapshot) = snapshot {
            for view in &snapshot.snakes {
                let status = if view.alive { "🟢" } else { "💀" };
                let keys = match view.id {
                    SnakeId::One => "arrow keys",
                    SnakeId::Two => "W/A/S/D",
                };
                ui.label(format!(
                    "{} {} ({}): length {}, {} ms",
                    status,
                    view.id,
                    keys,
                    view.segments.len(),
                    view.tick_interval.as_millis()
                ));
            }
            ui.label(format!("Tick: {}", snapshot.tick));
        } else {
            ui.label("Waiting for the first tick...");
        }

        ui.separator();
        ui.heading("Events");
        egui::ScrollArea::vertical().show(ui, |ui| {
            for line in events.iter().rev() {
                ui.small(line.as_str());
            }
        });
    }
}

fn cell_rect(canvas_min: egui::Pos2, x: usize, y: usize) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(
            canvas_min.x + x as f32 * PIXELS_PER_CELL,
            canvas_min.y + y as f32 * PIXELS_PER_CELL,
        ),
        egui::vec2(PIXELS_PER_CELL, PIXELS_PER_CELL),
    )
}
