use chrono::Local;
use common::game::{DeathReason, GameBroadcaster, GameSnapshot, TickEvent};

use crate::state::SharedState;

#[derive(Clone)]
pub struct UiBroadcaster {
    shared_state: SharedState,
}

impl UiBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl GameBroadcaster for UiBroadcaster {
    async fn broadcast_state(&self, snapshot: GameSnapshot, events: Vec<TickEvent>) {
        for event in &events {
            let timestamp = Local::now().format("%H:%M:%S");
            self.shared_state
                .push_event(format!("[{}] {}", timestamp, describe_event(event)));
        }
        self.shared_state.set_snapshot(snapshot);
    }
}

fn describe_event(event: &TickEvent) -> String {
    match event {
        TickEvent::PowerupSpawned { at } => {
            format!("A power-up appeared at ({}, {})", at.x, at.y)
        }
        TickEvent::FoodEaten { snake, length, .. } => {
            format!("{} ate food, length {}", snake, length)
        }
        TickEvent::PowerupConsumed {
            snake,
            tick_interval,
        } => format!(
            "{} sped up to {} ms per move",
            snake,
            tick_interval.as_millis()
        ),
        TickEvent::SnakeDied { snake, reason } => {
            let cause = match reason {
                DeathReason::WallCollision => "hit the wall",
                DeathReason::SelfCollision => "ran into itself",
                DeathReason::SnakeCollision => "crashed into the other snake",
            };
            format!("{} {}", snake, cause)
        }
        TickEvent::GameOver { winner } => match winner {
            Some(winner) => format!("Game over: {} wins!", winner),
            None => "Game over: draw".to_string(),
        },
        TickEvent::GameReset => "New game started".to_string(),
    }
}
