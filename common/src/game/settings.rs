use std::time::Duration;

use super::types::GridSize;

#[derive(Clone, Debug)]
pub struct GameSettings {
    pub grid: GridSize,
    pub initial_snake_length: usize,
    pub initial_tick_interval: Duration,
    pub speed_increase: Duration,
    pub min_tick_interval: Duration,
    pub powerup_spawn_probability: f32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            grid: GridSize {
                width: 20,
                height: 20,
            },
            initial_snake_length: 3,
            initial_tick_interval: Duration::from_millis(200),
            speed_increase: Duration::from_millis(50),
            min_tick_interval: Duration::from_millis(50),
            powerup_spawn_probability: 0.02,
        }
    }
}
