use std::time::Duration;

use common::config::{ConfigManager, Validate};
use common::game::{GameSettings, GridSize};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "snake_duel_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ConfigManager<Config> {
    ConfigManager::from_yaml_file(&get_config_path())
}

pub fn config_manager_for(file_path: &str) -> ConfigManager<Config> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub field_width: u32,
    pub field_height: u32,
    pub initial_snake_length: u32,
    pub initial_tick_interval_ms: u32,
    pub speed_increase_ms: u32,
    pub min_tick_interval_ms: u32,
    pub powerup_spawn_probability: f32,
}

impl Config {
    pub fn to_game_settings(&self) -> GameSettings {
        GameSettings {
            grid: GridSize {
                width: self.field_width as usize,
                height: self.field_height as usize,
            },
            initial_snake_length: self.initial_snake_length as usize,
            initial_tick_interval: Duration::from_millis(self.initial_tick_interval_ms as u64),
            speed_increase: Duration::from_millis(self.speed_increase_ms as u64),
            min_tick_interval: Duration::from_millis(self.min_tick_interval_ms as u64),
            powerup_spawn_probability: self.powerup_spawn_probability,
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.field_width < 10 || self.field_width > 100 {
            return Err("field_width must be between 10 and 100".to_string());
        }
        if self.field_height < 10 || self.field_height > 100 {
            return Err("field_height must be between 10 and 100".to_string());
        }
        if self.initial_snake_length < 2 {
            return Err("initial_snake_length must be at least 2".to_string());
        }
        if self.initial_snake_length > self.field_width / 2 {
            return Err("initial_snake_length must not exceed half the field width".to_string());
        }
        if self.initial_tick_interval_ms < 50 || self.initial_tick_interval_ms > 5000 {
            return Err("initial_tick_interval_ms must be between 50 and 5000".to_string());
        }
        if self.speed_increase_ms < 1 || self.speed_increase_ms > 1000 {
            return Err("speed_increase_ms must be between 1 and 1000".to_string());
        }
        if self.min_tick_interval_ms < 50 || self.min_tick_interval_ms > self.initial_tick_interval_ms
        {
            return Err(
                "min_tick_interval_ms must be between 50 and initial_tick_interval_ms".to_string(),
            );
        }
        if self.powerup_spawn_probability <= 0.0 || self.powerup_spawn_probability > 1.0 {
            return Err(
                "powerup_spawn_probability must be greater than 0 and at most 1".to_string(),
            );
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: 20,
            field_height: 20,
            initial_snake_length: 3,
            initial_tick_interval_ms: 200,
            speed_increase_ms: 50,
            min_tick_interval_ms: 50,
            powerup_spawn_probability: 0.02,
        }
    }
}
