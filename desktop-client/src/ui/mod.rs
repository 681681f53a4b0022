mod app;
mod game_ui;

pub use app::SnakeDuelApp;
pub use game_ui::PIXELS_PER_CELL;
