mod rng;
mod session;
mod settings;
mod snake;
mod state;
mod types;

pub use rng::SessionRng;
pub use session::{GameBroadcaster, GameCommand, GameSession, GameSnapshot, SnakeView};
pub use settings::GameSettings;
pub use snake::Snake;
pub use state::GameState;
pub use types::{DeathReason, Direction, GameStatus, GridSize, Point, SnakeId, TickEvent};
