use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};

use crate::log;

use super::rng::SessionRng;
use super::settings::GameSettings;
use super::state::GameState;
use super::types::{Direction, GameStatus, GridSize, Point, SnakeId, TickEvent};

#[derive(Clone, Copy, Debug)]
pub enum GameCommand {
    Turn { snake: SnakeId, direction: Direction },
    Reset,
}

#[derive(Clone, Debug)]
pub struct SnakeView {
    pub id: SnakeId,
    pub segments: Vec<Point>,
    pub direction: Direction,
    pub tick_interval: Duration,
    pub alive: bool,
}

#[derive(Clone, Debug)]
pub struct GameSnapshot {
    pub tick: u64,
    pub grid: GridSize,
    pub snakes: [SnakeView; 2],
    pub food: Point,
    pub powerup: Option<Point>,
    pub status: GameStatus,
}

pub trait GameBroadcaster {
    async fn broadcast_state(&self, snapshot: GameSnapshot, events: Vec<TickEvent>);
}

pub struct GameSession {
    state: GameState,
    rng: SessionRng,
    tick: u64,
}

impl GameSession {
    pub fn new(settings: GameSettings, mut rng: SessionRng) -> Self {
        let state = GameState::new(settings, &mut rng);
        Self {
            state,
            rng,
            tick: 0,
        }
    }

    pub async fn run<B: GameBroadcaster>(
        mut self,
        mut commands: mpsc::UnboundedReceiver<GameCommand>,
        broadcaster: B,
    ) {
        broadcaster.broadcast_state(self.snapshot(), vec![]).await;

        // The deadline survives command handling; only a completed tick or a
        // reset re-arms it, so turn intents cannot postpone the next move.
        let mut next_tick = Instant::now() + self.current_interval().unwrap_or(Duration::ZERO);

        loop {
            match self.current_interval() {
                Some(_) => {
                    tokio::select! {
                        _ = sleep_until(next_tick) => {
                            let events = self.state.update(&mut self.rng);
                            self.tick += 1;
                            broadcaster.broadcast_state(self.snapshot(), events).await;
                            if let Some(interval) = self.current_interval() {
                                next_tick = Instant::now() + interval;
                            }
                        }
                        command = commands.recv() => {
                            let Some(command) = command else {
                                break;
                            };
                            if let Some(events) = self.handle_command(command) {
                                broadcaster.broadcast_state(self.snapshot(), events).await;
                            }
                        }
                    }
                }
                // Game over: the timer stays unarmed until a reset arrives.
                None => {
                    let Some(command) = commands.recv().await else {
                        break;
                    };
                    if let Some(events) = self.handle_command(command) {
                        if let Some(interval) = self.current_interval() {
                            next_tick = Instant::now() + interval;
                        }
                        broadcaster.broadcast_state(self.snapshot(), events).await;
                    }
                }
            }
        }
    }

    fn handle_command(&mut self, command: GameCommand) -> Option<Vec<TickEvent>> {
        match command {
            GameCommand::Turn { snake, direction } => {
                self.state.set_direction(snake, direction);
                None
            }
            GameCommand::Reset => {
                if self.state.status == GameStatus::Running {
                    return None;
                }
                self.state.reset(&mut self.rng);
                self.tick = 0;
                log!("Game reset");
                Some(vec![TickEvent::GameReset])
            }
        }
    }

    fn current_interval(&self) -> Option<Duration> {
        if self.state.status != GameStatus::Running {
            return None;
        }
        self.state
            .snakes
            .iter()
            .filter(|snake| snake.is_alive())
            .map(|snake| snake.tick_interval)
            .min()
    }

    fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            tick: self.tick,
            grid: self.state.settings.grid,
            snakes: SnakeId::ALL.map(|id| {
                let snake = self.state.snake(id);
                SnakeView {
                    id,
                    segments: snake.body.iter().copied().collect(),
                    direction: snake.direction,
                    tick_interval: snake.tick_interval,
                    alive: snake.is_alive(),
                }
            }),
            food: self.state.food,
            powerup: self.state.powerup,
            status: self.state.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_session() -> GameSession {
        GameSession::new(GameSettings::default(), SessionRng::new(42))
    }

    #[test]
    fn test_interval_follows_the_faster_snake() {
        let mut session = create_session();
        assert_eq!(session.current_interval(), Some(Duration::from_millis(200)));

        session.state.snakes[1].tick_interval = Duration::from_millis(150);
        assert_eq!(session.current_interval(), Some(Duration::from_millis(150)));
    }

    #[test]
    fn test_timer_unarmed_once_over() {
        let mut session = create_session();
        session.state.status = GameStatus::Over {
            winner: Some(SnakeId::Two),
        };
        assert_eq!(session.current_interval(), None);
    }

    #[test]
    fn test_reset_rejected_while_running() {
        let mut session = create_session();
        assert_eq!(session.handle_command(GameCommand::Reset), None);
        assert_eq!(session.state.status, GameStatus::Running);
    }

    #[test]
    fn test_reset_accepted_once_over() {
        let mut session = create_session();
        session.tick = 37;
        session.state.status = GameStatus::Over { winner: None };
        session.state.snakes[0].death_reason =
            Some(crate::game::DeathReason::SnakeCollision);

        let events = session.handle_command(GameCommand::Reset);

        assert_eq!(events, Some(vec![TickEvent::GameReset]));
        assert_eq!(session.tick, 0);
        assert_eq!(session.state.status, GameStatus::Running);
        assert!(session.state.snake(SnakeId::One).is_alive());
    }

    #[test]
    fn test_turn_command_queues_intent() {
        let mut session = create_session();
        let events = session.handle_command(GameCommand::Turn {
            snake: SnakeId::Two,
            direction: Direction::Up,
        });

        assert_eq!(events, None);
        assert_eq!(
            session.state.snake(SnakeId::Two).pending_direction,
            Some(Direction::Up)
        );
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let session = create_session();
        let snapshot = session.snapshot();

        assert_eq!(snapshot.tick, 0);
        assert_eq!(snapshot.grid.width, 20);
        assert_eq!(snapshot.snakes[0].segments.len(), 3);
        assert_eq!(snapshot.snakes[0].id, SnakeId::One);
        assert!(snapshot.snakes[1].alive);
        assert_eq!(snapshot.status, GameStatus::Running);
    }
}
