use crate::log;

use super::rng::SessionRng;
use super::settings::GameSettings;
use super::snake::Snake;
use super::types::{DeathReason, Direction, GameStatus, GridSize, Point, SnakeId, TickEvent};

#[derive(Clone, Debug)]
pub struct GameState {
    pub snakes: [Snake; 2],
    pub food: Point,
    pub powerup: Option<Point>,
    pub status: GameStatus,
    pub settings: GameSettings,
}

impl GameState {
    pub fn new(settings: GameSettings, rng: &mut SessionRng) -> Self {
        let snakes = starting_snakes(&settings);
        let food = random_cell(settings.grid, rng);
        Self {
            snakes,
            food,
            powerup: None,
            status: GameStatus::Running,
            settings,
        }
    }

    pub fn reset(&mut self, rng: &mut SessionRng) {
        self.snakes = starting_snakes(&self.settings);
        self.food = random_cell(self.settings.grid, rng);
        self.powerup = None;
        self.status = GameStatus::Running;
    }

    pub fn snake(&self, id: SnakeId) -> &Snake {
        &self.snakes[id.index()]
    }

    pub fn set_direction(&mut self, id: SnakeId, direction: Direction) {
        if self.status != GameStatus::Running {
            return;
        }
        self.snakes[id.index()].pending_direction = Some(direction);
    }

    pub fn update(&mut self, rng: &mut SessionRng) -> Vec<TickEvent> {
        let mut events = Vec::new();
        if self.status != GameStatus::Running {
            return events;
        }

        self.try_spawn_powerup(rng, &mut events);

        for snake in &mut self.snakes {
            if let Some(direction) = snake.pending_direction.take() {
                snake.direction = direction;
            }
        }

        // Both snakes are resolved against the same pre-tick snapshot:
        // candidate heads and the obstacle set never see a mid-tick body.
        let candidates = [
            self.candidate_head(SnakeId::One),
            self.candidate_head(SnakeId::Two),
        ];
        let verdicts = SnakeId::ALL.map(|id| self.resolve_death(id, candidates[id.index()]));

        let food_before = self.food;
        let powerup_before = self.powerup;
        let speed_increase = self.settings.speed_increase;
        let min_tick_interval = self.settings.min_tick_interval;
        let mut food_eaten = false;

        for id in SnakeId::ALL {
            let idx = id.index();
            if verdicts[idx].is_some() {
                continue;
            }
            let Ok(next_head) = candidates[idx] else {
                continue;
            };

            let snake = &mut self.snakes[idx];
            snake.body.push_front(next_head);
            snake.body_set.insert(next_head);

            if next_head == food_before {
                food_eaten = true;
                events.push(TickEvent::FoodEaten {
                    snake: id,
                    at: next_head,
                    length: snake.body.len(),
                });
                log!(
                    "{} ate food at ({}, {}). Length: {}",
                    id,
                    next_head.x,
                    next_head.y,
                    snake.body.len()
                );
            } else {
                let tail = snake
                    .body
                    .pop_back()
                    .expect("Snake body should never be empty");
                snake.body_set.remove(&tail);
            }

            if powerup_before == Some(next_head) {
                self.powerup = None;
                let snake = &mut self.snakes[idx];
                snake.tick_interval = snake
                    .tick_interval
                    .saturating_sub(speed_increase)
                    .max(min_tick_interval);
                events.push(TickEvent::PowerupConsumed {
                    snake: id,
                    tick_interval: snake.tick_interval,
                });
                log!(
                    "{} picked up a power-up. Interval: {} ms",
                    id,
                    snake.tick_interval.as_millis()
                );
            }
        }

        if food_eaten {
            self.food = random_cell(self.settings.grid, rng);
            log!("Food spawned at ({}, {})", self.food.x, self.food.y);
        }

        if verdicts.iter().any(|v| v.is_some()) {
            for id in SnakeId::ALL {
                if let Some(reason) = verdicts[id.index()] {
                    self.snakes[id.index()].death_reason = Some(reason);
                    events.push(TickEvent::SnakeDied { snake: id, reason });
                    log!("{} died: {:?}", id, reason);
                }
            }

            let winner = match (verdicts[0], verdicts[1]) {
                (Some(_), None) => Some(SnakeId::Two),
                (None, Some(_)) => Some(SnakeId::One),
                _ => None,
            };
            self.status = GameStatus::Over { winner };
            events.push(TickEvent::GameOver { winner });
            match winner {
                Some(id) => log!("Game over, {} wins", id),
                None => log!("Game over, draw"),
            }
        }

        events
    }

    fn candidate_head(&self, id: SnakeId) -> Result<Point, DeathReason> {
        let snake = &self.snakes[id.index()];
        let head = snake.head();
        let grid = self.settings.grid;

        match snake.direction {
            Direction::Up => {
                if head.y == 0 {
                    return Err(DeathReason::WallCollision);
                }
                Ok(Point::new(head.x, head.y - 1))
            }
            Direction::Down => {
                if head.y >= grid.height - 1 {
                    return Err(DeathReason::WallCollision);
                }
                Ok(Point::new(head.x, head.y + 1))
            }
            Direction::Left => {
                if head.x == 0 {
                    return Err(DeathReason::WallCollision);
                }
                Ok(Point::new(head.x - 1, head.y))
            }
            Direction::Right => {
                if head.x >= grid.width - 1 {
                    return Err(DeathReason::WallCollision);
                }
                Ok(Point::new(head.x + 1, head.y))
            }
        }
    }

    fn resolve_death(
        &self,
        id: SnakeId,
        candidate: Result<Point, DeathReason>,
    ) -> Option<DeathReason> {
        let next_head = match candidate {
            Ok(point) => point,
            Err(reason) => return Some(reason),
        };

        // The whole pre-tick body is an obstacle, own tail cell included.
        if self.snakes[id.index()].body_set.contains(&next_head) {
            return Some(DeathReason::SelfCollision);
        }
        if self.snakes[id.other().index()].body_set.contains(&next_head) {
            return Some(DeathReason::SnakeCollision);
        }
        None
    }

    fn try_spawn_powerup(&mut self, rng: &mut SessionRng, events: &mut Vec<TickEvent>) {
        if self.powerup.is_some() {
            return;
        }
        if rng.random::<f32>() >= self.settings.powerup_spawn_probability {
            return;
        }

        // Uniform over the whole grid; overlap with bodies is allowed.
        let pos = random_cell(self.settings.grid, rng);
        self.powerup = Some(pos);
        events.push(TickEvent::PowerupSpawned { at: pos });
        log!("Power-up spawned at ({}, {})", pos.x, pos.y);
    }
}

fn starting_snakes(settings: &GameSettings) -> [Snake; 2] {
    let GridSize { width, height } = settings.grid;
    let length = settings.initial_snake_length;
    let interval = settings.initial_tick_interval;

    [
        Snake::new(Point::new(length - 1, 0), Direction::Right, length, interval),
        Snake::new(
            Point::new(width - length, height - 1),
            Direction::Left,
            length,
            interval,
        ),
    ]
}

fn random_cell(grid: GridSize, rng: &mut SessionRng) -> Point {
    Point::new(
        rng.random_range(0..grid.width),
        rng.random_range(0..grid.height),
    )
}
