use std::fmt;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    pub width: usize,
    pub height: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SnakeId {
    One,
    Two,
}

impl SnakeId {
    pub const ALL: [SnakeId; 2] = [SnakeId::One, SnakeId::Two];

    pub fn index(self) -> usize {
        match self {
            SnakeId::One => 0,
            SnakeId::Two => 1,
        }
    }

    pub fn other(self) -> SnakeId {
        match self {
            SnakeId::One => SnakeId::Two,
            SnakeId::Two => SnakeId::One,
        }
    }
}

impl fmt::Display for SnakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnakeId::One => write!(f, "Player 1"),
            SnakeId::Two => write!(f, "Player 2"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
    SnakeCollision,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Over { winner: Option<SnakeId> },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickEvent {
    PowerupSpawned { at: Point },
    FoodEaten { snake: SnakeId, at: Point, length: usize },
    PowerupConsumed { snake: SnakeId, tick_interval: Duration },
    SnakeDied { snake: SnakeId, reason: DeathReason },
    GameOver { winner: Option<SnakeId> },
    GameReset,
}
