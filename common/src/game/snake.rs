use std::collections::{HashSet, VecDeque};
use std::time::Duration;

use super::types::{DeathReason, Direction, Point};

#[derive(Clone, Debug)]
pub struct Snake {
    pub body: VecDeque<Point>,
    pub body_set: HashSet<Point>,
    pub direction: Direction,
    pub pending_direction: Option<Direction>,
    pub tick_interval: Duration,
    pub death_reason: Option<DeathReason>,
}

impl Snake {
    pub fn new(head: Point, direction: Direction, length: usize, tick_interval: Duration) -> Self {
        let (dx, dy) = direction.delta();

        let mut body = VecDeque::with_capacity(length);
        let mut body_set = HashSet::with_capacity(length);

        for i in 0..length {
            let segment = Point::new(
                (head.x as i32 - dx * i as i32) as usize,
                (head.y as i32 - dy * i as i32) as usize,
            );
            body.push_back(segment);
            body_set.insert(segment);
        }

        Self {
            body,
            body_set,
            direction,
            pending_direction: None,
            tick_interval,
            death_reason: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.death_reason.is_none()
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_builds_body_head_to_tail() {
        let snake = Snake::new(Point::new(2, 0), Direction::Right, 3, Duration::from_millis(200));

        let body: Vec<Point> = snake.body.iter().copied().collect();
        assert_eq!(
            body,
            vec![Point::new(2, 0), Point::new(1, 0), Point::new(0, 0)]
        );
        assert_eq!(snake.head(), Point::new(2, 0));
        assert_eq!(snake.tail(), Point::new(0, 0));
        assert_eq!(snake.body_set.len(), 3);
    }

    #[test]
    fn test_new_extends_opposite_heading() {
        let snake = Snake::new(Point::new(5, 5), Direction::Up, 3, Duration::from_millis(200));

        let body: Vec<Point> = snake.body.iter().copied().collect();
        assert_eq!(
            body,
            vec![Point::new(5, 5), Point::new(5, 6), Point::new(5, 7)]
        );
    }

    #[test]
    fn test_new_snake_is_alive() {
        let snake = Snake::new(Point::new(2, 0), Direction::Right, 3, Duration::from_millis(200));
        assert!(snake.is_alive());
        assert_eq!(snake.pending_direction, None);
    }
}
