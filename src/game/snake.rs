use std::collections::VecDeque;

use super::grid;
use super::types::{BOARD_HEIGHT, BOARD_WIDTH, Compass, INITIAL_LENGTH, Point, SNAKE_SIZE};

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
}

impl Snake {
    pub fn new() -> Self {
        Self {
            body: VecDeque::new(),
        }
    }

    pub fn reset(&mut self, head: Point) {
        self.body.clear();
        self.body.push_front(head);
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }

    pub fn move_forward(&mut self, direction: Compass) {
        self.grow(direction);
        if self.body.len() > INITIAL_LENGTH {
            self.body.pop_back();
        }
    }

    pub fn grow(&mut self, direction: Compass) {
        let next = grid::advance(self.head(), direction.bearing(), BOARD_WIDTH, BOARD_HEIGHT);
        self.body.push_front(next);
    }

    pub fn shrink_to(&mut self, index: usize) {
        // Index 0 is the head; it must survive every shrink.
        if index >= 1 {
            self.body.truncate(index);
        }
    }

    pub fn collides(&self, target: Point, size: i32, exclude_head: bool) -> bool {
        let skip = usize::from(exclude_head);
        self.body
            .iter()
            .skip(skip)
            .any(|segment| grid::rects_intersect(target, size, *segment, SNAKE_SIZE))
    }

    #[cfg(test)]
    pub fn set_body(&mut self, segments: Vec<Point>) {
        self.body = segments.into();
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_snake() -> Snake {
        let mut snake = Snake::new();
        snake.reset(Point::new(240, 180));
        snake
    }

    #[test]
    fn test_move_settles_at_initial_length() {
        // A new session starts from a single segment; one growth plus three
        // plain moves leaves the body at the initial length.
        let mut snake = fresh_snake();
        snake.grow(Compass::North);
        snake.move_forward(Compass::North);
        snake.move_forward(Compass::North);
        snake.move_forward(Compass::North);
        assert_eq!(snake.len(), INITIAL_LENGTH);

        snake.move_forward(Compass::North);
        assert_eq!(snake.len(), INITIAL_LENGTH);
    }

    #[test]
    fn test_grow_at_steady_state_is_permanent() {
        let mut snake = fresh_snake();
        for _ in 0..4 {
            snake.move_forward(Compass::North);
        }
        assert_eq!(snake.len(), INITIAL_LENGTH);

        snake.grow(Compass::North);
        assert_eq!(snake.len(), INITIAL_LENGTH + 1);
        for _ in 0..3 {
            snake.move_forward(Compass::North);
        }
        assert_eq!(snake.len(), INITIAL_LENGTH + 1);
    }

    #[test]
    fn test_move_prepends_head() {
        let mut snake = fresh_snake();
        snake.move_forward(Compass::East);
        assert_eq!(snake.head(), Point::new(252, 180));
        snake.move_forward(Compass::South);
        assert_eq!(snake.head(), Point::new(252, 192));
    }

    #[test]
    fn test_move_wraps_around_board() {
        let mut snake = Snake::new();
        snake.reset(Point::new(0, 180));
        snake.move_forward(Compass::West);
        assert_eq!(snake.head(), Point::new(468, 180));
    }

    #[test]
    fn test_shrink_keeps_head() {
        let mut snake = fresh_snake();
        for _ in 0..5 {
            snake.grow(Compass::North);
        }
        let head = snake.head();
        snake.shrink_to(1);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), head);
    }

    #[test]
    fn test_shrink_truncates_from_index() {
        let mut snake = fresh_snake();
        for _ in 0..5 {
            snake.grow(Compass::North);
        }
        snake.shrink_to(3);
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn test_collides_with_body_segment() {
        let mut snake = fresh_snake();
        snake.move_forward(Compass::North);
        snake.move_forward(Compass::North);
        assert!(snake.collides(Point::new(240, 180), SNAKE_SIZE, false));
        assert!(!snake.collides(Point::new(0, 0), SNAKE_SIZE, false));
    }

    #[test]
    fn test_collides_exclude_head_skips_first_segment() {
        let mut snake = fresh_snake();
        snake.move_forward(Compass::North);
        let head = snake.head();
        assert!(snake.collides(head, SNAKE_SIZE, false));
        assert!(!snake.collides(head, SNAKE_SIZE, true));
    }

    #[test]
    fn test_adjacent_segments_do_not_self_collide() {
        let mut snake = fresh_snake();
        for _ in 0..4 {
            snake.move_forward(Compass::East);
        }
        assert!(!snake.collides(snake.head(), SNAKE_SIZE, true));
    }
}
