use serde::{Deserialize, Serialize};

pub const BOARD_WIDTH: i32 = 480;
pub const BOARD_HEIGHT: i32 = 360;
pub const GRID_SIZE: i32 = 24;
pub const SNAKE_SIZE: i32 = GRID_SIZE / 2;
pub const INITIAL_LENGTH: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Compass {
    North,
    South,
    East,
    West,
}

impl Compass {
    pub fn bearing(&self) -> Point {
        match self {
            Compass::North => Point::new(0, -1),
            Compass::South => Point::new(0, 1),
            Compass::East => Point::new(1, 0),
            Compass::West => Point::new(-1, 0),
        }
    }

    pub fn is_opposite(&self, other: &Compass) -> bool {
        matches!(
            (self, other),
            (Compass::North, Compass::South)
                | (Compass::South, Compass::North)
                | (Compass::East, Compass::West)
                | (Compass::West, Compass::East)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    Started,
    Playing,
    Paused,
    Stopped,
    GameOver,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyLevel {
    #[default]
    Slug,
    Worm,
    Snake,
}

impl DifficultyLevel {
    pub fn ordinal(&self) -> u32 {
        match self {
            DifficultyLevel::Slug => 0,
            DifficultyLevel::Worm => 1,
            DifficultyLevel::Snake => 2,
        }
    }

    pub fn base_speed(&self) -> i32 {
        match self {
            DifficultyLevel::Slug => 250,
            DifficultyLevel::Worm => 200,
            DifficultyLevel::Snake => 125,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compass_is_opposite() {
        assert!(Compass::North.is_opposite(&Compass::South));
        assert!(Compass::South.is_opposite(&Compass::North));
        assert!(Compass::East.is_opposite(&Compass::West));
        assert!(Compass::West.is_opposite(&Compass::East));
        assert!(!Compass::North.is_opposite(&Compass::East));
        assert!(!Compass::North.is_opposite(&Compass::North));
    }

    #[test]
    fn test_bearings_are_unit_steps() {
        assert_eq!(Compass::North.bearing(), Point::new(0, -1));
        assert_eq!(Compass::South.bearing(), Point::new(0, 1));
        assert_eq!(Compass::East.bearing(), Point::new(1, 0));
        assert_eq!(Compass::West.bearing(), Point::new(-1, 0));
    }

    #[test]
    fn test_difficulty_base_speed() {
        assert_eq!(DifficultyLevel::Slug.base_speed(), 250);
        assert_eq!(DifficultyLevel::Worm.base_speed(), 200);
        assert_eq!(DifficultyLevel::Snake.base_speed(), 125);
    }
}
