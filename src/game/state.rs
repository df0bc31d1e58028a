use super::clock::{Countdown, GameClock};
use super::energy::{EnergyItem, ItemKind, POWER_UP_POINTS, PowerKind};
use super::rng::SessionRng;
use super::snake::Snake;
use super::spawn;
use super::types::{
    BOARD_HEIGHT, BOARD_WIDTH, Compass, DifficultyLevel, GRID_SIZE, GameMode, Point, SNAKE_SIZE,
};
use super::wall::{
    POWER_WALL_MAX_DELAY, POWER_WALL_MIN_DELAY, WALL_MAX_DELAY, WALL_MIN_DELAY, WallState,
};
use crate::maps::MapCatalog;
use crate::save::GameRecord;

pub const MAX_ENERGY: i32 = 1000;
pub const FULLY_MAXED_ENERGY: i32 = 1500;
pub const ENERGY_STEP: i32 = 5;
pub const DEFAULT_LEVEL_TIME: u32 = 30;

const OVERCHARGE_SPEED_DIVISOR: i32 = 5;
const POWER_UP_NOTICE_SECS: u32 = 5;

#[derive(Debug, PartialEq, Eq)]
pub enum CollisionError {
    SnakeBody,
    Wall,
}

impl std::fmt::Display for CollisionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollisionError::SnakeBody => write!(f, "Collided with Snake Body"),
            CollisionError::Wall => write!(f, "Collided with Wall"),
        }
    }
}

impl std::error::Error for CollisionError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverCause {
    EnergyDepleted,
    SnakeBody,
    Wall,
}

impl From<CollisionError> for GameOverCause {
    fn from(error: CollisionError) -> Self {
        match error {
            CollisionError::SnakeBody => GameOverCause::SnakeBody,
            CollisionError::Wall => GameOverCause::Wall,
        }
    }
}

impl std::fmt::Display for GameOverCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOverCause::EnergyDepleted => write!(f, "Ran out of energy"),
            GameOverCause::SnakeBody => write!(f, "Collided with Snake Body"),
            GameOverCause::Wall => write!(f, "Collided with Wall"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    ItemCollected(ItemKind),
    WallCollected,
}

#[derive(Clone, Debug)]
pub struct Notice {
    text: String,
    timer: Countdown,
}

impl Notice {
    fn new(text: String, seconds: u32) -> Self {
        Self {
            text,
            timer: Countdown::started(seconds),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn tick_second(&mut self) {
        self.timer.tick_second();
    }

    fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }
}

pub struct SnakeGame {
    player_name: String,
    difficulty: DifficultyLevel,
    mode: GameMode,
    direction: Compass,
    energy: i32,
    total_points: u32,
    game_level: u32,
    clock: GameClock,
    snake: Snake,
    items: Vec<EnergyItem>,
    walls: Vec<Point>,
    wall_state: WallState,
    maps: MapCatalog,
    notice: Option<Notice>,
    over_cause: Option<GameOverCause>,
}

impl SnakeGame {
    pub fn new(player_name: String, difficulty: DifficultyLevel, maps: MapCatalog) -> Self {
        let mut snake = Snake::new();
        snake.reset(board_center());
        Self {
            player_name,
            difficulty,
            mode: GameMode::Stopped,
            direction: Compass::North,
            energy: 0,
            total_points: 0,
            game_level: 1,
            clock: GameClock::new(),
            snake,
            items: Vec::new(),
            walls: Vec::new(),
            wall_state: WallState::new(),
            maps,
            notice: None,
            over_cause: None,
        }
    }

    pub fn set_game_mode(&mut self, mode: GameMode, rng: &mut SessionRng) {
        match mode {
            GameMode::Started => self.restart(rng),
            GameMode::Playing => {
                if self.mode == GameMode::Paused {
                    self.clock.resume();
                    self.mode = GameMode::Playing;
                }
            }
            GameMode::Paused => {
                if self.mode == GameMode::Playing {
                    self.clock.pause();
                    self.mode = GameMode::Paused;
                }
            }
            GameMode::Stopped => {
                if matches!(self.mode, GameMode::Playing | GameMode::Paused) {
                    self.mode = GameMode::Stopped;
                }
            }
            GameMode::GameOver => {
                if self.mode == GameMode::Playing {
                    self.clock.stop();
                    self.mode = GameMode::GameOver;
                }
            }
        }
    }

    fn restart(&mut self, rng: &mut SessionRng) {
        self.snake.reset(board_center());
        self.walls.clear();
        self.items.clear();
        self.direction = Compass::North;
        self.set_energy(MAX_ENERGY);
        self.total_points = 0;
        self.game_level = 1;
        self.notice = None;
        self.over_cause = None;
        self.set_random_map(rng);
        self.clock.restart();
        self.mode = GameMode::Playing;
    }

    pub fn set_direction(&mut self, direction: Compass) {
        if !direction.is_opposite(&self.direction) {
            self.direction = direction;
        }
    }

    // Each movement burns a fixed slice of energy; running dry is a loss
    // condition on its own.
    pub fn move_snake(&mut self) {
        if self.mode != GameMode::Playing {
            return;
        }
        self.set_energy(self.energy - ENERGY_STEP);
        self.snake.move_forward(self.direction);
        if self.energy == 0 {
            self.force_game_over(GameOverCause::EnergyDepleted);
        }
    }

    pub fn grow_snake(&mut self) {
        self.snake.grow(self.direction);
    }

    pub fn detect_snake_collision(&self) -> Result<(), CollisionError> {
        if self.mode != GameMode::Playing {
            return Ok(());
        }
        if self.snake.collides(self.snake.head(), SNAKE_SIZE, true) {
            return Err(CollisionError::SnakeBody);
        }
        Ok(())
    }

    pub fn process_items(&mut self, rng: &mut SessionRng) -> Vec<GameEvent> {
        if self.mode != GameMode::Playing {
            return Vec::new();
        }
        let snake = &self.snake;
        let mut collected = Vec::new();
        self.items.retain_mut(|item| {
            if item.has_expired() {
                return false;
            }
            if item.is_available() && snake.collides(item.pos(), GRID_SIZE, false) {
                collected.push((item.kind(), item.points()));
                return false;
            }
            true
        });

        let mut events = Vec::new();
        for (kind, points) in collected {
            self.add_points(points);
            match kind {
                ItemKind::Drink(drink) => {
                    self.add_energy(drink.caffeine());
                    self.grow_snake();
                }
                ItemKind::PowerUp(power) => self.apply_power_up(power, rng),
            }
            events.push(GameEvent::ItemCollected(kind));
        }
        events
    }

    pub fn process_walls(&mut self) -> Result<Vec<GameEvent>, CollisionError> {
        if self.mode != GameMode::Playing {
            return Ok(Vec::new());
        }
        let active = self.wall_state.is_active();
        let overcharged = self.energy > MAX_ENERGY;
        let mut events = Vec::new();
        let mut collided = false;

        let mut index = 0;
        while index < self.walls.len() {
            let wall = self.walls[index];
            if self.snake.collides(wall, GRID_SIZE, false) {
                if active {
                    collided = true;
                } else if overcharged {
                    // Overcharged snakes eat dormant walls for bonus points.
                    self.walls.remove(index);
                    self.total_points += POWER_UP_POINTS;
                    events.push(GameEvent::WallCollected);
                    continue;
                }
            }
            index += 1;
        }

        if collided {
            return Err(CollisionError::Wall);
        }
        Ok(events)
    }

    fn apply_power_up(&mut self, power: PowerKind, rng: &mut SessionRng) {
        match power {
            PowerKind::EnergyBoost => self.set_energy(FULLY_MAXED_ENERGY),
            PowerKind::WallsDeactivated => {
                self.wall_state
                    .deactivate_for(POWER_WALL_MIN_DELAY, POWER_WALL_MAX_DELAY, rng)
            }
            PowerKind::LevelUp => self.increment_level(),
            PowerKind::MapChange => self.set_random_map(rng),
            PowerKind::BonusPoints => {
                self.add_points(POWER_UP_POINTS * (1 + rng.random_range(0..5) as u32))
            }
            PowerKind::SnakeShrink => self.shrink_snake(rng),
        }
        self.add_energy(rng.random_range(0..(FULLY_MAXED_ENERGY / 2)));
        if !self.is_game_over() {
            self.set_notice(power.label().to_string(), POWER_UP_NOTICE_SECS);
        }
    }

    fn shrink_snake(&mut self, rng: &mut SessionRng) {
        if self.snake.len() < 2 {
            return;
        }
        let keep = rng.random_range(1..self.snake.len());
        self.snake.shrink_to(keep);
    }

    pub fn increment_level(&mut self) {
        self.game_level += 1;
    }

    pub fn next_level(&mut self, rng: &mut SessionRng) {
        self.increment_level();
        self.set_random_map(rng);
    }

    pub fn set_random_map(&mut self, rng: &mut SessionRng) {
        let Some(walls) = self.maps.random_map(rng) else {
            return;
        };
        self.walls = walls;
        if !self.walls.is_empty() {
            self.wall_state
                .deactivate_for(WALL_MIN_DELAY, WALL_MAX_DELAY, rng);
        }
    }

    pub fn spawn_items(&mut self, rng: &mut SessionRng) {
        spawn::spawn_batch(
            &mut self.items,
            &self.walls,
            self.game_level,
            BOARD_WIDTH,
            BOARD_HEIGHT,
            rng,
        );
    }

    // Driven once a second from the session clock; a paused or stopped clock
    // freezes every timed element at once.
    pub fn advance_clock_second(&mut self) {
        if !self.clock.is_ticking() {
            return;
        }
        self.clock.tick_second();
        for item in &mut self.items {
            item.tick_second();
        }
        self.wall_state.tick_second();
        if let Some(notice) = &mut self.notice {
            notice.tick_second();
        }
        if self.notice.as_ref().is_some_and(Notice::is_finished) {
            self.notice = None;
        }
    }

    pub fn add_points(&mut self, points: u32) {
        self.total_points += points;
    }

    pub fn add_energy(&mut self, energy: i32) {
        self.set_energy(self.energy + energy);
    }

    pub fn set_energy(&mut self, energy: i32) {
        self.energy = energy.clamp(0, FULLY_MAXED_ENERGY);
    }

    pub fn set_notice(&mut self, text: String, seconds: u32) {
        self.notice = Some(Notice::new(text, seconds));
    }

    pub fn force_game_over(&mut self, cause: GameOverCause) {
        if self.mode != GameMode::Playing {
            return;
        }
        self.over_cause = Some(cause);
        self.clock.stop();
        self.mode = GameMode::GameOver;
    }

    pub fn speed(&self) -> u64 {
        let base = self.difficulty.base_speed();
        let division = MAX_ENERGY / base;
        let scaled = if division > 0 {
            base - self.energy / division
        } else {
            0
        };
        let speed = (scaled + base) / self.game_level as i32;
        let speed = if self.energy > MAX_ENERGY {
            speed / OVERCHARGE_SPEED_DIVISOR
        } else {
            speed
        };
        speed.max(0) as u64
    }

    pub fn total_score(&self) -> u32 {
        let time_bonus = self.snake.len() as u32 * self.clock.seconds();
        ((self.total_points + time_bonus) * self.game_level) * (self.difficulty.ordinal() + 1)
    }

    pub fn level_time(&self) -> u32 {
        DEFAULT_LEVEL_TIME / (self.difficulty.ordinal() + 1)
    }

    pub fn record(&self) -> GameRecord {
        GameRecord {
            player: self.player_name.clone(),
            difficulty: self.difficulty,
            points: self.total_points,
            level: self.game_level,
            seconds: self.clock.seconds(),
            score: self.total_score(),
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(
            self.mode,
            GameMode::Started | GameMode::Playing | GameMode::Paused
        )
    }

    pub fn is_game_over(&self) -> bool {
        self.mode == GameMode::GameOver
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn direction(&self) -> Compass {
        self.direction
    }

    pub fn energy(&self) -> i32 {
        self.energy
    }

    pub fn total_points(&self) -> u32 {
        self.total_points
    }

    pub fn game_level(&self) -> u32 {
        self.game_level
    }

    pub fn seconds(&self) -> u32 {
        self.clock.seconds()
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn difficulty(&self) -> DifficultyLevel {
        self.difficulty
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn items(&self) -> &[EnergyItem] {
        &self.items
    }

    pub fn walls(&self) -> &[Point] {
        &self.walls
    }

    pub fn walls_active(&self) -> bool {
        self.wall_state.is_active()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn over_cause(&self) -> Option<GameOverCause> {
        self.over_cause
    }

    #[cfg(test)]
    pub fn set_walls(&mut self, walls: Vec<Point>) {
        self.walls = walls;
    }

    #[cfg(test)]
    pub fn set_items(&mut self, items: Vec<EnergyItem>) {
        self.items = items;
    }
}

fn board_center() -> Point {
    Point::new(BOARD_WIDTH / 2, BOARD_HEIGHT / 2)
}
