pub mod clock;
pub mod energy;
pub mod grid;
pub mod rng;
pub mod snake;
pub mod spawn;
pub mod state;
pub mod types;
pub mod wall;

pub use clock::{Countdown, GameClock};
pub use energy::{DrinkKind, EnergyItem, ItemKind, PowerKind};
pub use rng::SessionRng;
pub use snake::Snake;
pub use state::{CollisionError, GameEvent, GameOverCause, SnakeGame};
pub use types::{Compass, DifficultyLevel, GameMode, Point};
pub use wall::WallState;
