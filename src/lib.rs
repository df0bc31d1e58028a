pub mod game;
pub mod logger;
pub mod maps;
pub mod save;
pub mod session;
pub mod settings;

pub use game::state::SnakeGame;
pub use game::types::{Compass, DifficultyLevel, GameMode, Point};
pub use maps::MapCatalog;
pub use save::GameRecord;
pub use session::snake_session::{
    SessionCommand, SnakeSessionState, create_session, handle_command, run_game_loop,
};
pub use session::{GameBroadcaster, GameOverReport, ItemView, RenderSnapshot, SoundCue};
pub use settings::GameSettings;
