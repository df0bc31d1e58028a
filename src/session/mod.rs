pub mod snake_session;

use std::future::Future;

use crate::game::energy::ItemKind;
use crate::game::state::GameOverCause;
use crate::game::types::{Compass, GameMode, Point};
use crate::save::GameRecord;

pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: RenderSnapshot) -> impl Future<Output = ()> + Send;

    fn play_sound(&self, cue: SoundCue) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(&self, report: GameOverReport) -> impl Future<Output = ()> + Send;
}

#[derive(Debug, Clone)]
pub struct RenderSnapshot {
    pub mode: GameMode,
    pub direction: Compass,
    pub energy: i32,
    pub points: u32,
    pub level: u32,
    pub seconds: u32,
    pub snake: Vec<Point>,
    pub items: Vec<ItemView>,
    pub walls: Vec<Point>,
    pub walls_active: bool,
    pub notice: Option<String>,
    pub final_score: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemView {
    pub pos: Point,
    pub kind: ItemKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    ItemCollected,
    Collision,
}

#[derive(Debug, Clone)]
pub struct GameOverReport {
    pub record: GameRecord,
    pub cause: Option<GameOverCause>,
}
