use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::interval;

use crate::game::rng::SessionRng;
use crate::game::spawn::SPAWN_PERIOD_SECS;
use crate::game::state::{GameEvent, GameOverCause, SnakeGame};
use crate::game::types::{Compass, GameMode};
use crate::log;
use crate::maps::MapCatalog;
use crate::session::{GameBroadcaster, GameOverReport, ItemView, RenderSnapshot, SoundCue};
use crate::settings::GameSettings;

const CLOCK_PERIOD: Duration = Duration::from_secs(1);
const COLLISION_NOTICE_SECS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    SetDirection(Compass),
    SetMode(GameMode),
}

#[derive(Clone)]
pub struct SnakeSessionState {
    pub game: Arc<Mutex<SnakeGame>>,
    pub rng: Arc<Mutex<SessionRng>>,
}

pub fn create_session(settings: &GameSettings, rng: SessionRng) -> SnakeSessionState {
    let maps = MapCatalog::scan(Path::new(&settings.maps_dir));
    let game = SnakeGame::new(settings.player_name.clone(), settings.difficulty, maps);
    log!("Created session for {} (seed {})", settings.player_name, rng.seed());

    SnakeSessionState {
        game: Arc::new(Mutex::new(game)),
        rng: Arc::new(Mutex::new(rng)),
    }
}

pub async fn run_game_loop<B: GameBroadcaster>(
    session_state: SnakeSessionState,
    broadcaster: B,
) -> GameOverReport {
    {
        let mut game = session_state.game.lock().await;
        let mut rng = session_state.rng.lock().await;
        game.set_game_mode(GameMode::Started, &mut rng);
        game.spawn_items(&mut rng);
        log!("Session started for {}", game.player_name());
    }

    start_clock(session_state.clone());

    let mut last_second = 0;
    while session_state.game.lock().await.is_running() {
        let speed = tick_once(&session_state, &broadcaster, &mut last_second).await;
        tokio::time::sleep(Duration::from_millis(speed)).await;

        if session_state.game.lock().await.is_game_over() {
            // One closing pass so the final board reaches the surface.
            tick_once(&session_state, &broadcaster, &mut last_second).await;
        }
    }

    let (report, game_over) = {
        let game = session_state.game.lock().await;
        let report = GameOverReport {
            record: game.record(),
            cause: game.over_cause(),
        };
        (report, game.is_game_over())
    };

    if game_over {
        broadcaster.broadcast_game_over(report.clone()).await;
    }
    match report.cause {
        Some(cause) => log!("Game over for {}: {}", report.record.player, cause),
        None => log!("Session stopped for {}", report.record.player),
    }

    report
}

pub async fn handle_command(session_state: &SnakeSessionState, command: SessionCommand) {
    match command {
        SessionCommand::SetDirection(direction) => {
            session_state.game.lock().await.set_direction(direction);
        }
        SessionCommand::SetMode(mode) => {
            let mut game = session_state.game.lock().await;
            let mut rng = session_state.rng.lock().await;
            game.set_game_mode(mode, &mut rng);
            if mode == GameMode::Started {
                // A restart clears the board; seed it like the initial start.
                game.spawn_items(&mut rng);
            }
        }
    }
}

async fn tick_once<B: GameBroadcaster>(
    session_state: &SnakeSessionState,
    broadcaster: &B,
    last_second: &mut u32,
) -> u64 {
    let (snapshot, cues, speed) = {
        let mut game = session_state.game.lock().await;
        let mut rng = session_state.rng.lock().await;
        let cues = run_tick(&mut game, &mut rng, last_second);
        (build_snapshot(&game), cues, game.speed())
    };

    dispatch(broadcaster, snapshot, cues);
    speed
}

fn run_tick(game: &mut SnakeGame, rng: &mut SessionRng, last_second: &mut u32) -> Vec<SoundCue> {
    let mut cues = Vec::new();
    if game.is_game_over() {
        return cues;
    }

    // Timed actions fire once per elapsed second even though the tick rate
    // varies with speed.
    let seconds = game.seconds();
    if seconds < *last_second {
        // The clock rewound: a restart landed between ticks.
        *last_second = 0;
    }
    if seconds > *last_second {
        *last_second = seconds;
        if seconds % game.level_time() == 0 {
            game.next_level(rng);
            game.spawn_items(rng);
            log!("{} reached level {}", game.player_name(), game.game_level());
        } else if seconds % SPAWN_PERIOD_SECS == 0 {
            game.spawn_items(rng);
        }
    }

    game.move_snake();

    for event in game.process_items(rng) {
        if let GameEvent::ItemCollected(kind) = event {
            log!("{} collected {:?}", game.player_name(), kind);
            cues.push(SoundCue::ItemCollected);
        }
    }

    let collision = match game.process_walls() {
        Ok(_) => game.detect_snake_collision().err(),
        Err(error) => Some(error),
    };

    if let Some(error) = collision {
        game.set_notice(error.to_string(), COLLISION_NOTICE_SECS);
        game.force_game_over(GameOverCause::from(error));
        cues.push(SoundCue::Collision);
    }

    cues
}

fn start_clock(session_state: SnakeSessionState) {
    tokio::spawn(async move {
        let mut clock = interval(CLOCK_PERIOD);
        // The first interval tick completes immediately.
        clock.tick().await;
        loop {
            clock.tick().await;
            let mut game = session_state.game.lock().await;
            if !game.is_running() {
                break;
            }
            game.advance_clock_second();
        }
    });
}

// Delivery runs outside the tick so a slow surface cannot stall the game.
fn dispatch<B: GameBroadcaster>(broadcaster: &B, snapshot: RenderSnapshot, cues: Vec<SoundCue>) {
    let renderer = broadcaster.clone();
    tokio::spawn(async move {
        renderer.broadcast_state(snapshot).await;
    });

    for cue in cues {
        let sounds = broadcaster.clone();
        tokio::spawn(async move {
            sounds.play_sound(cue).await;
        });
    }
}

fn build_snapshot(game: &SnakeGame) -> RenderSnapshot {
    let items = game
        .items()
        .iter()
        .filter(|item| item.is_visible())
        .map(|item| ItemView {
            pos: item.pos(),
            kind: item.kind(),
        })
        .collect();

    RenderSnapshot {
        mode: game.mode(),
        direction: game.direction(),
        energy: game.energy(),
        points: game.total_points(),
        level: game.game_level(),
        seconds: game.seconds(),
        snake: game.snake().segments().copied().collect(),
        items,
        walls: game.walls().to_vec(),
        walls_active: game.walls_active(),
        notice: game.notice().map(|notice| notice.text().to_string()),
        final_score: game.is_game_over().then(|| game.total_score()),
    }
}
