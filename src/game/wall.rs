use super::clock::Countdown;
use super::rng::SessionRng;

pub const WALL_MIN_DELAY: u32 = 2;
pub const WALL_MAX_DELAY: u32 = 5;
pub const POWER_WALL_MIN_DELAY: u32 = 10;
pub const POWER_WALL_MAX_DELAY: u32 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WallStatus {
    Active,
    NotActive,
}

// All wall tiles on the board share one activation state; only the
// reactivation countdown keeps them harmless for a while.
#[derive(Clone, Debug)]
pub struct WallState {
    status: WallStatus,
    reactivation: Countdown,
}

impl WallState {
    pub fn new() -> Self {
        Self {
            status: WallStatus::Active,
            reactivation: Countdown::idle(0),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == WallStatus::Active
    }

    pub fn deactivate_for(&mut self, min: u32, max: u32, rng: &mut SessionRng) {
        self.status = WallStatus::NotActive;
        self.reactivation = Countdown::started(rng.random_range(min..=max));
    }

    pub fn tick_second(&mut self) {
        if self.status == WallStatus::Active {
            return;
        }
        self.reactivation.tick_second();
        if self.reactivation.is_finished() {
            self.status = WallStatus::Active;
        }
    }
}

impl Default for WallState {
    fn default() -> Self {
        Self::new()
    }
}
