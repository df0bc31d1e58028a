#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockStatus {
    Ticking,
    Paused,
    Stopped,
}

#[derive(Clone, Copy, Debug)]
pub struct GameClock {
    seconds: u32,
    status: ClockStatus,
}

impl GameClock {
    pub fn new() -> Self {
        Self {
            seconds: 0,
            status: ClockStatus::Stopped,
        }
    }

    pub fn restart(&mut self) {
        self.seconds = 0;
        self.status = ClockStatus::Ticking;
    }

    pub fn pause(&mut self) {
        if self.status == ClockStatus::Ticking {
            self.status = ClockStatus::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.status == ClockStatus::Paused {
            self.status = ClockStatus::Ticking;
        }
    }

    pub fn stop(&mut self) {
        self.status = ClockStatus::Stopped;
    }

    pub fn tick_second(&mut self) {
        if self.status == ClockStatus::Ticking {
            self.seconds += 1;
        }
    }

    pub fn is_ticking(&self) -> bool {
        self.status == ClockStatus::Ticking
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    #[cfg(test)]
    pub fn set_seconds(&mut self, seconds: u32) {
        self.seconds = seconds;
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Countdown {
    Idle { seconds: u32 },
    Running { remaining: u32 },
    Finished,
}

impl Countdown {
    pub fn idle(seconds: u32) -> Self {
        Countdown::Idle { seconds }
    }

    pub fn started(seconds: u32) -> Self {
        let mut countdown = Countdown::Idle { seconds };
        countdown.start();
        countdown
    }

    pub fn start(&mut self) {
        if let Countdown::Idle { seconds } = *self {
            *self = if seconds == 0 {
                Countdown::Finished
            } else {
                Countdown::Running { remaining: seconds }
            };
        }
    }

    pub fn tick_second(&mut self) {
        if let Countdown::Running { remaining } = *self {
            *self = if remaining <= 1 {
                Countdown::Finished
            } else {
                Countdown::Running {
                    remaining: remaining - 1,
                }
            };
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Countdown::Running { .. })
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Countdown::Finished)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_counts_only_while_ticking() {
        let mut clock = GameClock::new();
        clock.tick_second();
        assert_eq!(clock.seconds(), 0);

        clock.restart();
        clock.tick_second();
        clock.tick_second();
        assert_eq!(clock.seconds(), 2);

        clock.pause();
        clock.tick_second();
        assert_eq!(clock.seconds(), 2);

        clock.resume();
        clock.tick_second();
        assert_eq!(clock.seconds(), 3);

        clock.stop();
        clock.tick_second();
        assert_eq!(clock.seconds(), 3);
    }

    #[test]
    fn test_clock_restart_resets_seconds() {
        let mut clock = GameClock::new();
        clock.restart();
        clock.tick_second();
        clock.tick_second();
        clock.restart();
        assert_eq!(clock.seconds(), 0);
        assert!(clock.is_ticking());
    }

    #[test]
    fn test_clock_resume_requires_pause() {
        let mut clock = GameClock::new();
        clock.resume();
        assert!(!clock.is_ticking());
    }

    #[test]
    fn test_countdown_idle_does_not_tick() {
        let mut countdown = Countdown::idle(3);
        countdown.tick_second();
        countdown.tick_second();
        assert_eq!(countdown, Countdown::idle(3));
        assert!(!countdown.is_finished());
    }

    #[test]
    fn test_countdown_runs_to_finished() {
        let mut countdown = Countdown::started(3);
        assert!(countdown.is_running());
        countdown.tick_second();
        countdown.tick_second();
        assert!(!countdown.is_finished());
        countdown.tick_second();
        assert!(countdown.is_finished());
    }

    #[test]
    fn test_countdown_start_is_idempotent() {
        let mut countdown = Countdown::started(5);
        countdown.tick_second();
        countdown.start();
        assert_eq!(countdown, Countdown::Running { remaining: 4 });

        let mut finished = Countdown::started(1);
        finished.tick_second();
        finished.start();
        assert!(finished.is_finished());
    }

    #[test]
    fn test_countdown_zero_seconds_finishes_immediately() {
        let countdown = Countdown::started(0);
        assert!(countdown.is_finished());
    }
}
