use super::clock::Countdown;
use super::rng::SessionRng;
use super::types::Point;

pub const POWER_UP_POINTS: u32 = 200;

const DRINK_CAFFEINE: [i32; 3] = [109, 120, 160];
const DRINK_POINTS: [u32; 3] = [50, 75, 100];

const DRINK_TIME_WINDOW: (u32, u32) = (5, 15);
const POWER_UP_TIME_WINDOW: (u32, u32) = (5, 20);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrinkKind {
    VDrink,
    RedBull,
    Mother,
}

impl DrinkKind {
    const ALL: [DrinkKind; 3] = [DrinkKind::VDrink, DrinkKind::RedBull, DrinkKind::Mother];

    fn pick(rng: &mut SessionRng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    fn ordinal(&self) -> usize {
        match self {
            DrinkKind::VDrink => 0,
            DrinkKind::RedBull => 1,
            DrinkKind::Mother => 2,
        }
    }

    pub fn caffeine(&self) -> i32 {
        DRINK_CAFFEINE[self.ordinal()]
    }

    pub fn points(&self) -> u32 {
        DRINK_POINTS[self.ordinal()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerKind {
    EnergyBoost,
    WallsDeactivated,
    LevelUp,
    MapChange,
    BonusPoints,
    SnakeShrink,
}

impl PowerKind {
    const ALL: [PowerKind; 6] = [
        PowerKind::EnergyBoost,
        PowerKind::WallsDeactivated,
        PowerKind::LevelUp,
        PowerKind::MapChange,
        PowerKind::BonusPoints,
        PowerKind::SnakeShrink,
    ];

    fn pick(rng: &mut SessionRng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn label(&self) -> &'static str {
        match self {
            PowerKind::EnergyBoost => "ENERGY BOOST",
            PowerKind::WallsDeactivated => "WALLS DEACTIVATED",
            PowerKind::LevelUp => "LEVEL UP",
            PowerKind::MapChange => "MAP CHANGED",
            PowerKind::BonusPoints => "BONUS POINTS",
            PowerKind::SnakeShrink => "SNAKE SHRUNK",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    Drink(DrinkKind),
    PowerUp(PowerKind),
}

#[derive(Clone, Debug)]
pub struct EnergyItem {
    pos: Point,
    kind: ItemKind,
    delay: Countdown,
    duration: Countdown,
}

impl EnergyItem {
    pub fn drink(pos: Point, rng: &mut SessionRng) -> Self {
        let kind = ItemKind::Drink(DrinkKind::pick(rng));
        Self::with_window(pos, kind, DRINK_TIME_WINDOW, rng)
    }

    pub fn power_up(pos: Point, rng: &mut SessionRng) -> Self {
        let kind = ItemKind::PowerUp(PowerKind::pick(rng));
        Self::with_window(pos, kind, POWER_UP_TIME_WINDOW, rng)
    }

    fn with_window(pos: Point, kind: ItemKind, (min, max): (u32, u32), rng: &mut SessionRng) -> Self {
        Self {
            pos,
            kind,
            delay: Countdown::started(rng.random_range(0..min)),
            duration: Countdown::idle(rng.random_range(min..=max)),
        }
    }

    pub fn pos(&self) -> Point {
        self.pos
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn points(&self) -> u32 {
        match self.kind {
            ItemKind::Drink(drink) => drink.points(),
            ItemKind::PowerUp(_) => POWER_UP_POINTS,
        }
    }

    // The duration only starts counting once the delay has elapsed and the
    // item has been checked, so an item never expires before it was shown.
    pub fn is_available(&mut self) -> bool {
        if self.has_expired() {
            return false;
        }
        if self.delay.is_finished() {
            self.duration.start();
            return true;
        }
        false
    }

    pub fn has_expired(&self) -> bool {
        self.duration.is_finished()
    }

    pub fn is_visible(&self) -> bool {
        self.delay.is_finished() && !self.has_expired()
    }

    pub fn tick_second(&mut self) {
        self.delay.tick_second();
        self.duration.tick_second();
    }

    #[cfg(test)]
    pub fn with_timing(pos: Point, kind: ItemKind, delay: u32, duration: u32) -> Self {
        Self {
            pos,
            kind,
            delay: Countdown::started(delay),
            duration: Countdown::idle(duration),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_item(delay: u32, duration: u32) -> EnergyItem {
        EnergyItem::with_timing(
            Point::new(24, 24),
            ItemKind::Drink(DrinkKind::VDrink),
            delay,
            duration,
        )
    }

    #[test]
    fn test_item_lifecycle_window() {
        // Delay 3, duration 10: hidden before second 3, available in [3, 13),
        // expired afterwards.
        let mut item = test_item(3, 10);

        for second in 0..20 {
            let available = item.is_available();
            let expired = item.has_expired();
            if second < 3 {
                assert!(!available, "second {}", second);
                assert!(!expired, "second {}", second);
            } else if second < 13 {
                assert!(available, "second {}", second);
            } else {
                assert!(!available, "second {}", second);
                assert!(expired, "second {}", second);
            }
            item.tick_second();
        }
    }

    #[test]
    fn test_duration_starts_lazily() {
        let mut item = test_item(2, 5);
        // Seconds pass without anyone checking availability.
        for _ in 0..10 {
            item.tick_second();
        }
        assert!(!item.has_expired());
        assert!(item.is_available());

        for _ in 0..5 {
            item.tick_second();
        }
        assert!(item.has_expired());
        assert!(!item.is_available());
    }

    #[test]
    fn test_zero_delay_is_available_immediately() {
        let mut item = test_item(0, 5);
        assert!(item.is_available());
        assert!(item.is_visible());
    }

    #[test]
    fn test_visibility_tracks_availability_without_starting_duration() {
        let item = test_item(2, 5);
        assert!(!item.is_visible());
    }

    #[test]
    fn test_drink_tables() {
        assert_eq!(DrinkKind::VDrink.caffeine(), 109);
        assert_eq!(DrinkKind::RedBull.caffeine(), 120);
        assert_eq!(DrinkKind::Mother.caffeine(), 160);
        assert_eq!(DrinkKind::VDrink.points(), 50);
        assert_eq!(DrinkKind::RedBull.points(), 75);
        assert_eq!(DrinkKind::Mother.points(), 100);
    }

    #[test]
    fn test_power_up_points_are_flat() {
        let item = EnergyItem::with_timing(
            Point::new(0, 0),
            ItemKind::PowerUp(PowerKind::EnergyBoost),
            0,
            5,
        );
        assert_eq!(item.points(), POWER_UP_POINTS);
    }

    #[test]
    fn test_spawned_items_land_in_their_windows() {
        let mut rng = SessionRng::new(42);
        for _ in 0..50 {
            let drink = EnergyItem::drink(Point::new(0, 0), &mut rng);
            assert!(matches!(drink.kind(), ItemKind::Drink(_)));
            let power = EnergyItem::power_up(Point::new(0, 0), &mut rng);
            assert!(matches!(power.kind(), ItemKind::PowerUp(_)));
        }
    }
}
