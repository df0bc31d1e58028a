use super::energy::EnergyItem;
use super::rng::SessionRng;
use super::types::{GRID_SIZE, Point};

pub const SPAWN_PERIOD_SECS: u32 = 5;

const POWER_UP_ODDS: usize = 5;

pub fn spawn_batch(
    items: &mut Vec<EnergyItem>,
    walls: &[Point],
    level: u32,
    board_width: i32,
    board_height: i32,
    rng: &mut SessionRng,
) {
    let cols = (board_width / GRID_SIZE) as usize;
    let rows = (board_height / GRID_SIZE) as usize;
    let max_attempts = cols * rows;

    for _ in 0..(1 + level) {
        for _ in 0..max_attempts {
            let pos = random_cell(cols, rows, rng);
            if is_occupied(pos, items, walls) {
                continue;
            }
            items.push(random_item(pos, rng));
            break;
        }
    }
}

fn random_cell(cols: usize, rows: usize, rng: &mut SessionRng) -> Point {
    let x = rng.random_range(0..cols) as i32 * GRID_SIZE;
    let y = rng.random_range(0..rows) as i32 * GRID_SIZE;
    Point::new(x, y)
}

fn is_occupied(pos: Point, items: &[EnergyItem], walls: &[Point]) -> bool {
    items.iter().any(|item| item.pos() == pos) || walls.contains(&pos)
}

// Two independent draws from the same range: a 1-in-5 shot at a power-up.
fn random_item(pos: Point, rng: &mut SessionRng) -> EnergyItem {
    let first = rng.random_range(0..POWER_UP_ODDS);
    let second = rng.random_range(0..POWER_UP_ODDS);
    if first == second {
        EnergyItem::power_up(pos, rng)
    } else {
        EnergyItem::drink(pos, rng)
    }
}
