use std::io;
use std::path::{Path, PathBuf};

use crate::game::rng::SessionRng;
use crate::game::types::{GRID_SIZE, Point};
use crate::{log, warn};

pub const MAP_FILE_EXTENSION: &str = "map";
pub const WALL_MARKER: char = 'X';

pub fn parse_walls(text: &str) -> Vec<Point> {
    let mut walls = Vec::new();
    for (row, line) in text.lines().enumerate() {
        for (col, cell) in line.chars().enumerate() {
            if cell == WALL_MARKER {
                walls.push(Point::new(col as i32 * GRID_SIZE, row as i32 * GRID_SIZE));
            }
        }
    }
    walls
}

pub fn load_walls(path: &Path) -> io::Result<Vec<Point>> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_walls(&text))
}

// Wall layouts are read once up front so map changes mid-game never touch
// the filesystem.
#[derive(Default)]
pub struct MapCatalog {
    maps: Vec<Vec<Point>>,
}

impl MapCatalog {
    pub fn scan(dir: &Path) -> Self {
        let mut paths: Vec<PathBuf> = match std::fs::read_dir(dir) {
            Ok(entries) => entries
                .flatten()
                .map(|entry| entry.path())
                .filter(|path| {
                    path.extension().and_then(|ext| ext.to_str()) == Some(MAP_FILE_EXTENSION)
                })
                .collect(),
            Err(e) => {
                warn!("Could not read maps directory {}: {}", dir.display(), e);
                return Self { maps: Vec::new() };
            }
        };
        paths.sort();

        let mut maps = Vec::new();
        for path in paths {
            match load_walls(&path) {
                Ok(walls) => maps.push(walls),
                Err(e) => warn!("Could not load map {}: {}", path.display(), e),
            }
        }
        log!("Loaded {} maps from {}", maps.len(), dir.display());
        Self { maps }
    }

    pub fn from_maps(maps: Vec<Vec<Point>>) -> Self {
        Self { maps }
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    pub fn random_map(&self, rng: &mut SessionRng) -> Option<Vec<Point>> {
        if self.maps.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.maps.len());
        Some(self.maps[index].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_walls_maps_markers_to_grid_positions() {
        let walls = parse_walls("X..\n.X.\n..X\n");
        assert_eq!(
            walls,
            vec![Point::new(0, 0), Point::new(24, 24), Point::new(48, 48)]
        );
    }

    #[test]
    fn test_parse_walls_ignores_other_characters() {
        let walls = parse_walls(".s.\no.X\n");
        assert_eq!(walls, vec![Point::new(48, 24)]);
    }

    #[test]
    fn test_parse_empty_text_has_no_walls() {
        assert!(parse_walls("").is_empty());
    }

    #[test]
    fn test_random_map_from_empty_catalog() {
        let mut rng = SessionRng::new(42);
        let catalog = MapCatalog::default();
        assert!(catalog.random_map(&mut rng).is_none());
    }

    #[test]
    fn test_random_map_covers_the_catalog() {
        let mut rng = SessionRng::new(42);
        let first = vec![Point::new(0, 0)];
        let second = vec![Point::new(24, 0)];
        let catalog = MapCatalog::from_maps(vec![first.clone(), second.clone()]);

        let mut seen_first = false;
        let mut seen_second = false;
        for _ in 0..50 {
            match catalog.random_map(&mut rng) {
                Some(map) if map == first => seen_first = true,
                Some(map) if map == second => seen_second = true,
                _ => panic!("catalog returned an unknown map"),
            }
        }
        assert!(seen_first && seen_second);
    }

    #[test]
    fn test_scan_missing_directory_degrades_to_empty() {
        let catalog = MapCatalog::scan(Path::new("no-such-maps-directory"));
        assert!(catalog.is_empty());
    }
}
