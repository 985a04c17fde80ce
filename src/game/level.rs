// Built-in test level

use crate::engine::physics::TileMap;

/// Tile edge length in world units
pub const TILE_SIZE: f32 = 64.0;

const DEMO_ROWS: [&str; 11] = [
    "....................",
    "....................",
    "....................",
    "....................",
    "..............###...",
    "....................",
    "........####........",
    "....................",
    "...###..............",
    "....................",
    "####################",
];

/// Player spawn point (sprite origin) in the demo level
pub const DEMO_SPAWN: (f32, f32) = (2.0 * TILE_SIZE, 5.0 * TILE_SIZE);

/// Flat floor with a few floating platforms
pub fn demo_level() -> TileMap {
    TileMap::from_rows(&DEMO_ROWS, TILE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_level_has_floor() {
        let map = demo_level();
        assert_eq!(map.columns(), 20);
        assert!((0..20).all(|c| map.is_solid(c, 10)));
    }

    #[test]
    fn test_spawn_is_open() {
        let map = demo_level();
        let column = map.tile_index(DEMO_SPAWN.0);
        let row = map.tile_index(DEMO_SPAWN.1);
        assert!(!map.is_solid(column, row));
    }
}
