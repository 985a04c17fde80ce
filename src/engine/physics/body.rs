use super::tilemap::TileMap;
use super::KinematicBody;
use crate::core::math::jump_impulse;
use glam::Vec2;
use std::rc::Rc;
use thiserror::Error;

/// Keeps hitbox edges that sit exactly on a tile boundary out of that tile
const SKIN: f32 = 0.001;

/// How far below the feet the grounded probe looks
const GROUND_PROBE: f32 = 0.5;

/// Invalid body configuration
#[derive(Debug, Error, PartialEq)]
pub enum BodyConfigError {
    #[error("hitbox size must be positive, got {0}x{1}")]
    HitboxSize(f32, f32),

    #[error("gravity must be positive, got {0}")]
    Gravity(f32),

    #[error("max fall speed must be positive, got {0}")]
    MaxFallSpeed(f32),

    #[error("jump height must be at least one quarter tile")]
    JumpHeight,
}

/// Hitbox and motion parameters of a tile body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyConfig {
    /// Hitbox top-left relative to the body position (sprite origin)
    pub hitbox_offset: Vec2,
    /// Hitbox width and height
    pub hitbox_size: Vec2,
    /// Downward acceleration (units/s²)
    pub gravity: f32,
    /// Terminal falling speed (units/s)
    pub max_fall_speed: f32,
    /// Jump apex height in quarter tiles
    pub jump_height_quarters: u32,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            hitbox_offset: Vec2::new(8.0, 10.0),
            hitbox_size: Vec2::new(50.0, 86.0),
            gravity: 1800.0,
            max_fall_speed: 1200.0,
            jump_height_quarters: 14,
        }
    }
}

impl BodyConfig {
    pub fn validate(&self) -> Result<(), BodyConfigError> {
        if !(self.hitbox_size.x > 0.0 && self.hitbox_size.y > 0.0) {
            return Err(BodyConfigError::HitboxSize(
                self.hitbox_size.x,
                self.hitbox_size.y,
            ));
        }
        if !(self.gravity > 0.0) {
            return Err(BodyConfigError::Gravity(self.gravity));
        }
        if !(self.max_fall_speed > 0.0) {
            return Err(BodyConfigError::MaxFallSpeed(self.max_fall_speed));
        }
        if self.jump_height_quarters == 0 {
            return Err(BodyConfigError::JumpHeight);
        }
        Ok(())
    }
}

/// Axis-aligned body resolved against a tile grid.
///
/// Moves one axis at a time (x first) and snaps to the tile edge it hits.
/// Per-frame displacement is expected to stay below one tile.
#[derive(Debug, Clone)]
pub struct TileBody {
    position: Vec2,
    velocity_y: f32,
    grounded: bool,
    jump_strength: f32,
    config: BodyConfig,
    map: Rc<TileMap>,
}

impl TileBody {
    /// Create a body at `position` (sprite origin) in `map`
    pub fn new(map: Rc<TileMap>, config: BodyConfig, position: Vec2) -> Result<Self, BodyConfigError> {
        config.validate()?;
        let apex = config.jump_height_quarters as f32 * map.tile_size() / 4.0;
        Ok(Self {
            position,
            velocity_y: 0.0,
            grounded: false,
            jump_strength: jump_impulse(config.gravity, apex),
            config,
            map,
        })
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Hitbox corners (min, max) in world space
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let min = self.position + self.config.hitbox_offset;
        (min, min + self.config.hitbox_size)
    }

    #[allow(dead_code)]
    pub fn config(&self) -> &BodyConfig {
        &self.config
    }

    fn span(&self, min: f32, max: f32) -> (i64, i64) {
        (self.map.tile_index(min), self.map.tile_index(max - SKIN))
    }

    fn move_x(&mut self, dx: f32) {
        self.position.x += dx;
        let (min, max) = self.bounds();
        let rows = self.span(min.y, max.y);
        let ts = self.map.tile_size();

        if dx > 0.0 {
            let column = self.map.tile_index(max.x - SKIN);
            if self.map.any_solid((column, column), rows) {
                self.position.x =
                    column as f32 * ts - self.config.hitbox_offset.x - self.config.hitbox_size.x;
            }
        } else {
            let column = self.map.tile_index(min.x);
            if self.map.any_solid((column, column), rows) {
                self.position.x = (column + 1) as f32 * ts - self.config.hitbox_offset.x;
            }
        }
    }

    fn move_y(&mut self, dy: f32) {
        self.position.y += dy;
        let (min, max) = self.bounds();
        let columns = self.span(min.x, max.x);
        let ts = self.map.tile_size();

        if dy > 0.0 {
            let row = self.map.tile_index(max.y - SKIN);
            if self.map.any_solid(columns, (row, row)) {
                self.position.y =
                    row as f32 * ts - self.config.hitbox_offset.y - self.config.hitbox_size.y;
                self.velocity_y = self.velocity_y.min(0.0);
            }
        } else {
            let row = self.map.tile_index(min.y);
            if self.map.any_solid(columns, (row, row)) {
                // Head bump
                self.position.y = (row + 1) as f32 * ts - self.config.hitbox_offset.y;
                self.velocity_y = self.velocity_y.max(0.0);
            }
        }
    }
}

impl KinematicBody for TileBody {
    fn update_physics(&mut self, dt: f32) {
        self.velocity_y = (self.velocity_y + self.config.gravity * dt).min(self.config.max_fall_speed);
    }

    fn handle_tile_collision(&mut self, dx: f32, dy: f32) {
        if dx != 0.0 {
            self.move_x(dx);
        }
        if dy != 0.0 {
            self.move_y(dy);
        }
    }

    fn check_grounded(&mut self) {
        let (min, max) = self.bounds();
        let columns = self.span(min.x, max.x);
        let row = self.map.tile_index(max.y + GROUND_PROBE);

        self.grounded = self.velocity_y >= 0.0 && self.map.any_solid(columns, (row, row));
        if self.grounded {
            self.velocity_y = 0.0;
        }
    }

    fn jump_strength(&self) -> f32 {
        self.jump_strength
    }

    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn set_grounded(&mut self, grounded: bool) {
        self.grounded = grounded;
    }

    fn velocity_y(&self) -> f32 {
        self.velocity_y
    }

    fn set_velocity_y(&mut self, velocity_y: f32) {
        self.velocity_y = velocity_y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const DT: f32 = 1.0 / 60.0;

    // 10 x 6 tiles of 64 units, floor on the last row, a wall at column 7
    fn level() -> Rc<TileMap> {
        Rc::new(TileMap::from_rows(
            &[
                "..........",
                "..........",
                "..........",
                ".......#..",
                ".......#..",
                "##########",
            ],
            64.0,
        ))
    }

    fn body_at(x: f32, y: f32) -> TileBody {
        TileBody::new(level(), BodyConfig::default(), Vec2::new(x, y)).unwrap()
    }

    fn step(body: &mut TileBody, dx: f32) {
        body.update_physics(DT);
        let dy = body.velocity_y() * DT;
        body.handle_tile_collision(dx, dy);
        body.check_grounded();
    }

    #[test]
    fn test_jump_strength_from_quarters() {
        let body = body_at(64.0, 0.0);
        // apex = 14 * 64 / 4 = 224
        assert_relative_eq!(body.jump_strength(), (2.0f32 * 1800.0 * 224.0).sqrt());
    }

    #[test]
    fn test_falls_and_lands_on_floor() {
        let mut body = body_at(64.0, 100.0);
        for _ in 0..120 {
            step(&mut body, 0.0);
        }
        assert!(body.is_grounded());
        assert_eq!(body.velocity_y(), 0.0);
        // Feet rest on top of row 5
        assert_relative_eq!(body.bounds().1.y, 320.0);
    }

    #[test]
    fn test_stays_grounded_at_rest() {
        let mut body = body_at(64.0, 320.0 - 96.0);
        for _ in 0..10 {
            step(&mut body, 0.0);
            assert!(body.is_grounded());
        }
    }

    #[test]
    fn test_wall_blocks_horizontal_motion() {
        let mut body = body_at(300.0, 320.0 - 96.0);
        for _ in 0..60 {
            step(&mut body, 10.0);
        }
        // Wall starts at x = 448
        assert_relative_eq!(body.bounds().1.x, 448.0);
    }

    #[test]
    fn test_level_edge_blocks() {
        let mut body = body_at(20.0, 320.0 - 96.0);
        for _ in 0..10 {
            step(&mut body, -10.0);
        }
        assert_relative_eq!(body.bounds().0.x, 0.0);
    }

    #[test]
    fn test_jump_leaves_ground_and_returns() {
        let mut body = body_at(64.0, 320.0 - 96.0);
        step(&mut body, 0.0);
        assert!(body.is_grounded());

        body.set_velocity_y(-body.jump_strength());
        body.set_grounded(false);
        step(&mut body, 0.0);
        assert!(!body.is_grounded());
        assert!(body.velocity_y() < 0.0);

        let mut frames = 0;
        while !body.is_grounded() && frames < 200 {
            step(&mut body, 0.0);
            frames += 1;
        }
        assert!(body.is_grounded());
        assert_relative_eq!(body.bounds().1.y, 320.0);
    }

    #[test]
    fn test_fall_speed_is_capped() {
        let mut body = body_at(64.0, -5000.0);
        for _ in 0..200 {
            body.update_physics(DT);
        }
        assert_eq!(body.velocity_y(), 1200.0);
    }

    #[test]
    fn test_invalid_config() {
        let config = BodyConfig {
            gravity: 0.0,
            ..BodyConfig::default()
        };
        assert_eq!(config.validate(), Err(BodyConfigError::Gravity(0.0)));
        assert!(TileBody::new(level(), config, Vec2::ZERO).is_err());
    }
}
