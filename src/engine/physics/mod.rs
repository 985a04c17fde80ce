// Tile-grid physics
//
// Gameplay code drives movement through the `KinematicBody` capability and
// never touches the collision internals. `TileBody` is the axis-aligned
// implementation used for the player against a `TileMap` level.

pub mod body;
pub mod tilemap;

pub use body::{BodyConfig, TileBody};
pub use tilemap::TileMap;

#[allow(unused_imports)]
pub use body::BodyConfigError;

/// Movable, collidable entity driven by a controller.
///
/// Screen coordinates: +y points down, so a jump is a negative vertical
/// velocity. Per frame the caller runs `update_physics`, then
/// `handle_tile_collision`, then `check_grounded`, in that order.
pub trait KinematicBody {
    /// Integrate gravity into the vertical velocity
    fn update_physics(&mut self, dt: f32);

    /// Move by the desired displacement, resolving against terrain.
    /// Vertical velocity is stopped on vertical impact.
    fn handle_tile_collision(&mut self, dx: f32, dy: f32);

    /// Re-evaluate the grounded flag from the post-collision position
    fn check_grounded(&mut self);

    /// Default jump impulse magnitude
    fn jump_strength(&self) -> f32;

    fn is_grounded(&self) -> bool;

    fn set_grounded(&mut self, grounded: bool);

    fn velocity_y(&self) -> f32;

    fn set_velocity_y(&mut self, velocity_y: f32);
}
