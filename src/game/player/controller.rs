// Player control state machine

use crate::engine::input::{Action, ActionState};
use crate::engine::physics::KinematicBody;
use log::{debug, info, trace};

use super::state::{Facing, MotionState, Pose};
use super::stats::PlayerStats;

/// Turns the per-frame action model into movement, jumps and a pose.
///
/// The controller owns intent, facing and jump charges. Position, vertical
/// velocity and the grounded flag belong to the body it drives, so any
/// [`KinematicBody`] can be controlled.
#[derive(Debug, Clone)]
pub struct PlayerController {
    stats: PlayerStats,
    state: MotionState,
    previous_state: MotionState,
    /// Horizontal intent in {-1, 0, 1}, recomputed every frame
    intent: i8,
    facing: Facing,
    jumps_remaining: u8,
    pose: Pose,
}

impl PlayerController {
    pub fn new(stats: PlayerStats) -> Self {
        info!(target: "player", "Player spawned (max jumps {}, speed {})", stats.max_jumps, stats.move_speed);
        Self {
            stats,
            state: MotionState::Grounded,
            previous_state: MotionState::Grounded,
            intent: 0,
            facing: Facing::default(),
            jumps_remaining: stats.max_jumps,
            pose: Pose::Idle,
        }
    }

    /// Run one frame and return the selected pose.
    ///
    /// Must run before the input frame is committed.
    pub fn update<B: KinematicBody>(&mut self, body: &mut B, input: &ActionState, dt: f32) -> Pose {
        let was_grounded = body.is_grounded();

        self.handle_input(body, input);

        body.update_physics(dt);
        let dx = f32::from(self.intent) * self.stats.move_speed * dt;
        let dy = body.velocity_y() * dt;
        body.handle_tile_collision(dx, dy);
        body.check_grounded();

        let grounded = body.is_grounded();
        if grounded && !was_grounded {
            self.jumps_remaining = self.stats.max_jumps;
            debug!(target: "player", "Landed, jumps reset to {}", self.jumps_remaining);
        } else if !grounded
            && was_grounded
            && self.stats.ledge_consumes_jump
            && self.jumps_remaining == self.stats.max_jumps
        {
            // Left the ground without jumping
            self.jumps_remaining = self.jumps_remaining.saturating_sub(1);
            debug!(target: "player", "Walked off ledge, jumps remaining {}", self.jumps_remaining);
        }

        self.transition(MotionState::from_grounded(grounded));
        self.pose = Pose::select(grounded, body.velocity_y(), self.intent);
        self.pose
    }

    /// Read movement and jump input for this frame
    pub fn handle_input<B: KinematicBody>(&mut self, body: &mut B, input: &ActionState) {
        self.intent = 0;
        if input.is_action_active(Action::MoveLeft) {
            self.intent -= 1;
        }
        if input.is_action_active(Action::MoveRight) {
            self.intent += 1;
        }

        if self.intent > 0 {
            self.facing = Facing::Right;
        } else if self.intent < 0 {
            self.facing = Facing::Left;
        }

        if input.is_just_pressed(Action::Jump) {
            if body.is_grounded() || self.jumps_remaining > 0 {
                self.perform_jump(body, None);
            } else {
                trace!(target: "player", "Jump ignored, no charges left");
            }
        }
    }

    /// Launch upward, spending one charge.
    ///
    /// `strength_override` replaces the body's default impulse when positive.
    pub fn perform_jump<B: KinematicBody>(&mut self, body: &mut B, strength_override: Option<f32>) {
        let strength = strength_override
            .filter(|s| *s > 0.0)
            .unwrap_or_else(|| body.jump_strength());

        body.set_velocity_y(-strength);
        body.set_grounded(false);
        self.jumps_remaining = self.jumps_remaining.saturating_sub(1);
        self.transition(MotionState::Airborne);
        debug!(target: "player", "Jump performed, jumps remaining {}", self.jumps_remaining);
    }

    fn transition(&mut self, new_state: MotionState) {
        if self.state != new_state {
            self.previous_state = self.state;
            self.state = new_state;
        }
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    #[allow(dead_code)]
    pub fn previous_state(&self) -> MotionState {
        self.previous_state
    }

    #[allow(dead_code)]
    pub fn intent(&self) -> i8 {
        self.intent
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn jumps_remaining(&self) -> u8 {
        self.jumps_remaining
    }

    #[allow(dead_code)]
    pub fn max_jumps(&self) -> u8 {
        self.stats.max_jumps
    }

    #[allow(dead_code)]
    pub fn pose(&self) -> Pose {
        self.pose
    }

    #[allow(dead_code)]
    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new(PlayerStats::default())
    }
}
