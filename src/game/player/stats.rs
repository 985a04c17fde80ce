// Player tuning values

use thiserror::Error;

/// Invalid player tuning
#[derive(Debug, Error, PartialEq)]
pub enum StatsError {
    #[error("move speed must be positive, got {0}")]
    MoveSpeed(f32),
}

/// Movement tuning for a controllable player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerStats {
    /// Horizontal speed (units/second)
    pub move_speed: f32,
    /// Jump charges available after touching ground (2 = double jump)
    pub max_jumps: u8,
    /// Walking off a ledge spends the ground jump, leaving only air jumps
    pub ledge_consumes_jump: bool,
}

pub const BASE_STATS: PlayerStats = PlayerStats {
    move_speed: 300.0,
    max_jumps: 2,
    ledge_consumes_jump: false,
};

impl Default for PlayerStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl PlayerStats {
    #[allow(dead_code)]
    pub fn with_max_jumps(mut self, max_jumps: u8) -> Self {
        self.max_jumps = max_jumps;
        self
    }

    #[allow(dead_code)]
    pub fn with_ledge_consumes_jump(mut self, enabled: bool) -> Self {
        self.ledge_consumes_jump = enabled;
        self
    }

    pub fn validate(&self) -> Result<(), StatsError> {
        if !(self.move_speed > 0.0) {
            return Err(StatsError::MoveSpeed(self.move_speed));
        }
        Ok(())
    }
}
