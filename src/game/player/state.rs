// Player motion states, facing and animation poses

/// Coarse motion state; rising vs falling is a display concern only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MotionState {
    #[default]
    Grounded,
    Airborne,
}

impl MotionState {
    pub fn from_grounded(grounded: bool) -> Self {
        if grounded {
            Self::Grounded
        } else {
            Self::Airborne
        }
    }

    #[allow(dead_code)]
    pub fn is_grounded(&self) -> bool {
        matches!(self, Self::Grounded)
    }

    #[allow(dead_code)]
    pub fn is_airborne(&self) -> bool {
        matches!(self, Self::Airborne)
    }
}

/// Direction the sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1 for left, 1 for right
    #[allow(dead_code)]
    pub fn sign(&self) -> i8 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }

    /// Sprites are authored facing right
    pub fn flip_horizontal(&self) -> bool {
        matches!(self, Self::Left)
    }
}

/// Animation pose picked each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pose {
    #[default]
    Idle,
    Walk,
    Jump,
    Fall,
}

impl Pose {
    /// Pick a pose by priority: rising, falling, walking, idle.
    /// `velocity_y` uses screen coordinates (negative is up).
    pub fn select(grounded: bool, velocity_y: f32, intent: i8) -> Self {
        if !grounded {
            if velocity_y < 0.0 {
                Self::Jump
            } else {
                Self::Fall
            }
        } else if intent != 0 {
            Self::Walk
        } else {
            Self::Idle
        }
    }

    /// Clip name handed to the sprite animator
    pub fn animation_name(&self) -> &'static str {
        match self {
            Self::Idle => "pickle_player_idle",
            Self::Walk => "pickle_player_walk",
            Self::Jump => "pickle_player_jump",
            Self::Fall => "pickle_player_fall",
        }
    }
}
