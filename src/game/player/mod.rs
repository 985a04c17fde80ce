// Player control
//
// - `controller`: per-frame state machine (intent, jumps, landing, pose)
// - `state`: motion states, facing and animation poses
// - `stats`: movement tuning

pub mod controller;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use controller::PlayerController;
pub use state::Pose;
pub use stats::PlayerStats;

#[allow(unused_imports)]
pub use state::{Facing, MotionState};
#[allow(unused_imports)]
pub use stats::StatsError;
