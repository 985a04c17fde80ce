// Game-side code built on the engine

pub mod level;
pub mod player;
