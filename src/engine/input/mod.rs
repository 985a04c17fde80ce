// Input handling system
//
// Converts keyboard, touch and mouse events into a per-frame action model
// with level-triggered and edge-triggered queries.
//
// ## Architecture
//
// - `action`: Game actions and the default key table
// - `config`: Static key bindings and touch thresholds
// - `state`: Live/committed action flags and the end-of-frame commit
// - `keyboard`: Key adapter with directional override and reactivation
// - `pointer`: Touch joystick (left side) and tap-to-jump (right side)
// - `manager`: Session object coordinating everything
//
// ## Usage Example
//
// ```rust
// use engine::input::{Action, InputConfig, InputManager};
//
// let mut input = InputManager::new(InputConfig::default(), 1280.0);
//
// // In your event loop, forward host events
// input.process_keyboard_event(&key_event);
// input.process_touch_event(&touch);
//
// // Gameplay reads during the frame
// if input.is_just_pressed(Action::Jump) {
//     // jump!
// }
//
// // After gameplay is done with the frame
// input.end_frame();
// ```

pub mod action;
pub mod config;
pub mod keyboard;
pub mod manager;
pub mod pointer;
pub mod state;

// Re-export commonly used types
pub use action::Action;
pub use config::{InputConfig, KeyBindings, TouchConfig};
pub use manager::InputManager;
pub use state::ActionState;

// Host-independent contact events and config errors
#[allow(unused_imports)]
pub use config::ConfigError;
#[allow(unused_imports)]
pub use pointer::{ContactPhase, PointerEvent};
