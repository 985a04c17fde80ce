// Input configuration: static key table and touch thresholds

use super::action::{default_bindings, Action};
use std::collections::HashMap;
use thiserror::Error;
use winit::keyboard::KeyCode;

/// Left share of the viewport that belongs to the movement joystick
pub const DEFAULT_SPLIT_FRACTION: f32 = 0.5;

/// Pixels from the touch origin before the joystick registers
pub const DEFAULT_DEAD_ZONE: f32 = 20.0;

/// Drag beyond `dead_zone * multiplier` revokes a pending tap-to-jump
pub const DEFAULT_CANCEL_MULTIPLIER: f32 = 5.0;

/// Joystick displacement that counts as full deflection
pub const DEFAULT_MAX_STICK_RADIUS: f32 = 75.0;

/// Invalid input configuration
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("split fraction must be in (0, 1), got {0}")]
    SplitFraction(f32),

    #[error("dead zone must be positive, got {0}")]
    DeadZone(f32),

    #[error("cancel multiplier must be at least 1, got {0}")]
    CancelMultiplier(f32),

    #[error("max stick radius ({radius}) must exceed the dead zone ({dead_zone})")]
    StickRadius { radius: f32, dead_zone: f32 },
}

/// Raw key to action table.
///
/// Built once and never mutated afterwards; many keys may map to the same
/// action.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    /// Mapping from keys to actions
    bindings: HashMap<KeyCode, Action>,

    /// Reverse mapping (action -> all keys)
    action_to_keys: HashMap<Action, Vec<KeyCode>>,
}

impl KeyBindings {
    /// Build a table from `(key, action)` pairs; later pairs win for a repeated key
    pub fn from_bindings(bindings: Vec<(KeyCode, Action)>) -> Self {
        let mut table = Self {
            bindings: HashMap::new(),
            action_to_keys: HashMap::new(),
        };
        for (key, action) in bindings {
            table.bind(key, action);
        }
        table
    }

    fn bind(&mut self, key: KeyCode, action: Action) {
        if let Some(old) = self.bindings.insert(key, action) {
            if let Some(keys) = self.action_to_keys.get_mut(&old) {
                keys.retain(|k| *k != key);
                if keys.is_empty() {
                    self.action_to_keys.remove(&old);
                }
            }
        }
        self.action_to_keys.entry(action).or_default().push(key);
    }

    /// Get the action bound to a key
    pub fn get_action(&self, key: KeyCode) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    /// All keys bound to an action
    pub fn keys_for(&self, action: Action) -> &[KeyCode] {
        self.action_to_keys
            .get(&action)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Check if a key is bound to any action
    #[allow(dead_code)]
    pub fn is_bound(&self, key: KeyCode) -> bool {
        self.bindings.contains_key(&key)
    }

    /// Check if an action has any bound key
    #[allow(dead_code)]
    pub fn has_binding(&self, action: Action) -> bool {
        self.action_to_keys.contains_key(&action)
    }

    /// Number of bound keys
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the table is empty
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::from_bindings(default_bindings())
    }
}

/// Thresholds for the touch joystick and the tap-to-jump zone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchConfig {
    /// Contacts starting left of `viewport_width * split_fraction` steer
    pub split_fraction: f32,
    /// Joystick dead zone radius in pixels
    pub dead_zone: f32,
    /// Tap cancel threshold as a multiple of the dead zone
    pub cancel_multiplier: f32,
    /// Displacement mapped to a full analog deflection
    pub max_stick_radius: f32,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            split_fraction: DEFAULT_SPLIT_FRACTION,
            dead_zone: DEFAULT_DEAD_ZONE,
            cancel_multiplier: DEFAULT_CANCEL_MULTIPLIER,
            max_stick_radius: DEFAULT_MAX_STICK_RADIUS,
        }
    }
}

impl TouchConfig {
    #[allow(dead_code)]
    pub fn with_split_fraction(mut self, split_fraction: f32) -> Self {
        self.split_fraction = split_fraction;
        self
    }

    #[allow(dead_code)]
    pub fn with_dead_zone(mut self, dead_zone: f32) -> Self {
        self.dead_zone = dead_zone;
        self
    }

    #[allow(dead_code)]
    pub fn with_cancel_multiplier(mut self, cancel_multiplier: f32) -> Self {
        self.cancel_multiplier = cancel_multiplier;
        self
    }

    #[allow(dead_code)]
    pub fn with_max_stick_radius(mut self, max_stick_radius: f32) -> Self {
        self.max_stick_radius = max_stick_radius;
        self
    }

    /// Drag distance that revokes a pending jump tap
    pub fn cancel_threshold(&self) -> f32 {
        self.dead_zone * self.cancel_multiplier
    }

    /// Check the thresholds are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        // NaN fails every comparison below, so it is rejected too
        if !(self.split_fraction > 0.0 && self.split_fraction < 1.0) {
            return Err(ConfigError::SplitFraction(self.split_fraction));
        }
        if !(self.dead_zone > 0.0) {
            return Err(ConfigError::DeadZone(self.dead_zone));
        }
        if !(self.cancel_multiplier >= 1.0) {
            return Err(ConfigError::CancelMultiplier(self.cancel_multiplier));
        }
        if !(self.max_stick_radius > self.dead_zone) {
            return Err(ConfigError::StickRadius {
                radius: self.max_stick_radius,
                dead_zone: self.dead_zone,
            });
        }
        Ok(())
    }
}

/// Complete input configuration for one session
#[derive(Debug, Clone, Default)]
pub struct InputConfig {
    pub bindings: KeyBindings,
    pub touch: TouchConfig,
}

impl InputConfig {
    /// Create a validated configuration
    pub fn new(bindings: KeyBindings, touch: TouchConfig) -> Result<Self, ConfigError> {
        touch.validate()?;
        Ok(Self { bindings, touch })
    }
}
