// Keyboard adapter: raw keys -> actions with directional override

use super::config::KeyBindings;
use super::state::ActionState;
use log::trace;
use std::collections::HashSet;
use winit::keyboard::KeyCode;

/// Translates key presses into action writes.
///
/// The most recently pressed direction always wins outright. Releasing it
/// hands control back to the opposite direction if any key bound to that
/// direction is still physically down.
#[derive(Debug, Clone)]
pub struct KeyboardAdapter {
    /// Static key table
    bindings: KeyBindings,

    /// Keys physically held right now
    held: HashSet<KeyCode>,
}

impl KeyboardAdapter {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            held: HashSet::new(),
        }
    }

    /// Handle a key-down from the host
    pub fn key_down(&mut self, key: KeyCode, state: &mut ActionState) {
        self.held.insert(key);

        let Some(action) = self.bindings.get_action(key) else {
            return;
        };

        state.set(action, true);
        if action.is_directional() {
            if let Some(opposite) = action.opposite() {
                state.set(opposite, false);
            }
        }
        trace!(target: "input::keyboard", "{:?} down -> {:?}", key, action);
    }

    /// Handle a key-up from the host
    pub fn key_up(&mut self, key: KeyCode, state: &mut ActionState) {
        self.held.remove(&key);

        let Some(action) = self.bindings.get_action(key) else {
            return;
        };

        state.set(action, false);
        trace!(target: "input::keyboard", "{:?} up -> {:?} released", key, action);

        if !action.is_directional() {
            return;
        }
        let Some(opposite) = action.opposite() else {
            return;
        };
        // Scan raw key state: aliased keys make the action flag unreliable here
        let still_held = self
            .bindings
            .keys_for(opposite)
            .iter()
            .any(|k| self.held.contains(k));
        if still_held {
            state.set(opposite, true);
            trace!(target: "input::keyboard", "{:?} reactivated", opposite);
        }
    }

    /// Check if a key is physically held
    #[allow(dead_code)]
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Release every held key, e.g. when the window loses focus
    pub fn release_all(&mut self, state: &mut ActionState) {
        for key in self.held.drain() {
            if let Some(action) = self.bindings.get_action(key) {
                state.set(action, false);
            }
        }
    }

    /// Forget held keys without touching action state
    #[allow(dead_code)]
    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// The key table in use
    #[allow(dead_code)]
    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }
}

impl Default for KeyboardAdapter {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}
