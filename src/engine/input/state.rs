// Action state store and per-frame edge commit

use super::action::Action;
use log::trace;
use std::collections::HashSet;

/// Live and committed action flags for one game session.
///
/// `current` is written by the keyboard adapter and the pointer tracker as
/// host events arrive. `previous` is the snapshot taken by [`ActionState::commit`]
/// at the end of the last frame and is never written anywhere else.
#[derive(Debug, Default, Clone)]
pub struct ActionState {
    /// Actions active right now
    current: HashSet<Action>,

    /// Actions that were active when the last frame was committed
    previous: HashSet<Action>,

    /// Number of committed frames
    frame: u64,
}

impl ActionState {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear the live flag of an action
    pub(crate) fn set(&mut self, action: Action, active: bool) {
        if active {
            self.current.insert(action);
        } else {
            self.current.remove(&action);
        }
    }

    /// Raw live flag, without joystick aliasing
    #[allow(dead_code)]
    pub fn get(&self, action: Action) -> bool {
        self.current.contains(&action)
    }

    /// Level-triggered query.
    ///
    /// `MoveLeft`/`MoveRight` also report true while the matching joystick
    /// action is held, so gameplay never has to know which device moved it.
    pub fn is_action_active(&self, action: Action) -> bool {
        if self.current.contains(&action) {
            return true;
        }
        action
            .stick_alias()
            .is_some_and(|stick| self.current.contains(&stick))
    }

    /// Edge-triggered query: active now, inactive at the last commit
    pub fn is_just_pressed(&self, action: Action) -> bool {
        self.current.contains(&action) && !self.previous.contains(&action)
    }

    /// Edge-triggered query: inactive now, active at the last commit
    #[allow(dead_code)]
    pub fn is_just_released(&self, action: Action) -> bool {
        !self.current.contains(&action) && self.previous.contains(&action)
    }

    /// Advance the edge detector by one frame.
    ///
    /// Call exactly once per frame, after gameplay has finished reading.
    /// Jump is forced off afterwards so it can only fire again on a fresh
    /// false-to-true write from an adapter.
    pub fn commit(&mut self) {
        self.previous.clone_from(&self.current);
        self.current.remove(&Action::Jump);
        self.frame += 1;
        trace!(target: "input::frame", "committed frame {} ({} active)", self.frame, self.previous.len());
    }

    /// Number of frames committed since creation or the last clear
    #[allow(dead_code)]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// All live actions
    #[allow(dead_code)]
    pub fn active_actions(&self) -> Vec<Action> {
        self.current.iter().copied().collect()
    }

    /// Drop every live and committed flag
    #[allow(dead_code)]
    pub fn clear(&mut self) {
        self.current.clear();
        self.previous.clear();
        self.frame = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_action_is_inactive() {
        let state = ActionState::new();
        assert!(!state.is_action_active(Action::MoveLeft));
        assert!(!state.is_action_active(Action::Jump));
        assert!(!state.is_just_pressed(Action::Jump));
    }

    #[test]
    fn test_set_and_clear() {
        let mut state = ActionState::new();
        state.set(Action::Sprint, true);
        assert!(state.get(Action::Sprint));
        state.set(Action::Sprint, false);
        assert!(!state.get(Action::Sprint));
    }

    #[test]
    fn test_stick_is_ored_into_direction() {
        let mut state = ActionState::new();
        state.set(Action::MoveLeftStick, true);
        assert!(state.is_action_active(Action::MoveLeft));
        assert!(!state.get(Action::MoveLeft));
        assert!(!state.is_action_active(Action::MoveRight));
    }

    #[test]
    fn test_just_pressed_lasts_one_frame() {
        let mut state = ActionState::new();
        state.set(Action::Sprint, true);
        assert!(state.is_just_pressed(Action::Sprint));

        state.commit();
        assert!(state.is_action_active(Action::Sprint));
        assert!(!state.is_just_pressed(Action::Sprint));
    }

    #[test]
    fn test_commit_clears_jump() {
        let mut state = ActionState::new();
        state.set(Action::Jump, true);
        assert!(state.is_just_pressed(Action::Jump));

        state.commit();
        assert!(!state.get(Action::Jump));
        assert!(!state.is_just_pressed(Action::Jump));

        state.commit();
        assert!(!state.is_just_pressed(Action::Jump));
    }

    #[test]
    fn test_jump_edges_again_after_quiet_frame() {
        let mut state = ActionState::new();
        state.set(Action::Jump, true);
        state.commit();
        state.commit();

        state.set(Action::Jump, true);
        assert!(state.is_just_pressed(Action::Jump));
    }

    #[test]
    fn test_just_released() {
        let mut state = ActionState::new();
        state.set(Action::MoveDown, true);
        state.commit();
        state.set(Action::MoveDown, false);
        assert!(state.is_just_released(Action::MoveDown));
        state.commit();
        assert!(!state.is_just_released(Action::MoveDown));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut state = ActionState::new();
        state.set(Action::MoveRight, true);
        state.commit();
        state.clear();

        assert!(state.active_actions().is_empty());
        assert!(!state.is_just_released(Action::MoveRight));
        assert_eq!(state.frame(), 0);
    }
}
