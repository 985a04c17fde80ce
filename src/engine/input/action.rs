// Logical game actions and the default key table

use winit::keyboard::KeyCode;

/// Every logical action the input layer can report.
///
/// Actions are decoupled from their physical source: a key, a touch gesture
/// or the mouse can all drive the same action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Jump,

    // Virtual joystick (touch movement region)
    MoveLeftStick,
    MoveRightStick,

    // Gameplay
    ActionPrimary,
    ActionSecondary,
    Sprint,

    // Meta actions
    PauseGame,
    ToggleMute,
}

impl Action {
    /// Check if this is one of the two mutually exclusive keyboard directions
    pub fn is_directional(self) -> bool {
        matches!(self, Self::MoveLeft | Self::MoveRight)
    }

    /// Opposing direction for `MoveLeft`/`MoveRight`
    pub fn opposite(self) -> Option<Action> {
        match self {
            Self::MoveLeft => Some(Self::MoveRight),
            Self::MoveRight => Some(Self::MoveLeft),
            Self::MoveLeftStick => Some(Self::MoveRightStick),
            Self::MoveRightStick => Some(Self::MoveLeftStick),
            _ => None,
        }
    }

    /// Joystick action that is OR'ed into this action's level query
    pub fn stick_alias(self) -> Option<Action> {
        match self {
            Self::MoveLeft => Some(Self::MoveLeftStick),
            Self::MoveRight => Some(Self::MoveRightStick),
            _ => None,
        }
    }
}

/// Default key table.
///
/// Several keys may alias to one action (arrows and WASD both move).
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        // Movement
        (KeyCode::ArrowLeft, Action::MoveLeft),
        (KeyCode::KeyA, Action::MoveLeft),
        (KeyCode::ArrowRight, Action::MoveRight),
        (KeyCode::KeyD, Action::MoveRight),
        (KeyCode::ArrowUp, Action::MoveUp),
        (KeyCode::KeyW, Action::MoveUp),
        (KeyCode::ArrowDown, Action::MoveDown),
        (KeyCode::KeyS, Action::MoveDown),
        // Actions
        (KeyCode::Space, Action::Jump),
        (KeyCode::Enter, Action::ActionPrimary),
        (KeyCode::ControlLeft, Action::ActionSecondary),
        (KeyCode::ControlRight, Action::ActionSecondary),
        (KeyCode::ShiftLeft, Action::Sprint),
        (KeyCode::ShiftRight, Action::Sprint),
        // UI / system
        (KeyCode::Escape, Action::PauseGame),
        (KeyCode::KeyP, Action::PauseGame),
        (KeyCode::KeyM, Action::ToggleMute),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directional_actions() {
        assert!(Action::MoveLeft.is_directional());
        assert!(Action::MoveRight.is_directional());
        assert!(!Action::Jump.is_directional());
        // Stick actions are owned by the pointer tracker, not the keyboard
        assert!(!Action::MoveLeftStick.is_directional());
    }

    #[test]
    fn test_opposites() {
        assert_eq!(Action::MoveLeft.opposite(), Some(Action::MoveRight));
        assert_eq!(Action::MoveRight.opposite(), Some(Action::MoveLeft));
        assert_eq!(
            Action::MoveLeftStick.opposite(),
            Some(Action::MoveRightStick)
        );
        assert_eq!(Action::Jump.opposite(), None);
    }

    #[test]
    fn test_stick_alias() {
        assert_eq!(Action::MoveLeft.stick_alias(), Some(Action::MoveLeftStick));
        assert_eq!(
            Action::MoveRight.stick_alias(),
            Some(Action::MoveRightStick)
        );
        assert_eq!(Action::MoveUp.stick_alias(), None);
    }

    #[test]
    fn test_default_bindings_have_aliases() {
        let bindings = default_bindings();
        let left_keys = bindings
            .iter()
            .filter(|(_, action)| *action == Action::MoveLeft)
            .count();
        assert_eq!(left_keys, 2);
    }

    #[test]
    fn test_no_duplicate_keys_in_defaults() {
        let bindings = default_bindings();
        let mut seen = std::collections::HashSet::new();
        for (key, _) in bindings {
            assert!(seen.insert(key), "Duplicate key found in default bindings");
        }
    }

    #[test]
    fn test_stick_actions_not_bound_to_keys() {
        assert!(default_bindings()
            .iter()
            .all(|(_, action)| !matches!(action, Action::MoveLeftStick | Action::MoveRightStick)));
    }
}
