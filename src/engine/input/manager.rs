// Input manager - owns all input state for one game session

use super::action::Action;
use super::config::InputConfig;
use super::keyboard::KeyboardAdapter;
use super::pointer::{ContactPhase, PointerEvent, PointerTracker, MOUSE_POINTER_ID};
use super::state::ActionState;
use glam::Vec2;
use log::info;
use winit::event::{ElementState, KeyEvent, MouseButton, Touch};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Front door for host input events and gameplay queries.
///
/// Host callbacks feed events in between frames; gameplay reads through the
/// query methods and calls [`InputManager::end_frame`] once every frame.
#[derive(Debug)]
pub struct InputManager {
    /// Live and committed action flags
    state: ActionState,

    /// Keyboard adapter with the static key table
    keyboard: KeyboardAdapter,

    /// Touch / mouse gesture tracker
    pointers: PointerTracker,

    /// Viewport width used to split new contacts into regions
    viewport_width: f32,

    /// Last known mouse position
    cursor: Vec2,
}

impl InputManager {
    /// Create an input manager for a viewport of the given width
    pub fn new(config: InputConfig, viewport_width: f32) -> Self {
        info!(
            "Input system initialized ({} key bindings, viewport width {})",
            config.bindings.len(),
            viewport_width
        );
        Self {
            state: ActionState::new(),
            keyboard: KeyboardAdapter::new(config.bindings),
            pointers: PointerTracker::new(config.touch),
            viewport_width,
            cursor: Vec2::ZERO,
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(key) = event.physical_key else {
            return;
        };
        self.process_key(key, event.state, event.repeat);
    }

    /// Route a key transition; auto-repeat presses are dropped
    pub fn process_key(&mut self, key: KeyCode, element_state: ElementState, repeat: bool) {
        match element_state {
            ElementState::Pressed if repeat => {}
            ElementState::Pressed => self.key_down(key),
            ElementState::Released => self.key_up(key),
        }
    }

    /// Register a key press
    pub fn key_down(&mut self, key: KeyCode) {
        self.keyboard.key_down(key, &mut self.state);
    }

    /// Register a key release
    pub fn key_up(&mut self, key: KeyCode) {
        self.keyboard.key_up(key, &mut self.state);
    }

    /// Process a touch event from winit
    pub fn process_touch_event(&mut self, touch: &Touch) {
        self.process_pointer_event(PointerEvent::from_touch(touch));
    }

    /// Process a normalised contact event
    pub fn process_pointer_event(&mut self, event: PointerEvent) {
        self.pointers
            .handle(event, self.viewport_width, &mut self.state);
    }

    /// Track the mouse; moves are forwarded while the left button is down
    pub fn process_cursor_moved(&mut self, x: f32, y: f32) {
        self.cursor = Vec2::new(x, y);
        self.process_pointer_event(PointerEvent {
            id: MOUSE_POINTER_ID,
            phase: ContactPhase::Move,
            position: self.cursor,
        });
    }

    /// The left mouse button acts as a single touch contact
    pub fn process_mouse_button(&mut self, button: MouseButton, element_state: ElementState) {
        if button != MouseButton::Left {
            return;
        }
        let phase = match element_state {
            ElementState::Pressed => ContactPhase::Down,
            ElementState::Released => ContactPhase::Up,
        };
        self.process_pointer_event(PointerEvent {
            id: MOUSE_POINTER_ID,
            phase,
            position: self.cursor,
        });
    }

    /// The cursor left the window while possibly dragging
    pub fn process_cursor_left(&mut self) {
        self.process_pointer_event(PointerEvent {
            id: MOUSE_POINTER_ID,
            phase: ContactPhase::CaptureLost,
            position: self.cursor,
        });
    }

    /// Release every key and contact, e.g. on focus loss
    pub fn release_all(&mut self) {
        self.keyboard.release_all(&mut self.state);
        self.pointers.release_all(&mut self.state);
    }

    /// Update the viewport width used for new contacts
    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }

    #[allow(dead_code)]
    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    /// Level-triggered action query (keyboard OR joystick for movement)
    #[allow(dead_code)]
    pub fn is_action_active(&self, action: Action) -> bool {
        self.state.is_action_active(action)
    }

    /// Edge-triggered action query
    pub fn is_just_pressed(&self, action: Action) -> bool {
        self.state.is_just_pressed(action)
    }

    /// Edge-triggered release query
    #[allow(dead_code)]
    pub fn is_just_released(&self, action: Action) -> bool {
        self.state.is_just_released(action)
    }

    /// Raw key query, independent of bindings
    #[allow(dead_code)]
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keyboard.is_key_down(key)
    }

    /// Analog joystick deflection from the movement contact
    #[allow(dead_code)]
    pub fn stick_deflection(&self) -> Vec2 {
        self.pointers.stick_deflection()
    }

    /// Commit the frame for edge detection.
    /// Call this exactly once per frame after gameplay has read input.
    pub fn end_frame(&mut self) {
        self.state.commit();
    }

    /// Clear all key, action and contact state (re-initialisation)
    #[allow(dead_code)]
    pub fn reset(&mut self) {
        self.state.clear();
        self.keyboard.clear();
        self.pointers.clear();
        info!("Input system reset");
    }

    /// Read-only view of the action store
    pub fn state(&self) -> &ActionState {
        &self.state
    }

    /// Read-only view of the pointer tracker
    #[allow(dead_code)]
    pub fn pointers(&self) -> &PointerTracker {
        &self.pointers
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(InputConfig::default(), 1280.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> InputManager {
        InputManager::new(InputConfig::default(), 1000.0)
    }

    fn touch(manager: &mut InputManager, id: u64, phase: ContactPhase, x: f32, y: f32) {
        manager.process_pointer_event(PointerEvent::new(id, phase, x, y));
    }

    #[test]
    fn test_nothing_active_initially() {
        let manager = manager();
        assert!(!manager.is_action_active(Action::MoveLeft));
        assert!(!manager.is_action_active(Action::Jump));
        assert!(!manager.is_action_active(Action::PauseGame));
    }

    #[test]
    fn test_keyboard_and_stick_combine() {
        let mut manager = manager();
        manager.key_down(KeyCode::KeyD);
        touch(&mut manager, 1, ContactPhase::Down, 200.0, 500.0);
        touch(&mut manager, 1, ContactPhase::Move, 150.0, 500.0);

        // Both directions are reported; the controller resolves the net intent
        assert!(manager.is_action_active(Action::MoveRight));
        assert!(manager.is_action_active(Action::MoveLeft));
    }

    #[test]
    fn test_touch_scenario() {
        let mut manager = manager();
        touch(&mut manager, 1, ContactPhase::Down, 200.0, 500.0);
        touch(&mut manager, 1, ContactPhase::Move, 150.0, 500.0);
        assert!(manager.is_action_active(Action::MoveLeft));

        touch(&mut manager, 2, ContactPhase::Down, 900.0, 500.0);
        touch(&mut manager, 2, ContactPhase::Up, 900.0, 500.0);

        assert!(manager.is_just_pressed(Action::Jump));
        manager.end_frame();
        assert!(!manager.is_just_pressed(Action::Jump));
        assert!(!manager.is_action_active(Action::Jump));
        // Joystick survives the commit
        assert!(manager.is_action_active(Action::MoveLeft));
    }

    #[test]
    fn test_held_jump_key_fires_once() {
        let mut manager = manager();
        manager.key_down(KeyCode::Space);

        let mut fired = 0;
        for _ in 0..5 {
            if manager.is_just_pressed(Action::Jump) {
                fired += 1;
            }
            manager.end_frame();
        }
        assert_eq!(fired, 1);
        assert!(manager.is_key_down(KeyCode::Space));
    }

    #[test]
    fn test_key_repeat_is_not_a_press() {
        let mut manager = manager();
        manager.process_key(KeyCode::Space, ElementState::Pressed, false);
        assert!(manager.is_just_pressed(Action::Jump));
        manager.end_frame();
        manager.end_frame();

        manager.process_key(KeyCode::Space, ElementState::Pressed, true);
        assert!(!manager.is_just_pressed(Action::Jump));
        assert!(!manager.is_action_active(Action::Jump));

        // A real press after the repeat still fires
        manager.process_key(KeyCode::Space, ElementState::Released, false);
        manager.process_key(KeyCode::Space, ElementState::Pressed, false);
        assert!(manager.is_just_pressed(Action::Jump));
    }

    #[test]
    fn test_key_repeat_does_not_steal_direction() {
        let mut manager = manager();
        manager.process_key(KeyCode::KeyD, ElementState::Pressed, false);
        manager.process_key(KeyCode::KeyA, ElementState::Pressed, false);
        manager.process_key(KeyCode::KeyD, ElementState::Pressed, true);

        assert!(manager.is_action_active(Action::MoveLeft));
        assert!(!manager.is_action_active(Action::MoveRight));
    }

    #[test]
    fn test_mouse_acts_as_pointer() {
        let mut manager = manager();
        manager.process_cursor_moved(800.0, 300.0);
        manager.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        assert_eq!(manager.pointers().active_contacts(), 1);

        manager.process_mouse_button(MouseButton::Left, ElementState::Released);
        assert!(manager.is_action_active(Action::Jump));
        assert_eq!(manager.pointers().active_contacts(), 0);
    }

    #[test]
    fn test_mouse_drag_steers() {
        let mut manager = manager();
        manager.process_cursor_moved(300.0, 300.0);
        manager.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        manager.process_cursor_moved(360.0, 300.0);
        assert!(manager.is_action_active(Action::MoveRight));

        manager.process_cursor_left();
        assert!(!manager.is_action_active(Action::MoveRight));
    }

    #[test]
    fn test_other_mouse_buttons_ignored() {
        let mut manager = manager();
        manager.process_mouse_button(MouseButton::Right, ElementState::Pressed);
        assert_eq!(manager.pointers().active_contacts(), 0);
    }

    #[test]
    fn test_viewport_width_applies_to_new_contacts() {
        let mut manager = manager();
        manager.set_viewport_width(400.0);
        touch(&mut manager, 1, ContactPhase::Down, 300.0, 100.0);
        touch(&mut manager, 1, ContactPhase::Up, 300.0, 100.0);
        // 300 is right of the split for a 400 wide viewport
        assert!(manager.is_action_active(Action::Jump));
    }

    #[test]
    fn test_release_all() {
        let mut manager = manager();
        manager.key_down(KeyCode::KeyA);
        touch(&mut manager, 1, ContactPhase::Down, 200.0, 500.0);
        touch(&mut manager, 1, ContactPhase::Move, 260.0, 500.0);

        manager.release_all();
        assert!(!manager.is_action_active(Action::MoveLeft));
        assert!(!manager.is_action_active(Action::MoveRight));
        assert!(!manager.is_key_down(KeyCode::KeyA));
    }

    #[test]
    fn test_reset() {
        let mut manager = manager();
        manager.key_down(KeyCode::ShiftLeft);
        touch(&mut manager, 2, ContactPhase::Down, 900.0, 500.0);
        manager.end_frame();

        manager.reset();
        assert!(!manager.is_action_active(Action::Sprint));
        assert!(!manager.is_key_down(KeyCode::ShiftLeft));
        assert_eq!(manager.pointers().active_contacts(), 0);
        assert_eq!(manager.state().frame(), 0);
    }
}
