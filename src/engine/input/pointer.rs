// Pointer gesture tracker: virtual joystick + tap-to-jump
//
// The viewport is split at a fixed fraction of its width when a contact
// first lands. The left side is a floating joystick anchored where the
// finger went down; the right side is a tap zone that fires a jump on
// release as long as the finger did not wander too far.

use super::action::Action;
use super::config::TouchConfig;
use super::state::ActionState;
use glam::Vec2;
use log::{debug, trace};
use std::collections::HashMap;
use winit::event::{Touch, TouchPhase};

/// Host-assigned contact identity
pub type PointerId = u64;

/// Id used for the mouse when it drives the pointer tracker
pub const MOUSE_POINTER_ID: PointerId = u64::MAX;

/// Lifecycle phase of a contact event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactPhase {
    Down,
    Move,
    Up,
    Cancel,
    /// The host stopped routing this contact to us
    CaptureLost,
}

/// A normalised contact event, independent of the host API
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub phase: ContactPhase,
    pub position: Vec2,
}

impl PointerEvent {
    pub fn new(id: PointerId, phase: ContactPhase, x: f32, y: f32) -> Self {
        Self {
            id,
            phase,
            position: Vec2::new(x, y),
        }
    }

    /// Convert a winit touch event
    pub fn from_touch(touch: &Touch) -> Self {
        let phase = match touch.phase {
            TouchPhase::Started => ContactPhase::Down,
            TouchPhase::Moved => ContactPhase::Move,
            TouchPhase::Ended => ContactPhase::Up,
            TouchPhase::Cancelled => ContactPhase::Cancel,
        };
        Self::new(
            touch.id,
            phase,
            touch.location.x as f32,
            touch.location.y as f32,
        )
    }
}

/// Screen region a contact was classified into on touch-down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerRegion {
    Movement,
    JumpCandidate,
}

/// What a live contact is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Joystick deflected past the dead zone in this direction
    Stick(Action),
    /// Tap still eligible to fire a jump on release
    JumpIntent,
}

/// State kept for one active contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerRecord {
    pub region: PointerRegion,
    pub origin: Vec2,
    pub position: Vec2,
    pub gesture: Option<Gesture>,
}

impl PointerRecord {
    fn new(region: PointerRegion, origin: Vec2) -> Self {
        let gesture = match region {
            PointerRegion::Movement => None,
            PointerRegion::JumpCandidate => Some(Gesture::JumpIntent),
        };
        Self {
            region,
            origin,
            position: origin,
            gesture,
        }
    }

    /// Offset from where the contact went down
    pub fn displacement(&self) -> Vec2 {
        self.position - self.origin
    }
}

/// Tracks every active contact and turns them into action writes.
///
/// At most one contact owns each region. Extra contacts landing in an owned
/// region are dropped until the owner lifts.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    config: TouchConfig,
    records: HashMap<PointerId, PointerRecord>,
    movement_owner: Option<PointerId>,
    jump_owner: Option<PointerId>,
}

impl PointerTracker {
    pub fn new(config: TouchConfig) -> Self {
        Self {
            config,
            records: HashMap::new(),
            movement_owner: None,
            jump_owner: None,
        }
    }

    /// Dispatch a contact event; up, cancel and capture loss share one path
    pub fn handle(&mut self, event: PointerEvent, viewport_width: f32, state: &mut ActionState) {
        match event.phase {
            ContactPhase::Down => self.contact_down(event.id, event.position, viewport_width),
            ContactPhase::Move => self.contact_move(event.id, event.position, state),
            ContactPhase::Up | ContactPhase::Cancel | ContactPhase::CaptureLost => {
                self.contact_up(event.id, state)
            }
        }
    }

    /// Classify a new contact and start tracking it if its region is free
    pub fn contact_down(&mut self, id: PointerId, position: Vec2, viewport_width: f32) {
        if self.records.contains_key(&id) {
            return;
        }

        let region = if position.x < viewport_width * self.config.split_fraction {
            PointerRegion::Movement
        } else {
            PointerRegion::JumpCandidate
        };

        let owner = match region {
            PointerRegion::Movement => &mut self.movement_owner,
            PointerRegion::JumpCandidate => &mut self.jump_owner,
        };
        if owner.is_some() {
            trace!(target: "input::pointer", "contact {} ignored, {:?} region owned", id, region);
            return;
        }
        *owner = Some(id);

        self.records.insert(id, PointerRecord::new(region, position));
        debug!(target: "input::pointer", "contact {} down at ({}, {}) as {:?}", id, position.x, position.y, region);
    }

    /// Update a tracked contact's position and derive its gesture
    pub fn contact_move(&mut self, id: PointerId, position: Vec2, state: &mut ActionState) {
        let dead_zone = self.config.dead_zone;
        let cancel_threshold = self.config.cancel_threshold();

        let Some(record) = self.records.get_mut(&id) else {
            return;
        };
        record.position = position;
        let delta = record.displacement();

        match record.region {
            PointerRegion::Movement => {
                state.set(Action::MoveLeftStick, false);
                state.set(Action::MoveRightStick, false);

                if delta.length() > dead_zone {
                    // Horizontal sign decides even when the drag is mostly vertical
                    let direction = if delta.x < 0.0 {
                        Action::MoveLeftStick
                    } else {
                        Action::MoveRightStick
                    };
                    state.set(direction, true);
                    let previous = match record.gesture {
                        Some(Gesture::Stick(held)) => Some(held),
                        _ => None,
                    };
                    if previous != Some(direction) {
                        trace!(target: "input::pointer", "contact {} stick -> {:?}", id, direction);
                    }
                    record.gesture = Some(Gesture::Stick(direction));
                } else {
                    record.gesture = None;
                }
            }
            PointerRegion::JumpCandidate => {
                if record.gesture == Some(Gesture::JumpIntent) && delta.length() > cancel_threshold
                {
                    record.gesture = None;
                    debug!(target: "input::pointer", "contact {} jump intent revoked (drag > {})", id, cancel_threshold);
                }
            }
        }
    }

    /// Stop tracking a contact, confirming a pending jump tap
    pub fn contact_up(&mut self, id: PointerId, state: &mut ActionState) {
        let Some(record) = self.records.remove(&id) else {
            return;
        };

        match record.region {
            PointerRegion::Movement => {
                state.set(Action::MoveLeftStick, false);
                state.set(Action::MoveRightStick, false);
                self.movement_owner = None;
            }
            PointerRegion::JumpCandidate => {
                if record.gesture == Some(Gesture::JumpIntent) {
                    state.set(Action::Jump, true);
                    debug!(target: "input::pointer", "contact {} jump confirmed", id);
                }
                self.jump_owner = None;
            }
        }
        trace!(target: "input::pointer", "contact {} released", id);
    }

    /// Funnel every live contact through the release path.
    ///
    /// Used when the host drops all contacts at once (focus loss); pending
    /// taps are revoked first so nothing fires.
    pub fn release_all(&mut self, state: &mut ActionState) {
        let ids: Vec<PointerId> = self.records.keys().copied().collect();
        for id in ids {
            if let Some(record) = self.records.get_mut(&id) {
                if record.region == PointerRegion::JumpCandidate {
                    record.gesture = None;
                }
            }
            self.contact_up(id, state);
        }
    }

    /// Analog joystick deflection, clamped to the unit circle.
    ///
    /// Zero while no movement contact is active or it rests in the dead zone.
    #[allow(dead_code)]
    pub fn stick_deflection(&self) -> Vec2 {
        let Some(record) = self.movement_owner.and_then(|id| self.records.get(&id)) else {
            return Vec2::ZERO;
        };
        let delta = record.displacement();
        if delta.length() <= self.config.dead_zone {
            return Vec2::ZERO;
        }
        (delta / self.config.max_stick_radius).clamp_length_max(1.0)
    }

    /// Look up a tracked contact
    #[allow(dead_code)]
    pub fn record(&self, id: PointerId) -> Option<&PointerRecord> {
        self.records.get(&id)
    }

    /// Number of tracked contacts
    #[allow(dead_code)]
    pub fn active_contacts(&self) -> usize {
        self.records.len()
    }

    /// Drop all records without writing action state
    #[allow(dead_code)]
    pub fn clear(&mut self) {
        self.records.clear();
        self.movement_owner = None;
        self.jump_owner = None;
    }

    #[allow(dead_code)]
    pub fn config(&self) -> &TouchConfig {
        &self.config
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(TouchConfig::default())
    }
}
