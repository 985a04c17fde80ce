// Math utilities for kinematics

/// Initial upward speed needed to reach `apex_height` under constant `gravity`.
///
/// Both values are magnitudes; non-positive input yields zero.
pub fn jump_impulse(gravity: f32, apex_height: f32) -> f32 {
    if gravity <= 0.0 || apex_height <= 0.0 {
        return 0.0;
    }
    (2.0 * gravity * apex_height).sqrt()
}
