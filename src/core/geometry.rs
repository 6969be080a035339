//! Vector helpers for the branching step.

use glam::{DQuat, DVec3};

/// Degrees to radians.
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// A vector orthogonal to `v`, built as `(1, 1, -(v.x + v.y) / v.z)`.
///
/// Returns `None` when `v.z == 0`, where the construction divides by zero.
#[inline]
pub fn perpendicular(v: DVec3) -> Option<DVec3> {
    if v.z == 0.0 {
        return None;
    }
    Some(DVec3::new(1.0, 1.0, -(v.x + v.y) / v.z))
}

/// Rotate `v` by `angle` radians around `axis`. The axis need not be unit length
/// but must be non-zero.
#[inline]
pub fn rotate_about(v: DVec3, axis: DVec3, angle: f64) -> DVec3 {
    DQuat::from_axis_angle(axis.normalize(), angle) * v
}

/// Rotate `point` by `angle` radians around the line through `pivot` along `axis`.
#[inline]
pub fn rotate_around_pivot(point: DVec3, pivot: DVec3, axis: DVec3, angle: f64) -> DVec3 {
    rotate_about(point - pivot, axis, angle) + pivot
}
