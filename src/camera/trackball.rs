//! Pointer-drag to rotation mapping.
//!
//! Maps a pair of 2D pointer positions to an incremental 3D rotation, as if
//! the drag rolled a ball centered under the viewport.

use glam::{Quat, Vec2, Vec3};

/// Virtual trackball of a fixed radius.
///
/// Stateless apart from the radius: the rotation is a pure function of the
/// two drag points. Points are expected in the `[-1, 1]²` right-handed
/// viewport convention (y up).
#[derive(Debug, Clone, Copy)]
pub struct Trackball {
    radius: f32,
}

impl Default for Trackball {
    fn default() -> Self {
        Self { radius: 1.0 }
    }
}

impl Trackball {
    /// Create a trackball with the given ball radius.
    #[must_use]
    pub fn new(radius: f32) -> Self {
        debug_assert!(radius > 0.0, "trackball radius must be positive");
        Self { radius }
    }

    /// Incremental rotation between two drag points.
    ///
    /// Both points are lifted onto the ball surface; the rotation axis is
    /// the cross product of the lifted points and the angle follows from
    /// their chord length. Coincident points yield the identity rotation,
    /// and the result is always a unit quaternion.
    #[must_use]
    pub fn rotation(&self, u0: Vec2, u1: Vec2) -> Quat {
        let v0 = self.lift_to_ball(u0);
        let v1 = self.lift_to_ball(u1);

        let axis = v0.cross(v1);
        if axis == Vec3::ZERO {
            return Quat::IDENTITY;
        }

        let chord = (v1 - v0).length() / (2.0 * self.radius);
        let angle = 2.0 * chord.clamp(-1.0, 1.0).asin();

        Quat::from_axis_angle(axis.normalize(), angle)
    }

    /// Lift a viewport point onto the ball.
    ///
    /// Inside the ball's silhouette the point maps onto the sphere; outside
    /// it maps onto the hyperbolic sheet `z = r²/(2d)`, which meets the
    /// sphere at `d = r/√2` and keeps the mapping continuous for drags that
    /// leave the ball.
    fn lift_to_ball(&self, p: Vec2) -> Vec3 {
        let r = self.radius;
        let d = p.length();

        let z = if d < r * std::f32::consts::FRAC_1_SQRT_2 {
            (r * r - d * d).sqrt()
        } else {
            r * r / (2.0 * d)
        };

        Vec3::new(p.x, p.y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coincident_points_give_identity() {
        let trackball = Trackball::default();
        let q = trackball.rotation(Vec2::new(0.3, -0.2), Vec2::new(0.3, -0.2));
        assert_eq!(q, Quat::IDENTITY);
    }

    #[test]
    fn rotation_is_unit_norm() {
        let trackball = Trackball::default();
        let pairs = [
            (Vec2::new(0.0, 0.0), Vec2::new(0.5, 0.0)),
            (Vec2::new(-0.9, 0.1), Vec2::new(0.8, -0.7)),
            (Vec2::new(0.01, 0.0), Vec2::new(0.0, 0.01)),
        ];
        for (u0, u1) in pairs {
            let q = trackball.rotation(u0, u1);
            assert!((q.length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn horizontal_drag_rotates_about_y() {
        let trackball = Trackball::default();
        let q = trackball.rotation(Vec2::ZERO, Vec2::new(0.5, 0.0));
        let (axis, angle) = q.to_axis_angle();

        assert!(angle > 0.0);
        assert!(axis.y.abs() > 0.99);
        assert!(axis.x.abs() < 1e-5);
        assert!(axis.z.abs() < 1e-5);
    }

    #[test]
    fn vertical_drag_rotates_about_x() {
        let trackball = Trackball::default();
        let q = trackball.rotation(Vec2::ZERO, Vec2::new(0.0, 0.5));
        let (axis, _) = q.to_axis_angle();

        assert!(axis.x.abs() > 0.99);
        assert!(axis.y.abs() < 1e-5);
    }

    #[test]
    fn opposite_drags_cancel() {
        let trackball = Trackball::default();
        let forward = trackball.rotation(Vec2::ZERO, Vec2::new(0.4, 0.2));
        let back = trackball.rotation(Vec2::new(0.4, 0.2), Vec2::ZERO);

        let composed = forward * back;
        assert!(composed.angle_between(Quat::IDENTITY) < 1e-5);
    }

    #[test]
    fn far_drags_stay_finite() {
        // Points well outside the ball land on the hyperbolic sheet.
        let trackball = Trackball::default();
        let q = trackball.rotation(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0));
        assert!(q.is_finite());
        assert!((q.length() - 1.0).abs() < 1e-6);
    }
}
