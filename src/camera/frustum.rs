//! Perspective view volume and clip-plane arithmetic.
//!
//! A [`Frustum`] stores the six scalar bounds of a perspective view volume in
//! camera space. [`Plane`] and the extraction/intersection routines support
//! reconstructing those bounds from an arbitrary combined
//! model-view-projection matrix.

use glam::{Mat3, Mat4, Vec3, Vec4};

/// A half-space boundary: `normal · p + distance = 0`.
///
/// The normal is not necessarily unit length; clip-plane extraction leaves
/// the raw matrix-row coefficients unnormalized.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    /// Plane normal (unnormalized).
    pub normal: Vec3,
    /// Signed offset along the normal.
    pub distance: f32,
}

impl Plane {
    /// Create a plane from a normal and signed distance.
    #[must_use]
    pub const fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Plane from clip-space row coefficients `(a, b, c, d)`.
    fn from_row(row: Vec4) -> Self {
        Self::new(row.truncate(), row.w)
    }

    /// Intersection point of three planes: the unique solution of the 3x3
    /// linear system `normal_i · p = -distance_i`, solved by Cramer's rule.
    ///
    /// Returns `None` when the system is singular (the planes share a common
    /// line or are otherwise linearly dependent). The determinant check is an
    /// exact zero comparison: Cramer's rule is defined for every non-zero
    /// determinant, however small.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn intersect3(p1: &Self, p2: &Self, p3: &Self) -> Option<Vec3> {
        // det(A) = det(Aᵀ), so columns stand in for the rows of normals.
        let det = Mat3::from_cols(p1.normal, p2.normal, p3.normal)
            .determinant();

        if det == 0.0 {
            return None;
        }

        let point = (p2.normal.cross(p3.normal) * -p1.distance
            + p3.normal.cross(p1.normal) * -p2.distance
            + p1.normal.cross(p2.normal) * -p3.distance)
            / det;

        Some(point)
    }
}

/// Six scalar bounds of a perspective view volume in camera space.
///
/// Perspective validity requires `left < right`, `bottom < top`, and
/// `0 < near < far`; symmetric construction additionally guarantees
/// `right = -left` and `top = -bottom`. The bounds are not validated here —
/// all mutation goes through [`crate::camera::scene::SceneCamera`], which
/// replaces the frustum as a whole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
}

impl Frustum {
    /// Create a frustum from its six bounds.
    #[must_use]
    pub const fn new(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
            near,
            far,
        }
    }

    /// Symmetric frustum from a vertical field of view (radians), aspect
    /// ratio (width / height), and near/far plane distances.
    #[must_use]
    pub fn symmetric_perspective(
        fovy_rad: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Self {
        debug_assert!(near > 0.0, "near plane must be positive");
        debug_assert!(far > near, "far plane must lie beyond near");
        debug_assert!(aspect > 0.0, "aspect ratio must be positive");

        let top = (fovy_rad / 2.0).tan() * near;
        let right = top * aspect;

        Self::new(-right, right, -top, top, near, far)
    }

    /// Left bound.
    #[must_use]
    pub const fn left(&self) -> f32 {
        self.left
    }

    /// Right bound.
    #[must_use]
    pub const fn right(&self) -> f32 {
        self.right
    }

    /// Bottom bound.
    #[must_use]
    pub const fn bottom(&self) -> f32 {
        self.bottom
    }

    /// Top bound.
    #[must_use]
    pub const fn top(&self) -> f32 {
        self.top
    }

    /// Near plane distance.
    #[must_use]
    pub const fn near(&self) -> f32 {
        self.near
    }

    /// Far plane distance.
    #[must_use]
    pub const fn far(&self) -> f32 {
        self.far
    }
}

/// Clip planes of a combined model-view-projection matrix, in the order
/// left, right, bottom, top, near, far.
///
/// Gribb/Hartmann row extraction for the OpenGL clip-space convention:
/// each plane's coefficients are a sum or difference of a matrix row and the
/// last row. Normals are left unnormalized.
#[must_use]
pub fn frustum_planes(mvp: &Mat4) -> [Plane; 6] {
    let row0 = mvp.row(0);
    let row1 = mvp.row(1);
    let row2 = mvp.row(2);
    let row3 = mvp.row(3);

    [
        Plane::from_row(row0 + row3),
        Plane::from_row(row3 - row0),
        Plane::from_row(row1 + row3),
        Plane::from_row(row3 - row1),
        Plane::from_row(row2 + row3),
        Plane::from_row(row3 - row2),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orthogonal_unit_planes_intersect_at_unit_corner() {
        // x + 1 = 0, y + 1 = 0, z + 1 = 0
        let px = Plane::new(Vec3::X, 1.0);
        let py = Plane::new(Vec3::Y, 1.0);
        let pz = Plane::new(Vec3::Z, 1.0);

        let point = Plane::intersect3(&px, &py, &pz).unwrap();
        assert_eq!(point, Vec3::new(-1.0, -1.0, -1.0));
    }

    #[test]
    fn parallel_planes_have_no_intersection_point() {
        let p1 = Plane::new(Vec3::X, 0.0);
        let p2 = Plane::new(Vec3::X, 1.0);
        let p3 = Plane::new(Vec3::Y, 0.0);

        assert!(Plane::intersect3(&p1, &p2, &p3).is_none());
    }

    #[test]
    fn symmetric_perspective_bounds() {
        let fovy = 60.0_f32.to_radians();
        let frustum = Frustum::symmetric_perspective(fovy, 4.0 / 3.0, 0.25, 10.0);

        let top = (fovy / 2.0).tan() * 0.25;
        assert!((frustum.top() - top).abs() < 1e-6);
        assert!((frustum.bottom() + top).abs() < 1e-6);
        assert!((frustum.right() - top * 4.0 / 3.0).abs() < 1e-6);
        assert!((frustum.left() + top * 4.0 / 3.0).abs() < 1e-6);
        assert!((frustum.near() - 0.25).abs() < 1e-6);
        assert!((frustum.far() - 10.0).abs() < 1e-6);
    }

    #[test]
    fn identity_matrix_planes_bound_the_unit_cube() {
        let planes = frustum_planes(&Mat4::IDENTITY);

        // Left plane of the identity "projection" is x + 1 = 0 at x = -1.
        let left = planes[0];
        assert_eq!(left.normal, Vec3::X);
        assert_eq!(left.distance, 1.0);

        // All six planes contain the respective unit-cube face center.
        let centers = [
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 0.0, 1.0),
        ];
        for (plane, center) in planes.iter().zip(centers) {
            assert!((plane.normal.dot(center) + plane.distance).abs() < 1e-6);
        }
    }
}
