//! Interactive scene camera.
//!
//! [`SceneCamera`] composes a world-space position, a unit orientation
//! quaternion, and a [`Frustum`] into the transforms stored in the passive
//! [`Camera`] cache, drives trackball navigation, and reconstructs its
//! frustum from an externally supplied model-view-projection matrix.

use glam::{Mat3, Mat4, Quat, Vec2, Vec3, Vec4};

use crate::camera::core::Camera;
use crate::camera::frustum::{frustum_planes, Frustum, Plane};
use crate::camera::trackball::Trackball;
use crate::error::VantageError;
use crate::options::CameraOptions;

/// Interactive scene camera.
///
/// One instance per view session, mutated exclusively from the thread that
/// drives the render/input loop. Every mutator recomputes the cached
/// transforms before returning, so the transform getters always observe a
/// consistent snapshot.
#[derive(Debug, Clone)]
pub struct SceneCamera {
    camera: Camera,

    position: Vec3,
    orientation: Quat,

    frustum: Frustum,
    fovy_rad: f32,
    aspect: f32,

    /// Normalized pointer position recorded by the last begin (or re-armed
    /// by the last end) call.
    begin: Vec2,
    trackball: Trackball,
}

impl Default for SceneCamera {
    fn default() -> Self {
        let mut scene_camera = Self {
            camera: Camera::new(),
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            frustum: Frustum::new(-1.0, 1.0, -1.0, 1.0, 0.25, 10.0),
            fovy_rad: 0.0,
            aspect: 1.0,
            begin: Vec2::ZERO,
            trackball: Trackball::default(),
        };
        scene_camera.set_perspective(60.0, 4.0 / 3.0, 0.25, 10.0);
        scene_camera.rebuild_modelview();
        scene_camera
    }
}

impl SceneCamera {
    /// Camera at the origin with identity orientation and the default
    /// symmetric perspective (60° fovy, 4:3 aspect, near 0.25, far 10).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Transform cache the renderer reads each frame.
    #[must_use]
    pub const fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable access to the transform cache, for externally supplied
    /// transforms.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Currently stored model matrix.
    #[must_use]
    pub const fn model_matrix(&self) -> Mat4 {
        self.camera.model_matrix()
    }

    /// Currently stored view matrix.
    #[must_use]
    pub const fn view_matrix(&self) -> Mat4 {
        self.camera.view_matrix()
    }

    /// Currently stored projection matrix.
    #[must_use]
    pub const fn projection_matrix(&self) -> Mat4 {
        self.camera.projection_matrix()
    }

    /// Current view-volume bounds.
    #[must_use]
    pub const fn frustum(&self) -> Frustum {
        self.frustum
    }

    /// World-space camera position.
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// Camera orientation (unit quaternion).
    #[must_use]
    pub const fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Cached vertical field of view in radians.
    #[must_use]
    pub const fn fovy_rad(&self) -> f32 {
        self.fovy_rad
    }

    /// Cached aspect ratio (width / height).
    #[must_use]
    pub const fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Set a symmetric perspective projection.
    ///
    /// `fovy_deg` is the vertical field of view in degrees. Preconditions
    /// (`near > 0`, `far > near`, `aspect > 0`) are the caller's
    /// responsibility; violating them yields a degenerate or inverted
    /// projection.
    pub fn set_perspective(
        &mut self,
        fovy_deg: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) {
        self.fovy_rad = fovy_deg.to_radians();
        self.aspect = aspect;
        self.frustum =
            Frustum::symmetric_perspective(self.fovy_rad, aspect, near, far);

        self.rebuild_projection();
    }

    /// Replace the frustum wholesale and rebuild the projection matrix.
    ///
    /// The cached fovy/aspect scalars are recomputed assuming a symmetric
    /// frustum; for an asymmetric frustum they become a lossy approximation.
    pub fn set_frustum(&mut self, frustum: Frustum) {
        self.frustum = frustum;
        self.fovy_rad = 2.0 * (frustum.top() / frustum.near()).atan();
        self.aspect = frustum.right() / frustum.top();

        self.rebuild_projection();
    }

    /// Rescale the horizontal bounds to a new aspect ratio, keeping the
    /// vertical bounds and near/far planes fixed.
    pub fn set_aspect(&mut self, aspect: f32) {
        debug_assert!(aspect > 0.0, "aspect ratio must be positive");

        self.aspect = aspect;
        let right = self.frustum.top() * aspect;
        self.frustum = Frustum::new(
            -right,
            right,
            self.frustum.bottom(),
            self.frustum.top(),
            self.frustum.near(),
            self.frustum.far(),
        );

        self.rebuild_projection();
    }

    /// Set the perspective from an options preset.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.set_perspective(
            options.fovy,
            options.aspect,
            options.znear,
            options.zfar,
        );
    }

    /// Move the camera to a world-space position.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.rebuild_modelview();
    }

    /// Replace the orientation (normalized after assignment).
    pub fn set_orientation(&mut self, orientation: Quat) {
        self.orientation = orientation.normalize();
        self.rebuild_modelview();
    }

    /// Replace the orientation from a rotation matrix.
    pub fn set_orientation_matrix(&mut self, orientation: Mat3) {
        self.set_orientation(Quat::from_mat3(&orientation));
    }

    /// Compose `rotation` on the right of the current orientation (a
    /// rotation in the camera's local frame) and renormalize.
    pub fn rotate(&mut self, rotation: Quat) {
        self.orientation = (self.orientation * rotation).normalize();
        self.rebuild_modelview();
    }

    /// Compose a rotation given as a matrix.
    pub fn rotate_matrix(&mut self, rotation: Mat3) {
        self.rotate(Quat::from_mat3(&rotation));
    }

    /// Translate the camera in world space.
    pub fn translate(&mut self, translation: Vec3) {
        self.position += translation;
        self.rebuild_modelview();
    }

    /// Record the normalized pointer position (`[0, 1]²`, origin top-left)
    /// starting a drag.
    pub fn trackball_begin_motion(&mut self, x: f32, y: f32) {
        self.begin = Vec2::new(x, y);
    }

    /// Rotate by the trackball increment between the recorded begin point
    /// and `(x, y)`, then re-arm the begin point so end calls can chain
    /// through a multi-segment drag.
    pub fn trackball_end_motion_rotate(&mut self, x: f32, y: f32) {
        let u0 = to_ndc(self.begin);
        let u1 = to_ndc(Vec2::new(x, y));

        self.rotate(self.trackball.rotation(u0, u1));

        self.trackball_begin_motion(x, y);
    }

    /// Dolly along z by twice the vertical drag delta, then re-arm.
    pub fn trackball_end_motion_zoom(&mut self, x: f32, y: f32) {
        let dy = y - self.begin.y;

        self.translate(Vec3::new(0.0, 0.0, 2.0 * dy));

        self.trackball_begin_motion(x, y);
    }

    /// Pan by the drag delta (y inverted for the top-left window origin),
    /// then re-arm.
    pub fn trackball_end_motion_translate(&mut self, x: f32, y: f32) {
        let dx = x - self.begin.x;
        let dy = y - self.begin.y;

        self.translate(Vec3::new(2.0 * dx, -2.0 * dy, 0.0));

        self.trackball_begin_motion(x, y);
    }

    /// Reconstruct the frustum that would have produced `mvp` and adopt it.
    ///
    /// Reads the six clip planes off the matrix rows, then recovers each
    /// scalar bound from a triple-plane corner point: with model/view at
    /// identity the near-left-bottom corner sits at `(left, bottom, -near)`
    /// in camera space (the camera looks down -z), which pins down the
    /// component selection.
    ///
    /// # Errors
    ///
    /// [`VantageError::DegenerateFrustum`] when any corner system is
    /// singular (linearly dependent clip planes, e.g. an orthographic or
    /// otherwise non-perspective matrix). No state changes in that case.
    pub fn set_frustum_from_mvp(
        &mut self,
        mvp: &Mat4,
    ) -> Result<(), VantageError> {
        let [left, right, bottom, top, near, far] = frustum_planes(mvp);

        let corners = (
            Plane::intersect3(&near, &left, &bottom),
            Plane::intersect3(&near, &right, &bottom),
            Plane::intersect3(&near, &left, &top),
            Plane::intersect3(&far, &left, &bottom),
        );
        let (Some(near_lb), Some(near_rb), Some(near_lt), Some(far_lb)) =
            corners
        else {
            log::warn!(
                "degenerate clip planes in MVP matrix, keeping current frustum"
            );
            return Err(VantageError::DegenerateFrustum);
        };

        self.set_frustum(Frustum::new(
            near_lb.x,
            near_rb.x,
            near_lb.y,
            near_lt.y,
            -near_lb.z,
            -far_lb.z,
        ));

        let f = self.frustum;
        log::debug!(
            "reconstructed frustum from MVP: l {} r {} b {} t {} n {} f {}",
            f.left(),
            f.right(),
            f.bottom(),
            f.top(),
            f.near(),
            f.far()
        );

        Ok(())
    }

    /// Rebuild the projection matrix from the six frustum bounds.
    ///
    /// Standard OpenGL asymmetric-frustum perspective matrix: off-diagonal
    /// terms of the third column encode skew for non-symmetric frustums,
    /// the remaining terms map depth to the `[-1, 1]` clip range.
    fn rebuild_projection(&mut self) {
        let l = self.frustum.left();
        let r = self.frustum.right();
        let b = self.frustum.bottom();
        let t = self.frustum.top();
        let n = self.frustum.near();
        let f = self.frustum.far();

        let projection = Mat4::from_cols(
            Vec4::new(2.0 * n / (r - l), 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 * n / (t - b), 0.0, 0.0),
            Vec4::new(
                (r + l) / (r - l),
                (t + b) / (t - b),
                -(f + n) / (f - n),
                -1.0,
            ),
            Vec4::new(0.0, 0.0, -2.0 * n * f / (f - n), 0.0),
        );

        self.camera.set_projection_matrix(projection);
    }

    /// Rebuild the view and model matrices from orientation and position.
    ///
    /// The view matrix carries only the inverse rotation; translation is
    /// carried entirely by the model matrix. Renderers consuming both
    /// matrices see the combined transform.
    fn rebuild_modelview(&mut self) {
        self.camera
            .set_view_matrix(Mat4::from_quat(self.orientation.inverse()));
        self.camera
            .set_model_matrix(Mat4::from_translation(self.position));
    }
}

/// Remap a `[0, 1]²` top-left-origin window coordinate into the `[-1, 1]²`
/// right-handed (y up) trackball convention.
fn to_ndc(p: Vec2) -> Vec2 {
    Vec2::new(2.0 * p.x - 1.0, 1.0 - 2.0 * p.y)
}
