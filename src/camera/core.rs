use glam::{Mat4, Vec3};

/// Passive cache of the four transforms a renderer consumes.
///
/// Holds the most recently computed model, view, and projection matrices plus
/// a world-space position offset. Reads never recompute anything; every
/// mutation happens through an explicit setter. Derivation logic lives in
/// [`crate::camera::scene::SceneCamera`], which writes into this cache.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    model: Mat4,
    view: Mat4,
    projection: Mat4,
    position_offset: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            model: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            position_offset: Vec3::ZERO,
        }
    }
}

impl Camera {
    /// Create a transform cache with identity matrices and zero offset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently stored model matrix.
    #[must_use]
    pub const fn model_matrix(&self) -> Mat4 {
        self.model
    }

    /// Currently stored view matrix.
    #[must_use]
    pub const fn view_matrix(&self) -> Mat4 {
        self.view
    }

    /// Currently stored projection matrix.
    #[must_use]
    pub const fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    /// Currently stored world-space position offset.
    #[must_use]
    pub const fn position_offset(&self) -> Vec3 {
        self.position_offset
    }

    /// Replace the model matrix unconditionally.
    pub fn set_model_matrix(&mut self, model: Mat4) {
        self.model = model;
    }

    /// Replace the view matrix unconditionally.
    pub fn set_view_matrix(&mut self, view: Mat4) {
        self.view = view;
    }

    /// Replace the projection matrix unconditionally.
    pub fn set_projection_matrix(&mut self, projection: Mat4) {
        self.projection = projection;
    }

    /// Replace the position offset unconditionally.
    pub fn set_position_offset(&mut self, position: Vec3) {
        self.position_offset = position;
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer layout holding the camera transforms.
///
/// Matches a std140-style uniform block: three column-major 4x4 matrices
/// followed by a padded vec3. The render loop refreshes it once per frame
/// from the [`Camera`] cache and memcpys it into a uniform buffer.
pub struct CameraUniform {
    /// Model matrix (world placement).
    pub model: [[f32; 4]; 4],
    /// View matrix (inverse camera rotation).
    pub view: [[f32; 4]; 4],
    /// Projection matrix.
    pub projection: [[f32; 4]; 4],
    /// Camera world-space position offset.
    pub position_offset: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity transforms.
    #[must_use]
    pub fn new() -> Self {
        Self {
            model: Mat4::IDENTITY.to_cols_array_2d(),
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            position_offset: [0.0; 3],
            _pad: 0.0,
        }
    }

    /// Refresh all fields from the given transform cache.
    pub fn update(&mut self, camera: &Camera) {
        self.model = camera.model_matrix().to_cols_array_2d();
        self.view = camera.view_matrix().to_cols_array_2d();
        self.projection = camera.projection_matrix().to_cols_array_2d();
        self.position_offset = camera.position_offset().to_array();
    }
}
