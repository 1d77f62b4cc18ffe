//! Camera system for 3D scene viewing.
//!
//! Provides a trackball-navigated scene camera, the transform cache a
//! renderer reads each frame, and frustum reconstruction from a combined
//! model-view-projection matrix.

/// Passive transform cache and GPU uniform types.
pub mod core;
/// View-volume bounds, clip planes, and plane-intersection arithmetic.
pub mod frustum;
/// Window-event-based camera input handler.
#[cfg(feature = "viewer")]
pub mod input;
/// Interactive scene camera deriving transforms from position, orientation,
/// and frustum.
pub mod scene;
/// Pointer-drag to rotation mapping.
pub mod trackball;
