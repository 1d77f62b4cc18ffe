// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera and view-volume subsystem for real-time 3D visualization.
//!
//! Vantage maintains a movable scene camera, derives the model/view/
//! projection transforms a rendering pipeline consumes each frame, and maps
//! 2D pointer drags to 3D rotations (trackball navigation). It also solves
//! the inverse problem: reconstructing a six-bound perspective frustum from
//! an arbitrary combined model-view-projection matrix via clip-plane
//! extraction and triple-plane intersection.
//!
//! # Key entry points
//!
//! - [`camera::scene::SceneCamera`] - the interactive camera owning all
//!   derivation logic
//! - [`camera::core::Camera`] - the passive transform cache the renderer
//!   reads
//! - [`camera::frustum::Frustum`] - the six-bound perspective view volume
//! - [`options::Options`] - runtime configuration with TOML preset support
//!
//! # Conventions
//!
//! All matrices are column-major `glam` types following the OpenGL clip-space
//! convention (depth range `[-1, 1]` before the viewport transform). Pointer
//! coordinates handed to the trackball protocol are window-relative in
//! `[0, 1]²` with the origin at the top-left corner.
//!
//! The subsystem is single-threaded by design: one [`camera::scene::SceneCamera`]
//! per view session, mutated exclusively from the thread driving the
//! render/input loop.

pub mod camera;
pub mod error;
pub mod options;
