//! Window-event adapter for trackball navigation.
//!
//! Translates `winit` window events into the [`SceneCamera`] trackball
//! protocol: a button press arms the drag, cursor motion while pressed
//! issues the matching end-motion call, and resizes update the aspect ratio.

use glam::Vec2;
use winit::event::{ElementState, MouseButton, WindowEvent};

use crate::camera::scene::SceneCamera;
use crate::options::CameraOptions;

/// Drag style selected by the pressed mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragMode {
    Rotate,
    Zoom,
    Translate,
}

/// Translates window events into camera navigation.
///
/// Tracks the window size so cursor positions can be normalized into the
/// `[0, 1]²` coordinate space the trackball protocol expects. Drag deltas
/// are scaled by the per-mode sensitivity before being handed to the
/// camera.
#[derive(Debug)]
pub struct InputHandler {
    window_size: Vec2,
    cursor: Vec2,
    /// Normalized cursor position at the last press or dispatched drag step.
    last_drag_pos: Vec2,
    drag: Option<DragMode>,
    shift_pressed: bool,
    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
}

impl InputHandler {
    /// Create a handler for a window of the given initial size in pixels,
    /// with unit drag sensitivities.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            window_size: window_size(width, height),
            cursor: Vec2::ZERO,
            last_drag_pos: Vec2::ZERO,
            drag: None,
            shift_pressed: false,
            rotate_speed: 1.0,
            pan_speed: 1.0,
            zoom_speed: 1.0,
        }
    }

    /// Take drag sensitivities from an options preset.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.rotate_speed = options.rotate_speed;
        self.pan_speed = options.pan_speed;
        self.zoom_speed = options.zoom_speed;
    }

    /// Feed one window event into the camera.
    ///
    /// Left drag rotates, right drag zooms, middle drag (or shift + left)
    /// pans. Returns `true` if the event was consumed by the camera.
    pub fn handle_event(
        &mut self,
        camera: &mut SceneCamera,
        event: &WindowEvent,
    ) -> bool {
        match event {
            WindowEvent::Resized(size) => {
                self.window_size = window_size(size.width, size.height);
                camera.set_aspect(self.window_size.x / self.window_size.y);
                false
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.shift_pressed = modifiers.state().shift_key();
                false
            }
            WindowEvent::MouseInput { button, state, .. } => {
                self.handle_button(camera, *button, *state)
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = normalized(
                    Vec2::new(position.x as f32, position.y as f32),
                    self.window_size,
                );
                if let Some(mode) = self.drag {
                    self.dispatch_drag(camera, mode);
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    fn handle_button(
        &mut self,
        camera: &mut SceneCamera,
        button: MouseButton,
        state: ElementState,
    ) -> bool {
        let mode = match button {
            MouseButton::Left if self.shift_pressed => DragMode::Translate,
            MouseButton::Left => DragMode::Rotate,
            MouseButton::Right => DragMode::Zoom,
            MouseButton::Middle => DragMode::Translate,
            _ => return false,
        };

        if state == ElementState::Pressed {
            camera.trackball_begin_motion(self.cursor.x, self.cursor.y);
            self.last_drag_pos = self.cursor;
            self.drag = Some(mode);
        } else {
            self.drag = None;
        }
        true
    }

    /// Hand one drag step to the camera, scaling the delta by the mode's
    /// sensitivity.
    fn dispatch_drag(&mut self, camera: &mut SceneCamera, mode: DragMode) {
        let speed = match mode {
            DragMode::Rotate => self.rotate_speed,
            DragMode::Zoom => self.zoom_speed,
            DragMode::Translate => self.pan_speed,
        };
        let end =
            self.last_drag_pos + (self.cursor - self.last_drag_pos) * speed;

        camera.trackball_begin_motion(
            self.last_drag_pos.x,
            self.last_drag_pos.y,
        );
        match mode {
            DragMode::Rotate => camera.trackball_end_motion_rotate(end.x, end.y),
            DragMode::Zoom => camera.trackball_end_motion_zoom(end.x, end.y),
            DragMode::Translate => {
                camera.trackball_end_motion_translate(end.x, end.y);
            }
        }

        self.last_drag_pos = self.cursor;
    }
}

/// Window size as floats, guarding against zero-sized surfaces during
/// minimization.
fn window_size(width: u32, height: u32) -> Vec2 {
    Vec2::new((width.max(1)) as f32, (height.max(1)) as f32)
}

/// Normalize a pixel position into `[0, 1]²` window-relative coordinates.
fn normalized(position: Vec2, size: Vec2) -> Vec2 {
    (position / size).clamp(Vec2::ZERO, Vec2::ONE)
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};
    use winit::dpi::{PhysicalPosition, PhysicalSize};
    use winit::event::DeviceId;
    use winit::keyboard::ModifiersState;

    use super::*;

    fn cursor_moved(x: f64, y: f64) -> WindowEvent {
        WindowEvent::CursorMoved {
            device_id: DeviceId::dummy(),
            position: PhysicalPosition::new(x, y),
        }
    }

    fn mouse_input(button: MouseButton, state: ElementState) -> WindowEvent {
        WindowEvent::MouseInput {
            device_id: DeviceId::dummy(),
            state,
            button,
        }
    }

    #[test]
    fn motion_without_a_button_is_not_consumed() {
        let mut handler = InputHandler::new(800, 600);
        let mut camera = SceneCamera::new();

        assert!(!handler.handle_event(&mut camera, &cursor_moved(400.0, 300.0)));
        assert_eq!(camera.orientation(), Quat::IDENTITY);
        assert_eq!(camera.position(), Vec3::ZERO);
    }

    #[test]
    fn left_press_arms_a_rotate_drag() {
        let mut handler = InputHandler::new(800, 600);
        let mut camera = SceneCamera::new();

        let _ = handler.handle_event(&mut camera, &cursor_moved(400.0, 300.0));
        assert!(handler.handle_event(
            &mut camera,
            &mouse_input(MouseButton::Left, ElementState::Pressed),
        ));
        assert!(handler.handle_event(&mut camera, &cursor_moved(480.0, 300.0)));

        assert!(camera.orientation().angle_between(Quat::IDENTITY) > 1e-3);
        assert_eq!(camera.position(), Vec3::ZERO);
    }

    #[test]
    fn release_disarms_the_drag() {
        let mut handler = InputHandler::new(800, 600);
        let mut camera = SceneCamera::new();

        let _ = handler.handle_event(&mut camera, &cursor_moved(400.0, 300.0));
        let _ = handler.handle_event(
            &mut camera,
            &mouse_input(MouseButton::Left, ElementState::Pressed),
        );
        assert!(handler.handle_event(
            &mut camera,
            &mouse_input(MouseButton::Left, ElementState::Released),
        ));

        let before = camera.orientation();
        assert!(!handler.handle_event(&mut camera, &cursor_moved(480.0, 300.0)));
        assert_eq!(camera.orientation(), before);
    }

    #[test]
    fn right_drag_zooms() {
        let mut handler = InputHandler::new(800, 600);
        let mut camera = SceneCamera::new();

        let _ = handler.handle_event(&mut camera, &cursor_moved(400.0, 300.0));
        let _ = handler.handle_event(
            &mut camera,
            &mouse_input(MouseButton::Right, ElementState::Pressed),
        );
        // 60 px down = 0.1 of the window height; dolly = 2 * dy.
        assert!(handler.handle_event(&mut camera, &cursor_moved(400.0, 360.0)));

        assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 0.0, 0.2), 1e-5));
        assert_eq!(camera.orientation(), Quat::IDENTITY);
    }

    #[test]
    fn middle_drag_pans() {
        let mut handler = InputHandler::new(800, 600);
        let mut camera = SceneCamera::new();

        let _ = handler.handle_event(&mut camera, &cursor_moved(400.0, 300.0));
        let _ = handler.handle_event(
            &mut camera,
            &mouse_input(MouseButton::Middle, ElementState::Pressed),
        );
        // 80 px right, 60 px up: dx = 0.1, dy = -0.1.
        assert!(handler.handle_event(&mut camera, &cursor_moved(480.0, 240.0)));

        assert!(camera.position().abs_diff_eq(Vec3::new(0.2, 0.2, 0.0), 1e-5));
    }

    #[test]
    fn shift_left_drag_pans() {
        let mut handler = InputHandler::new(800, 600);
        let mut camera = SceneCamera::new();

        let _ = handler.handle_event(
            &mut camera,
            &WindowEvent::ModifiersChanged(ModifiersState::SHIFT.into()),
        );
        let _ = handler.handle_event(&mut camera, &cursor_moved(400.0, 300.0));
        let _ = handler.handle_event(
            &mut camera,
            &mouse_input(MouseButton::Left, ElementState::Pressed),
        );
        let _ = handler.handle_event(&mut camera, &cursor_moved(480.0, 300.0));

        assert_eq!(camera.orientation(), Quat::IDENTITY);
        assert!(camera.position().abs_diff_eq(Vec3::new(0.2, 0.0, 0.0), 1e-5));
    }

    #[test]
    fn resize_updates_aspect_ratio() {
        let mut handler = InputHandler::new(800, 600);
        let mut camera = SceneCamera::new();

        let consumed = handler.handle_event(
            &mut camera,
            &WindowEvent::Resized(PhysicalSize::new(1000, 500)),
        );

        assert!(!consumed);
        assert!((camera.aspect() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn sensitivities_scale_drag_deltas() {
        let mut handler = InputHandler::new(800, 600);
        handler.apply_options(&CameraOptions {
            zoom_speed: 0.5,
            ..CameraOptions::default()
        });
        let mut camera = SceneCamera::new();

        let _ = handler.handle_event(&mut camera, &cursor_moved(400.0, 300.0));
        let _ = handler.handle_event(
            &mut camera,
            &mouse_input(MouseButton::Right, ElementState::Pressed),
        );
        // 120 px down = dy 0.2, halved by the sensitivity; dolly = 2 * 0.1.
        let _ = handler.handle_event(&mut camera, &cursor_moved(400.0, 420.0));

        assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 0.0, 0.2), 1e-5));
    }

    #[test]
    fn scaled_drags_chain_across_steps() {
        let mut handler = InputHandler::new(800, 600);
        handler.apply_options(&CameraOptions {
            zoom_speed: 0.5,
            ..CameraOptions::default()
        });
        let mut camera = SceneCamera::new();

        let _ = handler.handle_event(&mut camera, &cursor_moved(400.0, 300.0));
        let _ = handler.handle_event(
            &mut camera,
            &mouse_input(MouseButton::Right, ElementState::Pressed),
        );
        let _ = handler.handle_event(&mut camera, &cursor_moved(400.0, 360.0));
        let _ = handler.handle_event(&mut camera, &cursor_moved(400.0, 420.0));

        // Two 60 px steps, each halved: 2 * (2 * 0.05).
        assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 0.0, 0.2), 1e-5));
    }

    #[test]
    fn normalization_maps_corners() {
        let size = Vec2::new(800.0, 600.0);
        assert_eq!(normalized(Vec2::ZERO, size), Vec2::ZERO);
        assert_eq!(normalized(Vec2::new(800.0, 600.0), size), Vec2::ONE);
        assert_eq!(
            normalized(Vec2::new(400.0, 300.0), size),
            Vec2::new(0.5, 0.5)
        );
    }

    #[test]
    fn normalization_clamps_outside_positions() {
        let size = Vec2::new(800.0, 600.0);
        assert_eq!(normalized(Vec2::new(-10.0, 700.0), size), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn zero_sized_window_is_guarded() {
        let size = window_size(0, 0);
        assert_eq!(size, Vec2::ONE);
    }
}
