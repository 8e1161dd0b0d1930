//! Window and event-loop wiring.
//!
//! One winit event loop drives everything: redraw requests tick the clock
//! and submit a frame, cursor events feed the orbit drag and the pointer
//! projection, and Space toggles the clock. The loop runs until the window
//! closes; there is no other termination condition.

use std::sync::Arc;

use glam::Vec2;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::pointer::ndc_from_pixels;
use crate::renderer::GpuState;
use crate::scene::Scene;
use crate::sprite::SpriteConfig;
use crate::RunError;

/// Run a scene in a window until it is closed.
///
/// Window or GPU acquisition failures during startup surface here as a
/// [`RunError`] once the event loop winds down.
pub fn run(scene: Scene, sprite: SpriteConfig) -> Result<(), RunError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(scene, sprite);
    event_loop.run_app(&mut app)?;
    match app.init_error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

struct App {
    scene: Scene,
    sprite: SpriteConfig,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    drag_active: bool,
    last_cursor_pos: Option<(f64, f64)>,
    /// Fatal startup failure, reported by `run` after the loop exits.
    init_error: Option<RunError>,
}

impl App {
    fn new(scene: Scene, sprite: SpriteConfig) -> Self {
        Self {
            scene,
            sprite,
            window: None,
            gpu_state: None,
            drag_active: false,
            last_cursor_pos: None,
            init_error: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let window_attrs = Window::default_attributes()
            .with_title(self.scene.title())
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.init_error = Some(e.into());
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(GpuState::new(window.clone(), &self.scene, &self.sprite)) {
            Ok(gpu_state) => {
                self.window = Some(window);
                self.gpu_state = Some(gpu_state);
            }
            Err(e) => {
                self.init_error = Some(e.into());
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && !event.repeat
                    && event.physical_key == PhysicalKey::Code(KeyCode::Space)
                {
                    self.scene.clock_mut().toggle();
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left {
                    self.drag_active = state == ElementState::Pressed;
                    if !self.drag_active {
                        self.last_cursor_pos = None;
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if self.drag_active {
                    if let Some((last_x, last_y)) = self.last_cursor_pos {
                        let dx = position.x - last_x;
                        let dy = position.y - last_y;

                        if let Some(gpu_state) = &mut self.gpu_state {
                            gpu_state.camera.yaw -= dx as f32 * 0.005;
                            gpu_state.camera.pitch += dy as f32 * 0.005;
                            gpu_state.camera.pitch = gpu_state.camera.pitch.clamp(-1.5, 1.5);
                        }
                    }
                    self.last_cursor_pos = Some((position.x, position.y));
                }

                if self.scene.is_interactive() {
                    if let Some(gpu_state) = &self.gpu_state {
                        let ndc = ndc_from_pixels(
                            Vec2::new(position.x as f32, position.y as f32),
                            gpu_state.config.width,
                            gpu_state.config.height,
                        );
                        let ray = gpu_state.camera.screen_ray(ndc);
                        // A miss keeps the previous point; nothing to do.
                        let _ = self.scene.project_pointer(&ray);
                    }
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.1,
                };
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.camera.distance -= scroll * 0.3;
                    gpu_state.camera.distance = gpu_state.camera.distance.clamp(0.5, 20.0);
                }
            }
            WindowEvent::RedrawRequested => {
                // A stopped clock means no uniform writes and no draw
                // submissions until restarted.
                if self.scene.tick() {
                    if let Some(gpu_state) = &mut self.gpu_state {
                        match gpu_state.render(&self.scene) {
                            Ok(()) => {}
                            Err(wgpu::SurfaceError::Lost) => {
                                gpu_state.resize(winit::dpi::PhysicalSize {
                                    width: gpu_state.config.width,
                                    height: gpu_state.config.height,
                                });
                            }
                            Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                            Err(e) => log::warn!("Render error: {:?}", e),
                        }
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
