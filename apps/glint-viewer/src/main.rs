use anyhow::Result;
use clap::Parser;
use glam::Vec3;
use glint_camera::Camera;
use glint_input::{Action, InputState};
use glint_render::FrameView;
use glow::HasContext;
use glutin::config::ConfigTemplateBuilder;
use glutin::context::{ContextApi, ContextAttributesBuilder, PossiblyCurrentContext, Version};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use scene::{DemoKind, Scene};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

mod scene;
mod scenes;

#[derive(Parser)]
#[command(name = "glint-viewer", about = "Windowed rendering demos")]
struct Cli {
    /// Which demo to run
    #[arg(long, value_enum, default_value_t = DemoKind::Meshes)]
    demo: DemoKind,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Initial window width in pixels
    #[arg(long, default_value_t = 1200)]
    width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 800)]
    height: u32,
}

fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::KeyW | KeyCode::ArrowUp => Some(Action::MoveForward),
        KeyCode::KeyS | KeyCode::ArrowDown => Some(Action::MoveBackward),
        KeyCode::KeyA | KeyCode::ArrowLeft => Some(Action::MoveLeft),
        KeyCode::KeyD | KeyCode::ArrowRight => Some(Action::MoveRight),
        KeyCode::Tab => Some(Action::ToggleMouseLook),
        KeyCode::Escape => Some(Action::Exit),
        _ => None,
    }
}

/// Everything that changes frame to frame, owned in one place and passed
/// by reference.
struct AppState {
    camera: Camera,
    input: InputState,
    started: Instant,
    last_frame: Instant,
    show_overlay: bool,
}

impl AppState {
    fn new() -> Self {
        let now = Instant::now();
        Self {
            camera: Camera::at(Vec3::new(0.0, 1.5, 8.0)),
            input: InputState::new(),
            started: now,
            last_frame: now,
            show_overlay: true,
        }
    }

    /// Drain accumulated input into the camera and build this frame's view.
    fn begin_frame(&mut self, aspect: f32) -> FrameView {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32().min(0.1);
        self.last_frame = now;

        self.camera.process_keyboard(self.input.movement(), dt);
        let (dx, dy) = self.input.take_mouse_delta();
        if dx != 0.0 || dy != 0.0 {
            self.camera.process_mouse_movement(dx, -dy, true);
        }
        let scroll = self.input.take_scroll();
        if scroll != 0.0 {
            self.camera.process_mouse_scroll(scroll);
        }

        FrameView {
            view: self.camera.view_matrix(),
            projection: self.camera.projection_matrix(aspect),
            view_pos: self.camera.position(),
            view_front: self.camera.front(),
            time: (now - self.started).as_secs_f32(),
            dt,
        }
    }
}

/// GL objects that only exist between `resumed` and teardown.
struct GlState {
    window: Window,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    gl: Arc<glow::Context>,
}

struct ViewerApp {
    demo: DemoKind,
    size: PhysicalSize<u32>,
    state: AppState,
    gl_state: Option<GlState>,
    scene: Option<Box<dyn Scene>>,
    egui_glow: Option<egui_glow::EguiGlow>,
}

impl ViewerApp {
    fn new(cli: &Cli) -> Self {
        Self {
            demo: cli.demo,
            size: PhysicalSize::new(cli.width.max(1), cli.height.max(1)),
            state: AppState::new(),
            gl_state: None,
            scene: None,
            egui_glow: None,
        }
    }

    fn teardown(&mut self) {
        let Some(gl_state) = &self.gl_state else {
            return;
        };
        if let Some(mut scene) = self.scene.take() {
            scene.destroy(&gl_state.gl);
        }
        if let Some(egui_glow) = &mut self.egui_glow {
            egui_glow.destroy();
        }
        self.egui_glow = None;
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(gl_state) = &self.gl_state else {
            return;
        };
        let gl = &gl_state.gl;

        let aspect = self.size.width as f32 / self.size.height.max(1) as f32;
        let frame = self.state.begin_frame(aspect);

        unsafe {
            gl.enable(glow::DEPTH_TEST);
            gl.clear_color(0.08, 0.08, 0.1, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        if let Some(scene) = &mut self.scene {
            scene.draw(gl, &frame);
        }

        if let Some(egui_glow) = &mut self.egui_glow {
            let state = &mut self.state;
            let scene = &mut self.scene;
            egui_glow.run(&gl_state.window, |ctx| {
                if !state.show_overlay {
                    return;
                }
                let title = scene.as_ref().map_or("glint", |s| s.name());
                egui::Window::new(title)
                    .default_width(260.0)
                    .show(ctx, |ui| {
                        if let Some(scene) = scene {
                            scene.ui(ui, &mut state.camera);
                            ui.separator();
                        }
                        ui.label(format!("Fov: {:.1}", state.camera.fov()));
                        ui.small("RMB or Tab: look | WASD: move | scroll: zoom");
                        ui.small("F1: toggle overlay | Esc: quit");
                    });
            });
            egui_glow.paint(&gl_state.window);
        }

        if let Err(err) = gl_state.surface.swap_buffers(&gl_state.context) {
            tracing::error!("swap_buffers failed: {err}");
            event_loop.exit();
        }
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, key: KeyCode, pressed: bool) {
        if key == KeyCode::F1 && pressed {
            self.state.show_overlay = !self.state.show_overlay;
            return;
        }
        let Some(action) = action_for(key) else {
            return;
        };
        if action == Action::Exit {
            if pressed {
                event_loop.exit();
            }
            return;
        }
        let was_looking = self.state.input.mouse_look();
        self.state.input.set_action(action, pressed);
        if self.state.input.mouse_look() != was_looking {
            self.sync_cursor();
        }
    }

    fn sync_cursor(&self) {
        if let Some(gl_state) = &self.gl_state {
            gl_state
                .window
                .set_cursor_visible(!self.state.input.mouse_look());
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gl_state.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("glint viewer")
            .with_inner_size(self.size);
        let template = ConfigTemplateBuilder::new().with_depth_size(24);
        let display_builder = DisplayBuilder::new().with_window_attributes(Some(attrs));

        let (window, gl_config) = display_builder
            .build(event_loop, template, |configs| {
                configs
                    .reduce(|best, next| {
                        if next.num_samples() > best.num_samples() {
                            next
                        } else {
                            best
                        }
                    })
                    .expect("at least one GL config")
            })
            .expect("create window and pick GL config");
        let window = window.expect("display builder returns a window");

        let raw_window_handle = window.window_handle().ok().map(|handle| handle.as_raw());
        let gl_display = gl_config.display();
        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .build(raw_window_handle);
        let not_current = unsafe { gl_display.create_context(&gl_config, &context_attributes) }
            .expect("create GL 3.3 context");

        let surface_attributes = window
            .build_surface_attributes(Default::default())
            .expect("build surface attributes");
        let surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attributes) }
            .expect("create window surface");
        let context = not_current
            .make_current(&surface)
            .expect("make context current");
        if let Err(err) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN))
        {
            tracing::warn!("vsync unavailable: {err}");
        }

        let gl = Arc::new(unsafe {
            glow::Context::from_loader_function_cstr(|name| gl_display.get_proc_address(name))
        });
        let size = window.inner_size();
        self.size = size;
        unsafe { gl.viewport(0, 0, size.width as i32, size.height as i32) }

        let scene = scene::create_scene(&gl, self.demo).expect("upload demo scene");
        tracing::info!(demo = scene.name(), "GL context ready");

        self.egui_glow = Some(egui_glow::EguiGlow::new(
            event_loop,
            gl.clone(),
            None,
            None,
            true,
        ));
        self.scene = Some(scene);
        self.gl_state = Some(GlState {
            window,
            surface,
            context,
            gl,
        });
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // While looking around, the pointer belongs to the camera.
        if !self.state.input.mouse_look() {
            if let (Some(egui_glow), Some(gl_state)) = (&mut self.egui_glow, &self.gl_state) {
                let response = egui_glow.on_window_event(&gl_state.window, &event);
                if response.consumed {
                    return;
                }
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                self.teardown();
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                self.size = PhysicalSize::new(new_size.width.max(1), new_size.height.max(1));
                if let Some(gl_state) = &self.gl_state {
                    if let (Some(width), Some(height)) = (
                        NonZeroU32::new(self.size.width),
                        NonZeroU32::new(self.size.height),
                    ) {
                        gl_state.surface.resize(&gl_state.context, width, height);
                    }
                    unsafe {
                        gl_state.gl.viewport(
                            0,
                            0,
                            self.size.width as i32,
                            self.size.height as i32,
                        )
                    }
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                self.handle_key(event_loop, key, key_state == ElementState::Pressed);
            }
            WindowEvent::MouseInput {
                button: MouseButton::Right,
                state: btn_state,
                ..
            } => {
                self.state
                    .input
                    .set_mouse_look(btn_state == ElementState::Pressed);
                self.sync_cursor();
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 40.0,
                };
                self.state.input.push_scroll(lines);
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.state
                .input
                .push_mouse_delta(delta.0 as f32, delta.1 as f32);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gl_state) = &self.gl_state {
            gl_state.window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!(demo = ?cli.demo, "glint-viewer starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = ViewerApp::new(&cli);
    event_loop.run_app(&mut app)?;

    Ok(())
}
