use std::thread;
use std::time::{Duration, Instant};

use crate::camera::{EulerCamera, Movement};
use crate::errors::*;
use crate::input::{InputSystem, Key};
use crate::math::Vector2;
use crate::video::{self, Capabilities, Version};

use super::settings::Settings;
use super::time::{FpsCounter, FrameTimer};
use super::window::Window;
use super::Application;

/// The gray every demo clears the screen with, unless it sets its own.
pub const CLEAR_COLOR: [f32; 4] = [0.3, 0.3, 0.3, 1.0];

/// The per-frame state handed to `Application::on_update`.
#[derive(Debug)]
pub struct Context {
    pub camera: EulerCamera,
    pub input: InputSystem,

    delta: f32,
    elapsed: f32,
    dimensions: Vector2<u32>,
    wireframe: bool,
    shutdown: bool,
}

impl Context {
    fn new() -> Self {
        Context {
            camera: EulerCamera::default(),
            input: InputSystem::new(),
            delta: 0.0,
            elapsed: 0.0,
            dimensions: Vector2::new(0, 0),
            wireframe: false,
            shutdown: false,
        }
    }

    /// Shutdown the whole application at the end of this frame.
    #[inline]
    pub fn shutdown(&mut self) {
        self.shutdown = true;
    }

    /// Returns true if we are going to shutdown the application at the end of
    /// this frame.
    #[inline]
    pub fn is_shutdown(&self) -> bool {
        self.shutdown
    }

    /// Seconds since the previous frame.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Seconds since the engine started.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// The size in pixels of the default framebuffer.
    #[inline]
    pub fn dimensions(&self) -> Vector2<u32> {
        self.dimensions
    }

    /// Width over height of the default framebuffer, 1 while minimized.
    pub fn aspect(&self) -> f32 {
        if self.dimensions.x == 0 || self.dimensions.y == 0 {
            1.0
        } else {
            self.dimensions.x as f32 / self.dimensions.y as f32
        }
    }

    #[inline]
    pub fn is_wireframe(&self) -> bool {
        self.wireframe
    }

    /// Drives the camera with the standard controls: `WASD` to move, `Space`
    /// and `LControl` to rise and sink, `LShift` to accelerate, the mouse to
    /// look around and the wheel to zoom.
    pub fn update_camera(&mut self) {
        let dt = self.delta;
        let input = &self.input;
        let camera = &mut self.camera;

        let moves = [
            (Key::W, Movement::Forward),
            (Key::S, Movement::Backward),
            (Key::A, Movement::Left),
            (Key::D, Movement::Right),
            (Key::Space, Movement::Up),
            (Key::LControl, Movement::Down),
        ];

        camera.process_accelerate(input.is_key_down(Key::LShift));
        for &(key, movement) in &moves {
            if input.is_key_down(key) {
                camera.process_keyboard(movement, dt);
            }
        }

        let movement = input.mouse_movement();
        if movement.x != 0.0 || movement.y != 0.0 {
            camera.process_mouse(movement.x, -movement.y, true);
        }

        let scroll = input.mouse_scroll();
        if scroll.y != 0.0 {
            camera.process_scroll(scroll.y);
        }
    }
}

/// `Engine` is the root object of a demo. It owns the window and its context,
/// and runs the frame loop.
pub struct Engine {
    window: Window,
    capabilities: Capabilities,
    context: Context,
    settings: Settings,
}

impl Engine {
    /// Creates the window, checks that the context is able to run the demos,
    /// and sets up the global pipeline state.
    pub fn new(settings: Settings) -> Result<Self> {
        let window = Window::new(&settings.window)?;

        let capabilities = unsafe { Capabilities::query()? };
        info!("{:#?}", capabilities);
        capabilities.require(Version::GL(3, 3))?;

        if settings.engine.capture_cursor {
            window.capture_cursor(true);
        }

        video::reset_render_state();
        video::clear(Some(CLEAR_COLOR), true);
        video::check()?;

        let mut context = Context::new();
        context.dimensions = window.dimensions();

        Ok(Engine {
            window,
            capabilities,
            context,
            settings,
        })
    }

    #[inline]
    pub fn context(&self) -> &Context {
        &self.context
    }

    #[inline]
    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }

    #[inline]
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[inline]
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Runs the frame loop until the window is closed, `Escape` is pressed or
    /// the application asks for shutdown. The application is dropped before
    /// returning, while the context is still alive.
    pub fn run<T: Application>(mut self, mut application: T) -> Result<()> {
        let params = self.settings.engine.clone();
        let mut timer = FrameTimer::new();
        let mut fps = FpsCounter::with_start(self.settings.window.title.clone(), params.fps_refresh, timer.now());

        let result = loop {
            let ts = Instant::now();

            timer.step(ts);
            if let Some(title) = fps.tick(ts) {
                self.window.set_title(&title);
            }

            self.context.delta = timer.delta();
            self.context.elapsed = timer.elapsed();

            self.context.input.advance();
            let alive = self.window.poll_events(&mut self.context.input);
            self.context.dimensions = self.window.dimensions();

            if !alive || self.context.input.is_key_press(Key::Escape) {
                break Ok(());
            }

            self.context.update_camera();

            if self.context.input.is_key_press(Key::L) {
                self.context.wireframe = !self.context.wireframe;
                video::set_wireframe(self.context.wireframe);
            }

            if let Err(err) = application.on_update(&mut self.context) {
                break Err(err);
            }

            if let Err(err) = self.window.swap_buffers() {
                break Err(err);
            }

            if self.context.is_shutdown() {
                break Ok(());
            }

            if params.max_fps > 0 {
                let td = Duration::from_millis(u64::from(1000 / params.max_fps));
                let spent = ts.elapsed();
                if spent < td {
                    thread::sleep(td - spent);
                }
            }
        };

        let exit = application.on_exit(&mut self.context);
        drop(application);

        result.and(exit)
    }
}
