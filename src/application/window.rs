//! The glutin window, its OpenGL context and the translation of its events.

use gl;
use glutin;
use glutin::GlContext;

use crate::errors::*;
use crate::input::{InputEvent, InputSystem, Key};
use crate::math::Vector2;

use super::settings::WindowParams;

/// Represents an OpenGL context and the window around it.
pub struct Window {
    window: glutin::GlWindow,
    events_loop: glutin::EventsLoop,
}

impl Window {
    /// Creates a new `Window` with a core profile context, makes the context
    /// current and loads the OpenGL function pointers.
    pub fn new(params: &WindowParams) -> Result<Self> {
        let builder = glutin::WindowBuilder::new()
            .with_title(params.title.clone())
            .with_dimensions(glutin::dpi::LogicalSize::new(
                f64::from(params.size.x),
                f64::from(params.size.y),
            ));

        let (major, minor) = params.gl_version;
        let context = glutin::ContextBuilder::new()
            .with_multisampling(params.multisample)
            .with_gl_profile(glutin::GlProfile::Core)
            .with_gl(glutin::GlRequest::Specific(glutin::Api::OpenGl, (major, minor)))
            .with_vsync(params.vsync);

        let events_loop = glutin::EventsLoop::new();
        let window = glutin::GlWindow::new(builder, context, &events_loop).map_err(Error::from)?;

        unsafe {
            window.make_current().map_err(Error::from)?;
            gl::load_with(|symbol| window.get_proc_address(symbol) as *const _);
        }

        let mut window = Window {
            window,
            events_loop,
        };

        window.events_loop.poll_events(|_| {});
        let dimensions = window.dimensions();
        window.resize(dimensions);

        info!(
            "Created window {:?} with {}x{} pixels (hidpi {}).",
            params.title,
            dimensions.x,
            dimensions.y,
            window.hidpi()
        );

        Ok(window)
    }

    /// Grabs and hides the cursor. Failing to grab is not fatal, mouse look
    /// just stops at the screen borders.
    pub fn capture_cursor(&self, capture: bool) {
        if let Err(err) = self.window.grab_cursor(capture) {
            warn!("Failed to grab cursor: {}", err);
        }

        self.window.hide_cursor(capture);
    }

    #[inline]
    pub fn set_title(&self, title: &str) {
        self.window.set_title(title);
    }

    /// Returns the size in *points* of the client area of the window.
    #[inline]
    pub fn dimensions_in_points(&self) -> Vector2<u32> {
        match self.window.get_inner_size() {
            Some(size) => Vector2::new(size.width as u32, size.height as u32),
            None => Vector2::new(0, 0),
        }
    }

    /// Returns the size in *pixels* of the client area of the window.
    #[inline]
    pub fn dimensions(&self) -> Vector2<u32> {
        let size = self.dimensions_in_points();
        let hi = self.hidpi();
        Vector2::new((size.x as f32 * hi) as u32, (size.y as f32 * hi) as u32)
    }

    /// Returns the ratio between the backing framebuffer resolution and the
    /// window size in screen pixels. This is typically one for a normal display
    /// and two for a retina display.
    #[inline]
    pub fn hidpi(&self) -> f32 {
        self.window.get_hidpi_factor() as f32
    }

    /// Swaps the buffers in case of double buffering. Blocks until the next
    /// refresh if vsync is enabled.
    #[inline]
    pub fn swap_buffers(&self) -> Result<()> {
        self.window.swap_buffers().map_err(Error::from)?;
        Ok(())
    }

    /// Resizes the GL context and the viewport to `dimensions` pixels.
    pub fn resize(&self, dimensions: Vector2<u32>) {
        let size = glutin::dpi::PhysicalSize::new(f64::from(dimensions.x), f64::from(dimensions.y));
        self.window.resize(size);
        crate::video::set_viewport(dimensions);
    }

    /// Polls pending events, feeding input devices. Returns `false` once the
    /// window has been asked to close.
    pub fn poll_events(&mut self, input: &mut InputSystem) -> bool {
        let mut alive = true;
        let mut resized = false;

        self.events_loop.poll_events(|v| match from_event(v) {
            Some(WindowEvent::Closed) => alive = false,
            Some(WindowEvent::Resized) => resized = true,
            Some(WindowEvent::LostFocus) => input.reset(),
            Some(WindowEvent::Input(e)) => input.update_with(e),
            None => {}
        });

        if resized {
            let dimensions = self.dimensions();
            self.resize(dimensions);
        }

        alive
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum WindowEvent {
    Closed,
    Resized,
    LostFocus,
    Input(InputEvent),
}

fn from_event(source: glutin::Event) -> Option<WindowEvent> {
    match source {
        glutin::Event::WindowEvent { event, .. } => from_window_event(&event),

        glutin::Event::DeviceEvent {
            event: glutin::DeviceEvent::MouseMotion { delta },
            ..
        } => Some(WindowEvent::Input(InputEvent::MouseMoved(
            delta.0 as f32,
            delta.1 as f32,
        ))),

        _ => None,
    }
}

fn from_window_event(source: &glutin::WindowEvent) -> Option<WindowEvent> {
    match *source {
        glutin::WindowEvent::CloseRequested => Some(WindowEvent::Closed),

        glutin::WindowEvent::Focused(false) => Some(WindowEvent::LostFocus),

        glutin::WindowEvent::Resized(_) | glutin::WindowEvent::HiDpiFactorChanged(_) => {
            Some(WindowEvent::Resized)
        }

        glutin::WindowEvent::MouseWheel { delta, .. } => match delta {
            glutin::MouseScrollDelta::LineDelta(x, y) => {
                Some(WindowEvent::Input(InputEvent::MouseWheel(x as f32, y as f32)))
            }
            glutin::MouseScrollDelta::PixelDelta(pos) => Some(WindowEvent::Input(
                InputEvent::MouseWheel(pos.x as f32, pos.y as f32),
            )),
        },

        glutin::WindowEvent::KeyboardInput {
            input:
                glutin::KeyboardInput {
                    state: glutin::ElementState::Pressed,
                    virtual_keycode: Some(key),
                    ..
                },
            ..
        } => from_virtual_key_code(key)
            .map(|key| WindowEvent::Input(InputEvent::KeyboardPressed(key))),

        glutin::WindowEvent::KeyboardInput {
            input:
                glutin::KeyboardInput {
                    state: glutin::ElementState::Released,
                    virtual_keycode: Some(key),
                    ..
                },
            ..
        } => from_virtual_key_code(key)
            .map(|key| WindowEvent::Input(InputEvent::KeyboardReleased(key))),

        _ => None,
    }
}

fn from_virtual_key_code(key: glutin::VirtualKeyCode) -> Option<Key> {
    match key {
        glutin::VirtualKeyCode::A => Some(Key::A),
        glutin::VirtualKeyCode::B => Some(Key::B),
        glutin::VirtualKeyCode::D => Some(Key::D),
        glutin::VirtualKeyCode::F => Some(Key::F),
        glutin::VirtualKeyCode::L => Some(Key::L),
        glutin::VirtualKeyCode::N => Some(Key::N),
        glutin::VirtualKeyCode::S => Some(Key::S),
        glutin::VirtualKeyCode::W => Some(Key::W),
        glutin::VirtualKeyCode::Escape => Some(Key::Escape),
        glutin::VirtualKeyCode::LShift => Some(Key::LShift),
        glutin::VirtualKeyCode::LControl => Some(Key::LControl),
        glutin::VirtualKeyCode::Space => Some(Key::Space),
        glutin::VirtualKeyCode::Equals => Some(Key::Equals),
        glutin::VirtualKeyCode::Minus => Some(Key::Minus),
        glutin::VirtualKeyCode::Period => Some(Key::Period),
        glutin::VirtualKeyCode::Comma => Some(Key::Comma),
        _ => None,
    }
}
