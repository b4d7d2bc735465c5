//! A minimal application model shared by every demo.
//!
//! ## Application
//!
//! A demo implements the `Application` trait, whose `on_update` is called once
//! per frame after input has been polled and the camera has been moved. It
//! issues all its draw calls from there, the engine swaps buffers afterwards.
//!
//! # Engine
//!
//! `Engine` is where we actually run the main loop. It owns the window and its
//! OpenGL context, and the per-frame `Context` (camera, input and timing).
//!
//! ```rust,ignore
//! fn main() {
//!     let settings = Settings::new("Advanced OpenGL - Instancing", 800, 600);
//!     std::process::exit(application::launch(settings, |engine| Demo::new(engine)));
//! }
//! ```

pub mod settings;
pub mod time;
pub mod window;

mod engine;

pub use self::engine::{Context, Engine, CLEAR_COLOR};
pub use self::settings::{EngineParams, Settings, WindowParams};
pub use self::time::{FpsCounter, FrameTimer};
pub use self::window::Window;

use env_logger;

use crate::errors::*;

/// `Application` is a user-friendly facade to building demos, which defines a
/// number of event functions that get executed in a pre-determined order.
pub trait Application {
    /// `Application::on_update` is called every frame. Its the main workhorse
    /// function for frame updates and rendering.
    fn on_update(&mut self, ctx: &mut Context) -> Result<()>;

    /// `Application::on_exit` is called when the frame loop stops, before the
    /// application is dropped.
    fn on_exit(&mut self, _: &mut Context) -> Result<()> {
        Ok(())
    }
}

/// Installs the logger, with `info` as default level unless `RUST_LOG` says
/// otherwise. Does nothing if a logger is already installed.
pub fn init_logger() {
    let env = env_logger::Env::default().default_filter_or("info");
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// The whole `main` of a demo: installs the logger, applies the settings
/// overrides, creates the engine, builds the application with `f` and runs
/// it. Returns the process exit code, 0 on success and -1 on failure.
pub fn launch<T, F>(mut settings: Settings, f: F) -> i32
where
    T: Application,
    F: FnOnce(&mut Engine) -> Result<T>,
{
    init_logger();

    if let Some(path) = settings.engine.overrides.clone() {
        if let Err(err) = settings.load_overrides(&path) {
            error!("{}", err);
            return -1;
        }
    }

    match run(settings, f) {
        Ok(()) => 0,
        Err(err) => {
            error!("{}", err);
            -1
        }
    }
}

fn run<T, F>(settings: Settings, f: F) -> Result<()>
where
    T: Application,
    F: FnOnce(&mut Engine) -> Result<T>,
{
    let mut engine = Engine::new(settings)?;
    let application = f(&mut engine)?;
    engine.run(application)
}
