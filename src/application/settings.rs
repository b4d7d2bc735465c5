//! Functions for loading demo settings.

use serde_json;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::errors::*;
use crate::math::Vector2;

/// A structure containing configuration data for the engine, which are used to
/// specify hardware setup stuff to create the window and other context
/// information.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub engine: EngineParams,
    pub window: WindowParams,
}

impl Settings {
    /// Default settings with a window titled `title` of `width x height` points.
    pub fn new<T: Into<String>>(title: T, width: u32, height: u32) -> Self {
        let mut settings = Settings::default();
        settings.window.title = title.into();
        settings.window.size = Vector2::new(width, height);
        settings
    }

    /// Sets the optional overrides file read by `launch`.
    pub fn with_overrides<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.engine.overrides = Some(path.into());
        self
    }

    /// Merges the fields present in the JSON document `source`.
    pub fn apply_overrides_str(&mut self, source: &str) -> Result<()> {
        let overrides: Overrides = serde_json::from_str(source).map_err(Error::from)?;

        if let Some(v) = overrides.title {
            self.window.title = v;
        }

        if let Some(v) = overrides.size {
            if v[0] == 0 || v[1] == 0 {
                return Err(Error::Settings(format!("Invalid window size {:?}.", v)).into());
            }

            self.window.size = Vector2::new(v[0], v[1]);
        }

        if let Some(v) = overrides.multisample {
            self.window.multisample = v;
        }

        if let Some(v) = overrides.vsync {
            self.window.vsync = v;
        }

        if let Some(v) = overrides.max_fps {
            self.engine.max_fps = v;
        }

        if let Some(v) = overrides.fps_refresh {
            if !(v > 0.0) {
                return Err(Error::Settings(format!("Invalid fps refresh interval {}.", v)).into());
            }

            self.engine.fps_refresh = v;
        }

        if let Some(v) = overrides.capture_cursor {
            self.engine.capture_cursor = v;
        }

        Ok(())
    }

    /// Reads overrides from the JSON file at `path`. Returns `false` if there is
    /// no such file, which leaves the settings untouched.
    pub fn load_overrides<P: AsRef<Path>>(&mut self, path: P) -> Result<bool> {
        let path = path.as_ref();
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(ref err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(ref err) => return Err(Error::io(path, err).into()),
        };

        self.apply_overrides_str(&source)?;
        info!("Loaded settings overrides from {:?}.", path);
        Ok(true)
    }
}

/// The optional fields a settings file may carry.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct Overrides {
    title: Option<String>,
    size: Option<[u32; 2]>,
    multisample: Option<u16>,
    vsync: Option<bool>,
    max_fps: Option<u32>,
    fps_refresh: Option<f32>,
    capture_cursor: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct EngineParams {
    /// Sleeps at the end of a frame if it finished faster than `1 / max_fps`.
    /// A value of 0 leaves the frame rate to vsync.
    pub max_fps: u32,
    /// Seconds between two refreshes of the FPS shown in the window title.
    pub fps_refresh: f32,
    /// Grabs and hides the cursor, so that mouse motion drives the camera.
    pub capture_cursor: bool,
    /// An optional JSON file with overrides, read by `launch` before the
    /// window is created.
    pub overrides: Option<PathBuf>,
}

impl Default for EngineParams {
    fn default() -> Self {
        EngineParams {
            max_fps: 0,
            fps_refresh: 0.25,
            capture_cursor: true,
            overrides: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WindowParams {
    /// Sets the title of window.
    pub title: String,
    /// Sets the size in *points* of the client area of the window.
    pub size: Vector2<u32>,
    /// Sets the multisampling level to request. A value of 0 indicates that
    /// multisampling must not be enabled.
    pub multisample: u16,
    /// Specifies whether should we have vsync.
    pub vsync: bool,
    /// The OpenGL core profile version to request, as `(major, minor)`.
    pub gl_version: (u8, u8),
}

impl Default for WindowParams {
    fn default() -> Self {
        WindowParams {
            title: "lumen".to_owned(),
            size: Vector2::new(800, 600),
            multisample: 0,
            vsync: true,
            gl_version: (3, 3),
        }
    }
}
