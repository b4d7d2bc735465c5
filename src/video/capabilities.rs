//! What the current OpenGL context offers, queried once at start-up.

use gl;
use gl::types::*;
use std::cmp;
use std::ffi;

use crate::errors::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Profile {
    Core,
    Compatibility,
}

/// An OpenGL or OpenGL ES version. Versions of different APIs are unordered:
/// `Version::ES(3, 2) >= Version::GL(3, 3)` and its converse are both false.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Version {
    GL(u8, u8),
    ES(u8, u8),
}

impl Version {
    fn split(self) -> (bool, u8, u8) {
        match self {
            Version::GL(major, minor) => (false, major, minor),
            Version::ES(major, minor) => (true, major, minor),
        }
    }

    /// Parses a `GL_VERSION` string such as `"4.6.0 NVIDIA 390.77"` or
    /// `"OpenGL ES 3.2 Mesa 18.0.5"`. Anything after the release number is
    /// vendor specific and ignored.
    pub fn parse_str(desc: &str) -> Result<Version> {
        let malformed = || format_err!("[GL] Malformed version string {:?}.", desc);

        let (es, release) = if desc.starts_with("OpenGL ES-") {
            // Profiles of ES 1.x, e.g. "OpenGL ES-CM 1.1".
            (true, desc.get(13..).ok_or_else(malformed)?)
        } else if desc.starts_with("OpenGL ES ") {
            (true, &desc[10..])
        } else {
            (false, desc)
        };

        let release = release.split(' ').next().unwrap_or("");
        let mut numbers = release.split('.').map(|v| v.parse::<u8>().ok());

        let major = numbers.next().and_then(|v| v).ok_or_else(malformed)?;
        let minor = numbers.next().and_then(|v| v).ok_or_else(malformed)?;

        Ok(if es {
            Version::ES(major, minor)
        } else {
            Version::GL(major, minor)
        })
    }

    /// # Unsafe
    ///
    /// The functions must have been loaded for the context current in this
    /// thread.
    pub unsafe fn query() -> Result<Version> {
        Version::parse_str(&query_str(gl::VERSION)?)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Version) -> Option<cmp::Ordering> {
        let (es1, major1, minor1) = self.split();
        let (es2, major2, minor2) = other.split();

        if es1 == es2 {
            Some((major1, minor1).cmp(&(major2, minor2)))
        } else {
            None
        }
    }
}

/// Strings and limits of the context, logged at start-up. The limits bound
/// what the demos may use: texture units 0 and 15 for samplers, binding 0 for
/// the uniform buffer, attributes 5 to 8 for instance matrices.
#[derive(Debug, Clone)]
pub struct Capabilities {
    pub version: Version,
    pub vendor: String,
    pub renderer: String,
    /// The `GL_SHADING_LANGUAGE_VERSION` string.
    pub glsl: String,
    /// Only reported by 3.2+ contexts.
    pub profile: Option<Profile>,
    pub max_combined_texture_image_units: u32,
    pub max_uniform_buffer_bindings: u32,
    pub max_vertex_attribs: u32,
}

impl Capabilities {
    /// # Unsafe
    ///
    /// The context must be current in this thread.
    pub unsafe fn query() -> Result<Capabilities> {
        let version = Version::query()?;

        let mut profile = None;
        if version >= Version::GL(3, 2) {
            let mask = query_u32(gl::CONTEXT_PROFILE_MASK) as GLenum;
            if mask & gl::CONTEXT_CORE_PROFILE_BIT != 0 {
                profile = Some(Profile::Core);
            } else if mask & gl::CONTEXT_COMPATIBILITY_PROFILE_BIT != 0 {
                profile = Some(Profile::Compatibility);
            }
        }

        Ok(Capabilities {
            version,
            vendor: query_str(gl::VENDOR)?,
            renderer: query_str(gl::RENDERER)?,
            glsl: query_str(gl::SHADING_LANGUAGE_VERSION)?,
            profile,
            max_combined_texture_image_units: query_u32(gl::MAX_COMBINED_TEXTURE_IMAGE_UNITS),
            max_uniform_buffer_bindings: query_u32(gl::MAX_UNIFORM_BUFFER_BINDINGS),
            max_vertex_attribs: query_u32(gl::MAX_VERTEX_ATTRIBS),
        })
    }

    /// Fails if the context is older than `required`.
    pub fn require(&self, required: Version) -> Result<()> {
        if self.version >= required {
            Ok(())
        } else {
            Err(Error::Requirement(format!("{:?}, got {:?}", required, self.version)).into())
        }
    }
}

unsafe fn query_str(name: GLenum) -> Result<String> {
    let desc = gl::GetString(name);
    if desc.is_null() {
        bail!("[GL] glGetString({:#x}) returned null.", name);
    }

    let bytes = ffi::CStr::from_ptr(desc as *const _).to_bytes();
    String::from_utf8(bytes.to_vec()).map_err(|_| format_err!("[GL] glGetString({:#x}) is not UTF-8.", name))
}

unsafe fn query_u32(name: GLenum) -> u32 {
    let mut v = 0;
    gl::GetIntegerv(name, &mut v);
    v.max(0) as u32
}
