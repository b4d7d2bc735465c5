//! Thin wrappers around the OpenGL objects used by the demos.
//!
//! Every wrapper owns its OpenGL names and deletes them on drop. All of them
//! must be created and dropped while the context of the [`Engine`] is current,
//! which holds for anything built inside `launch`.
//!
//! [`Engine`]: crate::application::Engine

pub mod capabilities;
pub mod framebuffer;
pub mod mesh;
pub mod model;
pub mod primitives;
pub mod shader;
pub mod skybox;
pub mod texture;
pub mod uniform_buffer;

pub use self::capabilities::{Capabilities, Profile, Version};
pub use self::framebuffer::{DepthCubeMap, DepthMap, FrameBuffer};
pub use self::mesh::{Mesh, PositionVertex, TextureKind, Vertex, VertexAttribute, VertexLayout};
pub use self::model::Model;
pub use self::primitives::TransparentCube;
pub use self::shader::{Shader, UniformValue};
pub use self::skybox::Skybox;
pub use self::texture::{Cubemap, Texture, TextureFilter, TextureParams, TextureWrap};
pub use self::uniform_buffer::UniformBuffer;

use gl;
use gl::types::*;
use std::mem;
use std::os::raw::c_void;
use std::slice;

use crate::errors::*;
use crate::math::Vector2;

/// Which faces are culled.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CullFace {
    Nothing,
    Front,
    Back,
}

/// Checks `glGetError`.
pub fn check() -> Result<()> {
    unsafe {
        match gl::GetError() {
            gl::NO_ERROR => Ok(()),

            gl::INVALID_ENUM => {
                bail!("[GL] An unacceptable value is specified for an enumerated argument.")
            }

            gl::INVALID_VALUE => bail!("[GL] A numeric argument is out of range."),

            gl::INVALID_OPERATION => {
                bail!("[GL] The specified operation is not allowed in the current state.")
            }

            gl::INVALID_FRAMEBUFFER_OPERATION => bail!(
                "[GL] The command is trying to render to or read from the framebuffer while the \
                 currently bound framebuffer is not framebuffer complete."
            ),

            gl::OUT_OF_MEMORY => {
                bail!("[GL] There is not enough memory left to execute the command.")
            }

            _ => bail!("[GL] Oops, Unknown OpenGL error."),
        }
    }
}

/// Returns `Err` with a description if the framebuffer currently bound to
/// `GL_FRAMEBUFFER` is not complete.
pub(crate) unsafe fn check_framebuffer() -> Result<()> {
    let reason = match gl::CheckFramebufferStatus(gl::FRAMEBUFFER) {
        gl::FRAMEBUFFER_COMPLETE => return Ok(()),
        gl::FRAMEBUFFER_INCOMPLETE_ATTACHMENT => {
            "not all attachment points are framebuffer attachment complete"
        }
        gl::FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT => "no images are attached",
        gl::FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER => "a draw buffer has no attachment",
        gl::FRAMEBUFFER_INCOMPLETE_READ_BUFFER => "the read buffer has no attachment",
        gl::FRAMEBUFFER_UNSUPPORTED => {
            "the combination of internal formats violates implementation restrictions"
        }
        gl::FRAMEBUFFER_INCOMPLETE_MULTISAMPLE => "attachments have mismatched samples",
        _ => "unknown status",
    };

    Err(Error::IncompleteFramebuffer(reason).into())
}

/// Resets the pipeline state every demo starts from: depth test, alpha
/// blending and back-face culling disabled.
pub fn reset_render_state() {
    unsafe {
        gl::Enable(gl::DEPTH_TEST);
        gl::DepthFunc(gl::LESS);
        gl::DepthMask(gl::TRUE);
        gl::Enable(gl::BLEND);
        gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
        gl::Enable(gl::MULTISAMPLE);
        gl::Disable(gl::CULL_FACE);
        gl::PolygonMode(gl::FRONT_AND_BACK, gl::FILL);
    }
}

/// Clears the default or currently bound framebuffer.
pub fn clear(color: Option<[f32; 4]>, depth: bool) {
    unsafe {
        let mut mask = 0;
        if let Some(c) = color {
            gl::ClearColor(c[0], c[1], c[2], c[3]);
            mask |= gl::COLOR_BUFFER_BIT;
        }

        if depth {
            mask |= gl::DEPTH_BUFFER_BIT;
        }

        if mask != 0 {
            gl::Clear(mask);
        }
    }
}

pub fn set_viewport(dimensions: Vector2<u32>) {
    unsafe {
        gl::Viewport(0, 0, dimensions.x as GLsizei, dimensions.y as GLsizei);
    }
}

pub fn set_depth_test(enabled: bool) {
    unsafe {
        if enabled {
            gl::Enable(gl::DEPTH_TEST);
        } else {
            gl::Disable(gl::DEPTH_TEST);
        }
    }
}

pub fn set_cull_face(face: CullFace) {
    unsafe {
        match face {
            CullFace::Nothing => gl::Disable(gl::CULL_FACE),
            CullFace::Front => {
                gl::Enable(gl::CULL_FACE);
                gl::CullFace(gl::FRONT);
            }
            CullFace::Back => {
                gl::Enable(gl::CULL_FACE);
                gl::CullFace(gl::BACK);
            }
        }
    }
}

pub fn set_wireframe(enabled: bool) {
    let mode = if enabled { gl::LINE } else { gl::FILL };
    unsafe {
        gl::PolygonMode(gl::FRONT_AND_BACK, mode);
    }
}

/// Reinterprets a slice of plain values as bytes.
pub(crate) fn as_bytes<T: Copy>(values: &[T]) -> &[u8] {
    unsafe { slice::from_raw_parts(values.as_ptr() as *const u8, values.len() * mem::size_of::<T>()) }
}

pub(crate) unsafe fn create_buffer(tp: GLenum, hint: GLenum, data: &[u8]) -> Result<GLuint> {
    let mut id = 0;
    gl::GenBuffers(1, &mut id);
    if id == 0 {
        bail!("[GL] Failed to generate buffer object.");
    }

    gl::BindBuffer(tp, id);

    let value = if data.is_empty() {
        ::std::ptr::null()
    } else {
        data.as_ptr() as *const c_void
    };

    gl::BufferData(tp, data.len() as GLsizeiptr, value, hint);
    check()?;
    Ok(id)
}

pub(crate) unsafe fn update_buffer(tp: GLenum, id: GLuint, offset: usize, data: &[u8]) -> Result<()> {
    if data.is_empty() {
        return Ok(());
    }

    gl::BindBuffer(tp, id);
    gl::BufferSubData(
        tp,
        offset as GLintptr,
        data.len() as GLsizeiptr,
        data.as_ptr() as *const c_void,
    );
    check()
}
