//! Off-screen render targets: a color framebuffer, and depth-only targets for
//! directional and omnidirectional shadow maps.

use gl;
use gl::types::*;
use std::ptr;

use crate::errors::*;
use crate::math::{cubemap, Matrix4, Point3, Vector2};

use super::check_framebuffer;
use super::texture::bind_unit;

/// A framebuffer with an RGB color texture and a depth/stencil renderbuffer.
#[derive(Debug)]
pub struct FrameBuffer {
    fbo: GLuint,
    rbo: GLuint,
    texture: GLuint,
    dimensions: Vector2<u32>,
}

impl FrameBuffer {
    /// Creates the framebuffer. Incompleteness is reported with `error!` only,
    /// the framebuffer is returned anyway.
    pub fn new(dimensions: Vector2<u32>) -> Result<FrameBuffer> {
        unsafe {
            let mut fb = FrameBuffer {
                fbo: 0,
                rbo: 0,
                texture: 0,
                dimensions,
            };

            gl::GenFramebuffers(1, &mut fb.fbo);
            gl::BindFramebuffer(gl::FRAMEBUFFER, fb.fbo);

            gl::GenTextures(1, &mut fb.texture);
            gl::BindTexture(gl::TEXTURE_2D, fb.texture);
            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                gl::RGB as GLint,
                dimensions.x as GLsizei,
                dimensions.y as GLsizei,
                0,
                gl::RGB,
                gl::UNSIGNED_BYTE,
                ptr::null(),
            );
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, gl::LINEAR as GLint);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::LINEAR as GLint);
            gl::FramebufferTexture2D(
                gl::FRAMEBUFFER,
                gl::COLOR_ATTACHMENT0,
                gl::TEXTURE_2D,
                fb.texture,
                0,
            );

            gl::GenRenderbuffers(1, &mut fb.rbo);
            gl::BindRenderbuffer(gl::RENDERBUFFER, fb.rbo);
            gl::RenderbufferStorage(
                gl::RENDERBUFFER,
                gl::DEPTH24_STENCIL8,
                dimensions.x as GLsizei,
                dimensions.y as GLsizei,
            );
            gl::FramebufferRenderbuffer(
                gl::FRAMEBUFFER,
                gl::DEPTH_STENCIL_ATTACHMENT,
                gl::RENDERBUFFER,
                fb.rbo,
            );

            report_incomplete(check_framebuffer());

            gl::BindRenderbuffer(gl::RENDERBUFFER, 0);
            gl::BindTexture(gl::TEXTURE_2D, 0);
            gl::BindFramebuffer(gl::FRAMEBUFFER, 0);

            crate::video::check()?;
            Ok(fb)
        }
    }

    /// Redirects rendering into this framebuffer and sets the viewport to its
    /// dimensions.
    pub fn bind(&self) {
        unsafe {
            gl::BindFramebuffer(gl::FRAMEBUFFER, self.fbo);
            gl::Viewport(0, 0, self.dimensions.x as GLsizei, self.dimensions.y as GLsizei);
        }
    }

    /// Binds the color texture to texture unit `unit`.
    #[inline]
    pub fn bind_texture(&self, unit: u32) {
        bind_unit(gl::TEXTURE_2D, self.texture, unit);
    }

    #[inline]
    pub fn texture_id(&self) -> GLuint {
        self.texture
    }

    #[inline]
    pub fn dimensions(&self) -> Vector2<u32> {
        self.dimensions
    }
}

impl Drop for FrameBuffer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteFramebuffers(1, &self.fbo);
            gl::DeleteRenderbuffers(1, &self.rbo);
            gl::DeleteTextures(1, &self.texture);
        }
    }
}

/// Makes the default framebuffer current again and restores the viewport.
pub fn unbind(dimensions: Vector2<u32>) {
    unsafe {
        gl::BindFramebuffer(gl::FRAMEBUFFER, 0);
        gl::Viewport(0, 0, dimensions.x as GLsizei, dimensions.y as GLsizei);
    }
}

/// Attaches a depth texture as the only image of a new framebuffer. Like
/// `FrameBuffer::new`, incompleteness is only logged.
unsafe fn depth_only_framebuffer(target: GLenum, texture: GLuint, layered: bool) -> GLuint {
    let mut fbo = 0;
    gl::GenFramebuffers(1, &mut fbo);
    gl::BindFramebuffer(gl::FRAMEBUFFER, fbo);

    if layered {
        gl::FramebufferTexture(gl::FRAMEBUFFER, gl::DEPTH_ATTACHMENT, texture, 0);
    } else {
        gl::FramebufferTexture2D(gl::FRAMEBUFFER, gl::DEPTH_ATTACHMENT, target, texture, 0);
    }

    gl::DrawBuffer(gl::NONE);
    gl::ReadBuffer(gl::NONE);

    report_incomplete(check_framebuffer());
    gl::BindFramebuffer(gl::FRAMEBUFFER, 0);

    fbo
}

/// Logs an incomplete framebuffer. Rendering goes on with whatever the driver
/// makes of it; returns whether the framebuffer was complete.
fn report_incomplete(status: Result<()>) -> bool {
    match status {
        Ok(()) => true,
        Err(err) => {
            error!("{}", err);
            false
        }
    }
}

/// A 2D depth texture rendered from a directional light.
#[derive(Debug)]
pub struct DepthMap {
    fbo: GLuint,
    texture: GLuint,
    dimensions: Vector2<u32>,
}

impl DepthMap {
    /// Creates a depth map. Lookups outside of the map return the border
    /// depth 1.0, i.e. never in shadow.
    pub fn new(dimensions: Vector2<u32>) -> Result<DepthMap> {
        unsafe {
            let mut map = DepthMap {
                fbo: 0,
                texture: 0,
                dimensions,
            };

            gl::GenTextures(1, &mut map.texture);
            gl::BindTexture(gl::TEXTURE_2D, map.texture);
            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                gl::DEPTH_COMPONENT as GLint,
                dimensions.x as GLsizei,
                dimensions.y as GLsizei,
                0,
                gl::DEPTH_COMPONENT,
                gl::FLOAT,
                ptr::null(),
            );
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, gl::NEAREST as GLint);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::NEAREST as GLint);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, gl::CLAMP_TO_BORDER as GLint);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl::CLAMP_TO_BORDER as GLint);
            let border = [1.0f32, 1.0, 1.0, 1.0];
            gl::TexParameterfv(gl::TEXTURE_2D, gl::TEXTURE_BORDER_COLOR, border.as_ptr());
            gl::BindTexture(gl::TEXTURE_2D, 0);

            map.fbo = depth_only_framebuffer(gl::TEXTURE_2D, map.texture, false);
            crate::video::check()?;
            Ok(map)
        }
    }

    /// Redirects rendering into the depth map and sets the viewport to its
    /// dimensions.
    pub fn bind(&self) {
        unsafe {
            gl::BindFramebuffer(gl::FRAMEBUFFER, self.fbo);
            gl::Viewport(0, 0, self.dimensions.x as GLsizei, self.dimensions.y as GLsizei);
        }
    }

    #[inline]
    pub fn bind_texture(&self, unit: u32) {
        bind_unit(gl::TEXTURE_2D, self.texture, unit);
    }

    #[inline]
    pub fn texture_id(&self) -> GLuint {
        self.texture
    }
}

impl Drop for DepthMap {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteFramebuffers(1, &self.fbo);
            gl::DeleteTextures(1, &self.texture);
        }
    }
}

/// A depth cubemap rendered from a point light in a single pass, with a
/// geometry shader routing triangles to the six layers.
#[derive(Debug)]
pub struct DepthCubeMap {
    fbo: GLuint,
    texture: GLuint,
    dimensions: Vector2<u32>,
    near: f32,
    far: f32,
}

impl DepthCubeMap {
    pub fn new(dimensions: Vector2<u32>, near: f32, far: f32) -> Result<DepthCubeMap> {
        unsafe {
            let mut map = DepthCubeMap {
                fbo: 0,
                texture: 0,
                dimensions,
                near,
                far,
            };

            gl::GenTextures(1, &mut map.texture);
            gl::BindTexture(gl::TEXTURE_CUBE_MAP, map.texture);
            for i in 0..6 {
                gl::TexImage2D(
                    gl::TEXTURE_CUBE_MAP_POSITIVE_X + i,
                    0,
                    gl::DEPTH_COMPONENT as GLint,
                    dimensions.x as GLsizei,
                    dimensions.y as GLsizei,
                    0,
                    gl::DEPTH_COMPONENT,
                    gl::FLOAT,
                    ptr::null(),
                );
            }

            let nearest = gl::NEAREST as GLint;
            let clamp = gl::CLAMP_TO_EDGE as GLint;
            gl::TexParameteri(gl::TEXTURE_CUBE_MAP, gl::TEXTURE_MIN_FILTER, nearest);
            gl::TexParameteri(gl::TEXTURE_CUBE_MAP, gl::TEXTURE_MAG_FILTER, nearest);
            gl::TexParameteri(gl::TEXTURE_CUBE_MAP, gl::TEXTURE_WRAP_S, clamp);
            gl::TexParameteri(gl::TEXTURE_CUBE_MAP, gl::TEXTURE_WRAP_T, clamp);
            gl::TexParameteri(gl::TEXTURE_CUBE_MAP, gl::TEXTURE_WRAP_R, clamp);
            gl::BindTexture(gl::TEXTURE_CUBE_MAP, 0);

            map.fbo = depth_only_framebuffer(gl::TEXTURE_CUBE_MAP, map.texture, true);
            crate::video::check()?;
            Ok(map)
        }
    }

    /// Returns the six light-space matrices of a light at `position`.
    pub fn transforms(&self, position: Point3<f32>) -> [Matrix4<f32>; 6] {
        cubemap::shadow_transforms(position, self.near, self.far)
    }

    #[inline]
    pub fn far_plane(&self) -> f32 {
        self.far
    }

    pub fn bind(&self) {
        unsafe {
            gl::BindFramebuffer(gl::FRAMEBUFFER, self.fbo);
            gl::Viewport(0, 0, self.dimensions.x as GLsizei, self.dimensions.y as GLsizei);
        }
    }

    #[inline]
    pub fn bind_texture(&self, unit: u32) {
        bind_unit(gl::TEXTURE_CUBE_MAP, self.texture, unit);
    }
}

impl Drop for DepthCubeMap {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteFramebuffers(1, &self.fbo);
            gl::DeleteTextures(1, &self.texture);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_is_not_fatal() {
        assert!(report_incomplete(Ok(())));

        let status = Err(Error::IncompleteFramebuffer("no images are attached").into());
        assert!(!report_incomplete(status));
    }
}
