use gl;
use std::path::Path;

use crate::errors::*;
use crate::math::{self, Matrix4};

use super::mesh::Mesh;
use super::primitives;
use super::shader::Shader;
use super::texture::Cubemap;

/// The texture unit reserved for the skybox cubemap.
pub const SKYBOX_UNIT: u32 = 15;

/// A cube drawn around the viewer with a cubemap, behind everything else.
#[derive(Debug)]
pub struct Skybox {
    mesh: Mesh,
    cubemap: Option<Cubemap>,
}

impl Skybox {
    pub fn new() -> Result<Skybox> {
        let (vertices, indices) = primitives::skybox_geometry();
        Ok(Skybox {
            mesh: Mesh::new(&vertices, &indices)?,
            cubemap: None,
        })
    }

    /// Loads the six faces, in `right, left, top, bottom, front, back` order.
    /// Falls back to a procedural sky if any of them can't be read.
    pub fn load_texture<P: AsRef<Path>>(&mut self, faces: &[P; 6]) -> Result<()> {
        self.cubemap = Some(Cubemap::from_files_or_sky(faces)?);
        Ok(())
    }

    #[inline]
    pub fn cubemap(&self) -> Option<&Cubemap> {
        self.cubemap.as_ref()
    }

    /// Draws the skybox. Expects a program with `uView`, `uProjection` and a
    /// `samplerCube uSkybox`. Translation is removed from `view`, and the depth
    /// test passes at the far plane so that the box shows only where nothing
    /// else was drawn.
    pub fn draw(&self, shader: &Shader, view: Matrix4<f32>, projection: Matrix4<f32>) {
        let cubemap = match self.cubemap {
            Some(ref cubemap) => cubemap,
            None => return,
        };

        unsafe {
            gl::DepthMask(gl::FALSE);
            gl::DepthFunc(gl::LEQUAL);
        }

        shader.bind();
        shader.set_uniform("uView", math::strip_translation(view));
        shader.set_uniform("uProjection", projection);
        shader.set_uniform("uSkybox", SKYBOX_UNIT as i32);
        cubemap.bind(SKYBOX_UNIT);
        self.mesh.draw(shader);

        unsafe {
            gl::DepthFunc(gl::LESS);
            gl::DepthMask(gl::TRUE);
        }
    }
}
