use gl;
use gl::types::*;

use crate::errors::*;
use crate::math::Matrix4;

use super::shader::Shader;
use super::{check, create_buffer, update_buffer};

/// A uniform buffer bound, over its whole range, to a fixed binding point.
/// Programs declaring a matching block read from it once attached.
#[derive(Debug)]
pub struct UniformBuffer {
    id: GLuint,
    size: usize,
    binding: u32,
}

impl UniformBuffer {
    pub fn new(size: usize, binding: u32) -> Result<UniformBuffer> {
        unsafe {
            let id = create_buffer(gl::UNIFORM_BUFFER, gl::STATIC_DRAW, &vec![0u8; size])?;
            let ubo = UniformBuffer { id, size, binding };

            gl::BindBufferRange(gl::UNIFORM_BUFFER, binding, id, 0, size as GLsizeiptr);
            gl::BindBuffer(gl::UNIFORM_BUFFER, 0);
            check()?;
            Ok(ubo)
        }
    }

    /// Binds the block `name` of `shader` to this buffer.
    pub fn attach(&self, shader: &Shader, name: &str) -> Result<()> {
        shader.bind_uniform_block(name, self.binding)
    }

    pub fn update_bytes(&self, offset: usize, data: &[u8]) -> Result<()> {
        if offset + data.len() > self.size {
            bail!(
                "Out of bounds write of {} bytes at {} into uniform buffer of {} bytes.",
                data.len(),
                offset,
                self.size
            );
        }

        unsafe {
            update_buffer(gl::UNIFORM_BUFFER, self.id, offset, data)?;
            gl::BindBuffer(gl::UNIFORM_BUFFER, 0);
        }

        Ok(())
    }

    /// Writes a column-major `mat4` at byte `offset`.
    pub fn update(&self, offset: usize, m: &Matrix4<f32>) -> Result<()> {
        let values: &[f32; 16] = m.as_ref();
        self.update_bytes(offset, super::as_bytes(&values[..]))
    }

    #[inline]
    pub fn binding(&self) -> u32 {
        self.binding
    }
}

impl Drop for UniformBuffer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.id);
        }
    }
}
