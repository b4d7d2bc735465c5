//! Indexed triangle meshes with an optional per-instance matrix stream.

use gl;
use gl::types::*;
use smallvec::SmallVec;
use std::mem;
use std::os::raw::c_void;
use std::ptr;
use std::rc::Rc;

use crate::errors::*;
use crate::math::Matrix4;

use super::shader::Shader;
use super::texture::Texture;
use super::{as_bytes, check, create_buffer, update_buffer};

/// A float vertex attribute: shader location, component count and byte offset.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct VertexAttribute {
    pub location: GLuint,
    pub size: GLint,
    pub offset: usize,
}

/// Describes how a vertex struct maps onto shader attribute locations.
pub trait VertexLayout: Copy {
    fn attributes() -> Vec<VertexAttribute>;

    fn stride() -> usize {
        mem::size_of::<Self>()
    }
}

macro_rules! impl_vertex {
    ($name: ident { $($field: ident => [$location: expr; $size: tt],)* }) => (
        #[repr(C)]
        #[derive(Debug, Copy, Clone, PartialEq, Default)]
        pub struct $name {
            $(pub $field: [f32; $size], )*
        }

        impl $name {
            pub fn new($($field: [f32; $size], ) *) -> Self {
                $name {
                    $($field,)*
                }
            }
        }

        impl VertexLayout for $name {
            fn attributes() -> Vec<VertexAttribute> {
                vec![$(
                    VertexAttribute {
                        location: $location,
                        size: $size,
                        offset: mem::offset_of!($name, $field),
                    },
                )*]
            }
        }
    )
}

impl_vertex! {
    Vertex {
        position => [0; 3],
        normal => [1; 3],
        texcoord => [2; 2],
        tangent => [3; 3],
        bitangent => [4; 3],
    }
}

impl_vertex! {
    PositionVertex {
        position => [0; 3],
    }
}

/// The first of the four consecutive attribute locations used by the
/// per-instance model matrix, one column each.
pub const INSTANCE_LOCATION: GLuint = 5;

/// The role of a texture attached to a mesh. It decides the sampler uniform the
/// texture is bound to, `uMaterial.texture_diffuse1`, `uMaterial.texture_specular1`
/// and so on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TextureKind {
    Diffuse,
    Specular,
    Normal,
    Height,
}

impl TextureKind {
    pub fn uniform_prefix(self) -> &'static str {
        match self {
            TextureKind::Diffuse => "uMaterial.texture_diffuse",
            TextureKind::Specular => "uMaterial.texture_specular",
            TextureKind::Normal => "uMaterial.texture_normal",
            TextureKind::Height => "uMaterial.texture_height",
        }
    }
}

/// Returns the sampler uniform names of a texture list, numbering every kind
/// from 1 in the order of appearance. The i-th name is bound to unit i.
pub fn sampler_names<I>(kinds: I) -> Vec<String>
where
    I: IntoIterator<Item = TextureKind>,
{
    let mut counters = [0u32; 4];
    kinds
        .into_iter()
        .map(|kind| {
            let counter = match kind {
                TextureKind::Diffuse => &mut counters[0],
                TextureKind::Specular => &mut counters[1],
                TextureKind::Normal => &mut counters[2],
                TextureKind::Height => &mut counters[3],
            };

            *counter += 1;
            format!("{}{}", kind.uniform_prefix(), counter)
        })
        .collect()
}

/// A vertex array with its vertex, index and optional instance buffers.
#[derive(Debug)]
pub struct Mesh {
    vao: GLuint,
    vbo: GLuint,
    ebo: GLuint,
    num_vertices: usize,
    num_indices: usize,
    instances: Option<(GLuint, usize)>,
    textures: SmallVec<[(TextureKind, Rc<Texture>); 4]>,
}

impl Mesh {
    pub fn new<V: VertexLayout>(vertices: &[V], indices: &[u32]) -> Result<Mesh> {
        if let Some(&index) = indices.iter().find(|&&v| v as usize >= vertices.len()) {
            bail!(
                "Index {} is out of bounds of {} vertices.",
                index,
                vertices.len()
            );
        }

        unsafe {
            let mut vao = 0;
            gl::GenVertexArrays(1, &mut vao);
            gl::BindVertexArray(vao);

            let mut mesh = Mesh {
                vao,
                vbo: 0,
                ebo: 0,
                num_vertices: vertices.len(),
                num_indices: indices.len(),
                instances: None,
                textures: SmallVec::new(),
            };

            mesh.vbo = create_buffer(gl::ARRAY_BUFFER, gl::STATIC_DRAW, as_bytes(vertices))?;
            mesh.ebo = create_buffer(gl::ELEMENT_ARRAY_BUFFER, gl::DYNAMIC_DRAW, as_bytes(indices))?;

            let stride = V::stride() as GLsizei;
            for attr in V::attributes() {
                gl::EnableVertexAttribArray(attr.location);
                gl::VertexAttribPointer(
                    attr.location,
                    attr.size,
                    gl::FLOAT,
                    gl::FALSE,
                    stride,
                    attr.offset as *const c_void,
                );
            }

            gl::BindVertexArray(0);
            check()?;
            Ok(mesh)
        }
    }

    /// Attaches a texture, bound on draw to the next free unit.
    pub fn add_texture(&mut self, kind: TextureKind, texture: Rc<Texture>) {
        self.textures.push((kind, texture));
    }

    pub fn with_texture(mut self, kind: TextureKind, texture: Rc<Texture>) -> Self {
        self.add_texture(kind, texture);
        self
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    #[inline]
    pub fn num_indices(&self) -> usize {
        self.num_indices
    }

    /// Overwrites the index buffer with a permutation of the same length.
    pub fn update_indices(&mut self, indices: &[u32]) -> Result<()> {
        if indices.len() != self.num_indices {
            bail!(
                "Index buffer holds {} indices, but got {}.",
                self.num_indices,
                indices.len()
            );
        }

        unsafe {
            gl::BindVertexArray(self.vao);
            update_buffer(gl::ELEMENT_ARRAY_BUFFER, self.ebo, 0, as_bytes(indices))?;
            gl::BindVertexArray(0);
        }

        Ok(())
    }

    /// Uploads per-instance model matrices, exposed to shaders as a `mat4`
    /// attribute at `INSTANCE_LOCATION` with divisor 1.
    pub fn set_instances(&mut self, transforms: &[Matrix4<f32>]) -> Result<()> {
        unsafe {
            gl::BindVertexArray(self.vao);

            if let Some((vbo, _)) = self.instances.take() {
                gl::DeleteBuffers(1, &vbo);
            }

            let vbo = create_buffer(gl::ARRAY_BUFFER, gl::STATIC_DRAW, as_bytes(transforms))?;
            self.instances = Some((vbo, transforms.len()));

            let stride = mem::size_of::<Matrix4<f32>>() as GLsizei;
            let column = mem::size_of::<[f32; 4]>();
            for i in 0..4 {
                let location = INSTANCE_LOCATION + i as GLuint;
                gl::EnableVertexAttribArray(location);
                gl::VertexAttribPointer(
                    location,
                    4,
                    gl::FLOAT,
                    gl::FALSE,
                    stride,
                    (i * column) as *const c_void,
                );
                gl::VertexAttribDivisor(location, 1);
            }

            gl::BindVertexArray(0);
            check()
        }
    }

    #[inline]
    pub fn num_instances(&self) -> usize {
        self.instances.map(|(_, n)| n).unwrap_or(0)
    }

    /// Binds `shader` and the attached textures, then draws the mesh once.
    pub fn draw(&self, shader: &Shader) {
        shader.bind();
        self.bind_textures(shader);

        unsafe {
            gl::BindVertexArray(self.vao);
            gl::DrawElements(
                gl::TRIANGLES,
                self.num_indices as GLsizei,
                gl::UNSIGNED_INT,
                ptr::null(),
            );
            gl::BindVertexArray(0);
            gl::ActiveTexture(gl::TEXTURE0);
        }
    }

    /// Draws every uploaded instance in one call. Does nothing if no instance
    /// was uploaded.
    pub fn draw_instanced(&self, shader: &Shader) {
        let count = self.num_instances();
        if count == 0 {
            return;
        }

        shader.bind();
        self.bind_textures(shader);

        unsafe {
            gl::BindVertexArray(self.vao);
            gl::DrawElementsInstanced(
                gl::TRIANGLES,
                self.num_indices as GLsizei,
                gl::UNSIGNED_INT,
                ptr::null(),
                count as GLsizei,
            );
            gl::BindVertexArray(0);
            gl::ActiveTexture(gl::TEXTURE0);
        }
    }

    fn bind_textures(&self, shader: &Shader) {
        let names = sampler_names(self.textures.iter().map(|&(kind, _)| kind));
        for (unit, (name, &(_, ref texture))) in names.iter().zip(self.textures.iter()).enumerate() {
            texture.bind(unit as u32);
            shader.set_uniform(name, unit as i32);
        }
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        unsafe {
            if let Some((vbo, _)) = self.instances {
                gl::DeleteBuffers(1, &vbo);
            }

            gl::DeleteBuffers(1, &self.ebo);
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteVertexArrays(1, &self.vao);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_layout() {
        assert_eq!(Vertex::stride(), 14 * 4);

        let attributes = Vertex::attributes();
        let offsets: Vec<_> = attributes.iter().map(|v| (v.location, v.offset)).collect();
        assert_eq!(offsets, vec![(0, 0), (1, 12), (2, 24), (3, 32), (4, 44)]);

        assert_eq!(PositionVertex::stride(), 12);
        assert_eq!(PositionVertex::attributes().len(), 1);
    }

    #[test]
    fn instance_locations_do_not_overlap_vertex() {
        let max = Vertex::attributes().iter().map(|v| v.location).max();
        assert!(max < Some(INSTANCE_LOCATION));
    }

    #[test]
    fn samplers() {
        let names = sampler_names(vec![
            TextureKind::Diffuse,
            TextureKind::Specular,
            TextureKind::Diffuse,
            TextureKind::Normal,
        ]);

        assert_eq!(
            names,
            vec![
                "uMaterial.texture_diffuse1",
                "uMaterial.texture_specular1",
                "uMaterial.texture_diffuse2",
                "uMaterial.texture_normal1"
            ]
        );
    }
}
