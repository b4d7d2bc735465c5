//! Wavefront OBJ models loaded with `tobj`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tobj;

use crate::errors::*;
use crate::math;

use super::mesh::{Mesh, TextureKind};
use super::primitives::Geometry;
use super::shader::Shader;
use super::texture::{Texture, TextureParams};

/// A list of meshes sharing a texture cache.
#[derive(Debug)]
pub struct Model {
    meshes: Vec<Mesh>,
}

impl Model {
    /// Loads every object of an OBJ file, with the diffuse, specular and normal
    /// textures of its materials. Textures are resolved relative to the file and
    /// loaded once. Diffuse textures are stored as sRGB when `gamma` is set.
    pub fn from_file<P: AsRef<Path>>(path: P, gamma: bool) -> Result<Model> {
        let path = path.as_ref();
        let (models, materials) = tobj::load_obj(path).map_err(|err| Error::model(path, &err))?;
        let directory = path.parent().map(Path::to_path_buf).unwrap_or_default();

        let mut cache = TextureCache {
            directory,
            textures: HashMap::new(),
        };

        let mut meshes = Vec::with_capacity(models.len());
        for model in models {
            let mesh = model.mesh;
            if mesh.positions.is_empty() || mesh.indices.is_empty() {
                debug!("Skips empty object {} of {:?}.", model.name, path);
                continue;
            }

            let positions: Vec<[f32; 3]> = mesh
                .positions
                .chunks(3)
                .map(|v| [v[0], v[1], v[2]])
                .collect();

            let normals = if mesh.normals.len() == mesh.positions.len() {
                mesh.normals.chunks(3).map(|v| [v[0], v[1], v[2]]).collect()
            } else {
                math::vertex_normals(&positions, &mesh.indices)
            };

            let texcoords: Vec<[f32; 2]> = if mesh.texcoords.len() / 2 == positions.len() {
                mesh.texcoords.chunks(2).map(|v| [v[0], v[1]]).collect()
            } else {
                vec![[0.0, 0.0]; positions.len()]
            };

            let mut gpu = Geometry::new(&positions, &normals, &texcoords, mesh.indices).into_mesh()?;

            if let Some(material) = mesh.material_id.and_then(|id| materials.get(id)) {
                let slots = [
                    (TextureKind::Diffuse, &material.diffuse_texture, gamma),
                    (TextureKind::Specular, &material.specular_texture, false),
                    (TextureKind::Normal, &material.normal_texture, false),
                ];

                for &(kind, name, srgb) in &slots {
                    if !name.is_empty() {
                        gpu.add_texture(kind, cache.load(name, srgb)?);
                    }
                }
            }

            meshes.push(gpu);
        }

        info!(
            "Loaded model {:?} with {} meshes and {} textures.",
            path,
            meshes.len(),
            cache.textures.len()
        );

        Ok(Model { meshes })
    }

    /// Loads a model, or builds the fallback mesh if the file is missing or
    /// malformed.
    pub fn from_file_or<P, F>(path: P, gamma: bool, fallback: F) -> Result<Model>
    where
        P: AsRef<Path>,
        F: FnOnce() -> Result<Mesh>,
    {
        match Model::from_file(path.as_ref(), gamma) {
            Ok(model) => Ok(model),
            Err(err) => {
                warn!("{}. Falls back to a procedural mesh.", err);
                Ok(Model::from(fallback()?))
            }
        }
    }

    #[inline]
    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    #[inline]
    pub fn meshes_mut(&mut self) -> &mut [Mesh] {
        &mut self.meshes
    }

    pub fn draw(&self, shader: &Shader) {
        for mesh in &self.meshes {
            mesh.draw(shader);
        }
    }

    pub fn draw_instanced(&self, shader: &Shader) {
        for mesh in &self.meshes {
            mesh.draw_instanced(shader);
        }
    }
}

impl From<Mesh> for Model {
    fn from(mesh: Mesh) -> Self {
        Model { meshes: vec![mesh] }
    }
}

struct TextureCache {
    directory: PathBuf,
    textures: HashMap<(PathBuf, bool), Rc<Texture>>,
}

impl TextureCache {
    fn load(&mut self, name: &str, srgb: bool) -> Result<Rc<Texture>> {
        // Some exporters write Windows separators.
        let file = self.directory.join(name.replace('\\', "/"));
        let key = (file, srgb);

        if let Some(texture) = self.textures.get(&key) {
            return Ok(texture.clone());
        }

        let params = TextureParams::default().srgb(srgb);
        let texture = Rc::new(Texture::from_file_or_checker(&key.0, params)?);
        self.textures.insert(key, texture.clone());
        Ok(texture)
    }
}
