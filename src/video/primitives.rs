//! Procedural meshes: quad, plane, cube, skybox cube and icosphere.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::errors::*;
use crate::math::*;

use super::mesh::{Mesh, PositionVertex, Vertex};
use super::shader::Shader;

/// CPU side vertices and indices of a mesh.
#[derive(Debug, Clone, Default)]
pub struct Geometry {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Geometry {
    /// Builds vertices from positions, normals and texture coordinates, then
    /// derives the tangent space of every vertex.
    pub fn new(
        positions: &[[f32; 3]],
        normals: &[[f32; 3]],
        texcoords: &[[f32; 2]],
        indices: Vec<u32>,
    ) -> Self {
        let spaces = tangent::vertices(positions, texcoords, &indices);

        let vertices = (0..positions.len())
            .map(|i| {
                Vertex::new(
                    positions[i],
                    normals[i],
                    texcoords[i],
                    spaces[i].tangent.into(),
                    spaces[i].bitangent.into(),
                )
            })
            .collect();

        Geometry { vertices, indices }
    }

    pub fn into_mesh(self) -> Result<Mesh> {
        Mesh::new(&self.vertices, &self.indices)
    }
}

/// A `[-1, 1]` square in the XY plane facing `+Z`. Drawn without transform it
/// covers the whole viewport.
pub fn quad_geometry() -> Geometry {
    let positions = [
        [-1.0, -1.0, 0.0],
        [1.0, -1.0, 0.0],
        [1.0, 1.0, 0.0],
        [-1.0, 1.0, 0.0],
    ];

    let normals = [[0.0, 0.0, 1.0]; 4];
    let texcoords = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    Geometry::new(&positions, &normals, &texcoords, vec![0, 1, 2, 0, 2, 3])
}

/// A `[-1, 1]` square in the XZ plane facing `+Y`, with texture coordinates
/// repeated `tiling` times.
pub fn plane_geometry(tiling: f32) -> Geometry {
    let positions = [
        [-1.0, 0.0, 1.0],
        [1.0, 0.0, 1.0],
        [1.0, 0.0, -1.0],
        [-1.0, 0.0, -1.0],
    ];

    let normals = [[0.0, 1.0, 0.0]; 4];
    let texcoords = [[0.0, 0.0], [tiling, 0.0], [tiling, tiling], [0.0, tiling]];

    Geometry::new(&positions, &normals, &texcoords, vec![0, 1, 2, 0, 2, 3])
}

const CUBE_POINTS: [[f32; 3]; 8] = [
    [-0.5, -0.5, 0.5],
    [0.5, -0.5, 0.5],
    [0.5, 0.5, 0.5],
    [-0.5, 0.5, 0.5],
    [-0.5, -0.5, -0.5],
    [0.5, -0.5, -0.5],
    [0.5, 0.5, -0.5],
    [-0.5, 0.5, -0.5],
];

/// A unit cube centered at the origin: 24 vertices, so that every face has
/// its own normal and texture coordinates, and 36 counter-clockwise indices.
pub fn cube_geometry() -> Geometry {
    let texcoords = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    // Corner indices and outward normal of every face.
    let faces: [([usize; 4], [f32; 3]); 6] = [
        ([0, 1, 2, 3], [0.0, 0.0, 1.0]),
        ([1, 5, 6, 2], [1.0, 0.0, 0.0]),
        ([5, 4, 7, 6], [0.0, 0.0, -1.0]),
        ([4, 0, 3, 7], [-1.0, 0.0, 0.0]),
        ([3, 2, 6, 7], [0.0, 1.0, 0.0]),
        ([4, 5, 1, 0], [0.0, -1.0, 0.0]),
    ];

    let mut positions = Vec::with_capacity(24);
    let mut normals = Vec::with_capacity(24);
    let mut uvs = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (i, &(corners, normal)) in faces.iter().enumerate() {
        for (j, &corner) in corners.iter().enumerate() {
            positions.push(CUBE_POINTS[corner]);
            normals.push(normal);
            uvs.push(texcoords[j]);
        }

        let base = (i * 4) as u32;
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Geometry::new(&positions, &normals, &uvs, indices)
}

/// A unit sphere subdivided from an icosahedron. Texture coordinates are the
/// equirectangular longitude and latitude.
pub fn sphere_geometry(iteration: usize) -> Geometry {
    use std::f32::consts::PI;

    let mut points: Vec<Vector3<f32>> = Vec::new();
    let push = |points: &mut Vec<Vector3<f32>>, v: Vector3<f32>| {
        points.push(v.normalize());
        (points.len() - 1) as u32
    };

    let t = (1.0f32 + 5.0f32.sqrt()) / 2.0f32;
    for &v in &[
        [-1.0, t, 0.0],
        [1.0, t, 0.0],
        [-1.0, -t, 0.0],
        [1.0, -t, 0.0],
        [0.0, -1.0, t],
        [0.0, 1.0, t],
        [0.0, -1.0, -t],
        [0.0, 1.0, -t],
        [t, 0.0, -1.0],
        [t, 0.0, 1.0],
        [-t, 0.0, -1.0],
        [-t, 0.0, 1.0],
    ] {
        push(&mut points, Vector3::from(v));
    }

    let mut faces: Vec<[u32; 3]> = vec![
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];

    let mut cache: HashMap<(u32, u32), u32> = HashMap::new();
    for _ in 0..iteration {
        let mut next = Vec::with_capacity(faces.len() * 4);
        {
            let mut mid = |a: u32, b: u32| {
                let key = (a.min(b), a.max(b));
                if let Some(&v) = cache.get(&key) {
                    return v;
                }

                let m = (points[a as usize] + points[b as usize]) * 0.5;
                let v = push(&mut points, m);
                cache.insert(key, v);
                v
            };

            for face in &faces {
                let a = mid(face[0], face[1]);
                let b = mid(face[1], face[2]);
                let c = mid(face[2], face[0]);

                next.push([face[0], a, c]);
                next.push([face[1], b, a]);
                next.push([face[2], c, b]);
                next.push([a, b, c]);
            }
        }

        faces = next;
    }

    let positions: Vec<[f32; 3]> = points.iter().map(|&v| v.into()).collect();
    let texcoords: Vec<[f32; 2]> = points
        .iter()
        .map(|v| [v.z.atan2(v.x) / (2.0 * PI) + 0.5, v.y.asin() / PI + 0.5])
        .collect();

    let indices = faces.iter().flat_map(|v| v.iter().cloned()).collect();
    Geometry::new(&positions, &positions, &texcoords, indices)
}

pub fn quad() -> Result<Mesh> {
    quad_geometry().into_mesh()
}

pub fn plane(tiling: f32) -> Result<Mesh> {
    plane_geometry(tiling).into_mesh()
}

pub fn cube() -> Result<Mesh> {
    cube_geometry().into_mesh()
}

pub fn sphere(iteration: usize) -> Result<Mesh> {
    sphere_geometry(iteration).into_mesh()
}

/// The 8 corners and 36 indices of the `[-1, 1]` skybox cube, faces in `right,
/// left, top, bottom, front, back` order. Only positions are needed, they
/// double as cubemap sampling directions.
pub fn skybox_geometry() -> (Vec<PositionVertex>, Vec<u32>) {
    let vertices = CUBE_POINTS
        .iter()
        .map(|p| PositionVertex::new([p[0] * 2.0, p[1] * 2.0, p[2] * 2.0]))
        .collect();

    let indices = vec![
        1, 5, 6, 1, 6, 2, // right
        4, 0, 3, 4, 3, 7, // left
        3, 2, 6, 3, 6, 7, // top
        4, 5, 1, 4, 1, 0, // bottom
        0, 1, 2, 0, 2, 3, // front
        5, 4, 7, 5, 7, 6, // back
    ];

    (vertices, indices)
}

/// Returns the face order, farthest from `eye` first, of faces whose centers
/// are given in model space.
pub fn back_to_front(centers: &[Point3<f32>; 6], model: &Matrix4<f32>, eye: Point3<f32>) -> [usize; 6] {
    let distances: Vec<f32> = centers
        .iter()
        .map(|&c| model.transform_point(c).distance2(eye))
        .collect();

    let mut order = [0, 1, 2, 3, 4, 5];
    order.sort_by(|&a, &b| {
        distances[b]
            .partial_cmp(&distances[a])
            .unwrap_or(Ordering::Equal)
    });

    order
}

/// A cube meant to be drawn with alpha blending. Its faces are re-sorted back
/// to front before drawing, so that the inner faces show through the outer
/// ones.
#[derive(Debug)]
pub struct TransparentCube {
    mesh: Mesh,
    faces: [[u32; 6]; 6],
    centers: [Point3<f32>; 6],
}

impl TransparentCube {
    pub fn new() -> Result<TransparentCube> {
        let geometry = cube_geometry();

        let mut faces = [[0u32; 6]; 6];
        let mut centers = [Point3::origin(); 6];
        for i in 0..6 {
            faces[i].copy_from_slice(&geometry.indices[i * 6..i * 6 + 6]);

            let sum = geometry.vertices[i * 4..i * 4 + 4]
                .iter()
                .fold(Vector3::zero(), |acc, v| acc + Vector3::from(v.position));
            centers[i] = Point3::from_vec(sum / 4.0);
        }

        Ok(TransparentCube {
            mesh: geometry.into_mesh()?,
            faces,
            centers,
        })
    }

    #[inline]
    pub fn mesh_mut(&mut self) -> &mut Mesh {
        &mut self.mesh
    }

    /// Rewrites the index buffer so faces are drawn back to front as seen
    /// from `eye`.
    pub fn sort(&mut self, model: &Matrix4<f32>, eye: Point3<f32>) -> Result<()> {
        let order = back_to_front(&self.centers, model, eye);

        let mut indices = Vec::with_capacity(36);
        for &face in &order {
            indices.extend_from_slice(&self.faces[face]);
        }

        self.mesh.update_indices(&indices)
    }

    pub fn draw(&self, shader: &Shader) {
        self.mesh.draw(shader);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_outward(geometry: &Geometry) {
        for tri in geometry.indices.chunks(3) {
            let p: Vec<Vector3<f32>> = tri
                .iter()
                .map(|&i| Vector3::from(geometry.vertices[i as usize].position))
                .collect();

            let face = (p[1] - p[0]).cross(p[2] - p[0]);
            let n = Vector3::from(geometry.vertices[tri[0] as usize].normal);
            assert!(face.dot(n) > 0.0, "triangle {:?} is not facing its normal", tri);
        }
    }

    #[test]
    fn cube() {
        let cube = cube_geometry();
        assert_eq!(cube.vertices.len(), 24);
        assert_eq!(cube.indices.len(), 36);
        assert_outward(&cube);
    }

    #[test]
    fn plane_and_quad() {
        assert_outward(&plane_geometry(4.0));
        assert_outward(&quad_geometry());
        assert_eq!(plane_geometry(4.0).vertices[2].texcoord, [4.0, 4.0]);
    }

    #[test]
    fn sphere() {
        let sphere = sphere_geometry(2);
        assert_eq!(sphere.indices.len(), 20 * 16 * 3);
        for v in &sphere.vertices {
            let len = Vector3::from(v.position).magnitude();
            assert!((len - 1.0).abs() < 1e-5);
        }

        assert_outward(&sphere);
    }

    #[test]
    fn skybox() {
        let (vertices, indices) = skybox_geometry();
        assert_eq!(vertices.len(), 8);
        assert_eq!(indices.len(), 36);
        assert!(indices.iter().all(|&i| i < 8));
    }

    #[test]
    fn faces_sorted_by_distance() {
        let centers = [
            Point3::new(0.0, 0.0, 0.5),
            Point3::new(0.5, 0.0, 0.0),
            Point3::new(0.0, 0.0, -0.5),
            Point3::new(-0.5, 0.0, 0.0),
            Point3::new(0.0, 0.5, 0.0),
            Point3::new(0.0, -0.5, 0.0),
        ];

        let order = back_to_front(&centers, &Matrix4::identity(), Point3::new(0.0, 0.0, 5.0));
        assert_eq!(order[0], 2);
        assert_eq!(order[5], 0);

        let model = Matrix4::from_angle_y(Deg(180.0));
        let order = back_to_front(&centers, &model, Point3::new(0.0, 0.0, 5.0));
        assert_eq!(order[0], 0);
        assert_eq!(order[5], 2);
    }
}
