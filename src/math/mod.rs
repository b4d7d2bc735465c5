//! This module contains the math utils that mainly comes from `cgmath`, plus the
//! few closed-form helpers the demos need (tangent space, cubemap face views).

pub use cgmath::*;

pub mod cubemap;
pub mod tangent;

/// Removes the translation part of a view matrix. Used to keep the skybox
/// centered on the viewer.
pub fn strip_translation(m: Matrix4<f32>) -> Matrix4<f32> {
    Matrix4::from(Matrix3::from_cols(
        m.x.truncate(),
        m.y.truncate(),
        m.z.truncate(),
    ))
}

/// Builds a model matrix the way the demos compose them: translate, then rotate,
/// then scale.
pub fn model_matrix(
    translation: Vector3<f32>,
    rotation: Option<(Vector3<f32>, Rad<f32>)>,
    scale: Vector3<f32>,
) -> Matrix4<f32> {
    let mut m = Matrix4::from_translation(translation);
    if let Some((axis, angle)) = rotation {
        m = m * Matrix4::from_axis_angle(axis.normalize(), angle);
    }

    m * Matrix4::from_nonuniform_scale(scale.x, scale.y, scale.z)
}

/// Computes smooth per-vertex normals by accumulating face normals of an
/// indexed triangle list.
pub fn vertex_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut normals = vec![Vector3::zero(); positions.len()];

    for tri in indices.chunks(3) {
        if tri.len() < 3 {
            break;
        }

        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let p0 = Vector3::from(positions[a]);
        let p1 = Vector3::from(positions[b]);
        let p2 = Vector3::from(positions[c]);

        let n = (p1 - p0).cross(p2 - p0);
        normals[a] += n;
        normals[b] += n;
        normals[c] += n;
    }

    normals
        .into_iter()
        .map(|n| {
            if n.magnitude2() > ::std::f32::EPSILON {
                n.normalize().into()
            } else {
                [0.0, 1.0, 0.0]
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_translation_keeps_rotation() {
        let rotation = Matrix4::from_angle_y(Deg(30.0f32));
        let m = Matrix4::from_translation(Vector3::new(1.0, 2.0, 3.0)) * rotation;

        let stripped = strip_translation(m);
        assert_eq!(stripped.w, Vector4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(stripped.x, rotation.x);
        assert_eq!(stripped.z, rotation.z);
    }

    #[test]
    fn model_matrix_order() {
        let m = model_matrix(
            Vector3::new(1.0, 0.0, 0.0),
            None,
            Vector3::new(2.0, 2.0, 2.0),
        );

        let p = m.transform_point(Point3::new(1.0, 1.0, 1.0));
        assert_eq!(p, Point3::new(3.0, 2.0, 2.0));
    }

    #[test]
    fn flat_triangle_normals() {
        let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]];
        let normals = vertex_normals(&positions, &[0, 1, 2]);
        for n in normals {
            assert_eq!(n, [0.0, 1.0, 0.0]);
        }
    }
}
