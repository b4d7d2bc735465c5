//! View and projection matrices for rendering into the six faces of a cubemap.

use super::*;

/// Face order follows `GL_TEXTURE_CUBE_MAP_POSITIVE_X + i`: the look direction and
/// the up vector of every face.
pub const FACES: [([f32; 3], [f32; 3]); 6] = [
    ([1.0, 0.0, 0.0], [0.0, -1.0, 0.0]),
    ([-1.0, 0.0, 0.0], [0.0, -1.0, 0.0]),
    ([0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
    ([0.0, -1.0, 0.0], [0.0, 0.0, -1.0]),
    ([0.0, 0.0, 1.0], [0.0, -1.0, 0.0]),
    ([0.0, 0.0, -1.0], [0.0, -1.0, 0.0]),
];

/// Returns the six look-at matrices of a cubemap centered at `eye`.
pub fn face_views(eye: Point3<f32>) -> [Matrix4<f32>; 6] {
    let mut views = [Matrix4::identity(); 6];
    for (view, &(dir, up)) in views.iter_mut().zip(FACES.iter()) {
        *view = Matrix4::look_at(eye, eye + Vector3::from(dir), Vector3::from(up));
    }

    views
}

/// Returns the light-space matrices used to render an omnidirectional shadow
/// map: a 90 degree square perspective combined with every face view.
pub fn shadow_transforms(eye: Point3<f32>, near: f32, far: f32) -> [Matrix4<f32>; 6] {
    let projection = perspective(Deg(90.0), 1.0, near, far);

    let mut transforms = face_views(eye);
    for v in &mut transforms {
        *v = projection * *v;
    }

    transforms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faces_are_orthogonal() {
        for &(dir, up) in &FACES {
            let d = Vector3::from(dir);
            let u = Vector3::from(up);
            assert_eq!(d.dot(u), 0.0);
            assert_eq!(d.magnitude2(), 1.0);
        }
    }

    #[test]
    fn shadow_transforms_put_face_center_in_clip_center() {
        let eye = Point3::new(0.0, 0.0, 2.0);
        let transforms = shadow_transforms(eye, 1.0, 25.0);

        for (m, &(dir, _)) in transforms.iter().zip(FACES.iter()) {
            let p = eye + Vector3::from(dir) * 5.0;
            let clip = m * p.to_homogeneous();
            assert!((clip.x / clip.w).abs() < 1e-5);
            assert!((clip.y / clip.w).abs() < 1e-5);
            assert!(clip.z / clip.w > -1.0 && clip.z / clip.w < 1.0);
        }
    }
}
