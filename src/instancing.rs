//! Transforms of the rock belt drawn by the instancing demo.

use rand::Rng;

use crate::math::*;

/// Rotation axis shared by every rock, before normalization.
pub const ROCK_AXIS: [f32; 3] = [0.4, 0.6, 0.8];

/// Draws a displacement in `[-offset, offset)` with a resolution of 0.01.
fn displacement<R: Rng>(rng: &mut R, offset: f32) -> f32 {
    let steps = (2.0 * offset * 100.0) as i32;
    if steps <= 0 {
        return 0.0;
    }

    rng.gen_range(0, steps) as f32 / 100.0 - offset
}

/// Scatters `count` rocks on a ring of `radius` around the origin.
///
/// Rock `i` sits at angle `i / count * 360`, taken as radians so that the ring
/// is swept several times over, pushed off the circle by independent random
/// displacements on every axis (flattened by 0.4 along Y). Each rock gets a
/// uniform scale in `[0.05, 0.25)` and a random rotation around `ROCK_AXIS`.
/// The transform is `translation * scale * rotation`.
pub fn asteroid_field<R: Rng>(rng: &mut R, count: usize, radius: f32, offset: f32) -> Vec<Matrix4<f32>> {
    let axis = Vector3::from(ROCK_AXIS).normalize();
    let mut transforms = Vec::with_capacity(count);

    for i in 0..count {
        let angle = i as f32 / count as f32 * 360.0;

        let x = angle.sin() * radius + displacement(rng, offset);
        let y = displacement(rng, offset) * 0.4;
        let z = angle.cos() * radius + displacement(rng, offset);

        let scale = rng.gen_range(0, 20) as f32 / 100.0 + 0.05;
        let rotation = rng.gen_range(0, 360) as f32;

        transforms.push(
            Matrix4::from_translation(Vector3::new(x, y, z))
                * Matrix4::from_scale(scale)
                * Matrix4::from_axis_angle(axis, Rad(rotation)),
        );
    }

    transforms
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prng::XorShiftRng;
    use rand::SeedableRng;

    #[test]
    fn displacement_range() {
        let mut rng = XorShiftRng::from_seed([7; 16]);
        for _ in 0..1000 {
            let v = displacement(&mut rng, 25.0);
            assert!(v >= -25.0 && v < 25.0);
        }

        assert_eq!(displacement(&mut rng, 0.0), 0.0);
    }
}
