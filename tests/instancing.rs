extern crate lumen;
extern crate rand;

use lumen::instancing;
use lumen::prelude::*;
use rand::prng::XorShiftRng;
use rand::SeedableRng;

#[test]
fn asteroid_belt() {
    let mut rng = XorShiftRng::from_seed([42; 16]);
    let (radius, offset) = (150.0, 25.0);
    let transforms = instancing::asteroid_field(&mut rng, 2000, radius, offset);
    assert_eq!(transforms.len(), 2000);

    for (i, m) in transforms.iter().enumerate() {
        let angle = i as f32 / 2000.0 * 360.0;
        let p = m.w.truncate();

        assert!((p.x - angle.sin() * radius).abs() <= offset + 1e-3);
        assert!((p.z - angle.cos() * radius).abs() <= offset + 1e-3);
        assert!(p.y.abs() <= offset * 0.4 + 1e-3);

        // The upper 3x3 is a rotation scaled uniformly.
        let scale = m.x.truncate().magnitude();
        assert!(scale >= 0.05 - 1e-5 && scale < 0.25);
        assert!((m.y.truncate().magnitude() - scale).abs() < 1e-4);
        assert!((m.z.truncate().magnitude() - scale).abs() < 1e-4);
    }
}

#[test]
fn rocks_spin_around_a_shared_axis() {
    let mut rng = XorShiftRng::from_seed([3; 16]);
    let axis = Vector3::from(instancing::ROCK_AXIS).normalize();

    for m in instancing::asteroid_field(&mut rng, 100, 150.0, 25.0) {
        let scale = m.x.truncate().magnitude();
        let linear = m * axis.extend(0.0);
        assert!((linear.truncate() - axis * scale).magnitude() < 1e-4);
    }
}

#[test]
fn empty_field() {
    let mut rng = XorShiftRng::from_seed([1; 16]);
    assert!(instancing::asteroid_field(&mut rng, 0, 150.0, 25.0).is_empty());
}
