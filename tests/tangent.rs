extern crate lumen;
#[macro_use]
extern crate approx;

use lumen::math::tangent::{self, UvVertex};
use lumen::math::*;
use lumen::video::primitives;

fn square() -> [UvVertex; 4] {
    [
        UvVertex::new([-1.0, 1.0, 0.0], [0.0, 1.0]),
        UvVertex::new([-1.0, -1.0, 0.0], [0.0, 0.0]),
        UvVertex::new([1.0, -1.0, 0.0], [1.0, 0.0]),
        UvVertex::new([1.0, 1.0, 0.0], [1.0, 1.0]),
    ]
}

#[test]
fn square_facing_z() {
    let spaces = tangent::quad(&square()).unwrap();
    for space in &spaces {
        assert!(relative_eq!(space.tangent, Vector3::unit_x(), epsilon = 1e-6));
        assert!(relative_eq!(space.bitangent, Vector3::unit_y(), epsilon = 1e-6));
    }
}

#[test]
fn follows_texture_rotation() {
    // Same square, texture rotated by 90 degrees: U now runs along -Y.
    let q = [
        UvVertex::new([-1.0, 1.0, 0.0], [0.0, 0.0]),
        UvVertex::new([-1.0, -1.0, 0.0], [1.0, 0.0]),
        UvVertex::new([1.0, -1.0, 0.0], [1.0, 1.0]),
        UvVertex::new([1.0, 1.0, 0.0], [0.0, 1.0]),
    ];

    let spaces = tangent::quad(&q).unwrap();
    assert!(relative_eq!(spaces[0].tangent, -Vector3::unit_y(), epsilon = 1e-6));
    assert!(relative_eq!(spaces[0].bitangent, Vector3::unit_x(), epsilon = 1e-6));
}

#[test]
fn table_rows() {
    let q = square();
    let spaces = tangent::quad(&q).unwrap();
    let table = tangent::format_quad(&q, &spaces);

    let rows: Vec<Vec<f32>> = table
        .lines()
        .map(|line| line.split_whitespace().map(|v| v.parse().unwrap()).collect())
        .collect();

    assert_eq!(rows.len(), 6);
    assert!(rows.iter().all(|row| row.len() == 9));

    // Vertices are emitted in the order 1 2 3 1 3 4.
    let expected = [0, 1, 2, 0, 2, 3];
    for (row, &v) in rows.iter().zip(expected.iter()) {
        let p = q[v].position;
        assert_eq!(&row[0..3], &[p.x, p.y, p.z]);
        assert_eq!(&row[3..9], &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    }

    assert_eq!(tangent::TABLE_HEADER.split_whitespace().count(), 9);
}

#[test]
fn parse_file_contents() {
    let text = "-1 1 0 0 1\n-1 -1 0 0 0\n1 -1 0 1 0\n1 1 0 1 1\n0.5 0.5";
    let floats = tangent::parse_floats(text);
    assert_eq!(floats.len(), 22);

    let quads = tangent::parse_quads(&floats);
    assert_eq!(quads.len(), 1);
    assert_eq!(quads[0], square());
}

#[test]
fn primitives_are_orthonormal() {
    let geometry = primitives::cube_geometry();
    for v in &geometry.vertices {
        let n = Vector3::from(v.normal);
        let t = Vector3::from(v.tangent);
        let b = Vector3::from(v.bitangent);

        assert!(relative_eq!(t.magnitude(), 1.0, epsilon = 1e-5));
        assert!(relative_eq!(b.magnitude(), 1.0, epsilon = 1e-5));
        assert!(t.dot(n).abs() < 1e-5);
        assert!(b.dot(n).abs() < 1e-5);
    }
}

#[test]
fn file_table_per_quad() {
    let first = "-1 1 0 0 1 -1 -1 0 0 0 1 -1 0 1 0 1 1 0 1 1";
    let second = "-1 1 2 0 1 -1 -1 2 0 0 1 -1 2 1 0 1 1 2 1 1";
    let floats = tangent::parse_floats(&format!("{}\n{}\n", first, second));

    let out = tangent::format_file(&floats);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 14);
    assert_eq!(lines[0], tangent::TABLE_HEADER);
    assert_eq!(lines[7], tangent::TABLE_HEADER);

    assert_eq!(lines[1], "-1.0  1.0  0.0  1.0  0.0  0.0  0.0  1.0  0.0");
    assert_eq!(lines[6], " 1.0  1.0  0.0  1.0  0.0  0.0  0.0  1.0  0.0");
    assert_eq!(lines[8], "-1.0  1.0  2.0  1.0  0.0  0.0  0.0  1.0  0.0");
    assert_eq!(lines[13], " 1.0  1.0  2.0  1.0  0.0  0.0  0.0  1.0  0.0");
}

#[test]
fn file_without_whole_quad() {
    let floats = tangent::parse_floats("-1 1 0 0 1 -1 -1 0 0 0 1 -1 0 1 0 1 1 0 1");
    assert_eq!(floats.len(), 19);
    assert_eq!(tangent::format_file(&floats), "");
    assert_eq!(tangent::format_file(&[]), "");
}
