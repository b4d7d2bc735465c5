//! Tangent space computation for normal and parallax mapping.
//!
//! The tangent `T` and bitangent `B` of a triangle satisfy
//!
//! ```text
//! E1 = dU1.x * T + dU1.y * B
//! E2 = dU2.x * T + dU2.y * B
//! ```
//!
//! where `E1`, `E2` are the position edges and `dU1`, `dU2` the texture
//! coordinate edges of the triangle.

use super::*;

/// A vertex with a position and a texture coordinate, the input of the
/// tangent computation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UvVertex {
    pub position: Vector3<f32>,
    pub texcoord: Vector2<f32>,
}

impl UvVertex {
    pub fn new(position: [f32; 3], texcoord: [f32; 2]) -> Self {
        UvVertex {
            position: position.into(),
            texcoord: texcoord.into(),
        }
    }
}

/// The tangent and bitangent of a surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TangentSpace {
    pub tangent: Vector3<f32>,
    pub bitangent: Vector3<f32>,
}

/// Computes the normalized tangent space of a triangle. Returns `None` if the
/// texture coordinates are degenerate.
pub fn triangle(v1: &UvVertex, v2: &UvVertex, v3: &UvVertex) -> Option<TangentSpace> {
    let e1 = v2.position - v1.position;
    let e2 = v3.position - v1.position;
    let d1 = v2.texcoord - v1.texcoord;
    let d2 = v3.texcoord - v1.texcoord;

    let det = d1.x * d2.y - d2.x * d1.y;
    if det.abs() <= ::std::f32::EPSILON {
        return None;
    }

    let f = 1.0 / det;
    let tangent = (e1 * d2.y - e2 * d1.y) * f;
    let bitangent = (e2 * d1.x - e1 * d2.x) * f;

    Some(TangentSpace {
        tangent: tangent.normalize(),
        bitangent: bitangent.normalize(),
    })
}

/// Computes the tangent spaces of the two triangles `(1, 2, 3)` and `(1, 3, 4)`
/// of a quad.
pub fn quad(q: &[UvVertex; 4]) -> Option<[TangentSpace; 2]> {
    let t1 = triangle(&q[0], &q[1], &q[2])?;
    let t2 = triangle(&q[0], &q[2], &q[3])?;
    Some([t1, t2])
}

/// Computes per-vertex tangent spaces of an indexed triangle list by averaging
/// the tangent spaces of adjacent triangles. Vertices without a valid
/// contribution fall back to the unit X and Y axes.
pub fn vertices(
    positions: &[[f32; 3]],
    texcoords: &[[f32; 2]],
    indices: &[u32],
) -> Vec<TangentSpace> {
    let mut tangents = vec![Vector3::zero(); positions.len()];
    let mut bitangents = vec![Vector3::zero(); positions.len()];

    for tri in indices.chunks(3) {
        if tri.len() < 3 {
            break;
        }

        let idx = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let v: Vec<UvVertex> = idx
            .iter()
            .map(|&i| UvVertex::new(positions[i], texcoords[i]))
            .collect();

        if let Some(ts) = triangle(&v[0], &v[1], &v[2]) {
            for &i in &idx {
                tangents[i] += ts.tangent;
                bitangents[i] += ts.bitangent;
            }
        }
    }

    tangents
        .into_iter()
        .zip(bitangents)
        .map(|(t, b)| {
            if t.magnitude2() > ::std::f32::EPSILON && b.magnitude2() > ::std::f32::EPSILON {
                TangentSpace {
                    tangent: t.normalize(),
                    bitangent: b.normalize(),
                }
            } else {
                TangentSpace {
                    tangent: Vector3::unit_x(),
                    bitangent: Vector3::unit_y(),
                }
            }
        })
        .collect()
}

/// Parses whitespace separated floats, stopping at the first token that is
/// not a number.
pub fn parse_floats(text: &str) -> Vec<f32> {
    text.split_whitespace()
        .map(|v| v.parse::<f32>())
        .take_while(|v| v.is_ok())
        .filter_map(|v| v.ok())
        .collect()
}

/// Groups floats into quads of four `x y z u v` vertices. Trailing values that
/// do not fill a whole quad are ignored.
pub fn parse_quads(floats: &[f32]) -> Vec<[UvVertex; 4]> {
    floats
        .chunks(20)
        .filter(|chunk| chunk.len() == 20)
        .map(|c| {
            let v = |i: usize| {
                let o = i * 5;
                UvVertex::new([c[o], c[o + 1], c[o + 2]], [c[o + 3], c[o + 4]])
            };

            [v(0), v(1), v(2), v(3)]
        })
        .collect()
}

/// The header line of the tangent table.
pub const TABLE_HEADER: &str = " px   py   pz   tx   ty   tz   cx   cy   cz";

/// Formats the tangent table of a quad: one row per emitted vertex, in the
/// order `1 2 3 1 3 4`, with position, tangent and bitangent.
pub fn format_quad(q: &[UvVertex; 4], spaces: &[TangentSpace; 2]) -> String {
    const ORDER: [(usize, usize); 6] = [(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (3, 1)];

    let mut out = String::new();
    for &(v, t) in &ORDER {
        let p = q[v].position;
        let s = spaces[t];
        let row = [
            p.x,
            p.y,
            p.z,
            s.tangent.x,
            s.tangent.y,
            s.tangent.z,
            s.bitangent.x,
            s.bitangent.y,
            s.bitangent.z,
        ];

        let cols: Vec<String> = row.iter().map(|v| format!("{:4.1}", v)).collect();
        out.push_str(&cols.join(" "));
        out.push('\n');
    }

    out
}

/// Formats the tangent tables of every whole quad in `floats`, each preceded
/// by the header. Quads with degenerate texture coordinates are skipped, and
/// fewer than 20 floats yield an empty string.
pub fn format_file(floats: &[f32]) -> String {
    let mut out = String::new();
    for q in &parse_quads(floats) {
        match quad(q) {
            Some(spaces) => {
                out.push_str(TABLE_HEADER);
                out.push('\n');
                out.push_str(&format_quad(q, &spaces));
            }
            None => warn!("Skips a quad with degenerate texture coordinates."),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_texcoords() {
        let v = UvVertex::new([0.0, 0.0, 0.0], [0.5, 0.5]);
        let w = UvVertex::new([1.0, 0.0, 0.0], [0.5, 0.5]);
        let x = UvVertex::new([0.0, 1.0, 0.0], [0.5, 0.5]);
        assert_eq!(triangle(&v, &w, &x), None);
    }

    #[test]
    fn parse_stops_at_garbage() {
        assert_eq!(parse_floats("1 2.5 -3\n4 foo 5"), vec![1.0, 2.5, -3.0, 4.0]);
        assert!(parse_floats("").is_empty());
    }

    #[test]
    fn parse_quads_ignores_tail() {
        let floats: Vec<f32> = (0..45).map(|v| v as f32).collect();
        let quads = parse_quads(&floats);
        assert_eq!(quads.len(), 2);
        assert_eq!(quads[1][0].position, Vector3::new(20.0, 21.0, 22.0));
        assert_eq!(quads[1][3].texcoord, Vector2::new(38.0, 39.0));
    }
}
