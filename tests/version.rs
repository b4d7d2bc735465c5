extern crate lumen;

use lumen::video::Version;

#[test]
fn parse() {
    assert_eq!(Version::parse_str("4.6.0 NVIDIA 390.77").unwrap(), Version::GL(4, 6));
    assert_eq!(Version::parse_str("3.3 (Core Profile) Mesa 18.0.5").unwrap(), Version::GL(3, 3));
    assert_eq!(Version::parse_str("OpenGL ES 3.2 Mesa 18.0.5").unwrap(), Version::ES(3, 2));
    assert_eq!(Version::parse_str("OpenGL ES-CM 1.1").unwrap(), Version::ES(1, 1));

    assert!(Version::parse_str("").is_err());
    assert!(Version::parse_str("4").is_err());
    assert!(Version::parse_str("OpenGL").is_err());
}

#[test]
fn compare() {
    assert!(Version::GL(4, 1) >= Version::GL(3, 3));
    assert!(Version::GL(3, 3) >= Version::GL(3, 3));
    assert!(Version::GL(3, 2) < Version::GL(3, 3));
    assert!(!(Version::ES(3, 2) >= Version::GL(3, 3)));
    assert!(!(Version::ES(3, 2) < Version::GL(3, 3)));
}
