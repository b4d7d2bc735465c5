//! 2D textures and cubemaps decoded with `image`.

use gl;
use gl::types::*;
use image;
use std::os::raw::c_void;
use std::path::Path;

use crate::errors::*;
use crate::math::Vector2;

/// Hint abount how texture should wrap.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextureWrap {
    Repeat,
    Mirror,
    ClampToEdge,
}

impl From<TextureWrap> for GLenum {
    fn from(wrap: TextureWrap) -> Self {
        match wrap {
            TextureWrap::Repeat => gl::REPEAT,
            TextureWrap::Mirror => gl::MIRRORED_REPEAT,
            TextureWrap::ClampToEdge => gl::CLAMP_TO_EDGE,
        }
    }
}

/// Hint abount how texture should be filtered.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextureFilter {
    Nearest,
    Linear,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TextureParams {
    pub wrap: TextureWrap,
    pub filter: TextureFilter,
    pub mipmaps: bool,
    /// Stores color in sRGB space, so sampling returns linear values. Only
    /// meaningful for color textures; normal and height maps must stay linear.
    pub srgb: bool,
}

impl Default for TextureParams {
    fn default() -> Self {
        TextureParams {
            wrap: TextureWrap::Repeat,
            filter: TextureFilter::Linear,
            mipmaps: true,
            srgb: false,
        }
    }
}

impl TextureParams {
    pub fn srgb(mut self, srgb: bool) -> Self {
        self.srgb = srgb;
        self
    }

    pub fn wrap(mut self, wrap: TextureWrap) -> Self {
        self.wrap = wrap;
        self
    }
}

/// An immutable RGBA 2D texture.
#[derive(Debug)]
pub struct Texture {
    id: GLuint,
    dimensions: Vector2<u32>,
}

impl Texture {
    /// Loads a texture from an image file. The image is flipped vertically so
    /// that texture coordinate `(0, 0)` maps to its lower-left corner.
    pub fn from_file<P: AsRef<Path>>(path: P, params: TextureParams) -> Result<Texture> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|err| Error::image(path, &err))?;
        let img = img.flipv().to_rgba();
        let (width, height) = img.dimensions();

        let texture = Texture::from_rgba(width, height, &img.into_raw(), params)?;
        debug!("Loaded texture {:?} ({}x{}).", path, width, height);
        Ok(texture)
    }

    /// Loads a texture from an image file, or returns a checkerboard if the
    /// file is missing or malformed.
    pub fn from_file_or_checker<P: AsRef<Path>>(path: P, params: TextureParams) -> Result<Texture> {
        match Texture::from_file(path.as_ref(), params) {
            Ok(texture) => Ok(texture),
            Err(err) => {
                warn!("{}. Falls back to checkerboard.", err);
                Texture::checkerboard(params)
            }
        }
    }

    /// Loads a texture from an image file, or returns a 1x1 texture filled
    /// with `color` if the file is missing or malformed.
    pub fn from_file_or_solid<P: AsRef<Path>>(
        path: P,
        params: TextureParams,
        color: [u8; 4],
    ) -> Result<Texture> {
        match Texture::from_file(path.as_ref(), params) {
            Ok(texture) => Ok(texture),
            Err(err) => {
                warn!("{}. Falls back to solid {:?}.", err, color);
                Texture::solid(color, params)
            }
        }
    }

    /// A grey checkerboard, 64x64 pixels with 8x8 cells.
    pub fn checkerboard(params: TextureParams) -> Result<Texture> {
        let pixels = checkerboard_pixels(64, 8, [200, 200, 200, 255], [90, 90, 90, 255]);
        Texture::from_rgba(64, 64, &pixels, params)
    }

    pub fn solid(color: [u8; 4], params: TextureParams) -> Result<Texture> {
        Texture::from_rgba(1, 1, &color, params)
    }

    /// Creates a texture from tightly packed RGBA8 pixels, bottom row first.
    pub fn from_rgba(width: u32, height: u32, pixels: &[u8], params: TextureParams) -> Result<Texture> {
        if pixels.len() != (width * height * 4) as usize {
            bail!(
                "Texture data has {} bytes, but {}x{} RGBA requires {}.",
                pixels.len(),
                width,
                height,
                width * height * 4
            );
        }

        unsafe {
            let mut id = 0;
            gl::GenTextures(1, &mut id);
            gl::BindTexture(gl::TEXTURE_2D, id);

            let internal_format = if params.srgb {
                gl::SRGB8_ALPHA8
            } else {
                gl::RGBA8
            };

            gl::PixelStorei(gl::UNPACK_ALIGNMENT, 1);
            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                internal_format as GLint,
                width as GLsizei,
                height as GLsizei,
                0,
                gl::RGBA,
                gl::UNSIGNED_BYTE,
                pixels.as_ptr() as *const c_void,
            );

            if params.mipmaps {
                gl::GenerateMipmap(gl::TEXTURE_2D);
            }

            bind_texture_params(gl::TEXTURE_2D, params);
            gl::BindTexture(gl::TEXTURE_2D, 0);

            let texture = Texture {
                id,
                dimensions: Vector2::new(width, height),
            };

            crate::video::check()?;
            Ok(texture)
        }
    }

    /// Binds this texture to texture unit `unit`.
    #[inline]
    pub fn bind(&self, unit: u32) {
        bind_unit(gl::TEXTURE_2D, self.id, unit);
    }

    #[inline]
    pub fn id(&self) -> GLuint {
        self.id
    }

    #[inline]
    pub fn dimensions(&self) -> Vector2<u32> {
        self.dimensions
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteTextures(1, &self.id);
        }
    }
}

/// A cube texture with six RGBA faces, in `+X, -X, +Y, -Y, +Z, -Z` order.
#[derive(Debug)]
pub struct Cubemap {
    id: GLuint,
}

impl Cubemap {
    /// Loads the six faces from image files. Faces are not flipped, cubemap
    /// images are stored top row first.
    pub fn from_files<P: AsRef<Path>>(faces: &[P; 6]) -> Result<Cubemap> {
        let mut images = Vec::with_capacity(6);
        for face in faces {
            let path = face.as_ref();
            let img = image::open(path).map_err(|err| Error::image(path, &err))?;
            let img = img.to_rgba();
            let (width, height) = img.dimensions();
            images.push((width, height, img.into_raw()));
        }

        Cubemap::from_faces(&images)
    }

    /// Loads the faces, or falls back to a procedural sky when any of them
    /// is missing or malformed.
    pub fn from_files_or_sky<P: AsRef<Path>>(faces: &[P; 6]) -> Result<Cubemap> {
        match Cubemap::from_files(faces) {
            Ok(cubemap) => Ok(cubemap),
            Err(err) => {
                warn!("{}. Falls back to procedural sky.", err);
                Cubemap::sky()
            }
        }
    }

    /// A procedural sky: a vertical gradient from the zenith to the horizon
    /// and a dim ground.
    pub fn sky() -> Result<Cubemap> {
        const SIZE: u32 = 32;
        let faces: Vec<_> = (0..6)
            .map(|face| (SIZE, SIZE, sky_face_pixels(face, SIZE)))
            .collect();

        Cubemap::from_faces(&faces)
    }

    fn from_faces(faces: &[(u32, u32, Vec<u8>)]) -> Result<Cubemap> {
        unsafe {
            let mut id = 0;
            gl::GenTextures(1, &mut id);
            gl::BindTexture(gl::TEXTURE_CUBE_MAP, id);
            let cubemap = Cubemap { id };

            gl::PixelStorei(gl::UNPACK_ALIGNMENT, 1);
            for (i, &(width, height, ref pixels)) in faces.iter().enumerate() {
                gl::TexImage2D(
                    gl::TEXTURE_CUBE_MAP_POSITIVE_X + i as GLenum,
                    0,
                    gl::RGBA8 as GLint,
                    width as GLsizei,
                    height as GLsizei,
                    0,
                    gl::RGBA,
                    gl::UNSIGNED_BYTE,
                    pixels.as_ptr() as *const c_void,
                );
            }

            bind_texture_params(
                gl::TEXTURE_CUBE_MAP,
                TextureParams {
                    wrap: TextureWrap::ClampToEdge,
                    filter: TextureFilter::Linear,
                    mipmaps: false,
                    srgb: false,
                },
            );

            gl::BindTexture(gl::TEXTURE_CUBE_MAP, 0);
            crate::video::check()?;
            Ok(cubemap)
        }
    }

    #[inline]
    pub fn bind(&self, unit: u32) {
        bind_unit(gl::TEXTURE_CUBE_MAP, self.id, unit);
    }

    #[inline]
    pub fn id(&self) -> GLuint {
        self.id
    }
}

impl Drop for Cubemap {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteTextures(1, &self.id);
        }
    }
}

pub(crate) fn bind_unit(target: GLenum, id: GLuint, unit: u32) {
    unsafe {
        gl::ActiveTexture(gl::TEXTURE0 + unit);
        gl::BindTexture(target, id);
    }
}

pub(crate) unsafe fn bind_texture_params(target: GLenum, params: TextureParams) {
    let wrap: GLenum = params.wrap.into();
    gl::TexParameteri(target, gl::TEXTURE_WRAP_S, wrap as GLint);
    gl::TexParameteri(target, gl::TEXTURE_WRAP_T, wrap as GLint);
    if target == gl::TEXTURE_CUBE_MAP {
        gl::TexParameteri(target, gl::TEXTURE_WRAP_R, wrap as GLint);
    }

    let (min_filter, mag_filter) = match (params.filter, params.mipmaps) {
        (TextureFilter::Nearest, false) => (gl::NEAREST, gl::NEAREST),
        (TextureFilter::Nearest, true) => (gl::NEAREST_MIPMAP_NEAREST, gl::NEAREST),
        (TextureFilter::Linear, false) => (gl::LINEAR, gl::LINEAR),
        (TextureFilter::Linear, true) => (gl::LINEAR_MIPMAP_LINEAR, gl::LINEAR),
    };

    gl::TexParameteri(target, gl::TEXTURE_MIN_FILTER, min_filter as GLint);
    gl::TexParameteri(target, gl::TEXTURE_MAG_FILTER, mag_filter as GLint);
}

/// Generates RGBA pixels of a `size`x`size` checkerboard with square cells of
/// `cell` pixels, alternating between colors `a` and `b`.
pub fn checkerboard_pixels(size: u32, cell: u32, a: [u8; 4], b: [u8; 4]) -> Vec<u8> {
    let cell = cell.max(1);
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let color = if (x / cell + y / cell) % 2 == 0 { a } else { b };
            pixels.extend_from_slice(&color);
        }
    }

    pixels
}

/// Generates the RGBA pixels of a face of the procedural sky, top row first.
pub fn sky_face_pixels(face: usize, size: u32) -> Vec<u8> {
    const ZENITH: [f32; 3] = [0.25, 0.45, 0.85];
    const HORIZON: [f32; 3] = [0.85, 0.9, 0.95];
    const GROUND: [f32; 3] = [0.3, 0.28, 0.25];

    let lerp = |a: [f32; 3], b: [f32; 3], t: f32| {
        [
            (a[0] + (b[0] - a[0]) * t),
            (a[1] + (b[1] - a[1]) * t),
            (a[2] + (b[2] - a[2]) * t),
        ]
    };

    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        let t = (y as f32 + 0.5) / size as f32;
        let color = match face {
            2 => ZENITH,
            3 => GROUND,
            // Side faces: zenith at the top row, ground below the horizon line.
            _ if t < 0.5 => lerp(ZENITH, HORIZON, t * 2.0),
            _ => lerp(HORIZON, GROUND, (t - 0.5) * 2.0),
        };

        let rgba = [
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            255,
        ];

        for _ in 0..size {
            pixels.extend_from_slice(&rgba);
        }
    }

    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkerboard() {
        let w = [255, 255, 255, 255];
        let k = [0, 0, 0, 255];
        let pixels = checkerboard_pixels(4, 2, w, k);
        assert_eq!(pixels.len(), 4 * 4 * 4);

        let at = |x: usize, y: usize| &pixels[(y * 4 + x) * 4..(y * 4 + x) * 4 + 4];
        assert_eq!(at(0, 0), &w);
        assert_eq!(at(1, 1), &w);
        assert_eq!(at(2, 0), &k);
        assert_eq!(at(0, 2), &k);
        assert_eq!(at(3, 3), &w);
    }

    #[test]
    fn sky_faces() {
        let top = sky_face_pixels(2, 4);
        assert!(top.chunks(4).all(|p| p == &top[0..4]));

        let side = sky_face_pixels(0, 8);
        assert_eq!(side.len(), 8 * 8 * 4);
        // Bluer at the top row than at the bottom row.
        let first = &side[0..4];
        let last = &side[side.len() - 4..];
        assert!(first[2] > last[2]);
    }
}
