//! GLSL programs and uniform uploads.

use gl;
use gl::types::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::CString;
use std::fs;
use std::path::{Path, PathBuf};
use std::ptr;

use crate::errors::*;
use crate::math::*;

/// A linked GLSL program with a cache of uniform locations.
///
/// Uniform setters operate on the program currently in use, so `bind` must be
/// called before setting uniforms. Unknown uniform names are ignored, matching
/// OpenGL's treatment of location `-1`.
#[derive(Debug)]
pub struct Shader {
    id: GLuint,
    uniforms: RefCell<HashMap<String, GLint>>,
}

struct Stage<'a> {
    tp: GLenum,
    name: &'static str,
    source: &'a str,
    path: Option<&'a Path>,
}

impl Shader {
    /// Compiles and links a program from vertex, fragment and optional geometry
    /// shader files.
    pub fn from_files<P: AsRef<Path>>(vertex: P, fragment: P, geometry: Option<P>) -> Result<Shader> {
        let read = |path: &Path| -> Result<String> {
            fs::read_to_string(path).map_err(|err| Error::io(path, &err).into())
        };

        let vs_path = vertex.as_ref();
        let fs_path = fragment.as_ref();
        let gs_path: Option<&Path> = geometry.as_ref().map(AsRef::as_ref);

        let vs_source = read(vs_path)?;
        let fs_source = read(fs_path)?;
        let gs_source = match gs_path {
            Some(path) => Some(read(path)?),
            None => None,
        };

        let mut stages = vec![
            Stage {
                tp: gl::VERTEX_SHADER,
                name: "vertex",
                source: &vs_source,
                path: Some(vs_path),
            },
            Stage {
                tp: gl::FRAGMENT_SHADER,
                name: "fragment",
                source: &fs_source,
                path: Some(fs_path),
            },
        ];

        if let Some(ref source) = gs_source {
            stages.push(Stage {
                tp: gl::GEOMETRY_SHADER,
                name: "geometry",
                source,
                path: gs_path,
            });
        }

        let shader = Shader::build(&stages)?;
        debug!(
            "Created shader {} from {:?} and {:?}.",
            shader.id, vs_path, fs_path
        );
        Ok(shader)
    }

    /// Compiles and links a program from in-memory sources.
    pub fn from_sources(vs: &str, fs: &str, gs: Option<&str>) -> Result<Shader> {
        let mut stages = vec![
            Stage {
                tp: gl::VERTEX_SHADER,
                name: "vertex",
                source: vs,
                path: None,
            },
            Stage {
                tp: gl::FRAGMENT_SHADER,
                name: "fragment",
                source: fs,
                path: None,
            },
        ];

        if let Some(source) = gs {
            stages.push(Stage {
                tp: gl::GEOMETRY_SHADER,
                name: "geometry",
                source,
                path: None,
            });
        }

        Shader::build(&stages)
    }

    fn build(stages: &[Stage]) -> Result<Shader> {
        unsafe {
            let mut shaders = Vec::with_capacity(stages.len());
            for stage in stages {
                match compile(stage) {
                    Ok(id) => shaders.push(id),
                    Err(err) => {
                        for id in shaders {
                            gl::DeleteShader(id);
                        }

                        return Err(err);
                    }
                }
            }

            let program = link(&shaders);

            for id in shaders {
                gl::DeleteShader(id);
            }

            Ok(Shader {
                id: program?,
                uniforms: RefCell::new(HashMap::new()),
            })
        }
    }

    /// Makes this program current.
    #[inline]
    pub fn bind(&self) {
        unsafe {
            gl::UseProgram(self.id);
        }
    }

    #[inline]
    pub fn id(&self) -> GLuint {
        self.id
    }

    /// Returns the location of a uniform, or `-1` if the program has no
    /// active uniform with this name.
    pub fn uniform_location(&self, name: &str) -> GLint {
        if let Some(&location) = self.uniforms.borrow().get(name) {
            return location;
        }

        let location = match CString::new(name) {
            Ok(c_name) => unsafe { gl::GetUniformLocation(self.id, c_name.as_ptr()) },
            Err(_) => -1,
        };

        if location == -1 {
            trace!("Uniform {} is not active in shader {}.", name, self.id);
        }

        self.uniforms.borrow_mut().insert(name.to_owned(), location);
        location
    }

    /// Sets a uniform of the program currently in use.
    pub fn set_uniform<T: UniformValue>(&self, name: &str, value: T) {
        let location = self.uniform_location(name);
        if location != -1 {
            unsafe { value.apply(location) }
        }
    }

    #[inline]
    pub fn set_vec3f(&self, name: &str, x: f32, y: f32, z: f32) {
        self.set_uniform(name, Vector3::new(x, y, z));
    }

    /// Binds the uniform block `name` of this program to a binding point.
    pub fn bind_uniform_block(&self, name: &str, binding: u32) -> Result<()> {
        let c_name = CString::new(name).map_err(|_| format_err!("Malformed block name {:?}.", name))?;

        unsafe {
            let index = gl::GetUniformBlockIndex(self.id, c_name.as_ptr());
            if index == gl::INVALID_INDEX {
                bail!("Uniform block {} is not active in shader {}.", name, self.id);
            }

            gl::UniformBlockBinding(self.id, index, binding);
        }

        crate::video::check()
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.id);
        }
    }
}

unsafe fn compile(stage: &Stage) -> Result<GLuint> {
    let source = CString::new(stage.source.as_bytes())
        .map_err(|_| format_err!("Shader source {:?} contains NUL.", stage.path))?;

    let shader = gl::CreateShader(stage.tp);
    gl::ShaderSource(shader, 1, &source.as_ptr(), ptr::null());
    gl::CompileShader(shader);

    let mut status = GLint::from(gl::FALSE);
    gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status);

    if status != GLint::from(gl::TRUE) {
        let mut len = 0;
        gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
        let mut buf = vec![0u8; len.max(1) as usize];
        gl::GetShaderInfoLog(shader, len, ptr::null_mut(), buf.as_mut_ptr() as *mut GLchar);
        gl::DeleteShader(shader);

        Err(Error::ShaderCompile {
            stage: stage.name,
            path: stage.path.map(PathBuf::from),
            log: info_log(buf),
        }
        .into())
    } else {
        Ok(shader)
    }
}

unsafe fn link(shaders: &[GLuint]) -> Result<GLuint> {
    let program = gl::CreateProgram();
    for &shader in shaders {
        gl::AttachShader(program, shader);
    }

    gl::LinkProgram(program);

    let mut status = GLint::from(gl::FALSE);
    gl::GetProgramiv(program, gl::LINK_STATUS, &mut status);

    for &shader in shaders {
        gl::DetachShader(program, shader);
    }

    if status != GLint::from(gl::TRUE) {
        let mut len: GLint = 0;
        gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
        let mut buf = vec![0u8; len.max(1) as usize];
        gl::GetProgramInfoLog(program, len, ptr::null_mut(), buf.as_mut_ptr() as *mut GLchar);
        gl::DeleteProgram(program);

        Err(Error::ShaderLink(info_log(buf)).into())
    } else {
        Ok(program)
    }
}

fn info_log(mut buf: Vec<u8>) -> String {
    // Skips the trailing null character.
    while buf.last() == Some(&0) {
        buf.pop();
    }

    String::from_utf8_lossy(&buf).into_owned()
}

/// Values that could be uploaded as uniforms.
pub trait UniformValue {
    /// # Unsafe
    ///
    /// The owning program must be in use.
    unsafe fn apply(&self, location: GLint);
}

impl UniformValue for bool {
    unsafe fn apply(&self, location: GLint) {
        gl::Uniform1i(location, *self as GLint);
    }
}

impl UniformValue for i32 {
    unsafe fn apply(&self, location: GLint) {
        gl::Uniform1i(location, *self);
    }
}

impl UniformValue for u32 {
    unsafe fn apply(&self, location: GLint) {
        gl::Uniform1i(location, *self as GLint);
    }
}

impl UniformValue for f32 {
    unsafe fn apply(&self, location: GLint) {
        gl::Uniform1f(location, *self);
    }
}

impl UniformValue for Vector2<f32> {
    unsafe fn apply(&self, location: GLint) {
        gl::Uniform2f(location, self.x, self.y);
    }
}

impl UniformValue for Vector3<f32> {
    unsafe fn apply(&self, location: GLint) {
        gl::Uniform3f(location, self.x, self.y, self.z);
    }
}

impl UniformValue for Point3<f32> {
    unsafe fn apply(&self, location: GLint) {
        gl::Uniform3f(location, self.x, self.y, self.z);
    }
}

impl UniformValue for [f32; 3] {
    unsafe fn apply(&self, location: GLint) {
        gl::Uniform3f(location, self[0], self[1], self[2]);
    }
}

impl UniformValue for Vector4<f32> {
    unsafe fn apply(&self, location: GLint) {
        gl::Uniform4f(location, self.x, self.y, self.z, self.w);
    }
}

impl UniformValue for Matrix3<f32> {
    unsafe fn apply(&self, location: GLint) {
        gl::UniformMatrix3fv(location, 1, gl::FALSE, self.as_ptr());
    }
}

impl UniformValue for Matrix4<f32> {
    unsafe fn apply(&self, location: GLint) {
        gl::UniformMatrix4fv(location, 1, gl::FALSE, self.as_ptr());
    }
}

impl<'a, T: UniformValue> UniformValue for &'a T {
    unsafe fn apply(&self, location: GLint) {
        (*self).apply(location);
    }
}
