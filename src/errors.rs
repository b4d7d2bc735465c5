//! Error types shared by the toolkit and the demos.

use glutin;
use image;
use serde_json;
use std::io;
use std::path::PathBuf;
use tobj;

pub type Result<T> = ::std::result::Result<T, ::failure::Error>;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "Glutin: {}", _0)]
    Glutin(String),
    #[fail(display = "OpenGL implementation doesn\'t support {}.", _0)]
    Requirement(String),
    #[fail(display = "Failed to compile {} shader {:?}, errors: \n{}", stage, path, log)]
    ShaderCompile {
        stage: &'static str,
        path: Option<PathBuf>,
        log: String,
    },
    #[fail(display = "Failed to link shader program, errors: \n{}", _0)]
    ShaderLink(String),
    #[fail(display = "Failed to read {:?}: {}", _0, _1)]
    Io(PathBuf, String),
    #[fail(display = "Failed to decode image {:?}: {}", _0, _1)]
    Image(PathBuf, String),
    #[fail(display = "Failed to load model {:?}: {}", _0, _1)]
    Model(PathBuf, String),
    #[fail(display = "Framebuffer is not complete: {}", _0)]
    IncompleteFramebuffer(&'static str),
    #[fail(display = "Malformed settings: {}", _0)]
    Settings(String),
}

impl Error {
    pub fn io<P: Into<PathBuf>>(path: P, err: &io::Error) -> Self {
        Error::Io(path.into(), format!("{}", err))
    }

    pub fn image<P: Into<PathBuf>>(path: P, err: &image::ImageError) -> Self {
        Error::Image(path.into(), format!("{}", err))
    }

    pub fn model<P: Into<PathBuf>>(path: P, err: &tobj::LoadError) -> Self {
        Error::Model(path.into(), format!("{:?}", err))
    }
}

impl From<glutin::CreationError> for Error {
    fn from(err: glutin::CreationError) -> Error {
        Error::Glutin(format!("{}", err))
    }
}

impl From<glutin::ContextError> for Error {
    fn from(err: glutin::ContextError) -> Error {
        Error::Glutin(format!("{}", err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::Settings(format!("{}", err))
    }
}
