//! # Lumen
//!
//! A small OpenGL toolkit shared by a handful of standalone technique demos
//! (skybox and environment mapping, framebuffers, instancing, parallax mapping,
//! directional and omnidirectional shadow mapping, uniform buffer objects).
//!
//! Every demo is a linear program: it creates an [`application::Engine`], loads
//! its fixed scene, and hands an [`application::Application`] to the engine's
//! render loop. The engine owns the boilerplate every demo needs: window and
//! context creation, keyboard and mouse input, the Euler camera and the FPS
//! counter written into the window title.
//!
//! The wrappers under [`video`] own their OpenGL names and release them on drop,
//! so they must only be created once the engine (and its context) exists.

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;

extern crate env_logger;
extern crate glutin;
extern crate image;
extern crate rand;
extern crate serde_json;
extern crate smallvec;
extern crate tobj;

pub extern crate cgmath;
pub extern crate gl;

pub mod errors;
pub mod math;

pub mod application;
pub mod camera;
pub mod input;
pub mod instancing;
pub mod lighting;
pub mod video;

pub mod prelude;
