//! Light descriptions shared by the Phong-style shaders, and the runtime
//! lighting switches of the parallax mapping demo.
//!
//! Lights are uploaded as GLSL structs: a light named `uSpotLight` sets
//! `uSpotLight.position`, `uSpotLight.direction` and so on, and the i-th
//! element of an array named `uPointLights` sets `uPointLights[i].position`.

use crate::camera::EulerCamera;
use crate::input::{InputSystem, Key};
use crate::math::*;
use crate::video::Shader;

pub const CONSTANT: f32 = 1.0;
pub const LINEAR: f32 = 0.09;
pub const QUADRATIC: f32 = 0.032;

/// Returns `"<name>.<field>"`.
pub fn field_name(name: &str, field: &str) -> String {
    format!("{}.{}", name, field)
}

/// Returns `"<array>[<index>]"`.
pub fn element_name(array: &str, index: usize) -> String {
    format!("{}[{}]", array, index)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vector3<f32>,
    pub ambient: Vector3<f32>,
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
}

impl DirectionalLight {
    pub fn new(direction: Vector3<f32>, ambient: f32, diffuse: f32, specular: f32) -> Self {
        DirectionalLight {
            direction,
            ambient: gray(ambient),
            diffuse: gray(diffuse),
            specular: gray(specular),
        }
    }

    pub fn apply(&self, shader: &Shader, name: &str) {
        shader.set_uniform(&field_name(name, "direction"), self.direction);
        shader.set_uniform(&field_name(name, "ambient"), self.ambient);
        shader.set_uniform(&field_name(name, "diffuse"), self.diffuse);
        shader.set_uniform(&field_name(name, "specular"), self.specular);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Point3<f32>,
    pub ambient: Vector3<f32>,
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl PointLight {
    /// A light without ambient term, with `color` as diffuse and specular
    /// intensity and the default attenuation.
    pub fn new(position: Point3<f32>, color: Vector3<f32>) -> Self {
        PointLight {
            position,
            ambient: Vector3::zero(),
            diffuse: color,
            specular: color,
            constant: CONSTANT,
            linear: LINEAR,
            quadratic: QUADRATIC,
        }
    }

    pub fn apply(&self, shader: &Shader, name: &str) {
        shader.set_uniform(&field_name(name, "position"), self.position);
        shader.set_uniform(&field_name(name, "ambient"), self.ambient);
        shader.set_uniform(&field_name(name, "diffuse"), self.diffuse);
        shader.set_uniform(&field_name(name, "specular"), self.specular);
        shader.set_uniform(&field_name(name, "constant"), self.constant);
        shader.set_uniform(&field_name(name, "linear"), self.linear);
        shader.set_uniform(&field_name(name, "quadratic"), self.quadratic);
    }

    pub fn apply_indexed(&self, shader: &Shader, array: &str, index: usize) {
        self.apply(shader, &element_name(array, index));
    }
}

/// A cone light, e.g. a torch held by the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLight {
    pub position: Point3<f32>,
    pub direction: Vector3<f32>,
    /// Cosine of the angle where the light starts to fade out.
    pub inner_cut_off: f32,
    /// Cosine of the angle where the light is fully faded out.
    pub outer_cut_off: f32,
    pub ambient: Vector3<f32>,
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Default for SpotLight {
    fn default() -> Self {
        SpotLight {
            position: Point3::origin(),
            direction: -Vector3::unit_z(),
            inner_cut_off: Deg(12.5f32).cos(),
            outer_cut_off: Deg(17.5f32).cos(),
            ambient: Vector3::zero(),
            diffuse: gray(1.0),
            specular: gray(1.0),
            constant: CONSTANT,
            linear: LINEAR,
            quadratic: QUADRATIC,
        }
    }
}

impl SpotLight {
    /// Moves the light to the camera, pointing where the camera looks.
    pub fn follow(&mut self, camera: &EulerCamera) {
        self.position = camera.position;
        self.direction = camera.front();
    }

    pub fn apply(&self, shader: &Shader, name: &str) {
        shader.set_uniform(&field_name(name, "position"), self.position);
        shader.set_uniform(&field_name(name, "direction"), self.direction);
        shader.set_uniform(&field_name(name, "innerCutOff"), self.inner_cut_off);
        shader.set_uniform(&field_name(name, "outerCutOff"), self.outer_cut_off);
        shader.set_uniform(&field_name(name, "ambient"), self.ambient);
        shader.set_uniform(&field_name(name, "diffuse"), self.diffuse);
        shader.set_uniform(&field_name(name, "specular"), self.specular);
        shader.set_uniform(&field_name(name, "constant"), self.constant);
        shader.set_uniform(&field_name(name, "linear"), self.linear);
        shader.set_uniform(&field_name(name, "quadratic"), self.quadratic);
    }
}

#[inline]
fn gray(v: f32) -> Vector3<f32> {
    Vector3::new(v, v, v)
}

pub const GAMMA_STEP: f32 = 0.01;
pub const GAMMA_RANGE: (f32, f32) = (1.0, 4.0);
pub const HEIGHT_STEP: f32 = 0.0005;
pub const HEIGHT_RANGE: (f32, f32) = (0.0, 1.0);

/// Runtime switches of the lighting shader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightingMode {
    pub torch: bool,
    pub blinn: bool,
    pub normal_map: bool,
    pub gamma: f32,
    pub height_scale: f32,
}

impl Default for LightingMode {
    fn default() -> Self {
        LightingMode {
            torch: true,
            blinn: false,
            normal_map: true,
            gamma: 2.2,
            height_scale: 0.1,
        }
    }
}

impl LightingMode {
    #[inline]
    pub fn toggle_torch(&mut self) {
        self.torch = !self.torch;
    }

    #[inline]
    pub fn toggle_blinn(&mut self) {
        self.blinn = !self.blinn;
    }

    #[inline]
    pub fn toggle_normal_map(&mut self) {
        self.normal_map = !self.normal_map;
    }

    pub fn increase_gamma(&mut self) {
        self.gamma = (self.gamma + GAMMA_STEP).min(GAMMA_RANGE.1);
    }

    pub fn decrease_gamma(&mut self) {
        self.gamma = (self.gamma - GAMMA_STEP).max(GAMMA_RANGE.0);
    }

    pub fn increase_height(&mut self) {
        self.height_scale = (self.height_scale + HEIGHT_STEP).min(HEIGHT_RANGE.1);
    }

    pub fn decrease_height(&mut self) {
        self.height_scale = (self.height_scale - HEIGHT_STEP).max(HEIGHT_RANGE.0);
    }

    /// `F`, `B` and `N` toggle on press. `=`/`-` tune the gamma and `.`/`,`
    /// the height scale for as long as they are held.
    pub fn handle_input(&mut self, input: &InputSystem) {
        if input.is_key_press(Key::F) {
            self.toggle_torch();
        }

        if input.is_key_press(Key::B) {
            self.toggle_blinn();
        }

        if input.is_key_press(Key::N) {
            self.toggle_normal_map();
        }

        if input.is_key_down(Key::Equals) {
            self.increase_gamma();
        }

        if input.is_key_down(Key::Minus) {
            self.decrease_gamma();
        }

        if input.is_key_down(Key::Period) {
            self.increase_height();
        }

        if input.is_key_down(Key::Comma) {
            self.decrease_height();
        }
    }

    pub fn apply(&self, shader: &Shader) {
        shader.set_uniform("uEnableTorch", self.torch);
        shader.set_uniform("uEnableBlinn", self.blinn);
        shader.set_uniform("uEnableNormal", self.normal_map);
        shader.set_uniform("uGamma", self.gamma);
        shader.set_uniform("uHeightScale", self.height_scale);
    }

    /// The status line printed to the terminal, ending with a carriage return
    /// so that it overwrites itself.
    pub fn status_line(&self) -> String {
        format!(
            "Gamma : {:.6} Height : {:.6}\t\t\r",
            self.gamma, self.height_scale
        )
    }
}
