//! Omnidirectional shadows: a point light moving inside a room is rendered
//! into a depth cubemap in a single pass, a geometry shader routing every
//! triangle to the six faces. The lit pass compares the fragment distance to
//! the light with the stored one.
//!
//! `F` toggles the torch, `B` Blinn-Phong and `=`/`-` tune the gamma.

extern crate lumen;

use std::rc::Rc;

use lumen::lighting;
use lumen::prelude::*;
use lumen::video::framebuffer;

const SHADOW_UNIT: u32 = 15;
const SHADOW_SIZE: u32 = 1024;
const LIGHT_NEAR: f32 = 1.0;
const LIGHT_FAR: f32 = 25.0;
const CLEAR_COLOR: [f32; 4] = [0.1, 0.1, 0.1, 1.0];

struct Scene {
    cube: Mesh,
    planet: Model,
}

impl Scene {
    fn draw(&self, shader: &Shader, elapsed: f32) {
        shader.bind();

        // The room is seen from the inside, its normals point inwards.
        video::set_cull_face(CullFace::Nothing);
        shader.set_uniform("uModel", Matrix4::from_scale(10.0));
        shader.set_uniform("uReverseNormal", true);
        self.cube.draw(shader);
        shader.set_uniform("uReverseNormal", false);
        video::set_cull_face(CullFace::Back);

        let boxes = [
            ([4.0, -3.5, 0.0], 1.0),
            ([2.0, 3.0, 1.0], 1.5),
            ([-3.0, -1.0, 0.0], 1.0),
            ([-1.5, 1.0, 1.5], 1.0),
        ];

        for &(position, scale) in &boxes {
            shader.set_uniform(
                "uModel",
                math::model_matrix(Vector3::from(position), None, Vector3::new(scale, scale, scale)),
            );
            self.cube.draw(shader);
        }

        shader.set_uniform(
            "uModel",
            math::model_matrix(
                Vector3::new(-1.5, 2.0, -3.0),
                Some((Vector3::new(1.0, 0.0, 1.0), Deg(10.0 * elapsed).into())),
                Vector3::new(1.5, 1.5, 1.5),
            ),
        );
        self.cube.draw(shader);

        shader.set_uniform(
            "uModel",
            math::model_matrix(Vector3::new(2.0, 1.0, -1.0), None, Vector3::new(0.2, 0.2, 0.2)),
        );
        self.planet.draw(shader);
    }
}

struct PointShadow {
    object_shader: Shader,
    depth_shader: Shader,

    scene: Scene,
    depth_map: DepthCubeMap,
    light: PointLight,

    mode: LightingMode,
    torch: SpotLight,
}

impl PointShadow {
    fn new(engine: &mut Engine) -> Result<Self> {
        engine.context_mut().camera = EulerCamera::new(Point3::new(0.0, 0.0, 3.0));

        let object_shader = Shader::from_files("shaders/point_shadow.vert", "shaders/point_shadow.frag", None)?;
        let depth_shader = Shader::from_files(
            "shaders/point_shadow_map.vert",
            "shaders/point_shadow_map.frag",
            Some("shaders/point_shadow_map.geom"),
        )?;

        let wood = Rc::new(Texture::from_file_or_checker(
            "resources/default/wood.png",
            TextureParams::default(),
        )?);

        let scene = Scene {
            cube: primitives::cube()?
                .with_texture(TextureKind::Diffuse, wood.clone())
                .with_texture(TextureKind::Specular, wood),
            planet: Model::from_file_or("resources/planet/planet.obj", false, || primitives::sphere(3))?,
        };

        object_shader.bind();
        object_shader.set_uniform("uShadowMap", SHADOW_UNIT as i32);

        video::set_cull_face(CullFace::Back);

        Ok(PointShadow {
            object_shader,
            depth_shader,
            scene,
            depth_map: DepthCubeMap::new(Vector2::new(SHADOW_SIZE, SHADOW_SIZE), LIGHT_NEAR, LIGHT_FAR)?,
            light: PointLight::new(Point3::origin(), Vector3::new(1.0, 1.0, 1.0)),
            mode: LightingMode::default(),
            torch: SpotLight::default(),
        })
    }
}

impl Application for PointShadow {
    fn on_update(&mut self, ctx: &mut Context) -> Result<()> {
        self.mode.handle_input(&ctx.input);

        let elapsed = ctx.elapsed();
        self.light.position.z = (elapsed * 0.5).sin() * 3.0;

        let far = self.depth_map.far_plane();
        let transforms = self.depth_map.transforms(self.light.position);

        self.depth_map.bind();
        video::clear(None, true);

        self.depth_shader.bind();
        self.depth_shader.set_uniform("uFarPlane", far);
        self.depth_shader.set_uniform("uLightPos", self.light.position);
        for (i, m) in transforms.iter().enumerate() {
            self.depth_shader.set_uniform(&lighting::element_name("uShadowMatrices", i), m);
        }

        self.scene.draw(&self.depth_shader, elapsed);

        framebuffer::unbind(ctx.dimensions());
        video::clear(Some(CLEAR_COLOR), true);

        let camera = &ctx.camera;
        let shader = &self.object_shader;
        self.torch.follow(camera);

        shader.bind();
        self.mode.apply(shader);
        shader.set_uniform("uView", camera.view_matrix());
        shader.set_uniform("uProjection", camera.projection_matrix(ctx.aspect(), 0.1, 100.0));
        shader.set_uniform("uCameraPos", camera.position);
        shader.set_uniform("uFarPlane", far);
        self.light.apply(shader, "uPointLight");
        self.torch.apply(shader, "uSpotLight");

        self.depth_map.bind_texture(SHADOW_UNIT);
        self.scene.draw(shader, elapsed);

        Ok(())
    }

    fn on_exit(&mut self, _: &mut Context) -> Result<()> {
        video::set_cull_face(CullFace::Nothing);
        Ok(())
    }
}

fn main() {
    let settings = Settings::new("Advanced OpenGL - Shadow Mapping", 1280, 720)
        .with_overrides("settings/point_shadow.json");
    std::process::exit(application::launch(settings, PointShadow::new));
}
