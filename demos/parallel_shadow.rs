//! Shadows cast by a directional light: the scene is first rendered into a
//! depth map through an orthographic light projection, then lit normally with
//! the depth map telling which fragments the light can't see.
//!
//! `F` toggles the torch, `B` Blinn-Phong and `=`/`-` tune the gamma.

extern crate lumen;

use std::rc::Rc;

use lumen::prelude::*;
use lumen::video::framebuffer;

const SHADOW_UNIT: u32 = 15;
const SHADOW_SIZE: u32 = 1024;
const LIGHT_NEAR: f32 = 1.0;
const LIGHT_FAR: f32 = 7.5;
const CLEAR_COLOR: [f32; 4] = [0.1, 0.1, 0.1, 1.0];

struct Scene {
    floor: Mesh,
    cube: Mesh,
    planet: Model,
}

impl Scene {
    fn draw(&self, shader: &Shader, elapsed: f32) {
        shader.bind();

        shader.set_uniform(
            "uModel",
            math::model_matrix(Vector3::new(0.0, -0.5, 0.0), None, Vector3::new(50.0, 50.0, 50.0)),
        );
        self.floor.draw(shader);

        let one = Vector3::new(1.0, 1.0, 1.0);
        shader.set_uniform("uModel", math::model_matrix(Vector3::new(0.0, 1.5, 0.0), None, one));
        self.cube.draw(shader);

        shader.set_uniform("uModel", math::model_matrix(Vector3::new(2.0, 0.0, 1.0), None, one));
        self.cube.draw(shader);

        shader.set_uniform(
            "uModel",
            math::model_matrix(
                Vector3::new(-1.0, 0.0, 2.0),
                Some((Vector3::new(1.0, 0.0, 1.0), Deg(10.0 * elapsed).into())),
                Vector3::new(0.5, 0.5, 0.5),
            ),
        );
        self.cube.draw(shader);

        shader.set_uniform(
            "uModel",
            math::model_matrix(Vector3::new(-2.0, 1.0, -1.0), None, Vector3::new(0.2, 0.2, 0.2)),
        );
        self.planet.draw(shader);
    }
}

struct ParallelShadow {
    object_shader: Shader,
    depth_shader: Shader,

    scene: Scene,
    depth_map: DepthMap,
    light_position: Point3<f32>,

    mode: LightingMode,
    torch: SpotLight,
}

impl ParallelShadow {
    fn new(engine: &mut Engine) -> Result<Self> {
        engine.context_mut().camera = EulerCamera::new(Point3::new(0.0, 0.0, 3.0));

        let object_shader = Shader::from_files("shaders/parallel_shadow.vert", "shaders/parallel_shadow.frag", None)?;
        let depth_shader = Shader::from_files(
            "shaders/parallel_shadow_map.vert",
            "shaders/parallel_shadow_map.frag",
            None,
        )?;

        let wood = Rc::new(Texture::from_file_or_checker(
            "resources/default/wood.png",
            TextureParams::default(),
        )?);

        let scene = Scene {
            floor: primitives::plane(25.0)?
                .with_texture(TextureKind::Diffuse, wood.clone())
                .with_texture(TextureKind::Specular, wood.clone()),
            cube: primitives::cube()?
                .with_texture(TextureKind::Diffuse, wood.clone())
                .with_texture(TextureKind::Specular, wood),
            planet: Model::from_file_or("resources/planet/planet.obj", false, || primitives::sphere(3))?,
        };

        let light_position = Point3::new(-2.0, 4.0, -1.0);

        object_shader.bind();
        PointLight::new(light_position, Vector3::new(1.0, 1.0, 1.0)).apply(&object_shader, "uPointLight");
        object_shader.set_uniform("uShadowMap", SHADOW_UNIT as i32);

        Ok(ParallelShadow {
            object_shader,
            depth_shader,
            scene,
            depth_map: DepthMap::new(Vector2::new(SHADOW_SIZE, SHADOW_SIZE))?,
            light_position,
            mode: LightingMode::default(),
            torch: SpotLight::default(),
        })
    }

    fn light_space(&self) -> Matrix4<f32> {
        let projection = math::ortho(-10.0, 10.0, -10.0, 10.0, LIGHT_NEAR, LIGHT_FAR);
        let view = Matrix4::look_at(self.light_position, Point3::origin(), Vector3::unit_y());
        projection * view
    }
}

impl Application for ParallelShadow {
    fn on_update(&mut self, ctx: &mut Context) -> Result<()> {
        self.mode.handle_input(&ctx.input);

        let light_space = self.light_space();
        let elapsed = ctx.elapsed();

        self.depth_map.bind();
        video::clear(None, true);
        video::set_cull_face(CullFace::Front);

        self.depth_shader.bind();
        self.depth_shader.set_uniform("uLightSpaceMatrix", light_space);
        self.scene.draw(&self.depth_shader, elapsed);

        video::set_cull_face(CullFace::Nothing);
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
        shader.set_uniform("uLightSpaceMatrix", light_space);
        self.torch.apply(shader, "uSpotLight");

        self.depth_map.bind_texture(SHADOW_UNIT);
        self.scene.draw(shader, elapsed);

        Ok(())
    }
}

fn main() {
    let settings = Settings::new("Advanced OpenGL - Shadow Mapping", 1280, 720)
        .with_overrides("settings/parallel_shadow.json");
    std::process::exit(application::launch(settings, ParallelShadow::new));
}
