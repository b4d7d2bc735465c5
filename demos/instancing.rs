//! A planet surrounded by a belt of 100 000 rocks, all drawn with a single
//! instanced draw call per rock mesh.

extern crate lumen;
#[macro_use]
extern crate log;
extern crate rand;

use std::rc::Rc;

use lumen::instancing;
use lumen::prelude::*;

const ROCKS: usize = 100_000;
const RADIUS: f32 = 150.0;
const OFFSET: f32 = 25.0;

struct Instancing {
    object_shader: Shader,
    instance_shader: Shader,

    planet: Model,
    rock: Model,

    torch: SpotLight,
}

impl Instancing {
    fn new(engine: &mut Engine) -> Result<Self> {
        engine.context_mut().camera = EulerCamera::new(Point3::new(0.0, 30.0, 255.0));

        let object_shader = Shader::from_files("shaders/demo.vert", "shaders/demo.frag", None)?;
        let instance_shader = Shader::from_files("shaders/instancing.vert", "shaders/instancing.frag", None)?;

        let planet = Model::from_file_or("resources/planet/planet.obj", false, || {
            let texture = Texture::checkerboard(TextureParams::default())?;
            Ok(primitives::sphere(4)?.with_texture(TextureKind::Diffuse, Rc::new(texture)))
        })?;

        let mut rock = Model::from_file_or("resources/rock/rock.obj", false, || {
            let texture = Texture::solid([120, 110, 100, 255], TextureParams::default())?;
            Ok(primitives::sphere(1)?.with_texture(TextureKind::Diffuse, Rc::new(texture)))
        })?;

        let transforms = instancing::asteroid_field(&mut rand::thread_rng(), ROCKS, RADIUS, OFFSET);
        for mesh in rock.meshes_mut() {
            mesh.set_instances(&transforms)?;
        }

        info!("Scattered {} rocks around the planet.", transforms.len());

        let sun = DirectionalLight::new(Vector3::new(1.0, -1.0, 0.0), 0.5, 1.0, 1.0);
        for shader in &[&object_shader, &instance_shader] {
            shader.bind();
            sun.apply(shader, "uDirectionalLight");
        }

        Ok(Instancing {
            object_shader,
            instance_shader,
            planet,
            rock,
            torch: SpotLight::default(),
        })
    }
}

impl Application for Instancing {
    fn on_update(&mut self, ctx: &mut Context) -> Result<()> {
        video::clear(Some(application::CLEAR_COLOR), true);

        let camera = &ctx.camera;
        let view = camera.view_matrix();
        let projection = camera.projection_matrix(ctx.aspect(), 0.1, 1000.0);

        self.torch.follow(camera);
        for shader in &[&self.object_shader, &self.instance_shader] {
            shader.bind();
            shader.set_uniform("uView", view);
            shader.set_uniform("uProjection", projection);
            shader.set_uniform("uCameraPos", camera.position);
            self.torch.apply(shader, "uSpotLight");
        }

        self.object_shader.bind();
        self.object_shader.set_uniform(
            "uModel",
            math::model_matrix(Vector3::new(0.0, -3.0, 0.0), None, Vector3::new(4.0, 4.0, 4.0)),
        );
        self.planet.draw(&self.object_shader);

        self.rock.draw_instanced(&self.instance_shader);
        Ok(())
    }
}

fn main() {
    let settings =
        Settings::new("Advanced OpenGL - Instancing", 800, 600).with_overrides("settings/instancing.json");
    std::process::exit(application::launch(settings, Instancing::new));
}
