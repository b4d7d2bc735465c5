//! A small village: farmhouse, warehouse, country house, a nanosuit and a row
//! of industrial fans. The scene is first rendered off-screen, and the result
//! wraps a sphere floating next to the nanosuit like a crystal ball.

extern crate lumen;

use lumen::prelude::*;
use lumen::video::framebuffer;

const SPHERE_UNIT: u32 = 3;
const FANS: usize = 4;
const CLEAR_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];

struct Village {
    farmhouse: Model,
    warehouse: Model,
    country_house: Model,
    nanosuit: Model,
    fans: Model,
}

impl Village {
    fn load() -> Result<Self> {
        Ok(Village {
            farmhouse: Model::from_file_or("resources/farmhouse/farmhouse.obj", false, primitives::cube)?,
            warehouse: Model::from_file_or("resources/warehouse/warehouse.obj", false, primitives::cube)?,
            country_house: Model::from_file_or("resources/CountryHouse/house.obj", false, primitives::cube)?,
            nanosuit: Model::from_file_or("resources/nanosuit/nanosuit.obj", false, || primitives::sphere(3))?,
            fans: Model::from_file_or("resources/IndustrialFans/IndustrialFans.obj", false, primitives::cube)?,
        })
    }

    fn draw(&self, shader: &Shader) {
        shader.bind();

        shader.set_uniform(
            "uModel",
            math::model_matrix(
                Vector3::new(-30.0, -5.0, 0.0),
                Some((Vector3::unit_y(), Deg(180.0).into())),
                Vector3::new(1.0, 1.0, 1.0),
            ),
        );
        self.farmhouse.draw(shader);

        shader.set_uniform(
            "uModel",
            math::model_matrix(
                Vector3::new(30.0, 0.0, 0.0),
                Some((Vector3::unit_x(), Deg(-90.0).into())),
                Vector3::new(2.0, 2.0, 2.0),
            ),
        );
        self.warehouse.draw(shader);

        shader.set_uniform(
            "uModel",
            math::model_matrix(Vector3::new(10.0, -5.0, 0.0), None, Vector3::new(0.002, 0.002, 0.002)),
        );
        self.country_house.draw(shader);

        shader.set_uniform(
            "uModel",
            math::model_matrix(Vector3::new(-4.0, -1.0, 25.0), None, Vector3::new(0.2, 0.2, 0.2)),
        );
        self.nanosuit.draw(shader);

        for i in 0..FANS {
            let position = Vector3::new(-34.0 + i as f32 * 2.5, -3.5, 17.0);
            shader.set_uniform("uModel", Matrix4::from_translation(position));
            self.fans.draw(shader);
        }
    }
}

struct Showcase {
    object_shader: Shader,
    sphere_shader: Shader,

    village: Village,
    sphere: Model,

    framebuffer: FrameBuffer,
    torch: SpotLight,
}

impl Showcase {
    fn new(engine: &mut Engine) -> Result<Self> {
        engine.context_mut().camera = EulerCamera::new(Point3::new(0.0, 0.0, 30.0));

        let object_shader = Shader::from_files("shaders/demo.vert", "shaders/demo.frag", None)?;
        let sphere_shader = Shader::from_files("shaders/sphere.vert", "shaders/sphere.frag", None)?;

        let village = Village::load()?;
        let sphere = Model::from_file_or("resources/sphere/sphere.obj", false, || primitives::sphere(4))?;

        object_shader.bind();
        DirectionalLight::new(Vector3::new(1.0, -1.0, 0.0), 0.5, 1.0, 1.0).apply(&object_shader, "uDirectionalLight");

        sphere_shader.bind();
        sphere_shader.set_uniform("uSphereMap", SPHERE_UNIT as i32);

        Ok(Showcase {
            object_shader,
            sphere_shader,
            village,
            sphere,
            framebuffer: FrameBuffer::new(engine.context().dimensions())?,
            torch: SpotLight::default(),
        })
    }
}

impl Application for Showcase {
    fn on_update(&mut self, ctx: &mut Context) -> Result<()> {
        let camera = &ctx.camera;
        let view = camera.view_matrix();
        let projection = camera.projection_matrix(ctx.aspect(), 0.1, 100.0);

        self.torch.follow(camera);

        let shader = &self.object_shader;
        shader.bind();
        shader.set_uniform("uView", view);
        shader.set_uniform("uProjection", projection);
        shader.set_uniform("uCameraPos", camera.position);
        self.torch.apply(shader, "uSpotLight");

        self.framebuffer.bind();
        video::set_depth_test(true);
        video::clear(Some(application::CLEAR_COLOR), true);
        self.village.draw(shader);

        framebuffer::unbind(ctx.dimensions());
        video::clear(Some(CLEAR_COLOR), true);

        self.sphere_shader.bind();
        self.sphere_shader.set_uniform("uView", view);
        self.sphere_shader.set_uniform("uProjection", projection);
        self.sphere_shader.set_uniform(
            "uModel",
            math::model_matrix(
                Vector3::new(0.0, 0.0, 25.0),
                Some((Vector3::unit_x(), Deg(90.0).into())),
                Vector3::new(1.0, 1.0, 1.0),
            ),
        );
        self.framebuffer.bind_texture(SPHERE_UNIT);
        self.sphere.draw(&self.sphere_shader);

        self.village.draw(shader);
        Ok(())
    }
}

fn main() {
    let settings =
        Settings::new("Advanced OpenGL - Demo", 1280, 720).with_overrides("settings/showcase.json");
    std::process::exit(application::launch(settings, Showcase::new));
}
