//! Skybox and environment mapping: a country house and a cube reflecting the
//! skybox, a lit container, a nanosuit with reflection maps and a transparent
//! window cube drawn last with its faces sorted back to front.

extern crate lumen;

use std::rc::Rc;

use lumen::prelude::*;
use lumen::video::skybox::SKYBOX_UNIT;

const SKYBOX_FACES: [&str; 6] = [
    "resources/skyboxes/lake/right.jpg",
    "resources/skyboxes/lake/left.jpg",
    "resources/skyboxes/lake/top.jpg",
    "resources/skyboxes/lake/bottom.jpg",
    "resources/skyboxes/lake/front.jpg",
    "resources/skyboxes/lake/back.jpg",
];

struct CubeMaps {
    object_shader: Shader,
    skybox_shader: Shader,
    envmap_shader: Shader,
    nano_shader: Shader,

    house: Model,
    nanosuit: Model,
    container: Mesh,
    mirror: Mesh,
    window: TransparentCube,
    skybox: Skybox,

    torch: SpotLight,
}

impl CubeMaps {
    fn new(engine: &mut Engine) -> Result<Self> {
        engine.context_mut().camera = EulerCamera::new(Point3::new(0.0, 0.0, 3.0));

        let object_shader = Shader::from_files("shaders/cubemaps.vert", "shaders/cubemaps.frag", None)?;
        let skybox_shader = Shader::from_files("shaders/skybox.vert", "shaders/skybox.frag", None)?;
        let envmap_shader = Shader::from_files("shaders/envmap.vert", "shaders/envmap.frag", None)?;
        let nano_shader = Shader::from_files(
            "shaders/cubemaps.vert",
            "shaders/cubemaps_nanosuit.frag",
            None,
        )?;

        let house = Model::from_file_or("resources/CountryHouse/house.obj", false, primitives::cube)?;
        let nanosuit = Model::from_file_or(
            "resources/nanosuit_reflection/nanosuit.obj",
            false,
            || primitives::sphere(3),
        )?;

        let params = TextureParams::default();
        let container = Rc::new(Texture::from_file_or_checker("resources/default/container.jpg", params)?);
        let container = primitives::cube()?
            .with_texture(TextureKind::Diffuse, container.clone())
            .with_texture(TextureKind::Specular, container);

        let mirror = primitives::cube()?;

        let red = Rc::new(Texture::from_file_or_solid(
            "resources/default/redwindow.png",
            params,
            [255, 0, 0, 128],
        )?);

        let mut window = TransparentCube::new()?;
        window.mesh_mut().add_texture(TextureKind::Diffuse, red.clone());
        window.mesh_mut().add_texture(TextureKind::Specular, red);

        let mut skybox = Skybox::new()?;
        skybox.load_texture(&SKYBOX_FACES)?;

        let sun = DirectionalLight::new(Vector3::new(1.0, -1.0, 1.0), 0.1, 1.0, 1.0);
        for shader in &[&object_shader, &nano_shader] {
            shader.bind();
            sun.apply(shader, "uDirectionalLight");
        }

        nano_shader.bind();
        nano_shader.set_uniform("uSkybox", SKYBOX_UNIT as i32);
        envmap_shader.bind();
        envmap_shader.set_uniform("uSkybox", SKYBOX_UNIT as i32);

        Ok(CubeMaps {
            object_shader,
            skybox_shader,
            envmap_shader,
            nano_shader,
            house,
            nanosuit,
            container,
            mirror,
            window,
            skybox,
            torch: SpotLight::default(),
        })
    }
}

impl Application for CubeMaps {
    fn on_update(&mut self, ctx: &mut Context) -> Result<()> {
        video::clear(Some(application::CLEAR_COLOR), true);

        let camera = &ctx.camera;
        let t = ctx.elapsed();
        let view = camera.view_matrix();
        let projection = camera.projection_matrix(ctx.aspect(), 0.1, 100.0);

        self.torch.follow(camera);
        for shader in &[&self.object_shader, &self.nano_shader, &self.envmap_shader] {
            shader.bind();
            shader.set_uniform("uCameraPos", camera.position);
            shader.set_uniform("uView", view);
            shader.set_uniform("uProjection", projection);
        }

        for shader in &[&self.object_shader, &self.nano_shader] {
            shader.bind();
            self.torch.apply(shader, "uSpotLight");
        }

        if let Some(cubemap) = self.skybox.cubemap() {
            cubemap.bind(SKYBOX_UNIT);
        }

        let up = Vector3::unit_y();

        self.envmap_shader.bind();
        self.envmap_shader.set_uniform(
            "uModel",
            math::model_matrix(Vector3::new(5.0, -5.0, -10.0), None, Vector3::new(0.001, 0.001, 0.001)),
        );
        self.house.draw(&self.envmap_shader);

        self.object_shader.bind();
        self.object_shader.set_uniform(
            "uModel",
            math::model_matrix(Vector3::zero(), Some((up, Deg(30.0 * t).into())), Vector3::new(1.0, 1.0, 1.0)),
        );
        self.container.draw(&self.object_shader);

        self.envmap_shader.bind();
        self.envmap_shader.set_uniform(
            "uModel",
            math::model_matrix(
                Vector3::new(2.0, 0.0, 0.0),
                Some((up, Deg(10.0 * t).into())),
                Vector3::new(1.0, 1.0, 1.0),
            ),
        );
        self.mirror.draw(&self.envmap_shader);

        self.nano_shader.bind();
        self.nano_shader.set_uniform(
            "uModel",
            math::model_matrix(Vector3::new(-4.0, -1.0, 0.0), None, Vector3::new(0.2, 0.2, 0.2)),
        );
        self.nanosuit.draw(&self.nano_shader);

        self.skybox.draw(&self.skybox_shader, view, projection);

        let model = math::model_matrix(
            Vector3::new(-2.0, 0.0, 0.0),
            Some((up, Deg(20.0 * t).into())),
            Vector3::new(1.0, 1.0, 1.0),
        );

        self.object_shader.bind();
        self.object_shader.set_uniform("uModel", model);
        self.window.sort(&model, camera.position)?;
        self.window.draw(&self.object_shader);

        Ok(())
    }
}

fn main() {
    let settings = Settings::new("Advanced OpenGL - CubeMaps", 800, 600).with_overrides("settings/cubemaps.json");
    std::process::exit(application::launch(settings, CubeMaps::new));
}
