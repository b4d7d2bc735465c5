//! Renders the scene into an off-screen framebuffer, then shows its color
//! texture on four screen quads, each with another post-processing effect.

extern crate lumen;

use std::rc::Rc;

use lumen::prelude::*;
use lumen::video::framebuffer;

/// Screen corner and `uProcessMode` of every quad: inversion, grayscale,
/// sharpen kernel and edge detection kernel.
const SCREENS: [([f32; 2], i32); 4] = [
    ([0.5, 0.5], 1),
    ([-0.5, 0.5], 2),
    ([-0.5, -0.5], 3),
    ([0.5, -0.5], 4),
];

struct FrameBuffers {
    object_shader: Shader,
    screen_shader: Shader,

    house: Model,
    floor: Mesh,
    container: Mesh,
    window: TransparentCube,
    quad: Mesh,

    framebuffer: FrameBuffer,
    torch: SpotLight,
}

impl FrameBuffers {
    fn new(engine: &mut Engine) -> Result<Self> {
        engine.context_mut().camera = EulerCamera::new(Point3::new(0.0, 1.0, 3.0));

        let object_shader = Shader::from_files("shaders/framebuffer.vert", "shaders/framebuffer.frag", None)?;
        let screen_shader = Shader::from_files("shaders/screenshader.vert", "shaders/screenshader.frag", None)?;

        let house = Model::from_file_or("resources/CountryHouse/house.obj", false, primitives::cube)?;

        let params = TextureParams::default();
        let container = Rc::new(Texture::from_file_or_checker("resources/default/container.jpg", params)?);
        let container = primitives::cube()?
            .with_texture(TextureKind::Diffuse, container.clone())
            .with_texture(TextureKind::Specular, container);

        let marble = Rc::new(Texture::from_file_or_checker("resources/default/marble.jpg", params)?);
        let floor = primitives::plane(10.0)?
            .with_texture(TextureKind::Diffuse, marble.clone())
            .with_texture(TextureKind::Specular, marble);

        let red = Rc::new(Texture::from_file_or_solid(
            "resources/default/redwindow.png",
            params,
            [255, 0, 0, 128],
        )?);

        let mut window = TransparentCube::new()?;
        window.mesh_mut().add_texture(TextureKind::Diffuse, red.clone());
        window.mesh_mut().add_texture(TextureKind::Specular, red);

        let framebuffer = FrameBuffer::new(engine.context().dimensions())?;

        object_shader.bind();
        DirectionalLight::new(Vector3::new(1.0, -1.0, 1.0), 0.1, 1.0, 1.0).apply(&object_shader, "uDirectionalLight");

        Ok(FrameBuffers {
            object_shader,
            screen_shader,
            house,
            floor,
            container,
            window,
            quad: primitives::quad()?,
            framebuffer,
            torch: SpotLight::default(),
        })
    }

    fn draw_scene(&mut self, ctx: &Context) -> Result<()> {
        let camera = &ctx.camera;
        let shader = &self.object_shader;

        self.torch.follow(camera);

        shader.bind();
        shader.set_uniform("uView", camera.view_matrix());
        shader.set_uniform("uProjection", camera.projection_matrix(ctx.aspect(), 0.1, 100.0));
        shader.set_uniform("uCameraPos", camera.position);
        self.torch.apply(shader, "uSpotLight");

        let up = Vector3::unit_y();
        let angle: Rad<f32> = Deg(10.0 * ctx.elapsed()).into();

        shader.set_uniform(
            "uModel",
            math::model_matrix(Vector3::new(5.0, 0.0, -10.0), None, Vector3::new(0.001, 0.001, 0.001)),
        );
        self.house.draw(shader);

        shader.set_uniform(
            "uModel",
            math::model_matrix(Vector3::new(0.0, -0.6, 0.0), None, Vector3::new(10.0, 10.0, 10.0)),
        );
        self.floor.draw(shader);

        shader.set_uniform(
            "uModel",
            math::model_matrix(Vector3::new(-1.0, 0.0, 0.0), Some((up, angle)), Vector3::new(1.0, 1.0, 1.0)),
        );
        self.container.draw(shader);

        let model = math::model_matrix(Vector3::new(2.0, 0.0, 0.0), Some((up, angle)), Vector3::new(1.0, 1.0, 1.0));
        shader.set_uniform("uModel", model);
        self.window.sort(&model, camera.position)?;
        self.window.draw(shader);

        Ok(())
    }
}

impl Application for FrameBuffers {
    fn on_update(&mut self, ctx: &mut Context) -> Result<()> {
        self.framebuffer.bind();
        video::set_depth_test(true);
        video::clear(Some(application::CLEAR_COLOR), true);
        self.draw_scene(ctx)?;

        framebuffer::unbind(ctx.dimensions());
        video::set_depth_test(false);
        video::clear(Some(application::CLEAR_COLOR), false);

        let shader = &self.screen_shader;
        shader.bind();
        self.framebuffer.bind_texture(0);
        shader.set_uniform("uMaterial.texture1", 0);

        for &(corner, mode) in &SCREENS {
            let model = math::model_matrix(
                Vector3::new(corner[0], corner[1], 0.0),
                None,
                Vector3::new(0.5, 0.5, 1.0),
            );

            shader.set_uniform("uProcessMode", mode);
            shader.set_uniform("uModel", model);
            self.quad.draw(shader);
        }

        video::set_depth_test(true);
        Ok(())
    }
}

fn main() {
    let settings =
        Settings::new("Advanced OpenGL - Framebuffer", 1280, 720).with_overrides("settings/framebuffers.json");
    std::process::exit(application::launch(settings, FrameBuffers::new));
}
