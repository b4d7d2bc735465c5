//! Normal and parallax mapping on two cubes, lit by four point lights of
//! increasing intensity and a torch held by the camera.
//!
//! `F` toggles the torch, `B` Blinn-Phong, `N` normal mapping. `=`/`-` tune
//! the gamma and `.`/`,` the height scale, both printed to the terminal.

#[macro_use]
extern crate log;
extern crate lumen;

use std::io::{self, Write};
use std::rc::Rc;

use lumen::prelude::*;

const LIGHT_POSITIONS: [[f32; 3]; 4] = [
    [-6.0, 5.0, 2.0],
    [-2.0, 5.0, 2.0],
    [2.0, 5.0, 2.0],
    [6.0, 5.0, 2.0],
];

const LIGHT_INTENSITIES: [f32; 4] = [0.25, 0.5, 0.75, 1.0];

/// Builds a cube with a color texture, used as diffuse and specular map, and
/// its normal and height maps.
fn textured_cube(color: &str, normal: &str, height: &str) -> Result<Mesh> {
    let linear = TextureParams::default();
    let color = Rc::new(Texture::from_file_or_checker(color, linear.srgb(true))?);
    let normal = Texture::from_file_or_solid(normal, linear, [128, 128, 255, 255])?;
    let height = Texture::from_file_or_solid(height, linear, [0, 0, 0, 255])?;

    Ok(primitives::cube()?
        .with_texture(TextureKind::Diffuse, color.clone())
        .with_texture(TextureKind::Specular, color)
        .with_texture(TextureKind::Normal, Rc::new(normal))
        .with_texture(TextureKind::Height, Rc::new(height)))
}

struct ParallaxMapping {
    shader: Shader,
    floor: Mesh,
    bricks: Mesh,

    mode: LightingMode,
    torch: SpotLight,
}

impl ParallaxMapping {
    fn new(engine: &mut Engine) -> Result<Self> {
        engine.context_mut().camera = EulerCamera::new(Point3::new(0.0, 0.0, 3.0));

        let floor = textured_cube(
            "resources/default/toy_box_diffuse.png",
            "resources/default/toy_box_normal.png",
            "resources/default/toy_box_disp.png",
        )?;

        let bricks = textured_cube(
            "resources/default/bricks2.jpg",
            "resources/default/bricks2_normal.jpg",
            "resources/default/bricks2_disp.jpg",
        )?;

        let shader = Shader::from_files("shaders/parallaxmap.vert", "shaders/parallaxmap.frag", None)?;
        shader.bind();

        DirectionalLight::new(Vector3::new(1.0, -1.0, 0.0), 0.0, 0.0, 0.0).apply(&shader, "uDirectionalLight");
        for (i, (p, &v)) in LIGHT_POSITIONS.iter().zip(LIGHT_INTENSITIES.iter()).enumerate() {
            PointLight::new(Point3::from(*p), Vector3::new(v, v, v)).apply_indexed(&shader, "uPointLights", i);
        }

        Ok(ParallaxMapping {
            shader,
            floor,
            bricks,
            mode: LightingMode::default(),
            torch: SpotLight::default(),
        })
    }
}

impl Application for ParallaxMapping {
    fn on_update(&mut self, ctx: &mut Context) -> Result<()> {
        self.mode.handle_input(&ctx.input);

        video::clear(Some(application::CLEAR_COLOR), true);

        let mut stdout = io::stdout();
        if let Err(err) = stdout
            .write_all(self.mode.status_line().as_bytes())
            .and_then(|_| stdout.flush())
        {
            warn!("Failed to print the lighting status: {}.", err);
        }

        let camera = &ctx.camera;
        let shader = &self.shader;

        self.torch.follow(camera);

        shader.bind();
        self.mode.apply(shader);
        shader.set_uniform("uView", camera.view_matrix());
        shader.set_uniform("uProjection", camera.projection_matrix(ctx.aspect(), 0.1, 100.0));
        shader.set_uniform("uCameraPos", camera.position);
        self.torch.apply(shader, "uSpotLight");

        shader.set_uniform(
            "uModel",
            math::model_matrix(
                Vector3::new(0.0, -0.5, 0.0),
                Some((Vector3::unit_x(), Deg(90.0).into())),
                Vector3::new(1.0, 1.0, 1.0),
            ),
        );
        self.floor.draw(shader);

        shader.set_uniform(
            "uModel",
            math::model_matrix(Vector3::new(2.0, 0.0, 0.0), None, Vector3::new(1.0, 1.0, 1.0)),
        );
        self.bricks.draw(shader);

        Ok(())
    }

    fn on_exit(&mut self, _: &mut Context) -> Result<()> {
        println!();
        Ok(())
    }
}

fn main() {
    let settings = Settings::new("Advanced Lighting -- Parallax Mapping", 1280, 720)
        .with_overrides("settings/parallax_mapping.json");
    std::process::exit(application::launch(settings, ParallaxMapping::new));
}
