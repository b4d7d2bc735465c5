//! Four programs sharing their camera matrices through one uniform buffer.
//! The projection is written once, the view every frame, and every program
//! sees both without any per-program upload.

extern crate lumen;

use std::mem;

use lumen::prelude::*;

const MATRICES_BLOCK: &str = "uMatrices";
const MATRICES_BINDING: u32 = 0;
const MAT4_SIZE: usize = mem::size_of::<Matrix4<f32>>();

const FRAGMENTS: [&str; 4] = [
    "shaders/ubR.frag",
    "shaders/ubG.frag",
    "shaders/ubB.frag",
    "shaders/ubY.frag",
];

const POSITIONS: [[f32; 3]; 4] = [
    [-0.75, 0.75, 0.0],
    [0.75, 0.75, 0.0],
    [-0.75, -0.75, 0.0],
    [0.75, -0.75, 0.0],
];

struct UniformBuffers {
    shaders: Vec<Shader>,
    matrices: UniformBuffer,
    cube: Mesh,
}

impl UniformBuffers {
    fn new(engine: &mut Engine) -> Result<Self> {
        engine.context_mut().camera = EulerCamera::new(Point3::new(0.0, 0.0, 3.0));

        let matrices = UniformBuffer::new(2 * MAT4_SIZE, MATRICES_BINDING)?;

        let mut shaders = Vec::with_capacity(FRAGMENTS.len());
        for fragment in &FRAGMENTS {
            let shader = Shader::from_files("shaders/uniformbuffers.vert", fragment, None)?;
            matrices.attach(&shader, MATRICES_BLOCK)?;
            shaders.push(shader);
        }

        let ctx = engine.context();
        let projection = ctx.camera.projection_matrix(ctx.aspect(), 0.1, 100.0);
        matrices.update(0, &projection)?;

        Ok(UniformBuffers {
            shaders,
            matrices,
            cube: primitives::cube()?,
        })
    }
}

impl Application for UniformBuffers {
    fn on_update(&mut self, ctx: &mut Context) -> Result<()> {
        video::clear(Some(application::CLEAR_COLOR), true);

        self.matrices.update(MAT4_SIZE, &ctx.camera.view_matrix())?;

        for (shader, position) in self.shaders.iter().zip(POSITIONS.iter()) {
            shader.bind();
            shader.set_uniform("uModel", Matrix4::from_translation(Vector3::from(*position)));
            self.cube.draw(shader);
        }

        Ok(())
    }
}

fn main() {
    let settings = Settings::new("Advanced OpenGL - Uniform Buffers", 800, 600)
        .with_overrides("settings/uniform_buffers.json");
    std::process::exit(application::launch(settings, UniformBuffers::new));
}
