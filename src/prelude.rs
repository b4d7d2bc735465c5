pub use crate::math;
pub use crate::math::{
    Deg, EuclideanSpace, InnerSpace, Matrix, Matrix4, Point3, Rad, SquareMatrix, Vector2, Vector3,
    Zero,
};

pub use crate::application::{self, Application, Context, Engine, Settings};
pub use crate::errors::{self, Result};

pub use crate::camera::{EulerCamera, Movement};
pub use crate::input::{InputSystem, Key};
pub use crate::lighting::{DirectionalLight, LightingMode, PointLight, SpotLight};

pub use crate::video;
pub use crate::video::primitives::{self, TransparentCube};
pub use crate::video::{
    Cubemap, CullFace, DepthCubeMap, DepthMap, FrameBuffer, Mesh, Model, Shader, Skybox, Texture,
    TextureKind, TextureParams, UniformBuffer,
};
