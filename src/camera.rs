//! A free-flying camera driven by Euler angles.

use crate::math::*;

/// Possible directions of camera movement.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
    /// Along the world up vector, regardless of the pitch.
    Up,
    Down,
}

pub const YAW: f32 = -90.0;
pub const PITCH: f32 = 0.0;
pub const SPEED: f32 = 2.5;
pub const SENSITIVITY: f32 = 0.1;
pub const ZOOM: f32 = 45.0;
pub const ACCELERATION: f32 = 4.0;

/// A camera described by a position and yaw/pitch angles (in degrees). `front`,
/// `right` and `up` are derived from the angles and kept orthonormal.
#[derive(Debug, Clone, Copy)]
pub struct EulerCamera {
    pub position: Point3<f32>,
    pub world_up: Vector3<f32>,
    pub yaw: f32,
    pub pitch: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    pub zoom: f32,

    front: Vector3<f32>,
    right: Vector3<f32>,
    up: Vector3<f32>,
    accelerated: bool,
}

impl Default for EulerCamera {
    fn default() -> Self {
        EulerCamera::new(Point3::new(0.0, 0.0, 0.0))
    }
}

impl EulerCamera {
    /// Creates a camera at `position`, looking down the negative Z axis.
    pub fn new(position: Point3<f32>) -> Self {
        EulerCamera::with_angles(position, Vector3::unit_y(), YAW, PITCH)
    }

    pub fn with_angles(position: Point3<f32>, world_up: Vector3<f32>, yaw: f32, pitch: f32) -> Self {
        let mut camera = EulerCamera {
            position,
            world_up,
            yaw,
            pitch,
            movement_speed: SPEED,
            mouse_sensitivity: SENSITIVITY,
            zoom: ZOOM,
            front: -Vector3::unit_z(),
            right: Vector3::unit_x(),
            up: Vector3::unit_y(),
            accelerated: false,
        };

        camera.update_vectors();
        camera
    }

    /// Returns the view matrix.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at(self.position, self.position + self.front, self.up)
    }

    /// Returns a perspective projection using the current zoom as vertical field
    /// of view.
    pub fn projection_matrix(&self, aspect: f32, near: f32, far: f32) -> Matrix4<f32> {
        perspective(Deg(self.zoom), aspect, near, far)
    }

    #[inline]
    pub fn front(&self) -> Vector3<f32> {
        self.front
    }

    #[inline]
    pub fn right(&self) -> Vector3<f32> {
        self.right
    }

    #[inline]
    pub fn up(&self) -> Vector3<f32> {
        self.up
    }

    /// Enables or disables the movement speed multiplier.
    #[inline]
    pub fn process_accelerate(&mut self, accelerated: bool) {
        self.accelerated = accelerated;
    }

    pub fn process_keyboard(&mut self, movement: Movement, dt: f32) {
        let mut velocity = self.movement_speed * dt;
        if self.accelerated {
            velocity *= ACCELERATION;
        }

        match movement {
            Movement::Forward => self.position = self.position + self.front * velocity,
            Movement::Backward => self.position = self.position - self.front * velocity,
            Movement::Left => self.position = self.position - self.right * velocity,
            Movement::Right => self.position = self.position + self.right * velocity,
            Movement::Up => self.position = self.position + self.world_up * velocity,
            Movement::Down => self.position = self.position - self.world_up * velocity,
        }
    }

    /// Rotates the camera by mouse offsets. Positive `yoffset` looks up. Pitch
    /// is clamped to avoid flipping over the poles when `constrain_pitch` is set.
    pub fn process_mouse(&mut self, xoffset: f32, yoffset: f32, constrain_pitch: bool) {
        self.yaw += xoffset * self.mouse_sensitivity;
        self.pitch += yoffset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.max(-89.0).min(89.0);
        }

        self.update_vectors();
    }

    /// Narrows or widens the field of view, within `[1, 45]` degrees.
    pub fn process_scroll(&mut self, yoffset: f32) {
        self.zoom = (self.zoom - yoffset).max(1.0).min(ZOOM);
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (Rad::from(Deg(self.yaw)), Rad::from(Deg(self.pitch)));
        let front = Vector3::new(
            yaw.0.cos() * pitch.0.cos(),
            pitch.0.sin(),
            yaw.0.sin() * pitch.0.cos(),
        );

        self.front = front.normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}
