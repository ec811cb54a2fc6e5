use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera3D, Vector3};

/// Vertical field of view of the scene camera in degrees.
pub const CAMERA_FOVY: f32 = 16.0;

/// Offset of the machine model relative to the world origin.
pub const SCENE_ORIGIN: Vector3 = Vector3 {
    x: 0.0,
    y: -3.0,
    z: 0.0,
};

/// Convert a model-space position into world space.
pub fn to_scene(pos: Vector3) -> Vector3 {
    Vector3 {
        x: pos.x + SCENE_ORIGIN.x,
        y: pos.y + SCENE_ORIGIN.y,
        z: pos.z + SCENE_ORIGIN.z,
    }
}

/// Shared 3D camera used for rendering and pointer picking.
#[derive(Resource, Clone, Copy)]
pub struct Camera3DRes(pub Camera3D);

impl Default for Camera3DRes {
    /// Looks at the machine from the front-right, slightly above the origin.
    fn default() -> Self {
        Camera3DRes(Camera3D::perspective(
            Vector3 {
                x: 35.0,
                y: 5.5,
                z: -9.0,
            },
            Vector3 {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            },
            Vector3 {
                x: 0.0,
                y: 1.0,
                z: 0.0,
            },
            CAMERA_FOVY,
        ))
    }
}
