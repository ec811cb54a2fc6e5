use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

/// Model-space position of an entity. The renderer adds the scene origin.
#[derive(Component, Clone, Copy, Debug)]
pub struct WorldPosition {
    pub pos: Vector3,
}

impl WorldPosition {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            pos: Vector3 { x, y, z },
        }
    }
}

impl From<Vector3> for WorldPosition {
    fn from(pos: Vector3) -> Self {
        Self { pos }
    }
}
