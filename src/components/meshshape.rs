use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector3};

/// Primitive shape drawn by the renderer at the entity's
/// [`WorldPosition`](super::worldposition::WorldPosition).
///
/// The machine is built from boxes and spheres instead of loaded meshes.
#[derive(Component, Clone, Copy, Debug)]
pub enum MeshShape {
    /// Solid box with full `size` along each axis.
    Cube { size: Vector3, color: Color },
    /// Wireframe box with full `size` along each axis.
    CubeWires { size: Vector3, color: Color },
    Sphere { radius: f32, color: Color },
}

impl MeshShape {
    pub fn color(&self) -> Color {
        match self {
            MeshShape::Cube { color, .. }
            | MeshShape::CubeWires { color, .. }
            | MeshShape::Sphere { color, .. } => *color,
        }
    }
}
