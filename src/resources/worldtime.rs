use bevy_ecs::prelude::Resource;

/// Simulation clock advanced once per frame by
/// [`update_world_time`](crate::systems::time::update_world_time).
///
/// All animation and alarms read `delta`, so scaling time slows the whole
/// machine down uniformly.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Scaled seconds since startup.
    pub elapsed: f32,
    /// Scaled seconds of the current frame.
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Start a new frame that lasted `dt` real seconds.
    ///
    /// Negative deltas (clock hiccups) count as zero.
    pub fn advance(&mut self, dt: f32) {
        self.delta = dt.max(0.0) * self.time_scale;
        self.elapsed += self.delta;
        self.frame_count += 1;
    }
}
