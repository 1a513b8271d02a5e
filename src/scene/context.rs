use crate::math::{vector::Vector, FloatNum};

/// Global per-frame force configuration.
///
/// Held by the scene for its consumers; the scene itself applies no
/// forces (see `Scene::update_objects_by_duration`).
#[derive(Debug, Clone)]
pub struct Context {
    pub g_acceleration: Vector,
    pub air_friction: FloatNum,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            g_acceleration: (0., 10.).into(),
            air_friction: 0.,
        }
    }
}
