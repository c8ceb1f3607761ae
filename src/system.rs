//! System trait

use crate::error::Result;
use crate::scene::Scene;

/// Per-frame logic unit
///
/// Systems are built by [`Scene::register_system`] with the scene and an
/// injected [`QueryRegistryHandle`](crate::registry::QueryRegistryHandle),
/// and run in registration order.
pub trait System: Send + Sync {
    /// Get system name
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Called once, on the scene's first update, after queries are populated
    fn init(&mut self, _scene: &mut Scene) -> Result<()> {
        Ok(())
    }

    /// Run system logic for one frame; `delta` is passed through unmodified
    fn update(&mut self, scene: &mut Scene, delta: f64) -> Result<()>;
}

/// Boxed system
pub type BoxedSystem = Box<dyn System>;
