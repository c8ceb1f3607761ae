//! Convenient re-exports of commonly used types.
//!
//! The prelude can be imported with:
//! ```
//! use scene_ecs::prelude::*;
//! ```

pub use crate::component::{Component, ComponentSet, ComponentType};
pub use crate::debug::SceneInspector;
pub use crate::entity::{Entity, EntityId};
pub use crate::error::{EcsError, Result};
pub use crate::query::Query;
pub use crate::registry::{QueryRegistry, QueryRegistryHandle, RegistryEntry};
pub use crate::scene::{Scene, SingletonMut};
pub use crate::system::System;
