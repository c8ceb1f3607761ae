// Copyright 2024 Saptak Santra
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Entity identifiers and per-entity component bags.

use ahash::AHashMap;
use slotmap::new_key_type;
use std::any::{Any, TypeId};

use crate::component::{Component, ComponentType};

new_key_type! {
    /// Unique entity identifier backed by slotmap's generational keys.
    pub struct EntityId;
}

/// Type-erased component value plus its diagnostic name
struct ComponentSlot {
    name: &'static str,
    value: Box<dyn Any + Send + Sync>,
}

/// An identity with at most one component of each type attached.
///
/// Entities are created by [`Scene`](crate::scene::Scene) and compared by id.
pub struct Entity {
    id: EntityId,
    components: AHashMap<TypeId, ComponentSlot>,
}

impl Entity {
    pub(crate) fn new(id: EntityId) -> Self {
        Self {
            id,
            components: AHashMap::new(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Check whether a component of type `T` is attached
    pub fn has_component<T: Component>(&self) -> bool {
        self.components.contains_key(&TypeId::of::<T>())
    }

    /// Check by runtime tag
    pub fn has_component_type(&self, component_type: ComponentType) -> bool {
        self.components.contains_key(&component_type.id)
    }

    /// Attach `component`, replacing any existing component of the same type.
    ///
    /// Returns the replaced value, if there was one.
    pub fn add_component<T: Component>(&mut self, component: T) -> Option<T> {
        let slot = ComponentSlot {
            name: std::any::type_name::<T>(),
            value: Box::new(component),
        };
        self.components
            .insert(TypeId::of::<T>(), slot)
            .and_then(|old| old.value.downcast::<T>().ok())
            .map(|boxed| *boxed)
    }

    /// Detach and return the component of type `T`
    pub fn remove_component<T: Component>(&mut self) -> Option<T> {
        self.components
            .remove(&TypeId::of::<T>())
            .and_then(|slot| slot.value.downcast::<T>().ok())
            .map(|boxed| *boxed)
    }

    pub fn get_component<T: Component>(&self) -> Option<&T> {
        self.components
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.value.downcast_ref::<T>())
    }

    pub fn get_component_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.components
            .get_mut(&TypeId::of::<T>())
            .and_then(|slot| slot.value.downcast_mut::<T>())
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Type names of attached components, sorted for stable output
    pub fn component_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.components.values().map(|slot| slot.name).collect();
        names.sort_unstable();
        names
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Entity {}

impl std::fmt::Debug for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entity")
            .field("id", &self.id)
            .field("components", &self.component_names())
            .finish()
    }
}
