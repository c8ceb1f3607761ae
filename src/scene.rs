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

//! Scene: entity collection, query registry and ordered systems
//!
//! Every structural mutation (creating or removing an entity, attaching a
//! singleton component, inserting or removing a component through the scene)
//! rebuilds all query results before returning. Systems always observe
//! results consistent with the entity collection, including mutations made
//! by earlier systems in the same frame.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use slotmap::SlotMap;

#[cfg(feature = "profiling")]
use tracing::{debug, info_span, warn};

use crate::component::{Component, ComponentSet, ComponentType};
use crate::entity::{Entity, EntityId};
use crate::error::{EcsError, Result};
use crate::query::Query;
use crate::registry::{QueryRegistryHandle, SINGLETON_QUERY};
use crate::system::{BoxedSystem, System};

/// Process-unique scene identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SceneId(u64);

impl SceneId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Central ECS scene
pub struct Scene {
    id: SceneId,

    /// Systems in execution order
    systems: Vec<BoxedSystem>,

    /// Entity storage; also holds the singleton entity
    entities: SlotMap<EntityId, Entity>,

    /// Entity collection in insertion order (never contains the singleton)
    order: Vec<EntityId>,

    /// Shared with every system built by this scene
    queries: QueryRegistryHandle,

    singleton: EntityId,

    /// Set once the first update has run every system's `init`
    initialized: bool,
}

impl Scene {
    /// Create an empty, uninitialized scene.
    pub fn new() -> Self {
        let mut entities = SlotMap::with_key();
        let singleton = entities.insert_with_key(Entity::new);

        Self {
            id: SceneId::next(),
            systems: Vec::new(),
            entities,
            order: Vec::new(),
            queries: QueryRegistryHandle::new(),
            singleton,
            initialized: false,
        }
    }

    pub fn id(&self) -> SceneId {
        self.id
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Build a system with this scene and a handle to its query registry,
    /// then append it to the execution list.
    ///
    /// No duplicate detection: registering the same system type twice runs
    /// it twice per frame.
    pub fn register_system<S, F>(&mut self, build: F) -> &mut Self
    where
        S: System + 'static,
        F: FnOnce(&Scene, QueryRegistryHandle) -> S,
    {
        let queries = self.queries.clone();
        let system = build(&*self, queries);

        #[cfg(feature = "profiling")]
        debug!(scene = self.id.get(), system = system.name(), "registered system");

        self.systems.push(Box::new(system));
        self
    }

    /// Register (or replace) query `name` requiring every component of `S`.
    ///
    /// ```
    /// use scene_ecs::Scene;
    ///
    /// struct Position;
    /// struct Velocity;
    ///
    /// let mut scene = Scene::new();
    /// scene.register_query::<(Position, Velocity)>("movers").unwrap();
    /// assert!(scene.register_query::<(Position,)>("singleton").is_err());
    /// ```
    ///
    /// # Errors
    /// [`EcsError::ReservedQueryName`] if `name` is `"singleton"`.
    pub fn register_query<S: ComponentSet>(&mut self, name: &str) -> Result<&mut Self> {
        self.register_query_types(name, S::component_types())
    }

    /// Register (or replace) query `name` from runtime component tags.
    ///
    /// The new query starts with no results. A query registered after the
    /// first update is populated immediately.
    ///
    /// # Errors
    /// [`EcsError::ReservedQueryName`] if `name` is `"singleton"`.
    pub fn register_query_types(
        &mut self,
        name: &str,
        required: impl IntoIterator<Item = ComponentType>,
    ) -> Result<&mut Self> {
        if name == SINGLETON_QUERY {
            #[cfg(feature = "profiling")]
            warn!(scene = self.id.get(), "rejected reserved query name");
            return Err(EcsError::ReservedQueryName(name.to_string()));
        }

        let query = Query::new(name, required);
        self.queries.modify(|registry| registry.insert_query(query));
        if self.initialized {
            self.sync_queries();
        }
        Ok(self)
    }

    /// Create an empty entity, append it to the collection and
    /// re-synchronize queries.
    pub fn create_entity(&mut self) -> &mut Entity {
        let id = self.entities.insert_with_key(Entity::new);
        self.order.push(id);
        self.sync_queries();
        &mut self.entities[id]
    }

    /// Create an entity carrying every component of `components`.
    ///
    /// Queries are re-synchronized once, after all components are attached.
    pub fn spawn<S: ComponentSet>(&mut self, components: S) -> EntityId {
        let id = self.entities.insert_with_key(Entity::new);
        components.insert_into(&mut self.entities[id]);
        self.order.push(id);
        self.sync_queries();
        id
    }

    /// Remove `entity` from the collection and re-synchronize queries.
    ///
    /// Unknown ids, already-removed ids and the singleton's id are ignored.
    pub fn remove_entity(&mut self, entity: EntityId) -> &mut Self {
        let before = self.order.len();
        self.order.retain(|&id| id != entity);
        if self.order.len() != before {
            self.entities.remove(entity);
        }
        self.sync_queries();
        self
    }

    /// Attach `component` to the singleton entity.
    ///
    /// Returns `None` without touching anything if the singleton already
    /// carries a component of type `T`; the first value wins.
    pub fn add_singleton_component<T: Component>(&mut self, component: T) -> Option<&mut Self> {
        let singleton = &mut self.entities[self.singleton];
        if singleton.has_component::<T>() {
            #[cfg(feature = "profiling")]
            debug!(
                component = std::any::type_name::<T>(),
                "singleton component already present"
            );
            return None;
        }

        singleton.add_component(component);
        self.sync_queries();
        Some(self)
    }

    /// [`add_singleton_component`](Self::add_singleton_component) with `T::default()`
    pub fn add_singleton_default<T: Component + Default>(&mut self) -> Option<&mut Self> {
        self.add_singleton_component(T::default())
    }

    /// Attach `component` to `entity` (replacing one of the same type) and
    /// re-synchronize queries.
    ///
    /// # Errors
    /// [`EcsError::EntityNotFound`] if `entity` is not in the collection.
    /// Singleton components go through [`add_singleton_component`](Self::add_singleton_component).
    pub fn insert_component<T: Component>(
        &mut self,
        entity: EntityId,
        component: T,
    ) -> Result<Option<T>> {
        if entity == self.singleton {
            return Err(EcsError::EntityNotFound);
        }
        let previous = self
            .entities
            .get_mut(entity)
            .ok_or(EcsError::EntityNotFound)?
            .add_component(component);
        self.sync_queries();
        Ok(previous)
    }

    /// Detach component `T` from `entity` and re-synchronize queries.
    ///
    /// # Errors
    /// [`EcsError::EntityNotFound`] for unknown ids,
    /// [`EcsError::ComponentNotFound`] if the entity has no `T`.
    pub fn remove_component<T: Component>(&mut self, entity: EntityId) -> Result<T> {
        if entity == self.singleton {
            return Err(EcsError::EntityNotFound);
        }
        let removed = self
            .entities
            .get_mut(entity)
            .ok_or(EcsError::EntityNotFound)?
            .remove_component::<T>()
            .ok_or(EcsError::ComponentNotFound)?;
        self.sync_queries();
        Ok(removed)
    }

    /// Look up an entity (or the singleton) by id
    pub fn entity(&self, entity: EntityId) -> Option<&Entity> {
        self.entities.get(entity)
    }

    /// Mutable access to an entity in the collection. Component changes made
    /// here become visible to queries at the next re-synchronization.
    ///
    /// Returns `None` for the singleton; use [`singleton_mut`](Self::singleton_mut).
    pub fn entity_mut(&mut self, entity: EntityId) -> Option<&mut Entity> {
        if entity == self.singleton {
            return None;
        }
        self.entities.get_mut(entity)
    }

    /// Entities in collection order
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.order.iter().filter_map(|&id| self.entities.get(id))
    }

    pub fn entity_count(&self) -> usize {
        self.order.len()
    }

    /// True if `entity` is in the collection (the singleton is not)
    pub fn contains(&self, entity: EntityId) -> bool {
        entity != self.singleton && self.entities.contains_key(entity)
    }

    pub fn singleton(&self) -> &Entity {
        &self.entities[self.singleton]
    }

    /// Edit singleton component state in place
    pub fn singleton_mut(&mut self) -> SingletonMut<'_> {
        SingletonMut {
            entity: &mut self.entities[self.singleton],
        }
    }

    /// Shared handle to the query registry
    pub fn queries(&self) -> QueryRegistryHandle {
        self.queries.clone()
    }

    /// Snapshot of query `name`'s matches
    pub fn query_entities(&self, name: &str) -> Option<Vec<EntityId>> {
        self.queries.entities(name)
    }

    /// Number of registered systems (systems are detached while a frame runs)
    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    pub fn system_names(&self) -> Vec<&'static str> {
        self.systems.iter().map(|system| system.name()).collect()
    }

    /// Run one frame.
    ///
    /// The first call re-synchronizes queries and runs every system's `init`
    /// in registration order. Every call then runs every system's `update`
    /// in registration order. The first error aborts the rest of the frame
    /// and is returned unchanged; if an `init` fails, initialization is
    /// attempted again on the next call.
    pub fn update(&mut self, delta: f64) -> Result<()> {
        #[cfg(feature = "profiling")]
        let _span = info_span!("scene.update", scene = self.id.get(), delta).entered();

        let mut systems = std::mem::take(&mut self.systems);
        let result = self.run_frame(&mut systems, delta);

        // Systems registered during the frame run after the existing ones
        systems.append(&mut self.systems);
        self.systems = systems;
        result
    }

    fn run_frame(&mut self, systems: &mut [BoxedSystem], delta: f64) -> Result<()> {
        if !self.initialized {
            self.initialize(systems)?;
        }

        for system in systems.iter_mut() {
            #[cfg(feature = "profiling")]
            let _span = info_span!("system.update", system = system.name()).entered();

            system.update(self, delta)?;
        }
        Ok(())
    }

    fn initialize(&mut self, systems: &mut [BoxedSystem]) -> Result<()> {
        #[cfg(feature = "profiling")]
        let _span = info_span!("scene.init", systems = systems.len()).entered();

        self.sync_queries();
        for system in systems.iter_mut() {
            system.init(self)?;
        }
        self.initialized = true;
        Ok(())
    }

    /// Rebuild every query's results from scratch, then publish the
    /// singleton handle. O(entities × queries).
    fn sync_queries(&mut self) {
        #[cfg(feature = "profiling")]
        let _span = info_span!("scene.sync_queries", entities = self.order.len()).entered();

        let order = &self.order;
        let entities = &self.entities;
        let singleton = self.singleton;

        self.queries.modify(|registry| {
            for query in registry.queries_mut() {
                query.clear_results();
            }

            for &id in order {
                let Some(entity) = entities.get(id) else {
                    continue;
                };
                for query in registry.queries_mut() {
                    if query.matches(entity) {
                        query.push_result(id);
                    }
                }
            }

            registry.publish_singleton(singleton);
        });
    }
}

/// Mutable view of the singleton entity.
///
/// Existing components can be edited in place. Attaching goes through
/// [`Scene::add_singleton_component`], which keeps the first value of each type.
pub struct SingletonMut<'a> {
    entity: &'a mut Entity,
}

impl SingletonMut<'_> {
    pub fn id(&self) -> EntityId {
        self.entity.id()
    }

    pub fn has_component<T: Component>(&self) -> bool {
        self.entity.has_component::<T>()
    }

    pub fn get_component<T: Component>(&self) -> Option<&T> {
        self.entity.get_component::<T>()
    }

    pub fn get_component_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.entity.get_component_mut::<T>()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
