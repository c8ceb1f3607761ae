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

//! Query registry shared between a scene and its systems
//!
//! The scene owns the only write path. Systems hold a [`QueryRegistryHandle`]
//! and read immutable snapshots; every re-synchronization publishes a new one,
//! so a snapshot taken before a mutation stays valid after it.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::entity::EntityId;
use crate::error::{EcsError, Result};
use crate::query::Query;

/// Registry key reserved for the scene's singleton entity
pub const SINGLETON_QUERY: &str = "singleton";

/// Value stored under a registry name
#[derive(Debug, Clone)]
pub enum RegistryEntry {
    /// A named query and its current matches
    Query(Query),
    /// Handle to the scene's singleton entity
    Singleton(EntityId),
}

/// Named queries plus the singleton handle
#[derive(Debug, Clone, Default)]
pub struct QueryRegistry {
    entries: FxHashMap<String, RegistryEntry>,
}

impl QueryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&RegistryEntry> {
        self.entries.get(name)
    }

    /// Query registered under `name`; `None` for the singleton slot
    pub fn query(&self, name: &str) -> Option<&Query> {
        match self.entries.get(name)? {
            RegistryEntry::Query(query) => Some(query),
            RegistryEntry::Singleton(_) => None,
        }
    }

    /// Matching entities of query `name`
    pub fn entities(&self, name: &str) -> Option<&[EntityId]> {
        self.query(name).map(Query::entities)
    }

    /// Singleton entity, once the first re-synchronization has published it
    pub fn singleton(&self) -> Option<EntityId> {
        match self.entries.get(SINGLETON_QUERY)? {
            RegistryEntry::Singleton(id) => Some(*id),
            RegistryEntry::Query(_) => None,
        }
    }

    /// Iterate over registered queries (the singleton slot is skipped)
    pub fn queries(&self) -> impl Iterator<Item = &Query> {
        self.entries.values().filter_map(|entry| match entry {
            RegistryEntry::Query(query) => Some(query),
            RegistryEntry::Singleton(_) => None,
        })
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or replace query under its own name
    pub(crate) fn insert_query(&mut self, query: Query) {
        self.entries
            .insert(query.name().to_string(), RegistryEntry::Query(query));
    }

    pub(crate) fn queries_mut(&mut self) -> impl Iterator<Item = &mut Query> {
        self.entries.values_mut().filter_map(|entry| match entry {
            RegistryEntry::Query(query) => Some(query),
            RegistryEntry::Singleton(_) => None,
        })
    }

    pub(crate) fn publish_singleton(&mut self, singleton: EntityId) {
        self.entries.insert(
            SINGLETON_QUERY.to_string(),
            RegistryEntry::Singleton(singleton),
        );
    }
}

/// Shared, read-only view of a scene's query registry
#[derive(Debug, Clone, Default)]
pub struct QueryRegistryHandle {
    inner: Arc<RwLock<Arc<QueryRegistry>>>,
}

impl QueryRegistryHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot. The lock is released before this returns.
    pub fn read(&self) -> Arc<QueryRegistry> {
        Arc::clone(&self.inner.read())
    }

    /// Snapshot of query `name`'s matches
    pub fn entities(&self, name: &str) -> Option<Vec<EntityId>> {
        self.inner.read().entities(name).map(<[EntityId]>::to_vec)
    }

    /// Like [`entities`](Self::entities), failing with
    /// [`EcsError::QueryNotFound`] for unregistered names
    pub fn require(&self, name: &str) -> Result<Vec<EntityId>> {
        self.entities(name)
            .ok_or_else(|| EcsError::QueryNotFound(name.to_string()))
    }

    pub fn singleton(&self) -> Option<EntityId> {
        self.inner.read().singleton()
    }

    /// Apply `f` to the registry and publish the result. Snapshots still
    /// held by readers are left untouched (copy-on-write).
    pub(crate) fn modify<R>(&self, f: impl FnOnce(&mut QueryRegistry) -> R) -> R {
        let mut current = self.inner.write();
        f(Arc::make_mut(&mut current))
    }
}
