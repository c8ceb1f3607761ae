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

//! Named queries over a fixed set of required component types
//!
//! A query never recomputes its own results; the scene rebuilds them on
//! every re-synchronization.

use smallvec::SmallVec;

use crate::component::{ComponentType, MAX_SET_COMPONENTS};
use crate::entity::{Entity, EntityId};

/// Named filter plus its current matches
#[derive(Debug, Clone)]
pub struct Query {
    name: String,
    required: SmallVec<[ComponentType; MAX_SET_COMPONENTS]>,
    entities: Vec<EntityId>,
}

impl Query {
    /// Create a query with an empty result list
    pub fn new(
        name: impl Into<String>,
        required: impl IntoIterator<Item = ComponentType>,
    ) -> Self {
        let mut set: SmallVec<[ComponentType; MAX_SET_COMPONENTS]> = SmallVec::new();
        for component_type in required {
            if !set.contains(&component_type) {
                set.push(component_type);
            }
        }

        Self {
            name: name.into(),
            required: set,
            entities: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Required component types
    pub fn required(&self) -> &[ComponentType] {
        &self.required
    }

    /// True iff `entity` carries every required component type.
    ///
    /// An empty requirement matches every entity.
    pub fn matches(&self, entity: &Entity) -> bool {
        self.required
            .iter()
            .all(|&component_type| entity.has_component_type(component_type))
    }

    /// Matching entities, in entity-collection order at the last re-synchronization
    pub fn entities(&self) -> &[EntityId] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub(crate) fn clear_results(&mut self) {
        self.entities.clear();
    }

    pub(crate) fn push_result(&mut self, entity: EntityId) {
        self.entities.push(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{ComponentSet, ComponentType};

    struct Position;
    struct Velocity;

    #[test]
    fn test_match_requires_all_types() {
        let query = Query::new("movers", <(Position, Velocity)>::component_types());

        let mut entity = Entity::new(EntityId::default());
        entity.add_component(Position);
        assert!(!query.matches(&entity));

        entity.add_component(Velocity);
        assert!(query.matches(&entity));
    }

    #[test]
    fn test_empty_requirement_matches_bare_entity() {
        let query = Query::new("everything", <()>::component_types());
        let entity = Entity::new(EntityId::default());
        assert_eq!(entity.component_count(), 0);
        assert!(query.matches(&entity));
    }

    #[test]
    fn test_duplicate_required_types_collapse() {
        let query = Query::new(
            "dup",
            [
                ComponentType::of::<Position>(),
                ComponentType::of::<Position>(),
            ],
        );
        assert_eq!(query.required().len(), 1);
        assert!(query.is_empty());
        assert_eq!(query.name(), "dup");
    }
}
