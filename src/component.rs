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

//! Component and ComponentSet traits
//!
//! Components are data attached to entities.
//! Component sets group component types for query requirements and spawning.

use std::any::{type_name, TypeId};
use std::hash::{Hash, Hasher};

use smallvec::{smallvec, SmallVec};

use crate::entity::Entity;

/// Maximum number of components a `ComponentSet` tuple can hold inline
pub const MAX_SET_COMPONENTS: usize = 8;

/// Marker trait for components
///
/// Components must be 'static (no borrowed data)
pub trait Component: 'static + Send + Sync {}

/// Automatically implement Component for all valid types
impl<T: 'static + Send + Sync> Component for T {}

/// Runtime tag of a component type.
///
/// Two tags are equal when they refer to the same Rust type; `name` is only
/// carried for diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct ComponentType {
    pub id: TypeId,
    pub name: &'static str,
}

impl ComponentType {
    /// Tag for component type `T`
    pub fn of<T: Component>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }
}

impl PartialEq for ComponentType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ComponentType {}

impl Hash for ComponentType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Set of component types
///
/// Implemented for tuples of up to 8 components, including the empty tuple.
pub trait ComponentSet: 'static {
    /// Tags of every component in the set
    fn component_types() -> SmallVec<[ComponentType; MAX_SET_COMPONENTS]>
    where
        Self: Sized;

    /// Attach every component of the set to `entity`
    fn insert_into(self, entity: &mut Entity);
}

impl ComponentSet for () {
    fn component_types() -> SmallVec<[ComponentType; MAX_SET_COMPONENTS]> {
        SmallVec::new()
    }

    fn insert_into(self, _entity: &mut Entity) {}
}

macro_rules! impl_component_set {
    ($($T:ident),*) => {
        impl<$($T: Component),*> ComponentSet for ($($T,)*) {
            fn component_types() -> SmallVec<[ComponentType; MAX_SET_COMPONENTS]> {
                smallvec![$(ComponentType::of::<$T>()),*]
            }

            #[allow(non_snake_case)]
            fn insert_into(self, entity: &mut Entity) {
                let ($($T,)*) = self;
                $(entity.add_component($T);)*
            }
        }
    };
}

impl_component_set!(A);
impl_component_set!(A, B);
impl_component_set!(A, B, C);
impl_component_set!(A, B, C, D);
impl_component_set!(A, B, C, D, E);
impl_component_set!(A, B, C, D, E, F);
impl_component_set!(A, B, C, D, E, F, G);
impl_component_set!(A, B, C, D, E, F, G, H);
