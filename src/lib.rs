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

//! Scene ECS - Minimal Entity Component System
//!
//! Entities carry typed components, named queries hold the entities matching
//! a required component set, and systems run once per frame in registration
//! order. Queries are rebuilt after every structural mutation.

pub mod component;
pub mod debug;
pub mod entity;
pub mod error;
pub mod prelude;
pub mod query;
pub mod registry;
pub mod scene;
pub mod system;

pub use component::*;
pub use debug::*;
pub use entity::*;
pub use error::*;
pub use query::*;
pub use registry::*;
pub use scene::*;
pub use system::*;
