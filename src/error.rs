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

//! Error types

use std::fmt;

/// ECS error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EcsError {
    /// Query name is reserved by the scene (`"singleton"`)
    ReservedQueryName(String),

    /// Entity not found in the scene
    EntityNotFound,

    /// Component not found on the entity
    ComponentNotFound,

    /// No query registered under this name
    QueryNotFound(String),

    /// Failure raised by a system's `init` or `update`
    SystemError(String),

    /// Scene summary could not be serialized
    SerializationError(String),
}

impl fmt::Display for EcsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EcsError::ReservedQueryName(name) => write!(f, "Query name is reserved: {name}"),
            EcsError::EntityNotFound => write!(f, "Entity not found"),
            EcsError::ComponentNotFound => write!(f, "Component not found"),
            EcsError::QueryNotFound(name) => write!(f, "Query not found: {name}"),
            EcsError::SystemError(msg) => write!(f, "System error: {msg}"),
            EcsError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for EcsError {}

impl From<serde_json::Error> for EcsError {
    fn from(err: serde_json::Error) -> Self {
        EcsError::SerializationError(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, EcsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = EcsError::ReservedQueryName("singleton".to_string());
        assert_eq!(err.to_string(), "Query name is reserved: singleton");
        assert_eq!(EcsError::EntityNotFound.to_string(), "Entity not found");
        assert_eq!(
            EcsError::SystemError("boom".into()).to_string(),
            "System error: boom"
        );
    }
}
