//! Scene inspection for debugging

use serde::Serialize;

use crate::entity::EntityId;
use crate::error::Result;
use crate::scene::{Scene, SceneId};

/// Scene inspector for debugging
pub struct SceneInspector;

impl SceneInspector {
    /// Build a serializable snapshot of `scene`
    pub fn summarize(scene: &Scene) -> SceneSummary {
        let registry = scene.queries();
        let registry = registry.read();

        let mut queries: Vec<QueryInfo> = registry
            .queries()
            .map(|query| QueryInfo {
                name: query.name().to_string(),
                required: query
                    .required()
                    .iter()
                    .map(|component_type| component_type.name.to_string())
                    .collect(),
                matched: query.len(),
            })
            .collect();
        queries.sort_by(|a, b| a.name.cmp(&b.name));

        SceneSummary {
            scene_id: scene.id(),
            initialized: scene.is_initialized(),
            entity_count: scene.entity_count(),
            systems: scene
                .system_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            queries,
            singleton_components: scene
                .singleton()
                .component_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    /// Pretty-printed JSON snapshot of `scene`
    pub fn to_json(scene: &Scene) -> Result<String> {
        Ok(serde_json::to_string_pretty(&Self::summarize(scene))?)
    }

    /// Print scene summary to console
    pub fn print_summary(scene: &Scene) {
        let summary = Self::summarize(scene);
        println!("=== Scene {} ===", summary.scene_id.get());
        println!("Initialized: {}", summary.initialized);
        println!("Entities: {}", summary.entity_count);
        println!("Systems: {}", summary.systems.join(", "));

        println!("\n=== Queries ===");
        for query in &summary.queries {
            println!(
                "{}: {} entities [{}]",
                query.name,
                query.matched,
                query.required.join(", ")
            );
        }
        println!("Singleton: [{}]", summary.singleton_components.join(", "));
    }

    /// Print entity details
    pub fn print_entity(scene: &Scene, entity: EntityId) {
        match scene.entity(entity) {
            Some(found) => {
                println!("=== Entity {entity:?} ===");
                for name in found.component_names() {
                    println!("  {name}");
                }
            }
            None => println!("Entity {entity:?} not found"),
        }
    }
}

/// Snapshot of a scene's structure
#[derive(Clone, Debug, Serialize)]
pub struct SceneSummary {
    pub scene_id: SceneId,
    pub initialized: bool,
    pub entity_count: usize,
    pub systems: Vec<String>,
    pub queries: Vec<QueryInfo>,
    pub singleton_components: Vec<String>,
}

/// Query information for debugging
#[derive(Clone, Debug, Serialize)]
pub struct QueryInfo {
    pub name: String,
    pub required: Vec<String>,
    pub matched: usize,
}
