//! Example: moving entities with a system reading a named query
//!
//! Run with `--features profiling` to print tracing spans.

use glam::Vec2;
use scene_ecs::prelude::*;

#[derive(Debug, Clone, Copy)]
struct Position(Vec2);

#[derive(Debug, Clone, Copy)]
struct Velocity(Vec2);

#[derive(Debug, Default)]
struct FrameCount(u64);

struct MovementSystem {
    queries: QueryRegistryHandle,
}

impl System for MovementSystem {
    fn name(&self) -> &'static str {
        "movement"
    }

    fn update(&mut self, scene: &mut Scene, delta: f64) -> Result<()> {
        for id in self.queries.require("movers")? {
            let Some(entity) = scene.entity_mut(id) else {
                continue;
            };
            let Some(velocity) = entity.get_component::<Velocity>().copied() else {
                continue;
            };
            if let Some(position) = entity.get_component_mut::<Position>() {
                position.0 += velocity.0 * delta as f32;
            }
        }
        Ok(())
    }
}

struct FrameCounterSystem;

impl System for FrameCounterSystem {
    fn name(&self) -> &'static str {
        "frame_counter"
    }

    fn update(&mut self, scene: &mut Scene, _delta: f64) -> Result<()> {
        if let Some(frames) = scene.singleton_mut().get_component_mut::<FrameCount>() {
            frames.0 += 1;
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    #[cfg(feature = "profiling")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Movers Example ===");

    let mut scene = Scene::new();
    scene
        .register_query::<(Position, Velocity)>("movers")?
        .register_query::<(Position,)>("positioned")?
        .register_system(|_, queries| MovementSystem { queries })
        .register_system(|_, _| FrameCounterSystem);
    scene.add_singleton_default::<FrameCount>();

    for i in 0..5 {
        scene.spawn((
            Position(Vec2::new(i as f32, 0.0)),
            Velocity(Vec2::new(0.0, 1.0)),
        ));
    }
    let anchor = scene.spawn((Position(Vec2::new(-1.0, -1.0)),));

    for _ in 0..60 {
        scene.update(1.0 / 60.0)?;
    }

    SceneInspector::print_summary(&scene);
    SceneInspector::print_entity(&scene, anchor);

    for entity in scene.entities() {
        if let Some(position) = entity.get_component::<Position>() {
            println!("{:?}: {:?}", entity.id(), position.0);
        }
    }

    let frames = scene
        .singleton()
        .get_component::<FrameCount>()
        .map_or(0, |f| f.0);
    println!("Frames: {frames}");

    println!("\n{}", SceneInspector::to_json(&scene)?);
    println!("=== Example Complete ===");
    Ok(())
}
