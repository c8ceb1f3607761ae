use glam::Vec2;
use scene_ecs::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Position(Vec2);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Velocity(Vec2);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Frozen;

/// Every query's results must equal a fresh filter over the collection
fn assert_queries_consistent(scene: &Scene) {
    let handle = scene.queries();
    let registry = handle.read();
    for query in registry.queries() {
        let expected: Vec<EntityId> = scene
            .entities()
            .filter(|entity| query.matches(entity))
            .map(Entity::id)
            .collect();
        assert_eq!(
            query.entities(),
            expected.as_slice(),
            "query {} out of sync",
            query.name()
        );
    }
}

#[test]
fn test_movers_end_to_end() -> Result<()> {
    let mut scene = Scene::new();
    scene.register_query::<(Position, Velocity)>("movers")?;

    let a = scene.create_entity();
    a.add_component(Position(Vec2::ZERO));
    a.add_component(Velocity(Vec2::X));
    let a = a.id();

    let b = scene.create_entity();
    b.add_component(Position(Vec2::ONE));
    let _b = b.id();

    scene.update(1.0)?;
    assert_eq!(scene.query_entities("movers"), Some(vec![a]));

    scene.remove_entity(a);
    assert_eq!(scene.query_entities("movers"), Some(vec![]));
    Ok(())
}

#[test]
fn test_empty_requirement_matches_everything() -> Result<()> {
    let mut scene = Scene::new();
    scene.register_query::<()>("all")?;

    let bare = scene.create_entity().id();
    let full = scene.spawn((Position(Vec2::ZERO), Velocity(Vec2::Y), Frozen));

    assert_eq!(scene.query_entities("all"), Some(vec![bare, full]));
    Ok(())
}

#[test]
fn test_results_follow_collection_order() -> Result<()> {
    let mut scene = Scene::new();
    scene.register_query::<(Position,)>("positioned")?;

    let first = scene.create_entity().id();
    let second = scene.spawn((Position(Vec2::ONE),));

    // `first` gains Position after `second`, but stays first in the results
    scene.insert_component(first, Position(Vec2::ZERO))?;
    assert_eq!(scene.query_entities("positioned"), Some(vec![first, second]));
    Ok(())
}

#[test]
fn test_remove_missing_entity_is_noop() -> Result<()> {
    let mut scene = Scene::new();
    scene.register_query::<(Position,)>("positioned")?;

    let kept = scene.spawn((Position(Vec2::ZERO),));
    let gone = scene.spawn((Position(Vec2::ONE),));
    scene.remove_entity(gone);

    let before = scene.query_entities("positioned");
    scene.remove_entity(gone).remove_entity(gone);

    assert_eq!(scene.entity_count(), 1);
    assert!(scene.contains(kept));
    assert!(!scene.contains(gone));
    assert_eq!(scene.query_entities("positioned"), before);
    Ok(())
}

#[test]
fn test_queries_stay_consistent_under_mutation() -> Result<()> {
    let mut scene = Scene::new();
    scene
        .register_query::<(Position,)>("positioned")?
        .register_query::<(Position, Velocity)>("movers")?
        .register_query::<(Position, Frozen)>("frozen")?
        .register_query::<()>("all")?;

    let mut ids = Vec::new();
    for i in 0..24 {
        let id = scene.create_entity().id();
        if i % 2 == 0 {
            scene.insert_component(id, Position(Vec2::splat(i as f32)))?;
        }
        if i % 3 == 0 {
            scene.insert_component(id, Velocity(Vec2::X))?;
        }
        if i % 5 == 0 {
            scene.insert_component(id, Frozen)?;
        }
        ids.push(id);
        assert_queries_consistent(&scene);
    }

    for id in ids.iter().step_by(4) {
        scene.remove_entity(*id);
        assert_queries_consistent(&scene);
    }

    scene.remove_component::<Position>(ids[2])?;
    assert_queries_consistent(&scene);

    scene.update(0.5)?;
    assert_queries_consistent(&scene);
    Ok(())
}

#[test]
fn test_removed_ids_are_not_reused() {
    let mut scene = Scene::new();
    let old = scene.create_entity().id();
    scene.remove_entity(old);

    let new = scene.create_entity().id();
    assert_ne!(old, new);
    assert!(scene.entity(old).is_none());
}
