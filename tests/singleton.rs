use scene_ecs::prelude::*;

#[derive(Debug, Clone, PartialEq, Default)]
struct GameState {
    level: u32,
    paused: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct Gravity(f32);

#[test]
fn test_singleton_first_value_wins() {
    let mut scene = Scene::new();
    let added = scene.add_singleton_component(GameState { level: 1, paused: false });
    assert!(added.is_some());

    let again = scene.add_singleton_component(GameState { level: 9, paused: true });
    assert!(again.is_none());

    assert_eq!(
        scene.singleton().get_component::<GameState>(),
        Some(&GameState { level: 1, paused: false })
    );
}

#[test]
fn test_singleton_chaining_until_noop() {
    let mut scene = Scene::new();
    let chained = scene
        .add_singleton_component(Gravity(9.8))
        .and_then(|scene| scene.add_singleton_default::<GameState>())
        .is_some();
    assert!(chained);

    assert_eq!(scene.singleton().component_count(), 2);
    assert!(scene.add_singleton_component(Gravity(1.6)).is_none());
}

#[test]
fn test_singleton_reachable_through_registry() -> Result<()> {
    let mut scene = Scene::new();
    scene.register_query::<(Gravity,)>("gravity")?;
    scene.add_singleton_component(Gravity(9.8));

    let handle = scene.queries();
    let singleton = handle.singleton().ok_or(EcsError::EntityNotFound)?;
    assert_eq!(singleton, scene.singleton().id());

    // The singleton never appears in ordinary query results
    assert_eq!(handle.entities("gravity"), Some(vec![]));
    assert!(matches!(
        handle.read().get("singleton"),
        Some(RegistryEntry::Singleton(id)) if *id == singleton
    ));

    let state = scene
        .entity(singleton)
        .and_then(|e| e.get_component::<Gravity>());
    assert_eq!(state, Some(&Gravity(9.8)));
    Ok(())
}

#[test]
fn test_singleton_state_is_mutable_in_place() {
    let mut scene = Scene::new();
    scene.add_singleton_default::<GameState>();

    if let Some(state) = scene.singleton_mut().get_component_mut::<GameState>() {
        state.level = 3;
    }
    assert_eq!(
        scene.singleton().get_component::<GameState>().map(|s| s.level),
        Some(3)
    );
}

#[test]
fn test_only_singleton_name_is_reserved() {
    let mut scene = Scene::new();
    for name in ["singletons", "SINGLETON", " singleton", "single", "movers"] {
        assert!(scene.register_query::<(Gravity,)>(name).is_ok(), "{name}");
    }
    assert_eq!(
        scene.register_query::<(Gravity,)>("singleton").err(),
        Some(EcsError::ReservedQueryName("singleton".into()))
    );
}

#[test]
fn test_singleton_keeps_first_value_through_mutable_access() {
    let mut scene = Scene::new();
    scene.add_singleton_component(Gravity(9.8));
    let singleton = scene.singleton().id();

    // No path hands out the singleton as a plain entity
    assert!(scene.entity_mut(singleton).is_none());

    let view = scene.singleton_mut();
    assert!(view.has_component::<Gravity>());
    assert_eq!(view.get_component::<Gravity>(), Some(&Gravity(9.8)));

    assert!(scene.add_singleton_component(Gravity(1.6)).is_none());
    assert_eq!(
        scene.singleton().get_component::<Gravity>(),
        Some(&Gravity(9.8))
    );
}
