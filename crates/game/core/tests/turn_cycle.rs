use std::cell::Cell;

use shroud_core::{
    ActionResult, ActorTemplate, EngineError, EnginePhase, Entity, EntityId, FighterStats,
    GameConfig, GameMap, Grid, MapDimensions, PlayerAction, Position, RayCastFov, Tile,
    TurnEngine, TurnOutcome,
};

fn open_map(width: u32, height: u32) -> GameMap {
    GameMap::filled(MapDimensions::new(width, height), Tile::FLOOR)
}

fn position_of(engine: &TurnEngine, id: EntityId) -> Position {
    engine.map().entity(id).map(Entity::position).unwrap()
}

#[test]
fn open_room_is_fully_visible_after_construction() {
    let mut map = open_map(10, 10);
    let player = map
        .spawn(&ActorTemplate::player(), Position::new(5, 5))
        .unwrap();
    let engine = TurnEngine::with_default_fov(map, player, GameConfig::default()).unwrap();

    assert_eq!(engine.map().visible().count_true(), 100);
    assert_eq!(engine.map().explored().count_true(), 100);
    for (_, glyph) in engine.snapshot().cells.iter() {
        assert_ne!(glyph.bg, shroud_core::SHROUD.bg);
    }
}

#[test]
fn moving_into_a_wall_changes_nothing() {
    let mut map = open_map(10, 10);
    map.set_tile(Position::new(6, 5), Tile::WALL).unwrap();
    let player = map
        .spawn(&ActorTemplate::player(), Position::new(5, 5))
        .unwrap();
    let orc = map.spawn(&ActorTemplate::orc(), Position::new(1, 1)).unwrap();
    let mut engine = TurnEngine::with_default_fov(map, player, GameConfig::default()).unwrap();
    let before = engine.map().clone();

    let outcome = engine.handle(PlayerAction::Move { dx: 1, dy: 0 }).unwrap();

    assert!(outcome.is_rejected());
    assert_eq!(position_of(&engine, player), Position::new(5, 5));
    assert_eq!(
        engine
            .map()
            .blocking_entity_at(Position::new(5, 5))
            .map(Entity::id),
        Some(player)
    );
    // The orc would have stepped toward the player had enemy turns run.
    assert_eq!(position_of(&engine, orc), Position::new(1, 1));
    assert_eq!(engine.map(), &before);
    assert_eq!(engine.turn(), 0);
    assert_eq!(engine.phase(), EnginePhase::AwaitingPlayerInput);
}

#[test]
fn moving_off_the_map_or_onto_a_blocker_is_rejected() {
    let mut map = open_map(4, 4);
    let player = map.spawn(&ActorTemplate::player(), Position::ORIGIN).unwrap();
    let mut idle = ActorTemplate::orc();
    idle.ai = None;
    map.spawn(&idle, Position::new(0, 1)).unwrap();
    let mut engine = TurnEngine::with_default_fov(map, player, GameConfig::default()).unwrap();

    for action in [
        PlayerAction::Move { dx: -1, dy: 0 },
        PlayerAction::Move { dx: 0, dy: -1 },
        PlayerAction::Move { dx: 0, dy: 1 },
    ] {
        assert!(engine.handle(action).unwrap().is_rejected(), "{action:?}");
        assert_eq!(position_of(&engine, player), Position::ORIGIN);
    }

    let outcome = engine.handle(PlayerAction::Move { dx: 1, dy: 1 }).unwrap();
    assert!(matches!(
        outcome,
        TurnOutcome::Completed {
            turn: 1,
            result: ActionResult::Move { .. },
            ..
        }
    ));
    assert_eq!(position_of(&engine, player), Position::new(1, 1));
}

#[test]
fn explored_only_grows_while_walking_down_a_corridor() {
    // A horizontal corridor at y = 2 inside solid rock.
    let mut map = GameMap::filled(MapDimensions::new(20, 5), Tile::WALL);
    for x in 1..19 {
        map.set_tile(Position::new(x, 2), Tile::FLOOR).unwrap();
    }
    let player = map
        .spawn(&ActorTemplate::player(), Position::new(1, 2))
        .unwrap();
    let config = GameConfig::with_view_radius(3);
    let mut engine = TurnEngine::with_default_fov(map, player, config).unwrap();

    let mut previous = engine.map().explored().clone();
    assert_eq!(&previous, engine.map().visible());
    for _ in 0..15 {
        engine.handle(PlayerAction::Move { dx: 1, dy: 0 }).unwrap();
        let explored = engine.map().explored();
        assert!(previous.is_subset_of(explored));
        assert!(engine.map().visible().is_subset_of(explored));
        previous = explored.clone();
    }

    assert_eq!(position_of(&engine, player), Position::new(16, 2));
    // The start of the corridor is remembered but no longer in view.
    assert!(engine.map().is_explored(Position::new(1, 2)));
    assert!(!engine.map().is_visible(Position::new(1, 2)));
    let frame = engine.snapshot().cells;
    assert_eq!(frame.get(Position::new(1, 2)), Some(&Tile::FLOOR.dark()));
    assert_eq!(frame.get(Position::new(18, 2)), Some(&Tile::FLOOR.light()));
}

#[test]
fn field_of_view_runs_once_per_completed_turn() {
    let calls = Cell::new(0usize);
    let fov = |transparency: &Grid<bool>, origin: Position, radius: u32| {
        calls.set(calls.get() + 1);
        assert_eq!(radius, GameConfig::DEFAULT_VIEW_RADIUS);
        let mut visible = Grid::filled(transparency.dimensions(), false);
        visible.set(origin, true).unwrap();
        visible
    };

    let mut map = open_map(6, 6);
    let player = map
        .spawn(&ActorTemplate::player(), Position::new(2, 2))
        .unwrap();
    map.spawn(&ActorTemplate::orc(), Position::new(5, 5)).unwrap();
    map.spawn(&ActorTemplate::troll(), Position::new(0, 5)).unwrap();
    let mut engine = TurnEngine::new(map, player, GameConfig::default(), fov).unwrap();
    assert_eq!(calls.get(), 1);

    engine.handle(PlayerAction::Wait).unwrap();
    engine.handle(PlayerAction::Move { dx: 1, dy: 0 }).unwrap();
    assert_eq!(calls.get(), 3);

    engine.handle(PlayerAction::Move { dx: -9, dy: 0 }).unwrap();
    assert_eq!(calls.get(), 3);

    engine.handle(PlayerAction::Quit).unwrap();
    assert_eq!(calls.get(), 3);
}

#[test]
fn visible_hostile_closes_in_one_step_per_turn() {
    let mut map = open_map(12, 3);
    let player = map
        .spawn(&ActorTemplate::player(), Position::new(0, 1))
        .unwrap();
    let orc = map.spawn(&ActorTemplate::orc(), Position::new(6, 1)).unwrap();
    let mut engine = TurnEngine::with_default_fov(map, player, GameConfig::default()).unwrap();

    engine.handle(PlayerAction::Wait).unwrap();
    assert_eq!(position_of(&engine, orc), Position::new(5, 1));
    engine.handle(PlayerAction::Wait).unwrap();
    assert_eq!(position_of(&engine, orc), Position::new(4, 1));
}

#[test]
fn hostile_out_of_sight_stays_put() {
    let mut map = open_map(30, 3);
    let player = map
        .spawn(&ActorTemplate::player(), Position::new(0, 1))
        .unwrap();
    let troll = map
        .spawn(&ActorTemplate::troll(), Position::new(25, 1))
        .unwrap();
    let mut engine = TurnEngine::with_default_fov(map, player, GameConfig::default()).unwrap();

    assert!(!engine.map().is_visible(Position::new(25, 1)));
    engine.handle(PlayerAction::Wait).unwrap();
    assert_eq!(position_of(&engine, troll), Position::new(25, 1));
    // Out of view, so the renderer shows terrain state only.
    assert_eq!(
        engine.snapshot().cells.get(Position::new(25, 1)).map(|g| g.ch),
        Some(' ')
    );
}

#[test]
fn melee_exchange_until_the_orc_dies() {
    let mut map = open_map(5, 5);
    let player = map
        .spawn(&ActorTemplate::player(), Position::new(1, 2))
        .unwrap();
    let orc = map.spawn(&ActorTemplate::orc(), Position::new(2, 2)).unwrap();
    let mut engine = TurnEngine::with_default_fov(map, player, GameConfig::default()).unwrap();

    let TurnOutcome::Completed {
        result, attacks, ..
    } = engine.handle(PlayerAction::Melee { dx: 1, dy: 0 }).unwrap()
    else {
        panic!("expected a completed turn");
    };
    let hit = result.attack().copied().unwrap();
    assert_eq!((hit.target, hit.damage, hit.killed), (orc, 5, false));
    // The orc strikes back for power 3 - defense 2.
    assert_eq!(attacks.len(), 1);
    assert_eq!((attacks[0].attacker, attacks[0].damage), (orc, 1));
    assert_eq!(engine.health_label().as_deref(), Some("29/30"));

    let TurnOutcome::Completed {
        result, attacks, ..
    } = engine.handle(PlayerAction::Melee { dx: 1, dy: 0 }).unwrap()
    else {
        panic!("expected a completed turn");
    };
    assert!(result.attack().is_some_and(|report| report.killed));
    assert!(attacks.is_empty(), "corpses do not act");
    assert_eq!(engine.health_label().as_deref(), Some("29/30"));

    // The corpse no longer blocks and draws beneath the player.
    engine.handle(PlayerAction::Move { dx: 1, dy: 0 }).unwrap();
    assert_eq!(position_of(&engine, player), Position::new(2, 2));
    let cell = *engine.snapshot().cells.get(Position::new(2, 2)).unwrap();
    assert_eq!(cell.ch, '@');

    engine.handle(PlayerAction::Move { dx: 1, dy: 0 }).unwrap();
    let cell = *engine.snapshot().cells.get(Position::new(2, 2)).unwrap();
    assert_eq!(cell.ch, Entity::CORPSE_GLYPH);
    assert_eq!(cell.fg, Entity::CORPSE_COLOR);
}

#[test]
fn dying_player_defeats_the_engine() {
    let mut map = open_map(5, 5);
    let mut fragile = ActorTemplate::player();
    fragile.fighter = Some(FighterStats::new(3, 0, 1));
    let player = map.spawn(&fragile, Position::new(2, 2)).unwrap();
    map.spawn(&ActorTemplate::troll(), Position::new(3, 3)).unwrap();
    let mut engine = TurnEngine::with_default_fov(map, player, GameConfig::default()).unwrap();

    let outcome = engine.handle(PlayerAction::Wait).unwrap();
    let TurnOutcome::Defeated { turn, attacks } = outcome else {
        panic!("expected defeat, got {outcome:?}");
    };
    assert_eq!(turn, 1);
    assert!(attacks[0].killed);
    assert_eq!(engine.phase(), EnginePhase::Defeated);
    assert_eq!(engine.health_label().as_deref(), Some("0/3"));

    assert_eq!(
        engine.handle(PlayerAction::Move { dx: 1, dy: 0 }),
        Err(EngineError::PlayerDefeated)
    );
    assert_eq!(engine.handle(PlayerAction::Quit), Ok(TurnOutcome::Exited));
    assert_eq!(engine.phase(), EnginePhase::Exited);
}

#[test]
fn every_enemy_acts_once_even_after_the_player_falls() {
    let mut map = open_map(5, 5);
    let mut fragile = ActorTemplate::player();
    fragile.fighter = Some(FighterStats::new(1, 0, 1));
    let player = map.spawn(&fragile, Position::new(2, 2)).unwrap();
    map.spawn(&ActorTemplate::orc(), Position::new(1, 2)).unwrap();
    let far = map.spawn(&ActorTemplate::orc(), Position::new(4, 4)).unwrap();
    let mut engine = TurnEngine::new(map, player, GameConfig::default(), RayCastFov).unwrap();

    let outcome = engine.handle(PlayerAction::Wait).unwrap();
    assert!(matches!(outcome, TurnOutcome::Defeated { ref attacks, .. } if attacks.len() == 1));
    // With no living player left to chase, the second orc waits.
    assert_eq!(position_of(&engine, far), Position::new(4, 4));
}
