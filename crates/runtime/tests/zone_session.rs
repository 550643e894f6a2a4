use zone_core::{
    CellData, Coord, Direction, EntityType, ItemData, MonsterData, MoveEffects, PlayerData,
    ZoneConfig, ZoneState, is_obstacle,
};
use zone_runtime::{
    Event, MovementEvent, PlayerId, QueryEvent, Runtime, RuntimeConfig, RuntimeError, Topic,
};

const P0: PlayerId = PlayerId(0);
const P1: PlayerId = PlayerId(1);

fn scripted_state() -> ZoneState {
    let mut items = [ItemData::FILLER; ZoneConfig::NUM_ITEMS];
    items[0] = ItemData::new(Coord::at(7, 3), 10, 2, 1);

    let mut monsters = [MonsterData::FILLER; ZoneConfig::NUM_MONSTERS];
    monsters[0] = MonsterData::new(Coord::at(13, 3), 100, 1, 25);

    ZoneState::new(
        [
            PlayerData::new(Coord::at(6, 3), 5, 1, 0),
            PlayerData::new(Coord::at(12, 3), 5, 1, 0),
            PlayerData::new(Coord::at(10, 10), 5, 1, 0),
            PlayerData::new(Coord::at(28, 28), 5, 1, 0),
        ],
        items,
        monsters,
    )
}

fn start() -> Runtime {
    Runtime::start(RuntimeConfig::default(), scripted_state())
}

#[tokio::test]
async fn walking_onto_item_collects_it() {
    let runtime = start();
    let handle = runtime.handle();
    let mut movement = handle.subscribe(Topic::Movement);

    let report = handle.move_player(P0, Direction::Right).await.unwrap();
    assert_eq!(report.to, Coord::at(7, 3));
    assert!(report.effects.contains(MoveEffects::MOVED | MoveEffects::PICKED_UP));

    let player = handle.player(P0).await.unwrap();
    assert_eq!((player.hp, player.atk, player.points), (15, 3, 1));

    assert_eq!(
        movement.recv().await.unwrap(),
        Event::Movement(MovementEvent::PlayerMoved {
            player: P0,
            from: Coord::at(6, 3),
            to: Coord::at(7, 3),
            effects: report.effects,
        })
    );

    let state = handle.query_state().await.unwrap();
    assert!(state.items[0].is_consumed);
}

#[tokio::test]
async fn attacking_a_tough_monster_keeps_player_in_place() {
    let runtime = start();
    let handle = runtime.handle();

    let report = handle.move_player(P1, Direction::Right).await.unwrap();
    assert_eq!(report.to, Coord::at(12, 3));
    assert!(report.fought());
    assert!(!report.effects.contains(MoveEffects::KILLED));

    let state = handle.query_state().await.unwrap();
    assert_eq!(state.players[1].hp, 4);
    assert_eq!(state.monsters[0].hp, 99);
}

#[tokio::test]
async fn flying_crosses_terrain_that_blocks_walking() {
    let runtime = start();
    let handle = runtime.handle();
    let player = PlayerId(2);
    assert!(is_obstacle(Coord::at(9, 10)));

    let walked = handle.move_player(player, Direction::Left).await.unwrap();
    assert_eq!(walked.to, Coord::at(10, 10));
    assert!(walked.effects.contains(MoveEffects::BLOCKED));

    let flown = handle.fly_player(player, Direction::Left).await.unwrap();
    assert_eq!(flown, Coord::at(9, 10));
    assert_eq!(handle.player(player).await.unwrap().loc, Coord::at(9, 10));
}

#[tokio::test]
async fn queued_moves_apply_in_arrival_order() {
    let runtime = start();
    let handle = runtime.handle();

    handle.queue_move(P0, Direction::Right).await.unwrap();
    handle.queue_move(P1, Direction::Right).await.unwrap();
    handle.queue_move(P0, Direction::Left).await.unwrap();

    // Nothing moves until the queue is flushed.
    assert_eq!(handle.player(P0).await.unwrap().loc, Coord::at(6, 3));

    let reports = handle.flush_moves().await.unwrap();
    let order: Vec<PlayerId> = reports.iter().map(|(player, _)| *player).collect();
    assert_eq!(order, vec![P0, P1, P0]);
    assert_eq!(reports[0].1.to, Coord::at(7, 3));
    assert_eq!(reports[2].1.to, Coord::at(6, 3));

    assert!(handle.flush_moves().await.unwrap().is_empty());
}

#[tokio::test]
async fn queue_rejects_moves_past_the_configured_limit() {
    let config = RuntimeConfig {
        max_queued_moves: 1,
        ..RuntimeConfig::default()
    };
    let runtime = Runtime::start(config, scripted_state());
    let handle = runtime.handle();

    handle.queue_move(P0, Direction::Right).await.unwrap();
    let err = handle.queue_move(P0, Direction::Left).await.unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::QueueFull {
            player: P0,
            limit: 1
        }
    ));
    handle.queue_move(P1, Direction::Right).await.unwrap();

    assert_eq!(handle.flush_moves().await.unwrap().len(), 2);
    handle.queue_move(P0, Direction::Left).await.unwrap();
}

#[tokio::test]
async fn unknown_player_is_an_error() {
    let runtime = start();
    let handle = runtime.handle();

    let err = handle.move_player(PlayerId(4), Direction::Up).await.unwrap_err();
    assert!(matches!(err, RuntimeError::UnknownPlayer { player: PlayerId(4) }));
    assert!(handle.get_cross_cells(PlayerId(9)).await.is_err());
    assert!(handle.queue_move(PlayerId(200), Direction::Up).await.is_err());
}

#[tokio::test]
async fn queries_are_gated_by_the_players_own_position() {
    let runtime = start();
    let handle = runtime.handle();
    let mut queries = handle.subscribe(Topic::Query);

    // Player 1 stands next to the monster; player 0 is six columns away.
    let near = handle.get_cell(P1, Coord::at(13, 3)).await.unwrap();
    assert_eq!(near.entity_type, EntityType::Monster);
    assert_eq!(near.hp, 100);

    let far = handle.get_cell(P0, Coord::at(13, 3)).await.unwrap();
    assert_eq!(far, CellData::INVALID);

    let cross = handle.get_cross_cells(P1).await.unwrap();
    assert_eq!(cross[0].entity_type, EntityType::Player);
    assert_eq!(cross[3].entity_type, EntityType::Monster);

    let row = handle
        .get_horizontal_cells(P1, Coord::at(12, 3))
        .await
        .unwrap();
    assert_eq!(row[3].entity_type, EntityType::Monster);

    let misaligned = handle
        .get_vertical_cells(P1, Coord::at(12, 4))
        .await
        .unwrap();
    assert!(misaligned.iter().all(CellData::is_invalid));

    let cells = handle
        .get_cells(P0, vec![Coord::at(7, 3), Coord::at(31, 31)])
        .await
        .unwrap();
    assert_eq!(cells[0].entity_type, EntityType::Item);
    assert!(cells[1].is_invalid());

    let mut summaries = Vec::new();
    while let Ok(Event::Query(event)) = queries.try_recv() {
        summaries.push(event);
    }
    assert_eq!(summaries.len(), 6);
    assert_eq!(
        summaries[1],
        QueryEvent::CellsQueried {
            player: P0,
            count: 1,
            invalid: 1,
        }
    );
}

#[tokio::test]
async fn state_root_follows_committed_moves() {
    let runtime = start();
    let handle = runtime.handle();

    let before = handle.state_root().await.unwrap();
    assert_eq!(before, handle.state_root().await.unwrap());

    handle.move_player(P0, Direction::Right).await.unwrap();
    let after = handle.state_root().await.unwrap();
    assert_ne!(hex::encode(before), hex::encode(after));
}

#[tokio::test]
async fn builder_seeds_the_default_roster() {
    let runtime = Runtime::builder().build().unwrap();
    let handle = runtime.handle();

    let player = handle.player(P0).await.unwrap();
    assert_eq!(player.loc, Coord::at(3, 27));

    let cross = handle.get_cross_cells(P0).await.unwrap();
    assert_eq!(cross[0].entity_type, EntityType::Player);
    assert_eq!(cross[0].entity_id, 0);

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn builder_reads_a_data_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("roster.ron"),
        include_str!("../../game/content/data/roster.ron"),
    )
    .unwrap();
    std::fs::write(dir.path().join("config.toml"), "view = 0").unwrap();

    let runtime = Runtime::builder().data_dir(dir.path()).build().unwrap();
    let handle = runtime.handle();

    // A zero radius leaves only the player's own tile visible.
    let cross = handle.get_cross_cells(P0).await.unwrap();
    assert!(!cross[0].is_invalid());
    assert!(cross[1..].iter().all(CellData::is_invalid));
}

#[tokio::test]
async fn missing_data_directory_is_a_content_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Runtime::builder().data_dir(dir.path().join("absent")).build();
    assert!(matches!(result, Err(RuntimeError::Content(_))));
}
