use lib_rain::*;
use macroquad::math::{Vec2, vec2};
use shipyard::{EntityId, Get, UniqueViewMut, View, World};

const BOUNDS: Bounds = Bounds {
    width: 480.0,
    height: 800.0,
};

fn raining_session(world: &mut World) -> GameSession {
    let mut session = GameSession::with_seed(world, 0xB344);
    session.tick(world, 0.0, BOUNDS);
    assert_eq!(session.phase(), RainPhase::Raining);
    session
}

fn item_pos(world: &World, id: EntityId) -> Vec2 {
    world.run(move |tfs: View<Transform>| tfs.get(id).unwrap().pos)
}

/// Taps the most recently spawned berry; its center always hits.
fn tap_any(session: &mut GameSession, world: &mut World) {
    let id = *session.items().last().unwrap();
    let pos = item_pos(world, id);
    assert!(session.tap(world, pos));
}

fn drain_sound_queue(world: &World) -> Vec<SoundCue> {
    world.run(|mut queue: UniqueViewMut<SoundQueue>| std::mem::take(&mut queue.0))
}

#[test]
fn nothing_spawns_before_layout_is_known() {
    let mut world = World::new();
    let mut session = GameSession::with_seed(&mut world, 1);

    session.tick(&mut world, 0.016, Bounds::default());
    assert_eq!(session.phase(), RainPhase::AwaitLayout);
    assert_eq!(session.item_count(), 0);

    session.tick(&mut world, 0.016, BOUNDS);
    assert_eq!(session.phase(), RainPhase::Raining);
    assert_eq!(session.item_count(), INITIAL_POPULATION);
}

#[test]
fn spawned_items_respect_the_parameter_bounds() {
    let mut world = World::new();
    let session = raining_session(&mut world);

    world.run(|berries: View<Berry>, tfs: View<Transform>, falls: View<FallAnim>| {
        for &id in session.items() {
            let berry = berries.get(id).unwrap();
            let tf = tfs.get(id).unwrap();
            let fall = falls.get(id).unwrap();

            assert!(berry.kind < BERRY_KIND_COUNT);
            assert!((BERRY_SIZE_MIN..=BERRY_SIZE_MAX).contains(&berry.size));
            assert!((FALL_DURATION_MIN..=FALL_DURATION_MAX).contains(&fall.duration));
            assert!((0.0..std::f32::consts::TAU).contains(&tf.angle));

            let left = tf.pos.x - berry.size / 2.0;
            assert!(left >= 0.0);
            assert!(left + berry.size <= BOUNDS.width);

            // Starts fully above the visible area, ends fully below.
            assert_eq!(tf.pos.y, -berry.size);
            assert_eq!(fall.start_y, -berry.size);
            assert_eq!(fall.end_y, BOUNDS.height + berry.size);
        }
    });
}

#[test]
fn tap_increments_counter_and_keeps_population() {
    let mut world = World::new();
    let mut session = raining_session(&mut world);

    let id = *session.items().last().unwrap();
    let pos = item_pos(&world, id);
    assert!(session.tap(&mut world, pos));

    assert_eq!(session.taps(), 1);
    assert_eq!(session.counter_text(), format!("1/{TAP_TARGET}"));
    assert_eq!(session.item_count(), INITIAL_POPULATION);
    assert!(!session.items().contains(&id));
    assert_eq!(drain_sound_queue(&world), vec![SoundCue::Munch]);
}

#[test]
fn tap_on_empty_space_misses() {
    let mut world = World::new();
    let mut session = raining_session(&mut world);

    assert!(!session.tap(&mut world, vec2(-500.0, -500.0)));
    assert_eq!(session.taps(), 0);
    assert_eq!(session.item_count(), INITIAL_POPULATION);
    assert!(drain_sound_queue(&world).is_empty());
}

#[test]
fn untapped_falls_are_replaced_one_for_one() {
    let mut world = World::new();
    let mut session = raining_session(&mut world);
    let before: Vec<EntityId> = session.items().to_vec();

    // Longer than the longest possible fall: everything completes and
    // gets replaced within the tick.
    session.tick(&mut world, FALL_DURATION_MAX + 1.0, BOUNDS);

    assert_eq!(session.item_count(), INITIAL_POPULATION);
    assert_eq!(session.taps(), 0);
    assert_eq!(session.phase(), RainPhase::Raining);
    assert!(session.items().iter().all(|id| !before.contains(id)));
}

#[test]
fn falling_is_an_accelerating_descent() {
    let mut world = World::new();
    let mut session = raining_session(&mut world);
    let id = session.items()[0];

    let y0 = item_pos(&world, id).y;
    session.tick(&mut world, 1.0, BOUNDS);
    let y1 = item_pos(&world, id).y;
    session.tick(&mut world, 1.0, BOUNDS);
    let y2 = item_pos(&world, id).y;

    // Monotonic descent, covering more ground in the second second.
    assert!(y1 > y0);
    assert!(y2 - y1 > y1 - y0);
}

#[test]
fn fifteenth_tap_enters_celebration_without_a_respawn() {
    let mut world = World::new();
    let mut session = raining_session(&mut world);

    for expected in 1..TAP_TARGET {
        tap_any(&mut session, &mut world);
        assert_eq!(session.taps(), expected);
        assert_eq!(session.phase(), RainPhase::Raining);
        assert_eq!(session.item_count(), INITIAL_POPULATION);
    }

    tap_any(&mut session, &mut world);
    assert_eq!(session.taps(), TAP_TARGET);
    assert_eq!(session.phase(), RainPhase::Celebrating);
    // The target-reaching tap does not get a replacement.
    assert_eq!(session.item_count(), INITIAL_POPULATION - 1);
    assert!(session.giant().is_some());
    // Every tap played a cue, including the last one.
    assert_eq!(drain_sound_queue(&world).len(), TAP_TARGET as usize);
}

#[test]
fn taps_are_ignored_while_celebrating() {
    let mut world = World::new();
    let mut session = raining_session(&mut world);
    for _ in 0..TAP_TARGET {
        tap_any(&mut session, &mut world);
    }
    assert_eq!(session.phase(), RainPhase::Celebrating);

    let pos = item_pos(&world, session.items()[0]);
    assert!(!session.tap(&mut world, pos));
    assert_eq!(session.taps(), TAP_TARGET);
}

#[test]
fn respawning_is_suspended_while_celebrating() {
    let mut world = World::new();
    let mut session = raining_session(&mut world);

    // Age the rain so some berries are close to the bottom edge, while
    // staying under the shortest possible fall duration.
    for _ in 0..199 {
        session.tick(&mut world, 0.015, BOUNDS);
    }
    for _ in 0..TAP_TARGET {
        tap_any(&mut session, &mut world);
    }
    assert_eq!(session.phase(), RainPhase::Celebrating);

    let step = 0.9;
    let expect_done = world.run(|falls: View<FallAnim>| {
        session
            .items()
            .iter()
            .filter(|&&id| {
                let fall = falls.get(id).unwrap();
                fall.elapsed + step >= fall.duration
            })
            .count()
    });
    assert!(expect_done > 0, "aging should have ripened some berries");

    session.tick(&mut world, step, BOUNDS);
    assert_eq!(session.phase(), RainPhase::Celebrating);
    assert_eq!(
        session.item_count(),
        INITIAL_POPULATION - 1 - expect_done,
        "berries leaving the screen mid-celebration are not replaced"
    );
    assert_eq!(session.taps(), TAP_TARGET);
}

#[test]
fn celebration_completes_into_a_fresh_session() {
    let mut world = World::new();
    let mut session = raining_session(&mut world);
    for _ in 0..TAP_TARGET {
        tap_any(&mut session, &mut world);
    }

    session.tick(&mut world, CELEBRATION_DURATION / 2.0, BOUNDS);
    assert_eq!(session.phase(), RainPhase::Celebrating);

    session.tick(&mut world, CELEBRATION_DURATION, BOUNDS);
    assert_eq!(session.phase(), RainPhase::Raining);
    assert_eq!(session.taps(), 0);
    assert_eq!(session.item_count(), INITIAL_POPULATION);
    assert!(session.giant().is_none());
}

#[test]
fn reset_restores_the_initial_state_from_any_point() {
    let mut world = World::new();
    let mut session = raining_session(&mut world);

    for _ in 0..7 {
        tap_any(&mut session, &mut world);
    }
    session.tick(&mut world, 2.5, BOUNDS);
    assert_eq!(session.taps(), 7);

    session.reset(&mut world);
    assert_eq!(session.taps(), 0);
    assert_eq!(session.phase(), RainPhase::Raining);
    assert_eq!(session.item_count(), INITIAL_POPULATION);

    // Fresh berries start above the screen with zeroed tweens.
    world.run(|falls: View<FallAnim>| {
        for &id in session.items() {
            assert_eq!(falls.get(id).unwrap().elapsed, 0.0);
        }
    });
}

#[test]
fn teardown_freezes_the_session() {
    let mut world = World::new();
    let mut session = raining_session(&mut world);

    tap_any(&mut session, &mut world);
    tap_any(&mut session, &mut world);
    let pos = item_pos(&world, session.items()[0]);

    session.teardown(&mut world);
    assert_eq!(session.item_count(), 0);
    assert_eq!(session.taps(), 2);

    // No event delivered after teardown may mutate anything.
    session.tick(&mut world, 10.0, BOUNDS);
    assert!(!session.tap(&mut world, pos));
    session.reset(&mut world);
    assert_eq!(session.taps(), 2);
    assert_eq!(session.item_count(), 0);
}

#[test]
fn seeded_sessions_are_deterministic() {
    let mut world_a = World::new();
    let mut world_b = World::new();
    let mut a = GameSession::with_seed(&mut world_a, 42);
    let mut b = GameSession::with_seed(&mut world_b, 42);

    a.tick(&mut world_a, 0.0, BOUNDS);
    b.tick(&mut world_b, 0.0, BOUNDS);

    let snapshot = |world: &World, session: &GameSession| -> Vec<(u8, f32, f32, f32)> {
        world.run(|berries: View<Berry>, tfs: View<Transform>, falls: View<FallAnim>| {
            session
                .items()
                .iter()
                .map(|&id| {
                    let berry = berries.get(id).unwrap();
                    (
                        berry.kind,
                        berry.size,
                        tfs.get(id).unwrap().pos.x,
                        falls.get(id).unwrap().duration,
                    )
                })
                .collect()
        })
    };

    assert_eq!(snapshot(&world_a, &a), snapshot(&world_b, &b));
}
