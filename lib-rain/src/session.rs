use std::collections::VecDeque;

use log::info;
use macroquad::math::{Vec2, vec2};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use shipyard::{EntityId, Get, UniqueViewMut, View, ViewMut, World};

use crate::components::*;
use crate::ease;
use crate::spawner;

pub const TAP_TARGET: u32 = 15;
pub const INITIAL_POPULATION: usize = 20;
pub const FALL_ACCEL_FACTOR: f32 = 1.2;
pub const CELEBRATION_DURATION: f32 = 1.0;

/// Container dimensions as reported by the host. Both may be zero
/// before the first layout pass; the session waits them out.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn ready(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RainPhase {
    /// Container dimensions are not known yet; nothing is spawned.
    AwaitLayout,
    /// Normal play: constant berry population, taps counted.
    Raining,
    /// Target reached: the giant berry scales up, respawning is suspended.
    Celebrating,
}

/// A berry finished its fall, either by leaving the bottom edge or by
/// being tapped. Queued and consumed in order by the session.
#[derive(Debug, Clone, Copy)]
struct FallEnded {
    item: EntityId,
    tapped: bool,
}

/// One play cycle of the berry rain. Owns the roster of airborne
/// berries inside the caller's `World`; all mutations go through
/// `tick`, `tap`, `reset` and `teardown` on the caller's thread.
pub struct GameSession {
    phase: RainPhase,
    taps: u32,
    rng: SmallRng,
    items: Vec<EntityId>,
    giant: Option<EntityId>,
    bounds: Bounds,
    events: VecDeque<FallEnded>,
    torn_down: bool,
}

impl GameSession {
    pub fn new(world: &mut World) -> Self {
        Self::with_rng(world, SmallRng::from_entropy())
    }

    pub fn with_seed(world: &mut World, seed: u64) -> Self {
        Self::with_rng(world, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(world: &mut World, rng: SmallRng) -> Self {
        world.add_unique(SoundQueue::default());

        Self {
            phase: RainPhase::AwaitLayout,
            taps: 0,
            rng,
            items: Vec::new(),
            giant: None,
            bounds: Bounds::default(),
            events: VecDeque::new(),
            torn_down: false,
        }
    }

    pub fn phase(&self) -> RainPhase {
        self.phase
    }

    pub fn taps(&self) -> u32 {
        self.taps
    }

    pub fn target(&self) -> u32 {
        TAP_TARGET
    }

    pub fn counter_text(&self) -> String {
        format!("{}/{}", self.taps, TAP_TARGET)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[EntityId] {
        &self.items
    }

    pub fn giant(&self) -> Option<EntityId> {
        self.giant
    }

    /// Advances every animation by `dt` seconds and processes the
    /// completions. Drives the whole state machine; call once per frame.
    pub fn tick(&mut self, world: &mut World, dt: f32, bounds: Bounds) {
        if self.torn_down {
            return;
        }
        if bounds.ready() {
            self.bounds = bounds;
        }

        match self.phase {
            RainPhase::AwaitLayout => {
                if !self.bounds.ready() {
                    return;
                }
                info!(
                    "layout known ({}x{}), starting the rain",
                    self.bounds.width, self.bounds.height
                );
                self.spawn_initial(world);
                self.phase = RainPhase::Raining;
            }
            RainPhase::Raining => {
                self.advance_falls(world, dt);
                self.drain_events(world);
            }
            RainPhase::Celebrating => {
                // Berries that were airborne when the target got hit keep
                // falling under the overlay; they just don't respawn.
                self.advance_falls(world, dt);
                self.drain_events(world);
                if self.advance_giant(world, dt) {
                    self.reset(world);
                }
            }
        }
    }

    /// Routes a tap at `pos` into the state machine. Returns whether a
    /// berry was hit. Taps are ignored while celebrating: the overlay
    /// covers the whole container.
    pub fn tap(&mut self, world: &mut World, pos: Vec2) -> bool {
        if self.torn_down || self.phase != RainPhase::Raining {
            return false;
        }
        let Some(item) = self.hit_test(world, pos) else {
            return false;
        };

        self.events.push_back(FallEnded { item, tapped: true });
        self.drain_events(world);
        true
    }

    /// Clears everything on screen, zeroes the counter and re-runs the
    /// initial population.
    pub fn reset(&mut self, world: &mut World) {
        if self.torn_down {
            return;
        }
        self.despawn_all(world);
        self.taps = 0;
        if self.bounds.ready() {
            self.spawn_initial(world);
            self.phase = RainPhase::Raining;
        } else {
            self.phase = RainPhase::AwaitLayout;
        }
        info!("session reset, population {}", self.items.len());
    }

    /// Discards all pending work synchronously. Any `tick`/`tap`/`reset`
    /// arriving afterwards is a no-op, so no completion can mutate state
    /// after the host tears the session down.
    pub fn teardown(&mut self, world: &mut World) {
        if self.torn_down {
            return;
        }
        self.despawn_all(world);
        self.torn_down = true;
        info!("session torn down");
    }

    fn spawn_initial(&mut self, world: &mut World) {
        for _ in 0..INITIAL_POPULATION {
            self.spawn_one(world);
        }
    }

    fn spawn_one(&mut self, world: &mut World) {
        let params = spawner::random_item_params(&mut self.rng);
        let left = spawner::random_left_edge(&mut self.rng, self.bounds.width, params.size);
        let start_y = -params.size;
        let end_y = self.bounds.height + params.size;

        let id = world.add_entity((
            Transform {
                pos: vec2(left + params.size / 2.0, start_y),
                angle: params.angle,
            },
            Berry {
                kind: params.kind,
                size: params.size,
            },
            FallAnim {
                start_y,
                end_y,
                duration: params.duration,
                elapsed: 0.0,
            },
        ));
        self.items.push(id);
    }

    fn advance_falls(&mut self, world: &mut World, dt: f32) {
        let items = &self.items;

        let ended = world.run(|mut falls: ViewMut<FallAnim>, mut tfs: ViewMut<Transform>| {
            let mut ended = Vec::new();

            for &id in items {
                let Ok((mut fall, mut tf)) = (&mut falls, &mut tfs).get(id) else {
                    continue;
                };
                if fall.elapsed >= fall.duration {
                    continue;
                }

                fall.elapsed += dt;
                let t = (fall.elapsed / fall.duration).min(1.0);
                tf.pos.y = fall.start_y
                    + (fall.end_y - fall.start_y) * ease::accelerate(t, FALL_ACCEL_FACTOR);

                if fall.elapsed >= fall.duration {
                    ended.push(id);
                }
            }

            ended
        });

        self.events
            .extend(ended.into_iter().map(|item| FallEnded { item, tapped: false }));
    }

    /// Topmost berry under `pos`, i.e. the most recently spawned one,
    /// matching how overlapping sprites stack visually.
    fn hit_test(&self, world: &World, pos: Vec2) -> Option<EntityId> {
        let items = &self.items;

        world.run(|berries: View<Berry>, tfs: View<Transform>| {
            items.iter().rev().copied().find(|&id| {
                let Ok((berry, tf)) = (&berries, &tfs).get(id) else {
                    return false;
                };
                (pos.x - tf.pos.x).abs() <= berry.size / 2.0
                    && (pos.y - tf.pos.y).abs() <= berry.size / 2.0
            })
        })
    }

    fn drain_events(&mut self, world: &mut World) {
        while let Some(ev) = self.events.pop_front() {
            self.apply_fall_ended(world, ev);
        }
    }

    fn apply_fall_ended(&mut self, world: &mut World, ev: FallEnded) {
        // The berry may already be gone (tapped and completed on the
        // same frame); stale events are dropped.
        let Some(idx) = self.items.iter().position(|&id| id == ev.item) else {
            return;
        };
        self.items.remove(idx);
        world.delete_entity(ev.item);

        if ev.tapped {
            self.taps += 1;
            world.run(|mut queue: UniqueViewMut<SoundQueue>| queue.0.push(SoundCue::Munch));

            if self.taps == TAP_TARGET {
                self.begin_celebration(world);
            } else {
                self.spawn_one(world);
            }
        } else if self.phase == RainPhase::Raining {
            self.spawn_one(world);
        }
    }

    fn begin_celebration(&mut self, world: &mut World) {
        info!("target of {TAP_TARGET} taps reached, celebrating");
        self.phase = RainPhase::Celebrating;
        self.giant = Some(world.add_entity((
            Transform {
                pos: vec2(self.bounds.width / 2.0, self.bounds.height / 2.0),
                angle: 0.0,
            },
            GiantBerry {
                elapsed: 0.0,
                scale: 0.0,
            },
        )));
    }

    /// Returns true once the giant berry reaches full scale.
    fn advance_giant(&mut self, world: &mut World, dt: f32) -> bool {
        let Some(id) = self.giant else {
            return false;
        };

        world.run(|mut giants: ViewMut<GiantBerry>| {
            let Ok(mut giant) = (&mut giants).get(id) else {
                return true;
            };
            giant.elapsed += dt;
            let t = (giant.elapsed / CELEBRATION_DURATION).min(1.0);
            giant.scale = ease::smooth(t);
            t >= 1.0
        })
    }

    fn despawn_all(&mut self, world: &mut World) {
        for id in self.items.drain(..) {
            world.delete_entity(id);
        }
        if let Some(id) = self.giant.take() {
            world.delete_entity(id);
        }
        self.events.clear();
    }
}
