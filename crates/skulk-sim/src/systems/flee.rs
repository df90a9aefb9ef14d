//! Flee behavior system — runs the per-tick behavior for each bound NPC.
//!
//! Bridges the ECS to the trait-based behavior in skulk-flee-ai: the
//! agent and animator components are wrapped in handle adapters, the
//! engine's walkable grid answers surface queries, and peek fires are
//! collected as animation events.

use hecs::World;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use skulk_core::components::{AnimatorState, FleeAi, NavAgentState, NpcId};
use skulk_core::enums::BindState;
use skulk_core::events::AnimationEvent;
use skulk_core::types::{Position, Velocity};
use skulk_flee_ai::behavior;
use skulk_flee_ai::traits::{AnimationSink, NavSurface, PathAgent};

use crate::systems::bind::BoundTarget;

/// ECS adapter exposing `NavAgentState` as a `PathAgent`.
struct AgentHandle<'a>(&'a mut NavAgentState);

impl PathAgent for AgentHandle<'_> {
    fn path_pending(&self) -> bool {
        self.0.path_pending
    }
    fn has_path(&self) -> bool {
        self.0.has_path
    }
    fn remaining_distance(&self) -> f64 {
        self.0.remaining_distance
    }
    fn stopping_distance(&self) -> f64 {
        self.0.stopping_distance
    }
    fn velocity(&self) -> Velocity {
        self.0.velocity
    }
    fn set_destination(&mut self, destination: Position) {
        self.0.destination = Some(destination);
        self.0.path_pending = true;
    }
}

/// ECS adapter exposing `AnimatorState` as an `AnimationSink`.
struct AnimatorHandle<'a>(&'a mut AnimatorState);

impl AnimationSink for AnimatorHandle<'_> {
    fn set_float(&mut self, name: &str, value: f64) {
        self.0.floats.insert(name.to_string(), value);
    }
    fn set_trigger(&mut self, name: &str) {
        self.0.triggers.push(name.to_string());
    }
}

/// Run the flee behavior for every bound NPC.
pub fn run(
    world: &mut World,
    surface: &dyn NavSurface,
    rng: &mut ChaCha8Rng,
    dt: f64,
    current_tick: u64,
    events: &mut Vec<AnimationEvent>,
) {
    // Trigger pulses last exactly one tick.
    for (_entity, animator) in world.query_mut::<&mut AnimatorState>() {
        animator.triggers.clear();
    }

    // Pass 1: read target positions for bound NPCs.
    let mut targets: Vec<(hecs::Entity, Position)> = Vec::new();
    {
        let mut query = world.query::<(&FleeAi, &BoundTarget)>();
        for (entity, (ai, bound)) in query.iter() {
            if ai.bind_state != BindState::Bound {
                continue;
            }
            if let Ok(target_pos) = world.get::<&Position>(bound.0) {
                targets.push((entity, *target_pos));
            }
        }
    }

    // Pass 2: tick each behavior against its components.
    for (entity, target_position) in targets {
        let Ok((ai, agent, animator, position, id)) = world.query_one_mut::<(
            &mut FleeAi,
            &mut NavAgentState,
            &mut AnimatorState,
            &Position,
            &NpcId,
        )>(entity) else {
            continue;
        };

        let outcome = behavior::run_tick(
            ai,
            *position,
            target_position,
            &mut AgentHandle(agent),
            surface,
            &mut AnimatorHandle(animator),
            rng,
            dt,
        );

        if let Some(destination) = outcome.issued {
            debug!(npc_id = id.0, mode = ?outcome.mode, ?destination, "agent command issued");
        }
        if outcome.peeked {
            events.push(AnimationEvent::PeekTriggered {
                npc_id: id.0,
                tick: current_tick,
            });
        }
    }
}
