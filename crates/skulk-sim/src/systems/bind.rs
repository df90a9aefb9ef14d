//! One-shot startup resolution.
//!
//! Resolves the tracked target by tag lookup and checks that the agent
//! and animator handles exist on the NPC. Runs every tick but only
//! touches `Unbound` instances, so resolution happens exactly once per
//! NPC: success caches the target entity, failure is logged once and
//! leaves the instance permanently inert. No retries.

use hecs::{Entity, World};
use tracing::{debug, error};

use skulk_core::components::{AnimatorState, FleeAi, NavAgentState, NpcId, Tag};
use skulk_core::constants::PLAYER_TAG;
use skulk_core::enums::BindState;
use skulk_flee_ai::error::BindError;

/// Target entity cached on an NPC by a successful bind.
#[derive(Debug, Clone, Copy)]
pub struct BoundTarget(pub Entity);

/// Resolve all still-unbound flee behaviors.
pub fn run(world: &mut World) {
    let player = find_tagged(world, PLAYER_TAG);

    // Collect results in a buffer to avoid borrow issues with hecs.
    let mut results: Vec<(Entity, u32, Result<Entity, BindError>)> = Vec::new();
    {
        let mut query = world.query::<(&FleeAi, &NpcId)>();
        for (entity, (ai, id)) in query.iter() {
            if ai.bind_state != BindState::Unbound {
                continue;
            }
            let has_agent = world.satisfies::<&NavAgentState>(entity).unwrap_or(false);
            let has_animator = world.satisfies::<&AnimatorState>(entity).unwrap_or(false);

            let result = match player {
                None => Err(BindError::TargetNotFound {
                    tag: PLAYER_TAG.to_string(),
                }),
                Some(_) if !has_agent => Err(BindError::MissingAgent),
                Some(_) if !has_animator => Err(BindError::MissingAnimator),
                Some(target) => Ok(target),
            };
            results.push((entity, id.0, result));
        }
    }

    for (entity, npc_id, result) in results {
        match result {
            Ok(target) => {
                if let Ok(mut ai) = world.get::<&mut FleeAi>(entity) {
                    ai.bind_state = BindState::Bound;
                }
                let _ = world.insert_one(entity, BoundTarget(target));
                debug!(npc_id, "flee behavior bound to target");
            }
            Err(err) => {
                if let Ok(mut ai) = world.get::<&mut FleeAi>(entity) {
                    ai.bind_state = BindState::Failed;
                }
                error!(npc_id, %err, "flee behavior bind failed");
            }
        }
    }
}

/// Scene-graph lookup: first entity carrying the given tag.
fn find_tagged(world: &World, tag: &str) -> Option<Entity> {
    world
        .query::<&Tag>()
        .iter()
        .find(|(_, t)| t.0 == tag)
        .map(|(entity, _)| entity)
}
