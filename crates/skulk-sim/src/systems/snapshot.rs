//! Snapshot system: queries the ECS world and builds a complete SimSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use skulk_core::components::{AnimatorState, FleeAi, NavAgentState, NpcId, Player};
use skulk_core::events::AnimationEvent;
use skulk_core::state::{NpcView, SimSnapshot};
use skulk_core::types::{Position, SimTime};
use skulk_flee_ai::traits::SPEED_PARAM;

/// Build a complete SimSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    paused: bool,
    animation_events: Vec<AnimationEvent>,
) -> SimSnapshot {
    let player = world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos);

    let mut npcs: Vec<NpcView> = world
        .query::<(
            &NpcId,
            &Position,
            &FleeAi,
            Option<&NavAgentState>,
            Option<&AnimatorState>,
        )>()
        .iter()
        .map(|(_, (id, pos, ai, agent, animator))| NpcView {
            npc_id: id.0,
            position: *pos,
            speed: agent.map(|a| a.velocity.speed()).unwrap_or(0.0),
            anim_speed: animator
                .and_then(|a| a.floats.get(SPEED_PARAM).copied())
                .unwrap_or(0.0),
            mode: ai.mode,
            bind_state: ai.bind_state,
            destination: agent.and_then(|a| a.destination),
            remaining_distance: agent.map(|a| a.remaining_distance).unwrap_or(0.0),
        })
        .collect();
    npcs.sort_by_key(|npc| npc.npc_id);

    SimSnapshot {
        time: *time,
        paused,
        player,
        npcs,
        animation_events,
    }
}
