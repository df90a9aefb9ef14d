//! Entity spawn factories for setting up the simulation world.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use skulk_core::components::{AnimatorState, FleeAi, NavAgentState, NpcId, Player, Tag};
use skulk_core::config::FleeConfig;
use skulk_core::constants::*;
use skulk_core::enums::{BindState, FleeMode};
use skulk_core::types::{Position, Velocity};
use skulk_flee_ai::peek;

/// Spawn the tracked player entity.
pub fn spawn_player(world: &mut World, position: Position) -> Entity {
    world.spawn((
        Player,
        Tag(PLAYER_TAG.to_string()),
        position,
        Velocity::default(),
    ))
}

/// Spawn a player-like entity without the lookup tag. NPCs spawned into
/// such a world fail target resolution and stay inert.
pub fn spawn_untagged_player(world: &mut World, position: Position) -> Entity {
    world.spawn((Player, position, Velocity::default()))
}

/// Spawn a fleeing NPC with agent and animator handles.
///
/// The peek timer starts at a random interval, as in a freshly activated
/// behavior.
pub fn spawn_npc(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    npc_id: u32,
    position: Position,
    config: FleeConfig,
) -> Entity {
    let ai = FleeAi {
        config,
        mode: FleeMode::Idle,
        bind_state: BindState::Unbound,
        peek_timer_secs: peek::sample_interval(&config, rng),
    };
    world.spawn((
        NpcId(npc_id),
        position,
        Velocity::default(),
        ai,
        default_agent(),
        AnimatorState::default(),
    ))
}

/// Spawn an NPC missing its animator handle (bind-failure scenario).
pub fn spawn_npc_without_animator(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    npc_id: u32,
    position: Position,
    config: FleeConfig,
) -> Entity {
    let ai = FleeAi {
        config,
        mode: FleeMode::Idle,
        bind_state: BindState::Unbound,
        peek_timer_secs: peek::sample_interval(&config, rng),
    };
    world.spawn((
        NpcId(npc_id),
        position,
        Velocity::default(),
        ai,
        default_agent(),
    ))
}

fn default_agent() -> NavAgentState {
    NavAgentState {
        destination: None,
        stopping_distance: DEFAULT_STOPPING_DISTANCE,
        max_speed: DEFAULT_AGENT_SPEED,
        velocity: Velocity::default(),
        path_pending: false,
        has_path: false,
        remaining_distance: 0.0,
    }
}
