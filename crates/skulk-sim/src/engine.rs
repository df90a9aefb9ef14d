//! Simulation engine — the host for the flee behavior.
//!
//! `SimulationEngine` owns the hecs ECS world, processes queued
//! commands, runs all systems in a fixed order, and produces a
//! `SimSnapshot` per tick. Same seed + same command schedule = same
//! snapshot stream.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skulk_core::commands::SimCommand;
use skulk_core::components::Player;
use skulk_core::config::FleeConfig;
use skulk_core::constants::DT;
use skulk_core::events::AnimationEvent;
use skulk_core::state::SimSnapshot;
use skulk_core::types::{Position, SimTime};
use skulk_nav::WalkableGrid;

use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    /// Walkable surface the flee behavior samples against.
    pub nav: WalkableGrid,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            nav: WalkableGrid::new(64, 64, 1.0),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    paused: bool,
    time_scale: f64,
    rng: ChaCha8Rng,
    nav: WalkableGrid,
    command_queue: VecDeque<SimCommand>,
    animation_events: Vec<AnimationEvent>,
    next_npc_id: u32,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            paused: false,
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            nav: config.nav,
            command_queue: VecDeque::new(),
            animation_events: Vec::new(),
            next_npc_id: 0,
        }
    }

    /// Spawn the tracked player entity.
    pub fn spawn_player(&mut self, position: Position) -> hecs::Entity {
        world_setup::spawn_player(&mut self.world, position)
    }

    /// Spawn a player-like entity without the lookup tag.
    pub fn spawn_untagged_player(&mut self, position: Position) -> hecs::Entity {
        world_setup::spawn_untagged_player(&mut self.world, position)
    }

    /// Spawn a fleeing NPC. Returns its stable id.
    pub fn spawn_npc(&mut self, position: Position, config: FleeConfig) -> u32 {
        let npc_id = self.next_npc_id;
        self.next_npc_id += 1;
        world_setup::spawn_npc(&mut self.world, &mut self.rng, npc_id, position, config);
        npc_id
    }

    /// Spawn an NPC missing its animator handle.
    pub fn spawn_npc_without_animator(&mut self, position: Position, config: FleeConfig) -> u32 {
        let npc_id = self.next_npc_id;
        self.next_npc_id += 1;
        world_setup::spawn_npc_without_animator(
            &mut self.world,
            &mut self.rng,
            npc_id,
            position,
            config,
        );
        npc_id
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SimCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> SimSnapshot {
        self.process_commands();

        if !self.paused {
            let dt = DT * self.time_scale;
            let current_tick = self.time.tick;

            systems::bind::run(&mut self.world);
            systems::steering::run(&mut self.world, dt);
            systems::flee::run(
                &mut self.world,
                &self.nav,
                &mut self.rng,
                dt,
                current_tick,
                &mut self.animation_events,
            );
            systems::movement::run(&mut self.world, dt);

            self.time.advance(dt);
        }

        let animation_events = std::mem::take(&mut self.animation_events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.paused, animation_events)
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            match command {
                SimCommand::SetPlayerPosition { position } => {
                    for (_entity, (_player, pos)) in
                        self.world.query_mut::<(&Player, &mut Position)>()
                    {
                        *pos = position;
                    }
                }
                SimCommand::SetTimeScale { scale } => self.time_scale = scale,
                SimCommand::Pause => self.paused = true,
                SimCommand::Resume => self.paused = false,
            }
        }
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Whether the simulation is paused.
    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get the walkable surface.
    pub fn nav(&self) -> &WalkableGrid {
        &self.nav
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }
}
