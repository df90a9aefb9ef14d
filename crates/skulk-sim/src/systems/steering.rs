//! Built-in pathfinding agent steering.
//!
//! Straight-line steering toward the held destination: full speed
//! outside the stopping distance, stopped inside it. The path itself is
//! only released once the agent reaches the destination point (within
//! ARRIVAL_EPSILON) — an agent parked at its stopping distance still
//! reports an active path, which is what the flee behavior's settle
//! branch keys on.

use hecs::World;

use skulk_core::components::NavAgentState;
use skulk_core::constants::ARRIVAL_EPSILON;
use skulk_core::types::{Position, Velocity};

/// Update velocity and path flags for all agents.
///
/// The entity's Velocity component mirrors the agent velocity so the
/// shared integration system moves the NPC.
pub fn run(world: &mut World, dt: f64) {
    for (_entity, (agent, position, velocity)) in
        world.query_mut::<(&mut NavAgentState, &Position, &mut Velocity)>()
    {
        agent.path_pending = false;

        if let Some(destination) = agent.destination {
            let remaining = position.range_to(&destination);

            if remaining <= ARRIVAL_EPSILON {
                // Reached the destination point: release the path.
                agent.destination = None;
                agent.has_path = false;
                agent.remaining_distance = 0.0;
                agent.velocity = Velocity::default();
            } else if remaining <= agent.stopping_distance {
                // Arrived: stop moving, keep the path.
                agent.has_path = true;
                agent.remaining_distance = remaining;
                agent.velocity = Velocity::default();
            } else {
                agent.has_path = true;
                agent.remaining_distance = remaining;
                let dir = destination.direction_away_from(position);
                // Cap so one tick never overshoots the destination.
                let speed = if dt > 0.0 {
                    agent.max_speed.min(remaining / dt)
                } else {
                    agent.max_speed
                };
                agent.velocity = Velocity::from_dvec3(dir * speed);
            }
        } else {
            agent.has_path = false;
            agent.remaining_distance = 0.0;
            agent.velocity = Velocity::default();
        }

        *velocity = agent.velocity;
    }
}
