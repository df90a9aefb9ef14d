//! Flee decision function.
//!
//! Pure: computes the behavior mode and the agent command (if any) for
//! one tick from plain data. No trait objects, no RNG, no side effects.

use skulk_core::enums::FleeMode;
use skulk_core::types::Position;

/// Input to the flee decision for a single entity.
#[derive(Debug, Clone, Copy)]
pub struct FleeContext {
    pub self_position: Position,
    pub target_position: Position,
    /// Agent flags, read from the host's pathfinding agent.
    pub path_pending: bool,
    pub has_path: bool,
    pub remaining_distance: f64,
    pub stopping_distance: f64,
    /// Config scalars.
    pub flee_distance: f64,
    pub flee_range: f64,
}

/// Command to issue to the agent this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AgentCommand {
    /// Route toward this candidate point (still to be snapped onto the
    /// navigable surface by the caller).
    MoveTo(Position),
    /// Stop by routing to the current position.
    Stop(Position),
}

/// Output of the flee decision.
#[derive(Debug, Clone, Copy)]
pub struct FleeDecision {
    pub mode: FleeMode,
    pub command: Option<AgentCommand>,
}

/// Evaluate the decision for one tick.
///
/// A new flee destination is only computed once the agent has settled at
/// its previous one (no pending path, remaining distance within stopping
/// distance). Re-issuing every tick would replan constantly and send the
/// agent in circles.
pub fn evaluate(ctx: &FleeContext) -> FleeDecision {
    let distance = ctx.self_position.range_to(&ctx.target_position);
    let arrived = !ctx.path_pending && ctx.remaining_distance <= ctx.stopping_distance;

    if distance < ctx.flee_distance {
        let command = arrived.then(|| AgentCommand::MoveTo(flee_candidate(ctx)));
        return FleeDecision {
            mode: FleeMode::Fleeing,
            command,
        };
    }

    if ctx.has_path {
        // Target left the trigger radius mid-flight: let the agent finish
        // its path, then stop it where it stands.
        let command = (ctx.remaining_distance <= ctx.stopping_distance)
            .then_some(AgentCommand::Stop(ctx.self_position));
        return FleeDecision {
            mode: FleeMode::Settling,
            command,
        };
    }

    FleeDecision {
        mode: FleeMode::Idle,
        command: None,
    }
}

/// Candidate destination: `flee_range` meters directly away from the
/// target. Coincident positions fall back to running north.
fn flee_candidate(ctx: &FleeContext) -> Position {
    let dir = ctx.self_position.direction_away_from(&ctx.target_position);
    Position::from_dvec3(ctx.self_position.as_dvec3() + dir * ctx.flee_range)
}
