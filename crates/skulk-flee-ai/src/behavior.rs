//! Per-tick orchestrator: decision, agent commands, animation driving.

use rand::Rng;

use skulk_core::components::FleeAi;
use skulk_core::enums::FleeMode;
use skulk_core::types::Position;

use crate::fsm::{self, AgentCommand, FleeContext};
use crate::peek;
use crate::traits::{AnimationSink, NavSurface, PathAgent, PEEK_TRIGGER, SPEED_PARAM};

/// What one tick of the behavior did, for observability and tests.
#[derive(Debug, Clone, Copy)]
pub struct TickOutcome {
    pub mode: FleeMode,
    /// Destination actually issued to the agent, if any.
    pub issued: Option<Position>,
    /// Whether the peek trigger fired.
    pub peeked: bool,
}

/// Run one tick of the flee behavior for an already-bound instance.
///
/// Flee/settle decision first, then the animation speed passthrough,
/// then the peek timer.
pub fn run_tick<R: Rng>(
    ai: &mut FleeAi,
    self_position: Position,
    target_position: Position,
    agent: &mut dyn PathAgent,
    surface: &dyn NavSurface,
    animator: &mut dyn AnimationSink,
    rng: &mut R,
    dt: f64,
) -> TickOutcome {
    let ctx = FleeContext {
        self_position,
        target_position,
        path_pending: agent.path_pending(),
        has_path: agent.has_path(),
        remaining_distance: agent.remaining_distance(),
        stopping_distance: agent.stopping_distance(),
        flee_distance: ai.config.flee_distance,
        flee_range: ai.config.flee_range,
    };

    let decision = fsm::evaluate(&ctx);
    ai.mode = decision.mode;

    let issued = match decision.command {
        Some(AgentCommand::MoveTo(candidate)) => {
            // Snap the candidate onto the navigable surface. No valid
            // point within range means no command this tick; the decision
            // re-fires next tick while the target stays close.
            match surface.sample_position(candidate, ai.config.flee_range) {
                Some(point) => {
                    agent.set_destination(point);
                    Some(point)
                }
                None => None,
            }
        }
        Some(AgentCommand::Stop(here)) => {
            agent.set_destination(here);
            Some(here)
        }
        None => None,
    };

    // Direct passthrough, no smoothing.
    let speed = agent.velocity().speed();
    animator.set_float(SPEED_PARAM, speed);

    let peeked = peek::tick(&mut ai.peek_timer_secs, speed, &ai.config, rng, dt);
    if peeked {
        animator.set_trigger(PEEK_TRIGGER);
    }

    TickOutcome {
        mode: ai.mode,
        issued,
        peeked,
    }
}
