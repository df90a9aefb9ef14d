#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use skulk_core::components::FleeAi;
    use skulk_core::config::FleeConfig;
    use skulk_core::constants::*;
    use skulk_core::enums::{BindState, FleeMode};
    use skulk_core::types::{Position, Velocity};

    use crate::behavior::run_tick;
    use crate::fsm::{evaluate, AgentCommand, FleeContext};
    use crate::peek;
    use crate::traits::{AnimationSink, NavSurface, PathAgent, PEEK_TRIGGER, SPEED_PARAM};

    fn make_context(distance: f64, path_pending: bool, has_path: bool, remaining: f64) -> FleeContext {
        // NPC at (0, distance, 0), target at origin: fleeing means running
        // further north.
        FleeContext {
            self_position: Position::new(0.0, distance, 0.0),
            target_position: Position::new(0.0, 0.0, 0.0),
            path_pending,
            has_path,
            remaining_distance: remaining,
            stopping_distance: DEFAULT_STOPPING_DISTANCE,
            flee_distance: DEFAULT_FLEE_DISTANCE,
            flee_range: DEFAULT_FLEE_RANGE,
        }
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    // ---- Decision function ----

    #[test]
    fn test_flee_issued_when_close_and_settled() {
        let ctx = make_context(5.0, false, false, 0.0);
        let decision = evaluate(&ctx);
        assert_eq!(decision.mode, FleeMode::Fleeing);
        let Some(AgentCommand::MoveTo(candidate)) = decision.command else {
            panic!("expected a MoveTo command, got {:?}", decision.command);
        };
        // Directly away from the target, flee_range out.
        assert!((candidate.y - (5.0 + DEFAULT_FLEE_RANGE)).abs() < 1e-9);
        assert!(candidate.x.abs() < 1e-9);
    }

    #[test]
    fn test_no_replan_while_en_route() {
        // Close target but the agent is still 12 m from its last
        // destination: no new command, mode stays Fleeing.
        let ctx = make_context(5.0, false, true, 12.0);
        let decision = evaluate(&ctx);
        assert_eq!(decision.mode, FleeMode::Fleeing);
        assert!(decision.command.is_none());
    }

    #[test]
    fn test_no_replan_while_path_pending() {
        let ctx = make_context(5.0, true, false, 0.0);
        let decision = evaluate(&ctx);
        assert_eq!(decision.mode, FleeMode::Fleeing);
        assert!(decision.command.is_none());
    }

    #[test]
    fn test_trigger_distance_is_strict() {
        // Exactly at the trigger distance does not flee.
        let ctx = make_context(DEFAULT_FLEE_DISTANCE, false, false, 0.0);
        let decision = evaluate(&ctx);
        assert_eq!(decision.mode, FleeMode::Idle);
        assert!(decision.command.is_none());
    }

    #[test]
    fn test_stop_issued_when_target_left_and_arrived() {
        let ctx = make_context(30.0, false, true, 0.3);
        let decision = evaluate(&ctx);
        assert_eq!(decision.mode, FleeMode::Settling);
        assert_eq!(
            decision.command,
            Some(AgentCommand::Stop(ctx.self_position))
        );
    }

    #[test]
    fn test_settling_without_command_while_finishing_path() {
        let ctx = make_context(30.0, false, true, 8.0);
        let decision = evaluate(&ctx);
        assert_eq!(decision.mode, FleeMode::Settling);
        assert!(decision.command.is_none());
    }

    #[test]
    fn test_idle_when_far_and_no_path() {
        let ctx = make_context(30.0, false, false, 0.0);
        let decision = evaluate(&ctx);
        assert_eq!(decision.mode, FleeMode::Idle);
        assert!(decision.command.is_none());
    }

    #[test]
    fn test_coincident_positions_flee_north() {
        let mut ctx = make_context(0.0, false, false, 0.0);
        ctx.self_position = ctx.target_position;
        let decision = evaluate(&ctx);
        let Some(AgentCommand::MoveTo(candidate)) = decision.command else {
            panic!("expected a MoveTo command");
        };
        assert!((candidate.y - DEFAULT_FLEE_RANGE).abs() < 1e-9);
        assert!(candidate.x.abs() < 1e-9);
    }

    // ---- Peek timer ----

    #[test]
    fn test_sample_interval_within_bounds() {
        let config = FleeConfig::default();
        let mut rng = rng();
        for _ in 0..100 {
            let v = peek::sample_interval(&config, &mut rng);
            assert!(v >= config.min_peek_interval && v < config.max_peek_interval);
        }
    }

    #[test]
    fn test_sample_interval_reversed_bounds_swap() {
        let config = FleeConfig {
            min_peek_interval: 10.0,
            max_peek_interval: 5.0,
            ..Default::default()
        };
        let mut rng = rng();
        for _ in 0..100 {
            let v = peek::sample_interval(&config, &mut rng);
            assert!((5.0..10.0).contains(&v));
        }
    }

    #[test]
    fn test_sample_interval_degenerate_bounds_collapse() {
        let config = FleeConfig {
            min_peek_interval: 6.0,
            max_peek_interval: 6.0,
            ..Default::default()
        };
        assert_eq!(peek::sample_interval(&config, &mut rng()), 6.0);
    }

    #[test]
    fn test_peek_fires_once_and_resets() {
        let config = FleeConfig::default();
        let mut rng = rng();
        let mut remaining = 2.5 * DT;
        let mut fires = 0;
        for _ in 0..4 {
            if peek::tick(&mut remaining, 3.0, &config, &mut rng, DT) {
                fires += 1;
                assert!(remaining >= config.min_peek_interval);
                assert!(remaining < config.max_peek_interval);
            }
        }
        assert_eq!(fires, 1, "one countdown cycle fires exactly once");
    }

    #[test]
    fn test_peek_never_fires_while_idle() {
        let config = FleeConfig::default();
        let mut rng = rng();
        let mut remaining = 0.01;
        for _ in 0..1000 {
            let fired = peek::tick(&mut remaining, 0.0, &config, &mut rng, DT);
            assert!(!fired);
            // Re-randomized every idle tick, so it never approaches zero.
            assert!(remaining >= config.min_peek_interval);
        }
    }

    #[test]
    fn test_moving_threshold_is_strict() {
        let config = FleeConfig::default();
        let mut rng = rng();
        let mut remaining = 1.0;
        // Exactly at the threshold counts as idle.
        peek::tick(&mut remaining, MOVING_SPEED_THRESHOLD, &config, &mut rng, DT);
        assert!(remaining >= config.min_peek_interval);
    }

    // ---- Orchestrator with mock handles ----

    #[derive(Default)]
    struct MockAgent {
        path_pending: bool,
        has_path: bool,
        remaining: f64,
        stopping: f64,
        velocity: Velocity,
        destinations: Vec<Position>,
    }

    impl PathAgent for MockAgent {
        fn path_pending(&self) -> bool {
            self.path_pending
        }
        fn has_path(&self) -> bool {
            self.has_path
        }
        fn remaining_distance(&self) -> f64 {
            self.remaining
        }
        fn stopping_distance(&self) -> f64 {
            self.stopping
        }
        fn velocity(&self) -> Velocity {
            self.velocity
        }
        fn set_destination(&mut self, destination: Position) {
            self.destinations.push(destination);
        }
    }

    /// Surface that snaps everything to a fixed point, or rejects all.
    struct MockSurface(Option<Position>);

    impl NavSurface for MockSurface {
        fn sample_position(&self, _candidate: Position, _radius: f64) -> Option<Position> {
            self.0
        }
    }

    #[derive(Default)]
    struct MockAnimator {
        floats: Vec<(String, f64)>,
        triggers: Vec<String>,
    }

    impl AnimationSink for MockAnimator {
        fn set_float(&mut self, name: &str, value: f64) {
            self.floats.push((name.to_string(), value));
        }
        fn set_trigger(&mut self, name: &str) {
            self.triggers.push(name.to_string());
        }
    }

    fn make_ai() -> FleeAi {
        FleeAi {
            config: FleeConfig::default(),
            mode: FleeMode::Idle,
            bind_state: BindState::Bound,
            peek_timer_secs: 5.0,
        }
    }

    #[test]
    fn test_run_tick_issues_snapped_destination() {
        let mut ai = make_ai();
        let snapped = Position::new(1.0, 18.0, 0.0);
        let mut agent = MockAgent::default();
        let surface = MockSurface(Some(snapped));
        let mut animator = MockAnimator::default();

        let outcome = run_tick(
            &mut ai,
            Position::new(0.0, 5.0, 0.0),
            Position::new(0.0, 0.0, 0.0),
            &mut agent,
            &surface,
            &mut animator,
            &mut rng(),
            DT,
        );

        assert_eq!(outcome.mode, FleeMode::Fleeing);
        assert_eq!(outcome.issued, Some(snapped));
        assert_eq!(agent.destinations, vec![snapped]);
    }

    #[test]
    fn test_run_tick_skips_silently_when_surface_rejects() {
        let mut ai = make_ai();
        let mut agent = MockAgent::default();
        let surface = MockSurface(None);
        let mut animator = MockAnimator::default();

        let outcome = run_tick(
            &mut ai,
            Position::new(0.0, 5.0, 0.0),
            Position::new(0.0, 0.0, 0.0),
            &mut agent,
            &surface,
            &mut animator,
            &mut rng(),
            DT,
        );

        // Still fleeing, but nothing was issued; retried next tick.
        assert_eq!(outcome.mode, FleeMode::Fleeing);
        assert!(outcome.issued.is_none());
        assert!(agent.destinations.is_empty());
    }

    #[test]
    fn test_run_tick_speed_passthrough_is_exact() {
        let mut ai = make_ai();
        let mut agent = MockAgent {
            velocity: Velocity::new(3.0, 4.0, 0.0),
            ..Default::default()
        };
        let surface = MockSurface(None);
        let mut animator = MockAnimator::default();

        run_tick(
            &mut ai,
            Position::new(0.0, 50.0, 0.0),
            Position::new(0.0, 0.0, 0.0),
            &mut agent,
            &surface,
            &mut animator,
            &mut rng(),
            DT,
        );

        assert_eq!(animator.floats, vec![(SPEED_PARAM.to_string(), 5.0)]);
    }

    #[test]
    fn test_run_tick_fires_peek_trigger() {
        let mut ai = make_ai();
        ai.peek_timer_secs = DT / 2.0;
        let mut agent = MockAgent {
            velocity: Velocity::new(0.0, 3.0, 0.0),
            has_path: true,
            remaining: 10.0,
            ..Default::default()
        };
        let surface = MockSurface(None);
        let mut animator = MockAnimator::default();

        let outcome = run_tick(
            &mut ai,
            Position::new(0.0, 5.0, 0.0),
            Position::new(0.0, 0.0, 0.0),
            &mut agent,
            &surface,
            &mut animator,
            &mut rng(),
            DT,
        );

        assert!(outcome.peeked);
        assert_eq!(animator.triggers, vec![PEEK_TRIGGER.to_string()]);
        assert!(ai.peek_timer_secs >= ai.config.min_peek_interval);
    }
}
