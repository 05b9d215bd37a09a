//! Property tests for the simulation engine.
//!
//! Random sequences of player inputs and ticks are replayed against an
//! engine, checking snapshot invariants after every step.

use flappy_core::config::GameConfig;
use flappy_core::enums::GamePhase;
use flappy_core::state::GameState;
use flappy_sim::SimulationEngine;
use proptest::prelude::*;

/// Operations a driver can perform on the engine.
#[derive(Debug, Clone)]
enum EngineOp {
    Tick(u8),
    Jump,
    Reset,
}

fn engine_op_strategy() -> impl Strategy<Value = EngineOp> {
    prop_oneof![
        8 => (1u8..40).prop_map(EngineOp::Tick),
        3 => Just(EngineOp::Jump),
        1 => Just(EngineOp::Reset),
    ]
}

/// Configs that pass validation: the hole plus two minimum pipes always fits.
fn valid_config_strategy() -> impl Strategy<Value = GameConfig> {
    (200u32..1_200, 0u32..150, 20u32..100, any::<u64>(), 1u64..200).prop_flat_map(
        |(playable, ground, min_pipe, seed, cadence)| {
            (0..=playable - 2 * min_pipe).prop_map(move |hole| GameConfig {
                screen_height: playable + ground,
                ground_height: ground,
                min_pipe_height: min_pipe,
                hole_height: hole,
                ticks_per_generation: cadence,
                seed,
                ..Default::default()
            })
        },
    )
}

fn assert_snapshot_invariants(engine: &SimulationEngine, config: &GameConfig) {
    let state = engine.state();
    let playable = f64::from(config.screen_height - config.ground_height);
    let hole = f64::from(config.hole_height);
    let min_pipe = f64::from(config.min_pipe_height);

    assert_eq!(state.bird.x, f64::from(config.screen_width) / 2.0);
    assert_eq!(state.score, engine.score());

    for pair in &state.pipe_pairs {
        assert!(pair.trailing_edge() >= 0.0, "off-screen pair kept: {pair:?}");
        assert_eq!(pair.top_height + pair.bottom_height + hole, playable);
        assert!(pair.top_height >= min_pipe && pair.bottom_height >= min_pipe);
        assert_eq!(pair.width, f64::from(config.pipe_width));
    }
    for window in state.pipe_pairs.windows(2) {
        assert!(window[0].spawn_tick < window[1].spawn_tick);
        assert!(window[0].x < window[1].x);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn random_inputs_preserve_invariants(ops in prop::collection::vec(engine_op_strategy(), 1..60)) {
        let config = GameConfig::default();
        let mut engine = SimulationEngine::new(config.clone()).unwrap();

        for op in ops {
            match op {
                EngineOp::Tick(n) => {
                    for _ in 0..n {
                        let before_phase = engine.phase();
                        let before: GameState = engine.state().clone();
                        let after = engine.tick().clone();

                        prop_assert_eq!(after.tick_count, before.tick_count + 1);
                        if before_phase == GamePhase::Terminal {
                            prop_assert_eq!(after.bird, before.bird);
                            prop_assert_eq!(&after.pipe_pairs, &before.pipe_pairs);
                            prop_assert_eq!(after.score, before.score);
                        }
                        prop_assert!(after.score >= before.score);
                        assert_snapshot_invariants(&engine, &config);
                    }
                }
                EngineOp::Jump => {
                    engine.jump();
                    assert_snapshot_invariants(&engine, &config);
                }
                EngineOp::Reset => {
                    engine.reset();
                    prop_assert_eq!(engine.phase(), GamePhase::Running);
                    prop_assert_eq!(engine.state(), &GameState::initial(&config));
                }
            }
        }
    }

    #[test]
    fn valid_configs_generate_valid_pipes(config in valid_config_strategy()) {
        prop_assert!(config.validate().is_ok(), "{:?}", config.validate());
        let mut engine = SimulationEngine::new(config.clone()).unwrap();
        for _ in 0..300 {
            engine.tick();
            assert_snapshot_invariants(&engine, &config);
        }
    }

    #[test]
    fn oversized_holes_are_rejected(extra in 1u32..500, min_pipe in 0u32..200) {
        let base = GameConfig::default();
        let playable = base.screen_height - base.ground_height;
        let config = GameConfig {
            min_pipe_height: min_pipe,
            hole_height: (playable + extra).saturating_sub(2 * min_pipe),
            ..base
        };
        prop_assume!(config.hole_height + 2 * min_pipe > playable);
        prop_assert!(SimulationEngine::new(config).is_err());
    }

    #[test]
    fn is_game_over_is_stable(ticks in 0usize..200, jumps in prop::collection::vec(0usize..200, 0..20)) {
        let mut engine = SimulationEngine::new(GameConfig::default()).unwrap();
        for tick in 0..ticks {
            if jumps.contains(&tick) {
                engine.jump();
            }
            engine.tick();
        }
        prop_assert_eq!(engine.is_game_over(), engine.is_game_over());
    }
}
