//! Integration tests for the engine lifecycle

use proptest::prelude::*;
use tui_blockfall::core::{EngineConfig, GameState, TickOutcome};
use tui_blockfall::types::{GameAction, GamePhase, Point};

/// Slightly more than one drop interval, so every call steps gravity once.
fn step(state: &GameState) -> f32 {
    state.drop_interval() + 0.001
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(10, 20, 12345);
    assert_eq!(state.phase(), GamePhase::MainMenu);

    assert!(state.apply_action(GameAction::Start));
    assert_eq!(state.phase(), GamePhase::Playing);

    assert!(state.apply_action(GameAction::Pause));
    assert_eq!(state.phase(), GamePhase::Paused);
    assert!(!state.apply_action(GameAction::MoveLeft));

    assert!(state.apply_action(GameAction::Pause));
    assert!(state.apply_action(GameAction::Reset));
    assert_eq!(state.phase(), GamePhase::Playing);
    assert_eq!(state.score(), 0);
}

#[test]
fn test_seeded_run_locks_piece_and_promotes_next() {
    let mut state = GameState::new(10, 20, 12345);
    state.start();

    for _ in 0..100 {
        let cells = *state.current_piece();
        let color = state.piece_color();
        let next_shape = state.next_shape();

        match state.tick(step(&state)) {
            TickOutcome::Locked(event) => {
                assert_eq!(event.lines_cleared(), 0);
                for p in cells {
                    assert_eq!(state.field().get(p.x, p.y), Some(color));
                }
                assert_eq!(state.current_shape(), next_shape);
                return;
            }
            TickOutcome::Fell => {}
            other => panic!("unexpected outcome {other:?}"),
        }
    }
    panic!("piece never locked");
}

#[test]
fn test_same_seed_same_game() {
    let mut a = GameState::new(10, 20, 777);
    let mut b = GameState::new(10, 20, 777);
    a.start();
    b.start();

    for i in 0..200 {
        let action = if i % 3 == 0 {
            GameAction::Rotate
        } else {
            GameAction::MoveRight
        };
        a.apply_action(action);
        b.apply_action(action);
        a.tick(0.31);
        b.tick(0.31);
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_menu_tick_never_mutates() {
    let mut state = GameState::new(10, 20, 5);
    let before = state.snapshot();

    for _ in 0..50 {
        assert_eq!(state.tick(1.0), TickOutcome::Idle);
    }
    assert_eq!(state.snapshot(), before);
}

#[test]
fn test_spawn_collision_ends_game() {
    let mut state = GameState::new(10, 20, 9);
    state.start();
    for x in 0..10 {
        state.field_for_setup().set(x, 0, 1);
        state.field_for_setup().set(x, 1, 1);
    }

    assert_eq!(state.tick(step(&state)), TickOutcome::GameOver);
    assert_eq!(state.phase(), GamePhase::GameOver);
    assert_eq!(state.score(), 0);

    // Nothing moves once the game is over.
    assert_eq!(state.tick(1.0), TickOutcome::Idle);
    assert!(state.apply_action(GameAction::Reset));
    assert!(state.field().cells().iter().all(|&c| c == 0));
}

#[test]
fn test_four_line_clear_scores_700() {
    let mut state = GameState::new(10, 20, 3);
    state.start();
    for y in 16..20 {
        for x in 1..10 {
            state.field_for_setup().set(x, y, 2);
        }
    }
    let column = [16, 17, 18, 19].map(|y| Point::new(0, y));
    state.set_current_piece(0, 5, column);

    match state.tick(step(&state)) {
        TickOutcome::Locked(event) => {
            assert_eq!(event.lines_cleared(), 4);
            assert_eq!(event.score_delta, 700);
        }
        other => panic!("expected a lock, got {other:?}"),
    }
    assert_eq!(state.score(), 700);
    assert_eq!(state.lines(), 4);
    assert!(state.field().cells().iter().all(|&c| c == 0));
}

#[test]
fn test_soft_drop_resets_after_one_step() {
    let mut state = GameState::new(10, 20, 4);
    state.start();

    state.apply_action(GameAction::SoftDrop);
    assert!(state.drop_interval() < 0.3);
    assert_eq!(state.tick(0.02), TickOutcome::Fell);
    assert_eq!(state.drop_interval(), 0.3);
}

#[test]
fn test_config_driven_engine() {
    let config: EngineConfig =
        serde_json::from_str(r#"{ "field_width": 8, "field_height": 12, "seed": 42 }"#).unwrap();
    let state = GameState::from_config(&config).unwrap();

    assert_eq!(state.field_width(), 8);
    assert_eq!(state.field_height(), 12);
    assert_eq!(state.seed(), 42);

    let bad = EngineConfig {
        field_height: 0,
        ..EngineConfig::default()
    };
    assert!(GameState::from_config(&bad).is_err());
}

fn action_strategy() -> impl Strategy<Value = Option<GameAction>> {
    prop_oneof![
        Just(Some(GameAction::MoveLeft)),
        Just(Some(GameAction::MoveRight)),
        Just(Some(GameAction::Rotate)),
        Just(Some(GameAction::SoftDrop)),
        // Gravity step
        Just(None),
    ]
}

proptest! {
    #[test]
    fn intents_leave_piece_valid_or_untouched(
        seed in any::<u32>(),
        actions in prop::collection::vec(action_strategy(), 1..150),
    ) {
        let mut state = GameState::new(10, 20, seed);
        state.start();

        for action in actions {
            let Some(action) = action else {
                state.tick(step(&state));
                continue;
            };
            let before = *state.current_piece();
            if state.apply_action(action) {
                prop_assert!(!state.is_collided());
            } else {
                prop_assert_eq!(*state.current_piece(), before);
            }
        }
    }
}
