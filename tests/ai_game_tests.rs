use std::collections::HashSet;

use broadside::{Board, ShotResult, TargetingStrategy};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_strategy_clears_random_board() {
    let mut rng = SmallRng::seed_from_u64(123);
    let mut board = Board::new();
    board.place_fleet_randomly(&mut rng).unwrap();
    let mut ai = TargetingStrategy::new(&mut rng);

    let mut turns = 0;
    while !ai.has_won() {
        turns += 1;
        ai.take_shot(&mut board).unwrap();
        if turns > 100 {
            panic!("game took too many turns");
        }
    }
    assert!(board.all_sunk());
    assert_eq!(board.shots_fired(), turns);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn strategy_terminates_without_repeats(board_seed in any::<u64>(), ai_seed in any::<u64>()) {
        let mut board = Board::new();
        board.place_fleet_randomly(&mut SmallRng::seed_from_u64(board_seed)).unwrap();
        let mut ai = TargetingStrategy::new(&mut SmallRng::seed_from_u64(ai_seed));

        let mut seen = HashSet::new();
        let mut calls = 0;
        while !ai.has_won() {
            calls += 1;
            prop_assert!(calls <= 100);
            let outcome = ai.take_shot(&mut board).unwrap();
            prop_assert_ne!(outcome.result, ShotResult::AlreadyShot);
            prop_assert!(seen.insert(outcome.coordinate), "fired twice at {}", outcome.coordinate);
        }
        prop_assert!(board.all_sunk());
        prop_assert_eq!(ai.pending().count(), 0);
    }
}
