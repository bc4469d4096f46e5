//! Property tests for the invariants that hold for any dice and any seed

use montecarlo_core_rs::{Analyzer, DiceRng, Die, Game, ResultForm};
use proptest::prelude::*;

/// 1..=6 distinct faces drawn from 0..20
fn faces_strategy() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::btree_set(0u8..20, 1..=6).prop_map(|s| s.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_new_die_has_unit_weights(faces in faces_strategy()) {
        let die = Die::new(faces.clone()).unwrap();
        prop_assert_eq!(die.weights().len(), faces.len());
        prop_assert!(die.weights().iter().all(|&w| w == 1.0));
    }

    #[test]
    fn prop_roll_length_and_domain(faces in faces_strategy(), n in 1usize..200, seed in any::<u64>()) {
        let die = Die::new(faces).unwrap();
        let mut rng = DiceRng::new(seed);
        let rolls = die.roll(n, &mut rng).unwrap();
        prop_assert_eq!(rolls.len(), n);
        prop_assert!(rolls.iter().all(|f| die.faces().contains(f)));
    }

    #[test]
    fn prop_zero_weight_face_excluded(faces in faces_strategy(), seed in any::<u64>()) {
        prop_assume!(faces.len() > 1);
        let mut die = Die::new(faces.clone()).unwrap();
        die.change_weight(&faces[0], 0.0).unwrap();
        let mut rng = DiceRng::new(seed);
        let rolls = die.roll(300, &mut rng).unwrap();
        prop_assert!(!rolls.contains(&faces[0]));
    }

    #[test]
    fn prop_game_and_analysis_shapes(
        faces in faces_strategy(),
        num_dice in 1usize..5,
        n in 1usize..60,
        seed in any::<u64>(),
    ) {
        let die = Die::new(faces.clone()).unwrap();
        let mut game = Game::with_seed(vec![die; num_dice], seed).unwrap();
        game.play(n).unwrap();

        prop_assert_eq!(game.results(ResultForm::Wide).unwrap().shape(), (n, num_dice));
        prop_assert_eq!(game.results(ResultForm::Narrow).unwrap().shape(), (n * num_dice, 1));

        let wide = game.wide_results().unwrap().clone();
        let mut analyzer = Analyzer::new(&game);

        let jackpots = analyzer.jackpot().unwrap();
        let equal_rows = wide.rows().iter().filter(|r| r.iter().all(|f| *f == r[0])).count();
        prop_assert_eq!(jackpots, equal_rows);
        prop_assert_eq!(analyzer.jackpot_results().unwrap().shape(), (jackpots, num_dice + 1));
        if num_dice == 1 {
            prop_assert_eq!(jackpots, n);
        }

        let combos = analyzer.combo().unwrap();
        prop_assert_eq!(analyzer.combo_results().unwrap().shape(), (combos, 1));
        prop_assert_eq!(analyzer.combo_results().unwrap().total(), n);

        let counts = analyzer.face_counts_per_roll().unwrap();
        prop_assert_eq!(counts.shape().0, n);
        prop_assert!(counts.shape().1 <= faces.len());
        for row in counts.rows() {
            prop_assert_eq!(row.iter().sum::<usize>(), num_dice);
        }
    }
}
