//! Tests for Game: playing and reading results in both layouts

use montecarlo_core_rs::{Die, Game, GameResults, MonteCarloError, ResultForm};

/// Two four-sided dice, the second with face "b" weighted to 2.0
fn create_test_game() -> Game<&'static str> {
    let die1 = Die::new(vec!["a", "b", "c", "d"]).unwrap();
    let mut die2 = Die::new(vec!["a", "b", "c", "d"]).unwrap();
    die2.change_weight(&"b", 2.0).unwrap();
    Game::with_seed(vec![die1, die2], 12345).unwrap()
}

#[test]
fn test_play_game_wide_shape() {
    let mut game = create_test_game();
    game.play(20).unwrap();
    assert_eq!(game.wide_results().unwrap().shape(), (20, 2));
}

#[test]
fn test_show_results_wide() {
    let mut game = create_test_game();
    game.play(20).unwrap();
    let results = game.results(ResultForm::Wide).unwrap();
    assert_eq!(results.form(), ResultForm::Wide);
    assert_eq!(results.shape(), (20, 2));
}

#[test]
fn test_show_results_narrow() {
    let mut game = create_test_game();
    game.play(20).unwrap();
    let results = game.results(ResultForm::Narrow).unwrap();
    assert_eq!(results.shape(), (40, 1));
}

#[test]
fn test_narrow_matches_wide_cells() {
    let mut game = create_test_game();
    game.play(10).unwrap();

    let wide = game.wide_results().unwrap();
    let narrow = game.narrow_results().unwrap();
    for (i, row) in narrow.rows().iter().enumerate() {
        assert_eq!(row.roll, i / 2);
        assert_eq!(row.die, i % 2);
        assert_eq!(Some(&row.face), wide.get(row.roll, row.die));
    }
}

#[test]
fn test_results_before_play() {
    let game = create_test_game();
    assert!(!game.has_results());
    assert_eq!(
        game.results(ResultForm::Wide),
        Err(MonteCarloError::NoResultsYet)
    );
    assert_eq!(
        game.results(ResultForm::Narrow),
        Err(MonteCarloError::NoResultsYet)
    );
}

#[test]
fn test_unknown_form_string_rejected() {
    let result = "W".parse::<ResultForm>();
    assert!(matches!(result, Err(MonteCarloError::InvalidArgument(_))));
}

#[test]
fn test_play_zero_rolls_rejected() {
    let mut game = create_test_game();
    assert!(matches!(
        game.play(0),
        Err(MonteCarloError::InvalidArgument(_))
    ));
    assert!(!game.has_results());
}

#[test]
fn test_replay_replaces_results() {
    let mut game = create_test_game();
    game.play(20).unwrap();
    game.play(5).unwrap();
    assert_eq!(game.wide_results().unwrap().shape(), (5, 2));
}

#[test]
fn test_columns_follow_die_faces() {
    let heads = Die::new(vec!["H"]).unwrap();
    let numbers = Die::new(vec!["1", "2"]).unwrap();
    let mut game = Game::with_seed(vec![heads, numbers], 3).unwrap();
    game.play(30).unwrap();

    let wide = game.wide_results().unwrap();
    assert!(wide.column(0).unwrap().iter().all(|f| **f == "H"));
    assert!(wide
        .column(1)
        .unwrap()
        .iter()
        .all(|f| **f == "1" || **f == "2"));
}

#[test]
fn test_reweighting_between_plays() {
    let mut game = create_test_game();
    let die = game.die_mut(0).unwrap();
    for face in ["a", "b", "c"] {
        die.change_weight(&face, 0.0).unwrap();
    }
    game.play(25).unwrap();

    let wide = game.wide_results().unwrap();
    assert!(wide.column(0).unwrap().iter().all(|f| **f == "d"));
}

#[test]
fn test_results_serialize_to_json() {
    let mut game = Game::with_seed(vec![Die::new(vec![7]).unwrap()], 1).unwrap();
    game.play(2).unwrap();
    let json = serde_json::to_value(game.results(ResultForm::Wide).unwrap()).unwrap();
    assert_eq!(json["form"], "wide");
    assert_eq!(json["rows"], serde_json::json!([[7], [7]]));

    match game.results(ResultForm::Narrow).unwrap() {
        GameResults::Narrow(table) => assert_eq!(table.get(1, 0), Some(&7)),
        GameResults::Wide(_) => panic!("expected narrow results"),
    }
}
