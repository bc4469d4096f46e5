//! Tests for Die
//!
//! Covers construction, weight changes (including string coercion),
//! rolling and the snapshot view.

use montecarlo_core_rs::{DiceRng, Die, MonteCarloError};

fn abcd() -> Die<&'static str> {
    Die::new(vec!["a", "b", "c", "d"]).unwrap()
}

#[test]
fn test_new_die_weights_default_to_one() {
    let die = abcd();
    assert_eq!(die.weights(), &[1.0, 1.0, 1.0, 1.0]);
    assert_eq!(die.num_faces(), 4);
}

#[test]
fn test_empty_faces_rejected() {
    let result = Die::<i32>::new(vec![]);
    assert!(matches!(result, Err(MonteCarloError::InvalidArgument(_))));
}

#[test]
fn test_duplicate_faces_rejected() {
    let result = Die::new(vec!["a", "b", "a"]);
    assert!(matches!(result, Err(MonteCarloError::InvalidArgument(_))));
}

#[test]
fn test_change_weight_unknown_face() {
    let mut die = abcd();
    let result = die.change_weight(&"z", 2.5);
    assert!(matches!(result, Err(MonteCarloError::UnknownFace(_))));
    assert_eq!(die.weights(), &[1.0; 4]);
}

#[test]
fn test_change_weight_non_numeric_string() {
    let mut die = abcd();
    let result = die.change_weight(&"a", "b");
    assert!(matches!(result, Err(MonteCarloError::InvalidWeight(_))));
    assert_eq!(die.weight(&"a"), Some(1.0));
}

#[test]
fn test_change_weight_numeric_string_coerced() {
    let mut die = abcd();
    die.change_weight(&"a", "2").unwrap();
    assert_eq!(die.weight(&"a"), Some(2.0));

    die.change_weight(&"b", String::from("0.25")).unwrap();
    assert_eq!(die.weight(&"b"), Some(0.25));
}

#[test]
fn test_change_weight_number() {
    let mut die = abcd();
    die.change_weight(&"a", 2.5).unwrap();
    assert_eq!(die.snapshot()[0], ("a", 2.5));
    // Other faces untouched
    assert_eq!(die.weight(&"b"), Some(1.0));
    assert_eq!(die.weight(&"c"), Some(1.0));
}

#[test]
fn test_change_weight_negative_or_infinite_rejected() {
    let mut die = abcd();
    assert!(matches!(
        die.change_weight(&"a", -1.0),
        Err(MonteCarloError::InvalidWeight(_))
    ));
    assert!(matches!(
        die.change_weight(&"a", f64::INFINITY),
        Err(MonteCarloError::InvalidWeight(_))
    ));
    assert!(matches!(
        die.change_weight(&"a", "NaN"),
        Err(MonteCarloError::InvalidWeight(_))
    ));
}

#[test]
fn test_roll_returns_requested_count() {
    let die = abcd();
    let mut rng = DiceRng::new(12345);
    let rolls = die.roll(5, &mut rng).unwrap();
    assert_eq!(rolls.len(), 5);
    assert!(rolls.iter().all(|f| die.faces().contains(f)));
}

#[test]
fn test_roll_zero_rejected() {
    let die = abcd();
    let mut rng = DiceRng::new(1);
    assert!(matches!(
        die.roll(0, &mut rng),
        Err(MonteCarloError::InvalidArgument(_))
    ));
}

#[test]
fn test_zero_weight_face_never_rolled() {
    let mut die = abcd();
    die.change_weight(&"c", 0.0).unwrap();
    let mut rng = DiceRng::new(777);
    let rolls = die.roll(10_000, &mut rng).unwrap();
    assert!(!rolls.contains(&"c"));
    assert!(rolls.contains(&"a"));
}

#[test]
fn test_all_zero_weights_cannot_roll() {
    let mut die = Die::new(vec![1, 2]).unwrap();
    die.change_weight(&1, 0).unwrap();
    die.change_weight(&2, 0).unwrap();
    let mut rng = DiceRng::new(1);
    assert!(matches!(
        die.roll(1, &mut rng),
        Err(MonteCarloError::InvalidWeight(_))
    ));
}

#[test]
fn test_heavy_face_drawn_more_often() {
    let mut die = Die::new(vec![1, 2]).unwrap();
    die.change_weight(&2, 4.0).unwrap();
    let mut rng = DiceRng::new(4242);
    let rolls = die.roll(10_000, &mut rng).unwrap();
    let twos = rolls.iter().filter(|&&f| f == 2).count() as f64 / 10_000.0;
    assert!((twos - 0.8).abs() < 0.03, "share of face 2 was {}", twos);
}

#[test]
fn test_roll_once_returns_a_face() {
    let die = Die::new(vec!['x']).unwrap();
    let mut rng = DiceRng::new(9);
    assert_eq!(die.roll_once(&mut rng).unwrap(), 'x');
}

#[test]
fn test_snapshot_shape_and_order() {
    let die = abcd();
    let snapshot = die.snapshot();
    assert_eq!(snapshot.len(), 4);
    let faces: Vec<&str> = snapshot.iter().map(|(f, _)| *f).collect();
    assert_eq!(faces, vec!["a", "b", "c", "d"]);
}

#[test]
fn test_weights_near_max_still_roll() {
    let mut die = Die::new(vec![1, 2]).unwrap();
    die.change_weight(&1, f64::MAX).unwrap();
    die.change_weight(&2, f64::MAX).unwrap();
    assert!(die.total_weight().is_infinite());

    let mut rng = DiceRng::new(3);
    let rolls = die.roll(1000, &mut rng).unwrap();
    assert_eq!(rolls.len(), 1000);
    assert!(rolls.contains(&1) && rolls.contains(&2));
}

#[test]
fn test_deserialize_valid_die() {
    let die: Die<i64> = serde_json::from_str(r#"{"faces": [1, 2, 3], "weights": [1.0, 0.0, 2.5]}"#)
        .unwrap();
    assert_eq!(die.weight(&3), Some(2.5));
    assert_eq!(die.weight(&2), Some(0.0));
}

#[test]
fn test_deserialize_rejects_invalid_die() {
    let duplicate = serde_json::from_str::<Die<i64>>(r#"{"faces": [1, 1], "weights": [1.0, 1.0]}"#);
    assert!(duplicate.is_err());

    let negative = serde_json::from_str::<Die<i64>>(r#"{"faces": [1, 2], "weights": [-3.0, 1.0]}"#);
    assert!(negative.is_err());

    let empty = serde_json::from_str::<Die<i64>>(r#"{"faces": [], "weights": []}"#);
    assert!(empty.is_err());

    let mismatched = serde_json::from_str::<Die<i64>>(r#"{"faces": [1, 2], "weights": [1.0]}"#);
    assert!(mismatched.is_err());
}

#[test]
fn test_serialized_die_deserializes_back() {
    let mut die = Die::new(vec!["a".to_string(), "b".to_string()]).unwrap();
    die.change_weight(&"b".to_string(), 4.0).unwrap();
    let json = serde_json::to_string(&die).unwrap();
    let restored: Die<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, die);
}
