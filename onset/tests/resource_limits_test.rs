use onset::{Card, Die, Engine, OnsetError, ResourceLimits, Token};

fn cards(count: usize) -> Vec<Card> {
    vec![Card::default(); count]
}

fn dice(count: usize) -> Vec<Die> {
    vec![Die::new(Token::Complement); count]
}

#[test]
fn test_default_limits() {
    let limits = ResourceLimits::new();
    assert_eq!(limits.card_count, 8);
    assert_eq!(limits.min_dice, 2);
    assert_eq!(limits.max_dice, 8);
    assert_eq!(limits.max_generation_attempts, 500);
    assert_eq!(limits.max_generation_time_ms, 30_000);
}

#[test]
fn test_check_shape_bounds() {
    let limits = ResourceLimits::default();
    assert!(limits.check_shape(8, 2).is_ok());
    assert!(limits.check_shape(8, 8).is_ok());
    assert!(matches!(
        limits.check_shape(8, 1),
        Err(OnsetError::MalformedInput(_))
    ));
    assert!(matches!(
        limits.check_shape(8, 9),
        Err(OnsetError::MalformedInput(_))
    ));
    assert!(matches!(
        limits.check_shape(7, 4),
        Err(OnsetError::MalformedInput(_))
    ));
}

#[test]
fn test_search_entry_points_enforce_limits() {
    let engine = Engine::new();
    assert!(engine.find_shortest_solution(&cards(8), &dice(1), 0).is_err());
    assert!(engine.count_all_solutions(&cards(8), &dice(9), 0, true).is_err());
    assert!(engine.has_possible_solution(&cards(9), &dice(3), 0).is_err());
    assert!(engine.complement_is_required(&cards(8), &dice(0), 0).is_err());
}

#[test]
fn test_custom_card_count() {
    let limits = ResourceLimits {
        card_count: 4,
        ..ResourceLimits::default()
    };
    let engine = Engine::with_limits(limits);
    // Complement dice alone never form a row
    assert!(!engine.has_possible_solution(&cards(4), &dice(3), 0).unwrap());
    assert!(engine.has_possible_solution(&cards(8), &dice(3), 0).is_err());
}

#[test]
fn test_error_messages() {
    let err = ResourceLimits::default().check_shape(8, 1).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Malformed input: dice pool has 1 dice, at least 2 required"
    );
}
