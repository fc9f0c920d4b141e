use super::{dice, fixture_cards};
use crate::semantic::{Card, Die, Token};
use crate::{Engine, OnsetError, SolutionStats};

#[test]
fn test_both_orderings_are_distinct_solutions() {
    let engine = Engine::new();
    let stats = engine
        .count_all_solutions(&fixture_cards(), &dice(&["green", "∪", "gold"]), 3, true)
        .unwrap();
    assert_eq!(
        stats,
        SolutionStats {
            total_solutions: 2,
            shortest_cube_count: Some(3),
            longest_cube_count: Some(3),
        }
    );
}

#[test]
fn test_identical_dice_do_not_double_count() {
    let engine = Engine::new();
    let pool = dice(&["green", "green", "′"]);
    let stats = engine
        .count_all_solutions(&fixture_cards(), &pool, 6, true)
        .unwrap();
    assert_eq!(stats.total_solutions, 1);

    let solutions = engine.all_solutions(&fixture_cards(), &pool, 6).unwrap();
    assert_eq!(solutions.len(), 1);
    assert_eq!(solutions[0].canonical(), "green ′");
}

#[test]
fn test_shortest_solution_uses_fewest_dice() {
    let engine = Engine::new();
    let solution = engine
        .find_shortest_solution(&fixture_cards(), &dice(&["red", "′", "blue"]), 7)
        .unwrap()
        .unwrap();
    assert_eq!(solution.cube_count(), 2);
    assert_eq!(solution.bottom_row(), "red ′");
    assert!(!solution.has_restriction());
    assert_eq!(solution.top_row(), None);
}

#[test]
fn test_complement_die_can_be_excluded() {
    let engine = Engine::new();
    let cards = fixture_cards();
    let pool = dice(&["red", "′", "blue"]);

    let with = engine.count_all_solutions(&cards, &pool, 7, true).unwrap();
    assert_eq!(with.total_solutions, 1);
    assert_eq!(with.shortest_cube_count, Some(2));

    let without = engine.count_all_solutions(&cards, &pool, 7, false).unwrap();
    assert_eq!(without, SolutionStats::default());

    assert!(engine.complement_is_required(&cards, &pool, 7).unwrap());
}

#[test]
fn test_complement_not_required_without_complement_die() {
    let engine = Engine::new();
    let pool = dice(&["green", "∪", "gold"]);
    assert!(!engine
        .complement_is_required(&fixture_cards(), &pool, 3)
        .unwrap());
}

#[test]
fn test_restricted_solution_is_found() {
    let engine = Engine::new();
    let cards = fixture_cards();
    let pool = dice(&["red", "⊆", "U", "green"]);

    let stats = engine.count_all_solutions(&cards, &pool, 2, true).unwrap();
    assert_eq!(stats.total_solutions, 1);
    assert_eq!(stats.shortest_cube_count, Some(4));

    let solution = engine
        .find_shortest_solution(&cards, &pool, 2)
        .unwrap()
        .unwrap();
    assert!(solution.has_restriction());
    assert_eq!(solution.canonical(), "red ⊆ U | green");
    assert_eq!(solution.top_row().as_deref(), Some("red ⊆ U"));
    assert_eq!(solution.bottom_row(), "green");
}

#[test]
fn test_equal_restriction_on_identical_dice() {
    let engine = Engine::new();
    let cards = fixture_cards();
    let pool = dice(&["green", "=", "green", "red"]);

    let solutions = engine.all_solutions(&cards, &pool, 1).unwrap();
    assert_eq!(solutions.len(), 1);
    assert_eq!(solutions[0].canonical(), "green = green | red");

    assert!(engine.has_possible_solution(&cards, &pool, 1).unwrap());
    assert!(!engine.has_possible_solution(&cards, &pool, 5).unwrap());
}

#[test]
fn test_single_die_is_never_a_solution() {
    let engine = Engine::new();
    // "green" alone matches two cards, but arrangements use at least two dice
    let pool = dice(&["green", "blue"]);
    assert!(!engine
        .has_possible_solution(&fixture_cards(), &pool, 2)
        .unwrap());
    assert_eq!(
        engine
            .find_shortest_solution(&fixture_cards(), &pool, 2)
            .unwrap(),
        None
    );
}

#[test]
fn test_every_reported_solution_reaches_goal() {
    let engine = Engine::new();
    let cards = fixture_cards();
    let pool = dice(&["blue", "∪", "green", "−", "gold", "′"]);

    for goal in 0..=8 {
        let solutions = engine.all_solutions(&cards, &pool, goal).unwrap();
        let stats = engine.count_all_solutions(&cards, &pool, goal, true).unwrap();
        assert_eq!(solutions.len(), stats.total_solutions);
        assert_eq!(
            engine.has_possible_solution(&cards, &pool, goal).unwrap(),
            !solutions.is_empty()
        );

        for solution in &solutions {
            let matched = engine
                .evaluate_expression(&solution.set_name_tokens(), &cards)
                .unwrap();
            assert_eq!(matched.len(), goal, "{}", solution.canonical());
        }
    }
}

#[test]
fn test_flags_do_not_change_the_count() {
    let engine = Engine::new();
    let cards = fixture_cards();
    let plain = dice(&["green", "∪", "gold"]);
    let mut flagged = plain.clone();
    flagged[1] = Die::new(Token::Operator(crate::SetOperator::Union))
        .with_flag(crate::DieFlag::Required);

    assert_eq!(
        engine.count_all_solutions(&cards, &plain, 3, true).unwrap(),
        engine.count_all_solutions(&cards, &flagged, 3, true).unwrap()
    );
}

#[test]
fn test_wrong_card_count_is_malformed() {
    let engine = Engine::new();
    let cards = vec![Card::default(); 5];
    let err = engine
        .count_all_solutions(&cards, &dice(&["red", "′"]), 1, true)
        .unwrap_err();
    assert!(matches!(err, OnsetError::MalformedInput(_)));
}

#[test]
fn test_dice_pool_bounds_are_enforced() {
    let engine = Engine::new();
    let cards = fixture_cards();

    let too_few = engine.find_shortest_solution(&cards, &dice(&["red"]), 1);
    assert!(matches!(too_few, Err(OnsetError::MalformedInput(_))));

    let too_many = dice(&["red", "blue", "green", "gold", "∪", "∩", "−", "′", "U"]);
    let result = engine.has_possible_solution(&cards, &too_many, 1);
    assert!(matches!(result, Err(OnsetError::MalformedInput(_))));
}
