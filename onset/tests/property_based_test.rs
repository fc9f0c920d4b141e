use onset::{Card, CardSet, Color, Die, Engine, Token, Validator};
use proptest::prelude::*;

/// Straight-line reading of the row grammar:
/// operand, optional complement, then either the end or an operator.
fn reference_walker(tokens: &[Token]) -> bool {
    let mut i = 0;
    loop {
        match tokens.get(i) {
            Some(t) if t.is_operand() => i += 1,
            _ => return false,
        }
        if tokens.get(i) == Some(&Token::Complement) {
            i += 1;
        }
        match tokens.get(i) {
            None => return true,
            Some(Token::Operator(_)) => i += 1,
            Some(_) => return false,
        }
    }
}

fn token_strategy() -> impl Strategy<Value = Token> {
    let all = Token::all();
    (0..all.len()).prop_map(move |i| all[i])
}

fn operand_strategy() -> impl Strategy<Value = Token> {
    token_strategy().prop_filter("operand", |t| t.is_operand())
}

/// Eight cards, each a random subset of the palette
fn cards_strategy() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(0u8..16, 8).prop_map(|masks| {
        masks
            .into_iter()
            .map(|mask| {
                Card::new(
                    Color::ALL
                        .iter()
                        .enumerate()
                        .filter(|(bit, _)| mask & (1 << *bit) != 0)
                        .map(|(_, c)| *c),
                )
            })
            .collect()
    })
}

fn eval(engine: &Engine, tokens: &[Token], cards: &[Card]) -> CardSet {
    engine.evaluate_expression(tokens, cards).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_validator_agrees_with_reference_walker(
        tokens in prop::collection::vec(token_strategy(), 0..9)
    ) {
        prop_assert_eq!(
            Validator::new().is_valid_expression(&tokens),
            reference_walker(&tokens)
        );
    }

    #[test]
    fn prop_restriction_needs_valid_sides(
        left in prop::collection::vec(token_strategy(), 0..5),
        right in prop::collection::vec(token_strategy(), 0..5),
        subset in any::<bool>()
    ) {
        let comparator = if subset { "⊆" } else { "=" };
        let mut row = left.clone();
        row.push(comparator.parse().unwrap());
        row.extend(right.iter().copied());

        let expected = reference_walker(&left) && reference_walker(&right);
        prop_assert_eq!(Validator::new().is_valid_restriction(&row), expected);
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_union_and_intersection_commute(
        cards in cards_strategy(),
        a in operand_strategy(),
        b in operand_strategy(),
        a_complemented in any::<bool>()
    ) {
        let engine = Engine::new();
        let mut left = vec![a];
        if a_complemented {
            left.push(Token::Complement);
        }
        for op in ["∪", "∩"] {
            let op: Token = op.parse().unwrap();
            let mut forward = left.clone();
            forward.extend([op, b]);
            let mut backward = vec![b, op];
            backward.extend(left.iter().copied());

            prop_assert_eq!(
                eval(&engine, &forward, &cards),
                eval(&engine, &backward, &cards)
            );
        }
    }

    #[test]
    fn prop_difference_removes_right_side(
        cards in cards_strategy(),
        a in operand_strategy(),
        b in operand_strategy()
    ) {
        let engine = Engine::new();
        let minus: Token = "−".parse().unwrap();
        let left = eval(&engine, &[a], &cards);
        let right = eval(&engine, &[b], &cards);
        let difference = eval(&engine, &[a, minus, b], &cards);

        prop_assert!(difference.is_subset_of(&left));
        prop_assert!(difference.intersection(right).is_empty());
        prop_assert_eq!(difference.union(left.intersection(right)), left);
    }

    #[test]
    fn prop_complement_matches_cards_without_color(
        cards in cards_strategy(),
        index in 0usize..4
    ) {
        let engine = Engine::new();
        let color = Color::ALL[index];
        let matched = eval(&engine, &[Token::Color(color), Token::Complement], &cards);
        for (i, card) in cards.iter().enumerate() {
            prop_assert_eq!(matched.contains(i), !card.has(color));
        }

        let universe = CardSet::universe(cards.len());
        let plain = eval(&engine, &[Token::Color(color)], &cards);
        prop_assert_eq!(matched.complement(universe), plain);
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_shortest_agrees_with_count(
        cards in cards_strategy(),
        pool in prop::collection::vec(token_strategy(), 2..6),
        goal in 0usize..9
    ) {
        let engine = Engine::new();
        let dice: Vec<Die> = pool.into_iter().map(Die::new).collect();

        let stats = engine.count_all_solutions(&cards, &dice, goal, true).unwrap();
        let shortest = engine.find_shortest_solution(&cards, &dice, goal).unwrap();
        let possible = engine.has_possible_solution(&cards, &dice, goal).unwrap();

        prop_assert_eq!(stats.total_solutions == 0, shortest.is_none());
        prop_assert_eq!(possible, shortest.is_some());
        prop_assert_eq!(stats.shortest_cube_count, shortest.map(|s| s.cube_count()));
        if let (Some(short), Some(long)) = (stats.shortest_cube_count, stats.longest_cube_count) {
            prop_assert!(short <= long);
            prop_assert!(long <= dice.len());
        }
    }
}
