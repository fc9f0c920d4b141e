use onset::serializers::{decode_record, encode_record, from_json, to_json};
use onset::{Engine, GeneratorConfig, Puzzle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

#[test]
fn test_generated_batch_verifies() {
    let engine = Engine::new();
    let mut rng = StdRng::seed_from_u64(20240611);
    let report = engine
        .generate(5, GeneratorConfig::default(), &mut rng)
        .unwrap();

    assert_eq!(report.requested, 5);
    assert_eq!(report.puzzles.len() + report.shortfall, report.requested);
    assert!(report.attempts >= report.puzzles.len());
    assert!(!report.puzzles.is_empty());

    for puzzle in &report.puzzles {
        engine.verify_puzzle(puzzle).unwrap();
    }
}

#[test]
fn test_generated_solution_fits_statistics() {
    let engine = Engine::new();
    let mut rng = StdRng::seed_from_u64(31337);
    let report = engine
        .generate(4, GeneratorConfig::default(), &mut rng)
        .unwrap();

    for puzzle in &report.puzzles {
        let shortest = engine
            .find_shortest_solution(&puzzle.cards, &puzzle.dice, puzzle.goal)
            .unwrap()
            .expect("generated puzzle must be solvable");

        let stats = puzzle.stats;
        assert_eq!(stats.shortest_cube_count, Some(shortest.cube_count()));
        let cubes = puzzle.solution.cube_count();
        assert!(Some(cubes) >= stats.shortest_cube_count);
        assert!(Some(cubes) <= stats.longest_cube_count);
    }
}

#[test]
fn test_batch_has_no_repeated_goal_and_solution() {
    let engine = Engine::new();
    let mut rng = StdRng::seed_from_u64(5);
    let report = engine
        .generate(8, GeneratorConfig::default(), &mut rng)
        .unwrap();

    let mut seen = HashSet::new();
    for puzzle in &report.puzzles {
        assert!(seen.insert((puzzle.goal, puzzle.solution.canonical())));
    }
}

#[test]
fn test_same_seed_same_puzzles() {
    let engine = Engine::new();
    let records = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        engine
            .generate(3, GeneratorConfig::default(), &mut rng)
            .unwrap()
            .puzzles
            .iter()
            .enumerate()
            .map(|(i, p)| p.to_record(i as u64))
            .collect::<Vec<_>>()
    };

    assert_eq!(records(99), records(99));
}

#[test]
fn test_record_survives_storage() {
    let engine = Engine::new();
    let mut rng = StdRng::seed_from_u64(4);
    let report = engine
        .generate(3, GeneratorConfig::default(), &mut rng)
        .unwrap();

    for (id, puzzle) in report.puzzles.iter().enumerate() {
        let record = puzzle.to_record(id as u64);
        let text = to_json(&record).unwrap();
        let encoded = encode_record(&from_json(text.as_bytes()).unwrap()).unwrap();
        let decoded = decode_record(&encoded).unwrap();
        assert_eq!(decoded, record);

        let restored = Puzzle::from_record(&decoded).unwrap();
        assert_eq!(restored.solution.canonical(), puzzle.solution.canonical());
        assert_eq!(restored.stats, puzzle.stats);
        engine.verify_puzzle(&restored).unwrap();
    }
}

#[test]
fn test_narrow_goal_window() {
    let engine = Engine::new();
    let config = GeneratorConfig {
        min_goal: 2,
        max_goal: 2,
        max_solution_count: Some(20),
        ..GeneratorConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(8);
    let report = engine.generate(3, config, &mut rng).unwrap();

    for puzzle in &report.puzzles {
        assert_eq!(puzzle.goal, 2);
        assert!(puzzle.stats.total_solutions <= 20);
        engine.verify_puzzle(puzzle).unwrap();
    }
}
