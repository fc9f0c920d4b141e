use crate::evaluator::{EvaluationContext, Evaluator};
use crate::generator::random::RandomSource;
use crate::generator::{GenerationReport, Generator, GeneratorConfig};
use crate::semantic::{Card, CardSet, Die, Token};
use crate::{
    OnsetError, OnsetResult, OperationResult, Puzzle, ResourceLimits, Solution, SolutionSearch,
    SolutionStats, Validator,
};

/// The puzzle engine.
///
/// Single entry point for validation, evaluation, solution search and
/// generation. Every query is pure; only generation consumes randomness,
/// and only from the source the caller passes in.
pub struct Engine {
    validator: Validator,
    evaluator: Evaluator,
    limits: ResourceLimits,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            validator: Validator,
            evaluator: Evaluator::new(),
            limits: ResourceLimits::default(),
        }
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom resource limits
    pub fn with_limits(limits: ResourceLimits) -> Self {
        Self {
            validator: Validator,
            evaluator: Evaluator::new(),
            limits,
        }
    }

    /// Get the current resource limits
    pub fn limits(&self) -> &ResourceLimits {
        &self.limits
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    pub fn is_valid_syntax(&self, tokens: &[Token]) -> bool {
        self.validator.is_valid_expression(tokens)
    }

    pub fn is_valid_restriction(&self, tokens: &[Token]) -> bool {
        self.validator.is_valid_restriction(tokens)
    }

    /// Cards matched by a set-name row
    pub fn evaluate_expression(&self, tokens: &[Token], cards: &[Card]) -> OnsetResult<CardSet> {
        let context = EvaluationContext::new(cards)?;
        self.evaluator.evaluate_tokens(tokens, &context)
    }

    /// Cards matched by a set-name row under a restriction row.
    ///
    /// A restriction that does not hold yields a veto, not an error.
    pub fn evaluate_restricted(
        &self,
        set_name: &[Token],
        restriction: &[Token],
        cards: &[Card],
    ) -> OnsetResult<OperationResult> {
        let context = EvaluationContext::new(cards)?;
        self.evaluator
            .evaluate_restricted_tokens(set_name, restriction, &context)
    }

    pub fn find_shortest_solution(
        &self,
        cards: &[Card],
        dice: &[Die],
        goal: usize,
    ) -> OnsetResult<Option<Solution>> {
        self.search().find_shortest_solution(cards, dice, goal)
    }

    pub fn count_all_solutions(
        &self,
        cards: &[Card],
        dice: &[Die],
        goal: usize,
        allow_complement_die: bool,
    ) -> OnsetResult<SolutionStats> {
        self.search()
            .count_all_solutions(cards, dice, goal, allow_complement_die)
    }

    pub fn all_solutions(
        &self,
        cards: &[Card],
        dice: &[Die],
        goal: usize,
    ) -> OnsetResult<Vec<Solution>> {
        self.search().all_solutions(cards, dice, goal)
    }

    pub fn has_possible_solution(
        &self,
        cards: &[Card],
        dice: &[Die],
        goal: usize,
    ) -> OnsetResult<bool> {
        self.search().has_possible_solution(cards, dice, goal)
    }

    pub fn complement_is_required(
        &self,
        cards: &[Card],
        dice: &[Die],
        goal: usize,
    ) -> OnsetResult<bool> {
        self.search().complement_is_required(cards, dice, goal)
    }

    /// Check a puzzle against its own claims.
    ///
    /// The solution must use dice from the pool, reach the goal, and the
    /// recorded statistics must match a fresh count.
    pub fn verify_puzzle(&self, puzzle: &Puzzle) -> OnsetResult<()> {
        let mut pool: Vec<Token> = puzzle.dice.iter().map(|d| d.token).collect();
        for die in puzzle
            .solution
            .restriction_dice
            .iter()
            .chain(&puzzle.solution.set_name_dice)
        {
            match pool.iter().position(|t| *t == die.token) {
                Some(pos) => {
                    pool.swap_remove(pos);
                }
                None => {
                    return Err(OnsetError::Engine(format!(
                        "Solution uses '{}' more often than the dice pool provides",
                        die.value()
                    )))
                }
            }
        }

        let set_name = puzzle.solution.set_name_tokens();
        let matched = if puzzle.solution.has_restriction() {
            self.evaluate_restricted(
                &set_name,
                &puzzle.solution.restriction_tokens(),
                &puzzle.cards,
            )?
            .expect_value("puzzle solution")?
        } else {
            self.evaluate_expression(&set_name, &puzzle.cards)?
        };
        if matched.len() != puzzle.goal {
            return Err(OnsetError::Engine(format!(
                "Solution '{}' matches {} cards, goal is {}",
                puzzle.solution.canonical(),
                matched.len(),
                puzzle.goal
            )));
        }

        let stats = self.count_all_solutions(&puzzle.cards, &puzzle.dice, puzzle.goal, true)?;
        if stats != puzzle.stats {
            return Err(OnsetError::Engine(format!(
                "Recorded statistics {:?} differ from computed {:?}",
                puzzle.stats, stats
            )));
        }

        Ok(())
    }

    pub fn generator(&self, config: GeneratorConfig) -> Generator<'_, Evaluator> {
        Generator::new(&self.evaluator, &self.limits, config)
    }

    /// Generate up to `count` puzzles with the given randomness source
    pub fn generate<R: RandomSource>(
        &self,
        count: usize,
        config: GeneratorConfig,
        rng: &mut R,
    ) -> OnsetResult<GenerationReport> {
        self.generator(config).generate_batch(count, rng)
    }

    fn search(&self) -> SolutionSearch<'_, Evaluator> {
        SolutionSearch::new(&self.evaluator, &self.limits)
    }
}
