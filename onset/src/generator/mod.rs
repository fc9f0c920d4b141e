//! Template-driven puzzle generation
//!
//! Each attempt:
//! 1. Deals fresh cards and rolls an available dice pool
//! 2. Picks a template and fills it from the pool
//! 3. Evaluates the filled template to learn its goal
//! 4. Turns the arrangement into dice, adds distractors and counts all solutions
//! 5. Accepts or rejects the candidate
//!
//! Attempts are bounded per puzzle and batches are bounded in time, so a
//! batch can come back short but never hangs.

pub mod layout;
pub mod random;
pub mod templates;
pub mod timeout;

use crate::ast::SolutionTree;
use crate::evaluator::{EvaluationContext, SetEvaluator};
use crate::puzzle::{Puzzle, Solution};
use crate::search::SolutionSearch;
use crate::semantic::{Card, Color, Die, DieFlag, Token};
use crate::{OnsetResult, OperationResult, ResourceLimits, Validator};
use layout::{available_pool, deal_cards, remaining_after, PoolComposition};
use random::RandomSource;
use templates::{catalogue, instantiate_template, Template};
use timeout::TimeoutTracker;
use tracing::{debug, trace, warn};

/// Generator settings
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub palette: Vec<Color>,
    pub pool: PoolComposition,
    /// Distractor dice added beyond the solution, capped by `max_dice`
    pub extra_dice: usize,
    /// Smallest acceptable goal
    pub min_goal: usize,
    /// Largest acceptable goal
    pub max_goal: usize,
    /// Reject puzzles with more distinct solutions than this
    pub max_solution_count: Option<usize>,
    /// Mark one solution die as required, wild or bonus (or none)
    pub assign_special_cube: bool,
    /// Reject a candidate whose goal and solution repeat an accepted puzzle
    pub reject_duplicate_goals: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            palette: Color::ALL.to_vec(),
            pool: PoolComposition::default(),
            extra_dice: 1,
            min_goal: 1,
            max_goal: 7,
            max_solution_count: None,
            assign_special_cube: true,
            reject_duplicate_goals: true,
        }
    }
}

/// Outcome of a generation batch
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub puzzles: Vec<Puzzle>,
    pub requested: usize,
    /// Attempts spent across the whole batch
    pub attempts: usize,
    /// Puzzles requested but not produced
    pub shortfall: usize,
    /// Whether the batch stopped on its time budget
    pub timed_out: bool,
}

/// How one batch slot ended
struct SlotOutcome {
    puzzle: Option<Puzzle>,
    attempts: usize,
    timed_out: bool,
}

/// Why a candidate was thrown away
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    TemplateInfeasible(&'static str),
    RestrictionFails,
    GoalOutOfRange(usize),
    Unsolvable,
    TooManySolutions(usize),
    DuplicateGoal(usize),
}

pub struct Generator<'a, E: SetEvaluator + ?Sized> {
    evaluator: &'a E,
    validator: Validator,
    limits: &'a ResourceLimits,
    config: GeneratorConfig,
    templates: Vec<Template>,
}

impl<'a, E: SetEvaluator + ?Sized> Generator<'a, E> {
    pub fn new(evaluator: &'a E, limits: &'a ResourceLimits, config: GeneratorConfig) -> Self {
        Self {
            evaluator,
            validator: Validator::new(),
            limits,
            config,
            templates: catalogue(),
        }
    }

    /// Replace the built-in template catalogue
    pub fn with_templates(mut self, templates: Vec<Template>) -> Self {
        self.templates = templates;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Fill a template from an available pool
    pub fn instantiate_template<R: RandomSource>(
        &self,
        template: &Template,
        available: &[Token],
        rng: &mut R,
    ) -> Option<SolutionTree> {
        instantiate_template(template, available, &self.validator, rng)
    }

    /// Evaluate an instantiated arrangement against a card layout
    pub fn evaluate_solution(
        &self,
        solution: &SolutionTree,
        cards: &[Card],
    ) -> OnsetResult<OperationResult> {
        let context = EvaluationContext::new(cards)?;
        Ok(self.evaluator.evaluate_solution(solution, &context))
    }

    /// Generate one puzzle, or `None` after `max_generation_attempts` failures
    pub fn generate_puzzle<R: RandomSource>(&self, rng: &mut R) -> OnsetResult<Option<Puzzle>> {
        let tracker = TimeoutTracker::new();
        Ok(self.generate_unique(rng, &[], &tracker)?.puzzle)
    }

    /// Generate up to `count` puzzles.
    ///
    /// Slots that run out of attempts are skipped and reported as shortfall;
    /// the batch stops early once the time budget is spent.
    pub fn generate_batch<R: RandomSource>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> OnsetResult<GenerationReport> {
        let tracker = TimeoutTracker::new();
        let mut puzzles = Vec::with_capacity(count);
        let mut attempts = 0;
        let mut timed_out = false;

        for slot in 0..count {
            if tracker.is_exhausted(self.limits) {
                timed_out = true;
                break;
            }
            let outcome = self.generate_unique(rng, &puzzles, &tracker)?;
            attempts += outcome.attempts;
            match outcome.puzzle {
                Some(puzzle) => puzzles.push(puzzle),
                None if outcome.timed_out => {
                    timed_out = true;
                    break;
                }
                None => warn!(
                    slot,
                    spent = outcome.attempts,
                    "no puzzle accepted within the attempt limit"
                ),
            }
        }

        let shortfall = count - puzzles.len();
        if shortfall > 0 {
            warn!(
                requested = count,
                produced = puzzles.len(),
                shortfall,
                timed_out,
                elapsed_ms = tracker.elapsed_ms(),
                "generation batch came back short"
            );
        }

        Ok(GenerationReport {
            puzzles,
            requested: count,
            attempts,
            shortfall,
            timed_out,
        })
    }

    fn generate_unique<R: RandomSource>(
        &self,
        rng: &mut R,
        accepted: &[Puzzle],
        tracker: &TimeoutTracker,
    ) -> OnsetResult<SlotOutcome> {
        let templates: Vec<&Template> = self
            .templates
            .iter()
            .filter(|t| self.fits_limits(t))
            .collect();

        for attempt in 1..=self.limits.max_generation_attempts {
            if tracker.is_exhausted(self.limits) {
                debug!(attempt, "time budget spent mid-slot");
                return Ok(SlotOutcome {
                    puzzle: None,
                    attempts: attempt - 1,
                    timed_out: true,
                });
            }
            match self.attempt(rng, &templates, accepted)? {
                Ok(puzzle) => {
                    debug!(
                        attempt,
                        goal = puzzle.goal,
                        solution = %puzzle.solution.canonical(),
                        solutions = puzzle.stats.total_solutions,
                        "puzzle accepted"
                    );
                    return Ok(SlotOutcome {
                        puzzle: Some(puzzle),
                        attempts: attempt,
                        timed_out: false,
                    });
                }
                Err(rejection) => trace!(attempt, ?rejection, "candidate rejected"),
            }
        }
        Ok(SlotOutcome {
            puzzle: None,
            attempts: self.limits.max_generation_attempts,
            timed_out: false,
        })
    }

    /// Templates whose dice count the search accepts under the current limits
    fn fits_limits(&self, template: &Template) -> bool {
        (self.limits.min_dice..=self.limits.max_dice).contains(&template.dice_count())
    }

    fn attempt<R: RandomSource>(
        &self,
        rng: &mut R,
        templates: &[&Template],
        accepted: &[Puzzle],
    ) -> OnsetResult<Result<Puzzle, Rejection>> {
        let cards = deal_cards(&self.config.palette, self.limits.card_count, rng);
        let available = available_pool(&self.config.pool, &self.config.palette, rng);

        let Some(template) = rng.choose(templates) else {
            return Ok(Err(Rejection::TemplateInfeasible(
                "no template fits the dice limits",
            )));
        };
        let Some(tree) = self.instantiate_template(template, &available, rng) else {
            return Ok(Err(Rejection::TemplateInfeasible(template.name)));
        };

        let goal = match self.evaluate_solution(&tree, &cards)? {
            OperationResult::Value(set) => set.len(),
            OperationResult::Veto(_) => return Ok(Err(Rejection::RestrictionFails)),
        };
        if goal < self.config.min_goal || goal > self.config.max_goal {
            return Ok(Err(Rejection::GoalOutOfRange(goal)));
        }

        let mut dice = generate_dice_from_solution(&tree);
        let solution_len = dice.len();
        // Distractors come out of what the pool has left, one die per token
        let mut spare = remaining_after(&available, &tree_tokens(&tree));
        let extra = self
            .config
            .extra_dice
            .min(self.limits.max_dice.saturating_sub(solution_len));
        for _ in 0..extra {
            if spare.is_empty() {
                break;
            }
            let index = rng.next_index(spare.len());
            dice.push(Die::new(spare.swap_remove(index)));
        }

        let search = SolutionSearch::new(self.evaluator, self.limits);
        let stats = search.count_all_solutions(&cards, &dice, goal, true)?;
        if stats.total_solutions == 0 {
            return Ok(Err(Rejection::Unsolvable));
        }
        if let Some(max) = self.config.max_solution_count {
            if stats.total_solutions > max {
                return Ok(Err(Rejection::TooManySolutions(stats.total_solutions)));
            }
        }

        let special = if self.config.assign_special_cube {
            assign_special_cube(&mut dice[..solution_len], rng)
        } else {
            None
        };

        let restriction_len = tree.restriction.as_ref().map_or(0, |r| r.tokens().len());
        let solution = Solution::new(
            dice[..restriction_len].to_vec(),
            dice[restriction_len..solution_len].to_vec(),
        );

        if self.config.reject_duplicate_goals
            && accepted
                .iter()
                .any(|p| p.goal == goal && p.solution.canonical() == solution.canonical())
        {
            return Ok(Err(Rejection::DuplicateGoal(goal)));
        }

        if let Some((index, flag)) = special {
            trace!(index, ?flag, "special cube assigned");
        }
        rng.shuffle(&mut dice);

        Ok(Ok(Puzzle {
            cards,
            dice,
            goal,
            solution,
            stats,
        }))
    }
}

fn tree_tokens(tree: &SolutionTree) -> Vec<Token> {
    let mut tokens = tree
        .restriction
        .as_ref()
        .map(|r| r.tokens())
        .unwrap_or_default();
    tokens.extend(tree.set_name.tokens());
    tokens
}

/// One die per token of the arrangement: restriction row first, then the
/// set-name row. A complemented operand gives its operand die followed by
/// the complement die.
pub fn generate_dice_from_solution(solution: &SolutionTree) -> Vec<Die> {
    let (mut dice, set_name) = solution.dice();
    dice.extend(set_name);
    dice
}

/// Pick one of {none, required, wild, bonus} uniformly; for anything but
/// none, flag a uniformly chosen die of `solution_dice`.
///
/// Returns the flagged index and the flag.
pub fn assign_special_cube<R: RandomSource>(
    solution_dice: &mut [Die],
    rng: &mut R,
) -> Option<(usize, DieFlag)> {
    const OUTCOMES: [Option<DieFlag>; 4] = [
        None,
        Some(DieFlag::Required),
        Some(DieFlag::Wild),
        Some(DieFlag::Bonus),
    ];

    let flag = OUTCOMES[rng.next_index(OUTCOMES.len())]?;
    if solution_dice.is_empty() {
        return None;
    }
    let index = rng.next_index(solution_dice.len());
    solution_dice[index].flag = Some(flag);
    Some((index, flag))
}
