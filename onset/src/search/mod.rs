//! Brute-force solution search
//!
//! Enumerates arrangements of a dice pool and reports those whose set-name
//! row matches exactly `goal` cards:
//! 1. For each subset size k from 2 up to the pool size, take every k-combination
//! 2. Try every ordering of the combination as a plain set-name row
//! 3. For k ≥ 3, also split the combination into a restriction row and a
//!    set-name row and try every ordering of each side
//!
//! Pools are at most eight dice, so the `2^n · n!` worst case stays bounded.
//! Groups of dice whose token counts can never form a valid row are skipped
//! before permuting, and orderings that only swap equal tokens are generated once.

pub mod canonical;
pub mod combinatorics;
pub mod pruning;

use crate::evaluator::{EvaluationContext, SetEvaluator};
use crate::puzzle::Solution;
use crate::semantic::{Card, Die, Token};
use crate::{OnsetResult, ResourceLimits};
use canonical::SolutionLedger;
use combinatorics::{combinations, next_permutation_by};
use pruning::RowShape;
use serde::Serialize;
use std::ops::ControlFlow;
use tracing::debug;

/// Aggregate over all distinct solutions of a puzzle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionStats {
    pub total_solutions: usize,
    pub shortest_cube_count: Option<usize>,
    pub longest_cube_count: Option<usize>,
}

/// Search over arrangements of a dice pool
///
/// Row evaluation goes through the injected [`SetEvaluator`]; the search only
/// uses its `evaluate_set_name` and `restriction_holds` primitives.
pub struct SolutionSearch<'a, E: SetEvaluator + ?Sized> {
    evaluator: &'a E,
    limits: &'a ResourceLimits,
}

type Row<'d> = Vec<&'d Die>;

impl<'a, E: SetEvaluator + ?Sized> SolutionSearch<'a, E> {
    pub fn new(evaluator: &'a E, limits: &'a ResourceLimits) -> Self {
        Self { evaluator, limits }
    }

    /// First solution with the fewest dice.
    ///
    /// Among equally short solutions the one returned is whichever the
    /// enumeration reaches first; callers must not rely on which one that is.
    pub fn find_shortest_solution(
        &self,
        cards: &[Card],
        dice: &[Die],
        goal: usize,
    ) -> OnsetResult<Option<Solution>> {
        let context = self.prepare(cards, dice)?;

        let mut found = None;
        let _ = self.enumerate(&context, dice, goal, |restriction, set_name| {
            found = Some(to_solution(restriction, set_name));
            ControlFlow::Break(())
        });

        debug!(
            dice = dice.len(),
            goal,
            cubes = ?found.as_ref().map(Solution::cube_count),
            "shortest solution search finished"
        );
        Ok(found)
    }

    /// Count distinct solutions.
    ///
    /// With `allow_complement_die` false, complement dice are removed from the
    /// pool first.
    pub fn count_all_solutions(
        &self,
        cards: &[Card],
        dice: &[Die],
        goal: usize,
        allow_complement_die: bool,
    ) -> OnsetResult<SolutionStats> {
        let context = self.prepare(cards, dice)?;
        let pool = pool_for(dice, allow_complement_die);

        let mut ledger = SolutionLedger::new();
        let _ = self.enumerate(&context, &pool, goal, |restriction, set_name| {
            ledger.record(&tokens_of(restriction), &tokens_of(set_name));
            ControlFlow::Continue(())
        });

        let stats = SolutionStats {
            total_solutions: ledger.len(),
            shortest_cube_count: ledger.shortest(),
            longest_cube_count: ledger.longest(),
        };
        debug!(
            dice = pool.len(),
            goal,
            allow_complement_die,
            total = stats.total_solutions,
            "solution count finished"
        );
        Ok(stats)
    }

    /// All distinct solutions, in enumeration order
    pub fn all_solutions(
        &self,
        cards: &[Card],
        dice: &[Die],
        goal: usize,
    ) -> OnsetResult<Vec<Solution>> {
        let context = self.prepare(cards, dice)?;

        let mut ledger = SolutionLedger::new();
        let mut solutions = Vec::new();
        let _ = self.enumerate(&context, dice, goal, |restriction, set_name| {
            if ledger.record(&tokens_of(restriction), &tokens_of(set_name)) {
                solutions.push(to_solution(restriction, set_name));
            }
            ControlFlow::Continue(())
        });
        Ok(solutions)
    }

    /// Whether any arrangement reaches the goal; stops at the first hit
    pub fn has_possible_solution(
        &self,
        cards: &[Card],
        dice: &[Die],
        goal: usize,
    ) -> OnsetResult<bool> {
        let context = self.prepare(cards, dice)?;
        let flow = self.enumerate(&context, dice, goal, |_, _| ControlFlow::Break(()));
        Ok(flow.is_break())
    }

    /// True when the puzzle has solutions, but none without the complement die
    pub fn complement_is_required(
        &self,
        cards: &[Card],
        dice: &[Die],
        goal: usize,
    ) -> OnsetResult<bool> {
        self.limits.check_shape(cards.len(), dice.len())?;
        if !dice.iter().any(|d| d.token == Token::Complement) {
            return Ok(false);
        }
        let with = self.count_all_solutions(cards, dice, goal, true)?;
        if with.total_solutions == 0 {
            return Ok(false);
        }
        let without = self.count_all_solutions(cards, dice, goal, false)?;
        Ok(without.total_solutions == 0)
    }

    fn prepare(&self, cards: &[Card], dice: &[Die]) -> OnsetResult<EvaluationContext> {
        self.limits.check_shape(cards.len(), dice.len())?;
        EvaluationContext::new(cards)
    }

    /// Calls `visit` for every matching arrangement, in order of increasing
    /// size. Duplicates are not filtered here.
    fn enumerate<'d, F>(
        &self,
        context: &EvaluationContext,
        dice: &'d [Die],
        goal: usize,
        mut visit: F,
    ) -> ControlFlow<()>
    where
        F: FnMut(&[&'d Die], &[&'d Die]) -> ControlFlow<()>,
    {
        for k in 2..=dice.len() {
            for combo in combinations(dice.len(), k) {
                let members: Row<'d> = combo.iter().map(|&i| &dice[i]).collect();

                if self.visit_plain(context, &members, goal, &mut visit).is_break() {
                    return ControlFlow::Break(());
                }
                if k >= 3 && self.visit_splits(context, &members, goal, &mut visit).is_break() {
                    return ControlFlow::Break(());
                }
            }
        }
        ControlFlow::Continue(())
    }

    /// Every ordering of `members` as a set-name row without restriction
    fn visit_plain<'d, F>(
        &self,
        context: &EvaluationContext,
        members: &[&'d Die],
        goal: usize,
        visit: &mut F,
    ) -> ControlFlow<()>
    where
        F: FnMut(&[&'d Die], &[&'d Die]) -> ControlFlow<()>,
    {
        if !RowShape::of(members.iter().copied()).can_form_set_name() {
            return ControlFlow::Continue(());
        }

        for row in self.matching_set_names(context, members, goal) {
            if visit(&[], &row).is_break() {
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    /// Every split of `members` into a restriction row (2..k−1 dice) and a
    /// set-name row, with every ordering of each side
    fn visit_splits<'d, F>(
        &self,
        context: &EvaluationContext,
        members: &[&'d Die],
        goal: usize,
        visit: &mut F,
    ) -> ControlFlow<()>
    where
        F: FnMut(&[&'d Die], &[&'d Die]) -> ControlFlow<()>,
    {
        let k = members.len();
        for r in 2..k {
            for picked in combinations(k, r) {
                let restriction: Row<'d> = picked.iter().map(|&i| members[i]).collect();
                let set_name: Row<'d> = (0..k)
                    .filter(|i| !picked.contains(i))
                    .map(|i| members[i])
                    .collect();

                if !RowShape::of(restriction.iter().copied()).can_form_restriction()
                    || !RowShape::of(set_name.iter().copied()).can_form_set_name()
                {
                    continue;
                }

                // The set-name side decides the goal on its own, so settle it
                // before trying restriction orderings.
                let set_names = self.matching_set_names(context, &set_name, goal);
                if set_names.is_empty() {
                    continue;
                }

                for restriction_row in self.holding_restrictions(context, &restriction) {
                    for set_name_row in &set_names {
                        if visit(&restriction_row, set_name_row).is_break() {
                            return ControlFlow::Break(());
                        }
                    }
                }
            }
        }
        ControlFlow::Continue(())
    }

    /// Orderings of `members` that are valid set-name rows matching `goal` cards
    fn matching_set_names<'d>(
        &self,
        context: &EvaluationContext,
        members: &[&'d Die],
        goal: usize,
    ) -> Vec<Row<'d>> {
        let mut rows = Vec::new();
        for_each_ordering(members, |row, tokens| {
            if let Some(set) = self.evaluator.evaluate_set_name(tokens, context) {
                if set.len() == goal {
                    rows.push(row.to_vec());
                }
            }
        });
        rows
    }

    /// Orderings of `members` that are valid restriction rows that hold
    fn holding_restrictions<'d>(
        &self,
        context: &EvaluationContext,
        members: &[&'d Die],
    ) -> Vec<Row<'d>> {
        let mut rows = Vec::new();
        for_each_ordering(members, |row, tokens| {
            if self.evaluator.restriction_holds(tokens, context) == Some(true) {
                rows.push(row.to_vec());
            }
        });
        rows
    }
}

/// Visit each distinct token ordering of `members` once
fn for_each_ordering<'d, F>(members: &[&'d Die], mut f: F)
where
    F: FnMut(&[&'d Die], &[Token]),
{
    let mut row: Row<'d> = members.to_vec();
    row.sort_by(|a, b| a.token.cmp(&b.token));
    let mut tokens: Vec<Token> = Vec::with_capacity(row.len());

    loop {
        tokens.clear();
        tokens.extend(row.iter().map(|d| d.token));
        f(&row, &tokens);

        if !next_permutation_by(&mut row, |a, b| a.token.cmp(&b.token)) {
            break;
        }
    }
}

fn pool_for(dice: &[Die], allow_complement_die: bool) -> Vec<Die> {
    dice.iter()
        .filter(|d| allow_complement_die || d.token != Token::Complement)
        .cloned()
        .collect()
}

fn tokens_of(row: &[&Die]) -> Vec<Token> {
    row.iter().map(|d| d.token).collect()
}

fn to_solution(restriction: &[&Die], set_name: &[&Die]) -> Solution {
    Solution::new(
        restriction.iter().map(|d| (*d).clone()).collect(),
        set_name.iter().map(|d| (*d).clone()).collect(),
    )
}
