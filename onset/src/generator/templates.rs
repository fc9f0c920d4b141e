//! Template catalogue and instantiation
//!
//! A template is a pattern of token slots for the restriction row and the
//! set-name row. Instantiating it draws concrete tokens from an available
//! pool, never using a pool token twice.

use super::random::RandomSource;
use crate::ast::SolutionTree;
use crate::semantic::{Comparator, SetConstant, SetOperator, Token};
use crate::Validator;

/// One position of a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    AnyColor,
    /// Color or set constant
    AnyOperand,
    AnyConstant,
    Constant(SetConstant),
    AnyOperator,
    Operator(SetOperator),
    Complement,
    AnyComparator,
    Comparator(Comparator),
}

impl Slot {
    pub fn accepts(&self, token: &Token) -> bool {
        match (self, token) {
            (Slot::AnyColor, Token::Color(_)) => true,
            (Slot::AnyOperand, t) => t.is_operand(),
            (Slot::AnyConstant, Token::Constant(_)) => true,
            (Slot::Constant(c), Token::Constant(t)) => c == t,
            (Slot::AnyOperator, Token::Operator(_)) => true,
            (Slot::Operator(op), Token::Operator(t)) => op == t,
            (Slot::Complement, Token::Complement) => true,
            (Slot::AnyComparator, Token::Restriction(_)) => true,
            (Slot::Comparator(c), Token::Restriction(t)) => c == t,
            _ => false,
        }
    }

    /// Fill order: fixed tokens first, wildcards that overlap others last,
    /// so a broad slot never takes the only token a narrow slot could use.
    fn fill_rank(&self) -> u8 {
        match self {
            Slot::Constant(_) | Slot::Operator(_) | Slot::Complement | Slot::Comparator(_) => 0,
            Slot::AnyColor | Slot::AnyConstant | Slot::AnyOperator | Slot::AnyComparator => 1,
            Slot::AnyOperand => 2,
        }
    }
}

/// Abstract arrangement pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub name: &'static str,
    /// Empty for templates without a restriction row
    pub restriction: &'static [Slot],
    pub set_name: &'static [Slot],
}

impl Template {
    pub fn has_restriction(&self) -> bool {
        !self.restriction.is_empty()
    }

    pub fn dice_count(&self) -> usize {
        self.restriction.len() + self.set_name.len()
    }
}

/// The built-in catalogue
pub fn catalogue() -> Vec<Template> {
    vec![
        Template {
            name: "complemented color",
            restriction: &[],
            set_name: &[Slot::AnyColor, Slot::Complement],
        },
        Template {
            name: "two colors",
            restriction: &[],
            set_name: &[Slot::AnyColor, Slot::AnyOperator, Slot::AnyColor],
        },
        Template {
            name: "color with complemented color",
            restriction: &[],
            set_name: &[Slot::AnyColor, Slot::AnyOperator, Slot::AnyColor, Slot::Complement],
        },
        Template {
            name: "complement intersection",
            restriction: &[],
            set_name: &[
                Slot::AnyColor,
                Slot::Complement,
                Slot::Operator(SetOperator::Intersection),
                Slot::AnyColor,
            ],
        },
        Template {
            name: "three colors",
            restriction: &[],
            set_name: &[
                Slot::AnyColor,
                Slot::AnyOperator,
                Slot::AnyColor,
                Slot::AnyOperator,
                Slot::AnyColor,
            ],
        },
        Template {
            name: "universe minus",
            restriction: &[],
            set_name: &[
                Slot::Constant(SetConstant::Universe),
                Slot::Operator(SetOperator::Difference),
                Slot::AnyColor,
                Slot::AnyOperator,
                Slot::AnyColor,
            ],
        },
        Template {
            name: "operand chain",
            restriction: &[],
            set_name: &[
                Slot::AnyOperand,
                Slot::AnyOperator,
                Slot::AnyColor,
                Slot::Complement,
                Slot::AnyOperator,
                Slot::AnyColor,
            ],
        },
        Template {
            name: "restricted pair",
            restriction: &[Slot::AnyColor, Slot::AnyComparator, Slot::AnyColor],
            set_name: &[Slot::AnyColor, Slot::AnyOperator, Slot::AnyColor],
        },
        Template {
            name: "restricted complement",
            restriction: &[
                Slot::AnyColor,
                Slot::Comparator(Comparator::SubsetOf),
                Slot::AnyColor,
                Slot::Complement,
            ],
            set_name: &[Slot::AnyColor, Slot::AnyOperator, Slot::AnyColor],
        },
        Template {
            name: "disjoint colors",
            restriction: &[
                Slot::AnyColor,
                Slot::Operator(SetOperator::Intersection),
                Slot::AnyColor,
                Slot::Comparator(Comparator::Equals),
                Slot::Constant(SetConstant::EmptySet),
            ],
            set_name: &[Slot::AnyColor],
        },
        Template {
            name: "constant restriction",
            restriction: &[Slot::AnyColor, Slot::AnyComparator, Slot::AnyConstant],
            set_name: &[Slot::AnyColor, Slot::AnyOperator, Slot::AnyColor],
        },
    ]
}

/// Fill a template's slots from `available`.
///
/// Returns `None` when the pool cannot supply enough tokens of some kind.
pub fn instantiate_template<R: RandomSource>(
    template: &Template,
    available: &[Token],
    validator: &Validator,
    rng: &mut R,
) -> Option<SolutionTree> {
    let slots: Vec<Slot> = template
        .restriction
        .iter()
        .chain(template.set_name.iter())
        .copied()
        .collect();

    let mut order: Vec<usize> = (0..slots.len()).collect();
    order.sort_by_key(|&i| slots[i].fill_rank());

    let mut remaining = available.to_vec();
    let mut filled: Vec<Option<Token>> = vec![None; slots.len()];
    for i in order {
        let candidates: Vec<usize> = remaining
            .iter()
            .enumerate()
            .filter(|(_, t)| slots[i].accepts(t))
            .map(|(pos, _)| pos)
            .collect();
        let pos = *rng.choose(&candidates)?;
        filled[i] = Some(remaining.swap_remove(pos));
    }

    let tokens: Vec<Token> = filled.into_iter().collect::<Option<Vec<_>>>()?;
    let (restriction_tokens, set_name_tokens) = tokens.split_at(template.restriction.len());

    let restriction = if template.has_restriction() {
        Some(validator.parse_restriction(restriction_tokens)?)
    } else {
        None
    };
    let set_name = validator.parse_expression(set_name_tokens)?;

    Some(SolutionTree {
        restriction,
        set_name,
    })
}
