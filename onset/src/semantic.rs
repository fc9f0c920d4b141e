use crate::OnsetError;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Postfix complement marker as printed on the die
pub const COMPLEMENT_SYMBOL: &str = "′";

/// Card and die colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
    Gold,
}

impl Color {
    /// The full palette, in bit order
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Gold];

    pub fn name(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Gold => "gold",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Color::Red => 0,
            Color::Blue => 1,
            Color::Green => 2,
            Color::Gold => 3,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Color {
    type Err = OnsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .iter()
            .copied()
            .find(|c| c.name() == s)
            .ok_or_else(|| OnsetError::Parse(format!("Unknown color '{}'", s)))
    }
}

/// Binary set operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SetOperator {
    Union,
    Intersection,
    Difference,
}

impl SetOperator {
    pub const ALL: [SetOperator; 3] = [
        SetOperator::Union,
        SetOperator::Intersection,
        SetOperator::Difference,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            SetOperator::Union => "∪",
            SetOperator::Intersection => "∩",
            SetOperator::Difference => "−",
        }
    }

    /// Returns a human-readable name for the operator
    pub fn name(&self) -> &'static str {
        match self {
            SetOperator::Union => "union",
            SetOperator::Intersection => "intersection",
            SetOperator::Difference => "difference",
        }
    }
}

/// Set constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SetConstant {
    Universe,
    EmptySet,
}

impl SetConstant {
    pub const ALL: [SetConstant; 2] = [SetConstant::Universe, SetConstant::EmptySet];

    pub fn symbol(&self) -> &'static str {
        match self {
            SetConstant::Universe => "U",
            SetConstant::EmptySet => "∅",
        }
    }
}

/// Restriction comparators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Comparator {
    Equals,
    SubsetOf,
}

impl Comparator {
    pub const ALL: [Comparator; 2] = [Comparator::Equals, Comparator::SubsetOf];

    pub fn symbol(&self) -> &'static str {
        match self {
            Comparator::Equals => "=",
            Comparator::SubsetOf => "⊆",
        }
    }
}

/// The face of a die
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Token {
    Color(Color),
    Operator(SetOperator),
    Complement,
    Constant(SetConstant),
    Restriction(Comparator),
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Color(_) => TokenKind::Color,
            Token::Operator(_) => TokenKind::Operator,
            Token::Complement => TokenKind::Complement,
            Token::Constant(_) => TokenKind::SetConstant,
            Token::Restriction(_) => TokenKind::Restriction,
        }
    }

    /// Colors and set constants can stand alone as a set
    pub fn is_operand(&self) -> bool {
        matches!(self, Token::Color(_) | Token::Constant(_))
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Token::Color(c) => c.name(),
            Token::Operator(op) => op.symbol(),
            Token::Complement => COMPLEMENT_SYMBOL,
            Token::Constant(c) => c.symbol(),
            Token::Restriction(r) => r.symbol(),
        }
    }

    /// Every distinct face a die can show
    pub fn all() -> Vec<Token> {
        let mut tokens: Vec<Token> = Color::ALL.iter().map(|c| Token::Color(*c)).collect();
        tokens.extend(SetOperator::ALL.iter().map(|op| Token::Operator(*op)));
        tokens.push(Token::Complement);
        tokens.extend(SetConstant::ALL.iter().map(|c| Token::Constant(*c)));
        tokens.extend(Comparator::ALL.iter().map(|r| Token::Restriction(*r)));
        tokens
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Token {
    type Err = OnsetError;

    /// Accepts the printed symbols plus the ASCII aliases `-` and `'`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = match s {
            "∪" => Token::Operator(SetOperator::Union),
            "∩" => Token::Operator(SetOperator::Intersection),
            "−" | "-" => Token::Operator(SetOperator::Difference),
            "′" | "'" => Token::Complement,
            "U" => Token::Constant(SetConstant::Universe),
            "∅" => Token::Constant(SetConstant::EmptySet),
            "=" => Token::Restriction(Comparator::Equals),
            "⊆" => Token::Restriction(Comparator::SubsetOf),
            other => Token::Color(other.parse()?),
        };
        Ok(token)
    }
}

/// Token category, as written in puzzle records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Color,
    Operator,
    Complement,
    SetConstant,
    Restriction,
}

/// Puzzle metadata attached to at most one die
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DieFlag {
    Required,
    Wild,
    Bonus,
}

/// A die in the pool
///
/// The flag does not take part in evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDie", into = "RawDie")]
pub struct Die {
    pub token: Token,
    pub flag: Option<DieFlag>,
}

impl Die {
    pub fn new(token: Token) -> Self {
        Self { token, flag: None }
    }

    pub fn with_flag(mut self, flag: DieFlag) -> Self {
        self.flag = Some(flag);
        self
    }

    pub fn value(&self) -> &'static str {
        self.token.symbol()
    }
}

impl From<Token> for Die {
    fn from(token: Token) -> Self {
        Die::new(token)
    }
}

#[derive(Serialize, Deserialize)]
struct RawDie {
    #[serde(rename = "type")]
    kind: TokenKind,
    value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    flag: Option<DieFlag>,
}

impl TryFrom<RawDie> for Die {
    type Error = OnsetError;

    fn try_from(raw: RawDie) -> Result<Self, Self::Error> {
        let token: Token = raw.value.parse()?;
        if token.kind() != raw.kind {
            return Err(OnsetError::Parse(format!(
                "Die value '{}' does not match type {:?}",
                raw.value, raw.kind
            )));
        }
        Ok(Die {
            token,
            flag: raw.flag,
        })
    }
}

impl From<Die> for RawDie {
    fn from(die: Die) -> Self {
        RawDie {
            kind: die.token.kind(),
            value: die.token.symbol().to_string(),
            flag: die.flag,
        }
    }
}

/// A card showing a set of colors
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Card {
    pub colors: BTreeSet<Color>,
}

impl Card {
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Self {
        Self {
            colors: colors.into_iter().collect(),
        }
    }

    pub fn has(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }
}

/// A set of card indices
///
/// Backed by a bitmask; index `i` refers to the `i`-th card of the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CardSet(u32);

impl CardSet {
    /// Largest number of cards a set can address
    pub const CAPACITY: usize = 32;

    pub fn empty() -> Self {
        CardSet(0)
    }

    /// All indices below `card_count`
    pub fn universe(card_count: usize) -> Self {
        debug_assert!(card_count <= Self::CAPACITY);
        if card_count >= Self::CAPACITY {
            CardSet(u32::MAX)
        } else {
            CardSet((1u32 << card_count) - 1)
        }
    }

    pub fn from_bits(bits: u32) -> Self {
        CardSet(bits)
    }

    pub fn bits(&self) -> u32 {
        self.0
    }

    pub fn insert(&mut self, index: usize) {
        debug_assert!(index < Self::CAPACITY);
        self.0 |= 1 << index;
    }

    pub fn contains(&self, index: usize) -> bool {
        index < Self::CAPACITY && self.0 & (1 << index) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn union(self, other: CardSet) -> CardSet {
        CardSet(self.0 | other.0)
    }

    pub fn intersection(self, other: CardSet) -> CardSet {
        CardSet(self.0 & other.0)
    }

    pub fn difference(self, other: CardSet) -> CardSet {
        CardSet(self.0 & !other.0)
    }

    /// Everything in `universe` that is not in `self`
    pub fn complement(self, universe: CardSet) -> CardSet {
        universe.difference(self)
    }

    pub fn is_subset_of(&self, other: &CardSet) -> bool {
        self.0 & !other.0 == 0
    }

    /// Indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..Self::CAPACITY).filter(move |i| self.contains(*i))
    }
}

impl FromIterator<usize> for CardSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = CardSet::empty();
        for index in iter {
            set.insert(index);
        }
        set
    }
}

impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indices: Vec<String> = self.iter().map(|i| i.to_string()).collect();
        write!(f, "{{{}}}", indices.join(", "))
    }
}

impl Serialize for CardSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
