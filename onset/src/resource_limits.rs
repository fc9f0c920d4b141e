/// Shape limits and search/generation budgets
///
/// The card and dice bounds are game-design constants; the search engine
/// rejects inputs outside them as malformed. The generation budgets keep the
/// generator's retry loop finite.
#[derive(Debug, Clone)]
pub struct ResourceLimits {
    /// Number of cards every puzzle deals
    pub card_count: usize,

    /// Smallest dice pool the search accepts
    /// Every searched arrangement has at least two dice
    pub min_dice: usize,

    /// Largest dice pool the search accepts
    /// Search cost grows as `2^n · n!`, so this must stay small
    pub max_dice: usize,

    /// Attempts allowed per generated puzzle before giving up on it
    pub max_generation_attempts: usize,

    /// Wall-clock budget for one generation batch in milliseconds
    pub max_generation_time_ms: u64,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            card_count: 8,
            min_dice: 2,
            max_dice: 8,
            max_generation_attempts: 500,
            max_generation_time_ms: 30_000, // 30 seconds
        }
    }
}

impl ResourceLimits {
    /// Create a new ResourceLimits with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a card layout and dice pool against the shape limits
    pub fn check_shape(&self, card_count: usize, dice_count: usize) -> crate::OnsetResult<()> {
        if card_count != self.card_count {
            return Err(crate::OnsetError::malformed(format!(
                "expected {} cards, got {}",
                self.card_count, card_count
            )));
        }
        if dice_count < self.min_dice {
            return Err(crate::OnsetError::malformed(format!(
                "dice pool has {} dice, at least {} required",
                dice_count, self.min_dice
            )));
        }
        if dice_count > self.max_dice {
            return Err(crate::OnsetError::malformed(format!(
                "dice pool has {} dice, at most {} allowed",
                dice_count, self.max_dice
            )));
        }
        Ok(())
    }
}
