//! Pluggable card ranking rules.

use core::cmp::Ordering;

use crate::card::Card;

/// Rules for scoring and ordering cards.
///
/// Implementations supply [`score`](Ranking::score) and
/// [`ordinal`](Ranking::ordinal); [`winner`](Ranking::winner) is shared
/// behavior built on the ordinal. Game variants with other rules (for
/// example suit-sensitive trumps) plug in by implementing the same two
/// operations.
pub trait Ranking {
    /// Point value of the card, used when calculating points at the end of
    /// a round.
    fn score(&self, card: &Card) -> u8;

    /// Rank number of the card, used for comparing it with other cards.
    fn ordinal(&self, card: &Card) -> u8;

    /// Returns whichever card has the strictly greater ordinal, or `None`
    /// if the two are ranked equal.
    fn winner<'a>(&self, card1: &'a Card, card2: &'a Card) -> Option<&'a Card> {
        match self.ordinal(card1).cmp(&self.ordinal(card2)) {
            Ordering::Greater => Some(card1),
            Ordering::Less => Some(card2),
            Ordering::Equal => None,
        }
    }
}

/// Standard-deck ranking based on the pip alone, ignoring suit.
///
/// Aces can be made high or low. Non-standard pips rank and score 0,
/// strictly below every standard card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipOnlyRanking {
    /// Whether aces rank above kings rather than below twos.
    pub aces_high: bool,
}

impl PipOnlyRanking {
    /// Creates a ranking with the given ace rule.
    #[must_use]
    pub const fn new(aces_high: bool) -> Self {
        Self { aces_high }
    }
}

impl Default for PipOnlyRanking {
    fn default() -> Self {
        Self { aces_high: true }
    }
}

impl Ranking for PipOnlyRanking {
    /// Scores cap at 11: face cards and an ace-high ace all count 11
    /// points, while ordinals keep 11-14 for strict ordering.
    fn score(&self, card: &Card) -> u8 {
        match card.pip.as_str() {
            "J" | "Q" | "K" => 11,
            "A" => {
                if self.aces_high {
                    11
                } else {
                    1
                }
            }
            pip => pip.parse().unwrap_or(0),
        }
    }

    fn ordinal(&self, card: &Card) -> u8 {
        match card.pip.as_str() {
            "J" => 11,
            "Q" => 12,
            "K" => 13,
            "A" => {
                if self.aces_high {
                    14
                } else {
                    1
                }
            }
            pip => pip.parse().unwrap_or(0),
        }
    }
}
