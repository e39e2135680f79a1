//! Card, suit, and color types.

extern crate alloc;

use alloc::string::{String, ToString};
use core::fmt;

use crate::error::UnknownSuitError;

/// The pips of a standard deck, in canonical order.
///
/// Pips are kept in text form so that `"10"` keeps its two-character
/// representation uniformly with the face cards.
pub const PIPS: [&str; 13] = [
    "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A",
];

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Card color, derived from the suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Hearts and diamonds.
    Red,
    /// Clubs and spades.
    Black,
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits, in canonical order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Human-readable suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "hearts",
            Self::Diamonds => "diamonds",
            Self::Clubs => "clubs",
            Self::Spades => "spades",
        }
    }

    /// Display symbol, as used in the interchange format.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Hearts => "\u{2665}",
            Self::Diamonds => "\u{2666}",
            Self::Clubs => "\u{2663}",
            Self::Spades => "\u{2660}",
        }
    }

    /// The color of the suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Hearts | Self::Diamonds => Color::Red,
            Self::Clubs | Self::Spades => Color::Black,
        }
    }

    /// Resolves a display symbol back to its suit.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownSuitError`] if the symbol matches none of the four
    /// suits.
    pub fn from_symbol(symbol: &str) -> Result<Self, UnknownSuitError> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.symbol() == symbol)
            .ok_or_else(|| UnknownSuitError {
                symbol: symbol.to_string(),
            })
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A playing card, identified by pip and suit.
///
/// Cards are immutable values; two cards are equal iff pip and suit are
/// both equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    /// The pip of the card (`"2"`-`"10"`, `"J"`, `"Q"`, `"K"`, `"A"`).
    pub pip: String,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the pip against [`PIPS`].
    /// Non-standard pips are accepted but rank below every standard card
    /// (see [`PipOnlyRanking`](crate::PipOnlyRanking)).
    #[must_use]
    pub fn new(pip: impl Into<String>, suit: Suit) -> Self {
        Self {
            pip: pip.into(),
            suit,
        }
    }

    /// Creates a new card from a pip and a suit display symbol.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownSuitError`] if the symbol matches none of the four
    /// suits.
    pub fn from_symbol(pip: impl Into<String>, symbol: &str) -> Result<Self, UnknownSuitError> {
        Ok(Self::new(pip, Suit::from_symbol(symbol)?))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pip, self.suit)
    }
}
