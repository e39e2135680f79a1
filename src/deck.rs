//! Deck construction, positional insert and deal, and shuffling.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, PIPS, Suit};
use crate::error::DeckError;

/// An ordered deck of unique cards.
///
/// The deck is a LIFO stack: index 0 is the bottom and the last card is the
/// top, the next card to deal. No two cards in a deck may be equal, and
/// every mutating operation either fully succeeds or leaves the deck
/// unchanged and reports the failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Cards in the deck, bottom to top.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full 52-card deck in pip-major, suit-minor order.
    #[must_use]
    pub fn full() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for pip in PIPS {
            for suit in Suit::ALL {
                cards.push(Card::new(pip, suit));
            }
        }
        Self { cards }
    }

    /// Creates an empty deck.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards in deck order, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the deck contains a card equal to `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Inserts a card at the bottom of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DuplicateCard`] if an equal card is already in
    /// the deck; the deck is left unchanged.
    pub fn insert(&mut self, card: Card) -> Result<(), DeckError> {
        self.insert_at(card, 0)
    }

    /// Inserts a card at the given position, shifting the cards above it up
    /// by one. Position 0 is the bottom; a position beyond the top appends
    /// at the top.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DuplicateCard`] if an equal card is already in
    /// the deck; the deck is left unchanged.
    pub fn insert_at(&mut self, card: Card, position: usize) -> Result<(), DeckError> {
        if self.cards.contains(&card) {
            return Err(DeckError::DuplicateCard);
        }
        let position = position.min(self.cards.len());
        self.cards.insert(position, card);
        Ok(())
    }

    /// Deals the top card of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if the deck has no cards.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::EmptyDeck)
    }

    /// Deals the card at the given position. Position 0 is the bottom; a
    /// position beyond the top deals the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if the deck has no cards.
    pub fn deal_at(&mut self, position: usize) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::EmptyDeck);
        }
        let position = position.min(self.cards.len() - 1);
        Ok(self.cards.remove(position))
    }

    /// Shuffles the deck in place.
    ///
    /// Each of the deck's cards is in turn removed from the top and spliced
    /// back in at a uniformly random position among the remaining cards. A
    /// deck of zero or one card is left as-is.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for _ in 0..self.cards.len() {
            let Some(card) = self.cards.pop() else {
                break;
            };
            if self.cards.is_empty() {
                self.cards.push(card);
                break;
            }
            let position = rng.random_range(0..self.cards.len());
            self.cards.insert(position, card);
        }
    }

    /// Shuffles the deck with a deterministic generator seeded from `seed`.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle(&mut rng);
    }

    /// Counts the positions at which this deck and `other` hold differing
    /// cards, as a shuffle-quality metric against a prior snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::LengthMismatch`] if the decks differ in size.
    pub fn degree_of_difference(&self, other: &Self) -> Result<usize, DeckError> {
        if self.cards.len() != other.cards.len() {
            return Err(DeckError::LengthMismatch {
                left: self.cards.len(),
                right: other.cards.len(),
            });
        }
        Ok(self
            .cards
            .iter()
            .zip(&other.cards)
            .filter(|(ours, theirs)| ours != theirs)
            .count())
    }

    /// Appends a card at the top without the duplicate scan. Only used
    /// when rebuilding a deck from its serialized form.
    pub(crate) fn push_unchecked(&mut self, card: Card) {
        self.cards.push(card);
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
