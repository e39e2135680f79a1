//! JSON interchange format for cards and decks.
//!
//! A card is an object with string fields `suit` (the suit's display
//! symbol) and `pip`; a deck is a list of such objects in bottom-to-top
//! deck order. `from_json(to_json(x))` reconstructs a value equal to `x`
//! for both types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::card::{Card, Suit};
use crate::deck::Deck;
use crate::error::CodecError;

/// Wire form of a card.
#[derive(Debug, Serialize, Deserialize)]
struct CardRepr {
    suit: String,
    pip: String,
}

impl From<&Card> for CardRepr {
    fn from(card: &Card) -> Self {
        Self {
            suit: card.suit.symbol().into(),
            pip: card.pip.clone(),
        }
    }
}

impl CardRepr {
    fn into_card(self) -> Result<Card, CodecError> {
        let suit = Suit::from_symbol(&self.suit)?;
        Ok(Card::new(self.pip, suit))
    }
}

impl Card {
    /// Serializes the card to its JSON interchange form.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Malformed`] if serialization fails.
    pub fn to_json(&self) -> Result<String, CodecError> {
        Ok(serde_json::to_string(&CardRepr::from(self))?)
    }

    /// Parses a card from its JSON interchange form.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Malformed`] if `text` is not a well-formed
    /// card object, or [`CodecError::UnknownSuit`] if the suit symbol
    /// matches none of the four suits.
    pub fn from_json(text: &str) -> Result<Self, CodecError> {
        let repr: CardRepr = serde_json::from_str(text)?;
        repr.into_card()
    }
}

impl Deck {
    /// Serializes the deck as a JSON list of cards, bottom to top.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Malformed`] if serialization fails.
    pub fn to_json(&self) -> Result<String, CodecError> {
        let reprs: Vec<CardRepr> = self.cards().iter().map(CardRepr::from).collect();
        Ok(serde_json::to_string(&reprs)?)
    }

    /// Parses a deck from a JSON list of cards, preserving order.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Malformed`] if `text` is not a well-formed
    /// card list, or [`CodecError::UnknownSuit`] if any embedded suit
    /// symbol matches none of the four suits.
    pub fn from_json(text: &str) -> Result<Self, CodecError> {
        let reprs: Vec<CardRepr> = serde_json::from_str(text)?;
        let mut deck = Self::empty();
        for repr in reprs {
            deck.push_unchecked(repr.into_card()?);
        }
        Ok(deck)
    }
}
