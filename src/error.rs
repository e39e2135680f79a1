//! Error types for deck and codec operations.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

/// A suit display symbol that matches none of the four suits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no suit found for symbol \"{symbol}\"")]
pub struct UnknownSuitError {
    /// The symbol that failed to resolve.
    pub symbol: String,
}

/// Errors that can occur when mutating or comparing decks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// An equal card is already in the deck.
    #[error("duplicate card found in deck")]
    DuplicateCard,
    /// The deck has no cards to deal.
    #[error("cannot deal from an empty deck")]
    EmptyDeck,
    /// Degree-of-difference requires decks of equal size.
    #[error("deck sizes differ ({left} vs {right})")]
    LengthMismatch {
        /// Size of this deck.
        left: usize,
        /// Size of the other deck.
        right: usize,
    },
}

/// Errors that can occur when reading or writing the JSON interchange form.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The text is not a well-formed card or deck object.
    #[error("malformed interchange text: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The text is well-formed but names an unrecognized suit symbol.
    #[error(transparent)]
    UnknownSuit(#[from] UnknownSuitError),
}
